// Core logic exports
pub mod analytics;
pub mod chatbot;
pub mod classifier;
pub mod explain;
pub mod predictor;
pub mod preprocess;

pub use chatbot::{Chatbot, Reply};
pub use classifier::{LogisticModel, ModelError, RiskClassifier};
pub use explain::top_features;
pub use predictor::Predictor;
pub use preprocess::{preprocess, Preprocessed};
