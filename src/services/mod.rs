// Service exports
pub mod dataset;
pub mod model_store;

pub use dataset::{Dataset, DataSource, DatasetError, generate_synthetic, load_csv};
pub use model_store::load_model;
