// Route exports
pub mod chatbot;
pub mod dashboard;
pub mod errors;
pub mod pages;
pub mod predict;

use crate::core::{Chatbot, Predictor};
use crate::services::Dataset;
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when the model failed to load at startup
    pub predictor: Option<Predictor>,
    pub chatbot: Chatbot,
    pub dataset: Arc<Dataset>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure).service(
        web::scope("/api/v1")
            .configure(predict::configure)
            .configure(chatbot::configure)
            .configure(dashboard::configure),
    );
}

/// Register the JSON, form and query error handlers used by every app instance
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(errors::handle_json_payload_error))
        .app_data(web::FormConfig::default().error_handler(errors::handle_form_payload_error))
        .app_data(web::QueryConfig::default().error_handler(errors::handle_query_payload_error));
}
