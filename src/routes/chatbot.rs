use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::routes::AppState;

/// Configure chatbot routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chatbot", web::post().to(chat));
}

/// Chatbot endpoint
///
/// POST /api/v1/chatbot
///
/// Request body:
/// ```json
/// { "message": "What are the symptoms of a stroke?" }
/// ```
async fn chat(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let reply = state.chatbot.reply(&req.message);
    tracing::debug!("Chatbot reply to {} chars ({} suggestions)", req.message.len(), reply.suggestions.len());

    HttpResponse::Ok().json(ChatResponse {
        response: reply.text,
        suggestions: reply.suggestions,
    })
}
