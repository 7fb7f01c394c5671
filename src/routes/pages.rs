use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");
const CHATBOT_JS: &str = include_str!("../../static/chatbot.js");

/// Configure the browser-facing pages
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/dashboard", web::get().to(dashboard))
        .route("/static/chatbot.js", web::get().to(chatbot_script));
}

/// Prediction form with the chat widget
async fn index() -> impl Responder {
    HttpResponse::Ok().content_type(ContentType::html()).body(INDEX_HTML)
}

/// Analytics dashboard, rendered client-side from the dashboard API
async fn dashboard() -> impl Responder {
    HttpResponse::Ok().content_type(ContentType::html()).body(DASHBOARD_HTML)
}

async fn chatbot_script() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(CHATBOT_JS)
}
