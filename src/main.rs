use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use stroke_assist::config::Settings;
use stroke_assist::core::{Chatbot, Predictor};
use stroke_assist::routes::{self, AppState};
use stroke_assist::services::{load_model, Dataset};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `LOG_LEVEL` takes precedence over the configured level so operators can
/// raise verbosity without touching config files.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(level));
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| format.to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    match &settings {
        Ok(s) => init_logging(&s.logging.level, &s.logging.format),
        Err(_) => init_logging("info", "compact"),
    }

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Starting StrokeAssist service...");

    // A missing or broken model keeps the service up; predictions answer 503
    let predictor = match load_model(&settings.model.path) {
        Ok(model) => Some(Predictor::new(
            Arc::new(model),
            settings.model.risk_threshold,
            settings.model.top_features,
        )),
        Err(e) => {
            error!("Error loading model from {}: {}", settings.model.path.display(), e);
            warn!("Serving without a model, prediction requests will fail");
            None
        }
    };

    if let Some(p) = &predictor {
        info!("Predictor initialized: {:?}", p);
    }

    let dashboard = settings.dashboard.clone();
    let dataset = tokio::task::spawn_blocking(move || {
        Dataset::load_or_synthesize(
            dashboard.dataset_path.as_deref(),
            dashboard.synthetic_samples,
            dashboard.seed,
        )
    })
    .await
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
    .map_err(|e| {
        error!("Failed to prepare dashboard dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("Dashboard dataset ready: {} records", dataset.records.len());

    // Build application state
    let app_state = AppState {
        predictor,
        chatbot: Chatbot::new(),
        dataset: Arc::new(dataset),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
