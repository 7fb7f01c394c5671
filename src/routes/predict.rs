use actix_web::{web, Either, HttpResponse, Responder};
use crate::models::{ErrorResponse, HealthResponse, PatientForm, PredictionResponse};
use crate::routes::AppState;
use std::collections::HashMap;

/// Configure prediction and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let model_loaded = state.predictor.is_some();
    let status = if model_loaded { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_loaded,
        timestamp: chrono::Utc::now(),
    })
}

/// Stroke risk prediction endpoint
///
/// POST /api/v1/predict
///
/// Accepts either an urlencoded form or a JSON object:
/// ```json
/// {
///   "age": 67,
///   "gender": "Male",
///   "hypertension": "0",
///   "heart_disease": "1",
///   "ever_married": "Yes",
///   "work_type": "Private",
///   "Residence_type": "Urban",
///   "avg_glucose_level": 228.69,
///   "bmi": 36.6,
///   "smoking_status": "formerly_smoked"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    body: Either<web::Json<serde_json::Map<String, serde_json::Value>>, web::Form<HashMap<String, String>>>,
) -> impl Responder {
    let form = match body {
        Either::Left(json) => PatientForm::from_json(json.into_inner()),
        Either::Right(form) => PatientForm::from(form.into_inner()),
    };

    let Some(predictor) = state.predictor.as_ref() else {
        tracing::error!("Prediction requested but no model is loaded");
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Model not loaded".to_string(),
            message: "The stroke model is not available, please try again later".to_string(),
            status_code: 503,
        });
    };

    let prediction_id = uuid::Uuid::new_v4().to_string();

    match predictor.predict(&form) {
        Ok(prediction) => {
            tracing::info!(
                "Prediction {}: {} ({:.4}), {} fields submitted",
                prediction_id,
                prediction.label.as_str(),
                prediction.probability,
                form.0.len()
            );
            HttpResponse::Ok().json(PredictionResponse::new(prediction_id, prediction))
        }
        Err(e) => {
            tracing::error!("Prediction {} failed: {}", prediction_id, e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
    }
}
