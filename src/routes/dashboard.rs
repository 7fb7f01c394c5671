use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use validator::Validate;
use crate::core::{analytics, RiskClassifier};
use crate::models::{ErrorResponse, RiskAssessmentRequest};
use crate::routes::AppState;
use crate::services::DataSource;

/// Dashboard payload tagged with where the data came from
#[derive(Debug, Serialize)]
pub struct DashboardResponse<T: Serialize> {
    pub source: DataSource,
    #[serde(flatten)]
    pub data: T,
}

/// Configure dashboard analytics routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard")
            .route("/overview", web::get().to(overview))
            .route("/demographics", web::get().to(demographics))
            .route("/risk-factors", web::get().to(risk_factors))
            .route("/model-insights", web::get().to(model_insights))
            .route("/risk-assessment", web::post().to(risk_assessment)),
    );
}

fn tagged<T: Serialize>(state: &AppState, data: T) -> HttpResponse {
    HttpResponse::Ok().json(DashboardResponse {
        source: state.dataset.source.clone(),
        data,
    })
}

async fn overview(state: web::Data<AppState>) -> impl Responder {
    tagged(&state, analytics::overview(&state.dataset.records))
}

async fn demographics(state: web::Data<AppState>) -> impl Responder {
    tagged(&state, analytics::demographics(&state.dataset.records))
}

async fn risk_factors(state: web::Data<AppState>) -> impl Responder {
    tagged(&state, analytics::risk_factors(&state.dataset.records))
}

async fn model_insights(state: web::Data<AppState>) -> impl Responder {
    let model = state.predictor.as_ref().and_then(|p| {
        let classifier = p.classifier();
        classifier
            .coefficients()
            .map(|coefficients| (classifier.feature_names(), coefficients))
    });

    HttpResponse::Ok().json(analytics::model_insights(model))
}

/// Simplified interactive risk calculator
///
/// POST /api/v1/dashboard/risk-assessment
///
/// Request body:
/// ```json
/// {
///   "age": 50,
///   "hypertension": true,
///   "heart_disease": false,
///   "glucose": 100,
///   "smoking": "never_smoked"
/// }
/// ```
async fn risk_assessment(req: web::Json<RiskAssessmentRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(analytics::assess_risk(&req))
}
