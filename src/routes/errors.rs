use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};

/// JSON error body for extractor failures
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// A body of the wrong content type is routine where `Either<Json, Form>`
/// tries JSON first, so it is only logged at debug
pub fn is_content_type_mismatch(err: &error::JsonPayloadError) -> bool {
    matches!(err, error::JsonPayloadError::ContentType)
}

/// Form counterpart of [`is_content_type_mismatch`]
pub fn is_form_content_type_mismatch(err: &error::UrlencodedError) -> bool {
    matches!(err, error::UrlencodedError::ContentType)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    if is_content_type_mismatch(&err) {
        tracing::debug!("Non-JSON body on {}: {}", req.path(), err);
    } else {
        tracing::info!("JSON payload error on {}: {}", req.path(), err);
    }
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle urlencoded form payload errors
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    if is_form_content_type_mismatch(&err) {
        tracing::debug!("Non-form body on {}: {}", req.path(), err);
    } else {
        tracing::info!("Form payload error on {}: {}", req.path(), err);
    }
    JsonError {
        error: "invalid_form".to_string(),
        message: format!("Invalid form: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}
