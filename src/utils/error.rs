use actix_web::HttpResponse;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    NotFound(String),
    InvalidRequest(String),
    Unauthorized(String),
    Conflict(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Maps the error onto the `{"success": false, "error": ...}` envelope
    /// every handler returns on failure.
    pub fn to_response(&self) -> HttpResponse {
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
            AppError::Unauthorized(_) => HttpResponse::Unauthorized().json(body),
            AppError::Conflict(_) => HttpResponse::Conflict().json(body),
            AppError::DatabaseError(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}
