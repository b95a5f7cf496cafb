//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del inventario
//! y su conversión a respuestas HTTP con cuerpo `{"detail": ...}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Mensaje usado en todas las respuestas 404 de vehículos
pub const VEHICLE_NOT_FOUND: &str = "Vehicle not found";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid payload: {message}")]
    InvalidPayload { status: StatusCode, message: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Detalle de un campo inválido
#[derive(Debug, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl AppError {
    pub fn vehicle_not_found() -> Self {
        AppError::NotFound(VEHICLE_NOT_FOUND.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidPayload { status, .. } => *status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Rechazos de extractores: los errores de formato se tratan como 422,
    /// el resto conserva el código que propone axum (415, 413...)
    fn from_rejection(status: StatusCode, message: String) -> Self {
        let status = if status == StatusCode::BAD_REQUEST {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            status
        };
        AppError::InvalidPayload { status, message }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                json!({ "detail": "Internal server error" })
            }
            AppError::Validation(e) => {
                tracing::debug!("Validation error: {}", e);
                json!({ "detail": field_errors(&e) })
            }
            AppError::InvalidPayload { message, .. } => {
                tracing::debug!("Invalid payload: {}", message);
                json!({ "detail": message })
            }
            AppError::NotFound(msg) => json!({ "detail": msg }),
        };

        (status, Json(body)).into_response()
    }
}

/// Aplanar `ValidationErrors` en una lista ordenada por campo
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errs) => errs
                .iter()
                .map(|e| FieldError {
                    field: field.to_string(),
                    code: e.code.to_string(),
                    message: describe(field, e),
                })
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    match error.code.as_ref() {
        "length" => format!("{} must not be empty", field),
        "range" => match (error.params.get("min"), error.params.get("max")) {
            (Some(min), Some(max)) => format!(
                "{} must be between {} and {}",
                field,
                display_number(min),
                display_number(max)
            ),
            (Some(min), None) => format!("{} must be at least {}", field, display_number(min)),
            _ => format!("{} is out of range", field),
        },
        code => format!("{} is invalid ({})", field, code),
    }
}

// El derive de validator guarda los límites como f64
fn display_number(value: &serde_json::Value) -> String {
    match value.as_f64() {
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        _ => value.to_string(),
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_uses_detail_message() {
        let err = AppError::vehicle_not_found();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: Vehicle not found");
    }

    #[test]
    fn test_field_errors_describe_range() {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &1900);
        error.add_param("max".into(), &2100);
        let mut errors = ValidationErrors::new();
        errors.add("year", error);

        let details = field_errors(&errors);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "year");
        assert_eq!(details[0].code, "range");
        assert_eq!(details[0].message, "year must be between 1900 and 2100");
    }

    #[test]
    fn test_bad_request_rejections_become_unprocessable() {
        let err = AppError::from_rejection(StatusCode::BAD_REQUEST, "bad".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = AppError::from_rejection(StatusCode::UNSUPPORTED_MEDIA_TYPE, "json".to_string());
        assert_eq!(err.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
