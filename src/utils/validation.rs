//! Utilidades de validación
//!
//! Validadores por campo reutilizados por los payloads de creación
//! (vía `#[derive(Validate)]`) y de actualización parcial.

use serde::Serialize;
use validator::ValidationError;

/// Año mínimo aceptado para un vehículo
pub const MIN_YEAR: i32 = 1900;
/// Año máximo aceptado para un vehículo
pub const MAX_YEAR: i32 = 2100;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &1);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango inclusivo
pub fn validate_range<T: PartialOrd + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar el año de fabricación
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    validate_range(year, MIN_YEAR, MAX_YEAR)
}

/// Error para un campo no anulable recibido como `null`
pub fn null_not_allowed() -> ValidationError {
    let mut error = ValidationError::new("null");
    error.message = Some("field may be omitted but not set to null".into());
    error
}

/// Validar parámetros de paginación (no negativos)
pub fn validate_non_negative(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &0);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
