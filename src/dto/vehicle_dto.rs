use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::{NewVehicle, Patch, Vehicle, VehicleChanges};
use crate::utils::errors::AppResult;
use crate::utils::validation::{
    null_not_allowed, validate_non_negative, validate_not_empty, validate_year,
};

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 100;

fn default_is_available() -> bool {
    true
}

// Request para crear un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1))]
    pub make: String,

    #[validate(length(min = 1))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default = "default_is_available")]
    pub is_available: bool,
}

// Request para actualizar un vehículo: cada campo conserva si fue enviado.
// Los no anulables se leen como Option para poder rechazar `null` con un 422.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicleRequest {
    #[serde(default)]
    pub make: Patch<Option<String>>,
    #[serde(default)]
    pub model: Patch<Option<String>>,
    #[serde(default)]
    pub year: Patch<Option<i32>>,
    #[serde(default)]
    pub color: Patch<Option<String>>,
    #[serde(default)]
    pub is_available: Patch<Option<bool>>,
}

// Query de paginación para el listado
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListVehiclesQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub is_available: bool,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            color: vehicle.color,
            is_available: vehicle.is_available,
        }
    }
}

/// Validar un payload de creación y completar los valores por defecto
pub fn validate_for_create(request: CreateVehicleRequest) -> AppResult<NewVehicle> {
    request.validate()?;

    Ok(NewVehicle {
        make: request.make,
        model: request.model,
        year: request.year,
        color: request.color,
        is_available: request.is_available,
    })
}

/// Validar un payload de actualización parcial.
///
/// Solo se validan los campos presentes; el resultado conserva qué campos
/// fueron enviados para que el store sobrescriba exactamente esos.
pub fn validate_for_update(request: UpdateVehicleRequest) -> AppResult<VehicleChanges> {
    let mut errors = ValidationErrors::new();

    let make = required_text("make", request.make, &mut errors);
    let model = required_text("model", request.model, &mut errors);

    let year = match request.year {
        Patch::Absent => Patch::Absent,
        Patch::Set(None) => {
            errors.add("year", null_not_allowed());
            Patch::Absent
        }
        Patch::Set(Some(year)) => match validate_year(year) {
            Ok(()) => Patch::Set(year),
            Err(e) => {
                errors.add("year", e);
                Patch::Absent
            }
        },
    };

    let is_available = match request.is_available {
        Patch::Set(None) => {
            errors.add("is_available", null_not_allowed());
            Patch::Absent
        }
        other => other.map(|value| value.unwrap_or_default()),
    };

    if !errors.errors().is_empty() {
        return Err(errors.into());
    }

    Ok(VehicleChanges {
        make,
        model,
        year,
        color: request.color,
        is_available,
    })
}

fn required_text(
    field: &'static str,
    value: Patch<Option<String>>,
    errors: &mut ValidationErrors,
) -> Patch<String> {
    match value {
        Patch::Absent => Patch::Absent,
        Patch::Set(None) => {
            errors.add(field, null_not_allowed());
            Patch::Absent
        }
        Patch::Set(Some(text)) => match validate_not_empty(&text) {
            Ok(()) => Patch::Set(text),
            Err(e) => {
                errors.add(field, e);
                Patch::Absent
            }
        },
    }
}

impl ListVehiclesQuery {
    /// Resolver `(skip, limit)` aplicando los valores por defecto
    pub fn resolve(&self) -> AppResult<(i64, i64)> {
        let skip = self.skip.unwrap_or(DEFAULT_SKIP);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_non_negative(skip) {
            errors.add("skip", e);
        }
        if let Err(e) = validate_non_negative(limit) {
            errors.add("limit", e);
        }
        if !errors.errors().is_empty() {
            return Err(errors.into());
        }

        Ok((skip, limit))
    }
}
