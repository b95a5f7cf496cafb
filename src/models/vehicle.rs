//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente a la tabla `vehicles` con primary key `id`.

use serde::{Deserialize, Deserializer};
use sqlx::FromRow;

/// Vehicle persistido - mapea una fila de `vehicles`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub is_available: bool,
}

/// Vehículo ya validado, listo para insertarse
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub is_available: bool,
}

impl NewVehicle {
    pub fn into_vehicle(self, id: i64) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            color: self.color,
            is_available: self.is_available,
        }
    }
}

/// Valor con marca de presencia para actualizaciones parciales.
///
/// `Absent` significa "no tocar"; `Set(v)` sobrescribe con `v`. Para columnas
/// anulables se usa `Patch<Option<T>>`, de modo que `Set(None)` limpia el valor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Set(value) => Patch::Set(f(value)),
        }
    }

    /// Sobrescribir `target` solo si el valor fue enviado
    pub fn apply(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

/// Un campo presente en el JSON siempre deserializa a `Set`; los campos
/// ausentes caen en `Default` (`Absent`) gracias a `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

/// Cambios validados para una actualización parcial
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleChanges {
    pub make: Patch<String>,
    pub model: Patch<String>,
    pub year: Patch<i32>,
    pub color: Patch<Option<String>>,
    pub is_available: Patch<bool>,
}

impl VehicleChanges {
    pub fn is_empty(&self) -> bool {
        !(self.make.is_set()
            || self.model.is_set()
            || self.year.is_set()
            || self.color.is_set()
            || self.is_available.is_set())
    }

    /// Fusionar los cambios sobre un vehículo existente
    pub fn apply_to(self, vehicle: &mut Vehicle) {
        self.make.apply(&mut vehicle.make);
        self.model.apply(&mut vehicle.model);
        self.year.apply(&mut vehicle.year);
        self.color.apply(&mut vehicle.color);
        self.is_available.apply(&mut vehicle.is_available);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct ColorPatch {
        #[serde(default)]
        color: Patch<Option<String>>,
    }

    fn tesla() -> Vehicle {
        Vehicle {
            id: 1,
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2023,
            color: Some("Red".to_string()),
            is_available: true,
        }
    }

    #[test]
    fn test_patch_distinguishes_absent_and_null() {
        let absent: ColorPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.color, Patch::Absent);

        let null: ColorPatch = serde_json::from_str(r#"{"color": null}"#).unwrap();
        assert_eq!(null.color, Patch::Set(None));

        let set: ColorPatch = serde_json::from_str(r#"{"color": "Blue"}"#).unwrap();
        assert_eq!(set.color, Patch::Set(Some("Blue".to_string())));
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut vehicle = tesla();
        let changes = VehicleChanges {
            color: Patch::Set(Some("Midnight Silver".to_string())),
            is_available: Patch::Set(false),
            ..Default::default()
        };
        changes.apply_to(&mut vehicle);

        assert_eq!(vehicle.color.as_deref(), Some("Midnight Silver"));
        assert!(!vehicle.is_available);
        assert_eq!(vehicle.make, "Tesla");
        assert_eq!(vehicle.model, "Model 3");
        assert_eq!(vehicle.year, 2023);
        assert_eq!(vehicle.id, 1);
    }

    #[test]
    fn test_explicit_null_clears_color() {
        let mut vehicle = tesla();
        VehicleChanges {
            color: Patch::Set(None),
            ..Default::default()
        }
        .apply_to(&mut vehicle);
        assert_eq!(vehicle.color, None);
    }

    #[test]
    fn test_empty_changes() {
        assert!(VehicleChanges::default().is_empty());
        let changes = VehicleChanges {
            year: Patch::Set(1999),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
