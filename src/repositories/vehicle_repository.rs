use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::{NewVehicle, Patch, Vehicle, VehicleChanges};
use crate::utils::errors::AppError;

const VEHICLE_COLUMNS: &str = "id, make, model, year, color, is_available";

/// Persistencia de vehículos.
///
/// Cada operación es su propia unidad de trabajo; la ausencia de un registro
/// se expresa con `None`/`false`, nunca con un error.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError>;

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Vehicle>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError>;

    async fn update(&self, id: i64, changes: VehicleChanges) -> Result<Option<Vehicle>, AppError>;

    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            r#"
            INSERT INTO vehicles (make, model, year, color, is_available)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {VEHICLE_COLUMNS}
            "#
        ))
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.color)
        .bind(vehicle.is_available)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&list_sql())
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    async fn update(&self, id: i64, changes: VehicleChanges) -> Result<Option<Vehicle>, AppError> {
        // Sin campos enviados no hay nada que escribir
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut builder = build_update(id, changes);
        let vehicle = builder
            .build_query_as::<Vehicle>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// `UPDATE` de una sola sentencia que solo toca las columnas enviadas
/// Paginación estable: orden por id (orden de inserción)
fn list_sql() -> String {
    format!("SELECT {VEHICLE_COLUMNS} FROM vehicles ORDER BY id OFFSET $1 LIMIT $2")
}

fn build_update(id: i64, changes: VehicleChanges) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE vehicles SET ");
    let mut assignments = builder.separated(", ");

    if let Patch::Set(make) = changes.make {
        assignments.push("make = ").push_bind_unseparated(make);
    }
    if let Patch::Set(model) = changes.model {
        assignments.push("model = ").push_bind_unseparated(model);
    }
    if let Patch::Set(year) = changes.year {
        assignments.push("year = ").push_bind_unseparated(year);
    }
    if let Patch::Set(color) = changes.color {
        assignments.push("color = ").push_bind_unseparated(color);
    }
    if let Patch::Set(is_available) = changes.is_available {
        assignments
            .push("is_available = ")
            .push_bind_unseparated(is_available);
    }

    builder.push(" WHERE id = ").push_bind(id);
    builder.push(" RETURNING ").push(VEHICLE_COLUMNS);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sql_orders_by_id_before_paging() {
        assert_eq!(
            list_sql(),
            "SELECT id, make, model, year, color, is_available FROM vehicles \
             ORDER BY id OFFSET $1 LIMIT $2"
        );
    }

    #[test]
    fn test_update_sql_only_lists_supplied_columns() {
        let changes = VehicleChanges {
            color: Patch::Set(Some("Midnight Silver".to_string())),
            is_available: Patch::Set(false),
            ..Default::default()
        };
        let builder = build_update(1, changes);

        assert_eq!(
            builder.sql(),
            "UPDATE vehicles SET color = $1, is_available = $2 WHERE id = $3 \
             RETURNING id, make, model, year, color, is_available"
        );
    }

    #[test]
    fn test_update_sql_with_single_column() {
        let changes = VehicleChanges {
            year: Patch::Set(1999),
            ..Default::default()
        };
        let builder = build_update(7, changes);

        assert!(builder.sql().starts_with("UPDATE vehicles SET year = $1 WHERE id = $2"));
        assert!(!builder.sql().contains("make ="));
    }
}
