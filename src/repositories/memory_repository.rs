//! Store en memoria
//!
//! Implementación de `VehicleStore` sin base de datos, usada para
//! ejecuciones locales (`STORAGE_BACKEND=memory`) y en los tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::vehicle_repository::VehicleStore;
use crate::models::{NewVehicle, Vehicle, VehicleChanges};
use crate::utils::errors::AppError;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, Vehicle>,
}

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    table: RwLock<Table>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, AppError> {
        let mut table = self.table.write().await;
        // Los ids nunca se reutilizan, igual que una secuencia de Postgres
        table.last_id += 1;
        let vehicle = vehicle.into_vehicle(table.last_id);
        table.rows.insert(vehicle.id, vehicle.clone());
        Ok(vehicle)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Vehicle>, AppError> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        let table = self.table.read().await;
        Ok(table.rows.values().skip(skip).take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, changes: VehicleChanges) -> Result<Option<Vehicle>, AppError> {
        let mut table = self.table.write().await;
        let Some(vehicle) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(vehicle);
        Ok(Some(vehicle.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Patch;

    fn new_vehicle(make: &str, model: &str, year: i32) -> NewVehicle {
        NewVehicle {
            make: make.to_string(),
            model: model.to_string(),
            year,
            color: Some("Red".to_string()),
            is_available: true,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_input_plus_id() {
        let store = InMemoryVehicleRepository::new();
        let input = new_vehicle("Tesla", "Model 3", 2023);

        let created = store.create(input.clone()).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, input.into_vehicle(1));
    }

    #[tokio::test]
    async fn test_list_is_ordered_and_paginated() {
        let store = InMemoryVehicleRepository::new();
        for year in 2000..2005 {
            store.create(new_vehicle("Ford", "Focus", year)).await.unwrap();
        }

        let all = store.list(0, 100).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let page = store.list(1, 2).await.unwrap();
        let ids: Vec<i64> = page.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(store.list(50, 10).await.unwrap().is_empty());
        assert!(store.list(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_is_sparse_and_misses_unknown_ids() {
        let store = InMemoryVehicleRepository::new();
        let created = store.create(new_vehicle("Tesla", "Model 3", 2023)).await.unwrap();

        let changes = VehicleChanges {
            make: Patch::Set("Ford".to_string()),
            ..Default::default()
        };
        let updated = store.update(created.id, changes.clone()).await.unwrap().unwrap();
        assert_eq!(updated.make, "Ford");
        assert_eq!(updated.model, created.model);
        assert_eq!(updated.year, created.year);
        assert_eq!(updated.color, created.color);
        assert_eq!(updated.is_available, created.is_available);

        assert!(store.update(999, changes).await.unwrap().is_none());
        assert!(store.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_twice_and_ids_are_not_reused() {
        let store = InMemoryVehicleRepository::new();
        let first = store.create(new_vehicle("Ford", "Mustang", 1969)).await.unwrap();

        assert!(store.delete(first.id).await.unwrap());
        assert!(store.find_by_id(first.id).await.unwrap().is_none());
        assert!(!store.delete(first.id).await.unwrap());

        let second = store.create(new_vehicle("Ford", "Mustang", 1969)).await.unwrap();
        assert_eq!(second.id, 2);
    }
}
