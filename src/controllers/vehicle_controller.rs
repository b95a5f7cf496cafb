use std::sync::Arc;

use crate::dto::vehicle_dto::{
    validate_for_create, validate_for_update, CreateVehicleRequest, ListVehiclesQuery,
    UpdateVehicleRequest, VehicleResponse,
};
use crate::repositories::VehicleStore;
use crate::utils::errors::{AppError, AppResult};

/// Une la validación de payloads con el store; cada método ejecuta
/// una sola operación de persistencia.
pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<VehicleResponse> {
        let vehicle = validate_for_create(request)?;
        let created = self.store.create(vehicle).await?;

        tracing::info!("🚗 Vehículo creado: id={}", created.id);
        Ok(created.into())
    }

    pub async fn list(&self, query: ListVehiclesQuery) -> AppResult<Vec<VehicleResponse>> {
        let (skip, limit) = query.resolve()?;
        let vehicles = self.store.list(skip, limit).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<VehicleResponse> {
        let vehicle = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::vehicle_not_found)?;

        Ok(vehicle.into())
    }

    pub async fn update(&self, id: i64, request: UpdateVehicleRequest) -> AppResult<VehicleResponse> {
        let changes = validate_for_update(request)?;
        let vehicle = self
            .store
            .update(id, changes)
            .await?
            .ok_or_else(AppError::vehicle_not_found)?;

        tracing::info!("✏️ Vehículo actualizado: id={}", vehicle.id);
        Ok(vehicle.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::vehicle_not_found());
        }

        tracing::info!("🗑️ Vehículo eliminado: id={}", id);
        Ok(())
    }
}
