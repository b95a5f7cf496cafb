//! Tests del store PostgreSQL.
//!
//! Necesitan una base de datos real: `DATABASE_URL=... cargo test -- --ignored`.
//! Cada test trabaja con sus propios ids, así que pueden compartir la tabla.

use apex_auto_inventory::config::DatabaseConfig;
use apex_auto_inventory::database::DatabaseConnection;
use apex_auto_inventory::models::{NewVehicle, Patch, VehicleChanges};
use apex_auto_inventory::repositories::{VehicleRepository, VehicleStore};

async fn repository() -> VehicleRepository {
    let config = DatabaseConfig::from_env(false).expect("DATABASE_URL must be set");
    let connection = DatabaseConnection::connect(&config).await.unwrap();
    VehicleRepository::new(connection.pool().clone())
}

fn new_vehicle(make: &str) -> NewVehicle {
    NewVehicle {
        make: make.to_string(),
        model: "Model 3".to_string(),
        year: 2023,
        color: Some("Red".to_string()),
        is_available: true,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_get_update_delete() {
    let repo = repository().await;

    let input = new_vehicle("Tesla");
    let created = repo.create(input.clone()).await.unwrap();
    assert_eq!(created, input.clone().into_vehicle(created.id));

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let changes = VehicleChanges {
        color: Patch::Set(Some("Midnight Silver".to_string())),
        is_available: Patch::Set(false),
        ..Default::default()
    };
    let updated = repo.update(created.id, changes).await.unwrap().unwrap();
    assert_eq!(updated.color.as_deref(), Some("Midnight Silver"));
    assert!(!updated.is_available);
    assert_eq!(updated.make, created.make);
    assert_eq!(updated.model, created.model);
    assert_eq!(updated.year, created.year);

    let cleared = repo
        .update(
            created.id,
            VehicleChanges {
                color: Patch::Set(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.color, None);

    let unchanged = repo
        .update(created.id, VehicleChanges::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, cleared);

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_ids_are_absent() {
    let repo = repository().await;

    let changes = VehicleChanges {
        year: Patch::Set(2000),
        ..Default::default()
    };
    assert!(repo.update(i64::MAX, changes).await.unwrap().is_none());
    assert!(repo.find_by_id(i64::MAX).await.unwrap().is_none());
    assert!(!repo.delete(i64::MAX).await.unwrap());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_is_ordered_by_id() {
    let repo = repository().await;
    let first = repo.create(new_vehicle("Ordered-A")).await.unwrap();
    let second = repo.create(new_vehicle("Ordered-B")).await.unwrap();

    let all = repo.list(0, i64::MAX).await.unwrap();
    let position = |id: i64| all.iter().position(|v| v.id == id).unwrap();
    assert!(position(first.id) < position(second.id));

    let ids: Vec<i64> = all.iter().map(|v| v.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    assert!(repo.list(i64::MAX, 10).await.unwrap().is_empty());

    repo.delete(first.id).await.unwrap();
    repo.delete(second.id).await.unwrap();
}
