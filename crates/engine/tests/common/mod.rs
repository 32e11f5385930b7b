#![allow(dead_code)]

use sea_orm::{Database, DatabaseConnection};

use engine::{CategoryKind, Engine};
use migration::MigratorTrait;
use uuid::Uuid;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Id of a seeded category.
pub async fn category_id(engine: &Engine, kind: CategoryKind, name: &str) -> Uuid {
    engine
        .list_categories(Some(kind))
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("category {name} missing"))
        .id
}
