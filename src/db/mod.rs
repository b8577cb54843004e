//! Storage seams for reviews and the product counters they maintain.
//!
//! `PgStore` persists into PostgreSQL; `InMemoryStore` keeps everything in
//! process and is what the service tests run against.

pub mod mock;
pub mod product;
pub mod review;

use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub use mock::InMemoryStore;

#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn insert(&self, review: models::Review) -> Result<models::Review, sqlx::Error>;

    async fn fetch(&self, id: Uuid) -> Result<Option<models::Review>, sqlx::Error>;

    async fn fetch_by_product(&self, product: Uuid) -> Result<Vec<models::Review>, sqlx::Error>;

    /// Returns `None` when no review with that id exists anymore.
    async fn update(&self, review: models::Review) -> Result<Option<models::Review>, sqlx::Error>;

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    /// Grouped count/average over the reviews of one product, `None` if it has none.
    async fn stats(&self, product: Uuid) -> Result<Option<models::RatingStats>, sqlx::Error>;
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn fetch_product(&self, id: Uuid) -> Result<Option<models::Product>, sqlx::Error>;

    async fn update_ratings(
        &self,
        id: Uuid,
        average: f64,
        quantity: i64,
    ) -> Result<Option<models::Product>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewStore for PgStore {
    async fn insert(&self, review: models::Review) -> Result<models::Review, sqlx::Error> {
        review::insert(&self.pool, review).await
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<models::Review>, sqlx::Error> {
        review::fetch(&self.pool, id).await
    }

    async fn fetch_by_product(&self, product: Uuid) -> Result<Vec<models::Review>, sqlx::Error> {
        review::fetch_by_product(&self.pool, product).await
    }

    async fn update(&self, review: models::Review) -> Result<Option<models::Review>, sqlx::Error> {
        review::update(&self.pool, review).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        review::delete(&self.pool, id).await
    }

    async fn stats(&self, product: Uuid) -> Result<Option<models::RatingStats>, sqlx::Error> {
        review::stats_by_product(&self.pool, product).await
    }
}

#[async_trait]
impl ProductStore for PgStore {
    async fn fetch_product(&self, id: Uuid) -> Result<Option<models::Product>, sqlx::Error> {
        product::fetch(&self.pool, id).await
    }

    async fn update_ratings(
        &self,
        id: Uuid,
        average: f64,
        quantity: i64,
    ) -> Result<Option<models::Product>, sqlx::Error> {
        product::update_ratings(&self.pool, id, average, quantity).await
    }
}
