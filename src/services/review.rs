//! Review Service - writes reviews and keeps product rating counters in sync
//!
//! Every write goes through an explicit sequence instead of model hooks:
//! - create: validate, insert, recompute the product
//! - update/delete: fetch the stored review first (its product is captured
//!   before the row changes or disappears), mutate, recompute the captured
//!   product

use crate::configuration::{RatingsSettings, Settings};
use crate::db::{PgStore, ProductStore, ReviewStore};
use crate::forms;
use crate::forms::review::ValidationErrors;
use crate::models;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Result type for review operations
pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("Review validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Review {0} not found")]
    NotFound(Uuid),
    #[error("Product {0} not found")]
    ProductNotFound(Uuid),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    products: Arc<dyn ProductStore>,
    ratings: RatingsSettings,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        products: Arc<dyn ProductStore>,
        ratings: RatingsSettings,
    ) -> Self {
        Self {
            reviews,
            products,
            ratings,
        }
    }

    /// Service over a single PostgreSQL pool for both reviews and products
    pub fn with_pg_pool(pool: PgPool, settings: &Settings) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self::new(store.clone(), store, settings.ratings.clone())
    }

    #[tracing::instrument(name = "Get review.", skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<models::Review> {
        self.reviews
            .fetch(id)
            .await?
            .ok_or(ReviewError::NotFound(id))
    }

    #[tracing::instrument(name = "List product reviews.", skip(self))]
    pub async fn list_for_product(&self, product_id: Uuid) -> Result<Vec<models::Review>> {
        Ok(self.reviews.fetch_by_product(product_id).await?)
    }

    /// Aggregate for a product without writing it anywhere
    #[tracing::instrument(name = "Product rating stats.", skip(self))]
    pub async fn stats(&self, product_id: Uuid) -> Result<Option<models::RatingStats>> {
        Ok(self.reviews.stats(product_id).await?)
    }

    #[tracing::instrument(name = "Create review.", skip(self, form))]
    pub async fn create(&self, form: forms::review::Add) -> Result<models::Review> {
        let review = models::Review::try_from(form)?;
        let review = self.reviews.insert(review).await?;
        tracing::info!(
            review_id = %review.id,
            product_id = %review.product,
            "New review has been saved"
        );

        self.recompute_stats(review.product).await?;

        Ok(review)
    }

    #[tracing::instrument(name = "Update review.", skip(self, form))]
    pub async fn update(&self, id: Uuid, form: forms::review::Edit) -> Result<models::Review> {
        form.check()?;

        let mut review = self.get(id).await?;
        let captured_product = review.product;

        form.update(&mut review);
        let review = self
            .reviews
            .update(review)
            .await?
            .ok_or(ReviewError::NotFound(id))?;

        self.recompute_stats(captured_product).await?;
        if review.product != captured_product {
            self.recompute_stats(review.product).await?;
        }

        Ok(review)
    }

    /// Deletes the review and returns it as it was stored
    #[tracing::instrument(name = "Delete review.", skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<models::Review> {
        let review = self.get(id).await?;

        if !self.reviews.delete(id).await? {
            return Err(ReviewError::NotFound(id));
        }

        self.recompute_stats(review.product).await?;

        Ok(review)
    }

    /// Writes count and mean rating onto the product, or the configured
    /// empty values when it has no reviews left.
    #[tracing::instrument(name = "Recompute product ratings.", skip(self))]
    pub async fn recompute_stats(&self, product_id: Uuid) -> Result<()> {
        let (average, quantity) = match self.reviews.stats(product_id).await? {
            Some(stats) => (stats.average, stats.quantity),
            None => (self.ratings.empty_average, self.ratings.empty_quantity),
        };

        self.products
            .update_ratings(product_id, average, quantity)
            .await?
            .ok_or(ReviewError::ProductNotFound(product_id))?;

        tracing::info!(
            product_id = %product_id,
            ratings_average = average,
            ratings_quantity = quantity,
            "Product ratings recomputed"
        );

        Ok(())
    }
}
