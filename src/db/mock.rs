use super::{ProductStore, ReviewStore};
use crate::models;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store backing both seams, for tests and local tooling.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    reviews: RwLock<HashMap<Uuid, models::Review>>,
    products: RwLock<HashMap<Uuid, models::Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_product(&self, product: models::Product) -> models::Product {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        product
    }
}

#[async_trait]
impl ReviewStore for InMemoryStore {
    async fn insert(&self, review: models::Review) -> Result<models::Review, sqlx::Error> {
        self.reviews.write().await.insert(review.id, review.clone());
        Ok(review)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<models::Review>, sqlx::Error> {
        Ok(self.reviews.read().await.get(&id).cloned())
    }

    async fn fetch_by_product(&self, product: Uuid) -> Result<Vec<models::Review>, sqlx::Error> {
        let mut reviews: Vec<models::Review> = self
            .reviews
            .read()
            .await
            .values()
            .filter(|review| review.product == product)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(reviews)
    }

    async fn update(&self, review: models::Review) -> Result<Option<models::Review>, sqlx::Error> {
        let mut reviews = self.reviews.write().await;
        match reviews.get_mut(&review.id) {
            Some(stored) => {
                // created_at is never rewritten
                stored.review = review.review;
                stored.rating = review.rating;
                stored.product = review.product;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        Ok(self.reviews.write().await.remove(&id).is_some())
    }

    async fn stats(&self, product: Uuid) -> Result<Option<models::RatingStats>, sqlx::Error> {
        let ratings: Vec<f64> = self
            .reviews
            .read()
            .await
            .values()
            .filter(|review| review.product == product)
            .map(|review| review.rating)
            .collect();

        Ok(models::RatingStats::from_ratings(product, &ratings))
    }
}

#[async_trait]
impl ProductStore for InMemoryStore {
    async fn fetch_product(&self, id: Uuid) -> Result<Option<models::Product>, sqlx::Error> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn update_ratings(
        &self,
        id: Uuid,
        average: f64,
        quantity: i64,
    ) -> Result<Option<models::Product>, sqlx::Error> {
        let mut products = self.products.write().await;
        Ok(products.get_mut(&id).map(|product| {
            product.ratings_average = average;
            product.ratings_quantity = quantity;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }
}
