use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Review {
    pub id: Uuid,
    pub review: String,
    pub rating: f64,
    // hidden unless a caller asks for it explicitly, see views::review::Detailed
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "product_id")]
    pub product: Uuid,
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
}

impl Review {
    pub fn new(review: String, rating: f64, product: Uuid, user: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            review,
            rating,
            created_at: Utc::now(),
            product,
            user,
        }
    }
}

/// Count and mean rating of all reviews of one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, sqlx::FromRow)]
pub struct RatingStats {
    #[sqlx(rename = "product_id")]
    pub product: Uuid,
    pub quantity: i64,
    pub average: f64,
}

impl RatingStats {
    pub fn from_ratings(product: Uuid, ratings: &[f64]) -> Option<Self> {
        if ratings.is_empty() {
            return None;
        }
        let quantity = ratings.len() as i64;
        let average = ratings.iter().sum::<f64>() / quantity as f64;

        Some(Self {
            product,
            quantity,
            average,
        })
    }
}
