use crate::models;
use serde::Serialize;
use uuid::Uuid;

/// Default API representation: `createdAt` is left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Public {
    pub id: Uuid,
    pub review: String,
    pub rating: f64,
    pub product_id: Uuid,
    pub user_id: Uuid,
}

impl From<models::Review> for Public {
    fn from(review: models::Review) -> Self {
        Self {
            id: review.id,
            review: review.review,
            rating: review.rating,
            product_id: review.product,
            user_id: review.user,
        }
    }
}
