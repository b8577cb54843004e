use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detailed {
    pub id: Uuid,
    pub review: String,
    pub rating: f64,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<models::Review> for Detailed {
    fn from(review: models::Review) -> Self {
        Self {
            id: review.id,
            review: review.review,
            rating: review.rating,
            product_id: review.product,
            user_id: review.user,
            created_at: review.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::review::Public;

    #[test]
    fn only_detailed_view_exposes_created_at() {
        let review = models::Review::new("Great".to_string(), 5.0, Uuid::new_v4(), Uuid::new_v4());

        let public = serde_json::to_value(Public::from(review.clone())).unwrap();
        let detailed = serde_json::to_value(Detailed::from(review.clone())).unwrap();

        assert!(public.get("createdAt").is_none());
        assert_eq!(public["id"], review.id.to_string());
        assert_eq!(public["productId"], review.product.to_string());
        assert!(detailed.get("createdAt").is_some());
    }
}
