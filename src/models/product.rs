use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// Product is owned by the catalog; reviews only keep its rating counters in sync.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub ratings_average: f64,
    pub ratings_quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, ratings_average: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ratings_average,
            ratings_quantity: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
