use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Product>, sqlx::Error> {
    let query_span = tracing::info_span!("Check product existence by id.", product_id = %id);
    sqlx::query_as::<_, models::Product>(
        r#"SELECT
            id, name, ratings_average, ratings_quantity, created_at, updated_at
         FROM product
         WHERE id = $1
         LIMIT 1
         "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute fetch query: {:?}", err);
        err
    })
}

pub async fn update_ratings(
    pool: &PgPool,
    id: Uuid,
    average: f64,
    quantity: i64,
) -> Result<Option<models::Product>, sqlx::Error> {
    let query_span = tracing::info_span!("Updating product rating counters", product_id = %id);
    sqlx::query_as::<_, models::Product>(
        r#"UPDATE product
         SET ratings_average = $2,
             ratings_quantity = $3,
             updated_at = NOW()
         WHERE id = $1
         RETURNING id, name, ratings_average, ratings_quantity, created_at, updated_at
         "#,
    )
    .bind(id)
    .bind(average)
    .bind(quantity)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update product ratings: {:?}", err);
        err
    })
}
