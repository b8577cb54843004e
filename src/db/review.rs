use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Review>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch review by id.", review_id = %id);
    sqlx::query_as::<_, models::Review>(
        r#"SELECT id, review, rating, created_at, product_id, user_id
         FROM review
         WHERE id = $1
         LIMIT 1
         "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch review {}: {:?}", id, err);
        err
    })
}

pub async fn fetch_by_product(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Vec<models::Review>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch reviews of a product.", product_id = %product_id);
    sqlx::query_as::<_, models::Review>(
        r#"SELECT id, review, rating, created_at, product_id, user_id
         FROM review
         WHERE product_id = $1
         ORDER BY created_at DESC
         "#,
    )
    .bind(product_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews of product {}: {:?}", product_id, err);
        err
    })
}

pub async fn insert(pool: &PgPool, review: models::Review) -> Result<models::Review, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new review into the database");
    sqlx::query(
        r#"
        INSERT INTO review (id, review, rating, created_at, product_id, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(review.id)
    .bind(review.review.clone())
    .bind(review.rating)
    .bind(review.created_at)
    .bind(review.product)
    .bind(review.user)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(move |_result| review)
    .map_err(|err| {
        tracing::error!("Failed to insert review: {:?}", err);
        err
    })
}

pub async fn update(
    pool: &PgPool,
    review: models::Review,
) -> Result<Option<models::Review>, sqlx::Error> {
    let query_span = tracing::info_span!("Updating review", review_id = %review.id);
    sqlx::query(
        r#"
        UPDATE review
        SET review = $2, rating = $3, product_id = $4
        WHERE id = $1
        "#,
    )
    .bind(review.id)
    .bind(review.review.clone())
    .bind(review.rating)
    .bind(review.product)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(move |result| (result.rows_affected() > 0).then_some(review))
    .map_err(|err| {
        tracing::error!("Failed to update review: {:?}", err);
        err
    })
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let query_span = tracing::info_span!("Deleting review", review_id = %id);
    sqlx::query(r#"DELETE FROM review WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete review {}: {:?}", id, err);
            err
        })
}

pub async fn stats_by_product(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Option<models::RatingStats>, sqlx::Error> {
    let query_span = tracing::info_span!("Aggregate product ratings.", product_id = %product_id);
    sqlx::query_as::<_, models::RatingStats>(
        r#"SELECT
            product_id,
            COUNT(*) AS quantity,
            AVG(rating) AS average
         FROM review
         WHERE product_id = $1
         GROUP BY product_id
         "#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to aggregate ratings of {}: {:?}", product_id, err);
        err
    })
}
