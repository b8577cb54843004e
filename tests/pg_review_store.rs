mod common;

use product_reviews::db::{PgStore, ProductStore};
use product_reviews::forms;
use product_reviews::services::{ReviewError, ReviewService};
use uuid::Uuid;

fn add_form(product: Uuid, rating: f64) -> forms::review::Add {
    forms::review::Add {
        review: Some("From postgres".to_string()),
        rating: Some(rating),
        product: Some(product),
        user: Some(Uuid::new_v4()),
    }
}

#[tokio::test]
async fn review_lifecycle_keeps_product_counters_in_sync() {
    let db = match common::spawn_db().await {
        Some(db) => db,
        None => return,
    };
    let service = ReviewService::with_pg_pool(db.db_pool.clone(), &db.settings);
    let store = PgStore::new(db.db_pool.clone());
    let product = common::insert_product(&db.db_pool, "Kettle").await;

    let first = service.create(add_form(product, 3.0)).await.unwrap();
    service.create(add_form(product, 5.0)).await.unwrap();

    let stored = store.fetch_product(product).await.unwrap().unwrap();
    assert_eq!(stored.ratings_average, 4.0);
    assert_eq!(stored.ratings_quantity, 2);

    let edit = forms::review::Edit {
        rating: Some(1.0),
        ..Default::default()
    };
    service.update(first.id, edit).await.unwrap();
    let stored = store.fetch_product(product).await.unwrap().unwrap();
    assert_eq!(stored.ratings_average, 3.0);
    assert_eq!(stored.ratings_quantity, 2);

    for review in service.list_for_product(product).await.unwrap() {
        service.delete(review.id).await.unwrap();
    }
    let stored = store.fetch_product(product).await.unwrap().unwrap();
    assert_eq!(stored.ratings_average, 4.5);
    assert_eq!(stored.ratings_quantity, 0);

    assert!(matches!(
        service.delete(first.id).await,
        Err(ReviewError::NotFound(_))
    ));
}
