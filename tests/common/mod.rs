use product_reviews::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestDb {
    pub settings: Settings,
    pub db_pool: PgPool,
}

/// Fresh database per test; `None` when Postgres is not reachable.
pub async fn spawn_db() -> Option<TestDb> {
    let mut settings = match get_configuration() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Skipping tests: no database configuration: {}", err);
            return None;
        }
    };
    settings.database.database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&settings.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    Some(TestDb { settings, db_pool })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await?;

    Ok(connection_pool)
}

pub async fn insert_product(pool: &PgPool, name: &str) -> uuid::Uuid {
    let id = uuid::Uuid::new_v4();
    sqlx::query("INSERT INTO product (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert product");

    id
}
