mod recompute;
mod show;

pub use recompute::RecomputeCommand;
pub use show::ShowCommand;

use crate::configuration::get_configuration;
use crate::services::ReviewService;
use sqlx::PgPool;

async fn connect() -> Result<ReviewService, Box<dyn std::error::Error>> {
    let settings = get_configuration()?;
    let db_pool = PgPool::connect(&settings.database.connection_string()).await?;

    Ok(ReviewService::with_pg_pool(db_pool, &settings))
}
