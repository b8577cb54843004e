use tokio::runtime::Runtime;
use uuid::Uuid;

pub struct RecomputeCommand {
    product_id: Uuid,
}

impl RecomputeCommand {
    pub fn new(product_id: Uuid) -> Self {
        Self { product_id }
    }
}

impl crate::console::commands::CallableTrait for RecomputeCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let product_id = self.product_id;

        Runtime::new()?.block_on(async move {
            let service = super::connect().await?;

            service.recompute_stats(product_id).await.map_err(|e| {
                eprintln!("Recompute failed: {}", e);
                e
            })?;

            println!("Recomputed ratings of product {}", product_id);

            Ok::<(), Box<dyn std::error::Error>>(())
        })
    }
}
