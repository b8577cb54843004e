use tokio::runtime::Runtime;
use uuid::Uuid;

pub struct ShowCommand {
    product_id: Uuid,
}

impl ShowCommand {
    pub fn new(product_id: Uuid) -> Self {
        Self { product_id }
    }
}

impl crate::console::commands::CallableTrait for ShowCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let product_id = self.product_id;

        Runtime::new()?.block_on(async move {
            let service = super::connect().await?;

            match service.stats(product_id).await? {
                Some(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
                None => println!("Product {} has no reviews", product_id),
            }

            Ok::<(), Box<dyn std::error::Error>>(())
        })
    }
}
