use clap::{Parser, Subcommand};
use product_reviews::console::commands::{self, CallableTrait};
use product_reviews::telemetry::{get_subscriber, init_subscriber};
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
}

#[derive(Debug, Subcommand)]
enum StatsCommands {
    /// Recompute ratingsAverage / ratingsQuantity of a product from its reviews
    Recompute {
        #[arg(long)]
        product_id: Uuid,
    },
    /// Print the current aggregate of a product without writing it
    Show {
        #[arg(long)]
        product_id: Uuid,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber("product-reviews".into(), "info".into());
    init_subscriber(subscriber);

    let cli = Cli::parse();

    get_command(cli).call()
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        Commands::Stats { command } => match command {
            StatsCommands::Recompute { product_id } => {
                Box::new(commands::stats::RecomputeCommand::new(product_id))
            }
            StatsCommands::Show { product_id } => {
                Box::new(commands::stats::ShowCommand::new(product_id))
            }
        },
    }
}
