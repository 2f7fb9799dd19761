//! Shopcart Application CLI

use std::{process, sync::Arc};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use shopcart_app::{
    context::{AppContext, AppInitError, connect_store},
    domain::carts::{CartsService, CartsServiceError, models::CartListing},
    store::{KeyValueStore, StoreError},
};

#[derive(Debug, Parser)]
#[command(name = "shopcart-app", about = "Shopcart CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Carts(CartsCommand),
    Store(StoreCommand),
}

#[derive(Debug, Args)]
struct CartsCommand {
    #[command(subcommand)]
    command: CartsSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartsSubcommand {
    /// Print every stored cart as one JSON document per line
    List(DatabaseArgs),
}

#[derive(Debug, Args)]
struct StoreCommand {
    #[command(subcommand)]
    command: StoreSubcommand,
}

#[derive(Debug, Subcommand)]
enum StoreSubcommand {
    /// Remove every cart and reset the id counter
    Flush(DatabaseArgs),
}

#[derive(Debug, Args)]
struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Init(#[from] AppInitError),

    #[error("failed to list carts: {0}")]
    Carts(#[from] CartsServiceError),

    #[error("failed to flush store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Carts(CartsCommand {
            command: CartsSubcommand::List(args),
        }) => list_carts(args).await,
        Commands::Store(StoreCommand {
            command: StoreSubcommand::Flush(args),
        }) => flush_store(args).await,
    }
}

async fn list_carts(args: DatabaseArgs) -> Result<(), CliError> {
    let store = connect_store(&args.database_url).await?;

    let context = AppContext::from_store(Arc::new(store));

    let carts = match context.carts.list_carts(None).await? {
        CartListing::All(carts) => carts,
        CartListing::Single(cart) => vec![cart],
    };

    for cart in carts {
        println!("{}", serde_json::to_string(&cart)?);
    }

    Ok(())
}

async fn flush_store(args: DatabaseArgs) -> Result<(), CliError> {
    let store = connect_store(&args.database_url).await?;

    store.flush().await?;

    println!("store flushed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_flush_command() -> TestResult {
        let cli = Cli::try_parse_from([
            "shopcart-app",
            "store",
            "flush",
            "--database-url",
            "postgres://localhost/shopcart",
        ])?;

        assert!(
            matches!(
                cli.command,
                Commands::Store(StoreCommand {
                    command: StoreSubcommand::Flush(ref args),
                }) if args.database_url == "postgres://localhost/shopcart"
            ),
            "unexpected command: {cli:?}"
        );

        Ok(())
    }

    #[test]
    fn store_errors_name_the_failed_command() {
        let error = CliError::from(StoreError::NotAnInteger {
            key: "index".to_string(),
        });

        assert!(
            error.to_string().starts_with("failed to flush store: "),
            "unexpected message: {error}"
        );
    }
}
