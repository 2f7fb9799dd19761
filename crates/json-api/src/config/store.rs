//! Store Config

use clap::Args;

/// Where carts are kept.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StoreBackend {
    /// Process-local map, lost on restart.
    Memory,

    /// `PostgreSQL` `kv_entries` table.
    Postgres,
}

/// Cart storage settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Storage backend (memory, postgres)
    #[arg(long = "store-backend", env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Memory)]
    pub backend: StoreBackend,

    /// `PostgreSQL` connection string, required for the postgres backend
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}
