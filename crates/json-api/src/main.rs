//! Shopcart JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use shopcart_app::context::{AppContext, AppInitError};

use crate::{
    config::{ServerConfig, store::StoreBackend},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod carts;
mod config;
mod errors;
mod extensions;
mod observability;
mod router;
mod service_info;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Shopcart JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber failed to install, nothing else can report it"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    let app = match build_app_context(&config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!(backend = ?config.store.backend, "Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let doc = OpenApi::new("Shopcart API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}

async fn build_app_context(config: &ServerConfig) -> Result<AppContext, AppInitError> {
    match config.store.backend {
        StoreBackend::Memory => Ok(AppContext::in_memory()),
        StoreBackend::Postgres => {
            let url = config
                .store
                .database_url
                .as_deref()
                .ok_or(AppInitError::MissingDatabaseUrl)?;

            AppContext::from_database_url(url).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn postgres_backend_requires_database_url() -> TestResult {
        let mut config =
            ServerConfig::try_parse_from(["shopcart-json", "--store-backend", "postgres"])?;

        config.store.database_url = None;

        let result = build_app_context(&config).await;

        assert!(
            matches!(result, Err(AppInitError::MissingDatabaseUrl)),
            "expected a missing url error"
        );

        Ok(())
    }

    #[tokio::test]
    async fn memory_backend_needs_no_database() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["shopcart-json", "--store-backend", "memory"])?;

        build_app_context(&config).await?;

        Ok(())
    }
}
