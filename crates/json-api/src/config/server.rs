//! Server Config

use clap::Args;

/// Listener address for the cart API.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface the cart API binds to
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the cart API listens on
    #[arg(short, long, env = "PORT", default_value = "8888")]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` handed to the TCP listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
