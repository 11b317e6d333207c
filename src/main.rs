//! Ping server - answers `GET /ping` with a fixed JSON payload.
//!
//! HTTP API is powered by Axum.
use anyhow::Context;
use axum::Server;
use hyper::server::{conn::AddrIncoming, Builder};
use std::net::SocketAddr;

// Re-exports
pub use error::HttpError;

// Modules
mod api;
mod config;
mod error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read configuration.
    let cfg = config::get_config()?;

    // Log to stdout, RUST_LOG takes precedence over the configured level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cfg.log_level))
        .target(env_logger::Target::Stdout)
        .init();

    log::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let server = bind(cfg.listen_addr())?.serve(api::router().into_make_service());
    // Socket is bound but not yet polled, so this precedes the first accept.
    log::info!("Server is running on {}", listening_url(server.local_addr()));

    server.await.context("Server error")?;

    Ok(())
}

/// Bind the listening socket. Failure is fatal, there is no retry.
fn bind(addr: SocketAddr) -> anyhow::Result<Builder<AddrIncoming>> {
    Server::try_bind(&addr).with_context(|| format!("Failed to bind {addr}"))
}

fn listening_url(addr: SocketAddr) -> String {
    format!("http://localhost:{}", addr.port())
}
