//! ConfigGreeter: a minimal web application that reads externalized
//! configuration (greeting message, numeric value, service credentials,
//! deployment metadata) and renders it on a single page.
//!
//! The recognized keys and their defaults live in [`settings::GreeterSettings`];
//! the layered configuration source is [`config::GreeterConfig`].

pub mod config;
pub mod error;
pub mod greeter;
pub mod render;
pub mod settings;

use tracing_subscriber::EnvFilter;

/// Initialises the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` with `tower_http` at debug.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".parse().unwrap()),
        )
        .init();
}
