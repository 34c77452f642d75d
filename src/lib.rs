//! A placeholder HTTP workload for container deployment pipelines.
//!
//! Binds to `PORT` (default 3000) and answers every request with `200 OK` and
//! a fixed plaintext greeting.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::Error;

use std::ffi::OsStr;

use config::AppConfig;

/// Resolve configuration from the raw `PORT` value and serve until shutdown.
pub async fn run(raw_port: Option<&OsStr>) -> Result<(), Error> {
    let config = AppConfig::resolve(raw_port)?;
    http::start_server(routes::create_router(), &config).await?;
    Ok(())
}
