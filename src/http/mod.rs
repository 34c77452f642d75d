//! HTTP listener lifecycle.
//!
//! Binding is done up front with a std listener so that an occupied port is
//! reported before anything is served. The bound listener is then handed to
//! `axum-server`, whose `Handle` drives graceful shutdown on SIGTERM/SIGINT.

mod server;
pub mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
