//! ecs-demo-responder: greets every HTTP request.
//!
//! Initializes tracing, resolves the listening port from `PORT`, and serves
//! until SIGTERM/SIGINT. Configuration and bind failures exit with status 1.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecs_demo_responder::config::{LogFormat, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV, PORT_ENV};

/// Answers every HTTP request with a fixed greeting
#[derive(Parser, Debug)]
#[command(name = "ecs-demo-responder", version, about)]
struct Args {
    /// Listening port; unset, empty, or non-numeric values mean 3000
    #[arg(long, env = PORT_ENV, value_parser = clap::value_parser!(OsString))]
    port: Option<OsString>,

    /// Log level filter (e.g., "ecs_demo_responder=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, env = LOG_FORMAT_ENV, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match args.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    match ecs_demo_responder::run(args.port.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}
