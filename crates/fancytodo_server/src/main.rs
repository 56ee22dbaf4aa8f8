//! fancytodo HTTP server entry point.
//!
//! Serves the todo CRUD API on 127.0.0.1:4300 by default; override with
//! `FANCYTODO_ADDR`. File logging activates when `FANCYTODO_LOG_DIR` is set.

use fancytodo_server::{build_router, AppState};
use log::info;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;

const DEFAULT_ADDR: &str = "127.0.0.1:4300";

#[tokio::main]
async fn main() -> ExitCode {
    if let Ok(log_dir) = env::var("FANCYTODO_LOG_DIR") {
        if let Err(err) =
            fancytodo_core::init_logging(fancytodo_core::default_log_level(), &log_dir)
        {
            eprintln!("logging disabled: {err}");
        }
    }

    let addr = env::var("FANCYTODO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let router = build_router(Arc::new(AppState::new()));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("failed to bind {addr}: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!("event=http_listen module=server status=ok addr={addr}");
    if let Err(err) = axum::serve(listener, router).await {
        eprintln!("server error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
