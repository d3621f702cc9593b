//! Demo caller: fetch the todo once and print its title.
//!
//! `TODO_BASE_URL` overrides the public endpoint (e.g. a local mock server).
//! `RUST_LOG` controls log output, which goes to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use todo_core::{TodoClient, UreqSession, DEFAULT_BASE_URL};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let base_url = std::env::var("TODO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = TodoClient::with_base_url(Arc::new(UreqSession::new()), &base_url);
    info!(url = %client.build_get_todo().url, "fetching todo");

    match client.fetch_async().await {
        Ok(todo) => {
            println!("{}", todo.title);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, status = ?err.status(), "fetch failed");
            ExitCode::FAILURE
        }
    }
}
