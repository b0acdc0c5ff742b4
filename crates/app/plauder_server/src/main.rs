//! Plauder chat server binary.
//!
//! Serves `POST /chat` and, with `--static-dir`, the page hosting the widget.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use plauder_api::config::{
    ApiConfig, DEFAULT_API_BASE, DEFAULT_BIND_ADDR, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
};
use plauder_api::services::completion::OpenAiBackend;
use tracing::{info, warn};

/// CLI arguments for the chat server.
#[derive(Parser, Debug)]
#[command(name = "plauder_server", version, about = "Plauder chat server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind: String,

    /// API key of the completion provider.
    #[arg(long, env = "API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Base URL of an OpenAI-compatible API.
    #[arg(long, env = "API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Model used for completions.
    #[arg(long, env = "MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// System prompt sent before every user message.
    #[arg(long, env = "SYSTEM_PROMPT", default_value = DEFAULT_SYSTEM_PROMPT)]
    system_prompt: String,

    /// Directory with index.html and the wasm-pack output (`pkg/`).
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

impl From<Args> for ApiConfig {
    fn from(args: Args) -> Self {
        ApiConfig {
            bind_addr: args.bind,
            api_key: args.api_key,
            api_base: args.api_base,
            model: args.model,
            system_prompt: args.system_prompt,
            static_dir: args.static_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,plauder_api=debug,plauder_core=debug".into()),
        )
        .init();

    let config = ApiConfig::from(Args::parse());

    if config.api_key.is_empty() {
        warn!("API_KEY is not set, completion requests are sent without authorization");
    }
    if let Some(dir) = &config.static_dir {
        info!(dir = %dir.display(), "serving static files");
    }

    let state = plauder_api::AppState {
        backend: Arc::new(OpenAiBackend::from_config(&config)),
        config: config.clone(),
    };
    let app = plauder_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, model = %config.model, api_base = %config.api_base, "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chat server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
