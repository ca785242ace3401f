use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use web_dispatch::config::{load_config, AppConfig};
use web_dispatch::dispatch::{HandlerValue, RouteMapping};
use web_dispatch::lifecycle::{shutdown_signal, Shutdown};
use web_dispatch::security::BasicAuthFilter;
use web_dispatch::{ApplicationContext, HttpServer};

#[derive(Parser, Debug)]
#[command(name = "web-dispatch", about = "HTTP request-dispatch server")]
struct Args {
    /// Path to a TOML config file. Without it, built-in defaults apply.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing subscriber; RUST_LOG wins over the config filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "web-dispatch starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        max_connections = config.server.max_connections,
        request_timeout_secs = config.server.request_timeout_secs,
        auth_enabled = config.auth.enabled,
        "Configuration loaded"
    );

    let context = Arc::new(build_context(&config));

    // Bind TCP listener
    let listener = TcpListener::bind(&config.server.bind_address).await?;

    // Block until SIGINT/SIGTERM, then drain
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(context, config.server.clone());
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Assemble the application: sample routes plus the configured filters.
fn build_context(config: &AppConfig) -> ApplicationContext {
    let mut builder = ApplicationContext::builder()
        .route_fn(RouteMapping::get("/"), |_| async {
            HandlerValue::json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            }))
        })
        .route_fn(RouteMapping::get("/health"), |_| async {
            Ok(HandlerValue::Text("ok".into()))
        })
        .route_fn(RouteMapping::post("/echo/*"), |req| async move {
            Ok(HandlerValue::Bytes(req.into_body()))
        });

    if config.auth.enabled {
        builder = builder.filter(Arc::new(BasicAuthFilter::from_config(&config.auth)));
    }

    builder.build()
}
