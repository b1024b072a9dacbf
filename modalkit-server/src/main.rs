mod routes;
mod store;

use clap::Parser;
use routes::{app_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use store::SqliteConfigStore;
use tracing::{error, info, warn};

/// modalkit server: stores modal configs and serves the builder and embed pages.
#[derive(Parser)]
#[command(name = "modalkit-server")]
struct Args {
    /// SQLite connection string, e.g. `sqlite://modalkit.db`.
    #[arg(long, env = "MODALKIT_DATABASE_URL")]
    database_url: Option<String>,

    /// Public base URL used to build embed links.
    #[arg(long, env = "MODALKIT_PUBLIC_URL")]
    public_url: Option<String>,

    /// Port for the HTTP server.
    #[arg(long, default_value = "8080", env = "MODALKIT_PORT")]
    port: u16,

    /// Address to bind the server to.
    #[arg(long, default_value = "0.0.0.0", env = "MODALKIT_BIND")]
    bind: String,

    /// Directory holding the compiled web bundle (index.html + assets).
    #[arg(long, env = "MODALKIT_WEB_DIR")]
    web_dir: Option<PathBuf>,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    configure_logging();
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    let args = Args::parse();

    info!("modalkit-server starting");

    let database_url = args.database_url.unwrap_or_else(|| {
        error!("--database-url (MODALKIT_DATABASE_URL) is required");
        std::process::exit(1);
    });
    let public_url = args.public_url.unwrap_or_else(|| {
        error!("--public-url (MODALKIT_PUBLIC_URL) is required");
        std::process::exit(1);
    });

    info!("Opening database at {database_url}");
    let store = SqliteConfigStore::connect(&database_url)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to open database: {e}");
            std::process::exit(1);
        });

    match &args.web_dir {
        Some(dir) if !dir.join("index.html").exists() => {
            warn!("No index.html in {}, page routes will 404", dir.display());
        }
        Some(dir) => info!("Serving web bundle from {}", dir.display()),
        None => info!("No web dir configured, serving the API only"),
    }

    let state = Arc::new(AppState {
        store: Arc::new(store),
        public_url,
    });
    let app = app_router(state, args.web_dir.as_deref());
    let addr = format!("{}:{}", args.bind, args.port);

    info!("Binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("modalkit-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
