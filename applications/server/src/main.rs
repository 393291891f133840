/// Team Task List Server - shared task backend over a JSON document
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tasklist_core::{TaskStore, User};
use tasklist_server::{config::ServerConfig, create_router, ApiVariant, AppState};
use tasklist_storage::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tasklist-server")]
#[command(about = "Team task list backend", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./tasklist.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Route set to expose (overrides the configuration)
        #[arg(long, value_enum)]
        variant: Option<ApiVariant>,
    },
    /// Write a fresh document seeded with users
    Init {
        /// Seed user, as NAME:PASSWORD (repeatable)
        #[arg(short, long = "user")]
        users: Vec<String>,
        /// Replace an existing document
        #[arg(long)]
        force: bool,
    },
    /// List usernames stored in the document
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist_server=info,tasklist_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { variant } => {
            if let Some(variant) = variant {
                config.server.variant = variant;
            }
            serve(config).await?;
        }
        Commands::Init { users, force } => {
            init_document(&config, &users, force).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting task list server");
    tracing::info!("Variant: {}", config.server.variant.as_str());
    tracing::info!("Document: {}", config.storage.path.display());

    let store: Arc<dyn TaskStore> = Arc::new(JsonFileStore::new(config.storage.path.clone()));
    let app = create_router(AppState::new(store, config.server.variant));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn init_document(config: &ServerConfig, users: &[String], force: bool) -> anyhow::Result<()> {
    let users = users
        .iter()
        .map(|spec| {
            spec.split_once(':')
                .map(|(name, password)| User::new(name, password))
                .with_context(|| format!("Invalid user '{}', expected NAME:PASSWORD", spec))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let store = JsonFileStore::new(config.storage.path.clone());
    store.initialize(users.clone(), force).await?;

    tracing::info!(
        "Wrote {} with {} user(s)",
        store.path().display(),
        users.len()
    );
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = JsonFileStore::new(config.storage.path.clone());
    let users = store.list_users().await?;

    println!("Users:");
    for user in users {
        println!("  {}", user.username);
    }

    Ok(())
}
