/// Team Task List terminal front end
///
/// Logs in, loads the shared list once, applies a single dashboard
/// transition and prints the result.
mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use tasklist_client::{ClientConfig, TaskListClient};
use tasklist_core::TaskId;
use tasklist_dashboard::Dashboard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Shared team task list", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "TASKLIST_SERVER_URL", default_value = "http://localhost:3001")]
    server: String,

    #[arg(short, long, env = "TASKLIST_USERNAME")]
    username: String,

    #[arg(short, long, env = "TASKLIST_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tasks, newest first
    List {
        /// Case-insensitive filter over author and text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a task
    Add { text: String },
    /// Flip the completed flag of one of your tasks
    Toggle { id: TaskId },
    /// Replace the text of one of your tasks
    Edit { id: TaskId, text: String },
    /// Delete one of your tasks
    Delete {
        id: TaskId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show counters over the whole list
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let client = TaskListClient::new(ClientConfig::new(&cli.server))
        .with_context(|| format!("Invalid server URL '{}'", cli.server))?;
    let user = client
        .login(&cli.username, &cli.password)
        .await
        .context("Login failed")?;

    let mut dashboard = Dashboard::new(client, user);
    let loaded = dashboard.load().await;
    render::notifications(&dashboard.drain_notifications());
    loaded.context("Could not load tasks")?;

    let outcome = run(&mut dashboard, cli.command).await;
    render::notifications(&dashboard.drain_notifications());
    outcome
}

async fn run(dashboard: &mut Dashboard<TaskListClient>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::List { search } => {
            if let Some(term) = search {
                dashboard.set_search(term);
            }
            render::list(dashboard);
        }
        Commands::Add { text } => {
            dashboard.set_draft(text);
            if dashboard.add_task().await?.is_none() {
                anyhow::bail!("Task text must not be blank");
            }
        }
        Commands::Toggle { id } => {
            let task = dashboard.toggle_task(id).await?;
            println!("{}", render::line(&task));
        }
        Commands::Edit { id, text } => {
            dashboard.start_edit(id)?;
            dashboard.set_edit_text(text)?;
            let task = dashboard.save_edit().await?;
            println!("{}", render::line(&task));
        }
        Commands::Delete { id, yes } => {
            dashboard
                .delete_task(id, |task| yes || confirm(&task.text))
                .await?;
        }
        Commands::Stats => {
            render::stats(&dashboard.stats());
        }
    }

    Ok(())
}

/// Ask on the terminal; anything but "y"/"yes" declines
fn confirm(text: &str) -> bool {
    print!("Delete \"{}\"? [y/N] ", text);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
