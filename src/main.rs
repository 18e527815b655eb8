mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use proximo_core::config::ProximoConfig;
use proximo_core::repository::{HttpRepository, MemoryRepository};
use proximo_core::state::Filter;
use proximo_core::App;
use tracing_subscriber::EnvFilter;

use crate::utils::tui::with_spinner;

#[derive(Parser)]
#[command(name = "proximo")]
#[command(about = "Browse student events and post your own")]
struct Cli {
    /// Use a local in-memory event store with demo data instead of the service
    #[arg(long, global = true)]
    memory: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive front end (default)
    Shell,
    /// Print the event list
    Events {
        /// Only show this event type (Hackathon, Seminar, Webinar, Workshop, All)
        #[arg(short = 't', long = "type")]
        event_type: Option<Filter>,

        /// Only show events posted by this organizer email
        #[arg(short, long)]
        organizer: Option<String>,
    },
    /// Talk to the event assistant
    Chat,
    /// Show configuration, or change the service URL
    Config {
        #[arg(long)]
        api_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ProximoConfig::load()?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let delay = config.chat_reply_delay()?;
            if cli.memory {
                commands::shell::run(App::new(MemoryRepository::demo()), delay).await
            } else {
                let repo = connect(&config).await?;
                commands::shell::run(App::new(repo), delay).await
            }
        }
        Commands::Events {
            event_type,
            organizer,
        } => {
            let filter = event_type.unwrap_or_default();
            if cli.memory {
                commands::events::run(&MemoryRepository::demo(), filter, organizer.as_deref()).await
            } else {
                let repo = connect(&config).await?;
                commands::events::run(&repo, filter, organizer.as_deref()).await
            }
        }
        Commands::Chat => commands::chat::run(config.chat_reply_delay()?).await,
        Commands::Config { api_url } => commands::config::run(config, api_url),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reach the event service before handing it to a command.
async fn connect(config: &ProximoConfig) -> Result<HttpRepository> {
    let repo = HttpRepository::new(&config.api_url);
    let message = format!("Connecting to {}", repo.base_url());

    if let Err(e) = with_spinner(&message, repo.health()).await {
        tracing::debug!(error = %e, "health check failed");
        anyhow::bail!(
            "Could not reach the event service at {}.\n\n\
            Start it with:\n  \
            proximo-server\n\n\
            Or try the offline demo:\n  \
            proximo --memory",
            repo.base_url()
        );
    }

    Ok(repo)
}
