// SmartSum - CLI entry point

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use smartsum::commands;
use smartsum::models::settings::SettingsUpdate;
use smartsum::services::clipboard::SystemClipboard;
use smartsum::services::orchestrator::Navigator;
use smartsum::state::AppState;
use smartsum::utils::error::AppResult;
use smartsum_core::{Granularity, InputMode};

#[derive(Parser)]
#[command(author, version, about = "Turn text and web articles into concise summaries")]
#[command(propagate_version = true)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize raw text (reads stdin when no text is given)
    Text {
        /// The text to summarize
        content: Option<String>,

        /// Summary length tier
        #[arg(short, long, value_enum)]
        granularity: Option<GranularityOpt>,

        /// Copy the summary to the clipboard
        #[arg(long)]
        copy: bool,

        /// Use the built-in sample text
        #[arg(long)]
        sample: bool,
    },

    /// Summarize a web page
    Url {
        /// The page address, starting with http:// or https://
        address: String,

        /// Summary length tier
        #[arg(short, long, value_enum)]
        granularity: Option<GranularityOpt>,

        /// Copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Log in and store a session token
    Login { username: String, password: String },

    /// Create a new account
    Register {
        username: String,
        email: String,
        password: String,
    },

    /// Destroy the current session
    Logout,

    /// Manage past summaries
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Show or update configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List retained summaries, most recent first
    List,

    /// Show one summary in full (accepts an id prefix)
    Show {
        id: String,

        /// Copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Delete one summary (accepts an id prefix)
    Delete { id: String },

    /// Delete all summaries
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,

    /// Update configuration values
    Set {
        #[arg(long)]
        api_base_url: Option<String>,

        #[arg(long)]
        fetch_timeout_secs: Option<u64>,

        #[arg(long)]
        summarize_timeout_secs: Option<u64>,

        #[arg(long, value_enum)]
        default_granularity: Option<GranularityOpt>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GranularityOpt {
    /// 1-2 sentences
    Brief,
    /// 3-5 sentences
    Standard,
    /// Full paragraph
    Detailed,
}

impl From<GranularityOpt> for Granularity {
    fn from(value: GranularityOpt) -> Self {
        match value {
            GranularityOpt::Brief => Granularity::Brief,
            GranularityOpt::Standard => Granularity::Standard,
            GranularityOpt::Detailed => Granularity::Detailed,
        }
    }
}

/// Terminal stand-in for the login redirect
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn go_to_login(&self) {
        eprintln!("Run `smartsum login <username> <password>` to sign in again.");
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let state = AppState::initialize(
        Arc::new(TerminalNavigator),
        Arc::new(SystemClipboard::new()),
    )?;

    match cli.command {
        Commands::Text {
            content,
            granularity,
            copy,
            sample,
        } => {
            let content = match (content, sample) {
                (_, true) => commands::summarize::SAMPLE_TEXT.to_string(),
                (Some(text), false) => read_text_argument(text)?,
                (None, false) => read_stdin()?,
            };
            let granularity = resolve_granularity(&state, granularity).await;
            commands::summarize::run(&state, content, InputMode::Text, granularity, copy).await
        }
        Commands::Url {
            address,
            granularity,
            copy,
        } => {
            let granularity = resolve_granularity(&state, granularity).await;
            commands::summarize::run(&state, address, InputMode::Url, granularity, copy).await
        }
        Commands::Login { username, password } => {
            commands::auth::login(&state, &username, &password).await
        }
        Commands::Register {
            username,
            email,
            password,
        } => commands::auth::register(&state, &username, &email, &password).await,
        Commands::Logout => commands::auth::logout(&state).await,
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list(&state).await,
            HistoryAction::Show { id, copy } => commands::history::show(&state, &id, copy).await,
            HistoryAction::Delete { id } => commands::history::delete(&state, &id).await,
            HistoryAction::Clear => commands::history::clear(&state).await,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::settings::show(&state).await,
            ConfigAction::Set {
                api_base_url,
                fetch_timeout_secs,
                summarize_timeout_secs,
                default_granularity,
            } => {
                let update = SettingsUpdate {
                    api_base_url,
                    fetch_timeout_secs,
                    summarize_timeout_secs,
                    default_granularity: default_granularity.map(Into::into),
                };
                commands::settings::set(&state, update).await
            }
        },
    }
}

async fn resolve_granularity(state: &AppState, opt: Option<GranularityOpt>) -> Granularity {
    match opt {
        Some(value) => value.into(),
        None => state.get_config().await.default_granularity,
    }
}

/// Treat `@path` arguments as files, everything else as literal text
fn read_text_argument(argument: String) -> AppResult<String> {
    if let Some(path) = argument.strip_prefix('@') {
        return Ok(std::fs::read_to_string(Path::new(path))?);
    }
    Ok(argument)
}

fn read_stdin() -> AppResult<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
