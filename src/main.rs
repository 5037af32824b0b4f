mod client;
mod commands;
mod config;
mod render;
mod store;

use anyhow::Result;
use clap::{Parser, Subcommand};
use flexi_logger::Logger;

use client::ApiClient;
use commands::categories::CategoryCommand;
use config::Config;

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Your personal calendar in the terminal: month grid, events and categories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show the month grid (current month by default)
    Month {
        /// Month to show as YYYY-MM
        month: Option<String>,
    },
    /// Show one day's events
    Day {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Create an event
    New {
        title: Option<String>,

        /// Start as YYYY-MM-DDTHH:MM
        #[arg(short, long)]
        start: Option<String>,

        /// End as YYYY-MM-DDTHH:MM
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Change an event
    Edit {
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        /// Start as YYYY-MM-DDTHH:MM
        #[arg(short, long)]
        start: Option<String>,

        /// End as YYYY-MM-DDTHH:MM
        #[arg(short, long)]
        end: Option<String>,

        /// Remove the end time
        #[arg(long, conflicts_with = "end")]
        clear_end: bool,

        #[arg(short, long)]
        description: Option<String>,

        /// Category name
        #[arg(short, long)]
        category: Option<String>,

        /// Remove the category
        #[arg(long, conflicts_with = "category")]
        clear_category: bool,
    },
    /// Delete an event
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) { "debug" } else { "warn" };
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?.start()?;

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Login { username } => commands::login::login(config, username).await,
        Commands::Register { username } => commands::login::register(config, username).await,
        Commands::Logout => commands::login::logout(config),
        Commands::Month { month } => {
            let client = require_session(&config)?;
            commands::month::run(&client, month).await
        }
        Commands::Day { date } => {
            let client = require_session(&config)?;
            commands::day::run(&client, date).await
        }
        Commands::New {
            title,
            start,
            end,
            description,
            category,
        } => {
            let client = require_session(&config)?;
            commands::new::run(&client, title, start, end, description, category).await
        }
        Commands::Edit {
            id,
            title,
            start,
            end,
            clear_end,
            description,
            category,
            clear_category,
        } => {
            let client = require_session(&config)?;
            let args = commands::edit::EditArgs {
                title,
                start,
                end,
                clear_end,
                description,
                category,
                clear_category,
            };
            commands::edit::run(&client, id, args).await
        }
        Commands::Delete { id, yes } => {
            let client = require_session(&config)?;
            commands::delete::run(&client, id, yes).await
        }
        Commands::Categories { command } => {
            let client = require_session(&config)?;
            commands::categories::run(&client, command).await
        }
    }
}

fn require_session(config: &Config) -> Result<ApiClient> {
    let client = ApiClient::new(config);

    if !client.is_authenticated() {
        anyhow::bail!(
            "Not logged in.\n\n\
            Log in with:\n  \
            calgrid login\n\n\
            Or create an account first:\n  \
            calgrid register"
        );
    }

    Ok(client)
}
