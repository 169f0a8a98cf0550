//! CLI entry and dispatch.

use std::process::ExitCode;

use anyhow::{Context, Result};
use chatgate_core::config::{self, Config};
use chatgate_core::logging;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "chatgate")]
#[command(version)]
#[command(about = "Log in to or register with the chat server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Chat server base URL (overrides config)
    #[arg(long, global = true, env = "CHATGATE_SERVER_URL", value_name = "URL")]
    server: Option<String>,

    /// Open the chat page in the system browser after a successful login
    #[arg(long, global = true)]
    open: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long, env = "CHATGATE_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        username: String,

        /// Account password
        #[arg(long, env = "CHATGATE_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Password confirmation
        #[arg(long, env = "CHATGATE_PASSWORD_CHECK", hide_env_values = true)]
        password_check: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => {
            let config_path = config::paths::config_path();
            match command {
                ConfigCommands::Path => commands::config::path(&config_path),
                ConfigCommands::Init => commands::config::init(&config_path),
            }
        }
        None => {
            let config = load_config(cli.server, cli.open)?;
            let rt = runtime()?;
            let _log_guard =
                logging::init_file(&config::paths::log_dir(), &config.log_level)?;
            let _enter = rt.enter();
            commands::interactive::run(&config)
        }
        Some(Commands::Login { email, password }) => {
            let config = load_config(cli.server, cli.open)?;
            let rt = runtime()?;
            logging::init_stderr(&config.log_level)?;
            rt.block_on(commands::auth::login(
                &config,
                email,
                password.unwrap_or_default(),
            ))
        }
        Some(Commands::Register {
            email,
            username,
            password,
            password_check,
        }) => {
            let config = load_config(cli.server, cli.open)?;
            let rt = runtime()?;
            logging::init_stderr(&config.log_level)?;
            rt.block_on(commands::auth::register(
                &config,
                chatgate_core::RegisterFields::new(
                    email,
                    username,
                    password.unwrap_or_default(),
                    password_check.unwrap_or_default(),
                ),
            ))
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(server: Option<String>, open: bool) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(server) = server {
        config.server_url = server;
    }
    if open {
        config.open_browser = true;
    }
    Ok(config)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("create tokio runtime")
}
