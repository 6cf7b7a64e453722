//! lingua-client command line.
//!
//! ```text
//!  CLI args ──▶ config (TOML + env) ──▶ LinguaClient
//!                                          │
//!              translate ──────────────────┼──▶ POST {api}/translate
//!              fetch ──▶ sanitize ─────────┼──▶ POST {api}/fetch-content (retry + backoff)
//!              probe ──────────────────────┴──▶ HEAD {url}
//!              sanitize / domain (local only)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use lingua_client::config::{self, validation::validate_config, ClientConfig, ConfigError};
use lingua_client::net;
use lingua_client::observability::init_logging;
use lingua_client::{FetchOptions, LinguaClient, TranslationRequest};

#[derive(Parser)]
#[command(name = "lingua-client")]
#[command(about = "Translate text and extract web page content through the translation API", long_about = None)]
struct Cli {
    /// TOML configuration file. Environment overrides still apply.
    #[arg(short, long, env = "LINGUA_CONFIG")]
    config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a piece of text
    Translate {
        text: String,
        /// Target language code
        #[arg(short, long)]
        to: String,
        /// Source language code (default: en)
        #[arg(short, long)]
        from: Option<String>,
    },
    /// Fetch and extract the content of a web page
    Fetch {
        url: String,
        /// Ask for plain text without formatting
        #[arg(long)]
        no_formatting: bool,
    },
    /// Check whether a URL answers a HEAD request
    Probe { url: String },
    /// Normalize a user-typed URL
    Sanitize { url: String },
    /// Print the hostname of a URL
    Domain { url: String },
}

fn load(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_from_env()?,
    };

    if let Some(base) = &cli.api_base {
        config.api.base_url = base.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn fail(err: impl std::fmt::Display) -> ExitCode {
    eprintln!("Error: {}", err);
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Warning: logging not initialized: {}", e);
    }

    let client = match LinguaClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => return fail(e),
    };

    match cli.command {
        Commands::Translate { text, to, from } => {
            let mut request = TranslationRequest::new(text, to);
            request.source_language = from;
            match client.translate(&request).await {
                Ok(response) => print_json(&response),
                Err(e) => fail(e),
            }
        }
        Commands::Fetch { url, no_formatting } => {
            let url = match net::sanitize(&url) {
                Ok(url) => url,
                Err(e) => return fail(e),
            };
            let options = FetchOptions {
                preserve_formatting: !no_formatting,
            };
            match client.fetch_content(&url, options).await {
                Ok(result) => print_json(&result),
                Err(e) => fail(e),
            }
        }
        Commands::Probe { url } => {
            let reachable = client.check_reachable(&url).await;
            print_json(&serde_json::json!({ "url": url, "reachable": reachable }))
        }
        Commands::Sanitize { url } => match net::sanitize(&url) {
            Ok(url) => print_json(&serde_json::json!({ "url": url })),
            Err(e) => fail(e),
        },
        Commands::Domain { url } => print_json(&serde_json::json!({ "domain": net::domain_of(&url) })),
    }
}
