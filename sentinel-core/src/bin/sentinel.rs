//! sentinel - command line front end
//!
//! Evaluates telemetry snapshots (v2) or raw contract v3 requests and prints
//! the result as JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use sentinel_core::constants::{APP_NAME, APP_VERSION};
use sentinel_core::logic::config::load_config;
use sentinel_core::SentinelClient;

#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(version, about = APP_NAME, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single telemetry snapshot (v2 result)
    Snapshot {
        /// JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        file: String,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Sentinel config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run a raw contract v3 request
    V3 {
        /// JSON file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        file: String,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Sentinel config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn read_input(file: &str) -> Result<Vec<u8>> {
    if file == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read(Path::new(file)).with_context(|| format!("Failed to read {}", file))
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

fn build_client(config: Option<&Path>) -> Result<SentinelClient> {
    let config = load_config(config).context("Failed to load config")?;
    Ok(SentinelClient::new(config))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot { file, pretty, config } => {
            let body = read_input(&file)?;
            let value: Value = match serde_json::from_slice(&body) {
                Ok(v) => v,
                Err(_) => bail!("Invalid JSON input"),
            };
            let Value::Object(raw) = value else {
                bail!("Snapshot must be a single object");
            };

            let client = build_client(config.as_deref())?;
            let result = client.evaluate(&raw).context("Telemetry could not be scored")?;
            print_json(&result, pretty)?;
        }

        Commands::V3 { file, pretty, config } => {
            let body = read_input(&file)?;
            let client = build_client(config.as_deref())?;
            // Never fails: errors come back as a fail-closed ERROR response
            print_json(&client.evaluate_v3_bytes(&body), pretty)?;
        }

        Commands::Version => {
            print_json(&serde_json::json!({ "sentinel_ai_v2": APP_VERSION }), false)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_about_names_the_app() {
        let about = Cli::command().get_about().map(|s| s.to_string());
        assert_eq!(about.as_deref(), Some(APP_NAME));
    }

    #[test]
    fn test_v3_reads_stdin_by_default() {
        let cli = Cli::try_parse_from(["sentinel", "v3", "--pretty"]).unwrap();
        assert!(matches!(cli.command, Commands::V3 { ref file, pretty: true, .. } if file == "-"));
    }
}
