//! licensegate - command-line front end for the auth client
//!
//! Prints the service's JSON response on stdout and exits 0 only when the
//! response reports success. Logs go to stderr (`RUST_LOG` controls them).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use licensegate::config::resolve_config;
use licensegate::{AuthClient, Response, get_hwid};

#[derive(Parser)]
#[command(name = "licensegate", version, about = "User login and license checks")]
struct Cli {
    /// JSON config file (defaults to build-time values, then <exe>.config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate a user
    Login {
        username: String,
        #[arg(env = "LICENSEGATE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Hardware id to send instead of the computed one
        #[arg(long)]
        hwid: Option<String>,
    },
    /// Check a license key
    Check { license: String },
    /// Register a user with a license key
    Register {
        username: String,
        password: String,
        license: String,
        #[arg(long)]
        hwid: Option<String>,
    },
    /// Print this machine's hardware id
    Hwid,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "licensegate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config_path = cli.config.as_deref();

    let response = match cli.command {
        Command::Hwid => {
            println!("{}", get_hwid());
            return Ok(true);
        }
        Command::Login {
            username,
            password,
            hwid,
        } => connect(config_path)?.login(&username, &password, hwid.as_deref()),
        Command::Check { license } => connect(config_path)?.check_license(&license),
        Command::Register {
            username,
            password,
            license,
            hwid,
        } => connect(config_path)?.register(&username, &password, &license, hwid.as_deref()),
    };

    print_response(&response)?;
    Ok(response.success())
}

fn connect(config_path: Option<&Path>) -> anyhow::Result<AuthClient> {
    let config = resolve_config(config_path).context("failed to load configuration")?;
    tracing::debug!(api_url = %config.api_url, "client configured");
    AuthClient::new(config).context("failed to create client")
}

fn print_response(response: &Response) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(response).context("failed to render response")?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login_with_hwid() {
        let cli = Cli::parse_from(["licensegate", "login", "alice", "pw", "--hwid", "42"]);
        match cli.command {
            Command::Login { username, hwid, .. } => {
                assert_eq!(username, "alice");
                assert_eq!(hwid.as_deref(), Some("42"));
            }
            _ => panic!("expected login"),
        }
    }

    #[test]
    fn test_parse_check_with_config() {
        let cli = Cli::parse_from(["licensegate", "check", "ABC-123", "--config", "app.config"]);
        assert_eq!(cli.config, Some(PathBuf::from("app.config")));
        assert!(matches!(cli.command, Command::Check { ref license } if license == "ABC-123"));
    }
}
