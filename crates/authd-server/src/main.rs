//! authd - credential-based authentication service
//!
//! | Command | Description |
//! |---------|-------------|
//! | `authd serve` | Run the HTTP server |
//! | `authd login -u USER -p PASS` | Log in against a server and print the token |
//! | `authd init-config` | Write a default `authd.toml` |

use authd_server::{run_init_config, run_login, run_server};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for authd
#[derive(Parser, Debug)]
#[command(name = "authd")]
#[command(about = "authd - username/password login issuing signed access tokens")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// authd subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the authentication server
    Serve {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Log in and print the access token
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password (prefer `AUTHD_PASSWORD` over the command line)
        #[arg(short, long, env = "AUTHD_PASSWORD", hide_env_values = true)]
        password: String,

        /// Server URL (overrides `client.server_url`)
        #[arg(short, long)]
        server: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination path
        #[arg(short, long, default_value = "authd.toml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {
        Command::Serve { config } => run_server(config.as_deref()).await,
        Command::Login {
            username,
            password,
            server,
            config,
        } => {
            let token = run_login(config.as_deref(), server, &username, &password).await?;
            println!("{token}");
            Ok(())
        }
        Command::InitConfig { output } => {
            run_init_config(&output)?;
            println!(
                "Wrote {}; set auth.jwt.secret before serving",
                output.display()
            );
            Ok(())
        }
    }
}
