mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::MonopereoClient;
use monopereo::config::{self, ConfigUpdate};
use output::{OutputConfig, OutputFormat};
use std::process;

/// CLI for the Monopereo users and items API
#[derive(Parser, Debug)]
#[clap(name = "monopereo-cli", about = "CLI for the Monopereo API")]
struct Cli {
    /// Server URL to connect to
    #[clap(long, env = "MONOPEREO_URL", global = true)]
    server_url: Option<String>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just IDs)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the server is up
    Health,
    /// Browse users
    #[command(subcommand)]
    User(commands::user::UserCommands),
    /// Browse items
    #[command(subcommand)]
    Item(commands::item::ItemCommands),
}

/// Formats an error for human-readable stderr output
fn format_error(err: &anyhow::Error) -> String {
    let err_string = err.to_string();

    if let Some(client::ClientError::Request(e)) = err.downcast_ref::<client::ClientError>() {
        if e.is_connect() || e.is_timeout() {
            return format!(
                "Could not connect to server. Is monopereo running?\n  {}",
                err_string
            );
        }
    }

    err_string
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let file_update = config::load_file_update().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring config file: {}", e);
        ConfigUpdate::default()
    });
    let server_url = config::resolve_server_url(cli.server_url, file_update);
    let client = MonopereoClient::new(server_url);
    let output_config = OutputConfig {
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Health => match client.health().await {
            Ok(health) => output::print(output::render_health(&health, &output_config))
                .map_err(anyhow::Error::from),
            Err(e) => Err(e.into()),
        },
        Commands::User(cmd) => commands::user::execute(&client, cmd, &output_config).await,
        Commands::Item(cmd) => commands::item::execute(&client, cmd, &output_config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(&e));
        process::exit(1);
    }
}
