//! PCD bot CLI
//!
//! Command-line interface for channel administration and manual checks.

#![allow(clippy::print_stdout)]

mod live_check;
mod rich_menu;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use application::WeatherService;
use clap::{Parser, Subcommand};
use infrastructure::{AppConfig, CwaWeatherAdapter, LineReplyAdapter, init_telemetry};
use integration_line::LineClient;
use tracing::error;

use crate::rich_menu::{
    DEFAULT_ACTION_TEXTS, DEFAULT_CHAT_BAR_TEXT, DEFAULT_MENU_NAME, SetupOptions,
};

/// PCD bot CLI
#[derive(Parser)]
#[command(name = "pcdbot-cli")]
#[command(author, version, about = "PCD weather bot CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a rich menu, upload its image and make it the default
    ///
    /// Requires CHANNEL_ACCESS_TOKEN.
    /// Example: pcdbot-cli setup-rich-menu --image ./menu.png
    SetupRichMenu {
        /// PNG or JPEG image, 2500x1686, at most 1 MB
        #[arg(short, long)]
        image: PathBuf,

        /// Menu name shown in the LINE admin console
        #[arg(long, default_value = DEFAULT_MENU_NAME)]
        name: String,

        /// Text on the chat bar that opens the menu
        #[arg(long, default_value = DEFAULT_CHAT_BAR_TEXT)]
        chat_bar_text: String,

        /// Six texts sent by the menu areas, row by row
        #[arg(long, value_delimiter = ',')]
        actions: Option<Vec<String>>,
    },

    /// Look up the current Banqiao weather and print the reply text
    Weather,

    /// Print the effective configuration with secrets removed
    CheckConfig {
        /// Also call the LINE and CWA APIs with the configured credentials
        #[arg(long)]
        live: bool,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Action texts for the menu, falling back to the defaults
fn action_texts(actions: Option<Vec<String>>) -> Vec<String> {
    actions.unwrap_or_else(|| DEFAULT_ACTION_TEXTS.iter().map(ToString::to_string).collect())
}

const fn status_mark(ok: bool) -> &'static str {
    if ok { "✅ reachable" } else { "❌ unreachable" }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_telemetry(config.log_format, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::SetupRichMenu {
            image,
            name,
            chat_bar_text,
            actions,
        } => {
            let client_config = config
                .line
                .client_config()
                .context("CHANNEL_ACCESS_TOKEN is not set")?;
            let client = LineClient::new(client_config)?;
            let texts = action_texts(actions);

            let options = SetupOptions {
                image: &image,
                name: &name,
                chat_bar_text: &chat_bar_text,
                action_texts: &texts,
            };

            match rich_menu::setup_rich_menu(&client, &options).await {
                Ok(rich_menu_id) => println!("✅ Default rich menu: {rich_menu_id}"),
                Err(e) => {
                    error!(error = %e, "Rich menu setup failed");
                    anyhow::bail!("rich menu setup failed: {e}");
                },
            }
        },

        Commands::Weather => {
            let adapter = CwaWeatherAdapter::from_config(&config.weather)
                .context("Failed to initialize weather client")?;
            let service = WeatherService::new(Arc::new(adapter));

            println!("{}", service.fetch_banqiao_weather().await);
        },

        Commands::CheckConfig { live } => {
            println!("⚙️  Configuration:");
            println!("{}", serde_json::to_string_pretty(&config)?);

            let missing = config.missing_credentials();
            let mut healthy = missing.is_empty();
            if healthy {
                println!("\n✅ Ready");
            } else {
                println!("\n❌ Missing: {}", missing.join(", "));
            }

            if live {
                let line = LineReplyAdapter::from_config(&config.line)
                    .context("Failed to initialize LINE client")?;
                let weather = CwaWeatherAdapter::from_config(&config.weather)
                    .context("Failed to initialize weather client")?;
                let status =
                    live_check::check_upstreams(&line, &WeatherService::new(Arc::new(weather)))
                        .await;

                println!("LINE Messaging API: {}", status_mark(status.line));
                println!("CWA open data:      {}", status_mark(status.weather));
                healthy &= status.all_ok();
            }

            if !healthy {
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
