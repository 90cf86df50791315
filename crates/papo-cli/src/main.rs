//! papo CLI entry point.
//!
//! Binary name: `papo`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! interactive chat loop or one of the one-shot commands.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use papo_client::client::ChatApiClient;
use papo_client::config::{default_data_dir, load_config, resolve_base_url};
use papo_types::config::ClientConfig;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,papo_cli=debug,papo_client=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need config
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "papo", &mut std::io::stdout());
        return Ok(());
    }

    let config = match default_data_dir() {
        Some(data_dir) => load_config(&data_dir).await,
        None => {
            tracing::warn!("Could not determine home directory, using default configuration");
            ClientConfig::default()
        }
    };
    let base_url = resolve_base_url(&config, cli.base_url.as_deref());
    let client = ChatApiClient::new(base_url);

    match cli.command {
        None | Some(Commands::Chat) => {
            cli::chat::loop_runner::run_chat_loop(&client, &config).await?;
        }

        Some(Commands::Ask { question }) => {
            cli::ask::ask(&client, &config, &question, cli.json).await?;
        }

        Some(Commands::Feedback { vote }) => {
            cli::feedback::send(&client, vote.into(), cli.json).await?;
        }

        Some(Commands::Completions { .. }) => unreachable!("handled above"),
    }

    Ok(())
}
