use std::io::BufReader;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{debug, info, warn};

use common::config::ViewerConfig;
use common::logger;
use dashboard::{RefreshMode, SignalViewController, TerminalView};
use signal_feed::SignalClient;

use crate::commands::{Command, HELP};

mod commands;
mod input;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logger::setup_logger();
    debug!("Signal viewer starting up...");

    let config = ViewerConfig::from_env().context("Invalid viewer configuration")?;
    let client = SignalClient::new(&config.origin, config.http_timeout)?;
    info!(
        "Polling {} for {} {}",
        client.endpoint(),
        config.selection.symbol,
        config.selection.timeframe
    );

    let mut controller =
        SignalViewController::new(client, TerminalView::stdout(), config.selection);

    println!("{}", HELP);
    controller.refresh();

    let mut lines = input::spawn_line_reader(BufReader::new(std::io::stdin()))
        .context("Failed to start stdin reader")?;

    loop {
        tokio::select! {
            line = lines.recv() => {
                let Some(line) = line else {
                    debug!("stdin closed");
                    break;
                };

                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => handle(&mut controller, command).await,
                    Ok(None) => {}
                    Err(e) => warn!("{}", e),
                }
            }

            _ = tokio::signal::ctrl_c() => {
                debug!("Ctrl-C received");
                break;
            }
        }
    }

    info!("Signal viewer shutting down.");
    Ok(())
}

async fn handle(
    controller: &mut SignalViewController<SignalClient, TerminalView<std::io::Stdout>>,
    command: Command,
) {
    match command {
        Command::Refresh => {
            controller.refresh();
        }
        Command::ToggleAuto => {
            if controller.toggle_auto_refresh().await == RefreshMode::Manual {
                debug!("Back to manual refresh");
            }
        }
        Command::Symbol(symbol) => {
            if controller.set_symbol(symbol).await.is_none() {
                info!("Symbol changed, next auto refresh will use it");
            }
        }
        Command::Timeframe(timeframe) => {
            controller.set_timeframe(timeframe).await;
            info!("Timeframe changed, applies to the next refresh");
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}
