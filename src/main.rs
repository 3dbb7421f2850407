//! stickyfoot - A terminal layout demo with a sticky footer.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use anyhow::Context;
use stickyfoot_config::Config;
use stickyfoot_protocol::{Message, demo::demo_content};
use stickyfoot_tui::{App, event::CrosstermEvents, terminal};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::default();
    config.validate()?;

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _log_guard = logging::init(&config.log)?;
    tracing::info!(log = %config.log.path.display(), "starting stickyfoot");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Forward process interrupts to the app as quit requests
    let (interrupt_tx, interrupt_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt signal received");
            let _ = interrupt_tx.send(Message::Quit);
        }
    });

    let mut app = App::new(demo_content(), config.theme).with_interrupts(interrupt_rx);

    // Run the main loop
    let result = app
        .run(&mut terminal, &mut CrosstermEvents::default())
        .await
        .context("event loop failed");

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    match &result {
        Ok(()) => tracing::info!("exited cleanly"),
        Err(e) => tracing::error!("exited with error: {e:#}"),
    }
    result
}
