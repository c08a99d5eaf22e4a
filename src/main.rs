use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use lapwatch::app::action::Action;
use lapwatch::app::event::AppEvent;
use lapwatch::app::handler;
use lapwatch::app::state::AppState;
use lapwatch::app::ticker::Ticker;
use lapwatch::cli::Cli;
use lapwatch::config::{self, AppConfig};
use lapwatch::engine::SystemClock;
use lapwatch::{logging, ui};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);

    if cli.write_default_config {
        config::save_config(&AppConfig::default(), &config_path)?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    // Load config
    let mut cfg = config::load_config(&config_path)?;
    if let Some(tick_ms) = cli.tick_ms {
        cfg.ui.tick_interval_ms = tick_ms;
        cfg.validate().context("Invalid --tick-ms")?;
    }

    logging::init(&cfg.logging)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "app exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_interval = Duration::from_millis(cfg.ui.tick_interval_ms);
    let mut state = AppState::new(cfg, Box::new(SystemClock));
    // Dropped on every return path, which cancels any outstanding tick task
    let mut ticker = Ticker::new(tick_interval, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        return;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input stream failed");
                    break;
                }
                None => break,
            }
        }
        // The ticker keeps the channel open, so report the closed input
        let _ = term_tx.send(AppEvent::InputClosed);
    });
    drop(event_tx);

    tracing::info!(tick_ms = tick_interval.as_millis() as u64, "lapwatch started");

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::StartTicker => ticker.start(),
                Action::StopTicker => ticker.stop(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    ticker.stop();
    input_task.abort();
    tracing::info!("lapwatch exiting");
    Ok(())
}
