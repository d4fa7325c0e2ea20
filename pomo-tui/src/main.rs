mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use pomo_core::{IntervalScheduler, Pomodoro, SystemClock};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::from_filename(".env.pomo").ok();

    let cli = cli::Cli::parse();
    match cli.command {
        Some(cli::Commands::ConfigPath) => print_config_path(),
        Some(cli::Commands::Run) | None => run().await,
    }
}

fn print_config_path() -> Result<()> {
    let path = config::PomoConfig::config_path()?;
    if !path.exists() {
        config::PomoConfig::default().save()?;
        println!("Created default config at {}", path.display());
    }
    println!("{}", path.display());
    Ok(())
}

async fn run() -> Result<()> {
    let cfg = config::PomoConfig::load()?;
    let _log_guard = logging::init(&cfg)?;
    tracing::info!(default_minutes = cfg.default_minutes, "starting pomo-tui");

    let (scheduler, tick_rx) = IntervalScheduler::channel();
    let session = Pomodoro::new(SystemClock, scheduler);
    let mut app = App::new(session, &cfg);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, tick_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetTitle("pomo")
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
