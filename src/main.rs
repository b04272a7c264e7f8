//! datatable-tui - sortable, filterable, paginated tables in the terminal
//!
//! This is the main entry point. It uses the Component Architecture pattern
//! from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::components::TableOptions;
use crate::config::Config;
use crate::model::{sample, TableData, Theme};
use crate::tui::Tui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match logging::init(cli.log_file.as_deref()) {
        Ok(Some(path)) => info!(path = %path.display(), "logging started"),
        Ok(None) => {}
        Err(err) => eprintln!("Warning: logging disabled: {err:#}"),
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?.unwrap_or_default(),
    };
    let config = cli.apply_to(config);
    let theme = Theme::from_overrides(&config.theme).context("Invalid theme color")?;

    let (data, default_title) = load_data(&cli)?;
    let options = TableOptions {
        title: config.title.or(default_title),
        page_size: config.page_size,
        first_sort: config.first_sort,
        theme,
    };

    let mut app = App::new(data, options);

    let mut tui = Tui::new()?.with_poll_timeout(Duration::from_millis(250));
    tui.enter()?;
    let result = run_app(&mut tui, &mut app);
    let restored = tui.exit();

    info!("exiting");
    finish(result, restored)
}

/// The loop's own error wins over a failure to restore the terminal
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let (Err(_), Err(restore_err)) = (&result, &restored) {
        error!("failed to restore terminal: {restore_err:#}");
    }
    result?;
    restored.context("Failed to restore terminal")
}

/// Table input and the title it implies when none is configured
fn load_data(cli: &Cli) -> Result<(TableData, Option<String>)> {
    if cli.demo {
        return Ok((sample::employees(), Some(sample::DEMO_TITLE.to_string())));
    }
    match &cli.path {
        Some(path) => Ok((services::load_csv(path, cli.delimiter)?, None)),
        None => {
            info!("no data source given");
            Ok((TableData::default(), None))
        }
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| draw_result = app.draw(frame, frame.area()))?;
        draw_result?;

        let Some(event) = tui.next_event()? else {
            continue;
        };

        let action = match event {
            Event::Key(key) => app.handle_key_event(key)?,
            Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
            // Resize only needs the redraw at the top of the loop
            _ => None,
        };

        // An action may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
