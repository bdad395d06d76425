//! Terminal setup and teardown around the runtime loop

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::sync::Arc;

use super::app_component::AppComponent;
use super::core::{EventHandler, Message, Program};
use super::style;
use crate::config::Config;
use crate::vcs::{Branch, VcsBackend};

/// What the interactive session ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOutcome {
    pub exit_code: i32,
    pub switched_to: Option<Branch>,
}

/// Run the TUI until the user quits or a branch has been switched.
pub async fn run_app(config: &Config, backend: Arc<dyn VcsBackend>) -> Result<AppOutcome> {
    if !style::init_theme(config.theme.to_theme()?) {
        warn!("Theme was already initialised; keeping the existing one");
    }

    let alt_screen = config.ui.alt_screen;
    let mut terminal = setup_terminal(alt_screen)?;

    let mut program = Program::new(AppComponent::new(config), backend);
    let mut events = EventHandler::new();
    events.start(program.sender());

    // Components size themselves from the first resize
    if let Ok((width, height)) = size() {
        let _ = program.sender().send(Message::Resize(width, height));
    }

    let result = program.run(&mut terminal).await;

    // Cleanup runs whatever the loop returned
    events.stop().await;
    restore_terminal(&mut terminal, alt_screen)?;

    let exit_code = result?;
    let switched_to = program.root().chosen_branch().cloned();
    info!("Session ended with code {} (switched to {:?})", exit_code, switched_to);
    Ok(AppOutcome { exit_code, switched_to })
}

/// Enter raw mode (and the alternate screen) and build the terminal. If a
/// later step fails, whatever was already switched on is switched back off.
fn setup_terminal(alt_screen: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = std::io::stdout();
    let terminal = enter_screen(&mut stdout, alt_screen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout)))
        .context("Failed to initialise terminal");

    if terminal.is_err() {
        let _ = leave_screen(&mut std::io::stdout(), alt_screen);
        let _ = disable_raw_mode();
    }
    terminal
}

fn enter_screen<W: Write>(out: &mut W, alt_screen: bool) -> io::Result<()> {
    if alt_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    Ok(())
}

fn leave_screen<W: Write>(out: &mut W, alt_screen: bool) -> io::Result<()> {
    if alt_screen {
        execute!(out, LeaveAlternateScreen)?;
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>, alt_screen: bool) -> Result<()> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut(), alt_screen)?;
    terminal.show_cursor()?;
    Ok(())
}
