//! chirp-tui - Terminal UI for Chirp
//!
//! A tabbed mock social client: home timeline, profile screen and post
//! cells whose buttons report to the screen that owns them.

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::layout::Rect;

use chirp_tui::{
    app::{event::{EventHandler, TuiEvent}, map_key, reduce, revert_mouse_toggle, Action, AppState},
    cli::Args,
    screens::Shell,
    terminal::{install_panic_hook, restore_terminal, set_mouse_capture, setup_terminal, Tui},
    ui,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.load_config().context("Failed to load configuration")?;

    if let Some(logging) = args.logging(&config).context("Failed to resolve log file")? {
        logging.init().context("Failed to initialize logging")?;
    }

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal(config.ui.mouse_enabled)?;
    tracing::info!("chirp-tui started");

    let result = run_app(&mut terminal, AppState::with_config(config.ui));

    restore_terminal(terminal)?;
    tracing::info!("chirp-tui exited");

    result
}

fn run_app(terminal: &mut Tui, mut state: AppState) -> Result<()> {
    let shell = Shell::new();
    let event_handler = EventHandler::new(state.config.tick_rate_ms);
    let mut area = Rect::default();

    loop {
        terminal.draw(|frame| {
            area = frame.area();
            ui::render(frame, &state, &shell);
        })?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => match map_key(&state, key) {
                Some(action) => action,
                None => continue,
            },
            TuiEvent::Mouse(mouse) => match ui::mouse_action(area, &state, mouse) {
                Some(action) => action,
                None => continue,
            },
            other => other.into(),
        };

        state = reduce(state, action.clone());

        // Perform side effects based on action
        match action {
            Action::ActivatePostAction { route, row, event } => {
                if let Some(message) = shell.activate(route, row, event) {
                    state = reduce(state, Action::SetStatus(message));
                }
            }
            Action::ToggleMouse => {
                if let Err(e) = set_mouse_capture(terminal, state.mouse_enabled) {
                    state = revert_mouse_toggle(state, &e);
                }
            }
            _ => {}
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
