//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Duration;

use gitguide_app::config::Settings;
use gitguide_app::signals;
use gitguide_app::{AppState, Environment, Message, PreferenceStore, StorageWatcher, SystemClock};
use gitguide_core::prelude::*;
use tokio::sync::mpsc;

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::{event, process, render, terminal};

/// Run the guide until the user quits or a signal arrives
pub async fn run(settings: Settings, store: PreferenceStore, environment: Environment) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    let storage_path = store.location();
    let mut state = AppState::new(settings, store, environment, Arc::new(SystemClock));

    let mut term = terminal::init()?;
    let size = term.size()?;
    state.update_terminal_size(size.width, size.height);
    state.refresh_timeline();

    // Unified message channel (signal handler, storage watcher)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    // Another instance writing the same file shows up here
    let mut watcher = storage_path.map(StorageWatcher::new);
    if let Some(w) = watcher.as_mut() {
        match w.start(msg_tx.clone()) {
            Ok(()) => info!("Watching {} for changes", w.path().display()),
            Err(e) => warn!("Failed to start storage watcher: {}", e),
        }
    }

    let mut clipboard = Osc52Clipboard::stdout();
    let result = run_loop(&mut term, &mut state, msg_rx, tick_rate, &mut clipboard);

    if let Some(w) = watcher.as_mut() {
        w.stop();
    }
    signal_task.abort();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    tick_rate: Duration,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    while !state.should_quit {
        // Process external messages (signal handler, storage watcher)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, clipboard);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate).context("Failed to read terminal events")? {
            process::process_message(state, message, clipboard);
        }
    }

    info!("Exiting");
    Ok(())
}
