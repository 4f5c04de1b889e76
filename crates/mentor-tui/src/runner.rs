//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use mentor_app::{AppState, Message, MockProvider, UserConfig};
use mentor_core::prelude::*;
use mentor_core::Section;

use crate::{event, process, render, terminal};

/// Baseline "thinking" latency of the mock mentor.
const PROVIDER_DELAY: Duration = Duration::from_millis(1500);

/// Run the TUI application.
///
/// `initial_section` deep-links straight into a settings section
/// (already validated by the CLI through `mentor_core::resolve`).
pub async fn run(config: UserConfig, initial_section: Option<Section>) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let mut state = AppState::new(config);
    let provider = Arc::new(MockProvider::with_delay(
        state.config.simulation.scale(PROVIDER_DELAY),
    ));

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    if let Some(section) = initial_section {
        process::process_message(&mut state, Message::GotoSection(section), &msg_tx, &provider);
    }
    info!("Code Mentor starting");

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, provider);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<MockProvider>,
) -> Result<()> {
    let tick = Duration::from_millis(state.config.ui.tick_ms);

    while !state.should_quit {
        // Drain completions from background tasks first.
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &provider);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Blocks up to one tick; timeout produces Message::Tick.
        if let Some(message) = event::poll(tick)? {
            process::process_message(state, message, &msg_tx, &provider);
        }
    }

    Ok(())
}
