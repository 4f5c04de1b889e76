//! Message processing through the TEA update loop.

use std::sync::Arc;

use tokio::sync::mpsc;

use mentor_app::{handler, AppState, Message, MockProvider};

use crate::actions::handle_action;

/// Process a message (and its follow-ups) through the update function,
/// handing any produced actions to the runtime.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<MockProvider>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), provider.clone());
        }
        msg = result.message;
    }
}
