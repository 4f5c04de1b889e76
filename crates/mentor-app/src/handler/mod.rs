//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the main screens and overlays
//! - `settings_keys`: Key event handlers for the settings screen
//! - `flows`: Arming simulated operations (timers, provider calls)
//! - `completions`: Delivering timer/provider/clipboard results
//!
//! Key handlers edit local input state (cursors, text fields) in place
//! and emit a [`Message`] only when a flow or navigation follows.

pub(crate) mod completions;
pub(crate) mod flows;
pub(crate) mod keys;
pub(crate) mod settings_keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use mentor_core::ScheduledCompletion;

use crate::message::{ActionTarget, AnalysisTarget, CopyTarget, Message};
use crate::provider::AnalysisRequest;

// Re-export main entry point
pub use update::update;

/// Total export duration, re-exported for the progress bar.
pub use flows::EXPORT_DELAY;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Sleep for the completion's delay, then deliver it back as
    /// [`Message::ActionCompleted`] for `target`.
    ScheduleCompletion {
        target: ActionTarget,
        completion: ScheduledCompletion,
    },

    /// Run the analysis provider and deliver the reply back as
    /// [`Message::AnalysisCompleted`] for `target`.
    Analyze {
        target: AnalysisTarget,
        generation: u64,
        request: AnalysisRequest,
    },

    /// Write `text` to the system clipboard, reporting the outcome as
    /// [`Message::ClipboardResult`].
    CopyToClipboard { target: CopyTarget, text: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
