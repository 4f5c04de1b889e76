//! Message types for the application (TEA pattern)

use mentor_core::{ActionOutcome, Section};

use crate::input_key::InputKey;
use crate::provider::{AnalysisKind, AnalysisReply};
use crate::state::Screen;

/// Which simulated timer-backed operation a completion belongs to.
///
/// Completions travel through the runtime as messages; the target names
/// the owning [`mentor_core::AsyncAction`] so the handler can route the
/// delivery (and drop it when the generation went stale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    /// Team screen: send a member invite.
    Invite,
    /// Settings > Profile: save the edited fields.
    ProfileSave,
    /// Settings > API Keys: generate a new key.
    ApiKeyGenerate,
    /// Settings > Integrations: connect the row at this index.
    IntegrationConnect(usize),
    /// Settings > Notifications: persist the channel matrix.
    NotificationsSave,
    /// Settings > Billing: upgrade the plan.
    PlanUpgrade,
    /// Settings > Security: sign out all other sessions.
    SignOutOthers,
    /// Settings > Export: run the data export.
    Export,
    /// Settings > Delete: delete the account.
    DeleteAccount,
}

/// Which consumer a provider reply is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTarget {
    /// One of the dashboard analysis tabs.
    Dashboard(AnalysisKind),
    /// The chat panel's send flow.
    Chat,
}

/// What a finished clipboard write was copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// A mentor reply in the chat panel, by message index.
    ChatMessage(usize),
    /// The team invite link.
    InviteLink,
    /// An API key row.
    ApiKey(usize),
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast/flash expiry, redraw)
    Tick,

    /// Request to quit (may show confirmation dialog per config)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Jump straight to a main screen (deep link, follow-up)
    GotoScreen(Screen),

    /// Jump to a settings section; switches to the settings screen
    GotoSection(Section),

    /// Accept the open confirm dialog
    ConfirmAccept,

    /// Dismiss the open confirm dialog
    ConfirmCancel,

    // ─────────────────────────────────────────────────────────
    // Flow triggers
    // ─────────────────────────────────────────────────────────
    /// Toggle the floating chat panel
    ToggleChat,

    /// Send the chat input to the mentor
    SendChatMessage,

    /// Run one of the dashboard analysis tabs
    RunAnalysis(AnalysisKind),

    /// Clear a finished analysis tab back to idle
    ResetAnalysis(AnalysisKind),

    /// Arm a timer-backed simulated operation
    TriggerAction(ActionTarget),

    /// Copy something to the system clipboard
    CopyRequested(CopyTarget),

    /// A scheduled timer fired for a simulated operation
    ActionCompleted {
        target: ActionTarget,
        generation: u64,
        outcome: ActionOutcome,
    },

    /// The analysis provider produced a reply (or an error string)
    AnalysisCompleted {
        target: AnalysisTarget,
        generation: u64,
        result: Result<AnalysisReply, String>,
    },

    /// A clipboard write finished
    ClipboardResult { target: CopyTarget, ok: bool },
}
