//! View state for the main (non-settings) screens.

use std::time::{Duration, Instant};

use mentor_core::AsyncAction;

use crate::data::{
    self, HistoryItem, HistoryKind, MemberRole, TeamMember, SAMPLE_CODE, SAMPLE_ERROR,
};
use crate::provider::AnalysisKind;

/// How long the per-message "copied" flash stays visible.
pub const COPY_FLASH: Duration = Duration::from_millis(2000);

// ─────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────

/// The AI command center: code/error buffers and one analyze flow per tab.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub tab: AnalysisKind,
    pub code: String,
    pub error_log: String,
    review: AsyncAction,
    debug: AsyncAction,
    explain: AsyncAction,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            tab: AnalysisKind::Review,
            code: SAMPLE_CODE.to_string(),
            error_log: SAMPLE_ERROR.to_string(),
            review: AsyncAction::new(),
            debug: AsyncAction::new(),
            explain: AsyncAction::new(),
        }
    }

    /// Each tab owns an independent analyze action.
    pub fn analyze(&self, kind: AnalysisKind) -> &AsyncAction {
        match kind {
            AnalysisKind::Review => &self.review,
            AnalysisKind::Debug => &self.debug,
            AnalysisKind::Explain => &self.explain,
        }
    }

    pub fn analyze_mut(&mut self, kind: AnalysisKind) -> &mut AsyncAction {
        match kind {
            AnalysisKind::Review => &mut self.review,
            AnalysisKind::Debug => &mut self.debug,
            AnalysisKind::Explain => &mut self.explain,
        }
    }

    /// Input buffer the active tab analyzes.
    pub fn active_input(&self) -> &str {
        match self.tab {
            AnalysisKind::Debug => &self.error_log,
            _ => &self.code,
        }
    }

    pub fn cycle_tab(&mut self) {
        self.tab = match self.tab {
            AnalysisKind::Review => AnalysisKind::Debug,
            AnalysisKind::Debug => AnalysisKind::Explain,
            AnalysisKind::Explain => AnalysisKind::Review,
        };
    }

    pub fn any_pending(&self) -> bool {
        self.review.is_pending() || self.debug.is_pending() || self.explain.is_pending()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Mentor,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
    pub has_code: bool,
}

/// Chat overlay state: transcript, input line, and the send flow whose
/// pending phase doubles as the typing indicator.
#[derive(Debug, Clone)]
pub struct ChatState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub send: AsyncAction,
    /// Message index with an active "copied" flash, and when it started.
    pub copied: Option<(usize, Instant)>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            open: false,
            messages: vec![ChatMessage {
                sender: ChatSender::Mentor,
                text: "Hi! I'm your AI code mentor. Paste some code or ask me anything."
                    .to_string(),
                has_code: false,
            }],
            input: String::new(),
            send: AsyncAction::new(),
            copied: None,
        }
    }

    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            sender: ChatSender::User,
            text,
            has_code: false,
        });
    }

    pub fn push_mentor(&mut self, text: String, has_code: bool) {
        self.messages.push(ChatMessage {
            sender: ChatSender::Mentor,
            text,
            has_code,
        });
    }

    /// Index of the newest mentor message, if any.
    pub fn last_mentor_index(&self) -> Option<usize> {
        self.messages
            .iter()
            .rposition(|m| m.sender == ChatSender::Mentor)
    }

    /// Drop the copied flash once it has been visible long enough.
    pub fn expire_copied_flash(&mut self) {
        if let Some((_, started)) = self.copied {
            if started.elapsed() >= COPY_FLASH {
                self.copied = None;
            }
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────
// Team
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct TeamState {
    pub members: Vec<TeamMember>,
    pub search: String,
    pub searching: bool,
    pub role_filter: Option<MemberRole>,
    pub show_invite: bool,
    pub invite_email: String,
    pub invite_role: MemberRole,
    pub invite: AsyncAction,
    /// Invite-link "copied" flash start time.
    pub link_copied: Option<Instant>,
}

impl TeamState {
    pub fn new() -> Self {
        Self {
            members: data::team_members(),
            search: String::new(),
            searching: false,
            role_filter: None,
            show_invite: false,
            invite_email: String::new(),
            invite_role: MemberRole::Reviewer,
            invite: AsyncAction::new(),
            link_copied: None,
        }
    }

    /// Visible member indices under the current search and role filter.
    pub fn visible(&self) -> Vec<usize> {
        data::filter_members(&self.members, &self.search, self.role_filter)
    }

    pub fn cycle_role_filter(&mut self) {
        self.role_filter = match self.role_filter {
            None => Some(MemberRole::Owner),
            Some(MemberRole::Owner) => Some(MemberRole::Reviewer),
            Some(MemberRole::Reviewer) => Some(MemberRole::Viewer),
            Some(MemberRole::Viewer) => None,
        };
    }

    pub fn cycle_invite_role(&mut self) {
        // Owner is not an invitable role.
        self.invite_role = match self.invite_role {
            MemberRole::Reviewer => MemberRole::Viewer,
            _ => MemberRole::Reviewer,
        };
    }

    /// Minimal inline validation: non-empty and shaped like an address.
    pub fn invite_email_valid(&self) -> bool {
        let email = self.invite_email.trim();
        !email.is_empty() && email.contains('@') && !email.starts_with('@') && !email.ends_with('@')
    }

    pub fn expire_link_flash(&mut self) {
        if let Some(started) = self.link_copied {
            if started.elapsed() >= COPY_FLASH {
                self.link_copied = None;
            }
        }
    }
}

impl Default for TeamState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────
// History
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct HistoryState {
    pub items: Vec<HistoryItem>,
    pub query: String,
    pub searching: bool,
    pub kind_filter: Option<HistoryKind>,
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            items: data::history_items(),
            query: String::new(),
            searching: false,
            kind_filter: None,
        }
    }

    pub fn visible(&self) -> Vec<usize> {
        data::filter_history(&self.items, &self.query, self.kind_filter)
    }

    pub fn cycle_kind_filter(&mut self) {
        self.kind_filter = match self.kind_filter {
            None => Some(HistoryKind::Review),
            Some(HistoryKind::Review) => Some(HistoryKind::Debug),
            Some(HistoryKind::Debug) => Some(HistoryKind::Explain),
            Some(HistoryKind::Explain) => None,
        };
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_actions_are_independent() {
        let mut dash = DashboardState::new();
        dash.analyze_mut(AnalysisKind::Review)
            .trigger(Duration::from_secs(2), mentor_core::ActionOutcome::Succeeded)
            .unwrap();

        assert!(dash.analyze(AnalysisKind::Review).is_pending());
        assert!(!dash.analyze(AnalysisKind::Debug).is_pending());
        assert!(dash.any_pending());
    }

    #[test]
    fn test_dashboard_active_input_follows_tab() {
        let mut dash = DashboardState::new();
        assert_eq!(dash.active_input(), SAMPLE_CODE);
        dash.cycle_tab();
        assert_eq!(dash.tab, AnalysisKind::Debug);
        assert_eq!(dash.active_input(), SAMPLE_ERROR);
    }

    #[test]
    fn test_chat_last_mentor_index() {
        let mut chat = ChatState::new();
        assert_eq!(chat.last_mentor_index(), Some(0));
        chat.push_user("hello".to_string());
        assert_eq!(chat.last_mentor_index(), Some(0));
        chat.push_mentor("hi".to_string(), false);
        assert_eq!(chat.last_mentor_index(), Some(2));
    }

    #[test]
    fn test_invite_email_validation() {
        let mut team = TeamState::new();
        assert!(!team.invite_email_valid());
        team.invite_email = "someone@company.com".to_string();
        assert!(team.invite_email_valid());
        team.invite_email = "@company.com".to_string();
        assert!(!team.invite_email_valid());
    }

    #[test]
    fn test_team_role_filter_cycles_back_to_all() {
        let mut team = TeamState::new();
        for _ in 0..4 {
            team.cycle_role_filter();
        }
        assert_eq!(team.role_filter, None);
    }

    #[test]
    fn test_history_filter_projection() {
        let mut history = HistoryState::new();
        history.kind_filter = Some(HistoryKind::Explain);
        let visible = history.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(history.items[visible[0]].kind, HistoryKind::Explain);
        // Source untouched.
        assert_eq!(history.items.len(), 5);
    }
}
