//! Top-level application state.
//!
//! One [`AppState`] owns every screen, the preference store, the loaded
//! config and the transient overlays (toasts, confirm dialog, dropdown).
//! Handlers mutate it through `update()`; nothing else touches it.

use std::time::{Duration, Instant};

use mentor_core::Section;

use crate::config::UserConfig;
use crate::prefs::PreferenceStore;
use crate::screens::{ChatState, DashboardState, HistoryState, TeamState};
use crate::settings_state::SettingsState;

/// How long a toast stays on screen before the tick sweep removes it.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Which main screen has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Team,
    History,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::Team,
        Screen::History,
        Screen::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Team => "Team",
            Screen::History => "History",
            Screen::Settings => "Settings",
        }
    }

    pub fn next(&self) -> Screen {
        let idx = Screen::ALL.iter().position(|s| s == self).unwrap_or(0);
        Screen::ALL[(idx + 1) % Screen::ALL.len()]
    }

    pub fn prev(&self) -> Screen {
        let idx = Screen::ALL.iter().position(|s| s == self).unwrap_or(0);
        Screen::ALL[(idx + Screen::ALL.len() - 1) % Screen::ALL.len()]
    }
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Transient notification shown in the corner of the screen.
#[derive(Debug, Clone)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
    pub created: Instant,
}

/// What an accepted confirm dialog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Quit,
    DeleteAccount,
    SignOutOthers,
}

/// Modal yes/no dialog.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    pub title: &'static str,
    pub body: String,
    pub confirm_label: &'static str,
    pub action: ConfirmAction,
}

impl ConfirmDialog {
    pub fn quit() -> Self {
        Self {
            title: "Quit",
            body: "Quit Code Mentor?".to_string(),
            confirm_label: "Quit",
            action: ConfirmAction::Quit,
        }
    }

    pub fn delete_account() -> Self {
        Self {
            title: "Delete Account",
            body: "This permanently deletes your account and all selected data. \
                   This cannot be undone."
                .to_string(),
            confirm_label: "Delete",
            action: ConfirmAction::DeleteAccount,
        }
    }

    pub fn sign_out_others(count: usize) -> Self {
        Self {
            title: "Sign Out Other Sessions",
            body: format!("Sign out {count} other active session(s)?"),
            confirm_label: "Sign Out",
            action: ConfirmAction::SignOutOthers,
        }
    }
}

/// Which selector the dropdown overlay is showing.
///
/// The overlay stores only list state; its anchor and above/below
/// placement are resolved at draw time from the live layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKind {
    /// Settings screen: grouped section navigator.
    Section,
    /// Team screen: role filter next to the search box.
    RoleFilter,
    /// Invite dialog: role for the invited member.
    InviteRole,
    /// History screen: filter by entry kind.
    HistoryFilter,
}

impl DropdownKind {
    /// Options shown in the overlay list, in cursor order.
    ///
    /// `Section` items mirror [`Section::ALL`] so the cursor index maps
    /// straight through [`Section::from_index`].
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            DropdownKind::Section => &[
                "Profile",
                "API Keys",
                "Integrations",
                "Notifications",
                "Analysis",
                "Billing",
                "Security",
                "Export Data",
                "Delete Account",
            ],
            DropdownKind::RoleFilter => &["All", "Owner", "Reviewer", "Viewer"],
            DropdownKind::InviteRole => &["Reviewer", "Viewer"],
            DropdownKind::HistoryFilter => &["All", "Review", "Debug", "Explain"],
        }
    }
}

#[derive(Debug, Clone)]
pub struct DropdownState {
    pub kind: DropdownKind,
    pub cursor: usize,
}

impl DropdownState {
    pub fn open(kind: DropdownKind, cursor: usize) -> Self {
        Self { kind, cursor }
    }
}

/// The whole application.
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    /// Active settings section; remembered across screen switches.
    pub section: Section,
    pub dashboard: DashboardState,
    pub chat: ChatState,
    pub team: TeamState,
    pub history: HistoryState,
    pub settings: SettingsState,
    pub prefs: PreferenceStore,
    pub config: UserConfig,
    pub toasts: Vec<Toast>,
    pub confirm: Option<ConfirmDialog>,
    pub dropdown: Option<DropdownState>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: UserConfig) -> Self {
        Self {
            screen: Screen::default(),
            section: Section::default(),
            dashboard: DashboardState::new(),
            chat: ChatState::new(),
            team: TeamState::new(),
            history: HistoryState::new(),
            settings: SettingsState::new(),
            prefs: PreferenceStore::with_defaults(),
            config,
            toasts: Vec::new(),
            confirm: None,
            dropdown: None,
            should_quit: false,
        }
    }

    pub fn push_toast(&mut self, level: ToastLevel, text: impl Into<String>) {
        self.toasts.push(Toast {
            level,
            text: text.into(),
            created: Instant::now(),
        });
    }

    /// Switch settings section, tearing down whatever the old one had
    /// in flight. A no-op switch still runs no teardown.
    pub fn goto_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        let departing = self.section;
        self.settings.invalidate_section(departing);
        self.dropdown = None;
        self.section = section;
        tracing::debug!(
            from = departing.as_slug(),
            to = section.as_slug(),
            "settings section changed"
        );
    }

    pub fn goto_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        if self.screen == Screen::Settings {
            self.settings.invalidate_section(self.section);
        }
        self.dropdown = None;
        self.screen = screen;
    }

    /// True when any simulated operation anywhere is still in flight.
    pub fn any_pending(&self) -> bool {
        self.dashboard.any_pending()
            || self.chat.send.is_pending()
            || self.team.invite.is_pending()
            || self.settings.any_pending()
    }

    /// Quit, going through the confirm dialog when configured.
    pub fn request_quit(&mut self) {
        if self.config.behavior.confirm_quit {
            self.confirm = Some(ConfirmDialog::quit());
        } else {
            self.should_quit = true;
        }
    }

    /// Periodic housekeeping driven by the tick message: expire toasts
    /// and the "Copied!" flashes.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        self.toasts
            .retain(|t| now.duration_since(t.created) < TOAST_TTL);
        self.chat.expire_copied_flash();
        self.team.expire_link_flash();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::{ActionOutcome, ActionStatus};

    fn state() -> AppState {
        AppState::new(UserConfig::default())
    }

    #[test]
    fn test_defaults() {
        let state = state();
        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.section, Section::Profile);
        assert!(!state.should_quit);
        assert!(!state.any_pending());
    }

    #[test]
    fn test_screen_cycle_wraps() {
        assert_eq!(Screen::Settings.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.prev(), Screen::Settings);
    }

    #[test]
    fn test_goto_section_invalidates_departing_actions() {
        let mut state = state();
        let scheduled = state
            .settings
            .profile
            .save
            .trigger(Duration::from_millis(800), ActionOutcome::Succeeded)
            .unwrap();

        state.goto_section(Section::Billing);
        assert_eq!(state.section, Section::Billing);

        // The in-flight save timer lands on a stale generation.
        assert!(!state.settings.profile.save.complete(
            scheduled.generation,
            scheduled.outcome,
            None
        ));
        assert_eq!(state.settings.profile.save.status(), ActionStatus::Idle);
    }

    #[test]
    fn test_goto_same_section_keeps_pending_action() {
        let mut state = state();
        state
            .settings
            .profile
            .save
            .trigger(Duration::from_millis(800), ActionOutcome::Succeeded)
            .unwrap();

        state.goto_section(Section::Profile);
        assert!(state.settings.profile.save.is_pending());
    }

    #[test]
    fn test_request_quit_opens_confirm_dialog() {
        let mut state = state();
        state.request_quit();
        assert!(!state.should_quit);
        assert!(matches!(
            state.confirm,
            Some(ConfirmDialog {
                action: ConfirmAction::Quit,
                ..
            })
        ));
    }

    #[test]
    fn test_request_quit_skips_dialog_when_confirm_disabled() {
        let mut state = state();
        state.config.behavior.confirm_quit = false;
        state.request_quit();
        assert!(state.should_quit);
        assert!(state.confirm.is_none());
    }

    #[test]
    fn test_section_dropdown_items_track_display_order() {
        let items = DropdownKind::Section.items();
        assert_eq!(items.len(), Section::ALL.len());
        for (idx, section) in Section::ALL.iter().enumerate() {
            assert_eq!(items[idx], section.title());
        }
    }

    #[test]
    fn test_tick_expires_old_toasts() {
        let mut state = state();
        state.push_toast(ToastLevel::Info, "hello");
        state.toasts[0].created = Instant::now() - TOAST_TTL - Duration::from_millis(1);
        state.push_toast(ToastLevel::Success, "fresh");

        state.on_tick();
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].text, "fresh");
    }
}
