//! View state for the nine settings sections.
//!
//! Each section owns its own mock data and its own [`AsyncAction`]
//! instances. Navigating away from a section invalidates its pending
//! actions so in-flight timers cannot mutate a panel the user has left.

use mentor_core::{AsyncAction, Section};

use crate::data::{self, ActiveSession, ApiKey, AuditEvent, ExportRecord, Integration, Invoice};

/// Wording the Delete section requires before the destructive action arms.
pub const DELETE_CONFIRMATION: &str = "DELETE";

// ─────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ProfileState {
    pub fields: Vec<ProfileField>,
    pub cursor: usize,
    pub editing: bool,
    pub save: AsyncAction,
}

impl ProfileState {
    pub fn new() -> Self {
        let field = |label, value: &str| ProfileField {
            label,
            value: value.to_string(),
        };
        Self {
            fields: vec![
                field("Name", "Alex Rodriguez"),
                field("Email", "alex.rodriguez@example.com"),
                field("Username", "alexdev"),
                field(
                    "Bio",
                    "Full-stack developer passionate about clean code and AI-powered development tools.",
                ),
                field("Website", "https://alexdev.com"),
                field("Location", "San Francisco, CA"),
            ],
            cursor: 0,
            editing: false,
            save: AsyncAction::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// API Keys
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ApiKeysState {
    pub keys: Vec<ApiKey>,
    /// Per-key reveal flags, parallel to `keys`.
    pub visible: Vec<bool>,
    pub cursor: usize,
    pub generate: AsyncAction,
}

impl ApiKeysState {
    pub fn new() -> Self {
        let keys = data::api_keys();
        let visible = vec![false; keys.len()];
        Self {
            keys,
            visible,
            cursor: 0,
            generate: AsyncAction::new(),
        }
    }

    pub fn toggle_visibility(&mut self) {
        if let Some(flag) = self.visible.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    /// Displayed form of a key: plain when revealed, masked otherwise.
    pub fn display_key(&self, idx: usize) -> String {
        match (self.keys.get(idx), self.visible.get(idx)) {
            (Some(key), Some(true)) => key.key.clone(),
            (Some(key), _) => data::mask_key(&key.key),
            (None, _) => String::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Integrations
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct IntegrationsState {
    pub rows: Vec<Integration>,
    /// One independent connect flow per row, parallel to `rows`.
    pub connect: Vec<AsyncAction>,
    pub cursor: usize,
}

impl IntegrationsState {
    pub fn new() -> Self {
        let rows = data::integrations();
        let connect = vec![AsyncAction::new(); rows.len()];
        Self {
            rows,
            connect,
            cursor: 0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Notifications / Analysis (store-backed, see crate::prefs)
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct NotificationsState {
    /// Row into [`crate::prefs::NOTIFICATION_CATEGORIES`].
    pub cursor: usize,
    /// Column into [`crate::prefs::CHANNELS`].
    pub channel: usize,
    pub save: AsyncAction,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisSettingsState {
    /// Cursor over the combined settings + custom-rules list.
    pub cursor: usize,
}

// ─────────────────────────────────────────────────────────────────
// Billing
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct BillingState {
    pub plan_name: &'static str,
    pub plan_price_cents: u32,
    pub next_billing: &'static str,
    pub invoices: Vec<Invoice>,
    pub upgrade: AsyncAction,
}

impl BillingState {
    pub fn new() -> Self {
        Self {
            plan_name: "Pro",
            plan_price_cents: 2900,
            next_billing: "2024-02-15",
            invoices: data::invoices(),
            upgrade: AsyncAction::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Security
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SecurityState {
    pub two_factor_enabled: bool,
    pub sessions: Vec<ActiveSession>,
    pub events: Vec<AuditEvent>,
    pub sign_out_others: AsyncAction,
}

impl SecurityState {
    pub fn new() -> Self {
        Self {
            two_factor_enabled: true,
            sessions: data::active_sessions(),
            events: data::audit_events(),
            sign_out_others: AsyncAction::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Export
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ExportState {
    /// Selection flags, parallel to [`data::DATA_CATEGORIES`].
    pub selected: Vec<bool>,
    pub cursor: usize,
    pub export: AsyncAction,
    pub history: Vec<ExportRecord>,
}

impl ExportState {
    pub fn new() -> Self {
        Self {
            // Product defaults: everything in, api keys and billing history out.
            selected: data::DATA_CATEGORIES
                .iter()
                .map(|(key, _)| !matches!(*key, "api_keys" | "billing_history"))
                .collect(),
            cursor: 0,
            export: AsyncAction::new(),
            history: data::export_history(),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(flag) = self.selected.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }

    /// Names of the categories currently selected for export.
    pub fn selected_categories(&self) -> Vec<&'static str> {
        data::DATA_CATEGORIES
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|((key, _), _)| *key)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DeleteState {
    /// Option flags, parallel to [`data::DATA_CATEGORIES`].
    pub options: Vec<bool>,
    pub cursor: usize,
    pub confirmation: String,
    pub typing: bool,
    pub delete: AsyncAction,
}

impl DeleteState {
    pub fn new() -> Self {
        Self {
            options: vec![true; data::DATA_CATEGORIES.len()],
            cursor: 0,
            confirmation: String::new(),
            typing: false,
            delete: AsyncAction::new(),
        }
    }

    /// The destructive action only arms on the exact confirmation text.
    pub fn confirmed(&self) -> bool {
        self.confirmation == DELETE_CONFIRMATION
    }

    pub fn toggle_option(&mut self) {
        if let Some(flag) = self.options.get_mut(self.cursor) {
            *flag = !*flag;
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Aggregate
// ─────────────────────────────────────────────────────────────────

/// All nine section states plus the per-section teardown hook.
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub profile: ProfileState,
    pub api_keys: ApiKeysState,
    pub integrations: IntegrationsState,
    pub notifications: NotificationsState,
    pub analysis: AnalysisSettingsState,
    pub billing: BillingState,
    pub security: SecurityState,
    pub export: ExportState,
    pub delete: DeleteState,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            profile: ProfileState::new(),
            api_keys: ApiKeysState::new(),
            integrations: IntegrationsState::new(),
            notifications: NotificationsState::default(),
            analysis: AnalysisSettingsState::default(),
            billing: BillingState::new(),
            security: SecurityState::new(),
            export: ExportState::new(),
            delete: DeleteState::new(),
        }
    }

    /// Teardown for a section the user is leaving: pending actions go
    /// stale so their timers complete into nothing. Integration rows that
    /// were mid-connect fall back to disconnected.
    pub fn invalidate_section(&mut self, section: Section) {
        match section {
            Section::Profile => {
                if self.profile.save.is_pending() {
                    self.profile.save.invalidate();
                }
                self.profile.editing = false;
            }
            Section::ApiKeys => {
                if self.api_keys.generate.is_pending() {
                    self.api_keys.generate.invalidate();
                }
            }
            Section::Integrations => {
                for (row, action) in self
                    .integrations
                    .rows
                    .iter_mut()
                    .zip(&mut self.integrations.connect)
                {
                    if action.is_pending() {
                        action.invalidate();
                        row.status = data::IntegrationStatus::Disconnected;
                    }
                }
            }
            Section::Notifications => {
                if self.notifications.save.is_pending() {
                    self.notifications.save.invalidate();
                }
            }
            Section::Analysis => {}
            Section::Billing => {
                if self.billing.upgrade.is_pending() {
                    self.billing.upgrade.invalidate();
                }
            }
            Section::Security => {
                if self.security.sign_out_others.is_pending() {
                    self.security.sign_out_others.invalidate();
                }
            }
            Section::Export => {
                if self.export.export.is_pending() {
                    self.export.export.invalidate();
                }
            }
            Section::Delete => {
                if self.delete.delete.is_pending() {
                    self.delete.delete.invalidate();
                }
                self.delete.typing = false;
            }
        }
    }

    /// Whether any simulated operation in any section is still in flight.
    pub fn any_pending(&self) -> bool {
        self.profile.save.is_pending()
            || self.api_keys.generate.is_pending()
            || self.integrations.connect.iter().any(|a| a.is_pending())
            || self.notifications.save.is_pending()
            || self.billing.upgrade.is_pending()
            || self.security.sign_out_others.is_pending()
            || self.export.export.is_pending()
            || self.delete.delete.is_pending()
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_core::{ActionOutcome, ActionStatus};
    use std::time::Duration;

    const DELAY: Duration = Duration::from_secs(2);

    #[test]
    fn test_display_key_masks_until_revealed() {
        let mut state = ApiKeysState::new();
        assert!(state.display_key(0).starts_with("cm_live_1234"));
        assert!(state.display_key(0).contains('\u{2022}'));

        state.toggle_visibility();
        assert_eq!(state.display_key(0), "cm_live_1234567890abcdef");
    }

    #[test]
    fn test_delete_requires_exact_confirmation() {
        let mut state = DeleteState::new();
        assert!(!state.confirmed());
        state.confirmation = "delete".to_string();
        assert!(!state.confirmed());
        state.confirmation = "DELETE".to_string();
        assert!(state.confirmed());
    }

    #[test]
    fn test_export_selected_categories() {
        let state = ExportState::new();
        let selected = state.selected_categories();
        assert!(selected.contains(&"profile"));
        assert!(!selected.contains(&"api_keys"));
        assert!(!selected.contains(&"billing_history"));
    }

    #[test]
    fn test_export_selection_covers_every_category() {
        let state = ExportState::new();
        assert_eq!(state.selected.len(), data::DATA_CATEGORIES.len());
        assert_eq!(
            state.selected.iter().filter(|on| !**on).count(),
            2,
            "only api keys and billing history opt out by default"
        );
    }

    #[test]
    fn test_invalidate_section_cancels_pending_connect() {
        let mut settings = SettingsState::new();
        let scheduled = settings.integrations.connect[1]
            .trigger(DELAY, ActionOutcome::Succeeded)
            .unwrap();
        settings.integrations.rows[1].status = data::IntegrationStatus::Pending;

        settings.invalidate_section(Section::Integrations);

        // Late completion lands on a stale generation and does nothing.
        assert!(!settings.integrations.connect[1].complete(
            scheduled.generation,
            scheduled.outcome,
            None
        ));
        assert_eq!(
            settings.integrations.connect[1].status(),
            ActionStatus::Idle
        );
        assert_eq!(
            settings.integrations.rows[1].status,
            data::IntegrationStatus::Disconnected
        );
    }

    #[test]
    fn test_any_pending_sees_every_section() {
        let mut settings = SettingsState::new();
        assert!(!settings.any_pending());
        settings
            .export
            .export
            .trigger(DELAY, ActionOutcome::Succeeded)
            .unwrap();
        assert!(settings.any_pending());
    }
}
