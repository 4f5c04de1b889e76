//! Consolidated preference store.
//!
//! The Notifications and Analysis screens both read and write product
//! preferences. Instead of each screen keeping its own divergent copy, all
//! toggles live here keyed by setting name; every panel goes through the
//! same store, so a write from one panel is immediately visible to the
//! others.

use std::collections::BTreeMap;

/// Notification delivery channels.
pub const CHANNELS: [&str; 3] = ["email", "push", "desktop"];

/// Notification categories, in display order.
pub const NOTIFICATION_CATEGORIES: [(&str, &str); 5] = [
    ("code_reviews", "Code Reviews"),
    ("debug_sessions", "Debug Sessions"),
    ("weekly_report", "Weekly Report"),
    ("team_activity", "Team Activity"),
    ("product_updates", "Product Updates"),
];

/// Analysis toggles, in display order.
pub const ANALYSIS_SETTINGS: [(&str, &str); 6] = [
    ("analysis.auto", "Auto Analysis"),
    ("analysis.realtime", "Real-time Analysis"),
    ("analysis.cache_results", "Cache Results"),
    ("analysis.suggestions", "Enable Suggestions"),
    ("analysis.learning", "Enable Learning"),
    ("analysis.share_analytics", "Share Analytics"),
];

/// Custom analysis rules, in display order.
pub const CUSTOM_RULES: [(&str, &str); 5] = [
    ("rule.code_style", "Code Style"),
    ("rule.security_checks", "Security Checks"),
    ("rule.performance", "Performance Optimization"),
    ("rule.accessibility", "Accessibility Checks"),
    ("rule.documentation", "Documentation Checks"),
];

/// Single source of truth for boolean product preferences, keyed by
/// setting name (e.g. `"notify.code_reviews.email"`, `"analysis.auto"`).
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    values: BTreeMap<String, bool>,
}

impl PreferenceStore {
    /// Store seeded with the product defaults the original mock shipped.
    pub fn with_defaults() -> Self {
        let mut store = Self::default();

        // Notification matrix defaults (category x channel).
        let defaults: [(&str, [bool; 3]); 5] = [
            ("code_reviews", [true, false, true]),
            ("debug_sessions", [false, true, false]),
            ("weekly_report", [true, false, true]),
            ("team_activity", [true, true, false]),
            ("product_updates", [false, false, true]),
        ];
        for (category, per_channel) in defaults {
            for (channel, enabled) in CHANNELS.iter().zip(per_channel) {
                store.set(notification_key(category, channel), enabled);
            }
        }

        for (key, enabled) in [
            ("analysis.auto", true),
            ("analysis.realtime", true),
            ("analysis.cache_results", true),
            ("analysis.suggestions", true),
            ("analysis.learning", true),
            ("analysis.share_analytics", false),
        ] {
            store.set(key, enabled);
        }

        for (key, enabled) in [
            ("rule.code_style", true),
            ("rule.security_checks", true),
            ("rule.performance", true),
            ("rule.accessibility", false),
            ("rule.documentation", true),
        ] {
            store.set(key, enabled);
        }

        store
    }

    /// Read a toggle; unknown keys read as disabled.
    pub fn get(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), value);
    }

    /// Flip a toggle, returning the new value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let value = !self.get(key);
        self.set(key, value);
        value
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Key for one notification toggle.
pub fn notification_key(category: &str, channel: &str) -> String {
    format!("notify.{category}.{channel}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seed_notification_matrix() {
        let store = PreferenceStore::with_defaults();
        assert!(store.get("notify.code_reviews.email"));
        assert!(!store.get("notify.code_reviews.push"));
        assert!(store.get("notify.debug_sessions.push"));
    }

    #[test]
    fn test_unknown_key_reads_false() {
        let store = PreferenceStore::with_defaults();
        assert!(!store.get("notify.made_up.channel"));
    }

    #[test]
    fn test_write_visible_to_all_readers() {
        // The point of consolidation: one write, every panel sees it.
        let mut store = PreferenceStore::with_defaults();
        store.set("analysis.auto", false);
        assert!(!store.get("analysis.auto"));

        store.toggle("analysis.auto");
        assert!(store.get("analysis.auto"));
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut store = PreferenceStore::default();
        assert!(store.toggle("rule.code_style"));
        assert!(!store.toggle("rule.code_style"));
    }
}
