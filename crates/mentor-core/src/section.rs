//! Settings section routing.
//!
//! The settings surface is a closed set of nine panels addressed by slug
//! (the original web routes: `/settings/{slug}`). Navigation targets are
//! free-form strings; anything outside the closed set resolves to a redirect
//! to the default panel rather than an error page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One settings panel among the closed, fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    #[default]
    Profile,
    ApiKeys,
    Integrations,
    Notifications,
    Analysis,
    Billing,
    Security,
    Export,
    Delete,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 9] = [
        Section::Profile,
        Section::ApiKeys,
        Section::Integrations,
        Section::Notifications,
        Section::Analysis,
        Section::Billing,
        Section::Security,
        Section::Export,
        Section::Delete,
    ];

    /// URL-style slug, matching the original route segments exactly.
    pub fn as_slug(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::ApiKeys => "api-keys",
            Section::Integrations => "integrations",
            Section::Notifications => "notifications",
            Section::Analysis => "analysis",
            Section::Billing => "billing",
            Section::Security => "security",
            Section::Export => "export",
            Section::Delete => "delete",
        }
    }

    /// Human-readable tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::ApiKeys => "API Keys",
            Section::Integrations => "Integrations",
            Section::Notifications => "Notifications",
            Section::Analysis => "Analysis",
            Section::Billing => "Billing",
            Section::Security => "Security",
            Section::Export => "Export Data",
            Section::Delete => "Delete Account",
        }
    }

    /// One-line description shown in the navigation dropdown.
    pub fn description(&self) -> &'static str {
        match self {
            Section::Profile => "Manage your personal information",
            Section::ApiKeys => "Manage your API keys and usage",
            Section::Integrations => "Connect external services",
            Section::Notifications => "Configure email and push notifications",
            Section::Analysis => "Default settings and custom rules",
            Section::Billing => "Subscription and billing information",
            Section::Security => "Security audit log and settings",
            Section::Export => "Download your data",
            Section::Delete => "Permanently delete your account",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Section at a display-order index, if in range.
    pub fn from_index(idx: usize) -> Option<Section> {
        Section::ALL.get(idx).copied()
    }

    /// Next section in display order, wrapping.
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section in display order, wrapping.
    pub fn prev(&self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

impl FromStr for Section {
    type Err = ();

    /// Exact, case-sensitive slug match. No trimming or normalization:
    /// routing stays deterministic, and anything else is simply not a
    /// section.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .find(|section| section.as_slug() == s)
            .copied()
            .ok_or(())
    }
}

/// Result of resolving a navigation target.
///
/// A redirect is a navigation instruction, not an error: the caller must
/// land on the carried section before rendering any panel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionRoute {
    /// The target named a valid section.
    Section(Section),
    /// The target was unknown; navigate to the carried default instead.
    Redirect(Section),
}

impl SectionRoute {
    /// The section this route lands on, redirect or not.
    pub fn destination(&self) -> Section {
        match self {
            SectionRoute::Section(s) | SectionRoute::Redirect(s) => *s,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, SectionRoute::Redirect(_))
    }
}

/// Resolve a free-form route segment to a section.
///
/// Never fails: unknown, empty, or miscased segments redirect to
/// [`Section::Profile`].
pub fn resolve(segment: &str) -> SectionRoute {
    match segment.parse::<Section>() {
        Ok(section) => SectionRoute::Section(section),
        Err(()) => SectionRoute::Redirect(Section::Profile),
    }
}

/// A titled group of sections, as listed in the navigation dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGroup {
    pub title: &'static str,
    pub sections: &'static [Section],
}

/// Dropdown grouping: Account / Preferences / Billing & Security /
/// Data & Account.
pub const SECTION_GROUPS: [SectionGroup; 4] = [
    SectionGroup {
        title: "Account",
        sections: &[Section::Profile, Section::ApiKeys, Section::Integrations],
    },
    SectionGroup {
        title: "Preferences",
        sections: &[Section::Notifications, Section::Analysis],
    },
    SectionGroup {
        title: "Billing & Security",
        sections: &[Section::Billing, Section::Security],
    },
    SectionGroup {
        title: "Data & Account",
        sections: &[Section::Export, Section::Delete],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs_resolve_unchanged() {
        for section in Section::ALL {
            assert_eq!(
                resolve(section.as_slug()),
                SectionRoute::Section(section),
                "slug {} should resolve to itself",
                section.as_slug()
            );
        }
        assert_eq!(
            resolve("billing"),
            SectionRoute::Section(Section::Billing)
        );
    }

    #[test]
    fn test_unknown_slug_redirects_to_profile() {
        assert_eq!(
            resolve("not-a-real-section"),
            SectionRoute::Redirect(Section::Profile)
        );
    }

    #[test]
    fn test_empty_and_whitespace_redirect() {
        assert!(resolve("").is_redirect());
        assert!(resolve("   ").is_redirect());
        assert!(resolve(" profile").is_redirect());
        assert!(resolve("profile ").is_redirect());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(resolve("Profile").is_redirect());
        assert!(resolve("API-KEYS").is_redirect());
        assert_eq!(resolve("api-keys"), SectionRoute::Section(Section::ApiKeys));
    }

    #[test]
    fn test_redirect_destination_is_profile() {
        assert_eq!(resolve("bogus").destination(), Section::Profile);
    }

    #[test]
    fn test_next_prev_cycle() {
        assert_eq!(Section::Profile.next(), Section::ApiKeys);
        assert_eq!(Section::Delete.next(), Section::Profile);
        assert_eq!(Section::Profile.prev(), Section::Delete);

        let mut section = Section::Profile;
        for _ in 0..Section::ALL.len() {
            section = section.next();
        }
        assert_eq!(section, Section::Profile);
    }

    #[test]
    fn test_groups_cover_every_section_once() {
        let mut seen = Vec::new();
        for group in SECTION_GROUPS {
            for section in group.sections {
                assert!(!seen.contains(section), "{section} listed twice");
                seen.push(*section);
            }
        }
        assert_eq!(seen.len(), Section::ALL.len());
    }

    #[test]
    fn test_index_round_trip() {
        for (idx, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), idx);
            assert_eq!(Section::from_index(idx), Some(*section));
        }
        assert_eq!(Section::from_index(99), None);
    }
}
