//! Static mock datasets.
//!
//! Everything here stands in for a backend that does not exist. Each screen
//! owns its own copy of the collections it shows; filtering and search are
//! pure projections that never mutate the source.

/// Role of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Owner,
    Reviewer,
    Viewer,
}

impl MemberRole {
    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Owner => "Owner",
            MemberRole::Reviewer => "Reviewer",
            MemberRole::Viewer => "Viewer",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub username: &'static str,
    pub role: MemberRole,
    pub active: bool,
    pub last_active: &'static str,
    pub reviews: u32,
    pub contributions: u32,
    pub joined: &'static str,
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1",
            name: "Alex Rodriguez",
            email: "alex@company.com",
            username: "@alexdev",
            role: MemberRole::Owner,
            active: true,
            last_active: "2 minutes ago",
            reviews: 45,
            contributions: 234,
            joined: "2024-01-15",
        },
        TeamMember {
            id: "2",
            name: "Sarah Chen",
            email: "sarah@company.com",
            username: "@sarahc",
            role: MemberRole::Reviewer,
            active: true,
            last_active: "1 hour ago",
            reviews: 28,
            contributions: 156,
            joined: "2024-02-20",
        },
        TeamMember {
            id: "3",
            name: "Marcus Kim",
            email: "marcus@company.com",
            username: "@marcusk",
            role: MemberRole::Viewer,
            active: false,
            last_active: "3 days ago",
            reviews: 12,
            contributions: 67,
            joined: "2024-03-10",
        },
    ]
}

/// Case-insensitive name/email search plus optional role filter.
/// Pure projection: returns indices into the source slice.
pub fn filter_members(
    members: &[TeamMember],
    query: &str,
    role: Option<MemberRole>,
) -> Vec<usize> {
    let needle = query.to_lowercase();
    members
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            let matches_query = needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.email.to_lowercase().contains(&needle);
            let matches_role = role.map_or(true, |r| m.role == r);
            matches_query && matches_role
        })
        .map(|(i, _)| i)
        .collect()
}

/// Kind of a past analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    Review,
    Debug,
    Explain,
}

impl HistoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            HistoryKind::Review => "Review",
            HistoryKind::Debug => "Debug",
            HistoryKind::Explain => "Explain",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryItem {
    pub id: &'static str,
    pub kind: HistoryKind,
    pub title: &'static str,
    pub description: &'static str,
    pub timestamp: &'static str,
    pub duration: &'static str,
    pub completed: bool,
    pub rating: u8,
    pub repository: &'static str,
    pub language: &'static str,
    pub lines_of_code: u32,
}

pub fn history_items() -> Vec<HistoryItem> {
    vec![
        HistoryItem {
            id: "1",
            kind: HistoryKind::Review,
            title: "UserAuthentication.js Code Review",
            description: "Complete analysis of authentication logic with security recommendations",
            timestamp: "2 hours ago",
            duration: "3m 45s",
            completed: true,
            rating: 4,
            repository: "my-app/frontend",
            language: "JavaScript",
            lines_of_code: 156,
        },
        HistoryItem {
            id: "2",
            kind: HistoryKind::Debug,
            title: "React Hook Memory Leak Debug",
            description: "Identified and resolved useEffect dependency issue causing memory leaks",
            timestamp: "5 hours ago",
            duration: "8m 12s",
            completed: true,
            rating: 5,
            repository: "react-dashboard",
            language: "TypeScript",
            lines_of_code: 89,
        },
        HistoryItem {
            id: "3",
            kind: HistoryKind::Explain,
            title: "Sorting Algorithm Explanation",
            description: "Detailed breakdown of quicksort implementation and time complexity",
            timestamp: "1 day ago",
            duration: "5m 30s",
            completed: true,
            rating: 4,
            repository: "algorithms-practice",
            language: "Python",
            lines_of_code: 45,
        },
        HistoryItem {
            id: "4",
            kind: HistoryKind::Review,
            title: "Database Migration Scripts",
            description: "Security and performance review of SQL migration files",
            timestamp: "2 days ago",
            duration: "12m 18s",
            completed: true,
            rating: 5,
            repository: "backend-api",
            language: "SQL",
            lines_of_code: 234,
        },
        HistoryItem {
            id: "5",
            kind: HistoryKind::Debug,
            title: "API Rate Limiting Issue",
            description: "Currently analyzing rate limiting configuration and middleware",
            timestamp: "3 days ago",
            duration: "2m 15s",
            completed: false,
            rating: 0,
            repository: "backend-api",
            language: "JavaScript",
            lines_of_code: 78,
        },
    ]
}

/// Title/repository search plus optional kind filter. Pure projection.
pub fn filter_history(
    items: &[HistoryItem],
    query: &str,
    kind: Option<HistoryKind>,
) -> Vec<usize> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            let matches_query = needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.repository.to_lowercase().contains(&needle);
            let matches_kind = kind.map_or(true, |k| item.kind == k);
            matches_query && matches_kind
        })
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone)]
pub struct ApiKey {
    pub name: String,
    pub key: String,
    pub last_used: &'static str,
    pub usage: u32,
}

pub fn api_keys() -> Vec<ApiKey> {
    vec![
        ApiKey {
            name: "Production API".to_string(),
            key: "cm_live_1234567890abcdef".to_string(),
            last_used: "2 hours ago",
            usage: 1250,
        },
        ApiKey {
            name: "Development API".to_string(),
            key: "cm_dev_abcdef1234567890".to_string(),
            last_used: "1 day ago",
            usage: 450,
        },
    ]
}

/// Mask an API key: first 12 characters visible, the rest bulleted.
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(12).collect();
    format!("{visible}{}", "\u{2022}".repeat(16))
}

/// Connection state of an external integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStatus {
    Connected,
    Pending,
    Disconnected,
}

impl IntegrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IntegrationStatus::Connected => "Connected",
            IntegrationStatus::Pending => "Pending",
            IntegrationStatus::Disconnected => "Disconnected",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Integration {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: IntegrationStatus,
    pub last_sync: String,
}

pub fn integrations() -> Vec<Integration> {
    let row = |id, name, description, status, last_sync: &str| Integration {
        id,
        name,
        description,
        status,
        last_sync: last_sync.to_string(),
    };
    vec![
        row(
            "github",
            "GitHub",
            "Sync repositories and pull requests",
            IntegrationStatus::Connected,
            "2 minutes ago",
        ),
        row(
            "slack",
            "Slack",
            "Get notifications in Slack",
            IntegrationStatus::Pending,
            "Never",
        ),
        row(
            "email",
            "Email",
            "Email notifications",
            IntegrationStatus::Connected,
            "1 hour ago",
        ),
        row(
            "mobile",
            "Mobile App",
            "Push notifications",
            IntegrationStatus::Disconnected,
            "Never",
        ),
        row(
            "desktop",
            "Desktop App",
            "Desktop notifications",
            IntegrationStatus::Connected,
            "5 minutes ago",
        ),
        row(
            "docs",
            "Documentation",
            "Sync documentation",
            IntegrationStatus::Disconnected,
            "Never",
        ),
        row(
            "api",
            "API Integration",
            "Custom API endpoints",
            IntegrationStatus::Connected,
            "30 minutes ago",
        ),
        row(
            "database",
            "Database",
            "Database connections",
            IntegrationStatus::Disconnected,
            "Never",
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: &'static str,
    pub date: &'static str,
    pub amount_cents: u32,
    pub paid: bool,
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-001",
            date: "2024-01-15",
            amount_cents: 2900,
            paid: true,
        },
        Invoice {
            id: "INV-002",
            date: "2023-12-15",
            amount_cents: 2900,
            paid: true,
        },
        Invoice {
            id: "INV-003",
            date: "2023-11-15",
            amount_cents: 2900,
            paid: true,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub device: &'static str,
    pub browser: &'static str,
    pub location: &'static str,
    pub last_active: &'static str,
    pub current: bool,
}

pub fn active_sessions() -> Vec<ActiveSession> {
    vec![
        ActiveSession {
            device: "MacBook Pro",
            browser: "Chrome",
            location: "San Francisco, CA",
            last_active: "2 minutes ago",
            current: true,
        },
        ActiveSession {
            device: "iPhone 15",
            browser: "Safari",
            location: "San Francisco, CA",
            last_active: "1 hour ago",
            current: false,
        },
        ActiveSession {
            device: "Windows PC",
            browser: "Firefox",
            location: "New York, NY",
            last_active: "2 days ago",
            current: false,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub description: &'static str,
    pub location: &'static str,
    pub timestamp: &'static str,
    pub success: bool,
}

pub fn audit_events() -> Vec<AuditEvent> {
    vec![
        AuditEvent {
            description: "Successful login from new device",
            location: "San Francisco, CA",
            timestamp: "2024-01-20 14:30",
            success: true,
        },
        AuditEvent {
            description: "Password changed",
            location: "San Francisco, CA",
            timestamp: "2024-01-10 09:12",
            success: true,
        },
        AuditEvent {
            description: "Failed login attempt",
            location: "Unknown",
            timestamp: "2024-01-08 03:47",
            success: false,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct ExportRecord {
    pub label: &'static str,
    pub date: String,
    pub size: String,
}

pub fn export_history() -> Vec<ExportRecord> {
    let record = |label, date: &str, size: &str| ExportRecord {
        label,
        date: date.to_string(),
        size: size.to_string(),
    };
    vec![
        record("Full Export", "2024-01-15", "2.5 MB"),
        record("Projects Only", "2024-01-10", "1.2 MB"),
        record("Analysis History", "2024-01-05", "800 KB"),
    ]
}

/// Data categories offered on the Export and Delete screens.
pub const DATA_CATEGORIES: [(&str, &str); 8] = [
    ("profile", "Profile Information"),
    ("projects", "Projects"),
    ("analysis_history", "Analysis History"),
    ("api_keys", "API Keys"),
    ("integrations", "Integrations"),
    ("billing_history", "Billing History"),
    ("settings", "Settings"),
    ("custom_rules", "Custom Rules"),
];

/// Sample code preloaded into the dashboard editor.
pub const SAMPLE_CODE: &str = "\
function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}

console.log(fibonacci(10));";

/// Sample error log preloaded into the debug tab.
pub const SAMPLE_ERROR: &str = "\
TypeError: Cannot read properties of undefined (reading 'length')
    at validateInput (app.js:23:18)
    at processData (app.js:45:12)
    at main (app.js:78:5)
    at Object.<anonymous> (app.js:95:1)";

/// Invite link copied from the Team screen.
pub const INVITE_LINK: &str = "https://codementor.ai/invite/team-xyz-123";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_members_by_query_is_case_insensitive() {
        let members = team_members();
        let hits = filter_members(&members, "SARAH", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(members[hits[0]].name, "Sarah Chen");
    }

    #[test]
    fn test_filter_members_by_role() {
        let members = team_members();
        let hits = filter_members(&members, "", Some(MemberRole::Owner));
        assert_eq!(hits.len(), 1);
        assert_eq!(members[hits[0]].role, MemberRole::Owner);
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let members = team_members();
        let before = members.len();
        let _ = filter_members(&members, "zzz-no-match", None);
        assert_eq!(members.len(), before);
    }

    #[test]
    fn test_filter_history_by_kind_and_query() {
        let items = history_items();
        let debug_hits = filter_history(&items, "", Some(HistoryKind::Debug));
        assert_eq!(debug_hits.len(), 2);

        let hits = filter_history(&items, "backend-api", Some(HistoryKind::Debug));
        assert_eq!(hits.len(), 1);
        assert_eq!(items[hits[0]].id, "5");
    }

    #[test]
    fn test_mask_key_keeps_prefix() {
        let masked = mask_key("cm_live_1234567890abcdef");
        assert!(masked.starts_with("cm_live_1234"));
        assert!(!masked.contains("abcdef"));
        assert_eq!(masked.chars().count(), 12 + 16);
    }

    #[test]
    fn test_mask_key_short_input() {
        let masked = mask_key("short");
        assert!(masked.starts_with("short"));
        assert_eq!(masked.chars().count(), 5 + 16);
    }
}
