//! Read-only site context supplied by the site metadata provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Goal tag that marks a site interested in promotion nudges.
pub const GOAL_PROMOTE: &str = "promote";

/// Snapshot of the site attributes the decision engines read. Populated by
/// network fetches elsewhere; never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContext {
    pub site_id: u64,
    pub site_slug: String,
    pub plan_slug: String,
    pub goals: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub has_connected_location: bool,
}

impl SiteContext {
    pub fn has_promote_goal(&self) -> bool {
        self.goals.iter().any(|goal| goal == GOAL_PROMOTE)
    }

    /// Creation time as epoch milliseconds, the unit the policies work in.
    pub fn created_at_ms(&self) -> i64 {
        self.created_at.timestamp_millis()
    }
}

/// Splits the comma-joined `site_goals` site option into tags. Empty or
/// missing options yield no tags; surrounding whitespace is trimmed.
pub fn parse_site_goals(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(goals: &[&str]) -> SiteContext {
        SiteContext {
            site_id: 42,
            site_slug: "example.wordpress.com".into(),
            plan_slug: "business-bundle".into(),
            goals: goals.iter().map(|goal| (*goal).to_string()).collect(),
            created_at: Utc::now(),
            has_connected_location: false,
        }
    }

    #[test]
    fn parse_goals_splits_on_commas() {
        assert_eq!(
            parse_site_goals(Some("promote,grow")),
            vec!["promote".to_string(), "grow".to_string()]
        );
    }

    #[test]
    fn parse_goals_handles_missing_and_empty() {
        assert!(parse_site_goals(None).is_empty());
        assert!(parse_site_goals(Some("")).is_empty());
        assert!(parse_site_goals(Some(",,")).is_empty());
    }

    #[test]
    fn parse_goals_trims_whitespace() {
        assert_eq!(
            parse_site_goals(Some(" promote , share ")),
            vec!["promote".to_string(), "share".to_string()]
        );
    }

    #[test]
    fn promote_goal_is_exact_tag_match() {
        assert!(context(&["promote", "grow"]).has_promote_goal());
        assert!(!context(&["promotion"]).has_promote_goal());
        assert!(!context(&[]).has_promote_goal());
    }
}
