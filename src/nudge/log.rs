use serde::{Deserialize, Serialize};

/// What a recorded dismissal event meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissalKind {
    /// The user closed the nudge outright.
    Dismiss,
    /// The user indicated the suggestion no longer applies to them.
    AlreadyListed,
}

/// One append-only log entry. Field names match the persisted preference
/// shape, so stored histories from older clients deserialize unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissalEvent {
    /// Epoch milliseconds.
    #[serde(rename = "dismissedAt")]
    pub dismissed_at: i64,
    #[serde(rename = "type")]
    pub kind: DismissalKind,
}

/// Per-site dismissal history. Insertion order is chronological order;
/// entries are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DismissalLog {
    events: Vec<DismissalEvent>,
}

impl DismissalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: DismissalEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[DismissalEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl FromIterator<DismissalEvent> for DismissalLog {
    fn from_iter<I: IntoIterator<Item = DismissalEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
