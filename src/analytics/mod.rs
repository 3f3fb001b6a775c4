//! Tracking-event sink.
//!
//! Fire-and-forget: `track` returns nothing and failures are the sink's
//! problem. Events are emitted by flow transitions (state changes), never by
//! pure resolution, so a re-render can never duplicate one.

use serde_json::{Map, Value};
use strum::IntoStaticStr;
use tracing::info;

/// Every tracking event the activity flow can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TrackEventName {
    ActivitylogRestoreRequest,
    ActivitylogRestoreCancel,
    ActivitylogRestoreConfirm,
    ActivitylogBackupRequest,
    ActivitylogBackupCancel,
    ActivitylogBackupConfirm,
    ActivitylogEventGetHelp,
    ActivitylogEventFixCredentials,
}

impl TrackEventName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEvent {
    pub name: TrackEventName,
    pub properties: Map<String, Value>,
}

impl TrackEvent {
    pub fn new(name: TrackEventName) -> Self {
        Self {
            name,
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: TrackEvent);
}

/// Sink that forwards events to the tracing pipeline.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn track(&self, event: TrackEvent) {
        info!(
            event = event.name.as_str(),
            properties = %serde_json::Value::Object(event.properties),
            "track"
        );
    }
}

/// Sink that records every event, for assertions in tests.
#[derive(Debug, Default)]
pub struct CollectingAnalytics {
    events: std::sync::Mutex<Vec<TrackEvent>>,
}

impl CollectingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TrackEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn names(&self) -> Vec<TrackEventName> {
        self.events().into_iter().map(|event| event.name).collect()
    }
}

impl AnalyticsSink for CollectingAnalytics {
    fn track(&self, event: TrackEvent) {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
    }
}
