use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `sitepulse`.
///
/// Each failing subsystem defines its own error variant. Library callers can
/// match on these to decide recovery strategy; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains. The decision engines themselves
/// (nudge policy, activity resolver) are total functions and never return
/// errors — only the persistence seam does.
#[derive(Debug, Error)]
pub enum SitepulseError {
    // ── Preference store ────────────────────────────────────────────────
    #[error("prefs: {0}")]
    Prefs(#[from] PrefsError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Preference store errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to open store: {0}")]
    Open(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("stored value is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for PrefsError {
    fn from(error: rusqlite::Error) -> Self {
        PrefsError::Query(error.to_string())
    }
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SitepulseError>;
