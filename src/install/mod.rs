//! Remote plugin-install response handling.
//!
//! The install endpoint reports either success or a structured error. The
//! only transient failure worth retrying automatically is a timeout, and
//! only while the retry budget lasts; everything else surfaces as a terminal
//! failure for the caller to display.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<InstallError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Complete,
    /// Re-issue the request with the decremented budget.
    Retry { retries_left: u32 },
    Failed { code: String, message: String },
}

pub fn handle_install_response(retries_left: u32, response: &InstallResponse) -> InstallOutcome {
    if response.status {
        return InstallOutcome::Complete;
    }

    match &response.error {
        Some(error) if error.message.contains("timed out") && retries_left > 0 => {
            warn!(retries_left, "install timed out, retrying");
            InstallOutcome::Retry {
                retries_left: retries_left - 1,
            }
        }
        Some(error) => InstallOutcome::Failed {
            code: error.code.clone(),
            message: error.message.clone(),
        },
        None => InstallOutcome::Failed {
            code: "unknown".into(),
            message: "install failed without an error payload".into(),
        },
    }
}
