use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ActivityError;

/// Lifecycle actions that can be instrumented on a tracked type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackedAction {
    Create,
    Update,
    Destroy,
}

/// Whether a lifecycle callback runs before or after the host operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallbackPhase {
    Before,
    After,
}

impl TrackedAction {
    pub const ALL: [TrackedAction; 3] = [
        TrackedAction::Create,
        TrackedAction::Update,
        TrackedAction::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedAction::Create => "create",
            TrackedAction::Update => "update",
            TrackedAction::Destroy => "destroy",
        }
    }

    /// Destruction is recorded before the row disappears, the others after success.
    pub fn phase(&self) -> CallbackPhase {
        match self {
            TrackedAction::Create | TrackedAction::Update => CallbackPhase::After,
            TrackedAction::Destroy => CallbackPhase::Before,
        }
    }
}

impl fmt::Display for TrackedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackedAction {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches(':').to_ascii_lowercase();
        match normalized.as_str() {
            "create" => Ok(TrackedAction::Create),
            "update" => Ok(TrackedAction::Update),
            "destroy" => Ok(TrackedAction::Destroy),
            _ => Err(ActivityError::ValidationError(format!("Unknown action '{s}'"))),
        }
    }
}
