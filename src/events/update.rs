use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle events emitted by a generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobEventKind {
    JobStarted,
    StageChanged,
    JobCompleted,
    JobCancelled,
}

impl JobEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JobStarted => "job.started",
            Self::StageChanged => "job.stage_changed",
            Self::JobCompleted => "job.completed",
            Self::JobCancelled => "job.cancelled",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::JobStarted => "🚀",
            Self::StageChanged => "🔄",
            Self::JobCompleted => "✅",
            Self::JobCancelled => "🚫",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::JobCompleted | Self::JobCancelled)
    }
}

/// One stage-change notification from the operation driver.
///
/// `stage_id` is free-form by contract: the view resolves it against the
/// catalogue and falls back gracefully when it doesn't match, so a driver
/// sending ids outside the configured set never breaks rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageUpdate {
    pub stage_id: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl StageUpdate {
    pub fn new(stage_id: impl Into<String>) -> Self {
        Self {
            stage_id: stage_id.into(),
            message: String::new(),
            at: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}
