use std::fmt;

use serde::{Deserialize, Serialize};

/// A step in the fixed generation sequence.
///
/// The set is closed at compile time, but upstream event sources send ids as
/// free-form strings, so [`StageId::parse`] keeps unknown ids representable
/// as `None` rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Year,
    Quarters,
    Months,
    Weeks,
    Complete,
}

impl StageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Quarters => "quarters",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Complete => "complete",
        }
    }

    /// Parse a free-form stage id. Unknown ids yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "year" => Some(Self::Year),
            "quarters" => Some(Self::Quarters),
            "months" => Some(Self::Months),
            "weeks" => Some(Self::Weeks),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in the stage catalogue: stable id plus its display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageDefinition {
    pub id: StageId,
    pub label: &'static str,
    pub indicator: &'static str,
}

/// The fixed, ordered stage sequence. Defined once, shared read-only.
pub const STAGES: [StageDefinition; 5] = [
    StageDefinition {
        id: StageId::Year,
        label: "Shaping your year vision",
        indicator: "🎯",
    },
    StageDefinition {
        id: StageId::Quarters,
        label: "Breaking it into quarters",
        indicator: "🗓️",
    },
    StageDefinition {
        id: StageId::Months,
        label: "Planning your months",
        indicator: "📅",
    },
    StageDefinition {
        id: StageId::Weeks,
        label: "Scheduling your weeks",
        indicator: "📋",
    },
    StageDefinition {
        id: StageId::Complete,
        label: "Your plan is ready",
        indicator: "✅",
    },
];

/// Label shown when the current stage id is not in the catalogue.
pub const FALLBACK_LABEL: &str = "Generating...";

/// Indicator shown when the current stage id is not in the catalogue.
pub const FALLBACK_INDICATOR: &str = "⏳";

/// Look up the catalogue entry for a free-form stage id.
pub fn resolve_stage(stage_id: &str) -> Option<&'static StageDefinition> {
    STAGES.iter().find(|s| s.id.as_str() == stage_id)
}
