//! Pure progress computation over the fixed stage sequence.

use serde::{Deserialize, Serialize};

use super::types::{StageId, STAGES};

/// Position of a stage id within the sequence, or -1 if absent.
pub fn stage_index(current_stage_id: &str) -> i32 {
    STAGES
        .iter()
        .position(|s| s.id.as_str() == current_stage_id)
        .map(|i| i as i32)
        .unwrap_or(-1)
}

/// Display percentage for the current stage, rounded to the nearest integer.
///
/// An id outside the sequence counts as index -1, so `(0 / n) * 100 == 0`.
pub fn percent_complete(current_stage_id: &str) -> u8 {
    ProgressSnapshot::compute(current_stage_id).percent
}

/// Derived view of progress at one instant. Never stored — recomputed from
/// the current stage id on every render, so percent and stage can't drift
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// 0-based position in the sequence, -1 for ids outside it.
    pub stage_index: i32,
    /// Rounded percentage for display.
    pub percent: u8,
    /// Full-precision completion ratio in [0, 1].
    pub fraction: f64,
}

impl ProgressSnapshot {
    pub fn compute(current_stage_id: &str) -> Self {
        let index = stage_index(current_stage_id);
        let fraction = (index + 1) as f64 / STAGES.len() as f64;
        Self {
            stage_index: index,
            percent: (fraction * 100.0).round() as u8,
            fraction,
        }
    }

    pub fn is_known_stage(&self) -> bool {
        self.stage_index >= 0
    }

    pub fn is_complete(&self) -> bool {
        self.stage_index == STAGES.len() as i32 - 1
    }
}

/// Marker facets for one stage row.
///
/// `completed` and `active` are computed independently, not as one tri-state:
/// if the current stage id regresses backward, an already-passed stage renders
/// as active while later stages keep whatever facet their position gives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMarker {
    pub id: StageId,
    pub completed: bool,
    pub active: bool,
}

/// Markers for every stage in sequence order, relative to the current id.
pub fn stage_markers(current_stage_id: &str) -> Vec<StageMarker> {
    let index = stage_index(current_stage_id);
    STAGES
        .iter()
        .enumerate()
        .map(|(pos, def)| StageMarker {
            id: def.id,
            completed: (pos as i32) < index,
            active: def.id.as_str() == current_stage_id,
        })
        .collect()
}
