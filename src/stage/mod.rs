//! Stage catalogue and progress computation.
//!
//! The stage sequence is fixed configuration: a finite, ordered list of named
//! steps a generation job moves through. Everything here is pure — snapshots
//! and markers are derived from the current stage id on every call, never
//! stored, so the displayed percentage can't drift from the displayed stage.

mod progress;
mod types;

pub use progress::{percent_complete, stage_index, stage_markers, ProgressSnapshot, StageMarker};
pub use types::{
    resolve_stage, StageDefinition, StageId, FALLBACK_INDICATOR, FALLBACK_LABEL, STAGES,
};
