//! The staged-progress view.
//!
//! `StageProgressTracker` owns no job state. Every view is recomputed from the
//! inputs supplied for that render, and the only thing the tracker can do
//! besides rendering is forward a user's cancel intent to its owner.

use serde::Serialize;

use crate::stage::{
    resolve_stage, stage_markers, ProgressSnapshot, StageMarker, FALLBACK_INDICATOR,
    FALLBACK_LABEL,
};

/// Shown with every frame. The job keeps running server-side; dismissing the
/// view does not stop it, so the user is told to sit tight rather than leave.
pub const LONG_RUNNING_NOTICE: &str =
    "This can take a couple of minutes. Keep this window open while your plan is generated.";

/// Inputs for one render: the most recent stage id and status message
/// supplied by the owner. Both are opaque — the id need not belong to the
/// catalogue and the message is displayed verbatim.
#[derive(Debug, Clone, Copy)]
pub struct TrackerInput<'a> {
    pub current_stage_id: &'a str,
    pub status_message: &'a str,
}

/// Everything a renderer needs for one frame, fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    pub stage_id: String,
    pub label: &'static str,
    pub indicator: &'static str,
    pub status_message: String,
    pub snapshot: ProgressSnapshot,
    pub markers: Vec<StageMarker>,
    pub notice: &'static str,
}

/// Build the view for one input pair. Pure: identical inputs always produce
/// an identical view.
pub fn render_view(input: &TrackerInput<'_>) -> TrackerView {
    let (label, indicator) = match resolve_stage(input.current_stage_id) {
        Some(def) => (def.label, def.indicator),
        None => (FALLBACK_LABEL, FALLBACK_INDICATOR),
    };

    TrackerView {
        stage_id: input.current_stage_id.to_string(),
        label,
        indicator,
        status_message: input.status_message.to_string(),
        snapshot: ProgressSnapshot::compute(input.current_stage_id),
        markers: stage_markers(input.current_stage_id),
        notice: LONG_RUNNING_NOTICE,
    }
}

/// Stateless progress view with a single outbound cancel hook.
///
/// The tracker never cancels anything itself: `request_cancel` invokes the
/// callback exactly once per call, synchronously, and mutates nothing. Taking
/// down the view after cancellation is the owner's job.
pub struct StageProgressTracker {
    on_cancel: Box<dyn Fn() + Send + Sync>,
}

impl StageProgressTracker {
    pub fn new(on_cancel: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            on_cancel: Box::new(on_cancel),
        }
    }

    /// Render the view for the owner's current inputs.
    pub fn view(&self, input: &TrackerInput<'_>) -> TrackerView {
        render_view(input)
    }

    /// Forward one user cancel action. No debouncing: two rapid calls mean
    /// two callback invocations, guarding against duplicates is the owner's
    /// responsibility.
    pub fn request_cancel(&self) {
        (self.on_cancel)();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_view_resolves_known_stage() {
        let view = render_view(&TrackerInput {
            current_stage_id: "quarters",
            status_message: "Drafting Q1-Q4",
        });

        assert_eq!(view.label, "Breaking it into quarters");
        assert_eq!(view.snapshot.percent, 40);
        assert_eq!(view.status_message, "Drafting Q1-Q4");
    }

    #[test]
    fn test_view_falls_back_for_unknown_stage() {
        let view = render_view(&TrackerInput {
            current_stage_id: "unknown_stage_xyz",
            status_message: "",
        });

        assert_eq!(view.label, FALLBACK_LABEL);
        assert_eq!(view.indicator, FALLBACK_INDICATOR);
        assert_eq!(view.snapshot.percent, 0);
        assert!(view.markers.iter().all(|m| !m.active));
    }

    #[test]
    fn test_view_is_pure() {
        let input = TrackerInput {
            current_stage_id: "weeks",
            status_message: "Week 3 of 12",
        };
        assert_eq!(render_view(&input), render_view(&input));
    }

    #[test]
    fn test_request_cancel_invokes_callback_once_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let tracker = StageProgressTracker::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tracker.request_cancel();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tracker.request_cancel();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cancel_does_not_change_rendering() {
        let tracker = StageProgressTracker::new(|| {});
        let input = TrackerInput {
            current_stage_id: "months",
            status_message: "Laying out milestones",
        };

        let before = tracker.view(&input);
        tracker.request_cancel();
        let after = tracker.view(&input);

        assert_eq!(before, after);
    }
}
