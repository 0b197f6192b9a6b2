//! Simulated operation driver for the demo binary.
//!
//! Walks the fixed stage sequence on a timer and publishes updates. The real
//! generation backend lives elsewhere; this driver produces the same event
//! shape so the view can be exercised end to end, including cancellation.

use std::time::Duration;

use tracing::{debug, info};

use crate::events::{JobEventKind, ProgressSender, StageUpdate};
use crate::signal::CancelFlag;
use crate::stage::STAGES;

/// How a driven job ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    Cancelled,
}

pub struct SimulatedDriver {
    cancel: CancelFlag,
    stage_duration: Duration,
}

impl SimulatedDriver {
    pub fn new(cancel: CancelFlag, stage_duration: Duration) -> Self {
        Self {
            cancel,
            stage_duration,
        }
    }

    /// Advance through the stage sequence, publishing one update per stage.
    ///
    /// The cancel flag is checked before each stage; cancellation between
    /// checks takes effect at the next stage boundary. Send failures mean
    /// every observer is gone, which also ends the job.
    pub async fn run(&self, tx: &ProgressSender) -> JobOutcome {
        info!(event = JobEventKind::JobStarted.as_str(), "Starting generation job");

        for (pos, def) in STAGES.iter().enumerate() {
            if self.cancel.is_cancelled() {
                info!(
                    event = JobEventKind::JobCancelled.as_str(),
                    stage = def.id.as_str(),
                    "Job cancelled before stage"
                );
                return JobOutcome::Cancelled;
            }

            let update = StageUpdate::new(def.id.as_str()).with_message(status_message(pos));
            debug!(
                event = JobEventKind::StageChanged.as_str(),
                stage = def.id.as_str(),
                "Entering stage"
            );
            if tx.send(update).is_err() {
                return JobOutcome::Cancelled;
            }

            // The terminal stage is announced, not waited on.
            if def.id.is_terminal() {
                break;
            }
            tokio::time::sleep(self.stage_duration).await;
        }

        info!(event = JobEventKind::JobCompleted.as_str(), "Job completed");
        JobOutcome::Completed
    }
}

fn status_message(pos: usize) -> String {
    match pos {
        0 => "Sketching the big picture for the year".to_string(),
        1 => "Splitting the year into quarterly themes".to_string(),
        2 => "Assigning goals to months".to_string(),
        3 => "Filling in weekly checkpoints".to_string(),
        _ => "All stages finished".to_string(),
    }
}
