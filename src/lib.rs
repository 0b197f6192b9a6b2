pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod signal;
pub mod stage;
pub mod tracker;

pub use config::StagelineConfig;
pub use driver::{JobOutcome, SimulatedDriver};
pub use error::{Result, StagelineError};
pub use events::{progress_channel, JobEventKind, StageUpdate};
pub use signal::CancelFlag;
pub use stage::{ProgressSnapshot, StageDefinition, StageId, StageMarker, STAGES};
pub use tracker::{render_view, StageProgressTracker, TrackerInput, TrackerView};
