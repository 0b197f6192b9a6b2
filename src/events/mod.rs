//! Stage-change events and the channel that carries them.
//!
//! The driver publishes `(stage id, message)` pairs; the view only ever needs
//! the most recent pair, so the channel is a `tokio::sync::watch` — late or
//! slow observers skip intermediate values instead of queueing them.

mod channel;
mod update;

pub use channel::{progress_channel, ProgressReceiver, ProgressSender};
pub use update::{JobEventKind, StageUpdate};
