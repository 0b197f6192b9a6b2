use tokio::sync::watch;

use super::StageUpdate;

pub type ProgressSender = watch::Sender<StageUpdate>;
pub type ProgressReceiver = watch::Receiver<StageUpdate>;

/// Create the channel a driver publishes stage updates on.
///
/// Watch semantics give the ordering guarantee the view relies on: an
/// observer always sees the most recently published update and nothing is
/// buffered, so a burst of stage changes collapses to the latest one.
pub fn progress_channel(initial: StageUpdate) -> (ProgressSender, ProgressReceiver) {
    watch::channel(initial)
}
