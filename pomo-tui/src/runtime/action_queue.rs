use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// User intents that mutate the session. Key handlers enqueue them, the
/// event loop applies them after input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    StartCycle,
    StopCycle,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
