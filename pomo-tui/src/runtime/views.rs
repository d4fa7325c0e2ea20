use crate::app::{App, View};
use crossterm::event::KeyEvent;
use pomo_core::{Clock, Scheduler};

use super::action_queue::{Action, ActionTx};

mod history;
mod timer;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key<C: Clock, S: Scheduler>(
    key: KeyEvent,
    app: &mut App<C, S>,
    action_tx: &ActionTx,
) {
    match app.current_view {
        View::Timer => timer::handle_timer_key(key, app, action_tx),
        View::History => history::handle_history_key(key, app),
    }
}
