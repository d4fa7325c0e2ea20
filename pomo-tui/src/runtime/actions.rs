use crate::app::App;
use pomo_core::{Clock, Scheduler};

use super::action_queue::Action;

pub(super) fn run_action<C: Clock, S: Scheduler>(action: Action, app: &mut App<C, S>) {
    match action {
        Action::StartCycle => app.submit_cycle(),
        Action::StopCycle => app.stop_cycle(),
    }
}
