// ticker.rs - Tick loop for running without a window
//
// The loop reschedules itself every POLL_INTERVAL and lets the controller
// decide whether a turn is due, so the poll rate stays fixed while the
// simulation speed changes underneath it. Pausing the controller ends the
// loop at its next wake-up.

use tokio::time::{self, Instant};
use tracing::debug;

use crate::controller::SimulationController;
use crate::speed::POLL_INTERVAL;

/// Polls `controller` until it has committed `max_turns` turns or is
/// paused. `on_turn` runs after every committed turn. Returns the number of
/// turns committed.
pub async fn run<F>(controller: &mut SimulationController, max_turns: u64, mut on_turn: F) -> u64
where
    F: FnMut(&mut SimulationController),
{
    let mut turns = 0;
    while controller.is_running() && turns < max_turns {
        if controller.poll(Instant::now().into_std()) {
            turns += 1;
            on_turn(controller);
        }
        time::sleep(POLL_INTERVAL).await;
    }
    debug!(turns, running = controller.is_running(), "tick loop finished");
    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, PatternCatalog, Speed};
    use std::time::Duration;

    fn running_controller() -> SimulationController {
        let mut c = SimulationController::new(Grid::new(5, 5), PatternCatalog::new());
        c.start_pause();
        c
    }

    #[tokio::test(start_paused = true)]
    async fn turns_follow_the_speed_interval() {
        let mut c = running_controller();
        let began = Instant::now();
        let turns = run(&mut c, 3, |_| {}).await;
        assert_eq!(turns, 3);
        assert_eq!(c.turn(), 3);

        // Immediate first turn, then two 500ms waits, then one last poll.
        let elapsed = began.elapsed();
        assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
        assert!(elapsed <= Duration::from_millis(1000) + POLL_INTERVAL, "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn faster_speed_means_shorter_run() {
        let mut c = running_controller();
        c.set_speed(Speed::Fastest);
        let began = Instant::now();
        run(&mut c, 3, |_| {}).await;
        assert!(began.elapsed() <= Duration::from_millis(300) + POLL_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn pausing_ends_the_loop() {
        let mut c = running_controller();
        let turns = run(&mut c, 100, |c| {
            if c.turn() == 2 {
                c.start_pause();
            }
        })
        .await;
        assert_eq!(turns, 2);
        assert!(!c.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_controller_never_ticks() {
        let mut c = SimulationController::new(Grid::new(2, 2), PatternCatalog::new());
        assert_eq!(run(&mut c, 5, |_| {}).await, 0);
        assert_eq!(c.turn(), 0);
    }
}
