// host/headless.rs - Window-less host that fakes a display refresh with a tokio interval

use rand::Rng;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

use crate::driver::{AnimationDriver, Scheduler};
use crate::surface::Canvas;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub frames: usize,   // callbacks delivered
    pub accepted: usize, // of which stepped and rendered
}

/// Single-shot re-arm flag; the loop only continues if the driver set it.
struct Rearm {
    armed: bool,
}

impl Scheduler for Rearm {
    fn request_frame(&mut self) {
        self.armed = true;
    }
}

/// Calls `driver.tick` once per `refresh` until the driver stops re-arming
/// or `max_frames` callbacks have been delivered.
pub async fn run_headless<R: Rng>(
    driver: &mut AnimationDriver<R>,
    canvas: &mut Canvas,
    refresh: Duration,
    max_frames: usize,
) -> HeadlessReport {
    let mut refresh = interval(refresh);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut report = HeadlessReport::default();
    let mut rearm = Rearm { armed: true };
    while rearm.armed && report.frames < max_frames {
        rearm.armed = false;
        let now = refresh.tick().await.into_std();
        report.frames += 1;
        if driver.tick(now, canvas, &mut rearm) {
            report.accepted += 1;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DriverConfig, SimulationConfig, BACKGROUND_COLOR};
    use crate::simulation::GridSimulation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn driver_at_tokio_now() -> AnimationDriver<StdRng> {
        let simulation = GridSimulation::with_rng(SimulationConfig::default(), StdRng::seed_from_u64(11));
        let now = tokio::time::Instant::now().into_std();
        AnimationDriver::with_simulation(DriverConfig::default(), simulation, (120, 80), now)
    }

    #[tokio::test(start_paused = true)]
    async fn sixty_hertz_refresh_steps_at_five_hertz() {
        let mut driver = driver_at_tokio_now();
        let mut canvas = Canvas::new(120, 80);

        // Refreshes land every 16ms; steps are accepted at 208, 416, 624 and 832ms.
        let report = run_headless(&mut driver, &mut canvas, Duration::from_millis(16), 60).await;
        assert_eq!(report, HeadlessReport { frames: 60, accepted: 4 });
        assert_eq!(driver.simulation().generation(), 4);
        assert_eq!(canvas.pixel(0, 0), Some(BACKGROUND_COLOR));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_driver_ends_the_loop() {
        let mut driver = driver_at_tokio_now();
        driver.stop();
        let mut canvas = Canvas::new(120, 80);

        let report = run_headless(&mut driver, &mut canvas, Duration::from_millis(16), 1_000).await;
        assert_eq!(report, HeadlessReport { frames: 1, accepted: 0 });
    }
}
