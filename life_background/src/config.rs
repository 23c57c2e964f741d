// config.rs - Compile-time settings for the animated background

use egui::Color32;
use std::time::Duration;

pub const BLOCK_SIZE: u32 = 10;                                  // Pixel edge of one cell
pub const FRAME_DURATION: Duration = Duration::from_millis(200); // ~5 generations per second
pub const RESEED_FRACTION: f64 = 0.025;                          // Share of cells below which a shape is injected
pub const RESEED_CHANCE: f64 = 0.01;                             // Per-step chance of an extra shape

pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;                           // rgba(255, 255, 255, 1)
pub const FOREGROUND_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 26); // rgba(0, 0, 0, 0.1)

pub const WINDOW_SIZE: [f32; 2] = [960.0, 640.0];

/// Tuning for [`GridSimulation`](crate::simulation::GridSimulation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Fraction of the grid area below which a reseed always fires.
    pub reseed_fraction: f64,
    /// Probability of a reseed on a step that is above the threshold.
    pub reseed_chance: f64,
}

impl SimulationConfig {
    /// No automatic reseeding at all. Only useful for deterministic runs.
    pub const fn without_reseed() -> Self {
        Self {
            reseed_fraction: 0.0,
            reseed_chance: 0.0,
        }
    }

    /// `floor(width * height * reseed_fraction)`
    pub fn threshold(&self, width: usize, height: usize) -> usize {
        ((width * height) as f64 * self.reseed_fraction).floor() as usize
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reseed_fraction: RESEED_FRACTION,
            reseed_chance: RESEED_CHANCE,
        }
    }
}

/// Tuning for [`AnimationDriver`](crate::driver::AnimationDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub block_size: u32,
    pub frame_duration: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            frame_duration: FRAME_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_rounds_down() {
        let config = SimulationConfig::default();
        assert_eq!(config.threshold(10, 10), 2);   // 2.5
        assert_eq!(config.threshold(5, 5), 0);     // 0.625
        assert_eq!(config.threshold(96, 64), 153); // 153.6
        assert_eq!(config.threshold(0, 64), 0);
    }

    #[test]
    fn without_reseed_never_has_a_threshold() {
        assert_eq!(SimulationConfig::without_reseed().threshold(1000, 1000), 0);
    }
}
