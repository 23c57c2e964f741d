// driver.rs - Throttles simulation steps to a fixed cadence and hands frames to the renderer

use rand::rngs::StdRng;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, trace};

use crate::config::{DriverConfig, SimulationConfig};
use crate::render::Renderer;
use crate::shapes::Shape;
use crate::simulation::GridSimulation;
use crate::surface::Surface;

/// Host primitive that calls back once per display refresh.
pub trait Scheduler {
    /// Arms exactly one more callback.
    fn request_frame(&mut self);
}

/// Cells needed to cover `pixels` with blocks of `block_size`.
pub fn cells_for(pixels: u32, block_size: u32) -> usize {
    if block_size == 0 {
        return 0;
    }
    pixels.div_ceil(block_size) as usize
}

pub struct AnimationDriver<R = StdRng> {
    simulation: GridSimulation<R>,
    renderer: Renderer,
    config: DriverConfig,
    pixel_size: (u32, u32),
    last_tick: Instant,
    running: bool,
}

impl AnimationDriver<StdRng> {
    pub fn start(
        config: DriverConfig,
        sim_config: SimulationConfig,
        pixel_size: (u32, u32),
        now: Instant,
    ) -> Self {
        Self::with_simulation(config, GridSimulation::new(sim_config), pixel_size, now)
    }
}

impl<R: Rng> AnimationDriver<R> {
    /// Sizes `simulation` for `pixel_size` and starts running.
    pub fn with_simulation(
        config: DriverConfig,
        simulation: GridSimulation<R>,
        pixel_size: (u32, u32),
        now: Instant,
    ) -> Self {
        let mut driver = Self {
            simulation,
            renderer: Renderer::new(config.block_size),
            config,
            pixel_size,
            last_tick: now,
            running: true,
        };
        driver.reset(now);
        driver
    }

    fn reset(&mut self, now: Instant) {
        let (width_px, height_px) = self.pixel_size;
        let width = cells_for(width_px, self.config.block_size);
        let height = cells_for(height_px, self.config.block_size);
        self.simulation.initialize(width, height);
        self.last_tick = now;
        info!(width_px, height_px, width, height, "background sized");
    }

    /// Re-derives the grid from a new host size, discarding all state.
    /// Returns false when the size did not change.
    pub fn resize(&mut self, pixel_size: (u32, u32), now: Instant) -> bool {
        if pixel_size == self.pixel_size {
            return false;
        }
        self.pixel_size = pixel_size;
        self.reset(now);
        true
    }

    /// One scheduled callback. Steps and renders when a full frame duration
    /// has passed since the last accepted tick, then re-arms while running.
    /// Returns whether the tick was accepted.
    pub fn tick(&mut self, now: Instant, surface: &mut impl Surface, scheduler: &mut impl Scheduler) -> bool {
        if !self.running {
            return false;
        }

        let accepted = now.saturating_duration_since(self.last_tick) >= self.config.frame_duration;
        if accepted {
            let live_cells = self.simulation.step();
            self.last_tick = now;
            self.renderer.render(self.simulation.current_grid(), surface);
            trace!(generation = self.simulation.generation(), live_cells, "frame rendered");
        }

        scheduler.request_frame();
        accepted
    }

    /// Stops re-arming. The tick in progress, if any, still completes.
    pub fn stop(&mut self) {
        if self.running {
            info!(generation = self.simulation.generation(), "background stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Grid coordinate for a click at surface pixel `(px, py)`.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> (i32, i32) {
        let block = self.config.block_size.max(1) as f32;
        ((px / block).floor() as i32 - 1, (py / block).floor() as i32 - 1)
    }

    /// Drops a random shape where the user clicked; it appears on the next accepted tick.
    pub fn click(&mut self, px: f32, py: f32) -> &'static Shape {
        let (x, y) = self.pixel_to_cell(px, py);
        let shape = self.simulation.inject_random_shape_at(x, y);
        debug!(shape = shape.name, x, y, "shape placed by click");
        shape
    }

    /// Pixel size of the area the grid covers, a whole number of blocks.
    pub fn surface_size(&self) -> (u32, u32) {
        let block = self.config.block_size;
        (
            self.simulation.width() as u32 * block,
            self.simulation.height() as u32 * block,
        )
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn simulation(&self) -> &GridSimulation<R> {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut GridSimulation<R> {
        &mut self.simulation
    }
}
