// simulation.rs - Double-buffered Game of Life with automatic reseeding

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::grid::Grid;
use crate::shapes::{Shape, SHAPES};

/// Conway's rule for one cell.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Two equally sized grids; `active` selects the current generation and the
/// other one is the scratch buffer the next generation is written into.
pub struct GridSimulation<R = StdRng> {
    buffers: [Grid; 2],
    active: usize,
    live_cells: usize,
    threshold: usize,
    generation: u64,
    config: SimulationConfig,
    rng: R,
}

impl GridSimulation<StdRng> {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GridSimulation<R> {
    /// Empty simulation; call [`initialize`](Self::initialize) to give it a size.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Self {
        Self {
            buffers: [Grid::default(), Grid::default()],
            active: 0,
            live_cells: 0,
            threshold: 0,
            generation: 0,
            config,
            rng,
        }
    }

    /// Replaces both buffers with zero-filled grids of the given size.
    pub fn initialize(&mut self, width: usize, height: usize) {
        self.buffers = [Grid::new(width, height), Grid::new(width, height)];
        self.active = 0;
        self.live_cells = 0;
        self.generation = 0;
        self.threshold = if self.buffers[0].is_empty() {
            0
        } else {
            self.config.threshold(width, height)
        };
        info!(width, height, threshold = self.threshold, "simulation initialized");
    }

    pub fn width(&self) -> usize {
        self.current_grid().width()
    }

    pub fn height(&self) -> usize {
        self.current_grid().height()
    }

    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_grid(&self) -> &Grid {
        &self.buffers[self.active]
    }

    /// The scratch buffer: shapes injected so far for the coming generation.
    pub fn next_grid(&self) -> &Grid {
        &self.buffers[self.active ^ 1]
    }

    /// Advances one generation and returns its live-cell count.
    ///
    /// Cells already set in the scratch buffer (injected shapes, reseeds) are
    /// kept and the rule result is unioned on top. After the swap the recycled
    /// buffer is cleared and the reseed policy may stamp a shape into it, which
    /// shows up one generation later.
    pub fn step(&mut self) -> usize {
        if self.current_grid().is_empty() {
            return 0;
        }

        let [first, second] = &mut self.buffers;
        let (current, next) = if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        let mut live_cells = 0;
        for y in 0..current.height() {
            for x in 0..current.width() {
                let alive = next.cell(x, y) || next_state(current.cell(x, y), current.neighbours(x, y));
                next.put(x, y, alive);
                if alive {
                    live_cells += 1;
                }
            }
        }

        self.active ^= 1;
        self.buffers[self.active ^ 1].clear();
        self.live_cells = live_cells;
        self.generation += 1;

        self.reseed();
        live_cells
    }

    fn reseed(&mut self) {
        let starving = self.live_cells < self.threshold;
        if !starving && self.rng.gen::<f64>() >= self.config.reseed_chance {
            return;
        }
        let (width, height) = (self.width(), self.height());
        let x = self.rng.gen_range(0..width) as i32;
        let y = self.rng.gen_range(0..height) as i32;
        let shape = self.inject_random_shape_at(x, y);
        debug!(
            shape = shape.name,
            x,
            y,
            starving,
            live_cells = self.live_cells,
            "reseeded"
        );
    }

    /// Unions `shape` into the scratch buffer at `(x, y)`, clipping at the edges.
    /// Returns the number of cells that landed inside the grid.
    pub fn inject_shape_at(&mut self, x: i32, y: i32, shape: &Shape) -> usize {
        let next = self.active ^ 1;
        shape.stamp(&mut self.buffers[next], x, y)
    }

    /// Picks a catalog shape uniformly and injects it at `(x, y)`.
    pub fn inject_random_shape_at(&mut self, x: i32, y: i32) -> &'static Shape {
        let shape = self.random_shape();
        self.inject_shape_at(x, y, shape);
        shape
    }

    fn random_shape(&mut self) -> &'static Shape {
        &SHAPES[self.rng.gen_range(0..SHAPES.len())]
    }
}
