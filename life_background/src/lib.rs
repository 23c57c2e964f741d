//! Ambient Game of Life background: a bounded, self-reseeding cellular
//! automaton stepped at a fixed cadence and painted as translucent squares.

pub mod config;
pub mod contact;
pub mod driver;
pub mod grid;
pub mod host;
pub mod render;
pub mod shapes;
pub mod simulation;
pub mod surface;

pub use config::{DriverConfig, SimulationConfig};
pub use driver::{AnimationDriver, Scheduler};
pub use grid::Grid;
pub use render::Renderer;
pub use shapes::{Shape, SHAPES};
pub use simulation::GridSimulation;
pub use surface::{Canvas, PixelRect, Surface};
