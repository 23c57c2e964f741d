// host/mod.rs - Hosts that call the driver once per display refresh

mod app;
mod headless;

pub use app::BackgroundApp;
pub use headless::{run_headless, HeadlessReport};
