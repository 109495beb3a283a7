pub mod grid;
pub mod menu;
pub mod renderer;

pub use grid::{CellKind, classify_grid};
pub use menu::{Menu, MenuItem};
pub use renderer::Renderer;
