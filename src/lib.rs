pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod labeling;
pub mod palette;
pub mod png;
pub mod recolor;

pub use color::{Color, LAND_COLOR, SEA_COLOR};
pub use config::{GenerationStrategy, IslandParams, PaletteSettings};
pub use error::IslandError;
pub use generator::{generate, generate_seeded};
pub use grid::{CellState, Grid, Position};
pub use labeling::{label_islands, label_islands_with, region_cells};
pub use palette::ColorAllocator;
pub use recolor::{recolor_region, recolor_region_hex};
