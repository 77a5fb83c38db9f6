pub mod math;
pub mod render;
pub mod field;
pub mod body;
pub mod input;
pub mod scene;

// Application shell and its 2-D overlays
pub mod shell;
pub mod overlay;

pub mod content;
pub mod net;
pub mod assets;

pub use scene::{Universe, UniverseConfig};
