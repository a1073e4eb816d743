pub mod commands;
pub mod traits;

pub use commands::{CommandSurface, DrawCommand};
pub use traits::DrawSurface;
