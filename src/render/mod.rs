//! Draw-list rendering pipeline.
//!
//! - `primitives` - Scene and draw command vocabulary
//! - `grid` - Visible grid line generation
//! - `compose` - Per-frame scene composition with culling and previews

mod compose;
pub mod grid;
mod primitives;

pub use compose::compose_scene;
pub use grid::{GridLine, visible_lines};
pub use primitives::{DrawCommand, Scene};
