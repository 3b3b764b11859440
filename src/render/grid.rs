//! Background grid line generation.
//!
//! Grid lines sit on world positions that are whole multiples of the cell
//! size, so they pan and scale with the camera. Lines are produced lazily:
//! the iterator covers exactly the world span visible in the viewport and
//! drops any line whose screen coordinate falls outside it, so an absurd
//! camera cannot make it yield unbounded output. Each call recomputes from
//! the current camera, making the sequence restartable by construction.

use crate::camera::Camera;
use crate::geometry::{Vec2, Viewport};

/// A single grid line in screen coordinates, spanning the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
}

/// Iterate the visible grid lines for the given camera, verticals first.
pub fn visible_lines(
    camera: Camera,
    viewport: Viewport,
    cell_size: f32,
) -> impl Iterator<Item = GridLine> {
    let (x_range, y_range) = if cell_size > 0.0 && cell_size.is_finite() {
        let min_world = camera.screen_to_world(Vec2::ZERO, viewport);
        let max_world =
            camera.screen_to_world(Vec2::new(viewport.width, viewport.height), viewport);
        (
            index_range(min_world.x, max_world.x, cell_size),
            index_range(min_world.y, max_world.y, cell_size),
        )
    } else {
        // Degenerate cell size: no grid.
        (1..=0, 1..=0)
    };

    let verticals = x_range.filter_map(move |i| {
        let x = camera
            .world_to_screen(Vec2::new(i as f32 * cell_size, 0.0), viewport)
            .x;
        if x >= 0.0 && x <= viewport.width {
            Some(GridLine {
                from: Vec2::new(x, 0.0),
                to: Vec2::new(x, viewport.height),
            })
        } else {
            None
        }
    });

    let horizontals = y_range.filter_map(move |i| {
        let y = camera
            .world_to_screen(Vec2::new(0.0, i as f32 * cell_size), viewport)
            .y;
        if y >= 0.0 && y <= viewport.height {
            Some(GridLine {
                from: Vec2::new(0.0, y),
                to: Vec2::new(viewport.width, y),
            })
        } else {
            None
        }
    });

    verticals.chain(horizontals)
}

/// Cell indices whose lines could fall inside the world span `[min, max]`.
/// The span length is bounded by viewport / (cell * zoom), so the range
/// stays small no matter how far the camera has panned.
fn index_range(min: f32, max: f32, cell_size: f32) -> std::ops::RangeInclusive<i64> {
    let start = (min / cell_size).floor() as i64;
    let end = (max / cell_size).ceil() as i64;
    start..=end
}
