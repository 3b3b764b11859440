//! Nearest-icon hit testing for tactic selection.
//!
//! ## Performance Notes
//!
//! Hit testing runs on every press that could start a drag. The spatial
//! index prunes candidates to the icons near the cursor in O(log n); the
//! exact nearest-within-radius decision then scans the survivors in world
//! insertion order so ties resolve deterministically to the first-added
//! icon. The broad phase only ever removes icons that cannot hit, so the
//! result is identical to an exhaustive scan.

use crate::camera::Camera;
use crate::constants::BROAD_PHASE_SLACK;
use crate::geometry::{Vec2, Viewport};
use crate::profile_scope;
use crate::types::TacticId;
use crate::world::World;
use std::collections::HashSet;

/// Find the tactic whose icon center is nearest to `cursor` in screen
/// space, among those within the icon's screen radius. Returns `None` when
/// no icon is close enough.
///
/// `icon_radius` is in world units; the effective pick radius on screen is
/// `icon_radius * zoom`.
pub fn nearest_tactic(
    world: &World,
    camera: &Camera,
    viewport: Viewport,
    cursor: Vec2,
    icon_radius: f32,
) -> Option<TacticId> {
    profile_scope!("hit_test_tactics");

    // Screen distance d_s and world distance d_w satisfy d_s = d_w * zoom,
    // so a screen-radius check maps to a world-radius query around the
    // cursor's world position.
    let cursor_world = camera.screen_to_world(cursor, viewport);
    let candidates: HashSet<TacticId> = world
        .tactics_around(cursor_world, icon_radius + BROAD_PHASE_SLACK)
        .into_iter()
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let limit = icon_radius * camera.zoom();
    let limit_sq = limit * limit;

    let mut best: Option<(TacticId, f32)> = None;
    for (id, tactic) in world.tactics() {
        if !candidates.contains(&id) {
            continue;
        }
        let icon_screen = camera.world_to_screen(tactic.pos, viewport);
        let dist_sq = icon_screen.distance_squared(cursor);
        if dist_sq > limit_sq {
            continue;
        }
        // Strict comparison keeps the first-added icon on exact ties.
        match best {
            Some((_, best_sq)) if dist_sq >= best_sq => {}
            _ => best = Some((id, dist_sq)),
        }
    }

    best.map(|(id, _)| id)
}
