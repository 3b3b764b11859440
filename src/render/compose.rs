//! Scene composition: world + camera + gesture state -> draw list.
//!
//! Runs every frame. Paint order is grid, then agents, then tactics, then
//! debug marks, matching the layering users expect: markers always sit on
//! top of the grid, and debug output on top of everything.
//!
//! Live gestures are previewed here without touching committed state: a pan
//! in progress renders through a shifted copy of the camera, and a dragged
//! tactic renders at its offset position while `world` still holds the
//! position from before the drag.

use crate::camera::Camera;
use crate::color::Color;
use crate::constants::{AIR_AGENT_SIDES, DEBUG_MARK_SIZE, GROUND_AGENT_SIDES};
use crate::geometry::{Vec2, Viewport};
use crate::input::Gesture;
use crate::profile_scope;
use crate::render::grid;
use crate::render::primitives::Scene;
use crate::settings::Settings;
use crate::types::{AgentId, TacticId};
use crate::world::World;
use std::collections::HashSet;

/// Build the draw list for one frame.
pub fn compose_scene(
    world: &World,
    camera: &Camera,
    gesture: &Gesture,
    viewport: Viewport,
    settings: &Settings,
    debug_marks: &[Vec2],
) -> Scene {
    profile_scope!("compose_scene");

    // Pan preview: render through the camera the commit would produce.
    let cam = match gesture.pan_screen_delta() {
        Some(delta) => camera.with_screen_pan(delta),
        None => *camera,
    };
    let zoom = cam.zoom();

    let mut scene = Scene::new();

    for line in grid::visible_lines(cam, viewport, settings.grid.cell_size) {
        scene.line(line.from, line.to, settings.grid.color);
    }

    // Cull to the visible world rect, inflated so icons straddling the
    // edge (and the culling margin around it) still draw.
    let max_radius = settings.icons.agent_radius.max(settings.icons.tactic_radius);
    let inflate = Vec2::splat(settings.culling_margin / zoom + max_radius);
    let cull_min = cam.screen_to_world(Vec2::ZERO, viewport) - inflate;
    let cull_max =
        cam.screen_to_world(Vec2::new(viewport.width, viewport.height), viewport) + inflate;

    let visible_agents: HashSet<AgentId> =
        world.agents_within(cull_min, cull_max).into_iter().collect();
    let agent_radius = settings.icons.agent_radius * zoom;
    for (id, agent) in world.agents() {
        if !visible_agents.contains(&id) {
            continue;
        }
        let center = cam.world_to_screen(agent.pos, viewport);
        let sides = if agent.air {
            AIR_AGENT_SIDES
        } else {
            GROUND_AGENT_SIDES
        };
        scene.ngon(center, agent_radius, sides, agent.color);
        let label_anchor = center + Vec2::new(0.0, settings.icons.label_gap * agent_radius);
        scene.text(label_anchor, agent.name.clone(), agent.color);
    }

    let drag = gesture.drag_preview();
    let visible_tactics: HashSet<TacticId> =
        world.tactics_within(cull_min, cull_max).into_iter().collect();
    let tactic_radius = settings.icons.tactic_radius * zoom;
    for (id, tactic) in world.tactics() {
        let dragged_delta = match drag {
            Some((drag_id, delta)) if drag_id == id => Some(delta),
            _ => None,
        };
        // The index still holds the pre-drag position; never cull the
        // tactic under the cursor.
        if dragged_delta.is_none() && !visible_tactics.contains(&id) {
            continue;
        }
        let pos = match dragged_delta {
            Some(delta) => tactic.pos + cam.screen_delta_to_world(delta),
            None => tactic.pos,
        };
        let center = cam.world_to_screen(pos, viewport);
        scene.circle(center, tactic_radius, tactic.color);
        scene.text(center, tactic.name.clone(), tactic.color);
    }

    for &mark in debug_marks {
        let center = cam.world_to_screen(mark, viewport);
        scene.cross(center, DEBUG_MARK_SIZE, Color::WHITE);
    }

    scene
}
