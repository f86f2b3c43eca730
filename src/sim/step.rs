//! Stateless motion step
//!
//! Every call builds a fresh space, advances it once and throws it away, so
//! nothing but the returned position and velocity carries over between steps.

use glam::DVec2;

use super::body::{Body, BodyState};
use super::scene::Scene;
use super::space::Space;
use super::wall::boundary_walls;
use crate::consts::BODY_MASS;

/// Advance the square by one `time_step` under `gravity`, bouncing off the
/// walls with the given restitution.
///
/// Inputs are not validated: positions outside the box, restitution outside
/// `[0, 1]` or negative gravity produce implausible but finite motion, and
/// non-finite inputs propagate into the result.
pub fn simulate_motion(
    scene: &Scene,
    state: BodyState,
    gravity: f64,
    restitution: f64,
    time_step: f64,
) -> BodyState {
    let body = Body::new_box(state, BODY_MASS, scene.body_size(), restitution);
    let walls = boundary_walls(scene.width, scene.height, restitution);
    let mut space = Space::new(DVec2::new(0.0, -gravity), body, walls);

    space.step(time_step);
    space.body.state()
}
