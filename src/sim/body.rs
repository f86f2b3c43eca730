//! The simulated square and its threaded state

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Position and velocity carried from one step to the next.
///
/// This is the only state that survives a step; everything else is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyState {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl BodyState {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }
}

/// Moment of inertia of a solid box about its center
#[inline]
pub fn moment_for_box(mass: f64, size: DVec2) -> f64 {
    mass * size.length_squared() / 12.0
}

/// A free rigid body with an axis-aligned box collision shape
#[derive(Debug, Clone)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Starts at zero every step and is never read back
    pub angular_velocity: f64,
    pub inv_mass: f64,
    pub inv_inertia: f64,
    /// Half extents of the collision box
    pub half_size: DVec2,
    /// Elasticity of the collision shape
    pub elasticity: f64,
}

impl Body {
    /// Create a box body of the given full size
    pub fn new_box(state: BodyState, mass: f64, size: DVec2, elasticity: f64) -> Self {
        let inertia = moment_for_box(mass, size);
        Self {
            position: state.position,
            velocity: state.velocity,
            angular_velocity: 0.0,
            inv_mass: if mass > 0.0 { 1.0 / mass } else { 0.0 },
            inv_inertia: if inertia > 0.0 { 1.0 / inertia } else { 0.0 },
            half_size: size * 0.5,
            elasticity,
        }
    }

    /// Lower-left corner of the collision box
    #[inline]
    pub fn min(&self) -> DVec2 {
        self.position - self.half_size
    }

    /// Upper-right corner of the collision box
    #[inline]
    pub fn max(&self) -> DVec2 {
        self.position + self.half_size
    }

    /// Velocity of a point at offset `r` from the center
    #[inline]
    pub fn velocity_at(&self, r: DVec2) -> DVec2 {
        self.velocity + self.angular_velocity * r.perp()
    }

    /// Apply an impulse at offset `r` from the center
    #[inline]
    pub fn apply_impulse(&mut self, impulse: DVec2, r: DVec2) {
        self.velocity += impulse * self.inv_mass;
        self.angular_velocity += self.inv_inertia * r.perp_dot(impulse);
    }

    pub fn state(&self) -> BodyState {
        BodyState::new(self.position, self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_for_unit_box() {
        let moment = moment_for_box(1.0, DVec2::splat(1.0));
        assert!((moment - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_box_extents() {
        let body = Body::new_box(
            BodyState::new(DVec2::new(8.0, 4.0), DVec2::ZERO),
            1.0,
            DVec2::splat(3.0),
            1.0,
        );
        assert_eq!(body.min(), DVec2::new(6.5, 2.5));
        assert_eq!(body.max(), DVec2::new(9.5, 5.5));
        assert!((body.inv_inertia - 12.0 / 18.0).abs() < 1e-12);
    }

    #[test]
    fn test_off_center_impulse_spins() {
        let mut body = Body::new_box(BodyState::default(), 1.0, DVec2::ONE, 1.0);
        body.apply_impulse(DVec2::new(0.0, 1.0), DVec2::new(0.5, 0.0));
        assert!((body.velocity.y - 1.0).abs() < 1e-12);
        // Pushing up on the right edge turns counter-clockwise
        assert!(body.angular_velocity > 0.0);

        let mut body = Body::new_box(BodyState::default(), 1.0, DVec2::ONE, 1.0);
        body.apply_impulse(DVec2::new(0.0, 1.0), DVec2::ZERO);
        assert_eq!(body.angular_velocity, 0.0);
    }
}
