//! Bounce Frames - synthetic bouncing-square video sequences
//!
//! Core modules:
//! - `sim`: Stateless motion stepper (gravity, wall contacts, restitution)
//! - `renderer`: 1-bit frame buffer and square rasterization
//! - `sequence`: Frame-by-frame sequence generation
//! - `sampler`: Seeded random scenario sampling and batch generation
//! - `settings`: Serializable sampler configuration

pub mod error;
pub mod renderer;
pub mod sampler;
pub mod sequence;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use renderer::{Frame, draw_frame, to_image_coords};
pub use sampler::{generate_dataset, generate_random_sequence, sample_params};
pub use sequence::{Sequence, SequenceParams, generate_sequence, generate_sequence_in};
pub use settings::{SamplerSettings, UniformRange};
pub use sim::{BodyState, Scene, simulate_motion};

use glam::DVec2;

/// Scene and simulation constants
pub mod consts {
    /// Box width in length units (also the frame width in pixels)
    pub const IMAGE_WIDTH: f64 = 16.0;
    /// Box height in length units (also the frame height in pixels)
    pub const IMAGE_HEIGHT: f64 = 16.0;
    /// Side of the rendered square (0 draws a single pixel)
    pub const SHAPE_SIDE_LENGTH: f64 = 0.0;
    /// Largest frame a scene may ask for, in pixels
    pub const MAX_FRAME_PIXELS: usize = 1 << 24;

    /// Fixed simulation sub-step (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Sub-steps per rendered frame unless the caller says otherwise
    pub const DEFAULT_FRAME_RATE: u32 = 30;
    /// Frames per sequence unless the caller says otherwise
    pub const DEFAULT_SEQUENCE_LENGTH: usize = 10;

    /// Body mass
    pub const BODY_MASS: f64 = 1.0;
    /// The collision box is one unit larger than the drawn square
    pub const COLLISION_PADDING: f64 = 1.0;
    /// Capsule radius of each boundary wall segment
    pub const WALL_RADIUS: f64 = 1.0;
    /// Sequential impulse iterations per step
    pub const SOLVER_ITERATIONS: usize = 10;
}

/// Convert a polar launch (speed, direction) into a velocity.
///
/// The direction is measured in screen convention, so the vertical component
/// is negated relative to a plain polar conversion.
#[inline]
pub fn launch_velocity(speed: f64, direction: f64) -> DVec2 {
    DVec2::new(speed * direction.cos(), -speed * direction.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_launch_velocity_axes() {
        let v = launch_velocity(2.0, 0.0);
        assert!((v.x - 2.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        // A quarter turn points "up" on screen, which is -y in physics
        let v = launch_velocity(3.0, FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y + 3.0).abs() < 1e-12);

        let v = launch_velocity(1.0, PI);
        assert!((v.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_launch_velocity_zero_speed() {
        assert_eq!(launch_velocity(0.0, 1.234).length(), 0.0);
    }
}
