//! Motion stepper
//!
//! Pure and deterministic:
//! - Fixed timestep supplied by the caller
//! - A fresh space per step, no state outside `BodyState`
//! - Stable wall order (left, top, right, bottom)
//! - No rendering dependencies

pub mod body;
pub mod collision;
pub mod scene;
pub mod space;
pub mod step;
pub mod wall;

pub use body::{Body, BodyState, moment_for_box};
pub use collision::{CollisionResult, ContactPoint, box_wall_collision};
pub use scene::Scene;
pub use space::{Arbiter, Space};
pub use step::simulate_motion;
pub use wall::{WallSegment, boundary_walls};
