//! Frame rendering module
//!
//! Rasterizes the square into fixed-size 1-bit frames.

pub mod frame;
pub mod shapes;

pub use frame::Frame;
pub use shapes::{draw_frame, to_image_coords};
