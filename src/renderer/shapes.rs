//! Square rasterization
//!
//! Physics positions have y pointing up from the bottom-left corner; images
//! have y pointing down from the top-left. The square is drawn from its
//! top-left corner, so the flip also shifts by the side length.

use glam::DVec2;

use super::frame::Frame;
use crate::sim::Scene;

/// Convert a physics position into the image-space draw origin of the square
#[inline]
pub fn to_image_coords(scene: &Scene, position: DVec2) -> DVec2 {
    DVec2::new(position.x, scene.height - position.y - scene.side_length)
}

/// Draw the square with its top-left corner at `origin` (image coordinates).
///
/// Corner coordinates are truncated toward zero to pixel indices and the
/// inclusive rectangle is filled, clipped to the frame.
pub fn draw_frame(scene: &Scene, origin: DVec2) -> Frame {
    let (width, height) = scene.frame_size();
    let mut frame = Frame::new(width, height);

    let far = origin + DVec2::splat(scene.side_length);
    frame.fill_rect(
        origin.x as i64,
        origin.y as i64,
        far.x as i64,
        far.y as i64,
    );
    frame
}
