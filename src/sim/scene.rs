//! Box dimensions and the drawn square size

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, ensure_finite};

/// The bounded rectangle the square lives in.
///
/// Physics coordinates have their origin at the bottom-left corner with y
/// pointing up. The same dimensions, in pixels, size every rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Side of the rendered square (0 is a single point)
    pub side_length: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            side_length: SHAPE_SIDE_LENGTH,
        }
    }
}

impl Scene {
    /// Default box with a different square size
    pub fn with_side_length(side_length: f64) -> Self {
        Self {
            side_length,
            ..Self::default()
        }
    }

    /// Size of the collision box, one unit larger than the drawn square
    #[inline]
    pub fn body_size(&self) -> DVec2 {
        DVec2::splat(self.side_length + COLLISION_PADDING)
    }

    /// Frame dimensions in pixels
    pub fn frame_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        ensure_finite("scene width", self.width)?;
        ensure_finite("scene height", self.height)?;
        ensure_finite("side length", self.side_length)?;

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value < 1.0 {
                return Err(SimError::InvalidScene {
                    name,
                    requirement: "at least 1",
                    value,
                });
            }
            // Frames are sized in whole pixels
            if value.fract() != 0.0 {
                return Err(SimError::InvalidScene {
                    name,
                    requirement: "a whole number",
                    value,
                });
            }
        }

        let (width, height) = self.frame_size();
        match width.checked_mul(height) {
            Some(pixels) if pixels <= MAX_FRAME_PIXELS => {}
            _ => {
                return Err(SimError::InvalidScene {
                    name: "area",
                    requirement: "at most MAX_FRAME_PIXELS",
                    value: self.width * self.height,
                });
            }
        }

        if self.side_length < 0.0 {
            return Err(SimError::InvalidScene {
                name: "side length",
                requirement: "non-negative",
                value: self.side_length,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let scene = Scene::default();
        assert_eq!(scene.frame_size(), (16, 16));
        assert_eq!(scene.body_size(), DVec2::ONE);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        let scene = Scene {
            width: 0.0,
            ..Scene::default()
        };
        assert!(matches!(
            scene.validate(),
            Err(SimError::InvalidScene { name: "width", .. })
        ));

        assert!(Scene::with_side_length(-1.0).validate().is_err());
        assert!(matches!(
            Scene::with_side_length(f64::NAN).validate(),
            Err(SimError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_fractional_dimensions() {
        let scene = Scene {
            width: 0.5,
            ..Scene::default()
        };
        assert!(matches!(
            scene.validate(),
            Err(SimError::InvalidScene { name: "width", requirement: "at least 1", .. })
        ));

        let scene = Scene {
            height: 16.5,
            ..Scene::default()
        };
        assert!(matches!(
            scene.validate(),
            Err(SimError::InvalidScene { name: "height", requirement: "a whole number", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_frames() {
        let scene = Scene {
            width: 1e12,
            height: 1e12,
            ..Scene::default()
        };
        assert!(matches!(
            scene.validate(),
            Err(SimError::InvalidScene { name: "area", .. })
        ));

        // Each side is fine on its own, the product is not
        let scene = Scene {
            width: 8192.0,
            height: 4096.0,
            ..Scene::default()
        };
        assert!(scene.validate().is_err());

        let scene = Scene {
            width: 4096.0,
            height: 4096.0,
            ..Scene::default()
        };
        assert!(scene.validate().is_ok());
    }
}
