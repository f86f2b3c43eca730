//! 1-bit frame buffer

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A black-and-white raster image, row-major with the origin at the top-left.
///
/// `true` pixels are black.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FrameRepr")]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

/// Serialized form, checked against its dimensions before becoming a `Frame`
#[derive(Deserialize)]
struct FrameRepr {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl TryFrom<FrameRepr> for Frame {
    type Error = SimError;

    fn try_from(repr: FrameRepr) -> Result<Self, Self::Error> {
        let FrameRepr {
            width,
            height,
            pixels,
        } = repr;
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(SimError::FrameSize {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl Frame {
    /// An all-white frame
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at column `x`, row `y` is black. Out of bounds reads as white.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    /// Number of black pixels
    pub fn black_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)` black, clipped to the frame
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        let max_x = self.width as i64 - 1;
        let max_y = self.height as i64 - 1;
        if x1 < 0 || y1 < 0 || x0 > max_x || y0 > max_y {
            return;
        }

        let (x0, x1) = (x0.max(0) as usize, x1.min(max_x) as usize);
        let (y0, y1) = (y0.max(0) as usize, y1.min(max_y) as usize);
        for y in y0..=y1 {
            let row = y * self.width;
            self.pixels[row + x0..=row + x1].fill(true);
        }
    }

    /// Smallest rectangle `(x0, y0, x1, y1)` (inclusive) covering every black pixel
    pub fn bounding_box(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.pixels[y * self.width + x] {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    /// Text rows, `#` for black and `.` for white
    pub fn rows(&self) -> Vec<String> {
        self.pixels
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|&p| if p { '#' } else { '.' }).collect())
            .collect()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
