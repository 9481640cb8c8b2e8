//! Rounded-corner clipping.

use image::Rgba;

use super::PixelMask;

/// Clips the four corners of a square icon to quarter circles.
///
/// Each corner has a `radius`-sized bounding box (the radius truncated to
/// whole pixels). Inside a box, a pixel is cleared when its squared distance
/// to that corner's circle centre is strictly greater than `radius²`. Pixels
/// outside every box are kept.
///
/// Circle centres sit at `radius` from the near edges and at
/// `size - 1 - radius` from the far edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerMask {
    size: u32,
    radius: f64,
}

impl CornerMask {
    pub fn new(size: u32, radius: f64) -> Self {
        Self { size, radius }
    }

    /// Width of each corner bounding box in whole pixels.
    fn box_extent(&self) -> u32 {
        self.radius as u32
    }

    fn outside_circle(&self, x: u32, y: u32, cx: f64, cy: f64) -> bool {
        let dx = f64::from(x) - cx;
        let dy = f64::from(y) - cy;
        dx * dx + dy * dy > self.radius * self.radius
    }
}

impl PixelMask for CornerMask {
    fn clears(&self, x: u32, y: u32, _pixel: Rgba<u8>) -> bool {
        let extent = self.box_extent();
        let near = self.radius;
        let far = f64::from(self.size) - 1.0 - self.radius;

        let left = x < extent;
        let right = x >= self.size.saturating_sub(extent);
        let top = y < extent;
        let bottom = y >= self.size.saturating_sub(extent);

        // Boxes overlap once the radius passes half the size; the later corner
        // decides in that case.
        let corners = [
            (left && top, near, near),
            (right && top, far, near),
            (left && bottom, near, far),
            (right && bottom, far, far),
        ];

        let mut cleared = false;
        for (in_box, cx, cy) in corners {
            if in_box {
                cleared = self.outside_circle(x, y, cx, cy);
            }
        }
        cleared
    }
}
