//! White background removal.
//!
//! Product icons often ship on a white canvas. These masks strip that canvas
//! without needing an alpha channel in the source, at the cost of also
//! clearing genuinely white subject pixels.

use image::Rgba;

use super::PixelMask;

/// Channels strictly above this value count as white.
pub const WHITE_THRESHOLD: u8 = 240;

/// Returns true if every colour channel is above [`WHITE_THRESHOLD`].
///
/// Channels are compared alpha-premultiplied: each is widened to 16 bits,
/// scaled by the 16-bit alpha and reduced back to 8 bits. Semi-transparent
/// white therefore does not count as white.
pub fn is_near_white(pixel: Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    let alpha = u32::from(a) * 0x101;
    let premultiplied = |c: u8| (u32::from(c) * 0x101 * alpha / 0xffff) >> 8;
    [r, g, b]
        .into_iter()
        .all(|c| premultiplied(c) > u32::from(WHITE_THRESHOLD))
}

// ============================================================================
// EdgeWhiteMask
// ============================================================================

/// Clears near-white, non-transparent pixels inside a band along the edges.
///
/// Pixels outside the band are always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeWhiteMask {
    size: u32,
    band: u32,
}

impl EdgeWhiteMask {
    /// Creates a mask whose band is `band` pixels wide.
    pub fn new(size: u32, band: u32) -> Self {
        Self { size, band }
    }

    /// Creates a mask whose band is `size / divisor` pixels wide.
    ///
    /// A divisor of zero is treated as one.
    pub fn with_divisor(size: u32, divisor: u32) -> Self {
        Self::new(size, size / divisor.max(1))
    }

    pub fn band(&self) -> u32 {
        self.band
    }

    fn in_band(&self, x: u32, y: u32) -> bool {
        let far = self.size.saturating_sub(self.band);
        x < self.band || y < self.band || x >= far || y >= far
    }
}

impl PixelMask for EdgeWhiteMask {
    fn clears(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool {
        self.band > 0 && self.in_band(x, y) && pixel[3] > 0 && is_near_white(pixel)
    }
}

// ============================================================================
// CircleWhiteMask
// ============================================================================

/// Clears every near-white pixel and every pixel outside a centred circle.
///
/// Distances are measured from pixel centres to the image centre, so the
/// circle is symmetric for both odd and even sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleWhiteMask {
    size: u32,
    radius: f64,
}

impl CircleWhiteMask {
    pub fn new(size: u32, radius: f64) -> Self {
        Self { size, radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn outside_circle(&self, x: u32, y: u32) -> bool {
        let half = f64::from(self.size) / 2.0;
        let dx = f64::from(x) - half + 0.5;
        let dy = f64::from(y) - half + 0.5;
        dx * dx + dy * dy > self.radius * self.radius
    }
}

impl PixelMask for CircleWhiteMask {
    fn clears(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool {
        is_near_white(pixel) || self.outside_circle(x, y)
    }
}
