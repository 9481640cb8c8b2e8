//! Pixel mask engine.
//!
//! A mask decides, pixel by pixel, whether the output pixel is cleared to
//! fully transparent or copied unchanged from the source. There is no partial
//! blending at mask boundaries: every output pixel is either `[0, 0, 0, 0]` or
//! an exact copy of its source pixel, and the output always has the same
//! dimensions as the input.
//!
//! # Strategies
//!
//! [`MaskStrategy`] selects exactly one masking strategy per run:
//!
//! ```text
//! MaskStrategy
//!     ├── None          pass-through
//!     ├── Corner        rounded corners (geometric)       -> CornerMask
//!     ├── EdgeWhite     near-white pixels in an edge band -> EdgeWhiteMask
//!     └── CircleWhite   near-white pixels or outside a
//!                       centred circle                    -> CircleWhiteMask
//! ```
//!
//! Radii are expressed relative to a 256 pixel icon and scaled to each target
//! size when the strategy is resolved with [`MaskStrategy::resolve`].

pub mod corner;
pub mod white;

pub use corner::CornerMask;
pub use white::{CircleWhiteMask, EdgeWhiteMask, is_near_white};

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::icon::IconImage;

/// Edge length that radii are expressed against.
pub const REFERENCE_SIZE: f64 = 256.0;

/// Default divisor for the edge band: the band is `size / 12` pixels wide.
pub const DEFAULT_EDGE_DIVISOR: u32 = 12;

/// Default circle radius for [`MaskStrategy::CircleWhite`].
pub const DEFAULT_CIRCLE_RADIUS: f32 = 256.0;

/// The value every cleared pixel is set to.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// ============================================================================
// PixelMask
// ============================================================================

/// A per-pixel predicate deciding which pixels become transparent.
pub trait PixelMask {
    /// Returns true if the pixel at `(x, y)` should be cleared.
    ///
    /// `pixel` is the source pixel at that position.
    fn clears(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool;
}

/// Applies a mask to a raster, producing a new raster of the same size.
pub fn apply_mask<M: PixelMask + ?Sized>(source: &RgbaImage, mask: &M) -> RgbaImage {
    let mut out = source.clone();
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if mask.clears(x, y, *pixel) {
            *pixel = TRANSPARENT;
        }
    }
    out
}

// ============================================================================
// MaskStrategy
// ============================================================================

/// The masking strategy selected for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MaskStrategy {
    /// No masking.
    None,

    /// Round the four corners with a radius relative to a 256px icon.
    Corner { radius: f32 },

    /// Clear near-white pixels within `size / divisor` pixels of any side.
    EdgeWhite { divisor: u32 },

    /// Clear every near-white pixel and everything outside a centred circle
    /// whose radius is relative to a 256px icon. A radius `<= 0` disables the
    /// circle and falls back to edge-band removal.
    CircleWhite { radius: f32 },
}

impl Default for MaskStrategy {
    fn default() -> Self {
        Self::Corner { radius: 0.0 }
    }
}

impl MaskStrategy {
    /// Resolves the strategy into a concrete mask for an icon of edge length
    /// `size`.
    ///
    /// Returns `None` when the strategy is a pass-through at this size.
    pub fn resolve(&self, size: u32) -> Option<ResolvedMask> {
        match *self {
            Self::None => None,
            Self::Corner { radius } => {
                let radius = scale_radius(radius, size);
                (radius > 0.0).then(|| ResolvedMask::Corner(CornerMask::new(size, radius)))
            }
            Self::EdgeWhite { divisor } => Some(ResolvedMask::EdgeWhite(
                EdgeWhiteMask::with_divisor(size, divisor),
            )),
            Self::CircleWhite { radius } => {
                let radius = scale_radius(radius, size);
                if radius > 0.0 {
                    Some(ResolvedMask::CircleWhite(CircleWhiteMask::new(size, radius)))
                } else {
                    Some(ResolvedMask::EdgeWhite(EdgeWhiteMask::with_divisor(
                        size,
                        DEFAULT_EDGE_DIVISOR,
                    )))
                }
            }
        }
    }

    /// Applies the strategy to an icon, returning a new icon.
    pub fn apply(&self, icon: &IconImage) -> IconImage {
        match self.resolve(icon.size) {
            Some(mask) => {
                log::debug!("applying {:?} at {}px", mask, icon.size);
                IconImage::new(apply_mask(&icon.data, &mask))
            }
            None => icon.clone(),
        }
    }
}

/// Scales a radius given for a 256px icon to an icon of edge length `size`.
///
/// Non-positive and NaN radii resolve to `0.0`.
pub fn scale_radius(radius: f32, size: u32) -> f64 {
    let radius = f64::from(radius);
    if radius > 0.0 {
        radius * f64::from(size) / REFERENCE_SIZE
    } else {
        0.0
    }
}

// ============================================================================
// ResolvedMask
// ============================================================================

/// A [`MaskStrategy`] bound to a concrete icon size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedMask {
    Corner(CornerMask),
    EdgeWhite(EdgeWhiteMask),
    CircleWhite(CircleWhiteMask),
}

impl PixelMask for ResolvedMask {
    fn clears(&self, x: u32, y: u32, pixel: Rgba<u8>) -> bool {
        match self {
            Self::Corner(mask) => mask.clears(x, y, pixel),
            Self::EdgeWhite(mask) => mask.clears(x, y, pixel),
            Self::CircleWhite(mask) => mask.clears(x, y, pixel),
        }
    }
}
