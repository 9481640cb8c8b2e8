//! Resize-then-mask rendering of a single source image.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::icon::{IconImage, IconSet};
use crate::mask::MaskStrategy;

/// Resampling kernel used for every resize, up or down.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Resizes a raster to `size x size`.
pub fn resize(source: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(source, size, size, RESAMPLE_FILTER)
}

/// Renders square icons from one source image.
///
/// `IconForge` holds the decoded source (never modified) and the mask strategy
/// of the run. Each render resizes the source to the requested edge length and
/// then applies the mask.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use logo_forge::{IconForge, MaskStrategy};
///
/// let source = RgbaImage::from_pixel(64, 64, Rgba([0, 128, 255, 255]));
/// let forge = IconForge::new(source, MaskStrategy::Corner { radius: 64.0 });
///
/// let icon = forge.render(32);
/// assert_eq!(icon.data.dimensions(), (32, 32));
/// assert_eq!(icon.data.get_pixel(0, 0).0, [0, 0, 0, 0]);
/// ```
pub struct IconForge {
    source: RgbaImage,
    mask: MaskStrategy,
}

impl IconForge {
    pub fn new(source: RgbaImage, mask: MaskStrategy) -> Self {
        Self { source, mask }
    }

    /// Renders one icon of edge length `size`.
    pub fn render(&self, size: u32) -> IconImage {
        let resized = IconImage::new(resize(&self.source, size));
        self.mask.apply(&resized)
    }

    /// Renders every size in order.
    pub fn render_all(&self, sizes: &[u32]) -> IconSet {
        IconSet::from_images(sizes.iter().map(|&size| self.render(size)).collect())
    }
}
