//! Raster types for generated icons.
//!
//! An [`IconImage`] is one finished square raster. An [`IconSet`] is the
//! ordered collection a batch produces, one entry per requested size.

use image::RgbaImage;

/// A single generated icon raster.
///
/// The `size` is the edge length that was requested for this raster. It always
/// matches the pixel dimensions of `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,

    /// The requested edge length.
    pub size: u32,
}

impl IconImage {
    /// Wraps a square raster.
    pub fn new(data: RgbaImage) -> Self {
        let size = data.width();
        Self { data, size }
    }
}

/// The rasters produced by one batch run, in size-list order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Creates an icon set from a vector of images.
    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Adds an image to the end of the set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the first image whose edge length is exactly `size`.
    pub fn find_by_size(&self, size: u32) -> Option<&IconImage> {
        self.images.iter().find(|img| img.size == size)
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}
