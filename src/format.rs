//! Output format dispatch for per-size rasters.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat};

use crate::compose::flatten_onto_white;
use crate::error::{Error, Result};
use crate::icon::IconImage;

/// JPEG quality used for every JPEG output.
pub const JPEG_QUALITY: u8 = 90;

/// Raster formats the batch can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG with the alpha channel preserved.
    Png,
    /// JPEG, flattened onto white.
    Jpeg,
}

impl OutputFormat {
    /// Looks up a format by its name (`png`, `jpg` or `jpeg`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Returns the output file name for one size, e.g. `logo_64x64.png`.
///
/// `extension` is the format name exactly as requested.
pub fn file_name(size: u32, extension: &str) -> String {
    format!("logo_{size}x{size}.{extension}")
}

/// Encodes an icon to `path` in the given format.
pub fn write_icon(icon: &IconImage, format: OutputFormat, path: &Path) -> Result<()> {
    let save_error = |source| Error::Save {
        path: path.to_path_buf(),
        source,
    };

    match format {
        OutputFormat::Png => icon
            .data
            .save_with_format(path, ImageFormat::Png)
            .map_err(save_error),
        OutputFormat::Jpeg => {
            let flattened = DynamicImage::ImageRgba8(flatten_onto_white(&icon.data)).to_rgb8();
            let file = File::create(path).map_err(|e| save_error(ImageError::IoError(e)))?;
            let mut writer = BufWriter::new(file);
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
                .encode_image(&flattened)
                .map_err(save_error)?;
            writer
                .flush()
                .map_err(|e| save_error(ImageError::IoError(e)))
        }
    }
}
