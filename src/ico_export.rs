//! Windows `.ico` container export.
//!
//! The container holds a single embedded image: the 256x256 raster of the
//! batch.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, ResourceType};
use image::RgbaImage;

use crate::error::{Error, Result};
use crate::icon::IconSet;

/// Edge length of the raster embedded in the container.
pub const ICO_SIZE: u32 = 256;

/// File name of the container inside the output directory.
pub const ICO_FILE_NAME: &str = "icon.ico";

/// Encodes `image` as a single-entry icon container into `writer`.
pub fn encode_ico<W: Write>(writer: W, image: &RgbaImage) -> io::Result<()> {
    let icon =
        ico::IconImage::from_rgba_data(image.width(), image.height(), image.as_raw().clone());
    let mut dir = IconDir::new(ResourceType::Icon);
    dir.add_entry(IconDirEntry::encode(&icon)?);
    dir.write(writer)
}

/// Writes `<output_dir>/icon.ico` from the first 256x256 image in `icons`.
///
/// The lookup happens before anything is created, so a set without a
/// 256x256 image leaves no file behind.
pub fn export_ico(icons: &IconSet, output_dir: &Path) -> Result<PathBuf> {
    let source = icons
        .find_by_size(ICO_SIZE)
        .ok_or(Error::MissingIconSize(ICO_SIZE))?;

    let path = output_dir.join(ICO_FILE_NAME);
    let file = File::create(&path).map_err(|source| Error::IcoCreate {
        path: path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    encode_ico(&mut writer, &source.data)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::IcoEncode {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
