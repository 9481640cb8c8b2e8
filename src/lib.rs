//! logo-forge: batch icon asset generation
//!
//! This crate turns one source image into a set of square icons: the source is
//! resized to every requested edge length, masked (rounded corners or white
//! background removal), written as PNG or JPEG, and the 256x256 variant is
//! packed into a Windows `.ico` container.
//!
//! # Example
//!
//! ```no_run
//! use logo_forge::{BatchConfig, MaskStrategy};
//!
//! let config = BatchConfig::new("logo.png", "icons")
//!     .with_sizes("16,32,256")
//!     .with_mask(MaskStrategy::Corner { radius: 48.0 });
//!
//! let report = logo_forge::run(&config)?;
//! for warning in &report.diagnostics {
//!     eprintln!("{warning}");
//! }
//! # Ok::<(), logo_forge::Error>(())
//! ```
//!
//! # Rendering without I/O
//!
//! [`IconForge`] performs the resize and mask steps on an in-memory raster:
//!
//! ```
//! use image::RgbaImage;
//! use logo_forge::{IconForge, MaskStrategy};
//!
//! let forge = IconForge::new(RgbaImage::new(512, 512), MaskStrategy::None);
//! let icons = forge.render_all(&[16, 256]);
//! assert!(icons.find_by_size(256).is_some());
//! ```

mod batch;
mod compose;
mod config;
mod error;
mod forge;
mod format;
mod ico_export;
mod icon;
mod mask;
mod size;

#[cfg(feature = "clap")]
pub mod cli;

pub use batch::{BatchReport, generate, run};
pub use compose::{flatten_onto, flatten_onto_white};
pub use config::{BatchConfig, DEFAULT_FORMAT};
pub use error::{Error, Result, SizeError};
pub use forge::{IconForge, RESAMPLE_FILTER, resize};
pub use format::{JPEG_QUALITY, OutputFormat, file_name, write_icon};
pub use ico_export::{ICO_FILE_NAME, ICO_SIZE, encode_ico, export_ico};
pub use icon::{IconImage, IconSet};
pub use mask::{
    CircleWhiteMask, CornerMask, DEFAULT_CIRCLE_RADIUS, DEFAULT_EDGE_DIVISOR, EdgeWhiteMask,
    MaskStrategy, PixelMask, REFERENCE_SIZE, ResolvedMask, TRANSPARENT, apply_mask,
    is_near_white, scale_radius,
};
pub use size::{DEFAULT_SIZES, parse_size, parse_size_list};
