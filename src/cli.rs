//! Command-line arguments.
//!
//! Flags either build a [`BatchConfig`] from scratch or override the values of
//! one loaded with `--config`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::warn;

use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::mask::{DEFAULT_CIRCLE_RADIUS, DEFAULT_EDGE_DIVISOR, MaskStrategy};

/// Masking strategy names accepted by `--mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskKind {
    /// No masking.
    None,
    /// Rounded corners, radius from --radius.
    Corner,
    /// Remove near-white pixels along the edges.
    EdgeWhite,
    /// Remove near-white pixels and clip to a circle of --radius.
    CircleWhite,
}

#[derive(Debug, Parser)]
#[command(
    name = "logo-forge",
    version,
    about = "Generate resized icon assets and an .ico container from one image"
)]
pub struct Args {
    /// Source image path.
    #[arg(long, value_name = "PATH", required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Output directory, created if absent.
    #[arg(long, value_name = "DIR", required_unless_present = "config")]
    pub output: Option<PathBuf>,

    /// Comma-separated square edge lengths [default: 16,24,32,48,64,128,256,512]
    #[arg(long, value_name = "SIZES")]
    pub sizes: Option<String>,

    /// Output format: png, jpg or jpeg [default: png]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Masking strategy [default: corner]
    #[arg(long, value_enum)]
    pub mask: Option<MaskKind>,

    /// Corner or circle radius, relative to a 256px icon.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "edge_divisor")]
    pub radius: Option<f32>,

    /// Edge band width as a fraction of the size (band = size / divisor).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub edge_divisor: Option<u32>,

    /// JSON config file; other flags override its values.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Builds the batch configuration, loading `--config` first if given.
    pub fn into_config(self) -> Result<BatchConfig> {
        let base = match &self.config {
            Some(path) => Some(BatchConfig::load(path)?),
            None => None,
        };

        let input = self
            .input
            .or_else(|| base.as_ref().map(|c| c.input.clone()))
            .ok_or(Error::MissingArgument("--input"))?;
        let output = self
            .output
            .or_else(|| base.as_ref().map(|c| c.output.clone()))
            .ok_or(Error::MissingArgument("--output"))?;

        let mut config = match base {
            Some(base) => BatchConfig {
                input,
                output,
                ..base
            },
            None => BatchConfig::new(input, output),
        };

        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config.mask = resolve_mask(config.mask, self.mask, self.radius, self.edge_divisor);

        Ok(config)
    }
}

/// Combines mask flags with a base strategy.
///
/// An explicit `--mask` builds a fresh strategy, taking its parameter from the
/// matching flag or the strategy's default; a flag the strategy has no use for
/// is ignored with a warning. Without `--mask`, `--radius` and
/// `--edge-divisor` adjust the base strategy when it has that parameter, and
/// otherwise switch to the strategy they belong to, with a warning when that
/// replaces a different base strategy.
pub fn resolve_mask(
    base: MaskStrategy,
    kind: Option<MaskKind>,
    radius: Option<f32>,
    edge_divisor: Option<u32>,
) -> MaskStrategy {
    if let Some(kind) = kind {
        let uses_radius = matches!(kind, MaskKind::Corner | MaskKind::CircleWhite);
        if radius.is_some() && !uses_radius {
            warn!("--radius has no effect with --mask {kind:?}");
        }
        if edge_divisor.is_some() && kind != MaskKind::EdgeWhite {
            warn!("--edge-divisor has no effect with --mask {kind:?}");
        }
    }

    match kind {
        Some(MaskKind::None) => MaskStrategy::None,
        Some(MaskKind::Corner) => MaskStrategy::Corner {
            radius: radius.unwrap_or(0.0),
        },
        Some(MaskKind::EdgeWhite) => MaskStrategy::EdgeWhite {
            divisor: edge_divisor.unwrap_or(DEFAULT_EDGE_DIVISOR),
        },
        Some(MaskKind::CircleWhite) => MaskStrategy::CircleWhite {
            radius: radius.unwrap_or(DEFAULT_CIRCLE_RADIUS),
        },
        None => match (base, radius, edge_divisor) {
            (MaskStrategy::CircleWhite { .. }, Some(radius), _) => {
                MaskStrategy::CircleWhite { radius }
            }
            (base, Some(radius), _) => {
                if !matches!(base, MaskStrategy::Corner { .. }) {
                    warn!("--radius replaces the configured {base:?} mask with corner rounding");
                }
                MaskStrategy::Corner { radius }
            }
            (base, None, Some(divisor)) => {
                if !matches!(base, MaskStrategy::EdgeWhite { .. }) {
                    warn!("--edge-divisor replaces the configured {base:?} mask with edge removal");
                }
                MaskStrategy::EdgeWhite { divisor }
            }
            (base, None, None) => base,
        },
    }
}
