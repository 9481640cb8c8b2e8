//! Batch orchestration: decode, render every size, write, export.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::forge::IconForge;
use crate::format::{self, OutputFormat};
use crate::ico_export::export_ico;
use crate::icon::IconSet;
use crate::size::parse_size_list;

/// Outcome of a batch run that got past setup.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-size files written successfully, in size-list order.
    pub written: Vec<PathBuf>,

    /// The icon container, if one was written.
    pub icon: Option<PathBuf>,

    /// Recoverable problems encountered along the way.
    pub diagnostics: Vec<Error>,

    /// Every rendered raster, in size-list order.
    pub icons: IconSet,
}

impl BatchReport {
    /// Returns true if nothing went wrong.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn diagnose(&mut self, error: Error) {
        warn!("{error}");
        self.diagnostics.push(error);
    }
}

/// Runs a full batch described by `config`.
///
/// Fails only on setup errors: an undecodable input image or an output
/// directory that cannot be created. Everything after that is recoverable and
/// ends up in [`BatchReport::diagnostics`].
pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    let source = image::open(&config.input)
        .map_err(|source| Error::Decode {
            path: config.input.clone(),
            source,
        })?
        .to_rgba8();
    debug!(
        "decoded {} ({}x{})",
        config.input.display(),
        source.width(),
        source.height()
    );

    fs::create_dir_all(&config.output).map_err(|source| Error::CreateOutputDir {
        path: config.output.clone(),
        source,
    })?;

    let forge = IconForge::new(source, config.mask);
    Ok(generate(&forge, config))
}

/// Renders, writes and exports every size of `config` from an already
/// decoded source. The output directory must exist.
pub fn generate(forge: &IconForge, config: &BatchConfig) -> BatchReport {
    let mut report = BatchReport::default();
    let output_format = OutputFormat::from_name(&config.format);
    let mut seen = HashSet::new();

    for parsed in parse_size_list(&config.sizes) {
        let size = match parsed {
            Ok(size) => size,
            Err(error) => {
                report.diagnose(error);
                continue;
            }
        };
        if !seen.insert(size) {
            debug!("size {size} listed more than once, keeping the first");
            continue;
        }

        let icon = forge.render(size);
        let path = config.output.join(format::file_name(size, &config.format));

        match output_format {
            Some(output_format) => match format::write_icon(&icon, output_format, &path) {
                Ok(()) => {
                    info!("generated {}", path.display());
                    report.written.push(path);
                }
                Err(error) => report.diagnose(error),
            },
            None => report.diagnose(Error::UnsupportedFormat(config.format.clone())),
        }

        report.icons.add_image(icon);
    }

    match export_ico(&report.icons, &config.output) {
        Ok(path) => {
            info!("generated {}", path.display());
            report.icon = Some(path);
        }
        Err(error) => report.diagnose(error),
    }

    report
}
