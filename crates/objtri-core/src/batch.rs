//! Fixed-list batch driver
//!
//! Each base name `b` maps to `<dir>/b.obj -> <dir>/b<suffix>.obj`. Jobs run
//! one after another; a missing input is skipped with a warning, and the first
//! read or write failure stops the batch.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::{Config, DEFAULT_BASES, DEFAULT_OUTPUT_SUFFIX};
use crate::convert::{convert_with, ConversionStats, ConvertOptions};
use crate::error::{ObjTriError, Result};
use crate::DIAGNOSTICS_TARGET;

/// One input/output pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Which files to convert and where they live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    pub base_dir: PathBuf,
    pub bases: Vec<String>,
    pub output_suffix: String,
}

impl BatchPlan {
    /// The built-in list (`p2`, `p3`, `p4`) under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            bases: DEFAULT_BASES.iter().map(ToString::to_string).collect(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }

    /// Plan taken from a loaded config.
    pub fn from_config(base_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            base_dir: base_dir.into(),
            bases: config.bases(),
            output_suffix: config.output_suffix(),
        }
    }

    #[must_use]
    pub fn with_bases(mut self, bases: Vec<String>) -> Self {
        self.bases = bases;
        self
    }

    #[must_use]
    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    pub fn jobs(&self) -> Vec<BatchJob> {
        self.bases
            .iter()
            .map(|base| BatchJob {
                input: self.base_dir.join(format!("{base}.obj")),
                output: self
                    .base_dir
                    .join(format!("{base}{}.obj", self.output_suffix)),
            })
            .collect()
    }
}

/// Outcome of a batch that ran to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<ConversionStats>,
    /// Inputs that did not exist and were skipped
    pub missing: Vec<PathBuf>,
}

/// Run every job in `plan` in order.
///
/// `on_converted` is called right after each successful conversion, before
/// the next job starts.
///
/// # Errors
///
/// Returns the first read or write error. Jobs after the failing one are not
/// attempted.
pub fn run_batch<F>(
    plan: &BatchPlan,
    options: &ConvertOptions,
    mut on_converted: F,
) -> Result<BatchReport>
where
    F: FnMut(&ConversionStats),
{
    let mut report = BatchReport::default();

    for job in plan.jobs() {
        if !job.input.exists() {
            warn!(target: DIAGNOSTICS_TARGET, "{} not found", job.input.display());
            report.missing.push(job.input);
            continue;
        }

        let stats = convert_with(&job.input, &job.output, options)?;
        on_converted(&stats);
        report.converted.push(stats);
    }

    Ok(report)
}

/// Directory containing the running executable.
///
/// # Errors
///
/// Returns [`ObjTriError::NoProgramDir`] if the executable path is unknown.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(ObjTriError::NoProgramDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ObjTriError::NoProgramDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}
