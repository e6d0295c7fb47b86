//! Per-generation progress reporting and PNG checkpoints
//!
//! After every breeding step the population hands its generation summary to a
//! [`Checkpointer`]. The PNG implementation logs the summary and, whenever
//! the best score moved, renders the champion to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::candidate::Candidate;
use crate::chromosome::Chromosome;
use crate::error::EvoResult;

/// Sink for per-generation summaries
pub trait Checkpointer<C: Candidate> {
    /// Record one completed generation.
    ///
    /// `best` is the population champion after elimination, `gain` the
    /// absolute change of the best score this generation.
    fn record(&mut self, generation: usize, best: &Chromosome<C>, gain: f64) -> EvoResult<()>;
}

/// Writes the champion to `drawing_{generation:05}.png` on every gain.
///
/// The output directory must already exist; a missing directory surfaces as a
/// checkpoint error on the first write. Zero-gain generations are logged but
/// produce no file.
#[derive(Clone, Debug)]
pub struct PngCheckpointer {
    out_dir: PathBuf,
}

impl PngCheckpointer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn image_path(&self, generation: usize) -> PathBuf {
        self.out_dir.join(format!("drawing_{generation:05}.png"))
    }
}

impl<C: Candidate> Checkpointer<C> for PngCheckpointer {
    fn record(&mut self, generation: usize, best: &Chromosome<C>, gain: f64) -> EvoResult<()> {
        let best_score = best.score().unwrap_or(f64::NAN);
        info!(generation, best_score, gain, "generation complete");
        if gain != 0.0 {
            best.candidate().render(1.0).save(self.image_path(generation))?;
        }
        Ok(())
    }
}

/// Discards every summary. Useful in tests and headless tuning runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCheckpointer;

impl NullCheckpointer {
    pub fn new() -> Self {
        Self
    }
}

impl<C: Candidate> Checkpointer<C> for NullCheckpointer {
    fn record(&mut self, _generation: usize, _best: &Chromosome<C>, _gain: f64) -> EvoResult<()> {
        Ok(())
    }
}
