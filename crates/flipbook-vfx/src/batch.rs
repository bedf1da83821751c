//! Batch generation over the catalog.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::apng::{ApngEncoder, ApngRequest, ApngStatus};
use crate::assemble::{export_sequence, ArtifactRecord, EffectArtifacts};
use crate::catalog::{self, EffectDef};
use crate::error::{FlipbookError, FlipbookResult};
use crate::frame::Size;
use crate::gif::delay_centiseconds;
use crate::png::PngConfig;
use crate::sequence::sequence;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "assets/vfx/flipbooks";

/// Options for [`run_batch`].
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Effect names to generate; empty means the whole catalog.
    pub only: Vec<String>,
    /// Also export APNG when an assembler is available.
    pub apng: bool,
    /// Assembler to use instead of probing.
    pub apng_encoder: Option<ApngEncoder>,
    /// Worker threads. `1` generates sequentially.
    pub jobs: usize,
    pub png: PngConfig,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            only: Vec::new(),
            apng: false,
            apng_encoder: None,
            jobs: 1,
            png: PngConfig::default(),
        }
    }
}

/// Per-effect entry of a [`BatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectReport {
    pub name: String,
    pub frame_count: u32,
    pub size: Size,
    pub rate: u32,
    pub delay_ms: u32,
    /// Delay actually stored in the GIF, in centiseconds.
    pub gif_delay_cs: u16,
    pub artifacts: Vec<ArtifactRecord>,
    pub apng: ApngStatus,
}

impl EffectReport {
    fn new(def: &EffectDef, artifacts: &EffectArtifacts) -> Self {
        Self {
            name: def.name.to_string(),
            frame_count: def.frame_count,
            size: def.size,
            rate: def.rate,
            delay_ms: def.frame_delay_ms(),
            gif_delay_cs: delay_centiseconds(def.frame_delay_ms()),
            artifacts: artifacts.records(),
            apng: artifacts.apng.status(),
        }
    }
}

/// Result of a successful batch, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub out_dir: PathBuf,
    pub effects: Vec<EffectReport>,
}

impl BatchReport {
    pub fn artifact_count(&self) -> usize {
        self.effects.iter().map(|e| e.artifacts.len()).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.effects
            .iter()
            .flat_map(|e| &e.artifacts)
            .map(|a| a.bytes)
            .sum()
    }

    /// Effects whose APNG was requested but skipped.
    pub fn apng_skipped(&self) -> impl Iterator<Item = &EffectReport> {
        self.effects
            .iter()
            .filter(|e| e.apng == ApngStatus::Unsupported)
    }
}

/// Draw one effect and write its artifacts.
#[tracing::instrument(skip_all, fields(effect = def.name))]
pub fn generate_effect(
    def: &EffectDef,
    out_dir: &Path,
    png: &PngConfig,
    apng: ApngRequest<'_>,
) -> FlipbookResult<EffectReport> {
    let seq = sequence(def)?;
    let artifacts = export_sequence(&seq, out_dir, png, apng)?;
    Ok(EffectReport::new(def, &artifacts))
}

/// Generate the selected catalog entries into `out_dir`.
///
/// The selection is checked before anything is written. The first failing
/// effect (in catalog order) aborts the batch and its error is returned.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display(), jobs = opts.jobs))]
pub fn run_batch(out_dir: &Path, opts: &BatchOptions) -> FlipbookResult<BatchReport> {
    let defs = catalog::select(&opts.only)?;
    std::fs::create_dir_all(out_dir).map_err(|e| FlipbookError::io(out_dir, e))?;

    let probed = match (&opts.apng_encoder, opts.apng) {
        (Some(encoder), _) => Some(encoder.clone()),
        (None, true) => ApngEncoder::probe(),
        (None, false) => None,
    };
    let apng = ApngRequest::resolve(opts.apng, probed.as_ref());
    if let ApngRequest::Unsupported = apng {
        tracing::warn!("apngasm not found, skipping APNG export");
    }

    let effects = if opts.jobs > 1 && defs.len() > 1 {
        let pool = build_thread_pool(opts.jobs)?;
        let results: Vec<FlipbookResult<EffectReport>> = pool.install(|| {
            defs.par_iter()
                .map(|def| generate_effect(def, out_dir, &opts.png, apng))
                .collect()
        });
        // Results are indexed like `defs`, so this returns the earliest failure.
        results.into_iter().collect::<FlipbookResult<Vec<_>>>()?
    } else {
        defs.iter()
            .map(|def| generate_effect(def, out_dir, &opts.png, apng))
            .collect::<FlipbookResult<Vec<_>>>()?
    };

    tracing::info!(effects = effects.len(), "batch complete");
    Ok(BatchReport {
        out_dir: out_dir.to_path_buf(),
        effects,
    })
}

fn build_thread_pool(threads: usize) -> FlipbookResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| FlipbookError::ThreadPool(e.to_string()))
}
