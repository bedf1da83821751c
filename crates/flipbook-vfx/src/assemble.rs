//! Artifact assembly: sprite strip, looping GIF and optional APNG.
//!
//! Everything written for one effect is derived from a single in-memory
//! [`FrameSequence`].

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::apng::{ApngRequest, ApngStatus};
use crate::error::{FlipbookError, FlipbookResult};
use crate::frame::{Frame, Size};
use crate::gif;
use crate::png::{self, PngConfig};
use crate::sequence::FrameSequence;

/// Kind of file produced for an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// All frames side by side, left to right.
    Strip,
    /// Infinitely repeating GIF preview.
    Loop,
    Apng,
}

impl ArtifactKind {
    /// Output file name for the effect `name`.
    pub fn file_name(self, name: &str) -> String {
        match self {
            ArtifactKind::Strip => format!("{name}.png"),
            ArtifactKind::Loop => format!("{name}_loop.gif"),
            ArtifactKind::Apng => format!("{name}.apng"),
        }
    }
}

/// One file written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// File size in bytes.
    pub bytes: u64,
    /// BLAKE3 hex digest of the file contents.
    pub hash: String,
}

impl ArtifactRecord {
    fn from_bytes(kind: ArtifactKind, path: PathBuf, data: &[u8]) -> Self {
        Self {
            kind,
            path,
            bytes: data.len() as u64,
            hash: png::hash_bytes(data),
        }
    }
}

/// Outcome of the optional APNG export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApngOutcome {
    Written(ArtifactRecord),
    Unsupported,
    NotRequested,
}

impl ApngOutcome {
    pub fn status(&self) -> ApngStatus {
        match self {
            ApngOutcome::Written(_) => ApngStatus::Written,
            ApngOutcome::Unsupported => ApngStatus::Unsupported,
            ApngOutcome::NotRequested => ApngStatus::NotRequested,
        }
    }
}

/// Files written for one effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectArtifacts {
    pub strip: ArtifactRecord,
    pub loop_gif: ArtifactRecord,
    pub apng: ApngOutcome,
}

impl EffectArtifacts {
    /// Written records in output order.
    pub fn records(&self) -> Vec<ArtifactRecord> {
        let mut records = vec![self.strip.clone(), self.loop_gif.clone()];
        if let ApngOutcome::Written(record) = &self.apng {
            records.push(record.clone());
        }
        records
    }
}

/// Lay the sequence out as one row: frame `i` occupies columns
/// `[i * width, (i + 1) * width)`.
pub fn compose_strip(seq: &FrameSequence) -> FlipbookResult<Frame> {
    let size = seq.size();
    let strip_width = (seq.len() as u64)
        .checked_mul(size.width as u64)
        .and_then(|w| u32::try_from(w).ok())
        .ok_or(FlipbookError::InvalidSize {
            width: size.width,
            height: size.height,
            reason: "strip width overflows",
        })?;

    let mut strip = Frame::transparent(Size::new(strip_width, size.height));
    for (i, frame) in seq.frames().iter().enumerate() {
        strip.paste_over(frame, i as u32 * size.width, 0);
    }
    Ok(strip)
}

/// Compose and encode the strip as PNG bytes.
pub fn encode_strip(seq: &FrameSequence, config: &PngConfig) -> FlipbookResult<Vec<u8>> {
    let strip = compose_strip(seq)?;
    Ok(png::encode_rgba(&strip, config)?)
}

fn write_artifact(path: &Path, data: &[u8]) -> FlipbookResult<()> {
    std::fs::write(path, data).map_err(|e| FlipbookError::io(path, e))
}

/// Write every artifact for `seq` into `out_dir`, overwriting earlier files.
#[tracing::instrument(skip_all, fields(effect = seq.name()))]
pub fn export_sequence(
    seq: &FrameSequence,
    out_dir: &Path,
    config: &PngConfig,
    apng: ApngRequest<'_>,
) -> FlipbookResult<EffectArtifacts> {
    let name = seq.name();

    let strip_path = out_dir.join(ArtifactKind::Strip.file_name(name));
    let strip_data = encode_strip(seq, config)?;
    write_artifact(&strip_path, &strip_data)?;
    let strip = ArtifactRecord::from_bytes(ArtifactKind::Strip, strip_path, &strip_data);

    let loop_path = out_dir.join(ArtifactKind::Loop.file_name(name));
    let loop_data = gif::encode_loop(seq)?;
    write_artifact(&loop_path, &loop_data)?;
    let loop_gif = ArtifactRecord::from_bytes(ArtifactKind::Loop, loop_path, &loop_data);

    let apng = match apng {
        ApngRequest::NotRequested => ApngOutcome::NotRequested,
        ApngRequest::Unsupported => ApngOutcome::Unsupported,
        ApngRequest::Available(encoder) => {
            let path = out_dir.join(ArtifactKind::Apng.file_name(name));
            encoder.encode(seq, &path)?;
            let data = std::fs::read(&path).map_err(|e| FlipbookError::io(&path, e))?;
            ApngOutcome::Written(ArtifactRecord::from_bytes(ArtifactKind::Apng, path, &data))
        }
    };

    tracing::debug!(
        strip_bytes = strip.bytes,
        loop_bytes = loop_gif.bytes,
        apng = ?apng.status(),
        "artifacts written"
    );
    Ok(EffectArtifacts {
        strip,
        loop_gif,
        apng,
    })
}
