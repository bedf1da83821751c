//! Optional APNG export through the external `apngasm` assembler.
//!
//! The assembler is located once with [`ApngEncoder::probe`]. When it is
//! missing the export is skipped rather than failed. Frames are staged as
//! numbered PNGs in a temporary directory that is removed when the encode
//! returns, whether it succeeded or not.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::error::{FlipbookError, FlipbookResult};
use crate::png::{self, PngConfig};
use crate::sequence::FrameSequence;

/// Environment variable naming an explicit assembler binary.
pub const APNGASM_ENV: &str = "FLIPBOOK_APNGASM";

/// Handle to a usable `apngasm` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApngEncoder {
    program: PathBuf,
    scratch_root: Option<PathBuf>,
}

impl ApngEncoder {
    /// Locate the assembler: `FLIPBOOK_APNGASM` first, then `PATH`.
    pub fn probe() -> Option<Self> {
        if let Ok(path) = std::env::var(APNGASM_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(Self::with_program(path));
            }
            tracing::warn!(path = %path.display(), "{APNGASM_ENV} does not exist, searching PATH");
        }

        let names = if cfg!(windows) {
            vec!["apngasm.exe", "apngasm"]
        } else {
            vec!["apngasm"]
        };
        for name in names {
            if let Ok(path) = which::which(name) {
                return Some(Self::with_program(path));
            }
        }
        None
    }

    /// Use a specific assembler binary without probing.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            scratch_root: None,
        }
    }

    /// Stage frames under `dir` instead of the system temp directory.
    pub fn with_scratch_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(dir.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn scratch_dir(&self) -> FlipbookResult<tempfile::TempDir> {
        let root = self
            .scratch_root
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        tempfile::Builder::new()
            .prefix("flipbook_apng_")
            .tempdir_in(&root)
            .map_err(|e| FlipbookError::io(&root, e))
    }

    /// Assemble `seq` into an APNG at `out`, one frame per sequence frame.
    #[tracing::instrument(skip_all, fields(effect = seq.name(), out = %out.display()))]
    pub fn encode(&self, seq: &FrameSequence, out: &Path) -> FlipbookResult<()> {
        let scratch = self.scratch_dir()?;

        let config = PngConfig::default();
        let mut first = None;
        for (i, frame) in seq.frames().iter().enumerate() {
            let path = scratch.path().join(format!("frame{i:04}.png"));
            png::write_rgba(frame, &path, &config)?;
            first.get_or_insert(path);
        }
        let Some(first) = first else {
            return Err(FlipbookError::InvalidFrameCount(0));
        };

        // A stale file from an earlier run must not pass for fresh output.
        match std::fs::remove_file(out) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(FlipbookError::io(out, e)),
        }

        // apngasm <output> <first frame> <delay numerator> <delay denominator>
        let output = Command::new(&self.program)
            .arg(out)
            .arg(&first)
            .arg(seq.frame_delay_ms().to_string())
            .arg("1000")
            .output()
            .map_err(|e| FlipbookError::io(&self.program, e))?;

        if !output.status.success() {
            return Err(FlipbookError::ApngAssembler {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        if !out.is_file() {
            return Err(FlipbookError::ApngOutputMissing {
                path: out.to_path_buf(),
            });
        }
        tracing::debug!(frames = seq.len(), "apng assembled");
        // `scratch` drops here and removes the staged frames.
        Ok(())
    }
}

/// What happened to the APNG export of one effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApngStatus {
    Written,
    /// Requested, but no assembler was found.
    Unsupported,
    NotRequested,
}

/// The APNG setting resolved once per batch.
#[derive(Debug, Clone, Copy)]
pub enum ApngRequest<'a> {
    NotRequested,
    Unsupported,
    Available(&'a ApngEncoder),
}

impl<'a> ApngRequest<'a> {
    /// Resolve a user request against a probe result.
    pub fn resolve(requested: bool, encoder: Option<&'a ApngEncoder>) -> Self {
        match (requested, encoder) {
            (false, _) => ApngRequest::NotRequested,
            (true, None) => ApngRequest::Unsupported,
            (true, Some(encoder)) => ApngRequest::Available(encoder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_request() {
        let encoder = ApngEncoder::with_program("apngasm");
        assert!(matches!(
            ApngRequest::resolve(false, Some(&encoder)),
            ApngRequest::NotRequested
        ));
        assert!(matches!(
            ApngRequest::resolve(true, None),
            ApngRequest::Unsupported
        ));
        assert!(matches!(
            ApngRequest::resolve(true, Some(&encoder)),
            ApngRequest::Available(e) if e.program() == Path::new("apngasm")
        ));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ApngStatus::NotRequested).unwrap();
        assert_eq!(json, "\"not_requested\"");
    }

    #[test]
    fn test_scratch_root_is_used() {
        let root = tempfile::tempdir().unwrap();
        let encoder = ApngEncoder::with_program("apngasm").with_scratch_root(root.path());
        let scratch = encoder.scratch_dir().unwrap();
        assert!(scratch.path().starts_with(root.path()));
        let name = scratch.path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("flipbook_apng_"));
    }
}
