//! Tests for the external APNG assembler integration.
//!
//! A real `apngasm` is not assumed to be installed. These tests drive the
//! encoder with small shell stand-ins so every outcome can be exercised.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use flipbook_vfx::{
    find, run_batch, sequence, ApngEncoder, ApngStatus, ArtifactKind, BatchOptions, FlipbookError,
    FrameSequence, PngConfig,
};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn is_empty_dir(path: &Path) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}

fn portal() -> FrameSequence {
    sequence(find("fx_shadow_portal_spawn").unwrap()).unwrap()
}

// ============================================================================
// Assembler Outcomes
// ============================================================================

/// Test success, failure, missing output and missing binary in turn.
///
/// Kept in one test so the stand-in scripts are never written while another
/// test in this binary is spawning processes.
#[test]
fn test_assembler_outcomes_and_cleanup() {
    let tools = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let seq = portal();
    let target = out.path().join("fx_shadow_portal_spawn.apng");

    // Copies the first staged frame to the output and records its arguments.
    let ok = write_script(
        tools.path(),
        "fake_apngasm",
        "cp \"$2\" \"$1\" && echo \"$(basename \"$2\") $3 $4\" > \"$1.args\"",
    );
    ApngEncoder::with_program(&ok)
        .with_scratch_root(scratch.path())
        .encode(&seq, &target)
        .unwrap();

    let expected_first =
        flipbook_vfx::png::encode_rgba(&seq.frames()[0], &PngConfig::default()).unwrap();
    assert!(std::fs::read(&target).unwrap() == expected_first);
    let args = std::fs::read_to_string(out.path().join("fx_shadow_portal_spawn.apng.args")).unwrap();
    assert_eq!(args.trim(), "frame0000.png 71 1000");
    assert!(is_empty_dir(scratch.path()), "staged frames left behind");

    // Non-zero exit is an error carrying status and stderr.
    let failing = write_script(tools.path(), "failing_apngasm", "echo boom >&2\nexit 3");
    let err = ApngEncoder::with_program(&failing)
        .with_scratch_root(scratch.path())
        .encode(&seq, &target)
        .unwrap_err();
    match err {
        FlipbookError::ApngAssembler { status, stderr } => {
            assert_eq!(status, 3);
            assert_eq!(stderr, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(is_empty_dir(scratch.path()), "staged frames left behind");
    assert!(!target.exists(), "stale output survived a failed run");

    // Success without output.
    let silent = write_script(tools.path(), "silent_apngasm", "exit 0");
    let err = ApngEncoder::with_program(&silent)
        .with_scratch_root(scratch.path())
        .encode(&seq, &target)
        .unwrap_err();
    assert!(matches!(err, FlipbookError::ApngOutputMissing { .. }));
    assert!(is_empty_dir(scratch.path()));

    // Binary that cannot be started.
    let err = ApngEncoder::with_program(tools.path().join("does_not_exist"))
        .with_scratch_root(scratch.path())
        .encode(&seq, &target)
        .unwrap_err();
    assert!(matches!(err, FlipbookError::Io { .. }));
    assert!(is_empty_dir(scratch.path()));

    // Through the batch runner the APNG becomes a third artifact.
    let batch_out = out.path().join("batch");
    let report = run_batch(
        &batch_out,
        &BatchOptions {
            only: vec!["fx_shadow_portal_spawn".into()],
            apng: true,
            apng_encoder: Some(ApngEncoder::with_program(&ok).with_scratch_root(scratch.path())),
            ..BatchOptions::default()
        },
    )
    .unwrap();
    let effect = &report.effects[0];
    assert_eq!(effect.apng, ApngStatus::Written);
    let kinds: Vec<_> = effect.artifacts.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![ArtifactKind::Strip, ArtifactKind::Loop, ArtifactKind::Apng]
    );
    assert!(batch_out.join("fx_shadow_portal_spawn.apng").is_file());
    assert!(is_empty_dir(scratch.path()));
}

/// Test that an explicit encoder is ignored unless APNG was requested.
#[test]
fn test_encoder_unused_without_request() {
    let out = tempfile::tempdir().unwrap();
    let report = run_batch(
        out.path(),
        &BatchOptions {
            only: vec!["atk_slash_uplift".into()],
            apng: false,
            apng_encoder: Some(ApngEncoder::with_program("/nonexistent/apngasm")),
            ..BatchOptions::default()
        },
    )
    .unwrap();
    assert_eq!(report.effects[0].apng, ApngStatus::NotRequested);
    assert_eq!(report.artifact_count(), 2);
}
