//! Generate command implementation
//!
//! Runs the batch over the catalog (or a selection of it) and prints a
//! summary. The batch report can also be written as JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use flipbook_vfx::{run_batch, ApngStatus, BatchOptions, BatchReport};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

/// Arguments for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub out_dir: PathBuf,
    pub only: Vec<String>,
    pub apng: bool,
    pub jobs: usize,
    /// Write the JSON report to this file.
    pub report: Option<PathBuf>,
    /// Print the JSON report to stdout instead of the human summary.
    pub json: bool,
}

impl GenerateArgs {
    fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            only: self.only.clone(),
            apng: self.apng,
            jobs: self.jobs.max(1),
            ..BatchOptions::default()
        }
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success. Failures are returned as errors.
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    if !args.json {
        print_banner(args);
    }

    let start = Instant::now();
    let report = match run_batch(&args.out_dir, &args.batch_options()) {
        Ok(report) => report,
        Err(e) => {
            let code = e.code();
            return Err(anyhow::Error::new(e).context(format!(
                "failed to generate flipbooks into {} [{}]",
                args.out_dir.display(),
                code
            )));
        }
    };
    let elapsed = start.elapsed();

    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", json);
    } else {
        print_summary(&report, args.report.as_deref(), elapsed.as_millis());
    }

    Ok(ExitCode::SUCCESS)
}

/// Write the batch report as pretty JSON.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create report directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}

fn print_banner(args: &GenerateArgs) {
    println!("{}", "======================================".cyan());
    println!("{}", "  Flipbook VFX Generator".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Output directory:".blue().bold(), args.out_dir.display());
    if !args.only.is_empty() {
        println!("{} {}", "Selection:".blue().bold(), args.only.join(", "));
    }
    println!(
        "{} {}",
        "Workers:".blue().bold(),
        if args.jobs > 1 {
            args.jobs.to_string()
        } else {
            "sequential".to_string()
        }
    );
    println!();
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(16)]
}

fn print_summary(report: &BatchReport, report_path: Option<&Path>, elapsed_ms: u128) {
    for effect in &report.effects {
        println!(
            "  {} {} ({} frames, {}, {} ms/frame)",
            "ok".green(),
            effect.name,
            effect.frame_count,
            effect.size,
            effect.delay_ms
        );
        for artifact in &effect.artifacts {
            let file_name = artifact
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            println!(
                "     {} {}",
                file_name.dimmed(),
                format!("{} bytes, blake3 {}", artifact.bytes, short_hash(&artifact.hash)).dimmed()
            );
        }
        if effect.apng == ApngStatus::Unsupported {
            println!("     {}", "apng skipped: apngasm not found".yellow());
        }
    }

    println!();
    println!("{}", "======================================".cyan());
    println!("{}", "  Generation Summary".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Effects:".green().bold(), report.effects.len());
    println!("{} {}", "Artifacts:".green().bold(), report.artifact_count());
    println!("{} {}", "Total bytes:".blue().bold(), report.total_bytes());
    let skipped = report.apng_skipped().count();
    if skipped > 0 {
        println!(
            "{} {} (install apngasm or set {})",
            "APNG skipped:".yellow().bold(),
            skipped,
            flipbook_vfx::APNGASM_ENV
        );
    }
    println!("{} {} ms", "Duration:".blue().bold(), elapsed_ms);
    println!();
    println!(
        "{} {}",
        "Outputs saved to:".blue().bold(),
        report.out_dir.display()
    );
    if let Some(path) = report_path {
        println!("{} {}", "Report written to:".blue().bold(), path.display());
    }
    println!("{} Generation complete", "SUCCESS".green().bold());
}
