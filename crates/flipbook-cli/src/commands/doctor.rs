//! Doctor command implementation
//!
//! Checks the APNG assembler, the output directory and the catalog.

use anyhow::Result;
use colored::Colorize;
use flipbook_vfx::{catalog, ApngEncoder, APNGASM_ENV};
use std::path::Path;
use std::process::{Command, ExitCode};

/// Run the doctor command
///
/// Checks:
/// - Version information
/// - apngasm availability (optional)
/// - Output directory permissions
/// - Catalog definitions
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run(out_dir: &Path) -> Result<ExitCode> {
    println!("{}", "Flipbook Doctor".cyan().bold());
    println!("{}", "===============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!(
        "  {} flipbook-cli v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    match get_rustc_version() {
        Some(version) => println!("  {} rustc {}", "->".green(), version),
        None => println!("  {} rustc (not found)", "->".yellow()),
    }
    println!();

    println!("{}", "Dependencies:".bold());
    match ApngEncoder::probe() {
        Some(encoder) => {
            println!(
                "  {} apngasm ({})",
                "ok".green(),
                encoder.program().display()
            );
        }
        None => {
            println!("  {} apngasm not found", "!!".yellow());
            println!(
                "     {}",
                "APNG export is skipped without it; strips and GIF loops are unaffected.".dimmed()
            );
            println!(
                "     {}",
                format!("Install apngasm or point {} at the binary.", APNGASM_ENV).dimmed()
            );
            // Optional, so not a failure.
        }
    }
    println!();

    println!("{}", "Permissions:".bold());
    match check_writable(out_dir) {
        Ok(dir) => println!(
            "  {} Output directory is writable ({})",
            "ok".green(),
            dir.display()
        ),
        Err(e) => {
            println!("  {} Cannot write to {}: {}", "!!".red(), out_dir.display(), e);
            all_ok = false;
        }
    }
    println!();

    println!("{}", "Catalog:".bold());
    let mut invalid = 0;
    for def in catalog() {
        if let Err(e) = def.validate() {
            println!("  {} {} [{}] {}", "!!".red(), def.name, e.code(), e);
            invalid += 1;
        }
    }
    if invalid == 0 {
        println!("  {} {} effects defined", "ok".green(), catalog().len());
    } else {
        all_ok = false;
    }
    println!();

    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    }
}

/// Probe writability of `out_dir`, or of its nearest existing ancestor when
/// it has not been created yet. Returns the directory actually tested.
fn check_writable(out_dir: &Path) -> std::io::Result<&Path> {
    let dir = out_dir
        .ancestors()
        .find(|p| p.is_dir())
        .unwrap_or_else(|| Path::new("."));
    let test_file = dir.join(".flipbook_write_test");
    std::fs::write(&test_file, "test")?;
    let _ = std::fs::remove_file(&test_file);
    Ok(dir)
}

fn parse_rustc_version(output: &str) -> Option<String> {
    // "rustc 1.75.0 (82e1608df 2023-12-21)"
    output.split_whitespace().nth(1).map(|s| s.to_string())
}

fn get_rustc_version() -> Option<String> {
    let output = Command::new("rustc").arg("--version").output().ok()?;
    if output.status.success() {
        parse_rustc_version(&String::from_utf8_lossy(&output.stdout))
    } else {
        None
    }
}
