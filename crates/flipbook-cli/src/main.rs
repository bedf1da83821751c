//! Flipbook CLI - generate pixel-art VFX sprite strips and loop previews
//!
//! This binary drives the `flipbook-vfx` batch over the built-in effect
//! catalog.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use flipbook_cli::commands;
use flipbook_vfx::DEFAULT_OUT_DIR;

/// Flipbook - procedural pixel-art VFX generator
#[derive(Parser)]
#[command(name = "flipbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sprite strips and looping previews
    Generate {
        /// Output directory (created if missing)
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Only generate the named effect (repeatable)
        #[arg(long = "only", value_name = "NAME")]
        only: Vec<String>,

        /// Also export APNG when apngasm is available
        #[arg(long)]
        apng: bool,

        /// Number of worker threads (1 = sequential)
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Write the JSON batch report to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print the JSON batch report instead of the human summary
        #[arg(long)]
        json: bool,
    },

    /// List the effect catalog
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Check optional tools and output directory permissions
    Doctor {
        /// Output directory to check
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Diagnostics go to stderr so `--json` output stays clean.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            only,
            apng,
            jobs,
            report,
            json,
        } => commands::generate::run(&commands::generate::GenerateArgs {
            out_dir,
            only,
            apng,
            jobs,
            report,
            json,
        }),
        Commands::List { json } => commands::list::run(json),
        Commands::Doctor { out_dir } => commands::doctor::run(&out_dir),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["flipbook", "generate"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Generate {
                out_dir,
                only,
                apng,
                jobs,
                report,
                json,
            } => {
                assert_eq!(out_dir, PathBuf::from("assets/vfx/flipbooks"));
                assert!(only.is_empty());
                assert!(!apng);
                assert_eq!(jobs, 1);
                assert!(report.is_none());
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_with_options() {
        let cli = Cli::try_parse_from([
            "flipbook",
            "generate",
            "--out-dir",
            "build/fx",
            "--only",
            "atk_slash_cross",
            "--only",
            "fx_boss_entrance",
            "--apng",
            "--jobs",
            "4",
            "--report",
            "build/report.json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                out_dir,
                only,
                apng,
                jobs,
                report,
                json,
            } => {
                assert_eq!(out_dir, PathBuf::from("build/fx"));
                assert_eq!(only, vec!["atk_slash_cross", "fx_boss_entrance"]);
                assert!(apng);
                assert_eq!(jobs, 4);
                assert_eq!(report, Some(PathBuf::from("build/report.json")));
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_list_json() {
        let cli = Cli::try_parse_from(["flipbook", "list", "--json"]).unwrap();
        match cli.command {
            Commands::List { json } => assert!(json),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_parses_doctor() {
        let cli = Cli::try_parse_from(["flipbook", "--verbose", "doctor"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Doctor { .. }));
    }

    #[test]
    fn test_cli_rejects_bad_jobs() {
        assert!(Cli::try_parse_from(["flipbook", "generate", "--jobs", "many"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["flipbook"]).is_err());
    }
}
