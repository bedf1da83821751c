//! List command implementation
//!
//! Prints the effect catalog in generation order.

use anyhow::{Context, Result};
use colored::Colorize;
use flipbook_vfx::{catalog, delay_centiseconds, Effect, EffectDef, Size};
use serde::Serialize;
use std::process::ExitCode;

/// One catalog row, as printed by `list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub effect: Effect,
    pub size: Size,
    pub frame_count: u32,
    pub rate: u32,
    pub delay_ms: u32,
    pub gif_delay_cs: u16,
    /// Width of the sprite strip in pixels.
    pub strip_width: u64,
}

impl From<&EffectDef> for CatalogEntry {
    fn from(def: &EffectDef) -> Self {
        Self {
            name: def.name,
            effect: def.effect,
            size: def.size,
            frame_count: def.frame_count,
            rate: def.rate,
            delay_ms: def.frame_delay_ms(),
            gif_delay_cs: delay_centiseconds(def.frame_delay_ms()),
            strip_width: def.size.width as u64 * def.frame_count as u64,
        }
    }
}

pub fn entries() -> Vec<CatalogEntry> {
    catalog().iter().map(CatalogEntry::from).collect()
}

/// Run the list command
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = entries();

    if json {
        let out = serde_json::to_string_pretty(&entries).context("failed to serialize catalog")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Flipbook Catalog".cyan().bold());
    println!("{}", "================".cyan());
    println!();
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        println!(
            "  {:<width$}  {}  {:>2} frames  {} fps  {}",
            entry.name.bold(),
            entry.size,
            entry.frame_count,
            entry.rate,
            format!("{} ms/frame", entry.delay_ms).dimmed(),
            width = width
        );
    }
    println!();
    println!("{} {}", "Effects:".blue().bold(), entries.len());
    Ok(ExitCode::SUCCESS)
}
