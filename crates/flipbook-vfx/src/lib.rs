//! Procedural pixel-art VFX flipbooks.
//!
//! This crate draws a fixed catalog of short VFX animations (slashes, auras,
//! shockwaves, portals) and exports each as a horizontal sprite strip PNG, a
//! looping GIF preview and, when the `apngasm` assembler is installed, an
//! APNG.
//!
//! # Pipeline
//!
//! - **Effects**: every [`Effect`] is a pure [`Drawer`] from
//!   `(frame_index, frame_count, size)` to a [`Frame`]
//! - **Catalog**: [`catalog()`] lists the named [`EffectDef`]s in generation order
//! - **Sequencer**: [`sequence`] draws all frames of one definition
//! - **Assembler**: [`export_sequence`] writes the strip, loop and optional APNG
//! - **Batch**: [`run_batch`] runs the above for a selection of the catalog
//!
//! # Example
//!
//! ```no_run
//! use flipbook_vfx::{run_batch, BatchOptions};
//! use std::path::Path;
//!
//! let opts = BatchOptions {
//!     only: vec!["fx_shockwave_heavy".to_string()],
//!     ..BatchOptions::default()
//! };
//! let report = run_batch(Path::new("assets/vfx/flipbooks"), &opts).unwrap();
//! for effect in &report.effects {
//!     println!("{}: {} artifacts", effect.name, effect.artifacts.len());
//! }
//! ```
//!
//! # Determinism
//!
//! - Drawers keep no state and use no randomness
//! - Every pixel is an exact [`PaletteColor`]
//! - PNG encoding uses fixed compression and filter settings
//! - The GIF color table is the palette itself, not a quantized one
//!
//! Generating twice therefore yields byte-identical strips and loops.

pub mod apng;
pub mod assemble;
pub mod batch;
pub mod catalog;
pub mod effects;
pub mod error;
pub mod frame;
pub mod gif;
pub mod palette;
pub mod png;
pub mod raster;
pub mod sequence;

pub use crate::apng::{ApngEncoder, ApngRequest, ApngStatus, APNGASM_ENV};
pub use crate::assemble::{
    compose_strip, encode_strip, export_sequence, ApngOutcome, ArtifactKind, ArtifactRecord,
    EffectArtifacts,
};
pub use crate::batch::{
    generate_effect, run_batch, BatchOptions, BatchReport, EffectReport, DEFAULT_OUT_DIR,
};
pub use crate::catalog::{catalog, find, frame_delay_ms, select, EffectDef};
pub use crate::effects::{Drawer, Effect};
pub use crate::error::{FlipbookError, FlipbookResult};
pub use crate::frame::{Frame, Size};
pub use crate::gif::{delay_centiseconds, encode_loop};
pub use crate::palette::{PaletteColor, Rgba};
pub use crate::png::{PngConfig, PngError};
pub use crate::sequence::{sequence, FrameSequence};
