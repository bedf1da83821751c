//! Deterministic PNG writer.
//!
//! Compression and filter settings are fixed, and no timestamp or other
//! variable chunk is written, so the same frame always encodes to the same
//! bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::frame::Frame;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            // Adaptive filtering picks per row; a fixed filter keeps output stable.
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smaller files at the cost of encode time.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a frame as 8-bit RGBA to a PNG file.
pub fn write_rgba(frame: &Frame, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(frame, writer, config)
}

/// Write a frame as 8-bit RGBA to any writer.
pub fn write_rgba_to_writer<W: Write>(
    frame: &Frame,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, frame.width(), frame.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(frame.as_rgba())?;
    png_writer.finish()?;
    Ok(())
}

/// Encode a frame to memory.
pub fn encode_rgba(frame: &Frame, config: &PngConfig) -> Result<Vec<u8>, PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(frame, &mut data, config)?;
    Ok(data)
}

/// BLAKE3 hex digest of encoded bytes.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to memory and return the digest alongside.
pub fn encode_rgba_with_hash(
    frame: &Frame,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let data = encode_rgba(frame, config)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}
