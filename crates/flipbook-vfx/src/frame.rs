//! Canvas sizes and RGBA8 frame buffers.

use std::fmt;

use serde::Serialize;

use crate::error::{FlipbookError, FlipbookResult};
use crate::palette::{PaletteColor, Rgba};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reject zero-area canvases.
    pub fn validate(&self) -> FlipbookResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FlipbookError::InvalidSize {
                width: self.width,
                height: self.height,
                reason: "dimensions must be non-zero",
            });
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A raster image with 8-bit RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: Size,
    data: Vec<u8>,
}

impl Frame {
    /// Create a fully transparent frame.
    pub fn transparent(size: Size) -> Self {
        Self::filled(size, PaletteColor::Transparent)
    }

    /// Create a frame filled with one palette color.
    pub fn filled(size: Size, color: PaletteColor) -> Self {
        let rgba = color.rgba();
        let mut data = Vec::with_capacity(size.pixel_count() * 4);
        for _ in 0..size.pixel_count() {
            data.extend_from_slice(&rgba);
        }
        Self { size, data }
    }

    /// Wrap raw row-major RGBA bytes, e.g. a decoded image.
    pub fn from_rgba(size: Size, data: Vec<u8>) -> FlipbookResult<Self> {
        size.validate()?;
        if data.len() != size.pixel_count() * 4 {
            return Err(FlipbookError::InvalidSize {
                width: size.width,
                height: size.height,
                reason: "pixel buffer length does not match the dimensions",
            });
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw RGBA bytes.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * 4
    }

    /// Get a pixel. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Paint one pixel, ignoring coordinates outside the canvas.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: PaletteColor) {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return;
        }
        let i = self.offset(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&color.rgba());
    }

    /// Paint every pixel.
    pub fn fill(&mut self, color: PaletteColor) {
        let rgba = color.rgba();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Composite `src` over this frame with its top-left corner at `(x, y)`.
    ///
    /// Standard source-over blending; pixels of `src` that fall outside this
    /// frame are dropped.
    pub fn paste_over(&mut self, src: &Frame, x: u32, y: u32) {
        for sy in 0..src.height() {
            let dy = y + sy;
            if dy >= self.height() {
                break;
            }
            for sx in 0..src.width() {
                let dx = x + sx;
                if dx >= self.width() {
                    break;
                }
                let s = src.pixel(sx, sy);
                let i = self.offset(dx, dy);
                let d = [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]];
                self.data[i..i + 4].copy_from_slice(&source_over(s, d));
            }
        }
    }

    /// Copy a rectangular region into a new frame.
    pub fn crop(&self, x: u32, y: u32, size: Size) -> FlipbookResult<Frame> {
        size.validate()?;
        if x as u64 + size.width as u64 > self.width() as u64
            || y as u64 + size.height as u64 > self.height() as u64
        {
            return Err(FlipbookError::InvalidSize {
                width: size.width,
                height: size.height,
                reason: "crop region exceeds the source image",
            });
        }
        let mut data = Vec::with_capacity(size.pixel_count() * 4);
        for row in y..y + size.height {
            let start = self.offset(x, row);
            data.extend_from_slice(&self.data[start..start + size.width as usize * 4]);
        }
        Ok(Frame { size, data })
    }

    /// Iterate pixels as `(x, y, rgba)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
        let width = self.size.width;
        self.data.chunks_exact(4).enumerate().map(move |(i, px)| {
            let i = i as u32;
            (i % width, i / width, [px[0], px[1], px[2], px[3]])
        })
    }
}

fn source_over(src: Rgba, dst: Rgba) -> Rgba {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = dst[3] as u32;
    // out_a scaled by 255
    let da_scaled = da * (255 - sa) / 255;
    let out_a = sa + da_scaled;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (src[c] as u32 * sa + dst[c] as u32 * da_scaled + out_a / 2) / out_a;
        out[c] = v.min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}
