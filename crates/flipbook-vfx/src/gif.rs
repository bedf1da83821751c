//! Looping GIF preview encoder.
//!
//! Frames are indexed against the fixed palette rather than quantized, so the
//! color table is exact and identical for every effect. Transparent pixels use
//! the palette's transparent slot as the GIF transparency index.

use std::borrow::Cow;

use gif::{DisposalMethod, Encoder, Frame as GifFrame, Repeat};

use crate::error::{FlipbookError, FlipbookResult};
use crate::frame::Frame;
use crate::palette::PaletteColor;
use crate::sequence::FrameSequence;

/// Convert milliseconds to GIF centiseconds, rounding to nearest.
pub fn delay_centiseconds(ms: u32) -> u16 {
    ((ms + 5) / 10).min(u16::MAX as u32) as u16
}

/// Global color table: the palette as packed RGB triples.
fn color_table() -> Vec<u8> {
    PaletteColor::ALL
        .iter()
        .flat_map(|c| {
            let [r, g, b, _] = c.rgba();
            [r, g, b]
        })
        .collect()
}

/// Map every pixel of `frame` to its palette index.
fn index_frame(frame: &Frame, frame_index: usize) -> FlipbookResult<Vec<u8>> {
    frame
        .pixels()
        .map(|(x, y, rgba)| {
            PaletteColor::from_rgba(rgba)
                .map(PaletteColor::index)
                .ok_or(FlipbookError::OffPalette {
                    frame: frame_index,
                    x,
                    y,
                    rgba,
                })
        })
        .collect()
}

/// Encode a sequence as an infinitely repeating GIF.
///
/// Every frame shows for the sequence's frame delay and is cleared to the
/// background before the next one is drawn.
#[tracing::instrument(skip_all, fields(effect = seq.name()))]
pub fn encode_loop(seq: &FrameSequence) -> FlipbookResult<Vec<u8>> {
    let size = seq.size();
    let (Ok(width), Ok(height)) = (u16::try_from(size.width), u16::try_from(size.height)) else {
        return Err(FlipbookError::InvalidSize {
            width: size.width,
            height: size.height,
            reason: "GIF dimensions are limited to 65535",
        });
    };
    let delay = delay_centiseconds(seq.frame_delay_ms());
    let palette = color_table();

    let mut data = Vec::new();
    {
        let mut encoder = Encoder::new(&mut data, width, height, &palette)?;
        encoder.set_repeat(Repeat::Infinite)?;

        for (i, frame) in seq.frames().iter().enumerate() {
            let indices = index_frame(frame, i)?;
            let gif_frame = GifFrame {
                width,
                height,
                delay,
                dispose: DisposalMethod::Background,
                transparent: Some(PaletteColor::Transparent.index()),
                buffer: Cow::Owned(indices),
                ..GifFrame::default()
            };
            encoder.write_frame(&gif_frame)?;
        }
        // Dropping the encoder writes the trailer.
    }
    tracing::debug!(bytes = data.len(), delay_cs = delay, "loop encoded");
    Ok(data)
}
