//! Frame sequencing: one drawer call per frame index.

use crate::catalog::EffectDef;
use crate::effects::Drawer;
use crate::error::{FlipbookError, FlipbookResult};
use crate::frame::{Frame, Size};

/// All frames of one effect, in order, sharing one canvas size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    def: EffectDef,
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Wrap already-drawn frames, checking that there is one per index of
    /// `def` and that every one matches `def.size`.
    pub fn from_frames(def: EffectDef, frames: Vec<Frame>) -> FlipbookResult<Self> {
        if frames.is_empty() {
            return Err(FlipbookError::InvalidFrameCount(0));
        }
        if frames.len() != def.frame_count as usize {
            return Err(FlipbookError::FrameCountMismatch {
                expected: def.frame_count,
                actual: frames.len(),
            });
        }
        for (index, frame) in frames.iter().enumerate() {
            if frame.size() != def.size {
                return Err(FlipbookError::FrameSizeMismatch {
                    index,
                    expected: def.size,
                    actual: frame.size(),
                });
            }
        }
        Ok(Self { def, frames })
    }

    pub fn def(&self) -> &EffectDef {
        &self.def
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn size(&self) -> Size {
        self.def.size
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn rate(&self) -> u32 {
        self.def.rate
    }

    pub fn frame_delay_ms(&self) -> u32 {
        self.def.frame_delay_ms()
    }
}

/// Draw every frame of `def` in increasing index order.
#[tracing::instrument(skip_all, fields(effect = def.name, frames = def.frame_count))]
pub fn sequence(def: &EffectDef) -> FlipbookResult<FrameSequence> {
    def.validate()?;
    let frames = (0..def.frame_count)
        .map(|i| def.effect.draw(i, def.frame_count, def.size))
        .collect::<FlipbookResult<Vec<_>>>()?;
    tracing::debug!(count = frames.len(), "sequence drawn");
    FrameSequence::from_frames(*def, frames)
}
