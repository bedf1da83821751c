//! Procedural effect drawers.
//!
//! Each effect maps `(frame_index, frame_count, size)` to one fully composited
//! frame. Drawers are pure: no state survives between calls, and any per-frame
//! motion (including drifting particles) is recomputed in closed form from the
//! frame index.
//!
//! Strokes are layered in a fixed order: a thin dark core first, then brighter
//! glow strokes on top. The neon rim comes from that layering, never from
//! blending.

mod attack;
mod aura;
mod boss;
mod portal;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::error::{FlipbookError, FlipbookResult};
use crate::frame::{Frame, Size};

/// Something that can render frame `frame_index` of a `frame_count`-frame
/// animation onto a canvas of `size`.
pub trait Drawer {
    fn draw(&self, frame_index: u32, frame_count: u32, size: Size) -> FlipbookResult<Frame>;
}

/// The built-in effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Short diagonal slash travelling bottom-left to top-right.
    SlashDiagonal,
    /// Two opposing arcs; the second starts on frame 3.
    SlashCross,
    /// Dotted trail orbiting the center.
    SlashSpin,
    /// Rising horizontal cut with an apex ring.
    SlashUplift,
    /// Falling streak that becomes a starburst halfway through.
    SlamGround,
    /// Pulsing void core with drifting rune pixels.
    DarkAuraIdle,
    /// White flash, then an expanding ring with specks and shards.
    RageSurgeBurst,
    /// Expanding ring with a blinking inner ring.
    ShockwaveHeavy,
    /// Iris opening onto a black void.
    ShadowPortalSpawn,
    /// The spawn animation played backwards.
    ShadowPortalExit,
    /// Dropping glitch bars and a late shock ring.
    BossEntrance,
}

impl Effect {
    pub const ALL: [Effect; 11] = [
        Effect::SlashDiagonal,
        Effect::SlashCross,
        Effect::SlashSpin,
        Effect::SlashUplift,
        Effect::SlamGround,
        Effect::DarkAuraIdle,
        Effect::RageSurgeBurst,
        Effect::ShockwaveHeavy,
        Effect::ShadowPortalSpawn,
        Effect::ShadowPortalExit,
        Effect::BossEntrance,
    ];
}

impl Drawer for Effect {
    fn draw(&self, frame_index: u32, frame_count: u32, size: Size) -> FlipbookResult<Frame> {
        let mut ctx = FrameContext::new(frame_index, frame_count, size)?;
        match self {
            Effect::SlashDiagonal => attack::slash_diagonal(&mut ctx),
            Effect::SlashCross => attack::slash_cross(&mut ctx),
            Effect::SlashSpin => attack::slash_spin(&mut ctx),
            Effect::SlashUplift => attack::slash_uplift(&mut ctx),
            Effect::SlamGround => attack::slam_ground(&mut ctx),
            Effect::DarkAuraIdle => aura::dark_aura_idle(&mut ctx),
            Effect::RageSurgeBurst => aura::rage_surge_burst(&mut ctx),
            Effect::ShockwaveHeavy => aura::shockwave_heavy(&mut ctx),
            Effect::ShadowPortalSpawn => portal::shadow_portal_spawn(&mut ctx),
            Effect::ShadowPortalExit => {
                return Effect::ShadowPortalSpawn.draw(
                    portal::reversed_index(frame_index, frame_count),
                    frame_count,
                    size,
                );
            }
            Effect::BossEntrance => boss::boss_entrance(&mut ctx),
        }
        Ok(ctx.frame)
    }
}

/// Validated drawing inputs plus the canvas being painted.
pub(crate) struct FrameContext {
    pub frame: Frame,
    pub index: u32,
    pub count: u32,
    /// Progress fraction `index / count`, in `[0, 1)`.
    pub t: f64,
    pub w: i32,
    pub h: i32,
    pub cx: i32,
    pub cy: i32,
}

impl FrameContext {
    pub(crate) fn new(index: u32, count: u32, size: Size) -> FlipbookResult<Self> {
        size.validate()?;
        if size.width > i32::MAX as u32 || size.height > i32::MAX as u32 {
            return Err(FlipbookError::InvalidSize {
                width: size.width,
                height: size.height,
                reason: "dimensions exceed the drawable range",
            });
        }
        if count == 0 {
            return Err(FlipbookError::InvalidFrameCount(count));
        }
        if index >= count {
            return Err(FlipbookError::FrameIndexOutOfRange { index, count });
        }

        let w = size.width as i32;
        let h = size.height as i32;
        Ok(Self {
            frame: Frame::transparent(size),
            index,
            count,
            t: index as f64 / count as f64,
            w,
            h,
            cx: w / 2,
            cy: h / 2,
        })
    }

    pub fn min_side(&self) -> i32 {
        self.w.min(self.h)
    }

    pub fn max_side(&self) -> i32 {
        self.w.max(self.h)
    }

    /// Distance from the center past which radial geometry misses the canvas.
    /// Index-driven radii are capped here so they stay in `i32` range.
    pub fn offscreen_reach(&self) -> i64 {
        2 * self.max_side() as i64 + 8
    }
}

/// Point at `angle_deg` on an ellipse with radii `(rx, ry)` around `(cx, cy)`,
/// truncated toward zero per axis.
pub(crate) fn polar(cx: i32, cy: i32, angle_deg: f64, rx: f64, ry: f64) -> (i32, i32) {
    let a = angle_deg.to_radians();
    (cx + (a.cos() * rx) as i32, cy + (a.sin() * ry) as i32)
}
