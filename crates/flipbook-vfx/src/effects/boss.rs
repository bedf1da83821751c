//! Boss entrance: glitch bars, a delayed shock ring and an opening flash.

use super::FrameContext;
use crate::palette::PaletteColor;
use crate::raster::{self, Rect};

pub(super) fn boss_entrance(ctx: &mut FrameContext) {
    let (cx, cy) = (ctx.cx, ctx.cy);
    let drop = (ctx.t * (ctx.h / 2) as f64) as i32;

    for i in 0..5i32 {
        let x = cx - 24 + i * 12;
        let bar = Rect::new(x, drop - 20, x + 8, drop + (i + 1) * 6);
        raster::fill_rect(&mut ctx.frame, bar, PaletteColor::Purple);
    }

    let ring_start = ctx.count / 3;
    if ctx.index >= ring_start {
        let r = ((ctx.index - ring_start) as i64 * 6).min(ctx.offscreen_reach()) as i32;
        raster::stroke_ellipse(&mut ctx.frame, Rect::around(cx, cy, r), PaletteColor::Cyan, 2);
    }

    // The flash is painted last so it covers everything on frame 0.
    if ctx.index == 0 {
        ctx.frame.fill(PaletteColor::White);
    }
}
