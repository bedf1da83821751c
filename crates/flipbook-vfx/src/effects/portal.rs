//! Shadow portal spawn, and the index mapping that turns it into the exit.

use super::{polar, FrameContext};
use crate::palette::PaletteColor;
use crate::raster::{self, Rect};

/// Frame of the spawn animation shown at `index` of the exit animation.
///
/// Callers guarantee `index < count`.
pub(super) fn reversed_index(index: u32, count: u32) -> u32 {
    count - 1 - index
}

pub(super) fn shadow_portal_spawn(ctx: &mut FrameContext) {
    let (cx, cy, h, index) = (ctx.cx, ctx.cy, ctx.h, ctx.index);
    // Iris opens fast, then eases.
    let r = (ctx.t.sqrt() * (ctx.min_side() / 2) as f64) as i32;

    let f = &mut ctx.frame;
    raster::fill_ellipse(f, Rect::around(cx, cy, r), PaletteColor::Black);
    raster::stroke_ellipse(f, Rect::around(cx, cy, r + 4), PaletteColor::Purple, 1);
    raster::stroke_ellipse(f, Rect::around(cx, cy, r + 8), PaletteColor::Cyan, 1);

    // Lightning cracks: short radial ticks that rotate with the frame.
    for i in 0..6u32 {
        let angle = (i * 60 + (index % 24) * 15) as f64;
        let reach = (r + 6) as f64;
        let (x, y) = polar(cx, cy, angle, reach, reach);
        let (tx, ty) = polar(x, y, angle, 6.0, 6.0);
        raster::line(f, (x, y), (tx, ty), PaletteColor::Purple, 1);
    }

    // Falling sparks wrap around the bottom edge.
    for i in 0..4i32 {
        let x = cx + (i - 2) * 6;
        let y = (cy as i64 + r as i64 + index as i64 * 2).rem_euclid(h as i64) as i32;
        raster::point(f, x, y, PaletteColor::Gold);
    }
}
