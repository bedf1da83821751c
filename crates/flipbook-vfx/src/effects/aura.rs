//! Radial effects centered on the canvas: idle aura, burst and shockwave.

use std::f64::consts::TAU;

use super::{polar, FrameContext};
use crate::palette::PaletteColor;
use crate::raster::{self, Rect};

pub(super) fn dark_aura_idle(ctx: &mut FrameContext) {
    let (cx, cy) = (ctx.cx, ctx.cy);
    let phase = TAU * ctx.index as f64 / ctx.count as f64;
    let pulse = 6 + (3.0 * phase.sin()) as i32;

    let f = &mut ctx.frame;
    raster::fill_ellipse(f, Rect::around(cx, cy, pulse), PaletteColor::Black);
    raster::stroke_ellipse(f, Rect::around(cx, cy, pulse + 2), PaletteColor::Cyan, 1);
    raster::stroke_ellipse(f, Rect::around(cx, cy, pulse + 4), PaletteColor::Purple, 1);

    // Rune pixels drift on slightly squashed orbits; position depends only on
    // the frame and rune index.
    for i in 0..5u32 {
        let angle = (((ctx.index % 36) * 10 + i * 73) % 360) as f64;
        let rx = (pulse + 6) as f64 + i as f64;
        let ry = (pulse + 3) as f64 + i as f64;
        let (x, y) = polar(cx, cy, angle, rx, ry);
        raster::point(f, x, y, PaletteColor::Purple);
    }
}

pub(super) fn rage_surge_burst(ctx: &mut FrameContext) {
    if ctx.index == 0 {
        ctx.frame.fill(PaletteColor::White);
        return;
    }

    let (cx, cy, index) = (ctx.cx, ctx.cy, ctx.index);
    let r = (4.0 + ctx.t * ctx.min_side() as f64) as i32;
    let limit = ctx.offscreen_reach();

    let f = &mut ctx.frame;
    raster::stroke_ellipse(f, Rect::around(cx, cy, r), PaletteColor::Cyan, 2);
    raster::stroke_ellipse(f, Rect::around(cx, cy, r + 4), PaletteColor::Purple, 1);

    // Danger specks ride just outside the ring.
    for i in 0..6u32 {
        let angle = ((i * 60 + (index % 18) * 20) % 360) as f64;
        let reach = (r + 6) as f64;
        let (x, y) = polar(cx, cy, angle, reach, reach);
        raster::point(f, x, y, PaletteColor::Red);
    }

    // Shards eject from the center and outrun the ring.
    for i in 0..4u32 {
        let angle = ((index % 12) * 30 + i * 90) as f64;
        let reach = (r as i64 + index as i64 * 3).min(limit) as f64;
        let (x, y) = polar(cx, cy, angle, reach, reach);
        raster::line(f, (cx, cy), (x, y), PaletteColor::Black, 1);
        raster::line(f, (cx, cy), (x, y), PaletteColor::Gold, 1);
    }
}

pub(super) fn shockwave_heavy(ctx: &mut FrameContext) {
    let (cx, cy) = (ctx.cx, ctx.cy);
    let r = (ctx.t * ctx.max_side() as f64) as i32;
    let blink = ctx.index % 2 == 0;

    let f = &mut ctx.frame;
    raster::stroke_ellipse(f, Rect::around(cx, cy, r), PaletteColor::Cyan, 2);
    raster::stroke_ellipse(f, Rect::around(cx, cy, r + 3), PaletteColor::Purple, 1);
    if blink {
        raster::stroke_ellipse(f, Rect::around(cx, cy, r / 2 + 2), PaletteColor::Red, 1);
    }
}
