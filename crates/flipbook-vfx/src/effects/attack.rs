//! Melee attack trails: slashes, spin, uplift and ground slam.

use super::{polar, FrameContext};
use crate::palette::PaletteColor;
use crate::raster::{self, Rect};

/// Frame on which the second arc of the cross slash appears.
const CROSS_SECOND_ARC_FRAME: u32 = 3;

/// Arc length of each cross-slash stroke, in degrees.
const CROSS_ARC_SPAN: f64 = 40.0;

pub(super) fn slash_diagonal(ctx: &mut FrameContext) {
    let (w, h, t) = (ctx.w as f64, ctx.h as f64, ctx.t);
    let x0 = (w * 0.1 + t * (w * 0.7)) as i32;
    let y0 = (h * 0.8 - t * (h * 0.7)) as i32;
    let (x1, y1) = (x0 + 12, y0 + 12);

    let f = &mut ctx.frame;
    raster::line(f, (x0, y0), (x1, y1), PaletteColor::Black, 3);
    raster::line(f, (x0, y0), (x1, y1), PaletteColor::Cyan, 5);
    raster::line(f, (x0 - 2, y0 + 2), (x1 - 2, y1 + 2), PaletteColor::Purple, 6);
}

pub(super) fn slash_cross(ctx: &mut FrameContext) {
    let r = (ctx.min_side() as f64 * 0.5) as i32;
    let bbox = Rect::around(ctx.cx, ctx.cy, r);

    let start = -90.0 + ctx.t * 90.0;
    raster::arc(&mut ctx.frame, bbox, start, start + CROSS_ARC_SPAN, PaletteColor::Black, 3);
    raster::arc(&mut ctx.frame, bbox, start, start + CROSS_ARC_SPAN, PaletteColor::Cyan, 5);

    if ctx.index >= CROSS_SECOND_ARC_FRAME {
        // index < count, so count > CROSS_SECOND_ARC_FRAME here.
        let t2 = (ctx.index - CROSS_SECOND_ARC_FRAME) as f64
            / (ctx.count - CROSS_SECOND_ARC_FRAME) as f64;
        let start = 90.0 - t2 * 90.0;
        raster::arc(&mut ctx.frame, bbox, start, start + CROSS_ARC_SPAN, PaletteColor::Black, 3);
        raster::arc(&mut ctx.frame, bbox, start, start + CROSS_ARC_SPAN, PaletteColor::Purple, 5);
    }
}

pub(super) fn slash_spin(ctx: &mut FrameContext) {
    let radius = (ctx.min_side() as f64 * 0.35) as i32;
    let lead = ctx.t * 360.0;

    for i in 0..6 {
        let r = radius as f64;
        let (x, y) = polar(ctx.cx, ctx.cy, lead - i as f64 * 6.0, r, r);
        raster::fill_ellipse(&mut ctx.frame, Rect::around(x, y, 3), PaletteColor::Black);
    }
    for i in 0..4 {
        let r = (radius + 4) as f64;
        let (x, y) = polar(ctx.cx, ctx.cy, lead - i as f64 * 8.0, r, r);
        raster::stroke_ellipse(&mut ctx.frame, Rect::around(x, y, 5), PaletteColor::Cyan, 1);
    }
}

pub(super) fn slash_uplift(ctx: &mut FrameContext) {
    let (h, t) = (ctx.h as f64, ctx.t);
    let x0 = ctx.cx - 30;
    let y0 = (h * 0.85 - t * h * 0.6) as i32;
    let x1 = ctx.cx + 30;
    let y1 = y0 - 10;

    raster::line(&mut ctx.frame, (x0, y0), (x1, y1), PaletteColor::Black, 3);
    raster::line(&mut ctx.frame, (x0, y0), (x1, y1), PaletteColor::Cyan, 5);

    // Apex ring on the second-to-last frame.
    if ctx.count - ctx.index == 2 {
        let ring = Rect::new(ctx.cx - 8, y1 - 8, ctx.cx + 8, y1 + 8);
        raster::stroke_ellipse(&mut ctx.frame, ring, PaletteColor::Purple, 2);
    }
}

pub(super) fn slam_ground(ctx: &mut FrameContext) {
    let (h, t) = (ctx.h as f64, ctx.t);
    let cx = ctx.cx;
    let cy = (h * 0.6) as i32;
    let impact = ctx.count / 2;

    if ctx.index < impact {
        let y = (h * 0.1 + t * h * 0.8) as i32;
        raster::line(&mut ctx.frame, (cx, y - 20), (cx, y + 20), PaletteColor::Black, 4);
        raster::line(&mut ctx.frame, (cx, y - 20), (cx, y + 20), PaletteColor::Red, 6);
        return;
    }

    let reach = (10 + (ctx.index - impact) as i64 * 4).min(ctx.offscreen_reach()) as f64;
    for i in 0..8 {
        let (x, y) = polar(cx, cy, i as f64 * 45.0, reach, reach);
        raster::line(&mut ctx.frame, (cx, cy), (x, y), PaletteColor::Black, 3);
        raster::line(&mut ctx.frame, (cx, cy), (x, y), PaletteColor::Gold, 2);
    }
}
