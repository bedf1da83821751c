//! Hard-edged raster primitives used by the effect drawers.
//!
//! Primitives overwrite pixels with a palette color; there is no
//! anti-aliasing and no blending, so frames stay strictly on-palette. Shapes
//! are clipped to the frame. Bounding boxes are inclusive on both ends.

use crate::frame::Frame;
use crate::palette::PaletteColor;

/// Inclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Square bounding box of a circle of radius `r` centered at `(cx, cy)`.
    pub const fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Center and semi-axes of the inscribed ellipse, in pixel-center space.
    fn ellipse_axes(&self) -> (f64, f64, f64, f64) {
        let cx = (self.x0 + self.x1 + 1) as f64 / 2.0;
        let cy = (self.y0 + self.y1 + 1) as f64 / 2.0;
        let rx = (self.x1 - self.x0 + 1) as f64 / 2.0;
        let ry = (self.y1 - self.y0 + 1) as f64 / 2.0;
        (cx, cy, rx, ry)
    }

    /// Intersect with the frame, returning inclusive pixel ranges.
    fn clip(&self, frame: &Frame) -> Option<(i32, i32, i32, i32)> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(frame.width() as i32 - 1);
        let y1 = self.y1.min(frame.height() as i32 - 1);
        (x0 <= x1 && y0 <= y1).then_some((x0, y0, x1, y1))
    }
}

/// Paint a single pixel.
pub fn point(frame: &mut Frame, x: i32, y: i32, color: PaletteColor) {
    frame.put(x, y, color);
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect(frame: &mut Frame, rect: Rect, color: PaletteColor) {
    if rect.is_empty() {
        return;
    }
    let Some((x0, y0, x1, y1)) = rect.clip(frame) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            frame.put(x, y, color);
        }
    }
}

/// Stroke a straight segment of the given width.
///
/// Width 1 is a Bresenham line. Wider strokes cover every pixel whose
/// center lies within `width / 2` of the segment.
pub fn line(
    frame: &mut Frame,
    from: (i32, i32),
    to: (i32, i32),
    color: PaletteColor,
    width: u32,
) {
    if width == 0 {
        return;
    }
    if width == 1 {
        bresenham(frame, from, to, color);
        return;
    }

    let half = width as f64 / 2.0;
    let pad = half.ceil() as i32 + 1;
    let bounds = Rect::new(
        from.0.min(to.0) - pad,
        from.1.min(to.1) - pad,
        from.0.max(to.0) + pad,
        from.1.max(to.1) + pad,
    );
    let Some((x0, y0, x1, y1)) = bounds.clip(frame) else {
        return;
    };

    let (ax, ay) = (from.0 as f64, from.1 as f64);
    let (bx, by) = (to.0 as f64, to.1 as f64);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if distance_to_segment(x as f64, y as f64, ax, ay, bx, by) <= half {
                frame.put(x, y, color);
            }
        }
    }
}

fn bresenham(frame: &mut Frame, from: (i32, i32), to: (i32, i32), color: PaletteColor) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        frame.put(x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn distance_to_segment(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let (vx, vy) = (bx - ax, by - ay);
    let len_sq = vx * vx + vy * vy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * vx + (py - ay) * vy) / len_sq).clamp(0.0, 1.0)
    };
    let (qx, qy) = (ax + t * vx, ay + t * vy);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

/// Whether pixel `(x, y)` lies inside the ellipse inscribed in `rect`,
/// with both semi-axes reduced by `inset`.
fn inside_ellipse(rect: &Rect, x: i32, y: i32, inset: f64) -> bool {
    let (cx, cy, rx, ry) = rect.ellipse_axes();
    let (rx, ry) = (rx - inset, ry - inset);
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (x as f64 + 0.5 - cx) / rx;
    let dy = (y as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Fill the ellipse inscribed in `rect`.
pub fn fill_ellipse(frame: &mut Frame, rect: Rect, color: PaletteColor) {
    if rect.is_empty() {
        return;
    }
    let Some((x0, y0, x1, y1)) = rect.clip(frame) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if inside_ellipse(&rect, x, y, 0.0) {
                frame.put(x, y, color);
            }
        }
    }
}

/// Stroke the outline of the ellipse inscribed in `rect`, `width` pixels
/// thick measured inward from the bounding box.
pub fn stroke_ellipse(frame: &mut Frame, rect: Rect, color: PaletteColor, width: u32) {
    stroke_ring(frame, rect, color, width, |_| true);
}

/// Stroke part of an ellipse outline between two angles in degrees.
///
/// Angles follow screen orientation: 0° points right and angles increase
/// clockwise (y grows downward). The sweep runs from `start` to `end`.
pub fn arc(frame: &mut Frame, rect: Rect, start: f64, end: f64, color: PaletteColor, width: u32) {
    let (cx, cy, _, _) = rect.ellipse_axes();
    let span = end - start;
    stroke_ring(frame, rect, color, width, |(x, y)| {
        if span >= 360.0 {
            return true;
        }
        let angle = (y as f64 + 0.5 - cy).atan2(x as f64 + 0.5 - cx).to_degrees();
        (angle - start).rem_euclid(360.0) <= span
    });
}

fn stroke_ring<F>(frame: &mut Frame, rect: Rect, color: PaletteColor, width: u32, keep: F)
where
    F: Fn((i32, i32)) -> bool,
{
    if rect.is_empty() || width == 0 {
        return;
    }
    let Some((x0, y0, x1, y1)) = rect.clip(frame) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            if inside_ellipse(&rect, x, y, 0.0)
                && !inside_ellipse(&rect, x, y, width as f64)
                && keep((x, y))
            {
                frame.put(x, y, color);
            }
        }
    }
}
