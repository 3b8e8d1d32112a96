use super::{Composite, Surface};
use crate::color::Rgba;

/// Below this radius (in physical pixels) a circle covers exactly the pixel
/// that contains its center.
const POINT_RADIUS: f32 = 0.75;

/// Software raster surface.
///
/// Stores physical pixels as RGB floats; draw calls arrive in logical units
/// and are divided by `scale` on the way in.
pub struct Canvas {
    width: usize,
    height: usize,
    scale: f32,
    pixels: Vec<[f32; 3]>,
    stroke_buf: Vec<usize>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
            pixels: vec![[0.0; 3]; width * height],
            stroke_buf: Vec::with_capacity(64),
        }
    }

    /// Physical size changed; contents are reset to `background`.
    pub fn resize(&mut self, width: usize, height: usize, background: Rgba) {
        self.width = width;
        self.height = height;
        self.pixels = vec![[0.0; 3]; width * height];
        self.clear(background);
    }

    /// Opaque fill of the whole buffer, ignoring `color.a`.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill([color.r, color.g, color.b]);
    }

    pub fn pixel_width(&self) -> usize {
        self.width
    }

    pub fn pixel_height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let [r, g, b] = self.pixels[y * self.width + x];
        (to_u8(r), to_u8(g), to_u8(b))
    }

    fn index(&self, px: i64, py: i64) -> Option<usize> {
        if px < 0 || py < 0 || px >= self.width as i64 || py >= self.height as i64 {
            return None;
        }
        Some(py as usize * self.width + px as usize)
    }

    fn blend(&mut self, idx: usize, color: Rgba, coverage: f32, composite: Composite) {
        let a = color.a * coverage;
        if a <= 0.0 {
            return;
        }
        let dst = &mut self.pixels[idx];
        let src = [color.r, color.g, color.b];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = match composite {
                Composite::SourceOver => *d + (s - *d) * a,
                Composite::Screen => *d + a * s * (1.0 - *d),
            };
        }
    }

    /// Pixel bounding box of a logical disc, clipped to the buffer.
    fn disc_bounds(&self, cx: f32, cy: f32, r: f32) -> (i64, i64, i64, i64) {
        let x0 = ((cx - r).floor() as i64).max(0);
        let y0 = ((cy - r).floor() as i64).max(0);
        let x1 = ((cx + r).ceil() as i64).min(self.width as i64 - 1);
        let y1 = ((cy + r).ceil() as i64).min(self.height as i64 - 1);
        (x0, y0, x1, y1)
    }

    fn stamp(&mut self, x: f32, y: f32, reach: i64) {
        let (px, py) = (x.floor() as i64, y.floor() as i64);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if let Some(idx) = self.index(px + dx, py + dy) {
                    self.stroke_buf.push(idx);
                }
            }
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> f32 {
        self.width as f32 * self.scale
    }

    fn height(&self) -> f32 {
        self.height as f32 * self.scale
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let (x0, y0) = (x / self.scale, y / self.scale);
        let (x1, y1) = ((x + w) / self.scale, (y + h) / self.scale);
        let px0 = (x0.floor() as i64).max(0);
        let py0 = (y0.floor() as i64).max(0);
        let px1 = (x1.ceil() as i64).min(self.width as i64);
        let py1 = (y1.ceil() as i64).min(self.height as i64);

        for py in py0..py1 {
            let center_y = py as f32 + 0.5;
            if center_y < y0 || center_y >= y1 {
                continue;
            }
            for px in px0..px1 {
                let center_x = px as f32 + 0.5;
                if center_x < x0 || center_x >= x1 {
                    continue;
                }
                let idx = py as usize * self.width + px as usize;
                self.blend(idx, color, 1.0, Composite::SourceOver);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        let (cx, cy, r) = (x / self.scale, y / self.scale, radius / self.scale);

        if r < POINT_RADIUS {
            if let Some(idx) = self.index(cx.floor() as i64, cy.floor() as i64) {
                self.blend(idx, color, 1.0, Composite::SourceOver);
            }
            return;
        }

        let (x0, y0, x1, y1) = self.disc_bounds(cx, cy, r);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let d = (px as f32 + 0.5 - cx).hypot(py as f32 + 0.5 - cy);
                let coverage = (r - d + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let idx = py as usize * self.width + px as usize;
                    self.blend(idx, color, coverage, Composite::SourceOver);
                }
            }
        }
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, line_width: f32, color: Rgba) {
        let (cx, cy, r) = (x / self.scale, y / self.scale, radius / self.scale);
        let half = (line_width / self.scale).max(1.0) / 2.0;

        let (x0, y0, x1, y1) = self.disc_bounds(cx, cy, r + half + 1.0);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let d = (px as f32 + 0.5 - cx).hypot(py as f32 + 0.5 - cy);
                let coverage = (half + 0.5 - (d - r).abs()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    let idx = py as usize * self.width + px as usize;
                    self.blend(idx, color, coverage, Composite::SourceOver);
                }
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], line_width: f32, color: Rgba) {
        let Some(&(first_x, first_y)) = points.first() else {
            return;
        };
        let reach = ((line_width / self.scale - 1.0) / 2.0).max(0.0).round() as i64;

        self.stroke_buf.clear();
        self.stamp(first_x / self.scale, first_y / self.scale, reach);

        for pair in points.windows(2) {
            let (ax, ay) = (pair[0].0 / self.scale, pair[0].1 / self.scale);
            let (bx, by) = (pair[1].0 / self.scale, pair[1].1 / self.scale);
            // Half-pixel steps so no covered pixel is skipped
            let steps = ((bx - ax).hypot(by - ay) * 2.0).ceil().max(1.0) as usize;
            for s in 1..=steps {
                let t = s as f32 / steps as f32;
                self.stamp(ax + (bx - ax) * t, ay + (by - ay) * t, reach);
            }
        }

        let mut covered = std::mem::take(&mut self.stroke_buf);
        covered.sort_unstable();
        covered.dedup();
        for &idx in &covered {
            self.blend(idx, color, 1.0, Composite::SourceOver);
        }
        self.stroke_buf = covered;
    }

    fn fill_radial_gradient(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
        composite: Composite,
    ) {
        let (cx, cy, r) = (x / self.scale, y / self.scale, radius / self.scale);
        if r <= 0.0 {
            return;
        }

        let (x0, y0, x1, y1) = self.disc_bounds(cx, cy, r);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let d = (px as f32 + 0.5 - cx).hypot(py as f32 + 0.5 - cy);
                if d > r {
                    continue;
                }
                let color = inner.lerp(outer, d / r);
                let idx = py as usize * self.width + px as usize;
                self.blend(idx, color, 1.0, composite);
            }
        }
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
