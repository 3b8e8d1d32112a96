use super::{Composite, Surface};
use crate::color::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Rgba },
    FillCircle { x: f32, y: f32, radius: f32, color: Rgba },
    StrokeCircle { x: f32, y: f32, radius: f32, line_width: f32, color: Rgba },
    Polyline { points: Vec<(f32, f32)>, line_width: f32, color: Rgba },
    RadialGradient { x: f32, y: f32, radius: f32, inner: Rgba, outer: Rgba, composite: Composite },
}

/// Surface that remembers every call instead of painting.
pub struct Recorder {
    width: f32,
    height: f32,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for Recorder {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.calls.push(DrawCall::FillCircle { x, y, radius, color });
    }

    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, line_width: f32, color: Rgba) {
        self.calls.push(DrawCall::StrokeCircle { x, y, radius, line_width, color });
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], line_width: f32, color: Rgba) {
        self.calls.push(DrawCall::Polyline { points: points.to_vec(), line_width, color });
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
        self.calls.push(DrawCall::RadialGradient { x, y, radius, inner, outer, composite });
    }
}
