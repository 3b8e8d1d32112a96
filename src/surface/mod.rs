use crate::color::Rgba;

pub mod canvas;
pub mod terminal;

#[cfg(test)]
pub mod recorder;

pub use canvas::Canvas;
pub use terminal::TerminalPresenter;

/// How a draw call combines with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    /// `dst + a * src * (1 - dst)`: only ever brightens.
    Screen,
}

/// A 2D paintable surface in logical units.
///
/// Logical size is independent of the physical resolution behind it;
/// spawn positions and culling are computed from `width`/`height`.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, line_width: f32, color: Rgba);
    fn stroke_polyline(&mut self, points: &[(f32, f32)], line_width: f32, color: Rgba);
    fn fill_radial_gradient(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        inner: Rgba,
        outer: Rgba,
        composite: Composite,
    );
}
