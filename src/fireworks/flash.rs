use crate::color::{hsla, Rgba};
use crate::surface::{Composite, Surface};

const START_RADIUS: f32 = 40.0;
const START_ALPHA: f32 = 0.45;
const GROWTH: f32 = 900.0; // units per second
const HALF_LIFE: f32 = 0.5; // seconds
const CUTOFF: f32 = 0.02;

/// Short-lived bloom behind a burst, painted with screen blending.
pub struct Flash {
    x: f32,
    y: f32,
    hue: f32,
    radius: f32,
    alpha: f32,
}

impl Flash {
    pub fn new(x: f32, y: f32, hue: f32) -> Self {
        Self {
            x,
            y,
            hue,
            radius: START_RADIUS,
            alpha: START_ALPHA,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.radius += GROWTH * dt;
        self.alpha *= 0.5f32.powf(dt / HALF_LIFE);
        if self.alpha < CUTOFF {
            self.alpha = 0.0;
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if self.alpha <= 0.0 {
            return;
        }
        let center = hsla(self.hue, 1.0, 0.7, self.alpha);
        surface.fill_radial_gradient(
            self.x,
            self.y,
            self.radius,
            center,
            Rgba::TRANSPARENT,
            Composite::Screen,
        );
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
