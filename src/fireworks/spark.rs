use super::{GRAVITY, REFERENCE_HZ};
use crate::color::hsla;
use crate::random::{chance, range};
use crate::surface::Surface;
use fastrand::Rng;
use std::collections::VecDeque;
use std::f32::consts::TAU;

const AIR: f32 = 0.96;
const TRAIL_LEN: usize = 7;
const HUE_JITTER: f32 = 14.0;
const FLICKER_CHANCE: f32 = 0.25;
const GLOW_CHANCE: f32 = 0.4;
const FLICKER_FLOOR: f32 = 0.65;
const TRAIL_ALPHA: f32 = 0.35;
const TRAIL_WIDTH: f32 = 1.1;

pub struct Spark {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    hue: f32,
    age: f32,
    life: f32,
    alpha: f32,
    base_alpha: f32,
    size: f32,
    trail: VecDeque<(f32, f32)>, // kept contiguous for drawing
    flicker: bool, // opacity twinkles
    glow: bool,    // lighter head
}

impl Spark {
    /// A spark flying off in a random direction at roughly `speed`.
    pub fn new(rng: &mut Rng, x: f32, y: f32, hue: f32, speed: f32, alpha: f32) -> Self {
        let angle = range(rng, 0.0, TAU);
        let speed = speed * range(rng, 0.5, 1.2);
        Self {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            life: range(rng, 0.9, 1.4),
            age: 0.0,
            alpha,
            base_alpha: alpha,
            hue: (hue + range(rng, -HUE_JITTER, HUE_JITTER)).rem_euclid(360.0),
            size: range(rng, 1.1, 2.2),
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
            flicker: chance(rng, FLICKER_CHANCE),
            glow: chance(rng, GLOW_CHANCE),
        }
    }

    /// Replaces the random heading with an exact one.
    pub fn aimed(mut self, angle: f32, speed: f32) -> Self {
        self.vx = angle.cos() * speed;
        self.vy = angle.sin() * speed;
        self
    }

    pub fn update(&mut self, rng: &mut Rng, dt: f32) {
        self.age += dt;
        if self.age >= self.life {
            self.alpha = 0.0;
            return;
        }

        self.trail.push_back((self.x, self.y));
        if self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }
        self.trail.make_contiguous();

        let ticks = dt * REFERENCE_HZ;
        let drag = AIR.powf(ticks);
        self.vy += GRAVITY * ticks;
        self.vx *= drag;
        self.vy *= drag;

        self.x += self.vx * ticks;
        self.y += self.vy * ticks;

        let twinkle = if self.flicker { range(rng, FLICKER_FLOOR, 1.0) } else { 1.0 };
        self.alpha = self.fade_ceiling() * twinkle;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if self.alpha <= 0.0 {
            return;
        }

        if self.trail.len() > 1 {
            let color = hsla(self.hue, 1.0, 0.6, self.alpha * TRAIL_ALPHA);
            let (points, _) = self.trail.as_slices();
            surface.stroke_polyline(points, TRAIL_WIDTH, color);
        }

        let lightness = if self.glow { 0.7 } else { 0.55 };
        surface.fill_circle(self.x, self.y, self.size, hsla(self.hue, 1.0, lightness, self.alpha));
    }

    /// Opacity before flicker: linear fade from `base_alpha` to zero over the lifetime.
    pub fn fade_ceiling(&self) -> f32 {
        (self.base_alpha * (1.0 - self.age / self.life)).max(0.0)
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn base_alpha(&self) -> f32 {
        self.base_alpha
    }

    pub fn life(&self) -> f32 {
        self.life
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn flickers(&self) -> bool {
        self.flicker
    }

    pub fn glows(&self) -> bool {
        self.glow
    }
}
