use super::{GRAVITY, REFERENCE_HZ};
use crate::color::hsl;
use crate::random::{dist, range};
use crate::surface::Surface;
use fastrand::Rng;
use std::collections::VecDeque;

const AIR: f32 = 0.985;
const LIFT: f32 = 0.25; // rockets feel a quarter of spark gravity
const TRAIL_LEN: usize = 6;
const DETONATE_RADIUS: f32 = 12.0;
const LINE_WIDTH: f32 = 1.6;
const HEAD_RADIUS: f32 = 2.0;

pub struct Rocket {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    tx: f32,
    ty: f32,
    trail: VecDeque<(f32, f32)>,
    alive: bool,
}

impl Rocket {
    pub fn new(rng: &mut Rng, sx: f32, sy: f32, tx: f32, ty: f32) -> Self {
        let angle = (ty - sy).atan2(tx - sx);
        let power = range(rng, 8.0, 11.0);
        Self {
            x: sx,
            y: sy,
            vx: angle.cos() * power,
            vy: angle.sin() * power,
            tx,
            ty,
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
            alive: true,
        }
    }

    /// Advances one step. Returns the detonation point on the step the
    /// rocket dies; a dead rocket never reports again.
    pub fn update(&mut self, dt: f32) -> Option<(f32, f32)> {
        if !self.alive {
            return None;
        }

        self.trail.push_back((self.x, self.y));
        if self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }

        let ticks = dt * REFERENCE_HZ;
        let drag = AIR.powf(ticks);
        self.vy += GRAVITY * LIFT * ticks;
        self.vx *= drag;
        self.vy *= drag;

        self.x += self.vx * ticks;
        self.y += self.vy * ticks;

        // Close enough, or started falling
        if dist(self.x, self.y, self.tx, self.ty) < DETONATE_RADIUS || self.vy >= 0.0 {
            self.alive = false;
            return Some((self.x, self.y));
        }
        None
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, hue: f32) {
        let tail = self.trail.front().copied().unwrap_or((self.x, self.y));
        surface.stroke_polyline(&[tail, (self.x, self.y)], LINE_WIDTH, hsl(hue, 1.0, 0.7));
        surface.fill_circle(self.x, self.y, HEAD_RADIUS, hsl(hue, 1.0, 0.6));
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn trail(&self) -> &VecDeque<(f32, f32)> {
        &self.trail
    }
}
