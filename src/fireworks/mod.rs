//! The fireworks show: rockets, sparks and flashes advanced in fixed steps
//! and painted back to front.

use crate::color::Rgba;
use crate::random::range;
use crate::surface::Surface;
use crate::timestep::FrameClock;
use fastrand::Rng;

pub mod explosion;
pub mod flash;
pub mod hue;
pub mod launcher;
pub mod rocket;
pub mod spark;

use explosion::Burst;
use flash::Flash;
use hue::HueCursor;
use launcher::Launcher;
use rocket::Rocket;
use spark::Spark;

/// Per reference tick, in units/tick².
pub const GRAVITY: f32 = 0.09;
/// Motion constants are tuned per tick of a 60 Hz frame; `dt * REFERENCE_HZ`
/// converts a step into reference ticks.
pub const REFERENCE_HZ: f32 = 60.0;

const HUE_DRIFT: f32 = 0.2; // degrees per reference tick
const FADE_ALPHA: f32 = 0.30;
const CULL_MARGIN: f32 = 50.0; // sparks this far below the bottom are gone

/// Logical size of the sky.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub launched: u64,
    pub bursts: u64,
    pub steps: u64,
}

pub struct Show {
    rng: Rng,
    viewport: Viewport,
    reduced_motion: bool,
    background: (u8, u8, u8),
    hue: HueCursor,
    launcher: Launcher,
    rockets: Vec<Rocket>,
    sparks: Vec<Spark>,
    flashes: Vec<Flash>,
    stats: Stats,
}

impl Show {
    pub fn new(mut rng: Rng, viewport: Viewport, reduced_motion: bool, background: (u8, u8, u8)) -> Self {
        let hue = HueCursor::new(range(&mut rng, 0.0, 360.0));
        Self {
            rng,
            viewport,
            reduced_motion,
            background,
            hue,
            launcher: Launcher::new(reduced_motion),
            rockets: Vec::new(),
            sparks: Vec::with_capacity(512),
            flashes: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// One host frame: run the steps that are due, then paint once.
    pub fn frame<S: Surface>(&mut self, clock: &mut FrameClock, now: f64, surface: &mut S) -> u32 {
        let steps = clock.frame(now);
        for _ in 0..steps {
            self.update(clock.step());
        }
        self.render(surface);
        steps
    }

    pub fn update(&mut self, dt: f32) {
        self.stats.steps += 1;

        if let Some(rocket) = self.launcher.tick(dt, &mut self.rng, self.viewport) {
            self.rockets.push(rocket);
            self.stats.launched += 1;
        }

        let mut detonations = Vec::new();
        self.rockets.retain_mut(|rocket| match rocket.update(dt) {
            Some(point) => {
                detonations.push(point);
                false
            }
            None => true,
        });

        for (x, y) in detonations {
            self.detonate(x, y);
        }

        let floor = self.viewport.height + CULL_MARGIN;
        let rng = &mut self.rng;
        self.sparks.retain_mut(|spark| {
            spark.update(rng, dt);
            !spark.is_dead() && spark.position().1 <= floor
        });

        self.flashes.retain_mut(|flash| {
            flash.update(dt);
            !flash.is_dead()
        });

        self.hue.advance(HUE_DRIFT * dt * REFERENCE_HZ);
    }

    fn detonate(&mut self, x: f32, y: f32) {
        let burst = Burst::roll(&mut self.rng, self.reduced_motion);
        let report = explosion::explode(
            x,
            y,
            burst,
            &mut self.hue,
            &mut self.rng,
            &mut self.sparks,
            &mut self.flashes,
        );
        self.stats.bursts += 1;
        log::debug!(
            "burst at ({x:.0}, {y:.0}) hue {:.0}: {} sparks, {} ring",
            report.hue,
            report.sparks,
            report.ring
        );
    }

    /// Paints the current state. Reads entity state only.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        let (width, height) = (surface.width(), surface.height());
        surface.fill_rect(0.0, 0.0, width, height, Rgba::from_rgb8(self.background, FADE_ALPHA));

        for flash in &self.flashes {
            flash.draw(surface);
        }
        for rocket in &self.rockets {
            rocket.draw(surface, self.hue.degrees());
        }
        for spark in &self.sparks {
            spark.draw(surface);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn hue(&self) -> f32 {
        self.hue.degrees()
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn flashes(&self) -> &[Flash] {
        &self.flashes
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}
