use super::Viewport;
use super::rocket::Rocket;
use crate::random::range;
use fastrand::Rng;

const PERIOD: f32 = 0.9;
const REDUCED_PERIOD: f32 = 1.6;
const BELOW_EDGE: f32 = 10.0;

/// Fires one rocket every period.
pub struct Launcher {
    timer: f32,
    period: f32,
}

impl Launcher {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            timer: 0.0,
            period: if reduced_motion { REDUCED_PERIOD } else { PERIOD },
        }
    }

    pub fn tick(&mut self, dt: f32, rng: &mut Rng, viewport: Viewport) -> Option<Rocket> {
        self.timer += dt;
        if self.timer <= self.period {
            return None;
        }
        self.timer = 0.0;
        Some(launch(rng, viewport))
    }

    pub fn period(&self) -> f32 {
        self.period
    }
}

/// From just below the bottom edge toward the upper part of the sky.
fn launch(rng: &mut Rng, Viewport { width: w, height: h }: Viewport) -> Rocket {
    let sx = range(rng, w * 0.2, w * 0.8);
    let sy = h + BELOW_EDGE;
    let tx = range(rng, w * 0.15, w * 0.85);
    let ty = range(rng, h * 0.15, h * 0.45);
    log::debug!("launch from ({sx:.0}, {sy:.0}) toward ({tx:.0}, {ty:.0})");
    Rocket::new(rng, sx, sy, tx, ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / 120.0;
    const VIEW: Viewport = Viewport { width: 800.0, height: 600.0 };

    fn launches_in(launcher: &mut Launcher, rng: &mut Rng, seconds: f32) -> Vec<Rocket> {
        let steps = (seconds / STEP).round() as usize;
        (0..steps).filter_map(|_| launcher.tick(STEP, rng, VIEW)).collect()
    }

    #[test]
    fn normal_cadence() {
        let mut rng = Rng::with_seed(30);
        let mut launcher = Launcher::new(false);
        assert!(launches_in(&mut launcher, &mut rng, 0.85).is_empty());
        let mut launcher = Launcher::new(false);
        // ~0.9 s plus one step per launch
        assert_eq!(launches_in(&mut launcher, &mut rng, 9.2).len(), 10);
    }

    #[test]
    fn reduced_cadence() {
        let mut rng = Rng::with_seed(31);
        let mut launcher = Launcher::new(true);
        assert_eq!(launcher.period(), REDUCED_PERIOD);
        assert_eq!(launches_in(&mut launcher, &mut rng, 10.0).len(), 6);
    }

    #[test]
    fn one_rocket_per_tick_even_after_long_gap() {
        let mut rng = Rng::with_seed(32);
        let mut launcher = Launcher::new(false);
        assert!(launcher.tick(5.0, &mut rng, VIEW).is_some());
        assert!(launcher.tick(STEP, &mut rng, VIEW).is_none());
    }

    #[test]
    fn rockets_start_low_and_aim_high() {
        let mut rng = Rng::with_seed(33);
        for _ in 0..500 {
            let rocket = launch(&mut rng, VIEW);
            let (x, y) = rocket.position();
            assert!((160.0..640.0).contains(&x));
            assert_eq!(y, 610.0);
            // Heading up and inside the sideways target band
            let (vx, vy) = rocket.velocity();
            assert!(vy < 0.0);
            let t = (y - 0.45 * 600.0) / -vy;
            let reach = x + vx * t;
            assert!(reach > 0.0 && reach < 800.0);
        }
    }
}
