use fastrand::Rng;
use skyburst::color::Rgba;
use skyburst::fireworks::{Show, Viewport};
use skyburst::surface::{Canvas, Surface, TerminalPresenter};
use skyburst::timestep::{FrameClock, MAX_DELTA, STEP};

const BG: (u8, u8, u8) = (2, 4, 10);

fn setup(seed: u64, reduced_motion: bool) -> (Show, Canvas) {
    let mut canvas = Canvas::new(100, 60, 8.0);
    canvas.clear(Rgba::from_rgb8(BG, 1.0));
    let viewport = Viewport { width: canvas.width(), height: canvas.height() };
    (Show::new(Rng::with_seed(seed), viewport, reduced_motion, BG), canvas)
}

fn brightest(canvas: &Canvas) -> u8 {
    let mut max = 0;
    for y in 0..canvas.pixel_height() {
        for x in 0..canvas.pixel_width() {
            let (r, g, b) = canvas.pixel(x, y);
            max = max.max(r).max(g).max(b);
        }
    }
    max
}

#[test]
fn sixty_hz_host_lights_up_the_sky() {
    let (mut show, mut canvas) = setup(1, false);
    let mut clock = FrameClock::new(0.0);
    let mut lit_frames = 0;

    for frame in 1..=600 {
        show.frame(&mut clock, frame as f64 / 60.0, &mut canvas);
        if brightest(&canvas) > 60 {
            lit_frames += 1;
        }
    }

    let stats = show.stats();
    assert!((1199..=1200).contains(&stats.steps), "{} steps", stats.steps);
    assert!(stats.bursts >= 6, "{} bursts", stats.bursts);
    assert!(lit_frames > 300, "only {lit_frames} lit frames");
}

#[test]
fn stalled_host_catches_up_slowly() {
    let (mut show, mut canvas) = setup(2, false);
    let mut clock = FrameClock::new(0.0);
    let max_steps = (MAX_DELTA / STEP).round() as u32;

    // Five frames, each a full second apart
    for frame in 1..=5 {
        let steps = show.frame(&mut clock, frame as f64, &mut canvas);
        assert!(steps <= max_steps);
    }
    assert!(show.stats().steps <= 5 * max_steps as u64);
    assert_eq!(show.stats().launched, 0);
}

#[test]
fn quiet_sky_fades_to_background() {
    let (show, mut canvas) = setup(3, true);
    canvas.clear(Rgba::from_rgb8((255, 255, 255), 1.0));
    for _ in 0..40 {
        show.render(&mut canvas);
    }
    assert_eq!(canvas.pixel(50, 30), BG);
}

#[test]
fn presents_a_full_frame() {
    let (mut show, mut canvas) = setup(4, false);
    let mut clock = FrameClock::new(0.0);
    for frame in 1..=180 {
        show.frame(&mut clock, frame as f64 / 60.0, &mut canvas);
    }

    let mut presenter = TerminalPresenter::new(100, 30);
    let mut out = Vec::new();
    presenter.present(&canvas, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('▄').count(), 100 * 30);
    assert_eq!(text.matches("\r\n").count(), 29);
}
