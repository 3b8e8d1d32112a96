use clap::Parser;
use crossterm::{
    cursor::{Hide, Show as ShowCursor},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use skyburst::color::Rgba;
use skyburst::config::Args;
use skyburst::fireworks::{Show, Viewport};
use skyburst::surface::{Canvas, Surface, TerminalPresenter};
use skyburst::timestep::FrameClock;
use skyburst::{Error, Result};

/// Raw mode plus alternate screen; undone on drop, including on error paths.
struct TerminalSession;

impl TerminalSession {
    fn enter<W: Write>(out: &mut W) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let session = TerminalSession;
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), ShowCursor, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.default_log_filter()));
    if let Some(path) = &args.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.try_init()?;
    Ok(())
}

fn is_exit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn viewport_of(canvas: &Canvas) -> Viewport {
    Viewport {
        width: canvas.width(),
        height: canvas.height(),
    }
}

fn run(args: &Args) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Err(Error::ViewportTooSmall { cols, rows });
    }

    let background = args.background();
    let backdrop = Rgba::from_rgb8(background, 1.0);
    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));

    let mut canvas = Canvas::new(cols as usize, rows as usize * 2, args.scale);
    canvas.clear(backdrop);
    let mut presenter = TerminalPresenter::new(cols as usize, rows as usize);
    let mut show = Show::new(
        fastrand::Rng::with_seed(seed),
        viewport_of(&canvas),
        args.reduced_motion,
        background,
    );

    log::info!(
        "starting: {cols}x{rows} cells, scale {}, sky {:.0}x{:.0}, seed {seed}, reduced motion {}",
        args.scale,
        canvas.width(),
        canvas.height(),
        args.reduced_motion
    );

    let mut out = BufWriter::with_capacity(1024 * 64, stdout());
    let session = TerminalSession::enter(&mut out)?;

    let frame_budget = args.fps.map(|fps| Duration::from_secs_f64(1.0 / fps as f64));
    let start = Instant::now();
    let mut clock = FrameClock::new(0.0);
    let mut frames: u64 = 0;

    loop {
        let frame_start = Instant::now();

        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) if is_exit(&key) => break,
                Event::Resize(cols, rows) => {
                    canvas.resize(cols as usize, rows as usize * 2, backdrop);
                    show.resize(viewport_of(&canvas));
                    execute!(out, Clear(ClearType::All))?;
                    log::debug!("resized to {cols}x{rows} cells, sky {:?}", show.viewport());
                }
                _ => {}
            }
        }

        let now = start.elapsed().as_secs_f64();
        show.frame(&mut clock, now, &mut canvas);
        if canvas.pixel_width() > 0 && canvas.pixel_height() > 0 {
            presenter.present(&canvas, &mut out)?;
        }
        frames += 1;

        if let Some(budget) = frame_budget {
            let spent = frame_start.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }
    }

    drop(session);

    let stats = show.stats();
    log::info!(
        "stopped after {frames} frames, {} steps: {} rockets launched, {} bursts",
        stats.steps,
        stats.launched,
        stats.bursts
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("skyburst: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("skyburst: {e}");
            ExitCode::FAILURE
        }
    }
}
