//! Desktop simulator for the dials widgets.
//!
//! Renders a clock and a progress bar in an SDL2 window via
//! `embedded-graphics-simulator`. Both widgets tick from the host clock and
//! are only redrawn when one of them raised the process-wide redraw signal.
//!
//! Settings are read from the TOML file named by `DIALS_CONFIG`, if any:
//!
//! ```toml
//! [clock]
//! utc_offset_minutes = 120
//!
//! [progress]
//! step = 5
//! marquee = { speed = 3, animation = "Bounce" }
//! ```
//!
//! # Key bindings
//!
//! | Key       | Action                                   |
//! |-----------|------------------------------------------|
//! | Space     | Step the progress value                  |
//! | Backspace | Reset the progress value to the minimum  |
//! | M         | Cycle Continuous / Blocks / Marquee      |
//! | B         | Toggle Slide / Bounce marquee            |
//! | O         | Toggle horizontal / vertical bar         |
//! | I         | Toggle inverted fill                     |
//! | T         | Cycle label text mode                    |
//! | D         | Toggle analog / digital clock face       |
//! | F         | Freeze the clock at 03:00:00             |
//! | L         | Resume live time                         |
//! | Q         | Quit                                     |

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{info, warn};
use serde::Deserialize;

use dials_core::canvas::DisplayCanvas;
use dials_core::clock::{Clock, ClockFace, TimeOfDay};
use dials_core::config::{ClockConfig, MarqueeAnimation, ProgressConfig};
use dials_core::progress::{DisplayMode, Orientation, ProgressBar, ProgressResult, TextMode};
use dials_core::redraw::{REDRAW, RedrawSignal};
use dials_core::tick::IntervalTicker;
use dials_core::widget::Widget;

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

const DISPLAY_WIDTH_PX: u32 = 240;
const DISPLAY_HEIGHT_PX: u32 = 140;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 3;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Environment variable holding the optional config file path.
const CONFIG_ENV: &str = "DIALS_CONFIG";

const BACKGROUND: Rgb565 = Rgb565::WHITE;

type SimClock = Clock<fn() -> u64, IntervalTicker, &'static RedrawSignal>;
type SimProgressBar = ProgressBar<IntervalTicker, &'static RedrawSignal>;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct SimulatorConfig {
    clock: ClockConfig,
    progress: ProgressConfig,
}

/// Load the config file, falling back to defaults when it is missing or invalid.
fn load_config() -> SimulatorConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return SimulatorConfig::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Cannot read {}: {}, using defaults", path, e);
            return SimulatorConfig::default();
        }
    };

    match toml::from_str(&text) {
        Ok(config) => {
            info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            warn!("Invalid config {}: {}, using defaults", path, e);
            SimulatorConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

fn system_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

fn clock_bounds() -> Rectangle {
    Rectangle::new(Point::new(10, 20), Size::new(100, 100))
}

fn bar_bounds(orientation: Orientation) -> Rectangle {
    match orientation {
        Orientation::Horizontal => Rectangle::new(Point::new(125, 58), Size::new(100, 23)),
        Orientation::Vertical => Rectangle::new(Point::new(164, 20), Size::new(23, 100)),
    }
}

fn create_clock(config: ClockConfig) -> SimClock {
    Clock::new(
        clock_bounds(),
        config,
        system_time as fn() -> u64,
        IntervalTicker::new(config.tick_interval()),
        &REDRAW,
    )
}

fn create_progress_bar(config: ProgressConfig) -> ProgressResult<SimProgressBar> {
    ProgressBar::new(
        bar_bounds(Orientation::Horizontal),
        config,
        IntervalTicker::new(config.tick_interval()),
        &REDRAW,
    )
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

fn next_display_mode(mode: DisplayMode) -> DisplayMode {
    match mode {
        DisplayMode::Continuous => DisplayMode::Blocks,
        DisplayMode::Blocks => DisplayMode::Marquee,
        DisplayMode::Marquee => DisplayMode::Continuous,
    }
}

fn next_text_mode(mode: TextMode) -> TextMode {
    match mode {
        TextMode::None => TextMode::ValueOverMaximum,
        TextMode::ValueOverMaximum => TextMode::Percentage,
        TextMode::Percentage | TextMode::UserDefined => TextMode::None,
    }
}

/// Apply a key press. Returns `false` when the simulator should quit.
fn handle_key(keycode: Keycode, clock: &mut SimClock, bar: &mut SimProgressBar) -> bool {
    match keycode {
        Keycode::Q | Keycode::Escape => return false,

        Keycode::Space => {
            let value = bar.step();
            info!("Progress value {}", value);
        }
        Keycode::Backspace => {
            if let Err(e) = bar.set_value(bar.minimum()) {
                warn!("Reset failed: {}", e);
            }
        }
        Keycode::M => {
            let mode = next_display_mode(bar.display_mode());
            info!("Display mode {:?}", mode);
            bar.set_display_mode(mode);
        }
        Keycode::B => {
            let animation = match bar.marquee_animation() {
                MarqueeAnimation::Slide => MarqueeAnimation::Bounce,
                MarqueeAnimation::Bounce => MarqueeAnimation::Slide,
            };
            info!("Marquee animation {:?}", animation);
            bar.set_marquee_animation(animation);
        }
        Keycode::O => {
            let orientation = match bar.orientation() {
                Orientation::Horizontal => Orientation::Vertical,
                Orientation::Vertical => Orientation::Horizontal,
            };
            // Resize first so a running marquee restarts on the new track
            bar.set_bounds(bar_bounds(orientation));
            bar.set_orientation(orientation);
        }
        Keycode::I => bar.set_inverted(!bar.is_inverted()),
        Keycode::T => bar.set_text_mode(next_text_mode(bar.text_mode())),

        Keycode::D => {
            let face = match clock.face() {
                ClockFace::Analog => ClockFace::Digital,
                ClockFace::Digital => ClockFace::Analog,
            };
            clock.set_face(face);
        }
        Keycode::F => clock.set_time(TimeOfDay::new(3, 0, 0).unwrap_or(TimeOfDay::MIDNIGHT)),
        Keycode::L => clock.resume_live(),

        _ => {}
    }
    true
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting dials simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Space=Step  M=Mode  B=Bounce  O=Orient  I=Invert  T=Text  D=Face  F=Freeze  L=Live  Q=Quit");

    let config = load_config();
    let mut clock = create_clock(config.clock);
    let bar = create_progress_bar(config.progress).or_else(|e| {
        warn!("Progress config rejected: {}, using defaults", e);
        create_progress_bar(ProgressConfig::default())
    });
    let mut bar = match bar {
        Ok(bar) => bar,
        Err(e) => {
            log::error!("Cannot create progress bar: {}", e);
            return;
        }
    };

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Dials Simulator", &output_settings);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(BACKGROUND);
    window.update(&display);
    let mut needs_redraw = true;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if !handle_key(keycode, &mut clock, &mut bar) {
                        break 'running;
                    }
                }
                _ => {}
            }
        }

        // --- Widget ticks -------------------------------------------------
        let now = embassy_time::Instant::now();
        clock.update(now);
        bar.update(now);

        // --- Render -------------------------------------------------------
        if REDRAW.take_pending() || needs_redraw {
            let _ = display.clear(BACKGROUND);
            let mut canvas = DisplayCanvas::new(&mut display);
            if let Err(e) = clock.draw(&mut canvas) {
                log::error!("Clock draw error: {:?}", e);
            }
            if let Err(e) = bar.draw(&mut canvas) {
                log::error!("Progress draw error: {:?}", e);
            }
            needs_redraw = false;
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
