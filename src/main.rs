//! Starboy headless runner
//!
//! Window, input and rasterizer live in the host application. This binary
//! drives the core with scripted input at 60 Hz and logs what happens, which
//! is handy for tuning and for eyeballing the log output.
//!
//! Usage: `starboy [frames]`. Persisted settings JSON may be passed in the
//! `STARBOY_SETTINGS` environment variable, and `STARBOY_TWINKLE` (a preset
//! name or index) overrides the stored twinkle preset.

use starboy::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use starboy::renderer::FrameGeometry;
use starboy::sim::{Action, FrameInput, Simulation, tick};
use starboy::{Result, Settings};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u32 = 1800;

/// Session holding the simulation and frame bookkeeping
struct Game {
    sim: Simulation,
    frame: u32,
    collisions: u32,
}

impl Game {
    fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            sim: Simulation::new(FIELD_WIDTH, FIELD_HEIGHT, settings)?,
            frame: 0,
            collisions: 0,
        })
    }

    /// Scripted pilot: thrust in bursts, sweep the heading, open the menu once
    fn scripted_input(&self) -> FrameInput {
        let f = self.frame;
        let mut input = FrameInput {
            thrust: f % 120 < 45,
            turn_left: (f / 240) % 2 == 1 && f % 60 < 20,
            turn_right: (f / 240) % 2 == 0 && f % 60 < 10,
            actions: Vec::new(),
        };
        match f {
            900 => input.actions.push(Action::MenuToggle),
            905 => input.actions.push(Action::MenuDown),
            910 => input.actions.push(Action::MenuRight),
            960 => input.actions.push(Action::MenuToggle),
            1200 => input.actions.push(Action::ToggleDebugTwinkle),
            1500 => input.actions.push(Action::Restart),
            _ => {}
        }
        input
    }

    fn update(&mut self) {
        let input = self.scripted_input();
        if let Some(event) = tick(&mut self.sim, &input, FRAME_DT) {
            self.collisions += 1;
            log::debug!(
                "Frame {}: flash {:.1}s, {} asteroids left",
                self.frame,
                event.flash_duration,
                self.sim.asteroids.len()
            );
        }
        self.frame += 1;
    }

    /// Stand-in for the renderer: build geometry and report its size
    fn render(&self) -> (usize, usize) {
        let geometry = FrameGeometry::build(&self.sim.snapshot());
        (geometry.lines.len(), geometry.triangles.len())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Starboy (headless) starting...");

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let stored = std::env::var("STARBOY_SETTINGS").ok();
    let twinkle = std::env::var("STARBOY_TWINKLE").ok();
    let settings =
        Settings::load_or_default(stored.as_deref()).with_twinkle_override(twinkle.as_deref());

    let mut game = match Game::new(settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    while game.frame < frames && !game.sim.quit_requested {
        game.update();
        if game.frame % 300 == 0 {
            let (lines, triangles) = game.render();
            log::info!(
                "t={:.1}s asteroids={} sparks={} shooting_stars={} lines={} tris={}",
                game.sim.time,
                game.sim.asteroids.len(),
                game.sim.effects.sparks().len(),
                game.sim.effects.shooting_stars().len(),
                lines,
                triangles
            );
        }
    }

    log::info!(
        "Done after {} frames: {} collisions, {} asteroids, settings {}",
        game.frame,
        game.collisions,
        game.sim.asteroids.len(),
        game.sim.settings.to_json()
    );
}

// The core is embedded by the web host directly; there is no wasm runner.
#[cfg(target_arch = "wasm32")]
fn main() {}
