//! Per-frame simulation step
//!
//! Order within a frame: actions, then (unless paused) ship, asteroids,
//! collision and flash, then the background layer, which keeps animating
//! while the menu is open.

use super::collision::{CollisionEvent, resolve};
use super::state::{Action, FrameInput, Simulation};
use crate::clamp_dt;
use crate::menu::MenuCommand;
use crate::settings::Settings;

/// Advance the simulation by one frame.
///
/// `dt` is clamped to [`MAX_FRAME_DT`](crate::consts::MAX_FRAME_DT) before any
/// integrator sees it. Returns the collision resolved this frame, if any.
pub fn tick(sim: &mut Simulation, input: &FrameInput, dt: f32) -> Option<CollisionEvent> {
    let dt = clamp_dt(dt);

    for &action in &input.actions {
        apply_action(sim, action);
    }

    let mut event = None;

    if !sim.is_paused() {
        sim.ship.advance(dt, input.controls(), &sim.bounds);
        // Unwrapped travel, so parallax doesn't jump at the field edge
        sim.camera_offset += (sim.ship.vel * dt).as_dvec2();

        sim.asteroids.advance(dt, &sim.bounds);

        event = resolve(&mut sim.ship, &mut sim.asteroids, &sim.bounds);
        sim.flash.advance(dt);
        if let Some(ref e) = event {
            sim.flash.trigger(e);
        }
    }

    sim.time += dt as f64;
    sim.effects.advance(dt);
    sim.effects.spawn(dt, &sim.bounds, sim.settings.shooting_stars);

    event
}

fn apply_action(sim: &mut Simulation, action: Action) {
    let command = match action {
        Action::Restart => MenuCommand::Restart,
        Action::Quit => MenuCommand::Quit,
        Action::MenuToggle => sim.menu.toggle(),
        Action::MenuUp => {
            sim.menu.up();
            MenuCommand::None
        }
        Action::MenuDown => {
            sim.menu.down();
            MenuCommand::None
        }
        Action::MenuLeft => adjust_settings(sim, false),
        Action::MenuRight => adjust_settings(sim, true),
        Action::MenuSelect => {
            let mut settings = sim.settings;
            let command = sim.menu.select(&mut settings);
            apply_settings(sim, settings);
            command
        }
        Action::ToggleDebugTwinkle => {
            sim.debug_twinkle = !sim.debug_twinkle;
            log::info!(
                "Debug twinkle {}",
                if sim.debug_twinkle { "on" } else { "off" }
            );
            MenuCommand::None
        }
    };

    match command {
        MenuCommand::Restart => {
            sim.menu.close();
            if let Err(e) = sim.reset() {
                // Bounds were validated at construction; reset cannot fail here
                log::error!("Restart failed: {}", e);
            } else {
                log::info!("Restarted");
            }
        }
        MenuCommand::Quit => {
            log::info!("Quit requested");
            sim.quit_requested = true;
        }
        MenuCommand::None | MenuCommand::Resume | MenuCommand::SettingsChanged => {}
    }
}

fn adjust_settings(sim: &mut Simulation, forward: bool) -> MenuCommand {
    let mut settings = sim.settings;
    let command = sim.menu.adjust(&mut settings, forward);
    apply_settings(sim, settings);
    command
}

/// Route menu edits through the public mutators so changes are logged once
fn apply_settings(sim: &mut Simulation, settings: Settings) {
    sim.set_twinkle_preset(settings.twinkle);
    sim.set_shooting_stars(settings.shooting_stars);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::TwinklePreset;
    use crate::sim::asteroid::Asteroid;
    use crate::sim::shape::Shape;
    use crate::sim::transient::TransientEvents;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn sim() -> Simulation {
        Simulation::with_effects(
            FIELD_WIDTH,
            FIELD_HEIGHT,
            Settings::default(),
            TransientEvents::with_rng(Pcg32::seed_from_u64(42)),
        )
        .unwrap()
    }

    fn actions(actions: &[Action]) -> FrameInput {
        FrameInput {
            actions: actions.to_vec(),
            ..Default::default()
        }
    }

    fn square(radius: f32) -> Shape {
        Shape::from_vertices(vec![
            Vec2::new(radius, 0.0),
            Vec2::new(0.0, radius),
            Vec2::new(-radius, 0.0),
            Vec2::new(0.0, -radius),
        ])
    }

    #[test]
    fn test_tick_moves_ship_and_asteroids() {
        let mut s = sim();
        let first = s.asteroids.get(0).unwrap().pos;
        let input = FrameInput {
            thrust: true,
            ..Default::default()
        };
        tick(&mut s, &input, 1.0 / 60.0);
        assert!(s.ship.vel.y < 0.0);
        assert_ne!(s.asteroids.get(0).unwrap().pos, first);
        assert!(s.time > 0.0);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut s = sim();
        s.asteroids.clear();
        s.asteroids.push(Asteroid::new(
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 0.0),
            square(5.0),
        ));

        tick(&mut s, &FrameInput::default(), 2.0);
        let pos = s.asteroids.get(0).unwrap().pos;
        assert!((pos.x - (100.0 + 100.0 * MAX_FRAME_DT)).abs() < 1e-3);
        assert!((s.time - MAX_FRAME_DT as f64).abs() < 1e-6);
    }

    #[test]
    fn test_collision_triggers_flash() {
        let mut s = sim();
        s.asteroids.clear();
        s.asteroids
            .push(Asteroid::new(s.bounds.center(), Vec2::ZERO, square(30.0)));

        let event = tick(&mut s, &FrameInput::default(), 1.0 / 60.0).expect("ship starts inside");
        assert_eq!(event.fragments, 2);
        assert!(s.flash.is_active());
        assert!((s.flash.remaining() - FLASH_DURATION).abs() < 1e-6);

        // Flash decays on later frames
        s.asteroids.clear();
        for _ in 0..60 {
            tick(&mut s, &FrameInput::default(), 1.0 / 60.0);
        }
        assert!(!s.flash.is_active());
    }

    #[test]
    fn test_menu_pauses_gameplay_but_not_background() {
        let mut s = sim();
        tick(&mut s, &actions(&[Action::MenuToggle]), 1.0 / 60.0);
        assert!(s.is_paused());

        let ship = s.ship.clone();
        let rocks: Vec<_> = s.asteroids.iter().cloned().collect();
        let t = s.time;
        let input = FrameInput {
            thrust: true,
            turn_left: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut s, &input, 1.0 / 60.0);
        }
        assert_eq!(s.ship, ship);
        assert_eq!(s.asteroids.as_slice(), rocks.as_slice());
        assert!(s.time > t);

        tick(&mut s, &actions(&[Action::MenuToggle]), 1.0 / 60.0);
        assert!(!s.is_paused());
    }

    #[test]
    fn test_long_session_accumulates_in_f64() {
        let mut s = sim();
        s.time = 1.0e7;
        s.camera_offset = glam::DVec2::new(1.0e9, 0.0);
        s.ship.vel = Vec2::new(120.0, 0.0);
        tick(&mut s, &FrameInput::default(), 1.0 / 60.0);
        // Both increments survive at magnitudes where f32 would drop them
        assert!((s.time - (1.0e7 + 1.0 / 60.0)).abs() < 1e-6);
        assert!(s.camera_offset.x > 1.0e9 + 1.9);
    }

    #[test]
    fn test_restart_action() {
        let mut s = sim();
        s.ship.pos = Vec2::new(5.0, 5.0);
        s.asteroids.clear();
        tick(&mut s, &actions(&[Action::Restart]), 0.0);
        assert_eq!(s.asteroids.len(), INITIAL_ASTEROIDS);
        assert_eq!(s.ship.pos, s.bounds.center());
    }

    #[test]
    fn test_quit_action() {
        let mut s = sim();
        tick(&mut s, &actions(&[Action::Quit]), 0.0);
        assert!(s.quit_requested);
    }

    #[test]
    fn test_menu_edits_settings() {
        let mut s = sim();
        tick(
            &mut s,
            &actions(&[
                Action::MenuToggle,
                Action::MenuDown,
                Action::MenuLeft,
                Action::MenuDown,
                Action::MenuSelect,
            ]),
            0.0,
        );
        assert_eq!(s.settings.twinkle, TwinklePreset::Subtle);
        assert!(!s.settings.shooting_stars);
        assert!(s.is_paused());
    }

    #[test]
    fn test_menu_restart_closes_menu() {
        let mut s = sim();
        s.asteroids.clear();
        tick(
            &mut s,
            &actions(&[Action::MenuToggle, Action::MenuUp, Action::MenuUp, Action::MenuSelect]),
            0.0,
        );
        assert!(!s.is_paused());
        assert_eq!(s.asteroids.len(), INITIAL_ASTEROIDS);
    }

    #[test]
    fn test_debug_twinkle_toggle() {
        let mut s = sim();
        tick(&mut s, &actions(&[Action::ToggleDebugTwinkle]), 0.0);
        assert!(s.debug_twinkle);
        tick(&mut s, &actions(&[Action::ToggleDebugTwinkle]), 0.0);
        assert!(!s.debug_twinkle);
    }

    #[test]
    fn test_disabled_shooting_stars_never_spawn() {
        let mut s = sim();
        s.set_shooting_stars(false);
        for _ in 0..20_000 {
            tick(&mut s, &FrameInput::default(), MAX_FRAME_DT);
            assert!(s.effects.shooting_stars().is_empty());
        }
    }

    #[test]
    fn test_determinism_with_seeded_effects() {
        let mut a = sim();
        let mut b = sim();
        let inputs = [
            FrameInput {
                thrust: true,
                ..Default::default()
            },
            FrameInput {
                turn_right: true,
                thrust: true,
                ..Default::default()
            },
            FrameInput::default(),
        ];
        for _ in 0..100 {
            for input in &inputs {
                tick(&mut a, input, 1.0 / 60.0);
                tick(&mut b, input, 1.0 / 60.0);
            }
        }
        assert_eq!(a.ship, b.ship);
        assert_eq!(a.asteroids.as_slice(), b.asteroids.as_slice());
        assert_eq!(a.effects.sparks(), b.effects.sparks());
    }
}
