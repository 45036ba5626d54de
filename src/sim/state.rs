//! Simulation state and the types the frame driver passes around
//!
//! Everything mutable for a session lives in [`Simulation`]; there are no
//! statics. The two random domains are kept apart: stars and the initial
//! asteroid field are fixed-seed, transient effects are time-seeded.

use glam::{DVec2, Vec2};

use super::asteroid::AsteroidField;
use super::collision::FlashTimer;
use super::ship::{Ship, ShipControls};
use super::stars::StarField;
use super::transient::TransientEvents;
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::menu::Menu;
use crate::settings::{Settings, TwinklePreset};
use crate::wrap_point;

/// Size of the toroidal play field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    size: Vec2,
}

impl FieldBounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidBounds { width, height });
        }
        Ok(Self {
            size: Vec2::new(width, height),
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Wrap a point into the field on both axes
    #[inline]
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        wrap_point(point, self.size)
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..self.size.x).contains(&point.x) && (0.0..self.size.y).contains(&point.y)
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        }
    }
}

/// Discrete commands from the input/menu layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Restart,
    Quit,
    MenuToggle,
    MenuUp,
    MenuDown,
    MenuLeft,
    MenuRight,
    MenuSelect,
    ToggleDebugTwinkle,
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// One-shot actions, applied in order before integration
    pub actions: Vec<Action>,
}

impl FrameInput {
    pub fn controls(&self) -> ShipControls {
        ShipControls {
            turn_left: self.turn_left,
            turn_right: self.turn_right,
            thrust: self.thrust,
        }
    }
}

/// Complete session state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct Simulation {
    pub bounds: FieldBounds,
    pub ship: Ship,
    pub asteroids: AsteroidField,
    pub flash: FlashTimer,
    pub stars: StarField,
    pub effects: TransientEvents,
    pub settings: Settings,
    pub menu: Menu,
    /// Runtime-only twinkle amplification for tuning the sky
    pub debug_twinkle: bool,
    /// Seconds since start, drives twinkle. Never reset, so kept in f64.
    pub time: f64,
    /// Accumulated ship travel, drives star parallax
    pub camera_offset: DVec2,
    pub quit_requested: bool,
}

impl Simulation {
    /// Session with a clock-seeded effects generator
    pub fn new(width: f32, height: f32, settings: Settings) -> Result<Self> {
        Self::with_effects(width, height, settings, TransientEvents::from_time())
    }

    /// Session with an explicit effects scheduler (tests pass a seeded one)
    pub fn with_effects(
        width: f32,
        height: f32,
        settings: Settings,
        effects: TransientEvents,
    ) -> Result<Self> {
        let bounds = FieldBounds::new(width, height)?;
        let mut sim = Self {
            bounds,
            ship: Ship::centered(&bounds),
            asteroids: AsteroidField::new(),
            flash: FlashTimer::default(),
            stars: StarField::generate(STAR_COUNT, STAR_SEED, &bounds),
            effects,
            settings,
            menu: Menu::default(),
            debug_twinkle: false,
            time: 0.0,
            camera_offset: DVec2::ZERO,
            quit_requested: false,
        };
        sim.reset()?;
        log::info!(
            "Simulation ready: {}x{}, {} stars, settings {:?}",
            width,
            height,
            sim.stars.len(),
            settings
        );
        Ok(sim)
    }

    /// Ship back to the center, fresh asteroid field, no flash
    pub fn reset(&mut self) -> Result<()> {
        self.ship = Ship::centered(&self.bounds);
        self.asteroids.reset(INITIAL_ASTEROIDS, &self.bounds)?;
        self.flash.clear();
        Ok(())
    }

    /// Resize the field. The star set is regenerated for the new area and the
    /// game restarts.
    pub fn set_field_bounds(&mut self, width: f32, height: f32) -> Result<()> {
        self.bounds = FieldBounds::new(width, height)?;
        self.stars = StarField::generate(STAR_COUNT, STAR_SEED, &self.bounds);
        self.effects.clear();
        self.reset()
    }

    /// Gameplay is frozen while the menu is open
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.menu.is_open()
    }

    pub fn set_twinkle_preset(&mut self, preset: TwinklePreset) {
        if self.settings.twinkle != preset {
            log::info!("Twinkle preset: {}", preset.as_str());
            self.settings.twinkle = preset;
        }
    }

    pub fn set_shooting_stars(&mut self, enabled: bool) {
        if self.settings.shooting_stars != enabled {
            log::info!("Shooting stars: {}", if enabled { "on" } else { "off" });
            self.settings.shooting_stars = enabled;
        }
    }

    /// Boost passed to star projection this frame
    pub fn twinkle_boost(&self) -> f32 {
        self.settings.twinkle_boost(self.debug_twinkle)
    }
}
