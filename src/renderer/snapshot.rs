//! Read-only view of a frame for the external renderer

use glam::Vec2;

use crate::consts::SHIP_DRAW_RADIUS;
use crate::menu::MenuItem;
use crate::sim::transient::TRAIL_SAMPLE_COUNT;
use crate::sim::{ProjectedStar, Ship, Simulation};

/// Angle between the nose and each rear corner of the ship triangle
const SHIP_REAR_ANGLE: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkView {
    pub pos: Vec2,
    pub alpha: f32,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStarView {
    pub head: Vec2,
    pub alpha: f32,
    /// Head first, then backward along the trail
    pub trail: [Vec2; TRAIL_SAMPLE_COUNT],
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub label: String,
    pub selected: bool,
}

/// Everything the renderer needs for one frame, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub field_size: Vec2,
    /// Nose, then the two rear corners
    pub ship: [Vec2; 3],
    /// Closed polygons in world coordinates; degenerate asteroids are omitted
    pub asteroids: Vec<Vec<Vec2>>,
    pub stars: Vec<ProjectedStar>,
    pub sparks: Vec<SparkView>,
    pub shooting_stars: Vec<ShootingStarView>,
    /// Collision tint strength, 0 when inactive
    pub flash: f32,
    pub paused: bool,
    /// Rows to draw when the menu is open
    pub menu: Option<Vec<MenuRow>>,
}

/// Ship outline in world coordinates
pub fn ship_triangle(ship: &Ship) -> [Vec2; 3] {
    let nose = ship.heading - std::f32::consts::FRAC_PI_2;
    [nose, nose + SHIP_REAR_ANGLE, nose - SHIP_REAR_ANGLE]
        .map(|a| ship.pos + Vec2::new(a.cos(), a.sin()) * SHIP_DRAW_RADIUS)
}

impl RenderSnapshot {
    pub fn capture(sim: &Simulation) -> Self {
        let asteroids = sim
            .asteroids
            .iter()
            .map(|a| a.world_vertices())
            .filter(|poly| !poly.is_empty())
            .collect();

        let stars = sim
            .stars
            .project_all(sim.camera_offset, sim.time, sim.twinkle_boost(), &sim.bounds);

        let sparks = sim
            .effects
            .sparks()
            .iter()
            .map(|s| SparkView {
                pos: s.pos,
                alpha: s.alpha(),
                size: s.size,
            })
            .collect();

        let shooting_stars = sim
            .effects
            .shooting_stars()
            .iter()
            .map(|s| ShootingStarView {
                head: s.pos,
                alpha: s.alpha(),
                trail: s.trail_points(),
            })
            .collect();

        let menu = sim.menu.is_open().then(|| {
            MenuItem::ALL
                .iter()
                .map(|item| MenuRow {
                    label: item.label(&sim.settings),
                    selected: *item == sim.menu.selected(),
                })
                .collect()
        });

        Self {
            field_size: sim.bounds.size(),
            ship: ship_triangle(&sim.ship),
            asteroids,
            stars,
            sparks,
            shooting_stars,
            flash: sim.flash.intensity(),
            paused: sim.is_paused(),
            menu,
        }
    }
}

impl Simulation {
    /// Capture this frame for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}
