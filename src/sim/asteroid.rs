//! Asteroids and the field that owns them

use glam::Vec2;

use super::shape::{Shape, generate_shape, split};
use super::state::FieldBounds;
use crate::consts::*;
use crate::error::Result;

/// A single drifting rock
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, shape: Shape) -> Self {
        Self { pos, vel, shape }
    }

    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.shape.collision_radius
    }

    /// Outline in world coordinates (empty for degenerate shapes)
    pub fn world_vertices(&self) -> Vec<Vec2> {
        if self.shape.is_degenerate() {
            return Vec::new();
        }
        self.shape.vertices.iter().map(|&v| v + self.pos).collect()
    }
}

/// Owns the live asteroid set. All inserts and removals go through here.
#[derive(Debug, Clone, Default)]
pub struct AsteroidField {
    asteroids: Vec<Asteroid>,
}

impl AsteroidField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and lay out `count` fresh asteroids on the starting grid
    pub fn reset(&mut self, count: usize, bounds: &FieldBounds) -> Result<()> {
        self.asteroids.clear();
        self.asteroids.reserve(count);

        for i in 0..count {
            let index = i as u32;
            let radius_base = ASTEROID_RADIUS_BASE + (i % 4) as f32 * ASTEROID_RADIUS_STEP;
            let shape = generate_shape(index, ASTEROID_VERTEX_BASE, radius_base)?;

            let grid = Vec2::new(
                (i + 1) as f32 * ASTEROID_GRID_SPACING_X,
                ASTEROID_GRID_TOP + (i % 3) as f32 * ASTEROID_GRID_SPACING_Y,
            );
            let vel = if i % 2 == 0 {
                ASTEROID_DRIFT_EVEN
            } else {
                ASTEROID_DRIFT_ODD
            };

            self.asteroids
                .push(Asteroid::new(bounds.wrap(grid), vel, shape));
        }

        log::info!(
            "Asteroid field reset: {} asteroids in {}x{}",
            count,
            bounds.width(),
            bounds.height()
        );
        Ok(())
    }

    /// Integrate every asteroid and wrap it back into the field
    pub fn advance(&mut self, dt: f32, bounds: &FieldBounds) {
        for asteroid in &mut self.asteroids {
            asteroid.pos = bounds.wrap(asteroid.pos + asteroid.vel * dt);
        }
    }

    /// Remove the asteroid at `index` and append its fragments, if any.
    ///
    /// Returns how many fragments were added (0 or 2). Out-of-range indices
    /// are ignored.
    pub fn remove_and_split(&mut self, index: usize, bounds: &FieldBounds) -> usize {
        if index >= self.asteroids.len() {
            log::warn!(
                "remove_and_split: index {} out of range ({})",
                index,
                self.asteroids.len()
            );
            return 0;
        }

        let parent = self.asteroids.remove(index);
        match split(&parent) {
            Some(children) => {
                for (slot, mut child) in children.into_iter().enumerate() {
                    child.pos = bounds.wrap(child.pos);
                    child.vel = SPLIT_VELOCITIES[slot];
                    self.asteroids.push(child);
                }
                2
            }
            None => 0,
        }
    }

    /// Insert a prebuilt asteroid (scenarios, tests)
    pub fn push(&mut self, asteroid: Asteroid) {
        self.asteroids.push(asteroid);
    }

    pub fn clear(&mut self) {
        self.asteroids.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Asteroid> {
        self.asteroids.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asteroid> {
        self.asteroids.iter()
    }

    pub fn as_slice(&self) -> &[Asteroid] {
        &self.asteroids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> FieldBounds {
        FieldBounds::new(FIELD_WIDTH, FIELD_HEIGHT).unwrap()
    }

    fn rock(pos: Vec2, radius: f32) -> Asteroid {
        let shape = Shape::from_vertices(vec![
            Vec2::new(radius, 0.0),
            Vec2::new(0.0, radius),
            Vec2::new(-radius, 0.0),
            Vec2::new(0.0, -radius),
        ]);
        Asteroid::new(pos, Vec2::ZERO, shape)
    }

    #[test]
    fn test_reset_is_reproducible() {
        let b = bounds();
        let mut a = AsteroidField::new();
        let mut c = AsteroidField::new();
        a.reset(INITIAL_ASTEROIDS, &b).unwrap();
        c.reset(INITIAL_ASTEROIDS, &b).unwrap();
        assert_eq!(a.as_slice(), c.as_slice());
        assert_eq!(a.len(), INITIAL_ASTEROIDS);
    }

    #[test]
    fn test_reset_layout() {
        let b = bounds();
        let mut field = AsteroidField::new();
        field.reset(8, &b).unwrap();

        assert_eq!(field.get(0).unwrap().pos, Vec2::new(110.0, 80.0));
        assert_eq!(field.get(1).unwrap().pos, Vec2::new(220.0, 240.0));
        assert_eq!(field.get(2).unwrap().pos, Vec2::new(330.0, 400.0));
        assert_eq!(field.get(0).unwrap().vel, ASTEROID_DRIFT_EVEN);
        assert_eq!(field.get(1).unwrap().vel, ASTEROID_DRIFT_ODD);
        // Index 7 lands at x = 880 and wraps
        assert!((field.get(7).unwrap().pos.x - 80.0).abs() < 1e-3);
        for asteroid in field.iter() {
            assert!(b.contains(asteroid.pos));
        }
    }

    #[test]
    fn test_reset_replaces_existing() {
        let b = bounds();
        let mut field = AsteroidField::new();
        field.push(rock(Vec2::new(5.0, 5.0), 50.0));
        field.reset(3, &b).unwrap();
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_advance_wraps() {
        let b = bounds();
        let mut field = AsteroidField::new();
        let mut a = rock(Vec2::new(795.0, 10.0), 20.0);
        a.vel = Vec2::new(200.0, -400.0);
        field.push(a);

        field.advance(0.05, &b);
        let pos = field.get(0).unwrap().pos;
        assert!((pos.x - 5.0).abs() < 1e-3);
        assert!((pos.y - 590.0).abs() < 1e-3);
    }

    #[test]
    fn test_remove_and_split_assigns_child_velocities() {
        let b = bounds();
        let mut field = AsteroidField::new();
        field.push(rock(Vec2::new(400.0, 300.0), 10.0));
        field.push(rock(Vec2::new(100.0, 100.0), 40.0));

        let added = field.remove_and_split(1, &b);
        assert_eq!(added, 2);
        assert_eq!(field.len(), 3);
        assert_eq!(field.get(1).unwrap().vel, SPLIT_VELOCITIES[0]);
        assert_eq!(field.get(2).unwrap().vel, SPLIT_VELOCITIES[1]);
    }

    #[test]
    fn test_remove_terminal() {
        let b = bounds();
        let mut field = AsteroidField::new();
        field.push(rock(Vec2::new(400.0, 300.0), 10.0));
        assert_eq!(field.remove_and_split(0, &b), 0);
        assert!(field.is_empty());
        // Out of range is a no-op
        assert_eq!(field.remove_and_split(3, &b), 0);
    }

    #[test]
    fn test_split_children_wrap_near_edge() {
        let b = bounds();
        let mut field = AsteroidField::new();
        field.push(rock(Vec2::new(2.0, 1.0), 40.0));
        field.remove_and_split(0, &b);
        for child in field.iter() {
            assert!(b.contains(child.pos));
        }
    }

    #[test]
    fn test_world_vertices() {
        let a = rock(Vec2::new(100.0, 50.0), 10.0);
        let verts = a.world_vertices();
        assert_eq!(verts[0], Vec2::new(110.0, 50.0));
        let degenerate = Asteroid::new(Vec2::ZERO, Vec2::ZERO, Shape::from_vertices(Vec::new()));
        assert!(degenerate.world_vertices().is_empty());
    }
}
