//! Simulation module
//!
//! All gameplay and effect logic lives here:
//! - Variable timestep, clamped before integration
//! - Fixed-seed RNG for the initial field and the star set
//! - Time-seeded RNG for sparks and shooting stars only
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod shape;
pub mod ship;
pub mod stars;
pub mod state;
pub mod tick;
pub mod transient;

pub use asteroid::{Asteroid, AsteroidField};
pub use collision::{CollisionEvent, FlashTimer, circles_overlap, resolve};
pub use shape::{Shape, collision_radius, generate_shape, split};
pub use ship::{Ship, ShipControls};
pub use stars::{ProjectedStar, Star, StarField};
pub use state::{Action, FieldBounds, FrameInput, Simulation};
pub use tick::tick;
pub use transient::{ShootingStar, Spark, TransientEvents};
