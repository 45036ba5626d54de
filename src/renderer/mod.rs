//! Renderer boundary
//!
//! The core never draws. It hands the host a read-only [`RenderSnapshot`] and,
//! for hosts that want it, ready-made vertex buffers in [`FrameGeometry`].

pub mod shapes;
pub mod snapshot;
pub mod vertex;

pub use shapes::FrameGeometry;
pub use snapshot::{MenuRow, RenderSnapshot, ShootingStarView, SparkView};
pub use vertex::Vertex;
