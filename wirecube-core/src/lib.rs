/// wirecube core - the rotating cube's geometry, transform and projection
///
/// This crate knows nothing about terminals. It draws through the [`Surface`] trait,
/// which the presentation layer implements.

pub mod config;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use config::CubeConfig;
pub use cube::Cube;
pub use error::SurfaceError;
pub use geometry::{Point2D, Point3D, FACES, VERTICES};
pub use projection::{project, Projection};
pub use surface::{Color, Surface};
pub use transform::{rotate, RotationState, Transform};
