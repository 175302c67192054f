/// Rotation state and point rotation
use nalgebra::{Rotation3, Vector3};

use crate::geometry::Point3D;

/// Cumulative rotation around three axes (in degrees)
///
/// Angles are never wrapped; sine and cosine are periodic so unbounded growth is harmless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Apply this rotation to a point, X first, then Y, then Z
    pub fn apply(&self, point: Point3D) -> Point3D {
        rotate(point, self.x, self.y, self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate `point` about X, then Y, then Z.
///
/// The order is part of the contract: reordering changes the animation.
pub fn rotate(point: Point3D, angle_x: f64, angle_y: f64, angle_z: f64) -> Point3D {
    point.rotate_x(angle_x).rotate_y(angle_y).rotate_z(angle_z)
}

/// Matrix form of the cube's rotation
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state
    pub fn rotation_matrix(rotation: &RotationState) -> Rotation3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z.to_radians());

        // Apply rotations in order: X, Y, Z
        rz * ry * rx
    }
}
