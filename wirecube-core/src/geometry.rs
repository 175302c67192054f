/// Geometry primitives for the wireframe cube
use nalgebra::{Point3, Rotation3, Vector3};

/// Half the length of a cube side
pub const HALF_EXTENT: f64 = 10.0;

/// A point in 3D space. Transforms return a new value instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate about the X axis by `degrees`
    pub fn rotate_x(self, degrees: f64) -> Self {
        self.rotated(Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians()))
    }

    /// Rotate about the Y axis by `degrees`
    pub fn rotate_y(self, degrees: f64) -> Self {
        self.rotated(Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()))
    }

    /// Rotate about the Z axis by `degrees`
    pub fn rotate_z(self, degrees: f64) -> Self {
        self.rotated(Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians()))
    }

    /// Squared distance from the origin
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    fn rotated(self, rotation: Rotation3<f64>) -> Self {
        (rotation * Point3::from(self)).into()
    }
}

impl From<Point3<f64>> for Point3D {
    fn from(p: Point3<f64>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for Point3<f64> {
    fn from(p: Point3D) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

/// A projected point in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest cell coordinate. Halves round to the even neighbour, so 12.5 lands on 12.
    ///
    /// Non-finite coordinates saturate and will be rejected by the surface.
    pub fn to_cell(self) -> (i32, i32) {
        (self.x.round_ties_even() as i32, self.y.round_ties_even() as i32)
    }
}

// Vertex indices as laid out in VERTICES:
//
//        3-------2
//       /|      /|
//      7-------6 |
//      | |     | |
//      | 0-----|-1
//      |/      |/
//      4-------5
pub const VERTICES: [Point3D; 8] = [
    Point3D::new(-HALF_EXTENT, HALF_EXTENT, -HALF_EXTENT),
    Point3D::new(HALF_EXTENT, HALF_EXTENT, -HALF_EXTENT),
    Point3D::new(HALF_EXTENT, -HALF_EXTENT, -HALF_EXTENT),
    Point3D::new(-HALF_EXTENT, -HALF_EXTENT, -HALF_EXTENT),
    Point3D::new(-HALF_EXTENT, HALF_EXTENT, HALF_EXTENT),
    Point3D::new(HALF_EXTENT, HALF_EXTENT, HALF_EXTENT),
    Point3D::new(HALF_EXTENT, -HALF_EXTENT, HALF_EXTENT),
    Point3D::new(-HALF_EXTENT, -HALF_EXTENT, HALF_EXTENT),
];

/// Four vertex indices in winding order
pub type Face = [usize; 4];

pub const FACES: [Face; 6] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [5, 4, 7, 6],
    [4, 0, 3, 7],
    [0, 4, 5, 1],
    [3, 2, 6, 7],
];

/// The four closing edges of a face: 0->1, 1->2, 2->3, 3->0
pub fn face_edges(face: &Face) -> [(usize, usize); 4] {
    [
        (face[0], face[1]),
        (face[1], face[2]),
        (face[2], face[3]),
        (face[3], face[0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_reference_valid_vertices() {
        assert_eq!(FACES.len(), 6);
        for face in &FACES {
            assert_eq!(face.len(), 4);
            assert!(face.iter().all(|&i| i < VERTICES.len()));
        }
    }

    #[test]
    fn test_every_vertex_is_used_by_three_faces() {
        for i in 0..VERTICES.len() {
            let count = FACES.iter().filter(|face| face.contains(&i)).count();
            assert_eq!(count, 3, "vertex {i}");
        }
    }

    #[test]
    fn test_face_edges_close_the_loop() {
        let edges = face_edges(&[1, 5, 6, 2]);
        assert_eq!(edges, [(1, 5), (5, 6), (6, 2), (2, 1)]);
    }

    #[test]
    fn test_vertices_are_cube_corners() {
        for v in &VERTICES {
            assert_eq!(v.x.abs(), HALF_EXTENT);
            assert_eq!(v.y.abs(), HALF_EXTENT);
            assert_eq!(v.z.abs(), HALF_EXTENT);
        }
    }

    #[test]
    fn test_to_cell_rounds_half_to_even() {
        assert_eq!(Point2D::new(12.5, 13.5).to_cell(), (12, 14));
        assert_eq!(Point2D::new(12.49, 37.51).to_cell(), (12, 38));
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let p = Point3D::new(1.0, -2.0, 3.0);
        let q: Point3<f64> = p.into();
        assert_eq!(Point3D::from(q), p);
    }
}
