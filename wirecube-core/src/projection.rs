/// Perspective projection onto the canvas
use crate::geometry::{Point2D, Point3D};

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: f64,
    pub height: f64,
    pub field_of_view: f64,
    pub viewer_distance: f64,
}

impl Projection {
    pub fn new(width: f64, height: f64, field_of_view: f64, viewer_distance: f64) -> Self {
        Self {
            width,
            height,
            field_of_view,
            viewer_distance,
        }
    }

    /// Project a 3D point to 2D screen space
    pub fn project(&self, point: Point3D) -> Point2D {
        project(
            point,
            self.width,
            self.height,
            self.field_of_view,
            self.viewer_distance,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(50.0, 50.0, 50.0, 50.0)
    }
}

/// Perspective-project `point` onto a `width` x `height` screen.
///
/// Screen Y grows downward, so the point's Y is negated. There is no guard for
/// `viewer_distance + point.z == 0`: the division then yields an infinite or NaN
/// coordinate. The cube never gets that close with the shipped constants.
pub fn project(
    point: Point3D,
    width: f64,
    height: f64,
    field_of_view: f64,
    viewer_distance: f64,
) -> Point2D {
    let factor = field_of_view / (viewer_distance + point.z);
    Point2D::new(
        point.x * factor + width / 2.0,
        -point.y * factor + height / 2.0,
    )
}
