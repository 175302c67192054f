/// The animated cube: rotation state plus the per-tick update and draw
use log::trace;

use crate::config::CubeConfig;
use crate::error::SurfaceError;
use crate::geometry::{face_edges, Point2D, FACES, VERTICES};
use crate::projection::Projection;
use crate::surface::{Color, Surface};
use crate::transform::RotationState;

/// Owns the cumulative rotation of the cube.
///
/// Created once with all angles at zero and advanced once per tick for the rest of the run.
#[derive(Debug, Clone)]
pub struct Cube {
    rotation: RotationState,
    step: RotationState,
    projection: Projection,
    line_color: Color,
    background: Color,
}

impl Cube {
    pub fn new(config: &CubeConfig) -> Self {
        Self::with_rotation(config, RotationState::zero())
    }

    /// Start from arbitrary angles instead of zero
    pub fn with_rotation(config: &CubeConfig, rotation: RotationState) -> Self {
        Self {
            rotation,
            step: config.rotation_step,
            projection: Projection::new(
                config.canvas_width as f64,
                config.canvas_height as f64,
                config.field_of_view,
                config.viewer_distance,
            ),
            line_color: config.line_color,
            background: config.background,
        }
    }

    pub fn angles(&self) -> RotationState {
        self.rotation
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Step every angle by its per-tick increment
    pub fn advance(&mut self) {
        self.rotation.rotate(self.step.x, self.step.y, self.step.z);
    }

    /// Screen positions of the eight vertices, in `VERTICES` order
    pub fn vertices_2d(&self) -> [Point2D; 8] {
        VERTICES.map(|v| self.projection.project(self.rotation.apply(v)))
    }

    /// Overwrite the whole surface with the background color
    pub fn clear<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill(self.background);
        surface.refresh();
    }

    /// Draw the four edges of every face: 24 lines
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        let cells = self.vertices_2d().map(Point2D::to_cell);
        for face in &FACES {
            for (from, to) in face_edges(face) {
                let (x0, y0) = cells[from];
                let (x1, y1) = cells[to];
                surface.draw_line(x0, y0, x1, y1, self.line_color)?;
            }
        }
        Ok(())
    }

    /// One animation step: advance, clear, render
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), SurfaceError> {
        self.advance();
        trace!(
            "tick: angles x={} y={} z={}",
            self.rotation.x,
            self.rotation.y,
            self.rotation.z
        );
        self.clear(surface);
        self.render(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::transform::rotate;

    /// Records calls instead of rasterising
    #[derive(Default)]
    struct RecordingSurface {
        lines: Vec<(i32, i32, i32, i32, Color)>,
        fills: Vec<Color>,
        refreshes: usize,
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> usize {
            50
        }

        fn height(&self) -> usize {
            50
        }

        fn draw_line(
            &mut self,
            x0: i32,
            y0: i32,
            x1: i32,
            y1: i32,
            color: Color,
        ) -> Result<(), SurfaceError> {
            self.lines.push((x0, y0, x1, y1, color));
            Ok(())
        }

        fn fill(&mut self, color: Color) {
            self.fills.push(color);
        }

        fn refresh(&mut self) {
            self.refreshes += 1;
        }
    }

    /// Rejects every line
    struct TinySurface;

    impl Surface for TinySurface {
        fn width(&self) -> usize {
            1
        }

        fn height(&self) -> usize {
            1
        }

        fn draw_line(
            &mut self,
            x0: i32,
            y0: i32,
            _x1: i32,
            _y1: i32,
            _color: Color,
        ) -> Result<(), SurfaceError> {
            Err(SurfaceError::OutOfBounds {
                x: x0,
                y: y0,
                width: 1,
                height: 1,
            })
        }

        fn fill(&mut self, _color: Color) {}

        fn refresh(&mut self) {}
    }

    #[test]
    fn test_new_cube_starts_at_zero() {
        let cube = Cube::new(&CubeConfig::default());
        assert_eq!(cube.angles(), RotationState::zero());
    }

    #[test]
    fn test_advance_once() {
        let mut cube = Cube::new(&CubeConfig::default());
        cube.advance();
        assert_eq!(cube.angles(), RotationState::new(2.0, 3.0, 5.0));
    }

    #[test]
    fn test_identity_frame_matches_direct_projection() {
        let cube = Cube::new(&CubeConfig::default());
        let points = cube.vertices_2d();
        for (i, v) in VERTICES.iter().enumerate() {
            assert_eq!(points[i], project(*v, 50.0, 50.0, 50.0, 50.0));
        }
        assert_eq!(points[0], Point2D::new(12.5, 12.5));
    }

    #[test]
    fn test_vertices_follow_rotation() {
        let rotation = RotationState::new(10.0, 20.0, 30.0);
        let cube = Cube::with_rotation(&CubeConfig::default(), rotation);
        let points = cube.vertices_2d();
        for (i, v) in VERTICES.iter().enumerate() {
            let expected = project(rotate(*v, 10.0, 20.0, 30.0), 50.0, 50.0, 50.0, 50.0);
            assert!((points[i].x - expected.x).abs() < 1e-12);
            assert!((points[i].y - expected.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_render_issues_24_lines_in_face_order() {
        let cube = Cube::new(&CubeConfig::default());
        let mut surface = RecordingSurface::default();
        cube.render(&mut surface).unwrap();

        assert_eq!(surface.lines.len(), 24);
        assert!(surface.lines.iter().all(|line| line.4 == Color::WHITE));

        let cells = cube.vertices_2d().map(Point2D::to_cell);
        // First face, first edge: vertex 0 -> vertex 1
        let (x0, y0, x1, y1, _) = surface.lines[0];
        assert_eq!((x0, y0), cells[0]);
        assert_eq!((x1, y1), cells[1]);
        // First face, closing edge: vertex 3 -> vertex 0
        let (x0, y0, x1, y1, _) = surface.lines[3];
        assert_eq!((x0, y0), cells[3]);
        assert_eq!((x1, y1), cells[0]);
    }

    #[test]
    fn test_render_uses_rounded_cells() {
        let cube = Cube::new(&CubeConfig::default());
        let mut surface = RecordingSurface::default();
        cube.render(&mut surface).unwrap();
        // Vertex 0 projects to (12.5, 12.5); halves round to even.
        assert_eq!((surface.lines[0].0, surface.lines[0].1), (12, 12));
    }

    #[test]
    fn test_clear_fills_background_and_refreshes() {
        let cube = Cube::new(&CubeConfig::default());
        let mut surface = RecordingSurface::default();
        cube.clear(&mut surface);
        assert_eq!(surface.fills, vec![Color::BLACK]);
        assert_eq!(surface.refreshes, 1);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn test_tick_advances_then_draws() {
        let mut cube = Cube::new(&CubeConfig::default());
        let mut surface = RecordingSurface::default();
        cube.tick(&mut surface).unwrap();

        assert_eq!(cube.angles(), RotationState::new(2.0, 3.0, 5.0));
        assert_eq!(surface.fills.len(), 1);
        assert_eq!(surface.lines.len(), 24);

        let mut expected = RecordingSurface::default();
        Cube::with_rotation(&CubeConfig::default(), RotationState::new(2.0, 3.0, 5.0))
            .render(&mut expected)
            .unwrap();
        assert_eq!(surface.lines, expected.lines);
    }

    #[test]
    fn test_surface_error_aborts_render() {
        let cube = Cube::new(&CubeConfig::default());
        let result = cube.render(&mut TinySurface);
        assert!(matches!(result, Err(SurfaceError::OutOfBounds { x: 12, .. })));
    }
}
