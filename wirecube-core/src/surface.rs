//! The drawing target the cube renders into.

use crate::error::SurfaceError;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A fixed-size grid of colored cells.
///
/// Implementors are only reached through these operations; nothing reads or writes
/// their storage directly.
pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Draw a straight line between two cells, both endpoints included.
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), SurfaceError>;

    /// Overwrite every cell with `color`.
    fn fill(&mut self, color: Color);

    /// Signal that the contents changed and should be redrawn.
    fn refresh(&mut self);
}
