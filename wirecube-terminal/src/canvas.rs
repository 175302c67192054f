/// Character-cell canvas that the cube draws into
use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wirecube_core::{Color, Surface, SurfaceError};

/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

/// A fixed grid of colored pixels, shown two pixels per terminal cell
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Color>,
    dirty: bool,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![background; width * height],
            dirty: true,
        }
    }

    /// Color of the pixel at (x, y), if it exists
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Terminal rows needed to show the canvas
    pub fn rows(&self) -> usize {
        self.height.div_ceil(2)
    }

    /// Returns whether the canvas changed since the last call, and resets the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn check(&self, x: i32, y: i32) -> Result<(), SurfaceError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(SurfaceError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Write the canvas to `writer` with its top-left corner at `origin` (column, row)
    pub fn draw<W: Write>(&self, writer: &mut W, origin: (u16, u16)) -> std::io::Result<()> {
        let (column, row) = origin;
        for pair in 0..self.rows() {
            writer.queue(cursor::MoveTo(column, row + pair as u16))?;
            for x in 0..self.width {
                let top = self.cells[2 * pair * self.width + x];
                // An odd height leaves the last bottom half empty.
                let bottom = self.get(x, 2 * pair + 1).unwrap_or(top);
                writer.queue(SetForegroundColor(to_terminal(top)))?;
                writer.queue(SetBackgroundColor(to_terminal(bottom)))?;
                writer.queue(Print(HALF_BLOCK))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    /// Rejects the whole line if either endpoint is off the canvas. A line between two
    /// on-canvas endpoints never leaves it, so nothing is clipped.
    fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.check(x0, y0)?;
        self.check(x1, y1)?;
        for (x, y) in line_cells(x0, y0, x1, y1) {
            self.cells[y as usize * self.width + x as usize] = color;
        }
        self.dirty = true;
        Ok(())
    }

    fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    fn refresh(&mut self) {
        self.dirty = true;
    }
}

/// Cells on the line between two points, endpoints included (Bresenham)
pub fn line_cells(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    loop {
        cells.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}

fn to_terminal(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
