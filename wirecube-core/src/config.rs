//! Compile-time settings for the animation.
//!
//! The program reads no flags, files or environment for these; [`CubeConfig::default`]
//! is the only source.

use std::time::Duration;

use crate::surface::Color;
use crate::transform::RotationState;

pub const CANVAS_WIDTH: usize = 50;
pub const CANVAS_HEIGHT: usize = 50;
pub const FIELD_OF_VIEW: f64 = 50.0;
pub const VIEWER_DISTANCE: f64 = 50.0;
pub const TICKS_PER_SECOND: u32 = 20;
/// Degrees added to each angle on every tick
pub const ROTATION_STEP: RotationState = RotationState::new(2.0, 3.0, 5.0);

#[derive(Debug, Clone, PartialEq)]
pub struct CubeConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub field_of_view: f64,
    pub viewer_distance: f64,
    pub ticks_per_second: u32,
    pub rotation_step: RotationState,
    pub line_color: Color,
    pub background: Color,
}

impl CubeConfig {
    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            field_of_view: FIELD_OF_VIEW,
            viewer_distance: VIEWER_DISTANCE,
            ticks_per_second: TICKS_PER_SECOND,
            rotation_step: ROTATION_STEP,
            line_color: Color::WHITE,
            background: Color::BLACK,
        }
    }
}
