//! Horizontal camera follow

use serde::{Deserialize, Serialize};

use super::state::GridConfig;
use crate::consts::*;

/// Scroll offset easing toward the player's column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Pixels scrolled; subtracted from world x when drawing
    pub offset: f32,
    pub target_offset: f32,
    /// Fraction of the remaining distance covered each frame, in (0, 1)
    pub smoothing: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: 0.0,
            target_offset: 0.0,
            smoothing: CAMERA_SMOOTHING,
        }
    }
}

impl Camera {
    /// Offset that centers `col` on screen, shifted forward by the lead
    pub fn target_for(col: i32, grid: &GridConfig) -> f32 {
        let cell = grid.cell_size;
        col as f32 * cell - (grid.viewport_width / 2.0 - cell / 2.0) + CAMERA_LEAD
    }

    /// One frame of exponential follow
    pub fn follow(&mut self, col: i32, grid: &GridConfig) {
        self.target_offset = Self::target_for(col, grid);
        self.offset += (self.target_offset - self.offset) * self.smoothing;
    }
}
