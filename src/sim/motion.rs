//! Player motion state machine
//!
//! The player sits on a cell (Idle) or eases toward the next one
//! (Transitioning). Timing is wall-clock milliseconds, so step speed does
//! not depend on frame rate. A started step always runs to completion.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ease_in_out_cubic;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Resting on `(row, col)`
    Idle,
    /// Easing from `(row, col)` toward the target since `started_at`
    Transitioning {
        target_row: i32,
        target_col: i32,
        started_at: f64,
    },
}

/// The player token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Cell the player occupies; only changes when a step lands
    pub row: i32,
    pub col: i32,
    pub motion: Motion,
    /// Sprite size in pixels
    pub size: Vec2,
}

impl Player {
    pub fn new(size: Vec2) -> Self {
        Self {
            row: HOME_ROW,
            col: 0,
            motion: Motion::Idle,
            size,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Transitioning { .. })
    }

    /// Cell the player is heading to (its own cell while idle)
    pub fn target(&self) -> (i32, i32) {
        match self.motion {
            Motion::Idle => (self.row, self.col),
            Motion::Transitioning {
                target_row,
                target_col,
                ..
            } => (target_row, target_col),
        }
    }

    /// Only a single step forward within the same lane is allowed
    pub fn can_step_to(&self, row: i32, col: i32) -> bool {
        !self.is_moving() && row == self.row && col == self.col + 1
    }

    /// Start a step; returns false (and changes nothing) if the request
    /// is not a legal step
    pub fn begin_step(&mut self, row: i32, col: i32, now: f64) -> bool {
        if !self.can_step_to(row, col) {
            return false;
        }
        self.motion = Motion::Transitioning {
            target_row: row,
            target_col: col,
            started_at: now,
        };
        true
    }

    /// Land the step once its duration has elapsed. Returns true on the
    /// frame the player arrives.
    pub fn update(&mut self, now: f64) -> bool {
        if let Motion::Transitioning {
            target_row,
            target_col,
            started_at,
        } = self.motion
        {
            if step_progress(started_at, now) >= 1.0 {
                self.row = target_row;
                self.col = target_col;
                self.motion = Motion::Idle;
                return true;
            }
        }
        false
    }

    /// Fractional (col, row) grid position at `now`
    pub fn position_at(&self, now: f64) -> Vec2 {
        let start = Vec2::new(self.col as f32, self.row as f32);
        match self.motion {
            Motion::Idle => start,
            Motion::Transitioning {
                target_row,
                target_col,
                started_at,
            } => {
                let eased = ease_in_out_cubic(step_progress(started_at, now)) as f32;
                let target = Vec2::new(target_col as f32, target_row as f32);
                start + (target - start) * eased
            }
        }
    }
}

/// Normalized step time in [0, 1]
fn step_progress(started_at: f64, now: f64) -> f64 {
    ((now - started_at) / MOVE_DURATION_MS).clamp(0.0, 1.0)
}
