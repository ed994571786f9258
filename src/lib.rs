//! Lane Dash - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (generation, motion, camera, collisions, round state)
//! - `settings`: Difficulty presets and the persisted preference
//! - `view`: Screen-space read model consumed by the host renderer

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::{Difficulty, Settings};

/// Game configuration constants
pub mod consts {
    /// Number of lanes
    pub const GRID_ROWS: i32 = 3;
    /// The player's lane; also the only lane the death tile can occupy
    pub const HOME_ROW: i32 = 1;

    /// Duration of one grid step (milliseconds)
    pub const MOVE_DURATION_MS: f64 = 250.0;

    /// Camera follow factor per frame
    pub const CAMERA_SMOOTHING: f32 = 0.1;
    /// Camera leads the player by this many pixels
    pub const CAMERA_LEAD: f32 = 300.0;

    /// Spawn chance per column when filling the opening screen
    pub const INITIAL_SPAWN_PROBABILITY: f64 = 0.9;
    /// Spawn chance per column when extending ahead after a step
    pub const INCREMENTAL_SPAWN_PROBABILITY: f64 = 0.3;
    /// Columns generated past the visible range after each step
    pub const INCREMENTAL_SPAN: i32 = 5;

    /// Number of obstacle sprites
    pub const OBSTACLE_SPRITE_COUNT: u8 = 4;

    /// Player sprite is this many pixels smaller than a cell on each axis
    pub const PLAYER_INSET: f32 = 10.0;
}

/// Symmetric cubic ease-in-out over `t` in [0, 1]
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 - 2.0 * t;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ease_is_symmetric_and_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let t = i as f64 / 100.0;
            let e = ease_in_out_cubic(t);
            assert!(e >= prev);
            assert!((e + ease_in_out_cubic(1.0 - t) - 1.0).abs() < 1e-9);
            prev = e;
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range() {
        assert_eq!(ease_in_out_cubic(-0.3), 0.0);
        assert_eq!(ease_in_out_cubic(1.7), 1.0);
    }
}
