//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Time comes in as an argument (wall-clock ms), never read directly
//! - Seeded RNG only
//! - No rendering, DOM or storage dependencies

pub mod camera;
pub mod collision;
pub mod death_tile;
pub mod generator;
pub mod motion;
pub mod occupancy;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{Collision, check_collision};
pub use death_tile::place_death_tile;
pub use generator::{OBSTACLE_ROWS, ObstacleField};
pub use motion::{Motion, Player};
pub use occupancy::OccupancyIndex;
pub use state::{
    GameState, GridConfig, Obstacle, RoundPhase, RoundState, RoundSummary, SpriteId,
};
pub use tick::{TickInput, request_move, restart, set_difficulty, start_round, tick};
