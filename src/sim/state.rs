//! Game state and core simulation types
//!
//! Everything a round owns lives in [`GameState`]; hosts never touch
//! ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::generator::ObstacleField;
use super::motion::Player;
use crate::consts::*;
use crate::settings::Difficulty;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Accepting input
    Playing,
    /// Player hit an obstacle or the death tile
    GameOver,
}

/// Per-round bookkeeping, recreated on restart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Steps started this round
    pub columns_traversed: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            phase: RoundPhase::Playing,
            columns_traversed: 0,
        }
    }
}

impl RoundState {
    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }
}

/// Which obstacle sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u8);

/// A static obstacle occupying one cell in the top or bottom lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub row: i32,
    pub col: i32,
    pub sprite: SpriteId,
}

/// Smallest cell edge in pixels
pub const MIN_CELL_SIZE: f32 = 1.0;
/// Cap on columns per screen, keeps fills bounded for absurd aspect ratios
pub const MAX_VISIBLE_COLUMNS: i32 = 256;

/// Viewport-derived grid geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Cells are square: viewport height split across the lanes
    pub cell_size: f32,
    /// Columns that fit on screen, plus a margin of two
    pub visible_columns: i32,
}

impl GridConfig {
    /// Degenerate viewports (zero, negative or non-finite) still yield at
    /// least a one-pixel cell and a bounded column count
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let cell_size = (viewport_height / GRID_ROWS as f32).max(MIN_CELL_SIZE);
        let fit = (viewport_width.max(0.0) / cell_size).ceil() as i32;
        let visible_columns = fit.min(MAX_VISIBLE_COLUMNS).saturating_add(2);
        Self {
            viewport_width,
            viewport_height,
            cell_size,
            visible_columns,
        }
    }

    /// Map a viewport position to a (row, col) cell, scrolling by the
    /// camera offset on the column axis
    pub fn screen_to_cell(&self, pos: Vec2, camera_offset: f32) -> (i32, i32) {
        let row = (pos.y / self.cell_size).floor() as i32;
        let col = ((pos.x + camera_offset) / self.cell_size).floor() as i32;
        (row, col)
    }

    /// Viewport position of a cell's top-left corner
    pub fn cell_to_screen(&self, row: f32, col: f32, camera_offset: f32) -> Vec2 {
        Vec2::new(
            col * self.cell_size - camera_offset,
            row * self.cell_size,
        )
    }

    /// Player sprite size
    pub fn player_size(&self) -> Vec2 {
        Vec2::splat((self.cell_size - PLAYER_INSET).max(MIN_CELL_SIZE))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(800.0, 300.0)
    }
}

/// Snapshot of a round for logs and the native host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub rounds_played: u32,
    pub columns_traversed: u32,
    pub player_col: i32,
    pub death_tile_col: Option<i32>,
    pub live_obstacles: usize,
    pub game_over: bool,
}

/// Complete game state for one controller
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Drives spawning, lane/sprite choice and death-tile placement
    pub(crate) rng: Pcg32,
    pub grid: GridConfig,
    /// Active preset; survives restarts
    pub difficulty: Difficulty,
    pub player: Player,
    pub camera: Camera,
    pub field: ObstacleField,
    /// Column whose home-lane cell ends the run
    pub death_tile_col: Option<i32>,
    pub round: RoundState,
    /// Rounds started since creation (including the first)
    pub rounds_played: u32,
}

impl GameState {
    /// Create a state with a freshly generated first round
    pub fn new(seed: u64, grid: GridConfig, difficulty: Difficulty) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid,
            difficulty,
            player: Player::new(grid.player_size()),
            camera: Camera::default(),
            field: ObstacleField::default(),
            death_tile_col: None,
            round: RoundState::default(),
            rounds_played: 0,
        };

        super::tick::start_round(&mut state);

        state
    }

    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            seed: self.seed,
            difficulty: self.difficulty,
            rounds_played: self.rounds_played,
            columns_traversed: self.round.columns_traversed,
            player_col: self.player.col,
            death_tile_col: self.death_tile_col,
            live_obstacles: self.field.obstacles.len(),
            game_over: self.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_geometry() {
        let grid = GridConfig::new(800.0, 300.0);
        assert_eq!(grid.cell_size, 100.0);
        assert_eq!(grid.visible_columns, 10);
        assert_eq!(grid.player_size(), Vec2::splat(90.0));

        // Partial columns round up
        let grid = GridConfig::new(850.0, 300.0);
        assert_eq!(grid.visible_columns, 11);
    }

    #[test]
    fn test_degenerate_viewport_is_bounded() {
        let grid = GridConfig::new(300.0, 0.0);
        assert_eq!(grid.cell_size, MIN_CELL_SIZE);
        assert_eq!(grid.visible_columns, MAX_VISIBLE_COLUMNS + 2);
        assert_eq!(grid.player_size(), Vec2::splat(MIN_CELL_SIZE));

        let grid = GridConfig::new(0.0, 0.0);
        assert_eq!(grid.visible_columns, 2);

        let grid = GridConfig::new(f32::NAN, -30.0);
        assert_eq!(grid.cell_size, MIN_CELL_SIZE);
        assert!(grid.visible_columns >= 2);

        // A round still starts on a collapsed canvas
        let state = GameState::new(3, GridConfig::new(300.0, 0.0), Difficulty::Hard);
        assert!(!state.is_over());
        assert!(
            state
                .field
                .obstacles
                .iter()
                .all(|o| o.col >= 0 && o.col < state.grid.visible_columns)
        );
    }

    #[test]
    fn test_screen_to_cell_uses_camera_offset() {
        let grid = GridConfig::new(800.0, 300.0);
        assert_eq!(grid.screen_to_cell(Vec2::new(150.0, 150.0), 0.0), (1, 1));
        assert_eq!(grid.screen_to_cell(Vec2::new(150.0, 50.0), 200.0), (0, 3));
        assert_eq!(grid.screen_to_cell(Vec2::new(10.0, 250.0), -50.0), (2, -1));
    }

    #[test]
    fn test_cell_to_screen_inverts_screen_to_cell() {
        let grid = GridConfig::new(800.0, 300.0);
        let offset = 137.0;
        let corner = grid.cell_to_screen(2.0, 7.0, offset);
        let center = corner + Vec2::splat(grid.cell_size / 2.0);
        assert_eq!(grid.screen_to_cell(center, offset), (2, 7));
    }

    #[test]
    fn test_new_state_starts_playing() {
        let state = GameState::new(7, GridConfig::default(), Difficulty::Medium);
        assert!(!state.is_over());
        assert_eq!(state.rounds_played, 1);
        assert_eq!((state.player.row, state.player.col), (HOME_ROW, 0));
        assert!(state.death_tile_col.is_some());

        let summary = state.summary();
        assert_eq!(summary.seed, 7);
        assert_eq!(summary.columns_traversed, 0);
        assert!(!summary.game_over);
    }
}
