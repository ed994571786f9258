//! Round controller
//!
//! One `tick` per animation frame: apply the pending input, land any
//! finished step, follow with the camera, then check for a collision.

use glam::Vec2;

use super::camera::Camera;
use super::collision::{Collision, check_collision};
use super::death_tile::place_death_tile;
use super::motion::Player;
use super::state::{GameState, RoundPhase, RoundState};
use crate::consts::*;
use crate::settings::Difficulty;

/// Input gathered since the previous frame; the host clears it after each
/// tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer click in viewport coordinates
    pub click: Option<Vec2>,
    /// Explicit restart request
    pub restart: bool,
    /// Newly selected preset; switching always restarts the round
    pub difficulty: Option<Difficulty>,
}

impl TickInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Populate a fresh round: player home, camera at rest, new obstacles and
/// a new death tile
pub fn start_round(state: &mut GameState) {
    state.player = Player::new(state.grid.player_size());
    state.camera = Camera::default();
    state.round = RoundState::default();
    state.field.clear();

    state
        .field
        .fill_initial(&mut state.rng, state.grid.visible_columns);

    let death_col = place_death_tile(&mut state.rng, state.player.col, state.difficulty);
    state.field.occupancy.mark_occupied(HOME_ROW, death_col);
    state.death_tile_col = Some(death_col);

    state.rounds_played += 1;
    log::info!(
        "Round {} started ({}, {} obstacles)",
        state.rounds_played,
        state.difficulty.as_str(),
        state.field.obstacles.len()
    );
    log::debug!("Death tile at column {}", death_col);
}

/// Abandon the current round (even mid-step) and start over
pub fn restart(state: &mut GameState) {
    log::info!(
        "Restarting after {} columns",
        state.round.columns_traversed
    );
    start_round(state);
}

/// Switch presets; always begins a new round
pub fn set_difficulty(state: &mut GameState, difficulty: Difficulty) {
    log::info!("Difficulty set to {}", difficulty.as_str());
    state.difficulty = difficulty;
    restart(state);
}

/// Ask the player to step onto `(row, col)`. On success the world is
/// pruned behind and extended ahead of the column being left.
pub fn request_move(state: &mut GameState, row: i32, col: i32, now: f64) -> bool {
    if state.is_over() {
        return false;
    }

    let from_col = state.player.col;
    if !state.player.begin_step(row, col, now) {
        return false;
    }

    let visible = state.grid.visible_columns;
    state.field.prune_behind(from_col, visible);
    state.field.fill_incremental(&mut state.rng, from_col, visible);
    state.round.columns_traversed += 1;

    true
}

/// Advance the round by one frame at wall-clock time `now` (ms)
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) {
    if let Some(difficulty) = input.difficulty {
        set_difficulty(state, difficulty);
        return;
    }

    if input.restart {
        restart(state);
        return;
    }

    if state.is_over() {
        // "Click to restart"
        if input.click.is_some() {
            restart(state);
        }
        return;
    }

    if let Some(pos) = input.click {
        let (row, col) = state.grid.screen_to_cell(pos, state.camera.offset);
        request_move(state, row, col, now);
    }

    state.player.update(now);
    state.camera.follow(state.player.col, &state.grid);

    let hit = check_collision(
        &state.player,
        &state.field.obstacles,
        state.death_tile_col,
    );
    if let Some(collision) = hit {
        state.round.phase = RoundPhase::GameOver;
        match collision {
            Collision::Obstacle { row, col } => {
                log::info!("Game over: hit obstacle at ({}, {})", row, col)
            }
            Collision::DeathTile { col } => log::info!("Game over: death tile at column {}", col),
        }
    }
}
