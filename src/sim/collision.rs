//! Cell collision checks
//!
//! Everything lives on integer cells, so a collision is just the player's
//! current cell matching an obstacle or the death tile.

use super::motion::Player;
use super::state::Obstacle;
use crate::consts::HOME_ROW;

/// What ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Obstacle { row: i32, col: i32 },
    DeathTile { col: i32 },
}

/// Check the player's cell against live obstacles and the death tile
pub fn check_collision(
    player: &Player,
    obstacles: &[Obstacle],
    death_tile_col: Option<i32>,
) -> Option<Collision> {
    if let Some(o) = obstacles
        .iter()
        .find(|o| o.row == player.row && o.col == player.col)
    {
        return Some(Collision::Obstacle {
            row: o.row,
            col: o.col,
        });
    }

    match death_tile_col {
        Some(col) if player.row == HOME_ROW && player.col == col => {
            Some(Collision::DeathTile { col })
        }
        _ => None,
    }
}
