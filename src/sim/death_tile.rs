//! Death tile placement

use rand::Rng;

use crate::settings::Difficulty;

/// Pick the column of the lethal home-lane cell: `current_col` plus a gap
/// drawn uniformly from the difficulty's inclusive range
pub fn place_death_tile<R: Rng>(rng: &mut R, current_col: i32, difficulty: Difficulty) -> i32 {
    let (min_gap, max_gap) = difficulty.gap_range();
    current_col + rng.random_range(min_gap..=max_gap)
}
