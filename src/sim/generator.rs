//! Obstacle generation and pruning
//!
//! Obstacles only ever spawn in the top or bottom lane; the home lane is
//! left clear for the player and the death tile.

use rand::Rng;

use super::occupancy::OccupancyIndex;
use super::state::{Obstacle, SpriteId};
use crate::consts::*;

/// Lanes an obstacle may spawn in
pub const OBSTACLE_ROWS: [i32; 2] = [0, GRID_ROWS - 1];

/// Live obstacles plus the occupancy index guarding them
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    /// In generation order
    pub obstacles: Vec<Obstacle>,
    pub occupancy: OccupancyIndex,
}

impl ObstacleField {
    /// For each column in `[from_col, from_col + span)`, roll
    /// `spawn_probability` and drop an obstacle into a random outer lane
    /// unless that cell is already taken. Returns the number spawned.
    pub fn extend_ahead<R: Rng>(
        &mut self,
        rng: &mut R,
        from_col: i32,
        span: i32,
        spawn_probability: f64,
    ) -> usize {
        let p = spawn_probability.clamp(0.0, 1.0);
        let mut spawned = 0;

        for col in from_col..from_col.saturating_add(span.max(0)) {
            if !rng.random_bool(p) {
                continue;
            }
            let row = if rng.random_bool(0.5) {
                OBSTACLE_ROWS[0]
            } else {
                OBSTACLE_ROWS[1]
            };
            let sprite = SpriteId(rng.random_range(0..OBSTACLE_SPRITE_COUNT));

            if self.occupancy.mark_occupied(row, col) {
                self.obstacles.push(Obstacle { row, col, sprite });
                spawned += 1;
            }
        }

        spawned
    }

    /// Fill the opening screen densely
    pub fn fill_initial<R: Rng>(&mut self, rng: &mut R, visible_columns: i32) -> usize {
        let spawned = self.extend_ahead(rng, 0, visible_columns, INITIAL_SPAWN_PROBABILITY);
        log::debug!("Initial fill: {} obstacles over {} columns", spawned, visible_columns);
        spawned
    }

    /// Extend a small window just past the visible range of `player_col`
    pub fn fill_incremental<R: Rng>(
        &mut self,
        rng: &mut R,
        player_col: i32,
        visible_columns: i32,
    ) -> usize {
        self.extend_ahead(
            rng,
            player_col + visible_columns,
            INCREMENTAL_SPAN,
            INCREMENTAL_SPAWN_PROBABILITY,
        )
    }

    /// Drop obstacles (and their occupancy marks) once they are more than
    /// a screen behind the player
    pub fn prune_behind(&mut self, player_col: i32, visible_columns: i32) -> usize {
        if player_col <= visible_columns {
            return 0;
        }
        let min_col = player_col - visible_columns + 1;
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.col >= min_col);
        self.occupancy.release_before(min_col);

        let pruned = before - self.obstacles.len();
        if pruned > 0 {
            log::debug!("Pruned {} obstacles left of column {}", pruned, min_col);
        }
        pruned
    }

    pub fn obstacle_at(&self, row: i32, col: i32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.row == row && o.col == col)
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.occupancy.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::collections::HashSet;

    #[test]
    fn test_certain_spawn_fills_every_column() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::default();
        let spawned = field.extend_ahead(&mut rng, 3, 6, 1.0);
        assert_eq!(spawned, 6);
        let cols: Vec<i32> = field.obstacles.iter().map(|o| o.col).collect();
        assert_eq!(cols, vec![3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_zero_probability_spawns_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::default();
        assert_eq!(field.extend_ahead(&mut rng, 0, 50, 0.0), 0);
        assert!(field.obstacles.is_empty());
        assert!(field.occupancy.is_empty());
    }

    #[test]
    fn test_occupied_cell_is_skipped() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field = ObstacleField::default();
        field.occupancy.mark_occupied(0, 0);
        field.occupancy.mark_occupied(2, 0);
        assert_eq!(field.extend_ahead(&mut rng, 0, 1, 1.0), 0);
        assert!(field.obstacle_at(0, 0).is_none());
    }

    #[test]
    fn test_incremental_window_is_past_visible_range() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut field = ObstacleField::default();
        // Enough rolls that every column of the window gets touched
        for _ in 0..50 {
            field.fill_incremental(&mut rng, 4, 10);
        }
        assert!(!field.obstacles.is_empty());
        assert!(field.obstacles.iter().all(|o| (14..19).contains(&o.col)));
    }

    #[test]
    fn test_prune_waits_until_player_passes_a_screen() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut field = ObstacleField::default();
        field.extend_ahead(&mut rng, 0, 30, 1.0);

        assert_eq!(field.prune_behind(10, 10), 0);
        assert_eq!(field.obstacles.len(), 30);

        let row_at_5 = field.obstacles[5].row;
        let pruned = field.prune_behind(15, 10);
        assert_eq!(pruned, 6);
        assert!(field.obstacles.iter().all(|o| o.col >= 6));
        assert!(!field.occupancy.is_occupied(row_at_5, 5));
        assert_eq!(field.occupancy.len(), field.obstacles.len());
    }

    proptest! {
        #[test]
        fn prop_no_stacking_and_outer_lanes_only(
            seed in any::<u64>(),
            windows in prop::collection::vec((-5i32..60, 0i32..12, 0.0f64..=1.0), 1..20),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = ObstacleField::default();
            for (from, span, p) in windows {
                field.extend_ahead(&mut rng, from, span, p);
            }

            let mut seen = HashSet::new();
            for o in &field.obstacles {
                prop_assert!(o.row == 0 || o.row == 2);
                prop_assert!(o.row != HOME_ROW);
                prop_assert!(o.sprite.0 < OBSTACLE_SPRITE_COUNT);
                prop_assert!(seen.insert((o.row, o.col)));
                prop_assert!(field.occupancy.is_occupied(o.row, o.col));
            }
        }
    }
}
