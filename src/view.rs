//! Screen-space read model for renderers
//!
//! Hosts draw from a [`FrameView`] instead of poking at simulation state.
//! The death tile is deliberately absent: it is never drawn.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, SpriteId};

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub pos: Vec2,
    pub size: Vec2,
}

/// One background grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub rect: ScreenRect,
    /// The cell the player can step onto next
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSprite {
    pub sprite: SpriteId,
    pub rect: ScreenRect,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub camera_offset: f32,
    pub grid: Vec<GridCell>,
    pub player: ScreenRect,
    pub obstacles: Vec<ObstacleSprite>,
    pub game_over: bool,
}

impl FrameView {
    pub fn capture(state: &GameState, now: f64) -> Self {
        let grid = &state.grid;
        let offset = state.camera.offset;
        let cell = Vec2::splat(grid.cell_size);
        let on_screen =
            |pos: Vec2| pos.x >= -grid.cell_size && pos.x <= grid.viewport_width;

        let player = &state.player;
        let mut cells = Vec::new();
        let first = player.col - grid.visible_columns;
        let last = player.col + grid.visible_columns;
        for col in first..=last {
            for row in 0..GRID_ROWS {
                let pos = grid.cell_to_screen(row as f32, col as f32, offset);
                if on_screen(pos) {
                    cells.push(GridCell {
                        rect: ScreenRect { pos, size: cell },
                        highlighted: col == player.col + 1 && row == player.row,
                    });
                }
            }
        }

        let grid_pos = player.position_at(now);
        let player_rect = ScreenRect {
            pos: grid.cell_to_screen(grid_pos.y, grid_pos.x, offset)
                + Vec2::splat(PLAYER_INSET / 2.0),
            size: player.size,
        };

        let obstacles = state
            .field
            .obstacles
            .iter()
            .filter_map(|o| {
                let pos = grid.cell_to_screen(o.row as f32, o.col as f32, offset);
                on_screen(pos).then_some(ObstacleSprite {
                    sprite: o.sprite,
                    rect: ScreenRect { pos, size: cell },
                })
            })
            .collect();

        Self {
            camera_offset: offset,
            grid: cells,
            player: player_rect,
            obstacles,
            game_over: state.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use crate::sim::{GridConfig, Obstacle, TickInput, tick};

    fn state() -> GameState {
        GameState::new(1, GridConfig::new(800.0, 300.0), Difficulty::Easy)
    }

    #[test]
    fn test_initial_frame() {
        let state = state();
        let view = FrameView::capture(&state, 0.0);
        assert_eq!(view.camera_offset, 0.0);
        assert!(!view.game_over);
        assert_eq!(view.player.pos, Vec2::new(5.0, 105.0));
        assert_eq!(view.player.size, Vec2::splat(90.0));

        let highlighted: Vec<_> = view.grid.iter().filter(|c| c.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].rect.pos, Vec2::new(100.0, 100.0));
        assert!(view.grid.iter().all(|c| c.rect.pos.x >= -100.0 && c.rect.pos.x <= 800.0));
    }

    #[test]
    fn test_offscreen_obstacles_are_culled() {
        let mut state = state();
        state.field.obstacles.clear();
        for col in [-5, 3, 50] {
            state.field.obstacles.push(Obstacle {
                row: 0,
                col,
                sprite: SpriteId(1),
            });
        }
        let view = FrameView::capture(&state, 0.0);
        assert_eq!(view.obstacles.len(), 1);
        assert_eq!(view.obstacles[0].rect.pos, Vec2::new(300.0, 0.0));
        assert_eq!(view.obstacles[0].sprite, SpriteId(1));
    }

    #[test]
    fn test_player_rect_follows_interpolation() {
        let mut state = state();
        let click = TickInput {
            click: Some(Vec2::new(150.0, 150.0)),
            ..Default::default()
        };
        tick(&mut state, &click, 0.0);
        let start = FrameView::capture(&state, 0.0).player.pos;
        let mid = FrameView::capture(&state, MOVE_DURATION_MS / 2.0).player.pos;
        let offset = state.camera.offset;
        assert!((start.x - (5.0 - offset)).abs() < 1e-3);
        assert!((mid.x - (55.0 - offset)).abs() < 1e-3);
        assert_eq!(mid.y, 105.0);
    }
}
