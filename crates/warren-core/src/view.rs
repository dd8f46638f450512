//! Character view buffers for the terminal renderer.
//!
//! The front end only blits these; everything about what a frame contains
//! is decided here.

use crate::dungeon::{DungeonGrid, Tile};
use crate::player::PlayerPose;
use crate::raycast::{WallColumn, WallShade};

/// Glyph for a wall face hit on a vertical grid line.
const VERTICAL_GLYPH: char = '#';
/// Glyph for a wall face hit on a horizontal grid line.
const HORIZONTAL_GLYPH: char = '*';
/// Player marker on the overhead map.
const PLAYER_GLYPH: char = 'P';

/// A width x height character frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBuffer {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl ViewBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Bounds-checked write; out-of-range cells are dropped.
    fn put(&mut self, x: usize, y: usize, glyph: char) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = glyph;
        }
    }

    /// Paint a wall column from the top row down, clipped to the buffer.
    fn paint_column(&mut self, x: usize, height: usize, glyph: char) {
        for y in 0..height.min(self.height) {
            self.put(x, y, glyph);
        }
    }

    /// Rows as strings, top to bottom, for the renderer.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().collect())
    }
}

/// Draw the raycast columns into a fresh first-person frame.
pub fn compose_first_person(columns: &[WallColumn], view_height: usize) -> ViewBuffer {
    let mut buffer = ViewBuffer::new(columns.len(), view_height);
    for (x, column) in columns.iter().enumerate() {
        let glyph = match column.shade {
            WallShade::Vertical => VERTICAL_GLYPH,
            WallShade::Horizontal => HORIZONTAL_GLYPH,
            WallShade::None => continue,
        };
        buffer.paint_column(x, column.height, glyph);
    }
    buffer
}

/// Draw the overhead map window centered on the player, clamped to the
/// grid, with the player marked.
pub fn compose_overhead(
    grid: &DungeonGrid,
    pose: &PlayerPose,
    tile_size: f32,
    view_width: usize,
    view_height: usize,
) -> ViewBuffer {
    let mut buffer = ViewBuffer::new(view_width, view_height);
    let player_x = (pose.x / tile_size).max(0.0) as usize;
    let player_y = (pose.y / tile_size).max(0.0) as usize;

    let origin_x = window_origin(player_x, view_width, grid.width());
    let origin_y = window_origin(player_y, view_height, grid.height());

    for y in 0..view_height {
        for x in 0..view_width {
            let (gx, gy) = (origin_x + x, origin_y + y);
            if gx == player_x && gy == player_y {
                buffer.put(x, y, PLAYER_GLYPH);
                continue;
            }
            let glyph = grid.tile_or(gx, gy, Tile::Empty).glyph();
            buffer.put(x, y, glyph);
        }
    }
    buffer
}

/// Window start so the focus sits centered, clamped to the grid extent.
fn window_origin(focus: usize, view: usize, extent: usize) -> usize {
    let half = view / 2;
    let start = focus.saturating_sub(half);
    if start + view >= extent {
        extent.saturating_sub(view)
    } else {
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::DungeonGrid;
    use crate::raycast::{WallColumn, WallShade};

    #[test]
    fn first_person_paints_from_the_top() {
        let columns = [
            WallColumn {
                height: 3,
                shade: WallShade::Vertical,
            },
            WallColumn {
                height: 1,
                shade: WallShade::Horizontal,
            },
            WallColumn {
                height: 0,
                shade: WallShade::None,
            },
        ];
        let buffer = compose_first_person(&columns, 4);
        assert_eq!(buffer.get(0, 0), Some('#'));
        assert_eq!(buffer.get(0, 2), Some('#'));
        assert_eq!(buffer.get(0, 3), Some(' '));
        assert_eq!(buffer.get(1, 0), Some('*'));
        assert_eq!(buffer.get(1, 1), Some(' '));
        assert_eq!(buffer.get(2, 0), Some(' '));
    }

    #[test]
    fn oversized_column_heights_are_clipped() {
        let columns = [WallColumn {
            height: 99,
            shade: WallShade::Vertical,
        }];
        let buffer = compose_first_person(&columns, 5);
        for y in 0..5 {
            assert_eq!(buffer.get(0, y), Some('#'));
        }
        assert_eq!(buffer.get(0, 5), None);
    }

    #[test]
    fn overhead_marks_the_player() {
        let grid = DungeonGrid::new(1, 1, 12, 10);
        let pose = crate::player::PlayerPose::new(5.0 * 64.0, 5.0 * 64.0, 0.0);
        let buffer = compose_overhead(&grid, &pose, 64.0, 7, 7);
        // Window is centered on tile (5, 5): origin (2, 2).
        assert_eq!(buffer.get(3, 3), Some('P'));
        assert_eq!(buffer.get(0, 0), Some(' '));
    }

    #[test]
    fn overhead_window_clamps_at_the_border() {
        let grid = DungeonGrid::new(1, 1, 12, 10);
        let pose = crate::player::PlayerPose::new(32.0, 32.0, 0.0);
        let buffer = compose_overhead(&grid, &pose, 64.0, 8, 8);
        // Origin clamps to (0, 0); the player sits on the corner cell and
        // the rest of the first row shows the boundary ring.
        assert_eq!(buffer.get(0, 0), Some('P'));
        assert_eq!(buffer.get(1, 0), Some('W'));
        assert_eq!(buffer.get(7, 0), Some('W'));
    }

    #[test]
    fn clear_resets_every_cell() {
        let columns = [WallColumn {
            height: 2,
            shade: WallShade::Vertical,
        }];
        let mut buffer = compose_first_person(&columns, 3);
        buffer.clear();
        for y in 0..3 {
            assert_eq!(buffer.get(0, y), Some(' '));
        }
    }

    #[test]
    fn rows_render_top_to_bottom() {
        let columns = [
            WallColumn {
                height: 1,
                shade: WallShade::Vertical,
            },
            WallColumn {
                height: 2,
                shade: WallShade::Horizontal,
            },
        ];
        let buffer = compose_first_person(&columns, 2);
        let rows: Vec<String> = buffer.rows().collect();
        assert_eq!(rows, vec!["#*".to_string(), " *".to_string()]);
    }
}
