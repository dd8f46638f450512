//! Player pose and movement commands.
//!
//! The player lives in continuous coordinates scaled by the tile size.
//! Movement is checked per axis against the grid, so sliding along a wall
//! works naturally.

use std::f32::consts::TAU;

use crate::consts::{MOVE_STEP, TURN_STEP};
use crate::dungeon::{DungeonGrid, Tile};

/// Continuous player position, facing angle and derived direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub x: f32,
    pub y: f32,
    /// Facing angle in radians, kept in `[0, 2*pi)`.
    pub angle: f32,
    /// Movement per forward step, world units.
    pub dir_x: f32,
    pub dir_y: f32,
}

impl PlayerPose {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        let mut pose = Self {
            x,
            y,
            angle: wrap_angle(angle),
            dir_x: 0.0,
            dir_y: 0.0,
        };
        pose.refresh_direction();
        pose
    }

    fn refresh_direction(&mut self) {
        self.dir_x = self.angle.cos() * MOVE_STEP;
        self.dir_y = self.angle.sin() * MOVE_STEP;
    }

    pub fn rotate(&mut self, delta: f32) {
        self.angle = wrap_angle(self.angle + delta);
        self.refresh_direction();
    }
}

/// Wrap into `[0, 2*pi)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    a
}

/// Player commands recognized by the simulation. Anything else the front
/// end receives is ignored before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    RotateLeft,
    RotateRight,
    ToggleMap,
}

/// First-person projection or overhead map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    FirstPerson,
    Overhead,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::FirstPerson => ViewMode::Overhead,
            ViewMode::Overhead => ViewMode::FirstPerson,
        }
    }
}

/// Apply one command to the pose and view mode.
pub fn apply_command(
    pose: &mut PlayerPose,
    mode: &mut ViewMode,
    grid: &DungeonGrid,
    tile_size: f32,
    command: Command,
) {
    match command {
        Command::RotateLeft => pose.rotate(-TURN_STEP),
        Command::RotateRight => pose.rotate(TURN_STEP),
        Command::MoveForward => step(pose, grid, tile_size, 1.0),
        Command::MoveBackward => step(pose, grid, tile_size, -1.0),
        Command::ToggleMap => *mode = mode.toggled(),
    }
}

/// Move along each axis independently; an axis is applied only when its
/// destination tile is not solid.
fn step(pose: &mut PlayerPose, grid: &DungeonGrid, tile_size: f32, sign: f32) {
    let nx = pose.x + sign * pose.dir_x;
    if !solid_at(grid, tile_size, nx, pose.y) {
        pose.x = nx;
    }
    let ny = pose.y + sign * pose.dir_y;
    if !solid_at(grid, tile_size, pose.x, ny) {
        pose.y = ny;
    }
}

/// Destination check; out-of-range positions count as solid.
fn solid_at(grid: &DungeonGrid, tile_size: f32, x: f32, y: f32) -> bool {
    if x < 0.0 || y < 0.0 {
        return true;
    }
    let tx = (x / tile_size) as usize;
    let ty = (y / tile_size) as usize;
    grid.tile_or(tx, ty, Tile::Boundary).is_solid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TILE_SIZE;
    use crate::dungeon::DungeonGrid;

    fn open_grid() -> DungeonGrid {
        // 12x10 tiles, boundary ring only.
        DungeonGrid::new(1, 1, 12, 10)
    }

    #[test]
    fn rotation_wraps_and_updates_direction() {
        let mut pose = PlayerPose::new(0.0, 0.0, 0.0);
        pose.rotate(-TURN_STEP);
        assert!(pose.angle > 0.0 && pose.angle < TAU);
        assert!((pose.dir_x - pose.angle.cos() * MOVE_STEP).abs() < 1e-6);
        assert!((pose.dir_y - pose.angle.sin() * MOVE_STEP).abs() < 1e-6);

        let mut pose = PlayerPose::new(0.0, 0.0, TAU - 0.05);
        pose.rotate(TURN_STEP);
        assert!(pose.angle < TAU);
    }

    #[test]
    fn forward_moves_into_open_space() {
        let grid = open_grid();
        let mut pose = PlayerPose::new(5.0 * TILE_SIZE, 5.0 * TILE_SIZE, 0.0);
        let mut mode = ViewMode::FirstPerson;
        apply_command(&mut pose, &mut mode, &grid, TILE_SIZE, Command::MoveForward);
        assert!((pose.x - (5.0 * TILE_SIZE + MOVE_STEP)).abs() < 1e-4);
        assert!((pose.y - 5.0 * TILE_SIZE).abs() < 1e-4);
    }

    #[test]
    fn walls_block_one_axis_at_a_time() {
        let mut grid = open_grid();
        // Solid column directly east of the player.
        for y in 0..grid.height() {
            grid.paint(6, y, Tile::Wall);
        }
        let start_x = 6.0 * TILE_SIZE - 2.0;
        let mut pose = PlayerPose::new(start_x, 5.0 * TILE_SIZE, 0.5);
        let mut mode = ViewMode::FirstPerson;
        apply_command(&mut pose, &mut mode, &grid, TILE_SIZE, Command::MoveForward);
        // X step would enter the wall and is rejected; Y step is free.
        assert!((pose.x - start_x).abs() < 1e-4);
        assert!((pose.y - (5.0 * TILE_SIZE + pose.dir_y)).abs() < 1e-4);
    }

    #[test]
    fn boundary_and_negative_space_are_solid() {
        let grid = open_grid();
        let mut pose = PlayerPose::new(2.0, 5.0 * TILE_SIZE, std::f32::consts::PI);
        let mut mode = ViewMode::FirstPerson;
        // Facing west into negative coordinates; both axes rejected.
        apply_command(&mut pose, &mut mode, &grid, TILE_SIZE, Command::MoveForward);
        assert!((pose.x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn toggle_map_flips_view_mode() {
        let grid = open_grid();
        let mut pose = PlayerPose::new(0.0, 0.0, 0.0);
        let mut mode = ViewMode::FirstPerson;
        apply_command(&mut pose, &mut mode, &grid, TILE_SIZE, Command::ToggleMap);
        assert_eq!(mode, ViewMode::Overhead);
        apply_command(&mut pose, &mut mode, &grid, TILE_SIZE, Command::ToggleMap);
        assert_eq!(mode, ViewMode::FirstPerson);
    }
}
