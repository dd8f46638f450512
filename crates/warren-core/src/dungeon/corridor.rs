//! Corridor carving between room doors.
//!
//! Every door in the grid searches for the nearest door of a different
//! room and a corridor is carved along the A* path between them. All paths
//! are collected against the pristine grid before any carving happens, so
//! symmetric door pairs resolve to the same tunnel and re-carving stays
//! idempotent.

use super::grid::DungeonGrid;
use super::pathfind::{self, Coord, PathError};
use super::tile::Tile;

/// What corridor connection did, for the generation report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorridorReport {
    /// Doors found in the grid, row-major.
    pub doors: usize,
    /// Corridors carved (one per door that reached a foreign door).
    pub carved: usize,
    /// Doors with no reachable foreign door. Isolation is recoverable;
    /// generation continues without them.
    pub isolated_doors: Vec<Coord>,
}

/// Connect every door to the nearest door of another room.
///
/// An unreachable door pair is skipped and reported; a reconstruction
/// failure inside the pathfinder is a logic error and propagates.
pub fn connect_rooms(grid: &mut DungeonGrid) -> Result<CorridorReport, PathError> {
    let doors = door_positions(grid);
    let mut report = CorridorReport {
        doors: doors.len(),
        ..CorridorReport::default()
    };

    let mut paths: Vec<Vec<Coord>> = Vec::new();
    for &door in &doors {
        let Some(target) = nearest_foreign_door(grid, &doors, door) else {
            // No other room has a door; nothing to connect (1x1 dungeons).
            continue;
        };
        let passable = |c: Coord| grid.tile_or(c.0, c.1, Tile::Boundary).is_carvable();
        match pathfind::find_path(grid.width(), grid.height(), passable, door, target)? {
            Some(path) => paths.push(path),
            None => report.isolated_doors.push(door),
        }
    }

    for path in &paths {
        carve(grid, path);
    }
    report.carved = paths.len();
    Ok(report)
}

/// All Door tiles in row-major scan order.
fn door_positions(grid: &DungeonGrid) -> Vec<Coord> {
    let mut doors = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.tile_or(x, y, Tile::Empty) == Tile::Door {
                doors.push((x, y));
            }
        }
    }
    doors
}

/// Nearest door owned by a different room (Euclidean distance, ties to the
/// earlier scan position).
fn nearest_foreign_door(grid: &DungeonGrid, doors: &[Coord], from: Coord) -> Option<Coord> {
    let own = grid.room_id_at(from.0, from.1)?;
    let mut best: Option<(f32, Coord)> = None;
    for &door in doors {
        if door == from || grid.room_id_at(door.0, door.1) == Some(own) {
            continue;
        }
        let dx = door.0 as f32 - from.0 as f32;
        let dy = door.1 as f32 - from.1 as f32;
        let dist = (dx * dx + dy * dy).sqrt();
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, door));
        }
    }
    best.map(|(_, door)| door)
}

/// Carve one path: every node becomes floor, and each Empty cell of its
/// 8-neighborhood becomes a corridor wall. Walls, doors, floors and the
/// boundary are never touched, so carving cannot breach existing structure.
fn carve(grid: &mut DungeonGrid, path: &[Coord]) {
    for &(x, y) in path {
        grid.paint(x, y, Tile::RoomFloor);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                if nx < 0 || ny < 0 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if grid.tile_or(nx, ny, Tile::Boundary) == Tile::Empty {
                    grid.paint(nx, ny, Tile::CorridorWall);
                }
            }
        }
    }
}
