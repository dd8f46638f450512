//! Dungeon assembly.
//!
//! Validates the configuration, stamps every generated room into the grid,
//! records the spawn pose, carves corridors, checks which rooms the spawn
//! can actually reach and normalizes the tile set.

use thiserror::Error;

use crate::consts::{
    DEFAULT_ROOMS_X, DEFAULT_ROOMS_Y, DEFAULT_SEED, MIN_ROOM_SIZE, SLOT_HEIGHT, SLOT_WIDTH,
    TILE_SIZE,
};
use crate::player::PlayerPose;

use super::corridor::{self, CorridorReport};
use super::grid::{DungeonGrid, RoomId};
use super::pathfind::{Coord, PathError};
use super::room::{Room, RoomConfig};
use super::tile::Tile;

/// Invalid generation configuration. Reported before any allocation; the
/// only fatal class of generation failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("room grid must be at least 1x1 (got {rooms_x}x{rooms_y})")]
    NoRooms { rooms_x: usize, rooms_y: usize },
    #[error("slot extents must be positive (got {width}x{height})")]
    EmptySlot { width: usize, height: usize },
    #[error("rooms need a 4-tile minimum extent for walls and doors (got {min})")]
    RoomTooSmall { min: usize },
    #[error("minimum room size {min} exceeds maximum {max}")]
    InvertedRange { min: usize, max: usize },
}

/// Generation failure: a bad config, or a pathfinding logic error
/// surfaced while connecting corridors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("corridor connection failed: {0}")]
    Pathfinding(#[from] PathError),
}

/// Full dungeon generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub rooms_x: usize,
    pub rooms_y: usize,
    pub room: RoomConfig,
    pub seed: u64,
    pub tile_size: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rooms_x: DEFAULT_ROOMS_X,
            rooms_y: DEFAULT_ROOMS_Y,
            room: RoomConfig {
                slot_width: SLOT_WIDTH,
                slot_height: SLOT_HEIGHT,
                min_size: MIN_ROOM_SIZE,
            },
            seed: DEFAULT_SEED,
            tile_size: TILE_SIZE,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rooms_x == 0 || self.rooms_y == 0 {
            return Err(ConfigError::NoRooms {
                rooms_x: self.rooms_x,
                rooms_y: self.rooms_y,
            });
        }
        if self.room.slot_width == 0 || self.room.slot_height == 0 {
            return Err(ConfigError::EmptySlot {
                width: self.room.slot_width,
                height: self.room.slot_height,
            });
        }
        // Walls on both sides plus a door strictly between corners.
        if self.room.min_size < 4 {
            return Err(ConfigError::RoomTooSmall {
                min: self.room.min_size,
            });
        }
        let max = self.room.max_width().min(self.room.max_height());
        if self.room.min_size > max {
            return Err(ConfigError::InvertedRange {
                min: self.room.min_size,
                max,
            });
        }
        Ok(())
    }
}

/// How a generation run went.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub rooms: usize,
    pub corridors: CorridorReport,
    /// Rooms whose interior the spawn cannot reach after carving. Corridor
    /// pairing connects nearest doors, which can leave whole clusters of
    /// rooms disjoint from the spawn's; those rooms end up here even when
    /// every one of their doors carved a corridor.
    pub isolated_rooms: Vec<RoomId>,
}

/// A fully generated dungeon: normalized grid, spawn pose and report.
#[derive(Debug, Clone, PartialEq)]
pub struct Dungeon {
    pub grid: DungeonGrid,
    pub spawn: PlayerPose,
    pub tile_size: f32,
    pub report: GenerationReport,
}

/// Run the whole generation pipeline.
///
/// Deterministic: the same config always produces the same dungeon.
pub fn generate(config: &GenerationConfig) -> Result<Dungeon, GenerationError> {
    config.validate()?;

    let mut grid = DungeonGrid::new(
        config.rooms_x,
        config.rooms_y,
        config.room.slot_width,
        config.room.slot_height,
    );
    for sy in 0..config.rooms_y {
        for sx in 0..config.rooms_x {
            grid.stamp_room(Room::generate(sx, sy, config.seed, &config.room));
        }
    }

    let spawn_tile = spawn_tile(&grid, config);
    let spawn = PlayerPose::new(
        spawn_tile.0 as f32 * config.tile_size,
        spawn_tile.1 as f32 * config.tile_size,
        0.0,
    );
    let corridors = corridor::connect_rooms(&mut grid)?;
    let report = GenerationReport {
        rooms: grid.rooms().len(),
        isolated_rooms: unreachable_rooms(&grid, spawn_tile),
        corridors,
    };
    grid.normalize();

    Ok(Dungeon {
        grid,
        spawn,
        tile_size: config.tile_size,
        report,
    })
}

/// Spawn tile: the center of the room in the grid's center slot.
fn spawn_tile(grid: &DungeonGrid, config: &GenerationConfig) -> Coord {
    let id = RoomId {
        slot_x: config.rooms_x / 2,
        slot_y: config.rooms_y / 2,
    };
    // Every slot was stamped, so the center room always exists.
    let (cx, cy) = grid.room(id).map(Room::center).unwrap_or((
        config.room.slot_width / 2,
        config.room.slot_height / 2,
    ));
    (
        id.slot_x * config.room.slot_width + cx,
        id.slot_y * config.room.slot_height + cy,
    )
}

/// Rooms whose center a walker starting at `start` cannot reach.
///
/// Connectivity is 4-way over non-solid tiles, matching the per-axis
/// movement check: a diagonal gap between two solid cells is impassable.
fn unreachable_rooms(grid: &DungeonGrid, start: Coord) -> Vec<RoomId> {
    let (width, height) = (grid.width(), grid.height());
    let mut seen = vec![false; width * height];
    let mut frontier = Vec::new();
    if grid.tile_or(start.0, start.1, Tile::Boundary).is_walkable() {
        seen[start.1 * width + start.0] = true;
        frontier.push(start);
    }
    while let Some((x, y)) = frontier.pop() {
        for (dx, dy) in [(0i32, -1i32), (-1, 0), (0, 1), (1, 0)] {
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if nx >= width || ny >= height || seen[ny * width + nx] {
                continue;
            }
            if grid.tile_or(nx, ny, Tile::Boundary).is_walkable() {
                seen[ny * width + nx] = true;
                frontier.push((nx, ny));
            }
        }
    }
    grid.rooms()
        .iter()
        .filter(|room| {
            let (sx, sy) = room.slot();
            let (cx, cy) = room.center();
            let x = sx * grid.slot_width() + cx;
            let y = sy * grid.slot_height() + cy;
            !seen[y * width + x]
        })
        .map(Room::id)
        .collect()
}
