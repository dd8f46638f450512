//! Dungeon system
//!
//! Tile grid, seeded room generation, corridor carving and pathfinding.

mod corridor;
mod generation;
mod grid;
mod pathfind;
mod room;
mod tile;

pub use corridor::{connect_rooms, CorridorReport};
pub use generation::{
    generate, ConfigError, Dungeon, GenerationConfig, GenerationError, GenerationReport,
};
pub use grid::{DungeonGrid, GridError, RoomId};
pub use pathfind::{find_path, Coord, PathError};
pub use room::{Door, Room, RoomConfig};
pub use tile::{Edge, Tile};
