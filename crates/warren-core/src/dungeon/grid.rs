//! The assembled dungeon grid.
//!
//! Owns the full tile array plus the rooms indexed by slot. Cell ownership
//! is arithmetic: a cell belongs to the room of the slot it falls in.

use thiserror::Error;

use super::room::Room;
use super::tile::Tile;

/// Bounds-checked access failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Value identity of a room, derived from its slot coordinates.
///
/// Two rooms are the same room exactly when they occupy the same slot;
/// no pointer comparison anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId {
    pub slot_x: usize,
    pub slot_y: usize,
}

/// The full dungeon tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonGrid {
    width: usize,
    height: usize,
    slot_width: usize,
    slot_height: usize,
    rooms_x: usize,
    rooms_y: usize,
    tiles: Vec<Tile>,
    rooms: Vec<Room>,
}

impl DungeonGrid {
    /// Allocate an all-Empty grid of `rooms_x * slot_width` by
    /// `rooms_y * slot_height` tiles with a Boundary outer ring.
    pub fn new(rooms_x: usize, rooms_y: usize, slot_width: usize, slot_height: usize) -> Self {
        let width = rooms_x * slot_width;
        let height = rooms_y * slot_height;
        let mut grid = Self {
            width,
            height,
            slot_width,
            slot_height,
            rooms_x,
            rooms_y,
            tiles: vec![Tile::Empty; width * height],
            rooms: Vec::with_capacity(rooms_x * rooms_y),
        };
        for x in 0..width {
            grid.tiles[x] = Tile::Boundary;
            grid.tiles[(height - 1) * width + x] = Tile::Boundary;
        }
        for y in 0..height {
            grid.tiles[y * width] = Tile::Boundary;
            grid.tiles[y * width + width - 1] = Tile::Boundary;
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(x, y)`, or an explicit out-of-bounds error.
    pub fn tile(&self, x: usize, y: usize) -> Result<Tile, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.tiles[y * self.width + x])
    }

    /// Tile at `(x, y)`, or `fallback` outside the grid.
    pub fn tile_or(&self, x: usize, y: usize, fallback: Tile) -> Tile {
        self.tile(x, y).unwrap_or(fallback)
    }

    /// Write a tile. Boundary cells are immutable and out-of-range writes
    /// are dropped; both are silent no-ops by design of the stamping and
    /// carving passes.
    pub(crate) fn paint(&mut self, x: usize, y: usize, tile: Tile) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cell = &mut self.tiles[y * self.width + x];
        if *cell == Tile::Boundary {
            return;
        }
        *cell = tile;
    }

    /// Copy a room's local tiles into its slot and take ownership of it.
    pub fn stamp_room(&mut self, room: Room) {
        let (sx, sy) = room.slot();
        let origin_x = sx * self.slot_width;
        let origin_y = sy * self.slot_height;
        for ly in 0..self.slot_height {
            for lx in 0..self.slot_width {
                self.paint(origin_x + lx, origin_y + ly, room.tile(lx, ly));
            }
        }
        self.rooms.push(room);
    }

    /// The room owning cell `(x, y)`, by slot-coordinate division.
    pub fn room_id_at(&self, x: usize, y: usize) -> Option<RoomId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(RoomId {
            slot_x: x / self.slot_width,
            slot_y: y / self.slot_height,
        })
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_x(&self) -> usize {
        self.rooms_x
    }

    pub fn rooms_y(&self) -> usize {
        self.rooms_y
    }

    pub fn slot_width(&self) -> usize {
        self.slot_width
    }

    pub fn slot_height(&self) -> usize {
        self.slot_height
    }

    /// Collapse the tile set for play: every solid tile becomes Wall,
    /// everything else becomes Empty.
    pub fn normalize(&mut self) {
        for tile in &mut self.tiles {
            *tile = if tile.is_solid() {
                Tile::Wall
            } else {
                Tile::Empty
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_ring_is_boundary() {
        let grid = DungeonGrid::new(2, 2, 12, 10);
        assert_eq!(grid.width(), 24);
        assert_eq!(grid.height(), 20);
        for x in 0..grid.width() {
            assert_eq!(grid.tile(x, 0).unwrap(), Tile::Boundary);
            assert_eq!(grid.tile(x, 19).unwrap(), Tile::Boundary);
        }
        for y in 0..grid.height() {
            assert_eq!(grid.tile(0, y).unwrap(), Tile::Boundary);
            assert_eq!(grid.tile(23, y).unwrap(), Tile::Boundary);
        }
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let grid = DungeonGrid::new(1, 1, 12, 10);
        assert!(grid.tile(5, 5).is_ok());
        assert_eq!(
            grid.tile(12, 0),
            Err(GridError::OutOfBounds {
                x: 12,
                y: 0,
                width: 12,
                height: 10
            })
        );
        assert_eq!(grid.tile_or(99, 99, Tile::Boundary), Tile::Boundary);
    }

    #[test]
    fn paint_never_touches_boundary() {
        let mut grid = DungeonGrid::new(1, 1, 12, 10);
        grid.paint(0, 0, Tile::RoomFloor);
        assert_eq!(grid.tile(0, 0).unwrap(), Tile::Boundary);
        grid.paint(5, 5, Tile::RoomFloor);
        assert_eq!(grid.tile(5, 5).unwrap(), Tile::RoomFloor);
        // Out-of-range writes are dropped.
        grid.paint(100, 100, Tile::RoomFloor);
    }

    #[test]
    fn room_ownership_is_arithmetic() {
        let grid = DungeonGrid::new(3, 2, 12, 10);
        assert_eq!(
            grid.room_id_at(0, 0),
            Some(RoomId {
                slot_x: 0,
                slot_y: 0
            })
        );
        assert_eq!(
            grid.room_id_at(13, 11),
            Some(RoomId {
                slot_x: 1,
                slot_y: 1
            })
        );
        assert_eq!(
            grid.room_id_at(35, 9),
            Some(RoomId {
                slot_x: 2,
                slot_y: 0
            })
        );
        assert_eq!(grid.room_id_at(36, 0), None);
    }

    #[test]
    fn normalize_collapses_to_wall_and_empty() {
        let mut grid = DungeonGrid::new(1, 1, 12, 10);
        grid.paint(3, 3, Tile::Wall);
        grid.paint(4, 3, Tile::CorridorWall);
        grid.paint(5, 3, Tile::Door);
        grid.paint(6, 3, Tile::RoomFloor);
        grid.normalize();
        assert_eq!(grid.tile(3, 3).unwrap(), Tile::Wall);
        assert_eq!(grid.tile(4, 3).unwrap(), Tile::Wall);
        assert_eq!(grid.tile(0, 0).unwrap(), Tile::Wall);
        assert_eq!(grid.tile(5, 3).unwrap(), Tile::Empty);
        assert_eq!(grid.tile(6, 3).unwrap(), Tile::Empty);
    }
}
