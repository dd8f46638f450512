//! Seeded room generation.
//!
//! Each room is generated in isolation from a seed derived from its slot
//! coordinates, so rooms can be built in any order with identical results.

use crate::rng::{room_seed, GameRng};

use super::grid::RoomId;
use super::tile::{Edge, Tile};

/// Attempts the door placer makes before accepting a short door count.
/// Positions rarely collide; this only bounds pathological configs.
const DOOR_TRIES: u32 = 64;

/// Size limits for generated rooms.
///
/// A room rectangle (walls included) is at least `min_size` per axis and at
/// most one tile short of its slot, so an offset inside the slot always
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomConfig {
    pub slot_width: usize,
    pub slot_height: usize,
    pub min_size: usize,
}

impl RoomConfig {
    /// Largest room width a slot admits.
    pub fn max_width(&self) -> usize {
        self.slot_width.saturating_sub(1)
    }

    /// Largest room height a slot admits.
    pub fn max_height(&self) -> usize {
        self.slot_height.saturating_sub(1)
    }
}

/// A door on a room perimeter, in room-local tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    pub edge: Edge,
    pub x: usize,
    pub y: usize,
}

/// One generated room, local to its slot.
///
/// Immutable after generation; the assembler stamps its tiles into the
/// dungeon grid and keeps the room for spawn placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    slot_x: usize,
    slot_y: usize,
    slot_width: usize,
    slot_height: usize,
    width: usize,
    height: usize,
    offset_x: usize,
    offset_y: usize,
    tiles: Vec<Tile>,
    doors: Vec<Door>,
}

impl Room {
    /// Generate the room for slot `(slot_x, slot_y)`.
    ///
    /// Pure function of its arguments: same slot, seed and config always
    /// produce an identical room. Expects a validated config.
    pub fn generate(slot_x: usize, slot_y: usize, world_seed: u64, config: &RoomConfig) -> Self {
        debug_assert!(config.min_size >= 3);
        debug_assert!(config.min_size <= config.max_width());
        debug_assert!(config.min_size <= config.max_height());

        let mut rng = GameRng::new(room_seed(slot_x, slot_y, world_seed));

        let width = rng.range(config.min_size, config.max_width());
        let height = rng.range(config.min_size, config.max_height());
        let offset_x = rng.range(0, config.slot_width - width);
        let offset_y = rng.range(0, config.slot_height - height);

        let mut room = Self {
            slot_x,
            slot_y,
            slot_width: config.slot_width,
            slot_height: config.slot_height,
            width,
            height,
            offset_x,
            offset_y,
            tiles: vec![Tile::Empty; config.slot_width * config.slot_height],
            doors: Vec::new(),
        };
        room.stamp_rectangle();
        room.place_doors(&mut rng);
        room
    }

    /// Wall perimeter around a floor interior.
    fn stamp_rectangle(&mut self) {
        let (x0, y0) = (self.offset_x, self.offset_y);
        let (x1, y1) = (x0 + self.width - 1, y0 + self.height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let tile = if x == x0 || x == x1 || y == y0 || y == y1 {
                    Tile::Wall
                } else {
                    Tile::RoomFloor
                };
                self.tiles[y * self.slot_width + x] = tile;
            }
        }
    }

    /// Place 2-4 doors, each on a random edge, strictly between that
    /// edge's corners. A position already holding a door is re-drawn.
    fn place_doors(&mut self, rng: &mut GameRng) {
        let count = 2 + rng.rn2(3) as usize;
        let (x0, y0) = (self.offset_x, self.offset_y);
        let (x1, y1) = (x0 + self.width - 1, y0 + self.height - 1);

        let mut tries = 0;
        while self.doors.len() < count && tries < DOOR_TRIES {
            tries += 1;
            let edge = Edge::ALL[rng.rn2(4) as usize];
            let door = match edge {
                Edge::North => Door { edge, x: rng.range(x0 + 1, x1 - 1), y: y0 },
                Edge::South => Door { edge, x: rng.range(x0 + 1, x1 - 1), y: y1 },
                Edge::West => Door { edge, x: x0, y: rng.range(y0 + 1, y1 - 1) },
                Edge::East => Door { edge, x: x1, y: rng.range(y0 + 1, y1 - 1) },
            };
            if self.doors.iter().any(|d| d.x == door.x && d.y == door.y) {
                continue;
            }
            self.tiles[door.y * self.slot_width + door.x] = Tile::Door;
            self.doors.push(door);
        }
    }

    /// Value identity derived from the slot coordinates.
    pub fn id(&self) -> RoomId {
        RoomId {
            slot_x: self.slot_x,
            slot_y: self.slot_y,
        }
    }

    pub fn slot(&self) -> (usize, usize) {
        (self.slot_x, self.slot_y)
    }

    /// Room rectangle extents, walls included.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Rectangle offset within the slot.
    pub fn offset(&self) -> (usize, usize) {
        (self.offset_x, self.offset_y)
    }

    /// Center of the room rectangle, in slot-local tile coordinates.
    pub fn center(&self) -> (usize, usize) {
        (
            self.offset_x + self.width / 2,
            self.offset_y + self.height / 2,
        )
    }

    /// Tile at slot-local `(x, y)`; Empty outside the slot.
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        if x >= self.slot_width || y >= self.slot_height {
            return Tile::Empty;
        }
        self.tiles[y * self.slot_width + x]
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }
}
