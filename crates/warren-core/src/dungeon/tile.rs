//! Map tile types.

use strum::{Display, EnumIter};

/// One cell of the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[repr(u8)]
pub enum Tile {
    /// Unclaimed background between rooms.
    #[default]
    Empty = 0,
    /// Walkable floor inside a room or along a carved corridor.
    RoomFloor = 1,
    /// Corridor endpoint on a room perimeter.
    Door = 2,
    /// Room perimeter wall.
    Wall = 3,
    /// Wall bounding a carved corridor.
    CorridorWall = 4,
    /// Immutable outer wall of the whole grid.
    Boundary = 5,
}

impl Tile {
    /// Blocks movement and sight.
    pub const fn is_solid(self) -> bool {
        matches!(self, Tile::Wall | Tile::CorridorWall | Tile::Boundary)
    }

    /// A corridor may be carved through this tile.
    pub const fn is_carvable(self) -> bool {
        matches!(self, Tile::Empty | Tile::Door)
    }

    /// The player may stand here.
    pub const fn is_walkable(self) -> bool {
        !self.is_solid()
    }

    /// Character used by the overhead map view.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall | Tile::CorridorWall => '#',
            Tile::Boundary => 'W',
            Tile::Door => '+',
            Tile::RoomFloor => '.',
            Tile::Empty => ' ',
        }
    }
}

/// Compass edge of a room perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Edge {
    North,
    West,
    East,
    South,
}

impl Edge {
    /// All edges, in the order the door placer draws from.
    pub const ALL: [Edge; 4] = [Edge::North, Edge::West, Edge::East, Edge::South];
}
