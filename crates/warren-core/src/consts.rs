//! Core constants for dungeon layout and projection.

/// Default room-slot grid (rooms per axis).
pub const DEFAULT_ROOMS_X: usize = 5;
pub const DEFAULT_ROOMS_Y: usize = 5;

/// Slot extents in tiles. Every room rectangle, walls included, fits inside
/// one slot.
pub const SLOT_WIDTH: usize = 12;
pub const SLOT_HEIGHT: usize = 10;

/// Minimum room extent, walls included.
pub const MIN_ROOM_SIZE: usize = 8;

/// World units per tile; player coordinates are scaled by this.
pub const TILE_SIZE: f32 = 64.0;

/// Default world seed.
pub const DEFAULT_SEED: u64 = 2_137_420;

/// Radians per view column (one degree).
pub const COLUMN_ANGLE: f32 = 0.017_453_3;

/// Rotation per rotate command, radians.
pub const TURN_STEP: f32 = 0.1;

/// Distance covered by one move command, world units.
pub const MOVE_STEP: f32 = 5.0;

/// Grid-line crossings a ray marcher is allowed before giving up.
pub const MAX_RAY_STEPS: u32 = 16;
