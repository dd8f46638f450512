//! warren-core: dungeon generation and projection logic
//!
//! This crate contains all generation, movement and view logic with no I/O
//! dependencies. It is designed to be pure and testable: the terminal front
//! end only supplies a viewport size and key events, and consumes the
//! character buffers and wall columns produced here.

pub mod dungeon;
pub mod player;
pub mod raycast;
pub mod view;

mod consts;
mod rng;

pub use consts::*;
pub use rng::{room_seed, GameRng};
