//! warren-tui: terminal front end for the warren dungeon crawler.
//!
//! Everything here is presentation; the simulation lives in warren-core.

pub mod app;
pub mod display;
pub mod input;

pub use app::App;
