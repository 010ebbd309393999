//! Generator constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod map;
mod tiles;

pub use map::*;
pub use tiles::*;
