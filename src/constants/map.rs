//! Map layout constants.

/// Default map width in tiles
pub const MAP_WIDTH: i32 = 40;
/// Default map height in tiles
pub const MAP_HEIGHT: i32 = 24;
/// Default number of partition rows
pub const PARTITION_ROWS: i32 = 4;
/// Default number of partition columns
pub const PARTITION_COLS: i32 = 4;
/// Scale divisor for ground noise sampling (larger = smoother patches)
pub const GROUND_NOISE_SCALE: f64 = 10.0;
