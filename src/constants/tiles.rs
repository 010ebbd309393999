//! Tile index constants for the Tiny Town tileset (12 columns x 11 rows).

/// Sentinel meaning "no tile here" - sinks must leave the cell as-is
pub const EMPTY_TILE: i32 = -1;

/// Light grass ground tile
pub const GRASS_LIGHT: i32 = 0;
/// Mid grass ground tile
pub const GRASS_MID: i32 = 1;
/// Dark grass ground tile
pub const GRASS_DARK: i32 = 2;

/// Tile indices that make up house structures (roofs, walls, doors, chimneys).
/// Used by the tile-category extractor to detect house clusters in a layer.
pub const HOUSE_TILES: &[i32] = &[
    49, 50, 51, 52, 53, 54, 55, 56,
    61, 62, 63, 64, 65, 66, 67, 68,
    73, 74, 75, 76, 77, 78, 79, 80,
    85, 86, 87, 88, 89, 90, 91, 92,
    97, 98, 99, 100, 101, 102, 103,
    109, 110, 111, 112, 113, 114, 115,
    121, 122, 123, 124, 125, 126, 127,
];

/// Tile indices that make up tree canopies and trunks.
pub const TREE_TILES: &[i32] = &[3, 4, 5, 15, 16, 17, 27, 28, 29];
