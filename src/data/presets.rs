//! Builtin structure presets for the Tiny Town tileset.
//!
//! Tile indices reference the 12-column tileset sheet. `-1` cells leave the
//! ground layer showing through (fence interiors, gaps between trees).

use crate::constants::EMPTY_TILE;
use crate::preset::{CatalogError, Preset, PresetCatalog};

const E: i32 = EMPTY_TILE;

/// Build the default catalog: houses, fenced areas, and forests.
pub fn builtin_catalog() -> Result<PresetCatalog, CatalogError> {
    let mut catalog = PresetCatalog::new();
    catalog.add_category("House", house_presets())?;
    catalog.add_category("Fence", fence_presets())?;
    catalog.add_category("Forest", forest_presets())?;
    Ok(catalog)
}

fn house_presets() -> Vec<Preset> {
    vec![
        // Skinny short house, grey roof over orange wood walls
        Preset {
            name: "House1".to_string(),
            width: 3,
            height: 3,
            tile_data: vec![
                49, 50, 51, //
                61, 62, 63, //
                73, 74, 75,
            ],
        },
        // Skinny short house, orange roof over grey stone walls
        Preset {
            name: "House2".to_string(),
            width: 3,
            height: 3,
            tile_data: vec![
                52, 53, 54, //
                64, 65, 66, //
                76, 77, 78,
            ],
        },
        // Wide short house with two chimneys
        Preset {
            name: "House3".to_string(),
            width: 5,
            height: 3,
            tile_data: vec![
                49, 50, 50, 50, 51, //
                61, 62, 62, 62, 63, //
                73, 74, 110, 74, 75,
            ],
        },
        // Skinny tall house with double doors
        Preset {
            name: "House4".to_string(),
            width: 3,
            height: 4,
            tile_data: vec![
                52, 53, 54, //
                64, 65, 66, //
                76, 77, 78, //
                85, 110, 111,
            ],
        },
    ]
}

fn fence_presets() -> Vec<Preset> {
    vec![
        // Small square fence, one tile fenced in
        Preset {
            name: "Fence1".to_string(),
            width: 3,
            height: 3,
            tile_data: vec![
                45, 46, 47, //
                57, E, 59, //
                69, 70, 71,
            ],
        },
        // Large square fence, nine tiles fenced in
        Preset {
            name: "Fence2".to_string(),
            width: 5,
            height: 5,
            tile_data: vec![
                45, 46, 46, 46, 47, //
                57, E, E, E, 59, //
                57, E, E, E, 59, //
                57, E, E, E, 59, //
                69, 70, 70, 70, 71,
            ],
        },
        // Medium rectangular fence, three tiles fenced in
        Preset {
            name: "Fence3".to_string(),
            width: 3,
            height: 5,
            tile_data: vec![
                45, 46, 47, //
                57, E, 59, //
                57, E, 59, //
                57, E, 59, //
                69, 70, 71,
            ],
        },
    ]
}

fn forest_presets() -> Vec<Preset> {
    vec![
        // Spread out, mostly green, two mushroom patches
        Preset {
            name: "Forest1".to_string(),
            width: 4,
            height: 4,
            tile_data: vec![
                4, E, 5, E, //
                E, 16, E, 17, //
                4, E, 107, E, //
                E, 107, E, 5,
            ],
        },
        // Crowded, mostly yellow, one mushroom and a beehive
        Preset {
            name: "Forest2".to_string(),
            width: 4,
            height: 3,
            tile_data: vec![
                5, 17, 5, 17, //
                29, 5, 29, 107, //
                17, 95, 5, 29,
            ],
        },
    ]
}
