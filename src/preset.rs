use serde::Deserialize;
use thiserror::Error;

/// A named, fixed-size stamp of tile indices representing one structure
/// variant. Loaded once and referenced read-only during placement.
///
/// The name carries the category prefix and a trailing variant digit
/// (e.g. "House3"). `tile_data` is row-major, `width * height` long, and may
/// contain the `EMPTY_TILE` sentinel for cells the stamp leaves open.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preset {
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(rename = "data")]
    pub tile_data: Vec<i32>,
}

impl Preset {
    /// Tile index at a (col, row) offset within the stamp.
    pub fn tile_at(&self, col: i32, row: i32) -> i32 {
        self.tile_data[(row * self.width + col) as usize]
    }
}

/// Errors surfaced at catalog load. Malformed presets are fatal - the
/// generator never runs with a preset it cannot stamp correctly.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("preset {name:?} has non-positive dimensions {width}x{height}")]
    BadDimensions { name: String, width: i32, height: i32 },
    #[error("preset {name:?} has {actual} tiles, expected {width}x{height} = {expected}")]
    BadDataLength {
        name: String,
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },
    #[error("failed to parse preset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static lookup of structure presets grouped by category.
///
/// Categories keep their insertion order so that random draws are
/// reproducible under a seeded RNG. The category list is open-ended - the
/// placement engine works with whatever set the catalog declares.
#[derive(Debug, Default)]
pub struct PresetCatalog {
    categories: Vec<(String, Vec<Preset>)>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category with its preset list, validating every preset.
    pub fn add_category(&mut self, name: &str, presets: Vec<Preset>) -> Result<(), CatalogError> {
        for preset in &presets {
            validate(preset)?;
        }
        self.categories.push((name.to_string(), presets));
        Ok(())
    }

    /// Register a category from a JSON array of presets, in the shape the
    /// per-category preset files use.
    pub fn add_category_json(&mut self, name: &str, json: &str) -> Result<(), CatalogError> {
        let presets: Vec<Preset> = serde_json::from_str(json)?;
        self.add_category(name, presets)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn presets_in(&self, category: &str) -> Option<&[Preset]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, presets)| presets.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate(preset: &Preset) -> Result<(), CatalogError> {
    if preset.width <= 0 || preset.height <= 0 {
        return Err(CatalogError::BadDimensions {
            name: preset.name.clone(),
            width: preset.width,
            height: preset.height,
        });
    }
    let expected = (preset.width * preset.height) as usize;
    if preset.tile_data.len() != expected {
        return Err(CatalogError::BadDataLength {
            name: preset.name.clone(),
            width: preset.width,
            height: preset.height,
            expected,
            actual: preset.tile_data.len(),
        });
    }
    Ok(())
}
