use std::collections::HashSet;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::constants::*;
use crate::describe::{describe_structures, PhraseBook};
use crate::grid::TileSink;
use crate::partition::plan_partitions;
use crate::preset::{Preset, PresetCatalog};

/// Parameterization of one generation pass. Replaces the hardcoded
/// per-variant constants with a single config struct.
#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub partition_rows: i32,
    pub partition_cols: i32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            grid_width: MAP_WIDTH,
            grid_height: MAP_HEIGHT,
            partition_rows: PARTITION_ROWS,
            partition_cols: PARTITION_COLS,
        }
    }
}

/// One committed structure placement. Immutable once created; the
/// description is filled in by the label pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedStructure {
    pub top_left: (i32, i32),
    pub bottom_right: (i32, i32),
    pub preset_code: String,
    pub text_description: String,
}

/// Receiver for the final structure list; called exactly once per pass,
/// after descriptions are composed.
pub trait ResultSink {
    fn publish(&mut self, structures: &[PlacedStructure]);
}

/// Fatal generation failures. Placement-impossible conditions (preset too
/// large, collision) are not errors - they skip the partition.
#[derive(Debug, Error, PartialEq)]
pub enum GenError {
    #[error("no presets in category {0:?}")]
    EmptyCategory(String),
    #[error("preset catalog declares no categories")]
    EmptyCatalog,
}

/// Result of one generation pass. Category counts are pass-local
/// accumulators, in catalog category order.
#[derive(Debug, Default)]
pub struct GenReport {
    pub structures: Vec<PlacedStructure>,
    pub category_counts: Vec<(String, u32)>,
    pub skipped_partitions: u32,
}

/// Run one placement pass: for each partition pick a random preset of a
/// random category and try exactly one position inside the partition.
///
/// At most one structure lands per partition. A partition contributes
/// nothing when the drawn preset does not fit its bounds or the drawn
/// position collides with occupied tiles - callers must not assume
/// `rows * cols` structures.
pub fn generate_structures(
    config: &GenConfig,
    catalog: &PresetCatalog,
    sink: &mut impl TileSink,
    rng: &mut impl Rng,
) -> Result<GenReport, GenError> {
    if catalog.is_empty() {
        return Err(GenError::EmptyCatalog);
    }
    let categories: Vec<&str> = catalog.categories().collect();

    let mut occupied: HashSet<(i32, i32)> = HashSet::new();
    let mut category_counts: Vec<(String, u32)> =
        categories.iter().map(|c| (c.to_string(), 0)).collect();
    let mut structures = Vec::new();
    let mut skipped_partitions = 0;

    let partitions = plan_partitions(
        config.grid_width,
        config.grid_height,
        config.partition_rows,
        config.partition_cols,
    );

    for partition in partitions {
        let category_idx = rng.gen_range(0..categories.len());
        let category = categories[category_idx];
        let presets = catalog.presets_in(category).unwrap_or(&[]);
        let Some(preset) = presets.choose(rng) else {
            return Err(GenError::EmptyCategory(category.to_string()));
        };

        // An inverted placement window means the preset cannot fit this
        // partition at all. Skip rather than clamp into a neighbor.
        if preset.width > partition.width || preset.height > partition.height {
            debug!(
                "skipping partition at ({}, {}): preset {} is {}x{}, partition is {}x{}",
                partition.start_x,
                partition.start_y,
                preset.name,
                preset.width,
                preset.height,
                partition.width,
                partition.height
            );
            skipped_partitions += 1;
            continue;
        }

        let pos_x = rng.gen_range(partition.start_x..=partition.start_x + partition.width - preset.width);
        let pos_y = rng.gen_range(partition.start_y..=partition.start_y + partition.height - preset.height);

        // Single attempt per partition: a collision skips, no retry.
        if !placement_valid(preset, pos_x, pos_y, &occupied) {
            debug!(
                "skipping partition at ({}, {}): preset {} collides at ({}, {})",
                partition.start_x, partition.start_y, preset.name, pos_x, pos_y
            );
            skipped_partitions += 1;
            continue;
        }

        stamp(preset, pos_x, pos_y, sink);
        mark_occupied(preset, pos_x, pos_y, &mut occupied);
        category_counts[category_idx].1 += 1;

        structures.push(PlacedStructure {
            top_left: (pos_x, pos_y),
            bottom_right: (pos_x + preset.width - 1, pos_y + preset.height - 1),
            preset_code: preset.name.clone(),
            text_description: String::new(),
        });
    }

    info!(
        "placed {} structures, skipped {} partitions",
        structures.len(),
        skipped_partitions
    );

    Ok(GenReport {
        structures,
        category_counts,
        skipped_partitions,
    })
}

/// Full pass: place structures, compose descriptions, publish once.
pub fn generate_town(
    config: &GenConfig,
    catalog: &PresetCatalog,
    phrase_book: &PhraseBook,
    tile_sink: &mut impl TileSink,
    result_sink: &mut impl ResultSink,
    rng: &mut impl Rng,
) -> Result<GenReport, GenError> {
    let mut report = generate_structures(config, catalog, tile_sink, rng)?;
    describe_structures(
        &mut report.structures,
        phrase_book,
        config.partition_cols as usize,
    );
    result_sink.publish(&report.structures);
    Ok(report)
}

/// True when no cell the preset would cover is already occupied.
fn placement_valid(preset: &Preset, start_x: i32, start_y: i32, occupied: &HashSet<(i32, i32)>) -> bool {
    for row in 0..preset.height {
        for col in 0..preset.width {
            if occupied.contains(&(start_x + col, start_y + row)) {
                return false;
            }
        }
    }
    true
}

/// Write every stamp cell through the sink. Sentinel cells pass through
/// unchanged; the sink is responsible for leaving them empty.
fn stamp(preset: &Preset, start_x: i32, start_y: i32, sink: &mut impl TileSink) {
    for row in 0..preset.height {
        for col in 0..preset.width {
            sink.place(preset.tile_at(col, row), start_x + col, start_y + row);
        }
    }
}

fn mark_occupied(preset: &Preset, start_x: i32, start_y: i32, occupied: &mut HashSet<(i32, i32)>) {
    for row in 0..preset.height {
        for col in 0..preset.width {
            occupied.insert((start_x + col, start_y + row));
        }
    }
}
