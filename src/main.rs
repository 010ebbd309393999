#![allow(dead_code)]

mod cluster;
mod constants;
mod data;
mod describe;
mod grid;
mod partition;
mod placement;
mod preset;
mod terrain;

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use constants::*;
use grid::TileGrid;
use placement::{generate_town, GenConfig, PlacedStructure, ResultSink};

/// Result-sink that prints each landmark with its bounding box.
struct StdoutLandmarks;

impl ResultSink for StdoutLandmarks {
    fn publish(&mut self, structures: &[PlacedStructure]) {
        println!("Landmarks:");
        for s in structures {
            println!("  {}: {}", s.preset_code, s.text_description);
            println!(
                "    [({}, {}), ({}, {})]",
                s.top_left.0, s.top_left.1, s.bottom_right.0, s.bottom_right.1
            );
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => rand::random(),
    };
    log::info!("generating town map with seed {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let catalog = data::builtin_catalog()?;
    let phrase_book = data::builtin_phrase_book();
    let config = GenConfig::default();

    let mut map = TileGrid::new(config.grid_width, config.grid_height);
    terrain::generate_ground(config.grid_width, config.grid_height, rng.gen(), &mut map);

    let mut landmarks = StdoutLandmarks;
    let report = generate_town(
        &config,
        &catalog,
        &phrase_book,
        &mut map,
        &mut landmarks,
        &mut rng,
    )?;

    println!("{}", map.render_ascii());
    for (category, count) in &report.category_counts {
        println!("{category}: {count}");
    }
    if report.skipped_partitions > 0 {
        println!("Skipped partitions: {}", report.skipped_partitions);
    }

    // Re-detect house clusters from the raw tile layer, the way the
    // extraction scene did, and report their bounding boxes.
    let house_set: HashSet<i32> = HOUSE_TILES.iter().copied().collect();
    let house_coords = cluster::extract_category_tiles(&map.tiles, map.width, &house_set);
    println!("Detected house clusters:");
    for (i, group) in cluster::find_clusters(&house_coords).iter().enumerate() {
        if let Some((top_left, bottom_right)) = cluster::bounding_box(group) {
            println!(
                "  House {}: [({}, {}), ({}, {})]",
                i + 1,
                top_left.0,
                top_left.1,
                bottom_right.0,
                bottom_right.1
            );
        }
    }

    Ok(())
}
