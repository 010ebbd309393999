use noise::{NoiseFn, Simplex};

use crate::constants::*;
use crate::grid::TileSink;

/// Fill the ground layer with grass variants from a simplex noise field.
///
/// Each cell samples the field at (x/10, y/10); high values get the light
/// grass tile, mid values the mid variant, the rest the dark variant. Seeded
/// so that a full map generation is reproducible.
pub fn generate_ground(width: i32, height: i32, seed: u32, sink: &mut impl TileSink) {
    let field = Simplex::new(seed);
    for y in 0..height {
        for x in 0..width {
            let value = field.get([
                f64::from(x) / GROUND_NOISE_SCALE,
                f64::from(y) / GROUND_NOISE_SCALE,
            ]);
            let tile = if value > 0.5 {
                GRASS_LIGHT
            } else if value > 0.0 {
                GRASS_MID
            } else {
                GRASS_DARK
            };
            sink.place(tile, x, y);
        }
    }
}
