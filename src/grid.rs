use crate::constants::*;

/// Destination for tile writes from the generators.
///
/// `place` receives a tile index and an absolute grid coordinate. The
/// `EMPTY_TILE` sentinel means "leave this cell as-is", not "paint index -1".
pub trait TileSink {
    fn place(&mut self, tile: i32, x: i32, y: i32);
}

/// A flat row-major tile grid. Cells start out as `EMPTY_TILE`.
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<i32>,
}

impl TileGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![EMPTY_TILE; (width * height) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: i32) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    /// Render the grid as ASCII, one glyph per tile. Handy for eyeballing
    /// CLI output without a sprite renderer.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(glyph(self.tiles[(y * self.width + x) as usize]));
            }
            out.push('\n');
        }
        out
    }
}

impl TileSink for TileGrid {
    fn place(&mut self, tile: i32, x: i32, y: i32) {
        if tile == EMPTY_TILE {
            return;
        }
        self.set(x, y, tile);
    }
}

/// Map a tile index to a display glyph.
fn glyph(tile: i32) -> char {
    match tile {
        EMPTY_TILE => ' ',
        GRASS_LIGHT => '.',
        GRASS_MID => ',',
        GRASS_DARK => '`',
        t if HOUSE_TILES.contains(&t) => '#',
        t if TREE_TILES.contains(&t) => 'T',
        _ => '+',
    }
}
