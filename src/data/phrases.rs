//! Builtin description phrases for the structure presets.

use std::collections::HashMap;

use crate::describe::{PhraseBook, PhraseEntry};

/// Build the default phrase book covering the builtin presets.
pub fn builtin_phrase_book() -> PhraseBook {
    let mut book = PhraseBook::new();

    book.add_entry(PhraseEntry {
        prefix: "Ho".to_string(),
        display_name: "House".to_string(),
        variants: variants(&[
            (1, "House with grey roof, House with orange wood walls, House with one chimney, Skinny house, Short house, House with single door"),
            (2, "House with orange roof, House with grey stone walls, House with one chimney, Skinny house, Short house, House with single door"),
            (3, "House with grey roof, House with orange wood walls, House with two chimneys, Wide house, Short house, House with single door"),
            (4, "House with orange roof, House with grey stone walls, House with two chimneys, Skinny house, Tall house, House with double doors"),
        ]),
    });

    book.add_entry(PhraseEntry {
        prefix: "Fe".to_string(),
        display_name: "Fenced Area".to_string(),
        variants: variants(&[
            (1, "Square fence, three by three fence, one fenced in tile, Small fenced area"),
            (2, "Square fence, five by five fence, nine fenced in tiles, Large fenced area"),
            (3, "Rectangular fence, three by five fence, three fenced in tiles, Medium fenced area"),
        ]),
    });

    book.add_entry(PhraseEntry {
        prefix: "Fo".to_string(),
        display_name: "Forest".to_string(),
        variants: variants(&[
            (1, "Forest with two mushrooms, Mostly green forest, Spread out forest"),
            (2, "Forest with one mushroom, Mostly yellow forest, Crowded forest, Forest with one beehive"),
        ]),
    });

    book
}

fn variants(entries: &[(u32, &str)]) -> HashMap<u32, String> {
    entries
        .iter()
        .map(|&(variant, phrase)| (variant, phrase.to_string()))
        .collect()
}
