use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

use crate::placement::PlacedStructure;

/// Phrase table for one structure category, keyed by the preset-name prefix
/// (e.g. "Ho" for "House3"). `display_name` names the category in relational
/// phrases; `variants` maps the trailing variant digit to the canned
/// description for that preset.
#[derive(Debug, Clone, Deserialize)]
pub struct PhraseEntry {
    pub prefix: String,
    pub display_name: String,
    pub variants: HashMap<u32, String>,
}

/// Data-driven lookup from preset code to descriptive phrases. Categories
/// and variants are plain data, so new structure kinds need no code changes.
#[derive(Debug, Clone, Default)]
pub struct PhraseBook {
    entries: Vec<PhraseEntry>,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: PhraseEntry) {
        self.entries.push(entry);
    }

    /// Load a phrase book from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<PhraseEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Resolve a preset code to (category display name, full description).
    /// Unknown codes resolve to empty strings so downstream indices stay
    /// aligned with the structure list.
    fn describe(&self, preset_code: &str) -> (String, String) {
        let entry = self
            .entries
            .iter()
            .find(|e| preset_code.starts_with(&e.prefix));
        let Some(entry) = entry else {
            warn!("no phrase entry for preset code {preset_code:?}");
            return (String::new(), String::new());
        };

        let label = entry.display_name.clone();
        let variant = preset_code.chars().last().and_then(|c| c.to_digit(10));
        match variant.and_then(|v| entry.variants.get(&v)) {
            Some(phrase) => (label.clone(), format!("{label}, {phrase}")),
            None => {
                warn!("no variant phrase for preset code {preset_code:?}");
                (label.clone(), label)
            }
        }
    }
}

/// Fill in `text_description` for an ordered structure list.
///
/// First pass assigns each structure its canned phrase. Second pass appends
/// relational phrases based on generation order, treating the list as rows
/// of `partitions_per_row` elements.
///
/// The neighbor guards use strict `> 0` comparisons, so index 0 and 1 never
/// get a "left" phrase and indices up to `partitions_per_row` never get an
/// "above" phrase. Kept for output compatibility; flagged for review.
pub fn describe_structures(
    structures: &mut [PlacedStructure],
    phrase_book: &PhraseBook,
    partitions_per_row: usize,
) {
    let mut labels = Vec::with_capacity(structures.len());
    for structure in structures.iter_mut() {
        let (label, description) = phrase_book.describe(&structure.preset_code);
        structure.text_description = description;
        labels.push(label);
    }

    let len = structures.len();
    for i in 0..len {
        let mut description = std::mem::take(&mut structures[i].text_description);
        if i > 1 {
            description.push_str(&format!(
                ", {} with a {} to the left",
                labels[i],
                labels[i - 1]
            ));
        }
        if i + 1 < len {
            description.push_str(&format!(
                ", {} with a {} to the right",
                labels[i],
                labels[i + 1]
            ));
        }
        if i > partitions_per_row {
            description.push_str(&format!(
                ", {} with a {} above it",
                labels[i],
                labels[i - partitions_per_row]
            ));
        }
        if i + partitions_per_row < len {
            description.push_str(&format!(
                ", {} with a {} below it",
                labels[i],
                labels[i + partitions_per_row]
            ));
        }
        structures[i].text_description = description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> PhraseBook {
        let mut book = PhraseBook::new();
        book.add_entry(PhraseEntry {
            prefix: "Ho".to_string(),
            display_name: "House".to_string(),
            variants: [(1, "House with grey roof".to_string())].into_iter().collect(),
        });
        book.add_entry(PhraseEntry {
            prefix: "Fo".to_string(),
            display_name: "Forest".to_string(),
            variants: [(1, "Spread out forest".to_string())].into_iter().collect(),
        });
        book
    }

    fn structures(codes: &[&str]) -> Vec<PlacedStructure> {
        codes
            .iter()
            .map(|code| PlacedStructure {
                top_left: (0, 0),
                bottom_right: (0, 0),
                preset_code: code.to_string(),
                text_description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_canned_phrase_lookup() {
        let mut list = structures(&["House1"]);
        describe_structures(&mut list, &book(), 4);
        assert_eq!(list[0].text_description, "House, House with grey roof");
    }

    #[test]
    fn test_unknown_code_gets_empty_description() {
        let mut list = structures(&["Tower9"]);
        describe_structures(&mut list, &book(), 4);
        assert_eq!(list[0].text_description, "");
    }

    #[test]
    fn test_left_phrase_boundary_quirk() {
        // 16 structures laid out 4 per row
        let codes = vec!["House1"; 16];
        let mut list = structures(&codes);
        describe_structures(&mut list, &book(), 4);

        // Indices 0 and 1 never get a "left" phrase (strict > 0 guard)
        assert!(!list[0].text_description.contains("to the left"));
        assert!(!list[1].text_description.contains("to the left"));
        // Index 2 does, once index 1 has a label
        assert!(list[2].text_description.contains("to the left"));
    }

    #[test]
    fn test_above_phrase_boundary_quirk() {
        let codes = vec!["House1"; 16];
        let mut list = structures(&codes);
        describe_structures(&mut list, &book(), 4);

        // Strict guard: index 4 (first of row 1) gets no "above" phrase
        assert!(!list[4].text_description.contains("above it"));
        assert!(list[5].text_description.contains("above it"));
    }

    #[test]
    fn test_right_and_below_edges() {
        let codes = vec!["House1"; 16];
        let mut list = structures(&codes);
        describe_structures(&mut list, &book(), 4);

        assert!(list[0].text_description.contains("to the right"));
        assert!(!list[15].text_description.contains("to the right"));
        assert!(list[11].text_description.contains("below it"));
        assert!(!list[12].text_description.contains("below it"));
    }

    #[test]
    fn test_relational_phrases_use_neighbor_labels() {
        let mut list = structures(&["House1", "Forest1", "House1", "Forest1"]);
        describe_structures(&mut list, &book(), 4);
        assert!(list[2]
            .text_description
            .contains("House with a Forest to the left"));
        assert!(list[2]
            .text_description
            .contains("House with a Forest to the right"));
    }

    #[test]
    fn test_phrase_book_from_json() {
        let json = r#"[
            {
                "prefix": "Ho",
                "display_name": "House",
                "variants": { "1": "House with grey roof" }
            }
        ]"#;
        let book = PhraseBook::from_json(json).unwrap();
        let mut list = structures(&["House1"]);
        describe_structures(&mut list, &book, 4);
        assert_eq!(list[0].text_description, "House, House with grey roof");
    }
}
