//! Builtin definition tables: structure presets and description phrases.
//!
//! Everything here is data. The engine consumes it through the
//! `PresetCatalog` and `PhraseBook` types and never branches on the
//! contents, so new categories and variants slot in without code changes.

mod phrases;
mod presets;

pub use phrases::builtin_phrase_book;
pub use presets::builtin_catalog;
