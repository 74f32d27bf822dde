//! Fuzzy text matching for free-text symptom entry.
//!
//! This module turns what a user types into catalog vocabulary: an
//! edit-distance core, the correction dictionary derived from symptom names,
//! word and phrase spelling correction, and tiered autocomplete over symptom
//! names.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use suggest::*;
