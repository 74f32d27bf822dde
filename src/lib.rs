//! # Symptomatch
//!
//! Symptom-to-condition matching with fuzzy symptom entry.
//!
//! ## Features
//!
//! - Levenshtein edit distance
//! - Spelling correction of free-text symptoms against the catalog vocabulary
//! - Tiered autocomplete over symptom names
//! - Ranking of known conditions by symptom overlap, with their diet plans
//!
//! The free functions at the crate root run against the builtin catalog:
//!
//! ```
//! let correction = symptomatch::correct_spelling("heaadache");
//! assert!(correction.was_changed);
//!
//! let conditions = symptomatch::match_conditions(&["fever", "cough", "sore_throat", "runny_nose"]);
//! assert_eq!(conditions[0].name, "Common Cold");
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod matching;
pub mod resolve;
pub mod spelling;

pub mod prelude {
    pub use crate::catalog::{Catalog, Condition, DietPlan, Severity, Symptom};
    pub use crate::error::{Result, SymptomatchError};
    pub use crate::matching::{ConditionMatch, MatchingConfig, MatchingEngine};
    pub use crate::resolve::{Resolution, SymptomResolver, SymptomSelection};
    pub use crate::spelling::{
        MatchTier, SpellingCorrection, SpellingCorrector, SuggestionEngine, SymptomDictionary,
    };
}

use crate::catalog::Condition;
use crate::matching::MatchingEngine;
use crate::spelling::{SpellingCorrection, SpellingCorrector, SuggestionEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Levenshtein distance between two strings, counted in characters.
pub fn distance(a: &str, b: &str) -> usize {
    spelling::levenshtein_distance(a, b)
}

/// Correct a free-text phrase against the builtin catalog vocabulary.
pub fn correct_spelling(input: &str) -> SpellingCorrection {
    SpellingCorrector::builtin().correct(input)
}

/// Up to five builtin symptom names for the typed input.
pub fn get_suggestions(input: &str) -> Vec<String> {
    SuggestionEngine::builtin().suggest(input)
}

/// Up to `max_suggestions` builtin symptom names for the typed input.
pub fn get_suggestions_with_limit(input: &str, max_suggestions: usize) -> Vec<String> {
    SuggestionEngine::builtin().suggest_n(input, max_suggestions)
}

/// The top three builtin conditions for a selection of symptom ids.
pub fn match_conditions<S: AsRef<str>>(selected_symptom_ids: &[S]) -> Vec<&'static Condition> {
    MatchingEngine::builtin().match_conditions(selected_symptom_ids)
}
