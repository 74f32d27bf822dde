//! Word and phrase spelling correction against the symptom vocabulary.

use std::borrow::Cow;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::spelling::dictionary::SymptomDictionary;
use crate::spelling::levenshtein::{
    levenshtein_distance_threshold, max_phrase_distance, max_word_distance,
};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Maximum number of whole-phrase symptom name suggestions.
    pub max_suggestions: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig { max_suggestions: 5 }
    }
}

/// Result of correcting a free-text phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellingCorrection {
    /// The phrase with every word replaced by its closest dictionary word.
    pub corrected: String,
    /// Whether `corrected` differs from the trimmed input, ignoring case.
    pub was_changed: bool,
    /// Symptom names close to the whole phrase, best first.
    pub suggestions: Vec<String>,
}

impl SpellingCorrection {
    fn unchanged() -> Self {
        SpellingCorrection {
            corrected: String::new(),
            was_changed: false,
            suggestions: Vec::new(),
        }
    }
}

/// Correct a single word against a dictionary.
///
/// A word already in the dictionary is returned unchanged, original casing
/// included. Otherwise the closest dictionary word wins, provided it lies
/// within that word's own threshold ([`max_word_distance`]); among equally
/// close words the first one in dictionary order is kept. With no acceptable
/// candidate the original word is returned.
pub fn correct_word(word: &str, dictionary: &SymptomDictionary) -> String {
    let word_lower = word.to_lowercase();
    if dictionary.contains(&word_lower) {
        return word.to_string();
    }

    let mut best: Option<(&str, usize)> = None;
    for known in dictionary.words() {
        let threshold = max_word_distance(known.chars().count());
        if let Some(distance) = levenshtein_distance_threshold(&word_lower, known, threshold)
            && best.is_none_or(|(_, best_distance)| distance < best_distance)
        {
            best = Some((known.as_str(), distance));
        }
    }

    match best {
        Some((known, distance)) => {
            trace!("corrected '{word}' to '{known}' (distance {distance})");
            known.to_string()
        }
        None => word.to_string(),
    }
}

/// Spelling corrector over a catalog's symptom vocabulary.
pub struct SpellingCorrector<'a> {
    catalog: &'a Catalog,
    dictionary: Cow<'a, SymptomDictionary>,
    config: CorrectorConfig,
}

impl<'a> SpellingCorrector<'a> {
    /// Create a corrector for a catalog.
    ///
    /// The builtin catalog reuses its memoized dictionary; any other catalog
    /// gets its dictionary built here, once.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, CorrectorConfig::default())
    }

    /// Create a corrector with custom configuration.
    pub fn with_config(catalog: &'a Catalog, config: CorrectorConfig) -> Self {
        let dictionary = if std::ptr::eq(catalog, Catalog::builtin()) {
            Cow::Borrowed(SymptomDictionary::builtin())
        } else {
            Cow::Owned(SymptomDictionary::from_catalog(catalog))
        };

        SpellingCorrector {
            catalog,
            dictionary,
            config,
        }
    }

    /// Create a corrector over the builtin catalog.
    pub fn builtin() -> SpellingCorrector<'static> {
        SpellingCorrector::new(Catalog::builtin())
    }

    pub fn dictionary(&self) -> &SymptomDictionary {
        &self.dictionary
    }

    /// Correct a single word against this corrector's dictionary.
    pub fn correct_word(&self, word: &str) -> String {
        correct_word(word, &self.dictionary)
    }

    /// Check if a word is in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Correct a free-text phrase.
    ///
    /// Never fails: an empty or whitespace-only input yields an empty,
    /// unchanged correction with no suggestions.
    pub fn correct(&self, input: &str) -> SpellingCorrection {
        let input_lower = input.trim().to_lowercase();
        if input_lower.is_empty() {
            return SpellingCorrection::unchanged();
        }

        let suggestions = self.phrase_suggestions(&input_lower);

        let corrected = input
            .split_whitespace()
            .map(|word| self.correct_word(word))
            .collect::<Vec<_>>()
            .join(" ");
        let was_changed = corrected.to_lowercase() != input.trim().to_lowercase();

        debug!(
            "spelling correction for '{input}': '{corrected}' (changed: {was_changed}, {} suggestions)",
            suggestions.len()
        );

        SpellingCorrection {
            corrected,
            was_changed,
            suggestions,
        }
    }

    /// Symptom names within the phrase threshold of the whole input, closest
    /// first, ties in catalog order.
    fn phrase_suggestions(&self, input_lower: &str) -> Vec<String> {
        let mut candidates: Vec<(usize, &str)> = self
            .catalog
            .symptoms()
            .iter()
            .filter_map(|symptom| {
                let name_lower = symptom.name.to_lowercase();
                let threshold = max_phrase_distance(name_lower.chars().count());
                levenshtein_distance_threshold(input_lower, &name_lower, threshold)
                    .map(|distance| (distance, symptom.name.as_str()))
            })
            .collect();

        candidates.sort_by_key(|&(distance, _)| distance);
        candidates
            .into_iter()
            .take(self.config.max_suggestions)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Symptom;

    fn dictionary_of(words: &[&str]) -> SymptomDictionary {
        let mut dict = SymptomDictionary::new();
        for word in words {
            dict.add_word(word);
        }
        dict
    }

    #[test]
    fn test_correct_word_known_word_keeps_casing() {
        let dict = SymptomDictionary::builtin();
        assert_eq!(correct_word("Headache", dict), "Headache");
        assert_eq!(correct_word("FEVER", dict), "FEVER");
    }

    #[test]
    fn test_correct_word_fixes_typos() {
        let dict = SymptomDictionary::builtin();
        assert_eq!(correct_word("heaadache", dict), "headache");
        assert_eq!(correct_word("Feverr", dict), "fever");
        assert_eq!(correct_word("coughh", dict), "cough");
        assert_eq!(correct_word("throt", dict), "throat");
    }

    #[test]
    fn test_correct_word_rejects_distant_words() {
        let dict = SymptomDictionary::builtin();
        assert_eq!(correct_word("qqqqqqqq", dict), "qqqqqqqq");
        assert_eq!(correct_word("", dict), "");
    }

    #[test]
    fn test_correct_word_threshold_uses_candidate_length() {
        // "abcdefghijkl" has 12 chars, so it accepts up to distance 4
        let dict = dictionary_of(&["abcdefghijkl"]);
        assert_eq!(correct_word("abcdefgh", &dict), "abcdefghijkl");
        assert_eq!(correct_word("abcdefg", &dict), "abcdefg");
    }

    #[test]
    fn test_correct_word_ties_keep_first_entry() {
        let dict = dictionary_of(&["cart", "card"]);
        assert_eq!(correct_word("carx", &dict), "cart");

        let dict = dictionary_of(&["card", "cart"]);
        assert_eq!(correct_word("carx", &dict), "card");
    }

    #[test]
    fn test_correct_word_idempotent_on_recognized_words() {
        let dict = SymptomDictionary::builtin();
        for word in ["heaadache", "feverr", "nausia", "Dizzy", "qqqqqqqq"] {
            let once = correct_word(word, dict);
            if dict.contains(&once) {
                assert_eq!(correct_word(&once, dict), once);
            }
        }
    }

    #[test]
    fn test_correct_phrase() {
        let corrector = SpellingCorrector::builtin();

        let result = corrector.correct("heaadache");
        assert!(result.was_changed);
        assert_eq!(result.corrected, "headache");
        assert_eq!(result.suggestions.first().map(String::as_str), Some("Headache"));

        let result = corrector.correct("sore throt");
        assert!(result.was_changed);
        assert_eq!(result.corrected, "sore throat");
        assert_eq!(result.suggestions.first().map(String::as_str), Some("Sore Throat"));
    }

    #[test]
    fn test_correct_known_phrase_is_unchanged() {
        let corrector = SpellingCorrector::builtin();
        let result = corrector.correct("Sore Throat");
        assert!(!result.was_changed);
        assert_eq!(result.corrected, "Sore Throat");
        assert_eq!(result.suggestions.first().map(String::as_str), Some("Sore Throat"));
    }

    #[test]
    fn test_surrounding_whitespace_is_not_a_change() {
        let corrector = SpellingCorrector::builtin();
        for input in [" fever", "fever ", " fever ", "\tSore Throat\n"] {
            let result = corrector.correct(input);
            assert!(!result.was_changed, "input: {input:?}");
            assert_eq!(result.corrected, input.trim());
        }

        // Collapsed inner whitespace still counts
        assert!(corrector.correct("sore  throat").was_changed);
    }

    #[test]
    fn test_correct_empty_input() {
        let corrector = SpellingCorrector::builtin();
        for input in ["", "   ", "\t\n"] {
            let result = corrector.correct(input);
            assert_eq!(result.corrected, "");
            assert!(!result.was_changed);
            assert!(result.suggestions.is_empty());
        }
    }

    #[test]
    fn test_phrase_suggestions_sorted_and_truncated() {
        let catalog = Catalog::new(
            (0..8)
                .map(|i| Symptom::new(format!("s{i}"), format!("pain{i}"), "General"))
                .chain(std::iter::once(Symptom::new("pain", "Pain", "General")))
                .collect(),
            vec![],
        );
        let corrector = SpellingCorrector::new(&catalog);
        let result = corrector.correct("pain");

        // Exact name first, then the distance-1 names in catalog order
        assert_eq!(
            result.suggestions,
            vec!["Pain", "pain0", "pain1", "pain2", "pain3"]
        );
    }

    #[test]
    fn test_custom_catalog_builds_own_dictionary() {
        let catalog = Catalog::new(vec![Symptom::new("hiccups", "Hiccups", "General")], vec![]);
        let corrector = SpellingCorrector::new(&catalog);
        assert!(corrector.is_correct("hiccups"));
        assert!(corrector.is_correct("dizzy"));
        assert!(corrector.dictionary().contains("headache"));
        assert!(!corrector.dictionary().contains("throat"));
        assert_eq!(corrector.correct_word("hicups"), "hiccups");
    }

    #[test]
    fn test_serialized_field_names() {
        let corrector = SpellingCorrector::builtin();
        let json = serde_json::to_string(&corrector.correct("feverr")).unwrap();
        assert!(json.contains("\"wasChanged\":true"));
        assert!(json.contains("\"corrected\":\"fever\""));
    }
}
