//! Autocomplete suggestions over symptom names.
//!
//! Every symptom name is assigned the best [`MatchTier`] the input reaches:
//! a prefix match beats a word-prefix match, which beats a substring match,
//! which beats a fuzzy (edit-distance) match. Names are ranked by tier score
//! with ties kept in catalog order.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::spelling::levenshtein::{levenshtein_distance_threshold, max_phrase_distance};

/// How a symptom name matched the typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "distance")]
pub enum MatchTier {
    /// The name starts with the input.
    Prefix,
    /// A whitespace-delimited word of the name starts with the input.
    WordPrefix,
    /// The name contains the input.
    Substring,
    /// No structural match, but the name is within edit distance.
    Fuzzy(usize),
}

impl MatchTier {
    /// Ranking score, lower is better. Fuzzy matches score `3 + distance`.
    pub fn score(&self) -> usize {
        match self {
            MatchTier::Prefix => 0,
            MatchTier::WordPrefix => 1,
            MatchTier::Substring => 2,
            MatchTier::Fuzzy(distance) => 3 + distance,
        }
    }

    /// Classify a lowercased symptom name against a lowercased, non-empty input.
    pub fn classify(input_lower: &str, name_lower: &str) -> Option<MatchTier> {
        if name_lower.starts_with(input_lower) {
            return Some(MatchTier::Prefix);
        }
        if name_lower
            .split_whitespace()
            .any(|word| word.starts_with(input_lower))
        {
            return Some(MatchTier::WordPrefix);
        }
        if name_lower.contains(input_lower) {
            return Some(MatchTier::Substring);
        }

        let threshold = max_phrase_distance(name_lower.chars().count());
        levenshtein_distance_threshold(input_lower, name_lower, threshold).map(MatchTier::Fuzzy)
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Prefix => write!(f, "prefix"),
            MatchTier::WordPrefix => write!(f, "word prefix"),
            MatchTier::Substring => write!(f, "substring"),
            MatchTier::Fuzzy(distance) => write!(f, "fuzzy (distance {distance})"),
        }
    }
}

/// A symptom name offered for the typed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedSuggestion {
    pub symptom_id: String,
    pub name: String,
    pub tier: MatchTier,
}

impl RankedSuggestion {
    pub fn score(&self) -> usize {
        self.tier.score()
    }
}

/// Configuration for autocomplete suggestion generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Inputs shorter than this, counted before trimming, get no suggestions.
    pub min_input_len: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_suggestions: 5,
            min_input_len: 2,
        }
    }
}

/// Autocomplete engine over a catalog's symptom names.
pub struct SuggestionEngine<'a> {
    catalog: &'a Catalog,
    config: SuggestionConfig,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a new suggestion engine with the default configuration.
    pub fn new(catalog: &'a Catalog) -> Self {
        SuggestionEngine {
            catalog,
            config: SuggestionConfig::default(),
        }
    }

    /// Create a new suggestion engine with custom configuration.
    pub fn with_config(catalog: &'a Catalog, config: SuggestionConfig) -> Self {
        SuggestionEngine { catalog, config }
    }

    /// Create a suggestion engine over the builtin catalog.
    pub fn builtin() -> SuggestionEngine<'static> {
        SuggestionEngine::new(Catalog::builtin())
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Every matching symptom name with its tier, best first.
    ///
    /// The minimum length applies to the input as typed; matching then uses
    /// the trimmed, lowercased input.
    pub fn rank(&self, input: &str) -> Vec<RankedSuggestion> {
        if input.chars().count() < self.config.min_input_len {
            return Vec::new();
        }
        let input_lower = input.trim().to_lowercase();
        if input_lower.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<RankedSuggestion> = self
            .catalog
            .symptoms()
            .iter()
            .filter_map(|symptom| {
                MatchTier::classify(&input_lower, &symptom.name.to_lowercase()).map(|tier| {
                    RankedSuggestion {
                        symptom_id: symptom.id.clone(),
                        name: symptom.name.clone(),
                        tier,
                    }
                })
            })
            .collect();

        // Stable: equal scores keep catalog order
        ranked.sort_by_key(RankedSuggestion::score);

        debug!("{} symptom names match '{input}'", ranked.len());
        ranked
    }

    /// Up to `max_suggestions` ranked entries.
    pub fn suggest_ranked(&self, input: &str, max_suggestions: usize) -> Vec<RankedSuggestion> {
        let mut ranked = self.rank(input);
        ranked.truncate(max_suggestions);
        ranked
    }

    /// Symptom names for the input, limited by the configured maximum.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        self.suggest_n(input, self.config.max_suggestions)
    }

    /// Symptom names for the input, limited to `max_suggestions`.
    pub fn suggest_n(&self, input: &str, max_suggestions: usize) -> Vec<String> {
        self.suggest_ranked(input, max_suggestions)
            .into_iter()
            .map(|suggestion| suggestion.name)
            .collect()
    }
}
