//! Symptom-to-condition matching.
//!
//! A condition is scored by how much of its symptom profile the selection
//! explains (match percentage) and how much of the selection it explains
//! (coverage percentage); the score is the mean of the two. Conditions sharing
//! fewer than [`MatchingConfig::min_overlap`] symptoms with the selection are
//! dropped, the rest are ranked by score with ties kept in catalog order.
//!
//! # Example
//!
//! ```
//! use symptomatch::catalog::Catalog;
//! use symptomatch::matching::{MatchingConfig, MatchingEngine};
//!
//! let engine = MatchingEngine::new(Catalog::builtin(), MatchingConfig::default());
//! let conditions = engine.match_conditions(&["fever", "cough", "sore_throat", "runny_nose"]);
//! assert_eq!(conditions[0].name, "Common Cold");
//! ```

use std::cmp::Ordering;

use ahash::AHashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Condition};

/// Configuration for condition matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Conditions sharing fewer symptoms with the selection are excluded.
    pub min_overlap: usize,
    /// Maximum number of conditions returned.
    pub max_results: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        MatchingConfig {
            min_overlap: 2,
            max_results: 3,
        }
    }
}

/// A scored condition for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionMatch<'a> {
    pub condition: &'a Condition,
    /// Mean of match and coverage percentages, 0 to 100.
    pub match_score: f64,
    /// Number of the condition's symptoms present in the selection.
    pub overlap: usize,
    /// The overlapping symptom ids, in the condition's order.
    pub matched_symptoms: Vec<&'a str>,
}

/// Ranks catalog conditions against a selection of symptom ids.
pub struct MatchingEngine<'a> {
    catalog: &'a Catalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(catalog: &'a Catalog, config: MatchingConfig) -> Self {
        MatchingEngine { catalog, config }
    }

    /// Create a matching engine over the builtin catalog.
    pub fn builtin() -> MatchingEngine<'static> {
        MatchingEngine::new(Catalog::builtin(), MatchingConfig::default())
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score a single condition against a selection.
    ///
    /// Duplicate ids in the selection count once toward the overlap but every
    /// entry counts toward the coverage denominator.
    pub fn score<S: AsRef<str>>(&self, condition: &'a Condition, selected: &[S]) -> ConditionMatch<'a> {
        let selected_set: AHashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();
        self.score_with_set(condition, &selected_set, selected.len())
    }

    fn score_with_set(
        &self,
        condition: &'a Condition,
        selected_set: &AHashSet<&str>,
        selected_len: usize,
    ) -> ConditionMatch<'a> {
        let mut seen = AHashSet::new();
        let profile: Vec<&'a str> = condition
            .symptoms
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();

        let matched_symptoms: Vec<&'a str> = profile
            .iter()
            .copied()
            .filter(|id| selected_set.contains(id))
            .collect();
        let overlap = matched_symptoms.len();

        let match_percentage = percentage(overlap, profile.len());
        let coverage_percentage = percentage(overlap, selected_len);

        ConditionMatch {
            condition,
            match_score: (match_percentage + coverage_percentage) / 2.0,
            overlap,
            matched_symptoms,
        }
    }

    /// Every condition meeting the overlap floor, best first, untruncated.
    pub fn rank<S: AsRef<str>>(&self, selected: &[S]) -> Vec<ConditionMatch<'a>> {
        if selected.is_empty() {
            return Vec::new();
        }

        let selected_set: AHashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();
        let mut matches: Vec<ConditionMatch<'a>> = self
            .catalog
            .conditions()
            .iter()
            .map(|condition| self.score_with_set(condition, &selected_set, selected.len()))
            .filter(|m| m.overlap >= self.config.min_overlap)
            .collect();

        // Stable: equal scores keep catalog order
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            "{} of {} conditions share at least {} symptoms with the selection",
            matches.len(),
            self.catalog.conditions().len(),
            self.config.min_overlap
        );
        matches
    }

    /// The best `max_results` scored matches.
    pub fn top_matches<S: AsRef<str>>(&self, selected: &[S]) -> Vec<ConditionMatch<'a>> {
        let mut matches = self.rank(selected);
        matches.truncate(self.config.max_results);
        matches
    }

    /// The best `max_results` conditions for a selection of symptom ids.
    pub fn match_conditions<S: AsRef<str>>(&self, selected: &[S]) -> Vec<&'a Condition> {
        self.top_matches(selected)
            .into_iter()
            .map(|m| m.condition)
            .collect()
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}
