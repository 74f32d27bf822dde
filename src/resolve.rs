//! Free-text symptom resolution.
//!
//! Free text only becomes a symptom id by going through the fuzzy matcher:
//! an exact name or id match first, then the spelling-corrected phrase, then
//! a prefix, word-prefix or substring autocomplete hit, and only then the
//! closest name by edit distance. [`SymptomSelection`]
//! gathers explicit ids and resolved free text into the id list handed to the
//! matching engine.

use log::{debug, info};
use serde::Serialize;

use crate::catalog::{Catalog, Symptom};
use crate::spelling::corrector::SpellingCorrector;
use crate::spelling::suggest::{MatchTier, SuggestionEngine};

/// How a piece of free text was mapped onto the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Resolution<'a> {
    /// The text is a symptom name or id.
    Exact { symptom: &'a Symptom },
    /// The spelling-corrected text is a symptom name.
    Corrected {
        symptom: &'a Symptom,
        corrected: String,
    },
    /// The text is close to a symptom name without naming one.
    Suggested {
        symptom: &'a Symptom,
        suggestion: String,
    },
    /// Nothing in the catalog is close enough.
    Unresolved,
}

impl<'a> Resolution<'a> {
    pub fn symptom(&self) -> Option<&'a Symptom> {
        match self {
            Resolution::Exact { symptom }
            | Resolution::Corrected { symptom, .. }
            | Resolution::Suggested { symptom, .. } => Some(symptom),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.symptom().is_some()
    }
}

/// Maps free text onto catalog symptoms.
pub struct SymptomResolver<'a> {
    catalog: &'a Catalog,
    corrector: SpellingCorrector<'a>,
    suggestions: SuggestionEngine<'a>,
}

impl<'a> SymptomResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        SymptomResolver {
            catalog,
            corrector: SpellingCorrector::new(catalog),
            suggestions: SuggestionEngine::new(catalog),
        }
    }

    /// Create a resolver over the builtin catalog.
    pub fn builtin() -> SymptomResolver<'static> {
        SymptomResolver::new(Catalog::builtin())
    }

    /// Resolve free text to a symptom.
    pub fn resolve(&self, text: &str) -> Resolution<'a> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Resolution::Unresolved;
        }

        if let Some(symptom) = self
            .catalog
            .symptom_by_name(trimmed)
            .or_else(|| self.symptom_by_id(trimmed))
        {
            return Resolution::Exact { symptom };
        }

        let correction = self.corrector.correct(trimmed);
        if let Some(symptom) = self.catalog.symptom_by_name(&correction.corrected) {
            return Resolution::Corrected {
                symptom,
                corrected: correction.corrected,
            };
        }

        let top = self.suggestions.rank(trimmed).into_iter().next();

        // A structural autocomplete hit beats any edit-distance guess
        let suggestion = match top {
            Some(top) if !matches!(top.tier, MatchTier::Fuzzy(_)) => Some(top.name),
            top => correction
                .suggestions
                .into_iter()
                .next()
                .or_else(|| top.map(|fuzzy| fuzzy.name)),
        };
        if let Some(suggestion) = suggestion
            && let Some(symptom) = self.catalog.symptom_by_name(&suggestion)
        {
            return Resolution::Suggested {
                symptom,
                suggestion,
            };
        }

        debug!("no symptom resolves '{trimmed}'");
        Resolution::Unresolved
    }

    fn symptom_by_id(&self, text: &str) -> Option<&'a Symptom> {
        let id = text.to_lowercase();
        self.catalog.symptoms().iter().find(|s| s.id == id)
    }
}

/// The symptom ids a user has declared, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymptomSelection {
    ids: Vec<String>,
    unresolved: Vec<String>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom id. Returns `false` if it was already selected.
    pub fn add_id<S: Into<String>>(&mut self, id: S) -> bool {
        let id = id.into();
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Resolve free text and add the resulting id, remembering the text when
    /// nothing resolves.
    pub fn add_text<'a>(&mut self, resolver: &SymptomResolver<'a>, text: &str) -> Resolution<'a> {
        let resolution = resolver.resolve(text);
        match resolution.symptom() {
            Some(symptom) => {
                info!("'{}' resolved to symptom '{}'", text.trim(), symptom.id);
                self.add_id(symptom.id.as_str());
            }
            None => {
                let text = text.trim().to_string();
                if !text.is_empty() && !self.unresolved.contains(&text) {
                    self.unresolved.push(text);
                }
            }
        }
        resolution
    }

    /// Remove a symptom id. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Free-text entries that did not resolve to any symptom.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.unresolved.clear();
    }
}
