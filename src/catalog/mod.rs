//! Static symptom and condition catalog.
//!
//! The catalog is read-only reference data consumed by the spelling and
//! matching engines. It is either the builtin dataset ([`Catalog::builtin`])
//! or a JSON document supplied by the caller ([`Catalog::load_from_file`]).
//! Nothing in the crate mutates a catalog after it has been constructed.

pub mod builtin;

use std::fmt;
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SymptomatchError};

lazy_static! {
    static ref BUILTIN_CATALOG: Catalog = builtin::catalog();
}

/// A symptom a user can declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    /// Unique, stable key referenced by conditions.
    pub id: String,
    /// Display form, also the target of fuzzy matching.
    pub name: String,
    /// Grouping label.
    pub category: String,
}

impl Symptom {
    pub fn new<I, N, C>(id: I, name: N, category: C) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        C: Into<String>,
    {
        Symptom {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// How serious a condition usually is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recovery guidance attached to a condition. Opaque to the matching logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub recommended: Vec<String>,
    pub avoid: Vec<String>,
    pub tips: Vec<String>,
    pub duration: String,
}

/// A known condition and the symptom profile that characterises it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Symptom ids, in display order. Matching treats them as a set.
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub diet_plan: DietPlan,
}

impl Condition {
    /// Check whether the condition's profile lists the given symptom id.
    pub fn has_symptom(&self, symptom_id: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom_id)
    }
}

/// The symptom and condition collections the engines operate on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
}

impl Catalog {
    /// Create a catalog from its two collections. No validation is performed.
    pub fn new(symptoms: Vec<Symptom>, conditions: Vec<Condition>) -> Self {
        Catalog {
            symptoms,
            conditions,
        }
    }

    /// The process-wide builtin dataset.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN_CATALOG
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the catalog to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Look up a symptom by id.
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    /// Look up a symptom by display name, ignoring case.
    pub fn symptom_by_name(&self, name: &str) -> Option<&Symptom> {
        let name_lower = name.trim().to_lowercase();
        self.symptoms
            .iter()
            .find(|s| s.name.to_lowercase() == name_lower)
    }

    /// Look up a condition by id.
    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Symptom categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.symptoms
            .iter()
            .map(|s| s.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Symptoms belonging to a category (case-insensitive), in catalog order.
    pub fn symptoms_in_category(&self, category: &str) -> Vec<&Symptom> {
        let category_lower = category.to_lowercase();
        self.symptoms
            .iter()
            .filter(|s| s.category.to_lowercase() == category_lower)
            .collect()
    }

    /// Check the data-integrity contract the engines rely on.
    ///
    /// The engines never call this: a dangling symptom reference only
    /// contributes zero overlap at match time.
    pub fn validate(&self) -> Result<()> {
        let mut symptom_ids = AHashSet::new();
        for symptom in &self.symptoms {
            if symptom.id.is_empty() {
                return Err(SymptomatchError::catalog(format!(
                    "symptom '{}' has an empty id",
                    symptom.name
                )));
            }
            if !symptom_ids.insert(symptom.id.as_str()) {
                return Err(SymptomatchError::catalog(format!(
                    "duplicate symptom id '{}'",
                    symptom.id
                )));
            }
        }

        let mut condition_ids = AHashSet::new();
        for condition in &self.conditions {
            if !condition_ids.insert(condition.id.as_str()) {
                return Err(SymptomatchError::catalog(format!(
                    "duplicate condition id '{}'",
                    condition.id
                )));
            }
            if condition.symptoms.is_empty() {
                return Err(SymptomatchError::catalog(format!(
                    "condition '{}' lists no symptoms",
                    condition.id
                )));
            }
            if let Some(dangling) = condition
                .symptoms
                .iter()
                .find(|id| !symptom_ids.contains(id.as_str()))
            {
                return Err(SymptomatchError::catalog(format!(
                    "condition '{}' references unknown symptom '{}'",
                    condition.id, dangling
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![
                Symptom::new("fever", "Fever", "General"),
                Symptom::new("cough", "Cough", "Respiratory"),
                Symptom::new("rash", "Rash", "Skin"),
            ],
            vec![Condition {
                id: "cold".to_string(),
                name: "Cold".to_string(),
                description: "A cold.".to_string(),
                symptoms: vec!["fever".to_string(), "cough".to_string()],
                severity: Severity::Mild,
                diet_plan: DietPlan::default(),
            }],
        )
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.symptoms().len(), 37);
        assert_eq!(catalog.conditions().len(), 10);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.symptom("sore_throat").unwrap().name, "Sore Throat");
        assert_eq!(
            catalog.symptom_by_name("  sore THROAT ").unwrap().id,
            "sore_throat"
        );
        assert!(catalog.symptom("sneezing").is_none());
        assert_eq!(catalog.condition("flu").unwrap().name, "Influenza (Flu)");
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec![
                "General",
                "Respiratory",
                "Digestive",
                "Neurological",
                "Musculoskeletal",
                "Skin",
                "Cardiovascular"
            ]
        );

        let skin: Vec<&str> = catalog
            .symptoms_in_category("skin")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(skin, vec!["rash", "itching", "dry_skin", "skin_discoloration"]);
    }

    #[test]
    fn test_validate_rejects_dangling_reference() {
        let mut catalog = small_catalog();
        assert!(catalog.validate().is_ok());

        catalog.conditions[0].symptoms.push("sneezing".to_string());
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, SymptomatchError::Catalog(_)));
        assert!(err.to_string().contains("sneezing"));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_empty_profiles() {
        let mut catalog = small_catalog();
        catalog.symptoms.push(Symptom::new("fever", "High Fever", "General"));
        assert!(catalog.validate().is_err());

        let mut catalog = small_catalog();
        catalog.conditions[0].symptoms.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_uses_camel_case() {
        let catalog = small_catalog();
        let json = catalog.to_json_string().unwrap();
        assert!(json.contains("\"dietPlan\""));
        assert!(json.contains("\"severity\": \"mild\""));

        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{
                "symptoms": [{{"id": "fever", "name": "Fever", "category": "General"}}],
                "conditions": []
            }}"#
        )
        .unwrap();
        temp_file.flush().unwrap();

        let catalog = Catalog::load_from_file(temp_file.path()).unwrap();
        assert_eq!(catalog.symptoms().len(), 1);
        assert!(catalog.conditions().is_empty());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Catalog::load_from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, SymptomatchError::Io(_)));
    }
}
