//! Integration tests for condition matching and free-text resolution.

use symptomatch::catalog::{Catalog, Condition};
use symptomatch::error::Result;
use symptomatch::matching::{MatchingConfig, MatchingEngine};
use symptomatch::resolve::{SymptomResolver, SymptomSelection};

fn overlap(condition: &Condition, selected: &[&str]) -> usize {
    let mut profile: Vec<&str> = condition.symptoms.iter().map(String::as_str).collect();
    profile.sort_unstable();
    profile.dedup();
    profile.iter().filter(|id| selected.contains(id)).count()
}

#[test]
fn test_empty_selection() {
    let selected: Vec<&str> = Vec::new();
    assert!(symptomatch::match_conditions(&selected).is_empty());
}

#[test]
fn test_common_cold_ranks_first() {
    let conditions = symptomatch::match_conditions(&["fever", "cough", "sore_throat", "runny_nose"]);
    assert_eq!(conditions[0].name, "Common Cold");
}

#[test]
fn test_result_bounds_over_all_symptom_pairs() {
    let catalog = Catalog::builtin();
    let ids: Vec<&str> = catalog.symptoms().iter().map(|s| s.id.as_str()).collect();

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            let selected = [*a, *b];
            let results = symptomatch::match_conditions(&selected);
            let eligible = catalog
                .conditions()
                .iter()
                .filter(|c| overlap(c, &selected) >= 2)
                .count();

            assert!(results.len() <= 3);
            assert!(results.len() <= eligible);
            assert!(results.iter().all(|c| overlap(c, &selected) >= 2));
        }
    }
}

#[test]
fn test_scores_descending() {
    let engine = MatchingEngine::builtin();
    let selected = ["fever", "fatigue", "headache", "muscle_pain", "cough", "nausea"];
    let ranked = engine.rank(&selected);

    assert!(!ranked.is_empty());
    assert!(
        ranked
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score)
    );
    assert!(ranked.iter().all(|m| m.match_score > 0.0 && m.match_score <= 100.0));
}

#[test]
fn test_custom_catalog_from_json() -> Result<()> {
    let catalog = Catalog::from_json_str(
        r#"{
            "symptoms": [
                {"id": "a", "name": "Alpha", "category": "General"},
                {"id": "b", "name": "Beta", "category": "General"}
            ],
            "conditions": [{
                "id": "ab", "name": "AB", "description": "Both",
                "symptoms": ["a", "b"], "severity": "severe",
                "dietPlan": {"recommended": ["Water"], "avoid": [], "tips": [], "duration": "1 week"}
            }]
        }"#,
    )?;
    catalog.validate()?;

    let engine = MatchingEngine::new(&catalog, MatchingConfig::default());
    let conditions = engine.match_conditions(&["a", "b"]);
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].diet_plan.recommended, vec!["Water"]);

    Ok(())
}

#[test]
fn test_free_text_flows_into_matching() {
    let resolver = SymptomResolver::builtin();
    let mut selection = SymptomSelection::new();

    for text in ["Feverr", "coughh", "throat", "nose", "qqqqqqq"] {
        selection.add_text(&resolver, text);
    }

    assert_eq!(
        selection.ids(),
        &["fever", "cough", "sore_throat", "runny_nose"]
    );
    assert_eq!(selection.unresolved(), &["qqqqqqq"]);

    let conditions = symptomatch::match_conditions(selection.ids());
    assert_eq!(conditions[0].id, "common_cold");

    selection.clear();
    for text in ["breath", "wheezing", "cough", "chest"] {
        selection.add_text(&resolver, text);
    }
    assert_eq!(
        selection.ids(),
        &["shortness_breath", "wheezing", "cough", "chest_congestion"]
    );
}
