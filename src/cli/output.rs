//! Output formatting for CLI commands.

use serde::Serialize;

use crate::catalog::{Condition, Symptom};
use crate::cli::args::{OutputFormat, SymptomatchArgs};
use crate::error::Result;
use crate::matching::ConditionMatch;
use crate::resolve::Resolution;
use crate::spelling::RankedSuggestion;

/// Result structure for the distance command.
#[derive(Debug, Serialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub distance: usize,
}

/// Result structure for autocomplete.
#[derive(Debug, Serialize)]
pub struct SuggestionResults {
    pub input: String,
    pub suggestions: Vec<RankedSuggestion>,
    #[serde(skip)]
    pub show_tiers: bool,
}

/// A free-text entry and what it resolved to.
#[derive(Debug, Serialize)]
pub struct ResolvedText<'a> {
    pub text: String,
    pub resolution: Resolution<'a>,
}

/// Result structure for condition matching.
#[derive(Debug, Serialize)]
pub struct MatchResults<'a> {
    pub selected: Vec<String>,
    pub resolved: Vec<ResolvedText<'a>>,
    pub unresolved: Vec<String>,
    pub matches: Vec<ConditionMatch<'a>>,
    #[serde(skip)]
    pub detailed: bool,
}

/// Result structure for listing symptoms.
#[derive(Debug, Serialize)]
pub struct SymptomList<'a> {
    pub category: Option<String>,
    pub symptoms: Vec<&'a Symptom>,
}

/// Result structure for listing conditions.
#[derive(Debug, Serialize)]
pub struct ConditionList<'a> {
    pub conditions: Vec<&'a Condition>,
}

/// Result structure for catalog validation.
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub source: String,
    pub symptoms: usize,
    pub conditions: usize,
    pub categories: usize,
}

/// A result that knows how to print itself for people.
pub trait HumanOutput {
    fn print_human(&self) -> Result<()>;
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &SymptomatchArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human()
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SymptomatchArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for DistanceResult {
    fn print_human(&self) -> Result<()> {
        println!("{}", self.distance);
        Ok(())
    }
}

impl HumanOutput for crate::spelling::SpellingCorrection {
    fn print_human(&self) -> Result<()> {
        output_generic_human(&serde_json::to_value(self)?)
    }
}

impl HumanOutput for ValidationResult {
    fn print_human(&self) -> Result<()> {
        println!("Catalog OK: {}", self.source);
        output_generic_human(&serde_json::json!({
            "symptoms": self.symptoms,
            "conditions": self.conditions,
            "categories": self.categories,
        }))
    }
}

impl HumanOutput for SuggestionResults {
    fn print_human(&self) -> Result<()> {
        if self.suggestions.is_empty() {
            println!("No suggestions for '{}'", self.input);
            return Ok(());
        }

        for suggestion in &self.suggestions {
            if self.show_tiers {
                println!("{} ({})", suggestion.name, suggestion.tier);
            } else {
                println!("{}", suggestion.name);
            }
        }
        Ok(())
    }
}

impl HumanOutput for MatchResults<'_> {
    fn print_human(&self) -> Result<()> {
        for resolved in &self.resolved {
            match &resolved.resolution {
                Resolution::Exact { .. } | Resolution::Unresolved => {}
                Resolution::Corrected { symptom, .. } | Resolution::Suggested { symptom, .. } => {
                    println!("Interpreted '{}' as {}", resolved.text, symptom.name);
                }
            }
        }
        for text in &self.unresolved {
            println!("Could not recognize '{text}'");
        }
        if !self.resolved.is_empty() {
            println!();
        }

        if self.matches.is_empty() {
            println!("No matching conditions found.");
            return Ok(());
        }

        println!("Possible Conditions:");
        println!("════════════════════");

        for (i, m) in self.matches.iter().enumerate() {
            let condition = m.condition;
            println!();
            if self.detailed {
                println!(
                    "{}. {} [{}] (Score: {:.1})",
                    i + 1,
                    condition.name,
                    condition.severity,
                    m.match_score
                );
            } else {
                println!("{}. {} [{}]", i + 1, condition.name, condition.severity);
            }
            println!("─────────────");
            println!("{}", condition.description);
            if self.detailed {
                println!("Matched symptoms: {}", m.matched_symptoms.join(", "));
            }

            let plan = &condition.diet_plan;
            println!();
            println!("Diet plan ({}):", plan.duration);
            print_list("Recommended", &plan.recommended);
            print_list("Avoid", &plan.avoid);
            print_list("Tips", &plan.tips);
        }

        println!();
        println!("These results are informational only and not a medical diagnosis.");
        Ok(())
    }
}

impl HumanOutput for SymptomList<'_> {
    fn print_human(&self) -> Result<()> {
        if self.symptoms.is_empty() {
            match &self.category {
                Some(category) => println!("No symptoms in category '{category}'"),
                None => println!("No symptoms in catalog"),
            }
            return Ok(());
        }

        let mut current: Option<&str> = None;
        for symptom in &self.symptoms {
            if current != Some(symptom.category.as_str()) {
                if current.is_some() {
                    println!();
                }
                println!("{}:", symptom.category);
                current = Some(symptom.category.as_str());
            }
            println!("  {:<20} {}", symptom.id, symptom.name);
        }
        Ok(())
    }
}

impl HumanOutput for ConditionList<'_> {
    fn print_human(&self) -> Result<()> {
        for condition in &self.conditions {
            println!("{} [{}]", condition.name, condition.severity);
            println!("  symptoms: {}", condition.symptoms.join(", "));
        }
        Ok(())
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {label}:");
    for item in items {
        println!("    - {item}");
    }
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchingEngine;

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
        assert_eq!(
            format_value(&serde_json::json!(["Headache", "Fever"])),
            "[Headache, Fever]"
        );
    }

    #[test]
    fn test_match_results_json_shape() {
        let engine = MatchingEngine::builtin();
        let results = MatchResults {
            selected: vec!["rash".to_string(), "itching".to_string()],
            resolved: vec![],
            unresolved: vec![],
            matches: engine.top_matches(&["rash", "itching"]),
            detailed: true,
        };

        let value = serde_json::to_value(&results).unwrap();
        assert!(value.get("detailed").is_none());

        let first = &value["matches"][0];
        assert_eq!(first["condition"]["id"], "allergies");
        assert_eq!(first["condition"]["severity"], "mild");
        assert!(first["condition"]["dietPlan"]["recommended"].is_array());
        assert_eq!(first["overlap"], 2);
    }
}
