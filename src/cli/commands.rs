//! Command implementations for the symptomatch CLI.

use std::borrow::Cow;

use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SymptomatchError};
use crate::matching::{MatchingConfig, MatchingEngine};
use crate::resolve::{SymptomResolver, SymptomSelection};
use crate::spelling::{levenshtein_distance, SpellingCorrector, SuggestionEngine};

/// Execute a CLI command.
pub fn execute_command(args: SymptomatchArgs) -> Result<()> {
    let catalog = load_catalog(&args)?;

    match &args.command {
        Command::Distance(distance_args) => distance(distance_args, &args),
        Command::Correct(correct_args) => correct(correct_args, &catalog, &args),
        Command::Suggest(suggest_args) => suggest(suggest_args, &catalog, &args),
        Command::Match(match_args) => match_symptoms(match_args, &catalog, &args),
        Command::Symptoms(symptoms_args) => list_symptoms(symptoms_args, &catalog, &args),
        Command::Conditions => list_conditions(&catalog, &args),
        Command::Validate => validate_catalog(&catalog, &args),
    }
}

/// Load the catalog named on the command line, or borrow the builtin one.
///
/// A catalog read from a file is validated before use.
pub fn load_catalog(args: &SymptomatchArgs) -> Result<Cow<'static, Catalog>> {
    match &args.catalog {
        Some(path) => {
            info!("Loading catalog from: {}", path.display());
            let catalog = Catalog::load_from_file(path)?;
            catalog.validate()?;
            debug!(
                "loaded {} symptoms and {} conditions",
                catalog.symptoms().len(),
                catalog.conditions().len()
            );
            Ok(Cow::Owned(catalog))
        }
        None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
}

fn distance(args: &DistanceArgs, cli_args: &SymptomatchArgs) -> Result<()> {
    output_result(
        "Edit distance",
        &DistanceResult {
            a: args.a.clone(),
            b: args.b.clone(),
            distance: levenshtein_distance(&args.a, &args.b),
        },
        cli_args,
    )
}

fn correct(args: &CorrectArgs, catalog: &Catalog, cli_args: &SymptomatchArgs) -> Result<()> {
    let corrector = SpellingCorrector::new(catalog);
    let correction = corrector.correct(&args.text);

    output_result("Spelling correction", &correction, cli_args)
}

fn suggest(args: &SuggestArgs, catalog: &Catalog, cli_args: &SymptomatchArgs) -> Result<()> {
    if args.limit == 0 {
        return Err(SymptomatchError::invalid_argument(
            "--limit must be at least 1",
        ));
    }

    let engine = SuggestionEngine::new(catalog);
    output_result(
        "Suggestions",
        &SuggestionResults {
            input: args.text.clone(),
            suggestions: engine.suggest_ranked(&args.text, args.limit),
            show_tiers: args.tiers,
        },
        cli_args,
    )
}

fn match_symptoms(args: &MatchArgs, catalog: &Catalog, cli_args: &SymptomatchArgs) -> Result<()> {
    if args.ids.is_empty() && args.texts.is_empty() {
        return Err(SymptomatchError::invalid_argument(
            "Provide at least one symptom id or --text",
        ));
    }

    let mut selection = SymptomSelection::new();
    for id in &args.ids {
        if catalog.symptom(id).is_none() {
            return Err(SymptomatchError::unknown_symptom(id.as_str()));
        }
        selection.add_id(id.as_str());
    }

    let resolver = SymptomResolver::new(catalog);
    let resolved: Vec<ResolvedText> = args
        .texts
        .iter()
        .map(|text| ResolvedText {
            text: text.clone(),
            resolution: selection.add_text(&resolver, text),
        })
        .collect();

    for text in selection.unresolved() {
        warn!("Could not resolve '{text}' to a known symptom");
    }

    let engine = MatchingEngine::new(catalog, MatchingConfig::default());
    let matches = engine.top_matches(selection.ids());

    output_result(
        "Condition matches",
        &MatchResults {
            selected: selection.ids().to_vec(),
            resolved,
            unresolved: selection.unresolved().to_vec(),
            matches,
            detailed: args.detailed,
        },
        cli_args,
    )
}

fn list_symptoms(args: &SymptomsArgs, catalog: &Catalog, cli_args: &SymptomatchArgs) -> Result<()> {
    let symptoms = match &args.category {
        Some(category) => catalog.symptoms_in_category(category),
        None => catalog.symptoms().iter().collect(),
    };

    output_result(
        "Symptoms",
        &SymptomList {
            category: args.category.clone(),
            symptoms,
        },
        cli_args,
    )
}

fn list_conditions(catalog: &Catalog, cli_args: &SymptomatchArgs) -> Result<()> {
    output_result(
        "Conditions",
        &ConditionList {
            conditions: catalog.conditions().iter().collect(),
        },
        cli_args,
    )
}

fn validate_catalog(catalog: &Catalog, cli_args: &SymptomatchArgs) -> Result<()> {
    // File catalogs were validated on load; the builtin one is checked here
    catalog.validate()?;

    let source = match &cli_args.catalog {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    };

    output_result(
        "Catalog validation",
        &ValidationResult {
            source,
            symptoms: catalog.symptoms().len(),
            conditions: catalog.conditions().len(),
            categories: catalog.categories().len(),
        },
        cli_args,
    )
}
