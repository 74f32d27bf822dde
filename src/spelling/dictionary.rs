//! Dictionary management for spelling correction.
//!
//! The correction vocabulary is every word longer than two characters found
//! in a symptom name, plus [`COMMON_SYMPTOM_WORDS`]. Words keep their
//! insertion order so that scans over the dictionary are deterministic.

use ahash::AHashSet;
use lazy_static::lazy_static;

use crate::catalog::Catalog;

/// Everyday words people use to describe how they feel, added to the
/// vocabulary harvested from symptom names.
pub const COMMON_SYMPTOM_WORDS: &[&str] = &[
    "pain",
    "ache",
    "sore",
    "tired",
    "weak",
    "dizzy",
    "nausea",
    "fever",
    "cough",
    "cold",
    "hot",
    "sweat",
    "rash",
    "itch",
    "burn",
    "numb",
    "headache",
    "stomachache",
    "backache",
    "toothache",
    "earache",
    "vomit",
    "diarrhea",
    "constipation",
    "bloat",
    "cramp",
    "breath",
    "wheeze",
    "sneeze",
    "runny",
    "stuffy",
    "congestion",
    "fatigue",
    "exhausted",
    "tired",
    "sleepy",
    "insomnia",
    "swelling",
    "swollen",
    "inflammation",
    "stiff",
    "stiffness",
];

/// Minimum length a symptom-name token needs to enter the dictionary.
const MIN_TOKEN_LEN: usize = 3;

lazy_static! {
    static ref BUILTIN_DICTIONARY: SymptomDictionary =
        SymptomDictionary::from_catalog(Catalog::builtin());
}

/// An insertion-ordered set of lowercase words used as correction targets.
#[derive(Debug, Clone, Default)]
pub struct SymptomDictionary {
    /// Words in insertion order
    words: Vec<String>,
    /// Set of all words for fast lookup
    word_set: AHashSet<String>,
}

impl SymptomDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SymptomDictionary {
            words: Vec::new(),
            word_set: AHashSet::new(),
        }
    }

    /// Build the correction vocabulary for a catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut dictionary = SymptomDictionary::new();

        for symptom in catalog.symptoms() {
            for token in symptom.name.to_lowercase().split_whitespace() {
                if token.chars().count() >= MIN_TOKEN_LEN {
                    dictionary.add_word(token);
                }
            }
        }

        for word in COMMON_SYMPTOM_WORDS {
            dictionary.add_word(word);
        }

        dictionary
    }

    /// The memoized dictionary of [`Catalog::builtin`].
    pub fn builtin() -> &'static SymptomDictionary {
        &BUILTIN_DICTIONARY
    }

    /// Add a word, lowercased. Returns `false` if it was already present.
    pub fn add_word(&mut self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        if self.word_set.contains(&normalized) {
            return false;
        }
        self.word_set.insert(normalized.clone());
        self.words.push(normalized);
        true
    }

    /// Check if a word exists in the dictionary, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(&word.to_lowercase())
    }

    /// All words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
