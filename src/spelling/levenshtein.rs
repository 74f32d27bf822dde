//! Levenshtein distance calculation for spelling correction.
//!
//! Distances are counted over `char`s with plain equality: no normalization
//! and no locale-aware collation. Callers lowercase both sides when they want
//! case-insensitive comparison.

use std::cmp::{max, min};

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one string into the other.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            matrix[i][j] = if s1_chars[i - 1] == s2_chars[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + min(
                    min(
                        matrix[i - 1][j], // deletion
                        matrix[i][j - 1], // insertion
                    ),
                    matrix[i - 1][j - 1], // substitution
                )
            };
        }
    }

    matrix[len1][len2]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
///
/// Returns `Some(distance)` exactly when `levenshtein_distance(s1, s2) <= threshold`,
/// and `None` otherwise. Uses two rows instead of the full table.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    // The length difference is a lower bound on the distance
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            curr_row[j] = if s1_chars[i - 1] == s2_chars[j - 1] {
                prev_row[j - 1]
            } else {
                1 + min(min(prev_row[j], curr_row[j - 1]), prev_row[j - 1])
            };
            min_in_row = min(min_in_row, curr_row[j]);
        }

        // Row minima never decrease, so the final distance cannot recover
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    (distance <= threshold).then_some(distance)
}

/// Largest distance at which a dictionary word may replace a single word.
///
/// The threshold depends on the candidate's own length: `max(2, len / 3)`.
pub fn max_word_distance(candidate_len: usize) -> usize {
    max(2, candidate_len / 3)
}

/// Largest distance at which a symptom name still counts as a fuzzy match
/// for a whole phrase: `max(3, len / 2)` of the name's length.
pub fn max_phrase_distance(name_len: usize) -> usize {
    max(3, name_len / 2)
}
