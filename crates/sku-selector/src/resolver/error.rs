//! Error types for selection resolution.

use thiserror::Error;

use crate::types::Selection;

/// An error raised while resolving a pick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The pick names a variation the catalog does not define.
    #[error("unknown variation '{name}'{}", did_you_mean(.suggestions))]
    UnknownVariation {
        name: String,
        suggestions: Vec<String>,
    },

    /// The pick names a value its variation does not define.
    #[error("unknown value '{value}' for variation '{variation}'{}", did_you_mean(.suggestions))]
    UnknownValue {
        variation: String,
        value: String,
        suggestions: Vec<String>,
    },

    /// Every variation is chosen but no item carries that combination.
    ///
    /// Raised when an impossible value is forced on a variation other than
    /// the first one, or when the catalog lacks a combination its variation
    /// definitions promise. No redirect target is produced.
    #[error("no item matches the complete selection [{selection}]")]
    NoMatchingItem { selection: Selection },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Names in `available` close to `target` by edit distance, closest first.
///
/// Targets of three characters or fewer tolerate one edit, longer ones two.
/// At most three suggestions are returned.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
