//! Near-duplicate guard across the ideas of one response.
//!
//! Compares titles and "The product/service" bodies by token-set overlap.
//! A collision renames the later idea; nothing is removed or regenerated.

use std::collections::HashSet;

use tracing::warn;

use crate::ideas::models::Idea;
use crate::ideas::sanitize::cap_chars;
use crate::ideas::schema::{PRODUCT_SECTION_INDEX, TITLE_MAX};

/// Overlap above this ratio marks two ideas as near-duplicates.
pub const OVERLAP_THRESHOLD: f64 = 0.6;

pub const ALT_SUFFIX: &str = " — Alt";

/// Lowercased word tokens, split on anything that is not a word character.
pub fn tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// |A ∩ B| / min(|A|, |B|). Zero when either side is empty.
pub fn overlap_ratio(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / smaller as f64
}

fn product_body(idea: &Idea) -> &str {
    idea.sections
        .get(PRODUCT_SECTION_INDEX)
        .map(|s| s.body.as_str())
        .unwrap_or("")
}

pub fn is_near_duplicate(a: &Idea, b: &Idea) -> bool {
    overlap_ratio(&tokens(&a.title), &tokens(&b.title)) > OVERLAP_THRESHOLD
        || overlap_ratio(&tokens(product_body(a)), &tokens(product_body(b))) > OVERLAP_THRESHOLD
}

/// Appends the alternate marker, shortening the title so the result stays within `TITLE_MAX`.
pub fn mark_alternate(title: &str) -> String {
    let room = TITLE_MAX - ALT_SUFFIX.chars().count();
    format!("{}{ALT_SUFFIX}", cap_chars(title, room))
}

/// Checks every pair (i < j) and renames idea j on collision.
/// Returns how many renames happened.
pub fn dedupe_ideas(ideas: &mut [Idea]) -> usize {
    let mut renamed = 0;

    for j in 1..ideas.len() {
        for i in 0..j {
            if is_near_duplicate(&ideas[i], &ideas[j]) {
                let new_title = mark_alternate(&ideas[j].title);
                warn!(
                    "Idea {} overlaps idea {}; renaming '{}' to '{}'",
                    j, i, ideas[j].title, new_title
                );
                ideas[j].title = new_title;
                renamed += 1;
            }
        }
    }

    renamed
}
