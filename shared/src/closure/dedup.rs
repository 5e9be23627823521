//! Duplicate-candidate matching for cellar items
//!
//! Pure matching only: the function returns every existing item whose
//! normalized identity equals the candidate's, and the decision to proceed
//! despite a duplicate stays with the caller (an explicit confirmation step
//! at the API boundary, never inside the matcher).

use serde::{Deserialize, Serialize};

/// The identity fields of a cellar item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellarItem {
    pub description: String,
    pub producer: String,
    /// Vintage year, absent for non-vintage bottles
    #[serde(default)]
    pub vintage: Option<i32>,
    /// Bottle format, e.g. "0.75", "magnum"
    #[serde(default)]
    pub format: Option<String>,
}

/// Normalize one identity component: trim, lowercase, collapse whitespace
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl CellarItem {
    /// Normalized equality key: {description, producer, vintage, format}
    pub fn identity_key(&self) -> (String, String, Option<i32>, Option<String>) {
        (
            normalize(&self.description),
            normalize(&self.producer),
            self.vintage,
            self.format.as_deref().map(normalize),
        )
    }
}

/// Find existing items that collide with the candidate's identity key
pub fn candidate_matches<'a>(candidate: &CellarItem, existing: &'a [CellarItem]) -> Vec<&'a CellarItem> {
    let key = candidate.identity_key();
    existing.iter().filter(|item| item.identity_key() == key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, producer: &str, vintage: Option<i32>, format: Option<&str>) -> CellarItem {
        CellarItem {
            description: description.to_string(),
            producer: producer.to_string(),
            vintage,
            format: format.map(str::to_string),
        }
    }

    #[test]
    fn test_match_is_case_and_space_insensitive() {
        let existing = vec![item("Barolo  Riserva", "G. Conterno", Some(2018), Some("0.75"))];
        let candidate = item("barolo riserva", "g. conterno", Some(2018), Some("0.75"));

        assert_eq!(candidate_matches(&candidate, &existing).len(), 1);
    }

    #[test]
    fn test_vintage_distinguishes() {
        let existing = vec![item("Barolo", "Conterno", Some(2018), None)];
        let candidate = item("Barolo", "Conterno", Some(2019), None);

        assert!(candidate_matches(&candidate, &existing).is_empty());
    }

    #[test]
    fn test_format_distinguishes() {
        let existing = vec![item("Barolo", "Conterno", Some(2018), Some("0.75"))];
        let candidate = item("Barolo", "Conterno", Some(2018), Some("magnum"));

        assert!(candidate_matches(&candidate, &existing).is_empty());
    }

    #[test]
    fn test_multiple_matches_returned() {
        let existing = vec![
            item("Barolo", "Conterno", None, None),
            item("BAROLO", " Conterno ", None, None),
            item("Barbaresco", "Gaja", None, None),
        ];
        let candidate = item("Barolo", "Conterno", None, None);

        assert_eq!(candidate_matches(&candidate, &existing).len(), 2);
    }
}
