//! Locale-aware ordering for contact names.
//!
//! Names are compared with the Unicode Collation Algorithm using the CLDR
//! root tailoring:
//!
//! 1. base letters, ignoring accents and case (`"Ćosić"` sorts with `"Cosme"`)
//! 2. accents, unaccented first (`"e"` before `"é"`)
//! 3. case, lowercase first (`"ana"` before `"Ana"`)
//!
//! Punctuation and digits are not ignored; they sort before letters.
//! Remaining ties fall back to code point order so the result is total.

use feruca::{Collator, Locale, Tailoring};
use std::cmp::Ordering;

/// A reusable name collator.
///
/// The underlying collator keeps lookup caches, so reuse one instance for
/// a whole sort.
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    pub fn new() -> Self {
        Self {
            // Non-shifted: punctuation keeps its primary weight
            collator: Collator::new(Tailoring::Cldr(Locale::Root), false, true),
        }
    }

    /// Compare two names the way a person reading a sorted list expects.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.collator.collate(a, b)
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut collator = NameCollator::new();
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| collator.compare(a, b));
        names
    }

    fn compare(a: &str, b: &str) -> Ordering {
        NameCollator::new().compare(a, b)
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(&["bruno", "Ana", "carla"]), vec!["Ana", "bruno", "carla"]);
    }

    #[test]
    fn test_latin1_accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zoe", "Élodie", "Fábio", "Eduardo"]),
            vec!["Eduardo", "Élodie", "Fábio", "Zoe"]
        );
    }

    #[test]
    fn test_extended_latin_sorts_with_base_letter() {
        assert_eq!(
            sorted(&[
                "Tomas", "Şahin", "Ōta", "Sara", "Đorđe", "Pia", "Ćosić", "Oscar", "Dora",
                "Ewa", "Bo", "Dario", "Cosme", "Ærø",
            ]),
            vec![
                "Ærø", "Bo", "Ćosić", "Cosme", "Dario", "Dora", "Đorđe", "Ewa", "Oscar", "Ōta",
                "Pia", "Şahin", "Sara", "Tomas",
            ]
        );
    }

    #[test]
    fn test_letters_with_own_primary_stay_near_base() {
        assert_eq!(
            sorted(&["Zoe", "Maria", "Łukasz", "Kasia", "Æsir", "Bruno"]),
            vec!["Æsir", "Bruno", "Kasia", "Łukasz", "Maria", "Zoe"]
        );
    }

    #[test]
    fn test_punctuation_and_digits_before_letters() {
        let names = sorted(&["Zoe", "1Ana", "{x", "Ana", "_x"]);
        let pos = |name: &str| names.iter().position(|n| n == name).unwrap();

        assert!(pos("_x") < pos("1Ana"));
        assert!(pos("{x") < pos("1Ana"));
        assert!(pos("1Ana") < pos("Ana"));
        assert_eq!(names.last().map(String::as_str), Some("Zoe"));
    }

    #[test]
    fn test_accent_tie_break() {
        assert_eq!(compare("Jose", "José"), Ordering::Less);
        assert_eq!(compare("José", "Josef"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare("ana", "Ana"), Ordering::Less);
        assert_eq!(compare("Ana", "ana"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("Ana", "Ana Maria"), Ordering::Less);
    }

    #[test]
    fn test_equal_names() {
        assert_eq!(compare("Ana", "Ana"), Ordering::Equal);
    }
}
