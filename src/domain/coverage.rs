use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Street-type code used when no leading type word is recognized.
pub const STREET_TYPE_OTHER: u32 = 99;

/// Localities where the service is sold, keyed to their registration codes.
///
/// Matching ignores case and diacritics; the upstream address source is not
/// consistent about either.
#[derive(Debug, Clone)]
pub struct CoverageArea {
    localities: HashMap<String, u32>,
}

impl CoverageArea {
    pub fn new<I, S>(localities: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        Self {
            localities: localities
                .into_iter()
                .map(|(name, code)| (normalize(name.as_ref()), code))
                .collect(),
        }
    }

    /// The serviced localities and their registration codes.
    pub fn builtin() -> Self {
        Self::new([
            ("Goiânia", 1),
            ("Aparecida de Goiânia", 2),
            ("Anápolis", 3),
            ("Senador Canedo", 4),
            ("Trindade", 5),
            ("Goianira", 6),
            ("Abadia de Goiás", 7),
            ("Aragoiânia", 8),
        ])
    }

    pub fn city_code(&self, locality: &str) -> Option<u32> {
        self.localities.get(&normalize(locality)).copied()
    }

    pub fn covers(&self, locality: &str) -> bool {
        self.city_code(locality).is_some()
    }
}

impl Default for CoverageArea {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Registration code for the street's leading type word (RUA, AVENIDA, ...).
pub fn street_type_id(street: &str) -> u32 {
    let first = street.split_whitespace().next().unwrap_or("");
    match normalize(first).trim_end_matches('.') {
        "rua" | "r" => 1,
        "avenida" | "av" => 2,
        "alameda" | "al" => 3,
        "travessa" | "tv" => 4,
        "praca" | "pc" => 5,
        "rodovia" | "rod" => 6,
        "estrada" | "est" => 7,
        "viela" => 8,
        _ => STREET_TYPE_OTHER,
    }
}

/// NFD-decomposes, drops combining marks, lowercases and collapses interior
/// whitespace.
fn normalize(value: &str) -> String {
    let stripped: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_is_covered() {
        let coverage = CoverageArea::builtin();
        assert!(coverage.covers("Goiânia"));
        assert_eq!(coverage.city_code("Goiânia"), Some(1));
    }

    #[test]
    fn test_matching_ignores_case_and_diacritics() {
        let coverage = CoverageArea::builtin();
        assert!(coverage.covers("goiania"));
        assert!(coverage.covers("GOIÂNIA"));
        assert!(coverage.covers("Anapolis"));
        assert!(coverage.covers("aparecida  de  goiânia"));
    }

    #[test]
    fn test_unlisted_locality_is_not_covered() {
        let coverage = CoverageArea::builtin();
        assert!(!coverage.covers("São Paulo"));
        assert_eq!(coverage.city_code("São Paulo"), None);
    }

    #[test]
    fn test_street_type_classification() {
        assert_eq!(street_type_id("Rua 7 de Setembro"), 1);
        assert_eq!(street_type_id("AVENIDA Goiás"), 2);
        assert_eq!(street_type_id("Av. T-63"), 2);
        assert_eq!(street_type_id("Praça Cívica"), 5);
        assert_eq!(street_type_id("Largo do Mercado"), STREET_TYPE_OTHER);
        assert_eq!(street_type_id(""), STREET_TYPE_OTHER);
    }
}
