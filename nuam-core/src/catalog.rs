//! Static catalog of countries and the indicators available for each.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Catalog shipped with the landing page.
const EMBEDDED_CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

/// One selectable indicator, e.g. `usd` shown as "USD / CLP".
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Indicator {
    /// Path segment sent to the backend (lowercase, e.g. "uf")
    pub code: String,
    /// Text shown on the pill
    pub label: String,
}

/// A country and its ordered indicators.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Country {
    /// Path segment sent to the backend (lowercase, e.g. "chile")
    pub code: String,
    /// Display name shown on the pill
    pub name: String,
    #[serde(default)]
    pub indicators: Vec<Indicator>,
}

impl Country {
    pub fn first_indicator(&self) -> Option<&Indicator> {
        self.indicators.first()
    }

    pub fn indicator(&self, code: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|i| i.code == code)
    }
}

/// Immutable, ordered mapping of country code to country.
///
/// Declaration order is preserved because the pills are rendered in it.
#[derive(Debug, PartialEq, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// Build a catalog from countries, rejecting duplicate or empty codes.
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for country in &countries {
            if country.code.trim().is_empty() {
                return Err(CatalogError::EmptyCountryCode);
            }
            if !seen.insert(country.code.as_str()) {
                return Err(CatalogError::DuplicateCountry(country.code.clone()));
            }
            let mut seen_ind = HashSet::new();
            for ind in &country.indicators {
                if ind.code.trim().is_empty() {
                    return Err(CatalogError::EmptyIndicatorCode(country.code.clone()));
                }
                if !seen_ind.insert(ind.code.as_str()) {
                    return Err(CatalogError::DuplicateIndicator {
                        country: country.code.clone(),
                        indicator: ind.code.clone(),
                    });
                }
            }
        }
        Ok(Self { countries })
    }

    /// Parse a JSON array of countries.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::new(countries)?)
    }

    /// The catalog embedded from `fixtures/catalog.json`.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_CATALOG_JSON)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    pub fn first_indicator(&self, country: &str) -> Option<&Indicator> {
        self.get(country).and_then(Country::first_indicator)
    }

    pub fn contains(&self, country: &str, indicator: &str) -> bool {
        self.get(country)
            .map(|c| c.indicator(indicator).is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, indicators: &[&str]) -> Country {
        Country {
            code: code.to_string(),
            name: code.to_uppercase(),
            indicators: indicators
                .iter()
                .map(|c| Indicator {
                    code: c.to_string(),
                    label: c.to_uppercase(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_embedded_catalog_order() {
        let catalog = Catalog::embedded().unwrap();
        let codes: Vec<&str> = catalog
            .countries()
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["chile", "colombia", "peru"]);

        let chile = catalog.get("chile").unwrap();
        let ind: Vec<&str> = chile.indicators.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(ind, vec!["usd", "uf", "utm"]);
        assert_eq!(chile.indicators[0].label, "USD / CLP");
        assert_eq!(catalog.get("peru").unwrap().name, "Perú");
    }

    #[test]
    fn test_first_indicator_and_contains() {
        let catalog = Catalog::embedded().unwrap();
        let first = catalog.first_indicator("colombia").unwrap();
        assert_eq!(first.label, "USD / COP");
        assert!(catalog.contains("chile", "utm"));
        assert!(!catalog.contains("peru", "uf"));
        assert!(!catalog.contains("bolivia", "usd"));
        assert!(catalog.first_indicator("bolivia").is_none());
    }

    #[test]
    fn test_country_without_indicators_is_valid() {
        let json = r#"[{ "code": "ar", "name": "Argentina" }]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.first_indicator("ar").is_none());
    }

    #[test]
    fn test_rejects_duplicate_country() {
        let countries = vec![country("cl", &["usd"]), country("cl", &["uf"])];
        let err = Catalog::new(countries).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCountry("cl".to_string()));
    }

    #[test]
    fn test_rejects_duplicate_indicator() {
        let err = Catalog::new(vec![country("cl", &["usd", "usd"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIndicator { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
