//! Selection state and the two dependent pill groups (country, then indicator).
//!
//! State lives here, not in the rendered buttons. The "active" flag of a pill is
//! always derived from the current [`Selection`].

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Country selected when the page loads.
pub const DEFAULT_COUNTRY: &str = "chile";
/// Indicator selected when the page loads.
pub const DEFAULT_INDICATOR: &str = "usd";

/// Current country/indicator pair.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub indicator: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            indicator: DEFAULT_INDICATOR.to_string(),
        }
    }
}

/// A request for the loader to fetch one series.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LoadRequest {
    pub country: String,
    pub indicator: String,
}

/// One toggle-style button within an exclusive group.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pill {
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// Sibling pills sharing one container.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct PillGroup {
    pub pills: Vec<Pill>,
}

impl PillGroup {
    /// Mark `key` as the only active pill. Unknown keys leave every pill inactive.
    pub fn activate(&mut self, key: &str) {
        for pill in &mut self.pills {
            pill.active = pill.key == key;
        }
    }

    pub fn active_key(&self) -> Option<&str> {
        self.pills.iter().find(|p| p.active).map(|p| p.key.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.pills.iter().map(|p| p.key.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pills.len()
    }
}

/// Owns the catalog and the selection, and decides when a load must happen.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorController {
    catalog: Catalog,
    selection: Selection,
}

impl SelectorController {
    /// Start from the default selection, or from the first catalog entry when
    /// the default country is not in this catalog.
    pub fn new(catalog: Catalog) -> Self {
        let mut selection = Selection::default();
        if catalog.get(&selection.country).is_none() {
            if let Some(first) = catalog.countries().first() {
                selection.country = first.code.clone();
                selection.indicator = first
                    .first_indicator()
                    .map(|i| i.code.clone())
                    .unwrap_or_default();
            }
        }
        Self { catalog, selection }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Page-load sequence: select the current country, which auto-loads its
    /// first indicator.
    pub fn start(&mut self) -> Option<LoadRequest> {
        let country = self.selection.country.clone();
        self.select_country(&country)
    }

    /// Country pills in catalog order, the selected one active.
    pub fn country_pills(&self) -> PillGroup {
        let mut group = PillGroup {
            pills: self
                .catalog
                .countries()
                .iter()
                .map(|c| Pill {
                    key: c.code.clone(),
                    label: c.name.clone(),
                    active: false,
                })
                .collect(),
        };
        group.activate(&self.selection.country);
        group
    }

    /// Indicator pills for the selected country, the selected one active.
    pub fn indicator_pills(&self) -> PillGroup {
        let mut group = PillGroup {
            pills: self
                .catalog
                .get(&self.selection.country)
                .map(|c| {
                    c.indicators
                        .iter()
                        .map(|i| Pill {
                            key: i.code.clone(),
                            label: i.label.clone(),
                            active: false,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        };
        group.activate(&self.selection.indicator);
        group
    }

    /// Switch country. The indicator is always reset to the country's first
    /// entry and a load is requested for it, even if it was already selected.
    ///
    /// Returns `None` for unknown countries (state unchanged) and for
    /// countries with no indicators.
    pub fn select_country(&mut self, code: &str) -> Option<LoadRequest> {
        let country = self.catalog.get(code)?;
        self.selection.country = country.code.clone();
        match country.first_indicator() {
            Some(first) => {
                self.selection.indicator = first.code.clone();
                Some(self.request())
            }
            None => {
                self.selection.indicator.clear();
                None
            }
        }
    }

    /// Pick an indicator of the current country and request its load.
    pub fn select_indicator(&mut self, code: &str) -> Option<LoadRequest> {
        if !self.catalog.contains(&self.selection.country, code) {
            log::warn!(
                "Ignoring unknown indicator {} for {}",
                code,
                self.selection.country
            );
            return None;
        }
        self.selection.indicator = code.to_string();
        Some(self.request())
    }

    fn request(&self) -> LoadRequest {
        LoadRequest {
            country: self.selection.country.clone(),
            indicator: self.selection.indicator.clone(),
        }
    }
}
