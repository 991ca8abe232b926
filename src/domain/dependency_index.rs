#![allow(dead_code)]

//! Cascading choice index: product → destination → description.
//!
//! Every view keeps first-seen order from its source so selectors list choices
//! in dataset order rather than alphabetically.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::catalog::CatalogError;
use super::entities::{SelectionKey, TariffRecord};

const KEY_SEPARATOR: char = '|';

/// On-disk shape of `form_dependencies.json`.
///
/// Description lists are keyed by `"product|country"` strings in the file.
/// They are split into [`SelectionKey`]s once, inside
/// [`DependencyIndex::from_form_dependencies`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDependencies {
    pub product_names: Vec<String>,
    #[serde(default)]
    pub product_to_countries: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub product_country_to_descriptions: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DependencyIndex {
    product_names: Vec<String>,
    countries_by_product: HashMap<String, Vec<String>>,
    descriptions_by_key: HashMap<SelectionKey, Vec<String>>,
}

impl DependencyIndex {
    /// Builds all three views from the record list in a single pass.
    pub fn build(records: &[TariffRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.insert(&record.product, &record.destination, &record.description);
        }
        index
    }

    /// Builds the index from the separate dependency file.
    ///
    /// Every choice the file offers has to lead to at least one record, and no
    /// product or product/country pair may be a dead end.
    pub fn from_form_dependencies(
        deps: &FormDependencies,
        records: &[TariffRecord],
    ) -> Result<Self, CatalogError> {
        let mut descriptions: HashMap<SelectionKey, &[String]> = HashMap::new();
        for (raw_key, values) in &deps.product_country_to_descriptions {
            let key = parse_selection_key(raw_key)?;
            descriptions.insert(key, values.as_slice());
        }

        let mut index = Self::default();
        for product in &deps.product_names {
            let countries = deps
                .product_to_countries
                .get(product)
                .filter(|countries| !countries.is_empty())
                .ok_or_else(|| CatalogError::DeadEndChoice {
                    path: product.clone(),
                })?;

            for country in countries {
                let key = SelectionKey::new(product.as_str(), country.as_str());
                let choices = descriptions
                    .get(&key)
                    .copied()
                    .filter(|choices| !choices.is_empty())
                    .ok_or_else(|| CatalogError::DeadEndChoice {
                        path: key.to_string(),
                    })?;

                for description in choices {
                    let reachable = records
                        .iter()
                        .any(|record| record.matches(product, country, description));
                    if !reachable {
                        return Err(CatalogError::UnreachableChoice {
                            product: product.clone(),
                            destination: country.clone(),
                            description: description.clone(),
                        });
                    }
                    index.insert(product, country, description);
                }
            }
        }

        Ok(index)
    }

    fn insert(&mut self, product: &str, destination: &str, description: &str) {
        push_distinct(&mut self.product_names, product);
        push_distinct(
            self.countries_by_product
                .entry(product.to_string())
                .or_default(),
            destination,
        );
        push_distinct(
            self.descriptions_by_key
                .entry(SelectionKey::new(product, destination))
                .or_default(),
            description,
        );
    }

    pub fn product_names(&self) -> &[String] {
        &self.product_names
    }

    /// Destinations offered for `product`; empty when the product is unknown.
    pub fn countries_for(&self, product: &str) -> &[String] {
        self.countries_by_product
            .get(product)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Descriptions offered for the pair; empty when the pair is unknown.
    pub fn descriptions_for(&self, product: &str, country: &str) -> &[String] {
        self.descriptions_by_key
            .get(&SelectionKey::new(product, country))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, product: &str, country: &str, description: &str) -> bool {
        self.descriptions_for(product, country)
            .iter()
            .any(|value| value == description)
    }

    pub fn is_empty(&self) -> bool {
        self.product_names.is_empty()
    }

    /// Snaps a possibly stale selection onto valid choices.
    ///
    /// Each level keeps its current value while it is still offered and falls
    /// back to the first offered choice otherwise.
    pub fn resolve(
        &self,
        product: Option<&str>,
        country: Option<&str>,
        description: Option<&str>,
    ) -> CascadeSelection {
        let product = pick(&self.product_names, product);
        let country = product
            .as_deref()
            .and_then(|p| pick(self.countries_for(p), country));
        let description = match (product.as_deref(), country.as_deref()) {
            (Some(p), Some(c)) => pick(self.descriptions_for(p, c), description),
            _ => None,
        };

        CascadeSelection {
            product,
            country,
            description,
        }
    }
}

/// Current state of the three selectors after resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeSelection {
    pub product: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
}

impl CascadeSelection {
    pub fn is_complete(&self) -> bool {
        self.product.is_some() && self.country.is_some() && self.description.is_some()
    }
}

fn pick(options: &[String], current: Option<&str>) -> Option<String> {
    current
        .and_then(|value| options.iter().find(|option| option.as_str() == value))
        .or_else(|| options.first())
        .cloned()
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

fn parse_selection_key(raw: &str) -> Result<SelectionKey, CatalogError> {
    match raw.split_once(KEY_SEPARATOR) {
        Some((product, country))
            if !product.is_empty() && !country.is_empty() && !country.contains(KEY_SEPARATOR) =>
        {
            Ok(SelectionKey::new(product, country))
        }
        _ => Err(CatalogError::MalformedKey(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product: &str, destination: &str, description: &str) -> TariffRecord {
        TariffRecord {
            product: product.to_string(),
            destination: destination.to_string(),
            description: description.to_string(),
            hs_code: "0000.00".to_string(),
            tariff_percent: 5.0,
        }
    }

    fn sample() -> Vec<TariffRecord> {
        vec![
            record("mobile phone", "United States", "Smartphone, 5G"),
            record("plastic chair", "Germany", "Stackable garden chair"),
            record("mobile phone", "Japan", "Smartphone, 5G"),
            record("mobile phone", "United States", "Feature phone"),
            record("plastic chair", "Germany", "Office chair, swivel"),
            record("mobile phone", "United States", "Smartphone, 5G"),
        ]
    }

    #[test]
    fn products_keep_first_seen_order() {
        let index = DependencyIndex::build(&sample());
        assert_eq!(index.product_names(), ["mobile phone", "plastic chair"]);
    }

    #[test]
    fn countries_are_distinct_and_ordered() {
        let index = DependencyIndex::build(&sample());
        assert_eq!(index.countries_for("mobile phone"), ["United States", "Japan"]);
        assert_eq!(index.countries_for("plastic chair"), ["Germany"]);
    }

    #[test]
    fn unknown_keys_yield_empty_choices() {
        let index = DependencyIndex::build(&sample());
        assert!(index.countries_for("bicycle").is_empty());
        assert!(index.descriptions_for("mobile phone", "Germany").is_empty());
        assert!(index.descriptions_for("", "").is_empty());
    }

    #[test]
    fn descriptions_cover_every_matching_record() {
        let records = sample();
        let index = DependencyIndex::build(&records);
        for r in &records {
            let offered = index.descriptions_for(&r.product, &r.destination);
            assert!(!offered.is_empty());
            assert!(offered.contains(&r.description));
        }
        assert_eq!(
            index.descriptions_for("mobile phone", "United States"),
            ["Smartphone, 5G", "Feature phone"]
        );
    }

    #[test]
    fn separator_inside_names_does_not_collide() {
        let records = vec![
            record("a|b", "c", "first"),
            record("a", "b|c", "second"),
        ];
        let index = DependencyIndex::build(&records);
        assert_eq!(index.descriptions_for("a|b", "c"), ["first"]);
        assert_eq!(index.descriptions_for("a", "b|c"), ["second"]);
    }

    #[test]
    fn resolve_keeps_valid_values_and_snaps_stale_ones() {
        let index = DependencyIndex::build(&sample());

        let fresh = index.resolve(None, None, None);
        assert_eq!(fresh.product.as_deref(), Some("mobile phone"));
        assert_eq!(fresh.country.as_deref(), Some("United States"));
        assert_eq!(fresh.description.as_deref(), Some("Smartphone, 5G"));
        assert!(fresh.is_complete());

        let kept = index.resolve(
            Some("mobile phone"),
            Some("United States"),
            Some("Feature phone"),
        );
        assert_eq!(kept.description.as_deref(), Some("Feature phone"));

        // switching product invalidates the old country and description
        let switched = index.resolve(
            Some("plastic chair"),
            Some("United States"),
            Some("Feature phone"),
        );
        assert_eq!(switched.country.as_deref(), Some("Germany"));
        assert_eq!(switched.description.as_deref(), Some("Stackable garden chair"));
    }

    #[test]
    fn resolve_on_empty_index_selects_nothing() {
        let index = DependencyIndex::default();
        let selection = index.resolve(Some("mobile phone"), None, None);
        assert_eq!(selection, CascadeSelection::default());
        assert!(!selection.is_complete());
        assert!(index.is_empty());
    }

    #[test]
    fn form_dependencies_are_split_into_keys() {
        let records = sample();
        let mut deps = FormDependencies {
            product_names: vec!["plastic chair".into(), "mobile phone".into()],
            ..Default::default()
        };
        deps.product_to_countries
            .insert("plastic chair".into(), vec!["Germany".into()]);
        deps.product_to_countries
            .insert("mobile phone".into(), vec!["Japan".into()]);
        deps.product_country_to_descriptions.insert(
            "plastic chair|Germany".into(),
            vec!["Office chair, swivel".into()],
        );
        deps.product_country_to_descriptions
            .insert("mobile phone|Japan".into(), vec!["Smartphone, 5G".into()]);

        let index = DependencyIndex::from_form_dependencies(&deps, &records).unwrap();
        assert_eq!(index.product_names(), ["plastic chair", "mobile phone"]);
        assert_eq!(
            index.descriptions_for("plastic chair", "Germany"),
            ["Office chair, swivel"]
        );
        assert!(index.contains("mobile phone", "Japan", "Smartphone, 5G"));
        assert!(!index.contains("mobile phone", "United States", "Smartphone, 5G"));
    }

    #[test]
    fn form_dependencies_reject_unreachable_choices() {
        let records = sample();
        let mut deps = FormDependencies {
            product_names: vec!["mobile phone".into()],
            ..Default::default()
        };
        deps.product_to_countries
            .insert("mobile phone".into(), vec!["Japan".into()]);
        deps.product_country_to_descriptions
            .insert("mobile phone|Japan".into(), vec!["Feature phone".into()]);

        let err = DependencyIndex::from_form_dependencies(&deps, &records).unwrap_err();
        assert!(matches!(err, CatalogError::UnreachableChoice { .. }));
    }

    #[test]
    fn form_dependencies_reject_dead_ends_and_bad_keys() {
        let records = sample();
        let deps = FormDependencies {
            product_names: vec!["mobile phone".into()],
            ..Default::default()
        };
        let err = DependencyIndex::from_form_dependencies(&deps, &records).unwrap_err();
        assert!(matches!(err, CatalogError::DeadEndChoice { .. }));

        let mut bad_key = FormDependencies::default();
        bad_key
            .product_country_to_descriptions
            .insert("mobile phone-Japan".into(), vec!["Smartphone, 5G".into()]);
        let err = DependencyIndex::from_form_dependencies(&bad_key, &records).unwrap_err();
        assert_eq!(err, CatalogError::MalformedKey("mobile phone-Japan".into()));
    }
}
