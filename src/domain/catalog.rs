#![allow(dead_code)]

//! Validated tariff dataset paired with its dependency index.

use std::collections::HashSet;

use thiserror::Error;

use super::dependency_index::{DependencyIndex, FormDependencies};
use super::entities::{DutyOutcome, DutySelection, TariffRecord};
use super::lookup;

/// Data-quality problems that make a dataset unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("dataset contains no tariff records")]
    EmptyDataset,
    #[error("record #{index}: field `{field}` is empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("record #{index}: tariff {value} is not a non-negative number")]
    InvalidTariff { index: usize, value: f64 },
    #[error("record #{index} duplicates ({product}, {destination}, {description}) from record #{first}")]
    DuplicateRecord {
        index: usize,
        first: usize,
        product: String,
        destination: String,
        description: String,
    },
    #[error("dependency key `{0}` is not of the form product|country")]
    MalformedKey(String),
    #[error("dependency choice `{path}` offers nothing to select")]
    DeadEndChoice { path: String },
    #[error("dependency choice ({product}, {destination}, {description}) has no tariff record")]
    UnreachableChoice {
        product: String,
        destination: String,
        description: String,
    },
}

/// The process-wide, read-only dataset.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<TariffRecord>,
    index: DependencyIndex,
}

impl Catalog {
    /// Validates the records and derives the index from them.
    pub fn new(records: Vec<TariffRecord>) -> Result<Self, CatalogError> {
        validate_records(&records)?;
        let index = DependencyIndex::build(&records);
        Ok(Self { records, index })
    }

    /// Validates the records and takes the choice cascade from a dependency file.
    pub fn with_dependencies(
        records: Vec<TariffRecord>,
        deps: &FormDependencies,
    ) -> Result<Self, CatalogError> {
        validate_records(&records)?;
        let index = DependencyIndex::from_form_dependencies(deps, &records)?;
        Ok(Self { records, index })
    }

    pub fn records(&self) -> &[TariffRecord] {
        &self.records
    }

    pub fn index(&self) -> &DependencyIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn estimate_duty(&self, selection: &DutySelection) -> DutyOutcome {
        lookup::estimate_duty(&self.records, selection)
    }
}

fn validate_records(records: &[TariffRecord]) -> Result<(), CatalogError> {
    if records.is_empty() {
        return Err(CatalogError::EmptyDataset);
    }

    let mut seen: HashSet<(&str, &str, &str)> = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let fields = [
            ("product", &record.product),
            ("destination", &record.destination),
            ("description", &record.description),
            ("hs_code", &record.hs_code),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogError::EmptyField { index, field });
        }

        if !record.tariff_percent.is_finite() || record.tariff_percent < 0.0 {
            return Err(CatalogError::InvalidTariff {
                index,
                value: record.tariff_percent,
            });
        }

        let key = (
            record.product.as_str(),
            record.destination.as_str(),
            record.description.as_str(),
        );
        if !seen.insert(key) {
            let first = records
                .iter()
                .position(|r| r.matches(key.0, key.1, key.2))
                .unwrap_or(index);
            return Err(CatalogError::DuplicateRecord {
                index,
                first,
                product: record.product.clone(),
                destination: record.destination.clone(),
                description: record.description.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product: &str, destination: &str, description: &str, tariff: f64) -> TariffRecord {
        TariffRecord {
            product: product.to_string(),
            destination: destination.to_string(),
            description: description.to_string(),
            hs_code: "8517.13".to_string(),
            tariff_percent: tariff,
        }
    }

    #[test]
    fn accepts_well_formed_records() {
        let catalog = Catalog::new(vec![
            record("mobile phone", "Japan", "Smartphone", 0.0),
            record("mobile phone", "India", "Smartphone", 20.0),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.index().countries_for("mobile phone"), ["Japan", "India"]);
    }

    #[test]
    fn rejects_empty_dataset() {
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::EmptyDataset);
    }

    #[test]
    fn rejects_blank_fields() {
        let mut bad = record("mobile phone", "Japan", "Smartphone", 1.0);
        bad.hs_code = "  ".to_string();
        let err = Catalog::new(vec![record("a", "b", "c", 1.0), bad]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyField {
                index: 1,
                field: "hs_code"
            }
        );
    }

    #[test]
    fn rejects_negative_or_nan_tariffs() {
        let err = Catalog::new(vec![record("a", "b", "c", -1.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTariff { index: 0, .. }));
        let err = Catalog::new(vec![record("a", "b", "c", f64::NAN)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTariff { index: 0, .. }));
    }

    #[test]
    fn duplicate_triples_fail_the_load() {
        let err = Catalog::new(vec![
            record("mobile phone", "Japan", "Smartphone", 0.0),
            record("plastic chair", "Japan", "Garden chair", 3.9),
            record("mobile phone", "Japan", "Smartphone", 5.0),
        ])
        .unwrap_err();
        match err {
            CatalogError::DuplicateRecord { index, first, .. } => {
                assert_eq!(index, 2);
                assert_eq!(first, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn estimate_duty_delegates_to_lookup() {
        let catalog = Catalog::new(vec![record("mobile phone", "India", "Smartphone", 20.0)]).unwrap();
        let outcome = catalog.estimate_duty(&DutySelection {
            product: "mobile phone".into(),
            country: "India".into(),
            description: "Smartphone".into(),
            invoice_value: 250.0,
        });
        assert!((outcome.quote().unwrap().estimated_duty - 50.0).abs() < 1e-9);
    }
}
