#![allow(dead_code)]

//! Loads the tariff dataset once per process.
//!
//! - Reads `hs_lookup_expanded.json` and the optional `form_dependencies.json`
//!   from a configured directory, or from the copies embedded in the binary.
//! - Any malformed or inconsistent data aborts the load; there is no partial catalog.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Catalog, CatalogError, FormDependencies, TariffRecord};
use crate::util::{assets, config::AppConfig};

pub const RECORDS_FILENAME: &str = "hs_lookup_expanded.json";
pub const DEPENDENCIES_FILENAME: &str = "form_dependencies.json";

static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{file}: record #{index} is missing `{field}`")]
    MissingField {
        file: String,
        index: usize,
        field: &'static str,
    },
    #[error("embedded data file {0} is missing from the build")]
    MissingEmbedded(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Where the data files come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Directory(PathBuf),
    Embedded,
}

impl DataSource {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.data_dir {
            Some(dir) => DataSource::Directory(dir.clone()),
            None => DataSource::Embedded,
        }
    }

    fn describe(&self, file: &str) -> String {
        match self {
            DataSource::Directory(dir) => dir.join(file).display().to_string(),
            DataSource::Embedded => format!("embedded:{file}"),
        }
    }

    /// `Ok(None)` when an optional file is absent.
    fn read(&self, file: &str, required: bool) -> Result<Option<String>, LoadError> {
        match self {
            DataSource::Directory(dir) => read_from_dir(dir, file, required),
            DataSource::Embedded => {
                let path = format!("data/{file}");
                match assets::embedded_text(&path) {
                    Some(text) => Ok(Some(text)),
                    None if required => Err(LoadError::MissingEmbedded(path)),
                    None => Ok(None),
                }
            }
        }
    }
}

fn read_from_dir(dir: &Path, file: &str, required: bool) -> Result<Option<String>, LoadError> {
    let path = dir.join(file);
    match fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => Ok(None),
        Err(source) => Err(LoadError::Io { path, source }),
    }
}

/// Record as it appears on disk; every field is checked before conversion.
#[derive(Debug, Deserialize)]
struct RawTariffRecord {
    product: Option<String>,
    destination: Option<String>,
    description: Option<String>,
    hs_code: Option<String>,
    tariff_percent: Option<f64>,
}

impl RawTariffRecord {
    fn into_record(self, file: &str, index: usize) -> Result<TariffRecord, LoadError> {
        let missing = |field: &'static str| LoadError::MissingField {
            file: file.to_string(),
            index,
            field,
        };

        Ok(TariffRecord {
            product: self.product.ok_or_else(|| missing("product"))?,
            destination: self.destination.ok_or_else(|| missing("destination"))?,
            description: self.description.ok_or_else(|| missing("description"))?,
            hs_code: self.hs_code.ok_or_else(|| missing("hs_code"))?,
            tariff_percent: self.tariff_percent.ok_or_else(|| missing("tariff_percent"))?,
        })
    }
}

pub fn parse_records(file: &str, content: &str) -> Result<Vec<TariffRecord>, LoadError> {
    let raw: Vec<RawTariffRecord> =
        serde_json::from_str(content).map_err(|source| LoadError::Parse {
            file: file.to_string(),
            source,
        })?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.into_record(file, index))
        .collect()
}

pub fn parse_dependencies(file: &str, content: &str) -> Result<FormDependencies, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        file: file.to_string(),
        source,
    })
}

/// Reads and validates both files without touching the process-wide catalog.
pub fn load_catalog(source: &DataSource) -> Result<Catalog, LoadError> {
    let records_file = source.describe(RECORDS_FILENAME);
    let content = source
        .read(RECORDS_FILENAME, true)?
        .ok_or_else(|| LoadError::MissingEmbedded(records_file.clone()))?;
    let records = parse_records(&records_file, &content)?;
    tracing::debug!(file = %records_file, count = records.len(), "parsed tariff records");

    let catalog = match source.read(DEPENDENCIES_FILENAME, false)? {
        Some(content) => {
            let deps_file = source.describe(DEPENDENCIES_FILENAME);
            let deps = parse_dependencies(&deps_file, &content)?;
            tracing::debug!(file = %deps_file, products = deps.product_names.len(), "using dependency file");
            Catalog::with_dependencies(records, &deps)?
        }
        None => {
            tracing::info!("no {DEPENDENCIES_FILENAME}; deriving choices from records");
            Catalog::new(records)?
        }
    };

    Ok(catalog)
}

/// Loads the catalog into process-wide state. Later calls return the first catalog.
pub fn init_catalog(config: &AppConfig) -> Result<&'static Catalog, LoadError> {
    if let Some(existing) = CATALOG.get() {
        return Ok(existing);
    }

    let source = DataSource::from_config(config);
    let catalog = load_catalog(&source)?;
    tracing::info!(
        source = ?source,
        records = catalog.len(),
        products = catalog.index().product_names().len(),
        "tariff catalog loaded"
    );
    Ok(CATALOG.get_or_init(|| catalog))
}

pub fn catalog() -> Option<&'static Catalog> {
    CATALOG.get()
}
