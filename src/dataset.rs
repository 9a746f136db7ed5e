//! Restaurant dataset loading.
//!
//! Parses the delimited listing export into an immutable [`LocationDataset`].
//! Only the four columns the explorer needs are kept; the stray index column
//! left behind by dataframe exports is dropped and anything else is ignored.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::fetch::read_source;

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "location", "approx_cost", "rate"];

/// Header names of the index column written by dataframe exports.
const STRAY_INDEX_COLUMNS: [&str; 2] = ["Unnamed: 0", ""];

/// A single restaurant listing. Names repeat across branches and duplicate listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub location: Option<String>,
    pub approx_cost: Option<f64>,
    pub rate: Option<f64>,
}

impl RestaurantRecord {
    pub fn new(
        name: impl Into<String>,
        location: Option<&str>,
        approx_cost: Option<f64>,
        rate: Option<f64>,
    ) -> Self {
        RestaurantRecord {
            name: name.into(),
            location: location.map(str::to_string),
            approx_cost,
            rate,
        }
    }
}

/// Row as it appears in the file, before numeric cleanup.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    name: Option<String>,
    location: Option<String>,
    approx_cost: Option<String>,
    rate: Option<String>,
}

impl From<RawRecord> for RestaurantRecord {
    fn from(raw: RawRecord) -> Self {
        RestaurantRecord {
            name: raw.name.unwrap_or_default(),
            location: raw.location.filter(|l| !l.is_empty()),
            approx_cost: raw.approx_cost.as_deref().and_then(parse_cost),
            rate: raw.rate.as_deref().and_then(parse_rate),
        }
    }
}

/// Parses a cost cell such as `800` or `1,200`. Unparseable cells are missing.
pub fn parse_cost(cell: &str) -> Option<f64> {
    let cleaned: String = cell.trim().chars().filter(|c| *c != ',').collect();
    parse_finite(&cleaned)
}

/// Parses a rating cell such as `4.1` or `4.1/5`. Placeholders like `NEW` or `-` are missing.
pub fn parse_rate(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    let cell = cell.strip_suffix("/5").unwrap_or(cell).trim_end();
    parse_finite(cell)
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The full, ordered set of restaurant records. Immutable once loaded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationDataset {
    records: Vec<RestaurantRecord>,
}

impl LocationDataset {
    pub fn new(records: Vec<RestaurantRecord>) -> Self {
        LocationDataset { records }
    }

    /// Parses CSV with a header row from any reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the header lacks one of [`REQUIRED_COLUMNS`] or the
    /// input is not valid CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = rdr.headers().context("failed to read CSV header")?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                bail!("dataset is missing required column `{column}`");
            }
        }

        let dropped: Vec<&str> = headers
            .iter()
            .filter(|h| STRAY_INDEX_COLUMNS.contains(h))
            .collect();
        if !dropped.is_empty() {
            debug!(columns = ?dropped, "Dropping stray index column");
        }

        let mut records = Vec::new();
        for (line, result) in rdr.deserialize::<RawRecord>().enumerate() {
            let raw = result.with_context(|| format!("malformed CSV row {}", line + 1))?;
            records.push(RestaurantRecord::from(raw));
        }

        Ok(LocationDataset { records })
    }

    /// Reads a dataset from a local CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        Self::from_reader(file)
    }

    /// Loads a dataset from a file path or an `http(s)://` URL.
    #[tracing::instrument(skip_all, fields(source = %source))]
    pub fn load(source: &str) -> Result<Self> {
        let bytes = read_source(source)?;
        let dataset = Self::from_reader(bytes.as_slice())
            .with_context(|| format!("failed to parse dataset from {source}"))?;
        info!(records = dataset.len(), "Dataset loaded");
        Ok(dataset)
    }

    pub fn records(&self) -> &[RestaurantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-missing locations in ascending order.
    pub fn locations(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| r.location.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
