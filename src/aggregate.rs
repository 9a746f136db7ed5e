//! Top-rated restaurant aggregation for a single location.

use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::dataset::{LocationDataset, RestaurantRecord};
use crate::utility::mean;

/// Number of restaurants shown per location.
pub const DEFAULT_TOP_N: usize = 10;

/// One restaurant's mean cost and mean rating within a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub name: String,
    pub approx_cost: Option<f64>,
    pub rate: Option<f64>,
}

/// Ranks the restaurants of `location` by mean rating and keeps the best `n`.
///
/// Records are matched on the exact, case-sensitive location string and
/// grouped by name. Each group's cost and rating are averaged over the values
/// present, so a missing rating never counts toward the denominator. Groups
/// are ordered by mean rating descending; ties keep the order in which the
/// names first appear, and groups with no rating at all come last.
///
/// An unknown location produces an empty result.
pub fn top_rated(dataset: &LocationDataset, location: &str, n: usize) -> Vec<AggregatedRow> {
    let mut groups: IndexMap<&str, Vec<&RestaurantRecord>> = IndexMap::new();

    for record in dataset.records() {
        if record.location.as_deref() != Some(location) || record.name.is_empty() {
            continue;
        }
        groups.entry(record.name.as_str()).or_default().push(record);
    }

    let mut rows: Vec<AggregatedRow> = groups
        .into_iter()
        .map(|(name, records)| AggregatedRow {
            name: name.to_string(),
            approx_cost: mean(records.iter().map(|r| r.approx_cost)),
            rate: mean(records.iter().map(|r| r.rate)),
        })
        .collect();

    debug!(location, groups = rows.len(), "Grouped restaurants");

    // sort_by is stable, so equal ratings keep first-seen order
    rows.sort_by(|a, b| by_rate_desc(a.rate, b.rate));
    rows.truncate(n);

    rows
}

fn by_rate_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
