//! Interactive location picker.
//!
//! Lists the available locations, then reads one selection per line and
//! renders a fresh report for each. The dataset comes from the cache, so it
//! is read once no matter how many selections are made.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

use crate::aggregate::top_rated;
use crate::cache::DatasetCache;
use crate::render::{RenderOptions, report};

/// Resolves a 1-based index or an exact location name against the picker list.
pub fn resolve_selection<'a>(locations: &[&'a str], input: &str) -> Option<&'a str> {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| locations.get(i)).copied();
    }
    locations.iter().find(|l| **l == input).copied()
}

fn is_quit(input: &str) -> bool {
    matches!(input.trim(), "q" | "quit" | "exit")
}

/// Runs the picker until `q` or end of input.
pub fn run<R: BufRead, W: Write>(
    cache: &DatasetCache,
    input: R,
    mut out: W,
    n: usize,
    opts: &RenderOptions,
) -> Result<()> {
    let dataset = cache.get_or_load()?;
    let locations = dataset.locations();

    writeln!(out, "Select Location:")?;
    for (i, location) in locations.iter().enumerate() {
        writeln!(out, "{:>4}. {location}", i + 1)?;
    }
    writeln!(out, "Enter a number or name, q to quit.")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if is_quit(&line) {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some(location) = resolve_selection(&locations, &line) else {
            warn!(selection = %line.trim(), "Unknown location selection");
            writeln!(out, "Unknown location: {}", line.trim())?;
            continue;
        };

        // re-read through the cache on every selection; only the first call loads
        let dataset = cache.get_or_load()?;
        let rows = top_rated(&dataset, location, n);
        info!(location, rows = rows.len(), "Location selected");
        if rows.is_empty() {
            warn!(location, "No restaurants found for location");
        }

        write!(out, "\n{}\n", report(location, &rows, n, opts))?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LocationDataset, RestaurantRecord};

    fn cache() -> DatasetCache {
        DatasetCache::with_dataset(
            "memory",
            LocationDataset::new(vec![
                RestaurantRecord::new("Toit", Some("Indiranagar"), Some(1500.0), Some(4.7)),
                RestaurantRecord::new("CTR", Some("Malleshwaram"), Some(150.0), Some(4.8)),
            ]),
        )
    }

    fn plain() -> RenderOptions {
        RenderOptions {
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_selection() {
        let locations = ["Indiranagar", "Malleshwaram"];
        assert_eq!(resolve_selection(&locations, "2"), Some("Malleshwaram"));
        assert_eq!(resolve_selection(&locations, " Indiranagar "), Some("Indiranagar"));
        assert_eq!(resolve_selection(&locations, "0"), None);
        assert_eq!(resolve_selection(&locations, "3"), None);
        assert_eq!(resolve_selection(&locations, "indiranagar"), None);
    }

    #[test]
    fn test_run_renders_each_selection() {
        let mut out = Vec::new();
        run(&cache(), "1\nMalleshwaram\nq\n2\n".as_bytes(), &mut out, 10, &plain()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("   1. Indiranagar"));
        assert!(text.contains("Top 10 Restaurants by Rating in Indiranagar"));
        assert_eq!(text.matches("Top 10 Restaurants by Rating in Malleshwaram").count(), 1);
    }

    #[test]
    fn test_run_unknown_selection_continues() {
        let mut out = Vec::new();
        run(&cache(), "Whitefield\n1\n".as_bytes(), &mut out, 10, &plain()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Unknown location: Whitefield"));
        assert!(text.contains("in Indiranagar"));
    }
}
