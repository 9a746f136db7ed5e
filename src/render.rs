//! Terminal presentation of a top-rated result: heading, cost and rating bar
//! charts, and a table with the best rating highlighted.

use std::fmt::Write;

use crate::aggregate::AggregatedRow;
use crate::utility::max_present;

/// Shown instead of a report when a location has no restaurants.
pub const EMPTY_WARNING: &str = "No restaurants found for this location.";

const BAR: char = '█';
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI colour codes.
    pub color: bool,
    /// Width in characters of the longest bar.
    pub bar_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: true,
            bar_width: 40,
        }
    }
}

pub fn subheading(location: &str, n: usize) -> String {
    format!("Top {n} Restaurants by Rating in {location}")
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn name_width(rows: &[AggregatedRow], header: &str) -> usize {
    rows.iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

/// Draws one horizontal bar per row, in row order, scaled to the largest value.
pub fn bar_chart<F>(title: &str, rows: &[AggregatedRow], value: F, opts: &RenderOptions) -> String
where
    F: Fn(&AggregatedRow) -> Option<f64>,
{
    let max = max_present(rows.iter().map(&value)).unwrap_or(0.0);
    let width = name_width(rows, "");
    let mut out = String::new();

    let _ = writeln!(out, "{title}");
    for row in rows {
        let v = value(row);
        let len = match v {
            Some(v) if max > 0.0 && v > 0.0 => ((v / max) * opts.bar_width as f64).round() as usize,
            _ => 0,
        };
        let bar: String = std::iter::repeat_n(BAR, len).collect();
        let _ = writeln!(out, "{:<width$} | {bar} {}", row.name, fmt_value(v));
    }

    out
}

/// Renders the rows as an aligned table, highlighting every row that holds the maximum rating.
pub fn table(rows: &[AggregatedRow], opts: &RenderOptions) -> String {
    let best = max_present(rows.iter().map(|r| r.rate));
    let name_w = name_width(rows, "name");
    let mut out = String::new();

    let _ = writeln!(out, "{:<name_w$}  {:>11}  {:>6}", "name", "approx_cost", "rate");
    for row in rows {
        let rate = format!("{:>6}", fmt_value(row.rate));
        let is_best = best.is_some() && row.rate == best;
        let rate = match (is_best, opts.color) {
            (true, true) => format!("{GREEN}{rate}{RESET}"),
            (true, false) => format!("{rate} *"),
            (false, _) => rate,
        };
        let _ = writeln!(
            out,
            "{:<name_w$}  {:>11}  {rate}",
            row.name,
            fmt_value(row.approx_cost)
        );
    }

    out
}

/// Full text report for one location selection.
pub fn report(location: &str, rows: &[AggregatedRow], n: usize, opts: &RenderOptions) -> String {
    if rows.is_empty() {
        return format!("{EMPTY_WARNING}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}\n", subheading(location, n));
    let _ = writeln!(out, "{}", bar_chart("Average Cost", rows, |r| r.approx_cost, opts));
    let _ = writeln!(out, "{}", bar_chart("Average Rating", rows, |r| r.rate, opts));
    let _ = write!(out, "Top Restaurants Data\n{}", table(rows, opts));
    out
}
