//! Markdown summary of a statistics table.

use crate::models::stats::{metric_value, series_names};
use crate::models::StatsTable;
use anyhow::Result;
use std::fmt::Write as _;

/// Header of the combined score column.
const COMBINED_COLUMN: &str = "A+R+-S";
/// Metrics the combined score is built from: added, added, subtracted.
const COMBINED_PARTS: [&str; 3] = ["alternate", "roll", "sfb"];

/// Generates a markdown table of every configuration's metrics.
///
/// Columns are `Layout` followed by the first entry's metric names in sorted
/// order; rows follow table order. Values are printed with two decimals.
/// When the metrics include `alternate`, `roll` and `sfb`, a final
/// `A+R+-S` column holds `alternate + roll - sfb`.
///
/// # Example
///
/// ```text
/// | Layout | alternate | sfb |
/// |---|---:|---:|
/// | qwerty | 30.00 | 6.40 |
/// ```
pub fn generate_stats_summary(stats: &StatsTable) -> Result<String> {
    let metrics = series_names(stats)?;
    let combined = COMBINED_PARTS
        .iter()
        .all(|part| metrics.iter().any(|m| m == part));
    let mut output = String::new();

    output.push_str("| Layout |");
    for metric in &metrics {
        let _ = write!(output, " {} |", escape_cell(metric));
    }
    if combined {
        let _ = write!(output, " {COMBINED_COLUMN} |");
    }
    output.push('\n');

    output.push_str("|---|");
    for _ in 0..metrics.len() + usize::from(combined) {
        output.push_str("---:|");
    }
    output.push('\n');

    for (name, values) in stats {
        let _ = write!(output, "| {} |", escape_cell(name));
        for metric in &metrics {
            let value = metric_value(values, name, metric)?;
            let _ = write!(output, " {value:.2} |");
        }
        if combined {
            let [alternate, roll, sfb] = COMBINED_PARTS;
            let score = metric_value(values, name, alternate)? + metric_value(values, name, roll)?
                - metric_value(values, name, sfb)?;
            let _ = write!(output, " {score:.2} |");
        }
        output.push('\n');
    }

    Ok(output)
}

/// Escapes pipes so names cannot break the table.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
