//! Typed errors for input that parses but does not fit the renderers.

use thiserror::Error;

/// Input that is well-formed JSON but does not match what a renderer needs.
///
/// These are wrapped in `anyhow::Error` on the way up; the CLI downcasts them
/// to pick the validation exit code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A layout string holds fewer keys than the keyboard geometry.
    #[error("layout '{title}' has {found} keys but the keyboard needs {expected}")]
    LayoutTooShort {
        /// Title of the offending layout
        title: String,
        /// Key count of the geometry
        expected: usize,
        /// Characters present in the layout string
        found: usize,
    },

    /// No configuration to take metric names from.
    #[error("statistics table is empty, no entry to take metric names from")]
    EmptyTable,

    /// A configuration lacks a metric present in the representative entry.
    #[error("configuration '{category}' has no value for metric '{metric}'")]
    MissingMetric {
        /// Configuration name
        category: String,
        /// Metric name
        metric: String,
    },

    /// No configuration matched the selection prefix.
    #[error("no layouts start with '{prefix}'")]
    NoMatchingLayouts {
        /// Selection prefix
        prefix: String,
    },
}
