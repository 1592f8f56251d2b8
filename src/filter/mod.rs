//! Query filtering (pure).
//!
//! Maps a dataset and a query to the rows the table shows. Matching is a literal,
//! case-sensitive substring test against the command text; the dataset
//! order is kept and nothing is re-ranked.

use crate::model::{Dataset, Record, VisibleRow};
use serde::Deserialize;

/// Command text of the synthetic row shown when nothing matches.
pub const NO_MATCHES_TEXT: &str = "No commands found :/";

/// What to show when a query matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmptyResultPolicy {
    /// Show a single placeholder row saying no commands were found.
    #[default]
    Placeholder,
    /// Show an empty table.
    Omit,
}

impl EmptyResultPolicy {
    /// Parse the lowercase name used in config files and environment variables.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "placeholder" => Some(Self::Placeholder),
            "omit" => Some(Self::Omit),
            _ => None,
        }
    }
}

/// The synthetic "no matches" row.
pub fn placeholder_row() -> VisibleRow {
    VisibleRow::new("", "", NO_MATCHES_TEXT)
}

/// Records whose command contains `query`, in dataset order.
///
/// An empty query matches every record.
pub fn matching_records<'a>(
    dataset: &'a Dataset,
    query: &'a str,
) -> impl Iterator<Item = &'a Record> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |record| query.is_empty() || record.command().contains(query))
}

/// Compute the visible rows for `query`.
///
/// Rows are produced fresh on every call. When nothing matches, `policy` decides
/// between an empty result and a single placeholder row.
pub fn filter(dataset: &Dataset, query: &str, policy: EmptyResultPolicy) -> Vec<VisibleRow> {
    let now = dataset.reference_time();
    let rows: Vec<VisibleRow> = matching_records(dataset, query)
        .map(|record| record.to_visible_row(now))
        .collect();

    if rows.is_empty() && policy == EmptyResultPolicy::Placeholder {
        return vec![placeholder_row()];
    }
    rows
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
