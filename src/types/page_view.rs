use serde::Serialize;

use crate::record::{CommonName, TextProperty};
use crate::sources::InfoSourceSummary;

/// Counters describing what aggregation did to one taxon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct AggregationMetadata {
    pub policy_version: Option<String>,

    pub properties_considered: usize,
    pub properties_merged: usize,
    pub properties_truncated: usize,

    pub duplicate_names_removed: usize,
    pub info_sources_found: usize,
}

/// Display-ready output for one taxon page.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct AggregatedView {
    pub merged_text_properties: Vec<TextProperty>,
    pub info_sources: Vec<InfoSourceSummary>,

    pub common_names: Vec<CommonName>,
    pub common_names_summary: String,

    pub aggregation: AggregationMetadata,
}
