use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::Attributable;
use crate::types::identifiers::SourceId;

/// One information source as listed on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoSourceSummary {
    pub name: Option<String>,
    pub url: Option<String>,
    pub id: Option<SourceId>,
}

impl InfoSourceSummary {
    pub fn new(name: Option<String>, url: Option<String>, id: Option<SourceId>) -> Self {
        Self { name, url, id }
    }

    /// Extract the summary of a record. Records without a source name yield nothing.
    pub fn from_record<A: Attributable + ?Sized>(record: &A) -> Option<Self> {
        let name = record.source_name()?;

        Some(Self {
            name: Some(name.trim().to_string()),
            url: record.source_url().map(|url| url.trim().to_string()),
            id: Some(SourceId::parse(record.source_id())),
        })
    }

    /// Display order: by id when both sides have one, else by name.
    ///
    /// When neither is comparable the left operand sorts first. This is not a
    /// total order; callers must not feed it to `sort_by`.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.id, other.id) {
            return a.cmp(&b);
        }
        if let (Some(a), Some(b)) = (&self.name, &other.name) {
            return a.cmp(b);
        }
        Ordering::Less
    }
}

// Names match case-insensitively; URLs only count when both sides have one.
impl PartialEq for InfoSourceSummary {
    fn eq(&self, other: &Self) -> bool {
        let (Some(a), Some(b)) = (&self.name, &other.name) else {
            return false;
        };
        if a.to_lowercase() != b.to_lowercase() {
            return false;
        }
        match (&self.url, &other.url) {
            (Some(x), Some(y)) => x == y,
            _ => true,
        }
    }
}
