use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::identifiers::PolicyVersion;

pub const DEFAULT_NON_TRUNCATED_SOURCE: &str =
    "http://www.environment.gov.au/biodiversity/abrs/online-resources/flora/main/index.html";
pub const DEFAULT_LOW_PRIORITY_SOURCE: &str = "http://en.wikipedia.org/";

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Immutable once built. Replace it wholesale through PolicyStore.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PriorityPolicy {
    /// Source URLs whose text is never shortened and which rank first on ties.
    #[serde(default)]
    pub non_truncated_sources: BTreeSet<String>,
    /// Source URLs which rank last on ties.
    #[serde(default)]
    pub low_priority_sources: BTreeSet<String>,
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            non_truncated_sources: BTreeSet::from([DEFAULT_NON_TRUNCATED_SOURCE.to_string()]),
            low_priority_sources: BTreeSet::from([DEFAULT_LOW_PRIORITY_SOURCE.to_string()]),
        }
    }
}

impl PriorityPolicy {
    pub fn new<N, L>(non_truncated_sources: N, low_priority_sources: L) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            non_truncated_sources: non_truncated_sources.into_iter().map(Into::into).collect(),
            low_priority_sources: low_priority_sources.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy with both sets empty.
    pub fn empty() -> Self {
        Self {
            non_truncated_sources: BTreeSet::new(),
            low_priority_sources: BTreeSet::new(),
        }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, PolicyError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PolicyError> {
        let f = fs::File::open(path)?;
        Ok(serde_json::from_reader(f)?)
    }

    pub fn is_non_truncated(&self, source_url: Option<&str>) -> bool {
        source_url.is_some_and(|url| self.non_truncated_sources.contains(url))
    }

    pub fn is_low_priority(&self, source_url: Option<&str>) -> bool {
        source_url.is_some_and(|url| self.low_priority_sources.contains(url))
    }

    /// Content hash over the canonical JSON form. BTreeSet keeps it order independent.
    pub fn version(&self) -> Result<PolicyVersion, PolicyError> {
        let canonical = serde_json::to_vec(self)?;
        Ok(PolicyVersion::from_content(&canonical))
    }
}
