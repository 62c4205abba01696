use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

/// Numeric identifier of an information source.
///
/// Upstream records carry the id as free text. Anything missing or
/// unparsable resolves to [`SourceId::SENTINEL`] so ordering by id never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(i32);

impl SourceId {
    pub const SENTINEL: SourceId = SourceId(999_999);

    pub fn new(value: i32) -> Self {
        SourceId(value)
    }

    /// Parse a raw id as supplied by a record.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::SENTINEL;
        };

        match raw.trim().parse::<i32>() {
            Ok(value) => SourceId(value),
            Err(e) => {
                warn!("Unparsable source id {:?}: {}, using sentinel", raw, e);
                Self::SENTINEL
            }
        }
    }

    pub fn get(&self) -> i32 {
        self.0
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// Content hash of a serialized priority policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyVersion(String);

impl PolicyVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        PolicyVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
