// Readers pin one snapshot for a whole aggregation pass.
// Writers publish a complete replacement; there is no partial update.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::policy::policy::{PolicyError, PriorityPolicy};
use crate::types::identifiers::PolicyVersion;

#[derive(Debug)]
pub struct PolicySnapshot {
    pub policy: PriorityPolicy,
    pub version: PolicyVersion,
    pub installed_at: DateTime<Utc>, // informational only
}

impl PolicySnapshot {
    fn build(policy: PriorityPolicy) -> Result<Self, PolicyError> {
        let version = policy.version()?;
        Ok(Self {
            policy,
            version,
            installed_at: Utc::now(),
        })
    }
}

#[derive(Debug)]
pub struct PolicyStore {
    current: ArcSwap<PolicySnapshot>,
}

impl PolicyStore {
    pub fn new(policy: PriorityPolicy) -> Result<Self, PolicyError> {
        let snapshot = PolicySnapshot::build(policy)?;
        Ok(Self {
            current: ArcSwap::from_pointee(snapshot),
        })
    }

    /// The policy in force right now. Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<PolicySnapshot> {
        self.current.load_full()
    }

    /// Swap in a new policy and return the snapshot that is now current.
    pub fn replace(&self, policy: PriorityPolicy) -> Result<Arc<PolicySnapshot>, PolicyError> {
        let snapshot = Arc::new(PolicySnapshot::build(policy)?);
        let previous = self.current.swap(Arc::clone(&snapshot));

        info!(
            previous = previous.version.as_str(),
            current = snapshot.version.as_str(),
            non_truncated = snapshot.policy.non_truncated_sources.len(),
            low_priority = snapshot.policy.low_priority_sources.len(),
            "Replaced priority policy"
        );

        Ok(snapshot)
    }
}
