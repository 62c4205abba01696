//! Merge, ranking and attribution engine for taxon detail pages.
//!
//! `species-page-core` takes a fully assembled taxon aggregate and derives
//! the display view: adjacent duplicate common names removed, text
//! properties merged per field and source, ranked by a source-priority
//! policy, shortened at sentence boundaries, plus the deduplicated list of
//! every information source the page draws on. No I/O happens on the
//! aggregation path, and no anomaly in the input aborts it.

pub mod aggregation;
pub mod policy;
pub mod record;
pub mod sources;
pub mod types;

pub use aggregation::{aggregate, Aggregator};
pub use policy::{PolicyStore, PriorityPolicy};
pub use types::AggregatedView;
