pub mod identifiers;
pub mod page_view;

pub use identifiers::{PolicyVersion, SourceId};
pub use page_view::{AggregatedView, AggregationMetadata};
