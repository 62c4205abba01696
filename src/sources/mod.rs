pub mod collector;
pub mod summary;

pub use collector::{collect_info_sources, InfoSourceCollector};
pub use summary::InfoSourceSummary;
