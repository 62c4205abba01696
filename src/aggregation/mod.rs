pub mod merging;
pub mod names;
pub mod ranking;
pub mod truncation;

use crate::policy::{PolicyStore, PriorityPolicy};
use crate::record::TaxonAggregate;
use crate::sources::collect_info_sources;
use crate::types::identifiers::PolicyVersion;
use crate::types::page_view::{AggregatedView, AggregationMetadata};
pub use merging::{is_mergeable_field, merge_text_properties, MergeResult, PARAGRAPH_SEPARATOR};
pub use names::{common_names_summary, dedup_adjacent_names};
pub use ranking::{PropertyRanking, RankRule, Verdict, DEFAULT_RULES};
pub use truncation::{
	SegmentationError, SentenceBoundaries, Truncator, UnicodeSentences, DEFAULT_MIN_LENGTH, ELLIPSIS,
};

/// Turns a taxon aggregate into the merged, ranked and attributed page view.
///
/// Holds no per-request state; one instance can serve concurrent callers.
pub struct Aggregator<B = UnicodeSentences> {
	truncator: Truncator<B>,
}

impl Default for Aggregator<UnicodeSentences> {
	fn default() -> Self {
		Self {
			truncator: Truncator::default(),
		}
	}
}

impl<B> Aggregator<B>
where
	B: SentenceBoundaries,
{
	pub fn new(truncator: Truncator<B>) -> Self {
		Self { truncator }
	}

	pub fn aggregate(&self, taxon: &TaxonAggregate, policy: &PriorityPolicy) -> AggregatedView {
		self.run(taxon, policy, None)
	}

	/// Aggregate against whatever policy is current, read once for the whole pass.
	pub fn aggregate_with_store(&self, taxon: &TaxonAggregate, store: &PolicyStore) -> AggregatedView {
		let snapshot = store.snapshot();
		self.run(taxon, &snapshot.policy, Some(&snapshot.version))
	}

	fn run(
		&self,
		taxon: &TaxonAggregate,
		policy: &PriorityPolicy,
		version: Option<&PolicyVersion>,
	) -> AggregatedView {
		// 1. Common names
		let raw_names = taxon.common_names.as_deref().unwrap_or_default();
		let common_names = dedup_adjacent_names(raw_names);
		let summary = common_names_summary(raw_names);

		// 2. Merge text properties by (field, source)
		let raw_properties = taxon.text_properties.as_deref().unwrap_or_default();
		let MergeResult {
			merged: mut properties,
			properties_folded,
		} = merge_text_properties(raw_properties);

		// 3. Rank
		let ranking = PropertyRanking::new(policy);
		ranking.sort(&mut properties);

		debug_assert!(properties
			.windows(2)
			.all(|w| ranking.compare(&w[0], &w[1]).is_le()));

		// 4. Truncate everything not exempt
		let mut properties_truncated = 0;
		for property in properties.iter_mut() {
			if policy.is_non_truncated(property.attribution.source_url.as_deref()) {
				continue;
			}
			let shortened = match self.truncator.truncate(&property.value) {
				std::borrow::Cow::Owned(shortened) => shortened,
				std::borrow::Cow::Borrowed(_) => continue,
			};
			property.value = shortened;
			properties_truncated += 1;
		}

		// 5. Sources
		let info_sources = collect_info_sources(taxon);

		let metadata = AggregationMetadata {
			policy_version: version.map(|v| v.as_str().to_string()),
			properties_considered: raw_properties.len(),
			properties_merged: properties_folded,
			properties_truncated,
			duplicate_names_removed: raw_names.len() - common_names.len(),
			info_sources_found: info_sources.len(),
		};

		AggregatedView {
			merged_text_properties: properties,
			info_sources,
			common_names,
			common_names_summary: summary,
			aggregation: metadata,
		}
	}
}

/// Aggregate with the default truncator.
pub fn aggregate(taxon: &TaxonAggregate, policy: &PriorityPolicy) -> AggregatedView {
	Aggregator::default().aggregate(taxon, policy)
}
