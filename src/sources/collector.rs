use crate::record::{Attributable, TaxonAggregate};
use crate::sources::summary::InfoSourceSummary;

/// Accumulates distinct information sources in encounter order.
#[derive(Debug, Default)]
pub struct InfoSourceCollector {
    seen: Vec<InfoSourceSummary>,
}

impl InfoSourceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the record contributed a new source.
    pub fn add<A: Attributable + ?Sized>(&mut self, record: &A) -> bool {
        let Some(summary) = InfoSourceSummary::from_record(record) else {
            return false;
        };
        // Linear scan: equality is not transitive, so no hashing or tree here.
        if self.seen.iter().any(|existing| *existing == summary) {
            return false;
        }
        self.seen.push(summary);
        true
    }

    pub fn add_optional<A: Attributable>(&mut self, record: Option<&A>) {
        if let Some(record) = record {
            self.add(record);
        }
    }

    pub fn add_all<A: Attributable>(&mut self, records: Option<&[A]>) {
        for record in records.unwrap_or_default() {
            self.add(record);
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Stable insertion sort by [`InfoSourceSummary::display_cmp`].
    pub fn into_sorted(self) -> Vec<InfoSourceSummary> {
        let mut sorted: Vec<InfoSourceSummary> = Vec::with_capacity(self.seen.len());
        for summary in self.seen {
            let mut at = sorted.len();
            while at > 0 && sorted[at - 1].display_cmp(&summary).is_gt() {
                at -= 1;
            }
            sorted.insert(at, summary);
        }
        sorted
    }
}

/// Every distinct information source referenced anywhere in the aggregate.
pub fn collect_info_sources(taxon: &TaxonAggregate) -> Vec<InfoSourceSummary> {
    let mut collector = InfoSourceCollector::new();

    collector.add_optional(taxon.taxon_concept.as_ref());
    collector.add_optional(taxon.taxon_name.as_ref());
    collector.add_all(taxon.images.as_deref());
    collector.add_all(taxon.common_names.as_deref());
    collector.add_all(taxon.text_properties.as_deref());
    collector.add_all(taxon.child_concepts.as_deref());
    collector.add_all(taxon.distribution_images.as_deref());
    collector.add_all(taxon.pest_statuses.as_deref());
    collector.add_all(taxon.conservation_statuses.as_deref());
    collector.add_all(taxon.extant_statuses.as_deref());
    collector.add_all(taxon.habitats.as_deref());
    collector.add_all(taxon.publication_references.as_deref());
    collector.add_optional(taxon.earliest_reference.as_ref());
    collector.add_all(taxon.synonyms.as_deref());
    collector.add_all(taxon.references.as_deref());
    collector.add_optional(taxon.classification.as_ref());

    collector.into_sorted()
}
