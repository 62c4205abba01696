use std::cmp::Ordering;

use species_page_core::record::{
    Attribution, Classification, CommonName, Image, Reference, Status, TaxonAggregate, TaxonConcept,
    TextProperty,
};
use species_page_core::sources::{collect_info_sources, InfoSourceCollector, InfoSourceSummary};
use species_page_core::types::SourceId;

fn summary(name: Option<&str>, url: Option<&str>, id: Option<i32>) -> InfoSourceSummary {
    InfoSourceSummary::new(
        name.map(str::to_string),
        url.map(str::to_string),
        id.map(SourceId::new),
    )
}

fn names(list: &[InfoSourceSummary]) -> Vec<&str> {
    list.iter().map(|s| s.name.as_deref().unwrap_or("")).collect()
}

#[test]
fn equality_ignores_case_and_missing_urls() {
    let a = summary(Some("EOL"), None, Some(1));
    let b = summary(Some("eol"), Some("http://eol.org/"), Some(2));
    assert_eq!(a, b);

    let c = summary(Some("EOL"), Some("http://eol.org/"), None);
    let d = summary(Some("EOL"), Some("http://eol.org/other"), None);
    assert_ne!(c, d);

    let unnamed = summary(None, None, None);
    assert_ne!(unnamed, unnamed.clone());
}

#[test]
fn ordering_prefers_ids_then_names() {
    let by_id_low = summary(Some("Zeta"), None, Some(1));
    let by_id_high = summary(Some("Alpha"), None, Some(2));
    assert_eq!(by_id_low.display_cmp(&by_id_high), Ordering::Less);

    let no_id_a = summary(Some("Alpha"), None, None);
    let with_id_z = summary(Some("Zeta"), None, Some(1));
    assert_eq!(no_id_a.display_cmp(&with_id_z), Ordering::Less);
    assert_eq!(with_id_z.display_cmp(&no_id_a), Ordering::Greater);
}

#[test]
fn incomparable_pair_lets_left_win() {
    let a = summary(None, Some("http://a.example/"), None);
    let b = summary(None, Some("http://b.example/"), None);

    assert_eq!(a.display_cmp(&b), Ordering::Less);
    assert_eq!(b.display_cmp(&a), Ordering::Less);
}

#[test]
fn extraction_trims_and_parses_ids() {
    let record = Attribution::new("  EOL ")
        .with_url(" http://eol.org/ ")
        .with_id("42");
    let s = InfoSourceSummary::from_record(&record).unwrap();

    assert_eq!(s.name.as_deref(), Some("EOL"));
    assert_eq!(s.url.as_deref(), Some("http://eol.org/"));
    assert_eq!(s.id, Some(SourceId::new(42)));
}

#[test]
fn unparsable_or_missing_id_becomes_sentinel() {
    let bad = Attribution::new("EOL").with_id("not-a-number");
    let missing = Attribution::new("AFD");

    assert_eq!(InfoSourceSummary::from_record(&bad).unwrap().id, Some(SourceId::SENTINEL));
    assert_eq!(InfoSourceSummary::from_record(&missing).unwrap().id, Some(SourceId::SENTINEL));
    assert_eq!(SourceId::SENTINEL.get(), 999_999);
    assert!(SourceId::parse(Some("x")).is_sentinel());
    assert_eq!(SourceId::parse(Some(" 17 ")).get(), 17);
}

#[test]
fn negative_ids_are_valid() {
    let id = SourceId::parse(Some("-5"));

    assert!(!id.is_sentinel());
    assert_eq!(id.get(), -5);
    assert!(id < SourceId::new(0));
}

#[test]
fn records_without_source_name_are_skipped() {
    let mut collector = InfoSourceCollector::new();

    assert!(!collector.add(&Attribution::default()));
    assert!(!collector.add(&Attribution::default().with_url("http://x.example/")));
    assert!(collector.is_empty());
}

#[test]
fn same_name_without_urls_collapses() {
    let mut collector = InfoSourceCollector::new();

    assert!(collector.add(&Attribution::new("EOL").with_id("5")));
    assert!(!collector.add(&Attribution::new("eol").with_id("9")));

    let sorted = collector.into_sorted();
    assert_eq!(sorted.len(), 1);
    assert_eq!(sorted[0].id, Some(SourceId::new(5)), "first seen is kept");
}

#[test]
fn distinct_ids_sort_ascending() {
    let mut collector = InfoSourceCollector::new();
    collector.add(&Attribution::new("C").with_id("30"));
    collector.add(&Attribution::new("A").with_id("10"));
    collector.add(&Attribution::new("B").with_id("20"));
    collector.add(&Attribution::new("D"));

    assert_eq!(collector.len(), 4);
    assert_eq!(names(&collector.into_sorted()), vec!["A", "B", "C", "D"]);
}

#[test]
fn walks_singular_and_collection_fields() {
    let taxon = TaxonAggregate {
        taxon_concept: Some(TaxonConcept {
            guid: "urn:lsid:test:1".into(),
            name_string: "Vulpes vulpes".into(),
            rank: Some("species".into()),
            attribution: Attribution::new("AFD").with_id("3"),
        }),
        common_names: Some(vec![
            CommonName::new("Red Fox", Attribution::new("EOL").with_id("8")),
            CommonName::new("Fox", Attribution::new("afd").with_id("3")),
        ]),
        text_properties: Some(vec![TextProperty::new(
            "hasDescriptionText",
            "A fox.",
            Attribution::new("Wikipedia").with_url("http://en.wikipedia.org/").with_id("12"),
        )]),
        images: Some(vec![Image {
            identifier: "img-1".into(),
            attribution: Attribution::default(),
            ..Default::default()
        }]),
        conservation_statuses: Some(vec![Status {
            status: "Least Concern".into(),
            region: None,
            attribution: Attribution::new("IUCN").with_id("1"),
        }]),
        earliest_reference: Some(Reference {
            title: "Systema Naturae".into(),
            citation: None,
            attribution: Attribution::new("BHL").with_id("not-numeric"),
        }),
        classification: Some(Classification {
            kingdom: Some("Animalia".into()),
            attribution: Attribution::new("Catalogue of Life").with_id("4"),
            ..Default::default()
        }),
        ..Default::default()
    };

    let sources = collect_info_sources(&taxon);

    assert_eq!(
        names(&sources),
        vec!["IUCN", "AFD", "Catalogue of Life", "EOL", "Wikipedia", "BHL"]
    );
}

#[test]
fn empty_aggregate_has_no_sources() {
    assert!(collect_info_sources(&TaxonAggregate::default()).is_empty());
}
