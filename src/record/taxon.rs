use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::attribution::{impl_attributable, Attribution};

/// The concept a page is about, also used for synonyms and child concepts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonConcept {
    pub guid: String,
    pub name_string: String,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonName {
    pub name_complete: String,
    #[serde(flatten)]
    pub attribution: Attribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommonName {
    pub name: String,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl CommonName {
    pub fn new(name: impl Into<String>, attribution: Attribution) -> Self {
        Self {
            name: name.into(),
            attribution,
        }
    }
}

/// A named free-text (or text-like) property such as `hasDescriptionText`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextProperty {
    pub field_name: String,
    pub value: String,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl TextProperty {
    pub fn new(field_name: impl Into<String>, value: impl Into<String>, attribution: Attribution) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
            attribution,
        }
    }

    /// Natural order: field name, then source name (absent names first).
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.field_name
            .cmp(&other.field_name)
            .then_with(|| self.attribution.source_name.cmp(&other.attribution.source_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Image {
    pub identifier: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// Pest, conservation or extant status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Habitat {
    pub status: String,
    #[serde(flatten)]
    pub attribution: Attribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

impl_attributable!(
    TaxonConcept,
    TaxonName,
    CommonName,
    TextProperty,
    Image,
    Status,
    Habitat,
    Reference,
    Classification,
);

/// Everything known about one taxon concept, as assembled by the repository.
///
/// Read-only input to aggregation. An absent section means "no records",
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonAggregate {
    pub taxon_concept: Option<TaxonConcept>,
    pub taxon_name: Option<TaxonName>,
    pub common_names: Option<Vec<CommonName>>,
    pub text_properties: Option<Vec<TextProperty>>,
    pub images: Option<Vec<Image>>,
    pub distribution_images: Option<Vec<Image>>,
    pub pest_statuses: Option<Vec<Status>>,
    pub conservation_statuses: Option<Vec<Status>>,
    pub extant_statuses: Option<Vec<Status>>,
    pub habitats: Option<Vec<Habitat>>,
    pub publication_references: Option<Vec<Reference>>,
    pub earliest_reference: Option<Reference>,
    pub synonyms: Option<Vec<TaxonConcept>>,
    pub references: Option<Vec<Reference>>,
    pub classification: Option<Classification>,
    pub child_concepts: Option<Vec<TaxonConcept>>,
}
