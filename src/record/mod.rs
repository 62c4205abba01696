pub mod attribution;
pub mod taxon;

pub use crate::types::identifiers::SourceId;
pub use attribution::{Attributable, Attribution};
pub use taxon::{
    Classification, CommonName, Habitat, Image, Reference, Status, TaxonAggregate, TaxonConcept,
    TaxonName, TextProperty,
};
