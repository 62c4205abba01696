use std::collections::HashMap;

use crate::record::TextProperty;

/// Joins repeated values for the same field and source.
/// Line breaks rather than paragraphs keep the citation aligned when rendered.
pub const PARAGRAPH_SEPARATOR: &str = "<br><br>";

const TEXT_FIELD_SUFFIX: &str = "Text";
const POPULATION_ESTIMATE_FIELD: &str = "hasPopulateEstimate";

/// Only text-like fields take part in merging; everything else is dropped.
pub fn is_mergeable_field(field_name: &str) -> bool {
    field_name.ends_with(TEXT_FIELD_SUFFIX) || field_name.ends_with(POPULATION_ESTIMATE_FIELD)
}

pub struct MergeResult {
    pub merged: Vec<TextProperty>,
    /// Text properties folded into an earlier one with the same key.
    pub properties_folded: usize,
}

/// Group text properties by (field name, source name), in first-seen order.
///
/// The merged record keeps the identity of the first property seen for its key.
pub fn merge_text_properties(properties: &[TextProperty]) -> MergeResult {
    let mut merged: Vec<TextProperty> = Vec::new();
    let mut positions: HashMap<(&str, Option<&str>), usize> = HashMap::new();
    let mut properties_folded = 0;

    for property in properties {
        if !is_mergeable_field(&property.field_name) {
            continue;
        }

        let key = (
            property.field_name.as_str(),
            property.attribution.source_name.as_deref(),
        );

        match positions.get(&key) {
            Some(&at) => {
                let existing = &mut merged[at];
                existing.value.push_str(PARAGRAPH_SEPARATOR);
                existing.value.push_str(&property.value);
                properties_folded += 1;
            }
            None => {
                positions.insert(key, merged.len());
                merged.push(property.clone());
            }
        }
    }

    MergeResult {
        merged,
        properties_folded,
    }
}
