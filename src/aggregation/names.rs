use std::collections::BTreeSet;

use tracing::debug;

use crate::record::CommonName;

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True when `current` repeats `previous`: same name and same source, both
/// trimmed and compared case-insensitively. Blank names or sources never repeat.
fn repeats(previous: &CommonName, current: &CommonName) -> bool {
    let (Some(name), Some(source)) = (
        trimmed(Some(current.name.as_str())),
        trimmed(current.attribution.source_name.as_deref()),
    ) else {
        return false;
    };

    let previous_name = trimmed(Some(previous.name.as_str()));
    let previous_source = trimmed(previous.attribution.source_name.as_deref());

    previous_name.is_some_and(|p| same_ignoring_case(name, p))
        && previous_source.is_some_and(|p| same_ignoring_case(source, p))
}

/// Drop names that repeat their immediate predecessor.
///
/// Only neighbours are compared; the upstream ordering is assumed to place
/// duplicates next to each other.
pub fn dedup_adjacent_names(names: &[CommonName]) -> Vec<CommonName> {
    let mut kept = Vec::with_capacity(names.len());
    if let Some(first) = names.first() {
        kept.push(first.clone());
    }

    for pair in names.windows(2) {
        if repeats(&pair[0], &pair[1]) {
            debug!(
                name = pair[1].name.as_str(),
                source = pair[1].attribution.source_name.as_deref(),
                "Duplicate common name detected"
            );
        } else {
            kept.push(pair[1].clone());
        }
    }

    kept
}

/// Distinct names joined for display, first spelling of each name wins.
pub fn common_names_summary(names: &[CommonName]) -> String {
    let mut seen = BTreeSet::new();
    let mut display: Vec<&str> = Vec::new();

    for cn in names {
        if seen.insert(cn.name.trim().to_lowercase()) {
            display.push(cn.name.as_str());
        }
    }

    display.join(", ")
}
