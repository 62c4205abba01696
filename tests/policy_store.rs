use std::fs;
use std::sync::Arc;
use std::thread;

use species_page_core::policy::policy::{DEFAULT_LOW_PRIORITY_SOURCE, DEFAULT_NON_TRUNCATED_SOURCE};
use species_page_core::policy::{PolicyError, PolicyStore, PriorityPolicy};
use tempfile::tempdir;

#[test]
fn default_policy_matches_deployment_defaults() {
    let policy = PriorityPolicy::default();

    assert!(policy.is_non_truncated(Some(DEFAULT_NON_TRUNCATED_SOURCE)));
    assert!(policy.is_low_priority(Some(DEFAULT_LOW_PRIORITY_SOURCE)));
    assert!(!policy.is_low_priority(None));
    assert!(!policy.is_non_truncated(Some("http://elsewhere.example/")));
}

#[test]
fn loads_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(
        &path,
        r#"{
  "non_truncated_sources": ["http://flora.example/"],
  "low_priority_sources": ["http://wiki.example/", "http://blog.example/"]
}"#,
    )
    .unwrap();

    let policy = PriorityPolicy::from_path(&path).unwrap();

    assert_eq!(policy.non_truncated_sources.len(), 1);
    assert_eq!(policy.low_priority_sources.len(), 2);
    assert!(policy.is_low_priority(Some("http://blog.example/")));
}

#[test]
fn missing_keys_default_to_empty() {
    let policy = PriorityPolicy::from_json_slice(br#"{"low_priority_sources": ["http://x/"]}"#).unwrap();

    assert!(policy.non_truncated_sources.is_empty());
    assert_eq!(policy, PriorityPolicy::new(Vec::<String>::new(), ["http://x/"]));
}

#[test]
fn load_errors_are_typed() {
    let dir = tempdir().unwrap();

    let missing = PriorityPolicy::from_path(&dir.path().join("absent.json"));
    assert!(matches!(missing, Err(PolicyError::Io(_))));

    let malformed = PriorityPolicy::from_json_slice(b"{ not json");
    assert!(matches!(malformed, Err(PolicyError::Serialization(_))));
}

#[test]
fn version_is_order_independent_and_content_sensitive() {
    let a = PriorityPolicy::new(["http://b/", "http://a/"], ["http://c/"]);
    let b = PriorityPolicy::new(["http://a/", "http://b/"], ["http://c/"]);
    let c = PriorityPolicy::new(["http://a/"], ["http://c/"]);

    let va = a.version().unwrap();
    assert_eq!(va, b.version().unwrap());
    assert_ne!(va, c.version().unwrap());
    assert!(va.as_str().starts_with("sha256:"));
    assert_eq!(va.as_str().len(), "sha256:".len() + 64);
}

#[test]
fn snapshot_survives_replacement() {
    let store = PolicyStore::new(PriorityPolicy::default()).unwrap();

    let before = store.snapshot();
    let replaced = store.replace(PriorityPolicy::empty()).unwrap();
    let after = store.snapshot();

    assert_eq!(before.policy, PriorityPolicy::default());
    assert_eq!(after.policy, PriorityPolicy::empty());
    assert_eq!(after.version, replaced.version);
    assert_ne!(before.version, after.version);
    assert!(after.installed_at >= before.installed_at);
}

#[test]
fn concurrent_readers_see_whole_policies() {
    let first = PriorityPolicy::new(["http://one/"], ["http://one-low/"]);
    let second = PriorityPolicy::new(["http://two/"], ["http://two-low/"]);
    let store = Arc::new(PolicyStore::new(first.clone()).unwrap());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let (first, second) = (first.clone(), second.clone());
            thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = store.snapshot();
                    assert!(snapshot.policy == first || snapshot.policy == second);
                }
            })
        })
        .collect();

    for i in 0..100 {
        let next = if i % 2 == 0 { second.clone() } else { first.clone() };
        store.replace(next).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
