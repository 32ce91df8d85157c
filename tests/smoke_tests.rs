//! Integration smoke tests for `nu_advisor`

use nu_advisor::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_store_loads_from_disk() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/store.toml");
    let store = nu_advisor::core::store::InMemoryStore::load(path).expect("sample store");
    assert_eq!(store.learner_ids(), vec!["newcomer", "ada", "grace"]);
}
