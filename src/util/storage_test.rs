use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k"), Some("v".to_owned()));
    store.delete("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let alias = store.clone();
    store.set("k", "v");
    assert_eq!(alias.get("k"), Some("v".to_owned()));
}

#[test]
fn token_store_uses_fixed_keys() {
    let store = MemoryStore::new();
    let tokens = TokenStore::new(store.clone());
    tokens.store_pair("a1", Some("r1"));
    assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("a1".to_owned()));
    assert_eq!(store.get(REFRESH_TOKEN_KEY), Some("r1".to_owned()));
}

#[test]
fn store_pair_without_rotation_retains_refresh_token() {
    let tokens = TokenStore::new(MemoryStore::new());
    tokens.store_pair("a1", Some("r1"));
    tokens.store_pair("a2", None);
    assert_eq!(tokens.access_token(), Some("a2".to_owned()));
    assert_eq!(tokens.refresh_token(), Some("r1".to_owned()));
}

#[test]
fn store_pair_with_rotation_replaces_refresh_token() {
    let tokens = TokenStore::new(MemoryStore::new());
    tokens.store_pair("a1", Some("r1"));
    tokens.store_pair("a2", Some("r2"));
    assert_eq!(tokens.refresh_token(), Some("r2".to_owned()));
}

#[test]
fn clear_removes_both_tokens() {
    let tokens = TokenStore::new(MemoryStore::new());
    tokens.store_pair("a1", Some("r1"));
    tokens.clear();
    assert_eq!(tokens.access_token(), None);
    assert_eq!(tokens.refresh_token(), None);
}
