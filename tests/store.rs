use msd_radix::store::{ArrayStore, StoreError};

fn store_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("arrays.jsonl")
}

#[test]
fn insert_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ArrayStore::open(store_path(&dir)).unwrap();

    let id = store.insert("170 45 75", "45 75 170").unwrap();
    let record = store.get(id).unwrap();
    assert_eq!(record.original, "170 45 75");
    assert_eq!(record.sorted, "45 75 170");
    assert!(record.is_sorted);
}

#[test]
fn records_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);

    let first_id;
    {
        let mut store = ArrayStore::open(&path).unwrap();
        first_id = store.insert("3 1 2", "1 2 3").unwrap();
        store.insert("9 8", "8 9").unwrap();
    }

    let mut store = ArrayStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(first_id).unwrap().sorted, "1 2 3");

    // Ids keep counting up from what was on disk.
    let next = store.insert("5", "5").unwrap();
    assert!(next > first_id + 1);
}

#[test]
fn listing_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ArrayStore::open(store_path(&dir)).unwrap();

    let a = store.insert("1", "1").unwrap();
    let b = store.insert("2", "2").unwrap();
    let c = store.insert("3", "3").unwrap();

    let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, [c, b, a]);
}

#[test]
fn update_replaces_both_texts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ArrayStore::open(store_path(&dir)).unwrap();

    let id = store.insert("2 1", "1 2").unwrap();
    store.update(id, "5 4 3", "3 4 5").unwrap();

    let record = store.get(id).unwrap();
    assert_eq!(record.original, "5 4 3");
    assert_eq!(record.sorted, "3 4 5");
}

#[test]
fn delete_removes_only_the_given_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ArrayStore::open(store_path(&dir)).unwrap();

    let keep = store.insert("1", "1").unwrap();
    let gone = store.insert("2", "2").unwrap();

    store.delete(gone).unwrap();
    assert!(store.get(keep).is_some());
    assert!(store.get(gone).is_none());
}

#[test]
fn missing_ids_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = ArrayStore::open(store_path(&dir)).unwrap();

    assert!(matches!(
        store.update(404, "1", "1"),
        Err(StoreError::NotFound(404))
    ));
    assert!(matches!(store.delete(404), Err(StoreError::NotFound(404))));
}

#[test]
fn clear_empties_the_store_and_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);

    let mut store = ArrayStore::open(&path).unwrap();
    store.insert("1", "1").unwrap();
    store.insert("2", "2").unwrap();

    assert_eq!(store.clear().unwrap(), 2);
    assert!(store.is_empty());

    let reopened = ArrayStore::open(&path).unwrap();
    assert!(reopened.is_empty());
}

#[test]
fn corrupt_lines_fail_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "this is not a record\n").unwrap();

    assert!(matches!(
        ArrayStore::open(&path),
        Err(StoreError::Malformed(_))
    ));
}

#[test]
fn in_memory_store_does_not_touch_disk() {
    let mut store = ArrayStore::in_memory();
    let id = store.insert("2 1", "1 2").unwrap();
    assert_eq!(store.get(id).unwrap().sorted, "1 2");
    assert_eq!(store.clear().unwrap(), 1);
}
