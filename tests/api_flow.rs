//! End-to-end flows through the API facade, filesystem-free.

use kvs::api::KvsApi;
use kvs::model::DeleteTarget;
use kvs::store::memory::MemoryStore;

#[test]
fn full_lifecycle_of_one_command() {
    let mut api = KvsApi::open(MemoryStore::new()).unwrap();

    // First add creates the record.
    let result = api
        .add(
            "git",
            Some("版本管理"),
            "git status",
            Some("check"),
            Some(&["dev".to_string()]),
        )
        .unwrap();
    assert_eq!(result.rows[0].index, 0);
    assert_eq!(api.db().get("git").unwrap().tags, vec!["dev"]);

    // Second add appends; tags stay untouched.
    let result = api.add("git", None, "git log", None, None).unwrap();
    assert_eq!(result.rows[0].index, 1);
    assert_eq!(api.db().get("git").unwrap().tags, vec!["dev"]);

    // Deleting index 0 shifts "git log" down; the command survives.
    api.delete("git", &DeleteTarget::Index(0)).unwrap();
    assert!(api.db().contains("git"));
    assert_eq!(api.db().usage_at("git", 0).unwrap().usage, "git log");

    // Deleting the last usage removes the command entirely.
    api.delete("git", &DeleteTarget::Index(0)).unwrap();
    assert!(!api.db().contains("git"));
    assert!(api.db().is_empty());
}

#[test]
fn find_returns_the_exact_tuple_for_a_usage_hit() {
    let mut api = KvsApi::open(MemoryStore::new()).unwrap();
    api.add("git", Some("版本管理"), "git status", Some("check"), None)
        .unwrap();
    api.add("git", None, "git log", None, None).unwrap();

    let rows = api.find("log").unwrap().rows;
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.command, "git");
    assert_eq!(row.display_name, "版本管理");
    assert_eq!(row.index, 1);
    assert_eq!(row.usage, "git log");
    assert_eq!(row.note, "");
}

#[test]
fn export_import_overwrite_reproduces_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("backup.json");

    let mut source = KvsApi::open(MemoryStore::new()).unwrap();
    source
        .add(
            "git",
            Some("版本管理"),
            "git status",
            Some("check"),
            Some(&["dev".to_string(), "basic".to_string()]),
        )
        .unwrap();
    source.add("git", None, "git log", None, None).unwrap();
    source.add("ls", Some("列文件"), "ls -l", None, None).unwrap();
    source.export(&snapshot).unwrap();

    let mut restored = KvsApi::open(MemoryStore::new()).unwrap();
    restored.import(&snapshot, true).unwrap();

    assert_eq!(restored.db(), source.db());
}

#[test]
fn merge_import_deduplicates_exact_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = dir.path().join("backup.json");

    let mut api = KvsApi::open(MemoryStore::new()).unwrap();
    api.add("git", None, "git status", Some("check"), None)
        .unwrap();
    api.export(&snapshot).unwrap();

    // Importing our own export in merge mode changes nothing.
    api.import(&snapshot, false).unwrap();
    assert_eq!(api.db().examples("git").len(), 1);
}

#[test]
fn tag_update_is_idempotent_and_overwrites() {
    let mut api = KvsApi::open(MemoryStore::new()).unwrap();
    api.add(
        "git",
        None,
        "git status",
        None,
        Some(&["dev".to_string()]),
    )
    .unwrap();

    let tags = vec!["vcs".to_string(), "basic".to_string(), "vcs".to_string()];
    api.update_tags("git", &tags).unwrap();
    assert_eq!(api.db().get("git").unwrap().tags, vec!["basic", "vcs"]);

    api.update_tags("git", &tags).unwrap();
    assert_eq!(api.db().get("git").unwrap().tags, vec!["basic", "vcs"]);
}
