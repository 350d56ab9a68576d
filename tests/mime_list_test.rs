use std::collections::HashMap;
use std::path::Path;

use npicons::{IconErrorKind, MimeTypeList};

fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"<svg/>").unwrap();
}

#[test]
fn test_builtin_tables() {
    let list = MimeTypeList::builtin();

    assert_eq!(list.aliases.get("application/json").map(String::as_str), Some("text/code"));
    assert_eq!(list.aliases.get("httpd/unix-directory").map(String::as_str), Some("dir"));
    assert!(list.files.iter().any(|f| f == "folder-shared"));
    assert!(list.themes.is_empty());
}

#[test]
fn test_resolve_alias_identity_for_unknown() {
    let list = MimeTypeList::builtin();
    assert_eq!(list.resolve_alias("image/png", 32), "image/png");
}

#[test]
fn test_resolve_alias_chain() {
    let list = MimeTypeList::builtin();
    // application/rss+xml -> application/xml -> text/html -> text/code
    assert_eq!(list.resolve_alias("application/rss+xml", 32), "text/code");
    assert_eq!(list.resolve_alias("application/rss+xml", 1), "application/xml");
}

#[test]
fn test_resolve_alias_self_loop() {
    let mut aliases = HashMap::new();
    aliases.insert("loop".to_string(), "loop".to_string());
    let list = MimeTypeList::new(aliases, Vec::new(), HashMap::new());

    assert_eq!(list.resolve_alias("loop", 32), "loop");
}

#[test]
fn test_resolve_alias_cycle_same_from_any_entry() {
    let aliases: HashMap<String, String> = [("x", "c"), ("c", "a"), ("a", "b"), ("b", "c")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let list = MimeTypeList::new(aliases, Vec::new(), HashMap::new());

    // Loop is c -> a -> b -> c; its smallest member is the key.
    for entry in ["x", "a", "b", "c"] {
        assert_eq!(list.resolve_alias(entry, 32), "a", "entry {}", entry);
    }
}

#[test]
fn test_json_with_empty_themes_array() {
    let json = r#"{
        "aliases": { "application/json": "text/code" },
        "files": ["file", "text-code"],
        "themes": []
    }"#;
    let list = MimeTypeList::from_json(json).unwrap();

    assert_eq!(list.files, vec!["file".to_string(), "text-code".to_string()]);
    assert!(list.themes.is_empty());
}

#[test]
fn test_json_with_themes_object() {
    let json = r#"{ "files": ["file"], "themes": { "dark": ["folder"], "plain": [] } }"#;
    let list = MimeTypeList::from_json(json).unwrap();

    assert_eq!(list.theme_files("dark"), Some(&["folder".to_string()][..]));
    assert_eq!(list.theme_files("plain"), None);
    assert_eq!(list.theme_files("missing"), None);
}

#[test]
fn test_json_invalid() {
    let err = MimeTypeList::from_json(r#"{ "themes": ["dark"] }"#).unwrap_err();
    assert_eq!(err.kind(), IconErrorKind::InvalidData);
}

#[test]
fn test_json_export_reparses() {
    let exported = MimeTypeList::builtin().to_json().unwrap();
    let reparsed = MimeTypeList::from_json(&exported).unwrap();
    assert_eq!(&reparsed, MimeTypeList::builtin());
}

#[tokio::test]
async fn test_scan_server_tree() {
    let root = tempfile::tempdir().unwrap();
    let root = root.path();

    std::fs::create_dir_all(root.join("config")).unwrap();
    std::fs::write(
        root.join("config/mimetypealiases.dist.json"),
        r#"{
            "_comment": "Array of mimetype aliases.",
            "application/json": "text/code",
            "text/csv": "x-office/spreadsheet"
        }"#,
    )
    .unwrap();
    std::fs::write(
        root.join("config/mimetypealiases.json"),
        r#"{ "text/csv": "text" }"#,
    )
    .unwrap();

    touch(&root.join("core/img/filetypes/text.svg"));
    touch(&root.join("core/img/filetypes/folder.svg"));
    touch(&root.join("core/img/filetypes/file.svg"));
    touch(&root.join("core/img/filetypes/file.png"));
    touch(&root.join("themes/dark/core/img/filetypes/folder.svg"));
    std::fs::create_dir_all(root.join("themes/bare/core")).unwrap();

    let list = MimeTypeList::scan(root).await.unwrap();

    assert_eq!(list.aliases.len(), 2);
    assert!(!list.aliases.contains_key("_comment"));
    assert_eq!(list.aliases.get("text/csv").map(String::as_str), Some("text"));
    assert_eq!(
        list.files,
        vec!["file".to_string(), "folder".to_string(), "text".to_string()]
    );
    assert_eq!(list.theme_files("dark"), Some(&["folder".to_string()][..]));
    assert!(!list.themes.contains_key("bare"));
}

#[tokio::test]
async fn test_scan_without_alias_file() {
    let root = tempfile::tempdir().unwrap();

    let err = MimeTypeList::scan(root.path()).await.unwrap_err();
    assert_eq!(err.kind(), IconErrorKind::NotFound);
}

#[tokio::test]
async fn test_scan_malformed_alias_file() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("config")).unwrap();
    std::fs::write(root.path().join("config/mimetypealiases.dist.json"), "{ not json").unwrap();

    let err = MimeTypeList::scan(root.path()).await.unwrap_err();
    assert_eq!(err.kind(), IconErrorKind::InvalidData);
}
