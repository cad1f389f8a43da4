//! Lookup behavior against on-disk and bundled datasets

use abbrevs_core::{
    get_tokens, DirectorySource, LanguageCode, Registry, TokenError, TokenStore, Tokens,
};
use std::fs;
use tempfile::TempDir;

fn store_from_dir(files: &[(&str, &str)]) -> (TempDir, TokenStore) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let store = TokenStore::from_source(&DirectorySource::new(dir.path())).unwrap();
    (dir, store)
}

#[test]
fn test_example_dataset() {
    let (_dir, store) = store_from_dir(&[(
        "en.json",
        r#"[["Mr", "Mister"], ["Dr"], ["vs", "versus"]]"#,
    )]);

    let filtered = store.tokens("en", false).unwrap();
    assert_eq!(
        serde_json::to_value(&filtered).unwrap(),
        serde_json::json!([["Mr", "Mister"], ["vs", "versus"]])
    );

    let full = store.tokens("en", true).unwrap();
    assert_eq!(
        serde_json::to_value(&full).unwrap(),
        serde_json::json!([["Mr", "Mister"], ["Dr"], ["vs", "versus"]])
    );
}

#[test]
fn test_mixed_formats_in_one_directory() {
    let (_dir, store) = store_from_dir(&[
        ("en.json", r#"[["Mr", "Mister"]]"#),
        ("de.toml", "entries = [[\"Straße\", \"Str\"], \"Weg\"]"),
        ("notes.txt", "not a dataset"),
    ]);

    let codes: Vec<String> = store.languages().iter().map(|c| c.to_string()).collect();
    assert_eq!(codes, vec!["de", "en"]);
    assert_eq!(store.tokens("de", true).unwrap().len(), 2);
    assert_eq!(store.tokens("de", false).unwrap().len(), 1);
}

#[test]
fn test_duplicate_code_across_formats_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), r#"[["Mr", "Mister"]]"#).unwrap();
    fs::write(dir.path().join("en.toml"), r#"entries = [["Dr", "Doctor"]]"#).unwrap();

    let result = TokenStore::from_source(&DirectorySource::new(dir.path()));
    assert!(matches!(result, Err(TokenError::DuplicateLanguage { .. })));
}

#[test]
fn test_malformed_dataset_fails_load() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), r#"[["Mr", "Mister"], []]"#).unwrap();

    match Registry::from_source(&DirectorySource::new(dir.path())) {
        Err(TokenError::Dataset { language, .. }) => assert_eq!(language, "en"),
        other => panic!("Expected Dataset error, got {other:?}"),
    }
}

#[test]
fn test_empty_directory_gives_empty_mapping() {
    let (_dir, store) = store_from_dir(&[]);
    assert!(store.all_tokens(true).is_empty());
    assert!(store.tokens("en", true).unwrap().is_empty());
}

#[test]
fn test_bundled_languages() {
    let all = match get_tokens(None, false).unwrap() {
        Tokens::All(all) => all,
        Tokens::Language(_) => panic!("Expected mapping of all languages"),
    };

    for code in ["de", "en", "es", "fr", "it", "nl", "pt", "sv"] {
        assert!(all.contains_key(code), "missing bundled language {code}");
    }

    let en = all["en"].clone();
    assert!(en
        .iter()
        .any(|entry| entry.variants() == ["Street", "St", "Str"]));
    assert!(!en.iter().any(|entry| entry.variants() == ["Alley"]));
}

#[test]
fn test_bundled_singletons_on_request() {
    let en = get_tokens(Some("en"), true).unwrap();
    let list = en.as_language().unwrap();
    assert!(list.iter().any(|entry| entry.variants() == ["Alley"]));
}

#[test]
fn test_invalid_codes() {
    for bad in ["english", "123", "e", "eng"] {
        assert!(matches!(
            get_tokens(Some(bad), true),
            Err(TokenError::InvalidArgument { .. })
        ));
    }
    assert!(LanguageCode::new("en").is_ok());
}

#[test]
fn test_concurrent_readers() {
    let store = TokenStore::embedded();
    let expected = store.tokens("fr", false).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            std::thread::spawn(move || store.tokens("fr", false).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
