use backup_fs::{ConfigFormat, ConfigStore, Error, NormalizedPath};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Roots {
    primary: String,
    secondary: String,
}

#[test]
fn test_format_detection() {
    assert_eq!(ConfigFormat::from_path(&"a.toml".into()).unwrap(), ConfigFormat::Toml);
    assert_eq!(ConfigFormat::from_path(&"a.JSON".into()).unwrap(), ConfigFormat::Json);
    assert_eq!(ConfigFormat::from_path(&"a.yml".into()).unwrap(), ConfigFormat::Yaml);
    assert!(ConfigFormat::from_path(&"a.ini".into()).is_err());
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("profile.toml");
    fs::write(&file_path, "primary = \"hd\"\nsecondary = \"pen\"\n").unwrap();

    let loaded: Roots = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(loaded, Roots { primary: "hd".into(), secondary: "pen".into() });
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("profile.json");
    fs::write(&file_path, r#"{"primary": "hd", "secondary": "pen"}"#).unwrap();

    let loaded: Roots = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(loaded.secondary, "pen");
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("profile.yaml");
    fs::write(&file_path, "primary: hd\nsecondary: pen\n").unwrap();

    let loaded: Roots = ConfigStore::new().load(&NormalizedPath::new(&file_path)).unwrap();
    assert_eq!(loaded.primary, "hd");
}

#[test]
fn test_parse_error_names_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("broken.toml");
    fs::write(&file_path, "primary = ").unwrap();

    let err = ConfigStore::new()
        .load::<Roots>(&NormalizedPath::new(&file_path))
        .unwrap_err();
    match err {
        Error::ConfigParse { format, .. } => assert_eq!(format, "TOML"),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("profile.xyz");
    fs::write(&file_path, "data").unwrap();

    let result: backup_fs::Result<Roots> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));
    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_roundtrip_yaml() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("profile.yaml"));

    let original = Roots { primary: "/mnt/disk".into(), secondary: "/media/pen".into() };
    let store = ConfigStore::new();
    store.save(&path, &original).unwrap();

    let loaded: Roots = store.load(&path).unwrap();
    assert_eq!(original, loaded);
}
