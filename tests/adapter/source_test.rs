//! Tests for schema file discovery

use std::fs;

use rsdef::adapters::schema::SchemaSource;
use rsdef::core::ports::DefinitionSource;
use tempfile::TempDir;

fn resource(name: &str) -> String {
    format!("[[resource]]\nname = \"{name}\"\nnamespace = \"urn:test:\"\n")
}

#[test]
fn test_directory_is_walked_in_name_order() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("contracts");
    fs::create_dir_all(dir.join("nested")).unwrap();
    fs::write(dir.join("b.toml"), resource("B")).unwrap();
    fs::write(dir.join("a.toml"), resource("A")).unwrap();
    fs::write(dir.join("nested/c.json"), r#"{"resource": [{"name": "C", "namespace": "urn:test:"}]}"#)
        .unwrap();
    fs::write(dir.join("README.md"), "not a schema").unwrap();

    let source = SchemaSource::new(temp.path(), vec!["contracts".to_string()]);
    let names: Vec<String> = source.load().unwrap().resources.into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn test_overlapping_paths_load_each_file_once() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("contracts");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("a.toml"), resource("A")).unwrap();
    fs::write(dir.join("b.toml"), resource("B")).unwrap();

    let source = SchemaSource::new(
        temp.path(),
        vec![
            "contracts".to_string(),
            "contracts/a.toml".to_string(),
            "contracts/*.toml".to_string(),
        ],
    );
    let files = source.discover().unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("a.toml"));
    assert!(files[1].ends_with("b.toml"));

    let mut registry = rsdef::core::services::ResourceRegistry::new();
    source.load_into(&mut registry).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_missing_path_is_skipped() {
    let temp = TempDir::new().unwrap();
    let source = SchemaSource::new(temp.path(), vec!["nowhere".to_string()]);
    assert!(source.discover().unwrap().is_empty());
}

#[test]
fn test_glob_pattern() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("one.toml"), resource("One")).unwrap();
    fs::write(temp.path().join("two.toml"), resource("Two")).unwrap();
    fs::write(temp.path().join("three.json"), r#"{"resource": []}"#).unwrap();

    let source = SchemaSource::new(temp.path(), vec!["*.toml".to_string()]);
    assert_eq!(source.discover().unwrap().len(), 2);
}

#[test]
fn test_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("api.toml");
    fs::write(&path, resource("Api")).unwrap();

    let source = SchemaSource::single(&path);
    assert_eq!(source.load().unwrap().resources[0].name, "Api");
}

#[test]
fn test_parse_error_names_the_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.toml"), "[[resource]\n").unwrap();

    let source = SchemaSource::new(temp.path(), vec![".".to_string()]);
    let err = source.load().unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_label_lists_paths() {
    let source = SchemaSource::new(".", vec!["a".to_string(), "b".to_string()]);
    assert_eq!(source.label(), "schema:a,b");
}
