// Tests for manifest parsing and graph construction

use super::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_JSON: &str = r#"
{
    "packages": [
        { "name": "A", "dependencies": ["B", "C"] },
        { "name": "B", "dependencies": ["D"] },
        { "name": "C", "dependencies": ["D"] },
        { "name": "D", "dependencies": [] }
    ]
}
"#;

const SAMPLE_TOML: &str = r#"
[[packages]]
name = "A"
dependencies = ["B", "C"]

[[packages]]
name = "B"
dependencies = ["D"]

[[packages]]
name = "C"
dependencies = ["D"]

[[packages]]
name = "D"
"#;

/// Write a manifest file into a temp dir
fn write_manifest(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_json_manifest() {
    let manifest = Manifest::from_json_str(SAMPLE_JSON).unwrap();

    assert_eq!(manifest.packages.len(), 4);
    assert_eq!(manifest.packages[0], PackageEntry::new("A", &["B", "C"]));
    assert_eq!(manifest.packages[3], PackageEntry::new("D", &[]));
}

#[test]
fn test_parse_toml_manifest_matches_json() {
    let json = Manifest::from_json_str(SAMPLE_JSON).unwrap();
    let toml = Manifest::from_toml_str(SAMPLE_TOML).unwrap();
    assert_eq!(json, toml);
}

#[test]
fn test_dependencies_default_to_empty() {
    let manifest = Manifest::from_json_str(r#"{"packages": [{"name": "solo"}]}"#).unwrap();
    assert!(manifest.packages[0].dependencies.is_empty());
}

#[test]
fn test_missing_packages_key_is_empty_manifest() {
    let manifest = Manifest::from_json_str("{}").unwrap();
    assert!(manifest.packages.is_empty());
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ManifestFormat::from_path(Path::new("deps.toml")),
        ManifestFormat::Toml
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("deps.TOML")),
        ManifestFormat::Toml
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("deps.json")),
        ManifestFormat::Json
    );
    assert_eq!(
        ManifestFormat::from_path(Path::new("deps")),
        ManifestFormat::Json
    );
}

// ============================================================================
// Graph Construction
// ============================================================================

#[test]
fn test_to_graph_registers_vertices_and_edges() {
    let graph = Manifest::from_json_str(SAMPLE_JSON).unwrap().to_graph();

    assert_eq!(graph.all_vertices(), vec!["A", "B", "C", "D"]);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.adjacent_vertices_of("A"), vec!["B", "C"]);
}

#[test]
fn test_to_graph_creates_undeclared_dependencies() {
    let manifest = Manifest {
        packages: vec![PackageEntry::new("app", &["undeclared"])],
    };
    let graph = manifest.to_graph();

    assert!(graph.contains("undeclared"));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_to_graph_merges_duplicate_entries() {
    let manifest = Manifest {
        packages: vec![
            PackageEntry::new("app", &["a"]),
            PackageEntry::new("app", &["b", "a"]),
        ],
    };
    let graph = manifest.to_graph();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.adjacent_vertices_of("app"), vec!["a", "b"]);
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "packages.json", SAMPLE_JSON);

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.packages.len(), 4);
}

#[test]
fn test_load_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "packages.toml", SAMPLE_TOML);

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.packages.len(), 4);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = Manifest::load(&temp_dir.path().join("absent.json"));

    assert!(matches!(
        result.unwrap_err(),
        ManifestError::FileReadError { .. }
    ));
}

#[test]
fn test_load_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "bad.json", r#"{"packages": [ {"name": }"#);

    assert!(matches!(
        Manifest::load(&path).unwrap_err(),
        ManifestError::JsonParseError { .. }
    ));
}

#[test]
fn test_load_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), "bad.toml", "[[packages]\nname = ");

    assert!(matches!(
        Manifest::load(&path).unwrap_err(),
        ManifestError::TomlParseError { .. }
    ));
}

#[test]
fn test_load_rejects_wrong_shape() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        "shape.json",
        r#"{"packages": [{"name": "A", "dependencies": "B"}]}"#,
    );

    assert!(matches!(
        Manifest::load(&path).unwrap_err(),
        ManifestError::JsonParseError { .. }
    ));
}

#[test]
fn test_load_rejects_empty_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(
        temp_dir.path(),
        "empty.json",
        r#"{"packages": [{"name": "A"}, {"name": ""}]}"#,
    );

    let err = Manifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::EmptyPackageName { index: 1 }));
    assert_eq!(err.to_string(), "Package entry 1 has an empty name");
}
