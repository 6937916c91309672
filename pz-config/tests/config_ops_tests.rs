use std::fs;
use std::path::PathBuf;

use pz_config::env_merge::{BulkOutcome, DEFAULT_ENV_PREFIX};
use pz_config::ops::ConfigOps;
use pz_config::section::{ensure_section_header, SECTION_MARKER};
use pz_config::store::ConfigStore;
use tempfile::TempDir;

/// Temporary directory holding one server config file.
struct ConfigTestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl ConfigTestFixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("servertest.ini");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    fn with_content(content: &str) -> Self {
        let fixture = Self::new();
        fs::write(&fixture.config_path, content).unwrap();
        fixture
    }

    fn read(&self) -> String {
        fs::read_to_string(&self.config_path).unwrap()
    }
}

#[test]
fn test_set_save_load_get_round_trip() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\n");

    let mut store = ConfigOps::load(&fixture.config_path).unwrap();
    store.set("A", "1");
    store.save(&fixture.config_path).unwrap();

    let reloaded = ConfigStore::load(&fixture.config_path).unwrap();
    assert_eq!(reloaded.get("A"), Some("1"));
}

#[test]
fn test_set_through_ops_preserves_position() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\nA=1\nB=2\n");

    ConfigOps::set(&fixture.config_path, "A", "9").unwrap();

    assert_eq!(fixture.read(), "[ServerConfig]\nA=9\nB=2\n\n");
}

#[test]
fn test_set_adds_header_and_unpads_existing_entries() {
    let fixture = ConfigTestFixture::with_content("PublicName = My Server\nPVP = true\n");

    ConfigOps::set(&fixture.config_path, "MaxPlayers", "16").unwrap();

    assert_eq!(
        fixture.read(),
        "[ServerConfig]\nPublicName=My Server\nPVP=true\nMaxPlayers=16\n\n"
    );
}

#[test]
fn test_case_sensitive_keys_survive_save() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\nKey=upper\n");

    ConfigOps::set(&fixture.config_path, "key", "lower").unwrap();

    assert_eq!(fixture.read(), "[ServerConfig]\nKey=upper\nkey=lower\n\n");
    assert_eq!(
        ConfigOps::get(&fixture.config_path, "Key").unwrap().as_deref(),
        Some("upper")
    );
    assert_eq!(
        ConfigOps::get(&fixture.config_path, "key").unwrap().as_deref(),
        Some("lower")
    );
}

#[test]
fn test_get_missing_key_is_absent() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\nPVP=true\n");
    assert_eq!(ConfigOps::get(&fixture.config_path, "Missing").unwrap(), None);
}

#[test]
fn test_invalid_file_is_format_error() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\nthis is not ini\n");

    let err = ConfigOps::get(&fixture.config_path, "PVP").unwrap_err();
    assert!(matches!(
        err,
        pz_core::PzError::ConfigFormat { line: 2, .. }
    ));
    // No auto-repair beyond the header.
    assert_eq!(fixture.read(), "[ServerConfig]\nthis is not ini\n");
}

#[test]
fn test_header_normalization_is_idempotent() {
    let fixture = ConfigTestFixture::with_content("PVP=true\n");

    ensure_section_header(&fixture.config_path).unwrap();
    let first = fixture.read();
    ensure_section_header(&fixture.config_path).unwrap();

    assert_eq!(fixture.read(), first);
    assert_eq!(first.lines().next(), Some(SECTION_MARKER));
}

#[test]
fn test_bulk_creates_missing_file() {
    let fixture = ConfigTestFixture::new();

    let outcome = ConfigOps::bulk_from_env(
        &fixture.config_path,
        DEFAULT_ENV_PREFIX,
        [("PZ_PVP", "false")],
    )
    .unwrap();

    assert_eq!(outcome, BulkOutcome::Updated { applied: 1 });
    let content = fixture.read();
    assert_eq!(content.lines().next(), Some("[ServerConfig]"));
    assert_eq!(content, "[ServerConfig]\nPVP=false\n\n");
}

#[test]
fn test_bulk_selects_only_prefixed_variables() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\n");

    ConfigOps::bulk_from_env(
        &fixture.config_path,
        DEFAULT_ENV_PREFIX,
        [("PZ_Foo", "bar"), ("OTHER", "baz"), ("PZ_", "empty")],
    )
    .unwrap();

    let store = ConfigStore::load(&fixture.config_path).unwrap();
    assert_eq!(store.iter().collect::<Vec<_>>(), vec![("Foo", "bar")]);
}

#[test]
fn test_bulk_without_matches_leaves_file_untouched() {
    let original = "[ServerConfig]\n# keep me\nPublicName = My Server\n";
    let fixture = ConfigTestFixture::with_content(original);
    let modified_before = fs::metadata(&fixture.config_path).unwrap().modified().unwrap();

    let outcome = ConfigOps::bulk_from_env(
        &fixture.config_path,
        DEFAULT_ENV_PREFIX,
        [("HOME", "/home/pz"), ("PATH", "/usr/bin")],
    )
    .unwrap();

    assert_eq!(outcome, BulkOutcome::Unchanged);
    assert_eq!(fixture.read(), original);
    assert_eq!(
        fs::metadata(&fixture.config_path).unwrap().modified().unwrap(),
        modified_before
    );
}

#[test]
fn test_bulk_overwrites_in_place() {
    let fixture = ConfigTestFixture::with_content("[ServerConfig]\nA=1\nB=2\n");

    ConfigOps::bulk_from_env(
        &fixture.config_path,
        DEFAULT_ENV_PREFIX,
        [("PZ_A", "9"), ("PZ_C", "3")],
    )
    .unwrap();

    assert_eq!(fixture.read(), "[ServerConfig]\nA=9\nB=2\nC=3\n\n");
}
