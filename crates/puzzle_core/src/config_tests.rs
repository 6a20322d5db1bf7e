use super::*;

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_empty_config_uses_defaults() {
    let config = TrainerConfig::from_toml_str("").unwrap();
    assert_eq!(config, TrainerConfig::default());
    assert!(config.catalog.is_none());
    assert!(config.flip_for_black);
    assert_eq!(config.log_filter, "info");
}

#[test]
fn test_partial_config() {
    let config = TrainerConfig::from_toml_str("start_index = 4\nshuffle = true\n").unwrap();
    assert_eq!(config.start_index, 4);
    assert!(config.shuffle);
    assert!(config.flip_for_black);
}

#[test]
fn test_config_rejects_wrong_types() {
    let err = TrainerConfig::from_toml_str("start_index = \"four\"").unwrap_err();
    assert!(matches!(err, PuzzleError::Toml(_)));
}

#[test]
fn test_missing_config_file() {
    let err = TrainerConfig::load(std::path::Path::new("/nonexistent/trainer.toml")).unwrap_err();
    assert!(matches!(err, PuzzleError::Io { .. }));
}

#[test]
fn test_default_catalog_is_builtin() {
    let config = TrainerConfig::default();
    assert_eq!(config.load_catalog().unwrap(), Catalog::builtin());
}

#[test]
fn test_configured_catalog_path() {
    let config = TrainerConfig {
        catalog: Some(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("puzzles/sample.toml"),
        ),
        ..TrainerConfig::default()
    };
    assert_eq!(config.load_catalog().unwrap().len(), 2);
}

#[test]
fn test_build_session_wraps_start_index() {
    let config = TrainerConfig {
        start_index: Catalog::builtin().len() + 1,
        ..TrainerConfig::default()
    };
    let session: PuzzleSession = config.build_session(&mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(session.current_index(), 1);
}

#[test]
fn test_build_session_shuffled() {
    let config = TrainerConfig {
        shuffle: true,
        ..TrainerConfig::default()
    };
    let session: PuzzleSession = config.build_session(&mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(session.catalog().len(), Catalog::builtin().len());
    assert_eq!(session.current_index(), 0);
}

#[test]
fn test_overrides_replace_file_values() {
    let config = TrainerConfig::from_toml_str("catalog = \"a.toml\"\nstart_index = 2\n")
        .unwrap()
        .with_overrides(None, Some(5), true);
    assert_eq!(config.catalog.as_deref(), Some(std::path::Path::new("a.toml")));
    assert_eq!(config.start_index, 5);
    assert!(config.shuffle);

    let config = config.with_overrides(Some("b.json".into()), None, false);
    assert_eq!(config.catalog.as_deref(), Some(std::path::Path::new("b.json")));
    assert_eq!(config.start_index, 5);
    assert!(config.shuffle);
}
