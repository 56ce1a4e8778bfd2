use std::fs;

use anyhow::Result;
use chromatone_core::ConfigLoader;
use chromatone_core::config::{ConfigLoadError, EnvConfig};
use tempfile::tempdir;

#[test]
fn file_values_apply_under_env_overrides() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("chromatone.toml");
    fs::write(
        &path,
        r#"
[storage]
state_key = "SNAPSHOT"
preset_prefix = "SAVED_"
path = "/var/lib/chromatone/store.json"

[logging]
filter = "warn"
"#,
    )?;

    let env = EnvConfig::from_pairs([
        ("CHROMATONE_STORE_PATH", "/tmp/override.json"),
        ("CHROMATONE_PRESET_PREFIX", "P_"),
    ]);
    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(env)
        .load()?;

    assert_eq!(config.state_key, "SNAPSHOT");
    assert_eq!(config.preset_prefix, "P_");
    assert_eq!(
        config.store_path.as_deref(),
        Some(std::path::Path::new("/tmp/override.json"))
    );
    assert_eq!(config.log_filter, "warn");
    Ok(())
}

#[test]
fn config_path_can_come_from_the_environment() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[logging]\nfilter = \"debug\"\n")?;

    let path_text = path.to_string_lossy().into_owned();
    let env = EnvConfig::from_pairs([("CHROMATONE_CONFIG", path_text.as_str())]);
    let config = ConfigLoader::new().with_env(env).load()?;
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.state_key, "_STATE_");
    Ok(())
}

#[test]
fn malformed_toml_reports_its_path() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[storage\nstate_key = 1")?;

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(EnvConfig::default())
        .load()
        .unwrap_err();
    match err {
        ConfigLoadError::Parse { path: reported, .. } => {
            assert_eq!(reported, path)
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn empty_prefix_is_invalid() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("chromatone.toml");
    fs::write(&path, "[storage]\npreset_prefix = \"\"\n")?;

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(EnvConfig::default())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Invalid(_)));
    Ok(())
}
