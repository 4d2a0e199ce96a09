//! Tests for configuration system

use nutriplan::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.report.output_dir, ".");
    assert_eq!(config.report.locale, "pt-BR");
    assert_eq!(config.report.date_format, "[day]/[month]/[year]");
    assert_eq!(config.observability.log_level, "info");
    assert!(config.dataset.foods_path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("nutriplan.toml");
    std::fs::write(
        &path,
        r#"
[report]
locale = "en"
date_format = "[year]-[month]-[day]"

[observability]
json = true
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.report.locale, "en");
    assert_eq!(config.report.output_dir, ".");
    assert!(config.observability.json);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_invalid_file_values_fail_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("nutriplan.toml");
    std::fs::write(&path, "[report]\nlocale = \"de\"\n")?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert!(config.validate().is_err());

    Ok(())
}
