//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files, working directory, and env vars.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use rmap_config::{ConfigError, RmapConfig};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
state_path = "/srv/rmap/state.json"

[catalog]
path = "catalogs/team.toml"

[general]
default_format = "table"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RmapConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = RmapConfig::from_figment(&figment).expect("config loads");

        assert_eq!(
            config.session.resolved_state_path(),
            PathBuf::from("/srv/rmap/state.json")
        );
        assert_eq!(config.catalog.path(), Some(PathBuf::from("catalogs/team.toml")));
        assert_eq!(config.general.default_format, "table");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rmap")?;
        jail.create_file(
            ".rmap/config.toml",
            r#"
[general]
default_format = "raw"
"#,
        )?;

        let config = RmapConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "raw");
        assert!(config.session.state_path.is_empty());
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
path = "alt.toml"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(RmapConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = RmapConfig::from_figment(&figment).expect("config loads");
        assert_eq!(config.general.default_format, "json");
        assert!(config.session.state_path.is_empty());
        Ok(())
    });
}

#[test]
fn invalid_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rmap")?;
        jail.create_file(
            ".rmap/config.toml",
            r#"
[general]
default_format = "yaml"
"#,
        )?;

        let err = RmapConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.default_format"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rmap")?;
        jail.create_file(".rmap/config.toml", "[general\ndefault_format = ")?;

        let err = RmapConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
