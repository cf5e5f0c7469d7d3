use std::path::Path;

use dss_config::{ConfigError, DssConfig};
use figment::Jail;

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dss")?;
        jail.create_file(
            ".dss/config.toml",
            r#"
            [sources]
            base = "fixtures"
            shared_csv = "shared.csv"

            [general]
            page_size = 4
            "#,
        )?;

        let config = DssConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.sources.base, "fixtures");
        assert_eq!(config.sources.shared_csv, "shared.csv");
        assert_eq!(config.sources.collected_csv, "Collected_Mapped (1).csv");
        assert_eq!(config.general.page_size, 4);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".dss")?;
        jail.create_file(".dss/config.toml", "[general]\npage_size = 4\n")?;
        jail.set_env("DSS_GENERAL__PAGE_SIZE", "9");
        jail.set_env("DSS_SOURCES__BASE", "https://cdn.example.com/dss");

        let config = DssConfig::load(Path::new(".")).expect("config loads");
        assert_eq!(config.general.page_size, 9);
        assert_eq!(config.sources.base, "https://cdn.example.com/dss");
        Ok(())
    });
}

#[test]
fn zero_page_size_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("DSS_GENERAL__PAGE_SIZE", "0");

        let err = DssConfig::load(Path::new(".")).expect_err("page size 0 rejected");
        assert!(matches!(err, ConfigError::ZeroValue { .. }));
        Ok(())
    });
}
