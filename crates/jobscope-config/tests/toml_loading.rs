//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use jobscope_config::JobscopeConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_warehouse_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[warehouse]
path = "/data/linkedin.duckdb"
read_only = false
threads = 2
"#,
        )?;

        let config: JobscopeConfig = Figment::from(Serialized::defaults(JobscopeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.warehouse.path, "/data/linkedin.duckdb");
        assert!(!config.warehouse.read_only);
        assert_eq!(config.warehouse.threads, Some(2));
        assert!(config.warehouse.is_configured());
        Ok(())
    });
}

#[test]
fn loads_reports_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[reports]
top_n = 5
industry_limit = 30
surface_join_loss = true
",
        )?;

        let config: JobscopeConfig = Figment::from(Serialized::defaults(JobscopeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.reports.top_n, 5);
        assert_eq!(config.reports.industry_limit, 30);
        assert!(config.reports.surface_join_loss);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[warehouse]
path = "jobs.duckdb"
"#,
        )?;

        let config: JobscopeConfig = Figment::from(Serialized::defaults(JobscopeConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.warehouse.read_only);
        assert_eq!(config.warehouse.threads, None);
        assert_eq!(config.reports.top_n, 10);
        assert_eq!(config.reports.industry_limit, 20);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[reports]
top_n = 5
",
        )?;
        jail.set_env("JOBSCOPE_REPORTS__TOP_N", "3");
        jail.set_env("JOBSCOPE_WAREHOUSE__PATH", "env.duckdb");

        let config: JobscopeConfig = Figment::from(Serialized::defaults(JobscopeConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("JOBSCOPE_").split("__"))
            .extract()?;

        assert_eq!(config.reports.top_n, 3);
        assert_eq!(config.warehouse.path, "env.duckdb");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".jobscope")?;
        jail.create_file(
            ".jobscope/config.toml",
            r#"
[warehouse]
path = "project.duckdb"

[reports]
industry_limit = 7
"#,
        )?;

        let config = JobscopeConfig::load().expect("config loads");
        assert_eq!(config.warehouse.path, "project.duckdb");
        assert_eq!(config.reports.industry_limit, 7);
        config.validate().expect("project config is valid");
        Ok(())
    });
}

#[test]
fn invalid_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("JOBSCOPE_REPORTS__TOP_N", "lots");
        let result = JobscopeConfig::load();
        assert!(result.is_err());
        Ok(())
    });
}
