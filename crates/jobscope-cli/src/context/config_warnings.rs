use jobscope_config::JobscopeConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &JobscopeConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &JobscopeConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.warehouse.is_configured() && has_env_prefix(&env_keys, "JOBSCOPE_WAREHOUSE") {
        warnings.push(
            "Warehouse config appears default while JOBSCOPE_WAREHOUSE* env vars exist. Use double underscores (example: JOBSCOPE_WAREHOUSE__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "JOBSCOPE_REPORTS") {
        warnings.push(
            "JOBSCOPE_REPORTS_* env vars are ignored. Use double underscores (example: JOBSCOPE_REPORTS__TOP_N)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
