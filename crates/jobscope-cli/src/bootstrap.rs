use anyhow::Context;
use jobscope_config::JobscopeConfig;

use crate::cli::GlobalFlags;

/// Load configuration from `.env`, config files and `JOBSCOPE_*` env vars,
/// then apply the `--warehouse` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<JobscopeConfig> {
    let mut config =
        JobscopeConfig::load_with_dotenv().context("failed to load jobscope configuration")?;

    apply_overrides(&mut config, flags);
    crate::context::warn_unconfigured(&config);
    config
        .validate()
        .context("invalid jobscope configuration")?;

    Ok(config)
}

fn apply_overrides(config: &mut JobscopeConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.warehouse {
        tracing::debug!(path = %path, "warehouse path overridden on the command line");
        config.warehouse.path.clone_from(path);
    }
}
