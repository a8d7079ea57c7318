use simpledns_domain::{CliOverrides, Config};

/// Loads, overrides, and validates the configuration. Any failure here is
/// fatal; the server never starts on a partial record set.
pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
