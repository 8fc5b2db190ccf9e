//! Config command

use anyhow::{Context, Result};
use wordfreq::config::Config;

/// Print the effective configuration as TOML
pub fn cmd_config_show(config: &Config) -> Result<()> {
  let rendered = config.to_toml().context("Failed to render config")?;
  print!("{}", rendered);

  if let Some(path) = Config::user_config_path() {
    eprintln!("# user config: {}", path.display());
  }

  Ok(())
}
