//! Configuration inspection command.

use anyhow::Context;

use crate::config::{self, Config};

/// Print the config file location and the resolved configuration
pub fn cmd_config(config: &Config, init: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    match &path {
        Some(p) if p.exists() => println!("Config file: {}", p.display()),
        Some(p) => println!("Config file: {} (not present, using defaults)", p.display()),
        None => println!("Config file: unavailable (no config directory)"),
    }

    if init {
        match &path {
            Some(p) if p.exists() => println!("Config file already exists, leaving it unchanged"),
            _ => {
                config::save(config).context("writing default config")?;
                println!("Wrote default configuration");
            }
        }
    }

    println!();
    print!(
        "{}",
        toml::to_string_pretty(config).context("serializing config")?
    );
    Ok(())
}
