use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Expand `@name{...}` / `{{name}}` templates before tokenizing.
    #[config(env = "PGSCRIPT_PREPROCESS", default = true)]
    pub preprocess: bool,
    /// ANSI colours in text reports.
    #[config(env = "PGSCRIPT_COLOR", default = true)]
    pub color: bool,
    #[config(env = "PGSCRIPT_JSON", default = false)]
    pub json: bool,
    /// Print the expanded script instead of its statements.
    #[config(env = "PGSCRIPT_EXPAND", default = false)]
    pub expand: bool,
    /// Re-indent expanded output.
    #[config(env = "PGSCRIPT_REINDENT", default = false)]
    pub reindent: bool,
}

/// Configuration loaded from the environment on first use.
pub fn config() -> Result<&'static Config> {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::builder()
        .env()
        .load()
        .map_err(|e| Error::Config(e.to_string()))?;
    Ok(CONFIG.get_or_init(|| loaded))
}
