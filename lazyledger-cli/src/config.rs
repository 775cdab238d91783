use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_lazyledger_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParseSection {
    /// "today", "none", or a YYYY-MM-DD date attached to every parsed line
    pub default_date: String,
    /// Drop transactions without an amount or date before aggregating
    pub skip_incomplete: bool,
}

impl Default for ParseSection {
    fn default() -> Self {
        Self {
            default_date: "today".to_string(),
            skip_incomplete: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

impl ParseSection {
    /// Resolve `default_date` against `today`.
    pub fn resolve_default_date(&self, today: NaiveDate) -> Result<Option<NaiveDate>> {
        match self.default_date.trim() {
            "today" => Ok(Some(today)),
            "none" | "" => Ok(None),
            other => match NaiveDate::parse_from_str(other, "%Y-%m-%d") {
                Ok(d) => Ok(Some(d)),
                Err(e) => bail!(
                    "parse.default_date {:?} is not today/none/YYYY-MM-DD: {}",
                    other,
                    e
                ),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_lazyledger_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
