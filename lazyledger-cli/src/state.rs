use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$LAZYLEDGER_HOME`, else `~/.lazyledger`
pub fn lazyledger_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("LAZYLEDGER_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".lazyledger"))
}

pub fn ensure_lazyledger_home() -> Result<PathBuf> {
    let dir = lazyledger_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
