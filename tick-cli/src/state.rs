use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn tick_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tick"))
}

pub fn ensure_tick_home() -> Result<PathBuf> {
    let dir = tick_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_tasks_path() -> Result<PathBuf> {
    Ok(ensure_tick_home()?.join("tasks.txt"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_tick_home()?.join("config.toml"))
}
