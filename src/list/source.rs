use super::models::Item;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ACCOUNTS_FILE: &str = "/etc/passwd";

/// Where the baseline list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum Source {
    /// One item per line.
    File(PathBuf),
    /// Entry names of a directory.
    Dir(PathBuf),
    /// User names from a passwd-format file.
    Accounts(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Source::Accounts(PathBuf::from(DEFAULT_ACCOUNTS_FILE))
    }
}

impl Source {
    pub fn load(&self) -> Result<Vec<Item>> {
        match self {
            Source::File(path) => load_lines(path),
            Source::Dir(path) => load_dir(path),
            Source::Accounts(path) => load_accounts(path),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Source::File(path) => format!("file {}", path.display()),
            Source::Dir(path) => format!("dir {}", path.display()),
            Source::Accounts(path) => format!("accounts {}", path.display()),
        }
    }
}

pub fn load_lines(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read list file: {}", path.display()))?;
    Ok(parse_lines(&content))
}

pub fn parse_lines(content: &str) -> Vec<Item> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_dir(path: &Path) -> Result<Vec<Item>> {
    let entries = fs::read_dir(path)
        .with_context(|| format!("Failed to list directory: {}", path.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", path.display()))?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        // Broken symlinks and similar still show up, just without the marker
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

pub fn load_accounts(path: &Path) -> Result<Vec<Item>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read account database: {}", path.display()))?;
    Ok(parse_accounts(&content))
}

pub fn parse_accounts(content: &str) -> Vec<Item> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split(':').next())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
