//! Loading [`Options`] from TOML config files.
//!
//! ```toml
//! max-heading-level = 3
//! tab-width = 4
//! strikethrough = true
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Options;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

const CANDIDATE_NAMES: &[&str] = &[".md2steam.toml", "md2steam.toml"];

/// Parse options from TOML text. `path` is only used for error messages.
pub fn parse_config_str(s: &str, path: &Path) -> Result<Options, ConfigError> {
    toml::from_str::<Options>(s).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse one config file.
pub fn read_config(path: &Path) -> Result<Options, ConfigError> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(options)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("md2steam").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("md2steam")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load options with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .md2steam.toml, md2steam.toml
/// 3) XDG: $XDG_CONFIG_HOME/md2steam/config.toml or ~/.config/md2steam/config.toml
/// 4) defaults
///
/// Discovered files that fail to load are skipped with a warning.
pub fn load(
    explicit: Option<&Path>,
    start_dir: &Path,
) -> Result<(Options, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        let options = read_config(path)?;
        return Ok((options, Some(path.to_path_buf())));
    }

    for candidate in [find_in_tree(start_dir), xdg_config_path()]
        .into_iter()
        .flatten()
    {
        match read_config(&candidate) {
            Ok(options) => return Ok((options, Some(candidate))),
            Err(err) => log::warn!("Skipping config: {err}"),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Options::default(), None))
}
