//! Optional `devgen.toml` configuration.
//!
//! Every value here is a fallback: explicit flags always win, and a missing
//! `devgen.toml` in the working directory simply yields the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{DevgenError, DevgenResult};

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "devgen.toml";

/// Built-in DDL sort number.
pub const DEFAULT_SORT_NUMBER: &str = "0000";

/// Built-in request model mode.
pub const DEFAULT_MODE: &str = "default";

/// Contents of `devgen.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ddl: DdlConfig,

    #[serde(default)]
    pub request_model: RequestModelConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DdlConfig {
    pub output_dir: Option<PathBuf>,
    pub sort_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RequestModelConfig {
    pub output_dir: Option<PathBuf>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory holding `<name>.<ext>.tera` files.
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(raw: &str) -> DevgenResult<Self> {
        toml::from_str(raw).map_err(|e| DevgenError::Config(e.to_string()))
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load(path: &Path) -> DevgenResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DevgenError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&raw).map_err(|e| match e {
            DevgenError::Config(msg) => DevgenError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `devgen.toml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> DevgenResult<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve an explicit `--config` path, or discover one in `dir`.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> DevgenResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(dir),
        }
    }

    pub fn ddl_sort_number(&self) -> &str {
        self.ddl.sort_number.as_deref().unwrap_or(DEFAULT_SORT_NUMBER)
    }

    pub fn ddl_output_dir(&self) -> PathBuf {
        self.ddl
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn request_model_mode(&self) -> &str {
        self.request_model.mode.as_deref().unwrap_or(DEFAULT_MODE)
    }

    pub fn request_model_output_dir(&self) -> PathBuf {
        self.request_model
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
