//! Template lookup and rendering.
//!
//! Templates are files named `<name>.<ext>.tera`. The `<ext>` segment is the
//! extension of the generated file, so a `request_model.php.tera` template
//! produces `.php` files and a `request_model.ts.tera` would produce `.ts`.
//!
//! Lookup order:
//! 1. an explicit directory (flag, env var or config file),
//! 2. `templates/` next to the installed executable,
//! 3. the templates compiled into the binary.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use devgen_core::{DevgenError, DevgenResult};

/// Suffix every template file carries.
pub const TEMPLATE_SUFFIX: &str = ".tera";

/// Directory name looked up next to the executable.
pub const BUNDLED_DIR: &str = "templates";

const EMBEDDED: &[(&str, &str)] = &[
    (
        "request_model.php.tera",
        include_str!("../templates/request_model.php.tera"),
    ),
    (
        "request_model_factory.php.tera",
        include_str!("../templates/request_model_factory.php.tera"),
    ),
];

/// Where templates are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Directory(PathBuf),
    Embedded,
}

/// Resolves template names to loaded templates.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    source: TemplateSource,
}

/// A parsed template plus its output extension.
pub struct Template {
    name: String,
    extension: String,
    tera: Tera,
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl TemplateStore {
    /// Templates compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            source: TemplateSource::Embedded,
        }
    }

    /// Templates from `dir`. The directory must exist when loading.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::Directory(dir.into()),
        }
    }

    /// Pick a source: `explicit` if given, else the bundled directory next to
    /// the executable if it exists, else the embedded set.
    pub fn locate(explicit: Option<&Path>) -> Self {
        if let Some(dir) = explicit {
            return Self::from_dir(dir);
        }

        match bundled_dir() {
            Some(dir) => {
                tracing::debug!(dir = %dir.display(), "using bundled templates");
                Self::from_dir(dir)
            }
            None => Self::embedded(),
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Load and parse the template called `name`.
    pub fn load(&self, name: &str) -> DevgenResult<Template> {
        let (file_name, raw) = match &self.source {
            TemplateSource::Embedded => EMBEDDED
                .iter()
                .find(|(file, _)| template_name(file) == Some(name))
                .map(|(file, raw)| (file.to_string(), raw.to_string()))
                .ok_or_else(|| {
                    DevgenError::TemplateLoad(format!("no built-in template named '{}'", name))
                })?,
            TemplateSource::Directory(dir) => read_from_dir(dir, name)?,
        };

        Template::parse(&file_name, &raw)
    }
}

impl Template {
    /// Parse `raw` as the template stored in `file_name`.
    pub fn parse(file_name: &str, raw: &str) -> DevgenResult<Self> {
        let stem = file_name.strip_suffix(TEMPLATE_SUFFIX).ok_or_else(|| {
            DevgenError::TemplateLoad(format!("'{}' is not a {} file", file_name, TEMPLATE_SUFFIX))
        })?;

        let (name, extension) = match stem.split_once('.') {
            Some((name, ext)) if !name.is_empty() && !ext.is_empty() => (name, ext),
            _ => {
                return Err(DevgenError::TemplateLoad(format!(
                    "'{}' does not declare an output extension (expected <name>.<ext>{})",
                    file_name, TEMPLATE_SUFFIX
                )))
            }
        };

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, raw)
            .map_err(|e| DevgenError::TemplateLoad(format!("{}: {}", file_name, error_chain(&e))))?;

        Ok(Self {
            name: name.to_string(),
            extension: extension.to_string(),
            tera,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension of the generated file, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Render with the fields of `data`. Undefined variables are an error.
    pub fn render<T: Serialize>(&self, data: &T) -> DevgenResult<String> {
        let context = Context::from_serialize(data).map_err(|source| DevgenError::TemplateRender {
            name: self.name.clone(),
            source,
        })?;

        self.tera
            .render(&self.name, &context)
            .map_err(|source| DevgenError::TemplateRender {
                name: self.name.clone(),
                source,
            })
    }
}

/// `<exe dir>/templates`, if it exists.
fn bundled_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?.join(BUNDLED_DIR);
    dir.is_dir().then_some(dir)
}

/// `request_model.php.tera` -> `request_model`
fn template_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(TEMPLATE_SUFFIX)?
        .split_once('.')
        .map(|(name, _)| name)
}

fn read_from_dir(dir: &Path, name: &str) -> DevgenResult<(String, String)> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        DevgenError::TemplateLoad(format!("templates directory {}: {}", dir.display(), e))
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DevgenError::TemplateLoad(e.to_string()))?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        if template_name(&file_name) == Some(name) {
            matches.push((file_name, entry.path()));
        }
    }

    let (file_name, path) = match matches.len() {
        0 => {
            return Err(DevgenError::TemplateLoad(format!(
                "template '{}' not found in {}",
                name,
                dir.display()
            )))
        }
        1 => matches.remove(0),
        _ => {
            let names: Vec<_> = matches.iter().map(|(f, _)| f.as_str()).collect();
            return Err(DevgenError::TemplateLoad(format!(
                "template '{}' is ambiguous in {}: {}",
                name,
                dir.display(),
                names.join(", ")
            )));
        }
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| DevgenError::TemplateLoad(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(path = %path.display(), "loaded template");

    Ok((file_name, raw))
}

/// Flatten a tera error and its sources into one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}
