//! Request model (and factory) generation.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use devgen_core::files::{create_new_file, ensure_dir};
use devgen_core::{validate, DevgenError, DevgenResult};

use crate::templates::TemplateStore;

/// Template rendered for the request model itself.
pub const MODEL_TEMPLATE: &str = "request_model";

/// Template rendered for the companion factory.
pub const FACTORY_TEMPLATE: &str = "request_model_factory";

/// Where rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File { dir: PathBuf },
}

/// Inputs of a single `create requestModel` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestModelOptions {
    pub name: String,
    pub namespace: String,
    pub mode: String,
    pub with_factory: bool,
    pub destination: Destination,
}

/// Variables visible to the templates.
#[derive(Debug, Serialize)]
pub struct TemplateData<'a> {
    #[serde(rename = "Namespace")]
    pub namespace: &'a str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Mode")]
    pub mode: &'a str,
}

/// A rendered file, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub filename: String,
    pub content: String,
}

impl RequestModelOptions {
    /// Check required values and path safety of the class name.
    pub fn validate(&self) -> DevgenResult<()> {
        validate::require("name", &self.name)?;
        validate::require("namespace", &self.namespace)?;
        validate::path_token("name", &self.name)?;
        Ok(())
    }

    pub fn data(&self) -> TemplateData<'_> {
        TemplateData {
            namespace: &self.namespace,
            name: &self.name,
            mode: &self.mode,
        }
    }
}

/// Render the request model, plus the factory when requested.
///
/// Nothing is written; all templates are rendered before any output happens.
pub fn render_request_model(
    store: &TemplateStore,
    options: &RequestModelOptions,
) -> DevgenResult<Vec<GeneratedFile>> {
    options.validate()?;
    let data = options.data();

    let model = store.load(MODEL_TEMPLATE)?;
    let mut files = vec![GeneratedFile {
        filename: format!("{}.{}", options.name, model.extension()),
        content: model.render(&data)?,
    }];

    if options.with_factory {
        let factory = store.load(FACTORY_TEMPLATE)?;
        files.push(GeneratedFile {
            filename: format!("{}Factory.{}", options.name, factory.extension()),
            content: factory.render(&data)?,
        });
    }

    tracing::debug!(count = files.len(), name = %options.name, "rendered request model");
    Ok(files)
}

/// Write rendered contents, in order, to `out`.
pub fn write_to<W: Write>(files: &[GeneratedFile], out: &mut W) -> DevgenResult<()> {
    for file in files {
        out.write_all(file.content.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Create each file in `dir` without overwriting.
///
/// If any file fails, the ones created by this call are removed again.
pub fn write_files(files: &[GeneratedFile], dir: &Path) -> DevgenResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let mut written = Vec::new();
    for file in files {
        let path = dir.join(&file.filename);
        if let Err(err) = write_one(&path, &file.content) {
            rollback(&written);
            return Err(err);
        }
        tracing::info!(path = %path.display(), "created file");
        written.push(path);
    }

    Ok(written)
}

/// Render and deliver to `options.destination`.
///
/// Returns the created paths; empty for stdout.
pub fn generate_request_model(
    store: &TemplateStore,
    options: &RequestModelOptions,
) -> DevgenResult<Vec<PathBuf>> {
    let files = render_request_model(store, options)?;

    match &options.destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            write_to(&files, &mut stdout.lock())?;
            Ok(Vec::new())
        }
        Destination::File { dir } => write_files(&files, dir),
    }
}

fn write_one(path: &Path, content: &str) -> DevgenResult<()> {
    let mut file = create_new_file(path)?;
    if let Err(err) = file.write_all(content.as_bytes()) {
        drop(file);
        rollback(&[path.to_path_buf()]);
        return Err(DevgenError::Output(err));
    }
    Ok(())
}

fn rollback(paths: &[PathBuf]) {
    for path in paths {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partially generated file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(with_factory: bool, destination: Destination) -> RequestModelOptions {
        RequestModelOptions {
            name: "Foo".to_string(),
            namespace: "Bar\\Baz".to_string(),
            mode: "default".to_string(),
            with_factory,
            destination,
        }
    }

    fn render_to_string(opts: &RequestModelOptions) -> String {
        let files = render_request_model(&TemplateStore::embedded(), opts).unwrap();
        let mut out = Vec::new();
        write_to(&files, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_substitutes_fields() {
        let out = render_to_string(&options(false, Destination::Stdout));
        assert!(out.contains("namespace Bar\\Baz;"));
        assert!(out.contains("final class Foo"));
        assert!(out.contains("public const MODE = 'default';"));
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_stdout_rendering_is_deterministic() {
        let opts = options(false, Destination::Stdout);
        let first = render_to_string(&opts);
        let second = render_to_string(&opts);
        assert_eq!(first, second);
    }

    #[test]
    fn test_file_matches_stdout() {
        let dir = TempDir::new().unwrap();
        let expected = render_to_string(&options(false, Destination::Stdout));

        let opts = options(false, Destination::File { dir: dir.path().to_path_buf() });
        let written = generate_request_model(&TemplateStore::embedded(), &opts).unwrap();

        assert_eq!(written, vec![dir.path().join("Foo.php")]);
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap(), expected);

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_factory_generated() {
        let dir = TempDir::new().unwrap();
        let opts = options(true, Destination::File { dir: dir.path().to_path_buf() });

        let written = generate_request_model(&TemplateStore::embedded(), &opts).unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("Foo.php"), dir.path().join("FooFactory.php")]
        );
        let factory = std::fs::read_to_string(&written[1]).unwrap();
        assert!(factory.contains("final class FooFactory"));
        assert!(factory.contains("public static function make(array $overrides = []): Foo"));
    }

    #[test]
    fn test_factory_stdout_follows_model() {
        let model_only = render_to_string(&options(false, Destination::Stdout));
        let both = render_to_string(&options(true, Destination::Stdout));
        assert!(both.starts_with(&model_only));
        assert!(both.len() > model_only.len());
    }

    #[test]
    fn test_existing_file_not_overwritten() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Foo.php"), "keep").unwrap();
        let opts = options(false, Destination::File { dir: dir.path().to_path_buf() });

        let err = generate_request_model(&TemplateStore::embedded(), &opts).unwrap_err();

        assert!(err.is_already_exists());
        assert_eq!(std::fs::read_to_string(dir.path().join("Foo.php")).unwrap(), "keep");
    }

    #[test]
    fn test_factory_conflict_rolls_back_model() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("FooFactory.php"), "keep").unwrap();
        let opts = options(true, Destination::File { dir: dir.path().to_path_buf() });

        let err = generate_request_model(&TemplateStore::embedded(), &opts).unwrap_err();

        assert!(err.is_already_exists());
        assert!(!dir.path().join("Foo.php").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("FooFactory.php")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_out_dir_created() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("app/Http/Requests");
        let opts = options(false, Destination::File { dir: target.clone() });

        generate_request_model(&TemplateStore::embedded(), &opts).unwrap();

        assert!(target.join("Foo.php").is_file());
    }

    #[test]
    fn test_render_error_writes_nothing() {
        let templates = TempDir::new().unwrap();
        std::fs::write(
            templates.path().join("request_model.php.tera"),
            "{{ Name }} {{ Missing }}",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        let opts = options(false, Destination::File { dir: out.path().to_path_buf() });

        let err = generate_request_model(&TemplateStore::from_dir(templates.path()), &opts)
            .unwrap_err();

        assert!(matches!(err, DevgenError::TemplateRender { .. }));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_factory_template_writes_nothing() {
        let templates = TempDir::new().unwrap();
        std::fs::write(templates.path().join("request_model.rb.tera"), "class {{ Name }}\n").unwrap();
        let out = TempDir::new().unwrap();
        let opts = options(true, Destination::File { dir: out.path().to_path_buf() });

        let err = generate_request_model(&TemplateStore::from_dir(templates.path()), &opts)
            .unwrap_err();

        assert!(matches!(err, DevgenError::TemplateLoad(_)));
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_extension_follows_template() {
        let templates = TempDir::new().unwrap();
        std::fs::write(templates.path().join("request_model.rb.tera"), "class {{ Name }}\n").unwrap();
        let out = TempDir::new().unwrap();
        let opts = options(false, Destination::File { dir: out.path().to_path_buf() });

        let written =
            generate_request_model(&TemplateStore::from_dir(templates.path()), &opts).unwrap();

        assert_eq!(written, vec![out.path().join("Foo.rb")]);
    }

    #[test]
    fn test_rollback_removes_files_and_tolerates_missing() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("Foo.php");
        std::fs::write(&present, "partial").unwrap();
        let missing = dir.path().join("FooFactory.php");

        rollback(&[present.clone(), missing.clone()]);

        assert!(!present.exists());
        assert!(!missing.exists());
    }

    #[test]
    fn test_invalid_name() {
        let mut opts = options(false, Destination::Stdout);
        opts.name = "../Foo".to_string();
        let err = render_request_model(&TemplateStore::embedded(), &opts).unwrap_err();
        assert!(matches!(err, DevgenError::InvalidToken { .. }));

        opts.name = String::new();
        let err = render_request_model(&TemplateStore::embedded(), &opts).unwrap_err();
        assert!(matches!(err, DevgenError::MissingRequiredFlag(ref f) if f == "name"));
    }
}
