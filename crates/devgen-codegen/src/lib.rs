//! # devgen Codegen
//!
//! Renders source files from `<name>.<ext>.tera` templates.
//!
//! Currently produces request models and their companion factories.

pub mod request_model;
pub mod templates;

pub use request_model::{
    generate_request_model, render_request_model, write_files, write_to, Destination,
    GeneratedFile, RequestModelOptions, TemplateData,
};
pub use templates::{Template, TemplateSource, TemplateStore};
