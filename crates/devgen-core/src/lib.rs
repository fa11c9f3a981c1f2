//! devgen Core Library
//!
//! Options records, validation, configuration and DDL file scaffolding.

pub mod config;
pub mod ddl;
pub mod error;
pub mod files;
pub mod validate;

pub use config::Config;
pub use error::{DevgenError, DevgenResult};
