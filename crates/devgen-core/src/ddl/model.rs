//! DDL options record.

use std::path::PathBuf;

use crate::error::DevgenResult;
use crate::validate;

/// Inputs of a single `create ddl` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlOptions {
    pub sort_number: String,
    pub ticket_number: String,
    pub when: String,
    pub explanation: String,
    pub output_dir: PathBuf,
}

impl DdlOptions {
    pub fn new(
        sort_number: impl Into<String>,
        ticket_number: impl Into<String>,
        when: impl Into<String>,
        explanation: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sort_number: sort_number.into(),
            ticket_number: ticket_number.into(),
            when: when.into(),
            explanation: explanation.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Check required values and path safety. Touches no files.
    pub fn validate(&self) -> DevgenResult<()> {
        validate::require("ticket_number", &self.ticket_number)?;
        validate::require("when", &self.when)?;
        validate::require("explanation", &self.explanation)?;

        validate::path_token("sort_number", &self.sort_number)?;
        validate::path_token("ticket_number", &self.ticket_number)?;
        validate::path_token("when", &self.when)?;
        validate::path_token("explanation", &self.explanation)?;

        if !validate::is_snake_token(&self.explanation) {
            tracing::warn!(
                explanation = %self.explanation,
                "explanation should use lowercase letters, digits and underscores only"
            );
        }

        Ok(())
    }
}
