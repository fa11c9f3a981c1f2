//! Checks for flag values that end up inside file names.

use crate::error::{DevgenError, DevgenResult};

/// Reject values that would escape the target directory or name a directory.
///
/// Empty values are allowed here; required flags are checked by [`require`].
pub fn path_token(flag: &str, value: &str) -> DevgenResult<()> {
    if value.contains('/') || value.contains('\\') {
        return Err(DevgenError::invalid_token(
            flag,
            value,
            "must not contain path separators",
        ));
    }

    if value.contains('\0') {
        return Err(DevgenError::invalid_token(flag, value, "must not contain NUL"));
    }

    if value == "." || value == ".." {
        return Err(DevgenError::invalid_token(
            flag,
            value,
            "must not be a relative directory name",
        ));
    }

    Ok(())
}

/// Fail with `MissingRequiredFlag` when a required flag was given an empty value.
pub fn require(flag: &str, value: &str) -> DevgenResult<()> {
    if value.trim().is_empty() {
        return Err(DevgenError::missing_flag(flag));
    }
    Ok(())
}

/// Whether `value` follows the lowercase alphanumeric + underscore convention.
pub fn is_snake_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
