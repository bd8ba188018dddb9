//! Project name validation
//!
//! The name doubles as the target directory name and the `package.json`
//! `name` field, so it is restricted to a character set that is safe in
//! both without any escaping.

use thiserror::Error;

/// Maximum accepted project-name length
pub const MAX_NAME_LEN: usize = 50;

/// Names that collide with build output or framework conventions
const RESERVED_NAMES: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "out",
    "public",
    "src",
    "test",
    "tests",
];

/// Why a project name was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("project name must not be empty")]
    Empty,

    #[error("project name may only contain letters, digits, '-' and '_'")]
    InvalidCharacters,

    #[error("'{0}' is a reserved name")]
    Reserved(String),

    #[error("project name must be at most {MAX_NAME_LEN} characters")]
    TooLong,
}

/// Validate a raw project name, returning the trimmed name on success.
///
/// Rules are checked in order and the first failure wins: empty, character
/// set (`[A-Za-z0-9-_]`), reserved names (case-insensitive), length.
pub fn project_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(NameError::InvalidCharacters);
    }

    let lower = name.to_lowercase();
    if RESERVED_NAMES.contains(&lower.as_str()) {
        return Err(NameError::Reserved(name.to_string()));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }

    Ok(name.to_string())
}
