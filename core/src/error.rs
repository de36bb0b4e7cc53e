//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A registry file is absent from its expected location.
    #[from(ignore)]
    #[display("Target file not found: {_0:?}")]
    MissingTargetFile(PathBuf),

    /// None of the recognized structural dialects matched the target file.
    #[from(ignore)]
    #[display("Unrecognized structure in {_0}")]
    UnrecognizedStructure(String),

    /// A required section heading is absent from a reference document.
    #[from(ignore)]
    #[display("Section '{_0}' not found")]
    SectionNotFound(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String should convert to General, not to the taxonomy variants
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_section_not_found_display() {
        let err = AppError::SectionNotFound("## Índice de Componentes".into());
        assert_eq!(
            format!("{}", err),
            "Section '## Índice de Componentes' not found"
        );
    }
}
