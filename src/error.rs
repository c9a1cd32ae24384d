//! Error type for catalog and config files
//!
//! Object construction itself never fails with an error: an unknown type
//! yields `None`. Everything that touches the filesystem reports a
//! `FactoryError` instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Compression error: {0}")]
    Compression(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = FactoryError::Validation("Base: part 3 has no parent".to_string());
        assert_eq!(err.to_string(), "Validation error: Base: part 3 has no parent");

        let io = FactoryError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_parse_error_converts() {
        let parsed: Result<u32, _> = ron::from_str("(");
        let err: FactoryError = parsed.unwrap_err().into();
        assert!(matches!(err, FactoryError::Parse(_)));
    }
}
