use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtccError {
    #[error("Root directory does not exist or is not a directory: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EtccError>;

impl EtccError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RootNotFound { .. } => 2,
            Self::ConfigParse { .. } | Self::ConfigKeyNotFound { .. } => 3,
            Self::Pattern(_) => 4,
            Self::Json(_) => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_for_user_errors() {
        let root = EtccError::RootNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        let key = EtccError::ConfigKeyNotFound {
            key: "scan.nope".to_string(),
        };
        let io = EtccError::Io(std::io::Error::other("disk full"));

        assert_eq!(root.exit_code(), 2);
        assert_eq!(key.exit_code(), 3);
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_invalid_utf8_report_is_error() {
        let err: EtccError = String::from_utf8(vec![b'{', 0xff]).unwrap_err().into();
        assert!(matches!(err, EtccError::Utf8(_)));
        assert!(err.to_string().starts_with("Report is not valid UTF-8"));
    }

    #[test]
    fn test_error_message_includes_path() {
        let err = EtccError::RootNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        assert!(err.to_string().contains("/nonexistent"));
    }
}
