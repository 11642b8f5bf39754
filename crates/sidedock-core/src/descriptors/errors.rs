use crate::errors::DockError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DescriptorLoadError {
    #[error("Descriptor file not found at '{}'", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{}': {message}", .path.display())]
    ParseFailed { path: PathBuf, message: String },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl DockError for DescriptorLoadError {
    fn error_code(&self) -> &'static str {
        match self {
            DescriptorLoadError::FileNotFound { .. } => "DESCRIPTOR_FILE_NOT_FOUND",
            DescriptorLoadError::ReadFailed { .. } => "DESCRIPTOR_READ_FAILED",
            DescriptorLoadError::ParseFailed { .. } => "DESCRIPTOR_PARSE_FAILED",
            DescriptorLoadError::InvalidPattern { .. } => "DESCRIPTOR_INVALID_PATTERN",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            DescriptorLoadError::FileNotFound { .. } | DescriptorLoadError::ParseFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let error = DescriptorLoadError::FileNotFound {
            path: PathBuf::from("/tmp/apps.json"),
        };
        assert_eq!(
            error.to_string(),
            "Descriptor file not found at '/tmp/apps.json'"
        );
        assert_eq!(error.error_code(), "DESCRIPTOR_FILE_NOT_FOUND");
        assert!(error.is_user_error());
    }
}
