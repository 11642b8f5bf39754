use crate::errors::DockError;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid message: {0}")]
    Json(#[from] serde_json::Error),
}

impl DockError for ProtocolError {
    fn error_code(&self) -> &'static str {
        match self {
            ProtocolError::Io(_) => "PROTOCOL_IO_ERROR",
            ProtocolError::Json(_) => "INVALID_MESSAGE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProtocolError::Json(_))
    }
}
