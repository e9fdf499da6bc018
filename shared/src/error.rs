use lambda_http::http::StatusCode;
use thiserror::Error;

/// Everything a verb handler can fail with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Update carried nothing besides the key
    #[error("no fields to update")]
    NoFields,

    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    /// Store or transport failure, surfaced verbatim
    #[error("{0}")]
    Storage(String),
}

impl StudentError {
    pub fn missing_key() -> Self {
        Self::Validation("student_id is required".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NoFields => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status() {
        assert_eq!(StudentError::missing_key().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(StudentError::NoFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(StudentError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            StudentError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            StudentError::Storage("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn storage_message_is_verbatim() {
        let err = StudentError::Storage("ResourceNotFoundException: table missing".into());
        assert_eq!(err.to_string(), "ResourceNotFoundException: table missing");
        assert_eq!(StudentError::NoFields.to_string(), "no fields to update");
    }
}
