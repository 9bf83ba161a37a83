use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMPTY_INPUT_MESSAGE: &str = "Por favor, ingresa un tipo de negocio.";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Error de conexión. Verifica tu conexión e inténtalo de nuevo.";
pub const INVALID_RESPONSE_MESSAGE: &str = "Respuesta inválida del servidor.";

/// Every way an idea generation attempt can fail.
///
/// The `Display` text is the user-facing message stored in the failed
/// request state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
    #[error("{}", CONNECTION_ERROR_MESSAGE)]
    ConnectionError,
    #[error("Error del servidor: {status}")]
    ServerError { status: u16 },
    #[error("{}", INVALID_RESPONSE_MESSAGE)]
    InvalidResponseShape,
}

impl GenerateError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::ConnectionError => "connection_error",
            Self::ServerError { .. } => "server_error",
            Self::InvalidResponseShape => "invalid_response_shape",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
}

/// Error body returned by the backend for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
