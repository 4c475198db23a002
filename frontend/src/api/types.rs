use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Contraseña actualizada correctamente.";
pub const DEFAULT_SERVER_ERROR: &str = "Error desconocido del servidor.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub token: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Reads `message` from any JSON body; a missing or non-string field is absent.
    pub fn from_body(body: &Value) -> Self {
        Self {
            message: string_field(body, "message"),
        }
    }

    pub fn into_message(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn from_body(body: &Value) -> Self {
        Self {
            error: string_field(body, "error"),
        }
    }

    pub fn into_message(self) -> String {
        self.error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_ERROR.to_string())
    }
}

fn string_field(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Why a reset attempt did not succeed. `Display` renders the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("Token no válido o expirado.")]
    MissingToken,
    #[error("{0}")]
    ServerRejected(String),
    #[error("❌ Error al conectar con el servidor: {0}")]
    Transport(String),
}

impl ResetError {
    pub fn code(&self) -> &'static str {
        match self {
            ResetError::MissingToken => "MISSING_TOKEN",
            ResetError::ServerRejected(_) => "SERVER_REJECTED",
            ResetError::Transport(_) => "REQUEST_FAILED",
        }
    }

    pub fn transport(cause: impl std::fmt::Display) -> Self {
        let cause = cause.to_string();
        if cause.is_empty() {
            Self::Transport("error desconocido".to_string())
        } else {
            Self::Transport(cause)
        }
    }
}
