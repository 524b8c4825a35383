use serde::{Deserialize, Serialize};

/// Corpo JSON di ogni risposta di errore HTTP: `{ "message": "..." }`.
/// Il server lo emette, il client lo deserializza per mostrare l'alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
