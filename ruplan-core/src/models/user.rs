use serde::{Deserialize, Serialize};

/// Utente esposto al client/server sul wire (riassunto, non è un modello di DB).
/// L'hash della password e created_at restano lato server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Sul wire il campo identità si chiama "_id".
    #[serde(rename = "_id")]
    pub user_id: String,
    pub name: String,
    pub email: String,
}
