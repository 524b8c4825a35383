use serde::{Deserialize, Serialize};

/// Progetto persistito dal server e restituito al client così com'è.
/// Il riferimento al proprietario (userId) è un puntatore per id, senza
/// integrità referenziale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub project_id: String,
    pub user_id: String,
    pub title: String,
    /// Facoltativa: omessa dal JSON se assente.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
