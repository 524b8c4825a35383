//! ruplan-client: il lato client del tracker di progetti.
//! Tiene la sessione `{token, utente}` in uno storage durevole, pilota le due
//! schermate (credenziali / progetti) come macchina a stati e parla col server
//! solo via HTTP/JSON.

pub mod api;
pub mod session;
pub mod storage;

// Re-export utili per ridurre i percorsi nel binario e nei test
pub use api::{ApiClient, ClientError, ProjectApi};
pub use session::{Credentials, Mode, SessionFlow, SessionState, SubmitOutcome};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
