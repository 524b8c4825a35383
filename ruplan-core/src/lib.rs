//! ruplan-core: tipi condivisi tra client e server (modelli, DTO HTTP, errori).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod models;
pub mod protocol;
pub mod error;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use error::ErrorResponse;
pub use models::{project::Project, user::User};
pub use protocol::http::{
    CreateProjectRequest, DeleteProjectResponse, LoginRequest, LoginResponse, SignupRequest,
    SignupResponse,
};
pub use utils::{new_id, now_timestamp};
