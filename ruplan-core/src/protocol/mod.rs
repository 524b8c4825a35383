pub mod http;

// Re-export comodi
pub use http::{
    CreateProjectRequest, DeleteProjectResponse, LoginRequest, LoginResponse, SignupRequest,
    SignupResponse,
};
