pub mod user;
pub mod project;

// Re-export per comodità
pub use user::User;
pub use project::Project;
