pub mod assessment;
pub mod auth;
pub mod blogs;
pub mod pages;
pub mod protocol;
pub mod session;
pub mod state;

// Re-export the session loop so the binary only needs one import.
pub use session::run_session;
