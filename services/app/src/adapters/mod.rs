pub mod auth;
pub mod content;
pub mod scoring;

pub use auth::StubAuthProvider;
pub use content::{JsonContentStore, StaticContentStore};
pub use scoring::{FixedScorer, TallyScorer};
