//! crates/cognistack_core/src/ports.rs
//!
//! Defines the service contracts (traits) the core depends on.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to stay independent of where content comes from, who scores an assessment and
//! which identity provider signs users in.

use async_trait::async_trait;

use crate::domain::{
    AnswerMap, AssessmentResult, AuthSession, Post, Profile, Question, SignInCredentials,
    SignUpCredentials,
};

//=========================================================================================
// Port Error and Result Types
//=========================================================================================

/// A generic error type for content and scoring port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

/// Failures an identity provider can report back to the sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Every blog post, in display order.
    async fn list_posts(&self) -> PortResult<Vec<Post>>;

    /// The assessment questions, in the order they are asked.
    async fn list_questions(&self) -> PortResult<Vec<Question>>;

    async fn load_profile(&self) -> PortResult<Profile>;
}

#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Turns a completed answer map into a type and a function breakdown.
    async fn score(&self, questions: &[Question], answers: &AnswerMap)
        -> PortResult<AssessmentResult>;
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, credentials: &SignInCredentials) -> AuthResult<AuthSession>;

    async fn sign_up(&self, credentials: &SignUpCredentials) -> AuthResult<AuthSession>;
}
