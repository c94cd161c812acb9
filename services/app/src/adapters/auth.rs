//! services/app/src/adapters/auth.rs
//!
//! Stand-in for the external identity provider. It waits like a real round trip
//! would and then reports that sign-in is not available yet.

use std::time::Duration;

use async_trait::async_trait;
use cognistack_core::{
    domain::{AuthSession, SignInCredentials, SignUpCredentials},
    ports::{AuthError, AuthProvider, AuthResult},
};
use tracing::info;

const NOT_CONNECTED: &str = "accounts are not connected to an identity provider yet";

#[derive(Clone)]
pub struct StubAuthProvider {
    delay: Duration,
}

impl StubAuthProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn respond(&self, email: &str) -> AuthResult<AuthSession> {
        info!(email, delay_ms = self.delay.as_millis() as u64, "Stub identity provider called");
        tokio::time::sleep(self.delay).await;
        Err(AuthError::Unavailable(NOT_CONNECTED.to_string()))
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn sign_in(&self, credentials: &SignInCredentials) -> AuthResult<AuthSession> {
        self.respond(&credentials.email).await
    }

    async fn sign_up(&self, credentials: &SignUpCredentials) -> AuthResult<AuthSession> {
        self.respond(&credentials.email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn reports_unavailable_after_the_delay() {
        let provider = StubAuthProvider::new(Duration::from_secs(2));
        let started = tokio::time::Instant::now();
        let result = provider
            .sign_in(&SignInCredentials {
                email: "alex@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::Unavailable(_))));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn sign_up_is_unavailable_too() {
        let provider = StubAuthProvider::new(Duration::ZERO);
        let result = provider
            .sign_up(&SignUpCredentials {
                username: "alex".to_string(),
                email: "alex@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AuthError::Unavailable(_))));
    }
}
