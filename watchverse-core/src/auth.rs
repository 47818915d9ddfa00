//! Sign-in and sign-up against the public auth endpoints.

use crate::client::{ApiClient, ApiError};
use crate::models::AuthResponse;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a token and start the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let resp: AuthResponse = self
            .post_public("/api/auth/login", &LoginRequest { email, password })
            .await?;
        info!("Signed in as {}", resp.username);
        self.session().login(&resp.token);
        Ok(resp)
    }

    /// Create an account; the backend signs the new user in immediately.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let resp: AuthResponse = self
            .post_public(
                "/api/auth/register",
                &RegisterRequest {
                    username,
                    email,
                    password,
                },
            )
            .await?;
        info!("Registered {}", resp.username);
        self.session().login(&resp.token);
        Ok(resp)
    }

    /// End the session locally. The backend keeps no session state to revoke.
    pub fn logout(&self) {
        self.session().logout();
    }
}
