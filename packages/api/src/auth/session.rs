//! Login request and response bodies.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Body of `POST /auth/login`. `identifier` is an email or a username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Successful login: the bearer token plus the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}
