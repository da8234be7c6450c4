//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        Self {
            email,
            name,
            password_hash,
        }
    }
}

/// User as returned by the API.
///
/// Mirrors the stored row, so `password` carries the digest, never the
/// plain text.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Stored password digest
    #[schema(example = "$argon2id$v=19$m=19456,t=2,p=1$...")]
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email,
            name: user.name,
            password: user.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_skips_hash() {
        let user = User::new("a@x.com".into(), "A".into(), "$argon2id$digest".into());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_response_exposes_digest_as_password() {
        let user = User::new("a@x.com".into(), "A".into(), "$argon2id$digest".into());
        let response = UserResponse::from(user);

        assert_eq!(response.password, "$argon2id$digest");
        assert_eq!(response.name, "A");
    }
}
