//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};

/// Body of `POST /api/v1/users`.
///
/// Fields are stored exactly as sent. Missing keys bind as empty strings;
/// only a body that is not a JSON object or carries wrongly typed fields
/// is rejected.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Stored verbatim; never echoed back.
    #[serde(default)]
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// Public view of a user. The password is deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "x".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_bind_as_empty() {
        let request: CreateUserRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");
    }

    #[test]
    fn test_email_kept_verbatim() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"name":" ","email":"not-an-email"}"#).unwrap();
        let new_user = NewUser::from(request);

        assert_eq!(new_user.name, " ");
        assert_eq!(new_user.email, "not-an-email");
    }

    #[test]
    fn test_wrong_field_type_fails_binding() {
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"name":5}"#).is_err());
    }

    #[test]
    fn test_user_response_omits_password() {
        let user = User {
            id: 1,
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "name": "A", "email": "a@b.com" })
        );
    }

    #[test]
    fn test_request_into_new_user_keeps_password() {
        let new_user = NewUser::from(request("A", "a@b.com"));
        assert_eq!(new_user.password, "x");
    }
}
