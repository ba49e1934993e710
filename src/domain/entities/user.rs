//! User entity.

/// A user stored by the service.
///
/// `password` is kept verbatim and must never be written to a response;
/// API DTOs copy only the public fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Builds the stored record for `new_user` under the assigned `id`.
    pub fn from_new(id: u32, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
        }
    }
}

/// Input data for creating a user. The identifier is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
