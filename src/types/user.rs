use chrono::{DateTime, Utc};
use entity::user::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserRegister {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserLogin {
    pub email: String,
    pub password: String,
}

/// Insert payload, password already hashed.
pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// The shape of a user as clients see it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserResponse {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRegisterRes {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserLoginRes {
    pub message: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserListRes {
    pub users: Vec<UserResponse>,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl RUserRegister {
    /// Trims and lower-cases the email, then checks every field.
    pub fn validated(mut self) -> Result<Self, AppError> {
        self.name = self.name.trim().to_string();
        self.email = normalize_email(&self.email);

        if self.name.is_empty() {
            return Err(AppError::Validation("Name is required".into()));
        }
        if !is_email(&self.email) {
            return Err(AppError::Validation("A valid email is required".into()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(self)
    }
}

fn is_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(name: &str, email: &str, password: &str) -> RUserRegister {
        RUserRegister {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let r = register(" Ada ", "  Ada@Example.COM ", "correct horse").validated().unwrap();

        assert_eq!(r.name, "Ada");
        assert_eq!(r.email, "ada@example.com");
    }

    #[test]
    fn rejects_bad_fields() {
        assert!(matches!(register("", "a@b.c", "longenough").validated(), Err(AppError::Validation(_))));
        assert!(matches!(register("Ada", "not-an-email", "longenough").validated(), Err(AppError::Validation(_))));
        assert!(matches!(register("Ada", "a@@b", "longenough").validated(), Err(AppError::Validation(_))));
        assert!(matches!(register("Ada", "a b@c.d", "longenough").validated(), Err(AppError::Validation(_))));
        assert!(matches!(register("Ada", "a@b.c", "short").validated(), Err(AppError::Validation(_))));
    }

    #[test]
    fn role_defaults_to_none_and_parses_lowercase() {
        let r: RUserRegister = serde_json::from_str(
            r#"{"name":"Ada","email":"a@b.c","password":"longenough"}"#,
        )
        .unwrap();
        assert_eq!(r.role, None);

        let r: RUserRegister = serde_json::from_str(
            r#"{"name":"Ada","email":"a@b.c","password":"longenough","role":"tester"}"#,
        )
        .unwrap();
        assert_eq!(r.role, Some(Role::Tester));

        assert!(serde_json::from_str::<RUserRegister>(
            r#"{"name":"Ada","email":"a@b.c","password":"longenough","role":"overlord"}"#,
        )
        .is_err());
    }
}
