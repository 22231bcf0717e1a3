//! Users, roles and permissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .unwrap_or('U')
            .to_uppercase()
            .to_string()
    }
}

impl Record for User {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    /// Left empty on edit to keep the current password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub roles: Vec<String>,
}

impl From<&User> for UserInput {
    fn from(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            email: u.email.clone(),
            password: None,
            roles: u.roles.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub users_count: Option<u64>,
}

impl Role {
    pub fn permission_ids(&self) -> Vec<u64> {
        self.permissions.iter().map(|p| p.id).collect()
    }
}

impl Record for Role {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleInput {
    pub name: String,
    pub permissions: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_initial() {
        let user = User {
            id: 1,
            name: "ada".into(),
            email: "ada@example.com".into(),
            roles: vec![],
            created_at: None,
        };
        assert_eq!(user.initial(), "A");

        let nameless = User { name: String::new(), ..user };
        assert_eq!(nameless.initial(), "U");
    }

    #[test]
    fn test_user_input_skips_empty_password() {
        let input = UserInput {
            name: "a".into(),
            email: "a@b.c".into(),
            password: None,
            roles: vec!["editor".into()],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("password").is_none());
    }
}
