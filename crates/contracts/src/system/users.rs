use serde::{Deserialize, Serialize};

use crate::shared::validation::{self, ValidationError, ValidationResult};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Staff role. Ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Staff,
    Manager,
    Admin,
}

impl UserRole {
    pub fn all() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::Manager, UserRole::Staff]
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Staff => "staff",
            UserRole::Manager => "manager",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Staff => "Staff",
            UserRole::Manager => "Manager",
            UserRole::Admin => "Admin",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "staff" => Some(UserRole::Staff),
            "manager" => Some(UserRole::Manager),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// True when this role grants at least the `required` privileges
    pub fn satisfies(&self, required: UserRole) -> bool {
        *self >= required
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

impl CreateUserDto {
    pub fn validate(&self) -> ValidationResult {
        validation::require_email(&self.email, "Email")?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::Rule(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

impl UpdateUserDto {
    pub fn validate(&self) -> ValidationResult {
        validation::require_email(&self.email, "Email")
    }
}

/// Status filter for the users list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

/// Users list filter, persisted in the query string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserFilter {
    pub search: String,
    pub role: Option<UserRole>,
    pub status: UserStatusFilter,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.role.is_none() && self.status == UserStatusFilter::All
    }

    pub fn matches(&self, user: &User) -> bool {
        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let in_email = user.email.to_lowercase().contains(&query);
            let in_name = user
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query);
            if !in_email && !in_name {
                return false;
            }
        }
        if let Some(role) = self.role {
            if user.role != role {
                return false;
            }
        }
        match self.status {
            UserStatusFilter::All => true,
            UserStatusFilter::Active => user.is_active,
            UserStatusFilter::Inactive => !user.is_active,
        }
    }
}

pub fn filter_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    users.iter().filter(|u| filter.matches(u)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: Option<&str>, role: UserRole, active: bool) -> User {
        User {
            id: email.to_string(),
            email: email.to_string(),
            full_name: name.map(str::to_string),
            role,
            is_active: active,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_role_ordering() {
        assert!(UserRole::Admin.satisfies(UserRole::Manager));
        assert!(UserRole::Manager.satisfies(UserRole::Manager));
        assert!(!UserRole::Staff.satisfies(UserRole::Manager));
        assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("owner"), None);
    }

    #[test]
    fn test_filter_users() {
        let users = vec![
            user("ann@shop.test", Some("Ann Lee"), UserRole::Admin, true),
            user("bob@shop.test", Some("Bob Stone"), UserRole::Staff, false),
            user("cy@shop.test", None, UserRole::Staff, true),
        ];

        let by_name = UserFilter { search: "stone".into(), ..Default::default() };
        assert_eq!(filter_users(&users, &by_name).len(), 1);

        let staff_active = UserFilter {
            role: Some(UserRole::Staff),
            status: UserStatusFilter::Active,
            ..Default::default()
        };
        let result = filter_users(&users, &staff_active);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].email, "cy@shop.test");

        assert_eq!(filter_users(&users, &UserFilter::default()).len(), 3);
    }

    #[test]
    fn test_create_user_validation() {
        let mut dto = CreateUserDto {
            email: "new@shop.test".into(),
            password: "short".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.password = "long-enough".into();
        assert!(dto.validate().is_ok());
        dto.email = "broken".into();
        assert_eq!(dto.validate(), Err(ValidationError::InvalidEmail("Email")));
    }
}
