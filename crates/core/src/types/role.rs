//! Customer role enumeration.

use serde::{Deserialize, Serialize};

/// Customer role gating access to administrative operations.
///
/// Roles form a closed set: anything other than these two values is
/// unrepresentable, so role checks never compare free-text strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper. Can create and list their own orders.
    #[default]
    Customer,
    /// Store manager. Can additionally list all orders, mark orders
    /// paid, change roles, list customers, and update products.
    Manager,
}

impl Role {
    /// Whether this role grants access to manager-only operations.
    #[must_use]
    pub const fn is_manager(self) -> bool {
        matches!(self, Self::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Manager => write!(f, "manager"),
        }
    }
}

/// Error returned when parsing an unknown role name.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "manager" => Ok(Self::Manager),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_from_str_agree() {
        for role in [Role::Customer, Role::Manager] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("MANAGER".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"manager\"");

        let parsed: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(parsed, Role::Customer);
    }

    #[test]
    fn test_is_manager() {
        assert!(Role::Manager.is_manager());
        assert!(!Role::Customer.is_manager());
    }

    #[test]
    fn test_default_is_customer() {
        assert_eq!(Role::default(), Role::Customer);
    }
}
