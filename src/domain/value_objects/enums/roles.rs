use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid role value: {0}")]
pub struct InvalidRole(pub i16);

/// Stored as a SMALLINT: 0 for USER, 1 for ADMIN.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "i16", into = "i16")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        };
        write!(f, "{}", role)
    }
}

impl From<Role> for i16 {
    fn from(role: Role) -> Self {
        match role {
            Role::User => 0,
            Role::Admin => 1,
        }
    }
}

impl TryFrom<i16> for Role {
    type Error = InvalidRole;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::User),
            1 => Ok(Role::Admin),
            other => Err(InvalidRole(other)),
        }
    }
}
