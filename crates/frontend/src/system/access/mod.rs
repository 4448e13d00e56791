//! Access levels attached to routes and resolved from the login user.

pub mod guard;

use serde::{Deserialize, Serialize};

/// Required privilege tag on a route, and the resolved privilege of a
/// session. Wire values follow the backend's role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessLevel {
    #[serde(rename = "notLogin")]
    NotLogin,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "admin")]
    Admin,
}

impl AccessLevel {
    pub fn as_wire(&self) -> &'static str {
        match self {
            AccessLevel::NotLogin => "notLogin",
            AccessLevel::User => "user",
            AccessLevel::Admin => "admin",
        }
    }

    /// Maps a backend role string to an access level. Unknown roles
    /// (including banned accounts) resolve to `NotLogin`.
    pub fn from_role(role: &str) -> Self {
        match role {
            "user" => AccessLevel::User,
            "admin" => AccessLevel::Admin,
            _ => AccessLevel::NotLogin,
        }
    }
}

/// Whether `role` satisfies a route's `access` requirement.
///
/// The gates are exact-kind checks, not a privilege-order comparison: a
/// `User` gate rejects only `NotLogin`, an `Admin` gate requires exactly
/// `Admin`. The menu and the navigation guard both rely on this shape.
pub fn can_access(role: AccessLevel, need: Option<AccessLevel>) -> bool {
    match need {
        Some(AccessLevel::User) => role != AccessLevel::NotLogin,
        Some(AccessLevel::Admin) => role == AccessLevel::Admin,
        _ => true,
    }
}
