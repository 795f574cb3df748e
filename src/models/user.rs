//! User model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Source platform a user was first seen on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    #[default]
    Yandex,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Yandex => "YANDEX",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YANDEX" => Ok(Platform::Yandex),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: String,
    pub group: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub user_id: String,
    pub group: String,
    pub platform: Platform,
}

impl CreateUserRequest {
    /// Request for a user seen for the first time, with no group assigned yet
    pub fn first_contact(user_id: impl Into<String>, platform: Platform) -> Self {
        Self {
            user_id: user_id.into(),
            group: String::new(),
            platform,
        }
    }
}
