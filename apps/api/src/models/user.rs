use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    PlacementTeam,
    Student,
    Admin,
}

impl FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placement_team" => Ok(UserRole::PlacementTeam),
            "student" => Ok(UserRole::Student),
            "admin" => Ok(UserRole::Admin),
            other => bail!("OPERATOR_ROLE must be placement_team, student or admin, got '{other}'"),
        }
    }
}

/// The operator driving the dashboard session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub location: String,
}
