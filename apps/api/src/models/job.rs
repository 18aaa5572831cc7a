use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::deserialize_list_or_csv;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Paused,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Paused => "paused",
            JobStatus::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub must_have_skills: Vec<String>,
    pub good_to_have_skills: Vec<String>,
    pub qualifications: Vec<String>,
    pub experience: String,
    pub uploaded_by: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload of the job upload form. `location` and `uploaded_by` fall back to the operator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_list_or_csv")]
    pub must_have_skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list_or_csv")]
    pub good_to_have_skills: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list_or_csv")]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub uploaded_by: Option<String>,
}
