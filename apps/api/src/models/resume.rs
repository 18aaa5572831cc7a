use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::deserialize_list_or_csv;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResume {
    pub id: Uuid,
    pub file_name: String,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub file_size: u64,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Payload of the resume upload form. List fields accept comma-separated text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewResume {
    #[serde(default)]
    pub file_name: String,
    pub student_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default, deserialize_with = "deserialize_list_or_csv")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default, deserialize_with = "deserialize_list_or_csv")]
    pub projects: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_list_or_csv")]
    pub certifications: Vec<String>,
}
