pub mod job;
pub mod result;
pub mod resume;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Accepts either a JSON array of strings or a single comma-separated string.
/// Items are trimmed and blank items dropped in both forms.
pub fn deserialize_list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrCsv {
        List(Vec<String>),
        Csv(String),
    }

    let items = match ListOrCsv::deserialize(deserializer)? {
        ListOrCsv::List(items) => items,
        ListOrCsv::Csv(text) => split_csv(&text),
    };
    Ok(clean_list(items))
}

/// Splits comma-separated form text into trimmed, non-empty items.
pub fn split_csv(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims every item and drops the blank ones, preserving order.
pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use super::job::{JobPosting, JobStatus};
    use super::resume::CandidateResume;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub(crate) fn resume_with(name: &str, location: &str, skills: &[&str]) -> CandidateResume {
        CandidateResume {
            id: Uuid::new_v4(),
            file_name: format!("{}.pdf", name.to_lowercase().replace(' ', "_")),
            student_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: String::new(),
            location: location.to_string(),
            file_size: 2048,
            skills: strings(skills),
            experience: String::new(),
            education: String::new(),
            projects: vec![],
            certifications: vec![],
            uploaded_at: Utc::now(),
        }
    }

    pub(crate) fn job_with(
        title: &str,
        location: &str,
        must_have: &[&str],
        good_to_have: &[&str],
    ) -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "TechCorp India".to_string(),
            location: location.to_string(),
            description: String::new(),
            must_have_skills: strings(must_have),
            good_to_have_skills: strings(good_to_have),
            qualifications: vec![],
            experience: "2-4 years".to_string(),
            uploaded_by: "Placement Team".to_string(),
            status: JobStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn sample_resume() -> CandidateResume {
        resume_with("Priya Nair", "Hyderabad", &["Python", "SQL"])
    }

    pub(crate) fn sample_job() -> JobPosting {
        job_with(
            "Data Scientist",
            "Hyderabad",
            &["Python", "Machine Learning", "Statistics", "SQL", "Pandas"],
            &["TensorFlow", "PyTorch", "AWS", "Docker", "Kubernetes"],
        )
    }
}
