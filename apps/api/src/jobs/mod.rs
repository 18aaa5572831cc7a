pub mod handlers;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::clean_list;
use crate::models::job::{JobPosting, JobStatus, NewJobPosting};
use crate::models::user::User;

/// Builds a posting from the upload form. New postings are always active;
/// location and uploader default to the operator's.
pub fn build_job(new: NewJobPosting, operator: &User) -> Result<JobPosting, AppError> {
    let title = new.title.trim().to_string();
    let company = new.company.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if company.is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let location = new
        .location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| operator.location.clone());
    let uploaded_by = new
        .uploaded_by
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| operator.name.clone());

    Ok(JobPosting {
        id: Uuid::new_v4(),
        title,
        company,
        location,
        description: new.description.trim().to_string(),
        must_have_skills: clean_list(new.must_have_skills),
        good_to_have_skills: clean_list(new.good_to_have_skills),
        qualifications: clean_list(new.qualifications),
        experience: new.experience.trim().to_string(),
        uploaded_by,
        status: JobStatus::Active,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    fn operator() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Rahul Sharma".to_string(),
            email: "rahul.sharma@innomatics.in".to_string(),
            role: UserRole::PlacementTeam,
            location: "Hyderabad".to_string(),
        }
    }

    #[test]
    fn test_defaults_come_from_operator() {
        let job = build_job(
            NewJobPosting {
                title: "ML Engineer".to_string(),
                company: "Acme".to_string(),
                must_have_skills: vec!["Python".to_string(), " ".to_string()],
                ..Default::default()
            },
            &operator(),
        )
        .unwrap();
        assert_eq!(job.location, "Hyderabad");
        assert_eq!(job.uploaded_by, "Rahul Sharma");
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.must_have_skills, vec!["Python"]);
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = build_job(
            NewJobPosting {
                title: "   ".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            },
            &operator(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_must_have_is_accepted_at_creation() {
        let job = build_job(
            NewJobPosting {
                title: "Intern".to_string(),
                company: "Acme".to_string(),
                location: Some("Pune".to_string()),
                ..Default::default()
            },
            &operator(),
        )
        .unwrap();
        assert!(job.must_have_skills.is_empty());
        assert_eq!(job.location, "Pune");
    }
}
