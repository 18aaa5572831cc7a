pub mod handlers;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::clean_list;
use crate::models::resume::{CandidateResume, NewResume};

/// Builds a resume record from the upload form.
pub fn build_resume(new: NewResume) -> Result<CandidateResume, AppError> {
    let student_name = new.student_name.trim().to_string();
    let email = new.email.trim().to_string();
    if student_name.is_empty() {
        return Err(AppError::Validation("student_name cannot be empty".to_string()));
    }
    if email.is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    Ok(CandidateResume {
        id: Uuid::new_v4(),
        file_name: new.file_name.trim().to_string(),
        student_name,
        email,
        phone: new.phone.trim().to_string(),
        location: new.location.trim().to_string(),
        file_size: new.file_size,
        skills: clean_list(new.skills),
        experience: new.experience.trim().to_string(),
        education: new.education.trim().to_string(),
        projects: clean_list(new.projects),
        certifications: clean_list(new.certifications),
        uploaded_at: Utc::now(),
    })
}
