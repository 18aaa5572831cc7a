use chrono::{DateTime, TimeZone, Utc};
use tracing::info;
use uuid::Uuid;

use super::Store;
use crate::models::job::{JobPosting, JobStatus};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn posted_at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The two demo postings the dashboard starts with.
pub fn demo_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: Uuid::new_v4(),
            title: "Data Scientist".to_string(),
            company: "TechCorp India".to_string(),
            location: "Hyderabad".to_string(),
            description: "Looking for a Data Scientist with expertise in machine learning, Python, and statistical analysis.".to_string(),
            must_have_skills: strings(&["Python", "Machine Learning", "Statistics", "SQL", "Pandas"]),
            good_to_have_skills: strings(&["TensorFlow", "PyTorch", "AWS", "Docker", "Kubernetes"]),
            qualifications: strings(&["B.Tech/M.Tech in CS/IT", "Statistics/Mathematics background"]),
            experience: "2-4 years".to_string(),
            uploaded_by: "Placement Team Hyderabad".to_string(),
            status: JobStatus::Active,
            created_at: posted_at(15, 10, 0),
        },
        JobPosting {
            id: Uuid::new_v4(),
            title: "Full Stack Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: "Bangalore".to_string(),
            description: "Full stack developer role with React, Node.js, and cloud technologies.".to_string(),
            must_have_skills: strings(&["React", "Node.js", "JavaScript", "MongoDB", "Express"]),
            good_to_have_skills: strings(&["TypeScript", "Next.js", "AWS", "Redis", "GraphQL"]),
            qualifications: strings(&["B.Tech/B.E in Computer Science"]),
            experience: "1-3 years".to_string(),
            uploaded_by: "Placement Team Bangalore".to_string(),
            status: JobStatus::Active,
            created_at: posted_at(16, 9, 30),
        },
    ]
}

pub fn seed_demo_data(store: &Store) {
    let jobs = demo_jobs();
    let count = jobs.len();
    for job in jobs {
        store.insert_job(job);
    }
    info!("Seeded {count} demo job postings");
}
