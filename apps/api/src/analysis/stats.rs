use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::models::job::{JobPosting, JobStatus};
use crate::models::result::{MatchResult, Verdict};
use crate::models::resume::CandidateResume;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStat {
    pub location: String,
    pub jobs: usize,
    pub resumes: usize,
}

/// Headline numbers for the dashboard view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub active_jobs: usize,
    pub total_analyses: usize,
    pub high_matches: usize,
    pub locations: Vec<LocationStat>,
}

/// Summary cards above the results list. Always computed over every result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsSummary {
    pub total_analyses: usize,
    /// Percent of results with a High verdict, rounded.
    pub high_match_rate: u32,
    pub average_score: u32,
    pub unique_candidates: usize,
}

/// Per-resume figures shown on the resume list.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSummary {
    #[serde(flatten)]
    pub resume: CandidateResume,
    pub analysis_count: usize,
    /// 0 when the resume has never been analyzed.
    pub highest_score: u32,
}

pub fn dashboard_stats(
    jobs: &[JobPosting],
    resumes: &[CandidateResume],
    results: &[MatchResult],
) -> DashboardStats {
    let mut by_location: BTreeMap<&str, LocationStat> = BTreeMap::new();
    for job in jobs {
        location_entry(&mut by_location, &job.location).jobs += 1;
    }
    for resume in resumes {
        location_entry(&mut by_location, &resume.location).resumes += 1;
    }

    DashboardStats {
        active_jobs: jobs.iter().filter(|j| j.status == JobStatus::Active).count(),
        total_analyses: results.len(),
        high_matches: count_high(results),
        locations: by_location.into_values().collect(),
    }
}

fn location_entry<'a, 'm>(
    map: &'m mut BTreeMap<&'a str, LocationStat>,
    location: &'a str,
) -> &'m mut LocationStat {
    map.entry(location).or_insert_with(|| LocationStat {
        location: location.to_string(),
        jobs: 0,
        resumes: 0,
    })
}

pub fn results_summary(results: &[MatchResult]) -> ResultsSummary {
    let total = results.len();
    if total == 0 {
        return ResultsSummary {
            total_analyses: 0,
            high_match_rate: 0,
            average_score: 0,
            unique_candidates: 0,
        };
    }

    let score_sum: u64 = results.iter().map(|r| u64::from(r.relevance_score)).sum();
    let unique: HashSet<_> = results.iter().map(|r| r.resume_id).collect();

    ResultsSummary {
        total_analyses: total,
        high_match_rate: (count_high(results) as f64 / total as f64 * 100.0).round() as u32,
        average_score: (score_sum as f64 / total as f64).round() as u32,
        unique_candidates: unique.len(),
    }
}

pub fn summarize_resumes(
    resumes: Vec<CandidateResume>,
    results: &[MatchResult],
) -> Vec<ResumeSummary> {
    resumes
        .into_iter()
        .map(|resume| {
            let own = results.iter().filter(|r| r.resume_id == resume.id);
            let (analysis_count, highest_score) = own.fold((0, 0), |(count, best), r| {
                (count + 1, best.max(r.relevance_score))
            });
            ResumeSummary {
                resume,
                analysis_count,
                highest_score,
            }
        })
        .collect()
}

fn count_high(results: &[MatchResult]) -> usize {
    results.iter().filter(|r| r.verdict == Verdict::High).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{job_with, resume_with, sample_job, sample_resume};
    use crate::scoring::score_match;

    fn scored(resume: &CandidateResume, job: &JobPosting, semantic: f64) -> MatchResult {
        score_match(
            &resume.skills,
            &job.must_have_skills,
            &job.good_to_have_skills,
            semantic,
        )
        .unwrap()
        .into_result(resume.id, job.id)
    }

    #[test]
    fn test_results_summary_empty_is_zero() {
        assert_eq!(
            results_summary(&[]),
            ResultsSummary {
                total_analyses: 0,
                high_match_rate: 0,
                average_score: 0,
                unique_candidates: 0,
            }
        );
    }

    #[test]
    fn test_results_summary_rates_and_average() {
        let strong = resume_with("Arjun Rao", "Bangalore", &["React", "Node.js"]);
        let weak = sample_resume();
        let fs = job_with("Full Stack Developer", "Bangalore", &["React", "Node.js"], &[]);
        let ds = sample_job();

        let results = vec![
            scored(&strong, &fs, 90.0), // 90, High
            scored(&weak, &ds, 75.0),   // 59, Low
            scored(&weak, &ds, 75.0),   // 59, Low
        ];
        let summary = results_summary(&results);
        assert_eq!(summary.total_analyses, 3);
        assert_eq!(summary.high_match_rate, 33);
        // (90 + 59 + 59) / 3 = 69.33
        assert_eq!(summary.average_score, 69);
        assert_eq!(summary.unique_candidates, 2);
    }

    #[test]
    fn test_dashboard_counts_active_jobs_and_locations() {
        let mut paused = job_with("Data Engineer", "Pune", &["Spark"], &[]);
        paused.status = JobStatus::Paused;
        let jobs = vec![sample_job(), paused];
        let resumes = vec![sample_resume(), resume_with("Kavya Iyer", "Pune", &[])];

        let stats = dashboard_stats(&jobs, &resumes, &[]);
        assert_eq!(stats.active_jobs, 1);
        assert_eq!(stats.total_analyses, 0);
        assert_eq!(
            stats.locations,
            vec![
                LocationStat {
                    location: "Hyderabad".to_string(),
                    jobs: 1,
                    resumes: 1
                },
                LocationStat {
                    location: "Pune".to_string(),
                    jobs: 1,
                    resumes: 1
                },
            ]
        );
    }

    #[test]
    fn test_resume_summary_tracks_count_and_best() {
        let resume = sample_resume();
        let untouched = resume_with("Kavya Iyer", "Pune", &[]);
        let job = sample_job();
        let results = vec![scored(&resume, &job, 60.0), scored(&resume, &job, 89.0)];

        let summaries = summarize_resumes(vec![resume, untouched], &results);
        assert_eq!(summaries[0].analysis_count, 2);
        // 48 * 0.6 + 89 * 0.4 = 64.4
        assert_eq!(summaries[0].highest_score, 64);
        assert_eq!(summaries[1].analysis_count, 0);
        assert_eq!(summaries[1].highest_score, 0);
    }
}
