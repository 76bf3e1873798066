use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::expiry;
use crate::models::{ExperienceLevel, Job};

/// The four feed tabs. They do not partition the job set: an inactive,
/// unexpired job shows under `expired` only, and an expired fresher job
/// shows under `expired` but not `fresher`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobTab {
    #[default]
    All,
    Fresher,
    Experienced,
    Expired,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Empty term matches everything; otherwise case-insensitive substring
/// match against title, company name, or any skill token.
fn matches_search(job: &Job, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contains_ignore_case(&job.title, term)
        || contains_ignore_case(job.company_name(), term)
        || job.skills.iter().any(|skill| contains_ignore_case(skill, term))
}

fn matches_location(job: &Job, term: &str) -> bool {
    term.is_empty() || contains_ignore_case(&job.location, term)
}

/// Select the jobs visible on `tab` for the given search and location
/// terms. Input order is preserved; the output is always a subset of the
/// input and the call is pure, so re-running with the same arguments gives
/// the same rows.
pub fn filter_jobs<'a>(
    jobs: &'a [Job],
    search: &str,
    location: &str,
    tab: JobTab,
    now: DateTime<Utc>,
) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| {
            if !matches_search(job, search) || !matches_location(job, location) {
                return false;
            }
            let status = expiry::classify(job.closing_date, now);
            match tab {
                JobTab::All => !status.expired && job.is_active,
                JobTab::Fresher => {
                    job.experience_level == ExperienceLevel::Fresher && !status.expired
                }
                JobTab::Experienced => {
                    job.experience_level == ExperienceLevel::Experienced && !status.expired
                }
                JobTab::Expired => status.expired || !job.is_active,
            }
        })
        .collect()
}
