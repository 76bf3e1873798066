use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Experience bracket a job posting targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Experienced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Opaque company identifier
    pub id: String,
    /// Display name, required and non-empty
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub logo: Option<String>,
    pub location: Option<String>,
}

/// A job posting joined with its owning company, as supplied by the
/// record source. Timestamps that failed to parse at ingestion are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque job identifier
    pub id: String,
    /// Job title
    pub title: String,
    /// Owning company; `None` when the join was missing upstream
    pub company: Option<Company>,
    /// Job location as free text
    pub location: String,
    /// Skill tokens, parsed once at ingestion from the comma-joined source field
    pub skills: Vec<String>,
    /// Salary as display text
    pub salary: String,
    /// Minimum years of experience
    pub experience_min: u32,
    /// Maximum years of experience (>= experience_min)
    pub experience_max: u32,
    pub experience_level: ExperienceLevel,
    /// Application deadline; `None` means the source value was malformed
    pub closing_date: Option<DateTime<Utc>>,
    /// Administrator-controlled visibility flag
    pub is_active: bool,
    /// When the posting was created; `None` means malformed source value
    pub created_at: Option<DateTime<Utc>>,
    /// External application URL, if the company uses one
    pub apply_url: Option<String>,
}

impl Job {
    /// Company name for matching and display; empty when the join is missing.
    pub fn company_name(&self) -> &str {
        self.company.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

/// Links a user to a job they applied to. Duplicate pairs are allowed
/// upstream and collapse to a single applied marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Id of the applying user
    pub user_id: String,
    /// Id of the job applied to
    pub job_id: String,
}

/// Authenticated user identity, set at login and cleared at logout.
/// Read-only input to the overlay; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Id of the signed-in user
    pub user_id: String,
    /// Display name
    pub name: String,
}

/// Job record as shaped by the external API layer: skills arrive as a
/// comma-joined string and timestamps as raw strings.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobSubmission {
    pub id: String,
    pub title: String,
    pub company: Option<Company>,
    #[serde(default)]
    pub location: String,
    /// Comma-joined skill tokens, e.g. "React, Node.js"
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub experience_min: u32,
    #[serde(default)]
    pub experience_max: u32,
    pub experience_level: ExperienceLevel,
    /// RFC 3339 timestamp; anything unparseable marks the job expired
    pub closing_date: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// RFC 3339 timestamp; anything unparseable yields a zero age
    pub created_at: Option<String>,
    pub apply_url: Option<String>,
}

fn default_is_active() -> bool {
    true
}

/// Parse an RFC 3339 timestamp, failing toward `None` rather than erroring.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!("Discarding unparseable timestamp {:?}: {}", raw, e);
            None
        }
    }
}

/// Split a comma-joined skills field into trimmed, non-empty tokens,
/// preserving source order.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl From<JobSubmission> for Job {
    fn from(sub: JobSubmission) -> Self {
        Job {
            id: sub.id,
            title: sub.title,
            company: sub.company,
            location: sub.location,
            skills: parse_skills(&sub.skills),
            salary: sub.salary,
            experience_min: sub.experience_min,
            experience_max: sub.experience_max,
            experience_level: sub.experience_level,
            closing_date: parse_timestamp(sub.closing_date.as_deref()),
            is_active: sub.is_active,
            created_at: parse_timestamp(sub.created_at.as_deref()),
            apply_url: sub.apply_url,
        }
    }
}
