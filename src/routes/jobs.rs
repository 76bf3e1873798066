use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::feed::{
    expiry, filter::filter_jobs, overlay, recency,
    share::{build_share, ShareAction, SharePlatform},
    JobTab,
};
use crate::models::{Application, Job, JobSubmission};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// Free-text search over job title, company name and skill tokens
    #[serde(default)]
    search: String,
    /// Location substring filter
    #[serde(default)]
    location: String,
    /// Active tab: all | fresher | experienced | expired. Defaults to all.
    #[serde(default)]
    tab: JobTab,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedItem {
    /// The job record as supplied by the record source
    pub job: Job,
    /// Whether the signed-in user has applied to this job
    pub applied: bool,
    /// Coarse human-readable posting age, e.g. "2 days ago"
    pub posted: String,
    /// True once the closing date has passed
    pub expired: bool,
    /// True when the job closed within the last 48 hours
    pub expired_recently: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedResponse {
    /// Jobs visible on the requested tab, in record-source order
    pub jobs: Vec<FeedItem>,
    /// Number of jobs returned
    pub total: usize,
    /// Tab the results were computed for
    pub tab: JobTab,
}

fn feed_item(job: &Job, applied: &std::collections::HashSet<String>, now: chrono::DateTime<Utc>) -> FeedItem {
    let status = expiry::classify(job.closing_date, now);
    FeedItem {
        applied: applied.contains(&job.id),
        posted: recency::time_ago(job.created_at, now),
        expired: status.expired,
        expired_recently: status.expired_recently,
        job: job.clone(),
    }
}

/// List the jobs visible on a tab, with applied status and posting age
#[utoipa::path(
    get,
    path = "/jobs",
    params(FeedQuery),
    responses(
        (status = 200, description = "Filtered job feed for the active tab", body = FeedResponse)
    ),
    description = "Applies the search, location and tab predicates to the current job snapshot. An empty snapshot (records not yet loaded) yields an empty feed, not an error."
)]
#[tracing::instrument(skip(state, query), fields(tab = ?query.tab))]
pub async fn list_jobs(
    Query(query): Query<FeedQuery>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let now = Utc::now();
    let jobs = state.records.jobs();
    let applications = state.records.applications();
    let session = state.sessions.current();
    let applied = overlay::applied_job_ids(session.as_ref(), &applications);

    let visible = filter_jobs(&jobs, &query.search, &query.location, query.tab, now);
    let items: Vec<FeedItem> = visible
        .into_iter()
        .map(|job| feed_item(job, &applied, now))
        .collect();

    tracing::info!("Feed returned {} of {} jobs", items.len(), jobs.len());
    (
        StatusCode::OK,
        Json(FeedResponse {
            total: items.len(),
            tab: query.tab,
            jobs: items,
        }),
    )
}

/// Fetch one job with its applied status and posting age
#[utoipa::path(
    get,
    path = "/jobs/{id}",
    params(("id" = String, Path, description = "Job identifier")),
    responses(
        (status = 200, description = "Job detail", body = FeedItem),
        (status = 404, description = "No job with this id")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_job(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FeedItem>, AppError> {
    let job = state
        .records
        .job_by_id(&id)
        .ok_or_else(|| AppError::JobNotFound(id.clone()))?;

    let now = Utc::now();
    let session = state.sessions.current();
    let applications = state.records.applications();
    let applied = overlay::applied_job_ids(session.as_ref(), &applications);
    Ok(Json(feed_item(&job, &applied, now)))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShareQuery {
    /// Target platform: whatsapp | telegram | instagram. Anything else
    /// gets the clipboard fallback.
    #[serde(default)]
    platform: SharePlatform,
    /// Origin of the site hosting the job detail pages, e.g. https://site.example
    origin: Option<String>,
}

/// Build the share action for a job on a given platform
#[utoipa::path(
    get,
    path = "/jobs/{id}/share",
    params(("id" = String, Path, description = "Job identifier"), ShareQuery),
    responses(
        (status = 200, description = "Deep link to open, or payload to copy", body = ShareAction),
        (status = 404, description = "No job with this id"),
        (status = 422, description = "Missing origin parameter")
    )
)]
#[tracing::instrument(skip(state, query), fields(platform = ?query.platform))]
pub async fn share_job(
    Path(id): Path<String>,
    Query(query): Query<ShareQuery>,
    State(state): State<AppState>,
) -> Result<Json<ShareAction>, AppError> {
    let job = state
        .records
        .job_by_id(&id)
        .ok_or_else(|| AppError::JobNotFound(id.clone()))?;
    let origin = query.origin.as_deref().filter(|o| !o.is_empty()).ok_or_else(|| {
        AppError::UnprocessableEntity("origin query parameter is required".to_string())
    })?;

    Ok(Json(build_share(query.platform, &job, origin)))
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SnapshotQuery {
    /// Request sequence number. Snapshots not newer than the last applied
    /// one are discarded (last-write-wins by request recency).
    seq: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SnapshotResponse {
    /// False when the snapshot was stale and dropped
    pub accepted: bool,
    /// Sequence number the caller sent
    pub seq: u64,
}

/// Replace the job snapshot from the record source
#[utoipa::path(
    put,
    path = "/jobs",
    params(SnapshotQuery),
    request_body = Vec<JobSubmission>,
    responses(
        (status = 200, description = "Snapshot applied or discarded as stale", body = SnapshotResponse)
    )
)]
#[tracing::instrument(skip(state, submissions), fields(seq = query.seq, count = submissions.len()))]
pub async fn replace_jobs(
    Query(query): Query<SnapshotQuery>,
    State(state): State<AppState>,
    Json(submissions): Json<Vec<JobSubmission>>,
) -> impl IntoResponse {
    let jobs: Vec<Job> = submissions.into_iter().map(Job::from).collect();
    let accepted = state.records.replace_jobs(query.seq, jobs);
    (
        StatusCode::OK,
        Json(SnapshotResponse {
            accepted,
            seq: query.seq,
        }),
    )
}

/// Replace the application snapshot for the record source
#[utoipa::path(
    put,
    path = "/applications",
    params(SnapshotQuery),
    request_body = Vec<Application>,
    responses(
        (status = 200, description = "Snapshot applied or discarded as stale", body = SnapshotResponse)
    )
)]
#[tracing::instrument(skip(state, applications), fields(seq = query.seq, count = applications.len()))]
pub async fn replace_applications(
    Query(query): Query<SnapshotQuery>,
    State(state): State<AppState>,
    Json(applications): Json<Vec<Application>>,
) -> impl IntoResponse {
    let accepted = state.records.replace_applications(query.seq, applications);
    (
        StatusCode::OK,
        Json(SnapshotResponse {
            accepted,
            seq: query.seq,
        }),
    )
}
