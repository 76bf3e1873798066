use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Job;

/// Supported share targets. Unknown platform strings deserialize to
/// `Other`, which gets the clipboard fallback, so adding a platform is a
/// variant addition rather than a parsing change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Whatsapp,
    Telegram,
    Instagram,
    #[default]
    #[serde(other)]
    Other,
}

/// What the caller should do with the payload: open a deep link in a new
/// window, or copy it to the clipboard and tell the user to paste it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "action", content = "payload", rename_all = "kebab-case")]
pub enum ShareAction {
    OpenUrl(String),
    Copy(String),
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Build the share payload for one job. Constructs strings only; the
/// caller performs the open/copy and surfaces any clipboard notice.
pub fn build_share(platform: SharePlatform, job: &Job, origin: &str) -> ShareAction {
    let origin = origin.trim_end_matches('/');
    let job_url = format!("{}/jobs/{}", origin, job.id);
    let text = format!(
        "Check out this job: {} at {}",
        job.title,
        job.company_name()
    );

    match platform {
        SharePlatform::Whatsapp => ShareAction::OpenUrl(format!(
            "https://wa.me/?text={}",
            encode(&format!("{} {}", text, job_url))
        )),
        SharePlatform::Telegram => ShareAction::OpenUrl(format!(
            "https://t.me/share/url?url={}&text={}",
            encode(&job_url),
            encode(&text)
        )),
        // Instagram has no share URL scheme; hand the caller the plain
        // detail link to copy. Same fallback for anything unrecognized.
        SharePlatform::Instagram | SharePlatform::Other => ShareAction::Copy(job_url),
    }
}
