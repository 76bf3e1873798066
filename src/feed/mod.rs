//! The job feed engine: pure, synchronous classification and filtering
//! over records supplied by the store. Every function here recomputes its
//! result from its arguments; nothing holds state between calls.

pub mod expiry;
pub mod filter;
pub mod overlay;
pub mod recency;
pub mod share;

pub use expiry::{classify, ExpiryStatus};
pub use filter::{filter_jobs, JobTab};
pub use overlay::applied_job_ids;
pub use recency::time_ago;
pub use share::{build_share, ShareAction, SharePlatform};
