use std::collections::HashSet;

use crate::models::{Application, Session};

/// Derive the set of job ids the session's user has applied to. Recomputed
/// whenever the application or job set changes; never mutated in place.
/// Anonymous sessions get the empty set, so no job is ever shown as applied.
pub fn applied_job_ids(
    session: Option<&Session>,
    applications: &[Application],
) -> HashSet<String> {
    let Some(session) = session else {
        return HashSet::new();
    };
    applications
        .iter()
        .filter(|app| app.user_id == session.user_id)
        .map(|app| app.job_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user_id: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            name: "Test User".to_string(),
        }
    }

    fn application(user_id: &str, job_id: &str) -> Application {
        Application {
            user_id: user_id.to_string(),
            job_id: job_id.to_string(),
        }
    }

    #[test]
    fn marks_exactly_the_users_applications() {
        let apps = vec![application("u1", "j1")];
        let applied = applied_job_ids(Some(&session("u1")), &apps);
        assert!(applied.contains("j1"));
        assert_eq!(applied.len(), 1);

        let other = applied_job_ids(Some(&session("u2")), &apps);
        assert!(other.is_empty());
    }

    #[test]
    fn duplicate_applications_collapse() {
        let apps = vec![
            application("u1", "j1"),
            application("u1", "j1"),
            application("u1", "j2"),
        ];
        let applied = applied_job_ids(Some(&session("u1")), &apps);
        assert_eq!(applied.len(), 2);
    }

    #[test]
    fn anonymous_session_gets_empty_overlay() {
        let apps = vec![application("u1", "j1")];
        assert!(applied_job_ids(None, &apps).is_empty());
    }

    #[test]
    fn not_yet_loaded_applications_are_fine() {
        assert!(applied_job_ids(Some(&session("u1")), &[]).is_empty());
    }
}
