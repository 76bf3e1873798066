use std::sync::{Arc, RwLock};

use crate::models::{Application, Job, Session};

#[derive(Debug)]
struct Snapshot<T> {
    seq: u64,
    records: Vec<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Snapshot {
            seq: 0,
            records: Vec::new(),
        }
    }
}

/// In-memory holder for the records the external source pushes at us.
/// Snapshots are whole-set replacements tagged with a request sequence
/// number; a snapshot whose seq is not newer than the last applied one is
/// discarded regardless of arrival order (last-write-wins by recency).
/// Starts empty, which readers treat as "not yet loaded".
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    jobs: Arc<RwLock<Snapshot<Job>>>,
    applications: Arc<RwLock<Snapshot<Application>>>,
}

impl RecordStore {
    /// Returns false when the snapshot was stale and dropped.
    pub fn replace_jobs(&self, seq: u64, jobs: Vec<Job>) -> bool {
        let mut guard = self.jobs.write().unwrap();
        if seq <= guard.seq {
            tracing::warn!(
                "Discarding stale job snapshot seq={} (current seq={})",
                seq,
                guard.seq
            );
            return false;
        }
        tracing::info!("Applying job snapshot seq={} ({} jobs)", seq, jobs.len());
        *guard = Snapshot { seq, records: jobs };
        true
    }

    pub fn replace_applications(&self, seq: u64, applications: Vec<Application>) -> bool {
        let mut guard = self.applications.write().unwrap();
        if seq <= guard.seq {
            tracing::warn!(
                "Discarding stale application snapshot seq={} (current seq={})",
                seq,
                guard.seq
            );
            return false;
        }
        tracing::info!(
            "Applying application snapshot seq={} ({} applications)",
            seq,
            applications.len()
        );
        *guard = Snapshot {
            seq,
            records: applications,
        };
        true
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.read().unwrap().records.clone()
    }

    pub fn applications(&self) -> Vec<Application> {
        self.applications.read().unwrap().records.clone()
    }

    pub fn job_by_id(&self, id: &str) -> Option<Job> {
        self.jobs
            .read()
            .unwrap()
            .records
            .iter()
            .find(|job| job.id == id)
            .cloned()
    }
}

/// Owns the session lifecycle: set at login, cleared at logout. The feed
/// engine only ever sees the current value as a read-only argument.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    pub fn login(&self, session: Session) {
        tracing::info!("Session started for user {}", session.user_id);
        *self.current.write().unwrap() = Some(session);
    }

    /// Returns the session that was cleared, if any.
    pub fn logout(&self) -> Option<Session> {
        let cleared = self.current.write().unwrap().take();
        if let Some(session) = &cleared {
            tracing::info!("Session ended for user {}", session.user_id);
        }
        cleared
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceLevel;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company: None,
            location: String::new(),
            skills: vec![],
            salary: String::new(),
            experience_min: 0,
            experience_max: 1,
            experience_level: ExperienceLevel::Fresher,
            closing_date: None,
            is_active: true,
            created_at: None,
            apply_url: None,
        }
    }

    #[test]
    fn empty_store_reads_as_not_yet_loaded() {
        let store = RecordStore::default();
        assert!(store.jobs().is_empty());
        assert!(store.applications().is_empty());
        assert_eq!(store.job_by_id("j1"), None);
    }

    #[test]
    fn stale_snapshot_is_discarded_regardless_of_arrival_order() {
        let store = RecordStore::default();
        assert!(store.replace_jobs(2, vec![job("newer")]));
        // The older request finishes late; it must not win.
        assert!(!store.replace_jobs(1, vec![job("older")]));

        let jobs = store.jobs();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "newer");
    }

    #[test]
    fn equal_seq_does_not_reapply() {
        let store = RecordStore::default();
        assert!(store.replace_jobs(1, vec![job("a")]));
        assert!(!store.replace_jobs(1, vec![job("b")]));
        assert_eq!(store.jobs()[0].id, "a");
    }

    #[test]
    fn application_snapshots_follow_the_same_contract() {
        let store = RecordStore::default();
        let app = Application {
            user_id: "u1".to_string(),
            job_id: "j1".to_string(),
        };
        assert!(store.replace_applications(5, vec![app]));
        assert!(!store.replace_applications(3, vec![]));
        assert_eq!(store.applications().len(), 1);
    }

    #[test]
    fn session_lifecycle() {
        let sessions = SessionStore::default();
        assert_eq!(sessions.current(), None);

        sessions.login(Session {
            user_id: "u1".to_string(),
            name: "Asha".to_string(),
        });
        assert_eq!(sessions.current().unwrap().user_id, "u1");

        let cleared = sessions.logout();
        assert_eq!(cleared.unwrap().user_id, "u1");
        assert_eq!(sessions.current(), None);
        assert_eq!(sessions.logout(), None);
    }
}
