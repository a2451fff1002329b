//! In-memory wizard session store.
//!
//! Each in-progress planning flow is one [`WizardSession`] keyed by an
//! opaque UUID and owned by the user who started it. All access goes
//! through [`SessionStore`], which enforces the owner check and idle
//! TTL in one place: a lookup with the wrong owner, an unknown id, or
//! an expired session all come back as `None`, so callers cannot
//! distinguish the cases (no existence leak).
//!
//! Sessions live only in process memory. A restart discards them; only
//! confirmed trips are durable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;
use wayfarer_core::types::DbId;
use wayfarer_core::wizard::WizardState;

/// One in-progress planning flow.
#[derive(Debug)]
pub struct WizardSession {
    pub id: Uuid,
    pub owner_id: DbId,
    pub state: WizardState,
    /// Updated on every access; drives TTL expiry.
    last_active: Instant,
}

/// Owner-checked, TTL-bounded map of live wizard sessions.
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, WizardSession>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Start a fresh session for the given owner and return its id.
    pub async fn create(&self, owner_id: DbId) -> Uuid {
        let id = Uuid::new_v4();
        let session = WizardSession {
            id,
            owner_id,
            state: WizardState::new(),
            last_active: Instant::now(),
        };
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Run `f` against the session under the write lock.
    ///
    /// Returns `None` when the session does not exist, has expired, or
    /// is owned by a different user. Touches `last_active` on success.
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        owner_id: DbId,
        f: impl FnOnce(&mut WizardSession) -> T,
    ) -> Option<T> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        if session.owner_id != owner_id || session.last_active.elapsed() > self.ttl {
            return None;
        }
        session.last_active = Instant::now();
        Some(f(session))
    }

    /// Clone out the accumulated state without holding the lock.
    pub async fn snapshot(&self, id: Uuid, owner_id: DbId) -> Option<WizardState> {
        self.with_session(id, owner_id, |s| s.state.clone()).await
    }

    /// Discard a session (after confirmation). Owner-checked.
    pub async fn remove(&self, id: Uuid, owner_id: DbId) -> Option<WizardSession> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(&id) {
            Some(s) if s.owner_id == owner_id => sessions.remove(&id),
            _ => None,
        }
    }

    /// Drop every session idle longer than the TTL. Returns the number purged.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.last_active.elapsed() <= self.ttl);
        before - sessions.len()
    }

    /// Number of live sessions (expired-but-unswept included).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn create_then_access() {
        let store = store();
        let id = store.create(1).await;
        let owner = store.with_session(id, 1, |s| s.owner_id).await;
        assert_eq!(owner, Some(1));
    }

    #[tokio::test]
    async fn wrong_owner_looks_like_missing() {
        let store = store();
        let id = store.create(1).await;
        assert!(store.with_session(id, 2, |_| ()).await.is_none());
        // The rightful owner can still reach it.
        assert!(store.with_session(id, 1, |_| ()).await.is_some());
    }

    #[tokio::test]
    async fn unknown_id_yields_none() {
        let store = store();
        assert!(store.with_session(Uuid::new_v4(), 1, |_| ()).await.is_none());
    }

    #[tokio::test]
    async fn expired_session_is_inaccessible_and_purged() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create(1).await;
        // TTL of zero: any elapsed time counts as expired.
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert!(store.with_session(id, 1, |_| ()).await.is_none());
        assert_eq!(store.purge_expired().await, 1);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn remove_is_owner_checked() {
        let store = store();
        let id = store.create(1).await;
        assert!(store.remove(id, 2).await.is_none());
        assert!(store.remove(id, 1).await.is_some());
        assert!(store.with_session(id, 1, |_| ()).await.is_none());
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = store();
        let a = store.create(1).await;
        let b = store.create(1).await;
        store
            .with_session(a, 1, |s| {
                s.state.set_candidate_places(vec![]);
            })
            .await;
        // Mutating one session never shows up in another.
        let b_state = store.snapshot(b, 1).await.unwrap();
        assert!(b_state.destination.is_none());
        assert_ne!(a, b);
    }
}
