//! Shared state for the HTTP shell.
//!
//! Holds the responder and one care log per session. The responder is
//! stateless; only the session map needs a lock. The map is capped at
//! `max_sessions`: creating one past the cap evicts the oldest.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use uuid::Uuid;

use crate::care_log::CareLog;
use crate::config::MAX_SESSIONS;
use crate::triage::{Responder, RuleBasedResponder};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Lock poisoned")]
    LockPoisoned,
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),
}

/// Session logs plus their creation order, oldest first.
#[derive(Default)]
struct SessionStore {
    logs: HashMap<Uuid, CareLog>,
    order: VecDeque<Uuid>,
}

impl SessionStore {
    fn insert(&mut self, id: Uuid, max_sessions: usize) -> Option<Uuid> {
        let mut evicted = None;
        if self.logs.len() >= max_sessions {
            if let Some(oldest) = self.order.pop_front() {
                self.logs.remove(&oldest);
                evicted = Some(oldest);
            }
        }
        self.logs.insert(id, CareLog::new());
        self.order.push_back(id);
        evicted
    }

    fn evict(&mut self, id: &Uuid) -> bool {
        if self.logs.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| other != id);
        true
    }
}

/// Transport-agnostic application state, shared behind `Arc`.
pub struct CoreState {
    responder: Arc<dyn Responder>,
    max_sessions: usize,
    sessions: RwLock<SessionStore>,
}

impl CoreState {
    /// Create a state backed by the rule-based responder.
    pub fn new() -> Self {
        Self::with_responder(Arc::new(RuleBasedResponder::new()))
    }

    pub fn with_responder(responder: Arc<dyn Responder>) -> Self {
        Self::with_limits(responder, MAX_SESSIONS)
    }

    /// A state that keeps at most `max_sessions` care logs (minimum 1).
    pub fn with_limits(responder: Arc<dyn Responder>, max_sessions: usize) -> Self {
        Self {
            responder,
            max_sessions: max_sessions.max(1),
            sessions: RwLock::new(SessionStore::default()),
        }
    }

    pub fn responder(&self) -> &dyn Responder {
        self.responder.as_ref()
    }

    // ── Session access ──────────────────────────────────────

    fn read_sessions(&self) -> Result<RwLockReadGuard<'_, SessionStore>, CoreError> {
        self.sessions.read().map_err(|_| CoreError::LockPoisoned)
    }

    fn write_sessions(&self) -> Result<RwLockWriteGuard<'_, SessionStore>, CoreError> {
        self.sessions.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Start a new, empty care log and return its session id.
    pub fn create_session(&self) -> Result<Uuid, CoreError> {
        let id = Uuid::new_v4();
        let evicted = self.write_sessions()?.insert(id, self.max_sessions);
        if let Some(oldest) = evicted {
            tracing::info!(session_id = %oldest, "Session limit reached, oldest care log evicted");
        }
        tracing::info!(session_id = %id, "Care log session created");
        Ok(id)
    }

    /// Drop a session and its log.
    pub fn end_session(&self, id: Uuid) -> Result<(), CoreError> {
        if !self.write_sessions()?.evict(&id) {
            return Err(CoreError::SessionNotFound(id));
        }
        tracing::info!(session_id = %id, "Care log session ended");
        Ok(())
    }

    pub fn session_count(&self) -> Result<usize, CoreError> {
        Ok(self.read_sessions()?.logs.len())
    }

    /// Run `f` with shared access to a session's log.
    pub fn with_log<T>(&self, id: Uuid, f: impl FnOnce(&CareLog) -> T) -> Result<T, CoreError> {
        let sessions = self.read_sessions()?;
        let log = sessions.logs.get(&id).ok_or(CoreError::SessionNotFound(id))?;
        Ok(f(log))
    }

    /// Run `f` with exclusive access to a session's log.
    pub fn with_log_mut<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut CareLog) -> T,
    ) -> Result<T, CoreError> {
        let mut sessions = self.write_sessions()?;
        let log = sessions.logs.get_mut(&id).ok_or(CoreError::SessionNotFound(id))?;
        Ok(f(log))
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
