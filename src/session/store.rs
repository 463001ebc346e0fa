// src/session/store.rs
use crate::domain::{AiMatches, FilterSelection};
use crate::errors::ServerError;
use crate::i18n::Language;
use crate::session::token;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(12 * 60 * 60);
/// Upper bound on live sessions; the least recently seen is evicted past it.
pub const MAX_SESSIONS: usize = 10_000;
/// How often a new visitor triggers the idle sweep.
const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey([u8; 32]);

/// Proof that an AI search was started, tagged with the selection it raced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTicket {
    generation: u64,
}

/// Everything the storefront remembers about one visitor.
#[derive(Debug, Clone)]
pub struct UiSession {
    pub selection: FilterSelection,
    pub language: Language,
    /// Simulated phone login.
    pub logged_in: bool,
    pub saved: HashSet<String>,
    pub reserved: HashSet<String>,
    ai_in_flight: bool,
    generation: u64,
    last_seen: Instant,
}

impl UiSession {
    fn new(now: Instant) -> Self {
        Self {
            selection: FilterSelection::None,
            language: Language::default(),
            logged_in: false,
            saved: HashSet::new(),
            reserved: HashSet::new(),
            ai_in_flight: false,
            generation: 0,
            last_seen: now,
        }
    }

    /// Replace the active filter. Any AI search still running is now stale.
    pub fn select(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.generation += 1;
    }

    pub fn ai_in_flight(&self) -> bool {
        self.ai_in_flight
    }

    /// Flip the saved state of a listing; returns the new state.
    pub fn toggle_saved(&mut self, listing_id: &str) -> bool {
        if self.saved.remove(listing_id) {
            false
        } else {
            self.saved.insert(listing_id.to_string());
            true
        }
    }
}

/// In-memory visitor sessions keyed by the hash of the cookie token.
pub struct SessionStore {
    table: Mutex<SessionTable>,
    idle_ttl: Duration,
    max_sessions: usize,
    prune_every: Duration,
}

struct SessionTable {
    sessions: HashMap<SessionKey, UiSession>,
    last_prune: Instant,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TTL)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self::with_limits(idle_ttl, MAX_SESSIONS)
    }

    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            table: Mutex::new(SessionTable {
                sessions: HashMap::new(),
                last_prune: Instant::now(),
            }),
            idle_ttl,
            max_sessions: max_sessions.max(1),
            prune_every: idle_ttl.min(PRUNE_INTERVAL),
        }
    }

    /// Map a request's cookie token to a session.
    ///
    /// Returns the key plus a token to hand back as a cookie when the
    /// visitor did not present one.
    pub fn resolve(&self, presented: Option<&str>) -> Result<(SessionKey, Option<String>), ServerError> {
        let (token, issued) = match presented {
            Some(t) => (t.to_string(), false),
            None => (token::new_token(), true),
        };
        let key = SessionKey(token::session_key(&token));
        let now = Instant::now();

        let mut table = self.lock()?;
        self.admit(&mut table, key, now).last_seen = now;

        Ok((key, issued.then_some(token)))
    }

    /// The session for `key`, creating it if needed. New sessions first
    /// trigger the periodic idle sweep and, at capacity, evict the least
    /// recently seen visitor.
    fn admit<'t>(&self, table: &'t mut SessionTable, key: SessionKey, now: Instant) -> &'t mut UiSession {
        if !table.sessions.contains_key(&key) {
            if now.duration_since(table.last_prune) >= self.prune_every {
                self.prune_idle(table, now);
            }
            if table.sessions.len() >= self.max_sessions {
                // Idle sessions go first; the oldest live one only if that was not enough.
                self.prune_idle(table, now);
                while table.sessions.len() >= self.max_sessions {
                    let Some(oldest) = table
                        .sessions
                        .iter()
                        .min_by_key(|(_, s)| s.last_seen)
                        .map(|(k, _)| *k)
                    else {
                        break;
                    };
                    table.sessions.remove(&oldest);
                    warn!(cap = self.max_sessions, "session table full; evicted oldest visitor");
                }
            }
        }
        table
            .sessions
            .entry(key)
            .or_insert_with(|| UiSession::new(now))
    }

    fn prune_idle(&self, table: &mut SessionTable, now: Instant) {
        let ttl = self.idle_ttl;
        let before = table.sessions.len();
        table
            .sessions
            .retain(|_, s| now.duration_since(s.last_seen) < ttl);
        table.last_prune = now;
        if table.sessions.len() < before {
            debug!(pruned = before - table.sessions.len(), "expired sessions dropped");
        }
    }

    /// Run `f` with the visitor's session, recreating it if it was pruned.
    pub fn with_session<F, T>(&self, key: SessionKey, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut UiSession) -> T,
    {
        let mut table = self.lock()?;
        let session = self.admit(&mut table, key, Instant::now());
        Ok(f(session))
    }

    pub fn snapshot(&self, key: SessionKey) -> Result<UiSession, ServerError> {
        self.with_session(key, |s| s.clone())
    }

    /// Mark an AI search as running. Only one may run per session.
    pub fn begin_ai_search(&self, key: SessionKey) -> Result<AiTicket, ServerError> {
        self.with_session(key, |s| {
            if s.ai_in_flight {
                return Err(ServerError::Conflict(
                    "an AI search is already running".into(),
                ));
            }
            s.ai_in_flight = true;
            Ok(AiTicket {
                generation: s.generation,
            })
        })?
    }

    /// Finish an AI search. The matches become the selection only if the
    /// visitor has not picked another filter since the search began.
    pub fn finish_ai_search(
        &self,
        key: SessionKey,
        ticket: AiTicket,
        matches: AiMatches,
    ) -> Result<bool, ServerError> {
        self.with_session(key, |s| {
            s.ai_in_flight = false;
            if s.generation != ticket.generation {
                warn!(
                    started = ticket.generation,
                    current = s.generation,
                    "stale AI result discarded"
                );
                return false;
            }
            s.select(FilterSelection::Ai(matches));
            true
        })
    }

    pub fn len(&self) -> usize {
        self.table.lock().map(|t| t.sessions.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionTable>, ServerError> {
        self.table.lock().map_err(|_| ServerError::InternalError)
    }
}
