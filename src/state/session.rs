//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The durable token slot is the source of truth. `SessionManager` keeps an
//! in-memory copy of it, writes through on `login`/`logout`, and notifies
//! subscribers on every change. `SessionHandle` mirrors the manager into a
//! Leptos signal and is provided via context to route guards and pages.
//!
//! No network calls originate here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use leptos::prelude::*;

use crate::util::storage::TokenStore;

/// Authentication snapshot. Authenticated exactly when a token is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

type Listener = Box<dyn Fn(&Session) + Send + Sync>;

/// Write-through cache of the token slot.
pub struct SessionManager {
    store: Arc<dyn TokenStore>,
    current: RwLock<Session>,
    listeners: RwLock<Vec<Listener>>,
}

impl SessionManager {
    /// Build a manager primed from whatever the store holds right now.
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        let current = Session::from_token(store.read());
        Self {
            store,
            current: RwLock::new(current),
            listeners: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.current().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session().token
    }

    /// Persist `token` and mark the session authenticated.
    ///
    /// The token is not inspected. A later call simply overwrites it.
    pub fn login(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.store.write(&token) {
            log::warn!("session token not persisted: {e}");
        }
        self.replace(Session::from_token(Some(token)));
        log::info!("session started");
    }

    /// Clear the stored token and mark the session anonymous.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            log::warn!("session token not cleared: {e}");
        }
        self.replace(Session::default());
        log::info!("session ended");
    }

    /// Re-read the store and adopt its value. Returns whether anything changed.
    pub fn sync(&self) -> bool {
        let stored = Session::from_token(self.store.read());
        if stored == self.session() {
            return false;
        }
        log::debug!("session changed outside this view, reconciling");
        self.replace(stored);
        true
    }

    /// Register a callback invoked with the new session after every change.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    fn current(&self) -> RwLockReadGuard<'_, Session> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(&self, next: Session) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&next);
        }
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Reactive view of the session, shared through Leptos context.
#[derive(Clone)]
pub struct SessionHandle {
    manager: Arc<SessionManager>,
    session: RwSignal<Session>,
}

impl SessionHandle {
    #[must_use]
    pub fn manager(&self) -> Arc<SessionManager> {
        Arc::clone(&self.manager)
    }

    /// Tracked read; re-runs the caller when the session changes.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn logout(&self) {
        self.manager.logout();
    }

    pub fn sync(&self) -> bool {
        self.manager.sync()
    }
}

/// Create the session for `store` and provide it to descendants.
pub fn provide_session(store: Arc<dyn TokenStore>) -> SessionHandle {
    let manager = Arc::new(SessionManager::new(store));
    let session = RwSignal::new(manager.session());
    manager.subscribe(move |next| session.set(next.clone()));
    let handle = SessionHandle { manager, session };
    provide_context(handle.clone());
    handle
}

/// Session provided by an ancestor `provide_session` call.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
