use std::sync::Mutex;

use super::*;
use crate::util::storage::{MemoryTokenStore, StorageError};

fn manager_with(store: MemoryTokenStore) -> (Arc<MemoryTokenStore>, SessionManager) {
    let store = Arc::new(store);
    let manager = SessionManager::new(store.clone());
    (store, manager)
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.token.is_none());
}

#[test]
fn session_with_token_is_authenticated() {
    let session = Session::from_token(Some("abc".to_owned()));
    assert!(session.is_authenticated());
}

// =============================================================
// SessionManager
// =============================================================

#[test]
fn new_reads_existing_token() {
    let (_, manager) = manager_with(MemoryTokenStore::with_token("saved"));
    assert!(manager.is_authenticated());
    assert_eq!(manager.token().as_deref(), Some("saved"));
}

#[test]
fn new_with_empty_store_is_anonymous() {
    let (_, manager) = manager_with(MemoryTokenStore::new());
    assert_eq!(manager.session(), Session::default());
}

#[test]
fn login_persists_and_authenticates() {
    let (store, manager) = manager_with(MemoryTokenStore::new());
    manager.login("abc");
    assert_eq!(store.read().as_deref(), Some("abc"));
    assert!(manager.is_authenticated());
    assert_eq!(manager.token().as_deref(), Some("abc"));
}

#[test]
fn login_is_visible_to_a_fresh_manager() {
    let (store, manager) = manager_with(MemoryTokenStore::new());
    manager.login("abc");
    let fresh = SessionManager::new(store);
    assert_eq!(fresh.session(), Session::from_token(Some("abc".to_owned())));
}

#[test]
fn second_login_overwrites_token() {
    let (store, manager) = manager_with(MemoryTokenStore::new());
    manager.login("first");
    manager.login("second");
    assert_eq!(store.read().as_deref(), Some("second"));
    assert_eq!(manager.token().as_deref(), Some("second"));
}

#[test]
fn logout_clears_store_and_session() {
    let (store, manager) = manager_with(MemoryTokenStore::with_token("abc"));
    manager.logout();
    assert_eq!(store.read(), None);
    assert!(!manager.is_authenticated());
    assert!(SessionManager::new(store).session().token.is_none());
}

#[test]
fn logout_when_anonymous_is_harmless() {
    let (store, manager) = manager_with(MemoryTokenStore::new());
    manager.logout();
    manager.logout();
    assert_eq!(store.read(), None);
    assert_eq!(manager.session(), Session::default());
}

#[test]
fn sync_adopts_out_of_band_login() {
    let (store, manager) = manager_with(MemoryTokenStore::new());
    store.write("other-tab").unwrap();
    assert!(manager.sync());
    assert_eq!(manager.token().as_deref(), Some("other-tab"));
}

#[test]
fn sync_adopts_out_of_band_logout() {
    let (store, manager) = manager_with(MemoryTokenStore::with_token("abc"));
    store.clear().unwrap();
    assert!(manager.sync());
    assert!(!manager.is_authenticated());
}

#[test]
fn sync_without_changes_reports_false() {
    let (_, manager) = manager_with(MemoryTokenStore::with_token("abc"));
    assert!(!manager.sync());
}

#[test]
fn subscribers_see_every_change() {
    let (store, manager) = manager_with(MemoryTokenStore::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    manager.subscribe(move |s| sink.lock().unwrap().push(s.token.clone()));

    manager.login("abc");
    manager.logout();
    store.write("xyz").unwrap();
    manager.sync();
    manager.sync();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some("abc".to_owned()), None, Some("xyz".to_owned())]
    );
}

struct BrokenStore;

impl TokenStore for BrokenStore {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn storage_failure_still_updates_memory() {
    let manager = SessionManager::new(Arc::new(BrokenStore));
    manager.login("abc");
    assert!(manager.is_authenticated());
    manager.logout();
    assert!(!manager.is_authenticated());
}

#[test]
fn debug_hides_token() {
    let (_, manager) = manager_with(MemoryTokenStore::with_token("secret"));
    let text = format!("{manager:?}");
    assert!(text.contains("authenticated: true"));
    assert!(!text.contains("secret"));
}

// =============================================================
// SessionHandle
// =============================================================

#[test]
fn handle_signal_follows_manager_changes() {
    Owner::new().with(|| {
        let store = Arc::new(MemoryTokenStore::new());
        let handle = provide_session(store.clone());
        assert!(!handle.is_authenticated());

        handle.manager().login("abc");
        assert!(handle.is_authenticated());
        assert_eq!(store.read().as_deref(), Some("abc"));

        handle.logout();
        assert!(!handle.is_authenticated());
        assert_eq!(store.read(), None);
    });
}

#[test]
fn handle_picks_up_external_store_changes_on_sync() {
    Owner::new().with(|| {
        let store = Arc::new(MemoryTokenStore::new());
        let handle = provide_session(store.clone());

        store.write("from-another-tab").unwrap();
        assert!(!handle.is_authenticated());

        assert!(handle.sync());
        assert!(handle.is_authenticated());
        assert!(!handle.sync());
    });
}

#[test]
fn provided_handle_is_shared_through_context() {
    Owner::new().with(|| {
        let handle = provide_session(Arc::new(MemoryTokenStore::with_token("abc")));
        let from_context = use_session();
        assert!(from_context.is_authenticated());

        handle.logout();
        assert!(!from_context.is_authenticated());
        assert!(!from_context.manager().is_authenticated());
    });
}
