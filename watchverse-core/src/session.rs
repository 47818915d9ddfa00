//! Session store: the bearer token and whether the user is signed in.
//!
//! The session is created once at startup from persisted storage and shared
//! (`Rc`) between the API client and the UI. It never validates the token;
//! the backend rejecting it is what ends a session (see [`crate::client`]).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// Where the token survives page reloads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-process token store. Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.get()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

type ChangeListener = Rc<dyn Fn(bool)>;

struct SessionInner {
    token: Option<String>,
    store: Box<dyn TokenStore>,
    listeners: Vec<ChangeListener>,
}

#[derive(Clone)]
pub struct Session {
    inner: Rc<RefCell<SessionInner>>,
}

impl Session {
    /// Build the session from whatever token the store holds.
    pub fn restore(store: impl TokenStore + 'static) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        debug!("Restored session (authenticated: {})", token.is_some());
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                token,
                store: Box::new(store),
                listeners: Vec::new(),
            })),
        }
    }

    /// A session backed by a fresh [`MemoryTokenStore`].
    pub fn in_memory() -> Self {
        Self::restore(MemoryTokenStore::default())
    }

    pub fn login(&self, token: &str) {
        let was_authenticated = {
            let mut inner = self.inner.borrow_mut();
            let was = inner.token.is_some();
            inner.store.save(token);
            inner.token = Some(token.to_string());
            was
        };
        info!("Logged in");
        if !was_authenticated {
            self.notify(true);
        }
    }

    /// Drop the token. Calling this on a signed-out session is a no-op.
    pub fn logout(&self) {
        let was_authenticated = {
            let mut inner = self.inner.borrow_mut();
            let was = inner.token.take().is_some();
            inner.store.clear();
            was
        };
        if was_authenticated {
            info!("Logged out");
            self.notify(false);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    /// Register a listener called with the new state whenever
    /// authentication flips.
    pub fn on_change(&self, listener: impl Fn(bool) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    fn notify(&self, authenticated: bool) {
        // Listeners may read the session, so release the borrow first
        let listeners = self.inner.borrow().listeners.clone();
        for listener in listeners {
            listener(authenticated);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn login_then_logout() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.login("tok-1");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemoryTokenStore::with_token("tok");
        let session = Session::restore(store.clone());
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        session.on_change(move |_| counter.set(counter.get() + 1));

        session.logout();
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(store.get(), None);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn restores_persisted_token() {
        let session = Session::restore(MemoryTokenStore::with_token("persisted"));
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("persisted"));
    }

    #[test]
    fn empty_persisted_token_is_not_a_session() {
        let session = Session::restore(MemoryTokenStore::with_token(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_persists_and_notifies() {
        let store = MemoryTokenStore::default();
        let session = Session::restore(store.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        session.on_change(move |authed| log.borrow_mut().push(authed));

        session.login("a");
        // Replacing the token keeps the user signed in, no flip
        session.login("b");
        session.logout();

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn listener_can_read_session() {
        let session = Session::in_memory();
        let observed = Rc::new(Cell::new(false));
        let (s, o) = (session.clone(), observed.clone());
        session.on_change(move |_| o.set(s.is_authenticated()));
        session.login("tok");
        assert!(observed.get());
    }
}
