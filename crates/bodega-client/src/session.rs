//! # Session State
//!
//! The bearer token and account returned by login, held for the lifetime
//! of the client. The web original keeps these in browser local storage;
//! here the client instance is the storage.

use std::sync::Mutex;

use crate::types::User;

/// The authenticated state after a successful login or signup.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub token: String,
    pub user: User,
}

/// Holder for the current session.
///
/// Interior mutability because a 401 response must be able to tear the
/// session down from a `&self` request path.
#[derive(Debug, Default)]
pub struct Session {
    state: Mutex<Option<AuthState>>,
}

impl Session {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Session {
            state: Mutex::new(None),
        }
    }

    /// Stores the token and account from a successful authentication.
    pub fn store(&self, token: String, user: User) {
        let mut state = self.state.lock().expect("session mutex poisoned");
        *state = Some(AuthState { token, user });
    }

    /// Clears everything. Called on logout and on any 401 response.
    pub fn clear(&self) {
        let mut state = self.state.lock().expect("session mutex poisoned");
        *state = None;
    }

    /// The bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        let state = self.state.lock().expect("session mutex poisoned");
        state.as_ref().map(|s| s.token.clone())
    }

    /// The logged-in account, if authenticated.
    pub fn user(&self) -> Option<User> {
        let state = self.state.lock().expect("session mutex poisoned");
        state.as_ref().map(|s| s.user.clone())
    }

    /// True when a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
