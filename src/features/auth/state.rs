//! Auth session state and context for the frontend. The session is recorded
//! in memory after a successful sign-in and exposed through Leptos context for
//! guards and routes. Only non-sensitive metadata is stored.

use crate::features::auth::{login::SessionStore, types::UserSession};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(session: RwSignal<Option<UserSession>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Updates the in-memory session after sign-in.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session on sign-out.
    pub fn clear_session(&self) {
        self.session.set(None);
    }
}

impl SessionStore for AuthContext {
    fn store(&self, session: UserSession) {
        self.set_session(session);
    }
}

/// Provides the auth context to the route tree.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new(RwSignal::new(None)));

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(RwSignal::new(None)))
}
