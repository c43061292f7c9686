/// Authentication capability for the shell
///
/// The shell never owns authentication state. It reads and signs out through
/// [`AuthStore`]; [`AuthContext`] is the in-memory implementation the app
/// provides by default.

mod gate;

pub use gate::{logout_and_redirect, Navigator, RedirectGate};

use async_trait::async_trait;
use leptos::*;

use crate::error::Result;
use crate::types::Session;
use crate::utils::validation::validate_email;

#[async_trait(?Send)]
pub trait AuthStore {
    fn is_authenticated(&self) -> bool;

    /// Email of the signed-in user
    fn current_user(&self) -> Option<String>;

    async fn logout(&self) -> Result<()>;
}

/// Signal-backed session store. Reads are reactive, so effects and views
/// that call [`AuthStore::is_authenticated`] re-run when the session changes.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (session, set_session) = create_signal::<Option<Session>>(None);
        Self {
            session,
            set_session,
        }
    }

    pub fn sign_in(&self, email: &str) -> Result<()> {
        let email = email.trim();
        validate_email(email)?;
        log::info!("Signed in as {}", email);
        self.set_session.set(Some(Session::new(email)));
        Ok(())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthStore for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    fn current_user(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.email.clone()))
    }

    async fn logout(&self) -> Result<()> {
        self.set_session.set(None);
        Ok(())
    }
}

/// Authentication provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new());

    children()
}

/// Hook to access authentication context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext must be provided by AuthProvider")
}
