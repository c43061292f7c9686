use super::AuthStore;

/// Client-side navigation, implemented for any `Fn(&str)` so the router's
/// `use_navigate()` can be wrapped in a closure.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// One-way latch guarding the redirect to the login page.
///
/// Once the shell is leaving (because the session ended or a logout is in
/// flight) no further redirects are issued.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RedirectGate {
    leaving: bool,
}

impl RedirectGate {
    /// Returns true exactly once, the first time it observes no session.
    pub fn observe(&mut self, authenticated: bool) -> bool {
        if authenticated || self.leaving {
            return false;
        }
        self.leaving = true;
        true
    }

    /// Latch the gate on behalf of an explicit logout. Returns false if it was already latched.
    pub fn claim(&mut self) -> bool {
        !std::mem::replace(&mut self.leaving, true)
    }

    #[cfg(test)]
    fn is_leaving(&self) -> bool {
        self.leaving
    }
}

/// Sign out, then send the user to `login_path` whether or not the sign-out succeeded.
pub async fn logout_and_redirect<S, N>(store: &S, navigator: &N, login_path: &str)
where
    S: AuthStore + ?Sized,
    N: Navigator + ?Sized,
{
    log::debug!("Logout requested");

    if let Err(e) = store.logout().await {
        log::warn!("Logout failed, redirecting anyway: {}", e);
    }

    navigator.navigate(login_path);
}
