/// Shell component that wraps the main application layout
///
/// Composes the sidebar and topbar around the content region, owns the
/// collapse/drawer state and gates everything behind an authenticated session.

use leptos::*;
use leptos_router::*;

use crate::auth::{logout_and_redirect, use_auth, AuthStore, RedirectGate};
use crate::components::{sidebar::Sidebar, topbar::Topbar};
use crate::config::use_shell_config;
use crate::layout::ShellState;

#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let config = use_shell_config();
    let navigate = use_navigate();

    let state = create_rw_signal(ShellState::default());
    let gate = store_value(RedirectGate::default());

    // Redirect to login on mount without a session, and again if the session ends.
    // The gate makes this fire at most once per shell.
    let redirect = navigate.clone();
    let login_path = config.login_path.clone();
    create_effect(move |_| {
        let authenticated = auth.is_authenticated();
        if gate.try_update_value(|g| g.observe(authenticated)).unwrap_or(false) {
            log::info!("No active session, redirecting to {}", login_path);
            redirect(&login_path, Default::default());
        }
    });

    let login_path = config.login_path.clone();
    let on_logout = Callback::new(move |_: ()| {
        // Logout clears the session; the gate must not issue a second redirect.
        // A shell that is already leaving ignores further logout requests.
        if !gate.try_update_value(RedirectGate::claim).unwrap_or(false) {
            log::debug!("Logout already in progress");
            return;
        }

        let navigate = navigate.clone();
        let login_path = login_path.clone();
        spawn_local(async move {
            let navigator = move |path: &str| navigate(path, Default::default());
            logout_and_redirect(&auth, &navigator, &login_path).await;
        });
    });

    let collapsed = Signal::derive(move || state.with(|s| s.sidebar_collapsed));
    let mobile_open = Signal::derive(move || state.with(|s| s.mobile_drawer_open));
    let toggle_collapse = Callback::new(move |_: ()| state.update(ShellState::toggle_collapse));
    let toggle_mobile = Callback::new(move |_: ()| state.update(ShellState::toggle_mobile));
    let close_mobile = Callback::new(move |_: ()| state.update(ShellState::close_mobile));

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 text-sm text-gray-500 dark:text-gray-400">
                    "Redirecting to sign in..."
                </div>
            }
        >
            <div class="flex h-screen overflow-hidden bg-gray-50 dark:bg-gray-900">
                <Sidebar
                    collapsed=collapsed
                    mobile_open=mobile_open
                    on_toggle_collapse=toggle_collapse
                    on_close_mobile=close_mobile
                />

                <div class="flex flex-1 flex-col overflow-hidden">
                    <Topbar
                        mobile_open=mobile_open
                        on_toggle_mobile=toggle_mobile
                        on_logout=on_logout
                    />

                    <main class="flex-1 overflow-y-auto">
                        <div class="container mx-auto px-4 py-6 max-w-7xl">
                            {children()}
                        </div>
                    </main>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::auth::{AuthContext, AuthProvider};
    use crate::test_utils::render_at;

    #[test]
    fn no_session_renders_no_protected_content() {
        let html = render_at("/dashboard", || {
            view! {
                <AuthProvider>
                    <Shell>
                        <p>"Gradebook for 9B"</p>
                    </Shell>
                </AuthProvider>
            }
        });

        assert!(!html.contains("Gradebook for 9B"));
        assert!(!html.contains("Main navigation"));
        assert!(html.contains("Redirecting to sign in..."));
    }

    #[test]
    fn session_renders_layout_around_content() {
        let html = render_at("/students/admissions", || {
            let auth = AuthContext::new();
            auth.sign_in("office@northside.edu").unwrap();
            provide_context(auth);

            view! {
                <Shell>
                    <p>"Gradebook for 9B"</p>
                </Shell>
            }
        });

        assert!(html.contains("Gradebook for 9B"));
        assert!(html.contains("Main navigation"));
        assert!(html.contains("office@northside.edu"));
        assert!(html.contains("<time"));
        assert!(!html.contains("Redirecting to sign in..."));
    }
}
