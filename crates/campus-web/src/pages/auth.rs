/// Sign-in page
///
/// Establishes an in-memory session for the shell. Credentials are not checked here.

use leptos::*;
use leptos_router::*;

use crate::auth::{use_auth, AuthStore};
use crate::components::icons::{CampusLogo, Icon};
use crate::config::use_shell_config;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = use_shell_config();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    // Sends visitors with a session, including one just created below, to the home page
    let home_path = config.home_path.clone();
    create_effect(move |_| {
        if auth.is_authenticated() {
            navigate(&home_path, Default::default());
        }
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match auth.sign_in(&email.get_untracked()) {
            Ok(()) => set_error_message.set(None),
            Err(e) => set_error_message.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <div class="flex justify-center">
                        <CampusLogo class="h-12 w-12 text-blue-600"/>
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-gray-900 dark:text-white">
                        "Sign in to " {config.app_title.clone()}
                    </h2>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                            "Email"
                        </label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            autocomplete="email"
                            class="mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm bg-white dark:bg-gray-800 text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-gray-400 focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                            placeholder="you@school.edu"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || error_message.get().is_some()>
                        <div class="flex items-start space-x-2 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md p-4 text-sm text-red-700 dark:text-red-300">
                            {Icon::Close.render("h-5 w-5 shrink-0")}
                            <span>{move || error_message.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 transition-colors"
                    >
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::auth::AuthProvider;
    use crate::config::ShellConfig;
    use crate::test_utils::render_at;

    #[test]
    fn renders_sign_in_form_with_configured_title() {
        let html = render_at("/sign-in", || {
            provide_context(ShellConfig {
                app_title: "Northside High".to_string(),
                ..ShellConfig::default()
            });
            view! { <AuthProvider><LoginPage/></AuthProvider> }
        });

        assert!(html.contains("Northside High"));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Sign in"));
    }
}
