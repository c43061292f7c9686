/// Main application component and routing
///
/// Defines the root App component: meta tags, authentication context and the
/// routes, with every protected route rendered inside the dashboard shell.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::auth::AuthProvider;
use crate::components::shell::Shell;
use crate::config::{use_shell_config, CONFIG_META};
use crate::pages::{auth::LoginPage, section::SectionPage};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Provided by the server from disk, or by hydrate() from the page; otherwise defaults.
    let config = use_shell_config();
    provide_context(config.clone());

    // Echoed into the head so the browser hydrates with the same settings
    let embedded_config = config.to_toml_string().unwrap_or_else(|e| {
        log::warn!("Shell config not embedded: {}", e);
        String::new()
    });

    let login_path = config.login_path.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-web.css"/>
        <Title text=config.app_title.clone()/>
        <Meta name="description" content="School administration dashboard"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <Meta name=CONFIG_META content=embedded_config/>

        <Router>
            <AuthProvider>
                <Routes>
                    // Public routes
                    <Route path=login_path view=LoginPage/>

                    // Protected routes wrapped in Shell
                    <Route path="" view=ShellLayout>
                        <Route path="" view=HomeRedirect/>
                        <Route path="/*any" view=SectionPage/>
                    </Route>
                </Routes>
            </AuthProvider>
        </Router>
    }
}

#[component]
fn ShellLayout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet/>
        </Shell>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    let home_path = use_shell_config().home_path;

    view! { <Redirect path=home_path/> }
}
