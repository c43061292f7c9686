use leptos::*;
use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

/// Server-render `content` inside a router sitting at `path`.
pub fn render_at<F, N>(path: &str, content: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let url = format!("http://campus.test{}", path);

    leptos::ssr::render_to_string(move || {
        provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));

        view! { <Router>{content()}</Router> }
    })
    .to_string()
}
