/// Button component
///
/// Plain clickable control used for the shell's toggles and sign-out.

use leptos::ev::MouseEvent;
use leptos::*;

const DEFAULT_CLASS: &str = "inline-flex items-center justify-center rounded-md p-2 text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white focus:outline-none focus:ring-2 focus:ring-blue-500 transition-colors";

#[component]
pub fn Button(
    #[prop(into)]
    on_click: Callback<MouseEvent>,
    /// Accessible name, needed when the children are icon-only
    #[prop(optional, into)]
    aria_label: Option<MaybeSignal<String>>,
    /// Reported as `aria-expanded` for disclosure toggles
    #[prop(optional, into)]
    expanded: Option<Signal<bool>>,
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| DEFAULT_CLASS.to_string());
    let aria_label = move || aria_label.as_ref().map(|label| label.get());
    let aria_expanded = move || expanded.map(|e| e.get().to_string());

    view! {
        <button
            type="button"
            class=class
            aria-label=aria_label
            aria-expanded=aria_expanded
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </button>
    }
}
