/// Sidebar navigation component
///
/// Collapsible desktop sidebar plus the slide-in drawer used on narrow viewports.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::components::button::Button;
use crate::components::icons::{CampusLogo, Icon};
use crate::components::nav_tree::NavTree;
use crate::config::use_shell_config;

#[component]
pub fn Sidebar(
    #[prop(into)]
    collapsed: Signal<bool>,
    #[prop(into)]
    mobile_open: Signal<bool>,
    #[prop(into)]
    on_toggle_collapse: Callback<()>,
    #[prop(into)]
    on_close_mobile: Callback<()>,
) -> impl IntoView {
    let title = use_shell_config().app_title;
    let mobile_title = title.clone();

    view! {
        // Desktop
        <aside
            class=move || format!(
                "hidden lg:flex flex-col shrink-0 bg-white dark:bg-gray-950 border-r border-gray-200 dark:border-gray-800 transition-all duration-200 {}",
                if collapsed.get() { "w-16" } else { "w-64" }
            )
            aria-label="Sidebar"
        >
            <div class="flex h-16 items-center justify-between border-b border-gray-200 dark:border-gray-800 px-3">
                <Show when=move || !collapsed.get()>
                    <Brand title=title.clone()/>
                </Show>
                <Button
                    on_click=move |_: MouseEvent| on_toggle_collapse.call(())
                    aria_label=Signal::derive(move || {
                        let label = if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" };
                        label.to_string()
                    })
                    expanded=Signal::derive(move || !collapsed.get())
                >
                    {move || {
                        if collapsed.get() {
                            Icon::ChevronRight.render("h-5 w-5")
                        } else {
                            Icon::ChevronLeft.render("h-5 w-5")
                        }
                    }}
                </Button>
            </div>

            <NavTree collapsed=collapsed/>
        </aside>

        // Mobile drawer
        <Show when=move || mobile_open.get()>
            <div
                class="fixed inset-0 z-40 bg-gray-900/50 lg:hidden"
                aria-hidden="true"
                on:click=move |_| on_close_mobile.call(())
            ></div>
            <aside
                class="fixed inset-y-0 left-0 z-50 flex w-64 flex-col bg-white dark:bg-gray-950 shadow-xl lg:hidden"
                aria-label="Sidebar"
            >
                <div class="flex h-16 items-center justify-between border-b border-gray-200 dark:border-gray-800 px-3">
                    <Brand title=mobile_title.clone()/>
                    <Button on_click=move |_: MouseEvent| on_close_mobile.call(()) aria_label="Close navigation">
                        {Icon::Close.render("h-5 w-5")}
                    </Button>
                </div>

                <NavTree collapsed=false on_navigate=on_close_mobile/>
            </aside>
        </Show>
    }
}

#[component]
fn Brand(title: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2 min-w-0">
            <CampusLogo class="h-7 w-7 shrink-0 text-blue-600"/>
            <span class="truncate text-lg font-bold text-gray-900 dark:text-white">{title}</span>
        </div>
    }
}
