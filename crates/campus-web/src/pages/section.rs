/// Section landing page
///
/// Placeholder content for every navigation entry, titled from the tree.

use leptos::*;
use leptos_router::*;

use crate::nav::{find_entry, NAV_TREE};
use crate::pages::not_found::NotFoundPage;

#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();

    move || match location.pathname.with(|path| find_entry(NAV_TREE, path)) {
        Some(entry) => view! {
            <div class="space-y-6">
                <div class="flex items-center space-x-3">
                    {entry.icon.render("h-7 w-7 text-blue-600")}
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                        {entry.label}
                    </h1>
                </div>

                <Show when=move || entry.has_children()>
                    <ul class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {entry.children.iter().map(|child| view! {
                            <li>
                                <A
                                    href=child.path
                                    class="flex items-center space-x-3 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-4 hover:border-blue-500 transition-colors"
                                >
                                    {child.icon.render("h-5 w-5 text-gray-500")}
                                    <span class="font-medium text-gray-900 dark:text-white">{child.label}</span>
                                </A>
                            </li>
                        }).collect_view()}
                    </ul>
                </Show>

                <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-8 text-center">
                    <p class="text-gray-600 dark:text-gray-400">
                        {format!("{} will appear here.", entry.label)}
                    </p>
                </div>
            </div>
        }
        .into_view(),
        None => view! { <NotFoundPage/> }.into_view(),
    }
}
