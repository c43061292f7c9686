/// Topbar component with page title, clock and user menu
///
/// Sits above the content region; on narrow viewports it also carries the
/// button that opens the navigation drawer.

use chrono::{DateTime, Local, Utc};
use gloo_timers::callback::Interval;
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::*;

use crate::auth::{use_auth, AuthStore};
use crate::components::button::Button;
use crate::components::icons::Icon;
use crate::config::use_shell_config;
use crate::nav::{active_entry, NAV_TREE};
use crate::utils::time::{format_clock, format_relative_time};

#[component]
pub fn Topbar(
    #[prop(into)]
    mobile_open: Signal<bool>,
    #[prop(into)]
    on_toggle_mobile: Callback<()>,
    #[prop(into)]
    on_logout: Callback<()>,
) -> impl IntoView {
    let config = use_shell_config();
    let location = use_location();

    let app_title = config.app_title.clone();
    let page_title = move || {
        location.pathname.with(|path| {
            active_entry(NAV_TREE, path)
                .map(|entry| entry.label.to_string())
                .unwrap_or_else(|| app_title.clone())
        })
    };

    view! {
        <header class="flex h-16 shrink-0 items-center justify-between border-b border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-950 px-4 shadow-sm">
            <div class="flex items-center space-x-3 min-w-0">
                <div class="lg:hidden">
                    <Button
                        on_click=move |_: MouseEvent| on_toggle_mobile.call(())
                        aria_label="Toggle navigation"
                        expanded=mobile_open
                    >
                        {Icon::Menu.render("h-6 w-6")}
                    </Button>
                </div>
                <h1 class="truncate text-lg font-semibold text-gray-900 dark:text-white">
                    {page_title}
                </h1>
            </div>

            <div class="flex items-center space-x-4">
                <Clock format=config.clock_format.clone() tick_ms=config.clock_tick_ms/>
                <UserMenu on_logout=on_logout/>
            </div>
        </header>
    }
}

/// Wall clock refreshed on a repeating timer.
///
/// The timer is started in an effect (browser only) and cancelled in the
/// effect's cleanup, which runs when the topbar is unmounted.
#[component]
fn Clock(format: String, tick_ms: u32) -> impl IntoView {
    let (now, set_now) = create_signal::<Option<DateTime<Local>>>(None);

    create_effect(move |_| {
        set_now.set(Some(Local::now()));
        let interval = Interval::new(tick_ms, move || set_now.set(Some(Local::now())));
        on_cleanup(move || drop(interval));
    });

    view! {
        <div class="hidden sm:flex items-center space-x-1 text-sm tabular-nums text-gray-600 dark:text-gray-400">
            {Icon::Clock.render("h-4 w-4")}
            <time>{move || now.get().map(|t| format_clock(&t, &format)).unwrap_or_default()}</time>
        </div>
    }
}

#[component]
fn UserMenu(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let (show_menu, set_show_menu) = create_signal(false);

    let email = move || auth.current_user();
    let signed_in_at = move || auth.session.with(|s| s.as_ref().map(|s| s.signed_in_at));

    let handle_logout = move |_: MouseEvent| {
        set_show_menu.set(false);
        on_logout.call(());
    };

    view! {
        <div class="relative">
            <Button
                on_click=move |_: MouseEvent| set_show_menu.update(|show| *show = !*show)
                aria_label="Account menu"
                expanded=show_menu
                class="flex items-center space-x-2 p-2 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            >
                <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center">
                    <span class="text-white text-sm font-medium">
                        {move || email()
                            .and_then(|e| e.chars().next())
                            .unwrap_or('U')
                            .to_uppercase()
                            .to_string()
                        }
                    </span>
                </div>
                <span class="hidden md:block max-w-[12rem] truncate text-sm text-gray-700 dark:text-gray-300">
                    {move || email().unwrap_or_default()}
                </span>
            </Button>

            <Show when=move || show_menu.get()>
                <div class="absolute right-0 mt-2 w-64 bg-white dark:bg-gray-800 rounded-lg shadow-lg border border-gray-200 dark:border-gray-700 z-50">
                    <div class="p-4 border-b border-gray-200 dark:border-gray-700">
                        <p class="truncate font-medium text-gray-900 dark:text-white">
                            {move || email().unwrap_or_default()}
                        </p>
                        <p class="text-xs text-gray-500 dark:text-gray-500 mt-1">
                            {move || signed_in_at()
                                .map(|at| format!("Signed in {}", format_relative_time(at, Utc::now())))
                                .unwrap_or_default()
                            }
                        </p>
                    </div>

                    <div class="p-2">
                        <Button
                            on_click=handle_logout
                            class="flex w-full items-center space-x-2 px-3 py-2 text-left text-sm text-red-600 dark:text-red-400 hover:bg-red-50 dark:hover:bg-red-900/20 rounded transition-colors"
                        >
                            {Icon::Logout.render("h-4 w-4")}
                            <span>"Sign Out"</span>
                        </Button>
                    </div>
                </div>
            </Show>

            // Backdrop to close menu
            <Show when=move || show_menu.get()>
                <div
                    class="fixed inset-0 z-40"
                    on:click=move |_| set_show_menu.set(false)
                ></div>
            </Show>
        </div>
    }
}
