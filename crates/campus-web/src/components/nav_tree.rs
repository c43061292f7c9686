/// Navigation tree component
///
/// Recursive rendering of the static navigation tree with active highlighting.

use leptos::*;
use leptos_router::*;

use crate::nav::{is_active_path, nav_item_class, nav_item_indent, NavEntry, NAV_TREE};

#[component]
pub fn NavTree(
    #[prop(into)]
    collapsed: MaybeSignal<bool>,
    /// Called after an entry is clicked, e.g. to close the mobile drawer
    #[prop(optional, into)]
    on_navigate: Option<Callback<()>>,
    #[prop(default = NAV_TREE)]
    entries: &'static [NavEntry],
) -> impl IntoView {
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());

    view! {
        <nav aria-label="Main navigation" class="flex-1 overflow-y-auto px-2 py-4">
            {nav_list(entries, 0, pathname, collapsed, on_navigate)}
        </nav>
    }
}

// Returns a concrete `View` so the function can recurse into children.
fn nav_list(
    entries: &'static [NavEntry],
    depth: usize,
    pathname: Signal<String>,
    collapsed: MaybeSignal<bool>,
    on_navigate: Option<Callback<()>>,
) -> View {
    let items = entries
        .iter()
        .map(move |entry| {
            let active =
                Signal::derive(move || pathname.with(|path| is_active_path(path, entry.path)));
            let children = entry
                .has_children()
                .then(|| nav_list(entry.children, depth + 1, pathname, collapsed, on_navigate));

            view! {
                <li>
                    // Wraps only this entry's link so nested clicks are not reported twice
                    <div on:click=move |_| notify_navigate(on_navigate)>
                        <A
                            href=entry.path
                            class=move || nav_item_class(active.get(), collapsed.get())
                        >
                            <span
                                class="flex min-w-0 items-center gap-3"
                                style=move || nav_item_indent(depth, collapsed.get())
                                title=move || collapsed.get().then(|| entry.label.to_string())
                            >
                                {entry.icon.render("h-5 w-5 shrink-0")}
                                <Show when=move || !collapsed.get()>
                                    <span class="truncate">{entry.label}</span>
                                </Show>
                            </span>
                        </A>
                    </div>
                    {children}
                </li>
            }
        })
        .collect_view();

    let (class, role) = if depth == 0 {
        ("space-y-1", "list")
    } else {
        ("mt-1 space-y-1", "group")
    };

    view! {
        <ul class=class role=role>
            {items}
        </ul>
    }
    .into_view()
}

fn notify_navigate(on_navigate: Option<Callback<()>>) {
    if let Some(on_navigate) = on_navigate {
        on_navigate.call(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icons::Icon;
    use std::cell::Cell;
    use std::rc::Rc;

    static NESTED: &[NavEntry] = &[
        NavEntry::new("Reports", "/reports", Icon::Chart).with_children(REPORT_PAGES),
        NavEntry::new("Settings", "/settings", Icon::Settings),
    ];

    const REPORT_PAGES: &[NavEntry] = &[
        NavEntry::new("Termly", "/reports/termly", Icon::Calendar).with_children(TERMLY_PAGES),
        NavEntry::new("Annual", "/reports/annual", Icon::Book),
    ];

    const TERMLY_PAGES: &[NavEntry] =
        &[NavEntry::new("Spring", "/reports/termly/spring", Icon::Award)];

    #[test]
    fn navigate_callback_fires_once_per_click() {
        let runtime = create_runtime();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let on_navigate = Callback::new(move |_: ()| counter.set(counter.get() + 1));

        notify_navigate(Some(on_navigate));
        assert_eq!(calls.get(), 1);

        notify_navigate(None);
        assert_eq!(calls.get(), 1);

        runtime.dispose();
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;
        use crate::nav::nav_item_class;
        use crate::test_utils::render_at;

        #[test]
        fn renders_top_level_rows_plus_one_nested_row() {
            let html = render_at("/dashboard", || view! { <NavTree collapsed=false/> });

            assert_eq!(html.matches("<li").count(), NAV_TREE.len() + 1);
            assert_eq!(html.matches("<ul").count(), 2);
            assert_eq!(html.matches("padding-left: 0.75rem").count(), NAV_TREE.len());
            assert_eq!(html.matches("padding-left: 2rem").count(), 1);

            // The nested list sits under Students, before the next sibling
            let students = html.find(r#"href="/students""#).unwrap();
            let nested = html.find(r#"role="group""#).unwrap();
            let teachers = html.find(r#"href="/teachers""#).unwrap();
            assert!(students < nested && nested < teachers);
        }

        #[test]
        fn renders_depth_first_in_pre_order() {
            let html = render_at("/", || view! { <NavTree collapsed=false entries=NESTED/> });

            let positions: Vec<_> = ["Reports", "Termly", "Spring", "Annual", "Settings"]
                .iter()
                .map(|label| html.find(label).unwrap())
                .collect();
            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

            assert_eq!(html.matches("padding-left: 0.75rem").count(), 2);
            assert_eq!(html.matches("padding-left: 2rem").count(), 2);
            assert_eq!(html.matches("padding-left: 3.25rem").count(), 1);
        }

        #[test]
        fn parent_and_child_are_active_on_child_route() {
            let html = render_at("/students/admissions", || view! { <NavTree collapsed=false/> });

            assert_eq!(html.matches(&nav_item_class(true, false)).count(), 2);
            assert_eq!(html.matches(&nav_item_class(false, false)).count(), NAV_TREE.len() - 1);
        }

        #[test]
        fn collapsed_tree_is_icons_only() {
            let html = render_at("/", || view! { <NavTree collapsed=true/> });

            assert_eq!(html.matches("<li").count(), NAV_TREE.len() + 1);
            assert!(!html.contains("padding-left"));
            assert!(!html.contains(r#"class="truncate""#));
            assert!(html.contains(r#"title="Admissions""#));
        }
    }
}
