use super::{is_active_path, NavEntry};

const ITEM_BASE: &str =
    "group flex items-center gap-3 rounded-md py-2 text-sm font-medium transition-colors";
const ITEM_ACTIVE: &str = "bg-blue-50 text-blue-700 dark:bg-blue-900/30 dark:text-blue-300";
const ITEM_INACTIVE: &str =
    "text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-white";
const ITEM_EXPANDED: &str = "pr-3";
const ITEM_COLLAPSED: &str = "justify-center px-2";

/// Left padding of a depth-0 row, in rem
const INDENT_BASE_REM: f32 = 0.75;
/// Extra left padding per level of nesting, in rem
const INDENT_STEP_REM: f32 = 1.25;

/// Class list for a navigation link
pub fn nav_item_class(active: bool, collapsed: bool) -> String {
    format!(
        "{} {} {}",
        ITEM_BASE,
        if active { ITEM_ACTIVE } else { ITEM_INACTIVE },
        if collapsed { ITEM_COLLAPSED } else { ITEM_EXPANDED },
    )
}

/// Inline style indenting a row by its depth.
///
/// A collapsed sidebar shows icons only, unindented.
pub fn nav_item_indent(depth: usize, collapsed: bool) -> String {
    if collapsed {
        return String::new();
    }
    let padding = INDENT_BASE_REM + INDENT_STEP_REM * depth as f32;
    format!("padding-left: {}rem", padding)
}

/// The deepest entry that is active for `current`, first match in pre-order
pub fn active_entry(tree: &'static [NavEntry], current: &str) -> Option<&'static NavEntry> {
    tree.iter()
        .find(|entry| is_active_path(current, entry.path))
        .map(|entry| active_entry(entry.children, current).unwrap_or(entry))
}

/// The entry whose path is exactly `path`, at any depth
pub fn find_entry(tree: &'static [NavEntry], path: &str) -> Option<&'static NavEntry> {
    tree.iter().find_map(|entry| {
        if entry.path == path {
            Some(entry)
        } else {
            find_entry(entry.children, path)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icons::Icon;
    use crate::nav::NAV_TREE;

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
    fn class_follows_active_flag() {
        let active = nav_item_class(true, false);
        let inactive = nav_item_class(false, false);

        assert!(active.contains(ITEM_ACTIVE));
        assert!(!active.contains(ITEM_INACTIVE));
        assert!(inactive.contains(ITEM_INACTIVE));
        assert!(!inactive.contains(ITEM_ACTIVE));
    }

    #[test]
    fn collapsed_class_is_centered() {
        assert!(nav_item_class(false, true).contains(ITEM_COLLAPSED));
        assert!(nav_item_class(true, true).contains(ITEM_COLLAPSED));
        assert!(nav_item_class(true, false).contains(ITEM_EXPANDED));
    }

    #[test]
    fn indentation_grows_with_depth() {
        assert_eq!(nav_item_indent(0, false), "padding-left: 0.75rem");
        assert_eq!(nav_item_indent(1, false), "padding-left: 2rem");
        assert_eq!(nav_item_indent(2, false), "padding-left: 3.25rem");
    }

    #[test]
    fn collapsed_rows_are_unindented() {
        for depth in 0..3 {
            assert!(nav_item_indent(depth, true).is_empty());
        }
    }

    #[test]
    fn active_entry_is_the_deepest_match() {
        assert_eq!(active_entry(NESTED, "/reports/termly/spring/week-2").unwrap().label, "Spring");
        assert_eq!(active_entry(NESTED, "/reports/annual").unwrap().label, "Annual");
        assert_eq!(active_entry(NESTED, "/reports").unwrap().label, "Reports");
        assert!(active_entry(NESTED, "/reportsx").is_none());
        assert!(active_entry(NESTED, "/").is_none());
    }

    #[test]
    fn active_entry_on_child_route_is_the_child() {
        assert_eq!(active_entry(NAV_TREE, "/students/admissions").unwrap().label, "Admissions");
        assert_eq!(active_entry(NAV_TREE, "/students/42").unwrap().label, "Students");
    }

    #[test]
    fn find_entry_requires_exact_path() {
        assert_eq!(find_entry(NAV_TREE, "/students/admissions").unwrap().label, "Admissions");
        assert_eq!(find_entry(NAV_TREE, "/settings").unwrap().label, "Settings");
        assert!(find_entry(NAV_TREE, "/settings/profile").is_none());
    }
}
