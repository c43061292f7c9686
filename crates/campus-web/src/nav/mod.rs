/// Navigation model
///
/// The compiled-in navigation tree, active-path matching and the per-row
/// styling the sidebar renders with.

mod matcher;
mod tree;

pub use matcher::is_active_path;
pub use tree::{active_entry, find_entry, nav_item_class, nav_item_indent};

use crate::components::icons::Icon;

/// A single menu item. Children are a static slice, so the tree is finite and acyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    pub children: &'static [NavEntry],
}

impl NavEntry {
    pub const fn new(label: &'static str, path: &'static str, icon: Icon) -> Self {
        Self {
            label,
            icon,
            path,
            children: &[],
        }
    }

    pub const fn with_children(mut self, children: &'static [NavEntry]) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

const STUDENT_PAGES: &[NavEntry] = &[NavEntry::new(
    "Admissions",
    "/students/admissions",
    Icon::UserPlus,
)];

pub static NAV_TREE: &[NavEntry] = &[
    NavEntry::new("Dashboard", "/dashboard", Icon::Home),
    NavEntry::new("Students", "/students", Icon::Users).with_children(STUDENT_PAGES),
    NavEntry::new("Teachers", "/teachers", Icon::Briefcase),
    NavEntry::new("Classes", "/classes", Icon::Book),
    NavEntry::new("Attendance", "/attendance", Icon::Check),
    NavEntry::new("Grades", "/grades", Icon::Award),
    NavEntry::new("Timetable", "/timetable", Icon::Calendar),
    NavEntry::new("Fees", "/fees", Icon::Wallet),
    NavEntry::new("Library", "/library", Icon::Library),
    NavEntry::new("Transport", "/transport", Icon::Bus),
    NavEntry::new("Reports", "/reports", Icon::Chart),
    NavEntry::new("Settings", "/settings", Icon::Settings),
];
