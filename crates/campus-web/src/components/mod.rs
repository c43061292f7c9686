/// UI components for the dashboard shell
///
/// Layout pieces (shell, sidebar, topbar), the navigation tree and the
/// primitives they are built from.

pub mod shell;
pub mod sidebar;
pub mod topbar;
pub mod nav_tree;
pub mod button;
pub mod icons;
