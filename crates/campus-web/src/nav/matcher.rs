/// Whether a navigation entry at `item` should be highlighted while viewing `current`.
///
/// Matches on equality or on a `/` boundary, so `/students` is active for
/// `/students/123` but not for `/studentsx`. Paths are compared as given.
pub fn is_active_path(current: &str, item: &str) -> bool {
    match current.strip_prefix(item) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
