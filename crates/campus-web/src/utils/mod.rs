/// Utility functions for the web interface
///
/// Formatting and validation helpers.

pub mod time;
pub mod validation;
