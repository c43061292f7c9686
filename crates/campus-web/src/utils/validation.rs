/// Validation utilities for forms and user input

use crate::error::{Result, ShellError};

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(ShellError::auth("Email is required"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ShellError::auth("Invalid email format"));
    };

    if local.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(ShellError::auth("Invalid email format"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ShellError::auth("Email cannot contain spaces"));
    }

    Ok(())
}
