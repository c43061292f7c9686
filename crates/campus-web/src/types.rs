/// Type definitions shared by the shell components

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as seen by the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}
