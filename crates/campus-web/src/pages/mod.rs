/// Page components rendered by the router

pub mod auth;
pub mod section;
pub mod not_found;
