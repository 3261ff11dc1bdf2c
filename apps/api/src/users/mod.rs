//! User registration, authentication, and profile management.

pub mod handlers;
