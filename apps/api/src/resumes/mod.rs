//! Resume upload, retrieval, and profile autofill.

pub mod autofill;
pub mod handlers;
