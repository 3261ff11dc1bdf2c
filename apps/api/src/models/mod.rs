pub mod network;
pub mod resume;
pub mod user;
