pub mod authentication;
pub mod error_handling;
pub mod retry;
