//! Request models for the HTTP API.

pub mod user;

pub use user::*;
