//! Domain layer - the user entity and the payload callers may supply.
//!
//! This crate has no infrastructure dependencies. The storage and HTTP
//! crates both speak in these types.

pub mod user;

pub use user::{User, UserInput};
