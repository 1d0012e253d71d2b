//! Custom extractors that reject with `AppError` instead of axum's defaults.

mod json_body;
mod user_id;

pub use json_body::JsonBody;
pub use user_id::{UserId, INVALID_USER_ID};
