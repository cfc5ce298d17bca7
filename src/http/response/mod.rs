//! Custom [response] types
//!
//! [response]: axum::response::IntoResponse

pub(crate) use self::error::{HandlerError, HandlerResult};

mod error;
