//! # Content Shared
//!
//! Wire types shared between the content server, its front-end and the
//! remote generation endpoint. No domain logic lives here.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse, Toast};
