//! # MedBlog Shared
//!
//! Request and response shapes exchanged with the site's frontend.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
