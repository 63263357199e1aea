//! HTTP REST API
//!
//! - `common`: response envelope and the validating JSON extractor
//! - `middleware`: JWT authentication (Bearer header or `token` cookie)
//! - `modules`: handlers and DTOs per resource
//! - `router`: route table and Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiServices};
