//! Blog API
//!
//! HTTP service for users and articles. The binaries (`blog_api`, `seed`)
//! are thin wrappers around the pieces exported here.

pub mod api;
pub mod config;
pub mod openapi;
pub mod seed;
pub mod state;
