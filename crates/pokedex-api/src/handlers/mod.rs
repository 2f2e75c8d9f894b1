//! HTTP request handlers, one module per resource.

pub mod caught;
pub mod pokemon;
pub mod users;
