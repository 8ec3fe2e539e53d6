//! Backend access: wire types, HTTP transport and the resource client.

pub mod api;
pub mod http;
pub mod types;
