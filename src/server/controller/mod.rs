//! HTTP request handlers.
//!
//! Controllers extract path parameters and payloads, validate DTOs at the boundary,
//! convert them into server parameter types, and delegate to the service layer. Every
//! handler carries a `utoipa::path` annotation so it appears in the generated OpenAPI
//! document.

pub mod cocktail;
pub mod drink;
pub mod patron;

#[cfg(test)]
mod test;
