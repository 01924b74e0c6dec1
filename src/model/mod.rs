//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert into and out
//! of them at the controller boundary.

pub mod api;
pub mod drink;
pub mod patron;
pub mod saturation;
