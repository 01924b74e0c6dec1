//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: The saturation formula and the invariants around it
//! - **Orchestration**: Coordinating repository calls and the cocktail API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod cocktail;
pub mod drink;
pub mod patron;
pub mod saturation;
pub mod tally;
