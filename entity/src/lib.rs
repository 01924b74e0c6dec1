//! SeaORM entity definitions for the tally database.
//!
//! Each module mirrors a table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for concise queries.

pub mod prelude;

pub mod drink;
pub mod patron;
