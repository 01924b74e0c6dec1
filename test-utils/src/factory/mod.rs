//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let patron = factory::patron::create_patron(&db).await?;
//!     let drink = factory::drink::DrinkFactory::new(&db)
//!         .abv(0.4)
//!         .amount(50)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod drink;
pub mod helpers;
pub mod patron;

pub use drink::create_drink;
pub use patron::create_patron;
