pub use super::drink::Entity as Drink;
pub use super::patron::Entity as Patron;
