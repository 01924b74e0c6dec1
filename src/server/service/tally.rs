//! Tally service applying drinks to patrons.
//!
//! Logging a drink overwrites the patron's saturation level with the value computed
//! for that drink alone. No history of consumed drinks is kept. The read and the write
//! are separate statements, so two concurrent tallies for one patron may lose an update.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drink::DrinkRepository, patron::PatronRepository, MutableRepository, Repository},
    error::AppError,
    model::{drink::Drink, patron::Patron},
    service::saturation::saturation_for_patron,
};

/// Service applying a drink to a patron's saturation level.
///
/// Generic over its stores so the tally logic runs against any backend implementing
/// the repository capabilities.
pub struct TallyService<P, D> {
    patrons: P,
    drinks: D,
}

impl<'a> TallyService<PatronRepository<'a>, DrinkRepository<'a>> {
    /// Creates a TallyService backed by the SeaORM repositories.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_repositories(PatronRepository::new(db), DrinkRepository::new(db))
    }
}

impl<P, D> TallyService<P, D>
where
    P: MutableRepository<Model = Patron>,
    D: Repository<Model = Drink>,
{
    pub fn with_repositories(patrons: P, drinks: D) -> Self {
        Self { patrons, drinks }
    }

    /// Logs a drink for a patron.
    ///
    /// Computes the alcohol in one serving of the drink, converts it into a saturation
    /// level for the patron's body mass with no elapsed time, and stores it as the
    /// patron's new level.
    ///
    /// # Arguments
    /// - `patron_id` - ID of the patron consuming the drink
    /// - `drink_id` - ID of the drink consumed
    ///
    /// # Returns
    /// - `Ok(Patron)` - The patron with the updated saturation level
    /// - `Err(AppError::NotFound)` - The patron or the drink does not exist
    /// - `Err(AppError::InternalErr)` - The stored patron has a non-positive body mass
    /// - `Err(AppError::DbErr)` - Database error during lookup or save
    pub async fn add_drink(&self, patron_id: i32, drink_id: i32) -> Result<Patron, AppError> {
        let mut patron = self
            .patrons
            .get(patron_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Patron not found".to_string()))?;

        let drink = self
            .drinks
            .get(drink_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Drink not found".to_string()))?;

        patron.alcohol_saturation_level = saturation_for_patron(&patron, drink.alcohol_content())?;

        let patron = self.patrons.save(&patron).await?;

        tracing::info!(
            "Patron {} drank {} ({}), saturation level now {}",
            patron.id,
            drink.id,
            drink.name,
            patron.alcohol_saturation_level
        );

        Ok(patron)
    }
}
