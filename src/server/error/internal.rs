use thiserror::Error;

/// Internal issues indicating corrupted data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored patron has a body mass that cannot be divided by.
    ///
    /// The create path rejects non-positive values, so this only occurs if the database
    /// was modified outside the API. Results in a 500 Internal Server Error with a
    /// generic message returned to client.
    #[error("Patron {patron_id} has non-positive body mass {body_mass}")]
    NonPositiveBodyMass {
        /// The patron whose record is invalid
        patron_id: i32,
        /// The stored body mass
        body_mass: i32,
    },
}
