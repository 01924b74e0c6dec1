//! Alcohol saturation formula.
//!
//! A patron's saturation level is the alcohol consumed per unit of body mass, decayed
//! exponentially with the time elapsed since the drink:
//!
//! ```text
//! level = (alcohol_consumed / body_mass) * exp(-time_since_drink / DECAY_RATE)
//! ```

use crate::server::{error::internal::InternalError, model::patron::Patron};

/// Time constant of the exponential decay, in the same unit as `time_since_drink`.
pub const DECAY_RATE: f64 = 0.15;

/// Computes the saturation level for a single drink.
///
/// `body_mass` must be positive; callers holding stored data should go through
/// [`saturation_for_patron`], which checks it. With non-negative inputs the result lies
/// in `[0, alcohol_consumed / body_mass]`, reaching the upper bound exactly at
/// `time_since_drink == 0`.
pub fn calculate_saturation_level(
    alcohol_consumed: f64,
    body_mass: f64,
    time_since_drink: f64,
) -> f64 {
    let per_unit_body_mass = alcohol_consumed / body_mass;
    let decay_factor = (-time_since_drink / DECAY_RATE).exp();

    per_unit_body_mass * decay_factor
}

/// Saturation level of `patron` immediately after consuming `alcohol_consumed`.
///
/// # Returns
/// - `Ok(f64)` - The undecayed saturation level
/// - `Err(InternalError::NonPositiveBodyMass)` - The stored body mass is zero or negative
pub fn saturation_for_patron(patron: &Patron, alcohol_consumed: f64) -> Result<f64, InternalError> {
    if patron.body_mass <= 0 {
        return Err(InternalError::NonPositiveBodyMass {
            patron_id: patron.id,
            body_mass: patron.body_mass,
        });
    }

    Ok(calculate_saturation_level(
        alcohol_consumed,
        f64::from(patron.body_mass),
        0.0,
    ))
}
