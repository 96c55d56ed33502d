//! Structural Validation for Car and Manufacturer Records

use crate::error::ValidationError;
use car_catalog::{Car, Manufacturer};
use chrono::NaiveDate;
use tracing::debug;

/// Date format of the car `Year` field (day/month/year)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a dd/mm/yyyy date
///
/// The year must be exactly four digits with no sign.
pub fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate(text.to_string());

    match text.rsplit_once('/') {
        Some((_, year)) if year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()) => {}
        _ => return Err(invalid()),
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// Check that text is a real dd/mm/yyyy calendar date
pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_ok()
}

/// Check that text has content other than whitespace
pub fn is_non_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Validate the structural fields of a car
pub fn validate_car(car: &Car) -> Result<(), ValidationError> {
    if !is_non_blank(&car.power) {
        return Err(ValidationError::InvalidFormat {
            field: "Power",
            value: car.power.clone(),
        });
    }
    if !is_non_blank(&car.torque) {
        return Err(ValidationError::InvalidFormat {
            field: "Torque",
            value: car.torque.clone(),
        });
    }
    parse_date(&car.year)?;
    Ok(())
}

/// Keep only cars with non-blank power and torque and a valid year date
pub fn remove_invalid_cars(cars: Vec<Car>) -> Vec<Car> {
    cars.into_iter()
        .filter(|car| match validate_car(car) {
            Ok(()) => true,
            Err(e) => {
                debug!("Dropping invalid car: {}", e);
                false
            }
        })
        .collect()
}

/// Keep only manufacturers with a non-blank name and at least one car
pub fn remove_invalid_manufacturers(manufacturers: Vec<Manufacturer>) -> Vec<Manufacturer> {
    manufacturers
        .into_iter()
        .filter(|m| {
            let keep = is_non_blank(&m.name) && !m.models.is_empty();
            if !keep {
                debug!(
                    "Dropping manufacturer {:?} with {} models",
                    m.name,
                    m.models.len()
                );
            }
            keep
        })
        .collect()
}
