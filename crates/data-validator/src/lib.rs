//! Catalog Data Validation and Filtering
//!
//! Structural validation of car and manufacturer records, plus business
//! threshold filtering on year, power, weight and fuel type.

mod error;
mod filter;
mod validator;

pub use error::ValidationError;
pub use filter::{CarFilter, FilterThresholds};
pub use validator::{
    is_non_blank, is_valid_date, parse_date, remove_invalid_cars, remove_invalid_manufacturers,
    validate_car, DATE_FORMAT,
};
