//! Threshold Filter for Validated Cars

use crate::error::ValidationError;
use crate::validator::parse_date;
use car_catalog::{Car, Weight};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Business thresholds a car must pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterThresholds {
    /// Earliest accepted model year (inclusive)
    pub min_year: i32,
    /// Power must be strictly above this
    pub min_power: i64,
    /// Minimum weight in kg (inclusive)
    pub min_weight: i64,
    /// Fuel type to exclude (case-sensitive)
    pub excluded_fuel: String,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_year: 2018,
            min_power: 200,
            min_weight: 1500,
            excluded_fuel: "Diesel".to_string(),
        }
    }
}

/// Filter applying [`FilterThresholds`] to cars that already passed validation
pub struct CarFilter {
    thresholds: FilterThresholds,
}

impl CarFilter {
    /// Create a new filter with given thresholds
    pub fn new(thresholds: FilterThresholds) -> Self {
        Self { thresholds }
    }

    /// Get the thresholds in use
    pub fn thresholds(&self) -> &FilterThresholds {
        &self.thresholds
    }

    /// Year component of the car's dd/mm/yyyy date
    pub fn extract_year(car: &Car) -> Result<i32, ValidationError> {
        parse_date(&car.year).map(|date| date.year())
    }

    /// Leading integer token of the power string ("250 hp" -> 250)
    pub fn extract_power(car: &Car) -> Result<i64, ValidationError> {
        car.power
            .split_whitespace()
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "Power",
                value: car.power.clone(),
            })
    }

    /// Weight as an integer number of kg (fractional numbers truncate)
    pub fn extract_weight(car: &Car) -> Result<i64, ValidationError> {
        car.weight_kg
            .as_ref()
            .and_then(Weight::as_integer)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "WeightKg",
                value: car
                    .weight_kg
                    .as_ref()
                    .map(Weight::to_string)
                    .unwrap_or_default(),
            })
    }

    /// Fuel type of the car
    pub fn extract_fuel(car: &Car) -> Result<&str, ValidationError> {
        car.fuel_type
            .as_deref()
            .ok_or(ValidationError::InvalidFormat {
                field: "FuelType",
                value: String::new(),
            })
    }

    /// Check whether a car passes every threshold
    ///
    /// Errors when year, power or weight cannot be read as numbers, or when
    /// weight or fuel type is missing.
    pub fn accepts(&self, car: &Car) -> Result<bool, ValidationError> {
        let t = &self.thresholds;
        let year = Self::extract_year(car)?;
        let power = Self::extract_power(car)?;
        let weight = Self::extract_weight(car)?;
        let fuel = Self::extract_fuel(car)?;

        Ok(year >= t.min_year
            && power > t.min_power
            && weight >= t.min_weight
            && fuel != t.excluded_fuel)
    }

    /// Keep the cars that pass every threshold, preserving order
    pub fn filter(&self, cars: Vec<Car>) -> Result<Vec<Car>, ValidationError> {
        let mut kept = Vec::with_capacity(cars.len());
        for car in cars {
            if self.accepts(&car)? {
                kept.push(car);
            }
        }
        Ok(kept)
    }
}

impl Default for CarFilter {
    fn default() -> Self {
        Self::new(FilterThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn car(power: &str, year: &str, weight: impl Into<Weight>, fuel: &str) -> Car {
        Car::new(power, "350 Nm", year, weight, fuel)
    }

    #[test]
    fn test_accepts_matching_car() {
        let filter = CarFilter::default();
        assert!(filter.accepts(&car("250 hp", "15/06/2019", "1600", "Petrol")).unwrap());
    }

    #[test]
    fn test_year_boundary() {
        let filter = CarFilter::default();
        assert!(filter.accepts(&car("250 hp", "01/01/2018", 1600, "Petrol")).unwrap());
        assert!(!filter.accepts(&car("250 hp", "31/12/2017", 1600, "Petrol")).unwrap());
        assert!(!filter.accepts(&car("250 hp", "10/05/2015", 1600, "Petrol")).unwrap());
    }

    #[test]
    fn test_power_is_strictly_greater() {
        let filter = CarFilter::default();
        assert!(!filter.accepts(&car("200 hp", "15/06/2019", 1600, "Petrol")).unwrap());
        assert!(filter.accepts(&car("201 hp", "15/06/2019", 1600, "Petrol")).unwrap());
    }

    #[test]
    fn test_weight_is_inclusive() {
        let filter = CarFilter::default();
        assert!(filter.accepts(&car("250 hp", "15/06/2019", 1500, "Petrol")).unwrap());
        assert!(!filter.accepts(&car("250 hp", "15/06/2019", "1499", "Petrol")).unwrap());
    }

    #[test]
    fn test_fuel_exclusion_is_case_sensitive() {
        let filter = CarFilter::default();
        assert!(!filter.accepts(&car("250 hp", "15/06/2019", 1600, "Diesel")).unwrap());
        assert!(filter.accepts(&car("250 hp", "15/06/2019", 1600, "diesel")).unwrap());
    }

    #[test]
    fn test_malformed_power_is_error() {
        let filter = CarFilter::default();
        let result = filter.filter(vec![
            car("250 hp", "15/06/2019", 1600, "Petrol"),
            car("abc hp", "15/06/2019", 1600, "Petrol"),
        ]);
        assert_eq!(
            result,
            Err(ValidationError::InvalidFormat {
                field: "Power",
                value: "abc hp".to_string(),
            })
        );
    }

    #[test]
    fn test_malformed_weight_is_error() {
        let filter = CarFilter::default();
        let result = filter.accepts(&car("250 hp", "15/06/2019", "heavy", "Petrol"));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidFormat { field: "WeightKg", .. })
        ));
    }

    #[test]
    fn test_fractional_weight_truncates() {
        let filter = CarFilter::default();
        let heavy = Car {
            weight_kg: Some(serde_json::from_str("1600.5").unwrap()),
            ..car("250 hp", "15/06/2019", 0, "Petrol")
        };
        let light = Car {
            weight_kg: Some(serde_json::from_str("1499.9").unwrap()),
            ..car("250 hp", "15/06/2019", 0, "Petrol")
        };
        assert_eq!(CarFilter::extract_weight(&heavy), Ok(1600));
        assert!(filter.accepts(&heavy).unwrap());
        assert!(!filter.accepts(&light).unwrap());
    }

    #[test]
    fn test_missing_weight_or_fuel_is_error() {
        let filter = CarFilter::default();
        let no_weight = Car {
            weight_kg: None,
            ..car("250 hp", "15/06/2019", 1600, "Petrol")
        };
        let no_fuel = Car {
            fuel_type: None,
            ..car("250 hp", "15/06/2019", 1600, "Petrol")
        };
        assert!(matches!(
            filter.accepts(&no_weight),
            Err(ValidationError::InvalidFormat { field: "WeightKg", .. })
        ));
        assert!(matches!(
            filter.accepts(&no_fuel),
            Err(ValidationError::InvalidFormat { field: "FuelType", .. })
        ));
    }

    #[test]
    fn test_custom_thresholds() {
        let filter = CarFilter::new(FilterThresholds {
            min_year: 2020,
            excluded_fuel: "Electric".to_string(),
            ..Default::default()
        });
        assert!(!filter.accepts(&car("250 hp", "15/06/2019", 1600, "Petrol")).unwrap());
        assert!(filter.accepts(&car("250 hp", "15/06/2021", 1600, "Diesel")).unwrap());
        assert!(!filter.accepts(&car("250 hp", "15/06/2021", 1600, "Electric")).unwrap());
    }

    fn arb_car() -> impl Strategy<Value = Car> {
        (
            1..=28u32,
            1..=12u32,
            2010..2025i32,
            100..400i64,
            1000..2000i64,
            any::<bool>(),
            prop::sample::select(vec!["Petrol", "Diesel", "Electric", "Hybrid"]),
        )
            .prop_map(|(day, month, year, power, weight, text_weight, fuel)| {
                let weight = if text_weight {
                    Weight::Text(weight.to_string())
                } else {
                    Weight::from(weight)
                };
                Car::new(
                    format!("{} hp", power),
                    "350 Nm",
                    format!("{:02}/{:02}/{}", day, month, year),
                    weight,
                    fuel,
                )
            })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(cars in prop::collection::vec(arb_car(), 0..40)) {
            let filter = CarFilter::default();
            let once = filter.filter(cars).unwrap();
            let twice = filter.filter(once.clone()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_preserves_order(cars in prop::collection::vec(arb_car(), 0..40)) {
            let filter = CarFilter::default();
            let indexed: Vec<Car> = cars
                .into_iter()
                .enumerate()
                .map(|(i, mut car)| {
                    car.extra.insert("Index".to_string(), i.into());
                    car
                })
                .collect();

            let kept = filter.filter(indexed).unwrap();
            let indices: Vec<u64> = kept
                .iter()
                .map(|car| car.extra["Index"].as_u64().unwrap())
                .collect();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
