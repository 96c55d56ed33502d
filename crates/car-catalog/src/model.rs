//! Catalog Records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Car weight as it appears in the catalog (number or text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Weight {
    Number(Number),
    Text(String),
}

impl Weight {
    /// Integer value of the weight, if it holds one
    ///
    /// Floats are truncated toward zero. Text must be an integer literal,
    /// optionally surrounded by whitespace.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Weight::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .map(f64::trunc)
                    .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Weight::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Weight::Number(value.into())
    }
}

impl From<i32> for Weight {
    fn from(value: i32) -> Self {
        Weight::Number(value.into())
    }
}

impl From<&str> for Weight {
    fn from(value: &str) -> Self {
        Weight::Text(value.to_string())
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Number(n) => write!(f, "{}", n),
            Weight::Text(s) => f.write_str(s),
        }
    }
}

/// Single car model record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Power rating, e.g. "250 hp"
    #[serde(rename = "Power")]
    pub power: String,
    /// Torque rating (free text)
    #[serde(rename = "Torque")]
    pub torque: String,
    /// Model year date, dd/mm/yyyy
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "WeightKg", default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<Weight>,
    #[serde(rename = "FuelType", default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    /// Fields the pipeline does not inspect, kept in input order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Car {
    /// Create a car with no passthrough fields
    pub fn new(
        power: impl Into<String>,
        torque: impl Into<String>,
        year: impl Into<String>,
        weight_kg: impl Into<Weight>,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            power: power.into(),
            torque: torque.into(),
            year: year.into(),
            weight_kg: Some(weight_kg.into()),
            fuel_type: Some(fuel_type.into()),
            extra: Map::new(),
        }
    }
}

/// Manufacturer with its model lineup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(rename = "Manufacturer")]
    pub name: String,
    #[serde(rename = "Models")]
    pub models: Vec<Car>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manufacturer {
    /// Create a manufacturer with the given models
    pub fn new(name: impl Into<String>, models: Vec<Car>) -> Self {
        Self {
            name: name.into(),
            models,
            extra: Map::new(),
        }
    }
}
