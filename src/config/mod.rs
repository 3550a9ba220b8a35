//! Restaurant definitions loaded from TOML.
//!
//! ```toml
//! name = "Amelie's cafe"
//! location = "Chennai"
//! opening_time = "10:30:00"
//! closing_time = "22:00:00"
//!
//! [[menu]]
//! name = "Sweet corn soup"
//! price = 119
//! ```
//!
//! Times use chrono's `HH:MM:SS` form. The `menu` table array is optional and is
//! applied in file order.

use crate::clock::Clock;
use crate::model::{MenuItem, RestaurantCreate};
use crate::restaurant::Restaurant;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a restaurant definition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    pub name: String,
    pub location: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

impl RestaurantConfig {
    /// Loads a definition from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.as_ref().display(), restaurant = %config.name, items = config.menu.len(), "Loaded restaurant config");
        Ok(config)
    }

    /// Parses a definition from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the restaurant, reading time from the system clock.
    pub fn into_restaurant(self) -> Restaurant {
        Restaurant::from_create_params(self.into())
    }

    /// Builds the restaurant with a caller-supplied clock.
    pub fn into_restaurant_with_clock(self, clock: impl Clock + 'static) -> Restaurant {
        self.into_restaurant().with_clock(clock)
    }
}

impl From<RestaurantConfig> for RestaurantCreate {
    fn from(config: RestaurantConfig) -> Self {
        Self {
            name: config.name,
            location: config.location,
            opening_time: config.opening_time,
            closing_time: config.closing_time,
            menu: config.menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_table_is_optional() {
        let config = RestaurantConfig::from_toml_str(
            r#"
            name = "Amelie's cafe"
            location = "Chennai"
            opening_time = "10:30:00"
            closing_time = "22:00:00"
            "#,
        )
        .unwrap();
        assert!(config.menu.is_empty());
        assert_eq!(config.opening_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn malformed_time_is_a_parse_error() {
        let err = RestaurantConfig::from_toml_str(
            r#"
            name = "Amelie's cafe"
            location = "Chennai"
            opening_time = "half past ten"
            closing_time = "22:00:00"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = RestaurantConfig::from_toml_str(
            r#"
            name = "Amelie's cafe"
            location = "Chennai"
            opening_time = "10:30:00"
            closing_time = "22:00:00"

            [[menu]]
            name = "Sweet corn soup"
            price = -1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
