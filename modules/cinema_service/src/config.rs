//! Configuration for cinema service module

use serde::{Deserialize, Serialize};

/// Cinema service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Highest bookable seat number
    #[serde(default = "default_max_seat_number")]
    pub max_seat_number: i32,

    /// Earliest accepted release year
    #[serde(default = "default_min_release_year")]
    pub min_release_year: i32,

    /// How many years past the current one a release year may be
    #[serde(default = "default_release_year_lead")]
    pub release_year_lead: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_seat_number: default_max_seat_number(),
            min_release_year: default_min_release_year(),
            release_year_lead: default_release_year_lead(),
        }
    }
}

fn default_max_seat_number() -> i32 {
    200
}

fn default_min_release_year() -> i32 {
    1000
}

fn default_release_year_lead() -> i32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.max_seat_number, 200);
        assert_eq!(cfg.min_release_year, 1000);
        assert_eq!(cfg.release_year_lead, 5);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"max_seat_number": 50}"#).unwrap();
        assert_eq!(cfg.max_seat_number, 50);
        assert_eq!(cfg.min_release_year, 1000);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let res: Result<Config, _> = serde_json::from_str(r#"{"seats": 50}"#);
        assert!(res.is_err());
    }
}
