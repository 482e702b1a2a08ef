use std::fmt::Display;

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
            }
        )
    }
}

/// A single directions request for a departure instant.
///
/// Locations are opaque address strings and are forwarded to the provider
/// verbatim. The departure is a naive local date-time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    origin: String,
    destination: String,
    departure: DateTime,
    mode: TravelMode,
}

impl RouteQuery {
    pub fn driving(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: DateTime,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure,
            mode: TravelMode::Driving,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> DateTime {
        self.departure
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_driving_query() {
        let departure = date(2024, 4, 1).at(7, 0, 0, 0);
        let query = RouteQuery::driving("Roseville, CA", "San Francisco", departure);

        assert_eq!(query.origin(), "Roseville, CA");
        assert_eq!(query.destination(), "San Francisco");
        assert_eq!(query.departure(), departure);
        assert_eq!(query.mode(), TravelMode::Driving);
        assert_eq!(query.mode().to_string(), "driving");
    }
}
