use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

/// Trip metadata returned by a provider for one specific departure instant.
///
/// A result is only meaningful for the departure it was queried with, traffic
/// changes from one minute to the next.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub duration_in_traffic_seconds: u64,
    pub duration_text: String,
    pub distance_text: String,
    pub start_address: String,
    pub end_address: String,
}

impl RouteResult {
    pub fn duration_in_traffic(&self) -> SignedDuration {
        SignedDuration::from_secs(
            i64::try_from(self.duration_in_traffic_seconds).unwrap_or(i64::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_in_traffic() {
        let result = RouteResult {
            duration_in_traffic_seconds: 3660,
            duration_text: "1 hour 1 min".to_string(),
            distance_text: "106 mi".to_string(),
            start_address: "Roseville, CA, USA".to_string(),
            end_address: "780 Mission St, San Francisco, CA 94103, USA".to_string(),
        };

        assert_eq!(result.duration_in_traffic(), SignedDuration::from_mins(61));
    }
}
