use std::sync::{
    Mutex,
    atomic::{AtomicU32, Ordering},
};

use jiff::civil::DateTime;
use travest_directions::{
    provider_error::ProviderError, route_provider::RouteDurationProvider, route_query::RouteQuery,
    route_result::RouteResult,
};

pub fn route_result(duration_in_traffic_seconds: u64) -> RouteResult {
    RouteResult {
        duration_in_traffic_seconds,
        duration_text: format!("{} mins", duration_in_traffic_seconds / 60),
        distance_text: "106 mi".to_string(),
        start_address: "Roseville, CA, USA".to_string(),
        end_address: "780 Mission St, San Francisco, CA 94103, USA".to_string(),
    }
}

/// Provider whose duration is a pure function of the departure instant.
pub struct MockProvider<F> {
    duration: F,
    departures: Mutex<Vec<DateTime>>,
}

impl<F> MockProvider<F>
where
    F: Fn(DateTime) -> u64,
{
    pub fn new(duration: F) -> Self {
        Self {
            duration,
            departures: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.departures.lock().unwrap().len()
    }

    pub fn departures(&self) -> Vec<DateTime> {
        self.departures.lock().unwrap().clone()
    }
}

impl<F> RouteDurationProvider for MockProvider<F>
where
    F: Fn(DateTime) -> u64 + Send + Sync,
{
    async fn query(&self, query: &RouteQuery) -> Result<RouteResult, ProviderError> {
        self.departures.lock().unwrap().push(query.departure());
        Ok(route_result((self.duration)(query.departure())))
    }
}

/// Provider that answers `successes` queries with a constant hour and then
/// fails.
pub struct FailingProvider {
    successes: u32,
    calls: AtomicU32,
}

impl FailingProvider {
    pub fn after(successes: u32) -> Self {
        Self {
            successes,
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouteDurationProvider for FailingProvider {
    async fn query(&self, _query: &RouteQuery) -> Result<RouteResult, ProviderError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.successes {
            Ok(route_result(3600))
        } else {
            Err(ProviderError::UnresolvableAddress {
                status: "NOT_FOUND".to_string(),
                origin: "Nowhere".to_string(),
                destination: "San Francisco".to_string(),
            })
        }
    }
}
