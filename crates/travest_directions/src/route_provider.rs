use crate::{provider_error::ProviderError, route_query::RouteQuery, route_result::RouteResult};

/// Source of traffic-aware driving durations.
///
/// Implementations must return the duration predicted for the query's
/// departure instant, not a traffic-agnostic one. Errors are returned as-is,
/// callers never retry.
pub trait RouteDurationProvider {
    fn query(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<RouteResult, ProviderError>> + Send;
}
