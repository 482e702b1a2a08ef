use jiff::civil::DateTime;
use serde::Serialize;
use travest_directions::route_result::RouteResult;

/// Outcome of a solve.
///
/// `last_route` is the result measured at `estimated_departure`, so
/// `estimated_arrival == estimated_departure + last_route.duration_in_traffic()`.
#[derive(Serialize, Debug, Clone)]
pub struct SolverResult {
    pub estimated_departure: DateTime,
    pub estimated_arrival: DateTime,
    pub last_route: RouteResult,
    pub converged: bool,
    pub iterations_used: u32,
}
