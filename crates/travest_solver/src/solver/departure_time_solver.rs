use jiff::civil::DateTime;
use tracing::debug;
use travest_directions::{
    route_provider::RouteDurationProvider, route_query::RouteQuery, route_result::RouteResult,
};

use crate::{timer_debug, utils::minute::same_minute};

use super::{solve_error::SolveError, solver_params::SolverParams, solver_result::SolverResult};

/// Finds the departure instant whose traffic-aware arrival matches a desired
/// arrival instant.
///
/// The departure candidate is seeded with the duration measured at the desired
/// arrival itself, then corrected by the observed arrival error until the
/// arrival lands in the desired minute or `max_iterations` is exhausted.
/// Queries are issued one at a time since each candidate depends on the
/// previous answer.
pub struct DepartureTimeSolver<P> {
    provider: P,
    params: SolverParams,
}

impl<P> DepartureTimeSolver<P>
where
    P: RouteDurationProvider,
{
    pub fn new(provider: P, params: SolverParams) -> Self {
        Self { provider, params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    async fn query(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime,
    ) -> Result<RouteResult, SolveError> {
        let query = RouteQuery::driving(origin, destination, departure);
        let route = timer_debug!(
            format_args!("Route query departing at {departure}"),
            self.provider.query(&query).await
        )?;
        Ok(route)
    }

    pub async fn solve(
        &self,
        origin: &str,
        destination: &str,
        desired_arrival: DateTime,
    ) -> Result<SolverResult, SolveError> {
        self.params.validate()?;

        let seed = self.query(origin, destination, desired_arrival).await?;
        let mut departure = desired_arrival.checked_sub(seed.duration_in_traffic())?;

        debug!(
            "Seed duration {}s, first departure candidate {}",
            seed.duration_in_traffic_seconds, departure
        );

        let mut iterations_used = 0;
        loop {
            iterations_used += 1;

            let route = self.query(origin, destination, departure).await?;
            let arrival = departure.checked_add(route.duration_in_traffic())?;
            let converged = same_minute(arrival, desired_arrival);

            debug!(
                "Iteration {}/{}: departure {} arrival {} ({}s in traffic)",
                iterations_used,
                self.params.max_iterations,
                departure,
                arrival,
                route.duration_in_traffic_seconds
            );

            if converged || iterations_used >= self.params.max_iterations {
                return Ok(SolverResult {
                    estimated_departure: departure,
                    estimated_arrival: arrival,
                    last_route: route,
                    converged,
                    iterations_used,
                });
            }

            let arrival_error = arrival.duration_since(desired_arrival);
            departure = departure.checked_sub(self.params.correction.step(arrival_error))?;
        }
    }
}
