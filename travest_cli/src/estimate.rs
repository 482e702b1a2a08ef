use clap::Args;
use jiff::civil::{Date, Time};
use tracing::{info, warn};
use travest_directions::{
    google_maps_api::{GoogleMapsClientParams, GoogleMapsDirectionsClient},
    route_provider::RouteDurationProvider,
};
use travest_solver::solver::{
    departure_time_solver::DepartureTimeSolver,
    solver_params::DEFAULT_MAX_ITERATIONS,
    solver_result::SolverResult,
};

use crate::{config::EstimateConfig, parsers, report::format_report};

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Start location
    #[arg(short, long)]
    pub origin: Option<String>,

    /// End location
    #[arg(short, long)]
    pub destination: Option<String>,

    /// Arrival date (MM/DD/YYYY or YYYY-MM-DD)
    #[arg(long, visible_alias = "ad", value_parser = parsers::parse_arrival_date)]
    pub arrival_date: Option<Date>,

    /// Desired arrival time (e.g., "8:00", "17:30")
    #[arg(long, visible_alias = "at", value_parser = parsers::parse_arrival_time)]
    pub arrival_time: Option<Time>,

    /// Google Maps API key
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Max iterations
    #[arg(
        short,
        long,
        visible_alias = "mi",
        default_value_t = DEFAULT_MAX_ITERATIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_iterations: u32,

    /// Damped correction gain in (0, 1], full-step correction when omitted
    #[arg(long)]
    pub damping: Option<f64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn estimate<P>(provider: P, config: &EstimateConfig) -> anyhow::Result<SolverResult>
where
    P: RouteDurationProvider,
{
    info!(
        "Estimating departure from {} to {} arriving at {}",
        config.origin, config.destination, config.desired_arrival
    );

    let solver = DepartureTimeSolver::new(provider, config.solver.clone());
    let result = solver
        .solve(&config.origin, &config.destination, config.desired_arrival)
        .await?;

    if result.converged {
        info!("Converged after {} iterations", result.iterations_used);
    } else {
        warn!(
            "No departure converged after {} iterations, showing the last estimate",
            result.iterations_used
        );
    }

    Ok(result)
}

pub fn render(result: &SolverResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(format_report(result))
    }
}

pub async fn run(config: EstimateConfig, json: bool) -> anyhow::Result<()> {
    let client =
        GoogleMapsDirectionsClient::new(GoogleMapsClientParams::new(config.api_key.clone()))?;

    let result = estimate(client, &config).await?;

    println!("{}", render(&result, json)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::{DateTime, date};
    use travest_solver::solver::solver_params::SolverParams;
    use travest_directions::{
        provider_error::ProviderError, route_query::RouteQuery, route_result::RouteResult,
    };

    use super::*;

    struct ConstantProvider;

    impl RouteDurationProvider for ConstantProvider {
        async fn query(&self, _query: &RouteQuery) -> Result<RouteResult, ProviderError> {
            Ok(RouteResult {
                duration_in_traffic_seconds: 3600,
                duration_text: "1 hour".to_string(),
                distance_text: "60 mi".to_string(),
                start_address: "Roseville, CA, USA".to_string(),
                end_address: "San Francisco, CA, USA".to_string(),
            })
        }
    }

    struct DeniedProvider;

    impl RouteDurationProvider for DeniedProvider {
        async fn query(&self, _query: &RouteQuery) -> Result<RouteResult, ProviderError> {
            Err(ProviderError::Service {
                status: "REQUEST_DENIED".to_string(),
                message: "The provided API key is invalid.".to_string(),
            })
        }
    }

    fn config(desired_arrival: DateTime) -> EstimateConfig {
        EstimateConfig {
            origin: "Roseville, CA".to_string(),
            destination: "San Francisco".to_string(),
            desired_arrival,
            api_key: "key".to_string(),
            solver: SolverParams::default(),
        }
    }

    #[tokio::test]
    async fn test_estimate_and_render() {
        let config = config(date(2024, 4, 1).at(8, 0, 0, 0));
        let result = estimate(ConstantProvider, &config)
            .await
            .unwrap();

        let report = render(&result, false).unwrap();
        assert!(report.contains("Estimated Departure: 7:00"));
        assert!(report.contains("Estimated Arrival: 8:00"));
        assert!(report.contains("Travel Time: 1 hour"));

        let json: serde_json::Value = serde_json::from_str(&render(&result, true).unwrap()).unwrap();
        assert_eq!(json["estimated_departure"], "2024-04-01T07:00:00");
        assert_eq!(json["converged"], true);
        assert_eq!(json["iterations_used"], 1);
        assert_eq!(json["last_route"]["duration_in_traffic_seconds"], 3600);
    }

    #[tokio::test]
    async fn test_provider_error_surfaces() {
        let config = config(date(2024, 4, 1).at(8, 0, 0, 0));
        let error = estimate(DeniedProvider, &config)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("REQUEST_DENIED"));
    }
}
