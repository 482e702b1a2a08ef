use jiff::civil::DateTime;
use travest_solver::solver::solver_result::SolverResult;

fn hour_minute(instant: DateTime) -> String {
    format!("{}:{:02}", instant.hour(), instant.minute())
}

pub fn format_report(result: &SolverResult) -> String {
    let route = &result.last_route;

    format!(
        "\nStart Address: {}\nDestination Address: {}\n\n\
         Estimated Departure: {}\nEstimated Arrival: {}\n\n\
         Travel Time: {}\nDistance: {}\n",
        route.start_address,
        route.end_address,
        hour_minute(result.estimated_departure),
        hour_minute(result.estimated_arrival),
        route.duration_text,
        route.distance_text,
    )
}
