use std::time::Duration;

use jiff::tz::TimeZone;
use serde::Deserialize;
use tracing::debug;

use crate::{
    provider_error::ProviderError, route_provider::RouteDurationProvider, route_query::RouteQuery,
    route_result::RouteResult,
};

pub const GOOGLE_MAPS_DIRECTIONS_API_URL: &str =
    "https://maps.googleapis.com/maps/api/directions/json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize, Debug)]
struct TextValue {
    text: String,
    value: u64,
}

#[derive(Deserialize, Debug)]
struct DirectionsLeg {
    distance: TextValue,

    /// Only present when a departure time was requested for driving
    duration_in_traffic: Option<TextValue>,

    start_address: String,
    end_address: String,
}

#[derive(Deserialize, Debug)]
struct DirectionsRoute {
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Deserialize, Debug)]
struct DirectionsResponse {
    status: String,
    error_message: Option<String>,

    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    fn into_route_result(self, query: &RouteQuery) -> Result<RouteResult, ProviderError> {
        match self.status.as_str() {
            "OK" => {}
            "NOT_FOUND" | "ZERO_RESULTS" => {
                return Err(ProviderError::UnresolvableAddress {
                    status: self.status,
                    origin: query.origin().to_string(),
                    destination: query.destination().to_string(),
                });
            }
            _ => {
                return Err(ProviderError::Service {
                    status: self.status,
                    message: self.error_message.unwrap_or_default(),
                });
            }
        }

        let leg = self
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .ok_or_else(|| ProviderError::MalformedResponse("no route leg".to_string()))?;

        let duration_in_traffic = leg.duration_in_traffic.ok_or_else(|| {
            ProviderError::MalformedResponse("leg has no duration_in_traffic".to_string())
        })?;

        Ok(RouteResult {
            duration_in_traffic_seconds: duration_in_traffic.value,
            duration_text: duration_in_traffic.text,
            distance_text: leg.distance.text,
            start_address: leg.start_address,
            end_address: leg.end_address,
        })
    }
}

pub struct GoogleMapsClientParams {
    pub api_key: String,
    pub base_url: String,

    /// Zone used to turn naive departure times into unix seconds
    pub time_zone: TimeZone,
    pub timeout: Duration,
}

impl GoogleMapsClientParams {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GOOGLE_MAPS_DIRECTIONS_API_URL.to_string(),
            time_zone: TimeZone::system(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct GoogleMapsDirectionsClient {
    params: GoogleMapsClientParams,
    client: reqwest::Client,
}

impl GoogleMapsDirectionsClient {
    pub fn new(params: GoogleMapsClientParams) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .build()?;

        Ok(Self { params, client })
    }

    fn departure_timestamp(&self, query: &RouteQuery) -> Result<i64, ProviderError> {
        let zoned = query.departure().to_zoned(self.params.time_zone.clone())?;
        Ok(zoned.timestamp().as_second())
    }

    fn build_request(&self, query: &RouteQuery) -> Result<reqwest::Request, ProviderError> {
        let departure_time = self.departure_timestamp(query)?.to_string();
        let mode = query.mode().to_string();

        let request = self
            .client
            .get(&self.params.base_url)
            .query(&[
                ("origin", query.origin()),
                ("destination", query.destination()),
                ("mode", mode.as_str()),
                ("departure_time", departure_time.as_str()),
                ("key", self.params.api_key.as_str()),
            ])
            .build()?;

        Ok(request)
    }
}

/// Turns a non-2xx response into a service error carrying the body as message.
async fn service_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16().to_string();
    let message = match response.text().await {
        Ok(message) => message,
        Err(err) => {
            debug!("GoogleMaps: Failed to read {} error body: {}", status, err);
            String::new()
        }
    };

    ProviderError::Service { status, message }
}

impl RouteDurationProvider for GoogleMapsDirectionsClient {
    async fn query(&self, query: &RouteQuery) -> Result<RouteResult, ProviderError> {
        let request = self.build_request(query)?;

        debug!(
            "GoogleMaps: Requesting directions departing at {}",
            query.departure()
        );

        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            return Err(service_error(response).await);
        }

        let bytes = response.bytes().await?;
        let directions: DirectionsResponse = serde_json::from_slice(&bytes)?;

        directions.into_route_result(query)
    }
}
