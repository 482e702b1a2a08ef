pub mod google_maps_api;
pub mod provider_error;
pub mod route_provider;
pub mod route_query;
pub mod route_result;
