/*
* Service banner and health probe endpoints.
*/

pub mod handler;
pub mod routes;

pub use routes::service_routes;
