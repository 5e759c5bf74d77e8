/*
* Voice enrollment and verification endpoints.
*/

pub mod handler;
pub mod routes;

pub use routes::voice_routes;
