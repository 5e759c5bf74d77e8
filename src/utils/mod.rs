/*
    * Re-exports for cross-cutting utility modules: global error mapping
    * and the request logging middleware.
*/

pub mod error_handler;
pub mod request_logger;
