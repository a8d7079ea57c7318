//! simpledns application layer: local record resolution and query handling.
pub mod ports;
pub mod services;
pub mod use_cases;
