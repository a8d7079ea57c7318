//! simpledns domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod reverse_name;

pub use config::{CliOverrides, Config, ConfigError, RecordConfig, ReverseNaming};
pub use dns_record::{DnsClass, RecordType};
pub use errors::DomainError;
pub use reverse_name::reverse_name;
