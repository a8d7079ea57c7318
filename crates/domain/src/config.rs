mod errors;
mod logging;
mod records;
mod resolution;
mod root;
mod server;
mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::{fqdn, RecordConfig, DEFAULT_TTL};
pub use resolution::{ResolutionConfig, MAX_ALIAS_DEPTH_LIMIT};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;

pub use crate::reverse_name::ReverseNaming;
