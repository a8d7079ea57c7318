pub mod forwarding;
pub mod server;
pub mod transport;
pub mod wire_response;

pub use forwarding::{DisabledForwarder, DnsForwarder};
pub use server::DnsServerHandler;
