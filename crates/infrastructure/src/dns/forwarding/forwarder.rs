use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use simpledns_application::ports::UpstreamForwarder;
use simpledns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Relays questions to one fixed upstream resolver.
///
/// Each call is a single exchange: no retry, no caching.
pub struct DnsForwarder {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(upstream: SocketAddr, timeout: Duration) -> Self {
        Self::with_transport(Arc::new(UdpTransport::new(upstream)), timeout)
    }

    pub fn with_transport(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }
}

#[async_trait]
impl UpstreamForwarder for DnsForwarder {
    async fn forward(&self, query: &Query) -> Result<Vec<Record>, DomainError> {
        let (id, request_bytes) = MessageBuilder::build_query(query)?;

        let response = self.transport.send(&request_bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes, id)?;

        debug!(
            name = %query.name(),
            record_type = ?query.query_type(),
            protocol = self.transport.protocol_name(),
            rcode = ?parsed.rcode,
            answers = parsed.answers.len(),
            "Upstream answered"
        );

        Ok(parsed.answers)
    }
}
