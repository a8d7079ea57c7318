use super::forwarding::MessageBuilder;
use super::wire_response;
use hickory_proto::op::Message;
use simpledns_application::use_cases::HandleDnsQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

/// Bytes-in, bytes-out adapter between the UDP listener and the query
/// use case.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Produces the reply datagram for one received datagram, or `None` when
    /// nothing should be sent back.
    pub async fn handle_raw_udp(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(datagram) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %client, len = datagram.len(), error = %e, "Undecodable DNS datagram");
                return wire_response::build_format_error(datagram);
            }
        };

        debug!(
            client = %client,
            id = request.id(),
            questions = request.queries().len(),
            "DNS query received"
        );

        let response = self.use_case.execute(&request).await;

        match MessageBuilder::serialize_message(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(client = %client, id = request.id(), error = %e, "Failed to encode DNS response");
                None
            }
        }
    }
}
