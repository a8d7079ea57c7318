use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::Record;
use simpledns_domain::DomainError;
use tracing::debug;

/// A decoded upstream reply.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answers: Vec<Record>,
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes `response_bytes` and checks it answers the query sent with
    /// `expected_id`. A mismatched ID or a message without the QR bit is
    /// rejected as malformed.
    pub fn parse(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                message.id(),
                expected_id
            )));
        }

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "Upstream message is not a response".to_string(),
            ));
        }

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers = message.answers().to_vec();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            rcode,
            truncated,
            answers,
        })
    }
}
