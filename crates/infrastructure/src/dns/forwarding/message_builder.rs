//! Upstream query construction
//!
//! Copies a client's question into a fresh recursive query in wire format
//! using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use simpledns_domain::DomainError;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a query for the same name, type and class as `question`.
    ///
    /// The message gets a random ID and the RD flag. Returns the ID together
    /// with the serialized bytes so the caller can match the response.
    pub fn build_query(question: &Query) -> Result<(u16, Vec<u8>), DomainError> {
        let mut query = Query::new();
        query.set_name(question.name().clone());
        query.set_query_type(question.query_type());
        query.set_query_class(question.query_class());

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    pub fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::{DNSClass, Name, RecordType};
    use std::str::FromStr;

    fn question(name: &str, record_type: RecordType) -> Query {
        let mut q = Query::new();
        q.set_name(Name::from_str(name).unwrap());
        q.set_query_type(record_type);
        q
    }

    #[test]
    fn test_build_query_sets_rd_flag() {
        let (_, bytes) = MessageBuilder::build_query(&question("example.com.", RecordType::A)).unwrap();

        assert!(bytes.len() >= 12, "DNS message too short: {} bytes", bytes.len());
        assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
        assert_eq!(bytes[2] & 0x80, 0x00, "QR flag should be clear");
    }

    #[test]
    fn test_wire_id_matches_returned_id() {
        let (id, bytes) = MessageBuilder::build_query(&question("test.com.", RecordType::AAAA)).unwrap();

        let wire_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        assert_eq!(wire_id, id);
    }

    #[test]
    fn test_question_is_copied() {
        let mut original = question("Mixed.Example.", RecordType::MX);
        original.set_query_class(DNSClass::CH);

        let (_, bytes) = MessageBuilder::build_query(&original).unwrap();
        let decoded = Message::from_vec(&bytes).unwrap();

        assert_eq!(decoded.queries().len(), 1);
        let copied = &decoded.queries()[0];
        assert_eq!(copied.name(), original.name());
        assert_eq!(copied.query_type(), RecordType::MX);
        assert_eq!(copied.query_class(), DNSClass::CH);
    }
}
