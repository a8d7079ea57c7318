use super::mock_forwarder::MockForwarder;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, MX};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use simpledns_application::services::{RecordStore, ResolutionEngine};
use simpledns_domain::{RecordConfig, ReverseNaming};
use std::str::FromStr;
use std::sync::Arc;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn query(domain: &str, record_type: RecordType) -> Query {
    let mut query = Query::new();
    query.set_name(name(domain));
    query.set_query_type(record_type);
    query
}

pub fn request(queries: Vec<Query>) -> Message {
    let mut message = Message::new(0x1234, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    for q in queries {
        message.add_query(q);
    }
    message
}

pub fn upstream_a(domain: &str, ip: &str, ttl: u32) -> Record {
    Record::from_rdata(name(domain), ttl, RData::A(A(ip.parse().unwrap())))
}

pub fn upstream_mx(domain: &str, exchange: &str) -> Record {
    Record::from_rdata(name(domain), 300, RData::MX(MX::new(10, name(exchange))))
}

/// The records used by most engine tests:
/// `a.example.` A 10.0.0.1, `v6.example.` AAAA 2001:db8::1,
/// `www.example.` CNAME `a.example.`.
pub fn example_records() -> Vec<RecordConfig> {
    vec![
        RecordConfig::new("a.example.", simpledns_domain::RecordType::A, "10.0.0.1"),
        RecordConfig::new("v6.example.", simpledns_domain::RecordType::AAAA, "2001:db8::1"),
        RecordConfig::new("www.example.", simpledns_domain::RecordType::CNAME, "a.example."),
    ]
}

pub fn engine_with(records: &[RecordConfig], forwarder: Arc<MockForwarder>) -> ResolutionEngine {
    let store = RecordStore::build(records, ReverseNaming::Naive).unwrap();
    ResolutionEngine::new(store, forwarder)
}
