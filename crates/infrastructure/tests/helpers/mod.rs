#![allow(dead_code, unused_imports)]

mod dns_server_mock;

pub use dns_server_mock::{MockDnsServer, MockReply, MOCK_TTL};
