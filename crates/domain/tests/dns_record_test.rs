use simpledns_domain::{DnsClass, RecordType};
use std::str::FromStr;

#[test]
fn test_record_type_from_str_is_case_insensitive() {
    assert_eq!(RecordType::from_str("a"), Ok(RecordType::A));
    assert_eq!(RecordType::from_str("Aaaa"), Ok(RecordType::AAAA));
    assert_eq!(RecordType::from_str("CNAME"), Ok(RecordType::CNAME));
}

#[test]
fn test_record_type_rejects_unconfigurable_types() {
    assert!(RecordType::from_str("PTR").is_err());
    assert!(RecordType::from_str("TXT").is_err());
}

#[test]
fn test_record_type_display_round_trips_through_string() {
    assert_eq!(RecordType::AAAA.to_string(), "AAAA");
    assert_eq!(String::from(RecordType::CNAME), "CNAME");
    assert_eq!(RecordType::try_from("cname".to_string()), Ok(RecordType::CNAME));
}

#[test]
fn test_dns_class_accepts_long_names() {
    assert_eq!(DnsClass::from_str("INET"), Ok(DnsClass::IN));
    assert_eq!(DnsClass::from_str("chaos"), Ok(DnsClass::CH));
    assert_eq!(DnsClass::from_str("HESIOD"), Ok(DnsClass::HS));
    assert_eq!(DnsClass::from_str("NONE"), Ok(DnsClass::NONE));
    assert_eq!(DnsClass::from_str("*"), Ok(DnsClass::ANY));
    assert!(DnsClass::from_str("CSNET").is_err());
}

#[test]
fn test_dns_class_default_is_in() {
    assert_eq!(DnsClass::default(), DnsClass::IN);
    assert_eq!(DnsClass::default().as_str(), "IN");
}
