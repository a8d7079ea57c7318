use hickory_proto::rr::{DNSClass, Name};
use rustc_hash::FxHashMap;
use simpledns_domain::config::{fqdn, RecordConfig};
use simpledns_domain::{reverse_name, DnsClass, DomainError, RecordType, ReverseNaming};
use std::net::IpAddr;
use tracing::{debug, info, warn};

/// Attributes shared by every index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLookup {
    /// Fully-qualified name. For reverse entries this is the forward name
    /// the PTR answer points at.
    pub domain: Name,
    pub ttl: u32,
    pub class: DNSClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressLookup {
    pub lookup: DomainLookup,
    pub ip: IpAddr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasLookup {
    pub lookup: DomainLookup,
    pub target: Name,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseLookup {
    pub lookup: DomainLookup,
}

/// The three read-only indices built from configured records.
///
/// Keys are lowercase fully-qualified names built from raw label bytes
/// (see [`name_key`]). Nothing
/// mutates the store after [`RecordStore::build`], so it can be shared
/// between query tasks without locking.
#[derive(Debug, Default)]
pub struct RecordStore {
    addresses: FxHashMap<String, AddressLookup>,
    aliases: FxHashMap<String, AliasLookup>,
    reverse: FxHashMap<String, ReverseLookup>,
}

impl RecordStore {
    /// Builds all indices from validated records, in order.
    ///
    /// Fails on the first value that is not an IP address (A/AAAA) or name
    /// that cannot be represented as a domain name; no partial store is
    /// returned.
    pub fn build(records: &[RecordConfig], naming: ReverseNaming) -> Result<Self, DomainError> {
        let mut store = Self::default();

        for record in records {
            let lookup = DomainLookup {
                domain: parse_name(&record.name)?,
                ttl: record.ttl,
                class: to_hickory_class(record.class),
            };
            let key = name_key(&lookup.domain);

            match record.record_type {
                RecordType::A | RecordType::AAAA => {
                    let ip: IpAddr = record
                        .value
                        .trim()
                        .parse()
                        .map_err(|_| DomainError::InvalidIpAddress(record.value.clone()))?;

                    // Synthesized names hold no escapes, so the text is already
                    // the label bytes a question carries.
                    let reversed = lookup_key(&reverse_name(&ip, naming));

                    debug!(
                        domain = %record.name,
                        ip = %ip,
                        reversed_domain = %reversed,
                        record_type = %record.record_type,
                        "Added {} domain to lookup",
                        record.record_type
                    );

                    store.reverse.insert(
                        reversed,
                        ReverseLookup {
                            lookup: lookup.clone(),
                        },
                    );

                    if let Some(previous) = store.addresses.insert(key, AddressLookup { lookup, ip }) {
                        warn!(
                            domain = %record.name,
                            replaced_ip = %previous.ip,
                            ip = %ip,
                            "Address record replaces an earlier one for the same name"
                        );
                    }
                }
                RecordType::CNAME => {
                    let target = parse_name(&record.value)?;

                    debug!(domain = %record.name, cname = %record.value, "Added CNAME domain to lookup");

                    store.aliases.insert(key, AliasLookup { lookup, target });
                }
            }
        }

        info!(
            records = store.addresses.len() + store.aliases.len(),
            reverse_records = store.reverse.len(),
            "Record store built"
        );

        Ok(store)
    }

    pub fn address(&self, key: &str) -> Option<&AddressLookup> {
        self.addresses.get(key)
    }

    pub fn alias(&self, key: &str) -> Option<&AliasLookup> {
        self.aliases.get(key)
    }

    pub fn reverse(&self, key: &str) -> Option<&ReverseLookup> {
        self.reverse.get(key)
    }

    pub fn address_count(&self) -> usize {
        self.addresses.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn reverse_count(&self) -> usize {
        self.reverse.len()
    }
}

/// Index key for a textual name: trailing dot enforced, ASCII lowercased.
pub fn lookup_key(name: &str) -> String {
    fqdn(name).to_ascii_lowercase()
}

/// Index key for a parsed name: raw labels, lowercased, dot-joined, with a
/// trailing dot. Unlike `Name::to_ascii` nothing is escaped, so a label
/// such as `1::8bd:1002` keys as written.
pub fn name_key(name: &Name) -> String {
    let mut key = String::new();
    for label in name.iter() {
        key.push_str(&String::from_utf8_lossy(label).to_ascii_lowercase());
        key.push('.');
    }
    if key.is_empty() {
        key.push('.');
    }
    key
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(fqdn(name))
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", name, e)))
}

fn to_hickory_class(class: DnsClass) -> DNSClass {
    match class {
        DnsClass::IN => DNSClass::IN,
        DnsClass::CH => DNSClass::CH,
        DnsClass::HS => DNSClass::HS,
        DnsClass::NONE => DNSClass::NONE,
        DnsClass::ANY => DNSClass::ANY,
    }
}
