use crate::dns_record::{DnsClass, RecordType};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};

/// TTL applied to records that leave it unset (or set it to 0).
pub const DEFAULT_TTL: u32 = 3600;

/// One operator-defined record as it appears under `[[records]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordConfig {
    pub name: String,

    #[serde(rename = "type")]
    pub record_type: RecordType,

    pub value: String,

    #[serde(default)]
    pub ttl: u32,

    #[serde(default)]
    pub class: DnsClass,
}

impl RecordConfig {
    pub fn new(name: impl Into<String>, record_type: RecordType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            value: value.into(),
            ttl: DEFAULT_TTL,
            class: DnsClass::IN,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_class(mut self, class: DnsClass) -> Self {
        self.class = class;
        self
    }

    pub fn apply_defaults(&mut self) {
        if self.ttl == 0 {
            self.ttl = DEFAULT_TTL;
        }
    }

    /// Appends the trailing dot to the name, and to the target of a CNAME.
    /// Empty strings are left alone so validation can still reject them.
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        if !self.name.is_empty() {
            self.name = fqdn(&self.name);
        }

        self.value = self.value.trim().to_string();
        if self.record_type == RecordType::CNAME && !self.value.is_empty() {
            self.value = fqdn(&self.value);
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("record name is empty".to_string());
        }

        match self.record_type {
            RecordType::A => {
                self.value
                    .parse::<Ipv4Addr>()
                    .map_err(|_| format!("invalid IPv4 address: {}", self.value))?;
            }
            RecordType::AAAA => {
                self.value
                    .parse::<Ipv6Addr>()
                    .map_err(|_| format!("invalid IPv6 address: {}", self.value))?;
            }
            RecordType::CNAME => {
                if self.value.is_empty() {
                    return Err(format!("invalid CNAME value: {:?}", self.value));
                }
            }
        }

        Ok(())
    }
}

/// Returns `name` with exactly one trailing dot appended if it had none.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
