use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS class attached to a configured record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum DnsClass {
    #[default]
    IN,
    CH,
    HS,
    NONE,
    ANY,
}

impl DnsClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsClass::IN => "IN",
            DnsClass::CH => "CH",
            DnsClass::HS => "HS",
            DnsClass::NONE => "NONE",
            DnsClass::ANY => "ANY",
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DnsClass {
    type Err = String;

    // Long mnemonic spellings are accepted for older configuration files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" | "INET" => Ok(DnsClass::IN),
            "CH" | "CHAOS" => Ok(DnsClass::CH),
            "HS" | "HESIOD" => Ok(DnsClass::HS),
            "NONE" => Ok(DnsClass::NONE),
            "ANY" | "*" => Ok(DnsClass::ANY),
            _ => Err(format!("Unknown DNS class: {}", s)),
        }
    }
}

impl TryFrom<String> for DnsClass {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DnsClass> for String {
    fn from(value: DnsClass) -> Self {
        value.as_str().to_string()
    }
}
