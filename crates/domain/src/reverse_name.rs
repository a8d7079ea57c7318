//! Synthesis of the reverse-lookup (PTR) owner name for an address.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::net::IpAddr;

const IN_ADDR_ARPA: &str = "in-addr.arpa.";
const IP6_ARPA: &str = "ip6.arpa.";

/// How the PTR owner name of an address record is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReverseNaming {
    /// The address text reversed character by character, under
    /// `in-addr.arpa.` for both families. `10.0.0.1` becomes
    /// `1.0.0.01.in-addr.arpa.`. Deployed clients rely on this form.
    #[default]
    Naive,

    /// RFC 1035 octet reversal for IPv4 and RFC 3596 nibble reversal under
    /// `ip6.arpa.` for IPv6.
    Arpa,
}

/// Builds the fully-qualified reverse name for `ip`.
pub fn reverse_name(ip: &IpAddr, naming: ReverseNaming) -> String {
    match naming {
        ReverseNaming::Naive => {
            let reversed: String = ip.to_string().chars().rev().collect();
            format!("{}.{}", reversed, IN_ADDR_ARPA)
        }
        ReverseNaming::Arpa => match ip {
            IpAddr::V4(v4) => {
                let [a, b, c, d] = v4.octets();
                format!("{}.{}.{}.{}.{}", d, c, b, a, IN_ADDR_ARPA)
            }
            IpAddr::V6(v6) => {
                let mut name = String::with_capacity(72);
                for byte in v6.octets().iter().rev() {
                    // Infallible for String.
                    let _ = write!(name, "{:x}.{:x}.", byte & 0x0f, byte >> 4);
                }
                name.push_str(IP6_ARPA);
                name
            }
        },
    }
}
