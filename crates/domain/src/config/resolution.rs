use crate::reverse_name::ReverseNaming;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_alias_depth`.
pub const MAX_ALIAS_DEPTH_LIMIT: u8 = 16;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// How many CNAME hops an A/AAAA query may follow before the address
    /// index is consulted directly.
    #[serde(default = "default_max_alias_depth")]
    pub max_alias_depth: u8,

    #[serde(default)]
    pub reverse_naming: ReverseNaming,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_alias_depth: default_max_alias_depth(),
            reverse_naming: ReverseNaming::default(),
        }
    }
}

fn default_max_alias_depth() -> u8 {
    1
}
