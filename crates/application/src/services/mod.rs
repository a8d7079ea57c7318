mod record_store;
mod resolution_engine;

pub use record_store::{
    lookup_key, name_key, AddressLookup, AliasLookup, DomainLookup, RecordStore, ReverseLookup,
};
pub use resolution_engine::{AnswerSource, Resolution, ResolutionEngine, ResolvedTarget};
