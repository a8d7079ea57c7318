use super::record_store::{name_key, AddressLookup, RecordStore};
use crate::ports::UpstreamForwarder;
use hickory_proto::op::Query;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, PTR};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use simpledns_domain::DomainError;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// What a local answer resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    Address(IpAddr),
    Name(Name),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Local,
    Upstream,
    NotFound,
}

/// Outcome of resolving one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub answers: Vec<Record>,
    /// Set only for answers synthesized from the record store.
    pub target: Option<ResolvedTarget>,
    pub source: AnswerSource,
}

impl Resolution {
    pub fn local(answer: Record, target: ResolvedTarget) -> Self {
        Self {
            answers: vec![answer],
            target: Some(target),
            source: AnswerSource::Local,
        }
    }

    pub fn forwarded(answers: Vec<Record>) -> Self {
        Self {
            answers,
            target: None,
            source: AnswerSource::Upstream,
        }
    }

    pub fn not_found() -> Self {
        Self {
            answers: Vec::new(),
            target: None,
            source: AnswerSource::NotFound,
        }
    }

    pub fn found(&self) -> bool {
        !self.answers.is_empty()
    }
}

/// Answers questions from the record store, falling back to the upstream
/// forwarder.
pub struct ResolutionEngine {
    store: RecordStore,
    forwarder: Arc<dyn UpstreamForwarder>,
    max_alias_depth: u8,
}

impl ResolutionEngine {
    pub fn new(store: RecordStore, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self {
            store,
            forwarder,
            max_alias_depth: 1,
        }
    }

    /// Number of CNAME hops an address query follows before falling back to
    /// the address index. Zero disables alias following entirely.
    pub fn with_max_alias_depth(mut self, depth: u8) -> Self {
        self.max_alias_depth = depth;
        self
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub async fn resolve_a(&self, query: &Query) -> Resolution {
        self.resolve_address(query, RecordType::A).await
    }

    pub async fn resolve_aaaa(&self, query: &Query) -> Resolution {
        self.resolve_address(query, RecordType::AAAA).await
    }

    /// Local aliases only; a miss is never forwarded.
    pub fn resolve_cname(&self, query: &Query) -> Resolution {
        match self.store.alias(&name_key(query.name())) {
            Some(alias) => {
                let mut record = Record::from_rdata(
                    query.name().clone(),
                    alias.lookup.ttl,
                    RData::CNAME(CNAME(alias.target.clone())),
                );
                record.set_dns_class(alias.lookup.class);
                Resolution::local(record, ResolvedTarget::Name(alias.target.clone()))
            }
            None => Resolution::not_found(),
        }
    }

    pub async fn resolve_ptr(&self, query: &Query) -> Resolution {
        match self.store.reverse(&name_key(query.name())) {
            Some(reverse) => {
                let domain = reverse.lookup.domain.clone();
                let mut record = Record::from_rdata(
                    query.name().clone(),
                    reverse.lookup.ttl,
                    RData::PTR(PTR(domain.clone())),
                );
                record.set_dns_class(reverse.lookup.class);
                Resolution::local(record, ResolvedTarget::Name(domain))
            }
            None => self.forward(query).await,
        }
    }

    pub async fn resolve_other(&self, query: &Query) -> Resolution {
        self.forward(query).await
    }

    /// Follows up to `max_alias_depth` aliases from the queried name, then
    /// unwinds from the deepest name back to the queried one: at each name
    /// the address index is tried, then the upstream. A deeper non-empty
    /// result wins; the queried name's forward result is returned as is.
    async fn resolve_address(&self, query: &Query, record_type: RecordType) -> Resolution {
        let mut chain = vec![(query.name().clone(), name_key(query.name()))];

        for _ in 0..self.max_alias_depth {
            let Some((_, key)) = chain.last() else { break };
            match self.store.alias(key) {
                Some(alias) => {
                    let target = alias.target.clone();
                    let target_key = name_key(&target);
                    chain.push((target, target_key));
                }
                None => break,
            }
        }

        for (depth, (name, key)) in chain.iter().enumerate().rev() {
            if let Some(entry) = self.store.address(key) {
                if let Some(resolution) = self.address_answer(query.name(), entry, record_type) {
                    return resolution;
                }
            }

            let mut hop = query.clone();
            hop.set_name(name.clone());
            let forwarded = self.forward(&hop).await;
            if forwarded.found() || depth == 0 {
                return forwarded;
            }
        }

        Resolution::not_found()
    }

    /// Synthesizes the answer under the queried (possibly alias) name. An
    /// entry whose address family does not match the query type gives no
    /// answer.
    fn address_answer(
        &self,
        owner: &Name,
        entry: &AddressLookup,
        record_type: RecordType,
    ) -> Option<Resolution> {
        let rdata = match (record_type, entry.ip) {
            (RecordType::A, IpAddr::V4(ipv4)) => RData::A(A(ipv4)),
            (RecordType::AAAA, IpAddr::V6(ipv6)) => RData::AAAA(AAAA(ipv6)),
            _ => {
                debug!(
                    domain = %entry.lookup.domain,
                    ip = %entry.ip,
                    record_type = ?record_type,
                    "Stored address family does not match query type"
                );
                return None;
            }
        };

        let mut record = Record::from_rdata(owner.clone(), entry.lookup.ttl, rdata);
        record.set_dns_class(entry.lookup.class);
        Some(Resolution::local(record, ResolvedTarget::Address(entry.ip)))
    }

    async fn forward(&self, query: &Query) -> Resolution {
        match self.forwarder.forward(query).await {
            Ok(answers) => Resolution::forwarded(answers),
            Err(DomainError::ForwardingDisabled) => {
                debug!(name = %query.name(), "Forwarding disabled, treating as miss");
                Resolution::not_found()
            }
            Err(e) => {
                warn!(
                    error = %e,
                    name = %query.name(),
                    record_type = ?query.query_type(),
                    "Failed to resolve DNS request"
                );
                Resolution::not_found()
            }
        }
    }
}
