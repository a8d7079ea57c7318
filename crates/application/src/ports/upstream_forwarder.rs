use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use simpledns_domain::DomainError;

/// Relays a question to the upstream resolver.
///
/// Implementations send the question with recursion desired and return the
/// upstream's answer section verbatim. They never retry; every failure is
/// reported to the caller, which treats it as "no answer".
#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    async fn forward(&self, query: &Query) -> Result<Vec<Record>, DomainError>;
}
