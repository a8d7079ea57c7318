use async_trait::async_trait;
use hickory_proto::op::Query;
use hickory_proto::rr::Record;
use simpledns_application::ports::UpstreamForwarder;
use simpledns_domain::DomainError;

/// Stands in for the upstream when forwarding is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledForwarder;

#[async_trait]
impl UpstreamForwarder for DisabledForwarder {
    async fn forward(&self, _query: &Query) -> Result<Vec<Record>, DomainError> {
        Err(DomainError::ForwardingDisabled)
    }
}
