use simpledns_application::ports::UpstreamForwarder;
use simpledns_application::services::{RecordStore, ResolutionEngine};
use simpledns_application::use_cases::HandleDnsQueryUseCase;
use simpledns_domain::Config;
use simpledns_infrastructure::dns::{DisabledForwarder, DnsForwarder, DnsServerHandler};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let forwarder = Self::build_forwarder(config)?;

        let store = RecordStore::build(&config.records, config.resolution.reverse_naming)?;
        let engine = ResolutionEngine::new(store, forwarder)
            .with_max_alias_depth(config.resolution.max_alias_depth);

        let handler_use_case = Arc::new(
            HandleDnsQueryUseCase::new(engine)
                .with_recursion_available(config.upstream.enabled),
        );
        let handler = DnsServerHandler::new(handler_use_case.clone());

        info!(
            max_alias_depth = config.resolution.max_alias_depth,
            reverse_naming = ?config.resolution.reverse_naming,
            "DNS services initialized"
        );

        Ok(Self {
            handler_use_case,
            handler,
        })
    }

    fn build_forwarder(config: &Config) -> anyhow::Result<Arc<dyn UpstreamForwarder>> {
        if !config.upstream.enabled {
            info!("Upstream forwarding disabled");
            return Ok(Arc::new(DisabledForwarder));
        }

        let upstream = config.upstream.socket_addr()?;
        info!(
            upstream = %upstream,
            timeout_ms = config.upstream.timeout_ms,
            "Upstream forwarding enabled"
        );
        Ok(Arc::new(DnsForwarder::new(upstream, config.upstream.timeout())))
    }
}
