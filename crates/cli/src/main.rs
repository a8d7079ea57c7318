use clap::Parser;
use simpledns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "simpledns")]
#[command(version)]
#[command(about = "Authoritative DNS for a fixed record set, forwarding everything else")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (host:port)
    #[arg(long, value_name = "ADDR")]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting simpledns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        records = config.records.len(),
        upstream = %config.upstream.server,
        forwarding = config.upstream.enabled,
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(&config)?;

    let store = dns_services.handler_use_case.engine().store();
    info!(
        addresses = store.address_count(),
        aliases = store.alias_count(),
        reverse = store.reverse_count(),
        "Record indices ready"
    );

    server::start_dns_server(
        config.server.listen_addr(),
        dns_services.handler,
        config.server.udp_payload_size,
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
