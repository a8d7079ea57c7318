use simpledns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::signal;
use tracing::{error, info, warn};

const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// Serves UDP until Ctrl-C. Each datagram is handled in its own task;
/// in-flight tasks are not awaited on shutdown.
pub async fn start_dns_server(
    bind_addr: String,
    handler: DnsServerHandler,
    udp_payload_size: usize,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(create_udp_socket(socket_addr)?);

    info!(bind_address = %socket_addr, udp_payload_size, "DNS server listening");

    tokio::select! {
        result = run_udp_loop(socket, Arc::new(handler), udp_payload_size) => result,
        result = signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Received shutdown signal, stopping DNS server"),
                Err(e) => warn!(error = %e, "Unable to listen for shutdown signal"),
            }
            Ok(())
        }
    }
}

async fn run_udp_loop(
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    udp_payload_size: usize,
) -> anyhow::Result<()> {
    let mut recv_buf = vec![0u8; udp_payload_size];

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let datagram = recv_buf[..len].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw_udp(&datagram, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    warn!(client = %from, error = %e, "Failed to send DNS response");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
