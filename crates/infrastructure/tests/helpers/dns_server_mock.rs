use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub const MOCK_TTL: u32 = 60;

/// How the mock upstream answers every query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockReply {
    /// NOERROR with one A record for the queried name.
    Answer(Ipv4Addr),
    /// NXDOMAIN, no answers.
    NxDomain,
    /// A well-formed answer under the wrong transaction ID.
    WrongId,
    /// The query echoed back with QR still clear.
    NotAResponse,
    /// No reply at all.
    Silent,
}

/// In-process upstream resolver on `127.0.0.1` with an OS-assigned port.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = received.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&buf[..len], reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    /// Expects a query without additional records, as the forwarder sends.
    fn build_mock_response(query: &[u8], reply: MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let mut response = Vec::with_capacity(512);

        match reply {
            MockReply::Silent => return None,
            MockReply::NotAResponse => return Some(query.to_vec()),
            MockReply::WrongId => {
                response.extend_from_slice(&[query[0] ^ 0xff, query[1] ^ 0xff]);
            }
            _ => response.extend_from_slice(&query[0..2]),
        }

        // QR, RD, RA
        response.push(0x81);
        match reply {
            MockReply::NxDomain => response.push(0x83),
            _ => response.push(0x80),
        }

        // QDCOUNT
        response.extend_from_slice(&query[4..6]);

        // ANCOUNT
        match reply {
            MockReply::NxDomain => response.extend_from_slice(&[0x00, 0x00]),
            _ => response.extend_from_slice(&[0x00, 0x01]),
        }

        // NSCOUNT, ARCOUNT
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        let ip = match reply {
            MockReply::Answer(ip) => ip,
            MockReply::WrongId => Ipv4Addr::new(192, 0, 2, 1),
            _ => return Some(response),
        };

        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&MOCK_TTL.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&ip.octets());

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
