use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

/// Binds a listener on an ephemeral port of `ip` and keeps it open.
pub async fn open_port(ip: Ipv4Addr) -> (TcpListener, u16) {
    let listener = TcpListener::bind(SocketAddr::new(IpAddr::V4(ip), 0))
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

/// A port that was free a moment ago and has nothing listening on it now.
pub async fn closed_port(ip: Ipv4Addr) -> u16 {
    let (listener, port) = open_port(ip).await;
    drop(listener);
    port
}
