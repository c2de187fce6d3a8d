use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8082;

/// Loopback only; the edge router is expected to run on the same host.
pub const LISTEN_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// Answers every request with 403 Forbidden so that API paths routed here
/// by the reverse proxy stay unreachable from the WAN.
#[derive(Parser, Debug)]
#[command(name = "block_service", version, about)]
pub struct Cli {
    /// Port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Cli {
    pub fn listen_addr(&self) -> SocketAddr {

        SocketAddr::from((LISTEN_HOST, self.port))

    }
}
