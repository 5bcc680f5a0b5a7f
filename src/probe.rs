use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

#[cfg(test)]
use mockall::automock;

use tracing::trace;

use crate::target::Target;


pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);


/// A single connectivity attempt against one target.
#[cfg_attr(test, automock)]
pub trait Prober {
    fn probe(&self, target: &Target) -> bool;
}


/// Opens and immediately closes a TCP connection. No data is exchanged.
///
/// Resolution and every resolved address share one `connect_timeout` budget.
pub struct TcpProber {
    connect_timeout: Duration,
}


impl TcpProber {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}


impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_TIMEOUT)
    }
}


impl TcpProber {
    fn connect_any(
        &self,
        addresses: impl IntoIterator<Item = SocketAddr>,
        deadline: Instant,
    ) -> bool {
        for address in addresses {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                trace!(%address, "connect budget exhausted");
                return false;
            }

            match TcpStream::connect_timeout(&address, remaining) {
                Ok(stream) => {
                    drop(stream);
                    return true;
                }
                Err(error) => trace!(%address, %error, "connection attempt failed"),
            }
        }

        false
    }
}


impl Prober for TcpProber {
    fn probe(&self, target: &Target) -> bool {
        let deadline = Instant::now() + self.connect_timeout;

        let addresses = match target.to_string().to_socket_addrs() {
            Ok(addresses) => addresses,
            Err(error) => {
                trace!(
                    host = %target.host,
                    port = %target.port,
                    %error,
                    "failed to resolve target"
                );
                return false;
            }
        };

        self.connect_any(addresses, deadline)
    }
}
