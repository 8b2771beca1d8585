//! Accept loop for association acceptors.
//!
//! A [`Listener`] owns a bound TCP listener and,
//! once started, negotiates every incoming connection
//! on a thread of its own.
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use snafu::ResultExt;
use tracing::{debug, error, info, warn};

use super::server::{AccessControl, ServerAssociationOptions};
use super::{lock, AssociationHandler, BindSnafu, Result, SpawnThreadSnafu};

type Acceptor = Arc<dyn Fn(TcpStream) + Send + Sync>;

/// A TCP listener turning incoming connections into associations.
///
/// Each accepted connection is given a new handler
/// from the factory passed to [`bind`](Listener::bind).
///
/// ```no_run
/// # use dcmkit_ul::association::{Listener, ServerAssociationOptions};
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ServerAssociationOptions::new()
///     .with_abstract_syntax("1.2.840.10008.1.1");
/// let listener = Listener::bind("0.0.0.0:11112", options, || ())?;
/// listener.start()?;
/// // ...
/// listener.stop();
/// # Ok(())
/// # }
/// ```
pub struct Listener {
    listener: Arc<TcpListener>,
    acceptor: Acceptor,
    running: Arc<AtomicBool>,
    accept_loop: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("listener", &self.listener)
            .field("running", &self.running)
            .finish()
    }
}

impl Listener {
    /// Bind a TCP listener to the given address.
    ///
    /// No connections are accepted until [`start`](Listener::start) is called.
    pub fn bind<T, A, F, H>(
        address: T,
        options: ServerAssociationOptions<'static, A>,
        handler_factory: F,
    ) -> Result<Self>
    where
        T: ToSocketAddrs,
        A: AccessControl + Send + Sync + 'static,
        F: Fn() -> H + Send + Sync + 'static,
        H: AssociationHandler + 'static,
    {
        let listener = TcpListener::bind(address).context(BindSnafu)?;

        let acceptor: Acceptor = Arc::new(move |stream: TcpStream| {
            let peer = stream.peer_addr().ok();
            match options.accept(stream, handler_factory()) {
                Ok(association) => {
                    debug!("Association with {:?} established", peer);
                    association.join();
                    debug!("Association with {:?} closed", peer);
                }
                Err(e) => {
                    info!("Association with {:?} not established: {}", peer, e);
                }
            }
        });

        Ok(Listener {
            listener: Arc::new(listener),
            acceptor,
            running: Arc::new(AtomicBool::new(false)),
            accept_loop: Mutex::new(None),
        })
    }

    /// The local address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Whether the accept loop is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Spawn the accept loop.
    ///
    /// Does nothing if the loop is already running.
    pub fn start(&self) -> Result<()> {
        let mut accept_loop = lock(&self.accept_loop);
        if accept_loop.is_some() {
            return Ok(());
        }
        self.running.store(true, Ordering::SeqCst);

        let listener = Arc::clone(&self.listener);
        let acceptor = Arc::clone(&self.acceptor);
        let running = Arc::clone(&self.running);
        let handle = thread::Builder::new()
            .name("dcmkit-ul-listener".to_string())
            .spawn(move || accept_connections(&listener, &acceptor, &running));
        match handle {
            Ok(handle) => {
                *accept_loop = Some(handle);
                Ok(())
            }
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                Err(e).context(SpawnThreadSnafu)
            }
        }
    }

    /// Stop accepting connections and wait for the accept loop to finish.
    ///
    /// Associations already established keep running.
    /// Does nothing if the loop is not running.
    pub fn stop(&self) {
        let handle = lock(&self.accept_loop).take();
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = handle {
            self.wake_accept_loop();
            if handle.join().is_err() {
                error!("Listener accept loop panicked");
            }
        }
    }

    /// Unblock a pending `accept` by connecting to ourselves.
    fn wake_accept_loop(&self) {
        let address = match self.listener.local_addr() {
            Ok(address) => wake_address(address),
            Err(e) => {
                warn!("Could not resolve listener address: {}", e);
                return;
            }
        };
        if let Err(e) = TcpStream::connect(address) {
            warn!("Could not wake listener at {}: {}", address, e);
        }
    }
}

/// The loopback address reaching a listener bound to `address`.
fn wake_address(mut address: SocketAddr) -> SocketAddr {
    match address.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => address.set_ip(Ipv4Addr::LOCALHOST.into()),
        IpAddr::V6(ip) if ip.is_unspecified() => address.set_ip(Ipv6Addr::LOCALHOST.into()),
        _ => {}
    }
    address
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.stop();
    }
}

fn accept_connections(listener: &TcpListener, acceptor: &Acceptor, running: &AtomicBool) {
    loop {
        let accepted = listener.accept();
        if !running.load(Ordering::SeqCst) {
            break;
        }
        match accepted {
            Ok((stream, address)) => {
                debug!("New connection from {}", address);
                let acceptor = Arc::clone(acceptor);
                let spawned = thread::Builder::new()
                    .name(format!("dcmkit-ul-accept-{}", address))
                    .spawn(move || acceptor(stream));
                if let Err(e) = spawned {
                    error!("Could not spawn thread for {}: {}", address, e);
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => warn!("Could not accept connection: {}", e),
        }
    }
    debug!("Listener accept loop stopped");
}

#[cfg(test)]
mod tests {
    use super::wake_address;

    #[test]
    fn wildcard_binds_are_woken_through_loopback() {
        assert_eq!(
            wake_address("0.0.0.0:11112".parse().unwrap()),
            "127.0.0.1:11112".parse().unwrap()
        );
        assert_eq!(
            wake_address("[::]:104".parse().unwrap()),
            "[::1]:104".parse().unwrap()
        );
        assert_eq!(
            wake_address("10.0.0.7:4242".parse().unwrap()),
            "10.0.0.7:4242".parse().unwrap()
        );
    }
}
