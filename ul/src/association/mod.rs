//! DICOM association module
//!
//! This module contains utilities for establishing associations
//! between DICOM nodes via TCP/IP.
//!
//! As an association requester, often as a service class user (SCU),
//! a new association can be started
//! via the [`ClientAssociationOptions`][1] type.
//! As an association acceptor,
//! usually taking the role of a service class provider (SCP),
//! a newly created [TCP stream][2] can be passed to
//! a previously prepared [`ServerAssociationOptions`][3],
//! or a [`Listener`][4] can accept connections on its own.
//!
//! Once established, every association is driven by two threads:
//! one blocking on socket reads,
//! and one owning the state machine and the [`AssociationHandler`].
//! Applications talk to the association through an [`AssociationHandle`].
//!
//! [1]: crate::association::client::ClientAssociationOptions
//! [2]: std::net::TcpStream
//! [3]: crate::association::server::ServerAssociationOptions
//! [4]: crate::association::listener::Listener
pub mod client;
pub mod listener;
pub mod server;

mod engine;

use crate::dimse::{DimseMessage, Error as DimseError};
use crate::pdu::{
    write_pdu, AbortRQSource, AssociationRJ, Pdu, PresentationContextNegotiated,
};
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::fmt;
use std::net::{Shutdown, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub use client::ClientAssociationOptions;
pub use listener::Listener;
pub use server::{AcceptAny, AcceptCalledAeTitle, AccessControl, ServerAssociationOptions};

use engine::Input;

/// An error while establishing an association.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// missing abstract syntax to begin negotiation
    MissingAbstractSyntax { backtrace: Backtrace },

    /// could not connect to the peer
    Connect {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// could not configure the TCP socket
    ConfigureSocket {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// could not bind the listener
    Bind {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// failed to send association PDU
    SendPdu {
        #[snafu(backtrace)]
        source: crate::pdu::writer::Error,
    },

    /// failed to receive association PDU
    ReceivePdu {
        #[snafu(backtrace)]
        source: crate::pdu::reader::Error,
    },

    #[snafu(display("unexpected PDU from the peer `{}`", pdu.short_description()))]
    #[non_exhaustive]
    UnexpectedPdu {
        /// the PDU obtained from the peer
        pdu: Box<Pdu>,
    },

    #[snafu(display("unknown PDU from the peer `{}`", pdu.short_description()))]
    #[non_exhaustive]
    UnknownPdu {
        /// the PDU obtained from the peer, of variant Unknown
        pdu: Box<Pdu>,
    },

    #[snafu(display("protocol version mismatch: expected {}, got {}", expected, got))]
    ProtocolVersionMismatch {
        expected: u16,
        got: u16,
        backtrace: Backtrace,
    },

    #[snafu(display("association rejected: {}", association_rj.source))]
    Rejected {
        association_rj: AssociationRJ,
        backtrace: Backtrace,
    },

    #[snafu(display("association aborted by the peer: {}", source_of_abort))]
    Aborted {
        source_of_abort: AbortRQSource,
        backtrace: Backtrace,
    },

    /// no presentation contexts accepted by the peer
    NoAcceptedPresentationContexts { backtrace: Backtrace },

    /// could not spawn association thread
    SpawnThread {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error sending a DIMSE message or awaiting its response.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RequestError {
    /// The association was closed or the transport failed
    /// before the request completed.
    #[snafu(display("network error: {}", cause))]
    NetworkError { cause: String, backtrace: Backtrace },

    #[snafu(display("no accepted presentation context for SOP class {}", sop_class_uid))]
    NoPresentationContext {
        sop_class_uid: String,
        backtrace: Backtrace,
    },

    #[snafu(display("presentation context {} was not accepted", presentation_context_id))]
    PresentationContextNotAccepted {
        presentation_context_id: u8,
        backtrace: Backtrace,
    },

    #[snafu(display("transfer syntax {} is not supported", uid))]
    UnsupportedTransferSyntax { uid: String, backtrace: Backtrace },

    #[snafu(display("request has no message ID"))]
    MissingMessageId { backtrace: Backtrace },

    #[snafu(display("could not encode message"))]
    EncodeMessage {
        #[snafu(backtrace)]
        source: DimseError,
    },

    #[snafu(display("timed out waiting for the response"))]
    ResponseTimeout { backtrace: Backtrace },
}

/// The state of an association.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AssociationState {
    Idle,
    /// A-ASSOCIATE-RQ sent, awaiting the answer
    Requesting,
    /// awaiting an A-ASSOCIATE-RQ
    Listening,
    /// A-ASSOCIATE-RQ received, answer being prepared
    Negotiating,
    Established,
    /// A-RELEASE-RQ sent, awaiting A-RELEASE-RP
    Releasing,
    Aborting,
    Closed,
}

impl fmt::Display for AssociationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Something which happened to an established association.
#[derive(Debug, Clone, PartialEq)]
pub enum AssociationEvent {
    /// The association is established and its loop is running.
    AssociateAccepted,
    /// A complete DIMSE message arrived.
    MessageReceived(DimseMessage),
    /// All fragments of a message were written.
    MessageSent {
        presentation_context_id: u8,
        message_id: u16,
    },
    /// The association was released gracefully.
    Released,
    /// The association was aborted,
    /// by the peer if `remote` is true.
    Aborted { source: AbortRQSource, remote: bool },
    /// The transport failed.
    NetworkError(String),
    /// No input arrived within the DIMSE timeout.
    /// The association stays open.
    DimseTimeout,
}

/// Receiver of association events.
///
/// Events are handled one at a time on the association's loop thread,
/// in the order in which they happen.
pub trait AssociationHandler: Send {
    fn handle(&mut self, association: &AssociationHandle, event: AssociationEvent);
}

impl AssociationHandler for () {
    fn handle(&mut self, _association: &AssociationHandle, _event: AssociationEvent) {}
}

impl<H> AssociationHandler for Box<H>
where
    H: AssociationHandler + ?Sized,
{
    fn handle(&mut self, association: &AssociationHandle, event: AssociationEvent) {
        (**self).handle(association, event)
    }
}

/// An association handler made of a closure.
///
/// ```
/// use dcmkit_ul::association::{AssociationEvent, FnHandler};
///
/// let handler = FnHandler::new(|_association, event| {
///     if let AssociationEvent::MessageReceived(msg) = event {
///         println!("{:?}", msg.command_field());
///     }
/// });
/// # let _ = handler;
/// ```
pub struct FnHandler<F>(pub F);

impl<F> FnHandler<F>
where
    F: FnMut(&AssociationHandle, AssociationEvent) + Send,
{
    pub fn new(f: F) -> Self {
        FnHandler(f)
    }
}

impl<F> AssociationHandler for FnHandler<F>
where
    F: FnMut(&AssociationHandle, AssociationEvent) + Send,
{
    fn handle(&mut self, association: &AssociationHandle, event: AssociationEvent) {
        (self.0)(association, event)
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHandler")
    }
}

/// The parameters of an association once negotiated.
#[derive(Debug, Clone)]
pub(crate) struct NegotiatedOptions {
    pub presentation_contexts: Vec<PresentationContextNegotiated>,
    /// maximum PDU length the peer accepts, 0 if unlimited
    pub peer_max_pdu_length: u32,
    /// maximum PDU length announced by this node
    pub max_pdu_length: u32,
    pub peer_ae_title: String,
    pub strict: bool,
    pub dimse_timeout: Option<Duration>,
}

/// State shared by the loop thread and all handles.
#[derive(Debug)]
pub(crate) struct Shared {
    state: Mutex<AssociationState>,
    closed: Condvar,
    writer: Mutex<TcpStream>,
    socket: TcpStream,
    aborting: AtomicBool,
    next_message_id: AtomicU16,
    presentation_contexts: Vec<PresentationContextNegotiated>,
    peer_max_pdu_length: u32,
    peer_ae_title: String,
}

impl Shared {
    fn state(&self) -> AssociationState {
        *lock(&self.state)
    }

    fn set_state(&self, state: AssociationState) {
        let mut current = lock(&self.state);
        if *current != state {
            debug!("Association state {} -> {}", *current, state);
            *current = state;
        }
        if state == AssociationState::Closed {
            self.closed.notify_all();
        }
    }

    /// Block until the association is closed.
    /// Returns whether it did close within the timeout.
    fn wait_closed(&self, timeout: Option<Duration>) -> bool {
        let is_open = |state: &mut AssociationState| *state != AssociationState::Closed;
        let guard = lock(&self.state);
        match timeout {
            Some(timeout) => {
                let (_guard, result) = self
                    .closed
                    .wait_timeout_while(guard, timeout, is_open)
                    .unwrap_or_else(PoisonError::into_inner);
                !result.timed_out()
            }
            None => {
                let _guard = self
                    .closed
                    .wait_while(guard, is_open)
                    .unwrap_or_else(PoisonError::into_inner);
                true
            }
        }
    }

    fn write(&self, pdu: &Pdu) -> std::result::Result<(), crate::pdu::writer::Error> {
        let mut writer = lock(&self.writer);
        write_pdu(&mut *writer, pdu)
    }

    fn shutdown(&self) {
        // fails if the peer already closed the connection
        let _ = self.socket.shutdown(Shutdown::Both);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A cloneable handle to an established association,
/// which can be moved to other threads.
#[derive(Debug, Clone)]
pub struct AssociationHandle {
    shared: Arc<Shared>,
    input: Sender<Input>,
}

impl AssociationHandle {
    /// The current state of the association.
    pub fn state(&self) -> AssociationState {
        self.shared.state()
    }

    /// All presentation contexts negotiated,
    /// including the refused ones.
    pub fn presentation_contexts(&self) -> &[PresentationContextNegotiated] {
        &self.shared.presentation_contexts
    }

    /// Look up a negotiated presentation context by its ID.
    pub fn presentation_context(&self, id: u8) -> Option<&PresentationContextNegotiated> {
        self.shared
            .presentation_contexts
            .iter()
            .find(|pc| pc.id == id)
    }

    /// The maximum PDU length accepted by the peer,
    /// 0 meaning unlimited.
    pub fn peer_max_pdu_length(&self) -> u32 {
        self.shared.peer_max_pdu_length
    }

    /// The AE title of the peer.
    pub fn peer_ae_title(&self) -> &str {
        &self.shared.peer_ae_title
    }

    /// A message ID not yet handed out by this association.
    pub fn next_message_id(&self) -> u16 {
        self.shared.next_message_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Send a DIMSE message without awaiting a response.
    ///
    /// The message is encoded on the calling thread
    /// and written by the association's loop,
    /// which dispatches [`AssociationEvent::MessageSent`] once done.
    pub fn send(&self, msg: DimseMessage) -> std::result::Result<(), RequestError> {
        let input = self.prepare(msg, None)?;
        self.push(input)
    }

    /// Send a DIMSE request and obtain a waiter for its response.
    ///
    /// The response is matched by Message ID Being Responded To.
    /// Pending responses are dispatched as events
    /// but do not complete the request.
    pub fn request(&self, msg: DimseMessage) -> std::result::Result<ResponseWaiter, RequestError> {
        let message_id = msg.message_id().context(MissingMessageIdSnafu)?;
        let (tx, rx) = mpsc::channel();
        let input = self.prepare(msg, Some((message_id, tx)))?;
        self.push(input)?;
        Ok(ResponseWaiter { rx })
    }

    /// Abort the association.
    ///
    /// Can be called from any thread, including from within a handler.
    /// An A-ABORT is written unless another write is in progress,
    /// and the socket is shut down to unblock pending reads.
    pub fn abort(&self) {
        if self.shared.state() == AssociationState::Closed
            || self.shared.aborting.swap(true, Ordering::SeqCst)
        {
            return;
        }
        self.shared.set_state(AssociationState::Aborting);
        if let Ok(mut writer) = self.shared.writer.try_lock() {
            let pdu = Pdu::AbortRQ {
                source: AbortRQSource::ServiceUser,
            };
            if let Err(e) = write_pdu(&mut *writer, &pdu) {
                debug!("Could not write A-ABORT: {}", e);
            }
        }
        self.shared.shutdown();
        let _ = self.input.send(Input::Abort);
    }

    /// Request a graceful release of the association
    /// without waiting for it to complete.
    pub fn release(&self) {
        let _ = self.input.send(Input::Release);
    }

    /// Block until the association is closed,
    /// or until the timeout elapses.
    /// Returns whether the association is closed.
    pub fn wait_closed(&self, timeout: Option<Duration>) -> bool {
        self.shared.wait_closed(timeout)
    }

    fn push(&self, input: Input) -> std::result::Result<(), RequestError> {
        self.input.send(input).ok().context(NetworkSnafu {
            cause: "association is closed",
        })
    }

    /// Resolve the presentation context and encode the message.
    fn prepare(
        &self,
        msg: DimseMessage,
        waiter: Option<(u16, Sender<std::result::Result<DimseMessage, RequestError>>)>,
    ) -> std::result::Result<Input, RequestError> {
        if self.state() != AssociationState::Established {
            return NetworkSnafu {
                cause: format!("association is {}", self.state()),
            }
            .fail();
        }
        let pc = self.resolve_presentation_context(&msg)?;
        let ts = TransferSyntaxRegistry::resolve(&pc.transfer_syntax).context(
            UnsupportedTransferSyntaxSnafu {
                uid: pc.transfer_syntax.as_str(),
            },
        )?;
        let command = msg.encode_command().context(EncodeMessageSnafu)?;
        let data = msg.encode_data(&ts).context(EncodeMessageSnafu)?;
        let pdus = crate::dimse::fragment_message(
            pc.id,
            &command,
            data.as_deref(),
            self.shared.peer_max_pdu_length,
        );
        let message_id = msg
            .message_id()
            .or_else(|| msg.message_id_being_responded_to())
            .unwrap_or_default();
        Ok(Input::Send {
            pdus,
            presentation_context_id: pc.id,
            message_id,
            waiter,
        })
    }

    fn resolve_presentation_context(
        &self,
        msg: &DimseMessage,
    ) -> std::result::Result<&PresentationContextNegotiated, RequestError> {
        if msg.presentation_context_id != 0 {
            return self
                .presentation_context(msg.presentation_context_id)
                .filter(|pc| pc.is_accepted())
                .context(PresentationContextNotAcceptedSnafu {
                    presentation_context_id: msg.presentation_context_id,
                });
        }
        let sop_class_uid = msg.sop_class_uid().unwrap_or_default();
        self.shared
            .presentation_contexts
            .iter()
            .find(|pc| pc.is_accepted() && pc.abstract_syntax == sop_class_uid)
            .context(NoPresentationContextSnafu {
                sop_class_uid: &*sop_class_uid,
            })
    }
}

/// Awaits the response to a request.
#[derive(Debug)]
pub struct ResponseWaiter {
    rx: Receiver<std::result::Result<DimseMessage, RequestError>>,
}

impl ResponseWaiter {
    /// Block until the response arrives
    /// or the association is closed.
    pub fn wait(self) -> std::result::Result<DimseMessage, RequestError> {
        match self.rx.recv() {
            Ok(result) => result,
            Err(_) => NetworkSnafu {
                cause: "association closed before the response arrived",
            }
            .fail(),
        }
    }

    /// Block until the response arrives,
    /// the association is closed or the timeout elapses.
    pub fn wait_timeout(&self, timeout: Duration) -> std::result::Result<DimseMessage, RequestError> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => ResponseTimeoutSnafu.fail(),
            Err(RecvTimeoutError::Disconnected) => NetworkSnafu {
                cause: "association closed before the response arrived",
            }
            .fail(),
        }
    }
}

/// How long dropping an association waits for a graceful release.
const DROP_RELEASE_TIMEOUT: Duration = Duration::from_secs(5);

/// An established association, owning its threads.
///
/// Dropping it releases the association,
/// or aborts it if the release does not complete in time,
/// and waits for its threads to finish.
#[derive(Debug)]
pub struct Association {
    handle: AssociationHandle,
    threads: Vec<JoinHandle<()>>,
}

impl Association {
    /// A new handle to this association.
    pub fn handle(&self) -> AssociationHandle {
        self.handle.clone()
    }

    pub fn state(&self) -> AssociationState {
        self.handle.state()
    }

    pub fn presentation_contexts(&self) -> &[PresentationContextNegotiated] {
        self.handle.presentation_contexts()
    }

    /// Release the association gracefully,
    /// blocking until it is closed.
    pub fn release(&self) {
        let started = Instant::now();
        self.handle.release();
        self.handle.wait_closed(None);
        debug!("Association closed after {:?}", started.elapsed());
    }

    /// Abort the association.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the association to close on its own
    /// and for its threads to finish.
    pub fn join(mut self) {
        self.join_threads();
    }

    fn join_threads(&mut self) {
        for thread in self.threads.drain(..) {
            if thread.join().is_err() {
                warn!("Association thread panicked");
            }
        }
    }
}

impl Drop for Association {
    fn drop(&mut self) {
        match self.state() {
            AssociationState::Closed => {}
            AssociationState::Established => {
                self.handle.release();
                if !self.handle.wait_closed(Some(DROP_RELEASE_TIMEOUT)) {
                    self.handle.abort();
                }
            }
            _ => self.handle.abort(),
        }
        self.join_threads();
    }
}

/// Start the threads of a newly established association.
pub(crate) fn spawn<H>(
    socket: TcpStream,
    options: NegotiatedOptions,
    handler: H,
) -> Result<Association>
where
    H: AssociationHandler + 'static,
{
    let writer = socket.try_clone().context(ConfigureSocketSnafu)?;
    let reader = socket.try_clone().context(ConfigureSocketSnafu)?;
    let (tx, rx) = mpsc::channel();

    let shared = Arc::new(Shared {
        state: Mutex::new(AssociationState::Established),
        closed: Condvar::new(),
        writer: Mutex::new(writer),
        socket,
        aborting: AtomicBool::new(false),
        next_message_id: AtomicU16::new(1),
        presentation_contexts: options.presentation_contexts,
        peer_max_pdu_length: options.peer_max_pdu_length,
        peer_ae_title: options.peer_ae_title,
    });
    let handle = AssociationHandle {
        shared: Arc::clone(&shared),
        input: tx.clone(),
    };

    let reader_thread = std::thread::Builder::new()
        .name("dcmkit-ul-reader".into())
        .spawn({
            let max_pdu_length = options.max_pdu_length;
            let strict = options.strict;
            move || engine::read_loop(reader, max_pdu_length, strict, tx)
        })
        .map_err(|e| {
            shared.shutdown();
            e
        })
        .context(SpawnThreadSnafu)?;

    let engine = engine::Engine::new(handle.clone(), rx, handler, options.dimse_timeout);
    let loop_thread = std::thread::Builder::new()
        .name("dcmkit-ul-association".into())
        .spawn(move || engine.run())
        .map_err(|e| {
            shared.shutdown();
            e
        })
        .context(SpawnThreadSnafu)?;

    Ok(Association {
        handle,
        threads: vec![loop_thread, reader_thread],
    })
}
