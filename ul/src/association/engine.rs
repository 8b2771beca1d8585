//! The per-association loop.
//!
//! A reader thread turns the socket into a stream of [`Input::Pdu`]s.
//! The loop thread merges them with the commands of association handles,
//! drives the association state and dispatches events to the handler.
use super::{
    AssociationEvent, AssociationHandle, AssociationHandler, AssociationState, NetworkSnafu,
    RequestError,
};
use crate::dimse::{DimseMessage, MessageAssembler};
use crate::pdu::{
    read_pdu, AbortRQServiceProviderReason, AbortRQSource, PDataValue, Pdu, MAXIMUM_PDU_SIZE,
    MINIMUM_PDU_SIZE,
};
use dcmkit_object::{read_dataset, ReadOptions};
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use std::collections::HashMap;
use std::io::BufReader;
use std::net::TcpStream;
use std::sync::atomic::Ordering;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tracing::{debug, error, warn};

/// How long to wait for A-RELEASE-RP when no DIMSE timeout is set.
const RELEASE_TIMEOUT: Duration = Duration::from_secs(30);

type Reply = Sender<Result<DimseMessage, RequestError>>;

pub(crate) enum Input {
    Pdu(Pdu),
    ReadFailed(crate::pdu::reader::Error),
    Send {
        pdus: Vec<Pdu>,
        presentation_context_id: u8,
        message_id: u16,
        waiter: Option<(u16, Reply)>,
    },
    Release,
    Abort,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Pdu(pdu) => write!(f, "Pdu({})", pdu.short_description()),
            Input::ReadFailed(e) => write!(f, "ReadFailed({})", e),
            Input::Send {
                pdus,
                presentation_context_id,
                message_id,
                ..
            } => write!(
                f,
                "Send {{ {} PDUs, context {}, message {} }}",
                pdus.len(),
                presentation_context_id,
                message_id
            ),
            Input::Release => f.write_str("Release"),
            Input::Abort => f.write_str("Abort"),
        }
    }
}

/// Read PDUs until the socket fails or the loop is gone.
pub(crate) fn read_loop(socket: TcpStream, max_pdu_length: u32, strict: bool, tx: Sender<Input>) {
    let max_pdu_length = max_pdu_length.clamp(MINIMUM_PDU_SIZE, MAXIMUM_PDU_SIZE);
    let mut reader = BufReader::new(socket);
    loop {
        match read_pdu(&mut reader, max_pdu_length, strict) {
            Ok(pdu) => {
                if tx.send(Input::Pdu(pdu)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = tx.send(Input::ReadFailed(e));
                break;
            }
        }
    }
}

enum Flow {
    Continue,
    /// The association is closed,
    /// with the reason given to pending requests.
    Stop(String),
}

pub(crate) struct Engine<H> {
    handle: AssociationHandle,
    input: Receiver<Input>,
    handler: H,
    assembler: MessageAssembler,
    pending: HashMap<u16, Reply>,
    dimse_timeout: Option<Duration>,
}

impl<H> Engine<H>
where
    H: AssociationHandler,
{
    pub(crate) fn new(
        handle: AssociationHandle,
        input: Receiver<Input>,
        handler: H,
        dimse_timeout: Option<Duration>,
    ) -> Self {
        Engine {
            handle,
            input,
            handler,
            assembler: MessageAssembler::new(),
            pending: HashMap::new(),
            dimse_timeout,
        }
    }

    pub(crate) fn run(mut self) {
        debug!(
            "Association with {} established",
            self.handle.peer_ae_title()
        );
        self.dispatch(AssociationEvent::AssociateAccepted);
        let cause = loop {
            if self.handle.shared.aborting.load(Ordering::SeqCst) {
                self.handle.shared.set_state(AssociationState::Closed);
                self.dispatch(AssociationEvent::Aborted {
                    source: AbortRQSource::ServiceUser,
                    remote: false,
                });
                break "association aborted".to_string();
            }

            let input = match self.timeout() {
                Some(timeout) => match self.input.recv_timeout(timeout) {
                    Ok(input) => input,
                    Err(RecvTimeoutError::Timeout) => match self.on_timeout() {
                        Flow::Continue => continue,
                        Flow::Stop(cause) => break cause,
                    },
                    Err(RecvTimeoutError::Disconnected) => break "input closed".to_string(),
                },
                None => match self.input.recv() {
                    Ok(input) => input,
                    Err(_) => break "input closed".to_string(),
                },
            };

            match self.process(input) {
                Flow::Continue => {}
                Flow::Stop(cause) => break cause,
            }
        };
        self.teardown(cause);
    }

    fn timeout(&self) -> Option<Duration> {
        match self.handle.state() {
            AssociationState::Releasing => Some(self.dimse_timeout.unwrap_or(RELEASE_TIMEOUT)),
            _ => self.dimse_timeout,
        }
    }

    fn dispatch(&mut self, event: AssociationEvent) {
        self.handler.handle(&self.handle, event);
    }

    fn on_timeout(&mut self) -> Flow {
        match self.handle.state() {
            AssociationState::Releasing => {
                warn!("No reply to the release request, aborting");
                self.abort_locally(AbortRQSource::ServiceUser, "release timed out")
            }
            _ => {
                debug!("DIMSE timeout");
                self.dispatch(AssociationEvent::DimseTimeout);
                Flow::Continue
            }
        }
    }

    fn process(&mut self, input: Input) -> Flow {
        match input {
            Input::Pdu(pdu) => self.on_pdu(pdu),
            Input::ReadFailed(e) => {
                if e.is_transport() {
                    debug!("Transport failure: {}", e);
                    self.handle.shared.set_state(AssociationState::Closed);
                    let cause = e.to_string();
                    self.dispatch(AssociationEvent::NetworkError(cause.clone()));
                    Flow::Stop(cause)
                } else {
                    warn!("Malformed PDU: {}", e);
                    self.violation(AbortRQServiceProviderReason::InvalidPduParameter, e.to_string())
                }
            }
            Input::Send {
                pdus,
                presentation_context_id,
                message_id,
                waiter,
            } => self.on_send(pdus, presentation_context_id, message_id, waiter),
            Input::Release => {
                if self.handle.state() == AssociationState::Established {
                    self.handle.shared.set_state(AssociationState::Releasing);
                    if let Err(e) = self.handle.shared.write(&Pdu::ReleaseRQ) {
                        return self.network_error(e.to_string());
                    }
                }
                Flow::Continue
            }
            // handled at the top of the loop
            Input::Abort => Flow::Continue,
        }
    }

    fn on_pdu(&mut self, pdu: Pdu) -> Flow {
        let state = self.handle.state();
        match pdu {
            Pdu::PData { data } => {
                for pdv in data {
                    if let Flow::Stop(cause) = self.on_pdv(pdv) {
                        return Flow::Stop(cause);
                    }
                }
                Flow::Continue
            }
            Pdu::ReleaseRQ => {
                if let Err(e) = self.handle.shared.write(&Pdu::ReleaseRP) {
                    return self.network_error(e.to_string());
                }
                if state == AssociationState::Releasing {
                    // release collision, keep waiting for the reply
                    return Flow::Continue;
                }
                debug!("Association released by the peer");
                self.handle.shared.set_state(AssociationState::Closed);
                self.dispatch(AssociationEvent::Released);
                Flow::Stop("association released".into())
            }
            Pdu::ReleaseRP if state == AssociationState::Releasing => {
                debug!("Association released");
                self.handle.shared.set_state(AssociationState::Closed);
                self.dispatch(AssociationEvent::Released);
                Flow::Stop("association released".into())
            }
            Pdu::AbortRQ { source } => {
                warn!("Association aborted by the peer ({})", source);
                self.handle.shared.set_state(AssociationState::Closed);
                self.dispatch(AssociationEvent::Aborted {
                    source,
                    remote: true,
                });
                Flow::Stop("association aborted by the peer".into())
            }
            pdu @ Pdu::Unknown { .. } => self.violation(
                AbortRQServiceProviderReason::UnrecognizedPdu,
                format!("unknown PDU {}", pdu.short_description()),
            ),
            pdu => self.violation(
                AbortRQServiceProviderReason::UnexpectedPdu,
                format!("unexpected PDU {}", pdu.short_description()),
            ),
        }
    }

    fn on_pdv(&mut self, pdv: PDataValue) -> Flow {
        let pcid = pdv.presentation_context_id;
        let transfer_syntax = match self.handle.presentation_context(pcid) {
            Some(pc) if pc.is_accepted() => pc.transfer_syntax.clone(),
            _ => {
                return self.violation(
                    AbortRQServiceProviderReason::InvalidPduParameter,
                    format!("data on presentation context {} which was not accepted", pcid),
                )
            }
        };

        let assembled = match self.assembler.push(pdv) {
            Ok(Some(assembled)) => assembled,
            Ok(None) => return Flow::Continue,
            Err(e) => {
                return self.violation(
                    AbortRQServiceProviderReason::InvalidPduParameter,
                    format!("invalid DIMSE message: {}", e),
                )
            }
        };

        let data = match assembled.data {
            Some(bytes) => {
                let ts = match TransferSyntaxRegistry::resolve(&transfer_syntax) {
                    Some(ts) => ts,
                    None => {
                        return self.violation(
                            AbortRQServiceProviderReason::InvalidPduParameter,
                            format!("transfer syntax {} is not supported", transfer_syntax),
                        )
                    }
                };
                match read_dataset(&bytes[..], &ts, ReadOptions::default()) {
                    Ok(data) => Some(data),
                    Err(e) => {
                        return self.violation(
                            AbortRQServiceProviderReason::InvalidPduParameter,
                            format!("invalid data set: {}", e),
                        )
                    }
                }
            }
            None => None,
        };
        let msg = DimseMessage {
            presentation_context_id: pcid,
            command: assembled.command,
            data,
        };

        let is_final_response = msg
            .command_field()
            .map(|field| field.is_response())
            .unwrap_or(false)
            && !msg.status().map(|s| s.is_pending()).unwrap_or(false);
        if is_final_response {
            let waiter = msg
                .message_id_being_responded_to()
                .and_then(|id| self.pending.remove(&id));
            if let Some(waiter) = waiter {
                let _ = waiter.send(Ok(msg.clone()));
            }
        }
        self.dispatch(AssociationEvent::MessageReceived(msg));
        Flow::Continue
    }

    fn on_send(
        &mut self,
        pdus: Vec<Pdu>,
        presentation_context_id: u8,
        message_id: u16,
        waiter: Option<(u16, Reply)>,
    ) -> Flow {
        if self.handle.state() != AssociationState::Established {
            if let Some((_, reply)) = waiter {
                let _ = reply.send(
                    NetworkSnafu {
                        cause: format!("association is {}", self.handle.state()),
                    }
                    .fail(),
                );
            }
            return Flow::Continue;
        }
        if let Some((id, reply)) = waiter {
            if self.pending.insert(id, reply).is_some() {
                warn!("Message ID {} was already awaiting a response", id);
            }
        }
        for pdu in &pdus {
            if self.handle.shared.aborting.load(Ordering::SeqCst) {
                return Flow::Continue;
            }
            if let Err(e) = self.handle.shared.write(pdu) {
                return self.network_error(e.to_string());
            }
        }
        self.dispatch(AssociationEvent::MessageSent {
            presentation_context_id,
            message_id,
        });
        Flow::Continue
    }

    fn network_error(&mut self, cause: String) -> Flow {
        if self.handle.shared.aborting.load(Ordering::SeqCst) {
            // the socket was shut down by a local abort
            return Flow::Continue;
        }
        error!("Network error: {}", cause);
        self.handle.shared.set_state(AssociationState::Closed);
        self.dispatch(AssociationEvent::NetworkError(cause.clone()));
        Flow::Stop(cause)
    }

    /// Abort because the peer broke the protocol.
    fn violation(&mut self, reason: AbortRQServiceProviderReason, cause: String) -> Flow {
        warn!("Protocol violation: {}", cause);
        self.abort_locally(AbortRQSource::ServiceProvider(reason), &cause)
    }

    fn abort_locally(&mut self, source: AbortRQSource, cause: &str) -> Flow {
        self.handle.shared.set_state(AssociationState::Aborting);
        if let Err(e) = self.handle.shared.write(&Pdu::AbortRQ {
            source: source.clone(),
        }) {
            debug!("Could not write A-ABORT: {}", e);
        }
        self.handle.shared.set_state(AssociationState::Closed);
        self.dispatch(AssociationEvent::Aborted {
            source,
            remote: false,
        });
        Flow::Stop(cause.to_string())
    }

    /// Close the transport and fail everything still waiting.
    fn teardown(mut self, cause: String) {
        self.handle.shared.set_state(AssociationState::Closed);
        self.handle.shared.shutdown();
        let fail = |reply: Reply| {
            let _ = reply.send(NetworkSnafu { cause: cause.as_str() }.fail());
        };
        for (_, reply) in self.pending.drain() {
            fail(reply);
        }
        while let Ok(input) = self.input.try_recv() {
            if let Input::Send {
                waiter: Some((_, reply)),
                ..
            } = input
            {
                fail(reply);
            }
        }
        if !self.assembler.is_idle() {
            debug!("Discarding partially received messages");
        }
        debug!("Association closed: {}", cause);
    }
}
