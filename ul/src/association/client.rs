//! Association requester module
//!
//! The module provides the means to request an association
//! with another DICOM node, usually taking the role of a service class user.
//! See [`ClientAssociationOptions`]
//! for details and examples on how to create an association.
use std::borrow::Cow;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use dcmkit_encoding::transfer_syntax::trim_uid;
use snafu::{ensure, ResultExt};
use tracing::{debug, warn};

use super::{
    spawn, AbortedSnafu, Association, AssociationHandler, ConfigureSocketSnafu, ConnectSnafu,
    MissingAbstractSyntaxSnafu, NegotiatedOptions, NoAcceptedPresentationContextsSnafu,
    ProtocolVersionMismatchSnafu, ReceivePduSnafu, RejectedSnafu, Result, SendPduSnafu,
    UnexpectedPduSnafu, UnknownPduSnafu,
};
use crate::pdu::{
    max_length_of, read_pdu, write_pdu, AbortRQSource, AssociationAC, AssociationRQ, Pdu,
    PresentationContextNegotiated, PresentationContextProposed, UserIdentity, UserVariableItem,
    APPLICATION_CONTEXT_NAME, DEFAULT_MAX_PDU, MAXIMUM_PDU_SIZE,
};
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

/// A DICOM association builder for a client node.
/// The final outcome is an [`Association`].
///
/// This is the standard way of requesting and establishing
/// an association with another DICOM node,
/// that one usually taking the role of a service class provider (SCP).
///
/// # Example
///
/// ```no_run
/// # use dcmkit_ul::association::client::ClientAssociationOptions;
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let association = ClientAssociationOptions::new()
///    .with_presentation_context("1.2.840.10008.1.1", vec!["1.2.840.10008.1.2.1", "1.2.840.10008.1.2"])
///    .establish("129.168.0.5:104", ())?;
/// # Ok(())
/// # }
/// ```
///
/// At least one presentation context must be specified,
/// using the method [`with_presentation_context`](Self::with_presentation_context)
/// and supplying both an abstract syntax and list of transfer syntaxes.
///
/// A helper method [`with_abstract_syntax`](Self::with_abstract_syntax) will
/// include by default the transfer syntaxes
/// _Explicit VR Little Endian_ and _Implicit VR Little Endian_
/// in the resulting presentation context.
#[derive(Debug, Clone)]
pub struct ClientAssociationOptions<'a> {
    /// the calling AE title
    calling_ae_title: Cow<'a, str>,
    /// the called AE title
    called_ae_title: Cow<'a, str>,
    /// the requested application context name
    application_context_name: Cow<'a, str>,
    /// the list of requested presentation contexts
    presentation_contexts: Vec<(Cow<'a, str>, Vec<Cow<'a, str>>)>,
    /// the expected protocol version
    protocol_version: u16,
    /// the maximum PDU length requested for receiving PDUs
    max_pdu_length: u32,
    /// whether to receive PDUs in strict mode
    strict: bool,
    user_identity: Option<UserIdentity>,
    /// SOP class UID and service class application information
    sop_class_extended_negotiation: Vec<(Cow<'a, str>, Vec<u8>)>,
    connection_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
    dimse_timeout: Option<Duration>,
}

impl<'a> Default for ClientAssociationOptions<'a> {
    fn default() -> Self {
        ClientAssociationOptions {
            calling_ae_title: "THIS-SCU".into(),
            called_ae_title: "ANY-SCP".into(),
            application_context_name: APPLICATION_CONTEXT_NAME.into(),
            presentation_contexts: Vec::new(),
            protocol_version: 1,
            max_pdu_length: DEFAULT_MAX_PDU,
            strict: true,
            user_identity: None,
            sop_class_extended_negotiation: Vec::new(),
            connection_timeout: None,
            read_timeout: None,
            write_timeout: None,
            dimse_timeout: None,
        }
    }
}

impl<'a> ClientAssociationOptions<'a> {
    /// Create a new set of options for establishing an association.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the calling application entity title for the association,
    /// which refers to this DICOM node.
    ///
    /// The default is `THIS-SCU`.
    pub fn calling_ae_title<T>(mut self, calling_ae_title: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.calling_ae_title = calling_ae_title.into();
        self
    }

    /// Define the called application entity title for the association,
    /// which refers to the target DICOM node.
    ///
    /// The default is `ANY-SCP`.
    pub fn called_ae_title<T>(mut self, called_ae_title: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.called_ae_title = called_ae_title.into();
        self
    }

    /// Include this presentation context
    /// in the list of proposed presentation contexts.
    pub fn with_presentation_context<T>(
        mut self,
        abstract_syntax_uid: T,
        transfer_syntax_uids: Vec<T>,
    ) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        let transfer_syntaxes = transfer_syntax_uids
            .into_iter()
            .map(|t| trimmed(t.into()))
            .collect();
        self.presentation_contexts
            .push((trimmed(abstract_syntax_uid.into()), transfer_syntaxes));
        self
    }

    /// Helper to add this abstract syntax
    /// with the default transfer syntaxes
    /// to the list of proposed presentation contexts.
    pub fn with_abstract_syntax<T>(self, abstract_syntax_uid: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        let default_transfer_syntaxes: Vec<Cow<'a, str>> =
            vec!["1.2.840.10008.1.2.1".into(), "1.2.840.10008.1.2".into()];
        self.with_presentation_context(abstract_syntax_uid.into(), default_transfer_syntaxes)
    }

    /// Override the maximum PDU length
    /// that this application entity will admit.
    pub fn max_pdu_length(mut self, value: u32) -> Self {
        self.max_pdu_length = value;
        self
    }

    /// Override strict mode:
    /// whether receiving PDUs must not
    /// surpass the negotiated maximum PDU length.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Identify the user to the acceptor.
    pub fn user_identity(mut self, user_identity: UserIdentity) -> Self {
        self.user_identity = Some(user_identity);
        self
    }

    /// Propose SOP class extended negotiation
    /// with the given service class application information.
    pub fn with_sop_class_extended_negotiation<T>(
        mut self,
        sop_class_uid: T,
        application_information: Vec<u8>,
    ) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.sop_class_extended_negotiation
            .push((trimmed(sop_class_uid.into()), application_information));
        self
    }

    /// Set the timeout for opening the TCP connection.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = Some(timeout);
        self
    }

    /// Set the read timeout for the association negotiation.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the write timeout for the underlying TCP socket.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Dispatch [`DimseTimeout`](super::AssociationEvent::DimseTimeout)
    /// whenever nothing happens within this time.
    pub fn dimse_timeout(mut self, timeout: Duration) -> Self {
        self.dimse_timeout = Some(timeout);
        self
    }

    /// Initiate the TCP connection to the given address
    /// and request a new DICOM association,
    /// negotiating the presentation contexts in the process.
    ///
    /// Once established, association events are passed to `handler`.
    pub fn establish<A, H>(self, address: A, handler: H) -> Result<Association>
    where
        A: ToSocketAddrs,
        H: AssociationHandler + 'static,
    {
        // presentation contexts represent intent,
        // they should not be omitted by the user
        ensure!(
            !self.presentation_contexts.is_empty(),
            MissingAbstractSyntaxSnafu
        );

        let proposed: Vec<_> = self
            .presentation_contexts
            .iter()
            .enumerate()
            .map(|(i, (abstract_syntax, transfer_syntaxes))| PresentationContextProposed {
                id: (2 * i + 1) as u8,
                abstract_syntax: abstract_syntax.to_string(),
                transfer_syntaxes: transfer_syntaxes.iter().map(|uid| uid.to_string()).collect(),
            })
            .collect();

        let mut user_variables = vec![
            UserVariableItem::MaxLength(self.max_pdu_length),
            UserVariableItem::ImplementationClassUID(IMPLEMENTATION_CLASS_UID.to_string()),
            UserVariableItem::ImplementationVersionName(IMPLEMENTATION_VERSION_NAME.to_string()),
        ];
        user_variables.extend(
            self.sop_class_extended_negotiation
                .iter()
                .map(|(uid, info)| {
                    UserVariableItem::SopClassExtendedNegotiationSubItem(
                        uid.to_string(),
                        info.clone(),
                    )
                }),
        );
        if let Some(user_identity) = &self.user_identity {
            user_variables.push(UserVariableItem::UserIdentityItem(user_identity.clone()));
        }

        let rq = Pdu::AssociationRQ(AssociationRQ {
            protocol_version: self.protocol_version,
            calling_ae_title: self.calling_ae_title.to_string(),
            called_ae_title: self.called_ae_title.to_string(),
            application_context_name: self.application_context_name.to_string(),
            presentation_contexts: proposed.clone(),
            user_variables,
        });

        let mut socket = self.connect(address)?;
        socket
            .set_read_timeout(self.read_timeout)
            .context(ConfigureSocketSnafu)?;
        socket
            .set_write_timeout(self.write_timeout)
            .context(ConfigureSocketSnafu)?;

        debug!("Requesting association with {}", self.called_ae_title);
        write_pdu(&mut socket, &rq).context(SendPduSnafu)?;
        let pdu = read_pdu(&mut socket, MAXIMUM_PDU_SIZE, self.strict).context(ReceivePduSnafu)?;

        match pdu {
            Pdu::AssociationAC(ac) => {
                let AssociationAC {
                    protocol_version,
                    presentation_contexts,
                    called_ae_title,
                    user_variables,
                    ..
                } = ac;
                if protocol_version != self.protocol_version {
                    abort(&mut socket);
                    return ProtocolVersionMismatchSnafu {
                        expected: self.protocol_version,
                        got: protocol_version,
                    }
                    .fail();
                }

                let negotiated: Vec<_> = presentation_contexts
                    .into_iter()
                    .filter_map(|result| {
                        let proposed = proposed.iter().find(|pc| pc.id == result.id);
                        match proposed {
                            Some(pc) => Some(PresentationContextNegotiated {
                                id: result.id,
                                abstract_syntax: pc.abstract_syntax.clone(),
                                transfer_syntax: trim_uid(&result.transfer_syntax).to_string(),
                                reason: result.reason,
                            }),
                            None => {
                                warn!(
                                    "Ignoring result for presentation context {}, which was not proposed",
                                    result.id
                                );
                                None
                            }
                        }
                    })
                    .collect();

                if !negotiated.iter().any(|pc| pc.is_accepted()) {
                    abort(&mut socket);
                    return NoAcceptedPresentationContextsSnafu.fail();
                }

                // the reader thread blocks until the association ends
                socket
                    .set_read_timeout(None)
                    .context(ConfigureSocketSnafu)?;

                let peer_max_pdu_length = max_length_of(&user_variables).unwrap_or(DEFAULT_MAX_PDU);
                spawn(
                    socket,
                    NegotiatedOptions {
                        presentation_contexts: negotiated,
                        peer_max_pdu_length,
                        max_pdu_length: self.max_pdu_length,
                        peer_ae_title: called_ae_title,
                        strict: self.strict,
                        dimse_timeout: self.dimse_timeout,
                    },
                    handler,
                )
            }
            Pdu::AssociationRJ(association_rj) => {
                warn!("Association rejected: {}", association_rj.source);
                RejectedSnafu { association_rj }.fail()
            }
            Pdu::AbortRQ { source } => {
                warn!("Association aborted by the peer: {}", source);
                AbortedSnafu {
                    source_of_abort: source,
                }
                .fail()
            }
            pdu @ Pdu::Unknown { .. } => {
                abort(&mut socket);
                UnknownPduSnafu { pdu: Box::new(pdu) }.fail()
            }
            pdu => {
                abort(&mut socket);
                UnexpectedPduSnafu { pdu: Box::new(pdu) }.fail()
            }
        }
    }

    fn connect<A: ToSocketAddrs>(&self, address: A) -> Result<TcpStream> {
        match self.connection_timeout {
            None => TcpStream::connect(address).context(ConnectSnafu),
            Some(timeout) => {
                let mut last_error = None;
                for addr in address.to_socket_addrs().context(ConnectSnafu)? {
                    match TcpStream::connect_timeout(&addr, timeout) {
                        Ok(socket) => return Ok(socket),
                        Err(e) => last_error = Some(e),
                    }
                }
                let e = last_error.unwrap_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "no address to connect to",
                    )
                });
                Err(e).context(ConnectSnafu)
            }
        }
    }
}

fn trimmed(uid: Cow<'_, str>) -> Cow<'_, str> {
    match uid {
        Cow::Borrowed(s) => Cow::Borrowed(trim_uid(s)),
        Cow::Owned(s) => Cow::Owned(trim_uid(&s).to_string()),
    }
}

/// Give up on the association during negotiation.
fn abort(socket: &mut TcpStream) {
    let pdu = Pdu::AbortRQ {
        source: AbortRQSource::ServiceUser,
    };
    if let Err(e) = write_pdu(socket, &pdu) {
        debug!("Could not write A-ABORT: {}", e);
    }
}
