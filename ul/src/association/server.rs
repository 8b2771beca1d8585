//! Association acceptor module
//!
//! The module provides an abstraction for a DICOM association
//! in which this application entity listens to incoming association requests.
//! See [`ServerAssociationOptions`]
//! for details and examples on how to create an association.
use std::borrow::Cow;
use std::net::TcpStream;
use std::time::Duration;

use dcmkit_encoding::transfer_syntax::trim_uid;
use dcmkit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ensure, ResultExt};
use tracing::{debug, warn};

use super::{
    spawn, AbortedSnafu, Association, AssociationHandler, ConfigureSocketSnafu,
    MissingAbstractSyntaxSnafu, NegotiatedOptions, ReceivePduSnafu, RejectedSnafu, Result,
    SendPduSnafu, UnexpectedPduSnafu, UnknownPduSnafu,
};
use crate::pdu::{
    max_length_of, read_pdu, write_pdu, AbortRQServiceProviderReason, AbortRQSource,
    AssociationAC, AssociationRJ, AssociationRJResult, AssociationRJServiceProviderASCEReason,
    AssociationRJServiceUserReason, AssociationRJSource, AssociationRQ, Pdu,
    PresentationContextNegotiated, PresentationContextResult, PresentationContextResultReason,
    UserIdentity, UserVariableItem, APPLICATION_CONTEXT_NAME, DEFAULT_MAX_PDU, MAXIMUM_PDU_SIZE,
};
use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

/// Common interface for application entity access control policies.
///
/// Existing implementations include [`AcceptAny`] and [`AcceptCalledAeTitle`],
/// but users are free to implement their own.
pub trait AccessControl {
    /// Obtain the decision of whether to accept an incoming association request
    /// based on the recorded application entity titles and/or user identity.
    ///
    /// Returns Ok(()) if the requester node should be given clearance.
    /// Otherwise, a concrete association RJ service user reason is given.
    fn check_access(
        &self,
        this_ae_title: &str,
        calling_ae_title: &str,
        called_ae_title: &str,
        user_identity: Option<&UserIdentity>,
    ) -> std::result::Result<(), AssociationRJServiceUserReason>;
}

/// An access control rule that accepts any incoming association request.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct AcceptAny;

impl AccessControl for AcceptAny {
    fn check_access(
        &self,
        _this_ae_title: &str,
        _calling_ae_title: &str,
        _called_ae_title: &str,
        _user_identity: Option<&UserIdentity>,
    ) -> std::result::Result<(), AssociationRJServiceUserReason> {
        Ok(())
    }
}

/// An access control rule that accepts association requests
/// that match the called AE title with the node's AE title.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct AcceptCalledAeTitle;

impl AccessControl for AcceptCalledAeTitle {
    fn check_access(
        &self,
        this_ae_title: &str,
        _calling_ae_title: &str,
        called_ae_title: &str,
        _user_identity: Option<&UserIdentity>,
    ) -> std::result::Result<(), AssociationRJServiceUserReason> {
        if this_ae_title == called_ae_title {
            Ok(())
        } else {
            Err(AssociationRJServiceUserReason::CalledAETitleNotRecognized)
        }
    }
}

/// A DICOM association builder for an acceptor DICOM node,
/// often taking the role of a service class provider (SCP).
///
/// Unlike the [`ClientAssociationOptions`],
/// a value of this type can be reused for multiple connections.
///
/// [`ClientAssociationOptions`]: crate::association::ClientAssociationOptions
///
/// The SCP will by default accept all transfer syntaxes
/// registered in the [transfer syntax registry][1],
/// unless one or more transfer syntaxes are explicitly indicated
/// through calls to [`with_transfer_syntax`][2].
/// Either way, a transfer syntax is only accepted while it is registered.
///
/// Access control logic is also available,
/// enabling application entities to decide on
/// whether to accept or reject the association request
/// based on the _called_ and _calling_ AE titles.
///
/// - By default, the application will accept requests from anyone
///   ([`AcceptAny`])
/// - To only accept requests with a matching _called_ AE title,
///   add a call to [`accept_called_ae_title`]
///   ([`AcceptCalledAeTitle`]).
/// - Any other policy can be implemented through the [`AccessControl`] trait.
///
/// [`accept_called_ae_title`]: Self::accept_called_ae_title
/// [1]: dcmkit_transfer_syntax_registry::TransferSyntaxRegistry
/// [2]: ServerAssociationOptions::with_transfer_syntax
///
/// ## Example
///
/// ```no_run
/// # use std::net::TcpListener;
/// # use dcmkit_ul::association::server::ServerAssociationOptions;
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// # let tcp_listener: TcpListener = unimplemented!();
/// let scp_options = ServerAssociationOptions::new()
///    .with_abstract_syntax("1.2.840.10008.1.1")
///    .with_transfer_syntax("1.2.840.10008.1.2.1");
///
/// let (stream, _address) = tcp_listener.accept()?;
/// let association = scp_options.accept(stream, ())?;
/// association.join();
/// # Ok(())
/// # }
/// ```
/// How long an acceptor waits for the association request
/// before dropping a silent connection.
pub const DEFAULT_NEGOTIATION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ServerAssociationOptions<'a, A = AcceptAny> {
    /// the application entity access control policy
    ae_access_control: A,
    /// the AE title of this DICOM node
    ae_title: Cow<'a, str>,
    /// the requested application context name
    application_context_name: Cow<'a, str>,
    /// the list of accepted abstract syntaxes
    abstract_syntax_uids: Vec<Cow<'a, str>>,
    /// the list of accepted transfer syntaxes
    transfer_syntax_uids: Vec<Cow<'a, str>>,
    /// the expected protocol version
    protocol_version: u16,
    /// the maximum PDU length
    max_pdu_length: u32,
    /// whether to receive PDUs in strict mode
    strict: bool,
    /// whether to accept unknown abstract syntaxes
    promiscuous: bool,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
    dimse_timeout: Option<Duration>,
}

impl Default for ServerAssociationOptions<'_, AcceptAny> {
    fn default() -> Self {
        ServerAssociationOptions {
            ae_access_control: AcceptAny,
            ae_title: "THIS-SCP".into(),
            application_context_name: APPLICATION_CONTEXT_NAME.into(),
            abstract_syntax_uids: Vec::new(),
            transfer_syntax_uids: Vec::new(),
            protocol_version: 1,
            max_pdu_length: DEFAULT_MAX_PDU,
            strict: true,
            promiscuous: false,
            read_timeout: Some(DEFAULT_NEGOTIATION_TIMEOUT),
            write_timeout: None,
            dimse_timeout: None,
        }
    }
}

impl ServerAssociationOptions<'_, AcceptAny> {
    /// Create a new set of options for establishing an association.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, A> ServerAssociationOptions<'a, A>
where
    A: AccessControl,
{
    /// Change the access control policy to accept any association
    /// regardless of the specified AE titles.
    ///
    /// This is the default behavior when the options are first created.
    pub fn accept_any(self) -> ServerAssociationOptions<'a, AcceptAny> {
        self.ae_access_control(AcceptAny)
    }

    /// Change the access control policy to accept an association
    /// if the called AE title matches this node's AE title.
    pub fn accept_called_ae_title(self) -> ServerAssociationOptions<'a, AcceptCalledAeTitle> {
        self.ae_access_control(AcceptCalledAeTitle)
    }

    /// Change the access control policy.
    pub fn ae_access_control<P>(self, access_control: P) -> ServerAssociationOptions<'a, P>
    where
        P: AccessControl,
    {
        let ServerAssociationOptions {
            ae_title,
            application_context_name,
            abstract_syntax_uids,
            transfer_syntax_uids,
            protocol_version,
            max_pdu_length,
            strict,
            promiscuous,
            ae_access_control: _,
            read_timeout,
            write_timeout,
            dimse_timeout,
        } = self;

        ServerAssociationOptions {
            ae_access_control: access_control,
            ae_title,
            application_context_name,
            abstract_syntax_uids,
            transfer_syntax_uids,
            protocol_version,
            max_pdu_length,
            strict,
            promiscuous,
            read_timeout,
            write_timeout,
            dimse_timeout,
        }
    }

    /// Define the application entity title referring to this DICOM node.
    ///
    /// The default is `THIS-SCP`.
    pub fn ae_title<T>(mut self, ae_title: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.ae_title = ae_title.into();
        self
    }

    /// Include this abstract syntax
    /// in the list of accepted abstract syntaxes.
    pub fn with_abstract_syntax<T>(mut self, abstract_syntax_uid: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.abstract_syntax_uids
            .push(trimmed(abstract_syntax_uid.into()));
        self
    }

    /// Include this transfer syntax in the list of accepted transfer syntaxes.
    pub fn with_transfer_syntax<T>(mut self, transfer_syntax_uid: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        self.transfer_syntax_uids
            .push(trimmed(transfer_syntax_uid.into()));
        self
    }

    /// Override the maximum expected PDU length.
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

    /// Override promiscuous mode:
    /// whether to accept unknown abstract syntaxes.
    pub fn promiscuous(mut self, promiscuous: bool) -> Self {
        self.promiscuous = promiscuous;
        self
    }

    /// Set the read timeout for the association negotiation.
    ///
    /// The default is [`DEFAULT_NEGOTIATION_TIMEOUT`].
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

    /// Decide on an association request.
    ///
    /// Produces either the acknowledgement to send back
    /// together with the outcome of each presentation context,
    /// or the rejection to send back.
    /// The decision depends only on the request, these options
    /// and the transfer syntaxes currently registered.
    pub fn negotiate(
        &self,
        rq: &AssociationRQ,
    ) -> std::result::Result<(AssociationAC, Vec<PresentationContextNegotiated>), AssociationRJ>
    {
        if rq.protocol_version & 0x0001 == 0 {
            return Err(AssociationRJ {
                result: AssociationRJResult::Permanent,
                source: AssociationRJSource::ServiceProviderASCE(
                    AssociationRJServiceProviderASCEReason::ProtocolVersionNotSupported,
                ),
            });
        }

        if trim_uid(&rq.application_context_name) != self.application_context_name {
            return Err(AssociationRJ {
                result: AssociationRJResult::Permanent,
                source: AssociationRJSource::ServiceUser(
                    AssociationRJServiceUserReason::ApplicationContextNameNotSupported,
                ),
            });
        }

        let user_identity = rq.user_variables.iter().find_map(|item| match item {
            UserVariableItem::UserIdentityItem(user_identity) => Some(user_identity),
            _ => None,
        });
        if let Err(reason) = self.ae_access_control.check_access(
            &self.ae_title,
            &rq.calling_ae_title,
            &rq.called_ae_title,
            user_identity,
        ) {
            return Err(AssociationRJ {
                result: AssociationRJResult::Permanent,
                source: AssociationRJSource::ServiceUser(reason),
            });
        }

        let negotiated: Vec<_> = rq
            .presentation_contexts
            .iter()
            .map(|pc| {
                let abstract_syntax = trim_uid(&pc.abstract_syntax);
                let known = self
                    .abstract_syntax_uids
                    .iter()
                    .any(|uid| uid == abstract_syntax);
                if !known && !self.promiscuous {
                    return PresentationContextNegotiated {
                        id: pc.id,
                        abstract_syntax: abstract_syntax.to_string(),
                        transfer_syntax: String::new(),
                        reason: PresentationContextResultReason::AbstractSyntaxNotSupported,
                    };
                }
                match self.choose_transfer_syntax(&pc.transfer_syntaxes) {
                    Some(ts) => PresentationContextNegotiated {
                        id: pc.id,
                        abstract_syntax: abstract_syntax.to_string(),
                        transfer_syntax: ts.to_string(),
                        reason: PresentationContextResultReason::Acceptance,
                    },
                    None => PresentationContextNegotiated {
                        id: pc.id,
                        abstract_syntax: abstract_syntax.to_string(),
                        transfer_syntax: String::new(),
                        reason: PresentationContextResultReason::TransferSyntaxesNotSupported,
                    },
                }
            })
            .collect();

        if !negotiated.iter().any(|pc| pc.is_accepted()) {
            return Err(AssociationRJ {
                result: AssociationRJResult::Permanent,
                source: AssociationRJSource::ServiceProviderASCE(
                    AssociationRJServiceProviderASCEReason::NoReasonGiven,
                ),
            });
        }

        let ac = AssociationAC {
            protocol_version: self.protocol_version,
            calling_ae_title: rq.calling_ae_title.clone(),
            called_ae_title: rq.called_ae_title.clone(),
            application_context_name: rq.application_context_name.clone(),
            presentation_contexts: negotiated
                .iter()
                .map(|pc| PresentationContextResult {
                    id: pc.id,
                    reason: pc.reason,
                    // refused contexts still carry a transfer syntax item
                    transfer_syntax: if pc.is_accepted() {
                        pc.transfer_syntax.clone()
                    } else {
                        "1.2.840.10008.1.2".to_string()
                    },
                })
                .collect(),
            user_variables: vec![
                UserVariableItem::MaxLength(self.max_pdu_length),
                UserVariableItem::ImplementationClassUID(IMPLEMENTATION_CLASS_UID.to_string()),
                UserVariableItem::ImplementationVersionName(
                    IMPLEMENTATION_VERSION_NAME.to_string(),
                ),
            ],
        };
        Ok((ac, negotiated))
    }

    /// The first proposed transfer syntax
    /// which is both accepted by this node and registered.
    fn choose_transfer_syntax<'t>(&self, proposed: &'t [String]) -> Option<&'t str> {
        proposed
            .iter()
            .map(|ts| trim_uid(ts))
            .filter(|ts| {
                self.transfer_syntax_uids.is_empty()
                    || self.transfer_syntax_uids.iter().any(|uid| uid == ts)
            })
            .find(|ts| TransferSyntaxRegistry::resolve(ts).is_some())
    }

    /// Negotiate an association with the given TCP stream.
    ///
    /// On success, the association runs on its own threads,
    /// passing its events to `handler`.
    /// A rejected request results in [`Error::Rejected`](super::Error::Rejected).
    pub fn accept<H>(&self, mut socket: TcpStream, handler: H) -> Result<Association>
    where
        H: AssociationHandler + 'static,
    {
        ensure!(
            !self.abstract_syntax_uids.is_empty() || self.promiscuous,
            MissingAbstractSyntaxSnafu
        );

        socket
            .set_read_timeout(self.read_timeout)
            .context(ConfigureSocketSnafu)?;
        socket
            .set_write_timeout(self.write_timeout)
            .context(ConfigureSocketSnafu)?;

        let pdu = read_pdu(&mut socket, MAXIMUM_PDU_SIZE, self.strict).context(ReceivePduSnafu)?;
        let rq = match pdu {
            Pdu::AssociationRQ(rq) => rq,
            Pdu::AbortRQ { source } => {
                return AbortedSnafu {
                    source_of_abort: source,
                }
                .fail();
            }
            pdu @ Pdu::Unknown { .. } => {
                abort(&mut socket, AbortRQServiceProviderReason::UnrecognizedPdu);
                return UnknownPduSnafu { pdu: Box::new(pdu) }.fail();
            }
            pdu => {
                abort(&mut socket, AbortRQServiceProviderReason::UnexpectedPdu);
                return UnexpectedPduSnafu { pdu: Box::new(pdu) }.fail();
            }
        };

        match self.negotiate(&rq) {
            Ok((ac, presentation_contexts)) => {
                write_pdu(&mut socket, &Pdu::AssociationAC(ac)).context(SendPduSnafu)?;
                debug!(
                    "Accepted association from {} ({} of {} presentation contexts)",
                    rq.calling_ae_title,
                    presentation_contexts.iter().filter(|pc| pc.is_accepted()).count(),
                    presentation_contexts.len()
                );
                socket
                    .set_read_timeout(None)
                    .context(ConfigureSocketSnafu)?;
                let peer_max_pdu_length =
                    max_length_of(&rq.user_variables).unwrap_or(DEFAULT_MAX_PDU);
                spawn(
                    socket,
                    NegotiatedOptions {
                        presentation_contexts,
                        peer_max_pdu_length,
                        max_pdu_length: self.max_pdu_length,
                        peer_ae_title: rq.calling_ae_title,
                        strict: self.strict,
                        dimse_timeout: self.dimse_timeout,
                    },
                    handler,
                )
            }
            Err(association_rj) => {
                warn!(
                    "Rejecting association from {}: {}",
                    rq.calling_ae_title, association_rj.source
                );
                write_pdu(&mut socket, &Pdu::AssociationRJ(association_rj.clone()))
                    .context(SendPduSnafu)?;
                RejectedSnafu { association_rj }.fail()
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

fn abort(socket: &mut TcpStream, reason: AbortRQServiceProviderReason) {
    let pdu = Pdu::AbortRQ {
        source: AbortRQSource::ServiceProvider(reason),
    };
    if let Err(e) = write_pdu(socket, &pdu) {
        debug!("Could not write A-ABORT: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::PresentationContextProposed;
    use dcmkit_dictionary_std::uids;

    fn request(contexts: &[(&str, &[&str])]) -> AssociationRQ {
        AssociationRQ {
            protocol_version: 1,
            calling_ae_title: "STORE-SCU".into(),
            called_ae_title: "STORE-SCP".into(),
            application_context_name: APPLICATION_CONTEXT_NAME.into(),
            presentation_contexts: contexts
                .iter()
                .enumerate()
                .map(|(i, (abstract_syntax, transfer_syntaxes))| PresentationContextProposed {
                    id: (2 * i + 1) as u8,
                    abstract_syntax: abstract_syntax.to_string(),
                    transfer_syntaxes: transfer_syntaxes.iter().map(|ts| ts.to_string()).collect(),
                })
                .collect(),
            user_variables: vec![UserVariableItem::MaxLength(32768)],
        }
    }

    #[test]
    fn first_acceptable_transfer_syntax_wins() {
        let options = ServerAssociationOptions::new()
            .with_abstract_syntax(uids::VERIFICATION)
            .with_abstract_syntax(uids::CT_IMAGE_STORAGE);
        let rq = request(&[
            (
                uids::VERIFICATION,
                &["1.2.3.4.5.6.7", uids::EXPLICIT_VR_LITTLE_ENDIAN, uids::IMPLICIT_VR_LITTLE_ENDIAN],
            ),
            (uids::CT_IMAGE_STORAGE, &["1.2.3.4.5.6.7"]),
            (uids::SECONDARY_CAPTURE_IMAGE_STORAGE, &[uids::IMPLICIT_VR_LITTLE_ENDIAN]),
        ]);

        let (ac, negotiated) = options.negotiate(&rq).unwrap();
        assert_eq!(
            negotiated,
            vec![
                PresentationContextNegotiated {
                    id: 1,
                    abstract_syntax: uids::VERIFICATION.into(),
                    transfer_syntax: uids::EXPLICIT_VR_LITTLE_ENDIAN.into(),
                    reason: PresentationContextResultReason::Acceptance,
                },
                PresentationContextNegotiated {
                    id: 3,
                    abstract_syntax: uids::CT_IMAGE_STORAGE.into(),
                    transfer_syntax: String::new(),
                    reason: PresentationContextResultReason::TransferSyntaxesNotSupported,
                },
                PresentationContextNegotiated {
                    id: 5,
                    abstract_syntax: uids::SECONDARY_CAPTURE_IMAGE_STORAGE.into(),
                    transfer_syntax: String::new(),
                    reason: PresentationContextResultReason::AbstractSyntaxNotSupported,
                },
            ]
        );
        assert_eq!(ac.presentation_contexts.len(), 3);
        assert_eq!(ac.calling_ae_title, "STORE-SCU");
        assert_eq!(max_length_of(&ac.user_variables), Some(DEFAULT_MAX_PDU));

        // same request, same outcome
        assert_eq!(options.negotiate(&rq).unwrap(), (ac, negotiated));
    }

    #[test]
    fn negotiation_wait_is_bounded_by_default() {
        let options = ServerAssociationOptions::new();
        assert_eq!(options.read_timeout, Some(DEFAULT_NEGOTIATION_TIMEOUT));
        let options = options.read_timeout(Duration::from_secs(2));
        assert_eq!(options.read_timeout, Some(Duration::from_secs(2)));
    }

    #[test]
    fn acceptor_transfer_syntaxes_restrict_the_choice() {
        let options = ServerAssociationOptions::new()
            .with_abstract_syntax(uids::VERIFICATION)
            .with_transfer_syntax(uids::IMPLICIT_VR_LITTLE_ENDIAN);
        let rq = request(&[(
            uids::VERIFICATION,
            &[uids::EXPLICIT_VR_LITTLE_ENDIAN, "1.2.840.10008.1.2\0"],
        )]);
        let (_, negotiated) = options.negotiate(&rq).unwrap();
        assert_eq!(negotiated[0].transfer_syntax, uids::IMPLICIT_VR_LITTLE_ENDIAN);
    }

    #[test]
    fn nothing_accepted_is_a_rejection() {
        let options = ServerAssociationOptions::new()
            .with_abstract_syntax(uids::VERIFICATION)
            .with_transfer_syntax(uids::EXPLICIT_VR_BIG_ENDIAN);
        let rq = request(&[(uids::VERIFICATION, &[uids::EXPLICIT_VR_LITTLE_ENDIAN])]);
        assert_eq!(
            options.negotiate(&rq).unwrap_err(),
            AssociationRJ {
                result: AssociationRJResult::Permanent,
                source: AssociationRJSource::ServiceProviderASCE(
                    AssociationRJServiceProviderASCEReason::NoReasonGiven
                ),
            }
        );
    }

    #[test]
    fn promiscuous_mode_accepts_unknown_abstract_syntaxes() {
        let options = ServerAssociationOptions::new().promiscuous(true);
        let rq = request(&[("1.2.3.4", &[uids::IMPLICIT_VR_LITTLE_ENDIAN])]);
        let (_, negotiated) = options.negotiate(&rq).unwrap();
        assert!(negotiated[0].is_accepted());
    }

    #[test]
    fn request_level_rejections() {
        let options = ServerAssociationOptions::new()
            .with_abstract_syntax(uids::VERIFICATION)
            .ae_title("STORE-SCP")
            .accept_called_ae_title();
        let contexts: &[(&str, &[&str])] =
            &[(uids::VERIFICATION, &[uids::IMPLICIT_VR_LITTLE_ENDIAN])];

        let mut rq = request(contexts);
        rq.protocol_version = 2;
        assert_eq!(
            options.negotiate(&rq).unwrap_err().source,
            AssociationRJSource::ServiceProviderASCE(
                AssociationRJServiceProviderASCEReason::ProtocolVersionNotSupported
            )
        );

        let mut rq = request(contexts);
        rq.application_context_name = "1.2.3".into();
        assert_eq!(
            options.negotiate(&rq).unwrap_err().source,
            AssociationRJSource::ServiceUser(
                AssociationRJServiceUserReason::ApplicationContextNameNotSupported
            )
        );

        let mut rq = request(contexts);
        rq.called_ae_title = "OTHER-SCP".into();
        assert_eq!(
            options.negotiate(&rq).unwrap_err().source,
            AssociationRJSource::ServiceUser(
                AssociationRJServiceUserReason::CalledAETitleNotRecognized
            )
        );

        assert!(options.negotiate(&request(contexts)).is_ok());
    }
}
