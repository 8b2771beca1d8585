//! Protocol data units of the DICOM upper layer.
//!
//! This module holds in-memory representations of every PDU
//! exchanged during association negotiation, data transfer, release and abort,
//! together with the [reader](read_pdu) and [writer](write_pdu)
//! turning them into bytes and back.
pub mod reader;
pub mod writer;

use std::fmt::{self, Display};

pub use reader::read_pdu;
pub use writer::write_pdu;

/// The default maximum PDU size
pub const DEFAULT_MAX_PDU: u32 = 16_384;

/// The minimum PDU size,
/// as specified by the standard
pub const MINIMUM_PDU_SIZE: u32 = 4_096;

/// The maximum PDU size,
/// as specified by the standard
pub const MAXIMUM_PDU_SIZE: u32 = 131_072;

/// The length of the PDU header in bytes:
/// PDU type (1), reserved (1) and PDU length (4).
pub const PDU_HEADER_SIZE: u32 = 6;

/// The UID of the DICOM application context.
pub const APPLICATION_CONTEXT_NAME: &str = "1.2.840.10008.3.1.1.1";

/// A presentation context as proposed by the association requester.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct PresentationContextProposed {
    /// the presentation context identifier, an odd number
    pub id: u8,
    /// the abstract syntax UID, usually a SOP class
    pub abstract_syntax: String,
    /// candidate transfer syntax UIDs, by order of preference
    pub transfer_syntaxes: Vec<String>,
}

/// A presentation context as answered by the association acceptor.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct PresentationContextResult {
    pub id: u8,
    pub reason: PresentationContextResultReason,
    pub transfer_syntax: String,
}

/// The outcome of negotiating one presentation context,
/// as known to both sides once the association is established.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct PresentationContextNegotiated {
    pub id: u8,
    pub abstract_syntax: String,
    /// The accepted transfer syntax.
    /// Not significant unless the context was accepted.
    pub transfer_syntax: String,
    pub reason: PresentationContextResultReason,
}

impl PresentationContextNegotiated {
    pub fn is_accepted(&self) -> bool {
        self.reason == PresentationContextResultReason::Acceptance
    }
}

#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum PresentationContextResultReason {
    Acceptance = 0,
    UserRejection = 1,
    NoReason = 2,
    AbstractSyntaxNotSupported = 3,
    TransferSyntaxesNotSupported = 4,
}

impl PresentationContextResultReason {
    fn from_code(code: u8) -> Option<Self> {
        use PresentationContextResultReason::*;
        Some(match code {
            0 => Acceptance,
            1 => UserRejection,
            2 => NoReason,
            3 => AbstractSyntaxNotSupported,
            4 => TransferSyntaxesNotSupported,
            _ => return None,
        })
    }
}

impl Display for PresentationContextResultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PresentationContextResultReason::Acceptance => "acceptance",
            PresentationContextResultReason::UserRejection => "user rejection",
            PresentationContextResultReason::NoReason => "no reason",
            PresentationContextResultReason::AbstractSyntaxNotSupported => {
                "abstract syntax not supported"
            }
            PresentationContextResultReason::TransferSyntaxesNotSupported => {
                "transfer syntaxes not supported"
            }
        })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AssociationRJResult {
    Permanent = 1,
    Transient = 2,
}

impl AssociationRJResult {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AssociationRJResult::Permanent),
            2 => Some(AssociationRJResult::Transient),
            _ => None,
        }
    }
}

/// Who rejected an association, and why.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AssociationRJSource {
    ServiceUser(AssociationRJServiceUserReason),
    ServiceProviderASCE(AssociationRJServiceProviderASCEReason),
    ServiceProviderPresentation(AssociationRJServiceProviderPresentationReason),
}

impl AssociationRJSource {
    fn from_codes(source: u8, reason: u8) -> Option<Self> {
        use AssociationRJServiceProviderPresentationReason as Presentation;
        use AssociationRJServiceUserReason as User;
        Some(match (source, reason) {
            (1, 1) => AssociationRJSource::ServiceUser(User::NoReasonGiven),
            (1, 2) => AssociationRJSource::ServiceUser(User::ApplicationContextNameNotSupported),
            (1, 3) => AssociationRJSource::ServiceUser(User::CallingAETitleNotRecognized),
            (1, 7) => AssociationRJSource::ServiceUser(User::CalledAETitleNotRecognized),
            (1, x @ 4..=10) => AssociationRJSource::ServiceUser(User::Reserved(x)),
            (2, 1) => AssociationRJSource::ServiceProviderASCE(
                AssociationRJServiceProviderASCEReason::NoReasonGiven,
            ),
            (2, 2) => AssociationRJSource::ServiceProviderASCE(
                AssociationRJServiceProviderASCEReason::ProtocolVersionNotSupported,
            ),
            (3, 1) => AssociationRJSource::ServiceProviderPresentation(
                Presentation::TemporaryCongestion,
            ),
            (3, 2) => {
                AssociationRJSource::ServiceProviderPresentation(Presentation::LocalLimitExceeded)
            }
            (3, x @ 0..=7) => {
                AssociationRJSource::ServiceProviderPresentation(Presentation::Reserved(x))
            }
            _ => return None,
        })
    }

    /// The source and reason codes on the wire.
    fn codes(&self) -> (u8, u8) {
        use AssociationRJServiceProviderPresentationReason as Presentation;
        use AssociationRJServiceUserReason as User;
        match self {
            AssociationRJSource::ServiceUser(reason) => (
                1,
                match reason {
                    User::NoReasonGiven => 1,
                    User::ApplicationContextNameNotSupported => 2,
                    User::CallingAETitleNotRecognized => 3,
                    User::CalledAETitleNotRecognized => 7,
                    User::Reserved(x) => *x,
                },
            ),
            AssociationRJSource::ServiceProviderASCE(reason) => (
                2,
                match reason {
                    AssociationRJServiceProviderASCEReason::NoReasonGiven => 1,
                    AssociationRJServiceProviderASCEReason::ProtocolVersionNotSupported => 2,
                },
            ),
            AssociationRJSource::ServiceProviderPresentation(reason) => (
                3,
                match reason {
                    Presentation::TemporaryCongestion => 1,
                    Presentation::LocalLimitExceeded => 2,
                    Presentation::Reserved(x) => *x,
                },
            ),
        }
    }
}

impl Display for AssociationRJSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationRJSource::ServiceUser(r) => write!(f, "service user: {}", r),
            AssociationRJSource::ServiceProviderASCE(r) => {
                write!(f, "service provider (ACSE): {}", r)
            }
            AssociationRJSource::ServiceProviderPresentation(r) => {
                write!(f, "service provider (presentation): {}", r)
            }
        }
    }
}

#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AssociationRJServiceUserReason {
    NoReasonGiven,
    ApplicationContextNameNotSupported,
    CallingAETitleNotRecognized,
    CalledAETitleNotRecognized,
    Reserved(u8),
}

impl Display for AssociationRJServiceUserReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationRJServiceUserReason::NoReasonGiven => f.write_str("no reason given"),
            AssociationRJServiceUserReason::ApplicationContextNameNotSupported => {
                f.write_str("application context name not supported")
            }
            AssociationRJServiceUserReason::CallingAETitleNotRecognized => {
                f.write_str("calling AE title not recognized")
            }
            AssociationRJServiceUserReason::CalledAETitleNotRecognized => {
                f.write_str("called AE title not recognized")
            }
            AssociationRJServiceUserReason::Reserved(code) => write!(f, "reserved code {}", code),
        }
    }
}

#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AssociationRJServiceProviderASCEReason {
    NoReasonGiven,
    ProtocolVersionNotSupported,
}

impl Display for AssociationRJServiceProviderASCEReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssociationRJServiceProviderASCEReason::NoReasonGiven => "no reason given",
            AssociationRJServiceProviderASCEReason::ProtocolVersionNotSupported => {
                "protocol version not supported"
            }
        })
    }
}

#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AssociationRJServiceProviderPresentationReason {
    TemporaryCongestion,
    LocalLimitExceeded,
    Reserved(u8),
}

impl Display for AssociationRJServiceProviderPresentationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationRJServiceProviderPresentationReason::TemporaryCongestion => {
                f.write_str("temporary congestion")
            }
            AssociationRJServiceProviderPresentationReason::LocalLimitExceeded => {
                f.write_str("local limit exceeded")
            }
            AssociationRJServiceProviderPresentationReason::Reserved(code) => {
                write!(f, "reserved code {}", code)
            }
        }
    }
}

/// One presentation data value of a P-DATA-TF PDU.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct PDataValue {
    pub presentation_context_id: u8,
    pub value_type: PDataValueType,
    /// whether this is the last fragment of the command or data set
    pub is_last: bool,
    pub data: Vec<u8>,
}

#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum PDataValueType {
    Command,
    Data,
}

/// Who aborted an association.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AbortRQSource {
    ServiceUser,
    ServiceProvider(AbortRQServiceProviderReason),
    Reserved,
}

impl AbortRQSource {
    fn from_codes(source: u8, reason: u8) -> Option<Self> {
        use AbortRQServiceProviderReason::*;
        Some(match (source, reason) {
            (0, _) => AbortRQSource::ServiceUser,
            (1, _) => AbortRQSource::Reserved,
            (2, 0) => AbortRQSource::ServiceProvider(ReasonNotSpecified),
            (2, 1) => AbortRQSource::ServiceProvider(UnrecognizedPdu),
            (2, 2) => AbortRQSource::ServiceProvider(UnexpectedPdu),
            (2, 3) => AbortRQSource::ServiceProvider(Reserved),
            (2, 4) => AbortRQSource::ServiceProvider(UnrecognizedPduParameter),
            (2, 5) => AbortRQSource::ServiceProvider(UnexpectedPduParameter),
            (2, 6) => AbortRQSource::ServiceProvider(InvalidPduParameter),
            _ => return None,
        })
    }

    fn codes(&self) -> (u8, u8) {
        match self {
            AbortRQSource::ServiceUser => (0, 0),
            AbortRQSource::Reserved => (1, 0),
            AbortRQSource::ServiceProvider(reason) => (2, reason.clone() as u8),
        }
    }
}

impl Display for AbortRQSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortRQSource::ServiceUser => f.write_str("service user"),
            AbortRQSource::Reserved => f.write_str("reserved"),
            AbortRQSource::ServiceProvider(reason) => write!(f, "service provider: {}", reason),
        }
    }
}

/// The reasons for an A-ABORT issued by the service provider.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum AbortRQServiceProviderReason {
    ReasonNotSpecified = 0,
    UnrecognizedPdu = 1,
    UnexpectedPdu = 2,
    Reserved = 3,
    UnrecognizedPduParameter = 4,
    UnexpectedPduParameter = 5,
    InvalidPduParameter = 6,
}

impl Display for AbortRQServiceProviderReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AbortRQServiceProviderReason::ReasonNotSpecified => "reason not specified",
            AbortRQServiceProviderReason::UnrecognizedPdu => "unrecognized PDU",
            AbortRQServiceProviderReason::UnexpectedPdu => "unexpected PDU",
            AbortRQServiceProviderReason::Reserved => "reserved code",
            AbortRQServiceProviderReason::UnrecognizedPduParameter => "unrecognized PDU parameter",
            AbortRQServiceProviderReason::UnexpectedPduParameter => "unexpected PDU parameter",
            AbortRQServiceProviderReason::InvalidPduParameter => "invalid PDU parameter",
        })
    }
}

/// A variable item of an association request or acknowledgement.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum PduVariableItem {
    Unknown(u8),
    ApplicationContext(String),
    PresentationContextProposed(PresentationContextProposed),
    PresentationContextResult(PresentationContextResult),
    UserVariables(Vec<UserVariableItem>),
}

/// A sub-item of the user information item.
#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub enum UserVariableItem {
    Unknown(u8, Vec<u8>),
    /// maximum length of the P-DATA-TF PDUs that the sender can receive
    MaxLength(u32),
    ImplementationClassUID(String),
    ImplementationVersionName(String),
    /// SOP class UID and service class application information
    SopClassExtendedNegotiationSubItem(String, Vec<u8>),
    UserIdentityItem(UserIdentity),
}

#[derive(Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
pub struct UserIdentity {
    positive_response_requested: bool,
    identity_type: UserIdentityType,
    primary_field: Vec<u8>,
    secondary_field: Vec<u8>,
}

impl UserIdentity {
    pub fn new(
        positive_response_requested: bool,
        identity_type: UserIdentityType,
        primary_field: Vec<u8>,
        secondary_field: Vec<u8>,
    ) -> Self {
        UserIdentity {
            positive_response_requested,
            identity_type,
            primary_field,
            secondary_field,
        }
    }

    /// A user name identity.
    pub fn username(username: &str) -> Self {
        Self::new(false, UserIdentityType::Username, username.into(), Vec::new())
    }

    /// A user name and passcode identity.
    pub fn username_password(username: &str, password: &str) -> Self {
        Self::new(
            false,
            UserIdentityType::UsernamePassword,
            username.into(),
            password.into(),
        )
    }

    pub fn positive_response_requested(&self) -> bool {
        self.positive_response_requested
    }

    pub fn identity_type(&self) -> UserIdentityType {
        self.identity_type
    }

    pub fn primary_field(&self) -> &[u8] {
        &self.primary_field
    }

    pub fn secondary_field(&self) -> &[u8] {
        &self.secondary_field
    }
}

#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Hash, Debug)]
#[non_exhaustive]
pub enum UserIdentityType {
    Username = 1,
    UsernamePassword = 2,
    KerberosServiceTicket = 3,
    SamlAssertion = 4,
    Jwt = 5,
}

impl UserIdentityType {
    fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            1 => Self::Username,
            2 => Self::UsernamePassword,
            3 => Self::KerberosServiceTicket,
            4 => Self::SamlAssertion,
            5 => Self::Jwt,
            _ => return None,
        })
    }
}

/// An in-memory representation of a full Protocol Data Unit (PDU).
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Hash)]
pub enum Pdu {
    /// Unrecognized PDU type
    Unknown { pdu_type: u8, data: Vec<u8> },
    /// Association request (A-ASSOCIATE-RQ)
    AssociationRQ(AssociationRQ),
    /// Association acknowledgement (A-ASSOCIATE-AC)
    AssociationAC(AssociationAC),
    /// Association rejection (A-ASSOCIATE-RJ)
    AssociationRJ(AssociationRJ),
    /// P-Data (P-DATA-TF)
    PData { data: Vec<PDataValue> },
    /// Association release request (A-RELEASE-RQ)
    ReleaseRQ,
    /// Association release reply (A-RELEASE-RP)
    ReleaseRP,
    /// Association abort request (A-ABORT)
    AbortRQ { source: AbortRQSource },
}

impl Pdu {
    /// The PDU type code on the wire.
    pub fn pdu_type(&self) -> u8 {
        match self {
            Pdu::Unknown { pdu_type, .. } => *pdu_type,
            Pdu::AssociationRQ(_) => 0x01,
            Pdu::AssociationAC(_) => 0x02,
            Pdu::AssociationRJ(_) => 0x03,
            Pdu::PData { .. } => 0x04,
            Pdu::ReleaseRQ => 0x05,
            Pdu::ReleaseRP => 0x06,
            Pdu::AbortRQ { .. } => 0x07,
        }
    }

    /// Provide a short description of the PDU,
    /// leaving out the contents of P-Data values.
    pub fn short_description(&self) -> impl Display + '_ {
        PduShortDescription(self)
    }
}

struct PduShortDescription<'a>(&'a Pdu);

impl Display for PduShortDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Pdu::Unknown { pdu_type, data } => write!(
                f,
                "Unknown {{pdu_type: {}, data: {} bytes }}",
                pdu_type,
                data.len()
            ),
            Pdu::PData { data } => {
                f.write_str("PData [")?;
                for (i, pdv) in data.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(
                        f,
                        "({}, {:?}, {} bytes{})",
                        pdv.presentation_context_id,
                        pdv.value_type,
                        pdv.data.len(),
                        if pdv.is_last { ", last" } else { "" }
                    )?;
                }
                f.write_str("]")
            }
            pdu => fmt::Debug::fmt(pdu, f),
        }
    }
}

/// An in-memory representation of an association request
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd)]
pub struct AssociationRQ {
    pub protocol_version: u16,
    pub calling_ae_title: String,
    pub called_ae_title: String,
    pub application_context_name: String,
    pub presentation_contexts: Vec<PresentationContextProposed>,
    pub user_variables: Vec<UserVariableItem>,
}

impl From<AssociationRQ> for Pdu {
    fn from(value: AssociationRQ) -> Self {
        Pdu::AssociationRQ(value)
    }
}

/// An in-memory representation of an association acknowledgement
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd)]
pub struct AssociationAC {
    pub protocol_version: u16,
    pub calling_ae_title: String,
    pub called_ae_title: String,
    pub application_context_name: String,
    pub presentation_contexts: Vec<PresentationContextResult>,
    pub user_variables: Vec<UserVariableItem>,
}

impl From<AssociationAC> for Pdu {
    fn from(value: AssociationAC) -> Self {
        Pdu::AssociationAC(value)
    }
}

/// An in-memory representation of an association rejection.
#[derive(Debug, Clone, Eq, Hash, PartialEq, PartialOrd)]
pub struct AssociationRJ {
    pub result: AssociationRJResult,
    pub source: AssociationRJSource,
}

impl From<AssociationRJ> for Pdu {
    fn from(value: AssociationRJ) -> Self {
        Pdu::AssociationRJ(value)
    }
}

/// The maximum length announced in a list of user variables.
pub(crate) fn max_length_of(user_variables: &[UserVariableItem]) -> Option<u32> {
    user_variables.iter().find_map(|item| match item {
        UserVariableItem::MaxLength(len) => Some(*len),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdu_short_description() {
        let pdu = Pdu::AbortRQ {
            source: AbortRQSource::ServiceUser,
        };
        assert_eq!(
            &pdu.short_description().to_string(),
            "AbortRQ { source: ServiceUser }",
        );

        let pdu = Pdu::PData {
            data: vec![
                PDataValue {
                    is_last: false,
                    presentation_context_id: 1,
                    value_type: PDataValueType::Command,
                    data: vec![0x55; 12],
                },
                PDataValue {
                    is_last: true,
                    presentation_context_id: 1,
                    value_type: PDataValueType::Data,
                    data: vec![0x55; 384],
                },
            ],
        };
        assert_eq!(
            &pdu.short_description().to_string(),
            "PData [(1, Command, 12 bytes), (1, Data, 384 bytes, last)]",
        );
    }

    #[test]
    fn reject_codes_are_symmetric() {
        for source in 1..=3 {
            for reason in 0..=10 {
                if let Some(rj) = AssociationRJSource::from_codes(source, reason) {
                    assert_eq!(rj.codes(), (source, reason));
                }
            }
        }
        assert_eq!(AssociationRJSource::from_codes(2, 3), None);
        assert_eq!(AssociationRJSource::from_codes(4, 1), None);
    }

    #[test]
    fn abort_codes() {
        let source = AbortRQSource::from_codes(2, 6).unwrap();
        assert_eq!(
            source,
            AbortRQSource::ServiceProvider(AbortRQServiceProviderReason::InvalidPduParameter)
        );
        assert_eq!(source.codes(), (2, 6));
        assert_eq!(AbortRQSource::from_codes(2, 7), None);
        assert_eq!(AbortRQSource::ServiceUser.codes(), (0, 0));
    }
}
