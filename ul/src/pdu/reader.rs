//! PDU reader module
use crate::pdu::*;
use byteordered::byteorder::{BigEndian, ReadBytesExt};
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{Cursor, ErrorKind, Read};
use tracing::warn;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Invalid max PDU length {}", max_pdu_length))]
    InvalidMaxPdu {
        max_pdu_length: u32,
        backtrace: Backtrace,
    },

    /// The stream ended before the start of a PDU
    #[snafu(display("No PDU available"))]
    NoPduAvailable { backtrace: Backtrace },

    #[snafu(display("Could not read PDU header"))]
    ReadPduHeader {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read {} bytes of PDU body", length))]
    ReadPduBody {
        length: u32,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read PDU field `{}`", field))]
    ReadPduField {
        field: &'static str,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid item length {} (must be >=2)", length))]
    InvalidItemLength { length: u32, backtrace: Backtrace },

    #[snafu(display(
        "Incoming PDU was too large: length {}, maximum is {}",
        pdu_length,
        max_pdu_length
    ))]
    PduTooLarge {
        pdu_length: u32,
        max_pdu_length: u32,
        backtrace: Backtrace,
    },

    #[snafu(display("PDU contained an unexpected item {:?}", var_item))]
    InvalidPduVariable {
        var_item: Box<PduVariableItem>,
        backtrace: Backtrace,
    },

    #[snafu(display("Multiple transfer syntaxes were accepted"))]
    MultipleTransferSyntaxesAccepted { backtrace: Backtrace },

    #[snafu(display("Invalid reject source or reason"))]
    InvalidRejectSourceOrReason { backtrace: Backtrace },

    #[snafu(display("Invalid abort source or reason"))]
    InvalidAbortSourceOrReason { backtrace: Backtrace },

    #[snafu(display("Invalid presentation context result reason"))]
    InvalidPresentationContextResultReason { backtrace: Backtrace },

    #[snafu(display("Unknown presentation context sub-item {:#04x}", item_type))]
    UnknownPresentationContextSubItem { item_type: u8, backtrace: Backtrace },

    #[snafu(display("Missing application context name"))]
    MissingApplicationContextName { backtrace: Backtrace },

    #[snafu(display("Missing abstract syntax"))]
    MissingAbstractSyntax { backtrace: Backtrace },

    #[snafu(display("Missing transfer syntax"))]
    MissingTransferSyntax { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Whether the error came from the byte stream itself
    /// rather than from the contents of a PDU.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::NoPduAvailable { .. } | Error::ReadPduHeader { .. } | Error::ReadPduBody { .. }
        )
    }
}

/// Read one PDU from a byte stream.
///
/// `max_pdu_length` is the maximum PDU length this node accepts,
/// which must be within the bounds established by the standard.
/// In `strict` mode, longer PDUs are an error.
/// Otherwise they are tolerated up to [`MAXIMUM_PDU_SIZE`].
pub fn read_pdu<R>(reader: &mut R, max_pdu_length: u32, strict: bool) -> Result<Pdu>
where
    R: Read,
{
    ensure!(
        (MINIMUM_PDU_SIZE..=MAXIMUM_PDU_SIZE).contains(&max_pdu_length),
        InvalidMaxPduSnafu { max_pdu_length }
    );

    // failing to read the very first bytes means that no PDU was sent,
    // usually because the peer closed the connection
    let mut header = [0; 2];
    if let Err(e) = reader.read_exact(&mut header) {
        ensure!(e.kind() != ErrorKind::UnexpectedEof, NoPduAvailableSnafu);
        return Err(e).context(ReadPduHeaderSnafu);
    }
    let pdu_type = header[0];
    let pdu_length = reader
        .read_u32::<BigEndian>()
        .context(ReadPduHeaderSnafu)?;

    if strict {
        ensure!(
            pdu_length <= max_pdu_length,
            PduTooLargeSnafu {
                pdu_length,
                max_pdu_length
            }
        );
    } else if pdu_length > max_pdu_length {
        ensure!(
            pdu_length <= MAXIMUM_PDU_SIZE,
            PduTooLargeSnafu {
                pdu_length,
                max_pdu_length: MAXIMUM_PDU_SIZE
            }
        );
        warn!(
            "Incoming PDU was too large: length {}, maximum is {}",
            pdu_length, max_pdu_length
        );
    }

    let mut body = vec![0; pdu_length as usize];
    reader
        .read_exact(&mut body)
        .context(ReadPduBodySnafu { length: pdu_length })?;
    let mut cursor = Cursor::new(&body[..]);

    match pdu_type {
        0x01 => read_association_rq(&mut cursor).map(Pdu::AssociationRQ),
        0x02 => read_association_ac(&mut cursor).map(Pdu::AssociationAC),
        0x03 => {
            cursor.read_u8().context(ReadPduFieldSnafu { field: "Reserved" })?;
            let result = AssociationRJResult::from_code(
                cursor.read_u8().context(ReadPduFieldSnafu { field: "Result" })?,
            )
            .context(InvalidRejectSourceOrReasonSnafu)?;
            let source = cursor.read_u8().context(ReadPduFieldSnafu { field: "Source" })?;
            let reason = cursor.read_u8().context(ReadPduFieldSnafu {
                field: "Reason/Diag.",
            })?;
            let source = AssociationRJSource::from_codes(source, reason)
                .context(InvalidRejectSourceOrReasonSnafu)?;
            Ok(Pdu::AssociationRJ(AssociationRJ { result, source }))
        }
        0x04 => read_pdata(&mut cursor),
        0x05 => Ok(Pdu::ReleaseRQ),
        0x06 => Ok(Pdu::ReleaseRP),
        0x07 => {
            let mut reserved = [0; 2];
            cursor
                .read_exact(&mut reserved)
                .context(ReadPduFieldSnafu { field: "Reserved" })?;
            let source = cursor.read_u8().context(ReadPduFieldSnafu { field: "Source" })?;
            let reason = cursor.read_u8().context(ReadPduFieldSnafu {
                field: "Reason/Diag.",
            })?;
            let source =
                AbortRQSource::from_codes(source, reason).context(InvalidAbortSourceOrReasonSnafu)?;
            Ok(Pdu::AbortRQ { source })
        }
        _ => {
            warn!(
                "Unknown PDU type {:#04x} ({} bytes), skipping",
                pdu_type, pdu_length
            );
            Ok(Pdu::Unknown {
                pdu_type,
                data: body,
            })
        }
    }
}

/// The fields shared by A-ASSOCIATE-RQ and A-ASSOCIATE-AC.
struct AssociationFields {
    protocol_version: u16,
    called_ae_title: String,
    calling_ae_title: String,
    application_context_name: Option<String>,
    items: Vec<PduVariableItem>,
    user_variables: Vec<UserVariableItem>,
}

fn read_association_fields(cursor: &mut Cursor<&[u8]>) -> Result<AssociationFields> {
    let protocol_version = cursor.read_u16::<BigEndian>().context(ReadPduFieldSnafu {
        field: "Protocol-version",
    })?;
    cursor
        .read_u16::<BigEndian>()
        .context(ReadPduFieldSnafu { field: "Reserved" })?;
    let called_ae_title = read_ae_title(cursor, "Called-AE-title")?;
    let calling_ae_title = read_ae_title(cursor, "Calling-AE-title")?;
    let mut reserved = [0; 32];
    cursor
        .read_exact(&mut reserved)
        .context(ReadPduFieldSnafu { field: "Reserved" })?;

    let mut application_context_name = None;
    let mut items = Vec::new();
    let mut user_variables = Vec::new();
    while has_remaining(cursor) {
        match read_pdu_variable(cursor)? {
            PduVariableItem::ApplicationContext(name) => application_context_name = Some(name),
            PduVariableItem::UserVariables(variables) => user_variables = variables,
            PduVariableItem::Unknown(item_type) => {
                warn!("Unknown variable item {:#04x}, skipping", item_type);
            }
            item => items.push(item),
        }
    }
    Ok(AssociationFields {
        protocol_version,
        called_ae_title,
        calling_ae_title,
        application_context_name,
        items,
        user_variables,
    })
}

fn read_association_rq(cursor: &mut Cursor<&[u8]>) -> Result<AssociationRQ> {
    let fields = read_association_fields(cursor)?;
    let presentation_contexts = fields
        .items
        .into_iter()
        .map(|item| match item {
            PduVariableItem::PresentationContextProposed(pc) => Ok(pc),
            var_item => InvalidPduVariableSnafu {
                var_item: Box::new(var_item),
            }
            .fail(),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AssociationRQ {
        protocol_version: fields.protocol_version,
        calling_ae_title: fields.calling_ae_title,
        called_ae_title: fields.called_ae_title,
        application_context_name: fields
            .application_context_name
            .context(MissingApplicationContextNameSnafu)?,
        presentation_contexts,
        user_variables: fields.user_variables,
    })
}

fn read_association_ac(cursor: &mut Cursor<&[u8]>) -> Result<AssociationAC> {
    let fields = read_association_fields(cursor)?;
    let presentation_contexts = fields
        .items
        .into_iter()
        .map(|item| match item {
            PduVariableItem::PresentationContextResult(pc) => Ok(pc),
            var_item => InvalidPduVariableSnafu {
                var_item: Box::new(var_item),
            }
            .fail(),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AssociationAC {
        protocol_version: fields.protocol_version,
        calling_ae_title: fields.calling_ae_title,
        called_ae_title: fields.called_ae_title,
        application_context_name: fields
            .application_context_name
            .context(MissingApplicationContextNameSnafu)?,
        presentation_contexts,
        user_variables: fields.user_variables,
    })
}

fn read_pdata(cursor: &mut Cursor<&[u8]>) -> Result<Pdu> {
    let mut values = Vec::new();
    while has_remaining(cursor) {
        let item_length = cursor.read_u32::<BigEndian>().context(ReadPduFieldSnafu {
            field: "Item-length",
        })?;
        ensure!(
            item_length >= 2,
            InvalidItemLengthSnafu {
                length: item_length
            }
        );
        let presentation_context_id = cursor.read_u8().context(ReadPduFieldSnafu {
            field: "Presentation-context-ID",
        })?;
        // bit 0: command (1) or data set (0); bit 1: last fragment
        let header = cursor.read_u8().context(ReadPduFieldSnafu {
            field: "Message Control Header",
        })?;
        let value_type = if header & 0x01 != 0 {
            PDataValueType::Command
        } else {
            PDataValueType::Data
        };
        let data = read_n(cursor, (item_length - 2) as usize, "Presentation-data-value")?;
        values.push(PDataValue {
            presentation_context_id,
            value_type,
            is_last: header & 0x02 != 0,
            data,
        });
    }
    Ok(Pdu::PData { data: values })
}

fn has_remaining(cursor: &Cursor<&[u8]>) -> bool {
    (cursor.position() as usize) < cursor.get_ref().len()
}

fn read_n<R: Read>(reader: &mut R, len: usize, field: &'static str) -> Result<Vec<u8>> {
    let mut data = vec![0; len];
    reader
        .read_exact(&mut data)
        .context(ReadPduFieldSnafu { field })?;
    Ok(data)
}

/// Text fields are plain ASCII, padded with spaces or (for UIDs) a trailing NUL.
fn read_text<R: Read>(reader: &mut R, len: usize, field: &'static str) -> Result<String> {
    let data = read_n(reader, len, field)?;
    Ok(String::from_utf8_lossy(&data)
        .trim_matches(|c: char| c == ' ' || c == '\0')
        .to_string())
}

fn read_ae_title<R: Read>(reader: &mut R, field: &'static str) -> Result<String> {
    read_text(reader, 16, field)
}

/// Read the type, reserved byte and 16-bit length of an item or sub-item.
fn read_item_header<R: Read>(reader: &mut R) -> Result<(u8, u16)> {
    let item_type = reader
        .read_u8()
        .context(ReadPduFieldSnafu { field: "Item-type" })?;
    reader
        .read_u8()
        .context(ReadPduFieldSnafu { field: "Reserved" })?;
    let item_length = reader.read_u16::<BigEndian>().context(ReadPduFieldSnafu {
        field: "Item-length",
    })?;
    Ok((item_type, item_length))
}

fn read_pdu_variable(cursor: &mut Cursor<&[u8]>) -> Result<PduVariableItem> {
    let (item_type, item_length) = read_item_header(cursor)?;
    let bytes = read_n(cursor, item_length as usize, "Item")?;
    let mut item = Cursor::new(&bytes[..]);

    match item_type {
        0x10 => Ok(PduVariableItem::ApplicationContext(read_text(
            &mut item,
            bytes.len(),
            "Application-context-name",
        )?)),
        0x20 => {
            let id = item.read_u8().context(ReadPduFieldSnafu {
                field: "Presentation-context-ID",
            })?;
            let mut reserved = [0; 3];
            item.read_exact(&mut reserved)
                .context(ReadPduFieldSnafu { field: "Reserved" })?;

            let mut abstract_syntax = None;
            let mut transfer_syntaxes = Vec::new();
            while has_remaining(&item) {
                let (sub_type, sub_length) = read_item_header(&mut item)?;
                match sub_type {
                    0x30 => {
                        abstract_syntax = Some(read_text(
                            &mut item,
                            sub_length as usize,
                            "Abstract-syntax-name",
                        )?)
                    }
                    0x40 => transfer_syntaxes.push(read_text(
                        &mut item,
                        sub_length as usize,
                        "Transfer-syntax-name",
                    )?),
                    item_type => {
                        return UnknownPresentationContextSubItemSnafu { item_type }.fail();
                    }
                }
            }
            Ok(PduVariableItem::PresentationContextProposed(
                PresentationContextProposed {
                    id,
                    abstract_syntax: abstract_syntax.context(MissingAbstractSyntaxSnafu)?,
                    transfer_syntaxes,
                },
            ))
        }
        0x21 => {
            let id = item.read_u8().context(ReadPduFieldSnafu {
                field: "Presentation-context-ID",
            })?;
            item.read_u8()
                .context(ReadPduFieldSnafu { field: "Reserved" })?;
            let reason = PresentationContextResultReason::from_code(item.read_u8().context(
                ReadPduFieldSnafu {
                    field: "Result/Reason",
                },
            )?)
            .context(InvalidPresentationContextResultReasonSnafu)?;
            item.read_u8()
                .context(ReadPduFieldSnafu { field: "Reserved" })?;

            let mut transfer_syntax = None;
            while has_remaining(&item) {
                let (sub_type, sub_length) = read_item_header(&mut item)?;
                ensure!(
                    sub_type == 0x40,
                    UnknownPresentationContextSubItemSnafu {
                        item_type: sub_type
                    }
                );
                ensure!(
                    transfer_syntax.is_none(),
                    MultipleTransferSyntaxesAcceptedSnafu
                );
                transfer_syntax = Some(read_text(
                    &mut item,
                    sub_length as usize,
                    "Transfer-syntax-name",
                )?);
            }
            // not significant unless accepted
            let transfer_syntax = match (transfer_syntax, reason) {
                (Some(ts), _) => ts,
                (None, PresentationContextResultReason::Acceptance) => {
                    return MissingTransferSyntaxSnafu.fail()
                }
                (None, _) => String::new(),
            };
            Ok(PduVariableItem::PresentationContextResult(
                PresentationContextResult {
                    id,
                    reason,
                    transfer_syntax,
                },
            ))
        }
        0x50 => {
            let mut user_variables = Vec::new();
            while has_remaining(&item) {
                let (sub_type, sub_length) = read_item_header(&mut item)?;
                if let Some(variable) = read_user_variable(&mut item, sub_type, sub_length)? {
                    user_variables.push(variable);
                }
            }
            Ok(PduVariableItem::UserVariables(user_variables))
        }
        _ => Ok(PduVariableItem::Unknown(item_type)),
    }
}

fn read_user_variable<R: Read>(
    reader: &mut R,
    item_type: u8,
    item_length: u16,
) -> Result<Option<UserVariableItem>> {
    let variable = match item_type {
        0x51 => UserVariableItem::MaxLength(reader.read_u32::<BigEndian>().context(
            ReadPduFieldSnafu {
                field: "Maximum-length-received",
            },
        )?),
        0x52 => UserVariableItem::ImplementationClassUID(read_text(
            reader,
            item_length as usize,
            "Implementation-class-uid",
        )?),
        0x55 => UserVariableItem::ImplementationVersionName(read_text(
            reader,
            item_length as usize,
            "Implementation-version-name",
        )?),
        0x56 => {
            let uid_length = reader.read_u16::<BigEndian>().context(ReadPduFieldSnafu {
                field: "SOP-class-uid-length",
            })?;
            let sop_class_uid = read_text(reader, uid_length as usize, "SOP-class-uid")?;
            let info_length = usize::from(item_length).saturating_sub(2 + uid_length as usize);
            let info = read_n(reader, info_length, "Service-class-application-information")?;
            UserVariableItem::SopClassExtendedNegotiationSubItem(sop_class_uid, info)
        }
        0x58 => {
            let identity_type = reader.read_u8().context(ReadPduFieldSnafu {
                field: "User-Identity-type",
            })?;
            let positive_response_requested = reader.read_u8().context(ReadPduFieldSnafu {
                field: "Positive-response-requested",
            })?;
            let primary_length = reader.read_u16::<BigEndian>().context(ReadPduFieldSnafu {
                field: "Primary-field-length",
            })?;
            let primary_field = read_n(reader, primary_length as usize, "Primary-field")?;
            let secondary_length = reader.read_u16::<BigEndian>().context(ReadPduFieldSnafu {
                field: "Secondary-field-length",
            })?;
            let secondary_field = read_n(reader, secondary_length as usize, "Secondary-field")?;
            match UserIdentityType::from_code(identity_type) {
                Some(identity_type) => UserVariableItem::UserIdentityItem(UserIdentity::new(
                    positive_response_requested == 1,
                    identity_type,
                    primary_field,
                    secondary_field,
                )),
                None => {
                    warn!("Unknown user identity type {}, skipping", identity_type);
                    return Ok(None);
                }
            }
        }
        _ => UserVariableItem::Unknown(
            item_type,
            read_n(reader, item_length as usize, "User-data")?,
        ),
    };
    Ok(Some(variable))
}
