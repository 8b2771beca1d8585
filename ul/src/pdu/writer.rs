//! PDU writer module
use crate::pdu::*;
use byteordered::byteorder::{BigEndian, WriteBytesExt};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write field `{}`", field))]
    WriteField {
        field: &'static str,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    #[snafu(display("Item {:#04x} is too long ({} bytes)", item_type, length))]
    ItemTooLong {
        item_type: u8,
        length: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("PDU body is too long ({} bytes)", length))]
    PduTooLong { length: usize, backtrace: Backtrace },

    #[snafu(display("AE title `{}` is longer than 16 characters", ae_title))]
    AeTitleTooLong {
        ae_title: String,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Build a chunk prefixed by its 16-bit length.
fn write_chunk_u16<F>(buf: &mut Vec<u8>, item_type: u8, func: F) -> Result<()>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let start = buf.len();
    // item type, reserved byte, length placeholder
    buf.extend_from_slice(&[item_type, 0, 0, 0]);
    func(buf)?;
    let length = buf.len() - start - 4;
    ensure!(
        length <= u16::MAX as usize,
        ItemTooLongSnafu { item_type, length }
    );
    buf[start + 2..start + 4].copy_from_slice(&(length as u16).to_be_bytes());
    Ok(())
}

/// Build a P-DATA-TF presentation data value item, prefixed by its 32-bit length.
fn write_chunk_u32<F>(buf: &mut Vec<u8>, func: F) -> Result<()>
where
    F: FnOnce(&mut Vec<u8>) -> Result<()>,
{
    let start = buf.len();
    buf.extend_from_slice(&[0; 4]);
    func(buf)?;
    let length = buf.len() - start - 4;
    ensure!(length <= u32::MAX as usize, PduTooLongSnafu { length });
    buf[start..start + 4].copy_from_slice(&(length as u32).to_be_bytes());
    Ok(())
}

/// Write a PDU to a byte sink.
///
/// The PDU is built in memory first,
/// so the sink sees a single contiguous write.
pub fn write_pdu<W>(writer: &mut W, pdu: &Pdu) -> Result<()>
where
    W: ?Sized + Write,
{
    let mut body = Vec::new();
    match pdu {
        Pdu::AssociationRQ(rq) => {
            write_association_header(
                &mut body,
                rq.protocol_version,
                &rq.called_ae_title,
                &rq.calling_ae_title,
            )?;
            write_text_item(&mut body, 0x10, &rq.application_context_name)?;
            for pc in &rq.presentation_contexts {
                write_chunk_u16(&mut body, 0x20, |buf| {
                    buf.extend_from_slice(&[pc.id, 0, 0, 0]);
                    write_text_item(buf, 0x30, &pc.abstract_syntax)?;
                    for ts in &pc.transfer_syntaxes {
                        write_text_item(buf, 0x40, ts)?;
                    }
                    Ok(())
                })?;
            }
            write_user_variables(&mut body, &rq.user_variables)?;
        }
        Pdu::AssociationAC(ac) => {
            write_association_header(
                &mut body,
                ac.protocol_version,
                &ac.called_ae_title,
                &ac.calling_ae_title,
            )?;
            write_text_item(&mut body, 0x10, &ac.application_context_name)?;
            for pc in &ac.presentation_contexts {
                write_chunk_u16(&mut body, 0x21, |buf| {
                    buf.extend_from_slice(&[pc.id, 0, pc.reason as u8, 0]);
                    write_text_item(buf, 0x40, &pc.transfer_syntax)
                })?;
            }
            write_user_variables(&mut body, &ac.user_variables)?;
        }
        Pdu::AssociationRJ(rj) => {
            let (source, reason) = rj.source.codes();
            body.extend_from_slice(&[0, rj.result as u8, source, reason]);
        }
        Pdu::PData { data } => {
            for pdv in data {
                write_chunk_u32(&mut body, |buf| {
                    let mut header = 0;
                    if pdv.value_type == PDataValueType::Command {
                        header |= 0x01;
                    }
                    if pdv.is_last {
                        header |= 0x02;
                    }
                    buf.extend_from_slice(&[pdv.presentation_context_id, header]);
                    buf.extend_from_slice(&pdv.data);
                    Ok(())
                })?;
            }
        }
        Pdu::ReleaseRQ | Pdu::ReleaseRP => body.extend_from_slice(&[0; 4]),
        Pdu::AbortRQ { source } => {
            let (source, reason) = source.codes();
            body.extend_from_slice(&[0, 0, source, reason]);
        }
        Pdu::Unknown { data, .. } => body.extend_from_slice(data),
    }

    let length = body.len();
    ensure!(length <= u32::MAX as usize, PduTooLongSnafu { length });
    writer
        .write_u8(pdu.pdu_type())
        .context(WriteFieldSnafu { field: "PDU-type" })?;
    writer
        .write_u8(0)
        .context(WriteFieldSnafu { field: "Reserved" })?;
    writer
        .write_u32::<BigEndian>(length as u32)
        .context(WriteFieldSnafu {
            field: "PDU-length",
        })?;
    writer
        .write_all(&body)
        .context(WriteFieldSnafu { field: "PDU body" })
}

fn write_association_header(
    buf: &mut Vec<u8>,
    protocol_version: u16,
    called_ae_title: &str,
    calling_ae_title: &str,
) -> Result<()> {
    buf.extend_from_slice(&protocol_version.to_be_bytes());
    buf.extend_from_slice(&[0, 0]);
    write_ae_title(buf, called_ae_title)?;
    write_ae_title(buf, calling_ae_title)?;
    buf.extend_from_slice(&[0; 32]);
    Ok(())
}

/// AE titles take 16 bytes, padded with spaces.
fn write_ae_title(buf: &mut Vec<u8>, ae_title: &str) -> Result<()> {
    ensure!(
        ae_title.len() <= 16,
        AeTitleTooLongSnafu {
            ae_title: ae_title.to_string()
        }
    );
    let start = buf.len();
    buf.extend_from_slice(ae_title.as_bytes());
    buf.resize(start + 16, b' ');
    Ok(())
}

fn write_text_item(buf: &mut Vec<u8>, item_type: u8, text: &str) -> Result<()> {
    write_chunk_u16(buf, item_type, |buf| {
        buf.extend_from_slice(text.as_bytes());
        Ok(())
    })
}

fn write_user_variables(buf: &mut Vec<u8>, user_variables: &[UserVariableItem]) -> Result<()> {
    write_chunk_u16(buf, 0x50, |buf| {
        for variable in user_variables {
            match variable {
                UserVariableItem::MaxLength(len) => write_chunk_u16(buf, 0x51, |buf| {
                    buf.extend_from_slice(&len.to_be_bytes());
                    Ok(())
                })?,
                UserVariableItem::ImplementationClassUID(uid) => {
                    write_text_item(buf, 0x52, uid)?
                }
                UserVariableItem::ImplementationVersionName(name) => {
                    write_text_item(buf, 0x55, name)?
                }
                UserVariableItem::SopClassExtendedNegotiationSubItem(uid, info) => {
                    write_chunk_u16(buf, 0x56, |buf| {
                        let uid_length = uid.len();
                        ensure!(
                            uid_length <= u16::MAX as usize,
                            ItemTooLongSnafu {
                                item_type: 0x56_u8,
                                length: uid_length
                            }
                        );
                        buf.extend_from_slice(&(uid_length as u16).to_be_bytes());
                        buf.extend_from_slice(uid.as_bytes());
                        buf.extend_from_slice(info);
                        Ok(())
                    })?
                }
                UserVariableItem::UserIdentityItem(identity) => {
                    write_chunk_u16(buf, 0x58, |buf| {
                        buf.push(identity.identity_type() as u8);
                        buf.push(u8::from(identity.positive_response_requested()));
                        for field in [identity.primary_field(), identity.secondary_field()] {
                            ensure!(
                                field.len() <= u16::MAX as usize,
                                ItemTooLongSnafu {
                                    item_type: 0x58_u8,
                                    length: field.len()
                                }
                            );
                            buf.extend_from_slice(&(field.len() as u16).to_be_bytes());
                            buf.extend_from_slice(field);
                        }
                        Ok(())
                    })?
                }
                UserVariableItem::Unknown(item_type, data) => {
                    write_chunk_u16(buf, *item_type, |buf| {
                        buf.extend_from_slice(data);
                        Ok(())
                    })?
                }
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdu::reader::read_pdu;
    use matches::assert_matches;

    fn round_trip(pdu: &Pdu) -> Pdu {
        let mut bytes = Vec::new();
        write_pdu(&mut bytes, pdu).unwrap();
        read_pdu(&mut &bytes[..], MAXIMUM_PDU_SIZE, true).unwrap()
    }

    #[test]
    fn association_rq_layout() {
        let rq = Pdu::AssociationRQ(AssociationRQ {
            protocol_version: 1,
            calling_ae_title: "SCU".into(),
            called_ae_title: "SCP".into(),
            application_context_name: APPLICATION_CONTEXT_NAME.into(),
            presentation_contexts: vec![PresentationContextProposed {
                id: 1,
                abstract_syntax: "1.2.840.10008.1.1".into(),
                transfer_syntaxes: vec!["1.2.840.10008.1.2.1".into(), "1.2.840.10008.1.2".into()],
            }],
            user_variables: vec![
                UserVariableItem::MaxLength(16384),
                UserVariableItem::ImplementationClassUID("1.2.3".into()),
                UserVariableItem::UserIdentityItem(UserIdentity::username_password(
                    "user", "secret",
                )),
                UserVariableItem::SopClassExtendedNegotiationSubItem(
                    "1.2.840.10008.5.1.4.1.2.2.1".into(),
                    vec![1, 1, 0],
                ),
            ],
        });
        let mut bytes = Vec::new();
        write_pdu(&mut bytes, &rq).unwrap();
        assert_eq!(&bytes[..2], &[0x01, 0x00]);
        let length = u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]);
        assert_eq!(length as usize, bytes.len() - 6);
        // called then calling AE title, space padded
        assert_eq!(&bytes[10..26], b"SCP             ");
        assert_eq!(&bytes[26..42], b"SCU             ");
        // application context item right after the reserved bytes
        assert_eq!(bytes[74], 0x10);

        assert_eq!(round_trip(&rq), rq);
    }

    #[test]
    fn rejected_contexts_round_trip() {
        let ac = Pdu::AssociationAC(AssociationAC {
            protocol_version: 1,
            calling_ae_title: "SCU".into(),
            called_ae_title: "SCP".into(),
            application_context_name: APPLICATION_CONTEXT_NAME.into(),
            presentation_contexts: vec![
                PresentationContextResult {
                    id: 1,
                    reason: PresentationContextResultReason::Acceptance,
                    transfer_syntax: "1.2.840.10008.1.2".into(),
                },
                PresentationContextResult {
                    id: 3,
                    reason: PresentationContextResultReason::AbstractSyntaxNotSupported,
                    transfer_syntax: "1.2.840.10008.1.2".into(),
                },
            ],
            user_variables: vec![UserVariableItem::MaxLength(0)],
        });
        assert_eq!(round_trip(&ac), ac);
    }

    #[test]
    fn short_pdus() {
        let rj = Pdu::AssociationRJ(AssociationRJ {
            result: AssociationRJResult::Permanent,
            source: AssociationRJSource::ServiceProviderASCE(
                AssociationRJServiceProviderASCEReason::NoReasonGiven,
            ),
        });
        let mut bytes = Vec::new();
        write_pdu(&mut bytes, &rj).unwrap();
        assert_eq!(bytes, [0x03, 0, 0, 0, 0, 4, 0, 1, 2, 1]);
        assert_eq!(round_trip(&rj), rj);

        let abort = Pdu::AbortRQ {
            source: AbortRQSource::ServiceProvider(
                AbortRQServiceProviderReason::InvalidPduParameter,
            ),
        };
        let mut bytes = Vec::new();
        write_pdu(&mut bytes, &abort).unwrap();
        assert_eq!(bytes, [0x07, 0, 0, 0, 0, 4, 0, 0, 2, 6]);

        assert_eq!(round_trip(&Pdu::ReleaseRQ), Pdu::ReleaseRQ);
        assert_eq!(round_trip(&Pdu::ReleaseRP), Pdu::ReleaseRP);
    }

    #[test]
    fn pdata_control_header() {
        let pdu = Pdu::PData {
            data: vec![
                PDataValue {
                    presentation_context_id: 3,
                    value_type: PDataValueType::Command,
                    is_last: true,
                    data: vec![1, 2, 3, 4],
                },
                PDataValue {
                    presentation_context_id: 3,
                    value_type: PDataValueType::Data,
                    is_last: false,
                    data: vec![5, 6],
                },
            ],
        };
        let mut bytes = Vec::new();
        write_pdu(&mut bytes, &pdu).unwrap();
        assert_eq!(
            bytes,
            [
                0x04, 0, 0, 0, 0, 18, // header
                0, 0, 0, 6, 3, 0x03, 1, 2, 3, 4, // command, last
                0, 0, 0, 4, 3, 0x00, 5, 6, // data, not last
            ]
        );
        assert_eq!(round_trip(&pdu), pdu);
    }

    #[test]
    fn unknown_pdus_are_kept() {
        let bytes = [0x09, 0, 0, 0, 0, 3, 7, 8, 9];
        let pdu = read_pdu(&mut &bytes[..], MINIMUM_PDU_SIZE, true).unwrap();
        assert_eq!(
            pdu,
            Pdu::Unknown {
                pdu_type: 9,
                data: vec![7, 8, 9]
            }
        );
    }

    #[test]
    fn max_pdu_length_is_enforced() {
        let pdu = Pdu::PData {
            data: vec![PDataValue {
                presentation_context_id: 1,
                value_type: PDataValueType::Data,
                is_last: true,
                data: vec![0; 5000],
            }],
        };
        let mut bytes = Vec::new();
        write_pdu(&mut bytes, &pdu).unwrap();
        assert_matches!(
            read_pdu(&mut &bytes[..], MINIMUM_PDU_SIZE, true),
            Err(crate::pdu::reader::Error::PduTooLarge { .. })
        );
        assert_eq!(read_pdu(&mut &bytes[..], MINIMUM_PDU_SIZE, false).unwrap(), pdu);
        assert_matches!(
            read_pdu(&mut &bytes[..], 1024, false),
            Err(crate::pdu::reader::Error::InvalidMaxPdu { .. })
        );
        assert_matches!(
            read_pdu(&mut &[][..], MINIMUM_PDU_SIZE, false),
            Err(crate::pdu::reader::Error::NoPduAvailable { .. })
        );
    }

    #[test]
    fn ae_titles_are_bounded() {
        let rq = Pdu::AssociationRQ(AssociationRQ {
            protocol_version: 1,
            calling_ae_title: "A-VERY-LONG-AE-TITLE".into(),
            called_ae_title: "SCP".into(),
            application_context_name: APPLICATION_CONTEXT_NAME.into(),
            presentation_contexts: vec![],
            user_variables: vec![],
        });
        assert_matches!(
            write_pdu(&mut Vec::new(), &rq),
            Err(Error::AeTitleTooLong { .. })
        );
    }
}
