//! Splitting DIMSE messages into P-DATA-TF PDUs and putting them back together.
use super::{command_has_data_set, decode_command, Result, UnexpectedDataSetSnafu};
use crate::pdu::{PDataValue, PDataValueType, Pdu};
use bytes::BytesMut;
use dcmkit_object::DataSet;
use std::collections::BTreeMap;
use tracing::debug;

/// Bytes of each presentation data value item
/// which are not fragment data:
/// item length (4), presentation context ID (1) and control header (1).
const PDV_OVERHEAD: usize = 6;

/// Split an encoded command set and optional data set
/// into P-DATA-TF PDUs, one presentation data value per PDU.
///
/// Each fragment carries at most `max_pdu_length - 6` bytes,
/// so that every PDU fits the peer's maximum length.
/// A maximum of 0 means that the peer set no limit.
/// The last fragment of the command and of the data set are flagged as such.
pub fn fragment_message(
    presentation_context_id: u8,
    command: &[u8],
    data: Option<&[u8]>,
    max_pdu_length: u32,
) -> Vec<Pdu> {
    let max_fragment = if max_pdu_length == 0 {
        usize::MAX
    } else {
        (max_pdu_length as usize)
            .saturating_sub(PDV_OVERHEAD)
            .max(1)
    };

    let mut pdus = Vec::new();
    let parts = std::iter::once((PDataValueType::Command, command))
        .chain(data.map(|data| (PDataValueType::Data, data)));
    for (value_type, bytes) in parts {
        let mut chunks = bytes.chunks(max_fragment).peekable();
        if chunks.peek().is_none() {
            pdus.push(pdata(presentation_context_id, value_type, true, Vec::new()));
            continue;
        }
        while let Some(chunk) = chunks.next() {
            let is_last = chunks.peek().is_none();
            pdus.push(pdata(
                presentation_context_id,
                value_type,
                is_last,
                chunk.to_vec(),
            ));
        }
    }
    pdus
}

fn pdata(
    presentation_context_id: u8,
    value_type: PDataValueType,
    is_last: bool,
    data: Vec<u8>,
) -> Pdu {
    Pdu::PData {
        data: vec![PDataValue {
            presentation_context_id,
            value_type,
            is_last,
            data,
        }],
    }
}

/// A message whose fragments have all arrived.
///
/// The data set is kept encoded,
/// as its transfer syntax depends on the presentation context.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledMessage {
    pub presentation_context_id: u8,
    pub command: DataSet,
    pub data: Option<Vec<u8>>,
}

#[derive(Debug, Default)]
struct PartialMessage {
    command_bytes: BytesMut,
    command: Option<DataSet>,
    data: BytesMut,
    data_complete: bool,
}

/// Reassembly of DIMSE messages from presentation data values,
/// separately for each presentation context.
#[derive(Debug, Default)]
pub struct MessageAssembler {
    pending: BTreeMap<u8, PartialMessage>,
}

impl MessageAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take in one presentation data value.
    ///
    /// Returns the message of its presentation context
    /// once it is complete.
    pub fn push(&mut self, pdv: PDataValue) -> Result<Option<AssembledMessage>> {
        let pcid = pdv.presentation_context_id;
        let partial = self.pending.entry(pcid).or_default();
        match pdv.value_type {
            PDataValueType::Command => {
                partial.command_bytes.extend_from_slice(&pdv.data);
                if pdv.is_last {
                    let command = decode_command(&partial.command_bytes);
                    let command = match command {
                        Ok(command) => command,
                        Err(e) => {
                            self.pending.remove(&pcid);
                            return Err(e);
                        }
                    };
                    partial.command = Some(command);
                }
            }
            PDataValueType::Data => {
                partial.data.extend_from_slice(&pdv.data);
                partial.data_complete |= pdv.is_last;
            }
        }

        let complete = match &partial.command {
            Some(command) if command_has_data_set(command) => partial.data_complete,
            Some(_) => {
                if !partial.data.is_empty() {
                    self.pending.remove(&pcid);
                    return UnexpectedDataSetSnafu {
                        presentation_context_id: pcid,
                    }
                    .fail();
                }
                true
            }
            None => false,
        };
        if !complete {
            return Ok(None);
        }

        let partial = match self.pending.remove(&pcid) {
            Some(partial) => partial,
            None => return Ok(None),
        };
        let command = match partial.command {
            Some(command) => command,
            None => return Ok(None),
        };
        let data = if command_has_data_set(&command) {
            Some(partial.data.to_vec())
        } else {
            None
        };
        debug!(
            "Reassembled message on context {} ({} command bytes, {} data bytes)",
            pcid,
            partial.command_bytes.len(),
            data.as_ref().map(Vec::len).unwrap_or(0),
        );
        Ok(Some(AssembledMessage {
            presentation_context_id: pcid,
            command,
            data,
        }))
    }

    /// Whether any message is partially received.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimse::{DimseMessage, Error, Priority};
    use dcmkit_dictionary_std::tags;
    use dcmkit_object::VR;
    use dcmkit_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;
    use matches::assert_matches;

    fn pdvs(pdus: Vec<Pdu>) -> Vec<PDataValue> {
        pdus.into_iter()
            .flat_map(|pdu| match pdu {
                Pdu::PData { data } => data,
                pdu => panic!("unexpected PDU {:?}", pdu),
            })
            .collect()
    }

    fn store_message() -> DimseMessage {
        let mut data = DataSet::new();
        data.put_str(tags::STUDY_ID, VR::SH, "1933");
        data.put_str(tags::PATIENT_NAME, VR::PN, "Doe^John");
        data.put_str(tags::SERIES_DESCRIPTION, VR::LO, "x".repeat(9000));
        DimseMessage::c_store_rq(1, "1.2.840.10008.5.1.4.1.1.7", "1.2.3", Priority::Medium, data)
    }

    #[test]
    fn fragments_fit_the_maximum_length() {
        let msg = store_message();
        let command = msg.encode_command().unwrap();
        let data = msg.encode_data(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap().unwrap();
        let pdus = fragment_message(1, &command, Some(&data), 4096);

        let values = pdvs(pdus);
        assert!(values.iter().all(|pdv| pdv.data.len() <= 4090));
        let commands: Vec<_> = values
            .iter()
            .filter(|pdv| pdv.value_type == PDataValueType::Command)
            .collect();
        assert_eq!(commands.len(), 1);
        assert!(commands[0].is_last);
        let data_values: Vec<_> = values
            .iter()
            .filter(|pdv| pdv.value_type == PDataValueType::Data)
            .collect();
        assert_eq!(data_values.len(), (data.len() + 4089) / 4090);
        assert!(data_values.last().unwrap().is_last);
        assert!(data_values[..data_values.len() - 1]
            .iter()
            .all(|pdv| !pdv.is_last));

        let mut assembler = MessageAssembler::new();
        let mut assembled = None;
        for pdv in values {
            assert!(assembled.is_none());
            assembled = assembler.push(pdv).unwrap();
        }
        let assembled = assembled.unwrap();
        assert_eq!(assembled.data.as_deref(), Some(&data[..]));
        assert!(assembler.is_idle());

        let decoded = DimseMessage::decode(
            1,
            &command,
            assembled.data.as_deref(),
            &EXPLICIT_VR_LITTLE_ENDIAN,
        )
        .unwrap();
        assert_eq!(decoded, msg.with_presentation_context_id(1));
    }

    #[test]
    fn zero_means_unlimited() {
        let msg = store_message();
        let command = msg.encode_command().unwrap();
        let data = msg.encode_data(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap().unwrap();
        let values = pdvs(fragment_message(3, &command, Some(&data), 0));
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(|pdv| pdv.is_last));
    }

    #[test]
    fn contexts_are_reassembled_separately() {
        let echo = DimseMessage::c_echo_rq(9);
        let store = store_message();
        let echo_pdvs = pdvs(fragment_message(
            1,
            &echo.encode_command().unwrap(),
            None,
            0,
        ));
        let store_command = store.encode_command().unwrap();
        let store_data = store.encode_data(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap().unwrap();
        let mut store_pdvs = pdvs(fragment_message(3, &store_command, Some(&store_data), 4096));

        let mut assembler = MessageAssembler::new();
        // store command and first data fragment, then the echo
        let rest = store_pdvs.split_off(2);
        for pdv in store_pdvs {
            assert_eq!(assembler.push(pdv).unwrap(), None);
        }
        let mut echo_done = None;
        for pdv in echo_pdvs {
            echo_done = assembler.push(pdv).unwrap();
        }
        let echo_done = echo_done.unwrap();
        assert_eq!(echo_done.presentation_context_id, 1);
        assert_eq!(echo_done.data, None);
        assert!(!assembler.is_idle());

        let mut store_done = None;
        for pdv in rest {
            store_done = assembler.push(pdv).unwrap();
        }
        let store_done = store_done.unwrap();
        assert_eq!(store_done.presentation_context_id, 3);
        assert_eq!(store_done.data.unwrap(), store_data);
    }

    #[test]
    fn data_without_announcement_is_an_error() {
        let echo = DimseMessage::c_echo_rq(2);
        let mut assembler = MessageAssembler::new();
        assembler
            .push(PDataValue {
                presentation_context_id: 1,
                value_type: PDataValueType::Data,
                is_last: true,
                data: vec![1, 2, 3, 4],
            })
            .unwrap();
        let command = echo.encode_command().unwrap();
        assert_matches!(
            assembler.push(PDataValue {
                presentation_context_id: 1,
                value_type: PDataValueType::Command,
                is_last: true,
                data: command,
            }),
            Err(Error::UnexpectedDataSet { .. })
        );
        assert!(assembler.is_idle());
    }
}
