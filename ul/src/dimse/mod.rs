//! DIMSE messages.
//!
//! A [`DimseMessage`] is a command set,
//! always encoded in implicit VR little endian,
//! optionally followed by a data set
//! in the transfer syntax negotiated for its presentation context.
//! The [`fragment`] module splits encoded messages into P-DATA-TF PDUs
//! and puts them back together on the receiving end.
pub mod fragment;

use byteordered::byteorder::{LittleEndian, WriteBytesExt};
use dcmkit_dictionary_std::tags;
use dcmkit_encoding::TransferSyntax;
use dcmkit_object::{read_dataset, write_dataset, DataSet, ReadOptions, WriteOptions, VR};
use dcmkit_transfer_syntax_registry::entries::IMPLICIT_VR_LITTLE_ENDIAN;
use snafu::{OptionExt, ResultExt, Snafu};
use std::borrow::Cow;
use std::fmt;

pub use fragment::{fragment_message, MessageAssembler};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not encode command set"))]
    EncodeCommand {
        #[snafu(backtrace)]
        source: dcmkit_object::write::Error,
    },
    #[snafu(display("Could not encode data set"))]
    EncodeData {
        #[snafu(backtrace)]
        source: dcmkit_object::write::Error,
    },
    #[snafu(display("Could not decode command set"))]
    DecodeCommand {
        #[snafu(backtrace)]
        source: dcmkit_object::read::Error,
    },
    #[snafu(display("Could not decode data set"))]
    DecodeData {
        #[snafu(backtrace)]
        source: dcmkit_object::read::Error,
    },
    #[snafu(display("Could not write command group length"))]
    WriteGroupLength {
        source: std::io::Error,
        backtrace: snafu::Backtrace,
    },
    #[snafu(display("Command set has no valid command field"))]
    MissingCommandField { backtrace: snafu::Backtrace },
    #[snafu(display(
        "Data set received on context {} for a command without one",
        presentation_context_id
    ))]
    UnexpectedDataSet {
        presentation_context_id: u8,
        backtrace: snafu::Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The kind of a DIMSE command.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommandField {
    C_STORE_RQ = 0x0001,
    C_STORE_RSP = 0x8001,
    C_GET_RQ = 0x0010,
    C_GET_RSP = 0x8010,
    C_FIND_RQ = 0x0020,
    C_FIND_RSP = 0x8020,
    C_MOVE_RQ = 0x0021,
    C_MOVE_RSP = 0x8021,
    C_ECHO_RQ = 0x0030,
    C_ECHO_RSP = 0x8030,
    N_EVENT_REPORT_RQ = 0x0100,
    N_EVENT_REPORT_RSP = 0x8100,
    N_GET_RQ = 0x0110,
    N_GET_RSP = 0x8110,
    N_SET_RQ = 0x0120,
    N_SET_RSP = 0x8120,
    N_ACTION_RQ = 0x0130,
    N_ACTION_RSP = 0x8130,
    N_CREATE_RQ = 0x0140,
    N_CREATE_RSP = 0x8140,
    N_DELETE_RQ = 0x0150,
    N_DELETE_RSP = 0x8150,
    C_CANCEL_RQ = 0x0FFF,
}

impl CommandField {
    pub fn from_code(code: u16) -> Option<Self> {
        use CommandField::*;
        Some(match code {
            0x0001 => C_STORE_RQ,
            0x8001 => C_STORE_RSP,
            0x0010 => C_GET_RQ,
            0x8010 => C_GET_RSP,
            0x0020 => C_FIND_RQ,
            0x8020 => C_FIND_RSP,
            0x0021 => C_MOVE_RQ,
            0x8021 => C_MOVE_RSP,
            0x0030 => C_ECHO_RQ,
            0x8030 => C_ECHO_RSP,
            0x0100 => N_EVENT_REPORT_RQ,
            0x8100 => N_EVENT_REPORT_RSP,
            0x0110 => N_GET_RQ,
            0x8110 => N_GET_RSP,
            0x0120 => N_SET_RQ,
            0x8120 => N_SET_RSP,
            0x0130 => N_ACTION_RQ,
            0x8130 => N_ACTION_RSP,
            0x0140 => N_CREATE_RQ,
            0x8140 => N_CREATE_RSP,
            0x0150 => N_DELETE_RQ,
            0x8150 => N_DELETE_RSP,
            0x0FFF => C_CANCEL_RQ,
            _ => return None,
        })
    }

    pub fn code(self) -> u16 {
        self as u16
    }

    /// Whether this is a response to a request.
    pub fn is_response(self) -> bool {
        self.code() & 0x8000 != 0
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Priority {
    Low = 0x0002,
    Medium = 0x0000,
    High = 0x0001,
}

/// Value of Command Data Set Type stating that no data set follows.
pub const NO_DATA_SET: u16 = 0x0101;

/// Value of Command Data Set Type stating that a data set follows.
pub const DATA_SET_PRESENT: u16 = 0x0001;

/// The status code of a DIMSE response.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct DimseStatus(pub u16);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum StatusClass {
    Success,
    Warning,
    Failure,
    Cancel,
    Pending,
}

impl DimseStatus {
    pub const SUCCESS: DimseStatus = DimseStatus(0x0000);
    pub const CANCEL: DimseStatus = DimseStatus(0xFE00);
    pub const PENDING: DimseStatus = DimseStatus(0xFF00);

    pub fn class(self) -> StatusClass {
        match self.0 {
            0x0000 => StatusClass::Success,
            0x0001 | 0x0107 | 0x0116 | 0xB000..=0xBFFF => StatusClass::Warning,
            0xFE00 => StatusClass::Cancel,
            0xFF00 | 0xFF01 => StatusClass::Pending,
            _ => StatusClass::Failure,
        }
    }

    pub fn is_success(self) -> bool {
        self.class() == StatusClass::Success
    }

    pub fn is_pending(self) -> bool {
        self.class() == StatusClass::Pending
    }
}

impl fmt::Display for DimseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X} ({:?})", self.0, self.class())
    }
}

/// A DIMSE message in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct DimseMessage {
    /// The presentation context on which the message travels.
    /// 0 lets the association pick an accepted context
    /// for the affected or requested SOP class.
    pub presentation_context_id: u8,
    pub command: DataSet,
    pub data: Option<DataSet>,
}

impl DimseMessage {
    /// Create a message from a command set and an optional data set.
    ///
    /// Command Data Set Type is set according to the presence of `data`.
    pub fn new(mut command: DataSet, data: Option<DataSet>) -> Self {
        let data_set_type = if data.is_some() {
            DATA_SET_PRESENT
        } else {
            NO_DATA_SET
        };
        command.put_u16(tags::COMMAND_DATA_SET_TYPE, VR::US, data_set_type);
        DimseMessage {
            presentation_context_id: 0,
            command,
            data,
        }
    }

    pub fn with_presentation_context_id(mut self, id: u8) -> Self {
        self.presentation_context_id = id;
        self
    }

    /// C-ECHO request.
    pub fn c_echo_rq(message_id: u16) -> Self {
        let mut command = DataSet::new();
        command.put_str(
            tags::AFFECTED_SOP_CLASS_UID,
            VR::UI,
            dcmkit_dictionary_std::uids::VERIFICATION,
        );
        command.put_u16(tags::COMMAND_FIELD, VR::US, CommandField::C_ECHO_RQ.code());
        command.put_u16(tags::MESSAGE_ID, VR::US, message_id);
        Self::new(command, None)
    }

    /// C-ECHO response to the given request.
    pub fn c_echo_rsp(rq: &DimseMessage, status: DimseStatus) -> Self {
        let mut command = DataSet::new();
        command.put_str(
            tags::AFFECTED_SOP_CLASS_UID,
            VR::UI,
            dcmkit_dictionary_std::uids::VERIFICATION,
        );
        command.put_u16(tags::COMMAND_FIELD, VR::US, CommandField::C_ECHO_RSP.code());
        command.put_u16(
            tags::MESSAGE_ID_BEING_RESPONDED_TO,
            VR::US,
            rq.message_id().unwrap_or_default(),
        );
        command.put_u16(tags::STATUS, VR::US, status.0);
        Self::new(command, None).with_presentation_context_id(rq.presentation_context_id)
    }

    /// C-STORE request carrying the given instance.
    pub fn c_store_rq(
        message_id: u16,
        sop_class_uid: &str,
        sop_instance_uid: &str,
        priority: Priority,
        data: DataSet,
    ) -> Self {
        let mut command = DataSet::new();
        command.put_str(tags::AFFECTED_SOP_CLASS_UID, VR::UI, sop_class_uid);
        command.put_u16(tags::COMMAND_FIELD, VR::US, CommandField::C_STORE_RQ.code());
        command.put_u16(tags::MESSAGE_ID, VR::US, message_id);
        command.put_u16(tags::PRIORITY, VR::US, priority as u16);
        command.put_str(tags::AFFECTED_SOP_INSTANCE_UID, VR::UI, sop_instance_uid);
        Self::new(command, Some(data))
    }

    /// C-STORE response to the given request,
    /// on the same presentation context and for the same instance.
    pub fn c_store_rsp(rq: &DimseMessage, status: DimseStatus) -> Self {
        let mut command = DataSet::new();
        if let Some(sop_class_uid) = rq.command.get_str(tags::AFFECTED_SOP_CLASS_UID) {
            command.put_str(tags::AFFECTED_SOP_CLASS_UID, VR::UI, sop_class_uid);
        }
        command.put_u16(tags::COMMAND_FIELD, VR::US, CommandField::C_STORE_RSP.code());
        command.put_u16(
            tags::MESSAGE_ID_BEING_RESPONDED_TO,
            VR::US,
            rq.message_id().unwrap_or_default(),
        );
        command.put_u16(tags::STATUS, VR::US, status.0);
        if let Some(sop_instance_uid) = rq.affected_sop_instance_uid() {
            command.put_str(tags::AFFECTED_SOP_INSTANCE_UID, VR::UI, sop_instance_uid);
        }
        Self::new(command, None).with_presentation_context_id(rq.presentation_context_id)
    }

    pub fn command_field(&self) -> Option<CommandField> {
        self.command
            .get_u16(tags::COMMAND_FIELD)
            .and_then(CommandField::from_code)
    }

    pub fn message_id(&self) -> Option<u16> {
        self.command.get_u16(tags::MESSAGE_ID)
    }

    pub fn message_id_being_responded_to(&self) -> Option<u16> {
        self.command.get_u16(tags::MESSAGE_ID_BEING_RESPONDED_TO)
    }

    pub fn status(&self) -> Option<DimseStatus> {
        self.command.get_u16(tags::STATUS).map(DimseStatus)
    }

    pub fn affected_sop_class_uid(&self) -> Option<Cow<'_, str>> {
        self.command.get_str(tags::AFFECTED_SOP_CLASS_UID)
    }

    /// The SOP class of the message,
    /// affected or requested.
    pub fn sop_class_uid(&self) -> Option<Cow<'_, str>> {
        self.affected_sop_class_uid()
            .or_else(|| self.command.get_str(tags::REQUESTED_SOP_CLASS_UID))
    }

    pub fn affected_sop_instance_uid(&self) -> Option<Cow<'_, str>> {
        self.command.get_str(tags::AFFECTED_SOP_INSTANCE_UID)
    }

    /// Whether the command announces a data set.
    pub fn has_data_set(&self) -> bool {
        command_has_data_set(&self.command)
    }

    /// Encode the command set,
    /// prefixed by its group length.
    pub fn encode_command(&self) -> Result<Vec<u8>> {
        let mut command = self.command.clone();
        command.remove(tags::COMMAND_GROUP_LENGTH);
        let mut body = Vec::new();
        write_dataset(
            &mut body,
            &command,
            &IMPLICIT_VR_LITTLE_ENDIAN,
            WriteOptions::default(),
        )
        .context(EncodeCommandSnafu)?;

        let mut out = Vec::with_capacity(body.len() + 12);
        write_group_length(&mut out, body.len() as u32).context(WriteGroupLengthSnafu)?;
        out.extend_from_slice(&body);
        Ok(out)
    }

    /// Encode the data set, if any, in the given transfer syntax.
    pub fn encode_data(&self, ts: &TransferSyntax) -> Result<Option<Vec<u8>>> {
        self.data
            .as_ref()
            .map(|data| {
                let mut out = Vec::new();
                write_dataset(&mut out, data, ts, WriteOptions::default())
                    .context(EncodeDataSnafu)?;
                Ok(out)
            })
            .transpose()
    }

    /// Decode a message from its encoded command set
    /// and optional encoded data set.
    pub fn decode(
        presentation_context_id: u8,
        command: &[u8],
        data: Option<&[u8]>,
        ts: &TransferSyntax,
    ) -> Result<Self> {
        let command = decode_command(command)?;
        let data = data
            .map(|data| read_dataset(data, ts, ReadOptions::default()).context(DecodeDataSnafu))
            .transpose()?;
        Ok(DimseMessage {
            presentation_context_id,
            command,
            data,
        })
    }
}

/// Decode a command set, leaving out its group length.
pub fn decode_command(bytes: &[u8]) -> Result<DataSet> {
    let mut command = read_dataset(bytes, &IMPLICIT_VR_LITTLE_ENDIAN, ReadOptions::default())
        .context(DecodeCommandSnafu)?;
    command.remove(tags::COMMAND_GROUP_LENGTH);
    command
        .get_u16(tags::COMMAND_FIELD)
        .context(MissingCommandFieldSnafu)?;
    Ok(command)
}

pub(crate) fn command_has_data_set(command: &DataSet) -> bool {
    matches!(
        command.get_u16(tags::COMMAND_DATA_SET_TYPE),
        Some(t) if t != NO_DATA_SET
    )
}

fn write_group_length(out: &mut Vec<u8>, length: u32) -> std::io::Result<()> {
    // (0000,0000) UL, implicit VR
    out.write_u16::<LittleEndian>(0x0000)?;
    out.write_u16::<LittleEndian>(0x0000)?;
    out.write_u32::<LittleEndian>(4)?;
    out.write_u32::<LittleEndian>(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmkit_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;
    use matches::assert_matches;
    use rstest::rstest;

    #[test]
    fn command_set_carries_group_length() {
        let msg = DimseMessage::c_echo_rq(7);
        let bytes = msg.encode_command().unwrap();
        assert_eq!(&bytes[..8], &[0, 0, 0, 0, 4, 0, 0, 0]);
        let length = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        assert_eq!(length as usize, bytes.len() - 12);

        let decoded = DimseMessage::decode(1, &bytes, None, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert!(!decoded.command.contains(tags::COMMAND_GROUP_LENGTH));
        assert_eq!(decoded.command_field(), Some(CommandField::C_ECHO_RQ));
        assert_eq!(decoded.message_id(), Some(7));
        assert!(!decoded.has_data_set());
        assert_eq!(
            decoded.affected_sop_class_uid().as_deref(),
            Some(dcmkit_dictionary_std::uids::VERIFICATION)
        );
    }

    #[test]
    fn store_request_and_response() {
        let mut data = DataSet::new();
        data.put_str(tags::STUDY_ID, VR::SH, "1933");
        let rq = DimseMessage::c_store_rq(3, "1.2.840.10008.5.1.4.1.1.7", "1.2.3.4", Priority::High, data)
            .with_presentation_context_id(5);
        assert!(rq.has_data_set());
        assert_eq!(rq.command.get_u16(tags::PRIORITY), Some(1));

        let command = rq.encode_command().unwrap();
        let data = rq.encode_data(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap().unwrap();
        let decoded =
            DimseMessage::decode(5, &command, Some(&data), &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(decoded, rq);

        let rsp = DimseMessage::c_store_rsp(&decoded, DimseStatus::SUCCESS);
        assert_eq!(rsp.presentation_context_id, 5);
        assert_eq!(rsp.command_field(), Some(CommandField::C_STORE_RSP));
        assert_eq!(rsp.message_id_being_responded_to(), Some(3));
        assert_eq!(rsp.status(), Some(DimseStatus::SUCCESS));
        assert_eq!(rsp.affected_sop_instance_uid().as_deref(), Some("1.2.3.4"));
        assert_eq!(
            rsp.affected_sop_class_uid().as_deref(),
            Some("1.2.840.10008.5.1.4.1.1.7")
        );
        assert!(!rsp.has_data_set());
    }

    #[test]
    fn command_without_field_is_rejected() {
        let mut command = DataSet::new();
        command.put_u16(tags::MESSAGE_ID, VR::US, 1);
        let msg = DimseMessage::new(command, None);
        let bytes = msg.encode_command().unwrap();
        assert_matches!(
            decode_command(&bytes),
            Err(Error::MissingCommandField { .. })
        );
    }

    #[rstest]
    #[case(0x0000, StatusClass::Success)]
    #[case(0x0001, StatusClass::Warning)]
    #[case(0x0107, StatusClass::Warning)]
    #[case(0xB007, StatusClass::Warning)]
    #[case(0xA700, StatusClass::Failure)]
    #[case(0xC000, StatusClass::Failure)]
    #[case(0x0122, StatusClass::Failure)]
    #[case(0xFE00, StatusClass::Cancel)]
    #[case(0xFF00, StatusClass::Pending)]
    #[case(0xFF01, StatusClass::Pending)]
    fn status_classes(#[case] code: u16, #[case] class: StatusClass) {
        assert_eq!(DimseStatus(code).class(), class);
    }

    #[test]
    fn command_field_codes() {
        for code in 0..=0xFFFF_u16 {
            if let Some(field) = CommandField::from_code(code) {
                assert_eq!(field.code(), code);
                assert_eq!(field.is_response(), code & 0x8000 != 0);
            }
        }
        assert_eq!(CommandField::from_code(0x0002), None);
    }
}
