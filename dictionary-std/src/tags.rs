//! Attribute tag constants and the table of standard dictionary entries.
//!
//! Each constant maps an attribute alias to its tag,
//! so that no dictionary look-up is needed at run-time.
//! Attributes of the repeating groups (50xx and 60xx)
//! are declared with the `xx` portion zeroed.
// Automatically generated. Edit at your own risk.

use dcmkit_core::dictionary::{DataDictionaryEntryRef, VM_N};
use dcmkit_core::header::{Tag, VR};

/// CommandGroupLength (0000,0000) UL
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// CommandLengthToEnd (0000,0001) UL (retired)
pub const COMMAND_LENGTH_TO_END: Tag = Tag(0x0000, 0x0001);
/// AffectedSOPClassUID (0000,0002) UI
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// RequestedSOPClassUID (0000,0003) UI
pub const REQUESTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0003);
/// CommandRecognitionCode (0000,0010) SH (retired)
pub const COMMAND_RECOGNITION_CODE: Tag = Tag(0x0000, 0x0010);
/// CommandField (0000,0100) US
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// MessageID (0000,0110) US
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// MessageIDBeingRespondedTo (0000,0120) US
pub const MESSAGE_ID_BEING_RESPONDED_TO: Tag = Tag(0x0000, 0x0120);
/// Initiator (0000,0200) AE (retired)
pub const INITIATOR: Tag = Tag(0x0000, 0x0200);
/// Receiver (0000,0300) AE (retired)
pub const RECEIVER: Tag = Tag(0x0000, 0x0300);
/// FindLocation (0000,0400) AE (retired)
pub const FIND_LOCATION: Tag = Tag(0x0000, 0x0400);
/// MoveDestination (0000,0600) AE
pub const MOVE_DESTINATION: Tag = Tag(0x0000, 0x0600);
/// Priority (0000,0700) US
pub const PRIORITY: Tag = Tag(0x0000, 0x0700);
/// CommandDataSetType (0000,0800) US
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
/// NumberOfMatches (0000,0850) US (retired)
pub const NUMBER_OF_MATCHES: Tag = Tag(0x0000, 0x0850);
/// ResponseSequenceNumber (0000,0860) US (retired)
pub const RESPONSE_SEQUENCE_NUMBER: Tag = Tag(0x0000, 0x0860);
/// Status (0000,0900) US
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// OffendingElement (0000,0901) AT
pub const OFFENDING_ELEMENT: Tag = Tag(0x0000, 0x0901);
/// ErrorComment (0000,0902) LO
pub const ERROR_COMMENT: Tag = Tag(0x0000, 0x0902);
/// ErrorID (0000,0903) US
pub const ERROR_ID: Tag = Tag(0x0000, 0x0903);
/// AffectedSOPInstanceUID (0000,1000) UI
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// RequestedSOPInstanceUID (0000,1001) UI
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);
/// EventTypeID (0000,1002) US
pub const EVENT_TYPE_ID: Tag = Tag(0x0000, 0x1002);
/// AttributeIdentifierList (0000,1005) AT
pub const ATTRIBUTE_IDENTIFIER_LIST: Tag = Tag(0x0000, 0x1005);
/// ActionTypeID (0000,1008) US
pub const ACTION_TYPE_ID: Tag = Tag(0x0000, 0x1008);
/// NumberOfRemainingSuboperations (0000,1020) US
pub const NUMBER_OF_REMAINING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1020);
/// NumberOfCompletedSuboperations (0000,1021) US
pub const NUMBER_OF_COMPLETED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1021);
/// NumberOfFailedSuboperations (0000,1022) US
pub const NUMBER_OF_FAILED_SUBOPERATIONS: Tag = Tag(0x0000, 0x1022);
/// NumberOfWarningSuboperations (0000,1023) US
pub const NUMBER_OF_WARNING_SUBOPERATIONS: Tag = Tag(0x0000, 0x1023);
/// MoveOriginatorApplicationEntityTitle (0000,1030) AE
pub const MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0000, 0x1030);
/// MoveOriginatorMessageID (0000,1031) US
pub const MOVE_ORIGINATOR_MESSAGE_ID: Tag = Tag(0x0000, 0x1031);
/// DialogReceiver (0000,4000) LT (retired)
pub const DIALOG_RECEIVER: Tag = Tag(0x0000, 0x4000);
/// TerminalType (0000,4010) LT (retired)
pub const TERMINAL_TYPE: Tag = Tag(0x0000, 0x4010);
/// MessageSetID (0000,5010) SH (retired)
pub const MESSAGE_SET_ID: Tag = Tag(0x0000, 0x5010);
/// EndMessageID (0000,5020) SH (retired)
pub const END_MESSAGE_ID: Tag = Tag(0x0000, 0x5020);
/// DisplayFormat (0000,5110) LT (retired)
pub const DISPLAY_FORMAT: Tag = Tag(0x0000, 0x5110);
/// PagePositionID (0000,5120) LT (retired)
pub const PAGE_POSITION_ID: Tag = Tag(0x0000, 0x5120);
/// TextFormatID (0000,5130) CS (retired)
pub const TEXT_FORMAT_ID: Tag = Tag(0x0000, 0x5130);
/// NormalReverse (0000,5140) CS (retired)
pub const NORMAL_REVERSE: Tag = Tag(0x0000, 0x5140);
/// AddGrayScale (0000,5150) CS (retired)
pub const ADD_GRAY_SCALE: Tag = Tag(0x0000, 0x5150);
/// Borders (0000,5160) CS (retired)
pub const BORDERS: Tag = Tag(0x0000, 0x5160);
/// Copies (0000,5170) IS (retired)
pub const COPIES: Tag = Tag(0x0000, 0x5170);
/// CommandMagnificationType (0000,5180) CS (retired)
pub const COMMAND_MAGNIFICATION_TYPE: Tag = Tag(0x0000, 0x5180);
/// Erase (0000,5190) CS (retired)
pub const ERASE: Tag = Tag(0x0000, 0x5190);
/// Print (0000,51A0) CS (retired)
pub const PRINT: Tag = Tag(0x0000, 0x51A0);
/// Overlays (0000,51B0) US (retired)
pub const OVERLAYS: Tag = Tag(0x0000, 0x51B0);
/// FileMetaInformationGroupLength (0002,0000) UL
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SendingApplicationEntityTitle (0002,0017) AE
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// ReceivingApplicationEntityTitle (0002,0018) AE
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// SourcePresentationAddress (0002,0026) UR
pub const SOURCE_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0026);
/// SendingPresentationAddress (0002,0027) UR
pub const SENDING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0027);
/// ReceivingPresentationAddress (0002,0028) UR
pub const RECEIVING_PRESENTATION_ADDRESS: Tag = Tag(0x0002, 0x0028);
/// RTVMetaInformationVersion (0002,0031) OB
pub const RTV_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0031);
/// RTVCommunicationSOPClassUID (0002,0032) UI
pub const RTV_COMMUNICATION_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0032);
/// RTVCommunicationSOPInstanceUID (0002,0033) UI
pub const RTV_COMMUNICATION_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0033);
/// RTVSourceIdentifier (0002,0035) OB
pub const RTV_SOURCE_IDENTIFIER: Tag = Tag(0x0002, 0x0035);
/// RTVFlowIdentifier (0002,0036) OB
pub const RTV_FLOW_IDENTIFIER: Tag = Tag(0x0002, 0x0036);
/// RTVFlowRTPSamplingRate (0002,0037) UL
pub const RTV_FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0002, 0x0037);
/// RTVFlowActualFrameDuration (0002,0038) FD
pub const RTV_FLOW_ACTUAL_FRAME_DURATION: Tag = Tag(0x0002, 0x0038);
/// PrivateInformationCreatorUID (0002,0100) UI
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// FileSetID (0004,1130) CS
pub const FILE_SET_ID: Tag = Tag(0x0004, 0x1130);
/// FileSetDescriptorFileID (0004,1141) CS
pub const FILE_SET_DESCRIPTOR_FILE_ID: Tag = Tag(0x0004, 0x1141);
/// SpecificCharacterSetOfFileSetDescriptorFile (0004,1142) CS
pub const SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE: Tag = Tag(0x0004, 0x1142);
/// OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity (0004,1200) UL
pub const OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1200);
/// OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity (0004,1202) UL
pub const OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1202);
/// FileSetConsistencyFlag (0004,1212) US
pub const FILE_SET_CONSISTENCY_FLAG: Tag = Tag(0x0004, 0x1212);
/// DirectoryRecordSequence (0004,1220) SQ
pub const DIRECTORY_RECORD_SEQUENCE: Tag = Tag(0x0004, 0x1220);
/// OffsetOfTheNextDirectoryRecord (0004,1400) UL
pub const OFFSET_OF_THE_NEXT_DIRECTORY_RECORD: Tag = Tag(0x0004, 0x1400);
/// RecordInUseFlag (0004,1410) US
pub const RECORD_IN_USE_FLAG: Tag = Tag(0x0004, 0x1410);
/// OffsetOfReferencedLowerLevelDirectoryEntity (0004,1420) UL
pub const OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY: Tag = Tag(0x0004, 0x1420);
/// DirectoryRecordType (0004,1430) CS
pub const DIRECTORY_RECORD_TYPE: Tag = Tag(0x0004, 0x1430);
/// PrivateRecordUID (0004,1432) UI
pub const PRIVATE_RECORD_UID: Tag = Tag(0x0004, 0x1432);
/// ReferencedFileID (0004,1500) CS
pub const REFERENCED_FILE_ID: Tag = Tag(0x0004, 0x1500);
/// MRDRDirectoryRecordOffset (0004,1504) UL (retired)
pub const MRDR_DIRECTORY_RECORD_OFFSET: Tag = Tag(0x0004, 0x1504);
/// ReferencedSOPClassUIDInFile (0004,1510) UI
pub const REFERENCED_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x1510);
/// ReferencedSOPInstanceUIDInFile (0004,1511) UI
pub const REFERENCED_SOP_INSTANCE_UID_IN_FILE: Tag = Tag(0x0004, 0x1511);
/// ReferencedTransferSyntaxUIDInFile (0004,1512) UI
pub const REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE: Tag = Tag(0x0004, 0x1512);
/// ReferencedRelatedGeneralSOPClassUIDInFile (0004,151A) UI
pub const REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE: Tag = Tag(0x0004, 0x151A);
/// NumberOfReferences (0004,1600) UL (retired)
pub const NUMBER_OF_REFERENCES: Tag = Tag(0x0004, 0x1600);
/// LengthToEnd (0008,0001) UL (retired)
pub const LENGTH_TO_END: Tag = Tag(0x0008, 0x0001);
/// SpecificCharacterSet (0008,0005) CS
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// LanguageCodeSequence (0008,0006) SQ
pub const LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0006);
/// ImageType (0008,0008) CS
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// RecognitionCode (0008,0010) SH (retired)
pub const RECOGNITION_CODE: Tag = Tag(0x0008, 0x0010);
/// InstanceCreationDate (0008,0012) DA
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// InstanceCoercionDateTime (0008,0015) DT
pub const INSTANCE_COERCION_DATE_TIME: Tag = Tag(0x0008, 0x0015);
/// SOPClassUID (0008,0016) UI
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// AcquisitionUID (0008,0017) UI
pub const ACQUISITION_UID: Tag = Tag(0x0008, 0x0017);
/// SOPInstanceUID (0008,0018) UI
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// PyramidUID (0008,0019) UI
pub const PYRAMID_UID: Tag = Tag(0x0008, 0x0019);
/// RelatedGeneralSOPClassUID (0008,001A) UI
pub const RELATED_GENERAL_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001A);
/// OriginalSpecializedSOPClassUID (0008,001B) UI
pub const ORIGINAL_SPECIALIZED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x001B);
/// StudyDate (0008,0020) DA
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// OverlayDate (0008,0024) DA (retired)
pub const OVERLAY_DATE: Tag = Tag(0x0008, 0x0024);
/// CurveDate (0008,0025) DA (retired)
pub const CURVE_DATE: Tag = Tag(0x0008, 0x0025);
/// AcquisitionDateTime (0008,002A) DT
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// OverlayTime (0008,0034) TM (retired)
pub const OVERLAY_TIME: Tag = Tag(0x0008, 0x0034);
/// CurveTime (0008,0035) TM (retired)
pub const CURVE_TIME: Tag = Tag(0x0008, 0x0035);
/// DataSetType (0008,0040) US (retired)
pub const DATA_SET_TYPE: Tag = Tag(0x0008, 0x0040);
/// DataSetSubtype (0008,0041) LO (retired)
pub const DATA_SET_SUBTYPE: Tag = Tag(0x0008, 0x0041);
/// NuclearMedicineSeriesType (0008,0042) CS (retired)
pub const NUCLEAR_MEDICINE_SERIES_TYPE: Tag = Tag(0x0008, 0x0042);
/// AccessionNumber (0008,0050) SH
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// IssuerOfAccessionNumberSequence (0008,0051) SQ
pub const ISSUER_OF_ACCESSION_NUMBER_SEQUENCE: Tag = Tag(0x0008, 0x0051);
/// QueryRetrieveLevel (0008,0052) CS
pub const QUERY_RETRIEVE_LEVEL: Tag = Tag(0x0008, 0x0052);
/// QueryRetrieveView (0008,0053) CS
pub const QUERY_RETRIEVE_VIEW: Tag = Tag(0x0008, 0x0053);
/// RetrieveAETitle (0008,0054) AE
pub const RETRIEVE_AE_TITLE: Tag = Tag(0x0008, 0x0054);
/// StationAETitle (0008,0055) AE
pub const STATION_AE_TITLE: Tag = Tag(0x0008, 0x0055);
/// InstanceAvailability (0008,0056) CS
pub const INSTANCE_AVAILABILITY: Tag = Tag(0x0008, 0x0056);
/// FailedSOPInstanceUIDList (0008,0058) UI
pub const FAILED_SOP_INSTANCE_UID_LIST: Tag = Tag(0x0008, 0x0058);
/// Modality (0008,0060) CS
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ModalitiesInStudy (0008,0061) CS
pub const MODALITIES_IN_STUDY: Tag = Tag(0x0008, 0x0061);
/// SOPClassesInStudy (0008,0062) UI
pub const SOP_CLASSES_IN_STUDY: Tag = Tag(0x0008, 0x0062);
/// AnatomicRegionsInStudyCodeSequence (0008,0063) SQ
pub const ANATOMIC_REGIONS_IN_STUDY_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0063);
/// ConversionType (0008,0064) CS
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// PresentationIntentType (0008,0068) CS
pub const PRESENTATION_INTENT_TYPE: Tag = Tag(0x0008, 0x0068);
/// Manufacturer (0008,0070) LO
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// InstitutionAddress (0008,0081) ST
pub const INSTITUTION_ADDRESS: Tag = Tag(0x0008, 0x0081);
/// InstitutionCodeSequence (0008,0082) SQ
pub const INSTITUTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0082);
/// ReferringPhysicianName (0008,0090) PN
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// ReferringPhysicianAddress (0008,0092) ST
pub const REFERRING_PHYSICIAN_ADDRESS: Tag = Tag(0x0008, 0x0092);
/// ReferringPhysicianTelephoneNumbers (0008,0094) SH
pub const REFERRING_PHYSICIAN_TELEPHONE_NUMBERS: Tag = Tag(0x0008, 0x0094);
/// ReferringPhysicianIdentificationSequence (0008,0096) SQ
pub const REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0096);
/// ConsultingPhysicianName (0008,009C) PN
pub const CONSULTING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x009C);
/// ConsultingPhysicianIdentificationSequence (0008,009D) SQ
pub const CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x009D);
/// CodeValue (0008,0100) SH
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// ExtendedCodeValue (0008,0101) LO
pub const EXTENDED_CODE_VALUE: Tag = Tag(0x0008, 0x0101);
/// CodingSchemeDesignator (0008,0102) SH
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodingSchemeVersion (0008,0103) SH
pub const CODING_SCHEME_VERSION: Tag = Tag(0x0008, 0x0103);
/// CodeMeaning (0008,0104) LO
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// MappingResource (0008,0105) CS
pub const MAPPING_RESOURCE: Tag = Tag(0x0008, 0x0105);
/// ContextGroupVersion (0008,0106) DT
pub const CONTEXT_GROUP_VERSION: Tag = Tag(0x0008, 0x0106);
/// ContextGroupLocalVersion (0008,0107) DT
pub const CONTEXT_GROUP_LOCAL_VERSION: Tag = Tag(0x0008, 0x0107);
/// ExtendedCodeMeaning (0008,0108) LT
pub const EXTENDED_CODE_MEANING: Tag = Tag(0x0008, 0x0108);
/// CodingSchemeResourcesSequence (0008,0109) SQ
pub const CODING_SCHEME_RESOURCES_SEQUENCE: Tag = Tag(0x0008, 0x0109);
/// CodingSchemeURLType (0008,010A) CS
pub const CODING_SCHEME_URL_TYPE: Tag = Tag(0x0008, 0x010A);
/// ContextGroupExtensionFlag (0008,010B) CS
pub const CONTEXT_GROUP_EXTENSION_FLAG: Tag = Tag(0x0008, 0x010B);
/// CodingSchemeUID (0008,010C) UI
pub const CODING_SCHEME_UID: Tag = Tag(0x0008, 0x010C);
/// ContextGroupExtensionCreatorUID (0008,010D) UI
pub const CONTEXT_GROUP_EXTENSION_CREATOR_UID: Tag = Tag(0x0008, 0x010D);
/// CodingSchemeURL (0008,010E) UR
pub const CODING_SCHEME_URL: Tag = Tag(0x0008, 0x010E);
/// ContextIdentifier (0008,010F) CS
pub const CONTEXT_IDENTIFIER: Tag = Tag(0x0008, 0x010F);
/// CodingSchemeIdentificationSequence (0008,0110) SQ
pub const CODING_SCHEME_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0110);
/// CodingSchemeRegistry (0008,0112) LO
pub const CODING_SCHEME_REGISTRY: Tag = Tag(0x0008, 0x0112);
/// CodingSchemeExternalID (0008,0114) ST
pub const CODING_SCHEME_EXTERNAL_ID: Tag = Tag(0x0008, 0x0114);
/// CodingSchemeName (0008,0115) ST
pub const CODING_SCHEME_NAME: Tag = Tag(0x0008, 0x0115);
/// CodingSchemeResponsibleOrganization (0008,0116) ST
pub const CODING_SCHEME_RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0008, 0x0116);
/// ContextUID (0008,0117) UI
pub const CONTEXT_UID: Tag = Tag(0x0008, 0x0117);
/// MappingResourceUID (0008,0118) UI
pub const MAPPING_RESOURCE_UID: Tag = Tag(0x0008, 0x0118);
/// LongCodeValue (0008,0119) UC
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);
/// URNCodeValue (0008,0120) UR
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);
/// EquivalentCodeSequence (0008,0121) SQ
pub const EQUIVALENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0121);
/// MappingResourceName (0008,0122) LO
pub const MAPPING_RESOURCE_NAME: Tag = Tag(0x0008, 0x0122);
/// ContextGroupIdentificationSequence (0008,0123) SQ
pub const CONTEXT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0123);
/// MappingResourceIdentificationSequence (0008,0124) SQ
pub const MAPPING_RESOURCE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x0124);
/// TimezoneOffsetFromUTC (0008,0201) SH
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// ResponsibleGroupCodeSequence (0008,0202) SQ
pub const RESPONSIBLE_GROUP_CODE_SEQUENCE: Tag = Tag(0x0008, 0x0202);
/// EquipmentModality (0008,0220) SQ
pub const EQUIPMENT_MODALITY: Tag = Tag(0x0008, 0x0220);
/// ManufacturerRelatedModelGroup (0008,0221) LO
pub const MANUFACTURER_RELATED_MODEL_GROUP: Tag = Tag(0x0008, 0x0221);
/// PrivateDataElementCharacteristicsSequence (0008,0300) SQ
pub const PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0008, 0x0300);
/// PrivateGroupReference (0008,0301) US
pub const PRIVATE_GROUP_REFERENCE: Tag = Tag(0x0008, 0x0301);
/// PrivateCreatorReference (0008,0302) LO
pub const PRIVATE_CREATOR_REFERENCE: Tag = Tag(0x0008, 0x0302);
/// BlockIdentifyingInformationStatus (0008,0303) CS
pub const BLOCK_IDENTIFYING_INFORMATION_STATUS: Tag = Tag(0x0008, 0x0303);
/// NonidentifyingPrivateElements (0008,0304) US
pub const NONIDENTIFYING_PRIVATE_ELEMENTS: Tag = Tag(0x0008, 0x0304);
/// DeidentificationActionSequence (0008,0305) SQ
pub const DEIDENTIFICATION_ACTION_SEQUENCE: Tag = Tag(0x0008, 0x0305);
/// IdentifyingPrivateElements (0008,0306) US
pub const IDENTIFYING_PRIVATE_ELEMENTS: Tag = Tag(0x0008, 0x0306);
/// DeidentificationAction (0008,0307) CS
pub const DEIDENTIFICATION_ACTION: Tag = Tag(0x0008, 0x0307);
/// PrivateDataElement (0008,0308) US
pub const PRIVATE_DATA_ELEMENT: Tag = Tag(0x0008, 0x0308);
/// PrivateDataElementValueMultiplicity (0008,0309) UL
pub const PRIVATE_DATA_ELEMENT_VALUE_MULTIPLICITY: Tag = Tag(0x0008, 0x0309);
/// PrivateDataElementValueRepresentation (0008,030A) CS
pub const PRIVATE_DATA_ELEMENT_VALUE_REPRESENTATION: Tag = Tag(0x0008, 0x030A);
/// PrivateDataElementNumberOfItems (0008,030B) UL
pub const PRIVATE_DATA_ELEMENT_NUMBER_OF_ITEMS: Tag = Tag(0x0008, 0x030B);
/// PrivateDataElementName (0008,030C) UC
pub const PRIVATE_DATA_ELEMENT_NAME: Tag = Tag(0x0008, 0x030C);
/// PrivateDataElementKeyword (0008,030D) UC
pub const PRIVATE_DATA_ELEMENT_KEYWORD: Tag = Tag(0x0008, 0x030D);
/// PrivateDataElementDescription (0008,030E) UT
pub const PRIVATE_DATA_ELEMENT_DESCRIPTION: Tag = Tag(0x0008, 0x030E);
/// PrivateDataElementEncoding (0008,030F) UT
pub const PRIVATE_DATA_ELEMENT_ENCODING: Tag = Tag(0x0008, 0x030F);
/// PrivateDataElementDefinitionSequence (0008,0310) SQ
pub const PRIVATE_DATA_ELEMENT_DEFINITION_SEQUENCE: Tag = Tag(0x0008, 0x0310);
/// NetworkID (0008,1000) AE (retired)
pub const NETWORK_ID: Tag = Tag(0x0008, 0x1000);
/// StationName (0008,1010) SH
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// ProcedureCodeSequence (0008,1032) SQ
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// SeriesDescriptionCodeSequence (0008,103F) SQ
pub const SERIES_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x103F);
/// InstitutionalDepartmentName (0008,1040) LO
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// InstitutionalDepartmentTypeCodeSequence (0008,1041) SQ
pub const INSTITUTIONAL_DEPARTMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1041);
/// PhysiciansOfRecord (0008,1048) PN
pub const PHYSICIANS_OF_RECORD: Tag = Tag(0x0008, 0x1048);
/// PhysiciansOfRecordIdentificationSequence (0008,1049) SQ
pub const PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1049);
/// PerformingPhysicianName (0008,1050) PN
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// PerformingPhysicianIdentificationSequence (0008,1052) SQ
pub const PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1052);
/// NameOfPhysiciansReadingStudy (0008,1060) PN
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// PhysiciansReadingStudyIdentificationSequence (0008,1062) SQ
pub const PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1062);
/// OperatorsName (0008,1070) PN
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// OperatorIdentificationSequence (0008,1072) SQ
pub const OPERATOR_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0008, 0x1072);
/// AdmittingDiagnosesDescription (0008,1080) LO
pub const ADMITTING_DIAGNOSES_DESCRIPTION: Tag = Tag(0x0008, 0x1080);
/// AdmittingDiagnosesCodeSequence (0008,1084) SQ
pub const ADMITTING_DIAGNOSES_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1084);
/// PyramidDescription (0008,1088) LO
pub const PYRAMID_DESCRIPTION: Tag = Tag(0x0008, 0x1088);
/// ManufacturerModelName (0008,1090) LO
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedResultsSequence (0008,1100) SQ (retired)
pub const REFERENCED_RESULTS_SEQUENCE: Tag = Tag(0x0008, 0x1100);
/// ReferencedStudySequence (0008,1110) SQ
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedInstancesBySOPClassSequence (0008,1112) SQ
pub const REFERENCED_INSTANCES_BY_SOP_CLASS_SEQUENCE: Tag = Tag(0x0008, 0x1112);
/// ReferencedSeriesSequence (0008,1115) SQ
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedPatientSequence (0008,1120) SQ
pub const REFERENCED_PATIENT_SEQUENCE: Tag = Tag(0x0008, 0x1120);
/// ReferencedVisitSequence (0008,1125) SQ
pub const REFERENCED_VISIT_SEQUENCE: Tag = Tag(0x0008, 0x1125);
/// ReferencedOverlaySequence (0008,1130) SQ (retired)
pub const REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x0008, 0x1130);
/// ReferencedStereometricInstanceSequence (0008,1134) SQ
pub const REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x1134);
/// ReferencedWaveformSequence (0008,113A) SQ
pub const REFERENCED_WAVEFORM_SEQUENCE: Tag = Tag(0x0008, 0x113A);
/// ReferencedImageSequence (0008,1140) SQ
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedCurveSequence (0008,1145) SQ (retired)
pub const REFERENCED_CURVE_SEQUENCE: Tag = Tag(0x0008, 0x1145);
/// ReferencedInstanceSequence (0008,114A) SQ
pub const REFERENCED_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114A);
/// ReferencedRealWorldValueMappingInstanceSequence (0008,114B) SQ
pub const REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE: Tag = Tag(0x0008, 0x114B);
/// ReferencedSOPClassUID (0008,1150) UI
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// DefinitionSourceSequence (0008,1156) SQ
pub const DEFINITION_SOURCE_SEQUENCE: Tag = Tag(0x0008, 0x1156);
/// SOPClassesSupported (0008,115A) UI
pub const SOP_CLASSES_SUPPORTED: Tag = Tag(0x0008, 0x115A);
/// ReferencedFrameNumber (0008,1160) IS
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// SimpleFrameList (0008,1161) UL
pub const SIMPLE_FRAME_LIST: Tag = Tag(0x0008, 0x1161);
/// CalculatedFrameList (0008,1162) UL
pub const CALCULATED_FRAME_LIST: Tag = Tag(0x0008, 0x1162);
/// TimeRange (0008,1163) FD
pub const TIME_RANGE: Tag = Tag(0x0008, 0x1163);
/// FrameExtractionSequence (0008,1164) SQ
pub const FRAME_EXTRACTION_SEQUENCE: Tag = Tag(0x0008, 0x1164);
/// MultiFrameSourceSOPInstanceUID (0008,1167) UI
pub const MULTI_FRAME_SOURCE_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1167);
/// RetrieveURL (0008,1190) UR
pub const RETRIEVE_URL: Tag = Tag(0x0008, 0x1190);
/// TransactionUID (0008,1195) UI
pub const TRANSACTION_UID: Tag = Tag(0x0008, 0x1195);
/// WarningReason (0008,1196) US
pub const WARNING_REASON: Tag = Tag(0x0008, 0x1196);
/// FailureReason (0008,1197) US
pub const FAILURE_REASON: Tag = Tag(0x0008, 0x1197);
/// FailedSOPSequence (0008,1198) SQ
pub const FAILED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1198);
/// ReferencedSOPSequence (0008,1199) SQ
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// OtherFailuresSequence (0008,119A) SQ
pub const OTHER_FAILURES_SEQUENCE: Tag = Tag(0x0008, 0x119A);
/// FailedStudySequence (0008,119B) SQ
pub const FAILED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x119B);
/// StudiesContainingOtherReferencedInstancesSequence (0008,1200) SQ
pub const STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE: Tag = Tag(0x0008, 0x1200);
/// RelatedSeriesSequence (0008,1250) SQ
pub const RELATED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1250);
/// LossyImageCompressionRetired (0008,2110) CS (retired)
pub const LOSSY_IMAGE_COMPRESSION_RETIRED: Tag = Tag(0x0008, 0x2110);
/// DerivationDescription (0008,2111) ST
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// SourceImageSequence (0008,2112) SQ
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// StageName (0008,2120) SH
pub const STAGE_NAME: Tag = Tag(0x0008, 0x2120);
/// StageNumber (0008,2122) IS
pub const STAGE_NUMBER: Tag = Tag(0x0008, 0x2122);
/// NumberOfStages (0008,2124) IS
pub const NUMBER_OF_STAGES: Tag = Tag(0x0008, 0x2124);
/// ViewName (0008,2127) SH
pub const VIEW_NAME: Tag = Tag(0x0008, 0x2127);
/// ViewNumber (0008,2128) IS
pub const VIEW_NUMBER: Tag = Tag(0x0008, 0x2128);
/// NumberOfEventTimers (0008,2129) IS
pub const NUMBER_OF_EVENT_TIMERS: Tag = Tag(0x0008, 0x2129);
/// NumberOfViewsInStage (0008,212A) IS
pub const NUMBER_OF_VIEWS_IN_STAGE: Tag = Tag(0x0008, 0x212A);
/// EventElapsedTimes (0008,2130) DS
pub const EVENT_ELAPSED_TIMES: Tag = Tag(0x0008, 0x2130);
/// EventTimerNames (0008,2132) LO
pub const EVENT_TIMER_NAMES: Tag = Tag(0x0008, 0x2132);
/// EventTimerSequence (0008,2133) SQ
pub const EVENT_TIMER_SEQUENCE: Tag = Tag(0x0008, 0x2133);
/// EventTimeOffset (0008,2134) FD
pub const EVENT_TIME_OFFSET: Tag = Tag(0x0008, 0x2134);
/// EventCodeSequence (0008,2135) SQ
pub const EVENT_CODE_SEQUENCE: Tag = Tag(0x0008, 0x2135);
/// StartTrim (0008,2142) IS
pub const START_TRIM: Tag = Tag(0x0008, 0x2142);
/// StopTrim (0008,2143) IS
pub const STOP_TRIM: Tag = Tag(0x0008, 0x2143);
/// RecommendedDisplayFrameRate (0008,2144) IS
pub const RECOMMENDED_DISPLAY_FRAME_RATE: Tag = Tag(0x0008, 0x2144);
/// TransducerPosition (0008,2200) CS (retired)
pub const TRANSDUCER_POSITION: Tag = Tag(0x0008, 0x2200);
/// TransducerOrientation (0008,2204) CS (retired)
pub const TRANSDUCER_ORIENTATION: Tag = Tag(0x0008, 0x2204);
/// AnatomicStructure (0008,2208) CS (retired)
pub const ANATOMIC_STRUCTURE: Tag = Tag(0x0008, 0x2208);
/// AnatomicRegionSequence (0008,2218) SQ
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// AnatomicRegionModifierSequence (0008,2220) SQ
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);
/// PrimaryAnatomicStructureSequence (0008,2228) SQ
pub const PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE: Tag = Tag(0x0008, 0x2228);
/// AnatomicStructureSpaceOrRegionSequence (0008,2229) SQ (retired)
pub const ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2229);
/// PrimaryAnatomicStructureModifierSequence (0008,2230) SQ
pub const PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2230);
/// TransducerPositionSequence (0008,2240) SQ (retired)
pub const TRANSDUCER_POSITION_SEQUENCE: Tag = Tag(0x0008, 0x2240);
/// TransducerPositionModifierSequence (0008,2242) SQ (retired)
pub const TRANSDUCER_POSITION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2242);
/// TransducerOrientationSequence (0008,2244) SQ (retired)
pub const TRANSDUCER_ORIENTATION_SEQUENCE: Tag = Tag(0x0008, 0x2244);
/// TransducerOrientationModifierSequence (0008,2246) SQ (retired)
pub const TRANSDUCER_ORIENTATION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2246);
/// AlternateRepresentationSequence (0008,3001) SQ
pub const ALTERNATE_REPRESENTATION_SEQUENCE: Tag = Tag(0x0008, 0x3001);
/// AvailableTransferSyntaxUID (0008,3002) UI
pub const AVAILABLE_TRANSFER_SYNTAX_UID: Tag = Tag(0x0008, 0x3002);
/// IrradiationEventUID (0008,3010) UI
pub const IRRADIATION_EVENT_UID: Tag = Tag(0x0008, 0x3010);
/// SourceIrradiationEventSequence (0008,3011) SQ
pub const SOURCE_IRRADIATION_EVENT_SEQUENCE: Tag = Tag(0x0008, 0x3011);
/// RadiopharmaceuticalAdministrationEventUID (0008,3012) UI
pub const RADIOPHARMACEUTICAL_ADMINISTRATION_EVENT_UID: Tag = Tag(0x0008, 0x3012);
/// IdentifyingComments (0008,4000) LT (retired)
pub const IDENTIFYING_COMMENTS: Tag = Tag(0x0008, 0x4000);
/// FrameType (0008,9007) CS
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// ReferencedImageEvidenceSequence (0008,9092) SQ
pub const REFERENCED_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9092);
/// ReferencedRawDataSequence (0008,9121) SQ
pub const REFERENCED_RAW_DATA_SEQUENCE: Tag = Tag(0x0008, 0x9121);
/// CreatorVersionUID (0008,9123) UI
pub const CREATOR_VERSION_UID: Tag = Tag(0x0008, 0x9123);
/// DerivationImageSequence (0008,9124) SQ
pub const DERIVATION_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x9124);
/// SourceImageEvidenceSequence (0008,9154) SQ
pub const SOURCE_IMAGE_EVIDENCE_SEQUENCE: Tag = Tag(0x0008, 0x9154);
/// PixelPresentation (0008,9205) CS
pub const PIXEL_PRESENTATION: Tag = Tag(0x0008, 0x9205);
/// VolumetricProperties (0008,9206) CS
pub const VOLUMETRIC_PROPERTIES: Tag = Tag(0x0008, 0x9206);
/// VolumeBasedCalculationTechnique (0008,9207) CS
pub const VOLUME_BASED_CALCULATION_TECHNIQUE: Tag = Tag(0x0008, 0x9207);
/// ComplexImageComponent (0008,9208) CS
pub const COMPLEX_IMAGE_COMPONENT: Tag = Tag(0x0008, 0x9208);
/// AcquisitionContrast (0008,9209) CS
pub const ACQUISITION_CONTRAST: Tag = Tag(0x0008, 0x9209);
/// DerivationCodeSequence (0008,9215) SQ
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);
/// ReferencedPresentationStateSequence (0008,9237) SQ
pub const REFERENCED_PRESENTATION_STATE_SEQUENCE: Tag = Tag(0x0008, 0x9237);
/// ReferencedOtherPlaneSequence (0008,9410) SQ
pub const REFERENCED_OTHER_PLANE_SEQUENCE: Tag = Tag(0x0008, 0x9410);
/// FrameDisplaySequence (0008,9458) SQ
pub const FRAME_DISPLAY_SEQUENCE: Tag = Tag(0x0008, 0x9458);
/// RecommendedDisplayFrameRateInFloat (0008,9459) FL
pub const RECOMMENDED_DISPLAY_FRAME_RATE_IN_FLOAT: Tag = Tag(0x0008, 0x9459);
/// SkipFrameRangeFlag (0008,9460) CS
pub const SKIP_FRAME_RANGE_FLAG: Tag = Tag(0x0008, 0x9460);
/// PatientName (0010,0010) PN
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// TypeOfPatientID (0010,0022) CS
pub const TYPE_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0022);
/// IssuerOfPatientIDQualifiersSequence (0010,0024) SQ
pub const ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE: Tag = Tag(0x0010, 0x0024);
/// SourcePatientGroupIdentificationSequence (0010,0026) SQ
pub const SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0026);
/// GroupOfPatientsIdentificationSequence (0010,0027) SQ
pub const GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0010, 0x0027);
/// SubjectRelativePositionInImage (0010,0028) US
pub const SUBJECT_RELATIVE_POSITION_IN_IMAGE: Tag = Tag(0x0010, 0x0028);
/// PatientBirthDate (0010,0030) DA
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientBirthDateInAlternativeCalendar (0010,0033) LO
pub const PATIENT_BIRTH_DATE_IN_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0033);
/// PatientDeathDateInAlternativeCalendar (0010,0034) LO
pub const PATIENT_DEATH_DATE_IN_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0034);
/// PatientAlternativeCalendar (0010,0035) CS
pub const PATIENT_ALTERNATIVE_CALENDAR: Tag = Tag(0x0010, 0x0035);
/// PatientSex (0010,0040) CS
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// PatientInsurancePlanCodeSequence (0010,0050) SQ
pub const PATIENT_INSURANCE_PLAN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0050);
/// PatientPrimaryLanguageCodeSequence (0010,0101) SQ
pub const PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0101);
/// PatientPrimaryLanguageModifierCodeSequence (0010,0102) SQ
pub const PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0102);
/// QualityControlSubject (0010,0200) CS
pub const QUALITY_CONTROL_SUBJECT: Tag = Tag(0x0010, 0x0200);
/// QualityControlSubjectTypeCodeSequence (0010,0201) SQ
pub const QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0201);
/// StrainDescription (0010,0212) UC
pub const STRAIN_DESCRIPTION: Tag = Tag(0x0010, 0x0212);
/// StrainNomenclature (0010,0213) LO
pub const STRAIN_NOMENCLATURE: Tag = Tag(0x0010, 0x0213);
/// StrainStockNumber (0010,0214) LO
pub const STRAIN_STOCK_NUMBER: Tag = Tag(0x0010, 0x0214);
/// StrainSourceRegistryCodeSequence (0010,0215) SQ
pub const STRAIN_SOURCE_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0215);
/// StrainStockSequence (0010,0216) SQ
pub const STRAIN_STOCK_SEQUENCE: Tag = Tag(0x0010, 0x0216);
/// StrainSource (0010,0217) LO
pub const STRAIN_SOURCE: Tag = Tag(0x0010, 0x0217);
/// StrainAdditionalInformation (0010,0218) UT
pub const STRAIN_ADDITIONAL_INFORMATION: Tag = Tag(0x0010, 0x0218);
/// StrainCodeSequence (0010,0219) SQ
pub const STRAIN_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0219);
/// GeneticModificationsSequence (0010,0221) SQ
pub const GENETIC_MODIFICATIONS_SEQUENCE: Tag = Tag(0x0010, 0x0221);
/// GeneticModificationsDescription (0010,0222) UC
pub const GENETIC_MODIFICATIONS_DESCRIPTION: Tag = Tag(0x0010, 0x0222);
/// GeneticModificationsNomenclature (0010,0223) LO
pub const GENETIC_MODIFICATIONS_NOMENCLATURE: Tag = Tag(0x0010, 0x0223);
/// GeneticModificationsCodeSequence (0010,0229) SQ
pub const GENETIC_MODIFICATIONS_CODE_SEQUENCE: Tag = Tag(0x0010, 0x0229);
/// OtherPatientIDs (0010,1000) LO (retired)
pub const OTHER_PATIENT_I_DS: Tag = Tag(0x0010, 0x1000);
/// OtherPatientNames (0010,1001) PN
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// OtherPatientIDsSequence (0010,1002) SQ
pub const OTHER_PATIENT_IDS_SEQUENCE: Tag = Tag(0x0010, 0x1002);
/// PatientBirthName (0010,1005) PN
pub const PATIENT_BIRTH_NAME: Tag = Tag(0x0010, 0x1005);
/// PatientAge (0010,1010) AS
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientSizeCodeSequence (0010,1021) SQ
pub const PATIENT_SIZE_CODE_SEQUENCE: Tag = Tag(0x0010, 0x1021);
/// PatientBodyMassIndex (0010,1022) DS
pub const PATIENT_BODY_MASS_INDEX: Tag = Tag(0x0010, 0x1022);
/// MeasuredAPDimension (0010,1023) DS
pub const MEASURED_AP_DIMENSION: Tag = Tag(0x0010, 0x1023);
/// MeasuredLateralDimension (0010,1024) DS
pub const MEASURED_LATERAL_DIMENSION: Tag = Tag(0x0010, 0x1024);
/// PatientWeight (0010,1030) DS
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// PatientAddress (0010,1040) LO
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);
/// InsurancePlanIdentification (0010,1050) LO (retired)
pub const INSURANCE_PLAN_IDENTIFICATION: Tag = Tag(0x0010, 0x1050);
/// PatientMotherBirthName (0010,1060) PN
pub const PATIENT_MOTHER_BIRTH_NAME: Tag = Tag(0x0010, 0x1060);
/// MilitaryRank (0010,1080) LO
pub const MILITARY_RANK: Tag = Tag(0x0010, 0x1080);
/// BranchOfService (0010,1081) LO
pub const BRANCH_OF_SERVICE: Tag = Tag(0x0010, 0x1081);
/// MedicalRecordLocator (0010,1090) LO (retired)
pub const MEDICAL_RECORD_LOCATOR: Tag = Tag(0x0010, 0x1090);
/// ReferencedPatientPhotoSequence (0010,1100) SQ
pub const REFERENCED_PATIENT_PHOTO_SEQUENCE: Tag = Tag(0x0010, 0x1100);
/// MedicalAlerts (0010,2000) LO
pub const MEDICAL_ALERTS: Tag = Tag(0x0010, 0x2000);
/// Allergies (0010,2110) LO
pub const ALLERGIES: Tag = Tag(0x0010, 0x2110);
/// CountryOfResidence (0010,2150) LO
pub const COUNTRY_OF_RESIDENCE: Tag = Tag(0x0010, 0x2150);
/// RegionOfResidence (0010,2152) LO
pub const REGION_OF_RESIDENCE: Tag = Tag(0x0010, 0x2152);
/// PatientTelephoneNumbers (0010,2154) SH
pub const PATIENT_TELEPHONE_NUMBERS: Tag = Tag(0x0010, 0x2154);
/// PatientTelecomInformation (0010,2155) LT
pub const PATIENT_TELECOM_INFORMATION: Tag = Tag(0x0010, 0x2155);
/// EthnicGroup (0010,2160) SH
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// Occupation (0010,2180) SH
pub const OCCUPATION: Tag = Tag(0x0010, 0x2180);
/// SmokingStatus (0010,21A0) CS
pub const SMOKING_STATUS: Tag = Tag(0x0010, 0x21A0);
/// AdditionalPatientHistory (0010,21B0) LT
pub const ADDITIONAL_PATIENT_HISTORY: Tag = Tag(0x0010, 0x21B0);
/// PregnancyStatus (0010,21C0) US
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// LastMenstrualDate (0010,21D0) DA
pub const LAST_MENSTRUAL_DATE: Tag = Tag(0x0010, 0x21D0);
/// PatientReligiousPreference (0010,21F0) LO
pub const PATIENT_RELIGIOUS_PREFERENCE: Tag = Tag(0x0010, 0x21F0);
/// PatientSpeciesDescription (0010,2201) LO
pub const PATIENT_SPECIES_DESCRIPTION: Tag = Tag(0x0010, 0x2201);
/// PatientSpeciesCodeSequence (0010,2202) SQ
pub const PATIENT_SPECIES_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2202);
/// PatientSexNeutered (0010,2203) CS
pub const PATIENT_SEX_NEUTERED: Tag = Tag(0x0010, 0x2203);
/// AnatomicalOrientationType (0010,2210) CS
pub const ANATOMICAL_ORIENTATION_TYPE: Tag = Tag(0x0010, 0x2210);
/// PatientBreedDescription (0010,2292) LO
pub const PATIENT_BREED_DESCRIPTION: Tag = Tag(0x0010, 0x2292);
/// PatientBreedCodeSequence (0010,2293) SQ
pub const PATIENT_BREED_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2293);
/// BreedRegistrationSequence (0010,2294) SQ
pub const BREED_REGISTRATION_SEQUENCE: Tag = Tag(0x0010, 0x2294);
/// BreedRegistrationNumber (0010,2295) LO
pub const BREED_REGISTRATION_NUMBER: Tag = Tag(0x0010, 0x2295);
/// BreedRegistryCodeSequence (0010,2296) SQ
pub const BREED_REGISTRY_CODE_SEQUENCE: Tag = Tag(0x0010, 0x2296);
/// ResponsiblePerson (0010,2297) PN
pub const RESPONSIBLE_PERSON: Tag = Tag(0x0010, 0x2297);
/// ResponsiblePersonRole (0010,2298) CS
pub const RESPONSIBLE_PERSON_ROLE: Tag = Tag(0x0010, 0x2298);
/// ResponsibleOrganization (0010,2299) LO
pub const RESPONSIBLE_ORGANIZATION: Tag = Tag(0x0010, 0x2299);
/// PatientComments (0010,4000) LT
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// ExaminedBodyThickness (0010,9431) FL
pub const EXAMINED_BODY_THICKNESS: Tag = Tag(0x0010, 0x9431);
/// ClinicalTrialSponsorName (0012,0010) LO
pub const CLINICAL_TRIAL_SPONSOR_NAME: Tag = Tag(0x0012, 0x0010);
/// ClinicalTrialProtocolID (0012,0020) LO
pub const CLINICAL_TRIAL_PROTOCOL_ID: Tag = Tag(0x0012, 0x0020);
/// ClinicalTrialProtocolName (0012,0021) LO
pub const CLINICAL_TRIAL_PROTOCOL_NAME: Tag = Tag(0x0012, 0x0021);
/// ClinicalTrialSiteID (0012,0030) LO
pub const CLINICAL_TRIAL_SITE_ID: Tag = Tag(0x0012, 0x0030);
/// ClinicalTrialSiteName (0012,0031) LO
pub const CLINICAL_TRIAL_SITE_NAME: Tag = Tag(0x0012, 0x0031);
/// ClinicalTrialSubjectID (0012,0040) LO
pub const CLINICAL_TRIAL_SUBJECT_ID: Tag = Tag(0x0012, 0x0040);
/// ClinicalTrialSubjectReadingID (0012,0042) LO
pub const CLINICAL_TRIAL_SUBJECT_READING_ID: Tag = Tag(0x0012, 0x0042);
/// ClinicalTrialTimePointID (0012,0050) LO
pub const CLINICAL_TRIAL_TIME_POINT_ID: Tag = Tag(0x0012, 0x0050);
/// ClinicalTrialTimePointDescription (0012,0051) ST
pub const CLINICAL_TRIAL_TIME_POINT_DESCRIPTION: Tag = Tag(0x0012, 0x0051);
/// LongitudinalTemporalOffsetFromEvent (0012,0052) FD
pub const LONGITUDINAL_TEMPORAL_OFFSET_FROM_EVENT: Tag = Tag(0x0012, 0x0052);
/// LongitudinalTemporalEventType (0012,0053) CS
pub const LONGITUDINAL_TEMPORAL_EVENT_TYPE: Tag = Tag(0x0012, 0x0053);
/// ClinicalTrialTimePointTypeCodeSequence (0012,0054) SQ
pub const CLINICAL_TRIAL_TIME_POINT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0054);
/// ClinicalTrialCoordinatingCenterName (0012,0060) LO
pub const CLINICAL_TRIAL_COORDINATING_CENTER_NAME: Tag = Tag(0x0012, 0x0060);
/// PatientIdentityRemoved (0012,0062) CS
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// DeidentificationMethod (0012,0063) LO
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// DeidentificationMethodCodeSequence (0012,0064) SQ
pub const DEIDENTIFICATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0012, 0x0064);
/// ClinicalTrialSeriesID (0012,0071) LO
pub const CLINICAL_TRIAL_SERIES_ID: Tag = Tag(0x0012, 0x0071);
/// ClinicalTrialSeriesDescription (0012,0072) LO
pub const CLINICAL_TRIAL_SERIES_DESCRIPTION: Tag = Tag(0x0012, 0x0072);
/// ClinicalTrialProtocolEthicsCommitteeName (0012,0081) LO
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME: Tag = Tag(0x0012, 0x0081);
/// ClinicalTrialProtocolEthicsCommitteeApprovalNumber (0012,0082) LO
pub const CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER: Tag = Tag(0x0012, 0x0082);
/// ConsentForClinicalTrialUseSequence (0012,0083) SQ
pub const CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE: Tag = Tag(0x0012, 0x0083);
/// DistributionType (0012,0084) CS
pub const DISTRIBUTION_TYPE: Tag = Tag(0x0012, 0x0084);
/// ConsentForDistributionFlag (0012,0085) CS
pub const CONSENT_FOR_DISTRIBUTION_FLAG: Tag = Tag(0x0012, 0x0085);
/// EthicsCommitteeApprovalEffectivenessStartDate (0012,0086) DA
pub const ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_START_DATE: Tag = Tag(0x0012, 0x0086);
/// EthicsCommitteeApprovalEffectivenessEndDate (0012,0087) DA
pub const ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_END_DATE: Tag = Tag(0x0012, 0x0087);
/// CADFileFormat (0014,0023) ST (retired)
pub const CAD_FILE_FORMAT: Tag = Tag(0x0014, 0x0023);
/// ComponentReferenceSystem (0014,0024) ST (retired)
pub const COMPONENT_REFERENCE_SYSTEM: Tag = Tag(0x0014, 0x0024);
/// ComponentManufacturingProcedure (0014,0025) ST
pub const COMPONENT_MANUFACTURING_PROCEDURE: Tag = Tag(0x0014, 0x0025);
/// ComponentManufacturer (0014,0028) ST
pub const COMPONENT_MANUFACTURER: Tag = Tag(0x0014, 0x0028);
/// MaterialThickness (0014,0030) DS
pub const MATERIAL_THICKNESS: Tag = Tag(0x0014, 0x0030);
/// MaterialPipeDiameter (0014,0032) DS
pub const MATERIAL_PIPE_DIAMETER: Tag = Tag(0x0014, 0x0032);
/// MaterialIsolationDiameter (0014,0034) DS
pub const MATERIAL_ISOLATION_DIAMETER: Tag = Tag(0x0014, 0x0034);
/// MaterialGrade (0014,0042) ST
pub const MATERIAL_GRADE: Tag = Tag(0x0014, 0x0042);
/// MaterialPropertiesDescription (0014,0044) ST
pub const MATERIAL_PROPERTIES_DESCRIPTION: Tag = Tag(0x0014, 0x0044);
/// MaterialPropertiesFileFormatRetired (0014,0045) ST (retired)
pub const MATERIAL_PROPERTIES_FILE_FORMAT_RETIRED: Tag = Tag(0x0014, 0x0045);
/// MaterialNotes (0014,0046) LT
pub const MATERIAL_NOTES: Tag = Tag(0x0014, 0x0046);
/// ComponentShape (0014,0050) CS
pub const COMPONENT_SHAPE: Tag = Tag(0x0014, 0x0050);
/// CurvatureType (0014,0052) CS
pub const CURVATURE_TYPE: Tag = Tag(0x0014, 0x0052);
/// OuterDiameter (0014,0054) DS
pub const OUTER_DIAMETER: Tag = Tag(0x0014, 0x0054);
/// InnerDiameter (0014,0056) DS
pub const INNER_DIAMETER: Tag = Tag(0x0014, 0x0056);
/// ComponentWelderIDs (0014,0100) LO
pub const COMPONENT_WELDER_I_DS: Tag = Tag(0x0014, 0x0100);
/// SecondaryApprovalStatus (0014,0101) CS
pub const SECONDARY_APPROVAL_STATUS: Tag = Tag(0x0014, 0x0101);
/// SecondaryReviewDate (0014,0102) DA
pub const SECONDARY_REVIEW_DATE: Tag = Tag(0x0014, 0x0102);
/// SecondaryReviewTime (0014,0103) TM
pub const SECONDARY_REVIEW_TIME: Tag = Tag(0x0014, 0x0103);
/// SecondaryReviewerName (0014,0104) PN
pub const SECONDARY_REVIEWER_NAME: Tag = Tag(0x0014, 0x0104);
/// RepairID (0014,0105) ST
pub const REPAIR_ID: Tag = Tag(0x0014, 0x0105);
/// MultipleComponentApprovalSequence (0014,0106) SQ
pub const MULTIPLE_COMPONENT_APPROVAL_SEQUENCE: Tag = Tag(0x0014, 0x0106);
/// OtherApprovalStatus (0014,0107) CS
pub const OTHER_APPROVAL_STATUS: Tag = Tag(0x0014, 0x0107);
/// OtherSecondaryApprovalStatus (0014,0108) CS
pub const OTHER_SECONDARY_APPROVAL_STATUS: Tag = Tag(0x0014, 0x0108);
/// ActualEnvironmentalConditions (0014,1010) ST
pub const ACTUAL_ENVIRONMENTAL_CONDITIONS: Tag = Tag(0x0014, 0x1010);
/// ExpiryDate (0014,1020) DA
pub const EXPIRY_DATE: Tag = Tag(0x0014, 0x1020);
/// EnvironmentalConditions (0014,1040) ST
pub const ENVIRONMENTAL_CONDITIONS: Tag = Tag(0x0014, 0x1040);
/// EvaluatorSequence (0014,2002) SQ
pub const EVALUATOR_SEQUENCE: Tag = Tag(0x0014, 0x2002);
/// EvaluatorNumber (0014,2004) IS
pub const EVALUATOR_NUMBER: Tag = Tag(0x0014, 0x2004);
/// EvaluatorName (0014,2006) PN
pub const EVALUATOR_NAME: Tag = Tag(0x0014, 0x2006);
/// EvaluationAttempt (0014,2008) IS
pub const EVALUATION_ATTEMPT: Tag = Tag(0x0014, 0x2008);
/// IndicationSequence (0014,2012) SQ
pub const INDICATION_SEQUENCE: Tag = Tag(0x0014, 0x2012);
/// IndicationNumber (0014,2014) IS
pub const INDICATION_NUMBER: Tag = Tag(0x0014, 0x2014);
/// IndicationLabel (0014,2016) SH
pub const INDICATION_LABEL: Tag = Tag(0x0014, 0x2016);
/// IndicationDescription (0014,2018) ST
pub const INDICATION_DESCRIPTION: Tag = Tag(0x0014, 0x2018);
/// IndicationType (0014,201A) CS
pub const INDICATION_TYPE: Tag = Tag(0x0014, 0x201A);
/// IndicationDisposition (0014,201C) CS
pub const INDICATION_DISPOSITION: Tag = Tag(0x0014, 0x201C);
/// IndicationROISequence (0014,201E) SQ
pub const INDICATION_ROI_SEQUENCE: Tag = Tag(0x0014, 0x201E);
/// IndicationPhysicalPropertySequence (0014,2030) SQ
pub const INDICATION_PHYSICAL_PROPERTY_SEQUENCE: Tag = Tag(0x0014, 0x2030);
/// PropertyLabel (0014,2032) SH
pub const PROPERTY_LABEL: Tag = Tag(0x0014, 0x2032);
/// CoordinateSystemNumberOfAxes (0014,2202) IS
pub const COORDINATE_SYSTEM_NUMBER_OF_AXES: Tag = Tag(0x0014, 0x2202);
/// CoordinateSystemAxesSequence (0014,2204) SQ
pub const COORDINATE_SYSTEM_AXES_SEQUENCE: Tag = Tag(0x0014, 0x2204);
/// CoordinateSystemAxisDescription (0014,2206) ST
pub const COORDINATE_SYSTEM_AXIS_DESCRIPTION: Tag = Tag(0x0014, 0x2206);
/// CoordinateSystemDataSetMapping (0014,2208) CS
pub const COORDINATE_SYSTEM_DATA_SET_MAPPING: Tag = Tag(0x0014, 0x2208);
/// CoordinateSystemAxisNumber (0014,220A) IS
pub const COORDINATE_SYSTEM_AXIS_NUMBER: Tag = Tag(0x0014, 0x220A);
/// CoordinateSystemAxisType (0014,220C) CS
pub const COORDINATE_SYSTEM_AXIS_TYPE: Tag = Tag(0x0014, 0x220C);
/// CoordinateSystemAxisUnits (0014,220E) CS
pub const COORDINATE_SYSTEM_AXIS_UNITS: Tag = Tag(0x0014, 0x220E);
/// CoordinateSystemAxisValues (0014,2210) OB
pub const COORDINATE_SYSTEM_AXIS_VALUES: Tag = Tag(0x0014, 0x2210);
/// CoordinateSystemTransformSequence (0014,2220) SQ
pub const COORDINATE_SYSTEM_TRANSFORM_SEQUENCE: Tag = Tag(0x0014, 0x2220);
/// TransformDescription (0014,2222) ST
pub const TRANSFORM_DESCRIPTION: Tag = Tag(0x0014, 0x2222);
/// TransformNumberOfAxes (0014,2224) IS
pub const TRANSFORM_NUMBER_OF_AXES: Tag = Tag(0x0014, 0x2224);
/// TransformOrderOfAxes (0014,2226) IS
pub const TRANSFORM_ORDER_OF_AXES: Tag = Tag(0x0014, 0x2226);
/// TransformedAxisUnits (0014,2228) CS
pub const TRANSFORMED_AXIS_UNITS: Tag = Tag(0x0014, 0x2228);
/// CoordinateSystemTransformRotationAndScaleMatrix (0014,222A) DS
pub const COORDINATE_SYSTEM_TRANSFORM_ROTATION_AND_SCALE_MATRIX: Tag = Tag(0x0014, 0x222A);
/// CoordinateSystemTransformTranslationMatrix (0014,222C) DS
pub const COORDINATE_SYSTEM_TRANSFORM_TRANSLATION_MATRIX: Tag = Tag(0x0014, 0x222C);
/// InternalDetectorFrameTime (0014,3011) DS
pub const INTERNAL_DETECTOR_FRAME_TIME: Tag = Tag(0x0014, 0x3011);
/// NumberOfFramesIntegrated (0014,3012) DS
pub const NUMBER_OF_FRAMES_INTEGRATED: Tag = Tag(0x0014, 0x3012);
/// DetectorTemperatureSequence (0014,3020) SQ
pub const DETECTOR_TEMPERATURE_SEQUENCE: Tag = Tag(0x0014, 0x3020);
/// SensorName (0014,3022) ST
pub const SENSOR_NAME: Tag = Tag(0x0014, 0x3022);
/// HorizontalOffsetOfSensor (0014,3024) DS
pub const HORIZONTAL_OFFSET_OF_SENSOR: Tag = Tag(0x0014, 0x3024);
/// VerticalOffsetOfSensor (0014,3026) DS
pub const VERTICAL_OFFSET_OF_SENSOR: Tag = Tag(0x0014, 0x3026);
/// SensorTemperature (0014,3028) DS
pub const SENSOR_TEMPERATURE: Tag = Tag(0x0014, 0x3028);
/// DarkCurrentSequence (0014,3040) SQ
pub const DARK_CURRENT_SEQUENCE: Tag = Tag(0x0014, 0x3040);
/// DarkCurrentCounts (0014,3050) OB
pub const DARK_CURRENT_COUNTS: Tag = Tag(0x0014, 0x3050);
/// GainCorrectionReferenceSequence (0014,3060) SQ
pub const GAIN_CORRECTION_REFERENCE_SEQUENCE: Tag = Tag(0x0014, 0x3060);
/// AirCounts (0014,3070) OB
pub const AIR_COUNTS: Tag = Tag(0x0014, 0x3070);
/// KVUsedInGainCalibration (0014,3071) DS
pub const KV_USED_IN_GAIN_CALIBRATION: Tag = Tag(0x0014, 0x3071);
/// MAUsedInGainCalibration (0014,3072) DS
pub const MA_USED_IN_GAIN_CALIBRATION: Tag = Tag(0x0014, 0x3072);
/// NumberOfFramesUsedForIntegration (0014,3073) DS
pub const NUMBER_OF_FRAMES_USED_FOR_INTEGRATION: Tag = Tag(0x0014, 0x3073);
/// FilterMaterialUsedInGainCalibration (0014,3074) LO
pub const FILTER_MATERIAL_USED_IN_GAIN_CALIBRATION: Tag = Tag(0x0014, 0x3074);
/// FilterThicknessUsedInGainCalibration (0014,3075) DS
pub const FILTER_THICKNESS_USED_IN_GAIN_CALIBRATION: Tag = Tag(0x0014, 0x3075);
/// DateOfGainCalibration (0014,3076) DA
pub const DATE_OF_GAIN_CALIBRATION: Tag = Tag(0x0014, 0x3076);
/// TimeOfGainCalibration (0014,3077) TM
pub const TIME_OF_GAIN_CALIBRATION: Tag = Tag(0x0014, 0x3077);
/// BadPixelImage (0014,3080) OB
pub const BAD_PIXEL_IMAGE: Tag = Tag(0x0014, 0x3080);
/// CalibrationNotes (0014,3099) LT
pub const CALIBRATION_NOTES: Tag = Tag(0x0014, 0x3099);
/// PulserEquipmentSequence (0014,4002) SQ
pub const PULSER_EQUIPMENT_SEQUENCE: Tag = Tag(0x0014, 0x4002);
/// PulserType (0014,4004) CS
pub const PULSER_TYPE: Tag = Tag(0x0014, 0x4004);
/// PulserNotes (0014,4006) LT
pub const PULSER_NOTES: Tag = Tag(0x0014, 0x4006);
/// ReceiverEquipmentSequence (0014,4008) SQ
pub const RECEIVER_EQUIPMENT_SEQUENCE: Tag = Tag(0x0014, 0x4008);
/// AmplifierType (0014,400A) CS
pub const AMPLIFIER_TYPE: Tag = Tag(0x0014, 0x400A);
/// ReceiverNotes (0014,400C) LT
pub const RECEIVER_NOTES: Tag = Tag(0x0014, 0x400C);
/// PreAmplifierEquipmentSequence (0014,400E) SQ
pub const PRE_AMPLIFIER_EQUIPMENT_SEQUENCE: Tag = Tag(0x0014, 0x400E);
/// PreAmplifierNotes (0014,400F) LT
pub const PRE_AMPLIFIER_NOTES: Tag = Tag(0x0014, 0x400F);
/// TransmitTransducerSequence (0014,4010) SQ
pub const TRANSMIT_TRANSDUCER_SEQUENCE: Tag = Tag(0x0014, 0x4010);
/// ReceiveTransducerSequence (0014,4011) SQ
pub const RECEIVE_TRANSDUCER_SEQUENCE: Tag = Tag(0x0014, 0x4011);
/// NumberOfElements (0014,4012) US
pub const NUMBER_OF_ELEMENTS: Tag = Tag(0x0014, 0x4012);
/// ElementShape (0014,4013) CS
pub const ELEMENT_SHAPE: Tag = Tag(0x0014, 0x4013);
/// ElementDimensionA (0014,4014) DS
pub const ELEMENT_DIMENSION_A: Tag = Tag(0x0014, 0x4014);
/// ElementDimensionB (0014,4015) DS
pub const ELEMENT_DIMENSION_B: Tag = Tag(0x0014, 0x4015);
/// ElementPitchA (0014,4016) DS
pub const ELEMENT_PITCH_A: Tag = Tag(0x0014, 0x4016);
/// MeasuredBeamDimensionA (0014,4017) DS
pub const MEASURED_BEAM_DIMENSION_A: Tag = Tag(0x0014, 0x4017);
/// MeasuredBeamDimensionB (0014,4018) DS
pub const MEASURED_BEAM_DIMENSION_B: Tag = Tag(0x0014, 0x4018);
/// LocationOfMeasuredBeamDiameter (0014,4019) DS
pub const LOCATION_OF_MEASURED_BEAM_DIAMETER: Tag = Tag(0x0014, 0x4019);
/// NominalFrequency (0014,401A) DS
pub const NOMINAL_FREQUENCY: Tag = Tag(0x0014, 0x401A);
/// MeasuredCenterFrequency (0014,401B) DS
pub const MEASURED_CENTER_FREQUENCY: Tag = Tag(0x0014, 0x401B);
/// MeasuredBandwidth (0014,401C) DS
pub const MEASURED_BANDWIDTH: Tag = Tag(0x0014, 0x401C);
/// ElementPitchB (0014,401D) DS
pub const ELEMENT_PITCH_B: Tag = Tag(0x0014, 0x401D);
/// PulserSettingsSequence (0014,4020) SQ
pub const PULSER_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4020);
/// PulseWidth (0014,4022) DS
pub const PULSE_WIDTH: Tag = Tag(0x0014, 0x4022);
/// ExcitationFrequency (0014,4024) DS
pub const EXCITATION_FREQUENCY: Tag = Tag(0x0014, 0x4024);
/// ModulationType (0014,4026) CS
pub const MODULATION_TYPE: Tag = Tag(0x0014, 0x4026);
/// Damping (0014,4028) DS
pub const DAMPING: Tag = Tag(0x0014, 0x4028);
/// ReceiverSettingsSequence (0014,4030) SQ
pub const RECEIVER_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4030);
/// AcquiredSoundpathLength (0014,4031) DS
pub const ACQUIRED_SOUNDPATH_LENGTH: Tag = Tag(0x0014, 0x4031);
/// AcquisitionCompressionType (0014,4032) CS
pub const ACQUISITION_COMPRESSION_TYPE: Tag = Tag(0x0014, 0x4032);
/// AcquisitionSampleSize (0014,4033) IS
pub const ACQUISITION_SAMPLE_SIZE: Tag = Tag(0x0014, 0x4033);
/// RectifierSmoothing (0014,4034) DS
pub const RECTIFIER_SMOOTHING: Tag = Tag(0x0014, 0x4034);
/// DACSequence (0014,4035) SQ
pub const DAC_SEQUENCE: Tag = Tag(0x0014, 0x4035);
/// DACType (0014,4036) CS
pub const DAC_TYPE: Tag = Tag(0x0014, 0x4036);
/// DACGainPoints (0014,4038) DS
pub const DAC_GAIN_POINTS: Tag = Tag(0x0014, 0x4038);
/// DACTimePoints (0014,403A) DS
pub const DAC_TIME_POINTS: Tag = Tag(0x0014, 0x403A);
/// DACAmplitude (0014,403C) DS
pub const DAC_AMPLITUDE: Tag = Tag(0x0014, 0x403C);
/// PreAmplifierSettingsSequence (0014,4040) SQ
pub const PRE_AMPLIFIER_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4040);
/// TransmitTransducerSettingsSequence (0014,4050) SQ
pub const TRANSMIT_TRANSDUCER_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4050);
/// ReceiveTransducerSettingsSequence (0014,4051) SQ
pub const RECEIVE_TRANSDUCER_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4051);
/// IncidentAngle (0014,4052) DS
pub const INCIDENT_ANGLE: Tag = Tag(0x0014, 0x4052);
/// CouplingTechnique (0014,4054) ST
pub const COUPLING_TECHNIQUE: Tag = Tag(0x0014, 0x4054);
/// CouplingMedium (0014,4056) ST
pub const COUPLING_MEDIUM: Tag = Tag(0x0014, 0x4056);
/// CouplingVelocity (0014,4057) DS
pub const COUPLING_VELOCITY: Tag = Tag(0x0014, 0x4057);
/// ProbeCenterLocationX (0014,4058) DS
pub const PROBE_CENTER_LOCATION_X: Tag = Tag(0x0014, 0x4058);
/// ProbeCenterLocationZ (0014,4059) DS
pub const PROBE_CENTER_LOCATION_Z: Tag = Tag(0x0014, 0x4059);
/// SoundPathLength (0014,405A) DS
pub const SOUND_PATH_LENGTH: Tag = Tag(0x0014, 0x405A);
/// DelayLawIdentifier (0014,405C) ST
pub const DELAY_LAW_IDENTIFIER: Tag = Tag(0x0014, 0x405C);
/// GateSettingsSequence (0014,4060) SQ
pub const GATE_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4060);
/// GateThreshold (0014,4062) DS
pub const GATE_THRESHOLD: Tag = Tag(0x0014, 0x4062);
/// VelocityOfSound (0014,4064) DS
pub const VELOCITY_OF_SOUND: Tag = Tag(0x0014, 0x4064);
/// CalibrationSettingsSequence (0014,4070) SQ
pub const CALIBRATION_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4070);
/// CalibrationProcedure (0014,4072) ST
pub const CALIBRATION_PROCEDURE: Tag = Tag(0x0014, 0x4072);
/// ProcedureVersion (0014,4074) SH
pub const PROCEDURE_VERSION: Tag = Tag(0x0014, 0x4074);
/// ProcedureCreationDate (0014,4076) DA
pub const PROCEDURE_CREATION_DATE: Tag = Tag(0x0014, 0x4076);
/// ProcedureExpirationDate (0014,4078) DA
pub const PROCEDURE_EXPIRATION_DATE: Tag = Tag(0x0014, 0x4078);
/// ProcedureLastModifiedDate (0014,407A) DA
pub const PROCEDURE_LAST_MODIFIED_DATE: Tag = Tag(0x0014, 0x407A);
/// CalibrationTime (0014,407C) TM
pub const CALIBRATION_TIME: Tag = Tag(0x0014, 0x407C);
/// CalibrationDate (0014,407E) DA
pub const CALIBRATION_DATE: Tag = Tag(0x0014, 0x407E);
/// ProbeDriveEquipmentSequence (0014,4080) SQ
pub const PROBE_DRIVE_EQUIPMENT_SEQUENCE: Tag = Tag(0x0014, 0x4080);
/// DriveType (0014,4081) CS
pub const DRIVE_TYPE: Tag = Tag(0x0014, 0x4081);
/// ProbeDriveNotes (0014,4082) LT
pub const PROBE_DRIVE_NOTES: Tag = Tag(0x0014, 0x4082);
/// DriveProbeSequence (0014,4083) SQ
pub const DRIVE_PROBE_SEQUENCE: Tag = Tag(0x0014, 0x4083);
/// ProbeInductance (0014,4084) DS
pub const PROBE_INDUCTANCE: Tag = Tag(0x0014, 0x4084);
/// ProbeResistance (0014,4085) DS
pub const PROBE_RESISTANCE: Tag = Tag(0x0014, 0x4085);
/// ReceiveProbeSequence (0014,4086) SQ
pub const RECEIVE_PROBE_SEQUENCE: Tag = Tag(0x0014, 0x4086);
/// ProbeDriveSettingsSequence (0014,4087) SQ
pub const PROBE_DRIVE_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4087);
/// BridgeResistors (0014,4088) DS
pub const BRIDGE_RESISTORS: Tag = Tag(0x0014, 0x4088);
/// ProbeOrientationAngle (0014,4089) DS
pub const PROBE_ORIENTATION_ANGLE: Tag = Tag(0x0014, 0x4089);
/// UserSelectedGainY (0014,408B) DS
pub const USER_SELECTED_GAIN_Y: Tag = Tag(0x0014, 0x408B);
/// UserSelectedPhase (0014,408C) DS
pub const USER_SELECTED_PHASE: Tag = Tag(0x0014, 0x408C);
/// UserSelectedOffsetX (0014,408D) DS
pub const USER_SELECTED_OFFSET_X: Tag = Tag(0x0014, 0x408D);
/// UserSelectedOffsetY (0014,408E) DS
pub const USER_SELECTED_OFFSET_Y: Tag = Tag(0x0014, 0x408E);
/// ChannelSettingsSequence (0014,4091) SQ
pub const CHANNEL_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x4091);
/// ChannelThreshold (0014,4092) DS
pub const CHANNEL_THRESHOLD: Tag = Tag(0x0014, 0x4092);
/// ScannerSettingsSequence (0014,409A) SQ
pub const SCANNER_SETTINGS_SEQUENCE: Tag = Tag(0x0014, 0x409A);
/// ScanProcedure (0014,409B) ST
pub const SCAN_PROCEDURE: Tag = Tag(0x0014, 0x409B);
/// TranslationRateX (0014,409C) DS
pub const TRANSLATION_RATE_X: Tag = Tag(0x0014, 0x409C);
/// TranslationRateY (0014,409D) DS
pub const TRANSLATION_RATE_Y: Tag = Tag(0x0014, 0x409D);
/// ChannelOverlap (0014,409F) DS
pub const CHANNEL_OVERLAP: Tag = Tag(0x0014, 0x409F);
/// ImageQualityIndicatorType (0014,40A0) LO
pub const IMAGE_QUALITY_INDICATOR_TYPE: Tag = Tag(0x0014, 0x40A0);
/// ImageQualityIndicatorMaterial (0014,40A1) LO
pub const IMAGE_QUALITY_INDICATOR_MATERIAL: Tag = Tag(0x0014, 0x40A1);
/// ImageQualityIndicatorSize (0014,40A2) LO
pub const IMAGE_QUALITY_INDICATOR_SIZE: Tag = Tag(0x0014, 0x40A2);
/// LINACEnergy (0014,5002) IS
pub const LINAC_ENERGY: Tag = Tag(0x0014, 0x5002);
/// LINACOutput (0014,5004) IS
pub const LINAC_OUTPUT: Tag = Tag(0x0014, 0x5004);
/// ActiveAperture (0014,5100) US
pub const ACTIVE_APERTURE: Tag = Tag(0x0014, 0x5100);
/// TotalAperture (0014,5101) DS
pub const TOTAL_APERTURE: Tag = Tag(0x0014, 0x5101);
/// ApertureElevation (0014,5102) DS
pub const APERTURE_ELEVATION: Tag = Tag(0x0014, 0x5102);
/// MainLobeAngle (0014,5103) DS
pub const MAIN_LOBE_ANGLE: Tag = Tag(0x0014, 0x5103);
/// MainRoofAngle (0014,5104) DS
pub const MAIN_ROOF_ANGLE: Tag = Tag(0x0014, 0x5104);
/// ConnectorType (0014,5105) CS
pub const CONNECTOR_TYPE: Tag = Tag(0x0014, 0x5105);
/// WedgeModelNumber (0014,5106) SH
pub const WEDGE_MODEL_NUMBER: Tag = Tag(0x0014, 0x5106);
/// WedgeAngleFloat (0014,5107) DS
pub const WEDGE_ANGLE_FLOAT: Tag = Tag(0x0014, 0x5107);
/// WedgeRoofAngle (0014,5108) DS
pub const WEDGE_ROOF_ANGLE: Tag = Tag(0x0014, 0x5108);
/// WedgeElement1Position (0014,5109) CS
pub const WEDGE_ELEMENT1_POSITION: Tag = Tag(0x0014, 0x5109);
/// WedgeMaterialVelocity (0014,510A) DS
pub const WEDGE_MATERIAL_VELOCITY: Tag = Tag(0x0014, 0x510A);
/// WedgeMaterial (0014,510B) SH
pub const WEDGE_MATERIAL: Tag = Tag(0x0014, 0x510B);
/// WedgeOffsetZ (0014,510C) DS
pub const WEDGE_OFFSET_Z: Tag = Tag(0x0014, 0x510C);
/// WedgeOriginOffsetX (0014,510D) DS
pub const WEDGE_ORIGIN_OFFSET_X: Tag = Tag(0x0014, 0x510D);
/// WedgeTimeDelay (0014,510E) DS
pub const WEDGE_TIME_DELAY: Tag = Tag(0x0014, 0x510E);
/// WedgeName (0014,510F) SH
pub const WEDGE_NAME: Tag = Tag(0x0014, 0x510F);
/// WedgeManufacturerName (0014,5110) SH
pub const WEDGE_MANUFACTURER_NAME: Tag = Tag(0x0014, 0x5110);
/// WedgeDescription (0014,5111) LO
pub const WEDGE_DESCRIPTION: Tag = Tag(0x0014, 0x5111);
/// NominalBeamAngle (0014,5112) DS
pub const NOMINAL_BEAM_ANGLE: Tag = Tag(0x0014, 0x5112);
/// WedgeOffsetX (0014,5113) DS
pub const WEDGE_OFFSET_X: Tag = Tag(0x0014, 0x5113);
/// WedgeOffsetY (0014,5114) DS
pub const WEDGE_OFFSET_Y: Tag = Tag(0x0014, 0x5114);
/// WedgeTotalLength (0014,5115) DS
pub const WEDGE_TOTAL_LENGTH: Tag = Tag(0x0014, 0x5115);
/// WedgeInContactLength (0014,5116) DS
pub const WEDGE_IN_CONTACT_LENGTH: Tag = Tag(0x0014, 0x5116);
/// WedgeFrontGap (0014,5117) DS
pub const WEDGE_FRONT_GAP: Tag = Tag(0x0014, 0x5117);
/// WedgeTotalHeight (0014,5118) DS
pub const WEDGE_TOTAL_HEIGHT: Tag = Tag(0x0014, 0x5118);
/// WedgeFrontHeight (0014,5119) DS
pub const WEDGE_FRONT_HEIGHT: Tag = Tag(0x0014, 0x5119);
/// WedgeRearHeight (0014,511A) DS
pub const WEDGE_REAR_HEIGHT: Tag = Tag(0x0014, 0x511A);
/// WedgeTotalWidth (0014,511B) DS
pub const WEDGE_TOTAL_WIDTH: Tag = Tag(0x0014, 0x511B);
/// WedgeInContactWidth (0014,511C) DS
pub const WEDGE_IN_CONTACT_WIDTH: Tag = Tag(0x0014, 0x511C);
/// WedgeChamferHeight (0014,511D) DS
pub const WEDGE_CHAMFER_HEIGHT: Tag = Tag(0x0014, 0x511D);
/// WedgeCurve (0014,511E) CS
pub const WEDGE_CURVE: Tag = Tag(0x0014, 0x511E);
/// RadiusAlongWedge (0014,511F) DS
pub const RADIUS_ALONG_WEDGE: Tag = Tag(0x0014, 0x511F);
/// ContrastBolusAgent (0018,0010) LO
pub const CONTRAST_BOLUS_AGENT: Tag = Tag(0x0018, 0x0010);
/// ContrastBolusAgentSequence (0018,0012) SQ
pub const CONTRAST_BOLUS_AGENT_SEQUENCE: Tag = Tag(0x0018, 0x0012);
/// ContrastBolusT1Relaxivity (0018,0013) FL
pub const CONTRAST_BOLUS_T1_RELAXIVITY: Tag = Tag(0x0018, 0x0013);
/// ContrastBolusAdministrationRouteSequence (0018,0014) SQ
pub const CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE: Tag = Tag(0x0018, 0x0014);
/// BodyPartExamined (0018,0015) CS
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanningSequence (0018,0020) CS
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SequenceVariant (0018,0021) CS
pub const SEQUENCE_VARIANT: Tag = Tag(0x0018, 0x0021);
/// ScanOptions (0018,0022) CS
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// MRAcquisitionType (0018,0023) CS
pub const MR_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x0023);
/// SequenceName (0018,0024) SH
pub const SEQUENCE_NAME: Tag = Tag(0x0018, 0x0024);
/// AngioFlag (0018,0025) CS
pub const ANGIO_FLAG: Tag = Tag(0x0018, 0x0025);
/// InterventionDrugInformationSequence (0018,0026) SQ
pub const INTERVENTION_DRUG_INFORMATION_SEQUENCE: Tag = Tag(0x0018, 0x0026);
/// InterventionDrugStopTime (0018,0027) TM
pub const INTERVENTION_DRUG_STOP_TIME: Tag = Tag(0x0018, 0x0027);
/// InterventionDrugDose (0018,0028) DS
pub const INTERVENTION_DRUG_DOSE: Tag = Tag(0x0018, 0x0028);
/// InterventionDrugCodeSequence (0018,0029) SQ
pub const INTERVENTION_DRUG_CODE_SEQUENCE: Tag = Tag(0x0018, 0x0029);
/// AdditionalDrugSequence (0018,002A) SQ
pub const ADDITIONAL_DRUG_SEQUENCE: Tag = Tag(0x0018, 0x002A);
/// Radionuclide (0018,0030) LO (retired)
pub const RADIONUCLIDE: Tag = Tag(0x0018, 0x0030);
/// Radiopharmaceutical (0018,0031) LO
pub const RADIOPHARMACEUTICAL: Tag = Tag(0x0018, 0x0031);
/// EnergyWindowCenterline (0018,0032) DS (retired)
pub const ENERGY_WINDOW_CENTERLINE: Tag = Tag(0x0018, 0x0032);
/// EnergyWindowTotalWidth (0018,0033) DS (retired)
pub const ENERGY_WINDOW_TOTAL_WIDTH: Tag = Tag(0x0018, 0x0033);
/// InterventionDrugName (0018,0034) LO
pub const INTERVENTION_DRUG_NAME: Tag = Tag(0x0018, 0x0034);
/// InterventionDrugStartTime (0018,0035) TM
pub const INTERVENTION_DRUG_START_TIME: Tag = Tag(0x0018, 0x0035);
/// InterventionSequence (0018,0036) SQ
pub const INTERVENTION_SEQUENCE: Tag = Tag(0x0018, 0x0036);
/// TherapyType (0018,0037) CS (retired)
pub const THERAPY_TYPE: Tag = Tag(0x0018, 0x0037);
/// InterventionStatus (0018,0038) CS
pub const INTERVENTION_STATUS: Tag = Tag(0x0018, 0x0038);
/// TherapyDescription (0018,0039) CS (retired)
pub const THERAPY_DESCRIPTION: Tag = Tag(0x0018, 0x0039);
/// InterventionDescription (0018,003A) ST
pub const INTERVENTION_DESCRIPTION: Tag = Tag(0x0018, 0x003A);
/// CineRate (0018,0040) IS
pub const CINE_RATE: Tag = Tag(0x0018, 0x0040);
/// InitialCineRunState (0018,0042) CS
pub const INITIAL_CINE_RUN_STATE: Tag = Tag(0x0018, 0x0042);
/// SliceThickness (0018,0050) DS
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// CountsAccumulated (0018,0070) IS
pub const COUNTS_ACCUMULATED: Tag = Tag(0x0018, 0x0070);
/// AcquisitionTerminationCondition (0018,0071) CS
pub const ACQUISITION_TERMINATION_CONDITION: Tag = Tag(0x0018, 0x0071);
/// EffectiveDuration (0018,0072) DS
pub const EFFECTIVE_DURATION: Tag = Tag(0x0018, 0x0072);
/// AcquisitionStartCondition (0018,0073) CS
pub const ACQUISITION_START_CONDITION: Tag = Tag(0x0018, 0x0073);
/// AcquisitionStartConditionData (0018,0074) IS
pub const ACQUISITION_START_CONDITION_DATA: Tag = Tag(0x0018, 0x0074);
/// AcquisitionTerminationConditionData (0018,0075) IS
pub const ACQUISITION_TERMINATION_CONDITION_DATA: Tag = Tag(0x0018, 0x0075);
/// RepetitionTime (0018,0080) DS
pub const REPETITION_TIME: Tag = Tag(0x0018, 0x0080);
/// EchoTime (0018,0081) DS
pub const ECHO_TIME: Tag = Tag(0x0018, 0x0081);
/// InversionTime (0018,0082) DS
pub const INVERSION_TIME: Tag = Tag(0x0018, 0x0082);
/// NumberOfAverages (0018,0083) DS
pub const NUMBER_OF_AVERAGES: Tag = Tag(0x0018, 0x0083);
/// ImagingFrequency (0018,0084) DS
pub const IMAGING_FREQUENCY: Tag = Tag(0x0018, 0x0084);
/// ImagedNucleus (0018,0085) SH
pub const IMAGED_NUCLEUS: Tag = Tag(0x0018, 0x0085);
/// EchoNumbers (0018,0086) IS
pub const ECHO_NUMBERS: Tag = Tag(0x0018, 0x0086);
/// MagneticFieldStrength (0018,0087) DS
pub const MAGNETIC_FIELD_STRENGTH: Tag = Tag(0x0018, 0x0087);
/// SpacingBetweenSlices (0018,0088) DS
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// NumberOfPhaseEncodingSteps (0018,0089) IS
pub const NUMBER_OF_PHASE_ENCODING_STEPS: Tag = Tag(0x0018, 0x0089);
/// DataCollectionDiameter (0018,0090) DS
pub const DATA_COLLECTION_DIAMETER: Tag = Tag(0x0018, 0x0090);
/// EchoTrainLength (0018,0091) IS
pub const ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x0091);
/// PercentSampling (0018,0093) DS
pub const PERCENT_SAMPLING: Tag = Tag(0x0018, 0x0093);
/// PercentPhaseFieldOfView (0018,0094) DS
pub const PERCENT_PHASE_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x0094);
/// PixelBandwidth (0018,0095) DS
pub const PIXEL_BANDWIDTH: Tag = Tag(0x0018, 0x0095);
/// DeviceSerialNumber (0018,1000) LO
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// DeviceUID (0018,1002) UI
pub const DEVICE_UID: Tag = Tag(0x0018, 0x1002);
/// DeviceID (0018,1003) LO
pub const DEVICE_ID: Tag = Tag(0x0018, 0x1003);
/// PlateID (0018,1004) LO
pub const PLATE_ID: Tag = Tag(0x0018, 0x1004);
/// GeneratorID (0018,1005) LO
pub const GENERATOR_ID: Tag = Tag(0x0018, 0x1005);
/// GridID (0018,1006) LO
pub const GRID_ID: Tag = Tag(0x0018, 0x1006);
/// CassetteID (0018,1007) LO
pub const CASSETTE_ID: Tag = Tag(0x0018, 0x1007);
/// GantryID (0018,1008) LO
pub const GANTRY_ID: Tag = Tag(0x0018, 0x1008);
/// UniqueDeviceIdentifier (0018,1009) UT
pub const UNIQUE_DEVICE_IDENTIFIER: Tag = Tag(0x0018, 0x1009);
/// UDISequence (0018,100A) SQ
pub const UDI_SEQUENCE: Tag = Tag(0x0018, 0x100A);
/// ManufacturerDeviceClassUID (0018,100B) UI
pub const MANUFACTURER_DEVICE_CLASS_UID: Tag = Tag(0x0018, 0x100B);
/// SecondaryCaptureDeviceID (0018,1010) LO
pub const SECONDARY_CAPTURE_DEVICE_ID: Tag = Tag(0x0018, 0x1010);
/// HardcopyCreationDeviceID (0018,1011) LO (retired)
pub const HARDCOPY_CREATION_DEVICE_ID: Tag = Tag(0x0018, 0x1011);
/// DateOfSecondaryCapture (0018,1012) DA
pub const DATE_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1012);
/// TimeOfSecondaryCapture (0018,1014) TM
pub const TIME_OF_SECONDARY_CAPTURE: Tag = Tag(0x0018, 0x1014);
/// SecondaryCaptureDeviceManufacturer (0018,1016) LO
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1016);
/// HardcopyDeviceManufacturer (0018,1017) LO (retired)
pub const HARDCOPY_DEVICE_MANUFACTURER: Tag = Tag(0x0018, 0x1017);
/// SecondaryCaptureDeviceManufacturerModelName (0018,1018) LO
pub const SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x1018);
/// SecondaryCaptureDeviceSoftwareVersions (0018,1019) LO
pub const SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1019);
/// HardcopyDeviceSoftwareVersion (0018,101A) LO (retired)
pub const HARDCOPY_DEVICE_SOFTWARE_VERSION: Tag = Tag(0x0018, 0x101A);
/// HardcopyDeviceManufacturerModelName (0018,101B) LO (retired)
pub const HARDCOPY_DEVICE_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x101B);
/// SoftwareVersions (0018,1020) LO
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// VideoImageFormatAcquired (0018,1022) SH
pub const VIDEO_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1022);
/// DigitalImageFormatAcquired (0018,1023) LO
pub const DIGITAL_IMAGE_FORMAT_ACQUIRED: Tag = Tag(0x0018, 0x1023);
/// ProtocolName (0018,1030) LO
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ContrastBolusRoute (0018,1040) LO
pub const CONTRAST_BOLUS_ROUTE: Tag = Tag(0x0018, 0x1040);
/// ContrastBolusVolume (0018,1041) DS
pub const CONTRAST_BOLUS_VOLUME: Tag = Tag(0x0018, 0x1041);
/// ContrastBolusStartTime (0018,1042) TM
pub const CONTRAST_BOLUS_START_TIME: Tag = Tag(0x0018, 0x1042);
/// ContrastBolusStopTime (0018,1043) TM
pub const CONTRAST_BOLUS_STOP_TIME: Tag = Tag(0x0018, 0x1043);
/// ContrastBolusTotalDose (0018,1044) DS
pub const CONTRAST_BOLUS_TOTAL_DOSE: Tag = Tag(0x0018, 0x1044);
/// SyringeCounts (0018,1045) IS
pub const SYRINGE_COUNTS: Tag = Tag(0x0018, 0x1045);
/// ContrastFlowRate (0018,1046) DS
pub const CONTRAST_FLOW_RATE: Tag = Tag(0x0018, 0x1046);
/// ContrastFlowDuration (0018,1047) DS
pub const CONTRAST_FLOW_DURATION: Tag = Tag(0x0018, 0x1047);
/// ContrastBolusIngredient (0018,1048) CS
pub const CONTRAST_BOLUS_INGREDIENT: Tag = Tag(0x0018, 0x1048);
/// ContrastBolusIngredientConcentration (0018,1049) DS
pub const CONTRAST_BOLUS_INGREDIENT_CONCENTRATION: Tag = Tag(0x0018, 0x1049);
/// SpatialResolution (0018,1050) DS
pub const SPATIAL_RESOLUTION: Tag = Tag(0x0018, 0x1050);
/// TriggerTime (0018,1060) DS
pub const TRIGGER_TIME: Tag = Tag(0x0018, 0x1060);
/// TriggerSourceOrType (0018,1061) LO
pub const TRIGGER_SOURCE_OR_TYPE: Tag = Tag(0x0018, 0x1061);
/// NominalInterval (0018,1062) IS
pub const NOMINAL_INTERVAL: Tag = Tag(0x0018, 0x1062);
/// FrameTime (0018,1063) DS
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);
/// CardiacFramingType (0018,1064) LO
pub const CARDIAC_FRAMING_TYPE: Tag = Tag(0x0018, 0x1064);
/// FrameTimeVector (0018,1065) DS
pub const FRAME_TIME_VECTOR: Tag = Tag(0x0018, 0x1065);
/// FrameDelay (0018,1066) DS
pub const FRAME_DELAY: Tag = Tag(0x0018, 0x1066);
/// ImageTriggerDelay (0018,1067) DS
pub const IMAGE_TRIGGER_DELAY: Tag = Tag(0x0018, 0x1067);
/// MultiplexGroupTimeOffset (0018,1068) DS
pub const MULTIPLEX_GROUP_TIME_OFFSET: Tag = Tag(0x0018, 0x1068);
/// TriggerTimeOffset (0018,1069) DS
pub const TRIGGER_TIME_OFFSET: Tag = Tag(0x0018, 0x1069);
/// SynchronizationTrigger (0018,106A) CS
pub const SYNCHRONIZATION_TRIGGER: Tag = Tag(0x0018, 0x106A);
/// SynchronizationChannel (0018,106C) US
pub const SYNCHRONIZATION_CHANNEL: Tag = Tag(0x0018, 0x106C);
/// TriggerSamplePosition (0018,106E) UL
pub const TRIGGER_SAMPLE_POSITION: Tag = Tag(0x0018, 0x106E);
/// RadiopharmaceuticalRoute (0018,1070) LO
pub const RADIOPHARMACEUTICAL_ROUTE: Tag = Tag(0x0018, 0x1070);
/// RadiopharmaceuticalVolume (0018,1071) DS
pub const RADIOPHARMACEUTICAL_VOLUME: Tag = Tag(0x0018, 0x1071);
/// RadiopharmaceuticalStartTime (0018,1072) TM
pub const RADIOPHARMACEUTICAL_START_TIME: Tag = Tag(0x0018, 0x1072);
/// RadiopharmaceuticalStopTime (0018,1073) TM
pub const RADIOPHARMACEUTICAL_STOP_TIME: Tag = Tag(0x0018, 0x1073);
/// RadionuclideTotalDose (0018,1074) DS
pub const RADIONUCLIDE_TOTAL_DOSE: Tag = Tag(0x0018, 0x1074);
/// RadionuclideHalfLife (0018,1075) DS
pub const RADIONUCLIDE_HALF_LIFE: Tag = Tag(0x0018, 0x1075);
/// RadionuclidePositronFraction (0018,1076) DS
pub const RADIONUCLIDE_POSITRON_FRACTION: Tag = Tag(0x0018, 0x1076);
/// RadiopharmaceuticalSpecificActivity (0018,1077) DS
pub const RADIOPHARMACEUTICAL_SPECIFIC_ACTIVITY: Tag = Tag(0x0018, 0x1077);
/// RadiopharmaceuticalStartDateTime (0018,1078) DT
pub const RADIOPHARMACEUTICAL_START_DATE_TIME: Tag = Tag(0x0018, 0x1078);
/// RadiopharmaceuticalStopDateTime (0018,1079) DT
pub const RADIOPHARMACEUTICAL_STOP_DATE_TIME: Tag = Tag(0x0018, 0x1079);
/// BeatRejectionFlag (0018,1080) CS
pub const BEAT_REJECTION_FLAG: Tag = Tag(0x0018, 0x1080);
/// LowRRValue (0018,1081) IS
pub const LOW_RR_VALUE: Tag = Tag(0x0018, 0x1081);
/// HighRRValue (0018,1082) IS
pub const HIGH_RR_VALUE: Tag = Tag(0x0018, 0x1082);
/// IntervalsAcquired (0018,1083) IS
pub const INTERVALS_ACQUIRED: Tag = Tag(0x0018, 0x1083);
/// IntervalsRejected (0018,1084) IS
pub const INTERVALS_REJECTED: Tag = Tag(0x0018, 0x1084);
/// PVCRejection (0018,1085) LO
pub const PVC_REJECTION: Tag = Tag(0x0018, 0x1085);
/// SkipBeats (0018,1086) IS
pub const SKIP_BEATS: Tag = Tag(0x0018, 0x1086);
/// HeartRate (0018,1088) IS
pub const HEART_RATE: Tag = Tag(0x0018, 0x1088);
/// CardiacNumberOfImages (0018,1090) IS
pub const CARDIAC_NUMBER_OF_IMAGES: Tag = Tag(0x0018, 0x1090);
/// TriggerWindow (0018,1094) IS
pub const TRIGGER_WINDOW: Tag = Tag(0x0018, 0x1094);
/// ReconstructionDiameter (0018,1100) DS
pub const RECONSTRUCTION_DIAMETER: Tag = Tag(0x0018, 0x1100);
/// DistanceSourceToDetector (0018,1110) DS
pub const DISTANCE_SOURCE_TO_DETECTOR: Tag = Tag(0x0018, 0x1110);
/// DistanceSourceToPatient (0018,1111) DS
pub const DISTANCE_SOURCE_TO_PATIENT: Tag = Tag(0x0018, 0x1111);
/// EstimatedRadiographicMagnificationFactor (0018,1114) DS
pub const ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR: Tag = Tag(0x0018, 0x1114);
/// GantryDetectorTilt (0018,1120) DS
pub const GANTRY_DETECTOR_TILT: Tag = Tag(0x0018, 0x1120);
/// GantryDetectorSlew (0018,1121) DS
pub const GANTRY_DETECTOR_SLEW: Tag = Tag(0x0018, 0x1121);
/// TableHeight (0018,1130) DS
pub const TABLE_HEIGHT: Tag = Tag(0x0018, 0x1130);
/// TableTraverse (0018,1131) DS
pub const TABLE_TRAVERSE: Tag = Tag(0x0018, 0x1131);
/// TableMotion (0018,1134) CS
pub const TABLE_MOTION: Tag = Tag(0x0018, 0x1134);
/// TableVerticalIncrement (0018,1135) DS
pub const TABLE_VERTICAL_INCREMENT: Tag = Tag(0x0018, 0x1135);
/// TableLateralIncrement (0018,1136) DS
pub const TABLE_LATERAL_INCREMENT: Tag = Tag(0x0018, 0x1136);
/// TableLongitudinalIncrement (0018,1137) DS
pub const TABLE_LONGITUDINAL_INCREMENT: Tag = Tag(0x0018, 0x1137);
/// TableAngle (0018,1138) DS
pub const TABLE_ANGLE: Tag = Tag(0x0018, 0x1138);
/// TableType (0018,113A) CS
pub const TABLE_TYPE: Tag = Tag(0x0018, 0x113A);
/// RotationDirection (0018,1140) CS
pub const ROTATION_DIRECTION: Tag = Tag(0x0018, 0x1140);
/// AngularPosition (0018,1141) DS (retired)
pub const ANGULAR_POSITION: Tag = Tag(0x0018, 0x1141);
/// RadialPosition (0018,1142) DS
pub const RADIAL_POSITION: Tag = Tag(0x0018, 0x1142);
/// ScanArc (0018,1143) DS
pub const SCAN_ARC: Tag = Tag(0x0018, 0x1143);
/// AngularStep (0018,1144) DS
pub const ANGULAR_STEP: Tag = Tag(0x0018, 0x1144);
/// CenterOfRotationOffset (0018,1145) DS
pub const CENTER_OF_ROTATION_OFFSET: Tag = Tag(0x0018, 0x1145);
/// RotationOffset (0018,1146) DS (retired)
pub const ROTATION_OFFSET: Tag = Tag(0x0018, 0x1146);
/// FieldOfViewShape (0018,1147) CS
pub const FIELD_OF_VIEW_SHAPE: Tag = Tag(0x0018, 0x1147);
/// FieldOfViewDimensions (0018,1149) IS
pub const FIELD_OF_VIEW_DIMENSIONS: Tag = Tag(0x0018, 0x1149);
/// ExposureTime (0018,1150) IS
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Exposure (0018,1152) IS
pub const EXPOSURE: Tag = Tag(0x0018, 0x1152);
/// ExposureInuAs (0018,1153) IS
pub const EXPOSURE_INU_AS: Tag = Tag(0x0018, 0x1153);
/// AveragePulseWidth (0018,1154) DS
pub const AVERAGE_PULSE_WIDTH: Tag = Tag(0x0018, 0x1154);
/// RadiationSetting (0018,1155) CS
pub const RADIATION_SETTING: Tag = Tag(0x0018, 0x1155);
/// RectificationType (0018,1156) CS
pub const RECTIFICATION_TYPE: Tag = Tag(0x0018, 0x1156);
/// RadiationMode (0018,115A) CS
pub const RADIATION_MODE: Tag = Tag(0x0018, 0x115A);
/// ImageAndFluoroscopyAreaDoseProduct (0018,115E) DS
pub const IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x115E);
/// FilterType (0018,1160) SH
pub const FILTER_TYPE: Tag = Tag(0x0018, 0x1160);
/// TypeOfFilters (0018,1161) LO
pub const TYPE_OF_FILTERS: Tag = Tag(0x0018, 0x1161);
/// IntensifierSize (0018,1162) DS
pub const INTENSIFIER_SIZE: Tag = Tag(0x0018, 0x1162);
/// ImagerPixelSpacing (0018,1164) DS
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// Grid (0018,1166) CS
pub const GRID: Tag = Tag(0x0018, 0x1166);
/// GeneratorPower (0018,1170) IS
pub const GENERATOR_POWER: Tag = Tag(0x0018, 0x1170);
/// CollimatorGridName (0018,1180) SH
pub const COLLIMATOR_GRID_NAME: Tag = Tag(0x0018, 0x1180);
/// CollimatorType (0018,1181) CS
pub const COLLIMATOR_TYPE: Tag = Tag(0x0018, 0x1181);
/// FocalDistance (0018,1182) IS
pub const FOCAL_DISTANCE: Tag = Tag(0x0018, 0x1182);
/// XFocusCenter (0018,1183) DS
pub const X_FOCUS_CENTER: Tag = Tag(0x0018, 0x1183);
/// YFocusCenter (0018,1184) DS
pub const Y_FOCUS_CENTER: Tag = Tag(0x0018, 0x1184);
/// FocalSpots (0018,1190) DS
pub const FOCAL_SPOTS: Tag = Tag(0x0018, 0x1190);
/// AnodeTargetMaterial (0018,1191) CS
pub const ANODE_TARGET_MATERIAL: Tag = Tag(0x0018, 0x1191);
/// BodyPartThickness (0018,11A0) DS
pub const BODY_PART_THICKNESS: Tag = Tag(0x0018, 0x11A0);
/// CompressionForce (0018,11A2) DS
pub const COMPRESSION_FORCE: Tag = Tag(0x0018, 0x11A2);
/// CompressionPressure (0018,11A3) DS
pub const COMPRESSION_PRESSURE: Tag = Tag(0x0018, 0x11A3);
/// PaddleDescription (0018,11A4) LO
pub const PADDLE_DESCRIPTION: Tag = Tag(0x0018, 0x11A4);
/// CompressionContactArea (0018,11A5) DS
pub const COMPRESSION_CONTACT_AREA: Tag = Tag(0x0018, 0x11A5);
/// AcquisitionMode (0018,11B0) LO
pub const ACQUISITION_MODE: Tag = Tag(0x0018, 0x11B0);
/// DoseModeName (0018,11B1) LO
pub const DOSE_MODE_NAME: Tag = Tag(0x0018, 0x11B1);
/// AcquiredSubtractionMaskFlag (0018,11B2) CS
pub const ACQUIRED_SUBTRACTION_MASK_FLAG: Tag = Tag(0x0018, 0x11B2);
/// FluoroscopyPersistenceFlag (0018,11B3) CS
pub const FLUOROSCOPY_PERSISTENCE_FLAG: Tag = Tag(0x0018, 0x11B3);
/// FluoroscopyLastImageHoldPersistenceFlag (0018,11B4) CS
pub const FLUOROSCOPY_LAST_IMAGE_HOLD_PERSISTENCE_FLAG: Tag = Tag(0x0018, 0x11B4);
/// UpperLimitNumberOfPersistentFluoroscopyFrames (0018,11B5) IS
pub const UPPER_LIMIT_NUMBER_OF_PERSISTENT_FLUOROSCOPY_FRAMES: Tag = Tag(0x0018, 0x11B5);
/// ContrastBolusAutoInjectionTriggerFlag (0018,11B6) CS
pub const CONTRAST_BOLUS_AUTO_INJECTION_TRIGGER_FLAG: Tag = Tag(0x0018, 0x11B6);
/// ContrastBolusInjectionDelay (0018,11B7) FD
pub const CONTRAST_BOLUS_INJECTION_DELAY: Tag = Tag(0x0018, 0x11B7);
/// XAAcquisitionPhaseDetailsSequence (0018,11B8) SQ
pub const XA_ACQUISITION_PHASE_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x11B8);
/// XAAcquisitionFrameRate (0018,11B9) FD
pub const XA_ACQUISITION_FRAME_RATE: Tag = Tag(0x0018, 0x11B9);
/// XAPlaneDetailsSequence (0018,11BA) SQ
pub const XA_PLANE_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x11BA);
/// AcquisitionFieldOfViewLabel (0018,11BB) LO
pub const ACQUISITION_FIELD_OF_VIEW_LABEL: Tag = Tag(0x0018, 0x11BB);
/// XRayFilterDetailsSequence (0018,11BC) SQ
pub const X_RAY_FILTER_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x11BC);
/// XAAcquisitionDuration (0018,11BD) FD
pub const XA_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x11BD);
/// ReconstructionPipelineType (0018,11BE) CS
pub const RECONSTRUCTION_PIPELINE_TYPE: Tag = Tag(0x0018, 0x11BE);
/// ImageFilterDetailsSequence (0018,11BF) SQ
pub const IMAGE_FILTER_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x11BF);
/// AppliedMaskSubtractionFlag (0018,11C0) CS
pub const APPLIED_MASK_SUBTRACTION_FLAG: Tag = Tag(0x0018, 0x11C0);
/// RequestedSeriesDescriptionCodeSequence (0018,11C1) SQ
pub const REQUESTED_SERIES_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0018, 0x11C1);
/// DateOfLastCalibration (0018,1200) DA
pub const DATE_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1200);
/// TimeOfLastCalibration (0018,1201) TM
pub const TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1201);
/// DateTimeOfLastCalibration (0018,1202) DT
pub const DATE_TIME_OF_LAST_CALIBRATION: Tag = Tag(0x0018, 0x1202);
/// CalibrationDateTime (0018,1203) DT
pub const CALIBRATION_DATE_TIME: Tag = Tag(0x0018, 0x1203);
/// DateOfManufacture (0018,1204) DA
pub const DATE_OF_MANUFACTURE: Tag = Tag(0x0018, 0x1204);
/// DateOfInstallation (0018,1205) DA
pub const DATE_OF_INSTALLATION: Tag = Tag(0x0018, 0x1205);
/// ConvolutionKernel (0018,1210) SH
pub const CONVOLUTION_KERNEL: Tag = Tag(0x0018, 0x1210);
/// UpperLowerPixelValues (0018,1240) IS (retired)
pub const UPPER_LOWER_PIXEL_VALUES: Tag = Tag(0x0018, 0x1240);
/// ActualFrameDuration (0018,1242) IS
pub const ACTUAL_FRAME_DURATION: Tag = Tag(0x0018, 0x1242);
/// CountRate (0018,1243) IS
pub const COUNT_RATE: Tag = Tag(0x0018, 0x1243);
/// PreferredPlaybackSequencing (0018,1244) US
pub const PREFERRED_PLAYBACK_SEQUENCING: Tag = Tag(0x0018, 0x1244);
/// ReceiveCoilName (0018,1250) SH
pub const RECEIVE_COIL_NAME: Tag = Tag(0x0018, 0x1250);
/// TransmitCoilName (0018,1251) SH
pub const TRANSMIT_COIL_NAME: Tag = Tag(0x0018, 0x1251);
/// PlateType (0018,1260) SH
pub const PLATE_TYPE: Tag = Tag(0x0018, 0x1260);
/// PhosphorType (0018,1261) LO
pub const PHOSPHOR_TYPE: Tag = Tag(0x0018, 0x1261);
/// WaterEquivalentDiameter (0018,1271) FD
pub const WATER_EQUIVALENT_DIAMETER: Tag = Tag(0x0018, 0x1271);
/// WaterEquivalentDiameterCalculationMethodCodeSequence (0018,1272) SQ
pub const WATER_EQUIVALENT_DIAMETER_CALCULATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0018, 0x1272);
/// ScanVelocity (0018,1300) DS
pub const SCAN_VELOCITY: Tag = Tag(0x0018, 0x1300);
/// WholeBodyTechnique (0018,1301) CS
pub const WHOLE_BODY_TECHNIQUE: Tag = Tag(0x0018, 0x1301);
/// ScanLength (0018,1302) IS
pub const SCAN_LENGTH: Tag = Tag(0x0018, 0x1302);
/// AcquisitionMatrix (0018,1310) US
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// InPlanePhaseEncodingDirection (0018,1312) CS
pub const IN_PLANE_PHASE_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x1312);
/// FlipAngle (0018,1314) DS
pub const FLIP_ANGLE: Tag = Tag(0x0018, 0x1314);
/// VariableFlipAngleFlag (0018,1315) CS
pub const VARIABLE_FLIP_ANGLE_FLAG: Tag = Tag(0x0018, 0x1315);
/// SAR (0018,1316) DS
pub const SAR: Tag = Tag(0x0018, 0x1316);
/// dBdt (0018,1318) DS
pub const D_BDT: Tag = Tag(0x0018, 0x1318);
/// B1rms (0018,1320) FL
pub const B1RMS: Tag = Tag(0x0018, 0x1320);
/// AcquisitionDeviceProcessingDescription (0018,1400) LO
pub const ACQUISITION_DEVICE_PROCESSING_DESCRIPTION: Tag = Tag(0x0018, 0x1400);
/// AcquisitionDeviceProcessingCode (0018,1401) LO
pub const ACQUISITION_DEVICE_PROCESSING_CODE: Tag = Tag(0x0018, 0x1401);
/// CassetteOrientation (0018,1402) CS
pub const CASSETTE_ORIENTATION: Tag = Tag(0x0018, 0x1402);
/// CassetteSize (0018,1403) CS
pub const CASSETTE_SIZE: Tag = Tag(0x0018, 0x1403);
/// ExposuresOnPlate (0018,1404) US
pub const EXPOSURES_ON_PLATE: Tag = Tag(0x0018, 0x1404);
/// RelativeXRayExposure (0018,1405) IS
pub const RELATIVE_X_RAY_EXPOSURE: Tag = Tag(0x0018, 0x1405);
/// ExposureIndex (0018,1411) DS
pub const EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1411);
/// TargetExposureIndex (0018,1412) DS
pub const TARGET_EXPOSURE_INDEX: Tag = Tag(0x0018, 0x1412);
/// DeviationIndex (0018,1413) DS
pub const DEVIATION_INDEX: Tag = Tag(0x0018, 0x1413);
/// ColumnAngulation (0018,1450) DS
pub const COLUMN_ANGULATION: Tag = Tag(0x0018, 0x1450);
/// TomoLayerHeight (0018,1460) DS
pub const TOMO_LAYER_HEIGHT: Tag = Tag(0x0018, 0x1460);
/// TomoAngle (0018,1470) DS
pub const TOMO_ANGLE: Tag = Tag(0x0018, 0x1470);
/// TomoTime (0018,1480) DS
pub const TOMO_TIME: Tag = Tag(0x0018, 0x1480);
/// TomoType (0018,1490) CS
pub const TOMO_TYPE: Tag = Tag(0x0018, 0x1490);
/// TomoClass (0018,1491) CS
pub const TOMO_CLASS: Tag = Tag(0x0018, 0x1491);
/// NumberOfTomosynthesisSourceImages (0018,1495) IS
pub const NUMBER_OF_TOMOSYNTHESIS_SOURCE_IMAGES: Tag = Tag(0x0018, 0x1495);
/// PositionerMotion (0018,1500) CS
pub const POSITIONER_MOTION: Tag = Tag(0x0018, 0x1500);
/// PositionerType (0018,1508) CS
pub const POSITIONER_TYPE: Tag = Tag(0x0018, 0x1508);
/// PositionerPrimaryAngle (0018,1510) DS
pub const POSITIONER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1510);
/// PositionerSecondaryAngle (0018,1511) DS
pub const POSITIONER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1511);
/// PositionerPrimaryAngleIncrement (0018,1520) DS
pub const POSITIONER_PRIMARY_ANGLE_INCREMENT: Tag = Tag(0x0018, 0x1520);
/// PositionerSecondaryAngleIncrement (0018,1521) DS
pub const POSITIONER_SECONDARY_ANGLE_INCREMENT: Tag = Tag(0x0018, 0x1521);
/// DetectorPrimaryAngle (0018,1530) DS
pub const DETECTOR_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x1530);
/// DetectorSecondaryAngle (0018,1531) DS
pub const DETECTOR_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x1531);
/// ShutterShape (0018,1600) CS
pub const SHUTTER_SHAPE: Tag = Tag(0x0018, 0x1600);
/// ShutterLeftVerticalEdge (0018,1602) IS
pub const SHUTTER_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1602);
/// ShutterRightVerticalEdge (0018,1604) IS
pub const SHUTTER_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1604);
/// ShutterUpperHorizontalEdge (0018,1606) IS
pub const SHUTTER_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1606);
/// ShutterLowerHorizontalEdge (0018,1608) IS
pub const SHUTTER_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1608);
/// CenterOfCircularShutter (0018,1610) IS
pub const CENTER_OF_CIRCULAR_SHUTTER: Tag = Tag(0x0018, 0x1610);
/// RadiusOfCircularShutter (0018,1612) IS
pub const RADIUS_OF_CIRCULAR_SHUTTER: Tag = Tag(0x0018, 0x1612);
/// VerticesOfThePolygonalShutter (0018,1620) IS
pub const VERTICES_OF_THE_POLYGONAL_SHUTTER: Tag = Tag(0x0018, 0x1620);
/// ShutterPresentationValue (0018,1622) US
pub const SHUTTER_PRESENTATION_VALUE: Tag = Tag(0x0018, 0x1622);
/// ShutterOverlayGroup (0018,1623) US
pub const SHUTTER_OVERLAY_GROUP: Tag = Tag(0x0018, 0x1623);
/// ShutterPresentationColorCIELabValue (0018,1624) US
pub const SHUTTER_PRESENTATION_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0018, 0x1624);
/// OutlineShapeType (0018,1630) CS
pub const OUTLINE_SHAPE_TYPE: Tag = Tag(0x0018, 0x1630);
/// OutlineLeftVerticalEdge (0018,1631) FD
pub const OUTLINE_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1631);
/// OutlineRightVerticalEdge (0018,1632) FD
pub const OUTLINE_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1632);
/// OutlineUpperHorizontalEdge (0018,1633) FD
pub const OUTLINE_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1633);
/// OutlineLowerHorizontalEdge (0018,1634) FD
pub const OUTLINE_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1634);
/// CenterOfCircularOutline (0018,1635) FD
pub const CENTER_OF_CIRCULAR_OUTLINE: Tag = Tag(0x0018, 0x1635);
/// DiameterOfCircularOutline (0018,1636) FD
pub const DIAMETER_OF_CIRCULAR_OUTLINE: Tag = Tag(0x0018, 0x1636);
/// NumberOfPolygonalVertices (0018,1637) UL
pub const NUMBER_OF_POLYGONAL_VERTICES: Tag = Tag(0x0018, 0x1637);
/// VerticesOfThePolygonalOutline (0018,1638) OF
pub const VERTICES_OF_THE_POLYGONAL_OUTLINE: Tag = Tag(0x0018, 0x1638);
/// CollimatorShape (0018,1700) CS
pub const COLLIMATOR_SHAPE: Tag = Tag(0x0018, 0x1700);
/// CollimatorLeftVerticalEdge (0018,1702) IS
pub const COLLIMATOR_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1702);
/// CollimatorRightVerticalEdge (0018,1704) IS
pub const COLLIMATOR_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x1704);
/// CollimatorUpperHorizontalEdge (0018,1706) IS
pub const COLLIMATOR_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1706);
/// CollimatorLowerHorizontalEdge (0018,1708) IS
pub const COLLIMATOR_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x1708);
/// CenterOfCircularCollimator (0018,1710) IS
pub const CENTER_OF_CIRCULAR_COLLIMATOR: Tag = Tag(0x0018, 0x1710);
/// RadiusOfCircularCollimator (0018,1712) IS
pub const RADIUS_OF_CIRCULAR_COLLIMATOR: Tag = Tag(0x0018, 0x1712);
/// VerticesOfThePolygonalCollimator (0018,1720) IS
pub const VERTICES_OF_THE_POLYGONAL_COLLIMATOR: Tag = Tag(0x0018, 0x1720);
/// AcquisitionTimeSynchronized (0018,1800) CS
pub const ACQUISITION_TIME_SYNCHRONIZED: Tag = Tag(0x0018, 0x1800);
/// TimeSource (0018,1801) SH
pub const TIME_SOURCE: Tag = Tag(0x0018, 0x1801);
/// TimeDistributionProtocol (0018,1802) CS
pub const TIME_DISTRIBUTION_PROTOCOL: Tag = Tag(0x0018, 0x1802);
/// NTPSourceAddress (0018,1803) LO
pub const NTP_SOURCE_ADDRESS: Tag = Tag(0x0018, 0x1803);
/// PageNumberVector (0018,2001) IS
pub const PAGE_NUMBER_VECTOR: Tag = Tag(0x0018, 0x2001);
/// FrameLabelVector (0018,2002) SH
pub const FRAME_LABEL_VECTOR: Tag = Tag(0x0018, 0x2002);
/// FramePrimaryAngleVector (0018,2003) DS
pub const FRAME_PRIMARY_ANGLE_VECTOR: Tag = Tag(0x0018, 0x2003);
/// FrameSecondaryAngleVector (0018,2004) DS
pub const FRAME_SECONDARY_ANGLE_VECTOR: Tag = Tag(0x0018, 0x2004);
/// SliceLocationVector (0018,2005) DS
pub const SLICE_LOCATION_VECTOR: Tag = Tag(0x0018, 0x2005);
/// DisplayWindowLabelVector (0018,2006) SH
pub const DISPLAY_WINDOW_LABEL_VECTOR: Tag = Tag(0x0018, 0x2006);
/// NominalScannedPixelSpacing (0018,2010) DS
pub const NOMINAL_SCANNED_PIXEL_SPACING: Tag = Tag(0x0018, 0x2010);
/// DigitizingDeviceTransportDirection (0018,2020) CS
pub const DIGITIZING_DEVICE_TRANSPORT_DIRECTION: Tag = Tag(0x0018, 0x2020);
/// RotationOfScannedFilm (0018,2030) DS
pub const ROTATION_OF_SCANNED_FILM: Tag = Tag(0x0018, 0x2030);
/// BiopsyTargetSequence (0018,2041) SQ
pub const BIOPSY_TARGET_SEQUENCE: Tag = Tag(0x0018, 0x2041);
/// TargetUID (0018,2042) UI
pub const TARGET_UID: Tag = Tag(0x0018, 0x2042);
/// LocalizingCursorPosition (0018,2043) FL
pub const LOCALIZING_CURSOR_POSITION: Tag = Tag(0x0018, 0x2043);
/// CalculatedTargetPosition (0018,2044) FL
pub const CALCULATED_TARGET_POSITION: Tag = Tag(0x0018, 0x2044);
/// TargetLabel (0018,2045) SH
pub const TARGET_LABEL: Tag = Tag(0x0018, 0x2045);
/// DisplayedZValue (0018,2046) FL
pub const DISPLAYED_Z_VALUE: Tag = Tag(0x0018, 0x2046);
/// IVUSAcquisition (0018,3100) CS
pub const IVUS_ACQUISITION: Tag = Tag(0x0018, 0x3100);
/// IVUSPullbackRate (0018,3101) DS
pub const IVUS_PULLBACK_RATE: Tag = Tag(0x0018, 0x3101);
/// IVUSGatedRate (0018,3102) DS
pub const IVUS_GATED_RATE: Tag = Tag(0x0018, 0x3102);
/// IVUSPullbackStartFrameNumber (0018,3103) IS
pub const IVUS_PULLBACK_START_FRAME_NUMBER: Tag = Tag(0x0018, 0x3103);
/// IVUSPullbackStopFrameNumber (0018,3104) IS
pub const IVUS_PULLBACK_STOP_FRAME_NUMBER: Tag = Tag(0x0018, 0x3104);
/// LesionNumber (0018,3105) IS
pub const LESION_NUMBER: Tag = Tag(0x0018, 0x3105);
/// AcquisitionComments (0018,4000) LT (retired)
pub const ACQUISITION_COMMENTS: Tag = Tag(0x0018, 0x4000);
/// OutputPower (0018,5000) SH
pub const OUTPUT_POWER: Tag = Tag(0x0018, 0x5000);
/// TransducerData (0018,5010) LO
pub const TRANSDUCER_DATA: Tag = Tag(0x0018, 0x5010);
/// TransducerIdentificationSequence (0018,5011) SQ
pub const TRANSDUCER_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x5011);
/// FocusDepth (0018,5012) DS
pub const FOCUS_DEPTH: Tag = Tag(0x0018, 0x5012);
/// ProcessingFunction (0018,5020) LO
pub const PROCESSING_FUNCTION: Tag = Tag(0x0018, 0x5020);
/// PostprocessingFunction (0018,5021) LO (retired)
pub const POSTPROCESSING_FUNCTION: Tag = Tag(0x0018, 0x5021);
/// MechanicalIndex (0018,5022) DS
pub const MECHANICAL_INDEX: Tag = Tag(0x0018, 0x5022);
/// BoneThermalIndex (0018,5024) DS
pub const BONE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5024);
/// CranialThermalIndex (0018,5026) DS
pub const CRANIAL_THERMAL_INDEX: Tag = Tag(0x0018, 0x5026);
/// SoftTissueThermalIndex (0018,5027) DS
pub const SOFT_TISSUE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5027);
/// SoftTissueFocusThermalIndex (0018,5028) DS
pub const SOFT_TISSUE_FOCUS_THERMAL_INDEX: Tag = Tag(0x0018, 0x5028);
/// SoftTissueSurfaceThermalIndex (0018,5029) DS
pub const SOFT_TISSUE_SURFACE_THERMAL_INDEX: Tag = Tag(0x0018, 0x5029);
/// DynamicRange (0018,5030) DS (retired)
pub const DYNAMIC_RANGE: Tag = Tag(0x0018, 0x5030);
/// TotalGain (0018,5040) DS (retired)
pub const TOTAL_GAIN: Tag = Tag(0x0018, 0x5040);
/// DepthOfScanField (0018,5050) IS
pub const DEPTH_OF_SCAN_FIELD: Tag = Tag(0x0018, 0x5050);
/// PatientPosition (0018,5100) CS
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ViewPosition (0018,5101) CS
pub const VIEW_POSITION: Tag = Tag(0x0018, 0x5101);
/// ProjectionEponymousNameCodeSequence (0018,5104) SQ
pub const PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE: Tag = Tag(0x0018, 0x5104);
/// ImageTransformationMatrix (0018,5210) DS (retired)
pub const IMAGE_TRANSFORMATION_MATRIX: Tag = Tag(0x0018, 0x5210);
/// ImageTranslationVector (0018,5212) DS (retired)
pub const IMAGE_TRANSLATION_VECTOR: Tag = Tag(0x0018, 0x5212);
/// Sensitivity (0018,6000) DS
pub const SENSITIVITY: Tag = Tag(0x0018, 0x6000);
/// SequenceOfUltrasoundRegions (0018,6011) SQ
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// RegionSpatialFormat (0018,6012) US
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);
/// RegionDataType (0018,6014) US
pub const REGION_DATA_TYPE: Tag = Tag(0x0018, 0x6014);
/// RegionFlags (0018,6016) UL
pub const REGION_FLAGS: Tag = Tag(0x0018, 0x6016);
/// RegionLocationMinX0 (0018,6018) UL
pub const REGION_LOCATION_MIN_X0: Tag = Tag(0x0018, 0x6018);
/// RegionLocationMinY0 (0018,601A) UL
pub const REGION_LOCATION_MIN_Y0: Tag = Tag(0x0018, 0x601A);
/// RegionLocationMaxX1 (0018,601C) UL
pub const REGION_LOCATION_MAX_X1: Tag = Tag(0x0018, 0x601C);
/// RegionLocationMaxY1 (0018,601E) UL
pub const REGION_LOCATION_MAX_Y1: Tag = Tag(0x0018, 0x601E);
/// ReferencePixelX0 (0018,6020) SL
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);
/// ReferencePixelY0 (0018,6022) SL
pub const REFERENCE_PIXEL_Y0: Tag = Tag(0x0018, 0x6022);
/// PhysicalUnitsXDirection (0018,6024) US
pub const PHYSICAL_UNITS_X_DIRECTION: Tag = Tag(0x0018, 0x6024);
/// PhysicalUnitsYDirection (0018,6026) US
pub const PHYSICAL_UNITS_Y_DIRECTION: Tag = Tag(0x0018, 0x6026);
/// ReferencePixelPhysicalValueX (0018,6028) FD
pub const REFERENCE_PIXEL_PHYSICAL_VALUE_X: Tag = Tag(0x0018, 0x6028);
/// ReferencePixelPhysicalValueY (0018,602A) FD
pub const REFERENCE_PIXEL_PHYSICAL_VALUE_Y: Tag = Tag(0x0018, 0x602A);
/// PhysicalDeltaX (0018,602C) FD
pub const PHYSICAL_DELTA_X: Tag = Tag(0x0018, 0x602C);
/// PhysicalDeltaY (0018,602E) FD
pub const PHYSICAL_DELTA_Y: Tag = Tag(0x0018, 0x602E);
/// TransducerFrequency (0018,6030) UL
pub const TRANSDUCER_FREQUENCY: Tag = Tag(0x0018, 0x6030);
/// TransducerType (0018,6031) CS
pub const TRANSDUCER_TYPE: Tag = Tag(0x0018, 0x6031);
/// PulseRepetitionFrequency (0018,6032) UL
pub const PULSE_REPETITION_FREQUENCY: Tag = Tag(0x0018, 0x6032);
/// DopplerCorrectionAngle (0018,6034) FD
pub const DOPPLER_CORRECTION_ANGLE: Tag = Tag(0x0018, 0x6034);
/// SteeringAngle (0018,6036) FD
pub const STEERING_ANGLE: Tag = Tag(0x0018, 0x6036);
/// DopplerSampleVolumeXPositionRetired (0018,6038) UL (retired)
pub const DOPPLER_SAMPLE_VOLUME_X_POSITION_RETIRED: Tag = Tag(0x0018, 0x6038);
/// DopplerSampleVolumeXPosition (0018,6039) SL
pub const DOPPLER_SAMPLE_VOLUME_X_POSITION: Tag = Tag(0x0018, 0x6039);
/// DopplerSampleVolumeYPositionRetired (0018,603A) UL (retired)
pub const DOPPLER_SAMPLE_VOLUME_Y_POSITION_RETIRED: Tag = Tag(0x0018, 0x603A);
/// DopplerSampleVolumeYPosition (0018,603B) SL
pub const DOPPLER_SAMPLE_VOLUME_Y_POSITION: Tag = Tag(0x0018, 0x603B);
/// TMLinePositionX0Retired (0018,603C) UL (retired)
pub const TM_LINE_POSITION_X0_RETIRED: Tag = Tag(0x0018, 0x603C);
/// TMLinePositionX0 (0018,603D) SL
pub const TM_LINE_POSITION_X0: Tag = Tag(0x0018, 0x603D);
/// TMLinePositionY0Retired (0018,603E) UL (retired)
pub const TM_LINE_POSITION_Y0_RETIRED: Tag = Tag(0x0018, 0x603E);
/// TMLinePositionY0 (0018,603F) SL
pub const TM_LINE_POSITION_Y0: Tag = Tag(0x0018, 0x603F);
/// TMLinePositionX1Retired (0018,6040) UL (retired)
pub const TM_LINE_POSITION_X1_RETIRED: Tag = Tag(0x0018, 0x6040);
/// TMLinePositionX1 (0018,6041) SL
pub const TM_LINE_POSITION_X1: Tag = Tag(0x0018, 0x6041);
/// TMLinePositionY1Retired (0018,6042) UL (retired)
pub const TM_LINE_POSITION_Y1_RETIRED: Tag = Tag(0x0018, 0x6042);
/// TMLinePositionY1 (0018,6043) SL
pub const TM_LINE_POSITION_Y1: Tag = Tag(0x0018, 0x6043);
/// PixelComponentOrganization (0018,6044) US
pub const PIXEL_COMPONENT_ORGANIZATION: Tag = Tag(0x0018, 0x6044);
/// PixelComponentMask (0018,6046) UL
pub const PIXEL_COMPONENT_MASK: Tag = Tag(0x0018, 0x6046);
/// PixelComponentRangeStart (0018,6048) UL
pub const PIXEL_COMPONENT_RANGE_START: Tag = Tag(0x0018, 0x6048);
/// PixelComponentRangeStop (0018,604A) UL
pub const PIXEL_COMPONENT_RANGE_STOP: Tag = Tag(0x0018, 0x604A);
/// PixelComponentPhysicalUnits (0018,604C) US
pub const PIXEL_COMPONENT_PHYSICAL_UNITS: Tag = Tag(0x0018, 0x604C);
/// PixelComponentDataType (0018,604E) US
pub const PIXEL_COMPONENT_DATA_TYPE: Tag = Tag(0x0018, 0x604E);
/// NumberOfTableBreakPoints (0018,6050) UL
pub const NUMBER_OF_TABLE_BREAK_POINTS: Tag = Tag(0x0018, 0x6050);
/// TableOfXBreakPoints (0018,6052) UL
pub const TABLE_OF_X_BREAK_POINTS: Tag = Tag(0x0018, 0x6052);
/// TableOfYBreakPoints (0018,6054) FD
pub const TABLE_OF_Y_BREAK_POINTS: Tag = Tag(0x0018, 0x6054);
/// NumberOfTableEntries (0018,6056) UL
pub const NUMBER_OF_TABLE_ENTRIES: Tag = Tag(0x0018, 0x6056);
/// TableOfPixelValues (0018,6058) UL
pub const TABLE_OF_PIXEL_VALUES: Tag = Tag(0x0018, 0x6058);
/// TableOfParameterValues (0018,605A) FL
pub const TABLE_OF_PARAMETER_VALUES: Tag = Tag(0x0018, 0x605A);
/// RWaveTimeVector (0018,6060) FL
pub const R_WAVE_TIME_VECTOR: Tag = Tag(0x0018, 0x6060);
/// ActiveImageAreaOverlayGroup (0018,6070) US
pub const ACTIVE_IMAGE_AREA_OVERLAY_GROUP: Tag = Tag(0x0018, 0x6070);
/// DetectorConditionsNominalFlag (0018,7000) CS
pub const DETECTOR_CONDITIONS_NOMINAL_FLAG: Tag = Tag(0x0018, 0x7000);
/// DetectorTemperature (0018,7001) DS
pub const DETECTOR_TEMPERATURE: Tag = Tag(0x0018, 0x7001);
/// DetectorType (0018,7004) CS
pub const DETECTOR_TYPE: Tag = Tag(0x0018, 0x7004);
/// DetectorConfiguration (0018,7005) CS
pub const DETECTOR_CONFIGURATION: Tag = Tag(0x0018, 0x7005);
/// DetectorDescription (0018,7006) LT
pub const DETECTOR_DESCRIPTION: Tag = Tag(0x0018, 0x7006);
/// DetectorMode (0018,7008) LT
pub const DETECTOR_MODE: Tag = Tag(0x0018, 0x7008);
/// DetectorID (0018,700A) SH
pub const DETECTOR_ID: Tag = Tag(0x0018, 0x700A);
/// DateOfLastDetectorCalibration (0018,700C) DA
pub const DATE_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700C);
/// TimeOfLastDetectorCalibration (0018,700E) TM
pub const TIME_OF_LAST_DETECTOR_CALIBRATION: Tag = Tag(0x0018, 0x700E);
/// ExposuresOnDetectorSinceLastCalibration (0018,7010) IS
pub const EXPOSURES_ON_DETECTOR_SINCE_LAST_CALIBRATION: Tag = Tag(0x0018, 0x7010);
/// ExposuresOnDetectorSinceManufactured (0018,7011) IS
pub const EXPOSURES_ON_DETECTOR_SINCE_MANUFACTURED: Tag = Tag(0x0018, 0x7011);
/// DetectorTimeSinceLastExposure (0018,7012) DS
pub const DETECTOR_TIME_SINCE_LAST_EXPOSURE: Tag = Tag(0x0018, 0x7012);
/// DetectorActiveTime (0018,7014) DS
pub const DETECTOR_ACTIVE_TIME: Tag = Tag(0x0018, 0x7014);
/// DetectorActivationOffsetFromExposure (0018,7016) DS
pub const DETECTOR_ACTIVATION_OFFSET_FROM_EXPOSURE: Tag = Tag(0x0018, 0x7016);
/// DetectorBinning (0018,701A) DS
pub const DETECTOR_BINNING: Tag = Tag(0x0018, 0x701A);
/// DetectorElementPhysicalSize (0018,7020) DS
pub const DETECTOR_ELEMENT_PHYSICAL_SIZE: Tag = Tag(0x0018, 0x7020);
/// DetectorElementSpacing (0018,7022) DS
pub const DETECTOR_ELEMENT_SPACING: Tag = Tag(0x0018, 0x7022);
/// DetectorActiveShape (0018,7024) CS
pub const DETECTOR_ACTIVE_SHAPE: Tag = Tag(0x0018, 0x7024);
/// DetectorActiveDimensions (0018,7026) DS
pub const DETECTOR_ACTIVE_DIMENSIONS: Tag = Tag(0x0018, 0x7026);
/// DetectorActiveOrigin (0018,7028) DS
pub const DETECTOR_ACTIVE_ORIGIN: Tag = Tag(0x0018, 0x7028);
/// DetectorManufacturerName (0018,702A) LO
pub const DETECTOR_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x702A);
/// DetectorManufacturerModelName (0018,702B) LO
pub const DETECTOR_MANUFACTURER_MODEL_NAME: Tag = Tag(0x0018, 0x702B);
/// FieldOfViewOrigin (0018,7030) DS
pub const FIELD_OF_VIEW_ORIGIN: Tag = Tag(0x0018, 0x7030);
/// FieldOfViewRotation (0018,7032) DS
pub const FIELD_OF_VIEW_ROTATION: Tag = Tag(0x0018, 0x7032);
/// FieldOfViewHorizontalFlip (0018,7034) CS
pub const FIELD_OF_VIEW_HORIZONTAL_FLIP: Tag = Tag(0x0018, 0x7034);
/// PixelDataAreaOriginRelativeToFOV (0018,7036) FL
pub const PIXEL_DATA_AREA_ORIGIN_RELATIVE_TO_FOV: Tag = Tag(0x0018, 0x7036);
/// PixelDataAreaRotationAngleRelativeToFOV (0018,7038) FL
pub const PIXEL_DATA_AREA_ROTATION_ANGLE_RELATIVE_TO_FOV: Tag = Tag(0x0018, 0x7038);
/// GridAbsorbingMaterial (0018,7040) LT
pub const GRID_ABSORBING_MATERIAL: Tag = Tag(0x0018, 0x7040);
/// GridSpacingMaterial (0018,7041) LT
pub const GRID_SPACING_MATERIAL: Tag = Tag(0x0018, 0x7041);
/// GridThickness (0018,7042) DS
pub const GRID_THICKNESS: Tag = Tag(0x0018, 0x7042);
/// GridPitch (0018,7044) DS
pub const GRID_PITCH: Tag = Tag(0x0018, 0x7044);
/// GridAspectRatio (0018,7046) IS
pub const GRID_ASPECT_RATIO: Tag = Tag(0x0018, 0x7046);
/// GridPeriod (0018,7048) DS
pub const GRID_PERIOD: Tag = Tag(0x0018, 0x7048);
/// GridFocalDistance (0018,704C) DS
pub const GRID_FOCAL_DISTANCE: Tag = Tag(0x0018, 0x704C);
/// FilterMaterial (0018,7050) CS
pub const FILTER_MATERIAL: Tag = Tag(0x0018, 0x7050);
/// FilterThicknessMinimum (0018,7052) DS
pub const FILTER_THICKNESS_MINIMUM: Tag = Tag(0x0018, 0x7052);
/// FilterThicknessMaximum (0018,7054) DS
pub const FILTER_THICKNESS_MAXIMUM: Tag = Tag(0x0018, 0x7054);
/// FilterBeamPathLengthMinimum (0018,7056) FL
pub const FILTER_BEAM_PATH_LENGTH_MINIMUM: Tag = Tag(0x0018, 0x7056);
/// FilterBeamPathLengthMaximum (0018,7058) FL
pub const FILTER_BEAM_PATH_LENGTH_MAXIMUM: Tag = Tag(0x0018, 0x7058);
/// ExposureControlMode (0018,7060) CS
pub const EXPOSURE_CONTROL_MODE: Tag = Tag(0x0018, 0x7060);
/// ExposureControlModeDescription (0018,7062) LT
pub const EXPOSURE_CONTROL_MODE_DESCRIPTION: Tag = Tag(0x0018, 0x7062);
/// ExposureStatus (0018,7064) CS
pub const EXPOSURE_STATUS: Tag = Tag(0x0018, 0x7064);
/// PhototimerSetting (0018,7065) DS
pub const PHOTOTIMER_SETTING: Tag = Tag(0x0018, 0x7065);
/// ExposureTimeInuS (0018,8150) DS
pub const EXPOSURE_TIME_INU_S: Tag = Tag(0x0018, 0x8150);
/// XRayTubeCurrentInuA (0018,8151) DS
pub const X_RAY_TUBE_CURRENT_INU_A: Tag = Tag(0x0018, 0x8151);
/// ContentQualification (0018,9004) CS
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// PulseSequenceName (0018,9005) SH
pub const PULSE_SEQUENCE_NAME: Tag = Tag(0x0018, 0x9005);
/// MRImagingModifierSequence (0018,9006) SQ
pub const MR_IMAGING_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9006);
/// EchoPulseSequence (0018,9008) CS
pub const ECHO_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9008);
/// InversionRecovery (0018,9009) CS
pub const INVERSION_RECOVERY: Tag = Tag(0x0018, 0x9009);
/// FlowCompensation (0018,9010) CS
pub const FLOW_COMPENSATION: Tag = Tag(0x0018, 0x9010);
/// MultipleSpinEcho (0018,9011) CS
pub const MULTIPLE_SPIN_ECHO: Tag = Tag(0x0018, 0x9011);
/// MultiPlanarExcitation (0018,9012) CS
pub const MULTI_PLANAR_EXCITATION: Tag = Tag(0x0018, 0x9012);
/// PhaseContrast (0018,9014) CS
pub const PHASE_CONTRAST: Tag = Tag(0x0018, 0x9014);
/// TimeOfFlightContrast (0018,9015) CS
pub const TIME_OF_FLIGHT_CONTRAST: Tag = Tag(0x0018, 0x9015);
/// Spoiling (0018,9016) CS
pub const SPOILING: Tag = Tag(0x0018, 0x9016);
/// SteadyStatePulseSequence (0018,9017) CS
pub const STEADY_STATE_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9017);
/// EchoPlanarPulseSequence (0018,9018) CS
pub const ECHO_PLANAR_PULSE_SEQUENCE: Tag = Tag(0x0018, 0x9018);
/// TagAngleFirstAxis (0018,9019) FD
pub const TAG_ANGLE_FIRST_AXIS: Tag = Tag(0x0018, 0x9019);
/// MagnetizationTransfer (0018,9020) CS
pub const MAGNETIZATION_TRANSFER: Tag = Tag(0x0018, 0x9020);
/// T2Preparation (0018,9021) CS
pub const T2_PREPARATION: Tag = Tag(0x0018, 0x9021);
/// BloodSignalNulling (0018,9022) CS
pub const BLOOD_SIGNAL_NULLING: Tag = Tag(0x0018, 0x9022);
/// SaturationRecovery (0018,9024) CS
pub const SATURATION_RECOVERY: Tag = Tag(0x0018, 0x9024);
/// SpectrallySelectedSuppression (0018,9025) CS
pub const SPECTRALLY_SELECTED_SUPPRESSION: Tag = Tag(0x0018, 0x9025);
/// SpectrallySelectedExcitation (0018,9026) CS
pub const SPECTRALLY_SELECTED_EXCITATION: Tag = Tag(0x0018, 0x9026);
/// SpatialPresaturation (0018,9027) CS
pub const SPATIAL_PRESATURATION: Tag = Tag(0x0018, 0x9027);
/// Tagging (0018,9028) CS
pub const TAGGING: Tag = Tag(0x0018, 0x9028);
/// OversamplingPhase (0018,9029) CS
pub const OVERSAMPLING_PHASE: Tag = Tag(0x0018, 0x9029);
/// TagSpacingFirstDimension (0018,9030) FD
pub const TAG_SPACING_FIRST_DIMENSION: Tag = Tag(0x0018, 0x9030);
/// GeometryOfKSpaceTraversal (0018,9032) CS
pub const GEOMETRY_OF_K_SPACE_TRAVERSAL: Tag = Tag(0x0018, 0x9032);
/// SegmentedKSpaceTraversal (0018,9033) CS
pub const SEGMENTED_K_SPACE_TRAVERSAL: Tag = Tag(0x0018, 0x9033);
/// RectilinearPhaseEncodeReordering (0018,9034) CS
pub const RECTILINEAR_PHASE_ENCODE_REORDERING: Tag = Tag(0x0018, 0x9034);
/// TagThickness (0018,9035) FD
pub const TAG_THICKNESS: Tag = Tag(0x0018, 0x9035);
/// PartialFourierDirection (0018,9036) CS
pub const PARTIAL_FOURIER_DIRECTION: Tag = Tag(0x0018, 0x9036);
/// CardiacSynchronizationTechnique (0018,9037) CS
pub const CARDIAC_SYNCHRONIZATION_TECHNIQUE: Tag = Tag(0x0018, 0x9037);
/// ReceiveCoilManufacturerName (0018,9041) LO
pub const RECEIVE_COIL_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x9041);
/// MRReceiveCoilSequence (0018,9042) SQ
pub const MR_RECEIVE_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9042);
/// ReceiveCoilType (0018,9043) CS
pub const RECEIVE_COIL_TYPE: Tag = Tag(0x0018, 0x9043);
/// QuadratureReceiveCoil (0018,9044) CS
pub const QUADRATURE_RECEIVE_COIL: Tag = Tag(0x0018, 0x9044);
/// MultiCoilDefinitionSequence (0018,9045) SQ
pub const MULTI_COIL_DEFINITION_SEQUENCE: Tag = Tag(0x0018, 0x9045);
/// MultiCoilConfiguration (0018,9046) LO
pub const MULTI_COIL_CONFIGURATION: Tag = Tag(0x0018, 0x9046);
/// MultiCoilElementName (0018,9047) SH
pub const MULTI_COIL_ELEMENT_NAME: Tag = Tag(0x0018, 0x9047);
/// MultiCoilElementUsed (0018,9048) CS
pub const MULTI_COIL_ELEMENT_USED: Tag = Tag(0x0018, 0x9048);
/// MRTransmitCoilSequence (0018,9049) SQ
pub const MR_TRANSMIT_COIL_SEQUENCE: Tag = Tag(0x0018, 0x9049);
/// TransmitCoilManufacturerName (0018,9050) LO
pub const TRANSMIT_COIL_MANUFACTURER_NAME: Tag = Tag(0x0018, 0x9050);
/// TransmitCoilType (0018,9051) CS
pub const TRANSMIT_COIL_TYPE: Tag = Tag(0x0018, 0x9051);
/// SpectralWidth (0018,9052) FD
pub const SPECTRAL_WIDTH: Tag = Tag(0x0018, 0x9052);
/// ChemicalShiftReference (0018,9053) FD
pub const CHEMICAL_SHIFT_REFERENCE: Tag = Tag(0x0018, 0x9053);
/// VolumeLocalizationTechnique (0018,9054) CS
pub const VOLUME_LOCALIZATION_TECHNIQUE: Tag = Tag(0x0018, 0x9054);
/// MRAcquisitionFrequencyEncodingSteps (0018,9058) US
pub const MR_ACQUISITION_FREQUENCY_ENCODING_STEPS: Tag = Tag(0x0018, 0x9058);
/// Decoupling (0018,9059) CS
pub const DECOUPLING: Tag = Tag(0x0018, 0x9059);
/// DecoupledNucleus (0018,9060) CS
pub const DECOUPLED_NUCLEUS: Tag = Tag(0x0018, 0x9060);
/// DecouplingFrequency (0018,9061) FD
pub const DECOUPLING_FREQUENCY: Tag = Tag(0x0018, 0x9061);
/// DecouplingMethod (0018,9062) CS
pub const DECOUPLING_METHOD: Tag = Tag(0x0018, 0x9062);
/// DecouplingChemicalShiftReference (0018,9063) FD
pub const DECOUPLING_CHEMICAL_SHIFT_REFERENCE: Tag = Tag(0x0018, 0x9063);
/// KSpaceFiltering (0018,9064) CS
pub const K_SPACE_FILTERING: Tag = Tag(0x0018, 0x9064);
/// TimeDomainFiltering (0018,9065) CS
pub const TIME_DOMAIN_FILTERING: Tag = Tag(0x0018, 0x9065);
/// NumberOfZeroFills (0018,9066) US
pub const NUMBER_OF_ZERO_FILLS: Tag = Tag(0x0018, 0x9066);
/// BaselineCorrection (0018,9067) CS
pub const BASELINE_CORRECTION: Tag = Tag(0x0018, 0x9067);
/// ParallelReductionFactorInPlane (0018,9069) FD
pub const PARALLEL_REDUCTION_FACTOR_IN_PLANE: Tag = Tag(0x0018, 0x9069);
/// CardiacRRIntervalSpecified (0018,9070) FD
pub const CARDIAC_RR_INTERVAL_SPECIFIED: Tag = Tag(0x0018, 0x9070);
/// AcquisitionDuration (0018,9073) FD
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// FrameAcquisitionDateTime (0018,9074) DT
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);
/// DiffusionDirectionality (0018,9075) CS
pub const DIFFUSION_DIRECTIONALITY: Tag = Tag(0x0018, 0x9075);
/// DiffusionGradientDirectionSequence (0018,9076) SQ
pub const DIFFUSION_GRADIENT_DIRECTION_SEQUENCE: Tag = Tag(0x0018, 0x9076);
/// ParallelAcquisition (0018,9077) CS
pub const PARALLEL_ACQUISITION: Tag = Tag(0x0018, 0x9077);
/// ParallelAcquisitionTechnique (0018,9078) CS
pub const PARALLEL_ACQUISITION_TECHNIQUE: Tag = Tag(0x0018, 0x9078);
/// InversionTimes (0018,9079) FD
pub const INVERSION_TIMES: Tag = Tag(0x0018, 0x9079);
/// MetaboliteMapDescription (0018,9080) ST
pub const METABOLITE_MAP_DESCRIPTION: Tag = Tag(0x0018, 0x9080);
/// PartialFourier (0018,9081) CS
pub const PARTIAL_FOURIER: Tag = Tag(0x0018, 0x9081);
/// EffectiveEchoTime (0018,9082) FD
pub const EFFECTIVE_ECHO_TIME: Tag = Tag(0x0018, 0x9082);
/// MetaboliteMapCodeSequence (0018,9083) SQ
pub const METABOLITE_MAP_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9083);
/// ChemicalShiftSequence (0018,9084) SQ
pub const CHEMICAL_SHIFT_SEQUENCE: Tag = Tag(0x0018, 0x9084);
/// CardiacSignalSource (0018,9085) CS
pub const CARDIAC_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9085);
/// DiffusionBValue (0018,9087) FD
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// DiffusionGradientOrientation (0018,9089) FD
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// VelocityEncodingDirection (0018,9090) FD
pub const VELOCITY_ENCODING_DIRECTION: Tag = Tag(0x0018, 0x9090);
/// VelocityEncodingMinimumValue (0018,9091) FD
pub const VELOCITY_ENCODING_MINIMUM_VALUE: Tag = Tag(0x0018, 0x9091);
/// VelocityEncodingAcquisitionSequence (0018,9092) SQ
pub const VELOCITY_ENCODING_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9092);
/// NumberOfKSpaceTrajectories (0018,9093) US
pub const NUMBER_OF_K_SPACE_TRAJECTORIES: Tag = Tag(0x0018, 0x9093);
/// CoverageOfKSpace (0018,9094) CS
pub const COVERAGE_OF_K_SPACE: Tag = Tag(0x0018, 0x9094);
/// SpectroscopyAcquisitionPhaseRows (0018,9095) UL
pub const SPECTROSCOPY_ACQUISITION_PHASE_ROWS: Tag = Tag(0x0018, 0x9095);
/// ParallelReductionFactorInPlaneRetired (0018,9096) FD (retired)
pub const PARALLEL_REDUCTION_FACTOR_IN_PLANE_RETIRED: Tag = Tag(0x0018, 0x9096);
/// TransmitterFrequency (0018,9098) FD
pub const TRANSMITTER_FREQUENCY: Tag = Tag(0x0018, 0x9098);
/// ResonantNucleus (0018,9100) CS
pub const RESONANT_NUCLEUS: Tag = Tag(0x0018, 0x9100);
/// FrequencyCorrection (0018,9101) CS
pub const FREQUENCY_CORRECTION: Tag = Tag(0x0018, 0x9101);
/// MRSpectroscopyFOVGeometrySequence (0018,9103) SQ
pub const MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9103);
/// SlabThickness (0018,9104) FD
pub const SLAB_THICKNESS: Tag = Tag(0x0018, 0x9104);
/// SlabOrientation (0018,9105) FD
pub const SLAB_ORIENTATION: Tag = Tag(0x0018, 0x9105);
/// MidSlabPosition (0018,9106) FD
pub const MID_SLAB_POSITION: Tag = Tag(0x0018, 0x9106);
/// MRSpatialSaturationSequence (0018,9107) SQ
pub const MR_SPATIAL_SATURATION_SEQUENCE: Tag = Tag(0x0018, 0x9107);
/// MRTimingAndRelatedParametersSequence (0018,9112) SQ
pub const MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9112);
/// MREchoSequence (0018,9114) SQ
pub const MR_ECHO_SEQUENCE: Tag = Tag(0x0018, 0x9114);
/// MRModifierSequence (0018,9115) SQ
pub const MR_MODIFIER_SEQUENCE: Tag = Tag(0x0018, 0x9115);
/// MRDiffusionSequence (0018,9117) SQ
pub const MR_DIFFUSION_SEQUENCE: Tag = Tag(0x0018, 0x9117);
/// CardiacSynchronizationSequence (0018,9118) SQ
pub const CARDIAC_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9118);
/// MRAveragesSequence (0018,9119) SQ
pub const MR_AVERAGES_SEQUENCE: Tag = Tag(0x0018, 0x9119);
/// MRFOVGeometrySequence (0018,9125) SQ
pub const MRFOV_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9125);
/// VolumeLocalizationSequence (0018,9126) SQ
pub const VOLUME_LOCALIZATION_SEQUENCE: Tag = Tag(0x0018, 0x9126);
/// SpectroscopyAcquisitionDataColumns (0018,9127) UL
pub const SPECTROSCOPY_ACQUISITION_DATA_COLUMNS: Tag = Tag(0x0018, 0x9127);
/// DiffusionAnisotropyType (0018,9147) CS
pub const DIFFUSION_ANISOTROPY_TYPE: Tag = Tag(0x0018, 0x9147);
/// FrameReferenceDateTime (0018,9151) DT
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);
/// MRMetaboliteMapSequence (0018,9152) SQ
pub const MR_METABOLITE_MAP_SEQUENCE: Tag = Tag(0x0018, 0x9152);
/// ParallelReductionFactorOutOfPlane (0018,9155) FD
pub const PARALLEL_REDUCTION_FACTOR_OUT_OF_PLANE: Tag = Tag(0x0018, 0x9155);
/// SpectroscopyAcquisitionOutOfPlanePhaseSteps (0018,9159) UL
pub const SPECTROSCOPY_ACQUISITION_OUT_OF_PLANE_PHASE_STEPS: Tag = Tag(0x0018, 0x9159);
/// BulkMotionStatus (0018,9166) CS (retired)
pub const BULK_MOTION_STATUS: Tag = Tag(0x0018, 0x9166);
/// ParallelReductionFactorSecondInPlane (0018,9168) FD
pub const PARALLEL_REDUCTION_FACTOR_SECOND_IN_PLANE: Tag = Tag(0x0018, 0x9168);
/// CardiacBeatRejectionTechnique (0018,9169) CS
pub const CARDIAC_BEAT_REJECTION_TECHNIQUE: Tag = Tag(0x0018, 0x9169);
/// RespiratoryMotionCompensationTechnique (0018,9170) CS
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE: Tag = Tag(0x0018, 0x9170);
/// RespiratorySignalSource (0018,9171) CS
pub const RESPIRATORY_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9171);
/// BulkMotionCompensationTechnique (0018,9172) CS
pub const BULK_MOTION_COMPENSATION_TECHNIQUE: Tag = Tag(0x0018, 0x9172);
/// BulkMotionSignalSource (0018,9173) CS
pub const BULK_MOTION_SIGNAL_SOURCE: Tag = Tag(0x0018, 0x9173);
/// ApplicableSafetyStandardAgency (0018,9174) CS
pub const APPLICABLE_SAFETY_STANDARD_AGENCY: Tag = Tag(0x0018, 0x9174);
/// ApplicableSafetyStandardDescription (0018,9175) LO
pub const APPLICABLE_SAFETY_STANDARD_DESCRIPTION: Tag = Tag(0x0018, 0x9175);
/// OperatingModeSequence (0018,9176) SQ
pub const OPERATING_MODE_SEQUENCE: Tag = Tag(0x0018, 0x9176);
/// OperatingModeType (0018,9177) CS
pub const OPERATING_MODE_TYPE: Tag = Tag(0x0018, 0x9177);
/// OperatingMode (0018,9178) CS
pub const OPERATING_MODE: Tag = Tag(0x0018, 0x9178);
/// SpecificAbsorptionRateDefinition (0018,9179) CS
pub const SPECIFIC_ABSORPTION_RATE_DEFINITION: Tag = Tag(0x0018, 0x9179);
/// GradientOutputType (0018,9180) CS
pub const GRADIENT_OUTPUT_TYPE: Tag = Tag(0x0018, 0x9180);
/// SpecificAbsorptionRateValue (0018,9181) FD
pub const SPECIFIC_ABSORPTION_RATE_VALUE: Tag = Tag(0x0018, 0x9181);
/// GradientOutput (0018,9182) FD
pub const GRADIENT_OUTPUT: Tag = Tag(0x0018, 0x9182);
/// FlowCompensationDirection (0018,9183) CS
pub const FLOW_COMPENSATION_DIRECTION: Tag = Tag(0x0018, 0x9183);
/// TaggingDelay (0018,9184) FD
pub const TAGGING_DELAY: Tag = Tag(0x0018, 0x9184);
/// RespiratoryMotionCompensationTechniqueDescription (0018,9185) ST
pub const RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9185);
/// RespiratorySignalSourceID (0018,9186) SH
pub const RESPIRATORY_SIGNAL_SOURCE_ID: Tag = Tag(0x0018, 0x9186);
/// ChemicalShiftMinimumIntegrationLimitInHz (0018,9195) FD (retired)
pub const CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_IN_HZ: Tag = Tag(0x0018, 0x9195);
/// ChemicalShiftMaximumIntegrationLimitInHz (0018,9196) FD (retired)
pub const CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_IN_HZ: Tag = Tag(0x0018, 0x9196);
/// MRVelocityEncodingSequence (0018,9197) SQ
pub const MR_VELOCITY_ENCODING_SEQUENCE: Tag = Tag(0x0018, 0x9197);
/// FirstOrderPhaseCorrection (0018,9198) CS
pub const FIRST_ORDER_PHASE_CORRECTION: Tag = Tag(0x0018, 0x9198);
/// WaterReferencedPhaseCorrection (0018,9199) CS
pub const WATER_REFERENCED_PHASE_CORRECTION: Tag = Tag(0x0018, 0x9199);
/// MRSpectroscopyAcquisitionType (0018,9200) CS
pub const MR_SPECTROSCOPY_ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9200);
/// RespiratoryCyclePosition (0018,9214) CS
pub const RESPIRATORY_CYCLE_POSITION: Tag = Tag(0x0018, 0x9214);
/// VelocityEncodingMaximumValue (0018,9217) FD
pub const VELOCITY_ENCODING_MAXIMUM_VALUE: Tag = Tag(0x0018, 0x9217);
/// TagSpacingSecondDimension (0018,9218) FD
pub const TAG_SPACING_SECOND_DIMENSION: Tag = Tag(0x0018, 0x9218);
/// TagAngleSecondAxis (0018,9219) SS
pub const TAG_ANGLE_SECOND_AXIS: Tag = Tag(0x0018, 0x9219);
/// FrameAcquisitionDuration (0018,9220) FD
pub const FRAME_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9220);
/// MRImageFrameTypeSequence (0018,9226) SQ
pub const MR_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9226);
/// MRSpectroscopyFrameTypeSequence (0018,9227) SQ
pub const MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9227);
/// MRAcquisitionPhaseEncodingStepsInPlane (0018,9231) US
pub const MR_ACQUISITION_PHASE_ENCODING_STEPS_IN_PLANE: Tag = Tag(0x0018, 0x9231);
/// MRAcquisitionPhaseEncodingStepsOutOfPlane (0018,9232) US
pub const MR_ACQUISITION_PHASE_ENCODING_STEPS_OUT_OF_PLANE: Tag = Tag(0x0018, 0x9232);
/// SpectroscopyAcquisitionPhaseColumns (0018,9234) UL
pub const SPECTROSCOPY_ACQUISITION_PHASE_COLUMNS: Tag = Tag(0x0018, 0x9234);
/// CardiacCyclePosition (0018,9236) CS
pub const CARDIAC_CYCLE_POSITION: Tag = Tag(0x0018, 0x9236);
/// SpecificAbsorptionRateSequence (0018,9239) SQ
pub const SPECIFIC_ABSORPTION_RATE_SEQUENCE: Tag = Tag(0x0018, 0x9239);
/// RFEchoTrainLength (0018,9240) US
pub const RF_ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x9240);
/// GradientEchoTrainLength (0018,9241) US
pub const GRADIENT_ECHO_TRAIN_LENGTH: Tag = Tag(0x0018, 0x9241);
/// ArterialSpinLabelingContrast (0018,9250) CS
pub const ARTERIAL_SPIN_LABELING_CONTRAST: Tag = Tag(0x0018, 0x9250);
/// MRArterialSpinLabelingSequence (0018,9251) SQ
pub const MR_ARTERIAL_SPIN_LABELING_SEQUENCE: Tag = Tag(0x0018, 0x9251);
/// ASLTechniqueDescription (0018,9252) LO
pub const ASL_TECHNIQUE_DESCRIPTION: Tag = Tag(0x0018, 0x9252);
/// ASLSlabNumber (0018,9253) US
pub const ASL_SLAB_NUMBER: Tag = Tag(0x0018, 0x9253);
/// ASLSlabThickness (0018,9254) FD
pub const ASL_SLAB_THICKNESS: Tag = Tag(0x0018, 0x9254);
/// ASLSlabOrientation (0018,9255) FD
pub const ASL_SLAB_ORIENTATION: Tag = Tag(0x0018, 0x9255);
/// ASLMidSlabPosition (0018,9256) FD
pub const ASL_MID_SLAB_POSITION: Tag = Tag(0x0018, 0x9256);
/// ASLContext (0018,9257) CS
pub const ASL_CONTEXT: Tag = Tag(0x0018, 0x9257);
/// ASLPulseTrainDuration (0018,9258) UL
pub const ASL_PULSE_TRAIN_DURATION: Tag = Tag(0x0018, 0x9258);
/// ASLCrusherFlag (0018,9259) CS
pub const ASL_CRUSHER_FLAG: Tag = Tag(0x0018, 0x9259);
/// ASLCrusherFlowLimit (0018,925A) FD
pub const ASL_CRUSHER_FLOW_LIMIT: Tag = Tag(0x0018, 0x925A);
/// ASLCrusherDescription (0018,925B) LO
pub const ASL_CRUSHER_DESCRIPTION: Tag = Tag(0x0018, 0x925B);
/// ASLBolusCutoffFlag (0018,925C) CS
pub const ASL_BOLUS_CUTOFF_FLAG: Tag = Tag(0x0018, 0x925C);
/// ASLBolusCutoffTimingSequence (0018,925D) SQ
pub const ASL_BOLUS_CUTOFF_TIMING_SEQUENCE: Tag = Tag(0x0018, 0x925D);
/// ASLBolusCutoffTechnique (0018,925E) LO
pub const ASL_BOLUS_CUTOFF_TECHNIQUE: Tag = Tag(0x0018, 0x925E);
/// ASLBolusCutoffDelayTime (0018,925F) UL
pub const ASL_BOLUS_CUTOFF_DELAY_TIME: Tag = Tag(0x0018, 0x925F);
/// ASLSlabSequence (0018,9260) SQ
pub const ASL_SLAB_SEQUENCE: Tag = Tag(0x0018, 0x9260);
/// ChemicalShiftMinimumIntegrationLimitInppm (0018,9295) FD
pub const CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_INPPM: Tag = Tag(0x0018, 0x9295);
/// ChemicalShiftMaximumIntegrationLimitInppm (0018,9296) FD
pub const CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_INPPM: Tag = Tag(0x0018, 0x9296);
/// WaterReferenceAcquisition (0018,9297) CS
pub const WATER_REFERENCE_ACQUISITION: Tag = Tag(0x0018, 0x9297);
/// EchoPeakPosition (0018,9298) IS
pub const ECHO_PEAK_POSITION: Tag = Tag(0x0018, 0x9298);
/// CTAcquisitionTypeSequence (0018,9301) SQ
pub const CT_ACQUISITION_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9301);
/// AcquisitionType (0018,9302) CS
pub const ACQUISITION_TYPE: Tag = Tag(0x0018, 0x9302);
/// TubeAngle (0018,9303) FD
pub const TUBE_ANGLE: Tag = Tag(0x0018, 0x9303);
/// CTAcquisitionDetailsSequence (0018,9304) SQ
pub const CT_ACQUISITION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9304);
/// RevolutionTime (0018,9305) FD
pub const REVOLUTION_TIME: Tag = Tag(0x0018, 0x9305);
/// SingleCollimationWidth (0018,9306) FD
pub const SINGLE_COLLIMATION_WIDTH: Tag = Tag(0x0018, 0x9306);
/// TotalCollimationWidth (0018,9307) FD
pub const TOTAL_COLLIMATION_WIDTH: Tag = Tag(0x0018, 0x9307);
/// CTTableDynamicsSequence (0018,9308) SQ
pub const CT_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9308);
/// TableSpeed (0018,9309) FD
pub const TABLE_SPEED: Tag = Tag(0x0018, 0x9309);
/// TableFeedPerRotation (0018,9310) FD
pub const TABLE_FEED_PER_ROTATION: Tag = Tag(0x0018, 0x9310);
/// SpiralPitchFactor (0018,9311) FD
pub const SPIRAL_PITCH_FACTOR: Tag = Tag(0x0018, 0x9311);
/// CTGeometrySequence (0018,9312) SQ
pub const CT_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9312);
/// DataCollectionCenterPatient (0018,9313) FD
pub const DATA_COLLECTION_CENTER_PATIENT: Tag = Tag(0x0018, 0x9313);
/// CTReconstructionSequence (0018,9314) SQ
pub const CT_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9314);
/// ReconstructionAlgorithm (0018,9315) CS
pub const RECONSTRUCTION_ALGORITHM: Tag = Tag(0x0018, 0x9315);
/// ConvolutionKernelGroup (0018,9316) CS
pub const CONVOLUTION_KERNEL_GROUP: Tag = Tag(0x0018, 0x9316);
/// ReconstructionFieldOfView (0018,9317) FD
pub const RECONSTRUCTION_FIELD_OF_VIEW: Tag = Tag(0x0018, 0x9317);
/// ReconstructionTargetCenterPatient (0018,9318) FD
pub const RECONSTRUCTION_TARGET_CENTER_PATIENT: Tag = Tag(0x0018, 0x9318);
/// ReconstructionAngle (0018,9319) FD
pub const RECONSTRUCTION_ANGLE: Tag = Tag(0x0018, 0x9319);
/// ImageFilter (0018,9320) SH
pub const IMAGE_FILTER: Tag = Tag(0x0018, 0x9320);
/// CTExposureSequence (0018,9321) SQ
pub const CT_EXPOSURE_SEQUENCE: Tag = Tag(0x0018, 0x9321);
/// ReconstructionPixelSpacing (0018,9322) FD
pub const RECONSTRUCTION_PIXEL_SPACING: Tag = Tag(0x0018, 0x9322);
/// ExposureModulationType (0018,9323) CS
pub const EXPOSURE_MODULATION_TYPE: Tag = Tag(0x0018, 0x9323);
/// EstimatedDoseSaving (0018,9324) FD (retired)
pub const ESTIMATED_DOSE_SAVING: Tag = Tag(0x0018, 0x9324);
/// CTXRayDetailsSequence (0018,9325) SQ
pub const CTX_RAY_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9325);
/// CTPositionSequence (0018,9326) SQ
pub const CT_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9326);
/// TablePosition (0018,9327) FD
pub const TABLE_POSITION: Tag = Tag(0x0018, 0x9327);
/// ExposureTimeInms (0018,9328) FD
pub const EXPOSURE_TIME_INMS: Tag = Tag(0x0018, 0x9328);
/// CTImageFrameTypeSequence (0018,9329) SQ
pub const CT_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9329);
/// XRayTubeCurrentInmA (0018,9330) FD
pub const X_RAY_TUBE_CURRENT_INM_A: Tag = Tag(0x0018, 0x9330);
/// ExposureInmAs (0018,9332) FD
pub const EXPOSURE_INM_AS: Tag = Tag(0x0018, 0x9332);
/// ConstantVolumeFlag (0018,9333) CS
pub const CONSTANT_VOLUME_FLAG: Tag = Tag(0x0018, 0x9333);
/// FluoroscopyFlag (0018,9334) CS
pub const FLUOROSCOPY_FLAG: Tag = Tag(0x0018, 0x9334);
/// DistanceSourceToDataCollectionCenter (0018,9335) FD
pub const DISTANCE_SOURCE_TO_DATA_COLLECTION_CENTER: Tag = Tag(0x0018, 0x9335);
/// ContrastBolusAgentNumber (0018,9337) US
pub const CONTRAST_BOLUS_AGENT_NUMBER: Tag = Tag(0x0018, 0x9337);
/// ContrastBolusIngredientCodeSequence (0018,9338) SQ
pub const CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9338);
/// ContrastAdministrationProfileSequence (0018,9340) SQ
pub const CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE: Tag = Tag(0x0018, 0x9340);
/// ContrastBolusUsageSequence (0018,9341) SQ
pub const CONTRAST_BOLUS_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9341);
/// ContrastBolusAgentAdministered (0018,9342) CS
pub const CONTRAST_BOLUS_AGENT_ADMINISTERED: Tag = Tag(0x0018, 0x9342);
/// ContrastBolusAgentDetected (0018,9343) CS
pub const CONTRAST_BOLUS_AGENT_DETECTED: Tag = Tag(0x0018, 0x9343);
/// ContrastBolusAgentPhase (0018,9344) CS
pub const CONTRAST_BOLUS_AGENT_PHASE: Tag = Tag(0x0018, 0x9344);
/// CTDIvol (0018,9345) FD
pub const CTD_IVOL: Tag = Tag(0x0018, 0x9345);
/// CTDIPhantomTypeCodeSequence (0018,9346) SQ
pub const CTDI_PHANTOM_TYPE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9346);
/// CalciumScoringMassFactorPatient (0018,9351) FL
pub const CALCIUM_SCORING_MASS_FACTOR_PATIENT: Tag = Tag(0x0018, 0x9351);
/// CalciumScoringMassFactorDevice (0018,9352) FL
pub const CALCIUM_SCORING_MASS_FACTOR_DEVICE: Tag = Tag(0x0018, 0x9352);
/// EnergyWeightingFactor (0018,9353) FL
pub const ENERGY_WEIGHTING_FACTOR: Tag = Tag(0x0018, 0x9353);
/// CTAdditionalXRaySourceSequence (0018,9360) SQ
pub const CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE: Tag = Tag(0x0018, 0x9360);
/// MultienergyCTAcquisition (0018,9361) CS
pub const MULTIENERGY_CT_ACQUISITION: Tag = Tag(0x0018, 0x9361);
/// MultienergyCTAcquisitionSequence (0018,9362) SQ
pub const MULTIENERGY_CT_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9362);
/// MultienergyCTProcessingSequence (0018,9363) SQ
pub const MULTIENERGY_CT_PROCESSING_SEQUENCE: Tag = Tag(0x0018, 0x9363);
/// MultienergyCTCharacteristicsSequence (0018,9364) SQ
pub const MULTIENERGY_CT_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0018, 0x9364);
/// MultienergyCTXRaySourceSequence (0018,9365) SQ
pub const MULTIENERGY_CTX_RAY_SOURCE_SEQUENCE: Tag = Tag(0x0018, 0x9365);
/// XRaySourceIndex (0018,9366) US
pub const X_RAY_SOURCE_INDEX: Tag = Tag(0x0018, 0x9366);
/// XRaySourceID (0018,9367) UC
pub const X_RAY_SOURCE_ID: Tag = Tag(0x0018, 0x9367);
/// MultienergySourceTechnique (0018,9368) CS
pub const MULTIENERGY_SOURCE_TECHNIQUE: Tag = Tag(0x0018, 0x9368);
/// SourceStartDateTime (0018,9369) DT
pub const SOURCE_START_DATE_TIME: Tag = Tag(0x0018, 0x9369);
/// SourceEndDateTime (0018,936A) DT
pub const SOURCE_END_DATE_TIME: Tag = Tag(0x0018, 0x936A);
/// SwitchingPhaseNumber (0018,936B) US
pub const SWITCHING_PHASE_NUMBER: Tag = Tag(0x0018, 0x936B);
/// SwitchingPhaseNominalDuration (0018,936C) DS
pub const SWITCHING_PHASE_NOMINAL_DURATION: Tag = Tag(0x0018, 0x936C);
/// SwitchingPhaseTransitionDuration (0018,936D) DS
pub const SWITCHING_PHASE_TRANSITION_DURATION: Tag = Tag(0x0018, 0x936D);
/// EffectiveBinEnergy (0018,936E) DS
pub const EFFECTIVE_BIN_ENERGY: Tag = Tag(0x0018, 0x936E);
/// MultienergyCTXRayDetectorSequence (0018,936F) SQ
pub const MULTIENERGY_CTX_RAY_DETECTOR_SEQUENCE: Tag = Tag(0x0018, 0x936F);
/// XRayDetectorIndex (0018,9370) US
pub const X_RAY_DETECTOR_INDEX: Tag = Tag(0x0018, 0x9370);
/// XRayDetectorID (0018,9371) UC
pub const X_RAY_DETECTOR_ID: Tag = Tag(0x0018, 0x9371);
/// MultienergyDetectorType (0018,9372) CS
pub const MULTIENERGY_DETECTOR_TYPE: Tag = Tag(0x0018, 0x9372);
/// XRayDetectorLabel (0018,9373) ST
pub const X_RAY_DETECTOR_LABEL: Tag = Tag(0x0018, 0x9373);
/// NominalMaxEnergy (0018,9374) DS
pub const NOMINAL_MAX_ENERGY: Tag = Tag(0x0018, 0x9374);
/// NominalMinEnergy (0018,9375) DS
pub const NOMINAL_MIN_ENERGY: Tag = Tag(0x0018, 0x9375);
/// ReferencedXRayDetectorIndex (0018,9376) US
pub const REFERENCED_X_RAY_DETECTOR_INDEX: Tag = Tag(0x0018, 0x9376);
/// ReferencedXRaySourceIndex (0018,9377) US
pub const REFERENCED_X_RAY_SOURCE_INDEX: Tag = Tag(0x0018, 0x9377);
/// ReferencedPathIndex (0018,9378) US
pub const REFERENCED_PATH_INDEX: Tag = Tag(0x0018, 0x9378);
/// MultienergyCTPathSequence (0018,9379) SQ
pub const MULTIENERGY_CT_PATH_SEQUENCE: Tag = Tag(0x0018, 0x9379);
/// MultienergyCTPathIndex (0018,937A) US
pub const MULTIENERGY_CT_PATH_INDEX: Tag = Tag(0x0018, 0x937A);
/// MultienergyAcquisitionDescription (0018,937B) UT
pub const MULTIENERGY_ACQUISITION_DESCRIPTION: Tag = Tag(0x0018, 0x937B);
/// MonoenergeticEnergyEquivalent (0018,937C) FD
pub const MONOENERGETIC_ENERGY_EQUIVALENT: Tag = Tag(0x0018, 0x937C);
/// MaterialCodeSequence (0018,937D) SQ
pub const MATERIAL_CODE_SEQUENCE: Tag = Tag(0x0018, 0x937D);
/// DecompositionMethod (0018,937E) CS
pub const DECOMPOSITION_METHOD: Tag = Tag(0x0018, 0x937E);
/// DecompositionDescription (0018,937F) UT
pub const DECOMPOSITION_DESCRIPTION: Tag = Tag(0x0018, 0x937F);
/// DecompositionAlgorithmIdentificationSequence (0018,9380) SQ
pub const DECOMPOSITION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x9380);
/// DecompositionMaterialSequence (0018,9381) SQ
pub const DECOMPOSITION_MATERIAL_SEQUENCE: Tag = Tag(0x0018, 0x9381);
/// MaterialAttenuationSequence (0018,9382) SQ
pub const MATERIAL_ATTENUATION_SEQUENCE: Tag = Tag(0x0018, 0x9382);
/// PhotonEnergy (0018,9383) DS
pub const PHOTON_ENERGY: Tag = Tag(0x0018, 0x9383);
/// XRayMassAttenuationCoefficient (0018,9384) DS
pub const X_RAY_MASS_ATTENUATION_COEFFICIENT: Tag = Tag(0x0018, 0x9384);
/// ProjectionPixelCalibrationSequence (0018,9401) SQ
pub const PROJECTION_PIXEL_CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9401);
/// DistanceSourceToIsocenter (0018,9402) FL
pub const DISTANCE_SOURCE_TO_ISOCENTER: Tag = Tag(0x0018, 0x9402);
/// DistanceObjectToTableTop (0018,9403) FL
pub const DISTANCE_OBJECT_TO_TABLE_TOP: Tag = Tag(0x0018, 0x9403);
/// ObjectPixelSpacingInCenterOfBeam (0018,9404) FL
pub const OBJECT_PIXEL_SPACING_IN_CENTER_OF_BEAM: Tag = Tag(0x0018, 0x9404);
/// PositionerPositionSequence (0018,9405) SQ
pub const POSITIONER_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9405);
/// TablePositionSequence (0018,9406) SQ
pub const TABLE_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9406);
/// CollimatorShapeSequence (0018,9407) SQ
pub const COLLIMATOR_SHAPE_SEQUENCE: Tag = Tag(0x0018, 0x9407);
/// PlanesInAcquisition (0018,9410) CS
pub const PLANES_IN_ACQUISITION: Tag = Tag(0x0018, 0x9410);
/// XAXRFFrameCharacteristicsSequence (0018,9412) SQ
pub const XAXRF_FRAME_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0018, 0x9412);
/// FrameAcquisitionSequence (0018,9417) SQ
pub const FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9417);
/// XRayReceptorType (0018,9420) CS
pub const X_RAY_RECEPTOR_TYPE: Tag = Tag(0x0018, 0x9420);
/// AcquisitionProtocolName (0018,9423) LO
pub const ACQUISITION_PROTOCOL_NAME: Tag = Tag(0x0018, 0x9423);
/// AcquisitionProtocolDescription (0018,9424) LT
pub const ACQUISITION_PROTOCOL_DESCRIPTION: Tag = Tag(0x0018, 0x9424);
/// ContrastBolusIngredientOpaque (0018,9425) CS
pub const CONTRAST_BOLUS_INGREDIENT_OPAQUE: Tag = Tag(0x0018, 0x9425);
/// DistanceReceptorPlaneToDetectorHousing (0018,9426) FL
pub const DISTANCE_RECEPTOR_PLANE_TO_DETECTOR_HOUSING: Tag = Tag(0x0018, 0x9426);
/// IntensifierActiveShape (0018,9427) CS
pub const INTENSIFIER_ACTIVE_SHAPE: Tag = Tag(0x0018, 0x9427);
/// IntensifierActiveDimensions (0018,9428) FL
pub const INTENSIFIER_ACTIVE_DIMENSIONS: Tag = Tag(0x0018, 0x9428);
/// PhysicalDetectorSize (0018,9429) FL
pub const PHYSICAL_DETECTOR_SIZE: Tag = Tag(0x0018, 0x9429);
/// PositionOfIsocenterProjection (0018,9430) FL
pub const POSITION_OF_ISOCENTER_PROJECTION: Tag = Tag(0x0018, 0x9430);
/// FieldOfViewSequence (0018,9432) SQ
pub const FIELD_OF_VIEW_SEQUENCE: Tag = Tag(0x0018, 0x9432);
/// FieldOfViewDescription (0018,9433) LO
pub const FIELD_OF_VIEW_DESCRIPTION: Tag = Tag(0x0018, 0x9433);
/// ExposureControlSensingRegionsSequence (0018,9434) SQ
pub const EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE: Tag = Tag(0x0018, 0x9434);
/// ExposureControlSensingRegionShape (0018,9435) CS
pub const EXPOSURE_CONTROL_SENSING_REGION_SHAPE: Tag = Tag(0x0018, 0x9435);
/// ExposureControlSensingRegionLeftVerticalEdge (0018,9436) SS
pub const EXPOSURE_CONTROL_SENSING_REGION_LEFT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x9436);
/// ExposureControlSensingRegionRightVerticalEdge (0018,9437) SS
pub const EXPOSURE_CONTROL_SENSING_REGION_RIGHT_VERTICAL_EDGE: Tag = Tag(0x0018, 0x9437);
/// ExposureControlSensingRegionUpperHorizontalEdge (0018,9438) SS
pub const EXPOSURE_CONTROL_SENSING_REGION_UPPER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x9438);
/// ExposureControlSensingRegionLowerHorizontalEdge (0018,9439) SS
pub const EXPOSURE_CONTROL_SENSING_REGION_LOWER_HORIZONTAL_EDGE: Tag = Tag(0x0018, 0x9439);
/// CenterOfCircularExposureControlSensingRegion (0018,9440) SS
pub const CENTER_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9440);
/// RadiusOfCircularExposureControlSensingRegion (0018,9441) US
pub const RADIUS_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9441);
/// VerticesOfThePolygonalExposureControlSensingRegion (0018,9442) SS
pub const VERTICES_OF_THE_POLYGONAL_EXPOSURE_CONTROL_SENSING_REGION: Tag = Tag(0x0018, 0x9442);
/// ColumnAngulationPatient (0018,9447) FL
pub const COLUMN_ANGULATION_PATIENT: Tag = Tag(0x0018, 0x9447);
/// BeamAngle (0018,9449) FL
pub const BEAM_ANGLE: Tag = Tag(0x0018, 0x9449);
/// FrameDetectorParametersSequence (0018,9451) SQ
pub const FRAME_DETECTOR_PARAMETERS_SEQUENCE: Tag = Tag(0x0018, 0x9451);
/// CalculatedAnatomyThickness (0018,9452) FL
pub const CALCULATED_ANATOMY_THICKNESS: Tag = Tag(0x0018, 0x9452);
/// CalibrationSequence (0018,9455) SQ
pub const CALIBRATION_SEQUENCE: Tag = Tag(0x0018, 0x9455);
/// ObjectThicknessSequence (0018,9456) SQ
pub const OBJECT_THICKNESS_SEQUENCE: Tag = Tag(0x0018, 0x9456);
/// PlaneIdentification (0018,9457) CS
pub const PLANE_IDENTIFICATION: Tag = Tag(0x0018, 0x9457);
/// FieldOfViewDimensionsInFloat (0018,9461) FL
pub const FIELD_OF_VIEW_DIMENSIONS_IN_FLOAT: Tag = Tag(0x0018, 0x9461);
/// IsocenterReferenceSystemSequence (0018,9462) SQ
pub const ISOCENTER_REFERENCE_SYSTEM_SEQUENCE: Tag = Tag(0x0018, 0x9462);
/// PositionerIsocenterPrimaryAngle (0018,9463) FL
pub const POSITIONER_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9463);
/// PositionerIsocenterSecondaryAngle (0018,9464) FL
pub const POSITIONER_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9464);
/// PositionerIsocenterDetectorRotationAngle (0018,9465) FL
pub const POSITIONER_ISOCENTER_DETECTOR_ROTATION_ANGLE: Tag = Tag(0x0018, 0x9465);
/// TableXPositionToIsocenter (0018,9466) FL
pub const TABLE_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9466);
/// TableYPositionToIsocenter (0018,9467) FL
pub const TABLE_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9467);
/// TableZPositionToIsocenter (0018,9468) FL
pub const TABLE_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9468);
/// TableHorizontalRotationAngle (0018,9469) FL
pub const TABLE_HORIZONTAL_ROTATION_ANGLE: Tag = Tag(0x0018, 0x9469);
/// TableHeadTiltAngle (0018,9470) FL
pub const TABLE_HEAD_TILT_ANGLE: Tag = Tag(0x0018, 0x9470);
/// TableCradleTiltAngle (0018,9471) FL
pub const TABLE_CRADLE_TILT_ANGLE: Tag = Tag(0x0018, 0x9471);
/// FrameDisplayShutterSequence (0018,9472) SQ
pub const FRAME_DISPLAY_SHUTTER_SEQUENCE: Tag = Tag(0x0018, 0x9472);
/// AcquiredImageAreaDoseProduct (0018,9473) FL
pub const ACQUIRED_IMAGE_AREA_DOSE_PRODUCT: Tag = Tag(0x0018, 0x9473);
/// CArmPositionerTabletopRelationship (0018,9474) CS
pub const C_ARM_POSITIONER_TABLETOP_RELATIONSHIP: Tag = Tag(0x0018, 0x9474);
/// XRayGeometrySequence (0018,9476) SQ
pub const X_RAY_GEOMETRY_SEQUENCE: Tag = Tag(0x0018, 0x9476);
/// IrradiationEventIdentificationSequence (0018,9477) SQ
pub const IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0018, 0x9477);
/// XRay3DFrameTypeSequence (0018,9504) SQ
pub const X_RAY3_D_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9504);
/// ContributingSourcesSequence (0018,9506) SQ
pub const CONTRIBUTING_SOURCES_SEQUENCE: Tag = Tag(0x0018, 0x9506);
/// XRay3DAcquisitionSequence (0018,9507) SQ
pub const X_RAY3_D_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9507);
/// PrimaryPositionerScanArc (0018,9508) FL
pub const PRIMARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9508);
/// SecondaryPositionerScanArc (0018,9509) FL
pub const SECONDARY_POSITIONER_SCAN_ARC: Tag = Tag(0x0018, 0x9509);
/// PrimaryPositionerScanStartAngle (0018,9510) FL
pub const PRIMARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9510);
/// SecondaryPositionerScanStartAngle (0018,9511) FL
pub const SECONDARY_POSITIONER_SCAN_START_ANGLE: Tag = Tag(0x0018, 0x9511);
/// PrimaryPositionerIncrement (0018,9514) FL
pub const PRIMARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9514);
/// SecondaryPositionerIncrement (0018,9515) FL
pub const SECONDARY_POSITIONER_INCREMENT: Tag = Tag(0x0018, 0x9515);
/// StartAcquisitionDateTime (0018,9516) DT
pub const START_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9516);
/// EndAcquisitionDateTime (0018,9517) DT
pub const END_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9517);
/// PrimaryPositionerIncrementSign (0018,9518) SS
pub const PRIMARY_POSITIONER_INCREMENT_SIGN: Tag = Tag(0x0018, 0x9518);
/// SecondaryPositionerIncrementSign (0018,9519) SS
pub const SECONDARY_POSITIONER_INCREMENT_SIGN: Tag = Tag(0x0018, 0x9519);
/// ApplicationName (0018,9524) LO
pub const APPLICATION_NAME: Tag = Tag(0x0018, 0x9524);
/// ApplicationVersion (0018,9525) LO
pub const APPLICATION_VERSION: Tag = Tag(0x0018, 0x9525);
/// ApplicationManufacturer (0018,9526) LO
pub const APPLICATION_MANUFACTURER: Tag = Tag(0x0018, 0x9526);
/// AlgorithmType (0018,9527) CS
pub const ALGORITHM_TYPE: Tag = Tag(0x0018, 0x9527);
/// AlgorithmDescription (0018,9528) LO
pub const ALGORITHM_DESCRIPTION: Tag = Tag(0x0018, 0x9528);
/// XRay3DReconstructionSequence (0018,9530) SQ
pub const X_RAY3_D_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9530);
/// ReconstructionDescription (0018,9531) LO
pub const RECONSTRUCTION_DESCRIPTION: Tag = Tag(0x0018, 0x9531);
/// PerProjectionAcquisitionSequence (0018,9538) SQ
pub const PER_PROJECTION_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9538);
/// DetectorPositionSequence (0018,9541) SQ
pub const DETECTOR_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9541);
/// XRayAcquisitionDoseSequence (0018,9542) SQ
pub const X_RAY_ACQUISITION_DOSE_SEQUENCE: Tag = Tag(0x0018, 0x9542);
/// XRaySourceIsocenterPrimaryAngle (0018,9543) FD
pub const X_RAY_SOURCE_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9543);
/// XRaySourceIsocenterSecondaryAngle (0018,9544) FD
pub const X_RAY_SOURCE_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9544);
/// BreastSupportIsocenterPrimaryAngle (0018,9545) FD
pub const BREAST_SUPPORT_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9545);
/// BreastSupportIsocenterSecondaryAngle (0018,9546) FD
pub const BREAST_SUPPORT_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9546);
/// BreastSupportXPositionToIsocenter (0018,9547) FD
pub const BREAST_SUPPORT_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9547);
/// BreastSupportYPositionToIsocenter (0018,9548) FD
pub const BREAST_SUPPORT_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9548);
/// BreastSupportZPositionToIsocenter (0018,9549) FD
pub const BREAST_SUPPORT_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9549);
/// DetectorIsocenterPrimaryAngle (0018,9550) FD
pub const DETECTOR_ISOCENTER_PRIMARY_ANGLE: Tag = Tag(0x0018, 0x9550);
/// DetectorIsocenterSecondaryAngle (0018,9551) FD
pub const DETECTOR_ISOCENTER_SECONDARY_ANGLE: Tag = Tag(0x0018, 0x9551);
/// DetectorXPositionToIsocenter (0018,9552) FD
pub const DETECTOR_X_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9552);
/// DetectorYPositionToIsocenter (0018,9553) FD
pub const DETECTOR_Y_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9553);
/// DetectorZPositionToIsocenter (0018,9554) FD
pub const DETECTOR_Z_POSITION_TO_ISOCENTER: Tag = Tag(0x0018, 0x9554);
/// XRayGridSequence (0018,9555) SQ
pub const X_RAY_GRID_SEQUENCE: Tag = Tag(0x0018, 0x9555);
/// XRayFilterSequence (0018,9556) SQ
pub const X_RAY_FILTER_SEQUENCE: Tag = Tag(0x0018, 0x9556);
/// DetectorActiveAreaTLHCPosition (0018,9557) FD
pub const DETECTOR_ACTIVE_AREA_TLHC_POSITION: Tag = Tag(0x0018, 0x9557);
/// DetectorActiveAreaOrientation (0018,9558) FD
pub const DETECTOR_ACTIVE_AREA_ORIENTATION: Tag = Tag(0x0018, 0x9558);
/// PositionerPrimaryAngleDirection (0018,9559) CS
pub const POSITIONER_PRIMARY_ANGLE_DIRECTION: Tag = Tag(0x0018, 0x9559);
/// DiffusionBMatrixSequence (0018,9601) SQ
pub const DIFFUSION_B_MATRIX_SEQUENCE: Tag = Tag(0x0018, 0x9601);
/// DiffusionBValueXX (0018,9602) FD
pub const DIFFUSION_B_VALUE_XX: Tag = Tag(0x0018, 0x9602);
/// DiffusionBValueXY (0018,9603) FD
pub const DIFFUSION_B_VALUE_XY: Tag = Tag(0x0018, 0x9603);
/// DiffusionBValueXZ (0018,9604) FD
pub const DIFFUSION_B_VALUE_XZ: Tag = Tag(0x0018, 0x9604);
/// DiffusionBValueYY (0018,9605) FD
pub const DIFFUSION_B_VALUE_YY: Tag = Tag(0x0018, 0x9605);
/// DiffusionBValueYZ (0018,9606) FD
pub const DIFFUSION_B_VALUE_YZ: Tag = Tag(0x0018, 0x9606);
/// DiffusionBValueZZ (0018,9607) FD
pub const DIFFUSION_B_VALUE_ZZ: Tag = Tag(0x0018, 0x9607);
/// FunctionalMRSequence (0018,9621) SQ
pub const FUNCTIONAL_MR_SEQUENCE: Tag = Tag(0x0018, 0x9621);
/// FunctionalSettlingPhaseFramesPresent (0018,9622) CS
pub const FUNCTIONAL_SETTLING_PHASE_FRAMES_PRESENT: Tag = Tag(0x0018, 0x9622);
/// FunctionalSyncPulse (0018,9623) DT
pub const FUNCTIONAL_SYNC_PULSE: Tag = Tag(0x0018, 0x9623);
/// SettlingPhaseFrame (0018,9624) CS
pub const SETTLING_PHASE_FRAME: Tag = Tag(0x0018, 0x9624);
/// DecayCorrectionDateTime (0018,9701) DT
pub const DECAY_CORRECTION_DATE_TIME: Tag = Tag(0x0018, 0x9701);
/// StartDensityThreshold (0018,9715) FD
pub const START_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9715);
/// StartRelativeDensityDifferenceThreshold (0018,9716) FD
pub const START_RELATIVE_DENSITY_DIFFERENCE_THRESHOLD: Tag = Tag(0x0018, 0x9716);
/// StartCardiacTriggerCountThreshold (0018,9717) FD
pub const START_CARDIAC_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9717);
/// StartRespiratoryTriggerCountThreshold (0018,9718) FD
pub const START_RESPIRATORY_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9718);
/// TerminationCountsThreshold (0018,9719) FD
pub const TERMINATION_COUNTS_THRESHOLD: Tag = Tag(0x0018, 0x9719);
/// TerminationDensityThreshold (0018,9720) FD
pub const TERMINATION_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9720);
/// TerminationRelativeDensityThreshold (0018,9721) FD
pub const TERMINATION_RELATIVE_DENSITY_THRESHOLD: Tag = Tag(0x0018, 0x9721);
/// TerminationTimeThreshold (0018,9722) FD
pub const TERMINATION_TIME_THRESHOLD: Tag = Tag(0x0018, 0x9722);
/// TerminationCardiacTriggerCountThreshold (0018,9723) FD
pub const TERMINATION_CARDIAC_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9723);
/// TerminationRespiratoryTriggerCountThreshold (0018,9724) FD
pub const TERMINATION_RESPIRATORY_TRIGGER_COUNT_THRESHOLD: Tag = Tag(0x0018, 0x9724);
/// DetectorGeometry (0018,9725) CS
pub const DETECTOR_GEOMETRY: Tag = Tag(0x0018, 0x9725);
/// TransverseDetectorSeparation (0018,9726) FD
pub const TRANSVERSE_DETECTOR_SEPARATION: Tag = Tag(0x0018, 0x9726);
/// AxialDetectorDimension (0018,9727) FD
pub const AXIAL_DETECTOR_DIMENSION: Tag = Tag(0x0018, 0x9727);
/// RadiopharmaceuticalAgentNumber (0018,9729) US
pub const RADIOPHARMACEUTICAL_AGENT_NUMBER: Tag = Tag(0x0018, 0x9729);
/// PETFrameAcquisitionSequence (0018,9732) SQ
pub const PET_FRAME_ACQUISITION_SEQUENCE: Tag = Tag(0x0018, 0x9732);
/// PETDetectorMotionDetailsSequence (0018,9733) SQ
pub const PET_DETECTOR_MOTION_DETAILS_SEQUENCE: Tag = Tag(0x0018, 0x9733);
/// PETTableDynamicsSequence (0018,9734) SQ
pub const PET_TABLE_DYNAMICS_SEQUENCE: Tag = Tag(0x0018, 0x9734);
/// PETPositionSequence (0018,9735) SQ
pub const PET_POSITION_SEQUENCE: Tag = Tag(0x0018, 0x9735);
/// PETFrameCorrectionFactorsSequence (0018,9736) SQ
pub const PET_FRAME_CORRECTION_FACTORS_SEQUENCE: Tag = Tag(0x0018, 0x9736);
/// RadiopharmaceuticalUsageSequence (0018,9737) SQ
pub const RADIOPHARMACEUTICAL_USAGE_SEQUENCE: Tag = Tag(0x0018, 0x9737);
/// AttenuationCorrectionSource (0018,9738) CS
pub const ATTENUATION_CORRECTION_SOURCE: Tag = Tag(0x0018, 0x9738);
/// NumberOfIterations (0018,9739) US
pub const NUMBER_OF_ITERATIONS: Tag = Tag(0x0018, 0x9739);
/// NumberOfSubsets (0018,9740) US
pub const NUMBER_OF_SUBSETS: Tag = Tag(0x0018, 0x9740);
/// PETReconstructionSequence (0018,9749) SQ
pub const PET_RECONSTRUCTION_SEQUENCE: Tag = Tag(0x0018, 0x9749);
/// PETFrameTypeSequence (0018,9751) SQ
pub const PET_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9751);
/// TimeOfFlightInformationUsed (0018,9755) CS
pub const TIME_OF_FLIGHT_INFORMATION_USED: Tag = Tag(0x0018, 0x9755);
/// ReconstructionType (0018,9756) CS
pub const RECONSTRUCTION_TYPE: Tag = Tag(0x0018, 0x9756);
/// DecayCorrected (0018,9758) CS
pub const DECAY_CORRECTED: Tag = Tag(0x0018, 0x9758);
/// AttenuationCorrected (0018,9759) CS
pub const ATTENUATION_CORRECTED: Tag = Tag(0x0018, 0x9759);
/// ScatterCorrected (0018,9760) CS
pub const SCATTER_CORRECTED: Tag = Tag(0x0018, 0x9760);
/// DeadTimeCorrected (0018,9761) CS
pub const DEAD_TIME_CORRECTED: Tag = Tag(0x0018, 0x9761);
/// GantryMotionCorrected (0018,9762) CS
pub const GANTRY_MOTION_CORRECTED: Tag = Tag(0x0018, 0x9762);
/// PatientMotionCorrected (0018,9763) CS
pub const PATIENT_MOTION_CORRECTED: Tag = Tag(0x0018, 0x9763);
/// CountLossNormalizationCorrected (0018,9764) CS
pub const COUNT_LOSS_NORMALIZATION_CORRECTED: Tag = Tag(0x0018, 0x9764);
/// RandomsCorrected (0018,9765) CS
pub const RANDOMS_CORRECTED: Tag = Tag(0x0018, 0x9765);
/// NonUniformRadialSamplingCorrected (0018,9766) CS
pub const NON_UNIFORM_RADIAL_SAMPLING_CORRECTED: Tag = Tag(0x0018, 0x9766);
/// SensitivityCalibrated (0018,9767) CS
pub const SENSITIVITY_CALIBRATED: Tag = Tag(0x0018, 0x9767);
/// DetectorNormalizationCorrection (0018,9768) CS
pub const DETECTOR_NORMALIZATION_CORRECTION: Tag = Tag(0x0018, 0x9768);
/// IterativeReconstructionMethod (0018,9769) CS
pub const ITERATIVE_RECONSTRUCTION_METHOD: Tag = Tag(0x0018, 0x9769);
/// AttenuationCorrectionTemporalRelationship (0018,9770) CS
pub const ATTENUATION_CORRECTION_TEMPORAL_RELATIONSHIP: Tag = Tag(0x0018, 0x9770);
/// PatientPhysiologicalStateSequence (0018,9771) SQ
pub const PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE: Tag = Tag(0x0018, 0x9771);
/// PatientPhysiologicalStateCodeSequence (0018,9772) SQ
pub const PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9772);
/// DepthsOfFocus (0018,9801) FD
pub const DEPTHS_OF_FOCUS: Tag = Tag(0x0018, 0x9801);
/// ExcludedIntervalsSequence (0018,9803) SQ
pub const EXCLUDED_INTERVALS_SEQUENCE: Tag = Tag(0x0018, 0x9803);
/// ExclusionStartDateTime (0018,9804) DT
pub const EXCLUSION_START_DATE_TIME: Tag = Tag(0x0018, 0x9804);
/// ExclusionDuration (0018,9805) FD
pub const EXCLUSION_DURATION: Tag = Tag(0x0018, 0x9805);
/// USImageDescriptionSequence (0018,9806) SQ
pub const US_IMAGE_DESCRIPTION_SEQUENCE: Tag = Tag(0x0018, 0x9806);
/// ImageDataTypeSequence (0018,9807) SQ
pub const IMAGE_DATA_TYPE_SEQUENCE: Tag = Tag(0x0018, 0x9807);
/// DataType (0018,9808) CS
pub const DATA_TYPE: Tag = Tag(0x0018, 0x9808);
/// TransducerScanPatternCodeSequence (0018,9809) SQ
pub const TRANSDUCER_SCAN_PATTERN_CODE_SEQUENCE: Tag = Tag(0x0018, 0x9809);
/// AliasedDataType (0018,980B) CS
pub const ALIASED_DATA_TYPE: Tag = Tag(0x0018, 0x980B);
/// PositionMeasuringDeviceUsed (0018,980C) CS
pub const POSITION_MEASURING_DEVICE_USED: Tag = Tag(0x0018, 0x980C);
/// TransducerGeometryCodeSequence (0018,980D) SQ
pub const TRANSDUCER_GEOMETRY_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980D);
/// TransducerBeamSteeringCodeSequence (0018,980E) SQ
pub const TRANSDUCER_BEAM_STEERING_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980E);
/// TransducerApplicationCodeSequence (0018,980F) SQ
pub const TRANSDUCER_APPLICATION_CODE_SEQUENCE: Tag = Tag(0x0018, 0x980F);
/// ZeroVelocityPixelValue (0018,9810) US
pub const ZERO_VELOCITY_PIXEL_VALUE: Tag = Tag(0x0018, 0x9810);
/// ContributingEquipmentSequence (0018,A001) SQ
pub const CONTRIBUTING_EQUIPMENT_SEQUENCE: Tag = Tag(0x0018, 0xA001);
/// ContributionDateTime (0018,A002) DT
pub const CONTRIBUTION_DATE_TIME: Tag = Tag(0x0018, 0xA002);
/// ContributionDescription (0018,A003) ST
pub const CONTRIBUTION_DESCRIPTION: Tag = Tag(0x0018, 0xA003);
/// StudyInstanceUID (0020,000D) UI
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// IsotopeNumber (0020,0014) IS (retired)
pub const ISOTOPE_NUMBER: Tag = Tag(0x0020, 0x0014);
/// PhaseNumber (0020,0015) IS (retired)
pub const PHASE_NUMBER: Tag = Tag(0x0020, 0x0015);
/// IntervalNumber (0020,0016) IS (retired)
pub const INTERVAL_NUMBER: Tag = Tag(0x0020, 0x0016);
/// TimeSlotNumber (0020,0017) IS (retired)
pub const TIME_SLOT_NUMBER: Tag = Tag(0x0020, 0x0017);
/// AngleNumber (0020,0018) IS (retired)
pub const ANGLE_NUMBER: Tag = Tag(0x0020, 0x0018);
/// ItemNumber (0020,0019) IS
pub const ITEM_NUMBER: Tag = Tag(0x0020, 0x0019);
/// PatientOrientation (0020,0020) CS
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// OverlayNumber (0020,0022) IS (retired)
pub const OVERLAY_NUMBER: Tag = Tag(0x0020, 0x0022);
/// CurveNumber (0020,0024) IS (retired)
pub const CURVE_NUMBER: Tag = Tag(0x0020, 0x0024);
/// LUTNumber (0020,0026) IS (retired)
pub const LUT_NUMBER: Tag = Tag(0x0020, 0x0026);
/// PyramidLabel (0020,0027) LO
pub const PYRAMID_LABEL: Tag = Tag(0x0020, 0x0027);
/// ImagePosition (0020,0030) DS (retired)
pub const IMAGE_POSITION: Tag = Tag(0x0020, 0x0030);
/// ImagePositionPatient (0020,0032) DS
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientation (0020,0035) DS (retired)
pub const IMAGE_ORIENTATION: Tag = Tag(0x0020, 0x0035);
/// ImageOrientationPatient (0020,0037) DS
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Location (0020,0050) DS (retired)
pub const LOCATION: Tag = Tag(0x0020, 0x0050);
/// FrameOfReferenceUID (0020,0052) UI
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// ImageLaterality (0020,0062) CS
pub const IMAGE_LATERALITY: Tag = Tag(0x0020, 0x0062);
/// ImageGeometryType (0020,0070) LO (retired)
pub const IMAGE_GEOMETRY_TYPE: Tag = Tag(0x0020, 0x0070);
/// MaskingImage (0020,0080) CS (retired)
pub const MASKING_IMAGE: Tag = Tag(0x0020, 0x0080);
/// ReportNumber (0020,00AA) IS (retired)
pub const REPORT_NUMBER: Tag = Tag(0x0020, 0x00AA);
/// TemporalPositionIdentifier (0020,0100) IS
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// NumberOfTemporalPositions (0020,0105) IS
pub const NUMBER_OF_TEMPORAL_POSITIONS: Tag = Tag(0x0020, 0x0105);
/// TemporalResolution (0020,0110) DS
pub const TEMPORAL_RESOLUTION: Tag = Tag(0x0020, 0x0110);
/// SynchronizationFrameOfReferenceUID (0020,0200) UI
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// SOPInstanceUIDOfConcatenationSource (0020,0242) UI
pub const SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE: Tag = Tag(0x0020, 0x0242);
/// SeriesInStudy (0020,1000) IS (retired)
pub const SERIES_IN_STUDY: Tag = Tag(0x0020, 0x1000);
/// AcquisitionsInSeries (0020,1001) IS (retired)
pub const ACQUISITIONS_IN_SERIES: Tag = Tag(0x0020, 0x1001);
/// ImagesInAcquisition (0020,1002) IS
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// ImagesInSeries (0020,1003) IS (retired)
pub const IMAGES_IN_SERIES: Tag = Tag(0x0020, 0x1003);
/// AcquisitionsInStudy (0020,1004) IS (retired)
pub const ACQUISITIONS_IN_STUDY: Tag = Tag(0x0020, 0x1004);
/// ImagesInStudy (0020,1005) IS (retired)
pub const IMAGES_IN_STUDY: Tag = Tag(0x0020, 0x1005);
/// Reference (0020,1020) LO (retired)
pub const REFERENCE: Tag = Tag(0x0020, 0x1020);
/// TargetPositionReferenceIndicator (0020,103F) LO
pub const TARGET_POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x103F);
/// PositionReferenceIndicator (0020,1040) LO
pub const POSITION_REFERENCE_INDICATOR: Tag = Tag(0x0020, 0x1040);
/// SliceLocation (0020,1041) DS
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// OtherStudyNumbers (0020,1070) IS (retired)
pub const OTHER_STUDY_NUMBERS: Tag = Tag(0x0020, 0x1070);
/// NumberOfPatientRelatedStudies (0020,1200) IS
pub const NUMBER_OF_PATIENT_RELATED_STUDIES: Tag = Tag(0x0020, 0x1200);
/// NumberOfPatientRelatedSeries (0020,1202) IS
pub const NUMBER_OF_PATIENT_RELATED_SERIES: Tag = Tag(0x0020, 0x1202);
/// NumberOfPatientRelatedInstances (0020,1204) IS
pub const NUMBER_OF_PATIENT_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1204);
/// NumberOfStudyRelatedSeries (0020,1206) IS
pub const NUMBER_OF_STUDY_RELATED_SERIES: Tag = Tag(0x0020, 0x1206);
/// NumberOfStudyRelatedInstances (0020,1208) IS
pub const NUMBER_OF_STUDY_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1208);
/// NumberOfSeriesRelatedInstances (0020,1209) IS
pub const NUMBER_OF_SERIES_RELATED_INSTANCES: Tag = Tag(0x0020, 0x1209);
/// ModifyingDeviceID (0020,3401) CS (retired)
pub const MODIFYING_DEVICE_ID: Tag = Tag(0x0020, 0x3401);
/// ModifiedImageID (0020,3402) CS (retired)
pub const MODIFIED_IMAGE_ID: Tag = Tag(0x0020, 0x3402);
/// ModifiedImageDate (0020,3403) DA (retired)
pub const MODIFIED_IMAGE_DATE: Tag = Tag(0x0020, 0x3403);
/// ModifyingDeviceManufacturer (0020,3404) LO (retired)
pub const MODIFYING_DEVICE_MANUFACTURER: Tag = Tag(0x0020, 0x3404);
/// ModifiedImageTime (0020,3405) TM (retired)
pub const MODIFIED_IMAGE_TIME: Tag = Tag(0x0020, 0x3405);
/// ModifiedImageDescription (0020,3406) LO (retired)
pub const MODIFIED_IMAGE_DESCRIPTION: Tag = Tag(0x0020, 0x3406);
/// ImageComments (0020,4000) LT
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// OriginalImageIdentification (0020,5000) AT (retired)
pub const ORIGINAL_IMAGE_IDENTIFICATION: Tag = Tag(0x0020, 0x5000);
/// OriginalImageIdentificationNomenclature (0020,5002) LO (retired)
pub const ORIGINAL_IMAGE_IDENTIFICATION_NOMENCLATURE: Tag = Tag(0x0020, 0x5002);
/// StackID (0020,9056) SH
pub const STACK_ID: Tag = Tag(0x0020, 0x9056);
/// InStackPositionNumber (0020,9057) UL
pub const IN_STACK_POSITION_NUMBER: Tag = Tag(0x0020, 0x9057);
/// FrameAnatomySequence (0020,9071) SQ
pub const FRAME_ANATOMY_SEQUENCE: Tag = Tag(0x0020, 0x9071);
/// FrameLaterality (0020,9072) CS
pub const FRAME_LATERALITY: Tag = Tag(0x0020, 0x9072);
/// FrameContentSequence (0020,9111) SQ
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// PlanePositionSequence (0020,9113) SQ
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// PlaneOrientationSequence (0020,9116) SQ
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// TemporalPositionIndex (0020,9128) UL
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// NominalCardiacTriggerDelayTime (0020,9153) FD
pub const NOMINAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9153);
/// NominalCardiacTriggerTimePriorToRPeak (0020,9154) FL
pub const NOMINAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK: Tag = Tag(0x0020, 0x9154);
/// ActualCardiacTriggerTimePriorToRPeak (0020,9155) FL
pub const ACTUAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK: Tag = Tag(0x0020, 0x9155);
/// FrameAcquisitionNumber (0020,9156) US
pub const FRAME_ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x9156);
/// DimensionIndexValues (0020,9157) UL
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// FrameComments (0020,9158) LT
pub const FRAME_COMMENTS: Tag = Tag(0x0020, 0x9158);
/// ConcatenationUID (0020,9161) UI
pub const CONCATENATION_UID: Tag = Tag(0x0020, 0x9161);
/// InConcatenationNumber (0020,9162) US
pub const IN_CONCATENATION_NUMBER: Tag = Tag(0x0020, 0x9162);
/// InConcatenationTotalNumber (0020,9163) US
pub const IN_CONCATENATION_TOTAL_NUMBER: Tag = Tag(0x0020, 0x9163);
/// DimensionOrganizationUID (0020,9164) UI
pub const DIMENSION_ORGANIZATION_UID: Tag = Tag(0x0020, 0x9164);
/// DimensionIndexPointer (0020,9165) AT
pub const DIMENSION_INDEX_POINTER: Tag = Tag(0x0020, 0x9165);
/// FunctionalGroupPointer (0020,9167) AT
pub const FUNCTIONAL_GROUP_POINTER: Tag = Tag(0x0020, 0x9167);
/// UnassignedSharedConvertedAttributesSequence (0020,9170) SQ
pub const UNASSIGNED_SHARED_CONVERTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9170);
/// UnassignedPerFrameConvertedAttributesSequence (0020,9171) SQ
pub const UNASSIGNED_PER_FRAME_CONVERTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9171);
/// ConversionSourceAttributesSequence (0020,9172) SQ
pub const CONVERSION_SOURCE_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0020, 0x9172);
/// DimensionIndexPrivateCreator (0020,9213) LO
pub const DIMENSION_INDEX_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9213);
/// DimensionOrganizationSequence (0020,9221) SQ
pub const DIMENSION_ORGANIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9221);
/// DimensionIndexSequence (0020,9222) SQ
pub const DIMENSION_INDEX_SEQUENCE: Tag = Tag(0x0020, 0x9222);
/// ConcatenationFrameOffsetNumber (0020,9228) UL
pub const CONCATENATION_FRAME_OFFSET_NUMBER: Tag = Tag(0x0020, 0x9228);
/// FunctionalGroupPrivateCreator (0020,9238) LO
pub const FUNCTIONAL_GROUP_PRIVATE_CREATOR: Tag = Tag(0x0020, 0x9238);
/// NominalPercentageOfCardiacPhase (0020,9241) FL
pub const NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE: Tag = Tag(0x0020, 0x9241);
/// NominalPercentageOfRespiratoryPhase (0020,9245) FL
pub const NOMINAL_PERCENTAGE_OF_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9245);
/// StartingRespiratoryAmplitude (0020,9246) FL
pub const STARTING_RESPIRATORY_AMPLITUDE: Tag = Tag(0x0020, 0x9246);
/// StartingRespiratoryPhase (0020,9247) CS
pub const STARTING_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9247);
/// EndingRespiratoryAmplitude (0020,9248) FL
pub const ENDING_RESPIRATORY_AMPLITUDE: Tag = Tag(0x0020, 0x9248);
/// EndingRespiratoryPhase (0020,9249) CS
pub const ENDING_RESPIRATORY_PHASE: Tag = Tag(0x0020, 0x9249);
/// RespiratoryTriggerType (0020,9250) CS
pub const RESPIRATORY_TRIGGER_TYPE: Tag = Tag(0x0020, 0x9250);
/// RRIntervalTimeNominal (0020,9251) FD
pub const RR_INTERVAL_TIME_NOMINAL: Tag = Tag(0x0020, 0x9251);
/// ActualCardiacTriggerDelayTime (0020,9252) FD
pub const ACTUAL_CARDIAC_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9252);
/// RespiratorySynchronizationSequence (0020,9253) SQ
pub const RESPIRATORY_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0020, 0x9253);
/// RespiratoryIntervalTime (0020,9254) FD
pub const RESPIRATORY_INTERVAL_TIME: Tag = Tag(0x0020, 0x9254);
/// NominalRespiratoryTriggerDelayTime (0020,9255) FD
pub const NOMINAL_RESPIRATORY_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9255);
/// RespiratoryTriggerDelayThreshold (0020,9256) FD
pub const RESPIRATORY_TRIGGER_DELAY_THRESHOLD: Tag = Tag(0x0020, 0x9256);
/// ActualRespiratoryTriggerDelayTime (0020,9257) FD
pub const ACTUAL_RESPIRATORY_TRIGGER_DELAY_TIME: Tag = Tag(0x0020, 0x9257);
/// ImagePositionVolume (0020,9301) FD
pub const IMAGE_POSITION_VOLUME: Tag = Tag(0x0020, 0x9301);
/// ImageOrientationVolume (0020,9302) FD
pub const IMAGE_ORIENTATION_VOLUME: Tag = Tag(0x0020, 0x9302);
/// UltrasoundAcquisitionGeometry (0020,9307) CS
pub const ULTRASOUND_ACQUISITION_GEOMETRY: Tag = Tag(0x0020, 0x9307);
/// ApexPosition (0020,9308) FD
pub const APEX_POSITION: Tag = Tag(0x0020, 0x9308);
/// VolumeToTransducerMappingMatrix (0020,9309) FD
pub const VOLUME_TO_TRANSDUCER_MAPPING_MATRIX: Tag = Tag(0x0020, 0x9309);
/// VolumeToTableMappingMatrix (0020,930A) FD
pub const VOLUME_TO_TABLE_MAPPING_MATRIX: Tag = Tag(0x0020, 0x930A);
/// VolumeToTransducerRelationship (0020,930B) CS
pub const VOLUME_TO_TRANSDUCER_RELATIONSHIP: Tag = Tag(0x0020, 0x930B);
/// PatientFrameOfReferenceSource (0020,930C) CS
pub const PATIENT_FRAME_OF_REFERENCE_SOURCE: Tag = Tag(0x0020, 0x930C);
/// TemporalPositionTimeOffset (0020,930D) FD
pub const TEMPORAL_POSITION_TIME_OFFSET: Tag = Tag(0x0020, 0x930D);
/// PlanePositionVolumeSequence (0020,930E) SQ
pub const PLANE_POSITION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930E);
/// PlaneOrientationVolumeSequence (0020,930F) SQ
pub const PLANE_ORIENTATION_VOLUME_SEQUENCE: Tag = Tag(0x0020, 0x930F);
/// TemporalPositionSequence (0020,9310) SQ
pub const TEMPORAL_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9310);
/// DimensionOrganizationType (0020,9311) CS
pub const DIMENSION_ORGANIZATION_TYPE: Tag = Tag(0x0020, 0x9311);
/// VolumeFrameOfReferenceUID (0020,9312) UI
pub const VOLUME_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x9312);
/// TableFrameOfReferenceUID (0020,9313) UI
pub const TABLE_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x9313);
/// DimensionDescriptionLabel (0020,9421) LO
pub const DIMENSION_DESCRIPTION_LABEL: Tag = Tag(0x0020, 0x9421);
/// PatientOrientationInFrameSequence (0020,9450) SQ
pub const PATIENT_ORIENTATION_IN_FRAME_SEQUENCE: Tag = Tag(0x0020, 0x9450);
/// FrameLabel (0020,9453) LO
pub const FRAME_LABEL: Tag = Tag(0x0020, 0x9453);
/// AcquisitionIndex (0020,9518) US
pub const ACQUISITION_INDEX: Tag = Tag(0x0020, 0x9518);
/// ContributingSOPInstancesReferenceSequence (0020,9529) SQ
pub const CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE: Tag = Tag(0x0020, 0x9529);
/// ReconstructionIndex (0020,9536) US
pub const RECONSTRUCTION_INDEX: Tag = Tag(0x0020, 0x9536);
/// LightPathFilterPassThroughWavelength (0022,0001) US
pub const LIGHT_PATH_FILTER_PASS_THROUGH_WAVELENGTH: Tag = Tag(0x0022, 0x0001);
/// LightPathFilterPassBand (0022,0002) US
pub const LIGHT_PATH_FILTER_PASS_BAND: Tag = Tag(0x0022, 0x0002);
/// ImagePathFilterPassThroughWavelength (0022,0003) US
pub const IMAGE_PATH_FILTER_PASS_THROUGH_WAVELENGTH: Tag = Tag(0x0022, 0x0003);
/// ImagePathFilterPassBand (0022,0004) US
pub const IMAGE_PATH_FILTER_PASS_BAND: Tag = Tag(0x0022, 0x0004);
/// PatientEyeMovementCommanded (0022,0005) CS
pub const PATIENT_EYE_MOVEMENT_COMMANDED: Tag = Tag(0x0022, 0x0005);
/// PatientEyeMovementCommandCodeSequence (0022,0006) SQ
pub const PATIENT_EYE_MOVEMENT_COMMAND_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0006);
/// SphericalLensPower (0022,0007) FL
pub const SPHERICAL_LENS_POWER: Tag = Tag(0x0022, 0x0007);
/// CylinderLensPower (0022,0008) FL
pub const CYLINDER_LENS_POWER: Tag = Tag(0x0022, 0x0008);
/// CylinderAxis (0022,0009) FL
pub const CYLINDER_AXIS: Tag = Tag(0x0022, 0x0009);
/// EmmetropicMagnification (0022,000A) FL
pub const EMMETROPIC_MAGNIFICATION: Tag = Tag(0x0022, 0x000A);
/// IntraOcularPressure (0022,000B) FL
pub const INTRA_OCULAR_PRESSURE: Tag = Tag(0x0022, 0x000B);
/// HorizontalFieldOfView (0022,000C) FL
pub const HORIZONTAL_FIELD_OF_VIEW: Tag = Tag(0x0022, 0x000C);
/// PupilDilated (0022,000D) CS
pub const PUPIL_DILATED: Tag = Tag(0x0022, 0x000D);
/// DegreeOfDilation (0022,000E) FL
pub const DEGREE_OF_DILATION: Tag = Tag(0x0022, 0x000E);
/// VertexDistance (0022,000F) FD
pub const VERTEX_DISTANCE: Tag = Tag(0x0022, 0x000F);
/// StereoBaselineAngle (0022,0010) FL
pub const STEREO_BASELINE_ANGLE: Tag = Tag(0x0022, 0x0010);
/// StereoBaselineDisplacement (0022,0011) FL
pub const STEREO_BASELINE_DISPLACEMENT: Tag = Tag(0x0022, 0x0011);
/// StereoHorizontalPixelOffset (0022,0012) FL
pub const STEREO_HORIZONTAL_PIXEL_OFFSET: Tag = Tag(0x0022, 0x0012);
/// StereoVerticalPixelOffset (0022,0013) FL
pub const STEREO_VERTICAL_PIXEL_OFFSET: Tag = Tag(0x0022, 0x0013);
/// StereoRotation (0022,0014) FL
pub const STEREO_ROTATION: Tag = Tag(0x0022, 0x0014);
/// AcquisitionDeviceTypeCodeSequence (0022,0015) SQ
pub const ACQUISITION_DEVICE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0015);
/// IlluminationTypeCodeSequence (0022,0016) SQ
pub const ILLUMINATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0016);
/// LightPathFilterTypeStackCodeSequence (0022,0017) SQ
pub const LIGHT_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0017);
/// ImagePathFilterTypeStackCodeSequence (0022,0018) SQ
pub const IMAGE_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0018);
/// LensesCodeSequence (0022,0019) SQ
pub const LENSES_CODE_SEQUENCE: Tag = Tag(0x0022, 0x0019);
/// ChannelDescriptionCodeSequence (0022,001A) SQ
pub const CHANNEL_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001A);
/// RefractiveStateSequence (0022,001B) SQ
pub const REFRACTIVE_STATE_SEQUENCE: Tag = Tag(0x0022, 0x001B);
/// MydriaticAgentCodeSequence (0022,001C) SQ
pub const MYDRIATIC_AGENT_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001C);
/// RelativeImagePositionCodeSequence (0022,001D) SQ
pub const RELATIVE_IMAGE_POSITION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x001D);
/// CameraAngleOfView (0022,001E) FL
pub const CAMERA_ANGLE_OF_VIEW: Tag = Tag(0x0022, 0x001E);
/// StereoPairsSequence (0022,0020) SQ
pub const STEREO_PAIRS_SEQUENCE: Tag = Tag(0x0022, 0x0020);
/// LeftImageSequence (0022,0021) SQ
pub const LEFT_IMAGE_SEQUENCE: Tag = Tag(0x0022, 0x0021);
/// RightImageSequence (0022,0022) SQ
pub const RIGHT_IMAGE_SEQUENCE: Tag = Tag(0x0022, 0x0022);
/// StereoPairsPresent (0022,0028) CS
pub const STEREO_PAIRS_PRESENT: Tag = Tag(0x0022, 0x0028);
/// AxialLengthOfTheEye (0022,0030) FL
pub const AXIAL_LENGTH_OF_THE_EYE: Tag = Tag(0x0022, 0x0030);
/// OphthalmicFrameLocationSequence (0022,0031) SQ
pub const OPHTHALMIC_FRAME_LOCATION_SEQUENCE: Tag = Tag(0x0022, 0x0031);
/// ReferenceCoordinates (0022,0032) FL
pub const REFERENCE_COORDINATES: Tag = Tag(0x0022, 0x0032);
/// DepthSpatialResolution (0022,0035) FL
pub const DEPTH_SPATIAL_RESOLUTION: Tag = Tag(0x0022, 0x0035);
/// MaximumDepthDistortion (0022,0036) FL
pub const MAXIMUM_DEPTH_DISTORTION: Tag = Tag(0x0022, 0x0036);
/// AlongScanSpatialResolution (0022,0037) FL
pub const ALONG_SCAN_SPATIAL_RESOLUTION: Tag = Tag(0x0022, 0x0037);
/// MaximumAlongScanDistortion (0022,0038) FL
pub const MAXIMUM_ALONG_SCAN_DISTORTION: Tag = Tag(0x0022, 0x0038);
/// OphthalmicImageOrientation (0022,0039) CS
pub const OPHTHALMIC_IMAGE_ORIENTATION: Tag = Tag(0x0022, 0x0039);
/// DepthOfTransverseImage (0022,0041) FL
pub const DEPTH_OF_TRANSVERSE_IMAGE: Tag = Tag(0x0022, 0x0041);
/// MydriaticAgentConcentrationUnitsSequence (0022,0042) SQ
pub const MYDRIATIC_AGENT_CONCENTRATION_UNITS_SEQUENCE: Tag = Tag(0x0022, 0x0042);
/// AcrossScanSpatialResolution (0022,0048) FL
pub const ACROSS_SCAN_SPATIAL_RESOLUTION: Tag = Tag(0x0022, 0x0048);
/// MaximumAcrossScanDistortion (0022,0049) FL
pub const MAXIMUM_ACROSS_SCAN_DISTORTION: Tag = Tag(0x0022, 0x0049);
/// MydriaticAgentConcentration (0022,004E) DS
pub const MYDRIATIC_AGENT_CONCENTRATION: Tag = Tag(0x0022, 0x004E);
/// IlluminationWaveLength (0022,0055) FL
pub const ILLUMINATION_WAVE_LENGTH: Tag = Tag(0x0022, 0x0055);
/// IlluminationPower (0022,0056) FL
pub const ILLUMINATION_POWER: Tag = Tag(0x0022, 0x0056);
/// IlluminationBandwidth (0022,0057) FL
pub const ILLUMINATION_BANDWIDTH: Tag = Tag(0x0022, 0x0057);
/// MydriaticAgentSequence (0022,0058) SQ
pub const MYDRIATIC_AGENT_SEQUENCE: Tag = Tag(0x0022, 0x0058);
/// OphthalmicAxialMeasurementsRightEyeSequence (0022,1007) SQ
pub const OPHTHALMIC_AXIAL_MEASUREMENTS_RIGHT_EYE_SEQUENCE: Tag = Tag(0x0022, 0x1007);
/// OphthalmicAxialMeasurementsLeftEyeSequence (0022,1008) SQ
pub const OPHTHALMIC_AXIAL_MEASUREMENTS_LEFT_EYE_SEQUENCE: Tag = Tag(0x0022, 0x1008);
/// OphthalmicAxialMeasurementsDeviceType (0022,1009) CS
pub const OPHTHALMIC_AXIAL_MEASUREMENTS_DEVICE_TYPE: Tag = Tag(0x0022, 0x1009);
/// OphthalmicAxialLengthMeasurementsType (0022,1010) CS
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_TYPE: Tag = Tag(0x0022, 0x1010);
/// OphthalmicAxialLengthSequence (0022,1012) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1012);
/// OphthalmicAxialLength (0022,1019) FL
pub const OPHTHALMIC_AXIAL_LENGTH: Tag = Tag(0x0022, 0x1019);
/// LensStatusCodeSequence (0022,1024) SQ
pub const LENS_STATUS_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1024);
/// VitreousStatusCodeSequence (0022,1025) SQ
pub const VITREOUS_STATUS_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1025);
/// IOLFormulaCodeSequence (0022,1028) SQ
pub const IOL_FORMULA_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1028);
/// IOLFormulaDetail (0022,1029) LO
pub const IOL_FORMULA_DETAIL: Tag = Tag(0x0022, 0x1029);
/// KeratometerIndex (0022,1033) FL
pub const KERATOMETER_INDEX: Tag = Tag(0x0022, 0x1033);
/// SourceOfOphthalmicAxialLengthCodeSequence (0022,1035) SQ
pub const SOURCE_OF_OPHTHALMIC_AXIAL_LENGTH_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1035);
/// SourceOfCornealSizeDataCodeSequence (0022,1036) SQ
pub const SOURCE_OF_CORNEAL_SIZE_DATA_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1036);
/// TargetRefraction (0022,1037) FL
pub const TARGET_REFRACTION: Tag = Tag(0x0022, 0x1037);
/// RefractiveProcedureOccurred (0022,1039) CS
pub const REFRACTIVE_PROCEDURE_OCCURRED: Tag = Tag(0x0022, 0x1039);
/// RefractiveSurgeryTypeCodeSequence (0022,1040) SQ
pub const REFRACTIVE_SURGERY_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1040);
/// OphthalmicUltrasoundMethodCodeSequence (0022,1044) SQ
pub const OPHTHALMIC_ULTRASOUND_METHOD_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1044);
/// SurgicallyInducedAstigmatismSequence (0022,1045) SQ
pub const SURGICALLY_INDUCED_ASTIGMATISM_SEQUENCE: Tag = Tag(0x0022, 0x1045);
/// TypeOfOpticalCorrection (0022,1046) CS
pub const TYPE_OF_OPTICAL_CORRECTION: Tag = Tag(0x0022, 0x1046);
/// ToricIOLPowerSequence (0022,1047) SQ
pub const TORIC_IOL_POWER_SEQUENCE: Tag = Tag(0x0022, 0x1047);
/// PredictedToricErrorSequence (0022,1048) SQ
pub const PREDICTED_TORIC_ERROR_SEQUENCE: Tag = Tag(0x0022, 0x1048);
/// PreSelectedForImplantation (0022,1049) CS
pub const PRE_SELECTED_FOR_IMPLANTATION: Tag = Tag(0x0022, 0x1049);
/// ToricIOLPowerForExactEmmetropiaSequence (0022,104A) SQ
pub const TORIC_IOL_POWER_FOR_EXACT_EMMETROPIA_SEQUENCE: Tag = Tag(0x0022, 0x104A);
/// ToricIOLPowerForExactTargetRefractionSequence (0022,104B) SQ
pub const TORIC_IOL_POWER_FOR_EXACT_TARGET_REFRACTION_SEQUENCE: Tag = Tag(0x0022, 0x104B);
/// OphthalmicAxialLengthMeasurementsSequence (0022,1050) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEQUENCE: Tag = Tag(0x0022, 0x1050);
/// IOLPower (0022,1053) FL
pub const IOL_POWER: Tag = Tag(0x0022, 0x1053);
/// PredictedRefractiveError (0022,1054) FL
pub const PREDICTED_REFRACTIVE_ERROR: Tag = Tag(0x0022, 0x1054);
/// OphthalmicAxialLengthVelocity (0022,1059) FL
pub const OPHTHALMIC_AXIAL_LENGTH_VELOCITY: Tag = Tag(0x0022, 0x1059);
/// LensStatusDescription (0022,1065) LO
pub const LENS_STATUS_DESCRIPTION: Tag = Tag(0x0022, 0x1065);
/// VitreousStatusDescription (0022,1066) LO
pub const VITREOUS_STATUS_DESCRIPTION: Tag = Tag(0x0022, 0x1066);
/// IOLPowerSequence (0022,1090) SQ
pub const IOL_POWER_SEQUENCE: Tag = Tag(0x0022, 0x1090);
/// LensConstantSequence (0022,1092) SQ
pub const LENS_CONSTANT_SEQUENCE: Tag = Tag(0x0022, 0x1092);
/// IOLManufacturer (0022,1093) LO
pub const IOL_MANUFACTURER: Tag = Tag(0x0022, 0x1093);
/// LensConstantDescription (0022,1094) LO (retired)
pub const LENS_CONSTANT_DESCRIPTION: Tag = Tag(0x0022, 0x1094);
/// ImplantName (0022,1095) LO
pub const IMPLANT_NAME: Tag = Tag(0x0022, 0x1095);
/// KeratometryMeasurementTypeCodeSequence (0022,1096) SQ
pub const KERATOMETRY_MEASUREMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1096);
/// ImplantPartNumber (0022,1097) LO
pub const IMPLANT_PART_NUMBER: Tag = Tag(0x0022, 0x1097);
/// ReferencedOphthalmicAxialMeasurementsSequence (0022,1100) SQ
pub const REFERENCED_OPHTHALMIC_AXIAL_MEASUREMENTS_SEQUENCE: Tag = Tag(0x0022, 0x1100);
/// OphthalmicAxialLengthMeasurementsSegmentNameCodeSequence (0022,1101) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEGMENT_NAME_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1101);
/// RefractiveErrorBeforeRefractiveSurgeryCodeSequence (0022,1103) SQ
pub const REFRACTIVE_ERROR_BEFORE_REFRACTIVE_SURGERY_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1103);
/// IOLPowerForExactEmmetropia (0022,1121) FL
pub const IOL_POWER_FOR_EXACT_EMMETROPIA: Tag = Tag(0x0022, 0x1121);
/// IOLPowerForExactTargetRefraction (0022,1122) FL
pub const IOL_POWER_FOR_EXACT_TARGET_REFRACTION: Tag = Tag(0x0022, 0x1122);
/// AnteriorChamberDepthDefinitionCodeSequence (0022,1125) SQ
pub const ANTERIOR_CHAMBER_DEPTH_DEFINITION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1125);
/// LensThicknessSequence (0022,1127) SQ
pub const LENS_THICKNESS_SEQUENCE: Tag = Tag(0x0022, 0x1127);
/// AnteriorChamberDepthSequence (0022,1128) SQ
pub const ANTERIOR_CHAMBER_DEPTH_SEQUENCE: Tag = Tag(0x0022, 0x1128);
/// LensThickness (0022,1130) FL
pub const LENS_THICKNESS: Tag = Tag(0x0022, 0x1130);
/// AnteriorChamberDepth (0022,1131) FL
pub const ANTERIOR_CHAMBER_DEPTH: Tag = Tag(0x0022, 0x1131);
/// SourceOfLensThicknessDataCodeSequence (0022,1132) SQ
pub const SOURCE_OF_LENS_THICKNESS_DATA_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1132);
/// SourceOfAnteriorChamberDepthDataCodeSequence (0022,1133) SQ
pub const SOURCE_OF_ANTERIOR_CHAMBER_DEPTH_DATA_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1133);
/// SourceOfRefractiveMeasurementsSequence (0022,1134) SQ
pub const SOURCE_OF_REFRACTIVE_MEASUREMENTS_SEQUENCE: Tag = Tag(0x0022, 0x1134);
/// SourceOfRefractiveMeasurementsCodeSequence (0022,1135) SQ
pub const SOURCE_OF_REFRACTIVE_MEASUREMENTS_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1135);
/// OphthalmicAxialLengthMeasurementModified (0022,1140) CS
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENT_MODIFIED: Tag = Tag(0x0022, 0x1140);
/// OphthalmicAxialLengthDataSourceCodeSequence (0022,1150) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_DATA_SOURCE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1150);
/// OphthalmicAxialLengthAcquisitionMethodCodeSequence (0022,1153) SQ (retired)
pub const OPHTHALMIC_AXIAL_LENGTH_ACQUISITION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1153);
/// SignalToNoiseRatio (0022,1155) FL
pub const SIGNAL_TO_NOISE_RATIO: Tag = Tag(0x0022, 0x1155);
/// OphthalmicAxialLengthDataSourceDescription (0022,1159) LO
pub const OPHTHALMIC_AXIAL_LENGTH_DATA_SOURCE_DESCRIPTION: Tag = Tag(0x0022, 0x1159);
/// OphthalmicAxialLengthMeasurementsTotalLengthSequence (0022,1210) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_TOTAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1210);
/// OphthalmicAxialLengthMeasurementsSegmentalLengthSequence (0022,1211) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEGMENTAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1211);
/// OphthalmicAxialLengthMeasurementsLengthSummationSequence (0022,1212) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_LENGTH_SUMMATION_SEQUENCE: Tag = Tag(0x0022, 0x1212);
/// UltrasoundOphthalmicAxialLengthMeasurementsSequence (0022,1220) SQ
pub const ULTRASOUND_OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEQUENCE: Tag = Tag(0x0022, 0x1220);
/// OpticalOphthalmicAxialLengthMeasurementsSequence (0022,1225) SQ
pub const OPTICAL_OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEQUENCE: Tag = Tag(0x0022, 0x1225);
/// UltrasoundSelectedOphthalmicAxialLengthSequence (0022,1230) SQ
pub const ULTRASOUND_SELECTED_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1230);
/// OphthalmicAxialLengthSelectionMethodCodeSequence (0022,1250) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_SELECTION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1250);
/// OpticalSelectedOphthalmicAxialLengthSequence (0022,1255) SQ
pub const OPTICAL_SELECTED_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1255);
/// SelectedSegmentalOphthalmicAxialLengthSequence (0022,1257) SQ
pub const SELECTED_SEGMENTAL_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1257);
/// SelectedTotalOphthalmicAxialLengthSequence (0022,1260) SQ
pub const SELECTED_TOTAL_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE: Tag = Tag(0x0022, 0x1260);
/// OphthalmicAxialLengthQualityMetricSequence (0022,1262) SQ
pub const OPHTHALMIC_AXIAL_LENGTH_QUALITY_METRIC_SEQUENCE: Tag = Tag(0x0022, 0x1262);
/// OphthalmicAxialLengthQualityMetricTypeCodeSequence (0022,1265) SQ (retired)
pub const OPHTHALMIC_AXIAL_LENGTH_QUALITY_METRIC_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1265);
/// OphthalmicAxialLengthQualityMetricTypeDescription (0022,1273) LO (retired)
pub const OPHTHALMIC_AXIAL_LENGTH_QUALITY_METRIC_TYPE_DESCRIPTION: Tag = Tag(0x0022, 0x1273);
/// IntraocularLensCalculationsRightEyeSequence (0022,1300) SQ
pub const INTRAOCULAR_LENS_CALCULATIONS_RIGHT_EYE_SEQUENCE: Tag = Tag(0x0022, 0x1300);
/// IntraocularLensCalculationsLeftEyeSequence (0022,1310) SQ
pub const INTRAOCULAR_LENS_CALCULATIONS_LEFT_EYE_SEQUENCE: Tag = Tag(0x0022, 0x1310);
/// ReferencedOphthalmicAxialLengthMeasurementQCImageSequence (0022,1330) SQ
pub const REFERENCED_OPHTHALMIC_AXIAL_LENGTH_MEASUREMENT_QC_IMAGE_SEQUENCE: Tag = Tag(0x0022, 0x1330);
/// OphthalmicMappingDeviceType (0022,1415) CS
pub const OPHTHALMIC_MAPPING_DEVICE_TYPE: Tag = Tag(0x0022, 0x1415);
/// AcquisitionMethodCodeSequence (0022,1420) SQ
pub const ACQUISITION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1420);
/// AcquisitionMethodAlgorithmSequence (0022,1423) SQ
pub const ACQUISITION_METHOD_ALGORITHM_SEQUENCE: Tag = Tag(0x0022, 0x1423);
/// OphthalmicThicknessMapTypeCodeSequence (0022,1436) SQ
pub const OPHTHALMIC_THICKNESS_MAP_TYPE_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1436);
/// OphthalmicThicknessMappingNormalsSequence (0022,1443) SQ
pub const OPHTHALMIC_THICKNESS_MAPPING_NORMALS_SEQUENCE: Tag = Tag(0x0022, 0x1443);
/// RetinalThicknessDefinitionCodeSequence (0022,1445) SQ
pub const RETINAL_THICKNESS_DEFINITION_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1445);
/// PixelValueMappingToCodedConceptSequence (0022,1450) SQ
pub const PIXEL_VALUE_MAPPING_TO_CODED_CONCEPT_SEQUENCE: Tag = Tag(0x0022, 0x1450);
/// MappedPixelValue (0022,1452) US
pub const MAPPED_PIXEL_VALUE: Tag = Tag(0x0022, 0x1452);
/// PixelValueMappingExplanation (0022,1454) LO
pub const PIXEL_VALUE_MAPPING_EXPLANATION: Tag = Tag(0x0022, 0x1454);
/// OphthalmicThicknessMapQualityThresholdSequence (0022,1458) SQ
pub const OPHTHALMIC_THICKNESS_MAP_QUALITY_THRESHOLD_SEQUENCE: Tag = Tag(0x0022, 0x1458);
/// OphthalmicThicknessMapThresholdQualityRating (0022,1460) FL
pub const OPHTHALMIC_THICKNESS_MAP_THRESHOLD_QUALITY_RATING: Tag = Tag(0x0022, 0x1460);
/// AnatomicStructureReferencePoint (0022,1463) FL
pub const ANATOMIC_STRUCTURE_REFERENCE_POINT: Tag = Tag(0x0022, 0x1463);
/// RegistrationToLocalizerSequence (0022,1465) SQ
pub const REGISTRATION_TO_LOCALIZER_SEQUENCE: Tag = Tag(0x0022, 0x1465);
/// RegisteredLocalizerUnits (0022,1466) CS
pub const REGISTERED_LOCALIZER_UNITS: Tag = Tag(0x0022, 0x1466);
/// RegisteredLocalizerTopLeftHandCorner (0022,1467) FL
pub const REGISTERED_LOCALIZER_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0022, 0x1467);
/// RegisteredLocalizerBottomRightHandCorner (0022,1468) FL
pub const REGISTERED_LOCALIZER_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0022, 0x1468);
/// OphthalmicThicknessMapQualityRatingSequence (0022,1470) SQ
pub const OPHTHALMIC_THICKNESS_MAP_QUALITY_RATING_SEQUENCE: Tag = Tag(0x0022, 0x1470);
/// RelevantOPTAttributesSequence (0022,1472) SQ
pub const RELEVANT_OPT_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0022, 0x1472);
/// TransformationMethodCodeSequence (0022,1512) SQ
pub const TRANSFORMATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0022, 0x1512);
/// TransformationAlgorithmSequence (0022,1513) SQ
pub const TRANSFORMATION_ALGORITHM_SEQUENCE: Tag = Tag(0x0022, 0x1513);
/// OphthalmicFOV (0022,1517) FL
pub const OPHTHALMIC_FOV: Tag = Tag(0x0022, 0x1517);
/// TwoDimensionalToThreeDimensionalMapSequence (0022,1518) SQ
pub const TWO_DIMENSIONAL_TO_THREE_DIMENSIONAL_MAP_SEQUENCE: Tag = Tag(0x0022, 0x1518);
/// WideFieldOphthalmicPhotographyQualityRatingSequence (0022,1525) SQ
pub const WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_QUALITY_RATING_SEQUENCE: Tag = Tag(0x0022, 0x1525);
/// WideFieldOphthalmicPhotographyQualityThresholdSequence (0022,1526) SQ
pub const WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_QUALITY_THRESHOLD_SEQUENCE: Tag = Tag(0x0022, 0x1526);
/// WideFieldOphthalmicPhotographyThresholdQualityRating (0022,1527) FL
pub const WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_THRESHOLD_QUALITY_RATING: Tag = Tag(0x0022, 0x1527);
/// XCoordinatesCenterPixelViewAngle (0022,1528) FL
pub const X_COORDINATES_CENTER_PIXEL_VIEW_ANGLE: Tag = Tag(0x0022, 0x1528);
/// YCoordinatesCenterPixelViewAngle (0022,1529) FL
pub const Y_COORDINATES_CENTER_PIXEL_VIEW_ANGLE: Tag = Tag(0x0022, 0x1529);
/// NumberOfMapPoints (0022,1530) UL
pub const NUMBER_OF_MAP_POINTS: Tag = Tag(0x0022, 0x1530);
/// TwoDimensionalToThreeDimensionalMapData (0022,1531) OF
pub const TWO_DIMENSIONAL_TO_THREE_DIMENSIONAL_MAP_DATA: Tag = Tag(0x0022, 0x1531);
/// VisualFieldHorizontalExtent (0024,0010) FL
pub const VISUAL_FIELD_HORIZONTAL_EXTENT: Tag = Tag(0x0024, 0x0010);
/// VisualFieldVerticalExtent (0024,0011) FL
pub const VISUAL_FIELD_VERTICAL_EXTENT: Tag = Tag(0x0024, 0x0011);
/// VisualFieldShape (0024,0012) CS
pub const VISUAL_FIELD_SHAPE: Tag = Tag(0x0024, 0x0012);
/// ScreeningTestModeCodeSequence (0024,0016) SQ
pub const SCREENING_TEST_MODE_CODE_SEQUENCE: Tag = Tag(0x0024, 0x0016);
/// MaximumStimulusLuminance (0024,0018) FL
pub const MAXIMUM_STIMULUS_LUMINANCE: Tag = Tag(0x0024, 0x0018);
/// BackgroundLuminance (0024,0020) FL
pub const BACKGROUND_LUMINANCE: Tag = Tag(0x0024, 0x0020);
/// StimulusColorCodeSequence (0024,0021) SQ
pub const STIMULUS_COLOR_CODE_SEQUENCE: Tag = Tag(0x0024, 0x0021);
/// BackgroundIlluminationColorCodeSequence (0024,0024) SQ
pub const BACKGROUND_ILLUMINATION_COLOR_CODE_SEQUENCE: Tag = Tag(0x0024, 0x0024);
/// StimulusArea (0024,0025) FL
pub const STIMULUS_AREA: Tag = Tag(0x0024, 0x0025);
/// StimulusPresentationTime (0024,0028) FL
pub const STIMULUS_PRESENTATION_TIME: Tag = Tag(0x0024, 0x0028);
/// FixationSequence (0024,0032) SQ
pub const FIXATION_SEQUENCE: Tag = Tag(0x0024, 0x0032);
/// FixationMonitoringCodeSequence (0024,0033) SQ
pub const FIXATION_MONITORING_CODE_SEQUENCE: Tag = Tag(0x0024, 0x0033);
/// VisualFieldCatchTrialSequence (0024,0034) SQ
pub const VISUAL_FIELD_CATCH_TRIAL_SEQUENCE: Tag = Tag(0x0024, 0x0034);
/// FixationCheckedQuantity (0024,0035) US
pub const FIXATION_CHECKED_QUANTITY: Tag = Tag(0x0024, 0x0035);
/// PatientNotProperlyFixatedQuantity (0024,0036) US
pub const PATIENT_NOT_PROPERLY_FIXATED_QUANTITY: Tag = Tag(0x0024, 0x0036);
/// PresentedVisualStimuliDataFlag (0024,0037) CS
pub const PRESENTED_VISUAL_STIMULI_DATA_FLAG: Tag = Tag(0x0024, 0x0037);
/// NumberOfVisualStimuli (0024,0038) US
pub const NUMBER_OF_VISUAL_STIMULI: Tag = Tag(0x0024, 0x0038);
/// ExcessiveFixationLossesDataFlag (0024,0039) CS
pub const EXCESSIVE_FIXATION_LOSSES_DATA_FLAG: Tag = Tag(0x0024, 0x0039);
/// ExcessiveFixationLosses (0024,0040) CS
pub const EXCESSIVE_FIXATION_LOSSES: Tag = Tag(0x0024, 0x0040);
/// StimuliRetestingQuantity (0024,0042) US
pub const STIMULI_RETESTING_QUANTITY: Tag = Tag(0x0024, 0x0042);
/// CommentsOnPatientPerformanceOfVisualField (0024,0044) LT
pub const COMMENTS_ON_PATIENT_PERFORMANCE_OF_VISUAL_FIELD: Tag = Tag(0x0024, 0x0044);
/// FalseNegativesEstimateFlag (0024,0045) CS
pub const FALSE_NEGATIVES_ESTIMATE_FLAG: Tag = Tag(0x0024, 0x0045);
/// FalseNegativesEstimate (0024,0046) FL
pub const FALSE_NEGATIVES_ESTIMATE: Tag = Tag(0x0024, 0x0046);
/// NegativeCatchTrialsQuantity (0024,0048) US
pub const NEGATIVE_CATCH_TRIALS_QUANTITY: Tag = Tag(0x0024, 0x0048);
/// FalseNegativesQuantity (0024,0050) US
pub const FALSE_NEGATIVES_QUANTITY: Tag = Tag(0x0024, 0x0050);
/// ExcessiveFalseNegativesDataFlag (0024,0051) CS
pub const EXCESSIVE_FALSE_NEGATIVES_DATA_FLAG: Tag = Tag(0x0024, 0x0051);
/// ExcessiveFalseNegatives (0024,0052) CS
pub const EXCESSIVE_FALSE_NEGATIVES: Tag = Tag(0x0024, 0x0052);
/// FalsePositivesEstimateFlag (0024,0053) CS
pub const FALSE_POSITIVES_ESTIMATE_FLAG: Tag = Tag(0x0024, 0x0053);
/// FalsePositivesEstimate (0024,0054) FL
pub const FALSE_POSITIVES_ESTIMATE: Tag = Tag(0x0024, 0x0054);
/// CatchTrialsDataFlag (0024,0055) CS
pub const CATCH_TRIALS_DATA_FLAG: Tag = Tag(0x0024, 0x0055);
/// PositiveCatchTrialsQuantity (0024,0056) US
pub const POSITIVE_CATCH_TRIALS_QUANTITY: Tag = Tag(0x0024, 0x0056);
/// TestPointNormalsDataFlag (0024,0057) CS
pub const TEST_POINT_NORMALS_DATA_FLAG: Tag = Tag(0x0024, 0x0057);
/// TestPointNormalsSequence (0024,0058) SQ
pub const TEST_POINT_NORMALS_SEQUENCE: Tag = Tag(0x0024, 0x0058);
/// GlobalDeviationProbabilityNormalsFlag (0024,0059) CS
pub const GLOBAL_DEVIATION_PROBABILITY_NORMALS_FLAG: Tag = Tag(0x0024, 0x0059);
/// FalsePositivesQuantity (0024,0060) US
pub const FALSE_POSITIVES_QUANTITY: Tag = Tag(0x0024, 0x0060);
/// ExcessiveFalsePositivesDataFlag (0024,0061) CS
pub const EXCESSIVE_FALSE_POSITIVES_DATA_FLAG: Tag = Tag(0x0024, 0x0061);
/// ExcessiveFalsePositives (0024,0062) CS
pub const EXCESSIVE_FALSE_POSITIVES: Tag = Tag(0x0024, 0x0062);
/// VisualFieldTestNormalsFlag (0024,0063) CS
pub const VISUAL_FIELD_TEST_NORMALS_FLAG: Tag = Tag(0x0024, 0x0063);
/// ResultsNormalsSequence (0024,0064) SQ
pub const RESULTS_NORMALS_SEQUENCE: Tag = Tag(0x0024, 0x0064);
/// AgeCorrectedSensitivityDeviationAlgorithmSequence (0024,0065) SQ
pub const AGE_CORRECTED_SENSITIVITY_DEVIATION_ALGORITHM_SEQUENCE: Tag = Tag(0x0024, 0x0065);
/// GlobalDeviationFromNormal (0024,0066) FL
pub const GLOBAL_DEVIATION_FROM_NORMAL: Tag = Tag(0x0024, 0x0066);
/// GeneralizedDefectSensitivityDeviationAlgorithmSequence (0024,0067) SQ
pub const GENERALIZED_DEFECT_SENSITIVITY_DEVIATION_ALGORITHM_SEQUENCE: Tag = Tag(0x0024, 0x0067);
/// LocalizedDeviationFromNormal (0024,0068) FL
pub const LOCALIZED_DEVIATION_FROM_NORMAL: Tag = Tag(0x0024, 0x0068);
/// PatientReliabilityIndicator (0024,0069) LO
pub const PATIENT_RELIABILITY_INDICATOR: Tag = Tag(0x0024, 0x0069);
/// VisualFieldMeanSensitivity (0024,0070) FL
pub const VISUAL_FIELD_MEAN_SENSITIVITY: Tag = Tag(0x0024, 0x0070);
/// GlobalDeviationProbability (0024,0071) FL
pub const GLOBAL_DEVIATION_PROBABILITY: Tag = Tag(0x0024, 0x0071);
/// LocalDeviationProbabilityNormalsFlag (0024,0072) CS
pub const LOCAL_DEVIATION_PROBABILITY_NORMALS_FLAG: Tag = Tag(0x0024, 0x0072);
/// LocalizedDeviationProbability (0024,0073) FL
pub const LOCALIZED_DEVIATION_PROBABILITY: Tag = Tag(0x0024, 0x0073);
/// ShortTermFluctuationCalculated (0024,0074) CS
pub const SHORT_TERM_FLUCTUATION_CALCULATED: Tag = Tag(0x0024, 0x0074);
/// ShortTermFluctuation (0024,0075) FL
pub const SHORT_TERM_FLUCTUATION: Tag = Tag(0x0024, 0x0075);
/// ShortTermFluctuationProbabilityCalculated (0024,0076) CS
pub const SHORT_TERM_FLUCTUATION_PROBABILITY_CALCULATED: Tag = Tag(0x0024, 0x0076);
/// ShortTermFluctuationProbability (0024,0077) FL
pub const SHORT_TERM_FLUCTUATION_PROBABILITY: Tag = Tag(0x0024, 0x0077);
/// CorrectedLocalizedDeviationFromNormalCalculated (0024,0078) CS
pub const CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL_CALCULATED: Tag = Tag(0x0024, 0x0078);
/// CorrectedLocalizedDeviationFromNormal (0024,0079) FL
pub const CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL: Tag = Tag(0x0024, 0x0079);
/// CorrectedLocalizedDeviationFromNormalProbabilityCalculated (0024,0080) CS
pub const CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL_PROBABILITY_CALCULATED: Tag = Tag(0x0024, 0x0080);
/// CorrectedLocalizedDeviationFromNormalProbability (0024,0081) FL
pub const CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL_PROBABILITY: Tag = Tag(0x0024, 0x0081);
/// GlobalDeviationProbabilitySequence (0024,0083) SQ
pub const GLOBAL_DEVIATION_PROBABILITY_SEQUENCE: Tag = Tag(0x0024, 0x0083);
/// LocalizedDeviationProbabilitySequence (0024,0085) SQ
pub const LOCALIZED_DEVIATION_PROBABILITY_SEQUENCE: Tag = Tag(0x0024, 0x0085);
/// FovealSensitivityMeasured (0024,0086) CS
pub const FOVEAL_SENSITIVITY_MEASURED: Tag = Tag(0x0024, 0x0086);
/// FovealSensitivity (0024,0087) FL
pub const FOVEAL_SENSITIVITY: Tag = Tag(0x0024, 0x0087);
/// VisualFieldTestDuration (0024,0088) FL
pub const VISUAL_FIELD_TEST_DURATION: Tag = Tag(0x0024, 0x0088);
/// VisualFieldTestPointSequence (0024,0089) SQ
pub const VISUAL_FIELD_TEST_POINT_SEQUENCE: Tag = Tag(0x0024, 0x0089);
/// VisualFieldTestPointXCoordinate (0024,0090) FL
pub const VISUAL_FIELD_TEST_POINT_X_COORDINATE: Tag = Tag(0x0024, 0x0090);
/// VisualFieldTestPointYCoordinate (0024,0091) FL
pub const VISUAL_FIELD_TEST_POINT_Y_COORDINATE: Tag = Tag(0x0024, 0x0091);
/// AgeCorrectedSensitivityDeviationValue (0024,0092) FL
pub const AGE_CORRECTED_SENSITIVITY_DEVIATION_VALUE: Tag = Tag(0x0024, 0x0092);
/// StimulusResults (0024,0093) CS
pub const STIMULUS_RESULTS: Tag = Tag(0x0024, 0x0093);
/// SensitivityValue (0024,0094) FL
pub const SENSITIVITY_VALUE: Tag = Tag(0x0024, 0x0094);
/// RetestStimulusSeen (0024,0095) CS
pub const RETEST_STIMULUS_SEEN: Tag = Tag(0x0024, 0x0095);
/// RetestSensitivityValue (0024,0096) FL
pub const RETEST_SENSITIVITY_VALUE: Tag = Tag(0x0024, 0x0096);
/// VisualFieldTestPointNormalsSequence (0024,0097) SQ
pub const VISUAL_FIELD_TEST_POINT_NORMALS_SEQUENCE: Tag = Tag(0x0024, 0x0097);
/// QuantifiedDefect (0024,0098) FL
pub const QUANTIFIED_DEFECT: Tag = Tag(0x0024, 0x0098);
/// AgeCorrectedSensitivityDeviationProbabilityValue (0024,0100) FL
pub const AGE_CORRECTED_SENSITIVITY_DEVIATION_PROBABILITY_VALUE: Tag = Tag(0x0024, 0x0100);
/// GeneralizedDefectCorrectedSensitivityDeviationFlag (0024,0102) CS
pub const GENERALIZED_DEFECT_CORRECTED_SENSITIVITY_DEVIATION_FLAG: Tag = Tag(0x0024, 0x0102);
/// GeneralizedDefectCorrectedSensitivityDeviationValue (0024,0103) FL
pub const GENERALIZED_DEFECT_CORRECTED_SENSITIVITY_DEVIATION_VALUE: Tag = Tag(0x0024, 0x0103);
/// GeneralizedDefectCorrectedSensitivityDeviationProbabilityValue (0024,0104) FL
pub const GENERALIZED_DEFECT_CORRECTED_SENSITIVITY_DEVIATION_PROBABILITY_VALUE: Tag = Tag(0x0024, 0x0104);
/// MinimumSensitivityValue (0024,0105) FL
pub const MINIMUM_SENSITIVITY_VALUE: Tag = Tag(0x0024, 0x0105);
/// BlindSpotLocalized (0024,0106) CS
pub const BLIND_SPOT_LOCALIZED: Tag = Tag(0x0024, 0x0106);
/// BlindSpotXCoordinate (0024,0107) FL
pub const BLIND_SPOT_X_COORDINATE: Tag = Tag(0x0024, 0x0107);
/// BlindSpotYCoordinate (0024,0108) FL
pub const BLIND_SPOT_Y_COORDINATE: Tag = Tag(0x0024, 0x0108);
/// VisualAcuityMeasurementSequence (0024,0110) SQ
pub const VISUAL_ACUITY_MEASUREMENT_SEQUENCE: Tag = Tag(0x0024, 0x0110);
/// RefractiveParametersUsedOnPatientSequence (0024,0112) SQ
pub const REFRACTIVE_PARAMETERS_USED_ON_PATIENT_SEQUENCE: Tag = Tag(0x0024, 0x0112);
/// MeasurementLaterality (0024,0113) CS
pub const MEASUREMENT_LATERALITY: Tag = Tag(0x0024, 0x0113);
/// OphthalmicPatientClinicalInformationLeftEyeSequence (0024,0114) SQ
pub const OPHTHALMIC_PATIENT_CLINICAL_INFORMATION_LEFT_EYE_SEQUENCE: Tag = Tag(0x0024, 0x0114);
/// OphthalmicPatientClinicalInformationRightEyeSequence (0024,0115) SQ
pub const OPHTHALMIC_PATIENT_CLINICAL_INFORMATION_RIGHT_EYE_SEQUENCE: Tag = Tag(0x0024, 0x0115);
/// FovealPointNormativeDataFlag (0024,0117) CS
pub const FOVEAL_POINT_NORMATIVE_DATA_FLAG: Tag = Tag(0x0024, 0x0117);
/// FovealPointProbabilityValue (0024,0118) FL
pub const FOVEAL_POINT_PROBABILITY_VALUE: Tag = Tag(0x0024, 0x0118);
/// ScreeningBaselineMeasured (0024,0120) CS
pub const SCREENING_BASELINE_MEASURED: Tag = Tag(0x0024, 0x0120);
/// ScreeningBaselineMeasuredSequence (0024,0122) SQ
pub const SCREENING_BASELINE_MEASURED_SEQUENCE: Tag = Tag(0x0024, 0x0122);
/// ScreeningBaselineType (0024,0124) CS
pub const SCREENING_BASELINE_TYPE: Tag = Tag(0x0024, 0x0124);
/// ScreeningBaselineValue (0024,0126) FL
pub const SCREENING_BASELINE_VALUE: Tag = Tag(0x0024, 0x0126);
/// AlgorithmSource (0024,0202) LO
pub const ALGORITHM_SOURCE: Tag = Tag(0x0024, 0x0202);
/// DataSetName (0024,0306) LO
pub const DATA_SET_NAME: Tag = Tag(0x0024, 0x0306);
/// DataSetVersion (0024,0307) LO
pub const DATA_SET_VERSION: Tag = Tag(0x0024, 0x0307);
/// DataSetSource (0024,0308) LO
pub const DATA_SET_SOURCE: Tag = Tag(0x0024, 0x0308);
/// DataSetDescription (0024,0309) LO
pub const DATA_SET_DESCRIPTION: Tag = Tag(0x0024, 0x0309);
/// VisualFieldTestReliabilityGlobalIndexSequence (0024,0317) SQ
pub const VISUAL_FIELD_TEST_RELIABILITY_GLOBAL_INDEX_SEQUENCE: Tag = Tag(0x0024, 0x0317);
/// VisualFieldGlobalResultsIndexSequence (0024,0320) SQ
pub const VISUAL_FIELD_GLOBAL_RESULTS_INDEX_SEQUENCE: Tag = Tag(0x0024, 0x0320);
/// DataObservationSequence (0024,0325) SQ
pub const DATA_OBSERVATION_SEQUENCE: Tag = Tag(0x0024, 0x0325);
/// IndexNormalsFlag (0024,0338) CS
pub const INDEX_NORMALS_FLAG: Tag = Tag(0x0024, 0x0338);
/// IndexProbability (0024,0341) FL
pub const INDEX_PROBABILITY: Tag = Tag(0x0024, 0x0341);
/// IndexProbabilitySequence (0024,0344) SQ
pub const INDEX_PROBABILITY_SEQUENCE: Tag = Tag(0x0024, 0x0344);
/// SamplesPerPixel (0028,0002) US
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// SamplesPerPixelUsed (0028,0003) US
pub const SAMPLES_PER_PIXEL_USED: Tag = Tag(0x0028, 0x0003);
/// PhotometricInterpretation (0028,0004) CS
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// ImageDimensions (0028,0005) US (retired)
pub const IMAGE_DIMENSIONS: Tag = Tag(0x0028, 0x0005);
/// PlanarConfiguration (0028,0006) US
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// FrameDimensionPointer (0028,000A) AT
pub const FRAME_DIMENSION_POINTER: Tag = Tag(0x0028, 0x000A);
/// Rows (0028,0010) US
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Planes (0028,0012) US (retired)
pub const PLANES: Tag = Tag(0x0028, 0x0012);
/// UltrasoundColorDataPresent (0028,0014) US
pub const ULTRASOUND_COLOR_DATA_PRESENT: Tag = Tag(0x0028, 0x0014);
/// PixelSpacing (0028,0030) DS
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// ZoomFactor (0028,0031) DS
pub const ZOOM_FACTOR: Tag = Tag(0x0028, 0x0031);
/// ZoomCenter (0028,0032) DS
pub const ZOOM_CENTER: Tag = Tag(0x0028, 0x0032);
/// PixelAspectRatio (0028,0034) IS
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// ImageFormat (0028,0040) CS (retired)
pub const IMAGE_FORMAT: Tag = Tag(0x0028, 0x0040);
/// ManipulatedImage (0028,0050) LO (retired)
pub const MANIPULATED_IMAGE: Tag = Tag(0x0028, 0x0050);
/// CorrectedImage (0028,0051) CS
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
/// CompressionRecognitionCode (0028,005F) LO (retired)
pub const COMPRESSION_RECOGNITION_CODE: Tag = Tag(0x0028, 0x005F);
/// CompressionCode (0028,0060) CS (retired)
pub const COMPRESSION_CODE: Tag = Tag(0x0028, 0x0060);
/// CompressionOriginator (0028,0061) SH (retired)
pub const COMPRESSION_ORIGINATOR: Tag = Tag(0x0028, 0x0061);
/// CompressionLabel (0028,0062) LO (retired)
pub const COMPRESSION_LABEL: Tag = Tag(0x0028, 0x0062);
/// CompressionDescription (0028,0063) SH (retired)
pub const COMPRESSION_DESCRIPTION: Tag = Tag(0x0028, 0x0063);
/// CompressionSequence (0028,0065) CS (retired)
pub const COMPRESSION_SEQUENCE: Tag = Tag(0x0028, 0x0065);
/// CompressionStepPointers (0028,0066) AT (retired)
pub const COMPRESSION_STEP_POINTERS: Tag = Tag(0x0028, 0x0066);
/// RepeatInterval (0028,0068) US (retired)
pub const REPEAT_INTERVAL: Tag = Tag(0x0028, 0x0068);
/// BitsGrouped (0028,0069) US (retired)
pub const BITS_GROUPED: Tag = Tag(0x0028, 0x0069);
/// PerimeterTable (0028,0070) US (retired)
pub const PERIMETER_TABLE: Tag = Tag(0x0028, 0x0070);
/// PredictorRows (0028,0080) US (retired)
pub const PREDICTOR_ROWS: Tag = Tag(0x0028, 0x0080);
/// PredictorColumns (0028,0081) US (retired)
pub const PREDICTOR_COLUMNS: Tag = Tag(0x0028, 0x0081);
/// PredictorConstants (0028,0082) US (retired)
pub const PREDICTOR_CONSTANTS: Tag = Tag(0x0028, 0x0082);
/// BlockedPixels (0028,0090) CS (retired)
pub const BLOCKED_PIXELS: Tag = Tag(0x0028, 0x0090);
/// BlockRows (0028,0091) US (retired)
pub const BLOCK_ROWS: Tag = Tag(0x0028, 0x0091);
/// BlockColumns (0028,0092) US (retired)
pub const BLOCK_COLUMNS: Tag = Tag(0x0028, 0x0092);
/// RowOverlap (0028,0093) US (retired)
pub const ROW_OVERLAP: Tag = Tag(0x0028, 0x0093);
/// ColumnOverlap (0028,0094) US (retired)
pub const COLUMN_OVERLAP: Tag = Tag(0x0028, 0x0094);
/// BitsAllocated (0028,0100) US
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestValidPixelValue (0028,0104) US (retired)
pub const SMALLEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0104);
/// LargestValidPixelValue (0028,0105) US (retired)
pub const LARGEST_VALID_PIXEL_VALUE: Tag = Tag(0x0028, 0x0105);
/// SmallestImagePixelValue (0028,0106) US
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// SmallestPixelValueInSeries (0028,0108) US
pub const SMALLEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0108);
/// LargestPixelValueInSeries (0028,0109) US
pub const LARGEST_PIXEL_VALUE_IN_SERIES: Tag = Tag(0x0028, 0x0109);
/// SmallestImagePixelValueInPlane (0028,0110) US (retired)
pub const SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0110);
/// LargestImagePixelValueInPlane (0028,0111) US (retired)
pub const LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE: Tag = Tag(0x0028, 0x0111);
/// PixelPaddingValue (0028,0120) US
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// PixelPaddingRangeLimit (0028,0121) US
pub const PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0121);
/// FloatPixelPaddingValue (0028,0122) FL
pub const FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0122);
/// DoubleFloatPixelPaddingValue (0028,0123) FD
pub const DOUBLE_FLOAT_PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0123);
/// FloatPixelPaddingRangeLimit (0028,0124) FL
pub const FLOAT_PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0124);
/// DoubleFloatPixelPaddingRangeLimit (0028,0125) FD
pub const DOUBLE_FLOAT_PIXEL_PADDING_RANGE_LIMIT: Tag = Tag(0x0028, 0x0125);
/// ImageLocation (0028,0200) US (retired)
pub const IMAGE_LOCATION: Tag = Tag(0x0028, 0x0200);
/// QualityControlImage (0028,0300) CS
pub const QUALITY_CONTROL_IMAGE: Tag = Tag(0x0028, 0x0300);
/// BurnedInAnnotation (0028,0301) CS
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// RecognizableVisualFeatures (0028,0302) CS
pub const RECOGNIZABLE_VISUAL_FEATURES: Tag = Tag(0x0028, 0x0302);
/// LongitudinalTemporalInformationModified (0028,0303) CS
pub const LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED: Tag = Tag(0x0028, 0x0303);
/// ReferencedColorPaletteInstanceUID (0028,0304) UI
pub const REFERENCED_COLOR_PALETTE_INSTANCE_UID: Tag = Tag(0x0028, 0x0304);
/// TransformLabel (0028,0400) LO (retired)
pub const TRANSFORM_LABEL: Tag = Tag(0x0028, 0x0400);
/// TransformVersionNumber (0028,0401) LO (retired)
pub const TRANSFORM_VERSION_NUMBER: Tag = Tag(0x0028, 0x0401);
/// NumberOfTransformSteps (0028,0402) US (retired)
pub const NUMBER_OF_TRANSFORM_STEPS: Tag = Tag(0x0028, 0x0402);
/// SequenceOfCompressedData (0028,0403) LO (retired)
pub const SEQUENCE_OF_COMPRESSED_DATA: Tag = Tag(0x0028, 0x0403);
/// DetailsOfCoefficients (0028,0404) AT (retired)
pub const DETAILS_OF_COEFFICIENTS: Tag = Tag(0x0028, 0x0404);
/// DCTLabel (0028,0700) LO (retired)
pub const DCT_LABEL: Tag = Tag(0x0028, 0x0700);
/// DataBlockDescription (0028,0701) CS (retired)
pub const DATA_BLOCK_DESCRIPTION: Tag = Tag(0x0028, 0x0701);
/// DataBlock (0028,0702) AT (retired)
pub const DATA_BLOCK: Tag = Tag(0x0028, 0x0702);
/// NormalizationFactorFormat (0028,0710) US (retired)
pub const NORMALIZATION_FACTOR_FORMAT: Tag = Tag(0x0028, 0x0710);
/// ZonalMapNumberFormat (0028,0720) US (retired)
pub const ZONAL_MAP_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0720);
/// ZonalMapLocation (0028,0721) AT (retired)
pub const ZONAL_MAP_LOCATION: Tag = Tag(0x0028, 0x0721);
/// ZonalMapFormat (0028,0722) US (retired)
pub const ZONAL_MAP_FORMAT: Tag = Tag(0x0028, 0x0722);
/// AdaptiveMapFormat (0028,0730) US (retired)
pub const ADAPTIVE_MAP_FORMAT: Tag = Tag(0x0028, 0x0730);
/// CodeNumberFormat (0028,0740) US (retired)
pub const CODE_NUMBER_FORMAT: Tag = Tag(0x0028, 0x0740);
/// PixelSpacingCalibrationType (0028,0A02) CS
pub const PIXEL_SPACING_CALIBRATION_TYPE: Tag = Tag(0x0028, 0x0A02);
/// PixelSpacingCalibrationDescription (0028,0A04) LO
pub const PIXEL_SPACING_CALIBRATION_DESCRIPTION: Tag = Tag(0x0028, 0x0A04);
/// PixelIntensityRelationship (0028,1040) CS
pub const PIXEL_INTENSITY_RELATIONSHIP: Tag = Tag(0x0028, 0x1040);
/// PixelIntensityRelationshipSign (0028,1041) SS
pub const PIXEL_INTENSITY_RELATIONSHIP_SIGN: Tag = Tag(0x0028, 0x1041);
/// WindowCenter (0028,1050) DS
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// WindowCenterWidthExplanation (0028,1055) LO
pub const WINDOW_CENTER_WIDTH_EXPLANATION: Tag = Tag(0x0028, 0x1055);
/// VOILUTFunction (0028,1056) CS
pub const VOILUT_FUNCTION: Tag = Tag(0x0028, 0x1056);
/// GrayScale (0028,1080) CS (retired)
pub const GRAY_SCALE: Tag = Tag(0x0028, 0x1080);
/// RecommendedViewingMode (0028,1090) CS
pub const RECOMMENDED_VIEWING_MODE: Tag = Tag(0x0028, 0x1090);
/// GrayLookupTableDescriptor (0028,1100) US (retired)
pub const GRAY_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1100);
/// RedPaletteColorLookupTableDescriptor (0028,1101) US
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// GreenPaletteColorLookupTableDescriptor (0028,1102) US
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// BluePaletteColorLookupTableDescriptor (0028,1103) US
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// AlphaPaletteColorLookupTableDescriptor (0028,1104) US
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1104);
/// LargeRedPaletteColorLookupTableDescriptor (0028,1111) US (retired)
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1111);
/// LargeGreenPaletteColorLookupTableDescriptor (0028,1112) US (retired)
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1112);
/// LargeBluePaletteColorLookupTableDescriptor (0028,1113) US (retired)
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1113);
/// PaletteColorLookupTableUID (0028,1199) UI
pub const PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1199);
/// GrayLookupTableData (0028,1200) US (retired)
pub const GRAY_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1200);
/// RedPaletteColorLookupTableData (0028,1201) OW
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// AlphaPaletteColorLookupTableData (0028,1204) OW
pub const ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1204);
/// LargeRedPaletteColorLookupTableData (0028,1211) OW (retired)
pub const LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1211);
/// LargeGreenPaletteColorLookupTableData (0028,1212) OW (retired)
pub const LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1212);
/// LargeBluePaletteColorLookupTableData (0028,1213) OW (retired)
pub const LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1213);
/// LargePaletteColorLookupTableUID (0028,1214) UI (retired)
pub const LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID: Tag = Tag(0x0028, 0x1214);
/// SegmentedRedPaletteColorLookupTableData (0028,1221) OW
pub const SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1221);
/// SegmentedGreenPaletteColorLookupTableData (0028,1222) OW
pub const SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1222);
/// SegmentedBluePaletteColorLookupTableData (0028,1223) OW
pub const SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1223);
/// SegmentedAlphaPaletteColorLookupTableData (0028,1224) OW
pub const SEGMENTED_ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1224);
/// StoredValueColorRangeSequence (0028,1230) SQ
pub const STORED_VALUE_COLOR_RANGE_SEQUENCE: Tag = Tag(0x0028, 0x1230);
/// MinimumStoredValueMapped (0028,1231) FD
pub const MINIMUM_STORED_VALUE_MAPPED: Tag = Tag(0x0028, 0x1231);
/// MaximumStoredValueMapped (0028,1232) FD
pub const MAXIMUM_STORED_VALUE_MAPPED: Tag = Tag(0x0028, 0x1232);
/// BreastImplantPresent (0028,1300) CS
pub const BREAST_IMPLANT_PRESENT: Tag = Tag(0x0028, 0x1300);
/// PartialView (0028,1350) CS
pub const PARTIAL_VIEW: Tag = Tag(0x0028, 0x1350);
/// PartialViewDescription (0028,1351) ST
pub const PARTIAL_VIEW_DESCRIPTION: Tag = Tag(0x0028, 0x1351);
/// PartialViewCodeSequence (0028,1352) SQ
pub const PARTIAL_VIEW_CODE_SEQUENCE: Tag = Tag(0x0028, 0x1352);
/// SpatialLocationsPreserved (0028,135A) CS
pub const SPATIAL_LOCATIONS_PRESERVED: Tag = Tag(0x0028, 0x135A);
/// DataFrameAssignmentSequence (0028,1401) SQ
pub const DATA_FRAME_ASSIGNMENT_SEQUENCE: Tag = Tag(0x0028, 0x1401);
/// DataPathAssignment (0028,1402) CS
pub const DATA_PATH_ASSIGNMENT: Tag = Tag(0x0028, 0x1402);
/// BitsMappedToColorLookupTable (0028,1403) US
pub const BITS_MAPPED_TO_COLOR_LOOKUP_TABLE: Tag = Tag(0x0028, 0x1403);
/// BlendingLUT1Sequence (0028,1404) SQ
pub const BLENDING_LUT1_SEQUENCE: Tag = Tag(0x0028, 0x1404);
/// BlendingLUT1TransferFunction (0028,1405) CS
pub const BLENDING_LUT1_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1405);
/// BlendingWeightConstant (0028,1406) FD
pub const BLENDING_WEIGHT_CONSTANT: Tag = Tag(0x0028, 0x1406);
/// BlendingLookupTableDescriptor (0028,1407) US
pub const BLENDING_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1407);
/// BlendingLookupTableData (0028,1408) OW
pub const BLENDING_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1408);
/// EnhancedPaletteColorLookupTableSequence (0028,140B) SQ
pub const ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE: Tag = Tag(0x0028, 0x140B);
/// BlendingLUT2Sequence (0028,140C) SQ
pub const BLENDING_LUT2_SEQUENCE: Tag = Tag(0x0028, 0x140C);
/// BlendingLUT2TransferFunction (0028,140D) CS
pub const BLENDING_LUT2_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140D);
/// DataPathID (0028,140E) CS
pub const DATA_PATH_ID: Tag = Tag(0x0028, 0x140E);
/// RGBLUTTransferFunction (0028,140F) CS
pub const RGBLUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x140F);
/// AlphaLUTTransferFunction (0028,1410) CS
pub const ALPHA_LUT_TRANSFER_FUNCTION: Tag = Tag(0x0028, 0x1410);
/// ICCProfile (0028,2000) OB
pub const ICC_PROFILE: Tag = Tag(0x0028, 0x2000);
/// ColorSpace (0028,2002) CS
pub const COLOR_SPACE: Tag = Tag(0x0028, 0x2002);
/// LossyImageCompression (0028,2110) CS
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LossyImageCompressionMethod (0028,2114) CS
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);
/// ModalityLUTSequence (0028,3000) SQ
pub const MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3000);
/// VariableModalityLUTSequence (0028,3001) SQ
pub const VARIABLE_MODALITY_LUT_SEQUENCE: Tag = Tag(0x0028, 0x3001);
/// LUTDescriptor (0028,3002) US
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTExplanation (0028,3003) LO
pub const LUT_EXPLANATION: Tag = Tag(0x0028, 0x3003);
/// ModalityLUTType (0028,3004) LO
pub const MODALITY_LUT_TYPE: Tag = Tag(0x0028, 0x3004);
/// LUTData (0028,3006) US
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// VOILUTSequence (0028,3010) SQ
pub const VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3010);
/// SoftcopyVOILUTSequence (0028,3110) SQ
pub const SOFTCOPY_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x3110);
/// ImagePresentationComments (0028,4000) LT (retired)
pub const IMAGE_PRESENTATION_COMMENTS: Tag = Tag(0x0028, 0x4000);
/// BiPlaneAcquisitionSequence (0028,5000) SQ (retired)
pub const BI_PLANE_ACQUISITION_SEQUENCE: Tag = Tag(0x0028, 0x5000);
/// RepresentativeFrameNumber (0028,6010) US
pub const REPRESENTATIVE_FRAME_NUMBER: Tag = Tag(0x0028, 0x6010);
/// FrameNumbersOfInterest (0028,6020) US
pub const FRAME_NUMBERS_OF_INTEREST: Tag = Tag(0x0028, 0x6020);
/// FrameOfInterestDescription (0028,6022) LO
pub const FRAME_OF_INTEREST_DESCRIPTION: Tag = Tag(0x0028, 0x6022);
/// FrameOfInterestType (0028,6023) CS
pub const FRAME_OF_INTEREST_TYPE: Tag = Tag(0x0028, 0x6023);
/// MaskPointers (0028,6030) US (retired)
pub const MASK_POINTERS: Tag = Tag(0x0028, 0x6030);
/// RWavePointer (0028,6040) US
pub const R_WAVE_POINTER: Tag = Tag(0x0028, 0x6040);
/// MaskSubtractionSequence (0028,6100) SQ
pub const MASK_SUBTRACTION_SEQUENCE: Tag = Tag(0x0028, 0x6100);
/// MaskOperation (0028,6101) CS
pub const MASK_OPERATION: Tag = Tag(0x0028, 0x6101);
/// ApplicableFrameRange (0028,6102) US
pub const APPLICABLE_FRAME_RANGE: Tag = Tag(0x0028, 0x6102);
/// MaskFrameNumbers (0028,6110) US
pub const MASK_FRAME_NUMBERS: Tag = Tag(0x0028, 0x6110);
/// ContrastFrameAveraging (0028,6112) US
pub const CONTRAST_FRAME_AVERAGING: Tag = Tag(0x0028, 0x6112);
/// MaskSubPixelShift (0028,6114) FL
pub const MASK_SUB_PIXEL_SHIFT: Tag = Tag(0x0028, 0x6114);
/// TIDOffset (0028,6120) SS
pub const TID_OFFSET: Tag = Tag(0x0028, 0x6120);
/// MaskOperationExplanation (0028,6190) ST
pub const MASK_OPERATION_EXPLANATION: Tag = Tag(0x0028, 0x6190);
/// EquipmentAdministratorSequence (0028,7000) SQ
pub const EQUIPMENT_ADMINISTRATOR_SEQUENCE: Tag = Tag(0x0028, 0x7000);
/// NumberOfDisplaySubsystems (0028,7001) US
pub const NUMBER_OF_DISPLAY_SUBSYSTEMS: Tag = Tag(0x0028, 0x7001);
/// CurrentConfigurationID (0028,7002) US
pub const CURRENT_CONFIGURATION_ID: Tag = Tag(0x0028, 0x7002);
/// DisplaySubsystemID (0028,7003) US
pub const DISPLAY_SUBSYSTEM_ID: Tag = Tag(0x0028, 0x7003);
/// DisplaySubsystemName (0028,7004) SH
pub const DISPLAY_SUBSYSTEM_NAME: Tag = Tag(0x0028, 0x7004);
/// DisplaySubsystemDescription (0028,7005) LO
pub const DISPLAY_SUBSYSTEM_DESCRIPTION: Tag = Tag(0x0028, 0x7005);
/// SystemStatus (0028,7006) CS
pub const SYSTEM_STATUS: Tag = Tag(0x0028, 0x7006);
/// SystemStatusComment (0028,7007) LO
pub const SYSTEM_STATUS_COMMENT: Tag = Tag(0x0028, 0x7007);
/// TargetLuminanceCharacteristicsSequence (0028,7008) SQ
pub const TARGET_LUMINANCE_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x0028, 0x7008);
/// LuminanceCharacteristicsID (0028,7009) US
pub const LUMINANCE_CHARACTERISTICS_ID: Tag = Tag(0x0028, 0x7009);
/// DisplaySubsystemConfigurationSequence (0028,700A) SQ
pub const DISPLAY_SUBSYSTEM_CONFIGURATION_SEQUENCE: Tag = Tag(0x0028, 0x700A);
/// ConfigurationID (0028,700B) US
pub const CONFIGURATION_ID: Tag = Tag(0x0028, 0x700B);
/// ConfigurationName (0028,700C) SH
pub const CONFIGURATION_NAME: Tag = Tag(0x0028, 0x700C);
/// ConfigurationDescription (0028,700D) LO
pub const CONFIGURATION_DESCRIPTION: Tag = Tag(0x0028, 0x700D);
/// ReferencedTargetLuminanceCharacteristicsID (0028,700E) US
pub const REFERENCED_TARGET_LUMINANCE_CHARACTERISTICS_ID: Tag = Tag(0x0028, 0x700E);
/// QAResultsSequence (0028,700F) SQ
pub const QA_RESULTS_SEQUENCE: Tag = Tag(0x0028, 0x700F);
/// DisplaySubsystemQAResultsSequence (0028,7010) SQ
pub const DISPLAY_SUBSYSTEM_QA_RESULTS_SEQUENCE: Tag = Tag(0x0028, 0x7010);
/// ConfigurationQAResultsSequence (0028,7011) SQ
pub const CONFIGURATION_QA_RESULTS_SEQUENCE: Tag = Tag(0x0028, 0x7011);
/// MeasurementEquipmentSequence (0028,7012) SQ
pub const MEASUREMENT_EQUIPMENT_SEQUENCE: Tag = Tag(0x0028, 0x7012);
/// MeasurementFunctions (0028,7013) CS
pub const MEASUREMENT_FUNCTIONS: Tag = Tag(0x0028, 0x7013);
/// MeasurementEquipmentType (0028,7014) CS
pub const MEASUREMENT_EQUIPMENT_TYPE: Tag = Tag(0x0028, 0x7014);
/// VisualEvaluationResultSequence (0028,7015) SQ
pub const VISUAL_EVALUATION_RESULT_SEQUENCE: Tag = Tag(0x0028, 0x7015);
/// DisplayCalibrationResultSequence (0028,7016) SQ
pub const DISPLAY_CALIBRATION_RESULT_SEQUENCE: Tag = Tag(0x0028, 0x7016);
/// DDLValue (0028,7017) US
pub const DDL_VALUE: Tag = Tag(0x0028, 0x7017);
/// CIExyWhitePoint (0028,7018) FL
pub const CI_EXY_WHITE_POINT: Tag = Tag(0x0028, 0x7018);
/// DisplayFunctionType (0028,7019) CS
pub const DISPLAY_FUNCTION_TYPE: Tag = Tag(0x0028, 0x7019);
/// GammaValue (0028,701A) FL
pub const GAMMA_VALUE: Tag = Tag(0x0028, 0x701A);
/// NumberOfLuminancePoints (0028,701B) US
pub const NUMBER_OF_LUMINANCE_POINTS: Tag = Tag(0x0028, 0x701B);
/// LuminanceResponseSequence (0028,701C) SQ
pub const LUMINANCE_RESPONSE_SEQUENCE: Tag = Tag(0x0028, 0x701C);
/// TargetMinimumLuminance (0028,701D) FL
pub const TARGET_MINIMUM_LUMINANCE: Tag = Tag(0x0028, 0x701D);
/// TargetMaximumLuminance (0028,701E) FL
pub const TARGET_MAXIMUM_LUMINANCE: Tag = Tag(0x0028, 0x701E);
/// LuminanceValue (0028,701F) FL
pub const LUMINANCE_VALUE: Tag = Tag(0x0028, 0x701F);
/// LuminanceResponseDescription (0028,7020) LO
pub const LUMINANCE_RESPONSE_DESCRIPTION: Tag = Tag(0x0028, 0x7020);
/// WhitePointFlag (0028,7021) CS
pub const WHITE_POINT_FLAG: Tag = Tag(0x0028, 0x7021);
/// DisplayDeviceTypeCodeSequence (0028,7022) SQ
pub const DISPLAY_DEVICE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0028, 0x7022);
/// DisplaySubsystemSequence (0028,7023) SQ
pub const DISPLAY_SUBSYSTEM_SEQUENCE: Tag = Tag(0x0028, 0x7023);
/// LuminanceResultSequence (0028,7024) SQ
pub const LUMINANCE_RESULT_SEQUENCE: Tag = Tag(0x0028, 0x7024);
/// AmbientLightValueSource (0028,7025) CS
pub const AMBIENT_LIGHT_VALUE_SOURCE: Tag = Tag(0x0028, 0x7025);
/// MeasuredCharacteristics (0028,7026) CS
pub const MEASURED_CHARACTERISTICS: Tag = Tag(0x0028, 0x7026);
/// LuminanceUniformityResultSequence (0028,7027) SQ
pub const LUMINANCE_UNIFORMITY_RESULT_SEQUENCE: Tag = Tag(0x0028, 0x7027);
/// VisualEvaluationTestSequence (0028,7028) SQ
pub const VISUAL_EVALUATION_TEST_SEQUENCE: Tag = Tag(0x0028, 0x7028);
/// TestResult (0028,7029) CS
pub const TEST_RESULT: Tag = Tag(0x0028, 0x7029);
/// TestResultComment (0028,702A) LO
pub const TEST_RESULT_COMMENT: Tag = Tag(0x0028, 0x702A);
/// TestImageValidation (0028,702B) CS
pub const TEST_IMAGE_VALIDATION: Tag = Tag(0x0028, 0x702B);
/// TestPatternCodeSequence (0028,702C) SQ
pub const TEST_PATTERN_CODE_SEQUENCE: Tag = Tag(0x0028, 0x702C);
/// MeasurementPatternCodeSequence (0028,702D) SQ
pub const MEASUREMENT_PATTERN_CODE_SEQUENCE: Tag = Tag(0x0028, 0x702D);
/// VisualEvaluationMethodCodeSequence (0028,702E) SQ
pub const VISUAL_EVALUATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0028, 0x702E);
/// PixelDataProviderURL (0028,7FE0) UR
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// DataPointRows (0028,9001) UL
pub const DATA_POINT_ROWS: Tag = Tag(0x0028, 0x9001);
/// DataPointColumns (0028,9002) UL
pub const DATA_POINT_COLUMNS: Tag = Tag(0x0028, 0x9002);
/// SignalDomainColumns (0028,9003) CS
pub const SIGNAL_DOMAIN_COLUMNS: Tag = Tag(0x0028, 0x9003);
/// LargestMonochromePixelValue (0028,9099) US (retired)
pub const LARGEST_MONOCHROME_PIXEL_VALUE: Tag = Tag(0x0028, 0x9099);
/// DataRepresentation (0028,9108) CS
pub const DATA_REPRESENTATION: Tag = Tag(0x0028, 0x9108);
/// PixelMeasuresSequence (0028,9110) SQ
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// FrameVOILUTSequence (0028,9132) SQ
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// PixelValueTransformationSequence (0028,9145) SQ
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// SignalDomainRows (0028,9235) CS
pub const SIGNAL_DOMAIN_ROWS: Tag = Tag(0x0028, 0x9235);
/// DisplayFilterPercentage (0028,9411) FL
pub const DISPLAY_FILTER_PERCENTAGE: Tag = Tag(0x0028, 0x9411);
/// FramePixelShiftSequence (0028,9415) SQ
pub const FRAME_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9415);
/// SubtractionItemID (0028,9416) US
pub const SUBTRACTION_ITEM_ID: Tag = Tag(0x0028, 0x9416);
/// PixelIntensityRelationshipLUTSequence (0028,9422) SQ
pub const PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE: Tag = Tag(0x0028, 0x9422);
/// FramePixelDataPropertiesSequence (0028,9443) SQ
pub const FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE: Tag = Tag(0x0028, 0x9443);
/// GeometricalProperties (0028,9444) CS
pub const GEOMETRICAL_PROPERTIES: Tag = Tag(0x0028, 0x9444);
/// GeometricMaximumDistortion (0028,9445) FL
pub const GEOMETRIC_MAXIMUM_DISTORTION: Tag = Tag(0x0028, 0x9445);
/// ImageProcessingApplied (0028,9446) CS
pub const IMAGE_PROCESSING_APPLIED: Tag = Tag(0x0028, 0x9446);
/// MaskSelectionMode (0028,9454) CS
pub const MASK_SELECTION_MODE: Tag = Tag(0x0028, 0x9454);
/// LUTFunction (0028,9474) CS
pub const LUT_FUNCTION: Tag = Tag(0x0028, 0x9474);
/// MaskVisibilityPercentage (0028,9478) FL
pub const MASK_VISIBILITY_PERCENTAGE: Tag = Tag(0x0028, 0x9478);
/// PixelShiftSequence (0028,9501) SQ
pub const PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9501);
/// RegionPixelShiftSequence (0028,9502) SQ
pub const REGION_PIXEL_SHIFT_SEQUENCE: Tag = Tag(0x0028, 0x9502);
/// VerticesOfTheRegion (0028,9503) SS
pub const VERTICES_OF_THE_REGION: Tag = Tag(0x0028, 0x9503);
/// MultiFramePresentationSequence (0028,9505) SQ
pub const MULTI_FRAME_PRESENTATION_SEQUENCE: Tag = Tag(0x0028, 0x9505);
/// PixelShiftFrameRange (0028,9506) US
pub const PIXEL_SHIFT_FRAME_RANGE: Tag = Tag(0x0028, 0x9506);
/// LUTFrameRange (0028,9507) US
pub const LUT_FRAME_RANGE: Tag = Tag(0x0028, 0x9507);
/// ImageToEquipmentMappingMatrix (0028,9520) DS
pub const IMAGE_TO_EQUIPMENT_MAPPING_MATRIX: Tag = Tag(0x0028, 0x9520);
/// EquipmentCoordinateSystemIdentification (0028,9537) CS
pub const EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION: Tag = Tag(0x0028, 0x9537);
/// StudyStatusID (0032,000A) CS (retired)
pub const STUDY_STATUS_ID: Tag = Tag(0x0032, 0x000A);
/// StudyPriorityID (0032,000C) CS (retired)
pub const STUDY_PRIORITY_ID: Tag = Tag(0x0032, 0x000C);
/// StudyIDIssuer (0032,0012) LO (retired)
pub const STUDY_ID_ISSUER: Tag = Tag(0x0032, 0x0012);
/// StudyVerifiedDate (0032,0032) DA (retired)
pub const STUDY_VERIFIED_DATE: Tag = Tag(0x0032, 0x0032);
/// StudyVerifiedTime (0032,0033) TM (retired)
pub const STUDY_VERIFIED_TIME: Tag = Tag(0x0032, 0x0033);
/// StudyReadDate (0032,0034) DA (retired)
pub const STUDY_READ_DATE: Tag = Tag(0x0032, 0x0034);
/// StudyReadTime (0032,0035) TM (retired)
pub const STUDY_READ_TIME: Tag = Tag(0x0032, 0x0035);
/// ScheduledStudyStartDate (0032,1000) DA (retired)
pub const SCHEDULED_STUDY_START_DATE: Tag = Tag(0x0032, 0x1000);
/// ScheduledStudyStartTime (0032,1001) TM (retired)
pub const SCHEDULED_STUDY_START_TIME: Tag = Tag(0x0032, 0x1001);
/// ScheduledStudyStopDate (0032,1010) DA (retired)
pub const SCHEDULED_STUDY_STOP_DATE: Tag = Tag(0x0032, 0x1010);
/// ScheduledStudyStopTime (0032,1011) TM (retired)
pub const SCHEDULED_STUDY_STOP_TIME: Tag = Tag(0x0032, 0x1011);
/// ScheduledStudyLocation (0032,1020) LO (retired)
pub const SCHEDULED_STUDY_LOCATION: Tag = Tag(0x0032, 0x1020);
/// ScheduledStudyLocationAETitle (0032,1021) AE (retired)
pub const SCHEDULED_STUDY_LOCATION_AE_TITLE: Tag = Tag(0x0032, 0x1021);
/// ReasonForStudy (0032,1030) LO (retired)
pub const REASON_FOR_STUDY: Tag = Tag(0x0032, 0x1030);
/// RequestingPhysicianIdentificationSequence (0032,1031) SQ
pub const REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0032, 0x1031);
/// RequestingPhysician (0032,1032) PN
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);
/// RequestingService (0032,1033) LO
pub const REQUESTING_SERVICE: Tag = Tag(0x0032, 0x1033);
/// RequestingServiceCodeSequence (0032,1034) SQ
pub const REQUESTING_SERVICE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1034);
/// StudyArrivalDate (0032,1040) DA (retired)
pub const STUDY_ARRIVAL_DATE: Tag = Tag(0x0032, 0x1040);
/// StudyArrivalTime (0032,1041) TM (retired)
pub const STUDY_ARRIVAL_TIME: Tag = Tag(0x0032, 0x1041);
/// StudyCompletionDate (0032,1050) DA (retired)
pub const STUDY_COMPLETION_DATE: Tag = Tag(0x0032, 0x1050);
/// StudyCompletionTime (0032,1051) TM (retired)
pub const STUDY_COMPLETION_TIME: Tag = Tag(0x0032, 0x1051);
/// StudyComponentStatusID (0032,1055) CS (retired)
pub const STUDY_COMPONENT_STATUS_ID: Tag = Tag(0x0032, 0x1055);
/// RequestedProcedureDescription (0032,1060) LO
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// RequestedProcedureCodeSequence (0032,1064) SQ
pub const REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1064);
/// RequestedLateralityCodeSequence (0032,1065) SQ
pub const REQUESTED_LATERALITY_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1065);
/// ReasonForVisit (0032,1066) UT
pub const REASON_FOR_VISIT: Tag = Tag(0x0032, 0x1066);
/// ReasonForVisitCodeSequence (0032,1067) SQ
pub const REASON_FOR_VISIT_CODE_SEQUENCE: Tag = Tag(0x0032, 0x1067);
/// RequestedContrastAgent (0032,1070) LO
pub const REQUESTED_CONTRAST_AGENT: Tag = Tag(0x0032, 0x1070);
/// StudyComments (0032,4000) LT (retired)
pub const STUDY_COMMENTS: Tag = Tag(0x0032, 0x4000);
/// FlowIdentifierSequence (0034,0001) SQ
pub const FLOW_IDENTIFIER_SEQUENCE: Tag = Tag(0x0034, 0x0001);
/// FlowIdentifier (0034,0002) OB
pub const FLOW_IDENTIFIER: Tag = Tag(0x0034, 0x0002);
/// FlowTransferSyntaxUID (0034,0003) UI
pub const FLOW_TRANSFER_SYNTAX_UID: Tag = Tag(0x0034, 0x0003);
/// FlowRTPSamplingRate (0034,0004) UL
pub const FLOW_RTP_SAMPLING_RATE: Tag = Tag(0x0034, 0x0004);
/// SourceIdentifier (0034,0005) OB
pub const SOURCE_IDENTIFIER: Tag = Tag(0x0034, 0x0005);
/// FrameOriginTimestamp (0034,0007) OB
pub const FRAME_ORIGIN_TIMESTAMP: Tag = Tag(0x0034, 0x0007);
/// IncludesImagingSubject (0034,0008) CS
pub const INCLUDES_IMAGING_SUBJECT: Tag = Tag(0x0034, 0x0008);
/// FrameUsefulnessGroupSequence (0034,0009) SQ
pub const FRAME_USEFULNESS_GROUP_SEQUENCE: Tag = Tag(0x0034, 0x0009);
/// RealTimeBulkDataFlowSequence (0034,000A) SQ
pub const REAL_TIME_BULK_DATA_FLOW_SEQUENCE: Tag = Tag(0x0034, 0x000A);
/// CameraPositionGroupSequence (0034,000B) SQ
pub const CAMERA_POSITION_GROUP_SEQUENCE: Tag = Tag(0x0034, 0x000B);
/// IncludesInformation (0034,000C) CS
pub const INCLUDES_INFORMATION: Tag = Tag(0x0034, 0x000C);
/// TimeOfFrameGroupSequence (0034,000D) SQ
pub const TIME_OF_FRAME_GROUP_SEQUENCE: Tag = Tag(0x0034, 0x000D);
/// ReferencedPatientAliasSequence (0038,0004) SQ
pub const REFERENCED_PATIENT_ALIAS_SEQUENCE: Tag = Tag(0x0038, 0x0004);
/// VisitStatusID (0038,0008) CS
pub const VISIT_STATUS_ID: Tag = Tag(0x0038, 0x0008);
/// AdmissionID (0038,0010) LO
pub const ADMISSION_ID: Tag = Tag(0x0038, 0x0010);
/// IssuerOfAdmissionID (0038,0011) LO (retired)
pub const ISSUER_OF_ADMISSION_ID: Tag = Tag(0x0038, 0x0011);
/// IssuerOfAdmissionIDSequence (0038,0014) SQ
pub const ISSUER_OF_ADMISSION_ID_SEQUENCE: Tag = Tag(0x0038, 0x0014);
/// RouteOfAdmissions (0038,0016) LO
pub const ROUTE_OF_ADMISSIONS: Tag = Tag(0x0038, 0x0016);
/// ScheduledAdmissionDate (0038,001A) DA (retired)
pub const SCHEDULED_ADMISSION_DATE: Tag = Tag(0x0038, 0x001A);
/// ScheduledAdmissionTime (0038,001B) TM (retired)
pub const SCHEDULED_ADMISSION_TIME: Tag = Tag(0x0038, 0x001B);
/// ScheduledDischargeDate (0038,001C) DA (retired)
pub const SCHEDULED_DISCHARGE_DATE: Tag = Tag(0x0038, 0x001C);
/// ScheduledDischargeTime (0038,001D) TM (retired)
pub const SCHEDULED_DISCHARGE_TIME: Tag = Tag(0x0038, 0x001D);
/// ScheduledPatientInstitutionResidence (0038,001E) LO (retired)
pub const SCHEDULED_PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x001E);
/// AdmittingDate (0038,0020) DA
pub const ADMITTING_DATE: Tag = Tag(0x0038, 0x0020);
/// AdmittingTime (0038,0021) TM
pub const ADMITTING_TIME: Tag = Tag(0x0038, 0x0021);
/// DischargeDate (0038,0030) DA (retired)
pub const DISCHARGE_DATE: Tag = Tag(0x0038, 0x0030);
/// DischargeTime (0038,0032) TM (retired)
pub const DISCHARGE_TIME: Tag = Tag(0x0038, 0x0032);
/// DischargeDiagnosisDescription (0038,0040) LO (retired)
pub const DISCHARGE_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x0038, 0x0040);
/// DischargeDiagnosisCodeSequence (0038,0044) SQ (retired)
pub const DISCHARGE_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x0038, 0x0044);
/// SpecialNeeds (0038,0050) LO
pub const SPECIAL_NEEDS: Tag = Tag(0x0038, 0x0050);
/// ServiceEpisodeID (0038,0060) LO
pub const SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0060);
/// IssuerOfServiceEpisodeID (0038,0061) LO (retired)
pub const ISSUER_OF_SERVICE_EPISODE_ID: Tag = Tag(0x0038, 0x0061);
/// ServiceEpisodeDescription (0038,0062) LO
pub const SERVICE_EPISODE_DESCRIPTION: Tag = Tag(0x0038, 0x0062);
/// IssuerOfServiceEpisodeIDSequence (0038,0064) SQ
pub const ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE: Tag = Tag(0x0038, 0x0064);
/// PertinentDocumentsSequence (0038,0100) SQ
pub const PERTINENT_DOCUMENTS_SEQUENCE: Tag = Tag(0x0038, 0x0100);
/// PertinentResourcesSequence (0038,0101) SQ
pub const PERTINENT_RESOURCES_SEQUENCE: Tag = Tag(0x0038, 0x0101);
/// ResourceDescription (0038,0102) LO
pub const RESOURCE_DESCRIPTION: Tag = Tag(0x0038, 0x0102);
/// CurrentPatientLocation (0038,0300) LO
pub const CURRENT_PATIENT_LOCATION: Tag = Tag(0x0038, 0x0300);
/// PatientInstitutionResidence (0038,0400) LO
pub const PATIENT_INSTITUTION_RESIDENCE: Tag = Tag(0x0038, 0x0400);
/// PatientState (0038,0500) LO
pub const PATIENT_STATE: Tag = Tag(0x0038, 0x0500);
/// PatientClinicalTrialParticipationSequence (0038,0502) SQ
pub const PATIENT_CLINICAL_TRIAL_PARTICIPATION_SEQUENCE: Tag = Tag(0x0038, 0x0502);
/// VisitComments (0038,4000) LT
pub const VISIT_COMMENTS: Tag = Tag(0x0038, 0x4000);
/// WaveformOriginality (003A,0004) CS
pub const WAVEFORM_ORIGINALITY: Tag = Tag(0x003A, 0x0004);
/// NumberOfWaveformChannels (003A,0005) US
pub const NUMBER_OF_WAVEFORM_CHANNELS: Tag = Tag(0x003A, 0x0005);
/// NumberOfWaveformSamples (003A,0010) UL
pub const NUMBER_OF_WAVEFORM_SAMPLES: Tag = Tag(0x003A, 0x0010);
/// SamplingFrequency (003A,001A) DS
pub const SAMPLING_FREQUENCY: Tag = Tag(0x003A, 0x001A);
/// MultiplexGroupLabel (003A,0020) SH
pub const MULTIPLEX_GROUP_LABEL: Tag = Tag(0x003A, 0x0020);
/// ChannelDefinitionSequence (003A,0200) SQ
pub const CHANNEL_DEFINITION_SEQUENCE: Tag = Tag(0x003A, 0x0200);
/// WaveformChannelNumber (003A,0202) IS
pub const WAVEFORM_CHANNEL_NUMBER: Tag = Tag(0x003A, 0x0202);
/// ChannelLabel (003A,0203) SH
pub const CHANNEL_LABEL: Tag = Tag(0x003A, 0x0203);
/// ChannelStatus (003A,0205) CS
pub const CHANNEL_STATUS: Tag = Tag(0x003A, 0x0205);
/// ChannelSourceSequence (003A,0208) SQ
pub const CHANNEL_SOURCE_SEQUENCE: Tag = Tag(0x003A, 0x0208);
/// ChannelSourceModifiersSequence (003A,0209) SQ
pub const CHANNEL_SOURCE_MODIFIERS_SEQUENCE: Tag = Tag(0x003A, 0x0209);
/// SourceWaveformSequence (003A,020A) SQ
pub const SOURCE_WAVEFORM_SEQUENCE: Tag = Tag(0x003A, 0x020A);
/// ChannelDerivationDescription (003A,020C) LO
pub const CHANNEL_DERIVATION_DESCRIPTION: Tag = Tag(0x003A, 0x020C);
/// ChannelSensitivity (003A,0210) DS
pub const CHANNEL_SENSITIVITY: Tag = Tag(0x003A, 0x0210);
/// ChannelSensitivityUnitsSequence (003A,0211) SQ
pub const CHANNEL_SENSITIVITY_UNITS_SEQUENCE: Tag = Tag(0x003A, 0x0211);
/// ChannelSensitivityCorrectionFactor (003A,0212) DS
pub const CHANNEL_SENSITIVITY_CORRECTION_FACTOR: Tag = Tag(0x003A, 0x0212);
/// ChannelBaseline (003A,0213) DS
pub const CHANNEL_BASELINE: Tag = Tag(0x003A, 0x0213);
/// ChannelTimeSkew (003A,0214) DS
pub const CHANNEL_TIME_SKEW: Tag = Tag(0x003A, 0x0214);
/// ChannelSampleSkew (003A,0215) DS
pub const CHANNEL_SAMPLE_SKEW: Tag = Tag(0x003A, 0x0215);
/// ChannelOffset (003A,0218) DS
pub const CHANNEL_OFFSET: Tag = Tag(0x003A, 0x0218);
/// WaveformBitsStored (003A,021A) US
pub const WAVEFORM_BITS_STORED: Tag = Tag(0x003A, 0x021A);
/// FilterLowFrequency (003A,0220) DS
pub const FILTER_LOW_FREQUENCY: Tag = Tag(0x003A, 0x0220);
/// FilterHighFrequency (003A,0221) DS
pub const FILTER_HIGH_FREQUENCY: Tag = Tag(0x003A, 0x0221);
/// NotchFilterFrequency (003A,0222) DS
pub const NOTCH_FILTER_FREQUENCY: Tag = Tag(0x003A, 0x0222);
/// NotchFilterBandwidth (003A,0223) DS
pub const NOTCH_FILTER_BANDWIDTH: Tag = Tag(0x003A, 0x0223);
/// WaveformDataDisplayScale (003A,0230) FL
pub const WAVEFORM_DATA_DISPLAY_SCALE: Tag = Tag(0x003A, 0x0230);
/// WaveformDisplayBackgroundCIELabValue (003A,0231) US
pub const WAVEFORM_DISPLAY_BACKGROUND_CIE_LAB_VALUE: Tag = Tag(0x003A, 0x0231);
/// WaveformPresentationGroupSequence (003A,0240) SQ
pub const WAVEFORM_PRESENTATION_GROUP_SEQUENCE: Tag = Tag(0x003A, 0x0240);
/// PresentationGroupNumber (003A,0241) US
pub const PRESENTATION_GROUP_NUMBER: Tag = Tag(0x003A, 0x0241);
/// ChannelDisplaySequence (003A,0242) SQ
pub const CHANNEL_DISPLAY_SEQUENCE: Tag = Tag(0x003A, 0x0242);
/// ChannelRecommendedDisplayCIELabValue (003A,0244) US
pub const CHANNEL_RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x003A, 0x0244);
/// ChannelPosition (003A,0245) FL
pub const CHANNEL_POSITION: Tag = Tag(0x003A, 0x0245);
/// DisplayShadingFlag (003A,0246) CS
pub const DISPLAY_SHADING_FLAG: Tag = Tag(0x003A, 0x0246);
/// FractionalChannelDisplayScale (003A,0247) FL
pub const FRACTIONAL_CHANNEL_DISPLAY_SCALE: Tag = Tag(0x003A, 0x0247);
/// AbsoluteChannelDisplayScale (003A,0248) FL
pub const ABSOLUTE_CHANNEL_DISPLAY_SCALE: Tag = Tag(0x003A, 0x0248);
/// MultiplexedAudioChannelsDescriptionCodeSequence (003A,0300) SQ
pub const MULTIPLEXED_AUDIO_CHANNELS_DESCRIPTION_CODE_SEQUENCE: Tag = Tag(0x003A, 0x0300);
/// ChannelIdentificationCode (003A,0301) IS
pub const CHANNEL_IDENTIFICATION_CODE: Tag = Tag(0x003A, 0x0301);
/// ChannelMode (003A,0302) CS
pub const CHANNEL_MODE: Tag = Tag(0x003A, 0x0302);
/// MultiplexGroupUID (003A,0310) UI
pub const MULTIPLEX_GROUP_UID: Tag = Tag(0x003A, 0x0310);
/// PowerlineFrequency (003A,0311) DS
pub const POWERLINE_FREQUENCY: Tag = Tag(0x003A, 0x0311);
/// ChannelImpedanceSequence (003A,0312) SQ
pub const CHANNEL_IMPEDANCE_SEQUENCE: Tag = Tag(0x003A, 0x0312);
/// ImpedanceValue (003A,0313) DS
pub const IMPEDANCE_VALUE: Tag = Tag(0x003A, 0x0313);
/// ImpedanceMeasurementDateTime (003A,0314) DT
pub const IMPEDANCE_MEASUREMENT_DATE_TIME: Tag = Tag(0x003A, 0x0314);
/// ImpedanceMeasurementFrequency (003A,0315) DS
pub const IMPEDANCE_MEASUREMENT_FREQUENCY: Tag = Tag(0x003A, 0x0315);
/// ImpedanceMeasurementCurrentType (003A,0316) CS
pub const IMPEDANCE_MEASUREMENT_CURRENT_TYPE: Tag = Tag(0x003A, 0x0316);
/// ScheduledStationAETitle (0040,0001) AE
pub const SCHEDULED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0001);
/// ScheduledProcedureStepStartDate (0040,0002) DA
pub const SCHEDULED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0002);
/// ScheduledProcedureStepStartTime (0040,0003) TM
pub const SCHEDULED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0003);
/// ScheduledProcedureStepEndDate (0040,0004) DA
pub const SCHEDULED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0004);
/// ScheduledProcedureStepEndTime (0040,0005) TM
pub const SCHEDULED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0005);
/// ScheduledPerformingPhysicianName (0040,0006) PN
pub const SCHEDULED_PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0040, 0x0006);
/// ScheduledProcedureStepDescription (0040,0007) LO
pub const SCHEDULED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0007);
/// ScheduledProtocolCodeSequence (0040,0008) SQ
pub const SCHEDULED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0008);
/// ScheduledProcedureStepID (0040,0009) SH
pub const SCHEDULED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0009);
/// StageCodeSequence (0040,000A) SQ
pub const STAGE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x000A);
/// ScheduledPerformingPhysicianIdentificationSequence (0040,000B) SQ
pub const SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x000B);
/// ScheduledStationName (0040,0010) SH
pub const SCHEDULED_STATION_NAME: Tag = Tag(0x0040, 0x0010);
/// ScheduledProcedureStepLocation (0040,0011) SH
pub const SCHEDULED_PROCEDURE_STEP_LOCATION: Tag = Tag(0x0040, 0x0011);
/// PreMedication (0040,0012) LO
pub const PRE_MEDICATION: Tag = Tag(0x0040, 0x0012);
/// ScheduledProcedureStepStatus (0040,0020) CS
pub const SCHEDULED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0020);
/// OrderPlacerIdentifierSequence (0040,0026) SQ
pub const ORDER_PLACER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0026);
/// OrderFillerIdentifierSequence (0040,0027) SQ
pub const ORDER_FILLER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0027);
/// LocalNamespaceEntityID (0040,0031) UT
pub const LOCAL_NAMESPACE_ENTITY_ID: Tag = Tag(0x0040, 0x0031);
/// UniversalEntityID (0040,0032) UT
pub const UNIVERSAL_ENTITY_ID: Tag = Tag(0x0040, 0x0032);
/// UniversalEntityIDType (0040,0033) CS
pub const UNIVERSAL_ENTITY_ID_TYPE: Tag = Tag(0x0040, 0x0033);
/// IdentifierTypeCode (0040,0035) CS
pub const IDENTIFIER_TYPE_CODE: Tag = Tag(0x0040, 0x0035);
/// AssigningFacilitySequence (0040,0036) SQ
pub const ASSIGNING_FACILITY_SEQUENCE: Tag = Tag(0x0040, 0x0036);
/// AssigningJurisdictionCodeSequence (0040,0039) SQ
pub const ASSIGNING_JURISDICTION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0039);
/// AssigningAgencyOrDepartmentCodeSequence (0040,003A) SQ
pub const ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE: Tag = Tag(0x0040, 0x003A);
/// ScheduledProcedureStepSequence (0040,0100) SQ
pub const SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0100);
/// ReferencedNonImageCompositeSOPInstanceSequence (0040,0220) SQ
pub const REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0040, 0x0220);
/// PerformedStationAETitle (0040,0241) AE
pub const PERFORMED_STATION_AE_TITLE: Tag = Tag(0x0040, 0x0241);
/// PerformedStationName (0040,0242) SH
pub const PERFORMED_STATION_NAME: Tag = Tag(0x0040, 0x0242);
/// PerformedLocation (0040,0243) SH
pub const PERFORMED_LOCATION: Tag = Tag(0x0040, 0x0243);
/// PerformedProcedureStepStartDate (0040,0244) DA
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepEndDate (0040,0250) DA
pub const PERFORMED_PROCEDURE_STEP_END_DATE: Tag = Tag(0x0040, 0x0250);
/// PerformedProcedureStepEndTime (0040,0251) TM
pub const PERFORMED_PROCEDURE_STEP_END_TIME: Tag = Tag(0x0040, 0x0251);
/// PerformedProcedureStepStatus (0040,0252) CS
pub const PERFORMED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x0252);
/// PerformedProcedureStepID (0040,0253) SH
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// PerformedProcedureStepDescription (0040,0254) LO
pub const PERFORMED_PROCEDURE_STEP_DESCRIPTION: Tag = Tag(0x0040, 0x0254);
/// PerformedProcedureTypeDescription (0040,0255) LO
pub const PERFORMED_PROCEDURE_TYPE_DESCRIPTION: Tag = Tag(0x0040, 0x0255);
/// PerformedProtocolCodeSequence (0040,0260) SQ
pub const PERFORMED_PROTOCOL_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0260);
/// PerformedProtocolType (0040,0261) CS
pub const PERFORMED_PROTOCOL_TYPE: Tag = Tag(0x0040, 0x0261);
/// ScheduledStepAttributesSequence (0040,0270) SQ
pub const SCHEDULED_STEP_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0270);
/// RequestAttributesSequence (0040,0275) SQ
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// CommentsOnThePerformedProcedureStep (0040,0280) ST
pub const COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0280);
/// PerformedProcedureStepDiscontinuationReasonCodeSequence (0040,0281) SQ
pub const PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0281);
/// QuantitySequence (0040,0293) SQ
pub const QUANTITY_SEQUENCE: Tag = Tag(0x0040, 0x0293);
/// Quantity (0040,0294) DS
pub const QUANTITY: Tag = Tag(0x0040, 0x0294);
/// MeasuringUnitsSequence (0040,0295) SQ
pub const MEASURING_UNITS_SEQUENCE: Tag = Tag(0x0040, 0x0295);
/// BillingItemSequence (0040,0296) SQ
pub const BILLING_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0296);
/// TotalTimeOfFluoroscopy (0040,0300) US (retired)
pub const TOTAL_TIME_OF_FLUOROSCOPY: Tag = Tag(0x0040, 0x0300);
/// TotalNumberOfExposures (0040,0301) US (retired)
pub const TOTAL_NUMBER_OF_EXPOSURES: Tag = Tag(0x0040, 0x0301);
/// EntranceDose (0040,0302) US
pub const ENTRANCE_DOSE: Tag = Tag(0x0040, 0x0302);
/// ExposedArea (0040,0303) US
pub const EXPOSED_AREA: Tag = Tag(0x0040, 0x0303);
/// DistanceSourceToEntrance (0040,0306) DS
pub const DISTANCE_SOURCE_TO_ENTRANCE: Tag = Tag(0x0040, 0x0306);
/// DistanceSourceToSupport (0040,0307) DS (retired)
pub const DISTANCE_SOURCE_TO_SUPPORT: Tag = Tag(0x0040, 0x0307);
/// ExposureDoseSequence (0040,030E) SQ (retired)
pub const EXPOSURE_DOSE_SEQUENCE: Tag = Tag(0x0040, 0x030E);
/// CommentsOnRadiationDose (0040,0310) ST
pub const COMMENTS_ON_RADIATION_DOSE: Tag = Tag(0x0040, 0x0310);
/// XRayOutput (0040,0312) DS
pub const X_RAY_OUTPUT: Tag = Tag(0x0040, 0x0312);
/// HalfValueLayer (0040,0314) DS
pub const HALF_VALUE_LAYER: Tag = Tag(0x0040, 0x0314);
/// OrganDose (0040,0316) DS
pub const ORGAN_DOSE: Tag = Tag(0x0040, 0x0316);
/// OrganExposed (0040,0318) CS
pub const ORGAN_EXPOSED: Tag = Tag(0x0040, 0x0318);
/// BillingProceduresSequence (0040,0320) SQ
pub const BILLING_PROCEDURES_SEQUENCE: Tag = Tag(0x0040, 0x0320);
/// FilmConsumptionSequence (0040,0321) SQ
pub const FILM_CONSUMPTION_SEQUENCE: Tag = Tag(0x0040, 0x0321);
/// BillingSuppliesAndDevicesSequence (0040,0324) SQ
pub const BILLING_SUPPLIES_AND_DEVICES_SEQUENCE: Tag = Tag(0x0040, 0x0324);
/// ReferencedProcedureStepSequence (0040,0330) SQ (retired)
pub const REFERENCED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x0330);
/// PerformedSeriesSequence (0040,0340) SQ
pub const PERFORMED_SERIES_SEQUENCE: Tag = Tag(0x0040, 0x0340);
/// CommentsOnTheScheduledProcedureStep (0040,0400) LT
pub const COMMENTS_ON_THE_SCHEDULED_PROCEDURE_STEP: Tag = Tag(0x0040, 0x0400);
/// ProtocolContextSequence (0040,0440) SQ
pub const PROTOCOL_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0440);
/// ContentItemModifierSequence (0040,0441) SQ
pub const CONTENT_ITEM_MODIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0441);
/// ScheduledSpecimenSequence (0040,0500) SQ
pub const SCHEDULED_SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0500);
/// SpecimenAccessionNumber (0040,050A) LO (retired)
pub const SPECIMEN_ACCESSION_NUMBER: Tag = Tag(0x0040, 0x050A);
/// ContainerIdentifier (0040,0512) LO
pub const CONTAINER_IDENTIFIER: Tag = Tag(0x0040, 0x0512);
/// IssuerOfTheContainerIdentifierSequence (0040,0513) SQ
pub const ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0513);
/// AlternateContainerIdentifierSequence (0040,0515) SQ
pub const ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0515);
/// ContainerTypeCodeSequence (0040,0518) SQ
pub const CONTAINER_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x0518);
/// ContainerDescription (0040,051A) LO
pub const CONTAINER_DESCRIPTION: Tag = Tag(0x0040, 0x051A);
/// ContainerComponentSequence (0040,0520) SQ
pub const CONTAINER_COMPONENT_SEQUENCE: Tag = Tag(0x0040, 0x0520);
/// SpecimenSequence (0040,0550) SQ (retired)
pub const SPECIMEN_SEQUENCE: Tag = Tag(0x0040, 0x0550);
/// SpecimenIdentifier (0040,0551) LO
pub const SPECIMEN_IDENTIFIER: Tag = Tag(0x0040, 0x0551);
/// SpecimenDescriptionSequenceTrial (0040,0552) SQ (retired)
pub const SPECIMEN_DESCRIPTION_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0x0552);
/// SpecimenDescriptionTrial (0040,0553) ST (retired)
pub const SPECIMEN_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0x0553);
/// SpecimenUID (0040,0554) UI
pub const SPECIMEN_UID: Tag = Tag(0x0040, 0x0554);
/// AcquisitionContextSequence (0040,0555) SQ
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// AcquisitionContextDescription (0040,0556) ST
pub const ACQUISITION_CONTEXT_DESCRIPTION: Tag = Tag(0x0040, 0x0556);
/// SpecimenDescriptionSequence (0040,0560) SQ
pub const SPECIMEN_DESCRIPTION_SEQUENCE: Tag = Tag(0x0040, 0x0560);
/// IssuerOfTheSpecimenIdentifierSequence (0040,0562) SQ
pub const ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE: Tag = Tag(0x0040, 0x0562);
/// SpecimenTypeCodeSequence (0040,059A) SQ
pub const SPECIMEN_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x059A);
/// SpecimenShortDescription (0040,0600) LO
pub const SPECIMEN_SHORT_DESCRIPTION: Tag = Tag(0x0040, 0x0600);
/// SpecimenDetailedDescription (0040,0602) UT
pub const SPECIMEN_DETAILED_DESCRIPTION: Tag = Tag(0x0040, 0x0602);
/// SpecimenPreparationSequence (0040,0610) SQ
pub const SPECIMEN_PREPARATION_SEQUENCE: Tag = Tag(0x0040, 0x0610);
/// SpecimenPreparationStepContentItemSequence (0040,0612) SQ
pub const SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0612);
/// SpecimenLocalizationContentItemSequence (0040,0620) SQ
pub const SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE: Tag = Tag(0x0040, 0x0620);
/// SlideIdentifier (0040,06FA) LO (retired)
pub const SLIDE_IDENTIFIER: Tag = Tag(0x0040, 0x06FA);
/// WholeSlideMicroscopyImageFrameTypeSequence (0040,0710) SQ
pub const WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x0710);
/// ImageCenterPointCoordinatesSequence (0040,071A) SQ
pub const IMAGE_CENTER_POINT_COORDINATES_SEQUENCE: Tag = Tag(0x0040, 0x071A);
/// XOffsetInSlideCoordinateSystem (0040,072A) DS
pub const X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x072A);
/// YOffsetInSlideCoordinateSystem (0040,073A) DS
pub const Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x073A);
/// ZOffsetInSlideCoordinateSystem (0040,074A) DS
pub const Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM: Tag = Tag(0x0040, 0x074A);
/// PixelSpacingSequence (0040,08D8) SQ (retired)
pub const PIXEL_SPACING_SEQUENCE: Tag = Tag(0x0040, 0x08D8);
/// CoordinateSystemAxisCodeSequence (0040,08DA) SQ (retired)
pub const COORDINATE_SYSTEM_AXIS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08DA);
/// MeasurementUnitsCodeSequence (0040,08EA) SQ
pub const MEASUREMENT_UNITS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x08EA);
/// VitalStainCodeSequenceTrial (0040,09F8) SQ (retired)
pub const VITAL_STAIN_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0x09F8);
/// RequestedProcedureID (0040,1001) SH
pub const REQUESTED_PROCEDURE_ID: Tag = Tag(0x0040, 0x1001);
/// ReasonForTheRequestedProcedure (0040,1002) LO
pub const REASON_FOR_THE_REQUESTED_PROCEDURE: Tag = Tag(0x0040, 0x1002);
/// RequestedProcedurePriority (0040,1003) SH
pub const REQUESTED_PROCEDURE_PRIORITY: Tag = Tag(0x0040, 0x1003);
/// PatientTransportArrangements (0040,1004) LO
pub const PATIENT_TRANSPORT_ARRANGEMENTS: Tag = Tag(0x0040, 0x1004);
/// RequestedProcedureLocation (0040,1005) LO
pub const REQUESTED_PROCEDURE_LOCATION: Tag = Tag(0x0040, 0x1005);
/// PlacerOrderNumberProcedure (0040,1006) SH (retired)
pub const PLACER_ORDER_NUMBER_PROCEDURE: Tag = Tag(0x0040, 0x1006);
/// FillerOrderNumberProcedure (0040,1007) SH (retired)
pub const FILLER_ORDER_NUMBER_PROCEDURE: Tag = Tag(0x0040, 0x1007);
/// ConfidentialityCode (0040,1008) LO
pub const CONFIDENTIALITY_CODE: Tag = Tag(0x0040, 0x1008);
/// ReportingPriority (0040,1009) SH
pub const REPORTING_PRIORITY: Tag = Tag(0x0040, 0x1009);
/// ReasonForRequestedProcedureCodeSequence (0040,100A) SQ
pub const REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x100A);
/// NamesOfIntendedRecipientsOfResults (0040,1010) PN
pub const NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS: Tag = Tag(0x0040, 0x1010);
/// IntendedRecipientsOfResultsIdentificationSequence (0040,1011) SQ
pub const INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0040, 0x1011);
/// ReasonForPerformedProcedureCodeSequence (0040,1012) SQ
pub const REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1012);
/// RequestedProcedureDescriptionTrial (0040,1060) LO (retired)
pub const REQUESTED_PROCEDURE_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0x1060);
/// PersonIdentificationCodeSequence (0040,1101) SQ
pub const PERSON_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x1101);
/// PersonAddress (0040,1102) ST
pub const PERSON_ADDRESS: Tag = Tag(0x0040, 0x1102);
/// PersonTelephoneNumbers (0040,1103) LO
pub const PERSON_TELEPHONE_NUMBERS: Tag = Tag(0x0040, 0x1103);
/// PersonTelecomInformation (0040,1104) LT
pub const PERSON_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x1104);
/// RequestedProcedureComments (0040,1400) LT
pub const REQUESTED_PROCEDURE_COMMENTS: Tag = Tag(0x0040, 0x1400);
/// ReasonForTheImagingServiceRequest (0040,2001) LO (retired)
pub const REASON_FOR_THE_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2001);
/// IssueDateOfImagingServiceRequest (0040,2004) DA
pub const ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2004);
/// IssueTimeOfImagingServiceRequest (0040,2005) TM
pub const ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2005);
/// PlacerOrderNumberImagingServiceRequestRetired (0040,2006) SH (retired)
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED: Tag = Tag(0x0040, 0x2006);
/// FillerOrderNumberImagingServiceRequestRetired (0040,2007) SH (retired)
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED: Tag = Tag(0x0040, 0x2007);
/// OrderEnteredBy (0040,2008) PN
pub const ORDER_ENTERED_BY: Tag = Tag(0x0040, 0x2008);
/// OrderEntererLocation (0040,2009) SH
pub const ORDER_ENTERER_LOCATION: Tag = Tag(0x0040, 0x2009);
/// OrderCallbackPhoneNumber (0040,2010) SH
pub const ORDER_CALLBACK_PHONE_NUMBER: Tag = Tag(0x0040, 0x2010);
/// OrderCallbackTelecomInformation (0040,2011) LT
pub const ORDER_CALLBACK_TELECOM_INFORMATION: Tag = Tag(0x0040, 0x2011);
/// PlacerOrderNumberImagingServiceRequest (0040,2016) LO
pub const PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2016);
/// FillerOrderNumberImagingServiceRequest (0040,2017) LO
pub const FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST: Tag = Tag(0x0040, 0x2017);
/// ImagingServiceRequestComments (0040,2400) LT
pub const IMAGING_SERVICE_REQUEST_COMMENTS: Tag = Tag(0x0040, 0x2400);
/// ConfidentialityConstraintOnPatientDataDescription (0040,3001) LO
pub const CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION: Tag = Tag(0x0040, 0x3001);
/// GeneralPurposeScheduledProcedureStepStatus (0040,4001) CS (retired)
pub const GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x4001);
/// GeneralPurposePerformedProcedureStepStatus (0040,4002) CS (retired)
pub const GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEP_STATUS: Tag = Tag(0x0040, 0x4002);
/// GeneralPurposeScheduledProcedureStepPriority (0040,4003) CS (retired)
pub const GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_PRIORITY: Tag = Tag(0x0040, 0x4003);
/// ScheduledProcessingApplicationsCodeSequence (0040,4004) SQ (retired)
pub const SCHEDULED_PROCESSING_APPLICATIONS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4004);
/// ScheduledProcedureStepStartDateTime (0040,4005) DT
pub const SCHEDULED_PROCEDURE_STEP_START_DATE_TIME: Tag = Tag(0x0040, 0x4005);
/// MultipleCopiesFlag (0040,4006) CS (retired)
pub const MULTIPLE_COPIES_FLAG: Tag = Tag(0x0040, 0x4006);
/// PerformedProcessingApplicationsCodeSequence (0040,4007) SQ
pub const PERFORMED_PROCESSING_APPLICATIONS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4007);
/// ScheduledProcedureStepExpirationDateTime (0040,4008) DT
pub const SCHEDULED_PROCEDURE_STEP_EXPIRATION_DATE_TIME: Tag = Tag(0x0040, 0x4008);
/// HumanPerformerCodeSequence (0040,4009) SQ
pub const HUMAN_PERFORMER_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4009);
/// ScheduledProcedureStepModificationDateTime (0040,4010) DT
pub const SCHEDULED_PROCEDURE_STEP_MODIFICATION_DATE_TIME: Tag = Tag(0x0040, 0x4010);
/// ExpectedCompletionDateTime (0040,4011) DT
pub const EXPECTED_COMPLETION_DATE_TIME: Tag = Tag(0x0040, 0x4011);
/// ResultingGeneralPurposePerformedProcedureStepsSequence (0040,4015) SQ (retired)
pub const RESULTING_GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEPS_SEQUENCE: Tag = Tag(0x0040, 0x4015);
/// ReferencedGeneralPurposeScheduledProcedureStepSequence (0040,4016) SQ (retired)
pub const REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0040, 0x4016);
/// ScheduledWorkitemCodeSequence (0040,4018) SQ
pub const SCHEDULED_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4018);
/// PerformedWorkitemCodeSequence (0040,4019) SQ
pub const PERFORMED_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4019);
/// InputAvailabilityFlag (0040,4020) CS (retired)
pub const INPUT_AVAILABILITY_FLAG: Tag = Tag(0x0040, 0x4020);
/// InputInformationSequence (0040,4021) SQ
pub const INPUT_INFORMATION_SEQUENCE: Tag = Tag(0x0040, 0x4021);
/// RelevantInformationSequence (0040,4022) SQ (retired)
pub const RELEVANT_INFORMATION_SEQUENCE: Tag = Tag(0x0040, 0x4022);
/// ReferencedGeneralPurposeScheduledProcedureStepTransactionUID (0040,4023) UI (retired)
pub const REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID: Tag = Tag(0x0040, 0x4023);
/// ScheduledStationNameCodeSequence (0040,4025) SQ
pub const SCHEDULED_STATION_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4025);
/// ScheduledStationClassCodeSequence (0040,4026) SQ
pub const SCHEDULED_STATION_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4026);
/// ScheduledStationGeographicLocationCodeSequence (0040,4027) SQ
pub const SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4027);
/// PerformedStationNameCodeSequence (0040,4028) SQ
pub const PERFORMED_STATION_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4028);
/// PerformedStationClassCodeSequence (0040,4029) SQ
pub const PERFORMED_STATION_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4029);
/// PerformedStationGeographicLocationCodeSequence (0040,4030) SQ
pub const PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4030);
/// RequestedSubsequentWorkitemCodeSequence (0040,4031) SQ (retired)
pub const REQUESTED_SUBSEQUENT_WORKITEM_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4031);
/// NonDICOMOutputCodeSequence (0040,4032) SQ (retired)
pub const NON_DICOM_OUTPUT_CODE_SEQUENCE: Tag = Tag(0x0040, 0x4032);
/// OutputInformationSequence (0040,4033) SQ
pub const OUTPUT_INFORMATION_SEQUENCE: Tag = Tag(0x0040, 0x4033);
/// ScheduledHumanPerformersSequence (0040,4034) SQ
pub const SCHEDULED_HUMAN_PERFORMERS_SEQUENCE: Tag = Tag(0x0040, 0x4034);
/// ActualHumanPerformersSequence (0040,4035) SQ
pub const ACTUAL_HUMAN_PERFORMERS_SEQUENCE: Tag = Tag(0x0040, 0x4035);
/// HumanPerformerOrganization (0040,4036) LO
pub const HUMAN_PERFORMER_ORGANIZATION: Tag = Tag(0x0040, 0x4036);
/// HumanPerformerName (0040,4037) PN
pub const HUMAN_PERFORMER_NAME: Tag = Tag(0x0040, 0x4037);
/// RawDataHandling (0040,4040) CS
pub const RAW_DATA_HANDLING: Tag = Tag(0x0040, 0x4040);
/// InputReadinessState (0040,4041) CS
pub const INPUT_READINESS_STATE: Tag = Tag(0x0040, 0x4041);
/// PerformedProcedureStepStartDateTime (0040,4050) DT
pub const PERFORMED_PROCEDURE_STEP_START_DATE_TIME: Tag = Tag(0x0040, 0x4050);
/// PerformedProcedureStepEndDateTime (0040,4051) DT
pub const PERFORMED_PROCEDURE_STEP_END_DATE_TIME: Tag = Tag(0x0040, 0x4051);
/// ProcedureStepCancellationDateTime (0040,4052) DT
pub const PROCEDURE_STEP_CANCELLATION_DATE_TIME: Tag = Tag(0x0040, 0x4052);
/// OutputDestinationSequence (0040,4070) SQ
pub const OUTPUT_DESTINATION_SEQUENCE: Tag = Tag(0x0040, 0x4070);
/// DICOMStorageSequence (0040,4071) SQ
pub const DICOM_STORAGE_SEQUENCE: Tag = Tag(0x0040, 0x4071);
/// STOWRSStorageSequence (0040,4072) SQ
pub const STOWRS_STORAGE_SEQUENCE: Tag = Tag(0x0040, 0x4072);
/// StorageURL (0040,4073) UR
pub const STORAGE_URL: Tag = Tag(0x0040, 0x4073);
/// XDSStorageSequence (0040,4074) SQ
pub const XDS_STORAGE_SEQUENCE: Tag = Tag(0x0040, 0x4074);
/// EntranceDoseInmGy (0040,8302) DS
pub const ENTRANCE_DOSE_INM_GY: Tag = Tag(0x0040, 0x8302);
/// EntranceDoseDerivation (0040,8303) CS
pub const ENTRANCE_DOSE_DERIVATION: Tag = Tag(0x0040, 0x8303);
/// ParametricMapFrameTypeSequence (0040,9092) SQ
pub const PARAMETRIC_MAP_FRAME_TYPE_SEQUENCE: Tag = Tag(0x0040, 0x9092);
/// ReferencedImageRealWorldValueMappingSequence (0040,9094) SQ
pub const REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9094);
/// RealWorldValueMappingSequence (0040,9096) SQ
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// PixelValueMappingCodeSequence (0040,9098) SQ
pub const PIXEL_VALUE_MAPPING_CODE_SEQUENCE: Tag = Tag(0x0040, 0x9098);
/// LUTLabel (0040,9210) SH
pub const LUT_LABEL: Tag = Tag(0x0040, 0x9210);
/// RealWorldValueLastValueMapped (0040,9211) US
pub const REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9211);
/// RealWorldValueLUTData (0040,9212) FD
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// DoubleFloatRealWorldValueLastValueMapped (0040,9213) FD
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9213);
/// DoubleFloatRealWorldValueFirstValueMapped (0040,9214) FD
pub const DOUBLE_FLOAT_REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9214);
/// RealWorldValueFirstValueMapped (0040,9216) US
pub const REAL_WORLD_VALUE_FIRST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9216);
/// QuantityDefinitionSequence (0040,9220) SQ
pub const QUANTITY_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0x9220);
/// RealWorldValueIntercept (0040,9224) FD
pub const REAL_WORLD_VALUE_INTERCEPT: Tag = Tag(0x0040, 0x9224);
/// RealWorldValueSlope (0040,9225) FD
pub const REAL_WORLD_VALUE_SLOPE: Tag = Tag(0x0040, 0x9225);
/// FindingsFlagTrial (0040,A007) CS (retired)
pub const FINDINGS_FLAG_TRIAL: Tag = Tag(0x0040, 0xA007);
/// RelationshipType (0040,A010) CS
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// FindingsSequenceTrial (0040,A020) SQ (retired)
pub const FINDINGS_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA020);
/// FindingsGroupUIDTrial (0040,A021) UI (retired)
pub const FINDINGS_GROUP_UID_TRIAL: Tag = Tag(0x0040, 0xA021);
/// ReferencedFindingsGroupUIDTrial (0040,A022) UI (retired)
pub const REFERENCED_FINDINGS_GROUP_UID_TRIAL: Tag = Tag(0x0040, 0xA022);
/// FindingsGroupRecordingDateTrial (0040,A023) DA (retired)
pub const FINDINGS_GROUP_RECORDING_DATE_TRIAL: Tag = Tag(0x0040, 0xA023);
/// FindingsGroupRecordingTimeTrial (0040,A024) TM (retired)
pub const FINDINGS_GROUP_RECORDING_TIME_TRIAL: Tag = Tag(0x0040, 0xA024);
/// FindingsSourceCategoryCodeSequenceTrial (0040,A026) SQ (retired)
pub const FINDINGS_SOURCE_CATEGORY_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA026);
/// VerifyingOrganization (0040,A027) LO
pub const VERIFYING_ORGANIZATION: Tag = Tag(0x0040, 0xA027);
/// DocumentingOrganizationIdentifierCodeSequenceTrial (0040,A028) SQ (retired)
pub const DOCUMENTING_ORGANIZATION_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA028);
/// VerificationDateTime (0040,A030) DT
pub const VERIFICATION_DATE_TIME: Tag = Tag(0x0040, 0xA030);
/// ObservationDateTime (0040,A032) DT
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// ObservationStartDateTime (0040,A033) DT
pub const OBSERVATION_START_DATE_TIME: Tag = Tag(0x0040, 0xA033);
/// ValueType (0040,A040) CS
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043) SQ
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// MeasurementPrecisionDescriptionTrial (0040,A047) LO (retired)
pub const MEASUREMENT_PRECISION_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0xA047);
/// ContinuityOfContent (0040,A050) CS
pub const CONTINUITY_OF_CONTENT: Tag = Tag(0x0040, 0xA050);
/// UrgencyOrPriorityAlertsTrial (0040,A057) CS (retired)
pub const URGENCY_OR_PRIORITY_ALERTS_TRIAL: Tag = Tag(0x0040, 0xA057);
/// SequencingIndicatorTrial (0040,A060) LO (retired)
pub const SEQUENCING_INDICATOR_TRIAL: Tag = Tag(0x0040, 0xA060);
/// DocumentIdentifierCodeSequenceTrial (0040,A066) SQ (retired)
pub const DOCUMENT_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA066);
/// DocumentAuthorTrial (0040,A067) PN (retired)
pub const DOCUMENT_AUTHOR_TRIAL: Tag = Tag(0x0040, 0xA067);
/// DocumentAuthorIdentifierCodeSequenceTrial (0040,A068) SQ (retired)
pub const DOCUMENT_AUTHOR_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA068);
/// IdentifierCodeSequenceTrial (0040,A070) SQ (retired)
pub const IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA070);
/// VerifyingObserverSequence (0040,A073) SQ
pub const VERIFYING_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA073);
/// ObjectBinaryIdentifierTrial (0040,A074) OB (retired)
pub const OBJECT_BINARY_IDENTIFIER_TRIAL: Tag = Tag(0x0040, 0xA074);
/// VerifyingObserverName (0040,A075) PN
pub const VERIFYING_OBSERVER_NAME: Tag = Tag(0x0040, 0xA075);
/// DocumentingObserverIdentifierCodeSequenceTrial (0040,A076) SQ (retired)
pub const DOCUMENTING_OBSERVER_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA076);
/// AuthorObserverSequence (0040,A078) SQ
pub const AUTHOR_OBSERVER_SEQUENCE: Tag = Tag(0x0040, 0xA078);
/// ParticipantSequence (0040,A07A) SQ
pub const PARTICIPANT_SEQUENCE: Tag = Tag(0x0040, 0xA07A);
/// CustodialOrganizationSequence (0040,A07C) SQ
pub const CUSTODIAL_ORGANIZATION_SEQUENCE: Tag = Tag(0x0040, 0xA07C);
/// ParticipationType (0040,A080) CS
pub const PARTICIPATION_TYPE: Tag = Tag(0x0040, 0xA080);
/// ParticipationDateTime (0040,A082) DT
pub const PARTICIPATION_DATE_TIME: Tag = Tag(0x0040, 0xA082);
/// ObserverType (0040,A084) CS
pub const OBSERVER_TYPE: Tag = Tag(0x0040, 0xA084);
/// ProcedureIdentifierCodeSequenceTrial (0040,A085) SQ (retired)
pub const PROCEDURE_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA085);
/// VerifyingObserverIdentificationCodeSequence (0040,A088) SQ
pub const VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA088);
/// ObjectDirectoryBinaryIdentifierTrial (0040,A089) OB (retired)
pub const OBJECT_DIRECTORY_BINARY_IDENTIFIER_TRIAL: Tag = Tag(0x0040, 0xA089);
/// EquivalentCDADocumentSequence (0040,A090) SQ (retired)
pub const EQUIVALENT_CDA_DOCUMENT_SEQUENCE: Tag = Tag(0x0040, 0xA090);
/// ReferencedWaveformChannels (0040,A0B0) US
pub const REFERENCED_WAVEFORM_CHANNELS: Tag = Tag(0x0040, 0xA0B0);
/// DateOfDocumentOrVerbalTransactionTrial (0040,A110) DA (retired)
pub const DATE_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL: Tag = Tag(0x0040, 0xA110);
/// TimeOfDocumentCreationOrVerbalTransactionTrial (0040,A112) TM (retired)
pub const TIME_OF_DOCUMENT_CREATION_OR_VERBAL_TRANSACTION_TRIAL: Tag = Tag(0x0040, 0xA112);
/// DateTime (0040,A120) DT
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date (0040,A121) DA
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time (0040,A122) TM
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// PersonName (0040,A123) PN
pub const PERSON_NAME: Tag = Tag(0x0040, 0xA123);
/// UID (0040,A124) UI
pub const UID: Tag = Tag(0x0040, 0xA124);
/// ReportStatusIDTrial (0040,A125) CS (retired)
pub const REPORT_STATUS_ID_TRIAL: Tag = Tag(0x0040, 0xA125);
/// TemporalRangeType (0040,A130) CS
pub const TEMPORAL_RANGE_TYPE: Tag = Tag(0x0040, 0xA130);
/// ReferencedSamplePositions (0040,A132) UL
pub const REFERENCED_SAMPLE_POSITIONS: Tag = Tag(0x0040, 0xA132);
/// ReferencedFrameNumbers (0040,A136) US (retired)
pub const REFERENCED_FRAME_NUMBERS: Tag = Tag(0x0040, 0xA136);
/// ReferencedTimeOffsets (0040,A138) DS
pub const REFERENCED_TIME_OFFSETS: Tag = Tag(0x0040, 0xA138);
/// ReferencedDateTime (0040,A13A) DT
pub const REFERENCED_DATE_TIME: Tag = Tag(0x0040, 0xA13A);
/// TextValue (0040,A160) UT
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// FloatingPointValue (0040,A161) FD
pub const FLOATING_POINT_VALUE: Tag = Tag(0x0040, 0xA161);
/// RationalNumeratorValue (0040,A162) SL
pub const RATIONAL_NUMERATOR_VALUE: Tag = Tag(0x0040, 0xA162);
/// RationalDenominatorValue (0040,A163) UL
pub const RATIONAL_DENOMINATOR_VALUE: Tag = Tag(0x0040, 0xA163);
/// ObservationCategoryCodeSequenceTrial (0040,A167) SQ (retired)
pub const OBSERVATION_CATEGORY_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA167);
/// ConceptCodeSequence (0040,A168) SQ
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// BibliographicCitationTrial (0040,A16A) ST (retired)
pub const BIBLIOGRAPHIC_CITATION_TRIAL: Tag = Tag(0x0040, 0xA16A);
/// PurposeOfReferenceCodeSequence (0040,A170) SQ
pub const PURPOSE_OF_REFERENCE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA170);
/// ObservationUID (0040,A171) UI
pub const OBSERVATION_UID: Tag = Tag(0x0040, 0xA171);
/// ReferencedObservationUIDTrial (0040,A172) UI (retired)
pub const REFERENCED_OBSERVATION_UID_TRIAL: Tag = Tag(0x0040, 0xA172);
/// ReferencedObservationClassTrial (0040,A173) CS (retired)
pub const REFERENCED_OBSERVATION_CLASS_TRIAL: Tag = Tag(0x0040, 0xA173);
/// ReferencedObjectObservationClassTrial (0040,A174) CS (retired)
pub const REFERENCED_OBJECT_OBSERVATION_CLASS_TRIAL: Tag = Tag(0x0040, 0xA174);
/// AnnotationGroupNumber (0040,A180) US
pub const ANNOTATION_GROUP_NUMBER: Tag = Tag(0x0040, 0xA180);
/// ObservationDateTrial (0040,A192) DA (retired)
pub const OBSERVATION_DATE_TRIAL: Tag = Tag(0x0040, 0xA192);
/// ObservationTimeTrial (0040,A193) TM (retired)
pub const OBSERVATION_TIME_TRIAL: Tag = Tag(0x0040, 0xA193);
/// MeasurementAutomationTrial (0040,A194) CS (retired)
pub const MEASUREMENT_AUTOMATION_TRIAL: Tag = Tag(0x0040, 0xA194);
/// ModifierCodeSequence (0040,A195) SQ
pub const MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA195);
/// IdentificationDescriptionTrial (0040,A224) ST (retired)
pub const IDENTIFICATION_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0xA224);
/// CoordinatesSetGeometricTypeTrial (0040,A290) CS (retired)
pub const COORDINATES_SET_GEOMETRIC_TYPE_TRIAL: Tag = Tag(0x0040, 0xA290);
/// AlgorithmCodeSequenceTrial (0040,A296) SQ (retired)
pub const ALGORITHM_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA296);
/// AlgorithmDescriptionTrial (0040,A297) ST (retired)
pub const ALGORITHM_DESCRIPTION_TRIAL: Tag = Tag(0x0040, 0xA297);
/// PixelCoordinatesSetTrial (0040,A29A) SL (retired)
pub const PIXEL_COORDINATES_SET_TRIAL: Tag = Tag(0x0040, 0xA29A);
/// MeasuredValueSequence (0040,A300) SQ
pub const MEASURED_VALUE_SEQUENCE: Tag = Tag(0x0040, 0xA300);
/// NumericValueQualifierCodeSequence (0040,A301) SQ
pub const NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA301);
/// CurrentObserverTrial (0040,A307) PN (retired)
pub const CURRENT_OBSERVER_TRIAL: Tag = Tag(0x0040, 0xA307);
/// NumericValue (0040,A30A) DS
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// ReferencedAccessionSequenceTrial (0040,A313) SQ (retired)
pub const REFERENCED_ACCESSION_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA313);
/// ReportStatusCommentTrial (0040,A33A) ST (retired)
pub const REPORT_STATUS_COMMENT_TRIAL: Tag = Tag(0x0040, 0xA33A);
/// ProcedureContextSequenceTrial (0040,A340) SQ (retired)
pub const PROCEDURE_CONTEXT_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA340);
/// VerbalSourceTrial (0040,A352) PN (retired)
pub const VERBAL_SOURCE_TRIAL: Tag = Tag(0x0040, 0xA352);
/// AddressTrial (0040,A353) ST (retired)
pub const ADDRESS_TRIAL: Tag = Tag(0x0040, 0xA353);
/// TelephoneNumberTrial (0040,A354) LO (retired)
pub const TELEPHONE_NUMBER_TRIAL: Tag = Tag(0x0040, 0xA354);
/// VerbalSourceIdentifierCodeSequenceTrial (0040,A358) SQ (retired)
pub const VERBAL_SOURCE_IDENTIFIER_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA358);
/// PredecessorDocumentsSequence (0040,A360) SQ
pub const PREDECESSOR_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA360);
/// ReferencedRequestSequence (0040,A370) SQ
pub const REFERENCED_REQUEST_SEQUENCE: Tag = Tag(0x0040, 0xA370);
/// PerformedProcedureCodeSequence (0040,A372) SQ
pub const PERFORMED_PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA372);
/// CurrentRequestedProcedureEvidenceSequence (0040,A375) SQ
pub const CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA375);
/// ReportDetailSequenceTrial (0040,A380) SQ (retired)
pub const REPORT_DETAIL_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA380);
/// PertinentOtherEvidenceSequence (0040,A385) SQ
pub const PERTINENT_OTHER_EVIDENCE_SEQUENCE: Tag = Tag(0x0040, 0xA385);
/// HL7StructuredDocumentReferenceSequence (0040,A390) SQ
pub const HL7_STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE: Tag = Tag(0x0040, 0xA390);
/// ObservationSubjectUIDTrial (0040,A402) UI (retired)
pub const OBSERVATION_SUBJECT_UID_TRIAL: Tag = Tag(0x0040, 0xA402);
/// ObservationSubjectClassTrial (0040,A403) CS (retired)
pub const OBSERVATION_SUBJECT_CLASS_TRIAL: Tag = Tag(0x0040, 0xA403);
/// ObservationSubjectTypeCodeSequenceTrial (0040,A404) SQ (retired)
pub const OBSERVATION_SUBJECT_TYPE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA404);
/// CompletionFlag (0040,A491) CS
pub const COMPLETION_FLAG: Tag = Tag(0x0040, 0xA491);
/// CompletionFlagDescription (0040,A492) LO
pub const COMPLETION_FLAG_DESCRIPTION: Tag = Tag(0x0040, 0xA492);
/// VerificationFlag (0040,A493) CS
pub const VERIFICATION_FLAG: Tag = Tag(0x0040, 0xA493);
/// ArchiveRequested (0040,A494) CS
pub const ARCHIVE_REQUESTED: Tag = Tag(0x0040, 0xA494);
/// PreliminaryFlag (0040,A496) CS
pub const PRELIMINARY_FLAG: Tag = Tag(0x0040, 0xA496);
/// ContentTemplateSequence (0040,A504) SQ
pub const CONTENT_TEMPLATE_SEQUENCE: Tag = Tag(0x0040, 0xA504);
/// IdenticalDocumentsSequence (0040,A525) SQ
pub const IDENTICAL_DOCUMENTS_SEQUENCE: Tag = Tag(0x0040, 0xA525);
/// ObservationSubjectContextFlagTrial (0040,A600) CS (retired)
pub const OBSERVATION_SUBJECT_CONTEXT_FLAG_TRIAL: Tag = Tag(0x0040, 0xA600);
/// ObserverContextFlagTrial (0040,A601) CS (retired)
pub const OBSERVER_CONTEXT_FLAG_TRIAL: Tag = Tag(0x0040, 0xA601);
/// ProcedureContextFlagTrial (0040,A603) CS (retired)
pub const PROCEDURE_CONTEXT_FLAG_TRIAL: Tag = Tag(0x0040, 0xA603);
/// ContentSequence (0040,A730) SQ
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// RelationshipSequenceTrial (0040,A731) SQ (retired)
pub const RELATIONSHIP_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA731);
/// RelationshipTypeCodeSequenceTrial (0040,A732) SQ (retired)
pub const RELATIONSHIP_TYPE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA732);
/// LanguageCodeSequenceTrial (0040,A744) SQ (retired)
pub const LANGUAGE_CODE_SEQUENCE_TRIAL: Tag = Tag(0x0040, 0xA744);
/// TabulatedValuesSequence (0040,A801) SQ
pub const TABULATED_VALUES_SEQUENCE: Tag = Tag(0x0040, 0xA801);
/// NumberOfTableRows (0040,A802) UL
pub const NUMBER_OF_TABLE_ROWS: Tag = Tag(0x0040, 0xA802);
/// NumberOfTableColumns (0040,A803) UL
pub const NUMBER_OF_TABLE_COLUMNS: Tag = Tag(0x0040, 0xA803);
/// TableRowNumber (0040,A804) UL
pub const TABLE_ROW_NUMBER: Tag = Tag(0x0040, 0xA804);
/// TableColumnNumber (0040,A805) UL
pub const TABLE_COLUMN_NUMBER: Tag = Tag(0x0040, 0xA805);
/// TableRowDefinitionSequence (0040,A806) SQ
pub const TABLE_ROW_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0xA806);
/// TableColumnDefinitionSequence (0040,A807) SQ
pub const TABLE_COLUMN_DEFINITION_SEQUENCE: Tag = Tag(0x0040, 0xA807);
/// CellValuesSequence (0040,A808) SQ
pub const CELL_VALUES_SEQUENCE: Tag = Tag(0x0040, 0xA808);
/// UniformResourceLocatorTrial (0040,A992) ST (retired)
pub const UNIFORM_RESOURCE_LOCATOR_TRIAL: Tag = Tag(0x0040, 0xA992);
/// WaveformAnnotationSequence (0040,B020) SQ
pub const WAVEFORM_ANNOTATION_SEQUENCE: Tag = Tag(0x0040, 0xB020);
/// TemplateIdentifier (0040,DB00) CS
pub const TEMPLATE_IDENTIFIER: Tag = Tag(0x0040, 0xDB00);
/// TemplateVersion (0040,DB06) DT (retired)
pub const TEMPLATE_VERSION: Tag = Tag(0x0040, 0xDB06);
/// TemplateLocalVersion (0040,DB07) DT (retired)
pub const TEMPLATE_LOCAL_VERSION: Tag = Tag(0x0040, 0xDB07);
/// TemplateExtensionFlag (0040,DB0B) CS (retired)
pub const TEMPLATE_EXTENSION_FLAG: Tag = Tag(0x0040, 0xDB0B);
/// TemplateExtensionOrganizationUID (0040,DB0C) UI (retired)
pub const TEMPLATE_EXTENSION_ORGANIZATION_UID: Tag = Tag(0x0040, 0xDB0C);
/// TemplateExtensionCreatorUID (0040,DB0D) UI (retired)
pub const TEMPLATE_EXTENSION_CREATOR_UID: Tag = Tag(0x0040, 0xDB0D);
/// ReferencedContentItemIdentifier (0040,DB73) UL
pub const REFERENCED_CONTENT_ITEM_IDENTIFIER: Tag = Tag(0x0040, 0xDB73);
/// HL7InstanceIdentifier (0040,E001) ST
pub const HL7_INSTANCE_IDENTIFIER: Tag = Tag(0x0040, 0xE001);
/// HL7DocumentEffectiveTime (0040,E004) DT
pub const HL7_DOCUMENT_EFFECTIVE_TIME: Tag = Tag(0x0040, 0xE004);
/// HL7DocumentTypeCodeSequence (0040,E006) SQ
pub const HL7_DOCUMENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0040, 0xE006);
/// DocumentClassCodeSequence (0040,E008) SQ
pub const DOCUMENT_CLASS_CODE_SEQUENCE: Tag = Tag(0x0040, 0xE008);
/// RetrieveURI (0040,E010) UR
pub const RETRIEVE_URI: Tag = Tag(0x0040, 0xE010);
/// RetrieveLocationUID (0040,E011) UI
pub const RETRIEVE_LOCATION_UID: Tag = Tag(0x0040, 0xE011);
/// TypeOfInstances (0040,E020) CS
pub const TYPE_OF_INSTANCES: Tag = Tag(0x0040, 0xE020);
/// DICOMRetrievalSequence (0040,E021) SQ
pub const DICOM_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE021);
/// DICOMMediaRetrievalSequence (0040,E022) SQ
pub const DICOM_MEDIA_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE022);
/// WADORetrievalSequence (0040,E023) SQ
pub const WADO_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE023);
/// XDSRetrievalSequence (0040,E024) SQ
pub const XDS_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE024);
/// WADORSRetrievalSequence (0040,E025) SQ
pub const WADORS_RETRIEVAL_SEQUENCE: Tag = Tag(0x0040, 0xE025);
/// RepositoryUniqueID (0040,E030) UI
pub const REPOSITORY_UNIQUE_ID: Tag = Tag(0x0040, 0xE030);
/// HomeCommunityID (0040,E031) UI
pub const HOME_COMMUNITY_ID: Tag = Tag(0x0040, 0xE031);
/// DocumentTitle (0042,0010) ST
pub const DOCUMENT_TITLE: Tag = Tag(0x0042, 0x0010);
/// EncapsulatedDocument (0042,0011) OB
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// MIMETypeOfEncapsulatedDocument (0042,0012) LO
pub const MIME_TYPE_OF_ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0012);
/// SourceInstanceSequence (0042,0013) SQ
pub const SOURCE_INSTANCE_SEQUENCE: Tag = Tag(0x0042, 0x0013);
/// ListOfMIMETypes (0042,0014) LO
pub const LIST_OF_MIME_TYPES: Tag = Tag(0x0042, 0x0014);
/// EncapsulatedDocumentLength (0042,0015) UL
pub const ENCAPSULATED_DOCUMENT_LENGTH: Tag = Tag(0x0042, 0x0015);
/// ProductPackageIdentifier (0044,0001) ST
pub const PRODUCT_PACKAGE_IDENTIFIER: Tag = Tag(0x0044, 0x0001);
/// SubstanceAdministrationApproval (0044,0002) CS
pub const SUBSTANCE_ADMINISTRATION_APPROVAL: Tag = Tag(0x0044, 0x0002);
/// ApprovalStatusFurtherDescription (0044,0003) LT
pub const APPROVAL_STATUS_FURTHER_DESCRIPTION: Tag = Tag(0x0044, 0x0003);
/// ApprovalStatusDateTime (0044,0004) DT
pub const APPROVAL_STATUS_DATE_TIME: Tag = Tag(0x0044, 0x0004);
/// ProductTypeCodeSequence (0044,0007) SQ
pub const PRODUCT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0044, 0x0007);
/// ProductName (0044,0008) LO
pub const PRODUCT_NAME: Tag = Tag(0x0044, 0x0008);
/// ProductDescription (0044,0009) LT
pub const PRODUCT_DESCRIPTION: Tag = Tag(0x0044, 0x0009);
/// ProductLotIdentifier (0044,000A) LO
pub const PRODUCT_LOT_IDENTIFIER: Tag = Tag(0x0044, 0x000A);
/// ProductExpirationDateTime (0044,000B) DT
pub const PRODUCT_EXPIRATION_DATE_TIME: Tag = Tag(0x0044, 0x000B);
/// SubstanceAdministrationDateTime (0044,0010) DT
pub const SUBSTANCE_ADMINISTRATION_DATE_TIME: Tag = Tag(0x0044, 0x0010);
/// SubstanceAdministrationNotes (0044,0011) LO
pub const SUBSTANCE_ADMINISTRATION_NOTES: Tag = Tag(0x0044, 0x0011);
/// SubstanceAdministrationDeviceID (0044,0012) LO
pub const SUBSTANCE_ADMINISTRATION_DEVICE_ID: Tag = Tag(0x0044, 0x0012);
/// ProductParameterSequence (0044,0013) SQ
pub const PRODUCT_PARAMETER_SEQUENCE: Tag = Tag(0x0044, 0x0013);
/// SubstanceAdministrationParameterSequence (0044,0019) SQ
pub const SUBSTANCE_ADMINISTRATION_PARAMETER_SEQUENCE: Tag = Tag(0x0044, 0x0019);
/// ImagedVolumeWidth (0048,0001) FL
pub const IMAGED_VOLUME_WIDTH: Tag = Tag(0x0048, 0x0001);
/// ImagedVolumeHeight (0048,0002) FL
pub const IMAGED_VOLUME_HEIGHT: Tag = Tag(0x0048, 0x0002);
/// ImagedVolumeDepth (0048,0003) FL
pub const IMAGED_VOLUME_DEPTH: Tag = Tag(0x0048, 0x0003);
/// TotalPixelMatrixColumns (0048,0006) UL
pub const TOTAL_PIXEL_MATRIX_COLUMNS: Tag = Tag(0x0048, 0x0006);
/// TotalPixelMatrixRows (0048,0007) UL
pub const TOTAL_PIXEL_MATRIX_ROWS: Tag = Tag(0x0048, 0x0007);
/// TotalPixelMatrixOriginSequence (0048,0008) SQ
pub const TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE: Tag = Tag(0x0048, 0x0008);
/// SpecimenLabelInImage (0048,0010) CS
pub const SPECIMEN_LABEL_IN_IMAGE: Tag = Tag(0x0048, 0x0010);
/// FocusMethod (0048,0011) CS
pub const FOCUS_METHOD: Tag = Tag(0x0048, 0x0011);
/// ExtendedDepthOfField (0048,0012) CS
pub const EXTENDED_DEPTH_OF_FIELD: Tag = Tag(0x0048, 0x0012);
/// NumberOfFocalPlanes (0048,0013) US
pub const NUMBER_OF_FOCAL_PLANES: Tag = Tag(0x0048, 0x0013);
/// DistanceBetweenFocalPlanes (0048,0014) FL
pub const DISTANCE_BETWEEN_FOCAL_PLANES: Tag = Tag(0x0048, 0x0014);
/// RecommendedAbsentPixelCIELabValue (0048,0015) US
pub const RECOMMENDED_ABSENT_PIXEL_CIE_LAB_VALUE: Tag = Tag(0x0048, 0x0015);
/// IlluminatorTypeCodeSequence (0048,0100) SQ
pub const ILLUMINATOR_TYPE_CODE_SEQUENCE: Tag = Tag(0x0048, 0x0100);
/// ImageOrientationSlide (0048,0102) DS
pub const IMAGE_ORIENTATION_SLIDE: Tag = Tag(0x0048, 0x0102);
/// OpticalPathSequence (0048,0105) SQ
pub const OPTICAL_PATH_SEQUENCE: Tag = Tag(0x0048, 0x0105);
/// OpticalPathIdentifier (0048,0106) SH
pub const OPTICAL_PATH_IDENTIFIER: Tag = Tag(0x0048, 0x0106);
/// OpticalPathDescription (0048,0107) ST
pub const OPTICAL_PATH_DESCRIPTION: Tag = Tag(0x0048, 0x0107);
/// IlluminationColorCodeSequence (0048,0108) SQ
pub const ILLUMINATION_COLOR_CODE_SEQUENCE: Tag = Tag(0x0048, 0x0108);
/// SpecimenReferenceSequence (0048,0110) SQ
pub const SPECIMEN_REFERENCE_SEQUENCE: Tag = Tag(0x0048, 0x0110);
/// CondenserLensPower (0048,0111) DS
pub const CONDENSER_LENS_POWER: Tag = Tag(0x0048, 0x0111);
/// ObjectiveLensPower (0048,0112) DS
pub const OBJECTIVE_LENS_POWER: Tag = Tag(0x0048, 0x0112);
/// ObjectiveLensNumericalAperture (0048,0113) DS
pub const OBJECTIVE_LENS_NUMERICAL_APERTURE: Tag = Tag(0x0048, 0x0113);
/// ConfocalMode (0048,0114) CS
pub const CONFOCAL_MODE: Tag = Tag(0x0048, 0x0114);
/// TissueLocation (0048,0115) CS
pub const TISSUE_LOCATION: Tag = Tag(0x0048, 0x0115);
/// PaletteColorLookupTableSequence (0048,0120) SQ
pub const PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE: Tag = Tag(0x0048, 0x0120);
/// ReferencedImageNavigationSequence (0048,0200) SQ (retired)
pub const REFERENCED_IMAGE_NAVIGATION_SEQUENCE: Tag = Tag(0x0048, 0x0200);
/// TopLeftHandCornerOfLocalizerArea (0048,0201) US (retired)
pub const TOP_LEFT_HAND_CORNER_OF_LOCALIZER_AREA: Tag = Tag(0x0048, 0x0201);
/// BottomRightHandCornerOfLocalizerArea (0048,0202) US (retired)
pub const BOTTOM_RIGHT_HAND_CORNER_OF_LOCALIZER_AREA: Tag = Tag(0x0048, 0x0202);
/// OpticalPathIdentificationSequence (0048,0207) SQ
pub const OPTICAL_PATH_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0048, 0x0207);
/// PlanePositionSlideSequence (0048,021A) SQ
pub const PLANE_POSITION_SLIDE_SEQUENCE: Tag = Tag(0x0048, 0x021A);
/// ColumnPositionInTotalImagePixelMatrix (0048,021E) SL
pub const COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021E);
/// RowPositionInTotalImagePixelMatrix (0048,021F) SL
pub const ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021F);
/// CalibrationImage (0050,0004) CS
pub const CALIBRATION_IMAGE: Tag = Tag(0x0050, 0x0004);
/// DeviceSequence (0050,0010) SQ
pub const DEVICE_SEQUENCE: Tag = Tag(0x0050, 0x0010);
/// DeviceLength (0050,0014) DS
pub const DEVICE_LENGTH: Tag = Tag(0x0050, 0x0014);
/// DeviceDiameter (0050,0016) DS
pub const DEVICE_DIAMETER: Tag = Tag(0x0050, 0x0016);
/// DeviceVolume (0050,0018) DS
pub const DEVICE_VOLUME: Tag = Tag(0x0050, 0x0018);
/// DeviceDescription (0050,0020) LO
pub const DEVICE_DESCRIPTION: Tag = Tag(0x0050, 0x0020);
/// LongDeviceDescription (0050,0021) ST
pub const LONG_DEVICE_DESCRIPTION: Tag = Tag(0x0050, 0x0021);
/// EnergyWindowVector (0054,0010) US
pub const ENERGY_WINDOW_VECTOR: Tag = Tag(0x0054, 0x0010);
/// NumberOfEnergyWindows (0054,0011) US
pub const NUMBER_OF_ENERGY_WINDOWS: Tag = Tag(0x0054, 0x0011);
/// EnergyWindowInformationSequence (0054,0012) SQ
pub const ENERGY_WINDOW_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0012);
/// EnergyWindowRangeSequence (0054,0013) SQ
pub const ENERGY_WINDOW_RANGE_SEQUENCE: Tag = Tag(0x0054, 0x0013);
/// EnergyWindowLowerLimit (0054,0014) DS
pub const ENERGY_WINDOW_LOWER_LIMIT: Tag = Tag(0x0054, 0x0014);
/// EnergyWindowUpperLimit (0054,0015) DS
pub const ENERGY_WINDOW_UPPER_LIMIT: Tag = Tag(0x0054, 0x0015);
/// RadiopharmaceuticalInformationSequence (0054,0016) SQ
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
/// ResidualSyringeCounts (0054,0017) IS
pub const RESIDUAL_SYRINGE_COUNTS: Tag = Tag(0x0054, 0x0017);
/// EnergyWindowName (0054,0018) SH
pub const ENERGY_WINDOW_NAME: Tag = Tag(0x0054, 0x0018);
/// DetectorVector (0054,0020) US
pub const DETECTOR_VECTOR: Tag = Tag(0x0054, 0x0020);
/// NumberOfDetectors (0054,0021) US
pub const NUMBER_OF_DETECTORS: Tag = Tag(0x0054, 0x0021);
/// DetectorInformationSequence (0054,0022) SQ
pub const DETECTOR_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0022);
/// PhaseVector (0054,0030) US
pub const PHASE_VECTOR: Tag = Tag(0x0054, 0x0030);
/// NumberOfPhases (0054,0031) US
pub const NUMBER_OF_PHASES: Tag = Tag(0x0054, 0x0031);
/// PhaseInformationSequence (0054,0032) SQ
pub const PHASE_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0032);
/// NumberOfFramesInPhase (0054,0033) US
pub const NUMBER_OF_FRAMES_IN_PHASE: Tag = Tag(0x0054, 0x0033);
/// PhaseDelay (0054,0036) IS
pub const PHASE_DELAY: Tag = Tag(0x0054, 0x0036);
/// PauseBetweenFrames (0054,0038) IS
pub const PAUSE_BETWEEN_FRAMES: Tag = Tag(0x0054, 0x0038);
/// PhaseDescription (0054,0039) CS
pub const PHASE_DESCRIPTION: Tag = Tag(0x0054, 0x0039);
/// RotationVector (0054,0050) US
pub const ROTATION_VECTOR: Tag = Tag(0x0054, 0x0050);
/// NumberOfRotations (0054,0051) US
pub const NUMBER_OF_ROTATIONS: Tag = Tag(0x0054, 0x0051);
/// RotationInformationSequence (0054,0052) SQ
pub const ROTATION_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0052);
/// NumberOfFramesInRotation (0054,0053) US
pub const NUMBER_OF_FRAMES_IN_ROTATION: Tag = Tag(0x0054, 0x0053);
/// RRIntervalVector (0054,0060) US
pub const RR_INTERVAL_VECTOR: Tag = Tag(0x0054, 0x0060);
/// NumberOfRRIntervals (0054,0061) US
pub const NUMBER_OF_RR_INTERVALS: Tag = Tag(0x0054, 0x0061);
/// GatedInformationSequence (0054,0062) SQ
pub const GATED_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0062);
/// DataInformationSequence (0054,0063) SQ
pub const DATA_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0063);
/// TimeSlotVector (0054,0070) US
pub const TIME_SLOT_VECTOR: Tag = Tag(0x0054, 0x0070);
/// NumberOfTimeSlots (0054,0071) US
pub const NUMBER_OF_TIME_SLOTS: Tag = Tag(0x0054, 0x0071);
/// TimeSlotInformationSequence (0054,0072) SQ
pub const TIME_SLOT_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0072);
/// TimeSlotTime (0054,0073) DS
pub const TIME_SLOT_TIME: Tag = Tag(0x0054, 0x0073);
/// SliceVector (0054,0080) US
pub const SLICE_VECTOR: Tag = Tag(0x0054, 0x0080);
/// NumberOfSlices (0054,0081) US
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// AngularViewVector (0054,0090) US
pub const ANGULAR_VIEW_VECTOR: Tag = Tag(0x0054, 0x0090);
/// TimeSliceVector (0054,0100) US
pub const TIME_SLICE_VECTOR: Tag = Tag(0x0054, 0x0100);
/// NumberOfTimeSlices (0054,0101) US
pub const NUMBER_OF_TIME_SLICES: Tag = Tag(0x0054, 0x0101);
/// StartAngle (0054,0200) DS
pub const START_ANGLE: Tag = Tag(0x0054, 0x0200);
/// TypeOfDetectorMotion (0054,0202) CS
pub const TYPE_OF_DETECTOR_MOTION: Tag = Tag(0x0054, 0x0202);
/// TriggerVector (0054,0210) IS
pub const TRIGGER_VECTOR: Tag = Tag(0x0054, 0x0210);
/// NumberOfTriggersInPhase (0054,0211) US
pub const NUMBER_OF_TRIGGERS_IN_PHASE: Tag = Tag(0x0054, 0x0211);
/// ViewCodeSequence (0054,0220) SQ
pub const VIEW_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0220);
/// ViewModifierCodeSequence (0054,0222) SQ
pub const VIEW_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0222);
/// RadionuclideCodeSequence (0054,0300) SQ
pub const RADIONUCLIDE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0300);
/// AdministrationRouteCodeSequence (0054,0302) SQ
pub const ADMINISTRATION_ROUTE_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0302);
/// RadiopharmaceuticalCodeSequence (0054,0304) SQ
pub const RADIOPHARMACEUTICAL_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0304);
/// CalibrationDataSequence (0054,0306) SQ
pub const CALIBRATION_DATA_SEQUENCE: Tag = Tag(0x0054, 0x0306);
/// EnergyWindowNumber (0054,0308) US
pub const ENERGY_WINDOW_NUMBER: Tag = Tag(0x0054, 0x0308);
/// ImageID (0054,0400) SH
pub const IMAGE_ID: Tag = Tag(0x0054, 0x0400);
/// PatientOrientationCodeSequence (0054,0410) SQ
pub const PATIENT_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0410);
/// PatientOrientationModifierCodeSequence (0054,0412) SQ
pub const PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0412);
/// PatientGantryRelationshipCodeSequence (0054,0414) SQ
pub const PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE: Tag = Tag(0x0054, 0x0414);
/// SliceProgressionDirection (0054,0500) CS
pub const SLICE_PROGRESSION_DIRECTION: Tag = Tag(0x0054, 0x0500);
/// ScanProgressionDirection (0054,0501) CS
pub const SCAN_PROGRESSION_DIRECTION: Tag = Tag(0x0054, 0x0501);
/// SeriesType (0054,1000) CS
pub const SERIES_TYPE: Tag = Tag(0x0054, 0x1000);
/// Units (0054,1001) CS
pub const UNITS: Tag = Tag(0x0054, 0x1001);
/// CountsSource (0054,1002) CS
pub const COUNTS_SOURCE: Tag = Tag(0x0054, 0x1002);
/// ReprojectionMethod (0054,1004) CS
pub const REPROJECTION_METHOD: Tag = Tag(0x0054, 0x1004);
/// SUVType (0054,1006) CS
pub const SUV_TYPE: Tag = Tag(0x0054, 0x1006);
/// RandomsCorrectionMethod (0054,1100) CS
pub const RANDOMS_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1100);
/// AttenuationCorrectionMethod (0054,1101) LO
pub const ATTENUATION_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1101);
/// DecayCorrection (0054,1102) CS
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);
/// ReconstructionMethod (0054,1103) LO
pub const RECONSTRUCTION_METHOD: Tag = Tag(0x0054, 0x1103);
/// DetectorLinesOfResponseUsed (0054,1104) LO
pub const DETECTOR_LINES_OF_RESPONSE_USED: Tag = Tag(0x0054, 0x1104);
/// ScatterCorrectionMethod (0054,1105) LO
pub const SCATTER_CORRECTION_METHOD: Tag = Tag(0x0054, 0x1105);
/// AxialAcceptance (0054,1200) DS
pub const AXIAL_ACCEPTANCE: Tag = Tag(0x0054, 0x1200);
/// AxialMash (0054,1201) IS
pub const AXIAL_MASH: Tag = Tag(0x0054, 0x1201);
/// TransverseMash (0054,1202) IS
pub const TRANSVERSE_MASH: Tag = Tag(0x0054, 0x1202);
/// DetectorElementSize (0054,1203) DS
pub const DETECTOR_ELEMENT_SIZE: Tag = Tag(0x0054, 0x1203);
/// CoincidenceWindowWidth (0054,1210) DS
pub const COINCIDENCE_WINDOW_WIDTH: Tag = Tag(0x0054, 0x1210);
/// SecondaryCountsType (0054,1220) CS
pub const SECONDARY_COUNTS_TYPE: Tag = Tag(0x0054, 0x1220);
/// FrameReferenceTime (0054,1300) DS
pub const FRAME_REFERENCE_TIME: Tag = Tag(0x0054, 0x1300);
/// PrimaryPromptsCountsAccumulated (0054,1310) IS
pub const PRIMARY_PROMPTS_COUNTS_ACCUMULATED: Tag = Tag(0x0054, 0x1310);
/// SecondaryCountsAccumulated (0054,1311) IS
pub const SECONDARY_COUNTS_ACCUMULATED: Tag = Tag(0x0054, 0x1311);
/// SliceSensitivityFactor (0054,1320) DS
pub const SLICE_SENSITIVITY_FACTOR: Tag = Tag(0x0054, 0x1320);
/// DecayFactor (0054,1321) DS
pub const DECAY_FACTOR: Tag = Tag(0x0054, 0x1321);
/// DoseCalibrationFactor (0054,1322) DS
pub const DOSE_CALIBRATION_FACTOR: Tag = Tag(0x0054, 0x1322);
/// ScatterFractionFactor (0054,1323) DS
pub const SCATTER_FRACTION_FACTOR: Tag = Tag(0x0054, 0x1323);
/// DeadTimeFactor (0054,1324) DS
pub const DEAD_TIME_FACTOR: Tag = Tag(0x0054, 0x1324);
/// ImageIndex (0054,1330) US
pub const IMAGE_INDEX: Tag = Tag(0x0054, 0x1330);
/// CountsIncluded (0054,1400) CS (retired)
pub const COUNTS_INCLUDED: Tag = Tag(0x0054, 0x1400);
/// DeadTimeCorrectionFlag (0054,1401) CS (retired)
pub const DEAD_TIME_CORRECTION_FLAG: Tag = Tag(0x0054, 0x1401);
/// HistogramSequence (0060,3000) SQ
pub const HISTOGRAM_SEQUENCE: Tag = Tag(0x0060, 0x3000);
/// HistogramNumberOfBins (0060,3002) US
pub const HISTOGRAM_NUMBER_OF_BINS: Tag = Tag(0x0060, 0x3002);
/// HistogramFirstBinValue (0060,3004) US
pub const HISTOGRAM_FIRST_BIN_VALUE: Tag = Tag(0x0060, 0x3004);
/// HistogramLastBinValue (0060,3006) US
pub const HISTOGRAM_LAST_BIN_VALUE: Tag = Tag(0x0060, 0x3006);
/// HistogramBinWidth (0060,3008) US
pub const HISTOGRAM_BIN_WIDTH: Tag = Tag(0x0060, 0x3008);
/// HistogramExplanation (0060,3010) LO
pub const HISTOGRAM_EXPLANATION: Tag = Tag(0x0060, 0x3010);
/// HistogramData (0060,3020) UL
pub const HISTOGRAM_DATA: Tag = Tag(0x0060, 0x3020);
/// SegmentationType (0062,0001) CS
pub const SEGMENTATION_TYPE: Tag = Tag(0x0062, 0x0001);
/// SegmentSequence (0062,0002) SQ
pub const SEGMENT_SEQUENCE: Tag = Tag(0x0062, 0x0002);
/// SegmentedPropertyCategoryCodeSequence (0062,0003) SQ
pub const SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0003);
/// SegmentNumber (0062,0004) US
pub const SEGMENT_NUMBER: Tag = Tag(0x0062, 0x0004);
/// SegmentLabel (0062,0005) LO
pub const SEGMENT_LABEL: Tag = Tag(0x0062, 0x0005);
/// SegmentDescription (0062,0006) ST
pub const SEGMENT_DESCRIPTION: Tag = Tag(0x0062, 0x0006);
/// SegmentationAlgorithmIdentificationSequence (0062,0007) SQ
pub const SEGMENTATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x0007);
/// SegmentAlgorithmType (0062,0008) CS
pub const SEGMENT_ALGORITHM_TYPE: Tag = Tag(0x0062, 0x0008);
/// SegmentAlgorithmName (0062,0009) LO
pub const SEGMENT_ALGORITHM_NAME: Tag = Tag(0x0062, 0x0009);
/// SegmentIdentificationSequence (0062,000A) SQ
pub const SEGMENT_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0062, 0x000A);
/// ReferencedSegmentNumber (0062,000B) US
pub const REFERENCED_SEGMENT_NUMBER: Tag = Tag(0x0062, 0x000B);
/// RecommendedDisplayGrayscaleValue (0062,000C) US
pub const RECOMMENDED_DISPLAY_GRAYSCALE_VALUE: Tag = Tag(0x0062, 0x000C);
/// RecommendedDisplayCIELabValue (0062,000D) US
pub const RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x0062, 0x000D);
/// MaximumFractionalValue (0062,000E) US
pub const MAXIMUM_FRACTIONAL_VALUE: Tag = Tag(0x0062, 0x000E);
/// SegmentedPropertyTypeCodeSequence (0062,000F) SQ
pub const SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE: Tag = Tag(0x0062, 0x000F);
/// SegmentationFractionalType (0062,0010) CS
pub const SEGMENTATION_FRACTIONAL_TYPE: Tag = Tag(0x0062, 0x0010);
/// SegmentedPropertyTypeModifierCodeSequence (0062,0011) SQ
pub const SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0062, 0x0011);
/// UsedSegmentsSequence (0062,0012) SQ
pub const USED_SEGMENTS_SEQUENCE: Tag = Tag(0x0062, 0x0012);
/// SegmentsOverlap (0062,0013) CS
pub const SEGMENTS_OVERLAP: Tag = Tag(0x0062, 0x0013);
/// TrackingID (0062,0020) UT
pub const TRACKING_ID: Tag = Tag(0x0062, 0x0020);
/// TrackingUID (0062,0021) UI
pub const TRACKING_UID: Tag = Tag(0x0062, 0x0021);
/// DeformableRegistrationSequence (0064,0002) SQ
pub const DEFORMABLE_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0002);
/// SourceFrameOfReferenceUID (0064,0003) UI
pub const SOURCE_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0064, 0x0003);
/// DeformableRegistrationGridSequence (0064,0005) SQ
pub const DEFORMABLE_REGISTRATION_GRID_SEQUENCE: Tag = Tag(0x0064, 0x0005);
/// GridDimensions (0064,0007) UL
pub const GRID_DIMENSIONS: Tag = Tag(0x0064, 0x0007);
/// GridResolution (0064,0008) FD
pub const GRID_RESOLUTION: Tag = Tag(0x0064, 0x0008);
/// VectorGridData (0064,0009) OF
pub const VECTOR_GRID_DATA: Tag = Tag(0x0064, 0x0009);
/// PreDeformationMatrixRegistrationSequence (0064,000F) SQ
pub const PRE_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x000F);
/// PostDeformationMatrixRegistrationSequence (0064,0010) SQ
pub const POST_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0064, 0x0010);
/// NumberOfSurfaces (0066,0001) UL
pub const NUMBER_OF_SURFACES: Tag = Tag(0x0066, 0x0001);
/// SurfaceSequence (0066,0002) SQ
pub const SURFACE_SEQUENCE: Tag = Tag(0x0066, 0x0002);
/// SurfaceNumber (0066,0003) UL
pub const SURFACE_NUMBER: Tag = Tag(0x0066, 0x0003);
/// SurfaceComments (0066,0004) LT
pub const SURFACE_COMMENTS: Tag = Tag(0x0066, 0x0004);
/// SurfaceProcessing (0066,0009) CS
pub const SURFACE_PROCESSING: Tag = Tag(0x0066, 0x0009);
/// SurfaceProcessingRatio (0066,000A) FL
pub const SURFACE_PROCESSING_RATIO: Tag = Tag(0x0066, 0x000A);
/// SurfaceProcessingDescription (0066,000B) LO
pub const SURFACE_PROCESSING_DESCRIPTION: Tag = Tag(0x0066, 0x000B);
/// RecommendedPresentationOpacity (0066,000C) FL
pub const RECOMMENDED_PRESENTATION_OPACITY: Tag = Tag(0x0066, 0x000C);
/// RecommendedPresentationType (0066,000D) CS
pub const RECOMMENDED_PRESENTATION_TYPE: Tag = Tag(0x0066, 0x000D);
/// FiniteVolume (0066,000E) CS
pub const FINITE_VOLUME: Tag = Tag(0x0066, 0x000E);
/// Manifold (0066,0010) CS
pub const MANIFOLD: Tag = Tag(0x0066, 0x0010);
/// SurfacePointsSequence (0066,0011) SQ
pub const SURFACE_POINTS_SEQUENCE: Tag = Tag(0x0066, 0x0011);
/// SurfacePointsNormalsSequence (0066,0012) SQ
pub const SURFACE_POINTS_NORMALS_SEQUENCE: Tag = Tag(0x0066, 0x0012);
/// SurfaceMeshPrimitivesSequence (0066,0013) SQ
pub const SURFACE_MESH_PRIMITIVES_SEQUENCE: Tag = Tag(0x0066, 0x0013);
/// NumberOfSurfacePoints (0066,0015) UL
pub const NUMBER_OF_SURFACE_POINTS: Tag = Tag(0x0066, 0x0015);
/// PointCoordinatesData (0066,0016) OF
pub const POINT_COORDINATES_DATA: Tag = Tag(0x0066, 0x0016);
/// PointPositionAccuracy (0066,0017) FL
pub const POINT_POSITION_ACCURACY: Tag = Tag(0x0066, 0x0017);
/// MeanPointDistance (0066,0018) FL
pub const MEAN_POINT_DISTANCE: Tag = Tag(0x0066, 0x0018);
/// MaximumPointDistance (0066,0019) FL
pub const MAXIMUM_POINT_DISTANCE: Tag = Tag(0x0066, 0x0019);
/// PointsBoundingBoxCoordinates (0066,001A) FL
pub const POINTS_BOUNDING_BOX_COORDINATES: Tag = Tag(0x0066, 0x001A);
/// AxisOfRotation (0066,001B) FL
pub const AXIS_OF_ROTATION: Tag = Tag(0x0066, 0x001B);
/// CenterOfRotation (0066,001C) FL
pub const CENTER_OF_ROTATION: Tag = Tag(0x0066, 0x001C);
/// NumberOfVectors (0066,001E) UL
pub const NUMBER_OF_VECTORS: Tag = Tag(0x0066, 0x001E);
/// VectorDimensionality (0066,001F) US
pub const VECTOR_DIMENSIONALITY: Tag = Tag(0x0066, 0x001F);
/// VectorAccuracy (0066,0020) FL
pub const VECTOR_ACCURACY: Tag = Tag(0x0066, 0x0020);
/// VectorCoordinateData (0066,0021) OF
pub const VECTOR_COORDINATE_DATA: Tag = Tag(0x0066, 0x0021);
/// DoublePointCoordinatesData (0066,0022) OD
pub const DOUBLE_POINT_COORDINATES_DATA: Tag = Tag(0x0066, 0x0022);
/// TrianglePointIndexList (0066,0023) OW (retired)
pub const TRIANGLE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0023);
/// EdgePointIndexList (0066,0024) OW (retired)
pub const EDGE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0024);
/// VertexPointIndexList (0066,0025) OW (retired)
pub const VERTEX_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0025);
/// TriangleStripSequence (0066,0026) SQ
pub const TRIANGLE_STRIP_SEQUENCE: Tag = Tag(0x0066, 0x0026);
/// TriangleFanSequence (0066,0027) SQ
pub const TRIANGLE_FAN_SEQUENCE: Tag = Tag(0x0066, 0x0027);
/// LineSequence (0066,0028) SQ
pub const LINE_SEQUENCE: Tag = Tag(0x0066, 0x0028);
/// PrimitivePointIndexList (0066,0029) OW (retired)
pub const PRIMITIVE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0029);
/// SurfaceCount (0066,002A) UL
pub const SURFACE_COUNT: Tag = Tag(0x0066, 0x002A);
/// ReferencedSurfaceSequence (0066,002B) SQ
pub const REFERENCED_SURFACE_SEQUENCE: Tag = Tag(0x0066, 0x002B);
/// ReferencedSurfaceNumber (0066,002C) UL
pub const REFERENCED_SURFACE_NUMBER: Tag = Tag(0x0066, 0x002C);
/// SegmentSurfaceGenerationAlgorithmIdentificationSequence (0066,002D) SQ
pub const SEGMENT_SURFACE_GENERATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0066, 0x002D);
/// SegmentSurfaceSourceInstanceSequence (0066,002E) SQ
pub const SEGMENT_SURFACE_SOURCE_INSTANCE_SEQUENCE: Tag = Tag(0x0066, 0x002E);
/// AlgorithmFamilyCodeSequence (0066,002F) SQ
pub const ALGORITHM_FAMILY_CODE_SEQUENCE: Tag = Tag(0x0066, 0x002F);
/// AlgorithmNameCodeSequence (0066,0030) SQ
pub const ALGORITHM_NAME_CODE_SEQUENCE: Tag = Tag(0x0066, 0x0030);
/// AlgorithmVersion (0066,0031) LO
pub const ALGORITHM_VERSION: Tag = Tag(0x0066, 0x0031);
/// AlgorithmParameters (0066,0032) LT
pub const ALGORITHM_PARAMETERS: Tag = Tag(0x0066, 0x0032);
/// FacetSequence (0066,0034) SQ
pub const FACET_SEQUENCE: Tag = Tag(0x0066, 0x0034);
/// SurfaceProcessingAlgorithmIdentificationSequence (0066,0035) SQ
pub const SURFACE_PROCESSING_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x0066, 0x0035);
/// AlgorithmName (0066,0036) LO
pub const ALGORITHM_NAME: Tag = Tag(0x0066, 0x0036);
/// RecommendedPointRadius (0066,0037) FL
pub const RECOMMENDED_POINT_RADIUS: Tag = Tag(0x0066, 0x0037);
/// RecommendedLineThickness (0066,0038) FL
pub const RECOMMENDED_LINE_THICKNESS: Tag = Tag(0x0066, 0x0038);
/// LongPrimitivePointIndexList (0066,0040) OL
pub const LONG_PRIMITIVE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0040);
/// LongTrianglePointIndexList (0066,0041) OL
pub const LONG_TRIANGLE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0041);
/// LongEdgePointIndexList (0066,0042) OL
pub const LONG_EDGE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0042);
/// LongVertexPointIndexList (0066,0043) OL
pub const LONG_VERTEX_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0043);
/// ImplantSize (0068,6210) LO
pub const IMPLANT_SIZE: Tag = Tag(0x0068, 0x6210);
/// ImplantTemplateVersion (0068,6221) LO
pub const IMPLANT_TEMPLATE_VERSION: Tag = Tag(0x0068, 0x6221);
/// ReplacedImplantTemplateSequence (0068,6222) SQ
pub const REPLACED_IMPLANT_TEMPLATE_SEQUENCE: Tag = Tag(0x0068, 0x6222);
/// ImplantType (0068,6223) CS
pub const IMPLANT_TYPE: Tag = Tag(0x0068, 0x6223);
/// DerivationImplantTemplateSequence (0068,6224) SQ
pub const DERIVATION_IMPLANT_TEMPLATE_SEQUENCE: Tag = Tag(0x0068, 0x6224);
/// OriginalImplantTemplateSequence (0068,6225) SQ
pub const ORIGINAL_IMPLANT_TEMPLATE_SEQUENCE: Tag = Tag(0x0068, 0x6225);
/// EffectiveDateTime (0068,6226) DT
pub const EFFECTIVE_DATE_TIME: Tag = Tag(0x0068, 0x6226);
/// ImplantTargetAnatomySequence (0068,6230) SQ
pub const IMPLANT_TARGET_ANATOMY_SEQUENCE: Tag = Tag(0x0068, 0x6230);
/// InformationFromManufacturerSequence (0068,6260) SQ
pub const INFORMATION_FROM_MANUFACTURER_SEQUENCE: Tag = Tag(0x0068, 0x6260);
/// NotificationFromManufacturerSequence (0068,6265) SQ
pub const NOTIFICATION_FROM_MANUFACTURER_SEQUENCE: Tag = Tag(0x0068, 0x6265);
/// InformationIssueDateTime (0068,6270) DT
pub const INFORMATION_ISSUE_DATE_TIME: Tag = Tag(0x0068, 0x6270);
/// InformationSummary (0068,6280) ST
pub const INFORMATION_SUMMARY: Tag = Tag(0x0068, 0x6280);
/// ImplantRegulatoryDisapprovalCodeSequence (0068,62A0) SQ
pub const IMPLANT_REGULATORY_DISAPPROVAL_CODE_SEQUENCE: Tag = Tag(0x0068, 0x62A0);
/// OverallTemplateSpatialTolerance (0068,62A5) FD
pub const OVERALL_TEMPLATE_SPATIAL_TOLERANCE: Tag = Tag(0x0068, 0x62A5);
/// HPGLDocumentSequence (0068,62C0) SQ
pub const HPGL_DOCUMENT_SEQUENCE: Tag = Tag(0x0068, 0x62C0);
/// HPGLDocumentID (0068,62D0) US
pub const HPGL_DOCUMENT_ID: Tag = Tag(0x0068, 0x62D0);
/// HPGLDocumentLabel (0068,62D5) LO
pub const HPGL_DOCUMENT_LABEL: Tag = Tag(0x0068, 0x62D5);
/// ViewOrientationCodeSequence (0068,62E0) SQ
pub const VIEW_ORIENTATION_CODE_SEQUENCE: Tag = Tag(0x0068, 0x62E0);
/// ViewOrientationModifierCodeSequence (0068,62F0) SQ (retired)
pub const VIEW_ORIENTATION_MODIFIER_CODE_SEQUENCE: Tag = Tag(0x0068, 0x62F0);
/// HPGLDocumentScaling (0068,62F2) FD
pub const HPGL_DOCUMENT_SCALING: Tag = Tag(0x0068, 0x62F2);
/// HPGLDocument (0068,6300) OB
pub const HPGL_DOCUMENT: Tag = Tag(0x0068, 0x6300);
/// HPGLContourPenNumber (0068,6310) US
pub const HPGL_CONTOUR_PEN_NUMBER: Tag = Tag(0x0068, 0x6310);
/// HPGLPenSequence (0068,6320) SQ
pub const HPGL_PEN_SEQUENCE: Tag = Tag(0x0068, 0x6320);
/// HPGLPenNumber (0068,6330) US
pub const HPGL_PEN_NUMBER: Tag = Tag(0x0068, 0x6330);
/// HPGLPenLabel (0068,6340) LO
pub const HPGL_PEN_LABEL: Tag = Tag(0x0068, 0x6340);
/// HPGLPenDescription (0068,6345) ST
pub const HPGL_PEN_DESCRIPTION: Tag = Tag(0x0068, 0x6345);
/// RecommendedRotationPoint (0068,6346) FD
pub const RECOMMENDED_ROTATION_POINT: Tag = Tag(0x0068, 0x6346);
/// BoundingRectangle (0068,6347) FD
pub const BOUNDING_RECTANGLE: Tag = Tag(0x0068, 0x6347);
/// ImplantTemplate3DModelSurfaceNumber (0068,6350) US
pub const IMPLANT_TEMPLATE3_D_MODEL_SURFACE_NUMBER: Tag = Tag(0x0068, 0x6350);
/// SurfaceModelDescriptionSequence (0068,6360) SQ
pub const SURFACE_MODEL_DESCRIPTION_SEQUENCE: Tag = Tag(0x0068, 0x6360);
/// SurfaceModelLabel (0068,6380) LO
pub const SURFACE_MODEL_LABEL: Tag = Tag(0x0068, 0x6380);
/// SurfaceModelScalingFactor (0068,6390) FD
pub const SURFACE_MODEL_SCALING_FACTOR: Tag = Tag(0x0068, 0x6390);
/// MaterialsCodeSequence (0068,63A0) SQ
pub const MATERIALS_CODE_SEQUENCE: Tag = Tag(0x0068, 0x63A0);
/// CoatingMaterialsCodeSequence (0068,63A4) SQ
pub const COATING_MATERIALS_CODE_SEQUENCE: Tag = Tag(0x0068, 0x63A4);
/// ImplantTypeCodeSequence (0068,63A8) SQ
pub const IMPLANT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0068, 0x63A8);
/// FixationMethodCodeSequence (0068,63AC) SQ
pub const FIXATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0068, 0x63AC);
/// MatingFeatureSetsSequence (0068,63B0) SQ
pub const MATING_FEATURE_SETS_SEQUENCE: Tag = Tag(0x0068, 0x63B0);
/// MatingFeatureSetID (0068,63C0) US
pub const MATING_FEATURE_SET_ID: Tag = Tag(0x0068, 0x63C0);
/// MatingFeatureSetLabel (0068,63D0) LO
pub const MATING_FEATURE_SET_LABEL: Tag = Tag(0x0068, 0x63D0);
/// MatingFeatureSequence (0068,63E0) SQ
pub const MATING_FEATURE_SEQUENCE: Tag = Tag(0x0068, 0x63E0);
/// MatingFeatureID (0068,63F0) US
pub const MATING_FEATURE_ID: Tag = Tag(0x0068, 0x63F0);
/// MatingFeatureDegreeOfFreedomSequence (0068,6400) SQ
pub const MATING_FEATURE_DEGREE_OF_FREEDOM_SEQUENCE: Tag = Tag(0x0068, 0x6400);
/// DegreeOfFreedomID (0068,6410) US
pub const DEGREE_OF_FREEDOM_ID: Tag = Tag(0x0068, 0x6410);
/// DegreeOfFreedomType (0068,6420) CS
pub const DEGREE_OF_FREEDOM_TYPE: Tag = Tag(0x0068, 0x6420);
/// TwoDMatingFeatureCoordinatesSequence (0068,6430) SQ
pub const TWO_D_MATING_FEATURE_COORDINATES_SEQUENCE: Tag = Tag(0x0068, 0x6430);
/// ReferencedHPGLDocumentID (0068,6440) US
pub const REFERENCED_HPGL_DOCUMENT_ID: Tag = Tag(0x0068, 0x6440);
/// TwoDMatingPoint (0068,6450) FD
pub const TWO_D_MATING_POINT: Tag = Tag(0x0068, 0x6450);
/// TwoDMatingAxes (0068,6460) FD
pub const TWO_D_MATING_AXES: Tag = Tag(0x0068, 0x6460);
/// TwoDDegreeOfFreedomSequence (0068,6470) SQ
pub const TWO_D_DEGREE_OF_FREEDOM_SEQUENCE: Tag = Tag(0x0068, 0x6470);
/// ThreeDDegreeOfFreedomAxis (0068,6490) FD
pub const THREE_D_DEGREE_OF_FREEDOM_AXIS: Tag = Tag(0x0068, 0x6490);
/// RangeOfFreedom (0068,64A0) FD
pub const RANGE_OF_FREEDOM: Tag = Tag(0x0068, 0x64A0);
/// ThreeDMatingPoint (0068,64C0) FD
pub const THREE_D_MATING_POINT: Tag = Tag(0x0068, 0x64C0);
/// ThreeDMatingAxes (0068,64D0) FD
pub const THREE_D_MATING_AXES: Tag = Tag(0x0068, 0x64D0);
/// TwoDDegreeOfFreedomAxis (0068,64F0) FD
pub const TWO_D_DEGREE_OF_FREEDOM_AXIS: Tag = Tag(0x0068, 0x64F0);
/// PlanningLandmarkPointSequence (0068,6500) SQ
pub const PLANNING_LANDMARK_POINT_SEQUENCE: Tag = Tag(0x0068, 0x6500);
/// PlanningLandmarkLineSequence (0068,6510) SQ
pub const PLANNING_LANDMARK_LINE_SEQUENCE: Tag = Tag(0x0068, 0x6510);
/// PlanningLandmarkPlaneSequence (0068,6520) SQ
pub const PLANNING_LANDMARK_PLANE_SEQUENCE: Tag = Tag(0x0068, 0x6520);
/// PlanningLandmarkID (0068,6530) US
pub const PLANNING_LANDMARK_ID: Tag = Tag(0x0068, 0x6530);
/// PlanningLandmarkDescription (0068,6540) LO
pub const PLANNING_LANDMARK_DESCRIPTION: Tag = Tag(0x0068, 0x6540);
/// PlanningLandmarkIdentificationCodeSequence (0068,6545) SQ
pub const PLANNING_LANDMARK_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0068, 0x6545);
/// TwoDPointCoordinatesSequence (0068,6550) SQ
pub const TWO_D_POINT_COORDINATES_SEQUENCE: Tag = Tag(0x0068, 0x6550);
/// TwoDPointCoordinates (0068,6560) FD
pub const TWO_D_POINT_COORDINATES: Tag = Tag(0x0068, 0x6560);
/// ThreeDPointCoordinates (0068,6590) FD
pub const THREE_D_POINT_COORDINATES: Tag = Tag(0x0068, 0x6590);
/// TwoDLineCoordinatesSequence (0068,65A0) SQ
pub const TWO_D_LINE_COORDINATES_SEQUENCE: Tag = Tag(0x0068, 0x65A0);
/// TwoDLineCoordinates (0068,65B0) FD
pub const TWO_D_LINE_COORDINATES: Tag = Tag(0x0068, 0x65B0);
/// ThreeDLineCoordinates (0068,65D0) FD
pub const THREE_D_LINE_COORDINATES: Tag = Tag(0x0068, 0x65D0);
/// TwoDPlaneCoordinatesSequence (0068,65E0) SQ
pub const TWO_D_PLANE_COORDINATES_SEQUENCE: Tag = Tag(0x0068, 0x65E0);
/// TwoDPlaneIntersection (0068,65F0) FD
pub const TWO_D_PLANE_INTERSECTION: Tag = Tag(0x0068, 0x65F0);
/// ThreeDPlaneOrigin (0068,6610) FD
pub const THREE_D_PLANE_ORIGIN: Tag = Tag(0x0068, 0x6610);
/// ThreeDPlaneNormal (0068,6620) FD
pub const THREE_D_PLANE_NORMAL: Tag = Tag(0x0068, 0x6620);
/// GraphicAnnotationSequence (0070,0001) SQ
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// GraphicLayer (0070,0002) CS
pub const GRAPHIC_LAYER: Tag = Tag(0x0070, 0x0002);
/// BoundingBoxAnnotationUnits (0070,0003) CS
pub const BOUNDING_BOX_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0003);
/// AnchorPointAnnotationUnits (0070,0004) CS
pub const ANCHOR_POINT_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0004);
/// GraphicAnnotationUnits (0070,0005) CS
pub const GRAPHIC_ANNOTATION_UNITS: Tag = Tag(0x0070, 0x0005);
/// UnformattedTextValue (0070,0006) ST
pub const UNFORMATTED_TEXT_VALUE: Tag = Tag(0x0070, 0x0006);
/// TextObjectSequence (0070,0008) SQ
pub const TEXT_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0008);
/// GraphicObjectSequence (0070,0009) SQ
pub const GRAPHIC_OBJECT_SEQUENCE: Tag = Tag(0x0070, 0x0009);
/// BoundingBoxTopLeftHandCorner (0070,0010) FL
pub const BOUNDING_BOX_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0010);
/// BoundingBoxBottomRightHandCorner (0070,0011) FL
pub const BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0011);
/// BoundingBoxTextHorizontalJustification (0070,0012) CS
pub const BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION: Tag = Tag(0x0070, 0x0012);
/// AnchorPoint (0070,0014) FL
pub const ANCHOR_POINT: Tag = Tag(0x0070, 0x0014);
/// AnchorPointVisibility (0070,0015) CS
pub const ANCHOR_POINT_VISIBILITY: Tag = Tag(0x0070, 0x0015);
/// GraphicDimensions (0070,0020) US
pub const GRAPHIC_DIMENSIONS: Tag = Tag(0x0070, 0x0020);
/// NumberOfGraphicPoints (0070,0021) US
pub const NUMBER_OF_GRAPHIC_POINTS: Tag = Tag(0x0070, 0x0021);
/// GraphicData (0070,0022) FL
pub const GRAPHIC_DATA: Tag = Tag(0x0070, 0x0022);
/// GraphicType (0070,0023) CS
pub const GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0023);
/// GraphicFilled (0070,0024) CS
pub const GRAPHIC_FILLED: Tag = Tag(0x0070, 0x0024);
/// ImageRotationRetired (0070,0040) IS (retired)
pub const IMAGE_ROTATION_RETIRED: Tag = Tag(0x0070, 0x0040);
/// ImageHorizontalFlip (0070,0041) CS
pub const IMAGE_HORIZONTAL_FLIP: Tag = Tag(0x0070, 0x0041);
/// ImageRotation (0070,0042) US
pub const IMAGE_ROTATION: Tag = Tag(0x0070, 0x0042);
/// DisplayedAreaTopLeftHandCornerTrial (0070,0050) US (retired)
pub const DISPLAYED_AREA_TOP_LEFT_HAND_CORNER_TRIAL: Tag = Tag(0x0070, 0x0050);
/// DisplayedAreaBottomRightHandCornerTrial (0070,0051) US (retired)
pub const DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER_TRIAL: Tag = Tag(0x0070, 0x0051);
/// DisplayedAreaTopLeftHandCorner (0070,0052) SL
pub const DISPLAYED_AREA_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x0052);
/// DisplayedAreaBottomRightHandCorner (0070,0053) SL
pub const DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER: Tag = Tag(0x0070, 0x0053);
/// DisplayedAreaSelectionSequence (0070,005A) SQ
pub const DISPLAYED_AREA_SELECTION_SEQUENCE: Tag = Tag(0x0070, 0x005A);
/// GraphicLayerSequence (0070,0060) SQ
pub const GRAPHIC_LAYER_SEQUENCE: Tag = Tag(0x0070, 0x0060);
/// GraphicLayerOrder (0070,0062) IS
pub const GRAPHIC_LAYER_ORDER: Tag = Tag(0x0070, 0x0062);
/// GraphicLayerRecommendedDisplayGrayscaleValue (0070,0066) US
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_GRAYSCALE_VALUE: Tag = Tag(0x0070, 0x0066);
/// GraphicLayerRecommendedDisplayRGBValue (0070,0067) US (retired)
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_RGB_VALUE: Tag = Tag(0x0070, 0x0067);
/// GraphicLayerDescription (0070,0068) LO
pub const GRAPHIC_LAYER_DESCRIPTION: Tag = Tag(0x0070, 0x0068);
/// ContentLabel (0070,0080) CS
pub const CONTENT_LABEL: Tag = Tag(0x0070, 0x0080);
/// ContentDescription (0070,0081) LO
pub const CONTENT_DESCRIPTION: Tag = Tag(0x0070, 0x0081);
/// PresentationCreationDate (0070,0082) DA
pub const PRESENTATION_CREATION_DATE: Tag = Tag(0x0070, 0x0082);
/// PresentationCreationTime (0070,0083) TM
pub const PRESENTATION_CREATION_TIME: Tag = Tag(0x0070, 0x0083);
/// ContentCreatorName (0070,0084) PN
pub const CONTENT_CREATOR_NAME: Tag = Tag(0x0070, 0x0084);
/// ContentCreatorIdentificationCodeSequence (0070,0086) SQ
pub const CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0086);
/// AlternateContentDescriptionSequence (0070,0087) SQ
pub const ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE: Tag = Tag(0x0070, 0x0087);
/// PresentationSizeMode (0070,0100) CS
pub const PRESENTATION_SIZE_MODE: Tag = Tag(0x0070, 0x0100);
/// PresentationPixelSpacing (0070,0101) DS
pub const PRESENTATION_PIXEL_SPACING: Tag = Tag(0x0070, 0x0101);
/// PresentationPixelAspectRatio (0070,0102) IS
pub const PRESENTATION_PIXEL_ASPECT_RATIO: Tag = Tag(0x0070, 0x0102);
/// PresentationPixelMagnificationRatio (0070,0103) FL
pub const PRESENTATION_PIXEL_MAGNIFICATION_RATIO: Tag = Tag(0x0070, 0x0103);
/// GraphicGroupLabel (0070,0207) LO
pub const GRAPHIC_GROUP_LABEL: Tag = Tag(0x0070, 0x0207);
/// GraphicGroupDescription (0070,0208) ST
pub const GRAPHIC_GROUP_DESCRIPTION: Tag = Tag(0x0070, 0x0208);
/// CompoundGraphicSequence (0070,0209) SQ
pub const COMPOUND_GRAPHIC_SEQUENCE: Tag = Tag(0x0070, 0x0209);
/// CompoundGraphicInstanceID (0070,0226) UL
pub const COMPOUND_GRAPHIC_INSTANCE_ID: Tag = Tag(0x0070, 0x0226);
/// FontName (0070,0227) LO
pub const FONT_NAME: Tag = Tag(0x0070, 0x0227);
/// FontNameType (0070,0228) CS
pub const FONT_NAME_TYPE: Tag = Tag(0x0070, 0x0228);
/// CSSFontName (0070,0229) LO
pub const CSS_FONT_NAME: Tag = Tag(0x0070, 0x0229);
/// RotationAngle (0070,0230) FD
pub const ROTATION_ANGLE: Tag = Tag(0x0070, 0x0230);
/// TextStyleSequence (0070,0231) SQ
pub const TEXT_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0231);
/// LineStyleSequence (0070,0232) SQ
pub const LINE_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0232);
/// FillStyleSequence (0070,0233) SQ
pub const FILL_STYLE_SEQUENCE: Tag = Tag(0x0070, 0x0233);
/// GraphicGroupSequence (0070,0234) SQ
pub const GRAPHIC_GROUP_SEQUENCE: Tag = Tag(0x0070, 0x0234);
/// TextColorCIELabValue (0070,0241) US
pub const TEXT_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0241);
/// HorizontalAlignment (0070,0242) CS
pub const HORIZONTAL_ALIGNMENT: Tag = Tag(0x0070, 0x0242);
/// VerticalAlignment (0070,0243) CS
pub const VERTICAL_ALIGNMENT: Tag = Tag(0x0070, 0x0243);
/// ShadowStyle (0070,0244) CS
pub const SHADOW_STYLE: Tag = Tag(0x0070, 0x0244);
/// ShadowOffsetX (0070,0245) FL
pub const SHADOW_OFFSET_X: Tag = Tag(0x0070, 0x0245);
/// ShadowOffsetY (0070,0246) FL
pub const SHADOW_OFFSET_Y: Tag = Tag(0x0070, 0x0246);
/// ShadowColorCIELabValue (0070,0247) US
pub const SHADOW_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0247);
/// Underlined (0070,0248) CS
pub const UNDERLINED: Tag = Tag(0x0070, 0x0248);
/// Bold (0070,0249) CS
pub const BOLD: Tag = Tag(0x0070, 0x0249);
/// Italic (0070,0250) CS
pub const ITALIC: Tag = Tag(0x0070, 0x0250);
/// PatternOnColorCIELabValue (0070,0251) US
pub const PATTERN_ON_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0251);
/// PatternOffColorCIELabValue (0070,0252) US
pub const PATTERN_OFF_COLOR_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0252);
/// LineThickness (0070,0253) FL
pub const LINE_THICKNESS: Tag = Tag(0x0070, 0x0253);
/// LineDashingStyle (0070,0254) CS
pub const LINE_DASHING_STYLE: Tag = Tag(0x0070, 0x0254);
/// LinePattern (0070,0255) UL
pub const LINE_PATTERN: Tag = Tag(0x0070, 0x0255);
/// FillPattern (0070,0256) OB
pub const FILL_PATTERN: Tag = Tag(0x0070, 0x0256);
/// FillMode (0070,0257) CS
pub const FILL_MODE: Tag = Tag(0x0070, 0x0257);
/// ShadowOpacity (0070,0258) FL
pub const SHADOW_OPACITY: Tag = Tag(0x0070, 0x0258);
/// GapLength (0070,0261) FL
pub const GAP_LENGTH: Tag = Tag(0x0070, 0x0261);
/// DiameterOfVisibility (0070,0262) FL
pub const DIAMETER_OF_VISIBILITY: Tag = Tag(0x0070, 0x0262);
/// RotationPoint (0070,0273) FL
pub const ROTATION_POINT: Tag = Tag(0x0070, 0x0273);
/// TickAlignment (0070,0274) CS
pub const TICK_ALIGNMENT: Tag = Tag(0x0070, 0x0274);
/// ShowTickLabel (0070,0278) CS
pub const SHOW_TICK_LABEL: Tag = Tag(0x0070, 0x0278);
/// TickLabelAlignment (0070,0279) CS
pub const TICK_LABEL_ALIGNMENT: Tag = Tag(0x0070, 0x0279);
/// CompoundGraphicUnits (0070,0282) CS
pub const COMPOUND_GRAPHIC_UNITS: Tag = Tag(0x0070, 0x0282);
/// PatternOnOpacity (0070,0284) FL
pub const PATTERN_ON_OPACITY: Tag = Tag(0x0070, 0x0284);
/// PatternOffOpacity (0070,0285) FL
pub const PATTERN_OFF_OPACITY: Tag = Tag(0x0070, 0x0285);
/// MajorTicksSequence (0070,0287) SQ
pub const MAJOR_TICKS_SEQUENCE: Tag = Tag(0x0070, 0x0287);
/// TickPosition (0070,0288) FL
pub const TICK_POSITION: Tag = Tag(0x0070, 0x0288);
/// TickLabel (0070,0289) SH
pub const TICK_LABEL: Tag = Tag(0x0070, 0x0289);
/// CompoundGraphicType (0070,0294) CS
pub const COMPOUND_GRAPHIC_TYPE: Tag = Tag(0x0070, 0x0294);
/// GraphicGroupID (0070,0295) UL
pub const GRAPHIC_GROUP_ID: Tag = Tag(0x0070, 0x0295);
/// ShapeType (0070,0306) CS
pub const SHAPE_TYPE: Tag = Tag(0x0070, 0x0306);
/// RegistrationSequence (0070,0308) SQ
pub const REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0308);
/// MatrixRegistrationSequence (0070,0309) SQ
pub const MATRIX_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0309);
/// MatrixSequence (0070,030A) SQ
pub const MATRIX_SEQUENCE: Tag = Tag(0x0070, 0x030A);
/// FrameOfReferenceToDisplayedCoordinateSystemTransformationMatrix (0070,030B) FD
pub const FRAME_OF_REFERENCE_TO_DISPLAYED_COORDINATE_SYSTEM_TRANSFORMATION_MATRIX: Tag = Tag(0x0070, 0x030B);
/// FrameOfReferenceTransformationMatrixType (0070,030C) CS
pub const FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX_TYPE: Tag = Tag(0x0070, 0x030C);
/// RegistrationTypeCodeSequence (0070,030D) SQ
pub const REGISTRATION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0070, 0x030D);
/// FiducialDescription (0070,030F) ST
pub const FIDUCIAL_DESCRIPTION: Tag = Tag(0x0070, 0x030F);
/// FiducialIdentifier (0070,0310) SH
pub const FIDUCIAL_IDENTIFIER: Tag = Tag(0x0070, 0x0310);
/// FiducialIdentifierCodeSequence (0070,0311) SQ
pub const FIDUCIAL_IDENTIFIER_CODE_SEQUENCE: Tag = Tag(0x0070, 0x0311);
/// ContourUncertaintyRadius (0070,0312) FD
pub const CONTOUR_UNCERTAINTY_RADIUS: Tag = Tag(0x0070, 0x0312);
/// UsedFiducialsSequence (0070,0314) SQ
pub const USED_FIDUCIALS_SEQUENCE: Tag = Tag(0x0070, 0x0314);
/// GraphicCoordinatesDataSequence (0070,0318) SQ
pub const GRAPHIC_COORDINATES_DATA_SEQUENCE: Tag = Tag(0x0070, 0x0318);
/// FiducialUID (0070,031A) UI
pub const FIDUCIAL_UID: Tag = Tag(0x0070, 0x031A);
/// ReferencedFiducialUID (0070,031B) UI
pub const REFERENCED_FIDUCIAL_UID: Tag = Tag(0x0070, 0x031B);
/// FiducialSetSequence (0070,031C) SQ
pub const FIDUCIAL_SET_SEQUENCE: Tag = Tag(0x0070, 0x031C);
/// FiducialSequence (0070,031E) SQ
pub const FIDUCIAL_SEQUENCE: Tag = Tag(0x0070, 0x031E);
/// GraphicLayerRecommendedDisplayCIELabValue (0070,0401) US
pub const GRAPHIC_LAYER_RECOMMENDED_DISPLAY_CIE_LAB_VALUE: Tag = Tag(0x0070, 0x0401);
/// BlendingSequence (0070,0402) SQ
pub const BLENDING_SEQUENCE: Tag = Tag(0x0070, 0x0402);
/// RelativeOpacity (0070,0403) FL
pub const RELATIVE_OPACITY: Tag = Tag(0x0070, 0x0403);
/// ReferencedSpatialRegistrationSequence (0070,0404) SQ
pub const REFERENCED_SPATIAL_REGISTRATION_SEQUENCE: Tag = Tag(0x0070, 0x0404);
/// BlendingPosition (0070,0405) CS
pub const BLENDING_POSITION: Tag = Tag(0x0070, 0x0405);
/// PresentationDisplayCollectionUID (0070,1101) UI
pub const PRESENTATION_DISPLAY_COLLECTION_UID: Tag = Tag(0x0070, 0x1101);
/// PresentationSequenceCollectionUID (0070,1102) UI
pub const PRESENTATION_SEQUENCE_COLLECTION_UID: Tag = Tag(0x0070, 0x1102);
/// PresentationSequencePositionIndex (0070,1103) US
pub const PRESENTATION_SEQUENCE_POSITION_INDEX: Tag = Tag(0x0070, 0x1103);
/// RenderedImageReferenceSequence (0070,1104) SQ
pub const RENDERED_IMAGE_REFERENCE_SEQUENCE: Tag = Tag(0x0070, 0x1104);
/// VolumetricPresentationStateInputSequence (0070,1201) SQ
pub const VOLUMETRIC_PRESENTATION_STATE_INPUT_SEQUENCE: Tag = Tag(0x0070, 0x1201);
/// PresentationInputType (0070,1202) CS
pub const PRESENTATION_INPUT_TYPE: Tag = Tag(0x0070, 0x1202);
/// InputSequencePositionIndex (0070,1203) US
pub const INPUT_SEQUENCE_POSITION_INDEX: Tag = Tag(0x0070, 0x1203);
/// Crop (0070,1204) CS
pub const CROP: Tag = Tag(0x0070, 0x1204);
/// CroppingSpecificationIndex (0070,1205) US
pub const CROPPING_SPECIFICATION_INDEX: Tag = Tag(0x0070, 0x1205);
/// CompositingMethod (0070,1206) CS (retired)
pub const COMPOSITING_METHOD: Tag = Tag(0x0070, 0x1206);
/// VolumetricPresentationInputNumber (0070,1207) US
pub const VOLUMETRIC_PRESENTATION_INPUT_NUMBER: Tag = Tag(0x0070, 0x1207);
/// ImageVolumeGeometry (0070,1208) CS
pub const IMAGE_VOLUME_GEOMETRY: Tag = Tag(0x0070, 0x1208);
/// VolumetricPresentationInputSetUID (0070,1209) UI
pub const VOLUMETRIC_PRESENTATION_INPUT_SET_UID: Tag = Tag(0x0070, 0x1209);
/// VolumetricPresentationInputSetSequence (0070,120A) SQ
pub const VOLUMETRIC_PRESENTATION_INPUT_SET_SEQUENCE: Tag = Tag(0x0070, 0x120A);
/// GlobalCrop (0070,120B) CS
pub const GLOBAL_CROP: Tag = Tag(0x0070, 0x120B);
/// GlobalCroppingSpecificationIndex (0070,120C) US
pub const GLOBAL_CROPPING_SPECIFICATION_INDEX: Tag = Tag(0x0070, 0x120C);
/// RenderingMethod (0070,120D) CS
pub const RENDERING_METHOD: Tag = Tag(0x0070, 0x120D);
/// VolumeCroppingSequence (0070,1301) SQ
pub const VOLUME_CROPPING_SEQUENCE: Tag = Tag(0x0070, 0x1301);
/// VolumeCroppingMethod (0070,1302) CS
pub const VOLUME_CROPPING_METHOD: Tag = Tag(0x0070, 0x1302);
/// BoundingBoxCrop (0070,1303) FD
pub const BOUNDING_BOX_CROP: Tag = Tag(0x0070, 0x1303);
/// ObliqueCroppingPlaneSequence (0070,1304) SQ
pub const OBLIQUE_CROPPING_PLANE_SEQUENCE: Tag = Tag(0x0070, 0x1304);
/// Plane (0070,1305) FD
pub const PLANE: Tag = Tag(0x0070, 0x1305);
/// PlaneNormal (0070,1306) FD
pub const PLANE_NORMAL: Tag = Tag(0x0070, 0x1306);
/// CroppingSpecificationNumber (0070,1309) US
pub const CROPPING_SPECIFICATION_NUMBER: Tag = Tag(0x0070, 0x1309);
/// MultiPlanarReconstructionStyle (0070,1501) CS
pub const MULTI_PLANAR_RECONSTRUCTION_STYLE: Tag = Tag(0x0070, 0x1501);
/// MPRThicknessType (0070,1502) CS
pub const MPR_THICKNESS_TYPE: Tag = Tag(0x0070, 0x1502);
/// MPRSlabThickness (0070,1503) FD
pub const MPR_SLAB_THICKNESS: Tag = Tag(0x0070, 0x1503);
/// MPRTopLeftHandCorner (0070,1505) FD
pub const MPR_TOP_LEFT_HAND_CORNER: Tag = Tag(0x0070, 0x1505);
/// MPRViewWidthDirection (0070,1507) FD
pub const MPR_VIEW_WIDTH_DIRECTION: Tag = Tag(0x0070, 0x1507);
/// MPRViewWidth (0070,1508) FD
pub const MPR_VIEW_WIDTH: Tag = Tag(0x0070, 0x1508);
/// NumberOfVolumetricCurvePoints (0070,150C) UL
pub const NUMBER_OF_VOLUMETRIC_CURVE_POINTS: Tag = Tag(0x0070, 0x150C);
/// VolumetricCurvePoints (0070,150D) OD
pub const VOLUMETRIC_CURVE_POINTS: Tag = Tag(0x0070, 0x150D);
/// MPRViewHeightDirection (0070,1511) FD
pub const MPR_VIEW_HEIGHT_DIRECTION: Tag = Tag(0x0070, 0x1511);
/// MPRViewHeight (0070,1512) FD
pub const MPR_VIEW_HEIGHT: Tag = Tag(0x0070, 0x1512);
/// RenderProjection (0070,1602) CS
pub const RENDER_PROJECTION: Tag = Tag(0x0070, 0x1602);
/// ViewpointPosition (0070,1603) FD
pub const VIEWPOINT_POSITION: Tag = Tag(0x0070, 0x1603);
/// ViewpointLookAtPoint (0070,1604) FD
pub const VIEWPOINT_LOOK_AT_POINT: Tag = Tag(0x0070, 0x1604);
/// ViewpointUpDirection (0070,1605) FD
pub const VIEWPOINT_UP_DIRECTION: Tag = Tag(0x0070, 0x1605);
/// RenderFieldOfView (0070,1606) FD
pub const RENDER_FIELD_OF_VIEW: Tag = Tag(0x0070, 0x1606);
/// SamplingStepSize (0070,1607) FD
pub const SAMPLING_STEP_SIZE: Tag = Tag(0x0070, 0x1607);
/// HangingProtocolName (0072,0002) SH
pub const HANGING_PROTOCOL_NAME: Tag = Tag(0x0072, 0x0002);
/// HangingProtocolDescription (0072,0004) LO
pub const HANGING_PROTOCOL_DESCRIPTION: Tag = Tag(0x0072, 0x0004);
/// HangingProtocolLevel (0072,0006) CS
pub const HANGING_PROTOCOL_LEVEL: Tag = Tag(0x0072, 0x0006);
/// HangingProtocolCreator (0072,0008) LO
pub const HANGING_PROTOCOL_CREATOR: Tag = Tag(0x0072, 0x0008);
/// HangingProtocolCreationDateTime (0072,000A) DT
pub const HANGING_PROTOCOL_CREATION_DATE_TIME: Tag = Tag(0x0072, 0x000A);
/// HangingProtocolDefinitionSequence (0072,000C) SQ
pub const HANGING_PROTOCOL_DEFINITION_SEQUENCE: Tag = Tag(0x0072, 0x000C);
/// HangingProtocolUserIdentificationCodeSequence (0072,000E) SQ
pub const HANGING_PROTOCOL_USER_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x0072, 0x000E);
/// HangingProtocolUserGroupName (0072,0010) LO
pub const HANGING_PROTOCOL_USER_GROUP_NAME: Tag = Tag(0x0072, 0x0010);
/// SourceHangingProtocolSequence (0072,0012) SQ
pub const SOURCE_HANGING_PROTOCOL_SEQUENCE: Tag = Tag(0x0072, 0x0012);
/// NumberOfPriorsReferenced (0072,0014) US
pub const NUMBER_OF_PRIORS_REFERENCED: Tag = Tag(0x0072, 0x0014);
/// ImageSetsSequence (0072,0020) SQ
pub const IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0020);
/// ImageSetSelectorSequence (0072,0022) SQ
pub const IMAGE_SET_SELECTOR_SEQUENCE: Tag = Tag(0x0072, 0x0022);
/// ImageSetSelectorUsageFlag (0072,0024) CS
pub const IMAGE_SET_SELECTOR_USAGE_FLAG: Tag = Tag(0x0072, 0x0024);
/// SelectorAttribute (0072,0026) AT
pub const SELECTOR_ATTRIBUTE: Tag = Tag(0x0072, 0x0026);
/// SelectorValueNumber (0072,0028) US
pub const SELECTOR_VALUE_NUMBER: Tag = Tag(0x0072, 0x0028);
/// TimeBasedImageSetsSequence (0072,0030) SQ
pub const TIME_BASED_IMAGE_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0030);
/// ImageSetNumber (0072,0032) US
pub const IMAGE_SET_NUMBER: Tag = Tag(0x0072, 0x0032);
/// ImageSetSelectorCategory (0072,0034) CS
pub const IMAGE_SET_SELECTOR_CATEGORY: Tag = Tag(0x0072, 0x0034);
/// RelativeTime (0072,0038) US
pub const RELATIVE_TIME: Tag = Tag(0x0072, 0x0038);
/// RelativeTimeUnits (0072,003A) CS
pub const RELATIVE_TIME_UNITS: Tag = Tag(0x0072, 0x003A);
/// AbstractPriorValue (0072,003C) SS
pub const ABSTRACT_PRIOR_VALUE: Tag = Tag(0x0072, 0x003C);
/// AbstractPriorCodeSequence (0072,003E) SQ
pub const ABSTRACT_PRIOR_CODE_SEQUENCE: Tag = Tag(0x0072, 0x003E);
/// ImageSetLabel (0072,0040) LO
pub const IMAGE_SET_LABEL: Tag = Tag(0x0072, 0x0040);
/// SelectorAttributeVR (0072,0050) CS
pub const SELECTOR_ATTRIBUTE_VR: Tag = Tag(0x0072, 0x0050);
/// SelectorSequencePointer (0072,0052) AT
pub const SELECTOR_SEQUENCE_POINTER: Tag = Tag(0x0072, 0x0052);
/// SelectorSequencePointerPrivateCreator (0072,0054) LO
pub const SELECTOR_SEQUENCE_POINTER_PRIVATE_CREATOR: Tag = Tag(0x0072, 0x0054);
/// SelectorAttributePrivateCreator (0072,0056) LO
pub const SELECTOR_ATTRIBUTE_PRIVATE_CREATOR: Tag = Tag(0x0072, 0x0056);
/// SelectorAEValue (0072,005E) AE
pub const SELECTOR_AE_VALUE: Tag = Tag(0x0072, 0x005E);
/// SelectorASValue (0072,005F) AS
pub const SELECTOR_AS_VALUE: Tag = Tag(0x0072, 0x005F);
/// SelectorATValue (0072,0060) AT
pub const SELECTOR_AT_VALUE: Tag = Tag(0x0072, 0x0060);
/// SelectorDAValue (0072,0061) DA
pub const SELECTOR_DA_VALUE: Tag = Tag(0x0072, 0x0061);
/// SelectorCSValue (0072,0062) CS
pub const SELECTOR_CS_VALUE: Tag = Tag(0x0072, 0x0062);
/// SelectorDTValue (0072,0063) DT
pub const SELECTOR_DT_VALUE: Tag = Tag(0x0072, 0x0063);
/// SelectorISValue (0072,0064) IS
pub const SELECTOR_IS_VALUE: Tag = Tag(0x0072, 0x0064);
/// SelectorOBValue (0072,0065) OB
pub const SELECTOR_OB_VALUE: Tag = Tag(0x0072, 0x0065);
/// SelectorLOValue (0072,0066) LO
pub const SELECTOR_LO_VALUE: Tag = Tag(0x0072, 0x0066);
/// SelectorOFValue (0072,0067) OF
pub const SELECTOR_OF_VALUE: Tag = Tag(0x0072, 0x0067);
/// SelectorLTValue (0072,0068) LT
pub const SELECTOR_LT_VALUE: Tag = Tag(0x0072, 0x0068);
/// SelectorOWValue (0072,0069) OW
pub const SELECTOR_OW_VALUE: Tag = Tag(0x0072, 0x0069);
/// SelectorPNValue (0072,006A) PN
pub const SELECTOR_PN_VALUE: Tag = Tag(0x0072, 0x006A);
/// SelectorTMValue (0072,006B) TM
pub const SELECTOR_TM_VALUE: Tag = Tag(0x0072, 0x006B);
/// SelectorSHValue (0072,006C) SH
pub const SELECTOR_SH_VALUE: Tag = Tag(0x0072, 0x006C);
/// SelectorUNValue (0072,006D) UN
pub const SELECTOR_UN_VALUE: Tag = Tag(0x0072, 0x006D);
/// SelectorSTValue (0072,006E) ST
pub const SELECTOR_ST_VALUE: Tag = Tag(0x0072, 0x006E);
/// SelectorUCValue (0072,006F) UC
pub const SELECTOR_UC_VALUE: Tag = Tag(0x0072, 0x006F);
/// SelectorUTValue (0072,0070) UT
pub const SELECTOR_UT_VALUE: Tag = Tag(0x0072, 0x0070);
/// SelectorURValue (0072,0071) UR
pub const SELECTOR_UR_VALUE: Tag = Tag(0x0072, 0x0071);
/// SelectorDSValue (0072,0072) DS
pub const SELECTOR_DS_VALUE: Tag = Tag(0x0072, 0x0072);
/// SelectorODValue (0072,0073) OD
pub const SELECTOR_OD_VALUE: Tag = Tag(0x0072, 0x0073);
/// SelectorFDValue (0072,0074) FD
pub const SELECTOR_FD_VALUE: Tag = Tag(0x0072, 0x0074);
/// SelectorOLValue (0072,0075) OL
pub const SELECTOR_OL_VALUE: Tag = Tag(0x0072, 0x0075);
/// SelectorFLValue (0072,0076) FL
pub const SELECTOR_FL_VALUE: Tag = Tag(0x0072, 0x0076);
/// SelectorULValue (0072,0078) UL
pub const SELECTOR_UL_VALUE: Tag = Tag(0x0072, 0x0078);
/// SelectorUSValue (0072,007A) US
pub const SELECTOR_US_VALUE: Tag = Tag(0x0072, 0x007A);
/// SelectorSLValue (0072,007C) SL
pub const SELECTOR_SL_VALUE: Tag = Tag(0x0072, 0x007C);
/// SelectorSSValue (0072,007E) SS
pub const SELECTOR_SS_VALUE: Tag = Tag(0x0072, 0x007E);
/// SelectorUIValue (0072,007F) UI
pub const SELECTOR_UI_VALUE: Tag = Tag(0x0072, 0x007F);
/// SelectorCodeSequenceValue (0072,0080) SQ
pub const SELECTOR_CODE_SEQUENCE_VALUE: Tag = Tag(0x0072, 0x0080);
/// SelectorOVValue (0072,0081) OV
pub const SELECTOR_OV_VALUE: Tag = Tag(0x0072, 0x0081);
/// SelectorSVValue (0072,0082) SV
pub const SELECTOR_SV_VALUE: Tag = Tag(0x0072, 0x0082);
/// SelectorUVValue (0072,0083) UV
pub const SELECTOR_UV_VALUE: Tag = Tag(0x0072, 0x0083);
/// NumberOfScreens (0072,0100) US
pub const NUMBER_OF_SCREENS: Tag = Tag(0x0072, 0x0100);
/// NominalScreenDefinitionSequence (0072,0102) SQ
pub const NOMINAL_SCREEN_DEFINITION_SEQUENCE: Tag = Tag(0x0072, 0x0102);
/// NumberOfVerticalPixels (0072,0104) US
pub const NUMBER_OF_VERTICAL_PIXELS: Tag = Tag(0x0072, 0x0104);
/// NumberOfHorizontalPixels (0072,0106) US
pub const NUMBER_OF_HORIZONTAL_PIXELS: Tag = Tag(0x0072, 0x0106);
/// DisplayEnvironmentSpatialPosition (0072,0108) FD
pub const DISPLAY_ENVIRONMENT_SPATIAL_POSITION: Tag = Tag(0x0072, 0x0108);
/// ScreenMinimumGrayscaleBitDepth (0072,010A) US
pub const SCREEN_MINIMUM_GRAYSCALE_BIT_DEPTH: Tag = Tag(0x0072, 0x010A);
/// ScreenMinimumColorBitDepth (0072,010C) US
pub const SCREEN_MINIMUM_COLOR_BIT_DEPTH: Tag = Tag(0x0072, 0x010C);
/// ApplicationMaximumRepaintTime (0072,010E) US
pub const APPLICATION_MAXIMUM_REPAINT_TIME: Tag = Tag(0x0072, 0x010E);
/// DisplaySetsSequence (0072,0200) SQ
pub const DISPLAY_SETS_SEQUENCE: Tag = Tag(0x0072, 0x0200);
/// DisplaySetNumber (0072,0202) US
pub const DISPLAY_SET_NUMBER: Tag = Tag(0x0072, 0x0202);
/// DisplaySetLabel (0072,0203) LO
pub const DISPLAY_SET_LABEL: Tag = Tag(0x0072, 0x0203);
/// DisplaySetPresentationGroup (0072,0204) US
pub const DISPLAY_SET_PRESENTATION_GROUP: Tag = Tag(0x0072, 0x0204);
/// DisplaySetPresentationGroupDescription (0072,0206) LO
pub const DISPLAY_SET_PRESENTATION_GROUP_DESCRIPTION: Tag = Tag(0x0072, 0x0206);
/// PartialDataDisplayHandling (0072,0208) CS
pub const PARTIAL_DATA_DISPLAY_HANDLING: Tag = Tag(0x0072, 0x0208);
/// SynchronizedScrollingSequence (0072,0210) SQ
pub const SYNCHRONIZED_SCROLLING_SEQUENCE: Tag = Tag(0x0072, 0x0210);
/// DisplaySetScrollingGroup (0072,0212) US
pub const DISPLAY_SET_SCROLLING_GROUP: Tag = Tag(0x0072, 0x0212);
/// NavigationIndicatorSequence (0072,0214) SQ
pub const NAVIGATION_INDICATOR_SEQUENCE: Tag = Tag(0x0072, 0x0214);
/// NavigationDisplaySet (0072,0216) US
pub const NAVIGATION_DISPLAY_SET: Tag = Tag(0x0072, 0x0216);
/// ReferenceDisplaySets (0072,0218) US
pub const REFERENCE_DISPLAY_SETS: Tag = Tag(0x0072, 0x0218);
/// ImageBoxesSequence (0072,0300) SQ
pub const IMAGE_BOXES_SEQUENCE: Tag = Tag(0x0072, 0x0300);
/// ImageBoxNumber (0072,0302) US
pub const IMAGE_BOX_NUMBER: Tag = Tag(0x0072, 0x0302);
/// ImageBoxLayoutType (0072,0304) CS
pub const IMAGE_BOX_LAYOUT_TYPE: Tag = Tag(0x0072, 0x0304);
/// ImageBoxTileHorizontalDimension (0072,0306) US
pub const IMAGE_BOX_TILE_HORIZONTAL_DIMENSION: Tag = Tag(0x0072, 0x0306);
/// ImageBoxTileVerticalDimension (0072,0308) US
pub const IMAGE_BOX_TILE_VERTICAL_DIMENSION: Tag = Tag(0x0072, 0x0308);
/// ImageBoxScrollDirection (0072,0310) CS
pub const IMAGE_BOX_SCROLL_DIRECTION: Tag = Tag(0x0072, 0x0310);
/// ImageBoxSmallScrollType (0072,0312) CS
pub const IMAGE_BOX_SMALL_SCROLL_TYPE: Tag = Tag(0x0072, 0x0312);
/// ImageBoxSmallScrollAmount (0072,0314) US
pub const IMAGE_BOX_SMALL_SCROLL_AMOUNT: Tag = Tag(0x0072, 0x0314);
/// ImageBoxLargeScrollType (0072,0316) CS
pub const IMAGE_BOX_LARGE_SCROLL_TYPE: Tag = Tag(0x0072, 0x0316);
/// ImageBoxLargeScrollAmount (0072,0318) US
pub const IMAGE_BOX_LARGE_SCROLL_AMOUNT: Tag = Tag(0x0072, 0x0318);
/// ImageBoxOverlapPriority (0072,0320) US
pub const IMAGE_BOX_OVERLAP_PRIORITY: Tag = Tag(0x0072, 0x0320);
/// CineRelativeToRealTime (0072,0330) FD
pub const CINE_RELATIVE_TO_REAL_TIME: Tag = Tag(0x0072, 0x0330);
/// FilterOperationsSequence (0072,0400) SQ
pub const FILTER_OPERATIONS_SEQUENCE: Tag = Tag(0x0072, 0x0400);
/// FilterByCategory (0072,0402) CS
pub const FILTER_BY_CATEGORY: Tag = Tag(0x0072, 0x0402);
/// FilterByAttributePresence (0072,0404) CS
pub const FILTER_BY_ATTRIBUTE_PRESENCE: Tag = Tag(0x0072, 0x0404);
/// FilterByOperator (0072,0406) CS
pub const FILTER_BY_OPERATOR: Tag = Tag(0x0072, 0x0406);
/// StructuredDisplayBackgroundCIELabValue (0072,0420) US
pub const STRUCTURED_DISPLAY_BACKGROUND_CIE_LAB_VALUE: Tag = Tag(0x0072, 0x0420);
/// EmptyImageBoxCIELabValue (0072,0421) US
pub const EMPTY_IMAGE_BOX_CIE_LAB_VALUE: Tag = Tag(0x0072, 0x0421);
/// StructuredDisplayImageBoxSequence (0072,0422) SQ
pub const STRUCTURED_DISPLAY_IMAGE_BOX_SEQUENCE: Tag = Tag(0x0072, 0x0422);
/// StructuredDisplayTextBoxSequence (0072,0424) SQ
pub const STRUCTURED_DISPLAY_TEXT_BOX_SEQUENCE: Tag = Tag(0x0072, 0x0424);
/// ReferencedFirstFrameSequence (0072,0427) SQ
pub const REFERENCED_FIRST_FRAME_SEQUENCE: Tag = Tag(0x0072, 0x0427);
/// ImageBoxSynchronizationSequence (0072,0430) SQ
pub const IMAGE_BOX_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x0072, 0x0430);
/// SynchronizedImageBoxList (0072,0432) US
pub const SYNCHRONIZED_IMAGE_BOX_LIST: Tag = Tag(0x0072, 0x0432);
/// TypeOfSynchronization (0072,0434) CS
pub const TYPE_OF_SYNCHRONIZATION: Tag = Tag(0x0072, 0x0434);
/// BlendingOperationType (0072,0500) CS
pub const BLENDING_OPERATION_TYPE: Tag = Tag(0x0072, 0x0500);
/// ReformattingOperationType (0072,0510) CS
pub const REFORMATTING_OPERATION_TYPE: Tag = Tag(0x0072, 0x0510);
/// ReformattingThickness (0072,0512) FD
pub const REFORMATTING_THICKNESS: Tag = Tag(0x0072, 0x0512);
/// ReformattingInterval (0072,0514) FD
pub const REFORMATTING_INTERVAL: Tag = Tag(0x0072, 0x0514);
/// ReformattingOperationInitialViewDirection (0072,0516) CS
pub const REFORMATTING_OPERATION_INITIAL_VIEW_DIRECTION: Tag = Tag(0x0072, 0x0516);
/// ThreeDRenderingType (0072,0520) CS
pub const THREE_D_RENDERING_TYPE: Tag = Tag(0x0072, 0x0520);
/// SortingOperationsSequence (0072,0600) SQ
pub const SORTING_OPERATIONS_SEQUENCE: Tag = Tag(0x0072, 0x0600);
/// SortByCategory (0072,0602) CS
pub const SORT_BY_CATEGORY: Tag = Tag(0x0072, 0x0602);
/// SortingDirection (0072,0604) CS
pub const SORTING_DIRECTION: Tag = Tag(0x0072, 0x0604);
/// DisplaySetPatientOrientation (0072,0700) CS
pub const DISPLAY_SET_PATIENT_ORIENTATION: Tag = Tag(0x0072, 0x0700);
/// VOIType (0072,0702) CS
pub const VOI_TYPE: Tag = Tag(0x0072, 0x0702);
/// PseudoColorType (0072,0704) CS
pub const PSEUDO_COLOR_TYPE: Tag = Tag(0x0072, 0x0704);
/// PseudoColorPaletteInstanceReferenceSequence (0072,0705) SQ
pub const PSEUDO_COLOR_PALETTE_INSTANCE_REFERENCE_SEQUENCE: Tag = Tag(0x0072, 0x0705);
/// ShowGrayscaleInverted (0072,0706) CS
pub const SHOW_GRAYSCALE_INVERTED: Tag = Tag(0x0072, 0x0706);
/// ShowImageTrueSizeFlag (0072,0710) CS
pub const SHOW_IMAGE_TRUE_SIZE_FLAG: Tag = Tag(0x0072, 0x0710);
/// ShowGraphicAnnotationFlag (0072,0712) CS
pub const SHOW_GRAPHIC_ANNOTATION_FLAG: Tag = Tag(0x0072, 0x0712);
/// ShowPatientDemographicsFlag (0072,0714) CS
pub const SHOW_PATIENT_DEMOGRAPHICS_FLAG: Tag = Tag(0x0072, 0x0714);
/// ShowAcquisitionTechniquesFlag (0072,0716) CS
pub const SHOW_ACQUISITION_TECHNIQUES_FLAG: Tag = Tag(0x0072, 0x0716);
/// DisplaySetHorizontalJustification (0072,0717) CS
pub const DISPLAY_SET_HORIZONTAL_JUSTIFICATION: Tag = Tag(0x0072, 0x0717);
/// DisplaySetVerticalJustification (0072,0718) CS
pub const DISPLAY_SET_VERTICAL_JUSTIFICATION: Tag = Tag(0x0072, 0x0718);
/// ContinuationStartMeterset (0074,0120) FD
pub const CONTINUATION_START_METERSET: Tag = Tag(0x0074, 0x0120);
/// ContinuationEndMeterset (0074,0121) FD
pub const CONTINUATION_END_METERSET: Tag = Tag(0x0074, 0x0121);
/// ProcedureStepState (0074,1000) CS
pub const PROCEDURE_STEP_STATE: Tag = Tag(0x0074, 0x1000);
/// ProgressInformationSequence (0074,1002) SQ
pub const PROGRESS_INFORMATION_SEQUENCE: Tag = Tag(0x0074, 0x1002);
/// ProcedureStepProgress (0074,1004) DS
pub const PROCEDURE_STEP_PROGRESS: Tag = Tag(0x0074, 0x1004);
/// ProcedureStepProgressDescription (0074,1006) ST
pub const PROCEDURE_STEP_PROGRESS_DESCRIPTION: Tag = Tag(0x0074, 0x1006);
/// ProcedureStepProgressParametersSequence (0074,1007) SQ
pub const PROCEDURE_STEP_PROGRESS_PARAMETERS_SEQUENCE: Tag = Tag(0x0074, 0x1007);
/// ProcedureStepCommunicationsURISequence (0074,1008) SQ
pub const PROCEDURE_STEP_COMMUNICATIONS_URI_SEQUENCE: Tag = Tag(0x0074, 0x1008);
/// ContactURI (0074,100A) UR
pub const CONTACT_URI: Tag = Tag(0x0074, 0x100A);
/// ContactDisplayName (0074,100C) LO
pub const CONTACT_DISPLAY_NAME: Tag = Tag(0x0074, 0x100C);
/// ProcedureStepDiscontinuationReasonCodeSequence (0074,100E) SQ
pub const PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE: Tag = Tag(0x0074, 0x100E);
/// BeamTaskSequence (0074,1020) SQ
pub const BEAM_TASK_SEQUENCE: Tag = Tag(0x0074, 0x1020);
/// BeamTaskType (0074,1022) CS
pub const BEAM_TASK_TYPE: Tag = Tag(0x0074, 0x1022);
/// BeamOrderIndexTrial (0074,1024) IS (retired)
pub const BEAM_ORDER_INDEX_TRIAL: Tag = Tag(0x0074, 0x1024);
/// AutosequenceFlag (0074,1025) CS
pub const AUTOSEQUENCE_FLAG: Tag = Tag(0x0074, 0x1025);
/// TableTopVerticalAdjustedPosition (0074,1026) FD
pub const TABLE_TOP_VERTICAL_ADJUSTED_POSITION: Tag = Tag(0x0074, 0x1026);
/// TableTopLongitudinalAdjustedPosition (0074,1027) FD
pub const TABLE_TOP_LONGITUDINAL_ADJUSTED_POSITION: Tag = Tag(0x0074, 0x1027);
/// TableTopLateralAdjustedPosition (0074,1028) FD
pub const TABLE_TOP_LATERAL_ADJUSTED_POSITION: Tag = Tag(0x0074, 0x1028);
/// PatientSupportAdjustedAngle (0074,102A) FD
pub const PATIENT_SUPPORT_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102A);
/// TableTopEccentricAdjustedAngle (0074,102B) FD
pub const TABLE_TOP_ECCENTRIC_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102B);
/// TableTopPitchAdjustedAngle (0074,102C) FD
pub const TABLE_TOP_PITCH_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102C);
/// TableTopRollAdjustedAngle (0074,102D) FD
pub const TABLE_TOP_ROLL_ADJUSTED_ANGLE: Tag = Tag(0x0074, 0x102D);
/// DeliveryVerificationImageSequence (0074,1030) SQ
pub const DELIVERY_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x0074, 0x1030);
/// VerificationImageTiming (0074,1032) CS
pub const VERIFICATION_IMAGE_TIMING: Tag = Tag(0x0074, 0x1032);
/// DoubleExposureFlag (0074,1034) CS
pub const DOUBLE_EXPOSURE_FLAG: Tag = Tag(0x0074, 0x1034);
/// DoubleExposureOrdering (0074,1036) CS
pub const DOUBLE_EXPOSURE_ORDERING: Tag = Tag(0x0074, 0x1036);
/// DoubleExposureMetersetTrial (0074,1038) DS (retired)
pub const DOUBLE_EXPOSURE_METERSET_TRIAL: Tag = Tag(0x0074, 0x1038);
/// DoubleExposureFieldDeltaTrial (0074,103A) DS (retired)
pub const DOUBLE_EXPOSURE_FIELD_DELTA_TRIAL: Tag = Tag(0x0074, 0x103A);
/// RelatedReferenceRTImageSequence (0074,1040) SQ
pub const RELATED_REFERENCE_RT_IMAGE_SEQUENCE: Tag = Tag(0x0074, 0x1040);
/// GeneralMachineVerificationSequence (0074,1042) SQ
pub const GENERAL_MACHINE_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x1042);
/// ConventionalMachineVerificationSequence (0074,1044) SQ
pub const CONVENTIONAL_MACHINE_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x1044);
/// IonMachineVerificationSequence (0074,1046) SQ
pub const ION_MACHINE_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x1046);
/// FailedAttributesSequence (0074,1048) SQ
pub const FAILED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0074, 0x1048);
/// OverriddenAttributesSequence (0074,104A) SQ
pub const OVERRIDDEN_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0074, 0x104A);
/// ConventionalControlPointVerificationSequence (0074,104C) SQ
pub const CONVENTIONAL_CONTROL_POINT_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x104C);
/// IonControlPointVerificationSequence (0074,104E) SQ
pub const ION_CONTROL_POINT_VERIFICATION_SEQUENCE: Tag = Tag(0x0074, 0x104E);
/// AttributeOccurrenceSequence (0074,1050) SQ
pub const ATTRIBUTE_OCCURRENCE_SEQUENCE: Tag = Tag(0x0074, 0x1050);
/// AttributeOccurrencePointer (0074,1052) AT
pub const ATTRIBUTE_OCCURRENCE_POINTER: Tag = Tag(0x0074, 0x1052);
/// AttributeItemSelector (0074,1054) UL
pub const ATTRIBUTE_ITEM_SELECTOR: Tag = Tag(0x0074, 0x1054);
/// AttributeOccurrencePrivateCreator (0074,1056) LO
pub const ATTRIBUTE_OCCURRENCE_PRIVATE_CREATOR: Tag = Tag(0x0074, 0x1056);
/// SelectorSequencePointerItems (0074,1057) IS
pub const SELECTOR_SEQUENCE_POINTER_ITEMS: Tag = Tag(0x0074, 0x1057);
/// ScheduledProcedureStepPriority (0074,1200) CS
pub const SCHEDULED_PROCEDURE_STEP_PRIORITY: Tag = Tag(0x0074, 0x1200);
/// WorklistLabel (0074,1202) LO
pub const WORKLIST_LABEL: Tag = Tag(0x0074, 0x1202);
/// ProcedureStepLabel (0074,1204) LO
pub const PROCEDURE_STEP_LABEL: Tag = Tag(0x0074, 0x1204);
/// ScheduledProcessingParametersSequence (0074,1210) SQ
pub const SCHEDULED_PROCESSING_PARAMETERS_SEQUENCE: Tag = Tag(0x0074, 0x1210);
/// PerformedProcessingParametersSequence (0074,1212) SQ
pub const PERFORMED_PROCESSING_PARAMETERS_SEQUENCE: Tag = Tag(0x0074, 0x1212);
/// UnifiedProcedureStepPerformedProcedureSequence (0074,1216) SQ
pub const UNIFIED_PROCEDURE_STEP_PERFORMED_PROCEDURE_SEQUENCE: Tag = Tag(0x0074, 0x1216);
/// RelatedProcedureStepSequence (0074,1220) SQ (retired)
pub const RELATED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0074, 0x1220);
/// ProcedureStepRelationshipType (0074,1222) LO (retired)
pub const PROCEDURE_STEP_RELATIONSHIP_TYPE: Tag = Tag(0x0074, 0x1222);
/// ReplacedProcedureStepSequence (0074,1224) SQ
pub const REPLACED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0074, 0x1224);
/// DeletionLock (0074,1230) LO
pub const DELETION_LOCK: Tag = Tag(0x0074, 0x1230);
/// ReceivingAE (0074,1234) AE
pub const RECEIVING_AE: Tag = Tag(0x0074, 0x1234);
/// RequestingAE (0074,1236) AE
pub const REQUESTING_AE: Tag = Tag(0x0074, 0x1236);
/// ReasonForCancellation (0074,1238) LT
pub const REASON_FOR_CANCELLATION: Tag = Tag(0x0074, 0x1238);
/// SCPStatus (0074,1242) CS
pub const SCP_STATUS: Tag = Tag(0x0074, 0x1242);
/// SubscriptionListStatus (0074,1244) CS
pub const SUBSCRIPTION_LIST_STATUS: Tag = Tag(0x0074, 0x1244);
/// UnifiedProcedureStepListStatus (0074,1246) CS
pub const UNIFIED_PROCEDURE_STEP_LIST_STATUS: Tag = Tag(0x0074, 0x1246);
/// BeamOrderIndex (0074,1324) UL
pub const BEAM_ORDER_INDEX: Tag = Tag(0x0074, 0x1324);
/// DoubleExposureMeterset (0074,1338) FD
pub const DOUBLE_EXPOSURE_METERSET: Tag = Tag(0x0074, 0x1338);
/// DoubleExposureFieldDelta (0074,133A) FD
pub const DOUBLE_EXPOSURE_FIELD_DELTA: Tag = Tag(0x0074, 0x133A);
/// BrachyTaskSequence (0074,1401) SQ
pub const BRACHY_TASK_SEQUENCE: Tag = Tag(0x0074, 0x1401);
/// ContinuationStartTotalReferenceAirKerma (0074,1402) DS
pub const CONTINUATION_START_TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x0074, 0x1402);
/// ContinuationEndTotalReferenceAirKerma (0074,1403) DS
pub const CONTINUATION_END_TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x0074, 0x1403);
/// ContinuationPulseNumber (0074,1404) IS
pub const CONTINUATION_PULSE_NUMBER: Tag = Tag(0x0074, 0x1404);
/// ChannelDeliveryOrderSequence (0074,1405) SQ
pub const CHANNEL_DELIVERY_ORDER_SEQUENCE: Tag = Tag(0x0074, 0x1405);
/// ReferencedChannelNumber (0074,1406) IS
pub const REFERENCED_CHANNEL_NUMBER: Tag = Tag(0x0074, 0x1406);
/// StartCumulativeTimeWeight (0074,1407) DS
pub const START_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x0074, 0x1407);
/// EndCumulativeTimeWeight (0074,1408) DS
pub const END_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x0074, 0x1408);
/// OmittedChannelSequence (0074,1409) SQ
pub const OMITTED_CHANNEL_SEQUENCE: Tag = Tag(0x0074, 0x1409);
/// ReasonForChannelOmission (0074,140A) CS
pub const REASON_FOR_CHANNEL_OMISSION: Tag = Tag(0x0074, 0x140A);
/// ReasonForChannelOmissionDescription (0074,140B) LO
pub const REASON_FOR_CHANNEL_OMISSION_DESCRIPTION: Tag = Tag(0x0074, 0x140B);
/// ChannelDeliveryOrderIndex (0074,140C) IS
pub const CHANNEL_DELIVERY_ORDER_INDEX: Tag = Tag(0x0074, 0x140C);
/// ChannelDeliveryContinuationSequence (0074,140D) SQ
pub const CHANNEL_DELIVERY_CONTINUATION_SEQUENCE: Tag = Tag(0x0074, 0x140D);
/// OmittedApplicationSetupSequence (0074,140E) SQ
pub const OMITTED_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x0074, 0x140E);
/// ImplantAssemblyTemplateName (0076,0001) LO
pub const IMPLANT_ASSEMBLY_TEMPLATE_NAME: Tag = Tag(0x0076, 0x0001);
/// ImplantAssemblyTemplateIssuer (0076,0003) LO
pub const IMPLANT_ASSEMBLY_TEMPLATE_ISSUER: Tag = Tag(0x0076, 0x0003);
/// ImplantAssemblyTemplateVersion (0076,0006) LO
pub const IMPLANT_ASSEMBLY_TEMPLATE_VERSION: Tag = Tag(0x0076, 0x0006);
/// ReplacedImplantAssemblyTemplateSequence (0076,0008) SQ
pub const REPLACED_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE: Tag = Tag(0x0076, 0x0008);
/// ImplantAssemblyTemplateType (0076,000A) CS
pub const IMPLANT_ASSEMBLY_TEMPLATE_TYPE: Tag = Tag(0x0076, 0x000A);
/// OriginalImplantAssemblyTemplateSequence (0076,000C) SQ
pub const ORIGINAL_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE: Tag = Tag(0x0076, 0x000C);
/// DerivationImplantAssemblyTemplateSequence (0076,000E) SQ
pub const DERIVATION_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE: Tag = Tag(0x0076, 0x000E);
/// ImplantAssemblyTemplateTargetAnatomySequence (0076,0010) SQ
pub const IMPLANT_ASSEMBLY_TEMPLATE_TARGET_ANATOMY_SEQUENCE: Tag = Tag(0x0076, 0x0010);
/// ProcedureTypeCodeSequence (0076,0020) SQ
pub const PROCEDURE_TYPE_CODE_SEQUENCE: Tag = Tag(0x0076, 0x0020);
/// SurgicalTechnique (0076,0030) LO
pub const SURGICAL_TECHNIQUE: Tag = Tag(0x0076, 0x0030);
/// ComponentTypesSequence (0076,0032) SQ
pub const COMPONENT_TYPES_SEQUENCE: Tag = Tag(0x0076, 0x0032);
/// ComponentTypeCodeSequence (0076,0034) SQ
pub const COMPONENT_TYPE_CODE_SEQUENCE: Tag = Tag(0x0076, 0x0034);
/// ExclusiveComponentType (0076,0036) CS
pub const EXCLUSIVE_COMPONENT_TYPE: Tag = Tag(0x0076, 0x0036);
/// MandatoryComponentType (0076,0038) CS
pub const MANDATORY_COMPONENT_TYPE: Tag = Tag(0x0076, 0x0038);
/// ComponentSequence (0076,0040) SQ
pub const COMPONENT_SEQUENCE: Tag = Tag(0x0076, 0x0040);
/// ComponentID (0076,0055) US
pub const COMPONENT_ID: Tag = Tag(0x0076, 0x0055);
/// ComponentAssemblySequence (0076,0060) SQ
pub const COMPONENT_ASSEMBLY_SEQUENCE: Tag = Tag(0x0076, 0x0060);
/// Component1ReferencedID (0076,0070) US
pub const COMPONENT1_REFERENCED_ID: Tag = Tag(0x0076, 0x0070);
/// Component1ReferencedMatingFeatureSetID (0076,0080) US
pub const COMPONENT1_REFERENCED_MATING_FEATURE_SET_ID: Tag = Tag(0x0076, 0x0080);
/// Component1ReferencedMatingFeatureID (0076,0090) US
pub const COMPONENT1_REFERENCED_MATING_FEATURE_ID: Tag = Tag(0x0076, 0x0090);
/// Component2ReferencedID (0076,00A0) US
pub const COMPONENT2_REFERENCED_ID: Tag = Tag(0x0076, 0x00A0);
/// Component2ReferencedMatingFeatureSetID (0076,00B0) US
pub const COMPONENT2_REFERENCED_MATING_FEATURE_SET_ID: Tag = Tag(0x0076, 0x00B0);
/// Component2ReferencedMatingFeatureID (0076,00C0) US
pub const COMPONENT2_REFERENCED_MATING_FEATURE_ID: Tag = Tag(0x0076, 0x00C0);
/// ImplantTemplateGroupName (0078,0001) LO
pub const IMPLANT_TEMPLATE_GROUP_NAME: Tag = Tag(0x0078, 0x0001);
/// ImplantTemplateGroupDescription (0078,0010) ST
pub const IMPLANT_TEMPLATE_GROUP_DESCRIPTION: Tag = Tag(0x0078, 0x0010);
/// ImplantTemplateGroupIssuer (0078,0020) LO
pub const IMPLANT_TEMPLATE_GROUP_ISSUER: Tag = Tag(0x0078, 0x0020);
/// ImplantTemplateGroupVersion (0078,0024) LO
pub const IMPLANT_TEMPLATE_GROUP_VERSION: Tag = Tag(0x0078, 0x0024);
/// ReplacedImplantTemplateGroupSequence (0078,0026) SQ
pub const REPLACED_IMPLANT_TEMPLATE_GROUP_SEQUENCE: Tag = Tag(0x0078, 0x0026);
/// ImplantTemplateGroupTargetAnatomySequence (0078,0028) SQ
pub const IMPLANT_TEMPLATE_GROUP_TARGET_ANATOMY_SEQUENCE: Tag = Tag(0x0078, 0x0028);
/// ImplantTemplateGroupMembersSequence (0078,002A) SQ
pub const IMPLANT_TEMPLATE_GROUP_MEMBERS_SEQUENCE: Tag = Tag(0x0078, 0x002A);
/// ImplantTemplateGroupMemberID (0078,002E) US
pub const IMPLANT_TEMPLATE_GROUP_MEMBER_ID: Tag = Tag(0x0078, 0x002E);
/// ThreeDImplantTemplateGroupMemberMatchingPoint (0078,0050) FD
pub const THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT: Tag = Tag(0x0078, 0x0050);
/// ThreeDImplantTemplateGroupMemberMatchingAxes (0078,0060) FD
pub const THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES: Tag = Tag(0x0078, 0x0060);
/// ImplantTemplateGroupMemberMatching2DCoordinatesSequence (0078,0070) SQ
pub const IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING2_D_COORDINATES_SEQUENCE: Tag = Tag(0x0078, 0x0070);
/// TwoDImplantTemplateGroupMemberMatchingPoint (0078,0090) FD
pub const TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT: Tag = Tag(0x0078, 0x0090);
/// TwoDImplantTemplateGroupMemberMatchingAxes (0078,00A0) FD
pub const TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES: Tag = Tag(0x0078, 0x00A0);
/// ImplantTemplateGroupVariationDimensionSequence (0078,00B0) SQ
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_SEQUENCE: Tag = Tag(0x0078, 0x00B0);
/// ImplantTemplateGroupVariationDimensionName (0078,00B2) LO
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_NAME: Tag = Tag(0x0078, 0x00B2);
/// ImplantTemplateGroupVariationDimensionRankSequence (0078,00B4) SQ
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK_SEQUENCE: Tag = Tag(0x0078, 0x00B4);
/// ReferencedImplantTemplateGroupMemberID (0078,00B6) US
pub const REFERENCED_IMPLANT_TEMPLATE_GROUP_MEMBER_ID: Tag = Tag(0x0078, 0x00B6);
/// ImplantTemplateGroupVariationDimensionRank (0078,00B8) US
pub const IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK: Tag = Tag(0x0078, 0x00B8);
/// SurfaceScanAcquisitionTypeCodeSequence (0080,0001) SQ
pub const SURFACE_SCAN_ACQUISITION_TYPE_CODE_SEQUENCE: Tag = Tag(0x0080, 0x0001);
/// SurfaceScanModeCodeSequence (0080,0002) SQ
pub const SURFACE_SCAN_MODE_CODE_SEQUENCE: Tag = Tag(0x0080, 0x0002);
/// RegistrationMethodCodeSequence (0080,0003) SQ
pub const REGISTRATION_METHOD_CODE_SEQUENCE: Tag = Tag(0x0080, 0x0003);
/// ShotDurationTime (0080,0004) FD
pub const SHOT_DURATION_TIME: Tag = Tag(0x0080, 0x0004);
/// ShotOffsetTime (0080,0005) FD
pub const SHOT_OFFSET_TIME: Tag = Tag(0x0080, 0x0005);
/// SurfacePointPresentationValueData (0080,0006) US
pub const SURFACE_POINT_PRESENTATION_VALUE_DATA: Tag = Tag(0x0080, 0x0006);
/// SurfacePointColorCIELabValueData (0080,0007) US
pub const SURFACE_POINT_COLOR_CIE_LAB_VALUE_DATA: Tag = Tag(0x0080, 0x0007);
/// UVMappingSequence (0080,0008) SQ
pub const UV_MAPPING_SEQUENCE: Tag = Tag(0x0080, 0x0008);
/// TextureLabel (0080,0009) SH
pub const TEXTURE_LABEL: Tag = Tag(0x0080, 0x0009);
/// UValueData (0080,0010) OF
pub const U_VALUE_DATA: Tag = Tag(0x0080, 0x0010);
/// VValueData (0080,0011) OF
pub const V_VALUE_DATA: Tag = Tag(0x0080, 0x0011);
/// ReferencedTextureSequence (0080,0012) SQ
pub const REFERENCED_TEXTURE_SEQUENCE: Tag = Tag(0x0080, 0x0012);
/// ReferencedSurfaceDataSequence (0080,0013) SQ
pub const REFERENCED_SURFACE_DATA_SEQUENCE: Tag = Tag(0x0080, 0x0013);
/// AssessmentSummary (0082,0001) CS
pub const ASSESSMENT_SUMMARY: Tag = Tag(0x0082, 0x0001);
/// AssessmentSummaryDescription (0082,0003) UT
pub const ASSESSMENT_SUMMARY_DESCRIPTION: Tag = Tag(0x0082, 0x0003);
/// AssessedSOPInstanceSequence (0082,0004) SQ
pub const ASSESSED_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0082, 0x0004);
/// ReferencedComparisonSOPInstanceSequence (0082,0005) SQ
pub const REFERENCED_COMPARISON_SOP_INSTANCE_SEQUENCE: Tag = Tag(0x0082, 0x0005);
/// NumberOfAssessmentObservations (0082,0006) UL
pub const NUMBER_OF_ASSESSMENT_OBSERVATIONS: Tag = Tag(0x0082, 0x0006);
/// AssessmentObservationsSequence (0082,0007) SQ
pub const ASSESSMENT_OBSERVATIONS_SEQUENCE: Tag = Tag(0x0082, 0x0007);
/// ObservationSignificance (0082,0008) CS
pub const OBSERVATION_SIGNIFICANCE: Tag = Tag(0x0082, 0x0008);
/// ObservationDescription (0082,000A) UT
pub const OBSERVATION_DESCRIPTION: Tag = Tag(0x0082, 0x000A);
/// StructuredConstraintObservationSequence (0082,000C) SQ
pub const STRUCTURED_CONSTRAINT_OBSERVATION_SEQUENCE: Tag = Tag(0x0082, 0x000C);
/// StorageMediaFileSetID (0088,0130) SH
pub const STORAGE_MEDIA_FILE_SET_ID: Tag = Tag(0x0088, 0x0130);
/// StorageMediaFileSetUID (0088,0140) UI
pub const STORAGE_MEDIA_FILE_SET_UID: Tag = Tag(0x0088, 0x0140);
/// IconImageSequence (0088,0200) SQ
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// TopicTitle (0088,0904) LO (retired)
pub const TOPIC_TITLE: Tag = Tag(0x0088, 0x0904);
/// TopicSubject (0088,0906) ST (retired)
pub const TOPIC_SUBJECT: Tag = Tag(0x0088, 0x0906);
/// TopicAuthor (0088,0910) LO (retired)
pub const TOPIC_AUTHOR: Tag = Tag(0x0088, 0x0910);
/// TopicKeywords (0088,0912) LO (retired)
pub const TOPIC_KEYWORDS: Tag = Tag(0x0088, 0x0912);
/// SOPInstanceStatus (0100,0410) CS
pub const SOP_INSTANCE_STATUS: Tag = Tag(0x0100, 0x0410);
/// SOPAuthorizationDateTime (0100,0420) DT
pub const SOP_AUTHORIZATION_DATE_TIME: Tag = Tag(0x0100, 0x0420);
/// SOPAuthorizationComment (0100,0424) LT
pub const SOP_AUTHORIZATION_COMMENT: Tag = Tag(0x0100, 0x0424);
/// AuthorizationEquipmentCertificationNumber (0100,0426) LO
pub const AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER: Tag = Tag(0x0100, 0x0426);
/// MACIDNumber (0400,0005) US
pub const MACID_NUMBER: Tag = Tag(0x0400, 0x0005);
/// MACCalculationTransferSyntaxUID (0400,0010) UI
pub const MAC_CALCULATION_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0010);
/// MACAlgorithm (0400,0015) CS
pub const MAC_ALGORITHM: Tag = Tag(0x0400, 0x0015);
/// DataElementsSigned (0400,0020) AT
pub const DATA_ELEMENTS_SIGNED: Tag = Tag(0x0400, 0x0020);
/// DigitalSignatureUID (0400,0100) UI
pub const DIGITAL_SIGNATURE_UID: Tag = Tag(0x0400, 0x0100);
/// DigitalSignatureDateTime (0400,0105) DT
pub const DIGITAL_SIGNATURE_DATE_TIME: Tag = Tag(0x0400, 0x0105);
/// CertificateType (0400,0110) CS
pub const CERTIFICATE_TYPE: Tag = Tag(0x0400, 0x0110);
/// CertificateOfSigner (0400,0115) OB
pub const CERTIFICATE_OF_SIGNER: Tag = Tag(0x0400, 0x0115);
/// Signature (0400,0120) OB
pub const SIGNATURE: Tag = Tag(0x0400, 0x0120);
/// CertifiedTimestampType (0400,0305) CS
pub const CERTIFIED_TIMESTAMP_TYPE: Tag = Tag(0x0400, 0x0305);
/// CertifiedTimestamp (0400,0310) OB
pub const CERTIFIED_TIMESTAMP: Tag = Tag(0x0400, 0x0310);
/// DigitalSignaturePurpose (0400,0315) FL (retired)
pub const DIGITAL_SIGNATURE_PURPOSE: Tag = Tag(0x0400, 0x0315);
/// DigitalSignaturePurposeCodeSequence (0400,0401) SQ
pub const DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE: Tag = Tag(0x0400, 0x0401);
/// ReferencedDigitalSignatureSequence (0400,0402) SQ
pub const REFERENCED_DIGITAL_SIGNATURE_SEQUENCE: Tag = Tag(0x0400, 0x0402);
/// ReferencedSOPInstanceMACSequence (0400,0403) SQ
pub const REFERENCED_SOP_INSTANCE_MAC_SEQUENCE: Tag = Tag(0x0400, 0x0403);
/// MAC (0400,0404) OB
pub const MAC: Tag = Tag(0x0400, 0x0404);
/// EncryptedAttributesSequence (0400,0500) SQ
pub const ENCRYPTED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0500);
/// EncryptedContentTransferSyntaxUID (0400,0510) UI
pub const ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID: Tag = Tag(0x0400, 0x0510);
/// EncryptedContent (0400,0520) OB
pub const ENCRYPTED_CONTENT: Tag = Tag(0x0400, 0x0520);
/// ModifiedAttributesSequence (0400,0550) SQ
pub const MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0550);
/// NonconformingModifiedAttributesSequence (0400,0551) SQ
pub const NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0551);
/// NonconformingDataElementValue (0400,0552) OB
pub const NONCONFORMING_DATA_ELEMENT_VALUE: Tag = Tag(0x0400, 0x0552);
/// OriginalAttributesSequence (0400,0561) SQ
pub const ORIGINAL_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0400, 0x0561);
/// AttributeModificationDateTime (0400,0562) DT
pub const ATTRIBUTE_MODIFICATION_DATE_TIME: Tag = Tag(0x0400, 0x0562);
/// ModifyingSystem (0400,0563) LO
pub const MODIFYING_SYSTEM: Tag = Tag(0x0400, 0x0563);
/// SourceOfPreviousValues (0400,0564) LO
pub const SOURCE_OF_PREVIOUS_VALUES: Tag = Tag(0x0400, 0x0564);
/// ReasonForTheAttributeModification (0400,0565) CS
pub const REASON_FOR_THE_ATTRIBUTE_MODIFICATION: Tag = Tag(0x0400, 0x0565);
/// InstanceOriginStatus (0400,0600) CS
pub const INSTANCE_ORIGIN_STATUS: Tag = Tag(0x0400, 0x0600);
/// NumberOfCopies (2000,0010) IS
pub const NUMBER_OF_COPIES: Tag = Tag(0x2000, 0x0010);
/// PrinterConfigurationSequence (2000,001E) SQ
pub const PRINTER_CONFIGURATION_SEQUENCE: Tag = Tag(0x2000, 0x001E);
/// PrintPriority (2000,0020) CS
pub const PRINT_PRIORITY: Tag = Tag(0x2000, 0x0020);
/// MediumType (2000,0030) CS
pub const MEDIUM_TYPE: Tag = Tag(0x2000, 0x0030);
/// FilmDestination (2000,0040) CS
pub const FILM_DESTINATION: Tag = Tag(0x2000, 0x0040);
/// FilmSessionLabel (2000,0050) LO
pub const FILM_SESSION_LABEL: Tag = Tag(0x2000, 0x0050);
/// MemoryAllocation (2000,0060) IS
pub const MEMORY_ALLOCATION: Tag = Tag(0x2000, 0x0060);
/// MaximumMemoryAllocation (2000,0061) IS
pub const MAXIMUM_MEMORY_ALLOCATION: Tag = Tag(0x2000, 0x0061);
/// ColorImagePrintingFlag (2000,0062) CS (retired)
pub const COLOR_IMAGE_PRINTING_FLAG: Tag = Tag(0x2000, 0x0062);
/// CollationFlag (2000,0063) CS (retired)
pub const COLLATION_FLAG: Tag = Tag(0x2000, 0x0063);
/// AnnotationFlag (2000,0065) CS (retired)
pub const ANNOTATION_FLAG: Tag = Tag(0x2000, 0x0065);
/// ImageOverlayFlag (2000,0067) CS (retired)
pub const IMAGE_OVERLAY_FLAG: Tag = Tag(0x2000, 0x0067);
/// PresentationLUTFlag (2000,0069) CS (retired)
pub const PRESENTATION_LUT_FLAG: Tag = Tag(0x2000, 0x0069);
/// ImageBoxPresentationLUTFlag (2000,006A) CS (retired)
pub const IMAGE_BOX_PRESENTATION_LUT_FLAG: Tag = Tag(0x2000, 0x006A);
/// MemoryBitDepth (2000,00A0) US
pub const MEMORY_BIT_DEPTH: Tag = Tag(0x2000, 0x00A0);
/// PrintingBitDepth (2000,00A1) US
pub const PRINTING_BIT_DEPTH: Tag = Tag(0x2000, 0x00A1);
/// MediaInstalledSequence (2000,00A2) SQ
pub const MEDIA_INSTALLED_SEQUENCE: Tag = Tag(0x2000, 0x00A2);
/// OtherMediaAvailableSequence (2000,00A4) SQ
pub const OTHER_MEDIA_AVAILABLE_SEQUENCE: Tag = Tag(0x2000, 0x00A4);
/// SupportedImageDisplayFormatsSequence (2000,00A8) SQ
pub const SUPPORTED_IMAGE_DISPLAY_FORMATS_SEQUENCE: Tag = Tag(0x2000, 0x00A8);
/// ReferencedFilmBoxSequence (2000,0500) SQ
pub const REFERENCED_FILM_BOX_SEQUENCE: Tag = Tag(0x2000, 0x0500);
/// ReferencedStoredPrintSequence (2000,0510) SQ (retired)
pub const REFERENCED_STORED_PRINT_SEQUENCE: Tag = Tag(0x2000, 0x0510);
/// ImageDisplayFormat (2010,0010) ST
pub const IMAGE_DISPLAY_FORMAT: Tag = Tag(0x2010, 0x0010);
/// AnnotationDisplayFormatID (2010,0030) CS
pub const ANNOTATION_DISPLAY_FORMAT_ID: Tag = Tag(0x2010, 0x0030);
/// FilmOrientation (2010,0040) CS
pub const FILM_ORIENTATION: Tag = Tag(0x2010, 0x0040);
/// FilmSizeID (2010,0050) CS
pub const FILM_SIZE_ID: Tag = Tag(0x2010, 0x0050);
/// PrinterResolutionID (2010,0052) CS
pub const PRINTER_RESOLUTION_ID: Tag = Tag(0x2010, 0x0052);
/// DefaultPrinterResolutionID (2010,0054) CS
pub const DEFAULT_PRINTER_RESOLUTION_ID: Tag = Tag(0x2010, 0x0054);
/// MagnificationType (2010,0060) CS
pub const MAGNIFICATION_TYPE: Tag = Tag(0x2010, 0x0060);
/// SmoothingType (2010,0080) CS
pub const SMOOTHING_TYPE: Tag = Tag(0x2010, 0x0080);
/// DefaultMagnificationType (2010,00A6) CS
pub const DEFAULT_MAGNIFICATION_TYPE: Tag = Tag(0x2010, 0x00A6);
/// OtherMagnificationTypesAvailable (2010,00A7) CS
pub const OTHER_MAGNIFICATION_TYPES_AVAILABLE: Tag = Tag(0x2010, 0x00A7);
/// DefaultSmoothingType (2010,00A8) CS
pub const DEFAULT_SMOOTHING_TYPE: Tag = Tag(0x2010, 0x00A8);
/// OtherSmoothingTypesAvailable (2010,00A9) CS
pub const OTHER_SMOOTHING_TYPES_AVAILABLE: Tag = Tag(0x2010, 0x00A9);
/// BorderDensity (2010,0100) CS
pub const BORDER_DENSITY: Tag = Tag(0x2010, 0x0100);
/// EmptyImageDensity (2010,0110) CS
pub const EMPTY_IMAGE_DENSITY: Tag = Tag(0x2010, 0x0110);
/// MinDensity (2010,0120) US
pub const MIN_DENSITY: Tag = Tag(0x2010, 0x0120);
/// MaxDensity (2010,0130) US
pub const MAX_DENSITY: Tag = Tag(0x2010, 0x0130);
/// Trim (2010,0140) CS
pub const TRIM: Tag = Tag(0x2010, 0x0140);
/// ConfigurationInformation (2010,0150) ST
pub const CONFIGURATION_INFORMATION: Tag = Tag(0x2010, 0x0150);
/// ConfigurationInformationDescription (2010,0152) LT
pub const CONFIGURATION_INFORMATION_DESCRIPTION: Tag = Tag(0x2010, 0x0152);
/// MaximumCollatedFilms (2010,0154) IS
pub const MAXIMUM_COLLATED_FILMS: Tag = Tag(0x2010, 0x0154);
/// Illumination (2010,015E) US
pub const ILLUMINATION: Tag = Tag(0x2010, 0x015E);
/// ReflectedAmbientLight (2010,0160) US
pub const REFLECTED_AMBIENT_LIGHT: Tag = Tag(0x2010, 0x0160);
/// PrinterPixelSpacing (2010,0376) DS
pub const PRINTER_PIXEL_SPACING: Tag = Tag(0x2010, 0x0376);
/// ReferencedFilmSessionSequence (2010,0500) SQ
pub const REFERENCED_FILM_SESSION_SEQUENCE: Tag = Tag(0x2010, 0x0500);
/// ReferencedImageBoxSequence (2010,0510) SQ
pub const REFERENCED_IMAGE_BOX_SEQUENCE: Tag = Tag(0x2010, 0x0510);
/// ReferencedBasicAnnotationBoxSequence (2010,0520) SQ
pub const REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE: Tag = Tag(0x2010, 0x0520);
/// ImageBoxPosition (2020,0010) US
pub const IMAGE_BOX_POSITION: Tag = Tag(0x2020, 0x0010);
/// Polarity (2020,0020) CS
pub const POLARITY: Tag = Tag(0x2020, 0x0020);
/// RequestedImageSize (2020,0030) DS
pub const REQUESTED_IMAGE_SIZE: Tag = Tag(0x2020, 0x0030);
/// RequestedDecimateCropBehavior (2020,0040) CS
pub const REQUESTED_DECIMATE_CROP_BEHAVIOR: Tag = Tag(0x2020, 0x0040);
/// RequestedResolutionID (2020,0050) CS
pub const REQUESTED_RESOLUTION_ID: Tag = Tag(0x2020, 0x0050);
/// RequestedImageSizeFlag (2020,00A0) CS
pub const REQUESTED_IMAGE_SIZE_FLAG: Tag = Tag(0x2020, 0x00A0);
/// DecimateCropResult (2020,00A2) CS
pub const DECIMATE_CROP_RESULT: Tag = Tag(0x2020, 0x00A2);
/// BasicGrayscaleImageSequence (2020,0110) SQ
pub const BASIC_GRAYSCALE_IMAGE_SEQUENCE: Tag = Tag(0x2020, 0x0110);
/// BasicColorImageSequence (2020,0111) SQ
pub const BASIC_COLOR_IMAGE_SEQUENCE: Tag = Tag(0x2020, 0x0111);
/// ReferencedImageOverlayBoxSequence (2020,0130) SQ (retired)
pub const REFERENCED_IMAGE_OVERLAY_BOX_SEQUENCE: Tag = Tag(0x2020, 0x0130);
/// ReferencedVOILUTBoxSequence (2020,0140) SQ (retired)
pub const REFERENCED_VOILUT_BOX_SEQUENCE: Tag = Tag(0x2020, 0x0140);
/// AnnotationPosition (2030,0010) US
pub const ANNOTATION_POSITION: Tag = Tag(0x2030, 0x0010);
/// TextString (2030,0020) LO
pub const TEXT_STRING: Tag = Tag(0x2030, 0x0020);
/// ReferencedOverlayPlaneSequence (2040,0010) SQ (retired)
pub const REFERENCED_OVERLAY_PLANE_SEQUENCE: Tag = Tag(0x2040, 0x0010);
/// ReferencedOverlayPlaneGroups (2040,0011) US (retired)
pub const REFERENCED_OVERLAY_PLANE_GROUPS: Tag = Tag(0x2040, 0x0011);
/// OverlayPixelDataSequence (2040,0020) SQ (retired)
pub const OVERLAY_PIXEL_DATA_SEQUENCE: Tag = Tag(0x2040, 0x0020);
/// OverlayMagnificationType (2040,0060) CS (retired)
pub const OVERLAY_MAGNIFICATION_TYPE: Tag = Tag(0x2040, 0x0060);
/// OverlaySmoothingType (2040,0070) CS (retired)
pub const OVERLAY_SMOOTHING_TYPE: Tag = Tag(0x2040, 0x0070);
/// OverlayOrImageMagnification (2040,0072) CS (retired)
pub const OVERLAY_OR_IMAGE_MAGNIFICATION: Tag = Tag(0x2040, 0x0072);
/// MagnifyToNumberOfColumns (2040,0074) US (retired)
pub const MAGNIFY_TO_NUMBER_OF_COLUMNS: Tag = Tag(0x2040, 0x0074);
/// OverlayForegroundDensity (2040,0080) CS (retired)
pub const OVERLAY_FOREGROUND_DENSITY: Tag = Tag(0x2040, 0x0080);
/// OverlayBackgroundDensity (2040,0082) CS (retired)
pub const OVERLAY_BACKGROUND_DENSITY: Tag = Tag(0x2040, 0x0082);
/// OverlayMode (2040,0090) CS (retired)
pub const OVERLAY_MODE: Tag = Tag(0x2040, 0x0090);
/// ThresholdDensity (2040,0100) CS (retired)
pub const THRESHOLD_DENSITY: Tag = Tag(0x2040, 0x0100);
/// ReferencedImageBoxSequenceRetired (2040,0500) SQ (retired)
pub const REFERENCED_IMAGE_BOX_SEQUENCE_RETIRED: Tag = Tag(0x2040, 0x0500);
/// PresentationLUTSequence (2050,0010) SQ
pub const PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0010);
/// PresentationLUTShape (2050,0020) CS
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// ReferencedPresentationLUTSequence (2050,0500) SQ
pub const REFERENCED_PRESENTATION_LUT_SEQUENCE: Tag = Tag(0x2050, 0x0500);
/// PrintJobID (2100,0010) SH (retired)
pub const PRINT_JOB_ID: Tag = Tag(0x2100, 0x0010);
/// ExecutionStatus (2100,0020) CS
pub const EXECUTION_STATUS: Tag = Tag(0x2100, 0x0020);
/// ExecutionStatusInfo (2100,0030) CS
pub const EXECUTION_STATUS_INFO: Tag = Tag(0x2100, 0x0030);
/// CreationDate (2100,0040) DA
pub const CREATION_DATE: Tag = Tag(0x2100, 0x0040);
/// CreationTime (2100,0050) TM
pub const CREATION_TIME: Tag = Tag(0x2100, 0x0050);
/// Originator (2100,0070) AE
pub const ORIGINATOR: Tag = Tag(0x2100, 0x0070);
/// DestinationAE (2100,0140) AE
pub const DESTINATION_AE: Tag = Tag(0x2100, 0x0140);
/// OwnerID (2100,0160) SH
pub const OWNER_ID: Tag = Tag(0x2100, 0x0160);
/// NumberOfFilms (2100,0170) IS
pub const NUMBER_OF_FILMS: Tag = Tag(0x2100, 0x0170);
/// ReferencedPrintJobSequencePullStoredPrint (2100,0500) SQ (retired)
pub const REFERENCED_PRINT_JOB_SEQUENCE_PULL_STORED_PRINT: Tag = Tag(0x2100, 0x0500);
/// PrinterStatus (2110,0010) CS
pub const PRINTER_STATUS: Tag = Tag(0x2110, 0x0010);
/// PrinterStatusInfo (2110,0020) CS
pub const PRINTER_STATUS_INFO: Tag = Tag(0x2110, 0x0020);
/// PrinterName (2110,0030) LO
pub const PRINTER_NAME: Tag = Tag(0x2110, 0x0030);
/// PrintQueueID (2110,0099) SH (retired)
pub const PRINT_QUEUE_ID: Tag = Tag(0x2110, 0x0099);
/// QueueStatus (2120,0010) CS (retired)
pub const QUEUE_STATUS: Tag = Tag(0x2120, 0x0010);
/// PrintJobDescriptionSequence (2120,0050) SQ (retired)
pub const PRINT_JOB_DESCRIPTION_SEQUENCE: Tag = Tag(0x2120, 0x0050);
/// ReferencedPrintJobSequence (2120,0070) SQ (retired)
pub const REFERENCED_PRINT_JOB_SEQUENCE: Tag = Tag(0x2120, 0x0070);
/// PrintManagementCapabilitiesSequence (2130,0010) SQ (retired)
pub const PRINT_MANAGEMENT_CAPABILITIES_SEQUENCE: Tag = Tag(0x2130, 0x0010);
/// PrinterCharacteristicsSequence (2130,0015) SQ (retired)
pub const PRINTER_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x2130, 0x0015);
/// FilmBoxContentSequence (2130,0030) SQ (retired)
pub const FILM_BOX_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0030);
/// ImageBoxContentSequence (2130,0040) SQ (retired)
pub const IMAGE_BOX_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0040);
/// AnnotationContentSequence (2130,0050) SQ (retired)
pub const ANNOTATION_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0050);
/// ImageOverlayBoxContentSequence (2130,0060) SQ (retired)
pub const IMAGE_OVERLAY_BOX_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0060);
/// PresentationLUTContentSequence (2130,0080) SQ (retired)
pub const PRESENTATION_LUT_CONTENT_SEQUENCE: Tag = Tag(0x2130, 0x0080);
/// ProposedStudySequence (2130,00A0) SQ (retired)
pub const PROPOSED_STUDY_SEQUENCE: Tag = Tag(0x2130, 0x00A0);
/// OriginalImageSequence (2130,00C0) SQ (retired)
pub const ORIGINAL_IMAGE_SEQUENCE: Tag = Tag(0x2130, 0x00C0);
/// LabelUsingInformationExtractedFromInstances (2200,0001) CS
pub const LABEL_USING_INFORMATION_EXTRACTED_FROM_INSTANCES: Tag = Tag(0x2200, 0x0001);
/// LabelText (2200,0002) UT
pub const LABEL_TEXT: Tag = Tag(0x2200, 0x0002);
/// LabelStyleSelection (2200,0003) CS
pub const LABEL_STYLE_SELECTION: Tag = Tag(0x2200, 0x0003);
/// MediaDisposition (2200,0004) LT
pub const MEDIA_DISPOSITION: Tag = Tag(0x2200, 0x0004);
/// BarcodeValue (2200,0005) LT
pub const BARCODE_VALUE: Tag = Tag(0x2200, 0x0005);
/// BarcodeSymbology (2200,0006) CS
pub const BARCODE_SYMBOLOGY: Tag = Tag(0x2200, 0x0006);
/// AllowMediaSplitting (2200,0007) CS
pub const ALLOW_MEDIA_SPLITTING: Tag = Tag(0x2200, 0x0007);
/// IncludeNonDICOMObjects (2200,0008) CS
pub const INCLUDE_NON_DICOM_OBJECTS: Tag = Tag(0x2200, 0x0008);
/// IncludeDisplayApplication (2200,0009) CS
pub const INCLUDE_DISPLAY_APPLICATION: Tag = Tag(0x2200, 0x0009);
/// PreserveCompositeInstancesAfterMediaCreation (2200,000A) CS
pub const PRESERVE_COMPOSITE_INSTANCES_AFTER_MEDIA_CREATION: Tag = Tag(0x2200, 0x000A);
/// TotalNumberOfPiecesOfMediaCreated (2200,000B) US
pub const TOTAL_NUMBER_OF_PIECES_OF_MEDIA_CREATED: Tag = Tag(0x2200, 0x000B);
/// RequestedMediaApplicationProfile (2200,000C) LO
pub const REQUESTED_MEDIA_APPLICATION_PROFILE: Tag = Tag(0x2200, 0x000C);
/// ReferencedStorageMediaSequence (2200,000D) SQ
pub const REFERENCED_STORAGE_MEDIA_SEQUENCE: Tag = Tag(0x2200, 0x000D);
/// FailureAttributes (2200,000E) AT
pub const FAILURE_ATTRIBUTES: Tag = Tag(0x2200, 0x000E);
/// AllowLossyCompression (2200,000F) CS
pub const ALLOW_LOSSY_COMPRESSION: Tag = Tag(0x2200, 0x000F);
/// RequestPriority (2200,0020) CS
pub const REQUEST_PRIORITY: Tag = Tag(0x2200, 0x0020);
/// RTImageLabel (3002,0002) SH
pub const RT_IMAGE_LABEL: Tag = Tag(0x3002, 0x0002);
/// RTImageName (3002,0003) LO
pub const RT_IMAGE_NAME: Tag = Tag(0x3002, 0x0003);
/// RTImageDescription (3002,0004) ST
pub const RT_IMAGE_DESCRIPTION: Tag = Tag(0x3002, 0x0004);
/// ReportedValuesOrigin (3002,000A) CS
pub const REPORTED_VALUES_ORIGIN: Tag = Tag(0x3002, 0x000A);
/// RTImagePlane (3002,000C) CS
pub const RT_IMAGE_PLANE: Tag = Tag(0x3002, 0x000C);
/// XRayImageReceptorTranslation (3002,000D) DS
pub const X_RAY_IMAGE_RECEPTOR_TRANSLATION: Tag = Tag(0x3002, 0x000D);
/// XRayImageReceptorAngle (3002,000E) DS
pub const X_RAY_IMAGE_RECEPTOR_ANGLE: Tag = Tag(0x3002, 0x000E);
/// RTImageOrientation (3002,0010) DS
pub const RT_IMAGE_ORIENTATION: Tag = Tag(0x3002, 0x0010);
/// ImagePlanePixelSpacing (3002,0011) DS
pub const IMAGE_PLANE_PIXEL_SPACING: Tag = Tag(0x3002, 0x0011);
/// RTImagePosition (3002,0012) DS
pub const RT_IMAGE_POSITION: Tag = Tag(0x3002, 0x0012);
/// RadiationMachineName (3002,0020) SH
pub const RADIATION_MACHINE_NAME: Tag = Tag(0x3002, 0x0020);
/// RadiationMachineSAD (3002,0022) DS
pub const RADIATION_MACHINE_SAD: Tag = Tag(0x3002, 0x0022);
/// RadiationMachineSSD (3002,0024) DS
pub const RADIATION_MACHINE_SSD: Tag = Tag(0x3002, 0x0024);
/// RTImageSID (3002,0026) DS
pub const RT_IMAGE_SID: Tag = Tag(0x3002, 0x0026);
/// SourceToReferenceObjectDistance (3002,0028) DS
pub const SOURCE_TO_REFERENCE_OBJECT_DISTANCE: Tag = Tag(0x3002, 0x0028);
/// FractionNumber (3002,0029) IS
pub const FRACTION_NUMBER: Tag = Tag(0x3002, 0x0029);
/// ExposureSequence (3002,0030) SQ
pub const EXPOSURE_SEQUENCE: Tag = Tag(0x3002, 0x0030);
/// MetersetExposure (3002,0032) DS
pub const METERSET_EXPOSURE: Tag = Tag(0x3002, 0x0032);
/// DiaphragmPosition (3002,0034) DS
pub const DIAPHRAGM_POSITION: Tag = Tag(0x3002, 0x0034);
/// FluenceMapSequence (3002,0040) SQ
pub const FLUENCE_MAP_SEQUENCE: Tag = Tag(0x3002, 0x0040);
/// FluenceDataSource (3002,0041) CS
pub const FLUENCE_DATA_SOURCE: Tag = Tag(0x3002, 0x0041);
/// FluenceDataScale (3002,0042) DS
pub const FLUENCE_DATA_SCALE: Tag = Tag(0x3002, 0x0042);
/// PrimaryFluenceModeSequence (3002,0050) SQ
pub const PRIMARY_FLUENCE_MODE_SEQUENCE: Tag = Tag(0x3002, 0x0050);
/// FluenceMode (3002,0051) CS
pub const FLUENCE_MODE: Tag = Tag(0x3002, 0x0051);
/// FluenceModeID (3002,0052) SH
pub const FLUENCE_MODE_ID: Tag = Tag(0x3002, 0x0052);
/// DVHType (3004,0001) CS
pub const DVH_TYPE: Tag = Tag(0x3004, 0x0001);
/// DoseUnits (3004,0002) CS
pub const DOSE_UNITS: Tag = Tag(0x3004, 0x0002);
/// DoseType (3004,0004) CS
pub const DOSE_TYPE: Tag = Tag(0x3004, 0x0004);
/// SpatialTransformOfDose (3004,0005) CS
pub const SPATIAL_TRANSFORM_OF_DOSE: Tag = Tag(0x3004, 0x0005);
/// DoseComment (3004,0006) LO
pub const DOSE_COMMENT: Tag = Tag(0x3004, 0x0006);
/// NormalizationPoint (3004,0008) DS
pub const NORMALIZATION_POINT: Tag = Tag(0x3004, 0x0008);
/// DoseSummationType (3004,000A) CS
pub const DOSE_SUMMATION_TYPE: Tag = Tag(0x3004, 0x000A);
/// GridFrameOffsetVector (3004,000C) DS
pub const GRID_FRAME_OFFSET_VECTOR: Tag = Tag(0x3004, 0x000C);
/// DoseGridScaling (3004,000E) DS
pub const DOSE_GRID_SCALING: Tag = Tag(0x3004, 0x000E);
/// RTDoseROISequence (3004,0010) SQ (retired)
pub const RT_DOSE_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0010);
/// DoseValue (3004,0012) DS (retired)
pub const DOSE_VALUE: Tag = Tag(0x3004, 0x0012);
/// TissueHeterogeneityCorrection (3004,0014) CS
pub const TISSUE_HETEROGENEITY_CORRECTION: Tag = Tag(0x3004, 0x0014);
/// DVHNormalizationPoint (3004,0040) DS
pub const DVH_NORMALIZATION_POINT: Tag = Tag(0x3004, 0x0040);
/// DVHNormalizationDoseValue (3004,0042) DS
pub const DVH_NORMALIZATION_DOSE_VALUE: Tag = Tag(0x3004, 0x0042);
/// DVHSequence (3004,0050) SQ
pub const DVH_SEQUENCE: Tag = Tag(0x3004, 0x0050);
/// DVHDoseScaling (3004,0052) DS
pub const DVH_DOSE_SCALING: Tag = Tag(0x3004, 0x0052);
/// DVHVolumeUnits (3004,0054) CS
pub const DVH_VOLUME_UNITS: Tag = Tag(0x3004, 0x0054);
/// DVHNumberOfBins (3004,0056) IS
pub const DVH_NUMBER_OF_BINS: Tag = Tag(0x3004, 0x0056);
/// DVHData (3004,0058) DS
pub const DVH_DATA: Tag = Tag(0x3004, 0x0058);
/// DVHReferencedROISequence (3004,0060) SQ
pub const DVH_REFERENCED_ROI_SEQUENCE: Tag = Tag(0x3004, 0x0060);
/// DVHROIContributionType (3004,0062) CS
pub const DVHROI_CONTRIBUTION_TYPE: Tag = Tag(0x3004, 0x0062);
/// DVHMinimumDose (3004,0070) DS
pub const DVH_MINIMUM_DOSE: Tag = Tag(0x3004, 0x0070);
/// DVHMaximumDose (3004,0072) DS
pub const DVH_MAXIMUM_DOSE: Tag = Tag(0x3004, 0x0072);
/// DVHMeanDose (3004,0074) DS
pub const DVH_MEAN_DOSE: Tag = Tag(0x3004, 0x0074);
/// StructureSetLabel (3006,0002) SH
pub const STRUCTURE_SET_LABEL: Tag = Tag(0x3006, 0x0002);
/// StructureSetName (3006,0004) LO
pub const STRUCTURE_SET_NAME: Tag = Tag(0x3006, 0x0004);
/// StructureSetDescription (3006,0006) ST
pub const STRUCTURE_SET_DESCRIPTION: Tag = Tag(0x3006, 0x0006);
/// StructureSetDate (3006,0008) DA
pub const STRUCTURE_SET_DATE: Tag = Tag(0x3006, 0x0008);
/// StructureSetTime (3006,0009) TM
pub const STRUCTURE_SET_TIME: Tag = Tag(0x3006, 0x0009);
/// ReferencedFrameOfReferenceSequence (3006,0010) SQ
pub const REFERENCED_FRAME_OF_REFERENCE_SEQUENCE: Tag = Tag(0x3006, 0x0010);
/// RTReferencedStudySequence (3006,0012) SQ
pub const RT_REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x3006, 0x0012);
/// RTReferencedSeriesSequence (3006,0014) SQ
pub const RT_REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x0014);
/// ContourImageSequence (3006,0016) SQ
pub const CONTOUR_IMAGE_SEQUENCE: Tag = Tag(0x3006, 0x0016);
/// PredecessorStructureSetSequence (3006,0018) SQ
pub const PREDECESSOR_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x3006, 0x0018);
/// StructureSetROISequence (3006,0020) SQ
pub const STRUCTURE_SET_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0020);
/// ROINumber (3006,0022) IS
pub const ROI_NUMBER: Tag = Tag(0x3006, 0x0022);
/// ReferencedFrameOfReferenceUID (3006,0024) UI
pub const REFERENCED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x0024);
/// ROIName (3006,0026) LO
pub const ROI_NAME: Tag = Tag(0x3006, 0x0026);
/// ROIDescription (3006,0028) ST
pub const ROI_DESCRIPTION: Tag = Tag(0x3006, 0x0028);
/// ROIDisplayColor (3006,002A) IS
pub const ROI_DISPLAY_COLOR: Tag = Tag(0x3006, 0x002A);
/// ROIVolume (3006,002C) DS
pub const ROI_VOLUME: Tag = Tag(0x3006, 0x002C);
/// ROIDateTime (3006,002D) DT
pub const ROI_DATE_TIME: Tag = Tag(0x3006, 0x002D);
/// ROIObservationDateTime (3006,002E) DT
pub const ROI_OBSERVATION_DATE_TIME: Tag = Tag(0x3006, 0x002E);
/// RTRelatedROISequence (3006,0030) SQ
pub const RT_RELATED_ROI_SEQUENCE: Tag = Tag(0x3006, 0x0030);
/// RTROIRelationship (3006,0033) CS
pub const RTROI_RELATIONSHIP: Tag = Tag(0x3006, 0x0033);
/// ROIGenerationAlgorithm (3006,0036) CS
pub const ROI_GENERATION_ALGORITHM: Tag = Tag(0x3006, 0x0036);
/// ROIDerivationAlgorithmIdentificationSequence (3006,0037) SQ
pub const ROI_DERIVATION_ALGORITHM_IDENTIFICATION_SEQUENCE: Tag = Tag(0x3006, 0x0037);
/// ROIGenerationDescription (3006,0038) LO
pub const ROI_GENERATION_DESCRIPTION: Tag = Tag(0x3006, 0x0038);
/// ROIContourSequence (3006,0039) SQ
pub const ROI_CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0039);
/// ContourSequence (3006,0040) SQ
pub const CONTOUR_SEQUENCE: Tag = Tag(0x3006, 0x0040);
/// ContourGeometricType (3006,0042) CS
pub const CONTOUR_GEOMETRIC_TYPE: Tag = Tag(0x3006, 0x0042);
/// ContourSlabThickness (3006,0044) DS (retired)
pub const CONTOUR_SLAB_THICKNESS: Tag = Tag(0x3006, 0x0044);
/// ContourOffsetVector (3006,0045) DS (retired)
pub const CONTOUR_OFFSET_VECTOR: Tag = Tag(0x3006, 0x0045);
/// NumberOfContourPoints (3006,0046) IS
pub const NUMBER_OF_CONTOUR_POINTS: Tag = Tag(0x3006, 0x0046);
/// ContourNumber (3006,0048) IS
pub const CONTOUR_NUMBER: Tag = Tag(0x3006, 0x0048);
/// AttachedContours (3006,0049) IS (retired)
pub const ATTACHED_CONTOURS: Tag = Tag(0x3006, 0x0049);
/// SourcePixelPlanesCharacteristicsSequence (3006,004A) SQ
pub const SOURCE_PIXEL_PLANES_CHARACTERISTICS_SEQUENCE: Tag = Tag(0x3006, 0x004A);
/// SourceSeriesSequence (3006,004B) SQ
pub const SOURCE_SERIES_SEQUENCE: Tag = Tag(0x3006, 0x004B);
/// SourceSeriesInformationSequence (3006,004C) SQ
pub const SOURCE_SERIES_INFORMATION_SEQUENCE: Tag = Tag(0x3006, 0x004C);
/// ROICreatorSequence (3006,004D) SQ
pub const ROI_CREATOR_SEQUENCE: Tag = Tag(0x3006, 0x004D);
/// ROIInterpreterSequence (3006,004E) SQ
pub const ROI_INTERPRETER_SEQUENCE: Tag = Tag(0x3006, 0x004E);
/// ROIObservationContextCodeSequence (3006,004F) SQ
pub const ROI_OBSERVATION_CONTEXT_CODE_SEQUENCE: Tag = Tag(0x3006, 0x004F);
/// ContourData (3006,0050) DS
pub const CONTOUR_DATA: Tag = Tag(0x3006, 0x0050);
/// RTROIObservationsSequence (3006,0080) SQ
pub const RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x0080);
/// ObservationNumber (3006,0082) IS
pub const OBSERVATION_NUMBER: Tag = Tag(0x3006, 0x0082);
/// ReferencedROINumber (3006,0084) IS
pub const REFERENCED_ROI_NUMBER: Tag = Tag(0x3006, 0x0084);
/// ROIObservationLabel (3006,0085) SH (retired)
pub const ROI_OBSERVATION_LABEL: Tag = Tag(0x3006, 0x0085);
/// RTROIIdentificationCodeSequence (3006,0086) SQ
pub const RTROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x0086);
/// ROIObservationDescription (3006,0088) ST (retired)
pub const ROI_OBSERVATION_DESCRIPTION: Tag = Tag(0x3006, 0x0088);
/// RelatedRTROIObservationsSequence (3006,00A0) SQ
pub const RELATED_RTROI_OBSERVATIONS_SEQUENCE: Tag = Tag(0x3006, 0x00A0);
/// RTROIInterpretedType (3006,00A4) CS
pub const RTROI_INTERPRETED_TYPE: Tag = Tag(0x3006, 0x00A4);
/// ROIInterpreter (3006,00A6) PN
pub const ROI_INTERPRETER: Tag = Tag(0x3006, 0x00A6);
/// ROIPhysicalPropertiesSequence (3006,00B0) SQ
pub const ROI_PHYSICAL_PROPERTIES_SEQUENCE: Tag = Tag(0x3006, 0x00B0);
/// ROIPhysicalProperty (3006,00B2) CS
pub const ROI_PHYSICAL_PROPERTY: Tag = Tag(0x3006, 0x00B2);
/// ROIPhysicalPropertyValue (3006,00B4) DS
pub const ROI_PHYSICAL_PROPERTY_VALUE: Tag = Tag(0x3006, 0x00B4);
/// ROIElementalCompositionSequence (3006,00B6) SQ
pub const ROI_ELEMENTAL_COMPOSITION_SEQUENCE: Tag = Tag(0x3006, 0x00B6);
/// ROIElementalCompositionAtomicNumber (3006,00B7) US
pub const ROI_ELEMENTAL_COMPOSITION_ATOMIC_NUMBER: Tag = Tag(0x3006, 0x00B7);
/// ROIElementalCompositionAtomicMassFraction (3006,00B8) FL
pub const ROI_ELEMENTAL_COMPOSITION_ATOMIC_MASS_FRACTION: Tag = Tag(0x3006, 0x00B8);
/// AdditionalRTROIIdentificationCodeSequence (3006,00B9) SQ
pub const ADDITIONAL_RTROI_IDENTIFICATION_CODE_SEQUENCE: Tag = Tag(0x3006, 0x00B9);
/// FrameOfReferenceRelationshipSequence (3006,00C0) SQ (retired)
pub const FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE: Tag = Tag(0x3006, 0x00C0);
/// RelatedFrameOfReferenceUID (3006,00C2) UI (retired)
pub const RELATED_FRAME_OF_REFERENCE_UID: Tag = Tag(0x3006, 0x00C2);
/// FrameOfReferenceTransformationType (3006,00C4) CS (retired)
pub const FRAME_OF_REFERENCE_TRANSFORMATION_TYPE: Tag = Tag(0x3006, 0x00C4);
/// FrameOfReferenceTransformationMatrix (3006,00C6) DS
pub const FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX: Tag = Tag(0x3006, 0x00C6);
/// FrameOfReferenceTransformationComment (3006,00C8) LO
pub const FRAME_OF_REFERENCE_TRANSFORMATION_COMMENT: Tag = Tag(0x3006, 0x00C8);
/// MeasuredDoseReferenceSequence (3008,0010) SQ
pub const MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0010);
/// MeasuredDoseDescription (3008,0012) ST
pub const MEASURED_DOSE_DESCRIPTION: Tag = Tag(0x3008, 0x0012);
/// MeasuredDoseType (3008,0014) CS
pub const MEASURED_DOSE_TYPE: Tag = Tag(0x3008, 0x0014);
/// MeasuredDoseValue (3008,0016) DS
pub const MEASURED_DOSE_VALUE: Tag = Tag(0x3008, 0x0016);
/// TreatmentSessionBeamSequence (3008,0020) SQ
pub const TREATMENT_SESSION_BEAM_SEQUENCE: Tag = Tag(0x3008, 0x0020);
/// TreatmentSessionIonBeamSequence (3008,0021) SQ
pub const TREATMENT_SESSION_ION_BEAM_SEQUENCE: Tag = Tag(0x3008, 0x0021);
/// CurrentFractionNumber (3008,0022) IS
pub const CURRENT_FRACTION_NUMBER: Tag = Tag(0x3008, 0x0022);
/// TreatmentControlPointDate (3008,0024) DA
pub const TREATMENT_CONTROL_POINT_DATE: Tag = Tag(0x3008, 0x0024);
/// TreatmentControlPointTime (3008,0025) TM
pub const TREATMENT_CONTROL_POINT_TIME: Tag = Tag(0x3008, 0x0025);
/// TreatmentTerminationStatus (3008,002A) CS
pub const TREATMENT_TERMINATION_STATUS: Tag = Tag(0x3008, 0x002A);
/// TreatmentTerminationCode (3008,002B) SH (retired)
pub const TREATMENT_TERMINATION_CODE: Tag = Tag(0x3008, 0x002B);
/// TreatmentVerificationStatus (3008,002C) CS
pub const TREATMENT_VERIFICATION_STATUS: Tag = Tag(0x3008, 0x002C);
/// ReferencedTreatmentRecordSequence (3008,0030) SQ
pub const REFERENCED_TREATMENT_RECORD_SEQUENCE: Tag = Tag(0x3008, 0x0030);
/// SpecifiedPrimaryMeterset (3008,0032) DS
pub const SPECIFIED_PRIMARY_METERSET: Tag = Tag(0x3008, 0x0032);
/// SpecifiedSecondaryMeterset (3008,0033) DS
pub const SPECIFIED_SECONDARY_METERSET: Tag = Tag(0x3008, 0x0033);
/// DeliveredPrimaryMeterset (3008,0036) DS
pub const DELIVERED_PRIMARY_METERSET: Tag = Tag(0x3008, 0x0036);
/// DeliveredSecondaryMeterset (3008,0037) DS
pub const DELIVERED_SECONDARY_METERSET: Tag = Tag(0x3008, 0x0037);
/// SpecifiedTreatmentTime (3008,003A) DS
pub const SPECIFIED_TREATMENT_TIME: Tag = Tag(0x3008, 0x003A);
/// DeliveredTreatmentTime (3008,003B) DS
pub const DELIVERED_TREATMENT_TIME: Tag = Tag(0x3008, 0x003B);
/// ControlPointDeliverySequence (3008,0040) SQ
pub const CONTROL_POINT_DELIVERY_SEQUENCE: Tag = Tag(0x3008, 0x0040);
/// IonControlPointDeliverySequence (3008,0041) SQ
pub const ION_CONTROL_POINT_DELIVERY_SEQUENCE: Tag = Tag(0x3008, 0x0041);
/// SpecifiedMeterset (3008,0042) DS
pub const SPECIFIED_METERSET: Tag = Tag(0x3008, 0x0042);
/// DeliveredMeterset (3008,0044) DS
pub const DELIVERED_METERSET: Tag = Tag(0x3008, 0x0044);
/// MetersetRateSet (3008,0045) FL
pub const METERSET_RATE_SET: Tag = Tag(0x3008, 0x0045);
/// MetersetRateDelivered (3008,0046) FL
pub const METERSET_RATE_DELIVERED: Tag = Tag(0x3008, 0x0046);
/// ScanSpotMetersetsDelivered (3008,0047) FL
pub const SCAN_SPOT_METERSETS_DELIVERED: Tag = Tag(0x3008, 0x0047);
/// DoseRateDelivered (3008,0048) DS
pub const DOSE_RATE_DELIVERED: Tag = Tag(0x3008, 0x0048);
/// TreatmentSummaryCalculatedDoseReferenceSequence (3008,0050) SQ
pub const TREATMENT_SUMMARY_CALCULATED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0050);
/// FirstTreatmentDate (3008,0054) DA
pub const FIRST_TREATMENT_DATE: Tag = Tag(0x3008, 0x0054);
/// MostRecentTreatmentDate (3008,0056) DA
pub const MOST_RECENT_TREATMENT_DATE: Tag = Tag(0x3008, 0x0056);
/// NumberOfFractionsDelivered (3008,005A) IS
pub const NUMBER_OF_FRACTIONS_DELIVERED: Tag = Tag(0x3008, 0x005A);
/// OverrideSequence (3008,0060) SQ
pub const OVERRIDE_SEQUENCE: Tag = Tag(0x3008, 0x0060);
/// ParameterSequencePointer (3008,0061) AT
pub const PARAMETER_SEQUENCE_POINTER: Tag = Tag(0x3008, 0x0061);
/// OverrideParameterPointer (3008,0062) AT
pub const OVERRIDE_PARAMETER_POINTER: Tag = Tag(0x3008, 0x0062);
/// ParameterItemIndex (3008,0063) IS
pub const PARAMETER_ITEM_INDEX: Tag = Tag(0x3008, 0x0063);
/// MeasuredDoseReferenceNumber (3008,0064) IS
pub const MEASURED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0064);
/// ParameterPointer (3008,0065) AT
pub const PARAMETER_POINTER: Tag = Tag(0x3008, 0x0065);
/// OverrideReason (3008,0066) ST
pub const OVERRIDE_REASON: Tag = Tag(0x3008, 0x0066);
/// ParameterValueNumber (3008,0067) US
pub const PARAMETER_VALUE_NUMBER: Tag = Tag(0x3008, 0x0067);
/// CorrectedParameterSequence (3008,0068) SQ
pub const CORRECTED_PARAMETER_SEQUENCE: Tag = Tag(0x3008, 0x0068);
/// CorrectionValue (3008,006A) FL
pub const CORRECTION_VALUE: Tag = Tag(0x3008, 0x006A);
/// CalculatedDoseReferenceSequence (3008,0070) SQ
pub const CALCULATED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0070);
/// CalculatedDoseReferenceNumber (3008,0072) IS
pub const CALCULATED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0072);
/// CalculatedDoseReferenceDescription (3008,0074) ST
pub const CALCULATED_DOSE_REFERENCE_DESCRIPTION: Tag = Tag(0x3008, 0x0074);
/// CalculatedDoseReferenceDoseValue (3008,0076) DS
pub const CALCULATED_DOSE_REFERENCE_DOSE_VALUE: Tag = Tag(0x3008, 0x0076);
/// StartMeterset (3008,0078) DS
pub const START_METERSET: Tag = Tag(0x3008, 0x0078);
/// EndMeterset (3008,007A) DS
pub const END_METERSET: Tag = Tag(0x3008, 0x007A);
/// ReferencedMeasuredDoseReferenceSequence (3008,0080) SQ
pub const REFERENCED_MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0080);
/// ReferencedMeasuredDoseReferenceNumber (3008,0082) IS
pub const REFERENCED_MEASURED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0082);
/// ReferencedCalculatedDoseReferenceSequence (3008,0090) SQ
pub const REFERENCED_CALCULATED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x0090);
/// ReferencedCalculatedDoseReferenceNumber (3008,0092) IS
pub const REFERENCED_CALCULATED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x3008, 0x0092);
/// BeamLimitingDeviceLeafPairsSequence (3008,00A0) SQ
pub const BEAM_LIMITING_DEVICE_LEAF_PAIRS_SEQUENCE: Tag = Tag(0x3008, 0x00A0);
/// RecordedWedgeSequence (3008,00B0) SQ
pub const RECORDED_WEDGE_SEQUENCE: Tag = Tag(0x3008, 0x00B0);
/// RecordedCompensatorSequence (3008,00C0) SQ
pub const RECORDED_COMPENSATOR_SEQUENCE: Tag = Tag(0x3008, 0x00C0);
/// RecordedBlockSequence (3008,00D0) SQ
pub const RECORDED_BLOCK_SEQUENCE: Tag = Tag(0x3008, 0x00D0);
/// TreatmentSummaryMeasuredDoseReferenceSequence (3008,00E0) SQ
pub const TREATMENT_SUMMARY_MEASURED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x3008, 0x00E0);
/// RecordedSnoutSequence (3008,00F0) SQ
pub const RECORDED_SNOUT_SEQUENCE: Tag = Tag(0x3008, 0x00F0);
/// RecordedRangeShifterSequence (3008,00F2) SQ
pub const RECORDED_RANGE_SHIFTER_SEQUENCE: Tag = Tag(0x3008, 0x00F2);
/// RecordedLateralSpreadingDeviceSequence (3008,00F4) SQ
pub const RECORDED_LATERAL_SPREADING_DEVICE_SEQUENCE: Tag = Tag(0x3008, 0x00F4);
/// RecordedRangeModulatorSequence (3008,00F6) SQ
pub const RECORDED_RANGE_MODULATOR_SEQUENCE: Tag = Tag(0x3008, 0x00F6);
/// RecordedSourceSequence (3008,0100) SQ
pub const RECORDED_SOURCE_SEQUENCE: Tag = Tag(0x3008, 0x0100);
/// SourceSerialNumber (3008,0105) LO
pub const SOURCE_SERIAL_NUMBER: Tag = Tag(0x3008, 0x0105);
/// TreatmentSessionApplicationSetupSequence (3008,0110) SQ
pub const TREATMENT_SESSION_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x3008, 0x0110);
/// ApplicationSetupCheck (3008,0116) CS
pub const APPLICATION_SETUP_CHECK: Tag = Tag(0x3008, 0x0116);
/// RecordedBrachyAccessoryDeviceSequence (3008,0120) SQ
pub const RECORDED_BRACHY_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x3008, 0x0120);
/// ReferencedBrachyAccessoryDeviceNumber (3008,0122) IS
pub const REFERENCED_BRACHY_ACCESSORY_DEVICE_NUMBER: Tag = Tag(0x3008, 0x0122);
/// RecordedChannelSequence (3008,0130) SQ
pub const RECORDED_CHANNEL_SEQUENCE: Tag = Tag(0x3008, 0x0130);
/// SpecifiedChannelTotalTime (3008,0132) DS
pub const SPECIFIED_CHANNEL_TOTAL_TIME: Tag = Tag(0x3008, 0x0132);
/// DeliveredChannelTotalTime (3008,0134) DS
pub const DELIVERED_CHANNEL_TOTAL_TIME: Tag = Tag(0x3008, 0x0134);
/// SpecifiedNumberOfPulses (3008,0136) IS
pub const SPECIFIED_NUMBER_OF_PULSES: Tag = Tag(0x3008, 0x0136);
/// DeliveredNumberOfPulses (3008,0138) IS
pub const DELIVERED_NUMBER_OF_PULSES: Tag = Tag(0x3008, 0x0138);
/// SpecifiedPulseRepetitionInterval (3008,013A) DS
pub const SPECIFIED_PULSE_REPETITION_INTERVAL: Tag = Tag(0x3008, 0x013A);
/// DeliveredPulseRepetitionInterval (3008,013C) DS
pub const DELIVERED_PULSE_REPETITION_INTERVAL: Tag = Tag(0x3008, 0x013C);
/// RecordedSourceApplicatorSequence (3008,0140) SQ
pub const RECORDED_SOURCE_APPLICATOR_SEQUENCE: Tag = Tag(0x3008, 0x0140);
/// ReferencedSourceApplicatorNumber (3008,0142) IS
pub const REFERENCED_SOURCE_APPLICATOR_NUMBER: Tag = Tag(0x3008, 0x0142);
/// RecordedChannelShieldSequence (3008,0150) SQ
pub const RECORDED_CHANNEL_SHIELD_SEQUENCE: Tag = Tag(0x3008, 0x0150);
/// ReferencedChannelShieldNumber (3008,0152) IS
pub const REFERENCED_CHANNEL_SHIELD_NUMBER: Tag = Tag(0x3008, 0x0152);
/// BrachyControlPointDeliveredSequence (3008,0160) SQ
pub const BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE: Tag = Tag(0x3008, 0x0160);
/// SafePositionExitDate (3008,0162) DA
pub const SAFE_POSITION_EXIT_DATE: Tag = Tag(0x3008, 0x0162);
/// SafePositionExitTime (3008,0164) TM
pub const SAFE_POSITION_EXIT_TIME: Tag = Tag(0x3008, 0x0164);
/// SafePositionReturnDate (3008,0166) DA
pub const SAFE_POSITION_RETURN_DATE: Tag = Tag(0x3008, 0x0166);
/// SafePositionReturnTime (3008,0168) TM
pub const SAFE_POSITION_RETURN_TIME: Tag = Tag(0x3008, 0x0168);
/// PulseSpecificBrachyControlPointDeliveredSequence (3008,0171) SQ
pub const PULSE_SPECIFIC_BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE: Tag = Tag(0x3008, 0x0171);
/// PulseNumber (3008,0172) US
pub const PULSE_NUMBER: Tag = Tag(0x3008, 0x0172);
/// BrachyPulseControlPointDeliveredSequence (3008,0173) SQ
pub const BRACHY_PULSE_CONTROL_POINT_DELIVERED_SEQUENCE: Tag = Tag(0x3008, 0x0173);
/// CurrentTreatmentStatus (3008,0200) CS
pub const CURRENT_TREATMENT_STATUS: Tag = Tag(0x3008, 0x0200);
/// TreatmentStatusComment (3008,0202) ST
pub const TREATMENT_STATUS_COMMENT: Tag = Tag(0x3008, 0x0202);
/// FractionGroupSummarySequence (3008,0220) SQ
pub const FRACTION_GROUP_SUMMARY_SEQUENCE: Tag = Tag(0x3008, 0x0220);
/// ReferencedFractionNumber (3008,0223) IS
pub const REFERENCED_FRACTION_NUMBER: Tag = Tag(0x3008, 0x0223);
/// FractionGroupType (3008,0224) CS
pub const FRACTION_GROUP_TYPE: Tag = Tag(0x3008, 0x0224);
/// BeamStopperPosition (3008,0230) CS
pub const BEAM_STOPPER_POSITION: Tag = Tag(0x3008, 0x0230);
/// FractionStatusSummarySequence (3008,0240) SQ
pub const FRACTION_STATUS_SUMMARY_SEQUENCE: Tag = Tag(0x3008, 0x0240);
/// TreatmentDate (3008,0250) DA
pub const TREATMENT_DATE: Tag = Tag(0x3008, 0x0250);
/// TreatmentTime (3008,0251) TM
pub const TREATMENT_TIME: Tag = Tag(0x3008, 0x0251);
/// RTPlanLabel (300A,0002) SH
pub const RT_PLAN_LABEL: Tag = Tag(0x300A, 0x0002);
/// RTPlanName (300A,0003) LO
pub const RT_PLAN_NAME: Tag = Tag(0x300A, 0x0003);
/// RTPlanDescription (300A,0004) ST
pub const RT_PLAN_DESCRIPTION: Tag = Tag(0x300A, 0x0004);
/// RTPlanDate (300A,0006) DA
pub const RT_PLAN_DATE: Tag = Tag(0x300A, 0x0006);
/// RTPlanTime (300A,0007) TM
pub const RT_PLAN_TIME: Tag = Tag(0x300A, 0x0007);
/// TreatmentProtocols (300A,0009) LO
pub const TREATMENT_PROTOCOLS: Tag = Tag(0x300A, 0x0009);
/// PlanIntent (300A,000A) CS
pub const PLAN_INTENT: Tag = Tag(0x300A, 0x000A);
/// TreatmentSites (300A,000B) LO (retired)
pub const TREATMENT_SITES: Tag = Tag(0x300A, 0x000B);
/// RTPlanGeometry (300A,000C) CS
pub const RT_PLAN_GEOMETRY: Tag = Tag(0x300A, 0x000C);
/// PrescriptionDescription (300A,000E) ST
pub const PRESCRIPTION_DESCRIPTION: Tag = Tag(0x300A, 0x000E);
/// DoseReferenceSequence (300A,0010) SQ
pub const DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300A, 0x0010);
/// DoseReferenceNumber (300A,0012) IS
pub const DOSE_REFERENCE_NUMBER: Tag = Tag(0x300A, 0x0012);
/// DoseReferenceUID (300A,0013) UI
pub const DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0013);
/// DoseReferenceStructureType (300A,0014) CS
pub const DOSE_REFERENCE_STRUCTURE_TYPE: Tag = Tag(0x300A, 0x0014);
/// NominalBeamEnergyUnit (300A,0015) CS
pub const NOMINAL_BEAM_ENERGY_UNIT: Tag = Tag(0x300A, 0x0015);
/// DoseReferenceDescription (300A,0016) LO
pub const DOSE_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x0016);
/// DoseReferencePointCoordinates (300A,0018) DS
pub const DOSE_REFERENCE_POINT_COORDINATES: Tag = Tag(0x300A, 0x0018);
/// NominalPriorDose (300A,001A) DS
pub const NOMINAL_PRIOR_DOSE: Tag = Tag(0x300A, 0x001A);
/// DoseReferenceType (300A,0020) CS
pub const DOSE_REFERENCE_TYPE: Tag = Tag(0x300A, 0x0020);
/// ConstraintWeight (300A,0021) DS
pub const CONSTRAINT_WEIGHT: Tag = Tag(0x300A, 0x0021);
/// DeliveryWarningDose (300A,0022) DS
pub const DELIVERY_WARNING_DOSE: Tag = Tag(0x300A, 0x0022);
/// DeliveryMaximumDose (300A,0023) DS
pub const DELIVERY_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x0023);
/// TargetMinimumDose (300A,0025) DS
pub const TARGET_MINIMUM_DOSE: Tag = Tag(0x300A, 0x0025);
/// TargetPrescriptionDose (300A,0026) DS
pub const TARGET_PRESCRIPTION_DOSE: Tag = Tag(0x300A, 0x0026);
/// TargetMaximumDose (300A,0027) DS
pub const TARGET_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x0027);
/// TargetUnderdoseVolumeFraction (300A,0028) DS
pub const TARGET_UNDERDOSE_VOLUME_FRACTION: Tag = Tag(0x300A, 0x0028);
/// OrganAtRiskFullVolumeDose (300A,002A) DS
pub const ORGAN_AT_RISK_FULL_VOLUME_DOSE: Tag = Tag(0x300A, 0x002A);
/// OrganAtRiskLimitDose (300A,002B) DS
pub const ORGAN_AT_RISK_LIMIT_DOSE: Tag = Tag(0x300A, 0x002B);
/// OrganAtRiskMaximumDose (300A,002C) DS
pub const ORGAN_AT_RISK_MAXIMUM_DOSE: Tag = Tag(0x300A, 0x002C);
/// OrganAtRiskOverdoseVolumeFraction (300A,002D) DS
pub const ORGAN_AT_RISK_OVERDOSE_VOLUME_FRACTION: Tag = Tag(0x300A, 0x002D);
/// ToleranceTableSequence (300A,0040) SQ
pub const TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x0040);
/// ToleranceTableNumber (300A,0042) IS
pub const TOLERANCE_TABLE_NUMBER: Tag = Tag(0x300A, 0x0042);
/// ToleranceTableLabel (300A,0043) SH
pub const TOLERANCE_TABLE_LABEL: Tag = Tag(0x300A, 0x0043);
/// GantryAngleTolerance (300A,0044) DS
pub const GANTRY_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0044);
/// BeamLimitingDeviceAngleTolerance (300A,0046) DS
pub const BEAM_LIMITING_DEVICE_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0046);
/// BeamLimitingDeviceToleranceSequence (300A,0048) SQ
pub const BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x0048);
/// BeamLimitingDevicePositionTolerance (300A,004A) DS
pub const BEAM_LIMITING_DEVICE_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x004A);
/// SnoutPositionTolerance (300A,004B) FL
pub const SNOUT_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x004B);
/// PatientSupportAngleTolerance (300A,004C) DS
pub const PATIENT_SUPPORT_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004C);
/// TableTopEccentricAngleTolerance (300A,004E) DS
pub const TABLE_TOP_ECCENTRIC_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004E);
/// TableTopPitchAngleTolerance (300A,004F) FL
pub const TABLE_TOP_PITCH_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x004F);
/// TableTopRollAngleTolerance (300A,0050) FL
pub const TABLE_TOP_ROLL_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0050);
/// TableTopVerticalPositionTolerance (300A,0051) DS
pub const TABLE_TOP_VERTICAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0051);
/// TableTopLongitudinalPositionTolerance (300A,0052) DS
pub const TABLE_TOP_LONGITUDINAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0052);
/// TableTopLateralPositionTolerance (300A,0053) DS
pub const TABLE_TOP_LATERAL_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0053);
/// RTPlanRelationship (300A,0055) CS
pub const RT_PLAN_RELATIONSHIP: Tag = Tag(0x300A, 0x0055);
/// FractionGroupSequence (300A,0070) SQ
pub const FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x0070);
/// FractionGroupNumber (300A,0071) IS
pub const FRACTION_GROUP_NUMBER: Tag = Tag(0x300A, 0x0071);
/// FractionGroupDescription (300A,0072) LO
pub const FRACTION_GROUP_DESCRIPTION: Tag = Tag(0x300A, 0x0072);
/// NumberOfFractionsPlanned (300A,0078) IS
pub const NUMBER_OF_FRACTIONS_PLANNED: Tag = Tag(0x300A, 0x0078);
/// NumberOfFractionPatternDigitsPerDay (300A,0079) IS
pub const NUMBER_OF_FRACTION_PATTERN_DIGITS_PER_DAY: Tag = Tag(0x300A, 0x0079);
/// RepeatFractionCycleLength (300A,007A) IS
pub const REPEAT_FRACTION_CYCLE_LENGTH: Tag = Tag(0x300A, 0x007A);
/// FractionPattern (300A,007B) LT
pub const FRACTION_PATTERN: Tag = Tag(0x300A, 0x007B);
/// NumberOfBeams (300A,0080) IS
pub const NUMBER_OF_BEAMS: Tag = Tag(0x300A, 0x0080);
/// BeamDoseSpecificationPoint (300A,0082) DS (retired)
pub const BEAM_DOSE_SPECIFICATION_POINT: Tag = Tag(0x300A, 0x0082);
/// ReferencedDoseReferenceUID (300A,0083) UI
pub const REFERENCED_DOSE_REFERENCE_UID: Tag = Tag(0x300A, 0x0083);
/// BeamDose (300A,0084) DS
pub const BEAM_DOSE: Tag = Tag(0x300A, 0x0084);
/// BeamMeterset (300A,0086) DS
pub const BEAM_METERSET: Tag = Tag(0x300A, 0x0086);
/// BeamDosePointDepth (300A,0088) FL (retired)
pub const BEAM_DOSE_POINT_DEPTH: Tag = Tag(0x300A, 0x0088);
/// BeamDosePointEquivalentDepth (300A,0089) FL (retired)
pub const BEAM_DOSE_POINT_EQUIVALENT_DEPTH: Tag = Tag(0x300A, 0x0089);
/// BeamDosePointSSD (300A,008A) FL (retired)
pub const BEAM_DOSE_POINT_SSD: Tag = Tag(0x300A, 0x008A);
/// BeamDoseMeaning (300A,008B) CS
pub const BEAM_DOSE_MEANING: Tag = Tag(0x300A, 0x008B);
/// BeamDoseVerificationControlPointSequence (300A,008C) SQ
pub const BEAM_DOSE_VERIFICATION_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x008C);
/// AverageBeamDosePointDepth (300A,008D) FL (retired)
pub const AVERAGE_BEAM_DOSE_POINT_DEPTH: Tag = Tag(0x300A, 0x008D);
/// AverageBeamDosePointEquivalentDepth (300A,008E) FL (retired)
pub const AVERAGE_BEAM_DOSE_POINT_EQUIVALENT_DEPTH: Tag = Tag(0x300A, 0x008E);
/// AverageBeamDosePointSSD (300A,008F) FL (retired)
pub const AVERAGE_BEAM_DOSE_POINT_SSD: Tag = Tag(0x300A, 0x008F);
/// BeamDoseType (300A,0090) CS
pub const BEAM_DOSE_TYPE: Tag = Tag(0x300A, 0x0090);
/// AlternateBeamDose (300A,0091) DS
pub const ALTERNATE_BEAM_DOSE: Tag = Tag(0x300A, 0x0091);
/// AlternateBeamDoseType (300A,0092) CS
pub const ALTERNATE_BEAM_DOSE_TYPE: Tag = Tag(0x300A, 0x0092);
/// DepthValueAveragingFlag (300A,0093) CS
pub const DEPTH_VALUE_AVERAGING_FLAG: Tag = Tag(0x300A, 0x0093);
/// BeamDosePointSourceToExternalContourDistance (300A,0094) DS
pub const BEAM_DOSE_POINT_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE: Tag = Tag(0x300A, 0x0094);
/// NumberOfBrachyApplicationSetups (300A,00A0) IS
pub const NUMBER_OF_BRACHY_APPLICATION_SETUPS: Tag = Tag(0x300A, 0x00A0);
/// BrachyApplicationSetupDoseSpecificationPoint (300A,00A2) DS
pub const BRACHY_APPLICATION_SETUP_DOSE_SPECIFICATION_POINT: Tag = Tag(0x300A, 0x00A2);
/// BrachyApplicationSetupDose (300A,00A4) DS
pub const BRACHY_APPLICATION_SETUP_DOSE: Tag = Tag(0x300A, 0x00A4);
/// BeamSequence (300A,00B0) SQ
pub const BEAM_SEQUENCE: Tag = Tag(0x300A, 0x00B0);
/// TreatmentMachineName (300A,00B2) SH
pub const TREATMENT_MACHINE_NAME: Tag = Tag(0x300A, 0x00B2);
/// PrimaryDosimeterUnit (300A,00B3) CS
pub const PRIMARY_DOSIMETER_UNIT: Tag = Tag(0x300A, 0x00B3);
/// SourceAxisDistance (300A,00B4) DS
pub const SOURCE_AXIS_DISTANCE: Tag = Tag(0x300A, 0x00B4);
/// BeamLimitingDeviceSequence (300A,00B6) SQ
pub const BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x00B6);
/// RTBeamLimitingDeviceType (300A,00B8) CS
pub const RT_BEAM_LIMITING_DEVICE_TYPE: Tag = Tag(0x300A, 0x00B8);
/// SourceToBeamLimitingDeviceDistance (300A,00BA) DS
pub const SOURCE_TO_BEAM_LIMITING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x00BA);
/// IsocenterToBeamLimitingDeviceDistance (300A,00BB) FL
pub const ISOCENTER_TO_BEAM_LIMITING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x00BB);
/// NumberOfLeafJawPairs (300A,00BC) IS
pub const NUMBER_OF_LEAF_JAW_PAIRS: Tag = Tag(0x300A, 0x00BC);
/// LeafPositionBoundaries (300A,00BE) DS
pub const LEAF_POSITION_BOUNDARIES: Tag = Tag(0x300A, 0x00BE);
/// BeamNumber (300A,00C0) IS
pub const BEAM_NUMBER: Tag = Tag(0x300A, 0x00C0);
/// BeamName (300A,00C2) LO
pub const BEAM_NAME: Tag = Tag(0x300A, 0x00C2);
/// BeamDescription (300A,00C3) ST
pub const BEAM_DESCRIPTION: Tag = Tag(0x300A, 0x00C3);
/// BeamType (300A,00C4) CS
pub const BEAM_TYPE: Tag = Tag(0x300A, 0x00C4);
/// BeamDeliveryDurationLimit (300A,00C5) FD
pub const BEAM_DELIVERY_DURATION_LIMIT: Tag = Tag(0x300A, 0x00C5);
/// RadiationType (300A,00C6) CS
pub const RADIATION_TYPE: Tag = Tag(0x300A, 0x00C6);
/// HighDoseTechniqueType (300A,00C7) CS
pub const HIGH_DOSE_TECHNIQUE_TYPE: Tag = Tag(0x300A, 0x00C7);
/// ReferenceImageNumber (300A,00C8) IS
pub const REFERENCE_IMAGE_NUMBER: Tag = Tag(0x300A, 0x00C8);
/// PlannedVerificationImageSequence (300A,00CA) SQ
pub const PLANNED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300A, 0x00CA);
/// ImagingDeviceSpecificAcquisitionParameters (300A,00CC) LO
pub const IMAGING_DEVICE_SPECIFIC_ACQUISITION_PARAMETERS: Tag = Tag(0x300A, 0x00CC);
/// TreatmentDeliveryType (300A,00CE) CS
pub const TREATMENT_DELIVERY_TYPE: Tag = Tag(0x300A, 0x00CE);
/// NumberOfWedges (300A,00D0) IS
pub const NUMBER_OF_WEDGES: Tag = Tag(0x300A, 0x00D0);
/// WedgeSequence (300A,00D1) SQ
pub const WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x00D1);
/// WedgeNumber (300A,00D2) IS
pub const WEDGE_NUMBER: Tag = Tag(0x300A, 0x00D2);
/// WedgeType (300A,00D3) CS
pub const WEDGE_TYPE: Tag = Tag(0x300A, 0x00D3);
/// WedgeID (300A,00D4) SH
pub const WEDGE_ID: Tag = Tag(0x300A, 0x00D4);
/// WedgeAngle (300A,00D5) IS
pub const WEDGE_ANGLE: Tag = Tag(0x300A, 0x00D5);
/// WedgeFactor (300A,00D6) DS
pub const WEDGE_FACTOR: Tag = Tag(0x300A, 0x00D6);
/// TotalWedgeTrayWaterEquivalentThickness (300A,00D7) FL
pub const TOTAL_WEDGE_TRAY_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x00D7);
/// WedgeOrientation (300A,00D8) DS
pub const WEDGE_ORIENTATION: Tag = Tag(0x300A, 0x00D8);
/// IsocenterToWedgeTrayDistance (300A,00D9) FL
pub const ISOCENTER_TO_WEDGE_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00D9);
/// SourceToWedgeTrayDistance (300A,00DA) DS
pub const SOURCE_TO_WEDGE_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00DA);
/// WedgeThinEdgePosition (300A,00DB) FL
pub const WEDGE_THIN_EDGE_POSITION: Tag = Tag(0x300A, 0x00DB);
/// BolusID (300A,00DC) SH
pub const BOLUS_ID: Tag = Tag(0x300A, 0x00DC);
/// BolusDescription (300A,00DD) ST
pub const BOLUS_DESCRIPTION: Tag = Tag(0x300A, 0x00DD);
/// EffectiveWedgeAngle (300A,00DE) DS
pub const EFFECTIVE_WEDGE_ANGLE: Tag = Tag(0x300A, 0x00DE);
/// NumberOfCompensators (300A,00E0) IS
pub const NUMBER_OF_COMPENSATORS: Tag = Tag(0x300A, 0x00E0);
/// MaterialID (300A,00E1) SH
pub const MATERIAL_ID: Tag = Tag(0x300A, 0x00E1);
/// TotalCompensatorTrayFactor (300A,00E2) DS
pub const TOTAL_COMPENSATOR_TRAY_FACTOR: Tag = Tag(0x300A, 0x00E2);
/// CompensatorSequence (300A,00E3) SQ
pub const COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x00E3);
/// CompensatorNumber (300A,00E4) IS
pub const COMPENSATOR_NUMBER: Tag = Tag(0x300A, 0x00E4);
/// CompensatorID (300A,00E5) SH
pub const COMPENSATOR_ID: Tag = Tag(0x300A, 0x00E5);
/// SourceToCompensatorTrayDistance (300A,00E6) DS
pub const SOURCE_TO_COMPENSATOR_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00E6);
/// CompensatorRows (300A,00E7) IS
pub const COMPENSATOR_ROWS: Tag = Tag(0x300A, 0x00E7);
/// CompensatorColumns (300A,00E8) IS
pub const COMPENSATOR_COLUMNS: Tag = Tag(0x300A, 0x00E8);
/// CompensatorPixelSpacing (300A,00E9) DS
pub const COMPENSATOR_PIXEL_SPACING: Tag = Tag(0x300A, 0x00E9);
/// CompensatorPosition (300A,00EA) DS
pub const COMPENSATOR_POSITION: Tag = Tag(0x300A, 0x00EA);
/// CompensatorTransmissionData (300A,00EB) DS
pub const COMPENSATOR_TRANSMISSION_DATA: Tag = Tag(0x300A, 0x00EB);
/// CompensatorThicknessData (300A,00EC) DS
pub const COMPENSATOR_THICKNESS_DATA: Tag = Tag(0x300A, 0x00EC);
/// NumberOfBoli (300A,00ED) IS
pub const NUMBER_OF_BOLI: Tag = Tag(0x300A, 0x00ED);
/// CompensatorType (300A,00EE) CS
pub const COMPENSATOR_TYPE: Tag = Tag(0x300A, 0x00EE);
/// CompensatorTrayID (300A,00EF) SH
pub const COMPENSATOR_TRAY_ID: Tag = Tag(0x300A, 0x00EF);
/// NumberOfBlocks (300A,00F0) IS
pub const NUMBER_OF_BLOCKS: Tag = Tag(0x300A, 0x00F0);
/// TotalBlockTrayFactor (300A,00F2) DS
pub const TOTAL_BLOCK_TRAY_FACTOR: Tag = Tag(0x300A, 0x00F2);
/// TotalBlockTrayWaterEquivalentThickness (300A,00F3) FL
pub const TOTAL_BLOCK_TRAY_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x00F3);
/// BlockSequence (300A,00F4) SQ
pub const BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x00F4);
/// BlockTrayID (300A,00F5) SH
pub const BLOCK_TRAY_ID: Tag = Tag(0x300A, 0x00F5);
/// SourceToBlockTrayDistance (300A,00F6) DS
pub const SOURCE_TO_BLOCK_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00F6);
/// IsocenterToBlockTrayDistance (300A,00F7) FL
pub const ISOCENTER_TO_BLOCK_TRAY_DISTANCE: Tag = Tag(0x300A, 0x00F7);
/// BlockType (300A,00F8) CS
pub const BLOCK_TYPE: Tag = Tag(0x300A, 0x00F8);
/// AccessoryCode (300A,00F9) LO
pub const ACCESSORY_CODE: Tag = Tag(0x300A, 0x00F9);
/// BlockDivergence (300A,00FA) CS
pub const BLOCK_DIVERGENCE: Tag = Tag(0x300A, 0x00FA);
/// BlockMountingPosition (300A,00FB) CS
pub const BLOCK_MOUNTING_POSITION: Tag = Tag(0x300A, 0x00FB);
/// BlockNumber (300A,00FC) IS
pub const BLOCK_NUMBER: Tag = Tag(0x300A, 0x00FC);
/// BlockName (300A,00FE) LO
pub const BLOCK_NAME: Tag = Tag(0x300A, 0x00FE);
/// BlockThickness (300A,0100) DS
pub const BLOCK_THICKNESS: Tag = Tag(0x300A, 0x0100);
/// BlockTransmission (300A,0102) DS
pub const BLOCK_TRANSMISSION: Tag = Tag(0x300A, 0x0102);
/// BlockNumberOfPoints (300A,0104) IS
pub const BLOCK_NUMBER_OF_POINTS: Tag = Tag(0x300A, 0x0104);
/// BlockData (300A,0106) DS
pub const BLOCK_DATA: Tag = Tag(0x300A, 0x0106);
/// ApplicatorSequence (300A,0107) SQ
pub const APPLICATOR_SEQUENCE: Tag = Tag(0x300A, 0x0107);
/// ApplicatorID (300A,0108) SH
pub const APPLICATOR_ID: Tag = Tag(0x300A, 0x0108);
/// ApplicatorType (300A,0109) CS
pub const APPLICATOR_TYPE: Tag = Tag(0x300A, 0x0109);
/// ApplicatorDescription (300A,010A) LO
pub const APPLICATOR_DESCRIPTION: Tag = Tag(0x300A, 0x010A);
/// CumulativeDoseReferenceCoefficient (300A,010C) DS
pub const CUMULATIVE_DOSE_REFERENCE_COEFFICIENT: Tag = Tag(0x300A, 0x010C);
/// FinalCumulativeMetersetWeight (300A,010E) DS
pub const FINAL_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300A, 0x010E);
/// NumberOfControlPoints (300A,0110) IS
pub const NUMBER_OF_CONTROL_POINTS: Tag = Tag(0x300A, 0x0110);
/// ControlPointSequence (300A,0111) SQ
pub const CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x0111);
/// ControlPointIndex (300A,0112) IS
pub const CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x0112);
/// NominalBeamEnergy (300A,0114) DS
pub const NOMINAL_BEAM_ENERGY: Tag = Tag(0x300A, 0x0114);
/// DoseRateSet (300A,0115) DS
pub const DOSE_RATE_SET: Tag = Tag(0x300A, 0x0115);
/// WedgePositionSequence (300A,0116) SQ
pub const WEDGE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x0116);
/// WedgePosition (300A,0118) CS
pub const WEDGE_POSITION: Tag = Tag(0x300A, 0x0118);
/// BeamLimitingDevicePositionSequence (300A,011A) SQ
pub const BEAM_LIMITING_DEVICE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x011A);
/// LeafJawPositions (300A,011C) DS
pub const LEAF_JAW_POSITIONS: Tag = Tag(0x300A, 0x011C);
/// GantryAngle (300A,011E) DS
pub const GANTRY_ANGLE: Tag = Tag(0x300A, 0x011E);
/// GantryRotationDirection (300A,011F) CS
pub const GANTRY_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x011F);
/// BeamLimitingDeviceAngle (300A,0120) DS
pub const BEAM_LIMITING_DEVICE_ANGLE: Tag = Tag(0x300A, 0x0120);
/// BeamLimitingDeviceRotationDirection (300A,0121) CS
pub const BEAM_LIMITING_DEVICE_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0121);
/// PatientSupportAngle (300A,0122) DS
pub const PATIENT_SUPPORT_ANGLE: Tag = Tag(0x300A, 0x0122);
/// PatientSupportRotationDirection (300A,0123) CS
pub const PATIENT_SUPPORT_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0123);
/// TableTopEccentricAxisDistance (300A,0124) DS
pub const TABLE_TOP_ECCENTRIC_AXIS_DISTANCE: Tag = Tag(0x300A, 0x0124);
/// TableTopEccentricAngle (300A,0125) DS
pub const TABLE_TOP_ECCENTRIC_ANGLE: Tag = Tag(0x300A, 0x0125);
/// TableTopEccentricRotationDirection (300A,0126) CS
pub const TABLE_TOP_ECCENTRIC_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0126);
/// TableTopVerticalPosition (300A,0128) DS
pub const TABLE_TOP_VERTICAL_POSITION: Tag = Tag(0x300A, 0x0128);
/// TableTopLongitudinalPosition (300A,0129) DS
pub const TABLE_TOP_LONGITUDINAL_POSITION: Tag = Tag(0x300A, 0x0129);
/// TableTopLateralPosition (300A,012A) DS
pub const TABLE_TOP_LATERAL_POSITION: Tag = Tag(0x300A, 0x012A);
/// IsocenterPosition (300A,012C) DS
pub const ISOCENTER_POSITION: Tag = Tag(0x300A, 0x012C);
/// SurfaceEntryPoint (300A,012E) DS
pub const SURFACE_ENTRY_POINT: Tag = Tag(0x300A, 0x012E);
/// SourceToSurfaceDistance (300A,0130) DS
pub const SOURCE_TO_SURFACE_DISTANCE: Tag = Tag(0x300A, 0x0130);
/// SourceToExternalContourDistance (300A,0131) FL
pub const SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE: Tag = Tag(0x300A, 0x0131);
/// ExternalContourEntryPoint (300A,0132) FL
pub const EXTERNAL_CONTOUR_ENTRY_POINT: Tag = Tag(0x300A, 0x0132);
/// CumulativeMetersetWeight (300A,0134) DS
pub const CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300A, 0x0134);
/// TableTopPitchAngle (300A,0140) FL
pub const TABLE_TOP_PITCH_ANGLE: Tag = Tag(0x300A, 0x0140);
/// TableTopPitchRotationDirection (300A,0142) CS
pub const TABLE_TOP_PITCH_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0142);
/// TableTopRollAngle (300A,0144) FL
pub const TABLE_TOP_ROLL_ANGLE: Tag = Tag(0x300A, 0x0144);
/// TableTopRollRotationDirection (300A,0146) CS
pub const TABLE_TOP_ROLL_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x0146);
/// HeadFixationAngle (300A,0148) FL
pub const HEAD_FIXATION_ANGLE: Tag = Tag(0x300A, 0x0148);
/// GantryPitchAngle (300A,014A) FL
pub const GANTRY_PITCH_ANGLE: Tag = Tag(0x300A, 0x014A);
/// GantryPitchRotationDirection (300A,014C) CS
pub const GANTRY_PITCH_ROTATION_DIRECTION: Tag = Tag(0x300A, 0x014C);
/// GantryPitchAngleTolerance (300A,014E) FL
pub const GANTRY_PITCH_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x014E);
/// FixationEye (300A,0150) CS
pub const FIXATION_EYE: Tag = Tag(0x300A, 0x0150);
/// ChairHeadFramePosition (300A,0151) DS
pub const CHAIR_HEAD_FRAME_POSITION: Tag = Tag(0x300A, 0x0151);
/// HeadFixationAngleTolerance (300A,0152) DS
pub const HEAD_FIXATION_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0152);
/// ChairHeadFramePositionTolerance (300A,0153) DS
pub const CHAIR_HEAD_FRAME_POSITION_TOLERANCE: Tag = Tag(0x300A, 0x0153);
/// FixationLightAzimuthalAngleTolerance (300A,0154) DS
pub const FIXATION_LIGHT_AZIMUTHAL_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0154);
/// FixationLightPolarAngleTolerance (300A,0155) DS
pub const FIXATION_LIGHT_POLAR_ANGLE_TOLERANCE: Tag = Tag(0x300A, 0x0155);
/// PatientSetupSequence (300A,0180) SQ
pub const PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0180);
/// PatientSetupNumber (300A,0182) IS
pub const PATIENT_SETUP_NUMBER: Tag = Tag(0x300A, 0x0182);
/// PatientSetupLabel (300A,0183) LO
pub const PATIENT_SETUP_LABEL: Tag = Tag(0x300A, 0x0183);
/// PatientAdditionalPosition (300A,0184) LO
pub const PATIENT_ADDITIONAL_POSITION: Tag = Tag(0x300A, 0x0184);
/// FixationDeviceSequence (300A,0190) SQ
pub const FIXATION_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0190);
/// FixationDeviceType (300A,0192) CS
pub const FIXATION_DEVICE_TYPE: Tag = Tag(0x300A, 0x0192);
/// FixationDeviceLabel (300A,0194) SH
pub const FIXATION_DEVICE_LABEL: Tag = Tag(0x300A, 0x0194);
/// FixationDeviceDescription (300A,0196) ST
pub const FIXATION_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x0196);
/// FixationDevicePosition (300A,0198) SH
pub const FIXATION_DEVICE_POSITION: Tag = Tag(0x300A, 0x0198);
/// FixationDevicePitchAngle (300A,0199) FL
pub const FIXATION_DEVICE_PITCH_ANGLE: Tag = Tag(0x300A, 0x0199);
/// FixationDeviceRollAngle (300A,019A) FL
pub const FIXATION_DEVICE_ROLL_ANGLE: Tag = Tag(0x300A, 0x019A);
/// ShieldingDeviceSequence (300A,01A0) SQ
pub const SHIELDING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01A0);
/// ShieldingDeviceType (300A,01A2) CS
pub const SHIELDING_DEVICE_TYPE: Tag = Tag(0x300A, 0x01A2);
/// ShieldingDeviceLabel (300A,01A4) SH
pub const SHIELDING_DEVICE_LABEL: Tag = Tag(0x300A, 0x01A4);
/// ShieldingDeviceDescription (300A,01A6) ST
pub const SHIELDING_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01A6);
/// ShieldingDevicePosition (300A,01A8) SH
pub const SHIELDING_DEVICE_POSITION: Tag = Tag(0x300A, 0x01A8);
/// SetupTechnique (300A,01B0) CS
pub const SETUP_TECHNIQUE: Tag = Tag(0x300A, 0x01B0);
/// SetupTechniqueDescription (300A,01B2) ST
pub const SETUP_TECHNIQUE_DESCRIPTION: Tag = Tag(0x300A, 0x01B2);
/// SetupDeviceSequence (300A,01B4) SQ
pub const SETUP_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x01B4);
/// SetupDeviceType (300A,01B6) CS
pub const SETUP_DEVICE_TYPE: Tag = Tag(0x300A, 0x01B6);
/// SetupDeviceLabel (300A,01B8) SH
pub const SETUP_DEVICE_LABEL: Tag = Tag(0x300A, 0x01B8);
/// SetupDeviceDescription (300A,01BA) ST
pub const SETUP_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x01BA);
/// SetupDeviceParameter (300A,01BC) DS
pub const SETUP_DEVICE_PARAMETER: Tag = Tag(0x300A, 0x01BC);
/// SetupReferenceDescription (300A,01D0) ST
pub const SETUP_REFERENCE_DESCRIPTION: Tag = Tag(0x300A, 0x01D0);
/// TableTopVerticalSetupDisplacement (300A,01D2) DS
pub const TABLE_TOP_VERTICAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D2);
/// TableTopLongitudinalSetupDisplacement (300A,01D4) DS
pub const TABLE_TOP_LONGITUDINAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D4);
/// TableTopLateralSetupDisplacement (300A,01D6) DS
pub const TABLE_TOP_LATERAL_SETUP_DISPLACEMENT: Tag = Tag(0x300A, 0x01D6);
/// BrachyTreatmentTechnique (300A,0200) CS
pub const BRACHY_TREATMENT_TECHNIQUE: Tag = Tag(0x300A, 0x0200);
/// BrachyTreatmentType (300A,0202) CS
pub const BRACHY_TREATMENT_TYPE: Tag = Tag(0x300A, 0x0202);
/// TreatmentMachineSequence (300A,0206) SQ
pub const TREATMENT_MACHINE_SEQUENCE: Tag = Tag(0x300A, 0x0206);
/// SourceSequence (300A,0210) SQ
pub const SOURCE_SEQUENCE: Tag = Tag(0x300A, 0x0210);
/// SourceNumber (300A,0212) IS
pub const SOURCE_NUMBER: Tag = Tag(0x300A, 0x0212);
/// SourceType (300A,0214) CS
pub const SOURCE_TYPE: Tag = Tag(0x300A, 0x0214);
/// SourceManufacturer (300A,0216) LO
pub const SOURCE_MANUFACTURER: Tag = Tag(0x300A, 0x0216);
/// ActiveSourceDiameter (300A,0218) DS
pub const ACTIVE_SOURCE_DIAMETER: Tag = Tag(0x300A, 0x0218);
/// ActiveSourceLength (300A,021A) DS
pub const ACTIVE_SOURCE_LENGTH: Tag = Tag(0x300A, 0x021A);
/// SourceModelID (300A,021B) SH
pub const SOURCE_MODEL_ID: Tag = Tag(0x300A, 0x021B);
/// SourceDescription (300A,021C) LO
pub const SOURCE_DESCRIPTION: Tag = Tag(0x300A, 0x021C);
/// SourceEncapsulationNominalThickness (300A,0222) DS
pub const SOURCE_ENCAPSULATION_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x0222);
/// SourceEncapsulationNominalTransmission (300A,0224) DS
pub const SOURCE_ENCAPSULATION_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x0224);
/// SourceIsotopeName (300A,0226) LO
pub const SOURCE_ISOTOPE_NAME: Tag = Tag(0x300A, 0x0226);
/// SourceIsotopeHalfLife (300A,0228) DS
pub const SOURCE_ISOTOPE_HALF_LIFE: Tag = Tag(0x300A, 0x0228);
/// SourceStrengthUnits (300A,0229) CS
pub const SOURCE_STRENGTH_UNITS: Tag = Tag(0x300A, 0x0229);
/// ReferenceAirKermaRate (300A,022A) DS
pub const REFERENCE_AIR_KERMA_RATE: Tag = Tag(0x300A, 0x022A);
/// SourceStrength (300A,022B) DS
pub const SOURCE_STRENGTH: Tag = Tag(0x300A, 0x022B);
/// SourceStrengthReferenceDate (300A,022C) DA
pub const SOURCE_STRENGTH_REFERENCE_DATE: Tag = Tag(0x300A, 0x022C);
/// SourceStrengthReferenceTime (300A,022E) TM
pub const SOURCE_STRENGTH_REFERENCE_TIME: Tag = Tag(0x300A, 0x022E);
/// ApplicationSetupSequence (300A,0230) SQ
pub const APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0230);
/// ApplicationSetupType (300A,0232) CS
pub const APPLICATION_SETUP_TYPE: Tag = Tag(0x300A, 0x0232);
/// ApplicationSetupNumber (300A,0234) IS
pub const APPLICATION_SETUP_NUMBER: Tag = Tag(0x300A, 0x0234);
/// ApplicationSetupName (300A,0236) LO
pub const APPLICATION_SETUP_NAME: Tag = Tag(0x300A, 0x0236);
/// ApplicationSetupManufacturer (300A,0238) LO
pub const APPLICATION_SETUP_MANUFACTURER: Tag = Tag(0x300A, 0x0238);
/// TemplateNumber (300A,0240) IS
pub const TEMPLATE_NUMBER: Tag = Tag(0x300A, 0x0240);
/// TemplateType (300A,0242) SH
pub const TEMPLATE_TYPE: Tag = Tag(0x300A, 0x0242);
/// TemplateName (300A,0244) LO
pub const TEMPLATE_NAME: Tag = Tag(0x300A, 0x0244);
/// TotalReferenceAirKerma (300A,0250) DS
pub const TOTAL_REFERENCE_AIR_KERMA: Tag = Tag(0x300A, 0x0250);
/// BrachyAccessoryDeviceSequence (300A,0260) SQ
pub const BRACHY_ACCESSORY_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0260);
/// BrachyAccessoryDeviceNumber (300A,0262) IS
pub const BRACHY_ACCESSORY_DEVICE_NUMBER: Tag = Tag(0x300A, 0x0262);
/// BrachyAccessoryDeviceID (300A,0263) SH
pub const BRACHY_ACCESSORY_DEVICE_ID: Tag = Tag(0x300A, 0x0263);
/// BrachyAccessoryDeviceType (300A,0264) CS
pub const BRACHY_ACCESSORY_DEVICE_TYPE: Tag = Tag(0x300A, 0x0264);
/// BrachyAccessoryDeviceName (300A,0266) LO
pub const BRACHY_ACCESSORY_DEVICE_NAME: Tag = Tag(0x300A, 0x0266);
/// BrachyAccessoryDeviceNominalThickness (300A,026A) DS
pub const BRACHY_ACCESSORY_DEVICE_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x026A);
/// BrachyAccessoryDeviceNominalTransmission (300A,026C) DS
pub const BRACHY_ACCESSORY_DEVICE_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x026C);
/// ChannelEffectiveLength (300A,0271) DS
pub const CHANNEL_EFFECTIVE_LENGTH: Tag = Tag(0x300A, 0x0271);
/// ChannelInnerLength (300A,0272) DS
pub const CHANNEL_INNER_LENGTH: Tag = Tag(0x300A, 0x0272);
/// AfterloaderChannelID (300A,0273) SH
pub const AFTERLOADER_CHANNEL_ID: Tag = Tag(0x300A, 0x0273);
/// SourceApplicatorTipLength (300A,0274) DS
pub const SOURCE_APPLICATOR_TIP_LENGTH: Tag = Tag(0x300A, 0x0274);
/// ChannelSequence (300A,0280) SQ
pub const CHANNEL_SEQUENCE: Tag = Tag(0x300A, 0x0280);
/// ChannelNumber (300A,0282) IS
pub const CHANNEL_NUMBER: Tag = Tag(0x300A, 0x0282);
/// ChannelLength (300A,0284) DS
pub const CHANNEL_LENGTH: Tag = Tag(0x300A, 0x0284);
/// ChannelTotalTime (300A,0286) DS
pub const CHANNEL_TOTAL_TIME: Tag = Tag(0x300A, 0x0286);
/// SourceMovementType (300A,0288) CS
pub const SOURCE_MOVEMENT_TYPE: Tag = Tag(0x300A, 0x0288);
/// NumberOfPulses (300A,028A) IS
pub const NUMBER_OF_PULSES: Tag = Tag(0x300A, 0x028A);
/// PulseRepetitionInterval (300A,028C) DS
pub const PULSE_REPETITION_INTERVAL: Tag = Tag(0x300A, 0x028C);
/// SourceApplicatorNumber (300A,0290) IS
pub const SOURCE_APPLICATOR_NUMBER: Tag = Tag(0x300A, 0x0290);
/// SourceApplicatorID (300A,0291) SH
pub const SOURCE_APPLICATOR_ID: Tag = Tag(0x300A, 0x0291);
/// SourceApplicatorType (300A,0292) CS
pub const SOURCE_APPLICATOR_TYPE: Tag = Tag(0x300A, 0x0292);
/// SourceApplicatorName (300A,0294) LO
pub const SOURCE_APPLICATOR_NAME: Tag = Tag(0x300A, 0x0294);
/// SourceApplicatorLength (300A,0296) DS
pub const SOURCE_APPLICATOR_LENGTH: Tag = Tag(0x300A, 0x0296);
/// SourceApplicatorManufacturer (300A,0298) LO
pub const SOURCE_APPLICATOR_MANUFACTURER: Tag = Tag(0x300A, 0x0298);
/// SourceApplicatorWallNominalThickness (300A,029C) DS
pub const SOURCE_APPLICATOR_WALL_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x029C);
/// SourceApplicatorWallNominalTransmission (300A,029E) DS
pub const SOURCE_APPLICATOR_WALL_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x029E);
/// SourceApplicatorStepSize (300A,02A0) DS
pub const SOURCE_APPLICATOR_STEP_SIZE: Tag = Tag(0x300A, 0x02A0);
/// ApplicatorShapeReferencedROINumber (300A,02A1) IS
pub const APPLICATOR_SHAPE_REFERENCED_ROI_NUMBER: Tag = Tag(0x300A, 0x02A1);
/// TransferTubeNumber (300A,02A2) IS
pub const TRANSFER_TUBE_NUMBER: Tag = Tag(0x300A, 0x02A2);
/// TransferTubeLength (300A,02A4) DS
pub const TRANSFER_TUBE_LENGTH: Tag = Tag(0x300A, 0x02A4);
/// ChannelShieldSequence (300A,02B0) SQ
pub const CHANNEL_SHIELD_SEQUENCE: Tag = Tag(0x300A, 0x02B0);
/// ChannelShieldNumber (300A,02B2) IS
pub const CHANNEL_SHIELD_NUMBER: Tag = Tag(0x300A, 0x02B2);
/// ChannelShieldID (300A,02B3) SH
pub const CHANNEL_SHIELD_ID: Tag = Tag(0x300A, 0x02B3);
/// ChannelShieldName (300A,02B4) LO
pub const CHANNEL_SHIELD_NAME: Tag = Tag(0x300A, 0x02B4);
/// ChannelShieldNominalThickness (300A,02B8) DS
pub const CHANNEL_SHIELD_NOMINAL_THICKNESS: Tag = Tag(0x300A, 0x02B8);
/// ChannelShieldNominalTransmission (300A,02BA) DS
pub const CHANNEL_SHIELD_NOMINAL_TRANSMISSION: Tag = Tag(0x300A, 0x02BA);
/// FinalCumulativeTimeWeight (300A,02C8) DS
pub const FINAL_CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x300A, 0x02C8);
/// BrachyControlPointSequence (300A,02D0) SQ
pub const BRACHY_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x02D0);
/// ControlPointRelativePosition (300A,02D2) DS
pub const CONTROL_POINT_RELATIVE_POSITION: Tag = Tag(0x300A, 0x02D2);
/// ControlPoint3DPosition (300A,02D4) DS
pub const CONTROL_POINT3_D_POSITION: Tag = Tag(0x300A, 0x02D4);
/// CumulativeTimeWeight (300A,02D6) DS
pub const CUMULATIVE_TIME_WEIGHT: Tag = Tag(0x300A, 0x02D6);
/// CompensatorDivergence (300A,02E0) CS
pub const COMPENSATOR_DIVERGENCE: Tag = Tag(0x300A, 0x02E0);
/// CompensatorMountingPosition (300A,02E1) CS
pub const COMPENSATOR_MOUNTING_POSITION: Tag = Tag(0x300A, 0x02E1);
/// SourceToCompensatorDistance (300A,02E2) DS
pub const SOURCE_TO_COMPENSATOR_DISTANCE: Tag = Tag(0x300A, 0x02E2);
/// TotalCompensatorTrayWaterEquivalentThickness (300A,02E3) FL
pub const TOTAL_COMPENSATOR_TRAY_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x02E3);
/// IsocenterToCompensatorTrayDistance (300A,02E4) FL
pub const ISOCENTER_TO_COMPENSATOR_TRAY_DISTANCE: Tag = Tag(0x300A, 0x02E4);
/// CompensatorColumnOffset (300A,02E5) FL
pub const COMPENSATOR_COLUMN_OFFSET: Tag = Tag(0x300A, 0x02E5);
/// IsocenterToCompensatorDistances (300A,02E6) FL
pub const ISOCENTER_TO_COMPENSATOR_DISTANCES: Tag = Tag(0x300A, 0x02E6);
/// CompensatorRelativeStoppingPowerRatio (300A,02E7) FL
pub const COMPENSATOR_RELATIVE_STOPPING_POWER_RATIO: Tag = Tag(0x300A, 0x02E7);
/// CompensatorMillingToolDiameter (300A,02E8) FL
pub const COMPENSATOR_MILLING_TOOL_DIAMETER: Tag = Tag(0x300A, 0x02E8);
/// IonRangeCompensatorSequence (300A,02EA) SQ
pub const ION_RANGE_COMPENSATOR_SEQUENCE: Tag = Tag(0x300A, 0x02EA);
/// CompensatorDescription (300A,02EB) LT
pub const COMPENSATOR_DESCRIPTION: Tag = Tag(0x300A, 0x02EB);
/// RadiationMassNumber (300A,0302) IS
pub const RADIATION_MASS_NUMBER: Tag = Tag(0x300A, 0x0302);
/// RadiationAtomicNumber (300A,0304) IS
pub const RADIATION_ATOMIC_NUMBER: Tag = Tag(0x300A, 0x0304);
/// RadiationChargeState (300A,0306) SS
pub const RADIATION_CHARGE_STATE: Tag = Tag(0x300A, 0x0306);
/// ScanMode (300A,0308) CS
pub const SCAN_MODE: Tag = Tag(0x300A, 0x0308);
/// ModulatedScanModeType (300A,0309) CS
pub const MODULATED_SCAN_MODE_TYPE: Tag = Tag(0x300A, 0x0309);
/// VirtualSourceAxisDistances (300A,030A) FL
pub const VIRTUAL_SOURCE_AXIS_DISTANCES: Tag = Tag(0x300A, 0x030A);
/// SnoutSequence (300A,030C) SQ
pub const SNOUT_SEQUENCE: Tag = Tag(0x300A, 0x030C);
/// SnoutPosition (300A,030D) FL
pub const SNOUT_POSITION: Tag = Tag(0x300A, 0x030D);
/// SnoutID (300A,030F) SH
pub const SNOUT_ID: Tag = Tag(0x300A, 0x030F);
/// NumberOfRangeShifters (300A,0312) IS
pub const NUMBER_OF_RANGE_SHIFTERS: Tag = Tag(0x300A, 0x0312);
/// RangeShifterSequence (300A,0314) SQ
pub const RANGE_SHIFTER_SEQUENCE: Tag = Tag(0x300A, 0x0314);
/// RangeShifterNumber (300A,0316) IS
pub const RANGE_SHIFTER_NUMBER: Tag = Tag(0x300A, 0x0316);
/// RangeShifterID (300A,0318) SH
pub const RANGE_SHIFTER_ID: Tag = Tag(0x300A, 0x0318);
/// RangeShifterType (300A,0320) CS
pub const RANGE_SHIFTER_TYPE: Tag = Tag(0x300A, 0x0320);
/// RangeShifterDescription (300A,0322) LO
pub const RANGE_SHIFTER_DESCRIPTION: Tag = Tag(0x300A, 0x0322);
/// NumberOfLateralSpreadingDevices (300A,0330) IS
pub const NUMBER_OF_LATERAL_SPREADING_DEVICES: Tag = Tag(0x300A, 0x0330);
/// LateralSpreadingDeviceSequence (300A,0332) SQ
pub const LATERAL_SPREADING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x0332);
/// LateralSpreadingDeviceNumber (300A,0334) IS
pub const LATERAL_SPREADING_DEVICE_NUMBER: Tag = Tag(0x300A, 0x0334);
/// LateralSpreadingDeviceID (300A,0336) SH
pub const LATERAL_SPREADING_DEVICE_ID: Tag = Tag(0x300A, 0x0336);
/// LateralSpreadingDeviceType (300A,0338) CS
pub const LATERAL_SPREADING_DEVICE_TYPE: Tag = Tag(0x300A, 0x0338);
/// LateralSpreadingDeviceDescription (300A,033A) LO
pub const LATERAL_SPREADING_DEVICE_DESCRIPTION: Tag = Tag(0x300A, 0x033A);
/// LateralSpreadingDeviceWaterEquivalentThickness (300A,033C) FL
pub const LATERAL_SPREADING_DEVICE_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x033C);
/// NumberOfRangeModulators (300A,0340) IS
pub const NUMBER_OF_RANGE_MODULATORS: Tag = Tag(0x300A, 0x0340);
/// RangeModulatorSequence (300A,0342) SQ
pub const RANGE_MODULATOR_SEQUENCE: Tag = Tag(0x300A, 0x0342);
/// RangeModulatorNumber (300A,0344) IS
pub const RANGE_MODULATOR_NUMBER: Tag = Tag(0x300A, 0x0344);
/// RangeModulatorID (300A,0346) SH
pub const RANGE_MODULATOR_ID: Tag = Tag(0x300A, 0x0346);
/// RangeModulatorType (300A,0348) CS
pub const RANGE_MODULATOR_TYPE: Tag = Tag(0x300A, 0x0348);
/// RangeModulatorDescription (300A,034A) LO
pub const RANGE_MODULATOR_DESCRIPTION: Tag = Tag(0x300A, 0x034A);
/// BeamCurrentModulationID (300A,034C) SH
pub const BEAM_CURRENT_MODULATION_ID: Tag = Tag(0x300A, 0x034C);
/// PatientSupportType (300A,0350) CS
pub const PATIENT_SUPPORT_TYPE: Tag = Tag(0x300A, 0x0350);
/// PatientSupportID (300A,0352) SH
pub const PATIENT_SUPPORT_ID: Tag = Tag(0x300A, 0x0352);
/// PatientSupportAccessoryCode (300A,0354) LO
pub const PATIENT_SUPPORT_ACCESSORY_CODE: Tag = Tag(0x300A, 0x0354);
/// TrayAccessoryCode (300A,0355) LO
pub const TRAY_ACCESSORY_CODE: Tag = Tag(0x300A, 0x0355);
/// FixationLightAzimuthalAngle (300A,0356) FL
pub const FIXATION_LIGHT_AZIMUTHAL_ANGLE: Tag = Tag(0x300A, 0x0356);
/// FixationLightPolarAngle (300A,0358) FL
pub const FIXATION_LIGHT_POLAR_ANGLE: Tag = Tag(0x300A, 0x0358);
/// MetersetRate (300A,035A) FL
pub const METERSET_RATE: Tag = Tag(0x300A, 0x035A);
/// RangeShifterSettingsSequence (300A,0360) SQ
pub const RANGE_SHIFTER_SETTINGS_SEQUENCE: Tag = Tag(0x300A, 0x0360);
/// RangeShifterSetting (300A,0362) LO
pub const RANGE_SHIFTER_SETTING: Tag = Tag(0x300A, 0x0362);
/// IsocenterToRangeShifterDistance (300A,0364) FL
pub const ISOCENTER_TO_RANGE_SHIFTER_DISTANCE: Tag = Tag(0x300A, 0x0364);
/// RangeShifterWaterEquivalentThickness (300A,0366) FL
pub const RANGE_SHIFTER_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x0366);
/// LateralSpreadingDeviceSettingsSequence (300A,0370) SQ
pub const LATERAL_SPREADING_DEVICE_SETTINGS_SEQUENCE: Tag = Tag(0x300A, 0x0370);
/// LateralSpreadingDeviceSetting (300A,0372) LO
pub const LATERAL_SPREADING_DEVICE_SETTING: Tag = Tag(0x300A, 0x0372);
/// IsocenterToLateralSpreadingDeviceDistance (300A,0374) FL
pub const ISOCENTER_TO_LATERAL_SPREADING_DEVICE_DISTANCE: Tag = Tag(0x300A, 0x0374);
/// RangeModulatorSettingsSequence (300A,0380) SQ
pub const RANGE_MODULATOR_SETTINGS_SEQUENCE: Tag = Tag(0x300A, 0x0380);
/// RangeModulatorGatingStartValue (300A,0382) FL
pub const RANGE_MODULATOR_GATING_START_VALUE: Tag = Tag(0x300A, 0x0382);
/// RangeModulatorGatingStopValue (300A,0384) FL
pub const RANGE_MODULATOR_GATING_STOP_VALUE: Tag = Tag(0x300A, 0x0384);
/// RangeModulatorGatingStartWaterEquivalentThickness (300A,0386) FL
pub const RANGE_MODULATOR_GATING_START_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x0386);
/// RangeModulatorGatingStopWaterEquivalentThickness (300A,0388) FL
pub const RANGE_MODULATOR_GATING_STOP_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x0388);
/// IsocenterToRangeModulatorDistance (300A,038A) FL
pub const ISOCENTER_TO_RANGE_MODULATOR_DISTANCE: Tag = Tag(0x300A, 0x038A);
/// ScanSpotTuneID (300A,0390) SH
pub const SCAN_SPOT_TUNE_ID: Tag = Tag(0x300A, 0x0390);
/// ScanSpotPrescribedIndices (300A,0391) IS
pub const SCAN_SPOT_PRESCRIBED_INDICES: Tag = Tag(0x300A, 0x0391);
/// NumberOfScanSpotPositions (300A,0392) IS
pub const NUMBER_OF_SCAN_SPOT_POSITIONS: Tag = Tag(0x300A, 0x0392);
/// ScanSpotReordered (300A,0393) CS
pub const SCAN_SPOT_REORDERED: Tag = Tag(0x300A, 0x0393);
/// ScanSpotPositionMap (300A,0394) FL
pub const SCAN_SPOT_POSITION_MAP: Tag = Tag(0x300A, 0x0394);
/// ScanSpotReorderingAllowed (300A,0395) CS
pub const SCAN_SPOT_REORDERING_ALLOWED: Tag = Tag(0x300A, 0x0395);
/// ScanSpotMetersetWeights (300A,0396) FL
pub const SCAN_SPOT_METERSET_WEIGHTS: Tag = Tag(0x300A, 0x0396);
/// ScanningSpotSize (300A,0398) FL
pub const SCANNING_SPOT_SIZE: Tag = Tag(0x300A, 0x0398);
/// NumberOfPaintings (300A,039A) IS
pub const NUMBER_OF_PAINTINGS: Tag = Tag(0x300A, 0x039A);
/// IonToleranceTableSequence (300A,03A0) SQ
pub const ION_TOLERANCE_TABLE_SEQUENCE: Tag = Tag(0x300A, 0x03A0);
/// IonBeamSequence (300A,03A2) SQ
pub const ION_BEAM_SEQUENCE: Tag = Tag(0x300A, 0x03A2);
/// IonBeamLimitingDeviceSequence (300A,03A4) SQ
pub const ION_BEAM_LIMITING_DEVICE_SEQUENCE: Tag = Tag(0x300A, 0x03A4);
/// IonBlockSequence (300A,03A6) SQ
pub const ION_BLOCK_SEQUENCE: Tag = Tag(0x300A, 0x03A6);
/// IonControlPointSequence (300A,03A8) SQ
pub const ION_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x03A8);
/// IonWedgeSequence (300A,03AA) SQ
pub const ION_WEDGE_SEQUENCE: Tag = Tag(0x300A, 0x03AA);
/// IonWedgePositionSequence (300A,03AC) SQ
pub const ION_WEDGE_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x03AC);
/// ReferencedSetupImageSequence (300A,0401) SQ
pub const REFERENCED_SETUP_IMAGE_SEQUENCE: Tag = Tag(0x300A, 0x0401);
/// SetupImageComment (300A,0402) ST
pub const SETUP_IMAGE_COMMENT: Tag = Tag(0x300A, 0x0402);
/// MotionSynchronizationSequence (300A,0410) SQ
pub const MOTION_SYNCHRONIZATION_SEQUENCE: Tag = Tag(0x300A, 0x0410);
/// ControlPointOrientation (300A,0412) FL
pub const CONTROL_POINT_ORIENTATION: Tag = Tag(0x300A, 0x0412);
/// GeneralAccessorySequence (300A,0420) SQ
pub const GENERAL_ACCESSORY_SEQUENCE: Tag = Tag(0x300A, 0x0420);
/// GeneralAccessoryID (300A,0421) SH
pub const GENERAL_ACCESSORY_ID: Tag = Tag(0x300A, 0x0421);
/// GeneralAccessoryDescription (300A,0422) ST
pub const GENERAL_ACCESSORY_DESCRIPTION: Tag = Tag(0x300A, 0x0422);
/// GeneralAccessoryType (300A,0423) CS
pub const GENERAL_ACCESSORY_TYPE: Tag = Tag(0x300A, 0x0423);
/// GeneralAccessoryNumber (300A,0424) IS
pub const GENERAL_ACCESSORY_NUMBER: Tag = Tag(0x300A, 0x0424);
/// SourceToGeneralAccessoryDistance (300A,0425) FL
pub const SOURCE_TO_GENERAL_ACCESSORY_DISTANCE: Tag = Tag(0x300A, 0x0425);
/// IsocenterToGeneralAccessoryDistance (300A,0426) DS
pub const ISOCENTER_TO_GENERAL_ACCESSORY_DISTANCE: Tag = Tag(0x300A, 0x0426);
/// ApplicatorGeometrySequence (300A,0431) SQ
pub const APPLICATOR_GEOMETRY_SEQUENCE: Tag = Tag(0x300A, 0x0431);
/// ApplicatorApertureShape (300A,0432) CS
pub const APPLICATOR_APERTURE_SHAPE: Tag = Tag(0x300A, 0x0432);
/// ApplicatorOpening (300A,0433) FL
pub const APPLICATOR_OPENING: Tag = Tag(0x300A, 0x0433);
/// ApplicatorOpeningX (300A,0434) FL
pub const APPLICATOR_OPENING_X: Tag = Tag(0x300A, 0x0434);
/// ApplicatorOpeningY (300A,0435) FL
pub const APPLICATOR_OPENING_Y: Tag = Tag(0x300A, 0x0435);
/// SourceToApplicatorMountingPositionDistance (300A,0436) FL
pub const SOURCE_TO_APPLICATOR_MOUNTING_POSITION_DISTANCE: Tag = Tag(0x300A, 0x0436);
/// NumberOfBlockSlabItems (300A,0440) IS
pub const NUMBER_OF_BLOCK_SLAB_ITEMS: Tag = Tag(0x300A, 0x0440);
/// BlockSlabSequence (300A,0441) SQ
pub const BLOCK_SLAB_SEQUENCE: Tag = Tag(0x300A, 0x0441);
/// BlockSlabThickness (300A,0442) DS
pub const BLOCK_SLAB_THICKNESS: Tag = Tag(0x300A, 0x0442);
/// BlockSlabNumber (300A,0443) US
pub const BLOCK_SLAB_NUMBER: Tag = Tag(0x300A, 0x0443);
/// DeviceMotionControlSequence (300A,0450) SQ
pub const DEVICE_MOTION_CONTROL_SEQUENCE: Tag = Tag(0x300A, 0x0450);
/// DeviceMotionExecutionMode (300A,0451) CS
pub const DEVICE_MOTION_EXECUTION_MODE: Tag = Tag(0x300A, 0x0451);
/// DeviceMotionObservationMode (300A,0452) CS
pub const DEVICE_MOTION_OBSERVATION_MODE: Tag = Tag(0x300A, 0x0452);
/// DeviceMotionParameterCodeSequence (300A,0453) SQ
pub const DEVICE_MOTION_PARAMETER_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0453);
/// DistalDepthFraction (300A,0501) FL
pub const DISTAL_DEPTH_FRACTION: Tag = Tag(0x300A, 0x0501);
/// DistalDepth (300A,0502) FL
pub const DISTAL_DEPTH: Tag = Tag(0x300A, 0x0502);
/// NominalRangeModulationFractions (300A,0503) FL
pub const NOMINAL_RANGE_MODULATION_FRACTIONS: Tag = Tag(0x300A, 0x0503);
/// NominalRangeModulatedRegionDepths (300A,0504) FL
pub const NOMINAL_RANGE_MODULATED_REGION_DEPTHS: Tag = Tag(0x300A, 0x0504);
/// DepthDoseParametersSequence (300A,0505) SQ
pub const DEPTH_DOSE_PARAMETERS_SEQUENCE: Tag = Tag(0x300A, 0x0505);
/// DeliveredDepthDoseParametersSequence (300A,0506) SQ
pub const DELIVERED_DEPTH_DOSE_PARAMETERS_SEQUENCE: Tag = Tag(0x300A, 0x0506);
/// DeliveredDistalDepthFraction (300A,0507) FL
pub const DELIVERED_DISTAL_DEPTH_FRACTION: Tag = Tag(0x300A, 0x0507);
/// DeliveredDistalDepth (300A,0508) FL
pub const DELIVERED_DISTAL_DEPTH: Tag = Tag(0x300A, 0x0508);
/// DeliveredNominalRangeModulationFractions (300A,0509) FL
pub const DELIVERED_NOMINAL_RANGE_MODULATION_FRACTIONS: Tag = Tag(0x300A, 0x0509);
/// DeliveredNominalRangeModulatedRegionDepths (300A,0510) FL
pub const DELIVERED_NOMINAL_RANGE_MODULATED_REGION_DEPTHS: Tag = Tag(0x300A, 0x0510);
/// DeliveredReferenceDoseDefinition (300A,0511) CS
pub const DELIVERED_REFERENCE_DOSE_DEFINITION: Tag = Tag(0x300A, 0x0511);
/// ReferenceDoseDefinition (300A,0512) CS
pub const REFERENCE_DOSE_DEFINITION: Tag = Tag(0x300A, 0x0512);
/// RTControlPointIndex (300A,0600) US
pub const RT_CONTROL_POINT_INDEX: Tag = Tag(0x300A, 0x0600);
/// RadiationGenerationModeIndex (300A,0601) US
pub const RADIATION_GENERATION_MODE_INDEX: Tag = Tag(0x300A, 0x0601);
/// ReferencedDefinedDeviceIndex (300A,0602) US
pub const REFERENCED_DEFINED_DEVICE_INDEX: Tag = Tag(0x300A, 0x0602);
/// RadiationDoseIdentificationIndex (300A,0603) US
pub const RADIATION_DOSE_IDENTIFICATION_INDEX: Tag = Tag(0x300A, 0x0603);
/// NumberOfRTControlPoints (300A,0604) US
pub const NUMBER_OF_RT_CONTROL_POINTS: Tag = Tag(0x300A, 0x0604);
/// ReferencedRadiationGenerationModeIndex (300A,0605) US
pub const REFERENCED_RADIATION_GENERATION_MODE_INDEX: Tag = Tag(0x300A, 0x0605);
/// TreatmentPositionIndex (300A,0606) US
pub const TREATMENT_POSITION_INDEX: Tag = Tag(0x300A, 0x0606);
/// ReferencedDeviceIndex (300A,0607) US
pub const REFERENCED_DEVICE_INDEX: Tag = Tag(0x300A, 0x0607);
/// TreatmentPositionGroupLabel (300A,0608) LO
pub const TREATMENT_POSITION_GROUP_LABEL: Tag = Tag(0x300A, 0x0608);
/// TreatmentPositionGroupUID (300A,0609) UI
pub const TREATMENT_POSITION_GROUP_UID: Tag = Tag(0x300A, 0x0609);
/// TreatmentPositionGroupSequence (300A,060A) SQ
pub const TREATMENT_POSITION_GROUP_SEQUENCE: Tag = Tag(0x300A, 0x060A);
/// ReferencedTreatmentPositionIndex (300A,060B) US
pub const REFERENCED_TREATMENT_POSITION_INDEX: Tag = Tag(0x300A, 0x060B);
/// ReferencedRadiationDoseIdentificationIndex (300A,060C) US
pub const REFERENCED_RADIATION_DOSE_IDENTIFICATION_INDEX: Tag = Tag(0x300A, 0x060C);
/// RTAccessoryHolderWaterEquivalentThickness (300A,060D) FD
pub const RT_ACCESSORY_HOLDER_WATER_EQUIVALENT_THICKNESS: Tag = Tag(0x300A, 0x060D);
/// ReferencedRTAccessoryHolderDeviceIndex (300A,060E) US
pub const REFERENCED_RT_ACCESSORY_HOLDER_DEVICE_INDEX: Tag = Tag(0x300A, 0x060E);
/// RTAccessoryHolderSlotExistenceFlag (300A,060F) CS
pub const RT_ACCESSORY_HOLDER_SLOT_EXISTENCE_FLAG: Tag = Tag(0x300A, 0x060F);
/// RTAccessoryHolderSlotSequence (300A,0610) SQ
pub const RT_ACCESSORY_HOLDER_SLOT_SEQUENCE: Tag = Tag(0x300A, 0x0610);
/// RTAccessoryHolderSlotID (300A,0611) LO
pub const RT_ACCESSORY_HOLDER_SLOT_ID: Tag = Tag(0x300A, 0x0611);
/// RTAccessoryHolderSlotDistance (300A,0612) FD
pub const RT_ACCESSORY_HOLDER_SLOT_DISTANCE: Tag = Tag(0x300A, 0x0612);
/// RTAccessorySlotDistance (300A,0613) FD
pub const RT_ACCESSORY_SLOT_DISTANCE: Tag = Tag(0x300A, 0x0613);
/// RTAccessoryHolderDefinitionSequence (300A,0614) SQ
pub const RT_ACCESSORY_HOLDER_DEFINITION_SEQUENCE: Tag = Tag(0x300A, 0x0614);
/// RTAccessoryDeviceSlotID (300A,0615) LO
pub const RT_ACCESSORY_DEVICE_SLOT_ID: Tag = Tag(0x300A, 0x0615);
/// RTRadiationSequence (300A,0616) SQ
pub const RT_RADIATION_SEQUENCE: Tag = Tag(0x300A, 0x0616);
/// RadiationDoseSequence (300A,0617) SQ
pub const RADIATION_DOSE_SEQUENCE: Tag = Tag(0x300A, 0x0617);
/// RadiationDoseIdentificationSequence (300A,0618) SQ
pub const RADIATION_DOSE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x300A, 0x0618);
/// RadiationDoseIdentificationLabel (300A,0619) LO
pub const RADIATION_DOSE_IDENTIFICATION_LABEL: Tag = Tag(0x300A, 0x0619);
/// ReferenceDoseType (300A,061A) CS
pub const REFERENCE_DOSE_TYPE: Tag = Tag(0x300A, 0x061A);
/// PrimaryDoseValueIndicator (300A,061B) CS
pub const PRIMARY_DOSE_VALUE_INDICATOR: Tag = Tag(0x300A, 0x061B);
/// DoseValuesSequence (300A,061C) SQ
pub const DOSE_VALUES_SEQUENCE: Tag = Tag(0x300A, 0x061C);
/// DoseValuePurpose (300A,061D) CS
pub const DOSE_VALUE_PURPOSE: Tag = Tag(0x300A, 0x061D);
/// ReferenceDosePointCoordinates (300A,061E) FD
pub const REFERENCE_DOSE_POINT_COORDINATES: Tag = Tag(0x300A, 0x061E);
/// RadiationDoseValuesParametersSequence (300A,061F) SQ
pub const RADIATION_DOSE_VALUES_PARAMETERS_SEQUENCE: Tag = Tag(0x300A, 0x061F);
/// MetersetToDoseMappingSequence (300A,0620) SQ
pub const METERSET_TO_DOSE_MAPPING_SEQUENCE: Tag = Tag(0x300A, 0x0620);
/// ExpectedInVivoMeasurementValuesSequence (300A,0621) SQ
pub const EXPECTED_IN_VIVO_MEASUREMENT_VALUES_SEQUENCE: Tag = Tag(0x300A, 0x0621);
/// ExpectedInVivoMeasurementValueIndex (300A,0622) US
pub const EXPECTED_IN_VIVO_MEASUREMENT_VALUE_INDEX: Tag = Tag(0x300A, 0x0622);
/// RadiationDoseInVivoMeasurementLabel (300A,0623) LO
pub const RADIATION_DOSE_IN_VIVO_MEASUREMENT_LABEL: Tag = Tag(0x300A, 0x0623);
/// RadiationDoseCentralAxisDisplacement (300A,0624) FD
pub const RADIATION_DOSE_CENTRAL_AXIS_DISPLACEMENT: Tag = Tag(0x300A, 0x0624);
/// RadiationDoseValue (300A,0625) FD
pub const RADIATION_DOSE_VALUE: Tag = Tag(0x300A, 0x0625);
/// RadiationDoseSourceToSkinDistance (300A,0626) FD
pub const RADIATION_DOSE_SOURCE_TO_SKIN_DISTANCE: Tag = Tag(0x300A, 0x0626);
/// RadiationDoseMeasurementPointCoordinates (300A,0627) FD
pub const RADIATION_DOSE_MEASUREMENT_POINT_COORDINATES: Tag = Tag(0x300A, 0x0627);
/// RadiationDoseSourceToExternalContourDistance (300A,0628) FD
pub const RADIATION_DOSE_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE: Tag = Tag(0x300A, 0x0628);
/// RTToleranceSetSequence (300A,0629) SQ
pub const RT_TOLERANCE_SET_SEQUENCE: Tag = Tag(0x300A, 0x0629);
/// RTToleranceSetLabel (300A,062A) LO
pub const RT_TOLERANCE_SET_LABEL: Tag = Tag(0x300A, 0x062A);
/// AttributeToleranceValuesSequence (300A,062B) SQ
pub const ATTRIBUTE_TOLERANCE_VALUES_SEQUENCE: Tag = Tag(0x300A, 0x062B);
/// ToleranceValue (300A,062C) FD
pub const TOLERANCE_VALUE: Tag = Tag(0x300A, 0x062C);
/// PatientSupportPositionToleranceSequence (300A,062D) SQ
pub const PATIENT_SUPPORT_POSITION_TOLERANCE_SEQUENCE: Tag = Tag(0x300A, 0x062D);
/// TreatmentTimeLimit (300A,062E) FD
pub const TREATMENT_TIME_LIMIT: Tag = Tag(0x300A, 0x062E);
/// CArmPhotonElectronControlPointSequence (300A,062F) SQ
pub const C_ARM_PHOTON_ELECTRON_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300A, 0x062F);
/// ReferencedRTRadiationSequence (300A,0630) SQ
pub const REFERENCED_RT_RADIATION_SEQUENCE: Tag = Tag(0x300A, 0x0630);
/// ReferencedRTInstanceSequence (300A,0631) SQ
pub const REFERENCED_RT_INSTANCE_SEQUENCE: Tag = Tag(0x300A, 0x0631);
/// ReferencedRTPatientSetupSequence (300A,0632) SQ (retired)
pub const REFERENCED_RT_PATIENT_SETUP_SEQUENCE: Tag = Tag(0x300A, 0x0632);
/// SourceToPatientSurfaceDistance (300A,0634) FD
pub const SOURCE_TO_PATIENT_SURFACE_DISTANCE: Tag = Tag(0x300A, 0x0634);
/// TreatmentMachineSpecialModeCodeSequence (300A,0635) SQ
pub const TREATMENT_MACHINE_SPECIAL_MODE_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0635);
/// IntendedNumberOfFractions (300A,0636) US
pub const INTENDED_NUMBER_OF_FRACTIONS: Tag = Tag(0x300A, 0x0636);
/// RTRadiationSetIntent (300A,0637) CS
pub const RT_RADIATION_SET_INTENT: Tag = Tag(0x300A, 0x0637);
/// RTRadiationPhysicalAndGeometricContentDetailFlag (300A,0638) CS
pub const RT_RADIATION_PHYSICAL_AND_GEOMETRIC_CONTENT_DETAIL_FLAG: Tag = Tag(0x300A, 0x0638);
/// RTRecordFlag (300A,0639) CS
pub const RT_RECORD_FLAG: Tag = Tag(0x300A, 0x0639);
/// TreatmentDeviceIdentificationSequence (300A,063A) SQ
pub const TREATMENT_DEVICE_IDENTIFICATION_SEQUENCE: Tag = Tag(0x300A, 0x063A);
/// ReferencedRTPhysicianIntentSequence (300A,063B) SQ
pub const REFERENCED_RT_PHYSICIAN_INTENT_SEQUENCE: Tag = Tag(0x300A, 0x063B);
/// CumulativeMeterset (300A,063C) FD
pub const CUMULATIVE_METERSET: Tag = Tag(0x300A, 0x063C);
/// DeliveryRate (300A,063D) FD
pub const DELIVERY_RATE: Tag = Tag(0x300A, 0x063D);
/// DeliveryRateUnitSequence (300A,063E) SQ
pub const DELIVERY_RATE_UNIT_SEQUENCE: Tag = Tag(0x300A, 0x063E);
/// TreatmentPositionSequence (300A,063F) SQ
pub const TREATMENT_POSITION_SEQUENCE: Tag = Tag(0x300A, 0x063F);
/// RadiationSourceAxisDistance (300A,0640) FD
pub const RADIATION_SOURCE_AXIS_DISTANCE: Tag = Tag(0x300A, 0x0640);
/// NumberOfRTBeamLimitingDevices (300A,0641) US
pub const NUMBER_OF_RT_BEAM_LIMITING_DEVICES: Tag = Tag(0x300A, 0x0641);
/// RTBeamLimitingDeviceProximalDistance (300A,0642) FD
pub const RT_BEAM_LIMITING_DEVICE_PROXIMAL_DISTANCE: Tag = Tag(0x300A, 0x0642);
/// RTBeamLimitingDeviceDistalDistance (300A,0643) FD
pub const RT_BEAM_LIMITING_DEVICE_DISTAL_DISTANCE: Tag = Tag(0x300A, 0x0643);
/// ParameterValueNumberCodeSequence (300A,0644) SQ (retired)
pub const PARAMETER_VALUE_NUMBER_CODE_SEQUENCE: Tag = Tag(0x300A, 0x0644);
/// RadiationGenerationModeSequence (300A,0645) SQ
pub const RADIATION_GENERATION_MODE_SEQUENCE: Tag = Tag(0x300A, 0x0645);
/// RadiationGenerationModeIndexSequence (300A,0646) SQ (retired)
pub const RADIATION_GENERATION_MODE_INDEX_SEQUENCE: Tag = Tag(0x300A, 0x0646);
/// ReferencedRTPlanSequence (300C,0002) SQ
pub const REFERENCED_RT_PLAN_SEQUENCE: Tag = Tag(0x300C, 0x0002);
/// ReferencedBeamSequence (300C,0004) SQ
pub const REFERENCED_BEAM_SEQUENCE: Tag = Tag(0x300C, 0x0004);
/// ReferencedBeamNumber (300C,0006) IS
pub const REFERENCED_BEAM_NUMBER: Tag = Tag(0x300C, 0x0006);
/// ReferencedReferenceImageNumber (300C,0007) IS
pub const REFERENCED_REFERENCE_IMAGE_NUMBER: Tag = Tag(0x300C, 0x0007);
/// StartCumulativeMetersetWeight (300C,0008) DS
pub const START_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300C, 0x0008);
/// EndCumulativeMetersetWeight (300C,0009) DS
pub const END_CUMULATIVE_METERSET_WEIGHT: Tag = Tag(0x300C, 0x0009);
/// ReferencedBrachyApplicationSetupSequence (300C,000A) SQ
pub const REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE: Tag = Tag(0x300C, 0x000A);
/// ReferencedBrachyApplicationSetupNumber (300C,000C) IS
pub const REFERENCED_BRACHY_APPLICATION_SETUP_NUMBER: Tag = Tag(0x300C, 0x000C);
/// ReferencedSourceNumber (300C,000E) IS
pub const REFERENCED_SOURCE_NUMBER: Tag = Tag(0x300C, 0x000E);
/// ReferencedFractionGroupSequence (300C,0020) SQ
pub const REFERENCED_FRACTION_GROUP_SEQUENCE: Tag = Tag(0x300C, 0x0020);
/// ReferencedFractionGroupNumber (300C,0022) IS
pub const REFERENCED_FRACTION_GROUP_NUMBER: Tag = Tag(0x300C, 0x0022);
/// ReferencedVerificationImageSequence (300C,0040) SQ
pub const REFERENCED_VERIFICATION_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0040);
/// ReferencedReferenceImageSequence (300C,0042) SQ
pub const REFERENCED_REFERENCE_IMAGE_SEQUENCE: Tag = Tag(0x300C, 0x0042);
/// ReferencedDoseReferenceSequence (300C,0050) SQ
pub const REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0050);
/// ReferencedDoseReferenceNumber (300C,0051) IS
pub const REFERENCED_DOSE_REFERENCE_NUMBER: Tag = Tag(0x300C, 0x0051);
/// BrachyReferencedDoseReferenceSequence (300C,0055) SQ
pub const BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE: Tag = Tag(0x300C, 0x0055);
/// ReferencedStructureSetSequence (300C,0060) SQ
pub const REFERENCED_STRUCTURE_SET_SEQUENCE: Tag = Tag(0x300C, 0x0060);
/// ReferencedPatientSetupNumber (300C,006A) IS
pub const REFERENCED_PATIENT_SETUP_NUMBER: Tag = Tag(0x300C, 0x006A);
/// ReferencedDoseSequence (300C,0080) SQ
pub const REFERENCED_DOSE_SEQUENCE: Tag = Tag(0x300C, 0x0080);
/// ReferencedToleranceTableNumber (300C,00A0) IS
pub const REFERENCED_TOLERANCE_TABLE_NUMBER: Tag = Tag(0x300C, 0x00A0);
/// ReferencedBolusSequence (300C,00B0) SQ
pub const REFERENCED_BOLUS_SEQUENCE: Tag = Tag(0x300C, 0x00B0);
/// ReferencedWedgeNumber (300C,00C0) IS
pub const REFERENCED_WEDGE_NUMBER: Tag = Tag(0x300C, 0x00C0);
/// ReferencedCompensatorNumber (300C,00D0) IS
pub const REFERENCED_COMPENSATOR_NUMBER: Tag = Tag(0x300C, 0x00D0);
/// ReferencedBlockNumber (300C,00E0) IS
pub const REFERENCED_BLOCK_NUMBER: Tag = Tag(0x300C, 0x00E0);
/// ReferencedControlPointIndex (300C,00F0) IS
pub const REFERENCED_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F0);
/// ReferencedControlPointSequence (300C,00F2) SQ
pub const REFERENCED_CONTROL_POINT_SEQUENCE: Tag = Tag(0x300C, 0x00F2);
/// ReferencedStartControlPointIndex (300C,00F4) IS
pub const REFERENCED_START_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F4);
/// ReferencedStopControlPointIndex (300C,00F6) IS
pub const REFERENCED_STOP_CONTROL_POINT_INDEX: Tag = Tag(0x300C, 0x00F6);
/// ReferencedRangeShifterNumber (300C,0100) IS
pub const REFERENCED_RANGE_SHIFTER_NUMBER: Tag = Tag(0x300C, 0x0100);
/// ReferencedLateralSpreadingDeviceNumber (300C,0102) IS
pub const REFERENCED_LATERAL_SPREADING_DEVICE_NUMBER: Tag = Tag(0x300C, 0x0102);
/// ReferencedRangeModulatorNumber (300C,0104) IS
pub const REFERENCED_RANGE_MODULATOR_NUMBER: Tag = Tag(0x300C, 0x0104);
/// OmittedBeamTaskSequence (300C,0111) SQ
pub const OMITTED_BEAM_TASK_SEQUENCE: Tag = Tag(0x300C, 0x0111);
/// ReasonForOmission (300C,0112) CS
pub const REASON_FOR_OMISSION: Tag = Tag(0x300C, 0x0112);
/// ReasonForOmissionDescription (300C,0113) LO
pub const REASON_FOR_OMISSION_DESCRIPTION: Tag = Tag(0x300C, 0x0113);
/// PrescriptionOverviewSequence (300C,0114) SQ
pub const PRESCRIPTION_OVERVIEW_SEQUENCE: Tag = Tag(0x300C, 0x0114);
/// TotalPrescriptionDose (300C,0115) FL
pub const TOTAL_PRESCRIPTION_DOSE: Tag = Tag(0x300C, 0x0115);
/// PlanOverviewSequence (300C,0116) SQ
pub const PLAN_OVERVIEW_SEQUENCE: Tag = Tag(0x300C, 0x0116);
/// PlanOverviewIndex (300C,0117) US
pub const PLAN_OVERVIEW_INDEX: Tag = Tag(0x300C, 0x0117);
/// ReferencedPlanOverviewIndex (300C,0118) US
pub const REFERENCED_PLAN_OVERVIEW_INDEX: Tag = Tag(0x300C, 0x0118);
/// NumberOfFractionsIncluded (300C,0119) US
pub const NUMBER_OF_FRACTIONS_INCLUDED: Tag = Tag(0x300C, 0x0119);
/// DoseCalibrationConditionsSequence (300C,0120) SQ
pub const DOSE_CALIBRATION_CONDITIONS_SEQUENCE: Tag = Tag(0x300C, 0x0120);
/// AbsorbedDoseToMetersetRatio (300C,0121) FD
pub const ABSORBED_DOSE_TO_METERSET_RATIO: Tag = Tag(0x300C, 0x0121);
/// DelineatedRadiationFieldSize (300C,0122) FD
pub const DELINEATED_RADIATION_FIELD_SIZE: Tag = Tag(0x300C, 0x0122);
/// DoseCalibrationConditionsVerifiedFlag (300C,0123) CS
pub const DOSE_CALIBRATION_CONDITIONS_VERIFIED_FLAG: Tag = Tag(0x300C, 0x0123);
/// CalibrationReferencePointDepth (300C,0124) FD
pub const CALIBRATION_REFERENCE_POINT_DEPTH: Tag = Tag(0x300C, 0x0124);
/// GatingBeamHoldTransitionSequence (300C,0125) SQ
pub const GATING_BEAM_HOLD_TRANSITION_SEQUENCE: Tag = Tag(0x300C, 0x0125);
/// BeamHoldTransition (300C,0126) CS
pub const BEAM_HOLD_TRANSITION: Tag = Tag(0x300C, 0x0126);
/// BeamHoldTransitionDateTime (300C,0127) DT
pub const BEAM_HOLD_TRANSITION_DATE_TIME: Tag = Tag(0x300C, 0x0127);
/// BeamHoldOriginatingDeviceSequence (300C,0128) SQ
pub const BEAM_HOLD_ORIGINATING_DEVICE_SEQUENCE: Tag = Tag(0x300C, 0x0128);
/// BeamHoldTransitionTriggerSource (300C,0129) CS
pub const BEAM_HOLD_TRANSITION_TRIGGER_SOURCE: Tag = Tag(0x300C, 0x0129);
/// ApprovalStatus (300E,0002) CS
pub const APPROVAL_STATUS: Tag = Tag(0x300E, 0x0002);
/// ReviewDate (300E,0004) DA
pub const REVIEW_DATE: Tag = Tag(0x300E, 0x0004);
/// ReviewTime (300E,0005) TM
pub const REVIEW_TIME: Tag = Tag(0x300E, 0x0005);
/// ReviewerName (300E,0008) PN
pub const REVIEWER_NAME: Tag = Tag(0x300E, 0x0008);
/// Arbitrary (4000,0010) LT (retired)
pub const ARBITRARY: Tag = Tag(0x4000, 0x0010);
/// TextComments (4000,4000) LT (retired)
pub const TEXT_COMMENTS: Tag = Tag(0x4000, 0x4000);
/// ResultsID (4008,0040) SH (retired)
pub const RESULTS_ID: Tag = Tag(0x4008, 0x0040);
/// ResultsIDIssuer (4008,0042) LO (retired)
pub const RESULTS_ID_ISSUER: Tag = Tag(0x4008, 0x0042);
/// ReferencedInterpretationSequence (4008,0050) SQ (retired)
pub const REFERENCED_INTERPRETATION_SEQUENCE: Tag = Tag(0x4008, 0x0050);
/// ReportProductionStatusTrial (4008,00FF) CS (retired)
pub const REPORT_PRODUCTION_STATUS_TRIAL: Tag = Tag(0x4008, 0x00FF);
/// InterpretationRecordedDate (4008,0100) DA (retired)
pub const INTERPRETATION_RECORDED_DATE: Tag = Tag(0x4008, 0x0100);
/// InterpretationRecordedTime (4008,0101) TM (retired)
pub const INTERPRETATION_RECORDED_TIME: Tag = Tag(0x4008, 0x0101);
/// InterpretationRecorder (4008,0102) PN (retired)
pub const INTERPRETATION_RECORDER: Tag = Tag(0x4008, 0x0102);
/// ReferenceToRecordedSound (4008,0103) LO (retired)
pub const REFERENCE_TO_RECORDED_SOUND: Tag = Tag(0x4008, 0x0103);
/// InterpretationTranscriptionDate (4008,0108) DA (retired)
pub const INTERPRETATION_TRANSCRIPTION_DATE: Tag = Tag(0x4008, 0x0108);
/// InterpretationTranscriptionTime (4008,0109) TM (retired)
pub const INTERPRETATION_TRANSCRIPTION_TIME: Tag = Tag(0x4008, 0x0109);
/// InterpretationTranscriber (4008,010A) PN (retired)
pub const INTERPRETATION_TRANSCRIBER: Tag = Tag(0x4008, 0x010A);
/// InterpretationText (4008,010B) ST (retired)
pub const INTERPRETATION_TEXT: Tag = Tag(0x4008, 0x010B);
/// InterpretationAuthor (4008,010C) PN (retired)
pub const INTERPRETATION_AUTHOR: Tag = Tag(0x4008, 0x010C);
/// InterpretationApproverSequence (4008,0111) SQ (retired)
pub const INTERPRETATION_APPROVER_SEQUENCE: Tag = Tag(0x4008, 0x0111);
/// InterpretationApprovalDate (4008,0112) DA (retired)
pub const INTERPRETATION_APPROVAL_DATE: Tag = Tag(0x4008, 0x0112);
/// InterpretationApprovalTime (4008,0113) TM (retired)
pub const INTERPRETATION_APPROVAL_TIME: Tag = Tag(0x4008, 0x0113);
/// PhysicianApprovingInterpretation (4008,0114) PN (retired)
pub const PHYSICIAN_APPROVING_INTERPRETATION: Tag = Tag(0x4008, 0x0114);
/// InterpretationDiagnosisDescription (4008,0115) LT (retired)
pub const INTERPRETATION_DIAGNOSIS_DESCRIPTION: Tag = Tag(0x4008, 0x0115);
/// InterpretationDiagnosisCodeSequence (4008,0117) SQ (retired)
pub const INTERPRETATION_DIAGNOSIS_CODE_SEQUENCE: Tag = Tag(0x4008, 0x0117);
/// ResultsDistributionListSequence (4008,0118) SQ (retired)
pub const RESULTS_DISTRIBUTION_LIST_SEQUENCE: Tag = Tag(0x4008, 0x0118);
/// DistributionName (4008,0119) PN (retired)
pub const DISTRIBUTION_NAME: Tag = Tag(0x4008, 0x0119);
/// DistributionAddress (4008,011A) LO (retired)
pub const DISTRIBUTION_ADDRESS: Tag = Tag(0x4008, 0x011A);
/// InterpretationID (4008,0200) SH (retired)
pub const INTERPRETATION_ID: Tag = Tag(0x4008, 0x0200);
/// InterpretationIDIssuer (4008,0202) LO (retired)
pub const INTERPRETATION_ID_ISSUER: Tag = Tag(0x4008, 0x0202);
/// InterpretationTypeID (4008,0210) CS (retired)
pub const INTERPRETATION_TYPE_ID: Tag = Tag(0x4008, 0x0210);
/// InterpretationStatusID (4008,0212) CS (retired)
pub const INTERPRETATION_STATUS_ID: Tag = Tag(0x4008, 0x0212);
/// Impressions (4008,0300) ST (retired)
pub const IMPRESSIONS: Tag = Tag(0x4008, 0x0300);
/// ResultsComments (4008,4000) ST (retired)
pub const RESULTS_COMMENTS: Tag = Tag(0x4008, 0x4000);
/// LowEnergyDetectors (4010,0001) CS
pub const LOW_ENERGY_DETECTORS: Tag = Tag(0x4010, 0x0001);
/// HighEnergyDetectors (4010,0002) CS
pub const HIGH_ENERGY_DETECTORS: Tag = Tag(0x4010, 0x0002);
/// DetectorGeometrySequence (4010,0004) SQ
pub const DETECTOR_GEOMETRY_SEQUENCE: Tag = Tag(0x4010, 0x0004);
/// ThreatROIVoxelSequence (4010,1001) SQ
pub const THREAT_ROI_VOXEL_SEQUENCE: Tag = Tag(0x4010, 0x1001);
/// ThreatROIBase (4010,1004) FL
pub const THREAT_ROI_BASE: Tag = Tag(0x4010, 0x1004);
/// ThreatROIExtents (4010,1005) FL
pub const THREAT_ROI_EXTENTS: Tag = Tag(0x4010, 0x1005);
/// ThreatROIBitmap (4010,1006) OB
pub const THREAT_ROI_BITMAP: Tag = Tag(0x4010, 0x1006);
/// RouteSegmentID (4010,1007) SH
pub const ROUTE_SEGMENT_ID: Tag = Tag(0x4010, 0x1007);
/// GantryType (4010,1008) CS
pub const GANTRY_TYPE: Tag = Tag(0x4010, 0x1008);
/// OOIOwnerType (4010,1009) CS
pub const OOI_OWNER_TYPE: Tag = Tag(0x4010, 0x1009);
/// RouteSegmentSequence (4010,100A) SQ
pub const ROUTE_SEGMENT_SEQUENCE: Tag = Tag(0x4010, 0x100A);
/// PotentialThreatObjectID (4010,1010) US
pub const POTENTIAL_THREAT_OBJECT_ID: Tag = Tag(0x4010, 0x1010);
/// ThreatSequence (4010,1011) SQ
pub const THREAT_SEQUENCE: Tag = Tag(0x4010, 0x1011);
/// ThreatCategory (4010,1012) CS
pub const THREAT_CATEGORY: Tag = Tag(0x4010, 0x1012);
/// ThreatCategoryDescription (4010,1013) LT
pub const THREAT_CATEGORY_DESCRIPTION: Tag = Tag(0x4010, 0x1013);
/// ATDAbilityAssessment (4010,1014) CS
pub const ATD_ABILITY_ASSESSMENT: Tag = Tag(0x4010, 0x1014);
/// ATDAssessmentFlag (4010,1015) CS
pub const ATD_ASSESSMENT_FLAG: Tag = Tag(0x4010, 0x1015);
/// ATDAssessmentProbability (4010,1016) FL
pub const ATD_ASSESSMENT_PROBABILITY: Tag = Tag(0x4010, 0x1016);
/// Mass (4010,1017) FL
pub const MASS: Tag = Tag(0x4010, 0x1017);
/// Density (4010,1018) FL
pub const DENSITY: Tag = Tag(0x4010, 0x1018);
/// ZEffective (4010,1019) FL
pub const Z_EFFECTIVE: Tag = Tag(0x4010, 0x1019);
/// BoardingPassID (4010,101A) SH
pub const BOARDING_PASS_ID: Tag = Tag(0x4010, 0x101A);
/// CenterOfMass (4010,101B) FL
pub const CENTER_OF_MASS: Tag = Tag(0x4010, 0x101B);
/// CenterOfPTO (4010,101C) FL
pub const CENTER_OF_PTO: Tag = Tag(0x4010, 0x101C);
/// BoundingPolygon (4010,101D) FL
pub const BOUNDING_POLYGON: Tag = Tag(0x4010, 0x101D);
/// RouteSegmentStartLocationID (4010,101E) SH
pub const ROUTE_SEGMENT_START_LOCATION_ID: Tag = Tag(0x4010, 0x101E);
/// RouteSegmentEndLocationID (4010,101F) SH
pub const ROUTE_SEGMENT_END_LOCATION_ID: Tag = Tag(0x4010, 0x101F);
/// RouteSegmentLocationIDType (4010,1020) CS
pub const ROUTE_SEGMENT_LOCATION_ID_TYPE: Tag = Tag(0x4010, 0x1020);
/// AbortReason (4010,1021) CS
pub const ABORT_REASON: Tag = Tag(0x4010, 0x1021);
/// VolumeOfPTO (4010,1023) FL
pub const VOLUME_OF_PTO: Tag = Tag(0x4010, 0x1023);
/// AbortFlag (4010,1024) CS
pub const ABORT_FLAG: Tag = Tag(0x4010, 0x1024);
/// RouteSegmentStartTime (4010,1025) DT
pub const ROUTE_SEGMENT_START_TIME: Tag = Tag(0x4010, 0x1025);
/// RouteSegmentEndTime (4010,1026) DT
pub const ROUTE_SEGMENT_END_TIME: Tag = Tag(0x4010, 0x1026);
/// TDRType (4010,1027) CS
pub const TDR_TYPE: Tag = Tag(0x4010, 0x1027);
/// InternationalRouteSegment (4010,1028) CS
pub const INTERNATIONAL_ROUTE_SEGMENT: Tag = Tag(0x4010, 0x1028);
/// ThreatDetectionAlgorithmAndVersion (4010,1029) LO
pub const THREAT_DETECTION_ALGORITHM_AND_VERSION: Tag = Tag(0x4010, 0x1029);
/// AssignedLocation (4010,102A) SH
pub const ASSIGNED_LOCATION: Tag = Tag(0x4010, 0x102A);
/// AlarmDecisionTime (4010,102B) DT
pub const ALARM_DECISION_TIME: Tag = Tag(0x4010, 0x102B);
/// AlarmDecision (4010,1031) CS
pub const ALARM_DECISION: Tag = Tag(0x4010, 0x1031);
/// NumberOfTotalObjects (4010,1033) US
pub const NUMBER_OF_TOTAL_OBJECTS: Tag = Tag(0x4010, 0x1033);
/// NumberOfAlarmObjects (4010,1034) US
pub const NUMBER_OF_ALARM_OBJECTS: Tag = Tag(0x4010, 0x1034);
/// PTORepresentationSequence (4010,1037) SQ
pub const PTO_REPRESENTATION_SEQUENCE: Tag = Tag(0x4010, 0x1037);
/// ATDAssessmentSequence (4010,1038) SQ
pub const ATD_ASSESSMENT_SEQUENCE: Tag = Tag(0x4010, 0x1038);
/// TIPType (4010,1039) CS
pub const TIP_TYPE: Tag = Tag(0x4010, 0x1039);
/// DICOSVersion (4010,103A) CS (retired)
pub const DICOS_VERSION: Tag = Tag(0x4010, 0x103A);
/// OOIOwnerCreationTime (4010,1041) DT
pub const OOI_OWNER_CREATION_TIME: Tag = Tag(0x4010, 0x1041);
/// OOIType (4010,1042) CS
pub const OOI_TYPE: Tag = Tag(0x4010, 0x1042);
/// OOISize (4010,1043) FL
pub const OOI_SIZE: Tag = Tag(0x4010, 0x1043);
/// AcquisitionStatus (4010,1044) CS
pub const ACQUISITION_STATUS: Tag = Tag(0x4010, 0x1044);
/// BasisMaterialsCodeSequence (4010,1045) SQ
pub const BASIS_MATERIALS_CODE_SEQUENCE: Tag = Tag(0x4010, 0x1045);
/// PhantomType (4010,1046) CS
pub const PHANTOM_TYPE: Tag = Tag(0x4010, 0x1046);
/// OOIOwnerSequence (4010,1047) SQ
pub const OOI_OWNER_SEQUENCE: Tag = Tag(0x4010, 0x1047);
/// ScanType (4010,1048) CS
pub const SCAN_TYPE: Tag = Tag(0x4010, 0x1048);
/// ItineraryID (4010,1051) LO
pub const ITINERARY_ID: Tag = Tag(0x4010, 0x1051);
/// ItineraryIDType (4010,1052) SH
pub const ITINERARY_ID_TYPE: Tag = Tag(0x4010, 0x1052);
/// ItineraryIDAssigningAuthority (4010,1053) LO
pub const ITINERARY_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1053);
/// RouteID (4010,1054) SH
pub const ROUTE_ID: Tag = Tag(0x4010, 0x1054);
/// RouteIDAssigningAuthority (4010,1055) SH
pub const ROUTE_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1055);
/// InboundArrivalType (4010,1056) CS
pub const INBOUND_ARRIVAL_TYPE: Tag = Tag(0x4010, 0x1056);
/// CarrierID (4010,1058) SH
pub const CARRIER_ID: Tag = Tag(0x4010, 0x1058);
/// CarrierIDAssigningAuthority (4010,1059) CS
pub const CARRIER_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1059);
/// SourceOrientation (4010,1060) FL
pub const SOURCE_ORIENTATION: Tag = Tag(0x4010, 0x1060);
/// SourcePosition (4010,1061) FL
pub const SOURCE_POSITION: Tag = Tag(0x4010, 0x1061);
/// BeltHeight (4010,1062) FL
pub const BELT_HEIGHT: Tag = Tag(0x4010, 0x1062);
/// AlgorithmRoutingCodeSequence (4010,1064) SQ
pub const ALGORITHM_ROUTING_CODE_SEQUENCE: Tag = Tag(0x4010, 0x1064);
/// TransportClassification (4010,1067) CS
pub const TRANSPORT_CLASSIFICATION: Tag = Tag(0x4010, 0x1067);
/// OOITypeDescriptor (4010,1068) LT
pub const OOI_TYPE_DESCRIPTOR: Tag = Tag(0x4010, 0x1068);
/// TotalProcessingTime (4010,1069) FL
pub const TOTAL_PROCESSING_TIME: Tag = Tag(0x4010, 0x1069);
/// DetectorCalibrationData (4010,106C) OB
pub const DETECTOR_CALIBRATION_DATA: Tag = Tag(0x4010, 0x106C);
/// AdditionalScreeningPerformed (4010,106D) CS
pub const ADDITIONAL_SCREENING_PERFORMED: Tag = Tag(0x4010, 0x106D);
/// AdditionalInspectionSelectionCriteria (4010,106E) CS
pub const ADDITIONAL_INSPECTION_SELECTION_CRITERIA: Tag = Tag(0x4010, 0x106E);
/// AdditionalInspectionMethodSequence (4010,106F) SQ
pub const ADDITIONAL_INSPECTION_METHOD_SEQUENCE: Tag = Tag(0x4010, 0x106F);
/// AITDeviceType (4010,1070) CS
pub const AIT_DEVICE_TYPE: Tag = Tag(0x4010, 0x1070);
/// QRMeasurementsSequence (4010,1071) SQ
pub const QR_MEASUREMENTS_SEQUENCE: Tag = Tag(0x4010, 0x1071);
/// TargetMaterialSequence (4010,1072) SQ
pub const TARGET_MATERIAL_SEQUENCE: Tag = Tag(0x4010, 0x1072);
/// SNRThreshold (4010,1073) FD
pub const SNR_THRESHOLD: Tag = Tag(0x4010, 0x1073);
/// ImageScaleRepresentation (4010,1075) DS
pub const IMAGE_SCALE_REPRESENTATION: Tag = Tag(0x4010, 0x1075);
/// ReferencedPTOSequence (4010,1076) SQ
pub const REFERENCED_PTO_SEQUENCE: Tag = Tag(0x4010, 0x1076);
/// ReferencedTDRInstanceSequence (4010,1077) SQ
pub const REFERENCED_TDR_INSTANCE_SEQUENCE: Tag = Tag(0x4010, 0x1077);
/// PTOLocationDescription (4010,1078) ST
pub const PTO_LOCATION_DESCRIPTION: Tag = Tag(0x4010, 0x1078);
/// AnomalyLocatorIndicatorSequence (4010,1079) SQ
pub const ANOMALY_LOCATOR_INDICATOR_SEQUENCE: Tag = Tag(0x4010, 0x1079);
/// AnomalyLocatorIndicator (4010,107A) FL
pub const ANOMALY_LOCATOR_INDICATOR: Tag = Tag(0x4010, 0x107A);
/// PTORegionSequence (4010,107B) SQ
pub const PTO_REGION_SEQUENCE: Tag = Tag(0x4010, 0x107B);
/// InspectionSelectionCriteria (4010,107C) CS
pub const INSPECTION_SELECTION_CRITERIA: Tag = Tag(0x4010, 0x107C);
/// SecondaryInspectionMethodSequence (4010,107D) SQ
pub const SECONDARY_INSPECTION_METHOD_SEQUENCE: Tag = Tag(0x4010, 0x107D);
/// PRCSToRCSOrientation (4010,107E) DS
pub const PRCS_TO_RCS_ORIENTATION: Tag = Tag(0x4010, 0x107E);
/// MACParametersSequence (4FFE,0001) SQ
pub const MAC_PARAMETERS_SEQUENCE: Tag = Tag(0x4FFE, 0x0001);
/// CurveDimensions (50xx,0005) US (retired)
pub const CURVE_DIMENSIONS: Tag = Tag(0x5000, 0x0005);
/// NumberOfPoints (50xx,0010) US (retired)
pub const NUMBER_OF_POINTS: Tag = Tag(0x5000, 0x0010);
/// TypeOfData (50xx,0020) CS (retired)
pub const TYPE_OF_DATA: Tag = Tag(0x5000, 0x0020);
/// CurveDescription (50xx,0022) LO (retired)
pub const CURVE_DESCRIPTION: Tag = Tag(0x5000, 0x0022);
/// AxisUnits (50xx,0030) SH (retired)
pub const AXIS_UNITS: Tag = Tag(0x5000, 0x0030);
/// AxisLabels (50xx,0040) SH (retired)
pub const AXIS_LABELS: Tag = Tag(0x5000, 0x0040);
/// DataValueRepresentation (50xx,0103) US (retired)
pub const DATA_VALUE_REPRESENTATION: Tag = Tag(0x5000, 0x0103);
/// MinimumCoordinateValue (50xx,0104) US (retired)
pub const MINIMUM_COORDINATE_VALUE: Tag = Tag(0x5000, 0x0104);
/// MaximumCoordinateValue (50xx,0105) US (retired)
pub const MAXIMUM_COORDINATE_VALUE: Tag = Tag(0x5000, 0x0105);
/// CurveRange (50xx,0106) SH (retired)
pub const CURVE_RANGE: Tag = Tag(0x5000, 0x0106);
/// CurveDataDescriptor (50xx,0110) US (retired)
pub const CURVE_DATA_DESCRIPTOR: Tag = Tag(0x5000, 0x0110);
/// CoordinateStartValue (50xx,0112) US (retired)
pub const COORDINATE_START_VALUE: Tag = Tag(0x5000, 0x0112);
/// CoordinateStepValue (50xx,0114) US (retired)
pub const COORDINATE_STEP_VALUE: Tag = Tag(0x5000, 0x0114);
/// CurveActivationLayer (50xx,1001) CS (retired)
pub const CURVE_ACTIVATION_LAYER: Tag = Tag(0x5000, 0x1001);
/// AudioType (50xx,2000) US (retired)
pub const AUDIO_TYPE: Tag = Tag(0x5000, 0x2000);
/// AudioSampleFormat (50xx,2002) US (retired)
pub const AUDIO_SAMPLE_FORMAT: Tag = Tag(0x5000, 0x2002);
/// NumberOfChannels (50xx,2004) US (retired)
pub const NUMBER_OF_CHANNELS: Tag = Tag(0x5000, 0x2004);
/// NumberOfSamples (50xx,2006) UL (retired)
pub const NUMBER_OF_SAMPLES: Tag = Tag(0x5000, 0x2006);
/// SampleRate (50xx,2008) UL (retired)
pub const SAMPLE_RATE: Tag = Tag(0x5000, 0x2008);
/// TotalTime (50xx,200A) UL (retired)
pub const TOTAL_TIME: Tag = Tag(0x5000, 0x200A);
/// AudioSampleData (50xx,200C) OW (retired)
pub const AUDIO_SAMPLE_DATA: Tag = Tag(0x5000, 0x200C);
/// AudioComments (50xx,200E) LT (retired)
pub const AUDIO_COMMENTS: Tag = Tag(0x5000, 0x200E);
/// CurveLabel (50xx,2500) LO (retired)
pub const CURVE_LABEL: Tag = Tag(0x5000, 0x2500);
/// CurveReferencedOverlaySequence (50xx,2600) SQ (retired)
pub const CURVE_REFERENCED_OVERLAY_SEQUENCE: Tag = Tag(0x5000, 0x2600);
/// CurveReferencedOverlayGroup (50xx,2610) US (retired)
pub const CURVE_REFERENCED_OVERLAY_GROUP: Tag = Tag(0x5000, 0x2610);
/// CurveData (50xx,3000) OW (retired)
pub const CURVE_DATA: Tag = Tag(0x5000, 0x3000);
/// SharedFunctionalGroupsSequence (5200,9229) SQ
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// WaveformSequence (5400,0100) SQ
pub const WAVEFORM_SEQUENCE: Tag = Tag(0x5400, 0x0100);
/// ChannelMinimumValue (5400,0110) OB
pub const CHANNEL_MINIMUM_VALUE: Tag = Tag(0x5400, 0x0110);
/// ChannelMaximumValue (5400,0112) OB
pub const CHANNEL_MAXIMUM_VALUE: Tag = Tag(0x5400, 0x0112);
/// WaveformBitsAllocated (5400,1004) US
pub const WAVEFORM_BITS_ALLOCATED: Tag = Tag(0x5400, 0x1004);
/// WaveformSampleInterpretation (5400,1006) CS
pub const WAVEFORM_SAMPLE_INTERPRETATION: Tag = Tag(0x5400, 0x1006);
/// WaveformPaddingValue (5400,100A) OB
pub const WAVEFORM_PADDING_VALUE: Tag = Tag(0x5400, 0x100A);
/// WaveformData (5400,1010) OW
pub const WAVEFORM_DATA: Tag = Tag(0x5400, 0x1010);
/// FirstOrderPhaseCorrectionAngle (5600,0010) OF
pub const FIRST_ORDER_PHASE_CORRECTION_ANGLE: Tag = Tag(0x5600, 0x0010);
/// SpectroscopyData (5600,0020) OF
pub const SPECTROSCOPY_DATA: Tag = Tag(0x5600, 0x0020);
/// OverlayRows (60xx,0010) US
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// OverlayColumns (60xx,0011) US
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// OverlayPlanes (60xx,0012) US (retired)
pub const OVERLAY_PLANES: Tag = Tag(0x6000, 0x0012);
/// NumberOfFramesInOverlay (60xx,0015) IS
pub const NUMBER_OF_FRAMES_IN_OVERLAY: Tag = Tag(0x6000, 0x0015);
/// OverlayDescription (60xx,0022) LO
pub const OVERLAY_DESCRIPTION: Tag = Tag(0x6000, 0x0022);
/// OverlayType (60xx,0040) CS
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// OverlaySubtype (60xx,0045) LO
pub const OVERLAY_SUBTYPE: Tag = Tag(0x6000, 0x0045);
/// OverlayOrigin (60xx,0050) SS
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// ImageFrameOrigin (60xx,0051) US
pub const IMAGE_FRAME_ORIGIN: Tag = Tag(0x6000, 0x0051);
/// OverlayPlaneOrigin (60xx,0052) US (retired)
pub const OVERLAY_PLANE_ORIGIN: Tag = Tag(0x6000, 0x0052);
/// OverlayCompressionCode (60xx,0060) CS (retired)
pub const OVERLAY_COMPRESSION_CODE: Tag = Tag(0x6000, 0x0060);
/// OverlayCompressionOriginator (60xx,0061) SH (retired)
pub const OVERLAY_COMPRESSION_ORIGINATOR: Tag = Tag(0x6000, 0x0061);
/// OverlayCompressionLabel (60xx,0062) SH (retired)
pub const OVERLAY_COMPRESSION_LABEL: Tag = Tag(0x6000, 0x0062);
/// OverlayCompressionDescription (60xx,0063) CS (retired)
pub const OVERLAY_COMPRESSION_DESCRIPTION: Tag = Tag(0x6000, 0x0063);
/// OverlayCompressionStepPointers (60xx,0066) AT (retired)
pub const OVERLAY_COMPRESSION_STEP_POINTERS: Tag = Tag(0x6000, 0x0066);
/// OverlayRepeatInterval (60xx,0068) US (retired)
pub const OVERLAY_REPEAT_INTERVAL: Tag = Tag(0x6000, 0x0068);
/// OverlayBitsGrouped (60xx,0069) US (retired)
pub const OVERLAY_BITS_GROUPED: Tag = Tag(0x6000, 0x0069);
/// OverlayBitsAllocated (60xx,0100) US
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// OverlayBitPosition (60xx,0102) US
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// OverlayFormat (60xx,0110) CS (retired)
pub const OVERLAY_FORMAT: Tag = Tag(0x6000, 0x0110);
/// OverlayLocation (60xx,0200) US (retired)
pub const OVERLAY_LOCATION: Tag = Tag(0x6000, 0x0200);
/// OverlayCodeLabel (60xx,0800) CS (retired)
pub const OVERLAY_CODE_LABEL: Tag = Tag(0x6000, 0x0800);
/// OverlayNumberOfTables (60xx,0802) US (retired)
pub const OVERLAY_NUMBER_OF_TABLES: Tag = Tag(0x6000, 0x0802);
/// OverlayCodeTableLocation (60xx,0803) AT (retired)
pub const OVERLAY_CODE_TABLE_LOCATION: Tag = Tag(0x6000, 0x0803);
/// OverlayBitsForCodeWord (60xx,0804) US (retired)
pub const OVERLAY_BITS_FOR_CODE_WORD: Tag = Tag(0x6000, 0x0804);
/// OverlayActivationLayer (60xx,1001) CS
pub const OVERLAY_ACTIVATION_LAYER: Tag = Tag(0x6000, 0x1001);
/// OverlayDescriptorGray (60xx,1100) US (retired)
pub const OVERLAY_DESCRIPTOR_GRAY: Tag = Tag(0x6000, 0x1100);
/// OverlayDescriptorRed (60xx,1101) US (retired)
pub const OVERLAY_DESCRIPTOR_RED: Tag = Tag(0x6000, 0x1101);
/// OverlayDescriptorGreen (60xx,1102) US (retired)
pub const OVERLAY_DESCRIPTOR_GREEN: Tag = Tag(0x6000, 0x1102);
/// OverlayDescriptorBlue (60xx,1103) US (retired)
pub const OVERLAY_DESCRIPTOR_BLUE: Tag = Tag(0x6000, 0x1103);
/// OverlaysGray (60xx,1200) US (retired)
pub const OVERLAYS_GRAY: Tag = Tag(0x6000, 0x1200);
/// OverlaysRed (60xx,1201) US (retired)
pub const OVERLAYS_RED: Tag = Tag(0x6000, 0x1201);
/// OverlaysGreen (60xx,1202) US (retired)
pub const OVERLAYS_GREEN: Tag = Tag(0x6000, 0x1202);
/// OverlaysBlue (60xx,1203) US (retired)
pub const OVERLAYS_BLUE: Tag = Tag(0x6000, 0x1203);
/// ROIArea (60xx,1301) IS
pub const ROI_AREA: Tag = Tag(0x6000, 0x1301);
/// ROIMean (60xx,1302) DS
pub const ROI_MEAN: Tag = Tag(0x6000, 0x1302);
/// ROIStandardDeviation (60xx,1303) DS
pub const ROI_STANDARD_DEVIATION: Tag = Tag(0x6000, 0x1303);
/// OverlayLabel (60xx,1500) LO
pub const OVERLAY_LABEL: Tag = Tag(0x6000, 0x1500);
/// OverlayData (60xx,3000) OW
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);
/// OverlayComments (60xx,4000) LT (retired)
pub const OVERLAY_COMMENTS: Tag = Tag(0x6000, 0x4000);
/// ExtendedOffsetTable (7FE0,0001) OV
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// EncapsulatedPixelDataValueTotalLength (7FE0,0003) UV
pub const ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH: Tag = Tag(0x7FE0, 0x0003);
/// FloatPixelData (7FE0,0008) OF
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OW
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// CoefficientsSDVN (7FE0,0020) OW (retired)
pub const COEFFICIENTS_SDVN: Tag = Tag(0x7FE0, 0x0020);
/// CoefficientsSDHN (7FE0,0030) OW (retired)
pub const COEFFICIENTS_SDHN: Tag = Tag(0x7FE0, 0x0030);
/// CoefficientsSDDN (7FE0,0040) OW (retired)
pub const COEFFICIENTS_SDDN: Tag = Tag(0x7FE0, 0x0040);
/// DigitalSignaturesSequence (FFFA,FFFA) SQ
pub const DIGITAL_SIGNATURES_SEQUENCE: Tag = Tag(0xFFFA, 0xFFFA);
/// DataSetTrailingPadding (FFFC,FFFC) OB
pub const DATA_SET_TRAILING_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
/// Item (FFFE,E000) UN
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

/// All attributes known to the standard data dictionary.
#[rustfmt::skip]
pub(crate) const ENTRIES: &[DataDictionaryEntryRef<'static>] = &[
    DataDictionaryEntryRef { tag: COMMAND_GROUP_LENGTH, alias: "CommandGroupLength", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMAND_LENGTH_TO_END, alias: "CommandLengthToEnd", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AFFECTED_SOP_CLASS_UID, alias: "AffectedSOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_SOP_CLASS_UID, alias: "RequestedSOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMAND_RECOGNITION_CODE, alias: "CommandRecognitionCode", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMAND_FIELD, alias: "CommandField", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MESSAGE_ID, alias: "MessageID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MESSAGE_ID_BEING_RESPONDED_TO, alias: "MessageIDBeingRespondedTo", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INITIATOR, alias: "Initiator", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVER, alias: "Receiver", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIND_LOCATION, alias: "FindLocation", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MOVE_DESTINATION, alias: "MoveDestination", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIORITY, alias: "Priority", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMAND_DATA_SET_TYPE, alias: "CommandDataSetType", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_MATCHES, alias: "NumberOfMatches", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPONSE_SEQUENCE_NUMBER, alias: "ResponseSequenceNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STATUS, alias: "Status", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OFFENDING_ELEMENT, alias: "OffendingElement", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ERROR_COMMENT, alias: "ErrorComment", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ERROR_ID, alias: "ErrorID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AFFECTED_SOP_INSTANCE_UID, alias: "AffectedSOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_SOP_INSTANCE_UID, alias: "RequestedSOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVENT_TYPE_ID, alias: "EventTypeID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_IDENTIFIER_LIST, alias: "AttributeIdentifierList", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ACTION_TYPE_ID, alias: "ActionTypeID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_REMAINING_SUBOPERATIONS, alias: "NumberOfRemainingSuboperations", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_COMPLETED_SUBOPERATIONS, alias: "NumberOfCompletedSuboperations", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FAILED_SUBOPERATIONS, alias: "NumberOfFailedSuboperations", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_WARNING_SUBOPERATIONS, alias: "NumberOfWarningSuboperations", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MOVE_ORIGINATOR_APPLICATION_ENTITY_TITLE, alias: "MoveOriginatorApplicationEntityTitle", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MOVE_ORIGINATOR_MESSAGE_ID, alias: "MoveOriginatorMessageID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIALOG_RECEIVER, alias: "DialogReceiver", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINAL_TYPE, alias: "TerminalType", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MESSAGE_SET_ID, alias: "MessageSetID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: END_MESSAGE_ID, alias: "EndMessageID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_FORMAT, alias: "DisplayFormat", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PAGE_POSITION_ID, alias: "PagePositionID", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXT_FORMAT_ID, alias: "TextFormatID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NORMAL_REVERSE, alias: "NormalReverse", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADD_GRAY_SCALE, alias: "AddGrayScale", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BORDERS, alias: "Borders", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COPIES, alias: "Copies", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMAND_MAGNIFICATION_TYPE, alias: "CommandMagnificationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ERASE, alias: "Erase", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINT, alias: "Print", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAYS, alias: "Overlays", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATION_ENTITY_TITLE, alias: "SourceApplicationEntityTitle", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SENDING_APPLICATION_ENTITY_TITLE, alias: "SendingApplicationEntityTitle", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVING_APPLICATION_ENTITY_TITLE, alias: "ReceivingApplicationEntityTitle", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_PRESENTATION_ADDRESS, alias: "SourcePresentationAddress", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SENDING_PRESENTATION_ADDRESS, alias: "SendingPresentationAddress", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVING_PRESENTATION_ADDRESS, alias: "ReceivingPresentationAddress", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_META_INFORMATION_VERSION, alias: "RTVMetaInformationVersion", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_COMMUNICATION_SOP_CLASS_UID, alias: "RTVCommunicationSOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_COMMUNICATION_SOP_INSTANCE_UID, alias: "RTVCommunicationSOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_SOURCE_IDENTIFIER, alias: "RTVSourceIdentifier", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_FLOW_IDENTIFIER, alias: "RTVFlowIdentifier", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_FLOW_RTP_SAMPLING_RATE, alias: "RTVFlowRTPSamplingRate", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTV_FLOW_ACTUAL_FRAME_DURATION, alias: "RTVFlowActualFrameDuration", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_INFORMATION_CREATOR_UID, alias: "PrivateInformationCreatorUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_INFORMATION, alias: "PrivateInformation", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILE_SET_ID, alias: "FileSetID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILE_SET_DESCRIPTOR_FILE_ID, alias: "FileSetDescriptorFileID", vr: VR::CS, vm: (1, 8) },
    DataDictionaryEntryRef { tag: SPECIFIC_CHARACTER_SET_OF_FILE_SET_DESCRIPTOR_FILE, alias: "SpecificCharacterSetOfFileSetDescriptorFile", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OFFSET_OF_THE_FIRST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, alias: "OffsetOfTheFirstDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OFFSET_OF_THE_LAST_DIRECTORY_RECORD_OF_THE_ROOT_DIRECTORY_ENTITY, alias: "OffsetOfTheLastDirectoryRecordOfTheRootDirectoryEntity", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILE_SET_CONSISTENCY_FLAG, alias: "FileSetConsistencyFlag", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIRECTORY_RECORD_SEQUENCE, alias: "DirectoryRecordSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OFFSET_OF_THE_NEXT_DIRECTORY_RECORD, alias: "OffsetOfTheNextDirectoryRecord", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORD_IN_USE_FLAG, alias: "RecordInUseFlag", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OFFSET_OF_REFERENCED_LOWER_LEVEL_DIRECTORY_ENTITY, alias: "OffsetOfReferencedLowerLevelDirectoryEntity", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIRECTORY_RECORD_TYPE, alias: "DirectoryRecordType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_RECORD_UID, alias: "PrivateRecordUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FILE_ID, alias: "ReferencedFileID", vr: VR::CS, vm: (1, 8) },
    DataDictionaryEntryRef { tag: MRDR_DIRECTORY_RECORD_OFFSET, alias: "MRDRDirectoryRecordOffset", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOP_CLASS_UID_IN_FILE, alias: "ReferencedSOPClassUIDInFile", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOP_INSTANCE_UID_IN_FILE, alias: "ReferencedSOPInstanceUIDInFile", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TRANSFER_SYNTAX_UID_IN_FILE, alias: "ReferencedTransferSyntaxUIDInFile", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RELATED_GENERAL_SOP_CLASS_UID_IN_FILE, alias: "ReferencedRelatedGeneralSOPClassUIDInFile", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_REFERENCES, alias: "NumberOfReferences", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENGTH_TO_END, alias: "LengthToEnd", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: LANGUAGE_CODE_SEQUENCE, alias: "LanguageCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_TYPE, alias: "ImageType", vr: VR::CS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: RECOGNITION_CODE, alias: "RecognitionCode", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTANCE_CREATION_DATE, alias: "InstanceCreationDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTANCE_CREATION_TIME, alias: "InstanceCreationTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTANCE_CREATOR_UID, alias: "InstanceCreatorUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTANCE_COERCION_DATE_TIME, alias: "InstanceCoercionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_UID, alias: "AcquisitionUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PYRAMID_UID, alias: "PyramidUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATED_GENERAL_SOP_CLASS_UID, alias: "RelatedGeneralSOPClassUID", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ORIGINAL_SPECIALIZED_SOP_CLASS_UID, alias: "OriginalSpecializedSOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_DATE, alias: "StudyDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_DATE, alias: "SeriesDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_DATE, alias: "ContentDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DATE, alias: "OverlayDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_DATE, alias: "CurveDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_DATE_TIME, alias: "AcquisitionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_TIME, alias: "StudyTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_TIME, alias: "SeriesTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_TIME, alias: "ContentTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_TIME, alias: "OverlayTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_TIME, alias: "CurveTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_TYPE, alias: "DataSetType", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_SUBTYPE, alias: "DataSetSubtype", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUCLEAR_MEDICINE_SERIES_TYPE, alias: "NuclearMedicineSeriesType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_ACCESSION_NUMBER_SEQUENCE, alias: "IssuerOfAccessionNumberSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUERY_RETRIEVE_LEVEL, alias: "QueryRetrieveLevel", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUERY_RETRIEVE_VIEW, alias: "QueryRetrieveView", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETRIEVE_AE_TITLE, alias: "RetrieveAETitle", vr: VR::AE, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: STATION_AE_TITLE, alias: "StationAETitle", vr: VR::AE, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: INSTANCE_AVAILABILITY, alias: "InstanceAvailability", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FAILED_SOP_INSTANCE_UID_LIST, alias: "FailedSOPInstanceUIDList", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MODALITY, alias: "Modality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODALITIES_IN_STUDY, alias: "ModalitiesInStudy", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SOP_CLASSES_IN_STUDY, alias: "SOPClassesInStudy", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ANATOMIC_REGIONS_IN_STUDY_CODE_SEQUENCE, alias: "AnatomicRegionsInStudyCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONVERSION_TYPE, alias: "ConversionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_INTENT_TYPE, alias: "PresentationIntentType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANUFACTURER, alias: "Manufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTITUTION_ADDRESS, alias: "InstitutionAddress", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTITUTION_CODE_SEQUENCE, alias: "InstitutionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERRING_PHYSICIAN_ADDRESS, alias: "ReferringPhysicianAddress", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERRING_PHYSICIAN_TELEPHONE_NUMBERS, alias: "ReferringPhysicianTelephoneNumbers", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERRING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ReferringPhysicianIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONSULTING_PHYSICIAN_NAME, alias: "ConsultingPhysicianName", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CONSULTING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ConsultingPhysicianIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODE_VALUE, alias: "CodeValue", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXTENDED_CODE_VALUE, alias: "ExtendedCodeValue", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_VERSION, alias: "CodingSchemeVersion", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODE_MEANING, alias: "CodeMeaning", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAPPING_RESOURCE, alias: "MappingResource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_GROUP_VERSION, alias: "ContextGroupVersion", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_GROUP_LOCAL_VERSION, alias: "ContextGroupLocalVersion", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXTENDED_CODE_MEANING, alias: "ExtendedCodeMeaning", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_RESOURCES_SEQUENCE, alias: "CodingSchemeResourcesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_URL_TYPE, alias: "CodingSchemeURLType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_GROUP_EXTENSION_FLAG, alias: "ContextGroupExtensionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_UID, alias: "CodingSchemeUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_GROUP_EXTENSION_CREATOR_UID, alias: "ContextGroupExtensionCreatorUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_URL, alias: "CodingSchemeURL", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_IDENTIFIER, alias: "ContextIdentifier", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_IDENTIFICATION_SEQUENCE, alias: "CodingSchemeIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_REGISTRY, alias: "CodingSchemeRegistry", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_EXTERNAL_ID, alias: "CodingSchemeExternalID", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_NAME, alias: "CodingSchemeName", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODING_SCHEME_RESPONSIBLE_ORGANIZATION, alias: "CodingSchemeResponsibleOrganization", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_UID, alias: "ContextUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAPPING_RESOURCE_UID, alias: "MappingResourceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONG_CODE_VALUE, alias: "LongCodeValue", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: URN_CODE_VALUE, alias: "URNCodeValue", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EQUIVALENT_CODE_SEQUENCE, alias: "EquivalentCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAPPING_RESOURCE_NAME, alias: "MappingResourceName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTEXT_GROUP_IDENTIFICATION_SEQUENCE, alias: "ContextGroupIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAPPING_RESOURCE_IDENTIFICATION_SEQUENCE, alias: "MappingResourceIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIMEZONE_OFFSET_FROM_UTC, alias: "TimezoneOffsetFromUTC", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPONSIBLE_GROUP_CODE_SEQUENCE, alias: "ResponsibleGroupCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EQUIPMENT_MODALITY, alias: "EquipmentModality", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANUFACTURER_RELATED_MODEL_GROUP, alias: "ManufacturerRelatedModelGroup", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_CHARACTERISTICS_SEQUENCE, alias: "PrivateDataElementCharacteristicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_GROUP_REFERENCE, alias: "PrivateGroupReference", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_CREATOR_REFERENCE, alias: "PrivateCreatorReference", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_IDENTIFYING_INFORMATION_STATUS, alias: "BlockIdentifyingInformationStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NONIDENTIFYING_PRIVATE_ELEMENTS, alias: "NonidentifyingPrivateElements", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DEIDENTIFICATION_ACTION_SEQUENCE, alias: "DeidentificationActionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IDENTIFYING_PRIVATE_ELEMENTS, alias: "IdentifyingPrivateElements", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DEIDENTIFICATION_ACTION, alias: "DeidentificationAction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT, alias: "PrivateDataElement", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_VALUE_MULTIPLICITY, alias: "PrivateDataElementValueMultiplicity", vr: VR::UL, vm: (1, 3) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_VALUE_REPRESENTATION, alias: "PrivateDataElementValueRepresentation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_NUMBER_OF_ITEMS, alias: "PrivateDataElementNumberOfItems", vr: VR::UL, vm: (1, 2) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_NAME, alias: "PrivateDataElementName", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_KEYWORD, alias: "PrivateDataElementKeyword", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_DESCRIPTION, alias: "PrivateDataElementDescription", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_ENCODING, alias: "PrivateDataElementEncoding", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIVATE_DATA_ELEMENT_DEFINITION_SEQUENCE, alias: "PrivateDataElementDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NETWORK_ID, alias: "NetworkID", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STATION_NAME, alias: "StationName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_CODE_SEQUENCE, alias: "ProcedureCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_DESCRIPTION_CODE_SEQUENCE, alias: "SeriesDescriptionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTITUTIONAL_DEPARTMENT_NAME, alias: "InstitutionalDepartmentName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTITUTIONAL_DEPARTMENT_TYPE_CODE_SEQUENCE, alias: "InstitutionalDepartmentTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHYSICIANS_OF_RECORD, alias: "PhysiciansOfRecord", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PHYSICIANS_OF_RECORD_IDENTIFICATION_SEQUENCE, alias: "PhysiciansOfRecordIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMING_PHYSICIAN_NAME, alias: "PerformingPhysicianName", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "PerformingPhysicianIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NAME_OF_PHYSICIANS_READING_STUDY, alias: "NameOfPhysiciansReadingStudy", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PHYSICIANS_READING_STUDY_IDENTIFICATION_SEQUENCE, alias: "PhysiciansReadingStudyIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPERATORS_NAME, alias: "OperatorsName", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OPERATOR_IDENTIFICATION_SEQUENCE, alias: "OperatorIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADMITTING_DIAGNOSES_DESCRIPTION, alias: "AdmittingDiagnosesDescription", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ADMITTING_DIAGNOSES_CODE_SEQUENCE, alias: "AdmittingDiagnosesCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PYRAMID_DESCRIPTION, alias: "PyramidDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RESULTS_SEQUENCE, alias: "ReferencedResultsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_STUDY_SEQUENCE, alias: "ReferencedStudySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedPerformedProcedureStepSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_INSTANCES_BY_SOP_CLASS_SEQUENCE, alias: "ReferencedInstancesBySOPClassSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SERIES_SEQUENCE, alias: "ReferencedSeriesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PATIENT_SEQUENCE, alias: "ReferencedPatientSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_VISIT_SEQUENCE, alias: "ReferencedVisitSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OVERLAY_SEQUENCE, alias: "ReferencedOverlaySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_STEREOMETRIC_INSTANCE_SEQUENCE, alias: "ReferencedStereometricInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_WAVEFORM_SEQUENCE, alias: "ReferencedWaveformSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_SEQUENCE, alias: "ReferencedImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CURVE_SEQUENCE, alias: "ReferencedCurveSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_INSTANCE_SEQUENCE, alias: "ReferencedInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_REAL_WORLD_VALUE_MAPPING_INSTANCE_SEQUENCE, alias: "ReferencedRealWorldValueMappingInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOP_CLASS_UID, alias: "ReferencedSOPClassUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOP_INSTANCE_UID, alias: "ReferencedSOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEFINITION_SOURCE_SEQUENCE, alias: "DefinitionSourceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOP_CLASSES_SUPPORTED, alias: "SOPClassesSupported", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_FRAME_NUMBER, alias: "ReferencedFrameNumber", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SIMPLE_FRAME_LIST, alias: "SimpleFrameList", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CALCULATED_FRAME_LIST, alias: "CalculatedFrameList", vr: VR::UL, vm: (3, VM_N) },
    DataDictionaryEntryRef { tag: TIME_RANGE, alias: "TimeRange", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: FRAME_EXTRACTION_SEQUENCE, alias: "FrameExtractionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_FRAME_SOURCE_SOP_INSTANCE_UID, alias: "MultiFrameSourceSOPInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETRIEVE_URL, alias: "RetrieveURL", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSACTION_UID, alias: "TransactionUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WARNING_REASON, alias: "WarningReason", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FAILURE_REASON, alias: "FailureReason", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FAILED_SOP_SEQUENCE, alias: "FailedSOPSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOP_SEQUENCE, alias: "ReferencedSOPSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_FAILURES_SEQUENCE, alias: "OtherFailuresSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FAILED_STUDY_SEQUENCE, alias: "FailedStudySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDIES_CONTAINING_OTHER_REFERENCED_INSTANCES_SEQUENCE, alias: "StudiesContainingOtherReferencedInstancesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATED_SERIES_SEQUENCE, alias: "RelatedSeriesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOSSY_IMAGE_COMPRESSION_RETIRED, alias: "LossyImageCompressionRetired", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DERIVATION_DESCRIPTION, alias: "DerivationDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_IMAGE_SEQUENCE, alias: "SourceImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STAGE_NAME, alias: "StageName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STAGE_NUMBER, alias: "StageNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_STAGES, alias: "NumberOfStages", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_NAME, alias: "ViewName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_NUMBER, alias: "ViewNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_EVENT_TIMERS, alias: "NumberOfEventTimers", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_VIEWS_IN_STAGE, alias: "NumberOfViewsInStage", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVENT_ELAPSED_TIMES, alias: "EventElapsedTimes", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: EVENT_TIMER_NAMES, alias: "EventTimerNames", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: EVENT_TIMER_SEQUENCE, alias: "EventTimerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVENT_TIME_OFFSET, alias: "EventTimeOffset", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVENT_CODE_SEQUENCE, alias: "EventCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_TRIM, alias: "StartTrim", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STOP_TRIM, alias: "StopTrim", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_DISPLAY_FRAME_RATE, alias: "RecommendedDisplayFrameRate", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_POSITION, alias: "TransducerPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_ORIENTATION, alias: "TransducerOrientation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANATOMIC_STRUCTURE, alias: "AnatomicStructure", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANATOMIC_REGION_SEQUENCE, alias: "AnatomicRegionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANATOMIC_REGION_MODIFIER_SEQUENCE, alias: "AnatomicRegionModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_ANATOMIC_STRUCTURE_SEQUENCE, alias: "PrimaryAnatomicStructureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANATOMIC_STRUCTURE_SPACE_OR_REGION_SEQUENCE, alias: "AnatomicStructureSpaceOrRegionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_ANATOMIC_STRUCTURE_MODIFIER_SEQUENCE, alias: "PrimaryAnatomicStructureModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_POSITION_SEQUENCE, alias: "TransducerPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_POSITION_MODIFIER_SEQUENCE, alias: "TransducerPositionModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_ORIENTATION_SEQUENCE, alias: "TransducerOrientationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_ORIENTATION_MODIFIER_SEQUENCE, alias: "TransducerOrientationModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALTERNATE_REPRESENTATION_SEQUENCE, alias: "AlternateRepresentationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AVAILABLE_TRANSFER_SYNTAX_UID, alias: "AvailableTransferSyntaxUID", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: IRRADIATION_EVENT_UID, alias: "IrradiationEventUID", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SOURCE_IRRADIATION_EVENT_SEQUENCE, alias: "SourceIrradiationEventSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_ADMINISTRATION_EVENT_UID, alias: "RadiopharmaceuticalAdministrationEventUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IDENTIFYING_COMMENTS, alias: "IdentifyingComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_TYPE, alias: "FrameType", vr: VR::CS, vm: (4, 5) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_EVIDENCE_SEQUENCE, alias: "ReferencedImageEvidenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RAW_DATA_SEQUENCE, alias: "ReferencedRawDataSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CREATOR_VERSION_UID, alias: "CreatorVersionUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DERIVATION_IMAGE_SEQUENCE, alias: "DerivationImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_IMAGE_EVIDENCE_SEQUENCE, alias: "SourceImageEvidenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_PRESENTATION, alias: "PixelPresentation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUMETRIC_PROPERTIES, alias: "VolumetricProperties", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUME_BASED_CALCULATION_TECHNIQUE, alias: "VolumeBasedCalculationTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPLEX_IMAGE_COMPONENT, alias: "ComplexImageComponent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_CONTRAST, alias: "AcquisitionContrast", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DERIVATION_CODE_SEQUENCE, alias: "DerivationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PRESENTATION_STATE_SEQUENCE, alias: "ReferencedPresentationStateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OTHER_PLANE_SEQUENCE, alias: "ReferencedOtherPlaneSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_DISPLAY_SEQUENCE, alias: "FrameDisplaySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_DISPLAY_FRAME_RATE_IN_FLOAT, alias: "RecommendedDisplayFrameRateInFloat", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SKIP_FRAME_RANGE_FLAG, alias: "SkipFrameRangeFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_NAME, alias: "PatientName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ID, alias: "PatientID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_PATIENT_ID, alias: "IssuerOfPatientID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TYPE_OF_PATIENT_ID, alias: "TypeOfPatientID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_PATIENT_ID_QUALIFIERS_SEQUENCE, alias: "IssuerOfPatientIDQualifiersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_PATIENT_GROUP_IDENTIFICATION_SEQUENCE, alias: "SourcePatientGroupIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GROUP_OF_PATIENTS_IDENTIFICATION_SEQUENCE, alias: "GroupOfPatientsIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBJECT_RELATIVE_POSITION_IN_IMAGE, alias: "SubjectRelativePositionInImage", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_BIRTH_TIME, alias: "PatientBirthTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_BIRTH_DATE_IN_ALTERNATIVE_CALENDAR, alias: "PatientBirthDateInAlternativeCalendar", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_DEATH_DATE_IN_ALTERNATIVE_CALENDAR, alias: "PatientDeathDateInAlternativeCalendar", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ALTERNATIVE_CALENDAR, alias: "PatientAlternativeCalendar", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SEX, alias: "PatientSex", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_INSURANCE_PLAN_CODE_SEQUENCE, alias: "PatientInsurancePlanCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_PRIMARY_LANGUAGE_CODE_SEQUENCE, alias: "PatientPrimaryLanguageCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_PRIMARY_LANGUAGE_MODIFIER_CODE_SEQUENCE, alias: "PatientPrimaryLanguageModifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUALITY_CONTROL_SUBJECT, alias: "QualityControlSubject", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUALITY_CONTROL_SUBJECT_TYPE_CODE_SEQUENCE, alias: "QualityControlSubjectTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_DESCRIPTION, alias: "StrainDescription", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_NOMENCLATURE, alias: "StrainNomenclature", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_STOCK_NUMBER, alias: "StrainStockNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_SOURCE_REGISTRY_CODE_SEQUENCE, alias: "StrainSourceRegistryCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_STOCK_SEQUENCE, alias: "StrainStockSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_SOURCE, alias: "StrainSource", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_ADDITIONAL_INFORMATION, alias: "StrainAdditionalInformation", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRAIN_CODE_SEQUENCE, alias: "StrainCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENETIC_MODIFICATIONS_SEQUENCE, alias: "GeneticModificationsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENETIC_MODIFICATIONS_DESCRIPTION, alias: "GeneticModificationsDescription", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENETIC_MODIFICATIONS_NOMENCLATURE, alias: "GeneticModificationsNomenclature", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENETIC_MODIFICATIONS_CODE_SEQUENCE, alias: "GeneticModificationsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_PATIENT_I_DS, alias: "OtherPatientIDs", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OTHER_PATIENT_NAMES, alias: "OtherPatientNames", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OTHER_PATIENT_IDS_SEQUENCE, alias: "OtherPatientIDsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_BIRTH_NAME, alias: "PatientBirthName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_AGE, alias: "PatientAge", vr: VR::AS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SIZE, alias: "PatientSize", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SIZE_CODE_SEQUENCE, alias: "PatientSizeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_BODY_MASS_INDEX, alias: "PatientBodyMassIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_AP_DIMENSION, alias: "MeasuredAPDimension", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_LATERAL_DIMENSION, alias: "MeasuredLateralDimension", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_WEIGHT, alias: "PatientWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ADDRESS, alias: "PatientAddress", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSURANCE_PLAN_IDENTIFICATION, alias: "InsurancePlanIdentification", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PATIENT_MOTHER_BIRTH_NAME, alias: "PatientMotherBirthName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MILITARY_RANK, alias: "MilitaryRank", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRANCH_OF_SERVICE, alias: "BranchOfService", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDICAL_RECORD_LOCATOR, alias: "MedicalRecordLocator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PATIENT_PHOTO_SEQUENCE, alias: "ReferencedPatientPhotoSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDICAL_ALERTS, alias: "MedicalAlerts", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ALLERGIES, alias: "Allergies", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COUNTRY_OF_RESIDENCE, alias: "CountryOfResidence", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_OF_RESIDENCE, alias: "RegionOfResidence", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_TELEPHONE_NUMBERS, alias: "PatientTelephoneNumbers", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PATIENT_TELECOM_INFORMATION, alias: "PatientTelecomInformation", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ETHNIC_GROUP, alias: "EthnicGroup", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OCCUPATION, alias: "Occupation", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SMOKING_STATUS, alias: "SmokingStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDITIONAL_PATIENT_HISTORY, alias: "AdditionalPatientHistory", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREGNANCY_STATUS, alias: "PregnancyStatus", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LAST_MENSTRUAL_DATE, alias: "LastMenstrualDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_RELIGIOUS_PREFERENCE, alias: "PatientReligiousPreference", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SPECIES_DESCRIPTION, alias: "PatientSpeciesDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SPECIES_CODE_SEQUENCE, alias: "PatientSpeciesCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SEX_NEUTERED, alias: "PatientSexNeutered", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANATOMICAL_ORIENTATION_TYPE, alias: "AnatomicalOrientationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_BREED_DESCRIPTION, alias: "PatientBreedDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_BREED_CODE_SEQUENCE, alias: "PatientBreedCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREED_REGISTRATION_SEQUENCE, alias: "BreedRegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREED_REGISTRATION_NUMBER, alias: "BreedRegistrationNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREED_REGISTRY_CODE_SEQUENCE, alias: "BreedRegistryCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPONSIBLE_PERSON, alias: "ResponsiblePerson", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPONSIBLE_PERSON_ROLE, alias: "ResponsiblePersonRole", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPONSIBLE_ORGANIZATION, alias: "ResponsibleOrganization", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_COMMENTS, alias: "PatientComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXAMINED_BODY_THICKNESS, alias: "ExaminedBodyThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SPONSOR_NAME, alias: "ClinicalTrialSponsorName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_PROTOCOL_ID, alias: "ClinicalTrialProtocolID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_PROTOCOL_NAME, alias: "ClinicalTrialProtocolName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SITE_ID, alias: "ClinicalTrialSiteID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SITE_NAME, alias: "ClinicalTrialSiteName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SUBJECT_ID, alias: "ClinicalTrialSubjectID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SUBJECT_READING_ID, alias: "ClinicalTrialSubjectReadingID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_TIME_POINT_ID, alias: "ClinicalTrialTimePointID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_TIME_POINT_DESCRIPTION, alias: "ClinicalTrialTimePointDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONGITUDINAL_TEMPORAL_OFFSET_FROM_EVENT, alias: "LongitudinalTemporalOffsetFromEvent", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONGITUDINAL_TEMPORAL_EVENT_TYPE, alias: "LongitudinalTemporalEventType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_TIME_POINT_TYPE_CODE_SEQUENCE, alias: "ClinicalTrialTimePointTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_COORDINATING_CENTER_NAME, alias: "ClinicalTrialCoordinatingCenterName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_IDENTITY_REMOVED, alias: "PatientIdentityRemoved", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEIDENTIFICATION_METHOD, alias: "DeidentificationMethod", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DEIDENTIFICATION_METHOD_CODE_SEQUENCE, alias: "DeidentificationMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SERIES_ID, alias: "ClinicalTrialSeriesID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_SERIES_DESCRIPTION, alias: "ClinicalTrialSeriesDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_NAME, alias: "ClinicalTrialProtocolEthicsCommitteeName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CLINICAL_TRIAL_PROTOCOL_ETHICS_COMMITTEE_APPROVAL_NUMBER, alias: "ClinicalTrialProtocolEthicsCommitteeApprovalNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONSENT_FOR_CLINICAL_TRIAL_USE_SEQUENCE, alias: "ConsentForClinicalTrialUseSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTRIBUTION_TYPE, alias: "DistributionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONSENT_FOR_DISTRIBUTION_FLAG, alias: "ConsentForDistributionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_START_DATE, alias: "EthicsCommitteeApprovalEffectivenessStartDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ETHICS_COMMITTEE_APPROVAL_EFFECTIVENESS_END_DATE, alias: "EthicsCommitteeApprovalEffectivenessEndDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CAD_FILE_FORMAT, alias: "CADFileFormat", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_REFERENCE_SYSTEM, alias: "ComponentReferenceSystem", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_MANUFACTURING_PROCEDURE, alias: "ComponentManufacturingProcedure", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_MANUFACTURER, alias: "ComponentManufacturer", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_THICKNESS, alias: "MaterialThickness", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MATERIAL_PIPE_DIAMETER, alias: "MaterialPipeDiameter", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MATERIAL_ISOLATION_DIAMETER, alias: "MaterialIsolationDiameter", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MATERIAL_GRADE, alias: "MaterialGrade", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_PROPERTIES_DESCRIPTION, alias: "MaterialPropertiesDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_PROPERTIES_FILE_FORMAT_RETIRED, alias: "MaterialPropertiesFileFormatRetired", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_NOTES, alias: "MaterialNotes", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_SHAPE, alias: "ComponentShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVATURE_TYPE, alias: "CurvatureType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTER_DIAMETER, alias: "OuterDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INNER_DIAMETER, alias: "InnerDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_WELDER_I_DS, alias: "ComponentWelderIDs", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SECONDARY_APPROVAL_STATUS, alias: "SecondaryApprovalStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_REVIEW_DATE, alias: "SecondaryReviewDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_REVIEW_TIME, alias: "SecondaryReviewTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_REVIEWER_NAME, alias: "SecondaryReviewerName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPAIR_ID, alias: "RepairID", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLE_COMPONENT_APPROVAL_SEQUENCE, alias: "MultipleComponentApprovalSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_APPROVAL_STATUS, alias: "OtherApprovalStatus", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OTHER_SECONDARY_APPROVAL_STATUS, alias: "OtherSecondaryApprovalStatus", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ACTUAL_ENVIRONMENTAL_CONDITIONS, alias: "ActualEnvironmentalConditions", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPIRY_DATE, alias: "ExpiryDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENVIRONMENTAL_CONDITIONS, alias: "EnvironmentalConditions", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVALUATOR_SEQUENCE, alias: "EvaluatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVALUATOR_NUMBER, alias: "EvaluatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVALUATOR_NAME, alias: "EvaluatorName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EVALUATION_ATTEMPT, alias: "EvaluationAttempt", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_SEQUENCE, alias: "IndicationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_NUMBER, alias: "IndicationNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_LABEL, alias: "IndicationLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_DESCRIPTION, alias: "IndicationDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_TYPE, alias: "IndicationType", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: INDICATION_DISPOSITION, alias: "IndicationDisposition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_ROI_SEQUENCE, alias: "IndicationROISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDICATION_PHYSICAL_PROPERTY_SEQUENCE, alias: "IndicationPhysicalPropertySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROPERTY_LABEL, alias: "PropertyLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_NUMBER_OF_AXES, alias: "CoordinateSystemNumberOfAxes", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXES_SEQUENCE, alias: "CoordinateSystemAxesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXIS_DESCRIPTION, alias: "CoordinateSystemAxisDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_DATA_SET_MAPPING, alias: "CoordinateSystemDataSetMapping", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXIS_NUMBER, alias: "CoordinateSystemAxisNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXIS_TYPE, alias: "CoordinateSystemAxisType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXIS_UNITS, alias: "CoordinateSystemAxisUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXIS_VALUES, alias: "CoordinateSystemAxisValues", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_TRANSFORM_SEQUENCE, alias: "CoordinateSystemTransformSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORM_DESCRIPTION, alias: "TransformDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORM_NUMBER_OF_AXES, alias: "TransformNumberOfAxes", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORM_ORDER_OF_AXES, alias: "TransformOrderOfAxes", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TRANSFORMED_AXIS_UNITS, alias: "TransformedAxisUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_TRANSFORM_ROTATION_AND_SCALE_MATRIX, alias: "CoordinateSystemTransformRotationAndScaleMatrix", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_TRANSFORM_TRANSLATION_MATRIX, alias: "CoordinateSystemTransformTranslationMatrix", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: INTERNAL_DETECTOR_FRAME_TIME, alias: "InternalDetectorFrameTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRAMES_INTEGRATED, alias: "NumberOfFramesIntegrated", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_TEMPERATURE_SEQUENCE, alias: "DetectorTemperatureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SENSOR_NAME, alias: "SensorName", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HORIZONTAL_OFFSET_OF_SENSOR, alias: "HorizontalOffsetOfSensor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICAL_OFFSET_OF_SENSOR, alias: "VerticalOffsetOfSensor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SENSOR_TEMPERATURE, alias: "SensorTemperature", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DARK_CURRENT_SEQUENCE, alias: "DarkCurrentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DARK_CURRENT_COUNTS, alias: "DarkCurrentCounts", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GAIN_CORRECTION_REFERENCE_SEQUENCE, alias: "GainCorrectionReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AIR_COUNTS, alias: "AirCounts", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: KV_USED_IN_GAIN_CALIBRATION, alias: "KVUsedInGainCalibration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MA_USED_IN_GAIN_CALIBRATION, alias: "MAUsedInGainCalibration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRAMES_USED_FOR_INTEGRATION, alias: "NumberOfFramesUsedForIntegration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_MATERIAL_USED_IN_GAIN_CALIBRATION, alias: "FilterMaterialUsedInGainCalibration", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_THICKNESS_USED_IN_GAIN_CALIBRATION, alias: "FilterThicknessUsedInGainCalibration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_OF_GAIN_CALIBRATION, alias: "DateOfGainCalibration", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_GAIN_CALIBRATION, alias: "TimeOfGainCalibration", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BAD_PIXEL_IMAGE, alias: "BadPixelImage", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_NOTES, alias: "CalibrationNotes", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSER_EQUIPMENT_SEQUENCE, alias: "PulserEquipmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSER_TYPE, alias: "PulserType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSER_NOTES, alias: "PulserNotes", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVER_EQUIPMENT_SEQUENCE, alias: "ReceiverEquipmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AMPLIFIER_TYPE, alias: "AmplifierType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVER_NOTES, alias: "ReceiverNotes", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRE_AMPLIFIER_EQUIPMENT_SEQUENCE, alias: "PreAmplifierEquipmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRE_AMPLIFIER_NOTES, alias: "PreAmplifierNotes", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSMIT_TRANSDUCER_SEQUENCE, alias: "TransmitTransducerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVE_TRANSDUCER_SEQUENCE, alias: "ReceiveTransducerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ELEMENTS, alias: "NumberOfElements", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ELEMENT_SHAPE, alias: "ElementShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ELEMENT_DIMENSION_A, alias: "ElementDimensionA", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ELEMENT_DIMENSION_B, alias: "ElementDimensionB", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ELEMENT_PITCH_A, alias: "ElementPitchA", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_BEAM_DIMENSION_A, alias: "MeasuredBeamDimensionA", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_BEAM_DIMENSION_B, alias: "MeasuredBeamDimensionB", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCATION_OF_MEASURED_BEAM_DIAMETER, alias: "LocationOfMeasuredBeamDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_FREQUENCY, alias: "NominalFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_CENTER_FREQUENCY, alias: "MeasuredCenterFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_BANDWIDTH, alias: "MeasuredBandwidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ELEMENT_PITCH_B, alias: "ElementPitchB", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSER_SETTINGS_SEQUENCE, alias: "PulserSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSE_WIDTH, alias: "PulseWidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCITATION_FREQUENCY, alias: "ExcitationFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODULATION_TYPE, alias: "ModulationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DAMPING, alias: "Damping", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVER_SETTINGS_SEQUENCE, alias: "ReceiverSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUIRED_SOUNDPATH_LENGTH, alias: "AcquiredSoundpathLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_COMPRESSION_TYPE, alias: "AcquisitionCompressionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_SAMPLE_SIZE, alias: "AcquisitionSampleSize", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECTIFIER_SMOOTHING, alias: "RectifierSmoothing", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DAC_SEQUENCE, alias: "DACSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DAC_TYPE, alias: "DACType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DAC_GAIN_POINTS, alias: "DACGainPoints", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DAC_TIME_POINTS, alias: "DACTimePoints", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DAC_AMPLITUDE, alias: "DACAmplitude", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PRE_AMPLIFIER_SETTINGS_SEQUENCE, alias: "PreAmplifierSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSMIT_TRANSDUCER_SETTINGS_SEQUENCE, alias: "TransmitTransducerSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVE_TRANSDUCER_SETTINGS_SEQUENCE, alias: "ReceiveTransducerSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INCIDENT_ANGLE, alias: "IncidentAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUPLING_TECHNIQUE, alias: "CouplingTechnique", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUPLING_MEDIUM, alias: "CouplingMedium", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUPLING_VELOCITY, alias: "CouplingVelocity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_CENTER_LOCATION_X, alias: "ProbeCenterLocationX", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_CENTER_LOCATION_Z, alias: "ProbeCenterLocationZ", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOUND_PATH_LENGTH, alias: "SoundPathLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELAY_LAW_IDENTIFIER, alias: "DelayLawIdentifier", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GATE_SETTINGS_SEQUENCE, alias: "GateSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GATE_THRESHOLD, alias: "GateThreshold", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VELOCITY_OF_SOUND, alias: "VelocityOfSound", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_SETTINGS_SEQUENCE, alias: "CalibrationSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_PROCEDURE, alias: "CalibrationProcedure", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_VERSION, alias: "ProcedureVersion", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_CREATION_DATE, alias: "ProcedureCreationDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_EXPIRATION_DATE, alias: "ProcedureExpirationDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_LAST_MODIFIED_DATE, alias: "ProcedureLastModifiedDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_TIME, alias: "CalibrationTime", vr: VR::TM, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CALIBRATION_DATE, alias: "CalibrationDate", vr: VR::DA, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PROBE_DRIVE_EQUIPMENT_SEQUENCE, alias: "ProbeDriveEquipmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DRIVE_TYPE, alias: "DriveType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_DRIVE_NOTES, alias: "ProbeDriveNotes", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DRIVE_PROBE_SEQUENCE, alias: "DriveProbeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_INDUCTANCE, alias: "ProbeInductance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_RESISTANCE, alias: "ProbeResistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVE_PROBE_SEQUENCE, alias: "ReceiveProbeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_DRIVE_SETTINGS_SEQUENCE, alias: "ProbeDriveSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRIDGE_RESISTORS, alias: "BridgeResistors", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROBE_ORIENTATION_ANGLE, alias: "ProbeOrientationAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: USER_SELECTED_GAIN_Y, alias: "UserSelectedGainY", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: USER_SELECTED_PHASE, alias: "UserSelectedPhase", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: USER_SELECTED_OFFSET_X, alias: "UserSelectedOffsetX", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: USER_SELECTED_OFFSET_Y, alias: "UserSelectedOffsetY", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SETTINGS_SEQUENCE, alias: "ChannelSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_THRESHOLD, alias: "ChannelThreshold", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCANNER_SETTINGS_SEQUENCE, alias: "ScannerSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_PROCEDURE, alias: "ScanProcedure", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSLATION_RATE_X, alias: "TranslationRateX", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSLATION_RATE_Y, alias: "TranslationRateY", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_OVERLAP, alias: "ChannelOverlap", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_QUALITY_INDICATOR_TYPE, alias: "ImageQualityIndicatorType", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: IMAGE_QUALITY_INDICATOR_MATERIAL, alias: "ImageQualityIndicatorMaterial", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: IMAGE_QUALITY_INDICATOR_SIZE, alias: "ImageQualityIndicatorSize", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: LINAC_ENERGY, alias: "LINACEnergy", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LINAC_OUTPUT, alias: "LINACOutput", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTIVE_APERTURE, alias: "ActiveAperture", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_APERTURE, alias: "TotalAperture", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APERTURE_ELEVATION, alias: "ApertureElevation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAIN_LOBE_ANGLE, alias: "MainLobeAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAIN_ROOF_ANGLE, alias: "MainRoofAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONNECTOR_TYPE, alias: "ConnectorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_MODEL_NUMBER, alias: "WedgeModelNumber", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ANGLE_FLOAT, alias: "WedgeAngleFloat", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ROOF_ANGLE, alias: "WedgeRoofAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ELEMENT1_POSITION, alias: "WedgeElement1Position", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_MATERIAL_VELOCITY, alias: "WedgeMaterialVelocity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_MATERIAL, alias: "WedgeMaterial", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_OFFSET_Z, alias: "WedgeOffsetZ", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ORIGIN_OFFSET_X, alias: "WedgeOriginOffsetX", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_TIME_DELAY, alias: "WedgeTimeDelay", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_NAME, alias: "WedgeName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_MANUFACTURER_NAME, alias: "WedgeManufacturerName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_DESCRIPTION, alias: "WedgeDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_BEAM_ANGLE, alias: "NominalBeamAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_OFFSET_X, alias: "WedgeOffsetX", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_OFFSET_Y, alias: "WedgeOffsetY", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_TOTAL_LENGTH, alias: "WedgeTotalLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_IN_CONTACT_LENGTH, alias: "WedgeInContactLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_FRONT_GAP, alias: "WedgeFrontGap", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_TOTAL_HEIGHT, alias: "WedgeTotalHeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_FRONT_HEIGHT, alias: "WedgeFrontHeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_REAR_HEIGHT, alias: "WedgeRearHeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_TOTAL_WIDTH, alias: "WedgeTotalWidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_IN_CONTACT_WIDTH, alias: "WedgeInContactWidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_CHAMFER_HEIGHT, alias: "WedgeChamferHeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_CURVE, alias: "WedgeCurve", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIUS_ALONG_WEDGE, alias: "RadiusAlongWedge", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AGENT, alias: "ContrastBolusAgent", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AGENT_SEQUENCE, alias: "ContrastBolusAgentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_T1_RELAXIVITY, alias: "ContrastBolusT1Relaxivity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_ADMINISTRATION_ROUTE_SEQUENCE, alias: "ContrastBolusAdministrationRouteSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCANNING_SEQUENCE, alias: "ScanningSequence", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SEQUENCE_VARIANT, alias: "SequenceVariant", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCAN_OPTIONS, alias: "ScanOptions", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MR_ACQUISITION_TYPE, alias: "MRAcquisitionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEQUENCE_NAME, alias: "SequenceName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANGIO_FLAG, alias: "AngioFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_DRUG_INFORMATION_SEQUENCE, alias: "InterventionDrugInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_DRUG_STOP_TIME, alias: "InterventionDrugStopTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_DRUG_DOSE, alias: "InterventionDrugDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_DRUG_CODE_SEQUENCE, alias: "InterventionDrugCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDITIONAL_DRUG_SEQUENCE, alias: "AdditionalDrugSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIONUCLIDE, alias: "Radionuclide", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL, alias: "Radiopharmaceutical", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_CENTERLINE, alias: "EnergyWindowCenterline", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_TOTAL_WIDTH, alias: "EnergyWindowTotalWidth", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: INTERVENTION_DRUG_NAME, alias: "InterventionDrugName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_DRUG_START_TIME, alias: "InterventionDrugStartTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_SEQUENCE, alias: "InterventionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THERAPY_TYPE, alias: "TherapyType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_STATUS, alias: "InterventionStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THERAPY_DESCRIPTION, alias: "TherapyDescription", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVENTION_DESCRIPTION, alias: "InterventionDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CINE_RATE, alias: "CineRate", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INITIAL_CINE_RUN_STATE, alias: "InitialCineRunState", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: KVP, alias: "KVP", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUNTS_ACCUMULATED, alias: "CountsAccumulated", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_TERMINATION_CONDITION, alias: "AcquisitionTerminationCondition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EFFECTIVE_DURATION, alias: "EffectiveDuration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_START_CONDITION, alias: "AcquisitionStartCondition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_START_CONDITION_DATA, alias: "AcquisitionStartConditionData", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_TERMINATION_CONDITION_DATA, alias: "AcquisitionTerminationConditionData", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPETITION_TIME, alias: "RepetitionTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ECHO_TIME, alias: "EchoTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INVERSION_TIME, alias: "InversionTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_AVERAGES, alias: "NumberOfAverages", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGING_FREQUENCY, alias: "ImagingFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGED_NUCLEUS, alias: "ImagedNucleus", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ECHO_NUMBERS, alias: "EchoNumbers", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MAGNETIC_FIELD_STRENGTH, alias: "MagneticFieldStrength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PHASE_ENCODING_STEPS, alias: "NumberOfPhaseEncodingSteps", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_COLLECTION_DIAMETER, alias: "DataCollectionDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ECHO_TRAIN_LENGTH, alias: "EchoTrainLength", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERCENT_SAMPLING, alias: "PercentSampling", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERCENT_PHASE_FIELD_OF_VIEW, alias: "PercentPhaseFieldOfView", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_BANDWIDTH, alias: "PixelBandwidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_SERIAL_NUMBER, alias: "DeviceSerialNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_UID, alias: "DeviceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_ID, alias: "DeviceID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLATE_ID, alias: "PlateID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERATOR_ID, alias: "GeneratorID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_ID, alias: "GridID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CASSETTE_ID, alias: "CassetteID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_ID, alias: "GantryID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNIQUE_DEVICE_IDENTIFIER, alias: "UniqueDeviceIdentifier", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UDI_SEQUENCE, alias: "UDISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANUFACTURER_DEVICE_CLASS_UID, alias: "ManufacturerDeviceClassUID", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SECONDARY_CAPTURE_DEVICE_ID, alias: "SecondaryCaptureDeviceID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HARDCOPY_CREATION_DEVICE_ID, alias: "HardcopyCreationDeviceID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_OF_SECONDARY_CAPTURE, alias: "DateOfSecondaryCapture", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_SECONDARY_CAPTURE, alias: "TimeOfSecondaryCapture", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_CAPTURE_DEVICE_MANUFACTURER, alias: "SecondaryCaptureDeviceManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HARDCOPY_DEVICE_MANUFACTURER, alias: "HardcopyDeviceManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_CAPTURE_DEVICE_MANUFACTURER_MODEL_NAME, alias: "SecondaryCaptureDeviceManufacturerModelName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_CAPTURE_DEVICE_SOFTWARE_VERSIONS, alias: "SecondaryCaptureDeviceSoftwareVersions", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: HARDCOPY_DEVICE_SOFTWARE_VERSION, alias: "HardcopyDeviceSoftwareVersion", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: HARDCOPY_DEVICE_MANUFACTURER_MODEL_NAME, alias: "HardcopyDeviceManufacturerModelName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOFTWARE_VERSIONS, alias: "SoftwareVersions", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: VIDEO_IMAGE_FORMAT_ACQUIRED, alias: "VideoImageFormatAcquired", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIGITAL_IMAGE_FORMAT_ACQUIRED, alias: "DigitalImageFormatAcquired", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROTOCOL_NAME, alias: "ProtocolName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_ROUTE, alias: "ContrastBolusRoute", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_VOLUME, alias: "ContrastBolusVolume", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_START_TIME, alias: "ContrastBolusStartTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_STOP_TIME, alias: "ContrastBolusStopTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_TOTAL_DOSE, alias: "ContrastBolusTotalDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYRINGE_COUNTS, alias: "SyringeCounts", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_FLOW_RATE, alias: "ContrastFlowRate", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CONTRAST_FLOW_DURATION, alias: "ContrastFlowDuration", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_INGREDIENT, alias: "ContrastBolusIngredient", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_INGREDIENT_CONCENTRATION, alias: "ContrastBolusIngredientConcentration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPATIAL_RESOLUTION, alias: "SpatialResolution", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIGGER_TIME, alias: "TriggerTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIGGER_SOURCE_OR_TYPE, alias: "TriggerSourceOrType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_INTERVAL, alias: "NominalInterval", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_TIME, alias: "FrameTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_FRAMING_TYPE, alias: "CardiacFramingType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_TIME_VECTOR, alias: "FrameTimeVector", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_DELAY, alias: "FrameDelay", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_TRIGGER_DELAY, alias: "ImageTriggerDelay", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLEX_GROUP_TIME_OFFSET, alias: "MultiplexGroupTimeOffset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIGGER_TIME_OFFSET, alias: "TriggerTimeOffset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYNCHRONIZATION_TRIGGER, alias: "SynchronizationTrigger", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYNCHRONIZATION_CHANNEL, alias: "SynchronizationChannel", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TRIGGER_SAMPLE_POSITION, alias: "TriggerSamplePosition", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_ROUTE, alias: "RadiopharmaceuticalRoute", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_VOLUME, alias: "RadiopharmaceuticalVolume", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_START_TIME, alias: "RadiopharmaceuticalStartTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_STOP_TIME, alias: "RadiopharmaceuticalStopTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIONUCLIDE_TOTAL_DOSE, alias: "RadionuclideTotalDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIONUCLIDE_HALF_LIFE, alias: "RadionuclideHalfLife", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIONUCLIDE_POSITRON_FRACTION, alias: "RadionuclidePositronFraction", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_SPECIFIC_ACTIVITY, alias: "RadiopharmaceuticalSpecificActivity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_START_DATE_TIME, alias: "RadiopharmaceuticalStartDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_STOP_DATE_TIME, alias: "RadiopharmaceuticalStopDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAT_REJECTION_FLAG, alias: "BeatRejectionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOW_RR_VALUE, alias: "LowRRValue", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HIGH_RR_VALUE, alias: "HighRRValue", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVALS_ACQUIRED, alias: "IntervalsAcquired", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVALS_REJECTED, alias: "IntervalsRejected", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PVC_REJECTION, alias: "PVCRejection", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SKIP_BEATS, alias: "SkipBeats", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HEART_RATE, alias: "HeartRate", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_NUMBER_OF_IMAGES, alias: "CardiacNumberOfImages", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIGGER_WINDOW, alias: "TriggerWindow", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_DIAMETER, alias: "ReconstructionDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_SOURCE_TO_DETECTOR, alias: "DistanceSourceToDetector", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_SOURCE_TO_PATIENT, alias: "DistanceSourceToPatient", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ESTIMATED_RADIOGRAPHIC_MAGNIFICATION_FACTOR, alias: "EstimatedRadiographicMagnificationFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_DETECTOR_TILT, alias: "GantryDetectorTilt", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_DETECTOR_SLEW, alias: "GantryDetectorSlew", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_HEIGHT, alias: "TableHeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TRAVERSE, alias: "TableTraverse", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_MOTION, alias: "TableMotion", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_VERTICAL_INCREMENT, alias: "TableVerticalIncrement", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TABLE_LATERAL_INCREMENT, alias: "TableLateralIncrement", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TABLE_LONGITUDINAL_INCREMENT, alias: "TableLongitudinalIncrement", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TABLE_ANGLE, alias: "TableAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TYPE, alias: "TableType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_DIRECTION, alias: "RotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANGULAR_POSITION, alias: "AngularPosition", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIAL_POSITION, alias: "RadialPosition", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCAN_ARC, alias: "ScanArc", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANGULAR_STEP, alias: "AngularStep", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CENTER_OF_ROTATION_OFFSET, alias: "CenterOfRotationOffset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_OFFSET, alias: "RotationOffset", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_SHAPE, alias: "FieldOfViewShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_DIMENSIONS, alias: "FieldOfViewDimensions", vr: VR::IS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: EXPOSURE_TIME, alias: "ExposureTime", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_TUBE_CURRENT, alias: "XRayTubeCurrent", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE, alias: "Exposure", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_INU_AS, alias: "ExposureInuAs", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AVERAGE_PULSE_WIDTH, alias: "AveragePulseWidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_SETTING, alias: "RadiationSetting", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECTIFICATION_TYPE, alias: "RectificationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_MODE, alias: "RadiationMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_AND_FLUOROSCOPY_AREA_DOSE_PRODUCT, alias: "ImageAndFluoroscopyAreaDoseProduct", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_TYPE, alias: "FilterType", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TYPE_OF_FILTERS, alias: "TypeOfFilters", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: INTENSIFIER_SIZE, alias: "IntensifierSize", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGER_PIXEL_SPACING, alias: "ImagerPixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: GRID, alias: "Grid", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: GENERATOR_POWER, alias: "GeneratorPower", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_GRID_NAME, alias: "CollimatorGridName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_TYPE, alias: "CollimatorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOCAL_DISTANCE, alias: "FocalDistance", vr: VR::IS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: X_FOCUS_CENTER, alias: "XFocusCenter", vr: VR::DS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: Y_FOCUS_CENTER, alias: "YFocusCenter", vr: VR::DS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: FOCAL_SPOTS, alias: "FocalSpots", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ANODE_TARGET_MATERIAL, alias: "AnodeTargetMaterial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BODY_PART_THICKNESS, alias: "BodyPartThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_FORCE, alias: "CompressionForce", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_PRESSURE, alias: "CompressionPressure", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PADDLE_DESCRIPTION, alias: "PaddleDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_CONTACT_AREA, alias: "CompressionContactArea", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_MODE, alias: "AcquisitionMode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_MODE_NAME, alias: "DoseModeName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUIRED_SUBTRACTION_MASK_FLAG, alias: "AcquiredSubtractionMaskFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUOROSCOPY_PERSISTENCE_FLAG, alias: "FluoroscopyPersistenceFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUOROSCOPY_LAST_IMAGE_HOLD_PERSISTENCE_FLAG, alias: "FluoroscopyLastImageHoldPersistenceFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UPPER_LIMIT_NUMBER_OF_PERSISTENT_FLUOROSCOPY_FRAMES, alias: "UpperLimitNumberOfPersistentFluoroscopyFrames", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AUTO_INJECTION_TRIGGER_FLAG, alias: "ContrastBolusAutoInjectionTriggerFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_INJECTION_DELAY, alias: "ContrastBolusInjectionDelay", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XA_ACQUISITION_PHASE_DETAILS_SEQUENCE, alias: "XAAcquisitionPhaseDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XA_ACQUISITION_FRAME_RATE, alias: "XAAcquisitionFrameRate", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XA_PLANE_DETAILS_SEQUENCE, alias: "XAPlaneDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_FIELD_OF_VIEW_LABEL, alias: "AcquisitionFieldOfViewLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_FILTER_DETAILS_SEQUENCE, alias: "XRayFilterDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XA_ACQUISITION_DURATION, alias: "XAAcquisitionDuration", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_PIPELINE_TYPE, alias: "ReconstructionPipelineType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_FILTER_DETAILS_SEQUENCE, alias: "ImageFilterDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLIED_MASK_SUBTRACTION_FLAG, alias: "AppliedMaskSubtractionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_SERIES_DESCRIPTION_CODE_SEQUENCE, alias: "RequestedSeriesDescriptionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_OF_LAST_CALIBRATION, alias: "DateOfLastCalibration", vr: VR::DA, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TIME_OF_LAST_CALIBRATION, alias: "TimeOfLastCalibration", vr: VR::TM, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DATE_TIME_OF_LAST_CALIBRATION, alias: "DateTimeOfLastCalibration", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_DATE_TIME, alias: "CalibrationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_OF_MANUFACTURE, alias: "DateOfManufacture", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_OF_INSTALLATION, alias: "DateOfInstallation", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONVOLUTION_KERNEL, alias: "ConvolutionKernel", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: UPPER_LOWER_PIXEL_VALUES, alias: "UpperLowerPixelValues", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ACTUAL_FRAME_DURATION, alias: "ActualFrameDuration", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUNT_RATE, alias: "CountRate", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREFERRED_PLAYBACK_SEQUENCING, alias: "PreferredPlaybackSequencing", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVE_COIL_NAME, alias: "ReceiveCoilName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSMIT_COIL_NAME, alias: "TransmitCoilName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLATE_TYPE, alias: "PlateType", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHOSPHOR_TYPE, alias: "PhosphorType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WATER_EQUIVALENT_DIAMETER, alias: "WaterEquivalentDiameter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WATER_EQUIVALENT_DIAMETER_CALCULATION_METHOD_CODE_SEQUENCE, alias: "WaterEquivalentDiameterCalculationMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_VELOCITY, alias: "ScanVelocity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WHOLE_BODY_TECHNIQUE, alias: "WholeBodyTechnique", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCAN_LENGTH, alias: "ScanLength", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_MATRIX, alias: "AcquisitionMatrix", vr: VR::US, vm: (4, 4) },
    DataDictionaryEntryRef { tag: IN_PLANE_PHASE_ENCODING_DIRECTION, alias: "InPlanePhaseEncodingDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLIP_ANGLE, alias: "FlipAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VARIABLE_FLIP_ANGLE_FLAG, alias: "VariableFlipAngleFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAR, alias: "SAR", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: D_BDT, alias: "dBdt", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: B1RMS, alias: "B1rms", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_DEVICE_PROCESSING_DESCRIPTION, alias: "AcquisitionDeviceProcessingDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_DEVICE_PROCESSING_CODE, alias: "AcquisitionDeviceProcessingCode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CASSETTE_ORIENTATION, alias: "CassetteOrientation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CASSETTE_SIZE, alias: "CassetteSize", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURES_ON_PLATE, alias: "ExposuresOnPlate", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIVE_X_RAY_EXPOSURE, alias: "RelativeXRayExposure", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_INDEX, alias: "ExposureIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_EXPOSURE_INDEX, alias: "TargetExposureIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVIATION_INDEX, alias: "DeviationIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLUMN_ANGULATION, alias: "ColumnAngulation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOMO_LAYER_HEIGHT, alias: "TomoLayerHeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOMO_ANGLE, alias: "TomoAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOMO_TIME, alias: "TomoTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOMO_TYPE, alias: "TomoType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOMO_CLASS, alias: "TomoClass", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TOMOSYNTHESIS_SOURCE_IMAGES, alias: "NumberOfTomosynthesisSourceImages", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_MOTION, alias: "PositionerMotion", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_TYPE, alias: "PositionerType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_PRIMARY_ANGLE, alias: "PositionerPrimaryAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_SECONDARY_ANGLE, alias: "PositionerSecondaryAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_PRIMARY_ANGLE_INCREMENT, alias: "PositionerPrimaryAngleIncrement", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: POSITIONER_SECONDARY_ANGLE_INCREMENT, alias: "PositionerSecondaryAngleIncrement", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DETECTOR_PRIMARY_ANGLE, alias: "DetectorPrimaryAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_SECONDARY_ANGLE, alias: "DetectorSecondaryAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHUTTER_SHAPE, alias: "ShutterShape", vr: VR::CS, vm: (1, 3) },
    DataDictionaryEntryRef { tag: SHUTTER_LEFT_VERTICAL_EDGE, alias: "ShutterLeftVerticalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHUTTER_RIGHT_VERTICAL_EDGE, alias: "ShutterRightVerticalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHUTTER_UPPER_HORIZONTAL_EDGE, alias: "ShutterUpperHorizontalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHUTTER_LOWER_HORIZONTAL_EDGE, alias: "ShutterLowerHorizontalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CENTER_OF_CIRCULAR_SHUTTER, alias: "CenterOfCircularShutter", vr: VR::IS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RADIUS_OF_CIRCULAR_SHUTTER, alias: "RadiusOfCircularShutter", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICES_OF_THE_POLYGONAL_SHUTTER, alias: "VerticesOfThePolygonalShutter", vr: VR::IS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: SHUTTER_PRESENTATION_VALUE, alias: "ShutterPresentationValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHUTTER_OVERLAY_GROUP, alias: "ShutterOverlayGroup", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHUTTER_PRESENTATION_COLOR_CIE_LAB_VALUE, alias: "ShutterPresentationColorCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: OUTLINE_SHAPE_TYPE, alias: "OutlineShapeType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTLINE_LEFT_VERTICAL_EDGE, alias: "OutlineLeftVerticalEdge", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTLINE_RIGHT_VERTICAL_EDGE, alias: "OutlineRightVerticalEdge", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTLINE_UPPER_HORIZONTAL_EDGE, alias: "OutlineUpperHorizontalEdge", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTLINE_LOWER_HORIZONTAL_EDGE, alias: "OutlineLowerHorizontalEdge", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CENTER_OF_CIRCULAR_OUTLINE, alias: "CenterOfCircularOutline", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DIAMETER_OF_CIRCULAR_OUTLINE, alias: "DiameterOfCircularOutline", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_POLYGONAL_VERTICES, alias: "NumberOfPolygonalVertices", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICES_OF_THE_POLYGONAL_OUTLINE, alias: "VerticesOfThePolygonalOutline", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_SHAPE, alias: "CollimatorShape", vr: VR::CS, vm: (1, 3) },
    DataDictionaryEntryRef { tag: COLLIMATOR_LEFT_VERTICAL_EDGE, alias: "CollimatorLeftVerticalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_RIGHT_VERTICAL_EDGE, alias: "CollimatorRightVerticalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_UPPER_HORIZONTAL_EDGE, alias: "CollimatorUpperHorizontalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_LOWER_HORIZONTAL_EDGE, alias: "CollimatorLowerHorizontalEdge", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CENTER_OF_CIRCULAR_COLLIMATOR, alias: "CenterOfCircularCollimator", vr: VR::IS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RADIUS_OF_CIRCULAR_COLLIMATOR, alias: "RadiusOfCircularCollimator", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICES_OF_THE_POLYGONAL_COLLIMATOR, alias: "VerticesOfThePolygonalCollimator", vr: VR::IS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: ACQUISITION_TIME_SYNCHRONIZED, alias: "AcquisitionTimeSynchronized", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_SOURCE, alias: "TimeSource", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_DISTRIBUTION_PROTOCOL, alias: "TimeDistributionProtocol", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NTP_SOURCE_ADDRESS, alias: "NTPSourceAddress", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PAGE_NUMBER_VECTOR, alias: "PageNumberVector", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_LABEL_VECTOR, alias: "FrameLabelVector", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_PRIMARY_ANGLE_VECTOR, alias: "FramePrimaryAngleVector", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_SECONDARY_ANGLE_VECTOR, alias: "FrameSecondaryAngleVector", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SLICE_LOCATION_VECTOR, alias: "SliceLocationVector", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DISPLAY_WINDOW_LABEL_VECTOR, alias: "DisplayWindowLabelVector", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NOMINAL_SCANNED_PIXEL_SPACING, alias: "NominalScannedPixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DIGITIZING_DEVICE_TRANSPORT_DIRECTION, alias: "DigitizingDeviceTransportDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_OF_SCANNED_FILM, alias: "RotationOfScannedFilm", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BIOPSY_TARGET_SEQUENCE, alias: "BiopsyTargetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_UID, alias: "TargetUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCALIZING_CURSOR_POSITION, alias: "LocalizingCursorPosition", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: CALCULATED_TARGET_POSITION, alias: "CalculatedTargetPosition", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: TARGET_LABEL, alias: "TargetLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAYED_Z_VALUE, alias: "DisplayedZValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IVUS_ACQUISITION, alias: "IVUSAcquisition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IVUS_PULLBACK_RATE, alias: "IVUSPullbackRate", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IVUS_GATED_RATE, alias: "IVUSGatedRate", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IVUS_PULLBACK_START_FRAME_NUMBER, alias: "IVUSPullbackStartFrameNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IVUS_PULLBACK_STOP_FRAME_NUMBER, alias: "IVUSPullbackStopFrameNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LESION_NUMBER, alias: "LesionNumber", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ACQUISITION_COMMENTS, alias: "AcquisitionComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTPUT_POWER, alias: "OutputPower", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TRANSDUCER_DATA, alias: "TransducerData", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TRANSDUCER_IDENTIFICATION_SEQUENCE, alias: "TransducerIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOCUS_DEPTH, alias: "FocusDepth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCESSING_FUNCTION, alias: "ProcessingFunction", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSTPROCESSING_FUNCTION, alias: "PostprocessingFunction", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MECHANICAL_INDEX, alias: "MechanicalIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BONE_THERMAL_INDEX, alias: "BoneThermalIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CRANIAL_THERMAL_INDEX, alias: "CranialThermalIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOFT_TISSUE_THERMAL_INDEX, alias: "SoftTissueThermalIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOFT_TISSUE_FOCUS_THERMAL_INDEX, alias: "SoftTissueFocusThermalIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOFT_TISSUE_SURFACE_THERMAL_INDEX, alias: "SoftTissueSurfaceThermalIndex", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DYNAMIC_RANGE, alias: "DynamicRange", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_GAIN, alias: "TotalGain", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEPTH_OF_SCAN_FIELD, alias: "DepthOfScanField", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_POSITION, alias: "PatientPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_POSITION, alias: "ViewPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROJECTION_EPONYMOUS_NAME_CODE_SEQUENCE, alias: "ProjectionEponymousNameCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_TRANSFORMATION_MATRIX, alias: "ImageTransformationMatrix", vr: VR::DS, vm: (6, 6) },
    DataDictionaryEntryRef { tag: IMAGE_TRANSLATION_VECTOR, alias: "ImageTranslationVector", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: SENSITIVITY, alias: "Sensitivity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEQUENCE_OF_ULTRASOUND_REGIONS, alias: "SequenceOfUltrasoundRegions", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_SPATIAL_FORMAT, alias: "RegionSpatialFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_DATA_TYPE, alias: "RegionDataType", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_FLAGS, alias: "RegionFlags", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_LOCATION_MIN_X0, alias: "RegionLocationMinX0", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_LOCATION_MIN_Y0, alias: "RegionLocationMinY0", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_LOCATION_MAX_X1, alias: "RegionLocationMaxX1", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_LOCATION_MAX_Y1, alias: "RegionLocationMaxY1", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_PIXEL_X0, alias: "ReferencePixelX0", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_PIXEL_Y0, alias: "ReferencePixelY0", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHYSICAL_UNITS_X_DIRECTION, alias: "PhysicalUnitsXDirection", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHYSICAL_UNITS_Y_DIRECTION, alias: "PhysicalUnitsYDirection", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_PIXEL_PHYSICAL_VALUE_X, alias: "ReferencePixelPhysicalValueX", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_PIXEL_PHYSICAL_VALUE_Y, alias: "ReferencePixelPhysicalValueY", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHYSICAL_DELTA_X, alias: "PhysicalDeltaX", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHYSICAL_DELTA_Y, alias: "PhysicalDeltaY", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_FREQUENCY, alias: "TransducerFrequency", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_TYPE, alias: "TransducerType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSE_REPETITION_FREQUENCY, alias: "PulseRepetitionFrequency", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOPPLER_CORRECTION_ANGLE, alias: "DopplerCorrectionAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEERING_ANGLE, alias: "SteeringAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOPPLER_SAMPLE_VOLUME_X_POSITION_RETIRED, alias: "DopplerSampleVolumeXPositionRetired", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOPPLER_SAMPLE_VOLUME_X_POSITION, alias: "DopplerSampleVolumeXPosition", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOPPLER_SAMPLE_VOLUME_Y_POSITION_RETIRED, alias: "DopplerSampleVolumeYPositionRetired", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOPPLER_SAMPLE_VOLUME_Y_POSITION, alias: "DopplerSampleVolumeYPosition", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_X0_RETIRED, alias: "TMLinePositionX0Retired", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_X0, alias: "TMLinePositionX0", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_Y0_RETIRED, alias: "TMLinePositionY0Retired", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_Y0, alias: "TMLinePositionY0", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_X1_RETIRED, alias: "TMLinePositionX1Retired", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_X1, alias: "TMLinePositionX1", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_Y1_RETIRED, alias: "TMLinePositionY1Retired", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TM_LINE_POSITION_Y1, alias: "TMLinePositionY1", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COMPONENT_ORGANIZATION, alias: "PixelComponentOrganization", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COMPONENT_MASK, alias: "PixelComponentMask", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COMPONENT_RANGE_START, alias: "PixelComponentRangeStart", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COMPONENT_RANGE_STOP, alias: "PixelComponentRangeStop", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COMPONENT_PHYSICAL_UNITS, alias: "PixelComponentPhysicalUnits", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COMPONENT_DATA_TYPE, alias: "PixelComponentDataType", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TABLE_BREAK_POINTS, alias: "NumberOfTableBreakPoints", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_OF_X_BREAK_POINTS, alias: "TableOfXBreakPoints", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TABLE_OF_Y_BREAK_POINTS, alias: "TableOfYBreakPoints", vr: VR::FD, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TABLE_ENTRIES, alias: "NumberOfTableEntries", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_OF_PIXEL_VALUES, alias: "TableOfPixelValues", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TABLE_OF_PARAMETER_VALUES, alias: "TableOfParameterValues", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: R_WAVE_TIME_VECTOR, alias: "RWaveTimeVector", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ACTIVE_IMAGE_AREA_OVERLAY_GROUP, alias: "ActiveImageAreaOverlayGroup", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_CONDITIONS_NOMINAL_FLAG, alias: "DetectorConditionsNominalFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_TEMPERATURE, alias: "DetectorTemperature", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_TYPE, alias: "DetectorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_CONFIGURATION, alias: "DetectorConfiguration", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_DESCRIPTION, alias: "DetectorDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_MODE, alias: "DetectorMode", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ID, alias: "DetectorID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_OF_LAST_DETECTOR_CALIBRATION, alias: "DateOfLastDetectorCalibration", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_LAST_DETECTOR_CALIBRATION, alias: "TimeOfLastDetectorCalibration", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURES_ON_DETECTOR_SINCE_LAST_CALIBRATION, alias: "ExposuresOnDetectorSinceLastCalibration", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURES_ON_DETECTOR_SINCE_MANUFACTURED, alias: "ExposuresOnDetectorSinceManufactured", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_TIME_SINCE_LAST_EXPOSURE, alias: "DetectorTimeSinceLastExposure", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVE_TIME, alias: "DetectorActiveTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVATION_OFFSET_FROM_EXPOSURE, alias: "DetectorActivationOffsetFromExposure", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_BINNING, alias: "DetectorBinning", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DETECTOR_ELEMENT_PHYSICAL_SIZE, alias: "DetectorElementPhysicalSize", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DETECTOR_ELEMENT_SPACING, alias: "DetectorElementSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVE_SHAPE, alias: "DetectorActiveShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVE_DIMENSIONS, alias: "DetectorActiveDimensions", vr: VR::DS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVE_ORIGIN, alias: "DetectorActiveOrigin", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DETECTOR_MANUFACTURER_NAME, alias: "DetectorManufacturerName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_MANUFACTURER_MODEL_NAME, alias: "DetectorManufacturerModelName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_ORIGIN, alias: "FieldOfViewOrigin", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_ROTATION, alias: "FieldOfViewRotation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_HORIZONTAL_FLIP, alias: "FieldOfViewHorizontalFlip", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_DATA_AREA_ORIGIN_RELATIVE_TO_FOV, alias: "PixelDataAreaOriginRelativeToFOV", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: PIXEL_DATA_AREA_ROTATION_ANGLE_RELATIVE_TO_FOV, alias: "PixelDataAreaRotationAngleRelativeToFOV", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_ABSORBING_MATERIAL, alias: "GridAbsorbingMaterial", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_SPACING_MATERIAL, alias: "GridSpacingMaterial", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_THICKNESS, alias: "GridThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_PITCH, alias: "GridPitch", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_ASPECT_RATIO, alias: "GridAspectRatio", vr: VR::IS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: GRID_PERIOD, alias: "GridPeriod", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_FOCAL_DISTANCE, alias: "GridFocalDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_MATERIAL, alias: "FilterMaterial", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FILTER_THICKNESS_MINIMUM, alias: "FilterThicknessMinimum", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FILTER_THICKNESS_MAXIMUM, alias: "FilterThicknessMaximum", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FILTER_BEAM_PATH_LENGTH_MINIMUM, alias: "FilterBeamPathLengthMinimum", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FILTER_BEAM_PATH_LENGTH_MAXIMUM, alias: "FilterBeamPathLengthMaximum", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_MODE, alias: "ExposureControlMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_MODE_DESCRIPTION, alias: "ExposureControlModeDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_STATUS, alias: "ExposureStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHOTOTIMER_SETTING, alias: "PhototimerSetting", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_TIME_INU_S, alias: "ExposureTimeInuS", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_TUBE_CURRENT_INU_A, alias: "XRayTubeCurrentInuA", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_QUALIFICATION, alias: "ContentQualification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSE_SEQUENCE_NAME, alias: "PulseSequenceName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_IMAGING_MODIFIER_SEQUENCE, alias: "MRImagingModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ECHO_PULSE_SEQUENCE, alias: "EchoPulseSequence", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INVERSION_RECOVERY, alias: "InversionRecovery", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOW_COMPENSATION, alias: "FlowCompensation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLE_SPIN_ECHO, alias: "MultipleSpinEcho", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_PLANAR_EXCITATION, alias: "MultiPlanarExcitation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHASE_CONTRAST, alias: "PhaseContrast", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_FLIGHT_CONTRAST, alias: "TimeOfFlightContrast", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPOILING, alias: "Spoiling", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEADY_STATE_PULSE_SEQUENCE, alias: "SteadyStatePulseSequence", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ECHO_PLANAR_PULSE_SEQUENCE, alias: "EchoPlanarPulseSequence", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAG_ANGLE_FIRST_AXIS, alias: "TagAngleFirstAxis", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAGNETIZATION_TRANSFER, alias: "MagnetizationTransfer", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: T2_PREPARATION, alias: "T2Preparation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOOD_SIGNAL_NULLING, alias: "BloodSignalNulling", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SATURATION_RECOVERY, alias: "SaturationRecovery", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTRALLY_SELECTED_SUPPRESSION, alias: "SpectrallySelectedSuppression", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTRALLY_SELECTED_EXCITATION, alias: "SpectrallySelectedExcitation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPATIAL_PRESATURATION, alias: "SpatialPresaturation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAGGING, alias: "Tagging", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERSAMPLING_PHASE, alias: "OversamplingPhase", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAG_SPACING_FIRST_DIMENSION, alias: "TagSpacingFirstDimension", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GEOMETRY_OF_K_SPACE_TRAVERSAL, alias: "GeometryOfKSpaceTraversal", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_K_SPACE_TRAVERSAL, alias: "SegmentedKSpaceTraversal", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECTILINEAR_PHASE_ENCODE_REORDERING, alias: "RectilinearPhaseEncodeReordering", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAG_THICKNESS, alias: "TagThickness", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTIAL_FOURIER_DIRECTION, alias: "PartialFourierDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_SYNCHRONIZATION_TECHNIQUE, alias: "CardiacSynchronizationTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVE_COIL_MANUFACTURER_NAME, alias: "ReceiveCoilManufacturerName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_RECEIVE_COIL_SEQUENCE, alias: "MRReceiveCoilSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVE_COIL_TYPE, alias: "ReceiveCoilType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUADRATURE_RECEIVE_COIL, alias: "QuadratureReceiveCoil", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_COIL_DEFINITION_SEQUENCE, alias: "MultiCoilDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_COIL_CONFIGURATION, alias: "MultiCoilConfiguration", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_COIL_ELEMENT_NAME, alias: "MultiCoilElementName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_COIL_ELEMENT_USED, alias: "MultiCoilElementUsed", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_TRANSMIT_COIL_SEQUENCE, alias: "MRTransmitCoilSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSMIT_COIL_MANUFACTURER_NAME, alias: "TransmitCoilManufacturerName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSMIT_COIL_TYPE, alias: "TransmitCoilType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTRAL_WIDTH, alias: "SpectralWidth", vr: VR::FD, vm: (1, 2) },
    DataDictionaryEntryRef { tag: CHEMICAL_SHIFT_REFERENCE, alias: "ChemicalShiftReference", vr: VR::FD, vm: (1, 2) },
    DataDictionaryEntryRef { tag: VOLUME_LOCALIZATION_TECHNIQUE, alias: "VolumeLocalizationTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_ACQUISITION_FREQUENCY_ENCODING_STEPS, alias: "MRAcquisitionFrequencyEncodingSteps", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOUPLING, alias: "Decoupling", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOUPLED_NUCLEUS, alias: "DecoupledNucleus", vr: VR::CS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: DECOUPLING_FREQUENCY, alias: "DecouplingFrequency", vr: VR::FD, vm: (1, 2) },
    DataDictionaryEntryRef { tag: DECOUPLING_METHOD, alias: "DecouplingMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOUPLING_CHEMICAL_SHIFT_REFERENCE, alias: "DecouplingChemicalShiftReference", vr: VR::FD, vm: (1, 2) },
    DataDictionaryEntryRef { tag: K_SPACE_FILTERING, alias: "KSpaceFiltering", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_DOMAIN_FILTERING, alias: "TimeDomainFiltering", vr: VR::CS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ZERO_FILLS, alias: "NumberOfZeroFills", vr: VR::US, vm: (1, 2) },
    DataDictionaryEntryRef { tag: BASELINE_CORRECTION, alias: "BaselineCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARALLEL_REDUCTION_FACTOR_IN_PLANE, alias: "ParallelReductionFactorInPlane", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_RR_INTERVAL_SPECIFIED, alias: "CardiacRRIntervalSpecified", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_DURATION, alias: "AcquisitionDuration", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_ACQUISITION_DATE_TIME, alias: "FrameAcquisitionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_DIRECTIONALITY, alias: "DiffusionDirectionality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_GRADIENT_DIRECTION_SEQUENCE, alias: "DiffusionGradientDirectionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARALLEL_ACQUISITION, alias: "ParallelAcquisition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARALLEL_ACQUISITION_TECHNIQUE, alias: "ParallelAcquisitionTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INVERSION_TIMES, alias: "InversionTimes", vr: VR::FD, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: METABOLITE_MAP_DESCRIPTION, alias: "MetaboliteMapDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTIAL_FOURIER, alias: "PartialFourier", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EFFECTIVE_ECHO_TIME, alias: "EffectiveEchoTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: METABOLITE_MAP_CODE_SEQUENCE, alias: "MetaboliteMapCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHEMICAL_SHIFT_SEQUENCE, alias: "ChemicalShiftSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_SIGNAL_SOURCE, alias: "CardiacSignalSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE, alias: "DiffusionBValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_GRADIENT_ORIENTATION, alias: "DiffusionGradientOrientation", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: VELOCITY_ENCODING_DIRECTION, alias: "VelocityEncodingDirection", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: VELOCITY_ENCODING_MINIMUM_VALUE, alias: "VelocityEncodingMinimumValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VELOCITY_ENCODING_ACQUISITION_SEQUENCE, alias: "VelocityEncodingAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_K_SPACE_TRAJECTORIES, alias: "NumberOfKSpaceTrajectories", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COVERAGE_OF_K_SPACE, alias: "CoverageOfKSpace", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTROSCOPY_ACQUISITION_PHASE_ROWS, alias: "SpectroscopyAcquisitionPhaseRows", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARALLEL_REDUCTION_FACTOR_IN_PLANE_RETIRED, alias: "ParallelReductionFactorInPlaneRetired", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSMITTER_FREQUENCY, alias: "TransmitterFrequency", vr: VR::FD, vm: (1, 2) },
    DataDictionaryEntryRef { tag: RESONANT_NUCLEUS, alias: "ResonantNucleus", vr: VR::CS, vm: (1, 2) },
    DataDictionaryEntryRef { tag: FREQUENCY_CORRECTION, alias: "FrequencyCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_SPECTROSCOPY_FOV_GEOMETRY_SEQUENCE, alias: "MRSpectroscopyFOVGeometrySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLAB_THICKNESS, alias: "SlabThickness", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLAB_ORIENTATION, alias: "SlabOrientation", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MID_SLAB_POSITION, alias: "MidSlabPosition", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MR_SPATIAL_SATURATION_SEQUENCE, alias: "MRSpatialSaturationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_TIMING_AND_RELATED_PARAMETERS_SEQUENCE, alias: "MRTimingAndRelatedParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_ECHO_SEQUENCE, alias: "MREchoSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_MODIFIER_SEQUENCE, alias: "MRModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_DIFFUSION_SEQUENCE, alias: "MRDiffusionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_SYNCHRONIZATION_SEQUENCE, alias: "CardiacSynchronizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_AVERAGES_SEQUENCE, alias: "MRAveragesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MRFOV_GEOMETRY_SEQUENCE, alias: "MRFOVGeometrySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUME_LOCALIZATION_SEQUENCE, alias: "VolumeLocalizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTROSCOPY_ACQUISITION_DATA_COLUMNS, alias: "SpectroscopyAcquisitionDataColumns", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_ANISOTROPY_TYPE, alias: "DiffusionAnisotropyType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_REFERENCE_DATE_TIME, alias: "FrameReferenceDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_METABOLITE_MAP_SEQUENCE, alias: "MRMetaboliteMapSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARALLEL_REDUCTION_FACTOR_OUT_OF_PLANE, alias: "ParallelReductionFactorOutOfPlane", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTROSCOPY_ACQUISITION_OUT_OF_PLANE_PHASE_STEPS, alias: "SpectroscopyAcquisitionOutOfPlanePhaseSteps", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BULK_MOTION_STATUS, alias: "BulkMotionStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARALLEL_REDUCTION_FACTOR_SECOND_IN_PLANE, alias: "ParallelReductionFactorSecondInPlane", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_BEAT_REJECTION_TECHNIQUE, alias: "CardiacBeatRejectionTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE, alias: "RespiratoryMotionCompensationTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_SIGNAL_SOURCE, alias: "RespiratorySignalSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BULK_MOTION_COMPENSATION_TECHNIQUE, alias: "BulkMotionCompensationTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BULK_MOTION_SIGNAL_SOURCE, alias: "BulkMotionSignalSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICABLE_SAFETY_STANDARD_AGENCY, alias: "ApplicableSafetyStandardAgency", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICABLE_SAFETY_STANDARD_DESCRIPTION, alias: "ApplicableSafetyStandardDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPERATING_MODE_SEQUENCE, alias: "OperatingModeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPERATING_MODE_TYPE, alias: "OperatingModeType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPERATING_MODE, alias: "OperatingMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIC_ABSORPTION_RATE_DEFINITION, alias: "SpecificAbsorptionRateDefinition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRADIENT_OUTPUT_TYPE, alias: "GradientOutputType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIC_ABSORPTION_RATE_VALUE, alias: "SpecificAbsorptionRateValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRADIENT_OUTPUT, alias: "GradientOutput", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOW_COMPENSATION_DIRECTION, alias: "FlowCompensationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAGGING_DELAY, alias: "TaggingDelay", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_MOTION_COMPENSATION_TECHNIQUE_DESCRIPTION, alias: "RespiratoryMotionCompensationTechniqueDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_SIGNAL_SOURCE_ID, alias: "RespiratorySignalSourceID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_IN_HZ, alias: "ChemicalShiftMinimumIntegrationLimitInHz", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_IN_HZ, alias: "ChemicalShiftMaximumIntegrationLimitInHz", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_VELOCITY_ENCODING_SEQUENCE, alias: "MRVelocityEncodingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIRST_ORDER_PHASE_CORRECTION, alias: "FirstOrderPhaseCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WATER_REFERENCED_PHASE_CORRECTION, alias: "WaterReferencedPhaseCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_SPECTROSCOPY_ACQUISITION_TYPE, alias: "MRSpectroscopyAcquisitionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_CYCLE_POSITION, alias: "RespiratoryCyclePosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VELOCITY_ENCODING_MAXIMUM_VALUE, alias: "VelocityEncodingMaximumValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAG_SPACING_SECOND_DIMENSION, alias: "TagSpacingSecondDimension", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TAG_ANGLE_SECOND_AXIS, alias: "TagAngleSecondAxis", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_ACQUISITION_DURATION, alias: "FrameAcquisitionDuration", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_IMAGE_FRAME_TYPE_SEQUENCE, alias: "MRImageFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_SPECTROSCOPY_FRAME_TYPE_SEQUENCE, alias: "MRSpectroscopyFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_ACQUISITION_PHASE_ENCODING_STEPS_IN_PLANE, alias: "MRAcquisitionPhaseEncodingStepsInPlane", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_ACQUISITION_PHASE_ENCODING_STEPS_OUT_OF_PLANE, alias: "MRAcquisitionPhaseEncodingStepsOutOfPlane", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTROSCOPY_ACQUISITION_PHASE_COLUMNS, alias: "SpectroscopyAcquisitionPhaseColumns", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARDIAC_CYCLE_POSITION, alias: "CardiacCyclePosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIC_ABSORPTION_RATE_SEQUENCE, alias: "SpecificAbsorptionRateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RF_ECHO_TRAIN_LENGTH, alias: "RFEchoTrainLength", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRADIENT_ECHO_TRAIN_LENGTH, alias: "GradientEchoTrainLength", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ARTERIAL_SPIN_LABELING_CONTRAST, alias: "ArterialSpinLabelingContrast", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MR_ARTERIAL_SPIN_LABELING_SEQUENCE, alias: "MRArterialSpinLabelingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_TECHNIQUE_DESCRIPTION, alias: "ASLTechniqueDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_SLAB_NUMBER, alias: "ASLSlabNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_SLAB_THICKNESS, alias: "ASLSlabThickness", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_SLAB_ORIENTATION, alias: "ASLSlabOrientation", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ASL_MID_SLAB_POSITION, alias: "ASLMidSlabPosition", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ASL_CONTEXT, alias: "ASLContext", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_PULSE_TRAIN_DURATION, alias: "ASLPulseTrainDuration", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_CRUSHER_FLAG, alias: "ASLCrusherFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_CRUSHER_FLOW_LIMIT, alias: "ASLCrusherFlowLimit", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_CRUSHER_DESCRIPTION, alias: "ASLCrusherDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_BOLUS_CUTOFF_FLAG, alias: "ASLBolusCutoffFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_BOLUS_CUTOFF_TIMING_SEQUENCE, alias: "ASLBolusCutoffTimingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_BOLUS_CUTOFF_TECHNIQUE, alias: "ASLBolusCutoffTechnique", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_BOLUS_CUTOFF_DELAY_TIME, alias: "ASLBolusCutoffDelayTime", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASL_SLAB_SEQUENCE, alias: "ASLSlabSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHEMICAL_SHIFT_MINIMUM_INTEGRATION_LIMIT_INPPM, alias: "ChemicalShiftMinimumIntegrationLimitInppm", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHEMICAL_SHIFT_MAXIMUM_INTEGRATION_LIMIT_INPPM, alias: "ChemicalShiftMaximumIntegrationLimitInppm", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WATER_REFERENCE_ACQUISITION, alias: "WaterReferenceAcquisition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ECHO_PEAK_POSITION, alias: "EchoPeakPosition", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_ACQUISITION_TYPE_SEQUENCE, alias: "CTAcquisitionTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_TYPE, alias: "AcquisitionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TUBE_ANGLE, alias: "TubeAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_ACQUISITION_DETAILS_SEQUENCE, alias: "CTAcquisitionDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REVOLUTION_TIME, alias: "RevolutionTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SINGLE_COLLIMATION_WIDTH, alias: "SingleCollimationWidth", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_COLLIMATION_WIDTH, alias: "TotalCollimationWidth", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_TABLE_DYNAMICS_SEQUENCE, alias: "CTTableDynamicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_SPEED, alias: "TableSpeed", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_FEED_PER_ROTATION, alias: "TableFeedPerRotation", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPIRAL_PITCH_FACTOR, alias: "SpiralPitchFactor", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_GEOMETRY_SEQUENCE, alias: "CTGeometrySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_COLLECTION_CENTER_PATIENT, alias: "DataCollectionCenterPatient", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: CT_RECONSTRUCTION_SEQUENCE, alias: "CTReconstructionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_ALGORITHM, alias: "ReconstructionAlgorithm", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONVOLUTION_KERNEL_GROUP, alias: "ConvolutionKernelGroup", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_FIELD_OF_VIEW, alias: "ReconstructionFieldOfView", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_TARGET_CENTER_PATIENT, alias: "ReconstructionTargetCenterPatient", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_ANGLE, alias: "ReconstructionAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_FILTER, alias: "ImageFilter", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_EXPOSURE_SEQUENCE, alias: "CTExposureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_PIXEL_SPACING, alias: "ReconstructionPixelSpacing", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: EXPOSURE_MODULATION_TYPE, alias: "ExposureModulationType", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ESTIMATED_DOSE_SAVING, alias: "EstimatedDoseSaving", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CTX_RAY_DETAILS_SEQUENCE, alias: "CTXRayDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_POSITION_SEQUENCE, alias: "CTPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_POSITION, alias: "TablePosition", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_TIME_INMS, alias: "ExposureTimeInms", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_IMAGE_FRAME_TYPE_SEQUENCE, alias: "CTImageFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_TUBE_CURRENT_INM_A, alias: "XRayTubeCurrentInmA", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_INM_AS, alias: "ExposureInmAs", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONSTANT_VOLUME_FLAG, alias: "ConstantVolumeFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUOROSCOPY_FLAG, alias: "FluoroscopyFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_SOURCE_TO_DATA_COLLECTION_CENTER, alias: "DistanceSourceToDataCollectionCenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AGENT_NUMBER, alias: "ContrastBolusAgentNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_INGREDIENT_CODE_SEQUENCE, alias: "ContrastBolusIngredientCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_ADMINISTRATION_PROFILE_SEQUENCE, alias: "ContrastAdministrationProfileSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_USAGE_SEQUENCE, alias: "ContrastBolusUsageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AGENT_ADMINISTERED, alias: "ContrastBolusAgentAdministered", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AGENT_DETECTED, alias: "ContrastBolusAgentDetected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_AGENT_PHASE, alias: "ContrastBolusAgentPhase", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CTD_IVOL, alias: "CTDIvol", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CTDI_PHANTOM_TYPE_CODE_SEQUENCE, alias: "CTDIPhantomTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCIUM_SCORING_MASS_FACTOR_PATIENT, alias: "CalciumScoringMassFactorPatient", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCIUM_SCORING_MASS_FACTOR_DEVICE, alias: "CalciumScoringMassFactorDevice", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ENERGY_WEIGHTING_FACTOR, alias: "EnergyWeightingFactor", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CT_ADDITIONAL_X_RAY_SOURCE_SEQUENCE, alias: "CTAdditionalXRaySourceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CT_ACQUISITION, alias: "MultienergyCTAcquisition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CT_ACQUISITION_SEQUENCE, alias: "MultienergyCTAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CT_PROCESSING_SEQUENCE, alias: "MultienergyCTProcessingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CT_CHARACTERISTICS_SEQUENCE, alias: "MultienergyCTCharacteristicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CTX_RAY_SOURCE_SEQUENCE, alias: "MultienergyCTXRaySourceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_SOURCE_INDEX, alias: "XRaySourceIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_SOURCE_ID, alias: "XRaySourceID", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_SOURCE_TECHNIQUE, alias: "MultienergySourceTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_START_DATE_TIME, alias: "SourceStartDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_END_DATE_TIME, alias: "SourceEndDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SWITCHING_PHASE_NUMBER, alias: "SwitchingPhaseNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SWITCHING_PHASE_NOMINAL_DURATION, alias: "SwitchingPhaseNominalDuration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SWITCHING_PHASE_TRANSITION_DURATION, alias: "SwitchingPhaseTransitionDuration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EFFECTIVE_BIN_ENERGY, alias: "EffectiveBinEnergy", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CTX_RAY_DETECTOR_SEQUENCE, alias: "MultienergyCTXRayDetectorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_DETECTOR_INDEX, alias: "XRayDetectorIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_DETECTOR_ID, alias: "XRayDetectorID", vr: VR::UC, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_DETECTOR_TYPE, alias: "MultienergyDetectorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_DETECTOR_LABEL, alias: "XRayDetectorLabel", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_MAX_ENERGY, alias: "NominalMaxEnergy", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_MIN_ENERGY, alias: "NominalMinEnergy", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_X_RAY_DETECTOR_INDEX, alias: "ReferencedXRayDetectorIndex", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_X_RAY_SOURCE_INDEX, alias: "ReferencedXRaySourceIndex", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_PATH_INDEX, alias: "ReferencedPathIndex", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CT_PATH_SEQUENCE, alias: "MultienergyCTPathSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_CT_PATH_INDEX, alias: "MultienergyCTPathIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIENERGY_ACQUISITION_DESCRIPTION, alias: "MultienergyAcquisitionDescription", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MONOENERGETIC_ENERGY_EQUIVALENT, alias: "MonoenergeticEnergyEquivalent", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_CODE_SEQUENCE, alias: "MaterialCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOMPOSITION_METHOD, alias: "DecompositionMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOMPOSITION_DESCRIPTION, alias: "DecompositionDescription", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOMPOSITION_ALGORITHM_IDENTIFICATION_SEQUENCE, alias: "DecompositionAlgorithmIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECOMPOSITION_MATERIAL_SEQUENCE, alias: "DecompositionMaterialSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_ATTENUATION_SEQUENCE, alias: "MaterialAttenuationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHOTON_ENERGY, alias: "PhotonEnergy", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_MASS_ATTENUATION_COEFFICIENT, alias: "XRayMassAttenuationCoefficient", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROJECTION_PIXEL_CALIBRATION_SEQUENCE, alias: "ProjectionPixelCalibrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_SOURCE_TO_ISOCENTER, alias: "DistanceSourceToIsocenter", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_OBJECT_TO_TABLE_TOP, alias: "DistanceObjectToTableTop", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBJECT_PIXEL_SPACING_IN_CENTER_OF_BEAM, alias: "ObjectPixelSpacingInCenterOfBeam", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: POSITIONER_POSITION_SEQUENCE, alias: "PositionerPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_POSITION_SEQUENCE, alias: "TablePositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLIMATOR_SHAPE_SEQUENCE, alias: "CollimatorShapeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANES_IN_ACQUISITION, alias: "PlanesInAcquisition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XAXRF_FRAME_CHARACTERISTICS_SEQUENCE, alias: "XAXRFFrameCharacteristicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_ACQUISITION_SEQUENCE, alias: "FrameAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_RECEPTOR_TYPE, alias: "XRayReceptorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_PROTOCOL_NAME, alias: "AcquisitionProtocolName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_PROTOCOL_DESCRIPTION, alias: "AcquisitionProtocolDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRAST_BOLUS_INGREDIENT_OPAQUE, alias: "ContrastBolusIngredientOpaque", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_RECEPTOR_PLANE_TO_DETECTOR_HOUSING, alias: "DistanceReceptorPlaneToDetectorHousing", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTENSIFIER_ACTIVE_SHAPE, alias: "IntensifierActiveShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTENSIFIER_ACTIVE_DIMENSIONS, alias: "IntensifierActiveDimensions", vr: VR::FL, vm: (1, 2) },
    DataDictionaryEntryRef { tag: PHYSICAL_DETECTOR_SIZE, alias: "PhysicalDetectorSize", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: POSITION_OF_ISOCENTER_PROJECTION, alias: "PositionOfIsocenterProjection", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_SEQUENCE, alias: "FieldOfViewSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_DESCRIPTION, alias: "FieldOfViewDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_SENSING_REGIONS_SEQUENCE, alias: "ExposureControlSensingRegionsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_SENSING_REGION_SHAPE, alias: "ExposureControlSensingRegionShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_SENSING_REGION_LEFT_VERTICAL_EDGE, alias: "ExposureControlSensingRegionLeftVerticalEdge", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_SENSING_REGION_RIGHT_VERTICAL_EDGE, alias: "ExposureControlSensingRegionRightVerticalEdge", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_SENSING_REGION_UPPER_HORIZONTAL_EDGE, alias: "ExposureControlSensingRegionUpperHorizontalEdge", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_CONTROL_SENSING_REGION_LOWER_HORIZONTAL_EDGE, alias: "ExposureControlSensingRegionLowerHorizontalEdge", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CENTER_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION, alias: "CenterOfCircularExposureControlSensingRegion", vr: VR::SS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RADIUS_OF_CIRCULAR_EXPOSURE_CONTROL_SENSING_REGION, alias: "RadiusOfCircularExposureControlSensingRegion", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICES_OF_THE_POLYGONAL_EXPOSURE_CONTROL_SENSING_REGION, alias: "VerticesOfThePolygonalExposureControlSensingRegion", vr: VR::SS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: COLUMN_ANGULATION_PATIENT, alias: "ColumnAngulationPatient", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_ANGLE, alias: "BeamAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_DETECTOR_PARAMETERS_SEQUENCE, alias: "FrameDetectorParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCULATED_ANATOMY_THICKNESS, alias: "CalculatedAnatomyThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_SEQUENCE, alias: "CalibrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBJECT_THICKNESS_SEQUENCE, alias: "ObjectThicknessSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE_IDENTIFICATION, alias: "PlaneIdentification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIELD_OF_VIEW_DIMENSIONS_IN_FLOAT, alias: "FieldOfViewDimensionsInFloat", vr: VR::FL, vm: (1, 2) },
    DataDictionaryEntryRef { tag: ISOCENTER_REFERENCE_SYSTEM_SEQUENCE, alias: "IsocenterReferenceSystemSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_ISOCENTER_PRIMARY_ANGLE, alias: "PositionerIsocenterPrimaryAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_ISOCENTER_SECONDARY_ANGLE, alias: "PositionerIsocenterSecondaryAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIONER_ISOCENTER_DETECTOR_ROTATION_ANGLE, alias: "PositionerIsocenterDetectorRotationAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_X_POSITION_TO_ISOCENTER, alias: "TableXPositionToIsocenter", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_Y_POSITION_TO_ISOCENTER, alias: "TableYPositionToIsocenter", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_Z_POSITION_TO_ISOCENTER, alias: "TableZPositionToIsocenter", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_HORIZONTAL_ROTATION_ANGLE, alias: "TableHorizontalRotationAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_HEAD_TILT_ANGLE, alias: "TableHeadTiltAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_CRADLE_TILT_ANGLE, alias: "TableCradleTiltAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_DISPLAY_SHUTTER_SEQUENCE, alias: "FrameDisplayShutterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUIRED_IMAGE_AREA_DOSE_PRODUCT, alias: "AcquiredImageAreaDoseProduct", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: C_ARM_POSITIONER_TABLETOP_RELATIONSHIP, alias: "CArmPositionerTabletopRelationship", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_GEOMETRY_SEQUENCE, alias: "XRayGeometrySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IRRADIATION_EVENT_IDENTIFICATION_SEQUENCE, alias: "IrradiationEventIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY3_D_FRAME_TYPE_SEQUENCE, alias: "XRay3DFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRIBUTING_SOURCES_SEQUENCE, alias: "ContributingSourcesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY3_D_ACQUISITION_SEQUENCE, alias: "XRay3DAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_POSITIONER_SCAN_ARC, alias: "PrimaryPositionerScanArc", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_POSITIONER_SCAN_ARC, alias: "SecondaryPositionerScanArc", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_POSITIONER_SCAN_START_ANGLE, alias: "PrimaryPositionerScanStartAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_POSITIONER_SCAN_START_ANGLE, alias: "SecondaryPositionerScanStartAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_POSITIONER_INCREMENT, alias: "PrimaryPositionerIncrement", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_POSITIONER_INCREMENT, alias: "SecondaryPositionerIncrement", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_ACQUISITION_DATE_TIME, alias: "StartAcquisitionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: END_ACQUISITION_DATE_TIME, alias: "EndAcquisitionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_POSITIONER_INCREMENT_SIGN, alias: "PrimaryPositionerIncrementSign", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_POSITIONER_INCREMENT_SIGN, alias: "SecondaryPositionerIncrementSign", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_NAME, alias: "ApplicationName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_VERSION, alias: "ApplicationVersion", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_MANUFACTURER, alias: "ApplicationManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_TYPE, alias: "AlgorithmType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_DESCRIPTION, alias: "AlgorithmDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY3_D_RECONSTRUCTION_SEQUENCE, alias: "XRay3DReconstructionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_DESCRIPTION, alias: "ReconstructionDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PER_PROJECTION_ACQUISITION_SEQUENCE, alias: "PerProjectionAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_POSITION_SEQUENCE, alias: "DetectorPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_ACQUISITION_DOSE_SEQUENCE, alias: "XRayAcquisitionDoseSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_SOURCE_ISOCENTER_PRIMARY_ANGLE, alias: "XRaySourceIsocenterPrimaryAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_SOURCE_ISOCENTER_SECONDARY_ANGLE, alias: "XRaySourceIsocenterSecondaryAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREAST_SUPPORT_ISOCENTER_PRIMARY_ANGLE, alias: "BreastSupportIsocenterPrimaryAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREAST_SUPPORT_ISOCENTER_SECONDARY_ANGLE, alias: "BreastSupportIsocenterSecondaryAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREAST_SUPPORT_X_POSITION_TO_ISOCENTER, alias: "BreastSupportXPositionToIsocenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREAST_SUPPORT_Y_POSITION_TO_ISOCENTER, alias: "BreastSupportYPositionToIsocenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREAST_SUPPORT_Z_POSITION_TO_ISOCENTER, alias: "BreastSupportZPositionToIsocenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ISOCENTER_PRIMARY_ANGLE, alias: "DetectorIsocenterPrimaryAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ISOCENTER_SECONDARY_ANGLE, alias: "DetectorIsocenterSecondaryAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_X_POSITION_TO_ISOCENTER, alias: "DetectorXPositionToIsocenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_Y_POSITION_TO_ISOCENTER, alias: "DetectorYPositionToIsocenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_Z_POSITION_TO_ISOCENTER, alias: "DetectorZPositionToIsocenter", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_GRID_SEQUENCE, alias: "XRayGridSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_FILTER_SEQUENCE, alias: "XRayFilterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVE_AREA_TLHC_POSITION, alias: "DetectorActiveAreaTLHCPosition", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: DETECTOR_ACTIVE_AREA_ORIENTATION, alias: "DetectorActiveAreaOrientation", vr: VR::FD, vm: (6, 6) },
    DataDictionaryEntryRef { tag: POSITIONER_PRIMARY_ANGLE_DIRECTION, alias: "PositionerPrimaryAngleDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_MATRIX_SEQUENCE, alias: "DiffusionBMatrixSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE_XX, alias: "DiffusionBValueXX", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE_XY, alias: "DiffusionBValueXY", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE_XZ, alias: "DiffusionBValueXZ", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE_YY, alias: "DiffusionBValueYY", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE_YZ, alias: "DiffusionBValueYZ", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIFFUSION_B_VALUE_ZZ, alias: "DiffusionBValueZZ", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FUNCTIONAL_MR_SEQUENCE, alias: "FunctionalMRSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FUNCTIONAL_SETTLING_PHASE_FRAMES_PRESENT, alias: "FunctionalSettlingPhaseFramesPresent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FUNCTIONAL_SYNC_PULSE, alias: "FunctionalSyncPulse", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETTLING_PHASE_FRAME, alias: "SettlingPhaseFrame", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECAY_CORRECTION_DATE_TIME, alias: "DecayCorrectionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_DENSITY_THRESHOLD, alias: "StartDensityThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_RELATIVE_DENSITY_DIFFERENCE_THRESHOLD, alias: "StartRelativeDensityDifferenceThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_CARDIAC_TRIGGER_COUNT_THRESHOLD, alias: "StartCardiacTriggerCountThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_RESPIRATORY_TRIGGER_COUNT_THRESHOLD, alias: "StartRespiratoryTriggerCountThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINATION_COUNTS_THRESHOLD, alias: "TerminationCountsThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINATION_DENSITY_THRESHOLD, alias: "TerminationDensityThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINATION_RELATIVE_DENSITY_THRESHOLD, alias: "TerminationRelativeDensityThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINATION_TIME_THRESHOLD, alias: "TerminationTimeThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINATION_CARDIAC_TRIGGER_COUNT_THRESHOLD, alias: "TerminationCardiacTriggerCountThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TERMINATION_RESPIRATORY_TRIGGER_COUNT_THRESHOLD, alias: "TerminationRespiratoryTriggerCountThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_GEOMETRY, alias: "DetectorGeometry", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSVERSE_DETECTOR_SEPARATION, alias: "TransverseDetectorSeparation", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AXIAL_DETECTOR_DIMENSION, alias: "AxialDetectorDimension", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_AGENT_NUMBER, alias: "RadiopharmaceuticalAgentNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_FRAME_ACQUISITION_SEQUENCE, alias: "PETFrameAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_DETECTOR_MOTION_DETAILS_SEQUENCE, alias: "PETDetectorMotionDetailsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_TABLE_DYNAMICS_SEQUENCE, alias: "PETTableDynamicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_POSITION_SEQUENCE, alias: "PETPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_FRAME_CORRECTION_FACTORS_SEQUENCE, alias: "PETFrameCorrectionFactorsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_USAGE_SEQUENCE, alias: "RadiopharmaceuticalUsageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTENUATION_CORRECTION_SOURCE, alias: "AttenuationCorrectionSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ITERATIONS, alias: "NumberOfIterations", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SUBSETS, alias: "NumberOfSubsets", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_RECONSTRUCTION_SEQUENCE, alias: "PETReconstructionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PET_FRAME_TYPE_SEQUENCE, alias: "PETFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_FLIGHT_INFORMATION_USED, alias: "TimeOfFlightInformationUsed", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_TYPE, alias: "ReconstructionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECAY_CORRECTED, alias: "DecayCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTENUATION_CORRECTED, alias: "AttenuationCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCATTER_CORRECTED, alias: "ScatterCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEAD_TIME_CORRECTED, alias: "DeadTimeCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_MOTION_CORRECTED, alias: "GantryMotionCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_MOTION_CORRECTED, alias: "PatientMotionCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUNT_LOSS_NORMALIZATION_CORRECTED, alias: "CountLossNormalizationCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANDOMS_CORRECTED, alias: "RandomsCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NON_UNIFORM_RADIAL_SAMPLING_CORRECTED, alias: "NonUniformRadialSamplingCorrected", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SENSITIVITY_CALIBRATED, alias: "SensitivityCalibrated", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_NORMALIZATION_CORRECTION, alias: "DetectorNormalizationCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITERATIVE_RECONSTRUCTION_METHOD, alias: "IterativeReconstructionMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTENUATION_CORRECTION_TEMPORAL_RELATIONSHIP, alias: "AttenuationCorrectionTemporalRelationship", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_PHYSIOLOGICAL_STATE_SEQUENCE, alias: "PatientPhysiologicalStateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_PHYSIOLOGICAL_STATE_CODE_SEQUENCE, alias: "PatientPhysiologicalStateCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEPTHS_OF_FOCUS, alias: "DepthsOfFocus", vr: VR::FD, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: EXCLUDED_INTERVALS_SEQUENCE, alias: "ExcludedIntervalsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCLUSION_START_DATE_TIME, alias: "ExclusionStartDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCLUSION_DURATION, alias: "ExclusionDuration", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: US_IMAGE_DESCRIPTION_SEQUENCE, alias: "USImageDescriptionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_DATA_TYPE_SEQUENCE, alias: "ImageDataTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_TYPE, alias: "DataType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_SCAN_PATTERN_CODE_SEQUENCE, alias: "TransducerScanPatternCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALIASED_DATA_TYPE, alias: "AliasedDataType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITION_MEASURING_DEVICE_USED, alias: "PositionMeasuringDeviceUsed", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_GEOMETRY_CODE_SEQUENCE, alias: "TransducerGeometryCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_BEAM_STEERING_CODE_SEQUENCE, alias: "TransducerBeamSteeringCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSDUCER_APPLICATION_CODE_SEQUENCE, alias: "TransducerApplicationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ZERO_VELOCITY_PIXEL_VALUE, alias: "ZeroVelocityPixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRIBUTING_EQUIPMENT_SEQUENCE, alias: "ContributingEquipmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRIBUTION_DATE_TIME, alias: "ContributionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTRIBUTION_DESCRIPTION, alias: "ContributionDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_ID, alias: "StudyID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOTOPE_NUMBER, alias: "IsotopeNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHASE_NUMBER, alias: "PhaseNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERVAL_NUMBER, alias: "IntervalNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_SLOT_NUMBER, alias: "TimeSlotNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANGLE_NUMBER, alias: "AngleNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITEM_NUMBER, alias: "ItemNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ORIENTATION, alias: "PatientOrientation", vr: VR::CS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: OVERLAY_NUMBER, alias: "OverlayNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_NUMBER, alias: "CurveNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUT_NUMBER, alias: "LUTNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PYRAMID_LABEL, alias: "PyramidLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_POSITION, alias: "ImagePosition", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: IMAGE_ORIENTATION, alias: "ImageOrientation", vr: VR::DS, vm: (6, 6) },
    DataDictionaryEntryRef { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VR::DS, vm: (6, 6) },
    DataDictionaryEntryRef { tag: LOCATION, alias: "Location", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_UID, alias: "FrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERALITY, alias: "Laterality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_LATERALITY, alias: "ImageLaterality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_GEOMETRY_TYPE, alias: "ImageGeometryType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MASKING_IMAGE, alias: "MaskingImage", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REPORT_NUMBER, alias: "ReportNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPORAL_POSITION_IDENTIFIER, alias: "TemporalPositionIdentifier", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TEMPORAL_POSITIONS, alias: "NumberOfTemporalPositions", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPORAL_RESOLUTION, alias: "TemporalResolution", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYNCHRONIZATION_FRAME_OF_REFERENCE_UID, alias: "SynchronizationFrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE, alias: "SOPInstanceUIDOfConcatenationSource", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_IN_STUDY, alias: "SeriesInStudy", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITIONS_IN_SERIES, alias: "AcquisitionsInSeries", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGES_IN_ACQUISITION, alias: "ImagesInAcquisition", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGES_IN_SERIES, alias: "ImagesInSeries", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITIONS_IN_STUDY, alias: "AcquisitionsInStudy", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGES_IN_STUDY, alias: "ImagesInStudy", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE, alias: "Reference", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TARGET_POSITION_REFERENCE_INDICATOR, alias: "TargetPositionReferenceIndicator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITION_REFERENCE_INDICATOR, alias: "PositionReferenceIndicator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLICE_LOCATION, alias: "SliceLocation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_STUDY_NUMBERS, alias: "OtherStudyNumbers", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PATIENT_RELATED_STUDIES, alias: "NumberOfPatientRelatedStudies", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PATIENT_RELATED_SERIES, alias: "NumberOfPatientRelatedSeries", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PATIENT_RELATED_INSTANCES, alias: "NumberOfPatientRelatedInstances", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_STUDY_RELATED_SERIES, alias: "NumberOfStudyRelatedSeries", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_STUDY_RELATED_INSTANCES, alias: "NumberOfStudyRelatedInstances", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SERIES_RELATED_INSTANCES, alias: "NumberOfSeriesRelatedInstances", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFYING_DEVICE_ID, alias: "ModifyingDeviceID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFIED_IMAGE_ID, alias: "ModifiedImageID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFIED_IMAGE_DATE, alias: "ModifiedImageDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFYING_DEVICE_MANUFACTURER, alias: "ModifyingDeviceManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFIED_IMAGE_TIME, alias: "ModifiedImageTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFIED_IMAGE_DESCRIPTION, alias: "ModifiedImageDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_COMMENTS, alias: "ImageComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORIGINAL_IMAGE_IDENTIFICATION, alias: "OriginalImageIdentification", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ORIGINAL_IMAGE_IDENTIFICATION_NOMENCLATURE, alias: "OriginalImageIdentificationNomenclature", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: STACK_ID, alias: "StackID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IN_STACK_POSITION_NUMBER, alias: "InStackPositionNumber", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_ANATOMY_SEQUENCE, alias: "FrameAnatomySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_LATERALITY, alias: "FrameLaterality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_CONTENT_SEQUENCE, alias: "FrameContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE_POSITION_SEQUENCE, alias: "PlanePositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE_ORIENTATION_SEQUENCE, alias: "PlaneOrientationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPORAL_POSITION_INDEX, alias: "TemporalPositionIndex", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_CARDIAC_TRIGGER_DELAY_TIME, alias: "NominalCardiacTriggerDelayTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK, alias: "NominalCardiacTriggerTimePriorToRPeak", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTUAL_CARDIAC_TRIGGER_TIME_PRIOR_TO_R_PEAK, alias: "ActualCardiacTriggerTimePriorToRPeak", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_ACQUISITION_NUMBER, alias: "FrameAcquisitionNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_INDEX_VALUES, alias: "DimensionIndexValues", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_COMMENTS, alias: "FrameComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONCATENATION_UID, alias: "ConcatenationUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IN_CONCATENATION_NUMBER, alias: "InConcatenationNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IN_CONCATENATION_TOTAL_NUMBER, alias: "InConcatenationTotalNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_ORGANIZATION_UID, alias: "DimensionOrganizationUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_INDEX_POINTER, alias: "DimensionIndexPointer", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FUNCTIONAL_GROUP_POINTER, alias: "FunctionalGroupPointer", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNASSIGNED_SHARED_CONVERTED_ATTRIBUTES_SEQUENCE, alias: "UnassignedSharedConvertedAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNASSIGNED_PER_FRAME_CONVERTED_ATTRIBUTES_SEQUENCE, alias: "UnassignedPerFrameConvertedAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONVERSION_SOURCE_ATTRIBUTES_SEQUENCE, alias: "ConversionSourceAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_INDEX_PRIVATE_CREATOR, alias: "DimensionIndexPrivateCreator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_ORGANIZATION_SEQUENCE, alias: "DimensionOrganizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_INDEX_SEQUENCE, alias: "DimensionIndexSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONCATENATION_FRAME_OFFSET_NUMBER, alias: "ConcatenationFrameOffsetNumber", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FUNCTIONAL_GROUP_PRIVATE_CREATOR, alias: "FunctionalGroupPrivateCreator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_PERCENTAGE_OF_CARDIAC_PHASE, alias: "NominalPercentageOfCardiacPhase", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_PERCENTAGE_OF_RESPIRATORY_PHASE, alias: "NominalPercentageOfRespiratoryPhase", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STARTING_RESPIRATORY_AMPLITUDE, alias: "StartingRespiratoryAmplitude", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STARTING_RESPIRATORY_PHASE, alias: "StartingRespiratoryPhase", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENDING_RESPIRATORY_AMPLITUDE, alias: "EndingRespiratoryAmplitude", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENDING_RESPIRATORY_PHASE, alias: "EndingRespiratoryPhase", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_TRIGGER_TYPE, alias: "RespiratoryTriggerType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RR_INTERVAL_TIME_NOMINAL, alias: "RRIntervalTimeNominal", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTUAL_CARDIAC_TRIGGER_DELAY_TIME, alias: "ActualCardiacTriggerDelayTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_SYNCHRONIZATION_SEQUENCE, alias: "RespiratorySynchronizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_INTERVAL_TIME, alias: "RespiratoryIntervalTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_RESPIRATORY_TRIGGER_DELAY_TIME, alias: "NominalRespiratoryTriggerDelayTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESPIRATORY_TRIGGER_DELAY_THRESHOLD, alias: "RespiratoryTriggerDelayThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTUAL_RESPIRATORY_TRIGGER_DELAY_TIME, alias: "ActualRespiratoryTriggerDelayTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_POSITION_VOLUME, alias: "ImagePositionVolume", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: IMAGE_ORIENTATION_VOLUME, alias: "ImageOrientationVolume", vr: VR::FD, vm: (6, 6) },
    DataDictionaryEntryRef { tag: ULTRASOUND_ACQUISITION_GEOMETRY, alias: "UltrasoundAcquisitionGeometry", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APEX_POSITION, alias: "ApexPosition", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: VOLUME_TO_TRANSDUCER_MAPPING_MATRIX, alias: "VolumeToTransducerMappingMatrix", vr: VR::FD, vm: (16, 16) },
    DataDictionaryEntryRef { tag: VOLUME_TO_TABLE_MAPPING_MATRIX, alias: "VolumeToTableMappingMatrix", vr: VR::FD, vm: (16, 16) },
    DataDictionaryEntryRef { tag: VOLUME_TO_TRANSDUCER_RELATIONSHIP, alias: "VolumeToTransducerRelationship", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_FRAME_OF_REFERENCE_SOURCE, alias: "PatientFrameOfReferenceSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPORAL_POSITION_TIME_OFFSET, alias: "TemporalPositionTimeOffset", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE_POSITION_VOLUME_SEQUENCE, alias: "PlanePositionVolumeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE_ORIENTATION_VOLUME_SEQUENCE, alias: "PlaneOrientationVolumeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPORAL_POSITION_SEQUENCE, alias: "TemporalPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_ORGANIZATION_TYPE, alias: "DimensionOrganizationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUME_FRAME_OF_REFERENCE_UID, alias: "VolumeFrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_FRAME_OF_REFERENCE_UID, alias: "TableFrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIMENSION_DESCRIPTION_LABEL, alias: "DimensionDescriptionLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ORIENTATION_IN_FRAME_SEQUENCE, alias: "PatientOrientationInFrameSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_LABEL, alias: "FrameLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_INDEX, alias: "AcquisitionIndex", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CONTRIBUTING_SOP_INSTANCES_REFERENCE_SEQUENCE, alias: "ContributingSOPInstancesReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_INDEX, alias: "ReconstructionIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LIGHT_PATH_FILTER_PASS_THROUGH_WAVELENGTH, alias: "LightPathFilterPassThroughWavelength", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LIGHT_PATH_FILTER_PASS_BAND, alias: "LightPathFilterPassBand", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: IMAGE_PATH_FILTER_PASS_THROUGH_WAVELENGTH, alias: "ImagePathFilterPassThroughWavelength", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_PATH_FILTER_PASS_BAND, alias: "ImagePathFilterPassBand", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: PATIENT_EYE_MOVEMENT_COMMANDED, alias: "PatientEyeMovementCommanded", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_EYE_MOVEMENT_COMMAND_CODE_SEQUENCE, alias: "PatientEyeMovementCommandCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPHERICAL_LENS_POWER, alias: "SphericalLensPower", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CYLINDER_LENS_POWER, alias: "CylinderLensPower", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CYLINDER_AXIS, alias: "CylinderAxis", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EMMETROPIC_MAGNIFICATION, alias: "EmmetropicMagnification", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTRA_OCULAR_PRESSURE, alias: "IntraOcularPressure", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HORIZONTAL_FIELD_OF_VIEW, alias: "HorizontalFieldOfView", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PUPIL_DILATED, alias: "PupilDilated", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEGREE_OF_DILATION, alias: "DegreeOfDilation", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTEX_DISTANCE, alias: "VertexDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_BASELINE_ANGLE, alias: "StereoBaselineAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_BASELINE_DISPLACEMENT, alias: "StereoBaselineDisplacement", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_HORIZONTAL_PIXEL_OFFSET, alias: "StereoHorizontalPixelOffset", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_VERTICAL_PIXEL_OFFSET, alias: "StereoVerticalPixelOffset", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_ROTATION, alias: "StereoRotation", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_DEVICE_TYPE_CODE_SEQUENCE, alias: "AcquisitionDeviceTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ILLUMINATION_TYPE_CODE_SEQUENCE, alias: "IlluminationTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LIGHT_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE, alias: "LightPathFilterTypeStackCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_PATH_FILTER_TYPE_STACK_CODE_SEQUENCE, alias: "ImagePathFilterTypeStackCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENSES_CODE_SEQUENCE, alias: "LensesCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DESCRIPTION_CODE_SEQUENCE, alias: "ChannelDescriptionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFRACTIVE_STATE_SEQUENCE, alias: "RefractiveStateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MYDRIATIC_AGENT_CODE_SEQUENCE, alias: "MydriaticAgentCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIVE_IMAGE_POSITION_CODE_SEQUENCE, alias: "RelativeImagePositionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CAMERA_ANGLE_OF_VIEW, alias: "CameraAngleOfView", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_PAIRS_SEQUENCE, alias: "StereoPairsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LEFT_IMAGE_SEQUENCE, alias: "LeftImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RIGHT_IMAGE_SEQUENCE, alias: "RightImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STEREO_PAIRS_PRESENT, alias: "StereoPairsPresent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AXIAL_LENGTH_OF_THE_EYE, alias: "AxialLengthOfTheEye", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_FRAME_LOCATION_SEQUENCE, alias: "OphthalmicFrameLocationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_COORDINATES, alias: "ReferenceCoordinates", vr: VR::FL, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: DEPTH_SPATIAL_RESOLUTION, alias: "DepthSpatialResolution", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_DEPTH_DISTORTION, alias: "MaximumDepthDistortion", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALONG_SCAN_SPATIAL_RESOLUTION, alias: "AlongScanSpatialResolution", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_ALONG_SCAN_DISTORTION, alias: "MaximumAlongScanDistortion", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_IMAGE_ORIENTATION, alias: "OphthalmicImageOrientation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEPTH_OF_TRANSVERSE_IMAGE, alias: "DepthOfTransverseImage", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MYDRIATIC_AGENT_CONCENTRATION_UNITS_SEQUENCE, alias: "MydriaticAgentConcentrationUnitsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACROSS_SCAN_SPATIAL_RESOLUTION, alias: "AcrossScanSpatialResolution", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_ACROSS_SCAN_DISTORTION, alias: "MaximumAcrossScanDistortion", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MYDRIATIC_AGENT_CONCENTRATION, alias: "MydriaticAgentConcentration", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ILLUMINATION_WAVE_LENGTH, alias: "IlluminationWaveLength", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ILLUMINATION_POWER, alias: "IlluminationPower", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ILLUMINATION_BANDWIDTH, alias: "IlluminationBandwidth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MYDRIATIC_AGENT_SEQUENCE, alias: "MydriaticAgentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_MEASUREMENTS_RIGHT_EYE_SEQUENCE, alias: "OphthalmicAxialMeasurementsRightEyeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_MEASUREMENTS_LEFT_EYE_SEQUENCE, alias: "OphthalmicAxialMeasurementsLeftEyeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_MEASUREMENTS_DEVICE_TYPE, alias: "OphthalmicAxialMeasurementsDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_TYPE, alias: "OphthalmicAxialLengthMeasurementsType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_SEQUENCE, alias: "OphthalmicAxialLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH, alias: "OphthalmicAxialLength", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENS_STATUS_CODE_SEQUENCE, alias: "LensStatusCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VITREOUS_STATUS_CODE_SEQUENCE, alias: "VitreousStatusCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_FORMULA_CODE_SEQUENCE, alias: "IOLFormulaCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_FORMULA_DETAIL, alias: "IOLFormulaDetail", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: KERATOMETER_INDEX, alias: "KeratometerIndex", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_OPHTHALMIC_AXIAL_LENGTH_CODE_SEQUENCE, alias: "SourceOfOphthalmicAxialLengthCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_CORNEAL_SIZE_DATA_CODE_SEQUENCE, alias: "SourceOfCornealSizeDataCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_REFRACTION, alias: "TargetRefraction", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFRACTIVE_PROCEDURE_OCCURRED, alias: "RefractiveProcedureOccurred", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFRACTIVE_SURGERY_TYPE_CODE_SEQUENCE, alias: "RefractiveSurgeryTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_ULTRASOUND_METHOD_CODE_SEQUENCE, alias: "OphthalmicUltrasoundMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURGICALLY_INDUCED_ASTIGMATISM_SEQUENCE, alias: "SurgicallyInducedAstigmatismSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TYPE_OF_OPTICAL_CORRECTION, alias: "TypeOfOpticalCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TORIC_IOL_POWER_SEQUENCE, alias: "ToricIOLPowerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREDICTED_TORIC_ERROR_SEQUENCE, alias: "PredictedToricErrorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRE_SELECTED_FOR_IMPLANTATION, alias: "PreSelectedForImplantation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TORIC_IOL_POWER_FOR_EXACT_EMMETROPIA_SEQUENCE, alias: "ToricIOLPowerForExactEmmetropiaSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TORIC_IOL_POWER_FOR_EXACT_TARGET_REFRACTION_SEQUENCE, alias: "ToricIOLPowerForExactTargetRefractionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEQUENCE, alias: "OphthalmicAxialLengthMeasurementsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_POWER, alias: "IOLPower", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREDICTED_REFRACTIVE_ERROR, alias: "PredictedRefractiveError", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_VELOCITY, alias: "OphthalmicAxialLengthVelocity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENS_STATUS_DESCRIPTION, alias: "LensStatusDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VITREOUS_STATUS_DESCRIPTION, alias: "VitreousStatusDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_POWER_SEQUENCE, alias: "IOLPowerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENS_CONSTANT_SEQUENCE, alias: "LensConstantSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_MANUFACTURER, alias: "IOLManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENS_CONSTANT_DESCRIPTION, alias: "LensConstantDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_NAME, alias: "ImplantName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: KERATOMETRY_MEASUREMENT_TYPE_CODE_SEQUENCE, alias: "KeratometryMeasurementTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_PART_NUMBER, alias: "ImplantPartNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OPHTHALMIC_AXIAL_MEASUREMENTS_SEQUENCE, alias: "ReferencedOphthalmicAxialMeasurementsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEGMENT_NAME_CODE_SEQUENCE, alias: "OphthalmicAxialLengthMeasurementsSegmentNameCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFRACTIVE_ERROR_BEFORE_REFRACTIVE_SURGERY_CODE_SEQUENCE, alias: "RefractiveErrorBeforeRefractiveSurgeryCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_POWER_FOR_EXACT_EMMETROPIA, alias: "IOLPowerForExactEmmetropia", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IOL_POWER_FOR_EXACT_TARGET_REFRACTION, alias: "IOLPowerForExactTargetRefraction", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANTERIOR_CHAMBER_DEPTH_DEFINITION_CODE_SEQUENCE, alias: "AnteriorChamberDepthDefinitionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENS_THICKNESS_SEQUENCE, alias: "LensThicknessSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANTERIOR_CHAMBER_DEPTH_SEQUENCE, alias: "AnteriorChamberDepthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LENS_THICKNESS, alias: "LensThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANTERIOR_CHAMBER_DEPTH, alias: "AnteriorChamberDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_LENS_THICKNESS_DATA_CODE_SEQUENCE, alias: "SourceOfLensThicknessDataCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_ANTERIOR_CHAMBER_DEPTH_DATA_CODE_SEQUENCE, alias: "SourceOfAnteriorChamberDepthDataCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_REFRACTIVE_MEASUREMENTS_SEQUENCE, alias: "SourceOfRefractiveMeasurementsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_REFRACTIVE_MEASUREMENTS_CODE_SEQUENCE, alias: "SourceOfRefractiveMeasurementsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENT_MODIFIED, alias: "OphthalmicAxialLengthMeasurementModified", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_DATA_SOURCE_CODE_SEQUENCE, alias: "OphthalmicAxialLengthDataSourceCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_ACQUISITION_METHOD_CODE_SEQUENCE, alias: "OphthalmicAxialLengthAcquisitionMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SIGNAL_TO_NOISE_RATIO, alias: "SignalToNoiseRatio", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_DATA_SOURCE_DESCRIPTION, alias: "OphthalmicAxialLengthDataSourceDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_TOTAL_LENGTH_SEQUENCE, alias: "OphthalmicAxialLengthMeasurementsTotalLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEGMENTAL_LENGTH_SEQUENCE, alias: "OphthalmicAxialLengthMeasurementsSegmentalLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_LENGTH_SUMMATION_SEQUENCE, alias: "OphthalmicAxialLengthMeasurementsLengthSummationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ULTRASOUND_OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEQUENCE, alias: "UltrasoundOphthalmicAxialLengthMeasurementsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPTICAL_OPHTHALMIC_AXIAL_LENGTH_MEASUREMENTS_SEQUENCE, alias: "OpticalOphthalmicAxialLengthMeasurementsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ULTRASOUND_SELECTED_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE, alias: "UltrasoundSelectedOphthalmicAxialLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_SELECTION_METHOD_CODE_SEQUENCE, alias: "OphthalmicAxialLengthSelectionMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPTICAL_SELECTED_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE, alias: "OpticalSelectedOphthalmicAxialLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTED_SEGMENTAL_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE, alias: "SelectedSegmentalOphthalmicAxialLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTED_TOTAL_OPHTHALMIC_AXIAL_LENGTH_SEQUENCE, alias: "SelectedTotalOphthalmicAxialLengthSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_QUALITY_METRIC_SEQUENCE, alias: "OphthalmicAxialLengthQualityMetricSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_QUALITY_METRIC_TYPE_CODE_SEQUENCE, alias: "OphthalmicAxialLengthQualityMetricTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_AXIAL_LENGTH_QUALITY_METRIC_TYPE_DESCRIPTION, alias: "OphthalmicAxialLengthQualityMetricTypeDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTRAOCULAR_LENS_CALCULATIONS_RIGHT_EYE_SEQUENCE, alias: "IntraocularLensCalculationsRightEyeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTRAOCULAR_LENS_CALCULATIONS_LEFT_EYE_SEQUENCE, alias: "IntraocularLensCalculationsLeftEyeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OPHTHALMIC_AXIAL_LENGTH_MEASUREMENT_QC_IMAGE_SEQUENCE, alias: "ReferencedOphthalmicAxialLengthMeasurementQCImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_MAPPING_DEVICE_TYPE, alias: "OphthalmicMappingDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_METHOD_CODE_SEQUENCE, alias: "AcquisitionMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_METHOD_ALGORITHM_SEQUENCE, alias: "AcquisitionMethodAlgorithmSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_THICKNESS_MAP_TYPE_CODE_SEQUENCE, alias: "OphthalmicThicknessMapTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_THICKNESS_MAPPING_NORMALS_SEQUENCE, alias: "OphthalmicThicknessMappingNormalsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETINAL_THICKNESS_DEFINITION_CODE_SEQUENCE, alias: "RetinalThicknessDefinitionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_VALUE_MAPPING_TO_CODED_CONCEPT_SEQUENCE, alias: "PixelValueMappingToCodedConceptSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAPPED_PIXEL_VALUE, alias: "MappedPixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_VALUE_MAPPING_EXPLANATION, alias: "PixelValueMappingExplanation", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_THICKNESS_MAP_QUALITY_THRESHOLD_SEQUENCE, alias: "OphthalmicThicknessMapQualityThresholdSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_THICKNESS_MAP_THRESHOLD_QUALITY_RATING, alias: "OphthalmicThicknessMapThresholdQualityRating", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANATOMIC_STRUCTURE_REFERENCE_POINT, alias: "AnatomicStructureReferencePoint", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: REGISTRATION_TO_LOCALIZER_SEQUENCE, alias: "RegistrationToLocalizerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGISTERED_LOCALIZER_UNITS, alias: "RegisteredLocalizerUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGISTERED_LOCALIZER_TOP_LEFT_HAND_CORNER, alias: "RegisteredLocalizerTopLeftHandCorner", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: REGISTERED_LOCALIZER_BOTTOM_RIGHT_HAND_CORNER, alias: "RegisteredLocalizerBottomRightHandCorner", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_THICKNESS_MAP_QUALITY_RATING_SEQUENCE, alias: "OphthalmicThicknessMapQualityRatingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELEVANT_OPT_ATTRIBUTES_SEQUENCE, alias: "RelevantOPTAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORMATION_METHOD_CODE_SEQUENCE, alias: "TransformationMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORMATION_ALGORITHM_SEQUENCE, alias: "TransformationAlgorithmSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_FOV, alias: "OphthalmicFOV", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_DIMENSIONAL_TO_THREE_DIMENSIONAL_MAP_SEQUENCE, alias: "TwoDimensionalToThreeDimensionalMapSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_QUALITY_RATING_SEQUENCE, alias: "WideFieldOphthalmicPhotographyQualityRatingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_QUALITY_THRESHOLD_SEQUENCE, alias: "WideFieldOphthalmicPhotographyQualityThresholdSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WIDE_FIELD_OPHTHALMIC_PHOTOGRAPHY_THRESHOLD_QUALITY_RATING, alias: "WideFieldOphthalmicPhotographyThresholdQualityRating", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_COORDINATES_CENTER_PIXEL_VIEW_ANGLE, alias: "XCoordinatesCenterPixelViewAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: Y_COORDINATES_CENTER_PIXEL_VIEW_ANGLE, alias: "YCoordinatesCenterPixelViewAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_MAP_POINTS, alias: "NumberOfMapPoints", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_DIMENSIONAL_TO_THREE_DIMENSIONAL_MAP_DATA, alias: "TwoDimensionalToThreeDimensionalMapData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_HORIZONTAL_EXTENT, alias: "VisualFieldHorizontalExtent", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_VERTICAL_EXTENT, alias: "VisualFieldVerticalExtent", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_SHAPE, alias: "VisualFieldShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCREENING_TEST_MODE_CODE_SEQUENCE, alias: "ScreeningTestModeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_STIMULUS_LUMINANCE, alias: "MaximumStimulusLuminance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BACKGROUND_LUMINANCE, alias: "BackgroundLuminance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STIMULUS_COLOR_CODE_SEQUENCE, alias: "StimulusColorCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BACKGROUND_ILLUMINATION_COLOR_CODE_SEQUENCE, alias: "BackgroundIlluminationColorCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STIMULUS_AREA, alias: "StimulusArea", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STIMULUS_PRESENTATION_TIME, alias: "StimulusPresentationTime", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_SEQUENCE, alias: "FixationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_MONITORING_CODE_SEQUENCE, alias: "FixationMonitoringCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_CATCH_TRIAL_SEQUENCE, alias: "VisualFieldCatchTrialSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_CHECKED_QUANTITY, alias: "FixationCheckedQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_NOT_PROPERLY_FIXATED_QUANTITY, alias: "PatientNotProperlyFixatedQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTED_VISUAL_STIMULI_DATA_FLAG, alias: "PresentedVisualStimuliDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_VISUAL_STIMULI, alias: "NumberOfVisualStimuli", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCESSIVE_FIXATION_LOSSES_DATA_FLAG, alias: "ExcessiveFixationLossesDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCESSIVE_FIXATION_LOSSES, alias: "ExcessiveFixationLosses", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STIMULI_RETESTING_QUANTITY, alias: "StimuliRetestingQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMENTS_ON_PATIENT_PERFORMANCE_OF_VISUAL_FIELD, alias: "CommentsOnPatientPerformanceOfVisualField", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FALSE_NEGATIVES_ESTIMATE_FLAG, alias: "FalseNegativesEstimateFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FALSE_NEGATIVES_ESTIMATE, alias: "FalseNegativesEstimate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NEGATIVE_CATCH_TRIALS_QUANTITY, alias: "NegativeCatchTrialsQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FALSE_NEGATIVES_QUANTITY, alias: "FalseNegativesQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCESSIVE_FALSE_NEGATIVES_DATA_FLAG, alias: "ExcessiveFalseNegativesDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCESSIVE_FALSE_NEGATIVES, alias: "ExcessiveFalseNegatives", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FALSE_POSITIVES_ESTIMATE_FLAG, alias: "FalsePositivesEstimateFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FALSE_POSITIVES_ESTIMATE, alias: "FalsePositivesEstimate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CATCH_TRIALS_DATA_FLAG, alias: "CatchTrialsDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POSITIVE_CATCH_TRIALS_QUANTITY, alias: "PositiveCatchTrialsQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEST_POINT_NORMALS_DATA_FLAG, alias: "TestPointNormalsDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEST_POINT_NORMALS_SEQUENCE, alias: "TestPointNormalsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GLOBAL_DEVIATION_PROBABILITY_NORMALS_FLAG, alias: "GlobalDeviationProbabilityNormalsFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FALSE_POSITIVES_QUANTITY, alias: "FalsePositivesQuantity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCESSIVE_FALSE_POSITIVES_DATA_FLAG, alias: "ExcessiveFalsePositivesDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCESSIVE_FALSE_POSITIVES, alias: "ExcessiveFalsePositives", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_NORMALS_FLAG, alias: "VisualFieldTestNormalsFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESULTS_NORMALS_SEQUENCE, alias: "ResultsNormalsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AGE_CORRECTED_SENSITIVITY_DEVIATION_ALGORITHM_SEQUENCE, alias: "AgeCorrectedSensitivityDeviationAlgorithmSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GLOBAL_DEVIATION_FROM_NORMAL, alias: "GlobalDeviationFromNormal", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERALIZED_DEFECT_SENSITIVITY_DEVIATION_ALGORITHM_SEQUENCE, alias: "GeneralizedDefectSensitivityDeviationAlgorithmSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCALIZED_DEVIATION_FROM_NORMAL, alias: "LocalizedDeviationFromNormal", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_RELIABILITY_INDICATOR, alias: "PatientReliabilityIndicator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_MEAN_SENSITIVITY, alias: "VisualFieldMeanSensitivity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GLOBAL_DEVIATION_PROBABILITY, alias: "GlobalDeviationProbability", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCAL_DEVIATION_PROBABILITY_NORMALS_FLAG, alias: "LocalDeviationProbabilityNormalsFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCALIZED_DEVIATION_PROBABILITY, alias: "LocalizedDeviationProbability", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHORT_TERM_FLUCTUATION_CALCULATED, alias: "ShortTermFluctuationCalculated", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHORT_TERM_FLUCTUATION, alias: "ShortTermFluctuation", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHORT_TERM_FLUCTUATION_PROBABILITY_CALCULATED, alias: "ShortTermFluctuationProbabilityCalculated", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHORT_TERM_FLUCTUATION_PROBABILITY, alias: "ShortTermFluctuationProbability", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL_CALCULATED, alias: "CorrectedLocalizedDeviationFromNormalCalculated", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL, alias: "CorrectedLocalizedDeviationFromNormal", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL_PROBABILITY_CALCULATED, alias: "CorrectedLocalizedDeviationFromNormalProbabilityCalculated", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CORRECTED_LOCALIZED_DEVIATION_FROM_NORMAL_PROBABILITY, alias: "CorrectedLocalizedDeviationFromNormalProbability", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GLOBAL_DEVIATION_PROBABILITY_SEQUENCE, alias: "GlobalDeviationProbabilitySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCALIZED_DEVIATION_PROBABILITY_SEQUENCE, alias: "LocalizedDeviationProbabilitySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOVEAL_SENSITIVITY_MEASURED, alias: "FovealSensitivityMeasured", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOVEAL_SENSITIVITY, alias: "FovealSensitivity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_DURATION, alias: "VisualFieldTestDuration", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_POINT_SEQUENCE, alias: "VisualFieldTestPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_POINT_X_COORDINATE, alias: "VisualFieldTestPointXCoordinate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_POINT_Y_COORDINATE, alias: "VisualFieldTestPointYCoordinate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AGE_CORRECTED_SENSITIVITY_DEVIATION_VALUE, alias: "AgeCorrectedSensitivityDeviationValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STIMULUS_RESULTS, alias: "StimulusResults", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SENSITIVITY_VALUE, alias: "SensitivityValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETEST_STIMULUS_SEEN, alias: "RetestStimulusSeen", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETEST_SENSITIVITY_VALUE, alias: "RetestSensitivityValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_POINT_NORMALS_SEQUENCE, alias: "VisualFieldTestPointNormalsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUANTIFIED_DEFECT, alias: "QuantifiedDefect", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AGE_CORRECTED_SENSITIVITY_DEVIATION_PROBABILITY_VALUE, alias: "AgeCorrectedSensitivityDeviationProbabilityValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERALIZED_DEFECT_CORRECTED_SENSITIVITY_DEVIATION_FLAG, alias: "GeneralizedDefectCorrectedSensitivityDeviationFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERALIZED_DEFECT_CORRECTED_SENSITIVITY_DEVIATION_VALUE, alias: "GeneralizedDefectCorrectedSensitivityDeviationValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERALIZED_DEFECT_CORRECTED_SENSITIVITY_DEVIATION_PROBABILITY_VALUE, alias: "GeneralizedDefectCorrectedSensitivityDeviationProbabilityValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MINIMUM_SENSITIVITY_VALUE, alias: "MinimumSensitivityValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLIND_SPOT_LOCALIZED, alias: "BlindSpotLocalized", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLIND_SPOT_X_COORDINATE, alias: "BlindSpotXCoordinate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLIND_SPOT_Y_COORDINATE, alias: "BlindSpotYCoordinate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_ACUITY_MEASUREMENT_SEQUENCE, alias: "VisualAcuityMeasurementSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFRACTIVE_PARAMETERS_USED_ON_PATIENT_SEQUENCE, alias: "RefractiveParametersUsedOnPatientSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_LATERALITY, alias: "MeasurementLaterality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_PATIENT_CLINICAL_INFORMATION_LEFT_EYE_SEQUENCE, alias: "OphthalmicPatientClinicalInformationLeftEyeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPHTHALMIC_PATIENT_CLINICAL_INFORMATION_RIGHT_EYE_SEQUENCE, alias: "OphthalmicPatientClinicalInformationRightEyeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOVEAL_POINT_NORMATIVE_DATA_FLAG, alias: "FovealPointNormativeDataFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOVEAL_POINT_PROBABILITY_VALUE, alias: "FovealPointProbabilityValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCREENING_BASELINE_MEASURED, alias: "ScreeningBaselineMeasured", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCREENING_BASELINE_MEASURED_SEQUENCE, alias: "ScreeningBaselineMeasuredSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCREENING_BASELINE_TYPE, alias: "ScreeningBaselineType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCREENING_BASELINE_VALUE, alias: "ScreeningBaselineValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_SOURCE, alias: "AlgorithmSource", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_NAME, alias: "DataSetName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_VERSION, alias: "DataSetVersion", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_SOURCE, alias: "DataSetSource", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_DESCRIPTION, alias: "DataSetDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_TEST_RELIABILITY_GLOBAL_INDEX_SEQUENCE, alias: "VisualFieldTestReliabilityGlobalIndexSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_FIELD_GLOBAL_RESULTS_INDEX_SEQUENCE, alias: "VisualFieldGlobalResultsIndexSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_OBSERVATION_SEQUENCE, alias: "DataObservationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDEX_NORMALS_FLAG, alias: "IndexNormalsFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDEX_PROBABILITY, alias: "IndexProbability", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INDEX_PROBABILITY_SEQUENCE, alias: "IndexProbabilitySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAMPLES_PER_PIXEL_USED, alias: "SamplesPerPixelUsed", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_DIMENSIONS, alias: "ImageDimensions", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_INCREMENT_POINTER, alias: "FrameIncrementPointer", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_DIMENSION_POINTER, alias: "FrameDimensionPointer", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ROWS, alias: "Rows", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLUMNS, alias: "Columns", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANES, alias: "Planes", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ULTRASOUND_COLOR_DATA_PRESENT, alias: "UltrasoundColorDataPresent", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: ZOOM_FACTOR, alias: "ZoomFactor", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: ZOOM_CENTER, alias: "ZoomCenter", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: PIXEL_ASPECT_RATIO, alias: "PixelAspectRatio", vr: VR::IS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: IMAGE_FORMAT, alias: "ImageFormat", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANIPULATED_IMAGE, alias: "ManipulatedImage", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CORRECTED_IMAGE, alias: "CorrectedImage", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COMPRESSION_RECOGNITION_CODE, alias: "CompressionRecognitionCode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_CODE, alias: "CompressionCode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_ORIGINATOR, alias: "CompressionOriginator", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_LABEL, alias: "CompressionLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_DESCRIPTION, alias: "CompressionDescription", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPRESSION_SEQUENCE, alias: "CompressionSequence", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COMPRESSION_STEP_POINTERS, alias: "CompressionStepPointers", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REPEAT_INTERVAL, alias: "RepeatInterval", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BITS_GROUPED, alias: "BitsGrouped", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERIMETER_TABLE, alias: "PerimeterTable", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PREDICTOR_ROWS, alias: "PredictorRows", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREDICTOR_COLUMNS, alias: "PredictorColumns", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREDICTOR_CONSTANTS, alias: "PredictorConstants", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: BLOCKED_PIXELS, alias: "BlockedPixels", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_ROWS, alias: "BlockRows", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_COLUMNS, alias: "BlockColumns", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROW_OVERLAP, alias: "RowOverlap", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLUMN_OVERLAP, alias: "ColumnOverlap", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BITS_STORED, alias: "BitsStored", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HIGH_BIT, alias: "HighBit", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SMALLEST_VALID_PIXEL_VALUE, alias: "SmallestValidPixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGEST_VALID_PIXEL_VALUE, alias: "LargestValidPixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SMALLEST_IMAGE_PIXEL_VALUE, alias: "SmallestImagePixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGEST_IMAGE_PIXEL_VALUE, alias: "LargestImagePixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SMALLEST_PIXEL_VALUE_IN_SERIES, alias: "SmallestPixelValueInSeries", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGEST_PIXEL_VALUE_IN_SERIES, alias: "LargestPixelValueInSeries", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SMALLEST_IMAGE_PIXEL_VALUE_IN_PLANE, alias: "SmallestImagePixelValueInPlane", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGEST_IMAGE_PIXEL_VALUE_IN_PLANE, alias: "LargestImagePixelValueInPlane", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_PADDING_VALUE, alias: "PixelPaddingValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_PADDING_RANGE_LIMIT, alias: "PixelPaddingRangeLimit", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOAT_PIXEL_PADDING_VALUE, alias: "FloatPixelPaddingValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_FLOAT_PIXEL_PADDING_VALUE, alias: "DoubleFloatPixelPaddingValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOAT_PIXEL_PADDING_RANGE_LIMIT, alias: "FloatPixelPaddingRangeLimit", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_FLOAT_PIXEL_PADDING_RANGE_LIMIT, alias: "DoubleFloatPixelPaddingRangeLimit", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_LOCATION, alias: "ImageLocation", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUALITY_CONTROL_IMAGE, alias: "QualityControlImage", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BURNED_IN_ANNOTATION, alias: "BurnedInAnnotation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOGNIZABLE_VISUAL_FEATURES, alias: "RecognizableVisualFeatures", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONGITUDINAL_TEMPORAL_INFORMATION_MODIFIED, alias: "LongitudinalTemporalInformationModified", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_COLOR_PALETTE_INSTANCE_UID, alias: "ReferencedColorPaletteInstanceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORM_LABEL, alias: "TransformLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFORM_VERSION_NUMBER, alias: "TransformVersionNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TRANSFORM_STEPS, alias: "NumberOfTransformSteps", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEQUENCE_OF_COMPRESSED_DATA, alias: "SequenceOfCompressedData", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DETAILS_OF_COEFFICIENTS, alias: "DetailsOfCoefficients", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DCT_LABEL, alias: "DCTLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_BLOCK_DESCRIPTION, alias: "DataBlockDescription", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DATA_BLOCK, alias: "DataBlock", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NORMALIZATION_FACTOR_FORMAT, alias: "NormalizationFactorFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ZONAL_MAP_NUMBER_FORMAT, alias: "ZonalMapNumberFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ZONAL_MAP_LOCATION, alias: "ZonalMapLocation", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ZONAL_MAP_FORMAT, alias: "ZonalMapFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADAPTIVE_MAP_FORMAT, alias: "AdaptiveMapFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CODE_NUMBER_FORMAT, alias: "CodeNumberFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_SPACING_CALIBRATION_TYPE, alias: "PixelSpacingCalibrationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_SPACING_CALIBRATION_DESCRIPTION, alias: "PixelSpacingCalibrationDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_INTENSITY_RELATIONSHIP, alias: "PixelIntensityRelationship", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_INTENSITY_RELATIONSHIP_SIGN, alias: "PixelIntensityRelationshipSign", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WINDOW_CENTER, alias: "WindowCenter", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESCALE_TYPE, alias: "RescaleType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WINDOW_CENTER_WIDTH_EXPLANATION, alias: "WindowCenterWidthExplanation", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: VOILUT_FUNCTION, alias: "VOILUTFunction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAY_SCALE, alias: "GrayScale", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_VIEWING_MODE, alias: "RecommendedViewingMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAY_LOOKUP_TABLE_DESCRIPTOR, alias: "GrayLookupTableDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "RedPaletteColorLookupTableDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "GreenPaletteColorLookupTableDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "BluePaletteColorLookupTableDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "AlphaPaletteColorLookupTableDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "LargeRedPaletteColorLookupTableDescriptor", vr: VR::US, vm: (4, 4) },
    DataDictionaryEntryRef { tag: LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "LargeGreenPaletteColorLookupTableDescriptor", vr: VR::US, vm: (4, 4) },
    DataDictionaryEntryRef { tag: LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR, alias: "LargeBluePaletteColorLookupTableDescriptor", vr: VR::US, vm: (4, 4) },
    DataDictionaryEntryRef { tag: PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "PaletteColorLookupTableUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAY_LOOKUP_TABLE_DATA, alias: "GrayLookupTableData", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "RedPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "GreenPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "BluePaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "AlphaPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGE_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "LargeRedPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGE_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "LargeGreenPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGE_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "LargeBluePaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGE_PALETTE_COLOR_LOOKUP_TABLE_UID, alias: "LargePaletteColorLookupTableUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedRedPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedGreenPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedBluePaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_ALPHA_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedAlphaPaletteColorLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STORED_VALUE_COLOR_RANGE_SEQUENCE, alias: "StoredValueColorRangeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MINIMUM_STORED_VALUE_MAPPED, alias: "MinimumStoredValueMapped", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_STORED_VALUE_MAPPED, alias: "MaximumStoredValueMapped", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BREAST_IMPLANT_PRESENT, alias: "BreastImplantPresent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTIAL_VIEW, alias: "PartialView", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTIAL_VIEW_DESCRIPTION, alias: "PartialViewDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTIAL_VIEW_CODE_SEQUENCE, alias: "PartialViewCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPATIAL_LOCATIONS_PRESERVED, alias: "SpatialLocationsPreserved", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_FRAME_ASSIGNMENT_SEQUENCE, alias: "DataFrameAssignmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_PATH_ASSIGNMENT, alias: "DataPathAssignment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BITS_MAPPED_TO_COLOR_LOOKUP_TABLE, alias: "BitsMappedToColorLookupTable", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_LUT1_SEQUENCE, alias: "BlendingLUT1Sequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_LUT1_TRANSFER_FUNCTION, alias: "BlendingLUT1TransferFunction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_WEIGHT_CONSTANT, alias: "BlendingWeightConstant", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_LOOKUP_TABLE_DESCRIPTOR, alias: "BlendingLookupTableDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: BLENDING_LOOKUP_TABLE_DATA, alias: "BlendingLookupTableData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENHANCED_PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE, alias: "EnhancedPaletteColorLookupTableSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_LUT2_SEQUENCE, alias: "BlendingLUT2Sequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_LUT2_TRANSFER_FUNCTION, alias: "BlendingLUT2TransferFunction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_PATH_ID, alias: "DataPathID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RGBLUT_TRANSFER_FUNCTION, alias: "RGBLUTTransferFunction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALPHA_LUT_TRANSFER_FUNCTION, alias: "AlphaLUTTransferFunction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ICC_PROFILE, alias: "ICCProfile", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLOR_SPACE, alias: "ColorSpace", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOSSY_IMAGE_COMPRESSION, alias: "LossyImageCompression", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOSSY_IMAGE_COMPRESSION_RATIO, alias: "LossyImageCompressionRatio", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: LOSSY_IMAGE_COMPRESSION_METHOD, alias: "LossyImageCompressionMethod", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MODALITY_LUT_SEQUENCE, alias: "ModalityLUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VARIABLE_MODALITY_LUT_SEQUENCE, alias: "VariableModalityLUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUT_DESCRIPTOR, alias: "LUTDescriptor", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: LUT_EXPLANATION, alias: "LUTExplanation", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODALITY_LUT_TYPE, alias: "ModalityLUTType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUT_DATA, alias: "LUTData", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: VOILUT_SEQUENCE, alias: "VOILUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOFTCOPY_VOILUT_SEQUENCE, alias: "SoftcopyVOILUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_PRESENTATION_COMMENTS, alias: "ImagePresentationComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BI_PLANE_ACQUISITION_SEQUENCE, alias: "BiPlaneAcquisitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPRESENTATIVE_FRAME_NUMBER, alias: "RepresentativeFrameNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_NUMBERS_OF_INTEREST, alias: "FrameNumbersOfInterest", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_OF_INTEREST_DESCRIPTION, alias: "FrameOfInterestDescription", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_OF_INTEREST_TYPE, alias: "FrameOfInterestType", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MASK_POINTERS, alias: "MaskPointers", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: R_WAVE_POINTER, alias: "RWavePointer", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MASK_SUBTRACTION_SEQUENCE, alias: "MaskSubtractionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MASK_OPERATION, alias: "MaskOperation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICABLE_FRAME_RANGE, alias: "ApplicableFrameRange", vr: VR::US, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: MASK_FRAME_NUMBERS, alias: "MaskFrameNumbers", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CONTRAST_FRAME_AVERAGING, alias: "ContrastFrameAveraging", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MASK_SUB_PIXEL_SHIFT, alias: "MaskSubPixelShift", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TID_OFFSET, alias: "TIDOffset", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MASK_OPERATION_EXPLANATION, alias: "MaskOperationExplanation", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EQUIPMENT_ADMINISTRATOR_SEQUENCE, alias: "EquipmentAdministratorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_DISPLAY_SUBSYSTEMS, alias: "NumberOfDisplaySubsystems", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURRENT_CONFIGURATION_ID, alias: "CurrentConfigurationID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SUBSYSTEM_ID, alias: "DisplaySubsystemID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SUBSYSTEM_NAME, alias: "DisplaySubsystemName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SUBSYSTEM_DESCRIPTION, alias: "DisplaySubsystemDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYSTEM_STATUS, alias: "SystemStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYSTEM_STATUS_COMMENT, alias: "SystemStatusComment", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_LUMINANCE_CHARACTERISTICS_SEQUENCE, alias: "TargetLuminanceCharacteristicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUMINANCE_CHARACTERISTICS_ID, alias: "LuminanceCharacteristicsID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SUBSYSTEM_CONFIGURATION_SEQUENCE, alias: "DisplaySubsystemConfigurationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIGURATION_ID, alias: "ConfigurationID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIGURATION_NAME, alias: "ConfigurationName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIGURATION_DESCRIPTION, alias: "ConfigurationDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TARGET_LUMINANCE_CHARACTERISTICS_ID, alias: "ReferencedTargetLuminanceCharacteristicsID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QA_RESULTS_SEQUENCE, alias: "QAResultsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SUBSYSTEM_QA_RESULTS_SEQUENCE, alias: "DisplaySubsystemQAResultsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIGURATION_QA_RESULTS_SEQUENCE, alias: "ConfigurationQAResultsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_EQUIPMENT_SEQUENCE, alias: "MeasurementEquipmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_FUNCTIONS, alias: "MeasurementFunctions", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MEASUREMENT_EQUIPMENT_TYPE, alias: "MeasurementEquipmentType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_EVALUATION_RESULT_SEQUENCE, alias: "VisualEvaluationResultSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_CALIBRATION_RESULT_SEQUENCE, alias: "DisplayCalibrationResultSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DDL_VALUE, alias: "DDLValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CI_EXY_WHITE_POINT, alias: "CIExyWhitePoint", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DISPLAY_FUNCTION_TYPE, alias: "DisplayFunctionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GAMMA_VALUE, alias: "GammaValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_LUMINANCE_POINTS, alias: "NumberOfLuminancePoints", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUMINANCE_RESPONSE_SEQUENCE, alias: "LuminanceResponseSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_MINIMUM_LUMINANCE, alias: "TargetMinimumLuminance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_MAXIMUM_LUMINANCE, alias: "TargetMaximumLuminance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUMINANCE_VALUE, alias: "LuminanceValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUMINANCE_RESPONSE_DESCRIPTION, alias: "LuminanceResponseDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WHITE_POINT_FLAG, alias: "WhitePointFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_DEVICE_TYPE_CODE_SEQUENCE, alias: "DisplayDeviceTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SUBSYSTEM_SEQUENCE, alias: "DisplaySubsystemSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUMINANCE_RESULT_SEQUENCE, alias: "LuminanceResultSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AMBIENT_LIGHT_VALUE_SOURCE, alias: "AmbientLightValueSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_CHARACTERISTICS, alias: "MeasuredCharacteristics", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: LUMINANCE_UNIFORMITY_RESULT_SEQUENCE, alias: "LuminanceUniformityResultSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_EVALUATION_TEST_SEQUENCE, alias: "VisualEvaluationTestSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEST_RESULT, alias: "TestResult", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEST_RESULT_COMMENT, alias: "TestResultComment", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEST_IMAGE_VALIDATION, alias: "TestImageValidation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEST_PATTERN_CODE_SEQUENCE, alias: "TestPatternCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_PATTERN_CODE_SEQUENCE, alias: "MeasurementPatternCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISUAL_EVALUATION_METHOD_CODE_SEQUENCE, alias: "VisualEvaluationMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_DATA_PROVIDER_URL, alias: "PixelDataProviderURL", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_POINT_ROWS, alias: "DataPointRows", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_POINT_COLUMNS, alias: "DataPointColumns", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SIGNAL_DOMAIN_COLUMNS, alias: "SignalDomainColumns", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LARGEST_MONOCHROME_PIXEL_VALUE, alias: "LargestMonochromePixelValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_REPRESENTATION, alias: "DataRepresentation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_MEASURES_SEQUENCE, alias: "PixelMeasuresSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_VOILUT_SEQUENCE, alias: "FrameVOILUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_VALUE_TRANSFORMATION_SEQUENCE, alias: "PixelValueTransformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SIGNAL_DOMAIN_ROWS, alias: "SignalDomainRows", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_FILTER_PERCENTAGE, alias: "DisplayFilterPercentage", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_PIXEL_SHIFT_SEQUENCE, alias: "FramePixelShiftSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBTRACTION_ITEM_ID, alias: "SubtractionItemID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_INTENSITY_RELATIONSHIP_LUT_SEQUENCE, alias: "PixelIntensityRelationshipLUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_PIXEL_DATA_PROPERTIES_SEQUENCE, alias: "FramePixelDataPropertiesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GEOMETRICAL_PROPERTIES, alias: "GeometricalProperties", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GEOMETRIC_MAXIMUM_DISTORTION, alias: "GeometricMaximumDistortion", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_PROCESSING_APPLIED, alias: "ImageProcessingApplied", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MASK_SELECTION_MODE, alias: "MaskSelectionMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUT_FUNCTION, alias: "LUTFunction", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MASK_VISIBILITY_PERCENTAGE, alias: "MaskVisibilityPercentage", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_SHIFT_SEQUENCE, alias: "PixelShiftSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGION_PIXEL_SHIFT_SEQUENCE, alias: "RegionPixelShiftSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICES_OF_THE_REGION, alias: "VerticesOfTheRegion", vr: VR::SS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: MULTI_FRAME_PRESENTATION_SEQUENCE, alias: "MultiFramePresentationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_SHIFT_FRAME_RANGE, alias: "PixelShiftFrameRange", vr: VR::US, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: LUT_FRAME_RANGE, alias: "LUTFrameRange", vr: VR::US, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: IMAGE_TO_EQUIPMENT_MAPPING_MATRIX, alias: "ImageToEquipmentMappingMatrix", vr: VR::DS, vm: (16, 16) },
    DataDictionaryEntryRef { tag: EQUIPMENT_COORDINATE_SYSTEM_IDENTIFICATION, alias: "EquipmentCoordinateSystemIdentification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_STATUS_ID, alias: "StudyStatusID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_PRIORITY_ID, alias: "StudyPriorityID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_ID_ISSUER, alias: "StudyIDIssuer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_VERIFIED_DATE, alias: "StudyVerifiedDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_VERIFIED_TIME, alias: "StudyVerifiedTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_READ_DATE, alias: "StudyReadDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_READ_TIME, alias: "StudyReadTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STUDY_START_DATE, alias: "ScheduledStudyStartDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STUDY_START_TIME, alias: "ScheduledStudyStartTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STUDY_STOP_DATE, alias: "ScheduledStudyStopDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STUDY_STOP_TIME, alias: "ScheduledStudyStopTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STUDY_LOCATION, alias: "ScheduledStudyLocation", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STUDY_LOCATION_AE_TITLE, alias: "ScheduledStudyLocationAETitle", vr: VR::AE, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REASON_FOR_STUDY, alias: "ReasonForStudy", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "RequestingPhysicianIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTING_PHYSICIAN, alias: "RequestingPhysician", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTING_SERVICE, alias: "RequestingService", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTING_SERVICE_CODE_SEQUENCE, alias: "RequestingServiceCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_ARRIVAL_DATE, alias: "StudyArrivalDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_ARRIVAL_TIME, alias: "StudyArrivalTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_COMPLETION_DATE, alias: "StudyCompletionDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_COMPLETION_TIME, alias: "StudyCompletionTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_COMPONENT_STATUS_ID, alias: "StudyComponentStatusID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_DESCRIPTION, alias: "RequestedProcedureDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_CODE_SEQUENCE, alias: "RequestedProcedureCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_LATERALITY_CODE_SEQUENCE, alias: "RequestedLateralityCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_VISIT, alias: "ReasonForVisit", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_VISIT_CODE_SEQUENCE, alias: "ReasonForVisitCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_CONTRAST_AGENT, alias: "RequestedContrastAgent", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STUDY_COMMENTS, alias: "StudyComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOW_IDENTIFIER_SEQUENCE, alias: "FlowIdentifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOW_IDENTIFIER, alias: "FlowIdentifier", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOW_TRANSFER_SYNTAX_UID, alias: "FlowTransferSyntaxUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOW_RTP_SAMPLING_RATE, alias: "FlowRTPSamplingRate", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_IDENTIFIER, alias: "SourceIdentifier", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_ORIGIN_TIMESTAMP, alias: "FrameOriginTimestamp", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INCLUDES_IMAGING_SUBJECT, alias: "IncludesImagingSubject", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_USEFULNESS_GROUP_SEQUENCE, alias: "FrameUsefulnessGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_TIME_BULK_DATA_FLOW_SEQUENCE, alias: "RealTimeBulkDataFlowSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CAMERA_POSITION_GROUP_SEQUENCE, alias: "CameraPositionGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INCLUDES_INFORMATION, alias: "IncludesInformation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_FRAME_GROUP_SEQUENCE, alias: "TimeOfFrameGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PATIENT_ALIAS_SEQUENCE, alias: "ReferencedPatientAliasSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISIT_STATUS_ID, alias: "VisitStatusID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADMISSION_ID, alias: "AdmissionID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_ADMISSION_ID, alias: "IssuerOfAdmissionID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_ADMISSION_ID_SEQUENCE, alias: "IssuerOfAdmissionIDSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_OF_ADMISSIONS, alias: "RouteOfAdmissions", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_ADMISSION_DATE, alias: "ScheduledAdmissionDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_ADMISSION_TIME, alias: "ScheduledAdmissionTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_DISCHARGE_DATE, alias: "ScheduledDischargeDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_DISCHARGE_TIME, alias: "ScheduledDischargeTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PATIENT_INSTITUTION_RESIDENCE, alias: "ScheduledPatientInstitutionResidence", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADMITTING_DATE, alias: "AdmittingDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADMITTING_TIME, alias: "AdmittingTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISCHARGE_DATE, alias: "DischargeDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISCHARGE_TIME, alias: "DischargeTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISCHARGE_DIAGNOSIS_DESCRIPTION, alias: "DischargeDiagnosisDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISCHARGE_DIAGNOSIS_CODE_SEQUENCE, alias: "DischargeDiagnosisCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIAL_NEEDS, alias: "SpecialNeeds", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERVICE_EPISODE_ID, alias: "ServiceEpisodeID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_SERVICE_EPISODE_ID, alias: "IssuerOfServiceEpisodeID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERVICE_EPISODE_DESCRIPTION, alias: "ServiceEpisodeDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_SERVICE_EPISODE_ID_SEQUENCE, alias: "IssuerOfServiceEpisodeIDSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERTINENT_DOCUMENTS_SEQUENCE, alias: "PertinentDocumentsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERTINENT_RESOURCES_SEQUENCE, alias: "PertinentResourcesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESOURCE_DESCRIPTION, alias: "ResourceDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURRENT_PATIENT_LOCATION, alias: "CurrentPatientLocation", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_INSTITUTION_RESIDENCE, alias: "PatientInstitutionResidence", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_STATE, alias: "PatientState", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_CLINICAL_TRIAL_PARTICIPATION_SEQUENCE, alias: "PatientClinicalTrialParticipationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VISIT_COMMENTS, alias: "VisitComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_ORIGINALITY, alias: "WaveformOriginality", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_WAVEFORM_CHANNELS, alias: "NumberOfWaveformChannels", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_WAVEFORM_SAMPLES, alias: "NumberOfWaveformSamples", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAMPLING_FREQUENCY, alias: "SamplingFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLEX_GROUP_LABEL, alias: "MultiplexGroupLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DEFINITION_SEQUENCE, alias: "ChannelDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_CHANNEL_NUMBER, alias: "WaveformChannelNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_LABEL, alias: "ChannelLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_STATUS, alias: "ChannelStatus", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CHANNEL_SOURCE_SEQUENCE, alias: "ChannelSourceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SOURCE_MODIFIERS_SEQUENCE, alias: "ChannelSourceModifiersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_WAVEFORM_SEQUENCE, alias: "SourceWaveformSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DERIVATION_DESCRIPTION, alias: "ChannelDerivationDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SENSITIVITY, alias: "ChannelSensitivity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SENSITIVITY_UNITS_SEQUENCE, alias: "ChannelSensitivityUnitsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SENSITIVITY_CORRECTION_FACTOR, alias: "ChannelSensitivityCorrectionFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_BASELINE, alias: "ChannelBaseline", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_TIME_SKEW, alias: "ChannelTimeSkew", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SAMPLE_SKEW, alias: "ChannelSampleSkew", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_OFFSET, alias: "ChannelOffset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_BITS_STORED, alias: "WaveformBitsStored", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_LOW_FREQUENCY, alias: "FilterLowFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_HIGH_FREQUENCY, alias: "FilterHighFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOTCH_FILTER_FREQUENCY, alias: "NotchFilterFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOTCH_FILTER_BANDWIDTH, alias: "NotchFilterBandwidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_DATA_DISPLAY_SCALE, alias: "WaveformDataDisplayScale", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_DISPLAY_BACKGROUND_CIE_LAB_VALUE, alias: "WaveformDisplayBackgroundCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: WAVEFORM_PRESENTATION_GROUP_SEQUENCE, alias: "WaveformPresentationGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_GROUP_NUMBER, alias: "PresentationGroupNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DISPLAY_SEQUENCE, alias: "ChannelDisplaySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_RECOMMENDED_DISPLAY_CIE_LAB_VALUE, alias: "ChannelRecommendedDisplayCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: CHANNEL_POSITION, alias: "ChannelPosition", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SHADING_FLAG, alias: "DisplayShadingFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTIONAL_CHANNEL_DISPLAY_SCALE, alias: "FractionalChannelDisplayScale", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ABSOLUTE_CHANNEL_DISPLAY_SCALE, alias: "AbsoluteChannelDisplayScale", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLEXED_AUDIO_CHANNELS_DESCRIPTION_CODE_SEQUENCE, alias: "MultiplexedAudioChannelsDescriptionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_IDENTIFICATION_CODE, alias: "ChannelIdentificationCode", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_MODE, alias: "ChannelMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLEX_GROUP_UID, alias: "MultiplexGroupUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POWERLINE_FREQUENCY, alias: "PowerlineFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_IMPEDANCE_SEQUENCE, alias: "ChannelImpedanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPEDANCE_VALUE, alias: "ImpedanceValue", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPEDANCE_MEASUREMENT_DATE_TIME, alias: "ImpedanceMeasurementDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPEDANCE_MEASUREMENT_FREQUENCY, alias: "ImpedanceMeasurementFrequency", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPEDANCE_MEASUREMENT_CURRENT_TYPE, alias: "ImpedanceMeasurementCurrentType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STATION_AE_TITLE, alias: "ScheduledStationAETitle", vr: VR::AE, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_START_DATE, alias: "ScheduledProcedureStepStartDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_START_TIME, alias: "ScheduledProcedureStepStartTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_END_DATE, alias: "ScheduledProcedureStepEndDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_END_TIME, alias: "ScheduledProcedureStepEndTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PERFORMING_PHYSICIAN_NAME, alias: "ScheduledPerformingPhysicianName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_DESCRIPTION, alias: "ScheduledProcedureStepDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROTOCOL_CODE_SEQUENCE, alias: "ScheduledProtocolCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_ID, alias: "ScheduledProcedureStepID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STAGE_CODE_SEQUENCE, alias: "StageCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PERFORMING_PHYSICIAN_IDENTIFICATION_SEQUENCE, alias: "ScheduledPerformingPhysicianIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STATION_NAME, alias: "ScheduledStationName", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_LOCATION, alias: "ScheduledProcedureStepLocation", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRE_MEDICATION, alias: "PreMedication", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_STATUS, alias: "ScheduledProcedureStepStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORDER_PLACER_IDENTIFIER_SEQUENCE, alias: "OrderPlacerIdentifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORDER_FILLER_IDENTIFIER_SEQUENCE, alias: "OrderFillerIdentifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOCAL_NAMESPACE_ENTITY_ID, alias: "LocalNamespaceEntityID", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNIVERSAL_ENTITY_ID, alias: "UniversalEntityID", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNIVERSAL_ENTITY_ID_TYPE, alias: "UniversalEntityIDType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IDENTIFIER_TYPE_CODE, alias: "IdentifierTypeCode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSIGNING_FACILITY_SEQUENCE, alias: "AssigningFacilitySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSIGNING_JURISDICTION_CODE_SEQUENCE, alias: "AssigningJurisdictionCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSIGNING_AGENCY_OR_DEPARTMENT_CODE_SEQUENCE, alias: "AssigningAgencyOrDepartmentCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_SEQUENCE, alias: "ScheduledProcedureStepSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_NON_IMAGE_COMPOSITE_SOP_INSTANCE_SEQUENCE, alias: "ReferencedNonImageCompositeSOPInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_STATION_AE_TITLE, alias: "PerformedStationAETitle", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_STATION_NAME, alias: "PerformedStationName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_LOCATION, alias: "PerformedLocation", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_START_DATE, alias: "PerformedProcedureStepStartDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_START_TIME, alias: "PerformedProcedureStepStartTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_END_DATE, alias: "PerformedProcedureStepEndDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_END_TIME, alias: "PerformedProcedureStepEndTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_STATUS, alias: "PerformedProcedureStepStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_ID, alias: "PerformedProcedureStepID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_DESCRIPTION, alias: "PerformedProcedureStepDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_TYPE_DESCRIPTION, alias: "PerformedProcedureTypeDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROTOCOL_CODE_SEQUENCE, alias: "PerformedProtocolCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROTOCOL_TYPE, alias: "PerformedProtocolType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STEP_ATTRIBUTES_SEQUENCE, alias: "ScheduledStepAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUEST_ATTRIBUTES_SEQUENCE, alias: "RequestAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP, alias: "CommentsOnThePerformedProcedureStep", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE, alias: "PerformedProcedureStepDiscontinuationReasonCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUANTITY_SEQUENCE, alias: "QuantitySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUANTITY, alias: "Quantity", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURING_UNITS_SEQUENCE, alias: "MeasuringUnitsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BILLING_ITEM_SEQUENCE, alias: "BillingItemSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_TIME_OF_FLUOROSCOPY, alias: "TotalTimeOfFluoroscopy", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_NUMBER_OF_EXPOSURES, alias: "TotalNumberOfExposures", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENTRANCE_DOSE, alias: "EntranceDose", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSED_AREA, alias: "ExposedArea", vr: VR::US, vm: (1, 2) },
    DataDictionaryEntryRef { tag: DISTANCE_SOURCE_TO_ENTRANCE, alias: "DistanceSourceToEntrance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_SOURCE_TO_SUPPORT, alias: "DistanceSourceToSupport", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_DOSE_SEQUENCE, alias: "ExposureDoseSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMENTS_ON_RADIATION_DOSE, alias: "CommentsOnRadiationDose", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_OUTPUT, alias: "XRayOutput", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HALF_VALUE_LAYER, alias: "HalfValueLayer", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORGAN_DOSE, alias: "OrganDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORGAN_EXPOSED, alias: "OrganExposed", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BILLING_PROCEDURES_SEQUENCE, alias: "BillingProceduresSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILM_CONSUMPTION_SEQUENCE, alias: "FilmConsumptionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BILLING_SUPPLIES_AND_DEVICES_SEQUENCE, alias: "BillingSuppliesAndDevicesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedProcedureStepSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_SERIES_SEQUENCE, alias: "PerformedSeriesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMMENTS_ON_THE_SCHEDULED_PROCEDURE_STEP, alias: "CommentsOnTheScheduledProcedureStep", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROTOCOL_CONTEXT_SEQUENCE, alias: "ProtocolContextSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_ITEM_MODIFIER_SEQUENCE, alias: "ContentItemModifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_SPECIMEN_SEQUENCE, alias: "ScheduledSpecimenSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_ACCESSION_NUMBER, alias: "SpecimenAccessionNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTAINER_IDENTIFIER, alias: "ContainerIdentifier", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_THE_CONTAINER_IDENTIFIER_SEQUENCE, alias: "IssuerOfTheContainerIdentifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALTERNATE_CONTAINER_IDENTIFIER_SEQUENCE, alias: "AlternateContainerIdentifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTAINER_TYPE_CODE_SEQUENCE, alias: "ContainerTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTAINER_DESCRIPTION, alias: "ContainerDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTAINER_COMPONENT_SEQUENCE, alias: "ContainerComponentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_SEQUENCE, alias: "SpecimenSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_IDENTIFIER, alias: "SpecimenIdentifier", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_DESCRIPTION_SEQUENCE_TRIAL, alias: "SpecimenDescriptionSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_DESCRIPTION_TRIAL, alias: "SpecimenDescriptionTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_UID, alias: "SpecimenUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_CONTEXT_SEQUENCE, alias: "AcquisitionContextSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACQUISITION_CONTEXT_DESCRIPTION, alias: "AcquisitionContextDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_DESCRIPTION_SEQUENCE, alias: "SpecimenDescriptionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUER_OF_THE_SPECIMEN_IDENTIFIER_SEQUENCE, alias: "IssuerOfTheSpecimenIdentifierSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_TYPE_CODE_SEQUENCE, alias: "SpecimenTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_SHORT_DESCRIPTION, alias: "SpecimenShortDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_DETAILED_DESCRIPTION, alias: "SpecimenDetailedDescription", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_PREPARATION_SEQUENCE, alias: "SpecimenPreparationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_PREPARATION_STEP_CONTENT_ITEM_SEQUENCE, alias: "SpecimenPreparationStepContentItemSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_LOCALIZATION_CONTENT_ITEM_SEQUENCE, alias: "SpecimenLocalizationContentItemSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLIDE_IDENTIFIER, alias: "SlideIdentifier", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WHOLE_SLIDE_MICROSCOPY_IMAGE_FRAME_TYPE_SEQUENCE, alias: "WholeSlideMicroscopyImageFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_CENTER_POINT_COORDINATES_SEQUENCE, alias: "ImageCenterPointCoordinatesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_OFFSET_IN_SLIDE_COORDINATE_SYSTEM, alias: "XOffsetInSlideCoordinateSystem", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: Y_OFFSET_IN_SLIDE_COORDINATE_SYSTEM, alias: "YOffsetInSlideCoordinateSystem", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: Z_OFFSET_IN_SLIDE_COORDINATE_SYSTEM, alias: "ZOffsetInSlideCoordinateSystem", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_SPACING_SEQUENCE, alias: "PixelSpacingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATE_SYSTEM_AXIS_CODE_SEQUENCE, alias: "CoordinateSystemAxisCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_UNITS_CODE_SEQUENCE, alias: "MeasurementUnitsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VITAL_STAIN_CODE_SEQUENCE_TRIAL, alias: "VitalStainCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_ID, alias: "RequestedProcedureID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_THE_REQUESTED_PROCEDURE, alias: "ReasonForTheRequestedProcedure", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_PRIORITY, alias: "RequestedProcedurePriority", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_TRANSPORT_ARRANGEMENTS, alias: "PatientTransportArrangements", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_LOCATION, alias: "RequestedProcedureLocation", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLACER_ORDER_NUMBER_PROCEDURE, alias: "PlacerOrderNumberProcedure", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILLER_ORDER_NUMBER_PROCEDURE, alias: "FillerOrderNumberProcedure", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIDENTIALITY_CODE, alias: "ConfidentialityCode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPORTING_PRIORITY, alias: "ReportingPriority", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE, alias: "ReasonForRequestedProcedureCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NAMES_OF_INTENDED_RECIPIENTS_OF_RESULTS, alias: "NamesOfIntendedRecipientsOfResults", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: INTENDED_RECIPIENTS_OF_RESULTS_IDENTIFICATION_SEQUENCE, alias: "IntendedRecipientsOfResultsIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_PERFORMED_PROCEDURE_CODE_SEQUENCE, alias: "ReasonForPerformedProcedureCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_DESCRIPTION_TRIAL, alias: "RequestedProcedureDescriptionTrial", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERSON_IDENTIFICATION_CODE_SEQUENCE, alias: "PersonIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERSON_ADDRESS, alias: "PersonAddress", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERSON_TELEPHONE_NUMBERS, alias: "PersonTelephoneNumbers", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PERSON_TELECOM_INFORMATION, alias: "PersonTelecomInformation", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_PROCEDURE_COMMENTS, alias: "RequestedProcedureComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_THE_IMAGING_SERVICE_REQUEST, alias: "ReasonForTheImagingServiceRequest", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUE_DATE_OF_IMAGING_SERVICE_REQUEST, alias: "IssueDateOfImagingServiceRequest", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISSUE_TIME_OF_IMAGING_SERVICE_REQUEST, alias: "IssueTimeOfImagingServiceRequest", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED, alias: "PlacerOrderNumberImagingServiceRequestRetired", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST_RETIRED, alias: "FillerOrderNumberImagingServiceRequestRetired", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORDER_ENTERED_BY, alias: "OrderEnteredBy", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORDER_ENTERER_LOCATION, alias: "OrderEntererLocation", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORDER_CALLBACK_PHONE_NUMBER, alias: "OrderCallbackPhoneNumber", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORDER_CALLBACK_TELECOM_INFORMATION, alias: "OrderCallbackTelecomInformation", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLACER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST, alias: "PlacerOrderNumberImagingServiceRequest", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILLER_ORDER_NUMBER_IMAGING_SERVICE_REQUEST, alias: "FillerOrderNumberImagingServiceRequest", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGING_SERVICE_REQUEST_COMMENTS, alias: "ImagingServiceRequestComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIDENTIALITY_CONSTRAINT_ON_PATIENT_DATA_DESCRIPTION, alias: "ConfidentialityConstraintOnPatientDataDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_STATUS, alias: "GeneralPurposeScheduledProcedureStepStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEP_STATUS, alias: "GeneralPurposePerformedProcedureStepStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_PRIORITY, alias: "GeneralPurposeScheduledProcedureStepPriority", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCESSING_APPLICATIONS_CODE_SEQUENCE, alias: "ScheduledProcessingApplicationsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_START_DATE_TIME, alias: "ScheduledProcedureStepStartDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTIPLE_COPIES_FLAG, alias: "MultipleCopiesFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCESSING_APPLICATIONS_CODE_SEQUENCE, alias: "PerformedProcessingApplicationsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_EXPIRATION_DATE_TIME, alias: "ScheduledProcedureStepExpirationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HUMAN_PERFORMER_CODE_SEQUENCE, alias: "HumanPerformerCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_MODIFICATION_DATE_TIME, alias: "ScheduledProcedureStepModificationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPECTED_COMPLETION_DATE_TIME, alias: "ExpectedCompletionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESULTING_GENERAL_PURPOSE_PERFORMED_PROCEDURE_STEPS_SEQUENCE, alias: "ResultingGeneralPurposePerformedProcedureStepsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_SEQUENCE, alias: "ReferencedGeneralPurposeScheduledProcedureStepSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_WORKITEM_CODE_SEQUENCE, alias: "ScheduledWorkitemCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_WORKITEM_CODE_SEQUENCE, alias: "PerformedWorkitemCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INPUT_AVAILABILITY_FLAG, alias: "InputAvailabilityFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INPUT_INFORMATION_SEQUENCE, alias: "InputInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELEVANT_INFORMATION_SEQUENCE, alias: "RelevantInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_GENERAL_PURPOSE_SCHEDULED_PROCEDURE_STEP_TRANSACTION_UID, alias: "ReferencedGeneralPurposeScheduledProcedureStepTransactionUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STATION_NAME_CODE_SEQUENCE, alias: "ScheduledStationNameCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STATION_CLASS_CODE_SEQUENCE, alias: "ScheduledStationClassCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE, alias: "ScheduledStationGeographicLocationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_STATION_NAME_CODE_SEQUENCE, alias: "PerformedStationNameCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_STATION_CLASS_CODE_SEQUENCE, alias: "PerformedStationClassCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_STATION_GEOGRAPHIC_LOCATION_CODE_SEQUENCE, alias: "PerformedStationGeographicLocationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_SUBSEQUENT_WORKITEM_CODE_SEQUENCE, alias: "RequestedSubsequentWorkitemCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NON_DICOM_OUTPUT_CODE_SEQUENCE, alias: "NonDICOMOutputCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTPUT_INFORMATION_SEQUENCE, alias: "OutputInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_HUMAN_PERFORMERS_SEQUENCE, alias: "ScheduledHumanPerformersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTUAL_HUMAN_PERFORMERS_SEQUENCE, alias: "ActualHumanPerformersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HUMAN_PERFORMER_ORGANIZATION, alias: "HumanPerformerOrganization", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HUMAN_PERFORMER_NAME, alias: "HumanPerformerName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RAW_DATA_HANDLING, alias: "RawDataHandling", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INPUT_READINESS_STATE, alias: "InputReadinessState", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_START_DATE_TIME, alias: "PerformedProcedureStepStartDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_STEP_END_DATE_TIME, alias: "PerformedProcedureStepEndDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_CANCELLATION_DATE_TIME, alias: "ProcedureStepCancellationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OUTPUT_DESTINATION_SEQUENCE, alias: "OutputDestinationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DICOM_STORAGE_SEQUENCE, alias: "DICOMStorageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STOWRS_STORAGE_SEQUENCE, alias: "STOWRSStorageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STORAGE_URL, alias: "StorageURL", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XDS_STORAGE_SEQUENCE, alias: "XDSStorageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENTRANCE_DOSE_INM_GY, alias: "EntranceDoseInmGy", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENTRANCE_DOSE_DERIVATION, alias: "EntranceDoseDerivation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARAMETRIC_MAP_FRAME_TYPE_SEQUENCE, alias: "ParametricMapFrameTypeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_REAL_WORLD_VALUE_MAPPING_SEQUENCE, alias: "ReferencedImageRealWorldValueMappingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_WORLD_VALUE_MAPPING_SEQUENCE, alias: "RealWorldValueMappingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_VALUE_MAPPING_CODE_SEQUENCE, alias: "PixelValueMappingCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LUT_LABEL, alias: "LUTLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_WORLD_VALUE_LAST_VALUE_MAPPED, alias: "RealWorldValueLastValueMapped", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_WORLD_VALUE_LUT_DATA, alias: "RealWorldValueLUTData", vr: VR::FD, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DOUBLE_FLOAT_REAL_WORLD_VALUE_LAST_VALUE_MAPPED, alias: "DoubleFloatRealWorldValueLastValueMapped", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_FLOAT_REAL_WORLD_VALUE_FIRST_VALUE_MAPPED, alias: "DoubleFloatRealWorldValueFirstValueMapped", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_WORLD_VALUE_FIRST_VALUE_MAPPED, alias: "RealWorldValueFirstValueMapped", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUANTITY_DEFINITION_SEQUENCE, alias: "QuantityDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_WORLD_VALUE_INTERCEPT, alias: "RealWorldValueIntercept", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REAL_WORLD_VALUE_SLOPE, alias: "RealWorldValueSlope", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINDINGS_FLAG_TRIAL, alias: "FindingsFlagTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIONSHIP_TYPE, alias: "RelationshipType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINDINGS_SEQUENCE_TRIAL, alias: "FindingsSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINDINGS_GROUP_UID_TRIAL, alias: "FindingsGroupUIDTrial", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FINDINGS_GROUP_UID_TRIAL, alias: "ReferencedFindingsGroupUIDTrial", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINDINGS_GROUP_RECORDING_DATE_TRIAL, alias: "FindingsGroupRecordingDateTrial", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINDINGS_GROUP_RECORDING_TIME_TRIAL, alias: "FindingsGroupRecordingTimeTrial", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINDINGS_SOURCE_CATEGORY_CODE_SEQUENCE_TRIAL, alias: "FindingsSourceCategoryCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFYING_ORGANIZATION, alias: "VerifyingOrganization", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENTING_ORGANIZATION_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "DocumentingOrganizationIdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFICATION_DATE_TIME, alias: "VerificationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_DATE_TIME, alias: "ObservationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_START_DATE_TIME, alias: "ObservationStartDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VALUE_TYPE, alias: "ValueType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONCEPT_NAME_CODE_SEQUENCE, alias: "ConceptNameCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_PRECISION_DESCRIPTION_TRIAL, alias: "MeasurementPrecisionDescriptionTrial", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTINUITY_OF_CONTENT, alias: "ContinuityOfContent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: URGENCY_OR_PRIORITY_ALERTS_TRIAL, alias: "UrgencyOrPriorityAlertsTrial", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SEQUENCING_INDICATOR_TRIAL, alias: "SequencingIndicatorTrial", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENT_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "DocumentIdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENT_AUTHOR_TRIAL, alias: "DocumentAuthorTrial", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENT_AUTHOR_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "DocumentAuthorIdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "IdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFYING_OBSERVER_SEQUENCE, alias: "VerifyingObserverSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBJECT_BINARY_IDENTIFIER_TRIAL, alias: "ObjectBinaryIdentifierTrial", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFYING_OBSERVER_NAME, alias: "VerifyingObserverName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENTING_OBSERVER_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "DocumentingObserverIdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUTHOR_OBSERVER_SEQUENCE, alias: "AuthorObserverSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTICIPANT_SEQUENCE, alias: "ParticipantSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CUSTODIAL_ORGANIZATION_SEQUENCE, alias: "CustodialOrganizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTICIPATION_TYPE, alias: "ParticipationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTICIPATION_DATE_TIME, alias: "ParticipationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVER_TYPE, alias: "ObserverType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "ProcedureIdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFYING_OBSERVER_IDENTIFICATION_CODE_SEQUENCE, alias: "VerifyingObserverIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBJECT_DIRECTORY_BINARY_IDENTIFIER_TRIAL, alias: "ObjectDirectoryBinaryIdentifierTrial", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EQUIVALENT_CDA_DOCUMENT_SEQUENCE, alias: "EquivalentCDADocumentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_WAVEFORM_CHANNELS, alias: "ReferencedWaveformChannels", vr: VR::US, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: DATE_OF_DOCUMENT_OR_VERBAL_TRANSACTION_TRIAL, alias: "DateOfDocumentOrVerbalTransactionTrial", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_OF_DOCUMENT_CREATION_OR_VERBAL_TRANSACTION_TRIAL, alias: "TimeOfDocumentCreationOrVerbalTransactionTrial", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE_TIME, alias: "DateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATE, alias: "Date", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME, alias: "Time", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERSON_NAME, alias: "PersonName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UID, alias: "UID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPORT_STATUS_ID_TRIAL, alias: "ReportStatusIDTrial", vr: VR::CS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TEMPORAL_RANGE_TYPE, alias: "TemporalRangeType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SAMPLE_POSITIONS, alias: "ReferencedSamplePositions", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_FRAME_NUMBERS, alias: "ReferencedFrameNumbers", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_TIME_OFFSETS, alias: "ReferencedTimeOffsets", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_DATE_TIME, alias: "ReferencedDateTime", vr: VR::DT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TEXT_VALUE, alias: "TextValue", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOATING_POINT_VALUE, alias: "FloatingPointValue", vr: VR::FD, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RATIONAL_NUMERATOR_VALUE, alias: "RationalNumeratorValue", vr: VR::SL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RATIONAL_DENOMINATOR_VALUE, alias: "RationalDenominatorValue", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OBSERVATION_CATEGORY_CODE_SEQUENCE_TRIAL, alias: "ObservationCategoryCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONCEPT_CODE_SEQUENCE, alias: "ConceptCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BIBLIOGRAPHIC_CITATION_TRIAL, alias: "BibliographicCitationTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PURPOSE_OF_REFERENCE_CODE_SEQUENCE, alias: "PurposeOfReferenceCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_UID, alias: "ObservationUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OBSERVATION_UID_TRIAL, alias: "ReferencedObservationUIDTrial", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OBSERVATION_CLASS_TRIAL, alias: "ReferencedObservationClassTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OBJECT_OBSERVATION_CLASS_TRIAL, alias: "ReferencedObjectObservationClassTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANNOTATION_GROUP_NUMBER, alias: "AnnotationGroupNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_DATE_TRIAL, alias: "ObservationDateTrial", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_TIME_TRIAL, alias: "ObservationTimeTrial", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASUREMENT_AUTOMATION_TRIAL, alias: "MeasurementAutomationTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFIER_CODE_SEQUENCE, alias: "ModifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IDENTIFICATION_DESCRIPTION_TRIAL, alias: "IdentificationDescriptionTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COORDINATES_SET_GEOMETRIC_TYPE_TRIAL, alias: "CoordinatesSetGeometricTypeTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_CODE_SEQUENCE_TRIAL, alias: "AlgorithmCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_DESCRIPTION_TRIAL, alias: "AlgorithmDescriptionTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_COORDINATES_SET_TRIAL, alias: "PixelCoordinatesSetTrial", vr: VR::SL, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: MEASURED_VALUE_SEQUENCE, alias: "MeasuredValueSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMERIC_VALUE_QUALIFIER_CODE_SEQUENCE, alias: "NumericValueQualifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURRENT_OBSERVER_TRIAL, alias: "CurrentObserverTrial", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMERIC_VALUE, alias: "NumericValue", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCED_ACCESSION_SEQUENCE_TRIAL, alias: "ReferencedAccessionSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPORT_STATUS_COMMENT_TRIAL, alias: "ReportStatusCommentTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_CONTEXT_SEQUENCE_TRIAL, alias: "ProcedureContextSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERBAL_SOURCE_TRIAL, alias: "VerbalSourceTrial", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDRESS_TRIAL, alias: "AddressTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TELEPHONE_NUMBER_TRIAL, alias: "TelephoneNumberTrial", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERBAL_SOURCE_IDENTIFIER_CODE_SEQUENCE_TRIAL, alias: "VerbalSourceIdentifierCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREDECESSOR_DOCUMENTS_SEQUENCE, alias: "PredecessorDocumentsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_REQUEST_SEQUENCE, alias: "ReferencedRequestSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCEDURE_CODE_SEQUENCE, alias: "PerformedProcedureCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURRENT_REQUESTED_PROCEDURE_EVIDENCE_SEQUENCE, alias: "CurrentRequestedProcedureEvidenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPORT_DETAIL_SEQUENCE_TRIAL, alias: "ReportDetailSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERTINENT_OTHER_EVIDENCE_SEQUENCE, alias: "PertinentOtherEvidenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HL7_STRUCTURED_DOCUMENT_REFERENCE_SEQUENCE, alias: "HL7StructuredDocumentReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_SUBJECT_UID_TRIAL, alias: "ObservationSubjectUIDTrial", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_SUBJECT_CLASS_TRIAL, alias: "ObservationSubjectClassTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_SUBJECT_TYPE_CODE_SEQUENCE_TRIAL, alias: "ObservationSubjectTypeCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPLETION_FLAG, alias: "CompletionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPLETION_FLAG_DESCRIPTION, alias: "CompletionFlagDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFICATION_FLAG, alias: "VerificationFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ARCHIVE_REQUESTED, alias: "ArchiveRequested", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRELIMINARY_FLAG, alias: "PreliminaryFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_TEMPLATE_SEQUENCE, alias: "ContentTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IDENTICAL_DOCUMENTS_SEQUENCE, alias: "IdenticalDocumentsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_SUBJECT_CONTEXT_FLAG_TRIAL, alias: "ObservationSubjectContextFlagTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVER_CONTEXT_FLAG_TRIAL, alias: "ObserverContextFlagTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_CONTEXT_FLAG_TRIAL, alias: "ProcedureContextFlagTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_SEQUENCE, alias: "ContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIONSHIP_SEQUENCE_TRIAL, alias: "RelationshipSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIONSHIP_TYPE_CODE_SEQUENCE_TRIAL, alias: "RelationshipTypeCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LANGUAGE_CODE_SEQUENCE_TRIAL, alias: "LanguageCodeSequenceTrial", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABULATED_VALUES_SEQUENCE, alias: "TabulatedValuesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TABLE_ROWS, alias: "NumberOfTableRows", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TABLE_COLUMNS, alias: "NumberOfTableColumns", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_ROW_NUMBER, alias: "TableRowNumber", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_COLUMN_NUMBER, alias: "TableColumnNumber", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_ROW_DEFINITION_SEQUENCE, alias: "TableRowDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_COLUMN_DEFINITION_SEQUENCE, alias: "TableColumnDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CELL_VALUES_SEQUENCE, alias: "CellValuesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNIFORM_RESOURCE_LOCATOR_TRIAL, alias: "UniformResourceLocatorTrial", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_ANNOTATION_SEQUENCE, alias: "WaveformAnnotationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_IDENTIFIER, alias: "TemplateIdentifier", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_VERSION, alias: "TemplateVersion", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_LOCAL_VERSION, alias: "TemplateLocalVersion", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_EXTENSION_FLAG, alias: "TemplateExtensionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_EXTENSION_ORGANIZATION_UID, alias: "TemplateExtensionOrganizationUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_EXTENSION_CREATOR_UID, alias: "TemplateExtensionCreatorUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CONTENT_ITEM_IDENTIFIER, alias: "ReferencedContentItemIdentifier", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: HL7_INSTANCE_IDENTIFIER, alias: "HL7InstanceIdentifier", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HL7_DOCUMENT_EFFECTIVE_TIME, alias: "HL7DocumentEffectiveTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HL7_DOCUMENT_TYPE_CODE_SEQUENCE, alias: "HL7DocumentTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENT_CLASS_CODE_SEQUENCE, alias: "DocumentClassCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETRIEVE_URI, alias: "RetrieveURI", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RETRIEVE_LOCATION_UID, alias: "RetrieveLocationUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TYPE_OF_INSTANCES, alias: "TypeOfInstances", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DICOM_RETRIEVAL_SEQUENCE, alias: "DICOMRetrievalSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DICOM_MEDIA_RETRIEVAL_SEQUENCE, alias: "DICOMMediaRetrievalSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WADO_RETRIEVAL_SEQUENCE, alias: "WADORetrievalSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: XDS_RETRIEVAL_SEQUENCE, alias: "XDSRetrievalSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WADORS_RETRIEVAL_SEQUENCE, alias: "WADORSRetrievalSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPOSITORY_UNIQUE_ID, alias: "RepositoryUniqueID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HOME_COMMUNITY_ID, alias: "HomeCommunityID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOCUMENT_TITLE, alias: "DocumentTitle", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENCAPSULATED_DOCUMENT, alias: "EncapsulatedDocument", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MIME_TYPE_OF_ENCAPSULATED_DOCUMENT, alias: "MIMETypeOfEncapsulatedDocument", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_INSTANCE_SEQUENCE, alias: "SourceInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LIST_OF_MIME_TYPES, alias: "ListOfMIMETypes", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ENCAPSULATED_DOCUMENT_LENGTH, alias: "EncapsulatedDocumentLength", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRODUCT_PACKAGE_IDENTIFIER, alias: "ProductPackageIdentifier", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBSTANCE_ADMINISTRATION_APPROVAL, alias: "SubstanceAdministrationApproval", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPROVAL_STATUS_FURTHER_DESCRIPTION, alias: "ApprovalStatusFurtherDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPROVAL_STATUS_DATE_TIME, alias: "ApprovalStatusDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRODUCT_TYPE_CODE_SEQUENCE, alias: "ProductTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRODUCT_NAME, alias: "ProductName", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PRODUCT_DESCRIPTION, alias: "ProductDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRODUCT_LOT_IDENTIFIER, alias: "ProductLotIdentifier", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRODUCT_EXPIRATION_DATE_TIME, alias: "ProductExpirationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBSTANCE_ADMINISTRATION_DATE_TIME, alias: "SubstanceAdministrationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBSTANCE_ADMINISTRATION_NOTES, alias: "SubstanceAdministrationNotes", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBSTANCE_ADMINISTRATION_DEVICE_ID, alias: "SubstanceAdministrationDeviceID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRODUCT_PARAMETER_SEQUENCE, alias: "ProductParameterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBSTANCE_ADMINISTRATION_PARAMETER_SEQUENCE, alias: "SubstanceAdministrationParameterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGED_VOLUME_WIDTH, alias: "ImagedVolumeWidth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGED_VOLUME_HEIGHT, alias: "ImagedVolumeHeight", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGED_VOLUME_DEPTH, alias: "ImagedVolumeDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_PIXEL_MATRIX_COLUMNS, alias: "TotalPixelMatrixColumns", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_PIXEL_MATRIX_ROWS, alias: "TotalPixelMatrixRows", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_PIXEL_MATRIX_ORIGIN_SEQUENCE, alias: "TotalPixelMatrixOriginSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_LABEL_IN_IMAGE, alias: "SpecimenLabelInImage", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FOCUS_METHOD, alias: "FocusMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXTENDED_DEPTH_OF_FIELD, alias: "ExtendedDepthOfField", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FOCAL_PLANES, alias: "NumberOfFocalPlanes", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTANCE_BETWEEN_FOCAL_PLANES, alias: "DistanceBetweenFocalPlanes", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_ABSENT_PIXEL_CIE_LAB_VALUE, alias: "RecommendedAbsentPixelCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ILLUMINATOR_TYPE_CODE_SEQUENCE, alias: "IlluminatorTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_ORIENTATION_SLIDE, alias: "ImageOrientationSlide", vr: VR::DS, vm: (6, 6) },
    DataDictionaryEntryRef { tag: OPTICAL_PATH_SEQUENCE, alias: "OpticalPathSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPTICAL_PATH_IDENTIFIER, alias: "OpticalPathIdentifier", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OPTICAL_PATH_DESCRIPTION, alias: "OpticalPathDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ILLUMINATION_COLOR_CODE_SEQUENCE, alias: "IlluminationColorCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIMEN_REFERENCE_SEQUENCE, alias: "SpecimenReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONDENSER_LENS_POWER, alias: "CondenserLensPower", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBJECTIVE_LENS_POWER, alias: "ObjectiveLensPower", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBJECTIVE_LENS_NUMERICAL_APERTURE, alias: "ObjectiveLensNumericalAperture", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFOCAL_MODE, alias: "ConfocalMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TISSUE_LOCATION, alias: "TissueLocation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PALETTE_COLOR_LOOKUP_TABLE_SEQUENCE, alias: "PaletteColorLookupTableSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_NAVIGATION_SEQUENCE, alias: "ReferencedImageNavigationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOP_LEFT_HAND_CORNER_OF_LOCALIZER_AREA, alias: "TopLeftHandCornerOfLocalizerArea", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: BOTTOM_RIGHT_HAND_CORNER_OF_LOCALIZER_AREA, alias: "BottomRightHandCornerOfLocalizerArea", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: OPTICAL_PATH_IDENTIFICATION_SEQUENCE, alias: "OpticalPathIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE_POSITION_SLIDE_SEQUENCE, alias: "PlanePositionSlideSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX, alias: "ColumnPositionInTotalImagePixelMatrix", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX, alias: "RowPositionInTotalImagePixelMatrix", vr: VR::SL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_IMAGE, alias: "CalibrationImage", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_SEQUENCE, alias: "DeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_LENGTH, alias: "DeviceLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_DIAMETER, alias: "DeviceDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_VOLUME, alias: "DeviceVolume", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_DESCRIPTION, alias: "DeviceDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONG_DEVICE_DESCRIPTION, alias: "LongDeviceDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_VECTOR, alias: "EnergyWindowVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ENERGY_WINDOWS, alias: "NumberOfEnergyWindows", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_INFORMATION_SEQUENCE, alias: "EnergyWindowInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_RANGE_SEQUENCE, alias: "EnergyWindowRangeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_LOWER_LIMIT, alias: "EnergyWindowLowerLimit", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_UPPER_LIMIT, alias: "EnergyWindowUpperLimit", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE, alias: "RadiopharmaceuticalInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESIDUAL_SYRINGE_COUNTS, alias: "ResidualSyringeCounts", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_NAME, alias: "EnergyWindowName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_VECTOR, alias: "DetectorVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_DETECTORS, alias: "NumberOfDetectors", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_INFORMATION_SEQUENCE, alias: "DetectorInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHASE_VECTOR, alias: "PhaseVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PHASES, alias: "NumberOfPhases", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHASE_INFORMATION_SEQUENCE, alias: "PhaseInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRAMES_IN_PHASE, alias: "NumberOfFramesInPhase", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHASE_DELAY, alias: "PhaseDelay", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PAUSE_BETWEEN_FRAMES, alias: "PauseBetweenFrames", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHASE_DESCRIPTION, alias: "PhaseDescription", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_VECTOR, alias: "RotationVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ROTATIONS, alias: "NumberOfRotations", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_INFORMATION_SEQUENCE, alias: "RotationInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRAMES_IN_ROTATION, alias: "NumberOfFramesInRotation", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RR_INTERVAL_VECTOR, alias: "RRIntervalVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_RR_INTERVALS, alias: "NumberOfRRIntervals", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GATED_INFORMATION_SEQUENCE, alias: "GatedInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_INFORMATION_SEQUENCE, alias: "DataInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_SLOT_VECTOR, alias: "TimeSlotVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TIME_SLOTS, alias: "NumberOfTimeSlots", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_SLOT_INFORMATION_SEQUENCE, alias: "TimeSlotInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_SLOT_TIME, alias: "TimeSlotTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLICE_VECTOR, alias: "SliceVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SLICES, alias: "NumberOfSlices", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANGULAR_VIEW_VECTOR, alias: "AngularViewVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TIME_SLICE_VECTOR, alias: "TimeSliceVector", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TIME_SLICES, alias: "NumberOfTimeSlices", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_ANGLE, alias: "StartAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TYPE_OF_DETECTOR_MOTION, alias: "TypeOfDetectorMotion", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIGGER_VECTOR, alias: "TriggerVector", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TRIGGERS_IN_PHASE, alias: "NumberOfTriggersInPhase", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_CODE_SEQUENCE, alias: "ViewCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_MODIFIER_CODE_SEQUENCE, alias: "ViewModifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIONUCLIDE_CODE_SEQUENCE, alias: "RadionuclideCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADMINISTRATION_ROUTE_CODE_SEQUENCE, alias: "AdministrationRouteCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIOPHARMACEUTICAL_CODE_SEQUENCE, alias: "RadiopharmaceuticalCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_DATA_SEQUENCE, alias: "CalibrationDataSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENERGY_WINDOW_NUMBER, alias: "EnergyWindowNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_ID, alias: "ImageID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ORIENTATION_CODE_SEQUENCE, alias: "PatientOrientationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ORIENTATION_MODIFIER_CODE_SEQUENCE, alias: "PatientOrientationModifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_GANTRY_RELATIONSHIP_CODE_SEQUENCE, alias: "PatientGantryRelationshipCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SLICE_PROGRESSION_DIRECTION, alias: "SliceProgressionDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_PROGRESSION_DIRECTION, alias: "ScanProgressionDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SERIES_TYPE, alias: "SeriesType", vr: VR::CS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: UNITS, alias: "Units", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUNTS_SOURCE, alias: "CountsSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPROJECTION_METHOD, alias: "ReprojectionMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUV_TYPE, alias: "SUVType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANDOMS_CORRECTION_METHOD, alias: "RandomsCorrectionMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTENUATION_CORRECTION_METHOD, alias: "AttenuationCorrectionMethod", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECAY_CORRECTION, alias: "DecayCorrection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECONSTRUCTION_METHOD, alias: "ReconstructionMethod", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_LINES_OF_RESPONSE_USED, alias: "DetectorLinesOfResponseUsed", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCATTER_CORRECTION_METHOD, alias: "ScatterCorrectionMethod", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AXIAL_ACCEPTANCE, alias: "AxialAcceptance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AXIAL_MASH, alias: "AxialMash", vr: VR::IS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TRANSVERSE_MASH, alias: "TransverseMash", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_ELEMENT_SIZE, alias: "DetectorElementSize", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: COINCIDENCE_WINDOW_WIDTH, alias: "CoincidenceWindowWidth", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_COUNTS_TYPE, alias: "SecondaryCountsType", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: FRAME_REFERENCE_TIME, alias: "FrameReferenceTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_PROMPTS_COUNTS_ACCUMULATED, alias: "PrimaryPromptsCountsAccumulated", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_COUNTS_ACCUMULATED, alias: "SecondaryCountsAccumulated", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SLICE_SENSITIVITY_FACTOR, alias: "SliceSensitivityFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECAY_FACTOR, alias: "DecayFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_CALIBRATION_FACTOR, alias: "DoseCalibrationFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCATTER_FRACTION_FACTOR, alias: "ScatterFractionFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEAD_TIME_FACTOR, alias: "DeadTimeFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_INDEX, alias: "ImageIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COUNTS_INCLUDED, alias: "CountsIncluded", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DEAD_TIME_CORRECTION_FLAG, alias: "DeadTimeCorrectionFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_SEQUENCE, alias: "HistogramSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_NUMBER_OF_BINS, alias: "HistogramNumberOfBins", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_FIRST_BIN_VALUE, alias: "HistogramFirstBinValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_LAST_BIN_VALUE, alias: "HistogramLastBinValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_BIN_WIDTH, alias: "HistogramBinWidth", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_EXPLANATION, alias: "HistogramExplanation", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HISTOGRAM_DATA, alias: "HistogramData", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SEGMENTATION_TYPE, alias: "SegmentationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_SEQUENCE, alias: "SegmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_PROPERTY_CATEGORY_CODE_SEQUENCE, alias: "SegmentedPropertyCategoryCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_NUMBER, alias: "SegmentNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_LABEL, alias: "SegmentLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_DESCRIPTION, alias: "SegmentDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTATION_ALGORITHM_IDENTIFICATION_SEQUENCE, alias: "SegmentationAlgorithmIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_ALGORITHM_TYPE, alias: "SegmentAlgorithmType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_ALGORITHM_NAME, alias: "SegmentAlgorithmName", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SEGMENT_IDENTIFICATION_SEQUENCE, alias: "SegmentIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SEGMENT_NUMBER, alias: "ReferencedSegmentNumber", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RECOMMENDED_DISPLAY_GRAYSCALE_VALUE, alias: "RecommendedDisplayGrayscaleValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_DISPLAY_CIE_LAB_VALUE, alias: "RecommendedDisplayCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MAXIMUM_FRACTIONAL_VALUE, alias: "MaximumFractionalValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_PROPERTY_TYPE_CODE_SEQUENCE, alias: "SegmentedPropertyTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTATION_FRACTIONAL_TYPE, alias: "SegmentationFractionalType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTED_PROPERTY_TYPE_MODIFIER_CODE_SEQUENCE, alias: "SegmentedPropertyTypeModifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: USED_SEGMENTS_SEQUENCE, alias: "UsedSegmentsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENTS_OVERLAP, alias: "SegmentsOverlap", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRACKING_ID, alias: "TrackingID", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRACKING_UID, alias: "TrackingUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEFORMABLE_REGISTRATION_SEQUENCE, alias: "DeformableRegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_FRAME_OF_REFERENCE_UID, alias: "SourceFrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEFORMABLE_REGISTRATION_GRID_SEQUENCE, alias: "DeformableRegistrationGridSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_DIMENSIONS, alias: "GridDimensions", vr: VR::UL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: GRID_RESOLUTION, alias: "GridResolution", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: VECTOR_GRID_DATA, alias: "VectorGridData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRE_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE, alias: "PreDeformationMatrixRegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POST_DEFORMATION_MATRIX_REGISTRATION_SEQUENCE, alias: "PostDeformationMatrixRegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SURFACES, alias: "NumberOfSurfaces", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_SEQUENCE, alias: "SurfaceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_NUMBER, alias: "SurfaceNumber", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_COMMENTS, alias: "SurfaceComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_PROCESSING, alias: "SurfaceProcessing", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_PROCESSING_RATIO, alias: "SurfaceProcessingRatio", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_PROCESSING_DESCRIPTION, alias: "SurfaceProcessingDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_PRESENTATION_OPACITY, alias: "RecommendedPresentationOpacity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_PRESENTATION_TYPE, alias: "RecommendedPresentationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINITE_VOLUME, alias: "FiniteVolume", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANIFOLD, alias: "Manifold", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_POINTS_SEQUENCE, alias: "SurfacePointsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_POINTS_NORMALS_SEQUENCE, alias: "SurfacePointsNormalsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_MESH_PRIMITIVES_SEQUENCE, alias: "SurfaceMeshPrimitivesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SURFACE_POINTS, alias: "NumberOfSurfacePoints", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POINT_COORDINATES_DATA, alias: "PointCoordinatesData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POINT_POSITION_ACCURACY, alias: "PointPositionAccuracy", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MEAN_POINT_DISTANCE, alias: "MeanPointDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_POINT_DISTANCE, alias: "MaximumPointDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POINTS_BOUNDING_BOX_COORDINATES, alias: "PointsBoundingBoxCoordinates", vr: VR::FL, vm: (6, 6) },
    DataDictionaryEntryRef { tag: AXIS_OF_ROTATION, alias: "AxisOfRotation", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: CENTER_OF_ROTATION, alias: "CenterOfRotation", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: NUMBER_OF_VECTORS, alias: "NumberOfVectors", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VECTOR_DIMENSIONALITY, alias: "VectorDimensionality", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VECTOR_ACCURACY, alias: "VectorAccuracy", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: VECTOR_COORDINATE_DATA, alias: "VectorCoordinateData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_POINT_COORDINATES_DATA, alias: "DoublePointCoordinatesData", vr: VR::OD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIANGLE_POINT_INDEX_LIST, alias: "TrianglePointIndexList", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EDGE_POINT_INDEX_LIST, alias: "EdgePointIndexList", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTEX_POINT_INDEX_LIST, alias: "VertexPointIndexList", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIANGLE_STRIP_SEQUENCE, alias: "TriangleStripSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIANGLE_FAN_SEQUENCE, alias: "TriangleFanSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LINE_SEQUENCE, alias: "LineSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMITIVE_POINT_INDEX_LIST, alias: "PrimitivePointIndexList", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_COUNT, alias: "SurfaceCount", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SURFACE_SEQUENCE, alias: "ReferencedSurfaceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SURFACE_NUMBER, alias: "ReferencedSurfaceNumber", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_SURFACE_GENERATION_ALGORITHM_IDENTIFICATION_SEQUENCE, alias: "SegmentSurfaceGenerationAlgorithmIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEGMENT_SURFACE_SOURCE_INSTANCE_SEQUENCE, alias: "SegmentSurfaceSourceInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_FAMILY_CODE_SEQUENCE, alias: "AlgorithmFamilyCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_NAME_CODE_SEQUENCE, alias: "AlgorithmNameCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_VERSION, alias: "AlgorithmVersion", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_PARAMETERS, alias: "AlgorithmParameters", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FACET_SEQUENCE, alias: "FacetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_PROCESSING_ALGORITHM_IDENTIFICATION_SEQUENCE, alias: "SurfaceProcessingAlgorithmIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_NAME, alias: "AlgorithmName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_POINT_RADIUS, alias: "RecommendedPointRadius", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_LINE_THICKNESS, alias: "RecommendedLineThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONG_PRIMITIVE_POINT_INDEX_LIST, alias: "LongPrimitivePointIndexList", vr: VR::OL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONG_TRIANGLE_POINT_INDEX_LIST, alias: "LongTrianglePointIndexList", vr: VR::OL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONG_EDGE_POINT_INDEX_LIST, alias: "LongEdgePointIndexList", vr: VR::OL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LONG_VERTEX_POINT_INDEX_LIST, alias: "LongVertexPointIndexList", vr: VR::OL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_SIZE, alias: "ImplantSize", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_VERSION, alias: "ImplantTemplateVersion", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPLACED_IMPLANT_TEMPLATE_SEQUENCE, alias: "ReplacedImplantTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TYPE, alias: "ImplantType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DERIVATION_IMPLANT_TEMPLATE_SEQUENCE, alias: "DerivationImplantTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORIGINAL_IMPLANT_TEMPLATE_SEQUENCE, alias: "OriginalImplantTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EFFECTIVE_DATE_TIME, alias: "EffectiveDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TARGET_ANATOMY_SEQUENCE, alias: "ImplantTargetAnatomySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INFORMATION_FROM_MANUFACTURER_SEQUENCE, alias: "InformationFromManufacturerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOTIFICATION_FROM_MANUFACTURER_SEQUENCE, alias: "NotificationFromManufacturerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INFORMATION_ISSUE_DATE_TIME, alias: "InformationIssueDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INFORMATION_SUMMARY, alias: "InformationSummary", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_REGULATORY_DISAPPROVAL_CODE_SEQUENCE, alias: "ImplantRegulatoryDisapprovalCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERALL_TEMPLATE_SPATIAL_TOLERANCE, alias: "OverallTemplateSpatialTolerance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_DOCUMENT_SEQUENCE, alias: "HPGLDocumentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_DOCUMENT_ID, alias: "HPGLDocumentID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_DOCUMENT_LABEL, alias: "HPGLDocumentLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_ORIENTATION_CODE_SEQUENCE, alias: "ViewOrientationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEW_ORIENTATION_MODIFIER_CODE_SEQUENCE, alias: "ViewOrientationModifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_DOCUMENT_SCALING, alias: "HPGLDocumentScaling", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_DOCUMENT, alias: "HPGLDocument", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_CONTOUR_PEN_NUMBER, alias: "HPGLContourPenNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_PEN_SEQUENCE, alias: "HPGLPenSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_PEN_NUMBER, alias: "HPGLPenNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_PEN_LABEL, alias: "HPGLPenLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HPGL_PEN_DESCRIPTION, alias: "HPGLPenDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECOMMENDED_ROTATION_POINT, alias: "RecommendedRotationPoint", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: BOUNDING_RECTANGLE, alias: "BoundingRectangle", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE3_D_MODEL_SURFACE_NUMBER, alias: "ImplantTemplate3DModelSurfaceNumber", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SURFACE_MODEL_DESCRIPTION_SEQUENCE, alias: "SurfaceModelDescriptionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_MODEL_LABEL, alias: "SurfaceModelLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_MODEL_SCALING_FACTOR, alias: "SurfaceModelScalingFactor", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIALS_CODE_SEQUENCE, alias: "MaterialsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COATING_MATERIALS_CODE_SEQUENCE, alias: "CoatingMaterialsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TYPE_CODE_SEQUENCE, alias: "ImplantTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_METHOD_CODE_SEQUENCE, alias: "FixationMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATING_FEATURE_SETS_SEQUENCE, alias: "MatingFeatureSetsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATING_FEATURE_SET_ID, alias: "MatingFeatureSetID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATING_FEATURE_SET_LABEL, alias: "MatingFeatureSetLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATING_FEATURE_SEQUENCE, alias: "MatingFeatureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATING_FEATURE_ID, alias: "MatingFeatureID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATING_FEATURE_DEGREE_OF_FREEDOM_SEQUENCE, alias: "MatingFeatureDegreeOfFreedomSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEGREE_OF_FREEDOM_ID, alias: "DegreeOfFreedomID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEGREE_OF_FREEDOM_TYPE, alias: "DegreeOfFreedomType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_MATING_FEATURE_COORDINATES_SEQUENCE, alias: "TwoDMatingFeatureCoordinatesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_HPGL_DOCUMENT_ID, alias: "ReferencedHPGLDocumentID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_MATING_POINT, alias: "TwoDMatingPoint", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TWO_D_MATING_AXES, alias: "TwoDMatingAxes", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: TWO_D_DEGREE_OF_FREEDOM_SEQUENCE, alias: "TwoDDegreeOfFreedomSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREE_D_DEGREE_OF_FREEDOM_AXIS, alias: "ThreeDDegreeOfFreedomAxis", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: RANGE_OF_FREEDOM, alias: "RangeOfFreedom", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: THREE_D_MATING_POINT, alias: "ThreeDMatingPoint", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: THREE_D_MATING_AXES, alias: "ThreeDMatingAxes", vr: VR::FD, vm: (9, 9) },
    DataDictionaryEntryRef { tag: TWO_D_DEGREE_OF_FREEDOM_AXIS, alias: "TwoDDegreeOfFreedomAxis", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: PLANNING_LANDMARK_POINT_SEQUENCE, alias: "PlanningLandmarkPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANNING_LANDMARK_LINE_SEQUENCE, alias: "PlanningLandmarkLineSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANNING_LANDMARK_PLANE_SEQUENCE, alias: "PlanningLandmarkPlaneSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANNING_LANDMARK_ID, alias: "PlanningLandmarkID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANNING_LANDMARK_DESCRIPTION, alias: "PlanningLandmarkDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANNING_LANDMARK_IDENTIFICATION_CODE_SEQUENCE, alias: "PlanningLandmarkIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_POINT_COORDINATES_SEQUENCE, alias: "TwoDPointCoordinatesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_POINT_COORDINATES, alias: "TwoDPointCoordinates", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: THREE_D_POINT_COORDINATES, alias: "ThreeDPointCoordinates", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: TWO_D_LINE_COORDINATES_SEQUENCE, alias: "TwoDLineCoordinatesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_LINE_COORDINATES, alias: "TwoDLineCoordinates", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: THREE_D_LINE_COORDINATES, alias: "ThreeDLineCoordinates", vr: VR::FD, vm: (6, 6) },
    DataDictionaryEntryRef { tag: TWO_D_PLANE_COORDINATES_SEQUENCE, alias: "TwoDPlaneCoordinatesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_PLANE_INTERSECTION, alias: "TwoDPlaneIntersection", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: THREE_D_PLANE_ORIGIN, alias: "ThreeDPlaneOrigin", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: THREE_D_PLANE_NORMAL, alias: "ThreeDPlaneNormal", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: GRAPHIC_ANNOTATION_SEQUENCE, alias: "GraphicAnnotationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER, alias: "GraphicLayer", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOUNDING_BOX_ANNOTATION_UNITS, alias: "BoundingBoxAnnotationUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANCHOR_POINT_ANNOTATION_UNITS, alias: "AnchorPointAnnotationUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_ANNOTATION_UNITS, alias: "GraphicAnnotationUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNFORMATTED_TEXT_VALUE, alias: "UnformattedTextValue", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXT_OBJECT_SEQUENCE, alias: "TextObjectSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_OBJECT_SEQUENCE, alias: "GraphicObjectSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOUNDING_BOX_TOP_LEFT_HAND_CORNER, alias: "BoundingBoxTopLeftHandCorner", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER, alias: "BoundingBoxBottomRightHandCorner", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION, alias: "BoundingBoxTextHorizontalJustification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANCHOR_POINT, alias: "AnchorPoint", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: ANCHOR_POINT_VISIBILITY, alias: "AnchorPointVisibility", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_DIMENSIONS, alias: "GraphicDimensions", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_GRAPHIC_POINTS, alias: "NumberOfGraphicPoints", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_DATA, alias: "GraphicData", vr: VR::FL, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: GRAPHIC_TYPE, alias: "GraphicType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_FILLED, alias: "GraphicFilled", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_ROTATION_RETIRED, alias: "ImageRotationRetired", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_HORIZONTAL_FLIP, alias: "ImageHorizontalFlip", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_ROTATION, alias: "ImageRotation", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAYED_AREA_TOP_LEFT_HAND_CORNER_TRIAL, alias: "DisplayedAreaTopLeftHandCornerTrial", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER_TRIAL, alias: "DisplayedAreaBottomRightHandCornerTrial", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DISPLAYED_AREA_TOP_LEFT_HAND_CORNER, alias: "DisplayedAreaTopLeftHandCorner", vr: VR::SL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DISPLAYED_AREA_BOTTOM_RIGHT_HAND_CORNER, alias: "DisplayedAreaBottomRightHandCorner", vr: VR::SL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DISPLAYED_AREA_SELECTION_SEQUENCE, alias: "DisplayedAreaSelectionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER_SEQUENCE, alias: "GraphicLayerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER_ORDER, alias: "GraphicLayerOrder", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER_RECOMMENDED_DISPLAY_GRAYSCALE_VALUE, alias: "GraphicLayerRecommendedDisplayGrayscaleValue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER_RECOMMENDED_DISPLAY_RGB_VALUE, alias: "GraphicLayerRecommendedDisplayRGBValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER_DESCRIPTION, alias: "GraphicLayerDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_LABEL, alias: "ContentLabel", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_DESCRIPTION, alias: "ContentDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_CREATION_DATE, alias: "PresentationCreationDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_CREATION_TIME, alias: "PresentationCreationTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_CREATOR_NAME, alias: "ContentCreatorName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTENT_CREATOR_IDENTIFICATION_CODE_SEQUENCE, alias: "ContentCreatorIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALTERNATE_CONTENT_DESCRIPTION_SEQUENCE, alias: "AlternateContentDescriptionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_SIZE_MODE, alias: "PresentationSizeMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_PIXEL_SPACING, alias: "PresentationPixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: PRESENTATION_PIXEL_ASPECT_RATIO, alias: "PresentationPixelAspectRatio", vr: VR::IS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: PRESENTATION_PIXEL_MAGNIFICATION_RATIO, alias: "PresentationPixelMagnificationRatio", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_GROUP_LABEL, alias: "GraphicGroupLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_GROUP_DESCRIPTION, alias: "GraphicGroupDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPOUND_GRAPHIC_SEQUENCE, alias: "CompoundGraphicSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPOUND_GRAPHIC_INSTANCE_ID, alias: "CompoundGraphicInstanceID", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FONT_NAME, alias: "FontName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FONT_NAME_TYPE, alias: "FontNameType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CSS_FONT_NAME, alias: "CSSFontName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_ANGLE, alias: "RotationAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXT_STYLE_SEQUENCE, alias: "TextStyleSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LINE_STYLE_SEQUENCE, alias: "LineStyleSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILL_STYLE_SEQUENCE, alias: "FillStyleSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_GROUP_SEQUENCE, alias: "GraphicGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXT_COLOR_CIE_LAB_VALUE, alias: "TextColorCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: HORIZONTAL_ALIGNMENT, alias: "HorizontalAlignment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERTICAL_ALIGNMENT, alias: "VerticalAlignment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHADOW_STYLE, alias: "ShadowStyle", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHADOW_OFFSET_X, alias: "ShadowOffsetX", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHADOW_OFFSET_Y, alias: "ShadowOffsetY", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHADOW_COLOR_CIE_LAB_VALUE, alias: "ShadowColorCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: UNDERLINED, alias: "Underlined", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOLD, alias: "Bold", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITALIC, alias: "Italic", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATTERN_ON_COLOR_CIE_LAB_VALUE, alias: "PatternOnColorCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: PATTERN_OFF_COLOR_CIE_LAB_VALUE, alias: "PatternOffColorCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: LINE_THICKNESS, alias: "LineThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LINE_DASHING_STYLE, alias: "LineDashingStyle", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LINE_PATTERN, alias: "LinePattern", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILL_PATTERN, alias: "FillPattern", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILL_MODE, alias: "FillMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHADOW_OPACITY, alias: "ShadowOpacity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GAP_LENGTH, alias: "GapLength", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIAMETER_OF_VISIBILITY, alias: "DiameterOfVisibility", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROTATION_POINT, alias: "RotationPoint", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TICK_ALIGNMENT, alias: "TickAlignment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOW_TICK_LABEL, alias: "ShowTickLabel", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TICK_LABEL_ALIGNMENT, alias: "TickLabelAlignment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPOUND_GRAPHIC_UNITS, alias: "CompoundGraphicUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATTERN_ON_OPACITY, alias: "PatternOnOpacity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATTERN_OFF_OPACITY, alias: "PatternOffOpacity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAJOR_TICKS_SEQUENCE, alias: "MajorTicksSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TICK_POSITION, alias: "TickPosition", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TICK_LABEL, alias: "TickLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPOUND_GRAPHIC_TYPE, alias: "CompoundGraphicType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_GROUP_ID, alias: "GraphicGroupID", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHAPE_TYPE, alias: "ShapeType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGISTRATION_SEQUENCE, alias: "RegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATRIX_REGISTRATION_SEQUENCE, alias: "MatrixRegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATRIX_SEQUENCE, alias: "MatrixSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_TO_DISPLAYED_COORDINATE_SYSTEM_TRANSFORMATION_MATRIX, alias: "FrameOfReferenceToDisplayedCoordinateSystemTransformationMatrix", vr: VR::FD, vm: (16, 16) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX_TYPE, alias: "FrameOfReferenceTransformationMatrixType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGISTRATION_TYPE_CODE_SEQUENCE, alias: "RegistrationTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIDUCIAL_DESCRIPTION, alias: "FiducialDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIDUCIAL_IDENTIFIER, alias: "FiducialIdentifier", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIDUCIAL_IDENTIFIER_CODE_SEQUENCE, alias: "FiducialIdentifierCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_UNCERTAINTY_RADIUS, alias: "ContourUncertaintyRadius", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: USED_FIDUCIALS_SEQUENCE, alias: "UsedFiducialsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_COORDINATES_DATA_SEQUENCE, alias: "GraphicCoordinatesDataSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIDUCIAL_UID, alias: "FiducialUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FIDUCIAL_UID, alias: "ReferencedFiducialUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIDUCIAL_SET_SEQUENCE, alias: "FiducialSetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIDUCIAL_SEQUENCE, alias: "FiducialSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRAPHIC_LAYER_RECOMMENDED_DISPLAY_CIE_LAB_VALUE, alias: "GraphicLayerRecommendedDisplayCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: BLENDING_SEQUENCE, alias: "BlendingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIVE_OPACITY, alias: "RelativeOpacity", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SPATIAL_REGISTRATION_SEQUENCE, alias: "ReferencedSpatialRegistrationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_POSITION, alias: "BlendingPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_DISPLAY_COLLECTION_UID, alias: "PresentationDisplayCollectionUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_SEQUENCE_COLLECTION_UID, alias: "PresentationSequenceCollectionUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_SEQUENCE_POSITION_INDEX, alias: "PresentationSequencePositionIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RENDERED_IMAGE_REFERENCE_SEQUENCE, alias: "RenderedImageReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUMETRIC_PRESENTATION_STATE_INPUT_SEQUENCE, alias: "VolumetricPresentationStateInputSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_INPUT_TYPE, alias: "PresentationInputType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INPUT_SEQUENCE_POSITION_INDEX, alias: "InputSequencePositionIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CROP, alias: "Crop", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CROPPING_SPECIFICATION_INDEX, alias: "CroppingSpecificationIndex", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COMPOSITING_METHOD, alias: "CompositingMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUMETRIC_PRESENTATION_INPUT_NUMBER, alias: "VolumetricPresentationInputNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_VOLUME_GEOMETRY, alias: "ImageVolumeGeometry", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUMETRIC_PRESENTATION_INPUT_SET_UID, alias: "VolumetricPresentationInputSetUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUMETRIC_PRESENTATION_INPUT_SET_SEQUENCE, alias: "VolumetricPresentationInputSetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GLOBAL_CROP, alias: "GlobalCrop", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GLOBAL_CROPPING_SPECIFICATION_INDEX, alias: "GlobalCroppingSpecificationIndex", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RENDERING_METHOD, alias: "RenderingMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUME_CROPPING_SEQUENCE, alias: "VolumeCroppingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUME_CROPPING_METHOD, alias: "VolumeCroppingMethod", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOUNDING_BOX_CROP, alias: "BoundingBoxCrop", vr: VR::FD, vm: (6, 6) },
    DataDictionaryEntryRef { tag: OBLIQUE_CROPPING_PLANE_SEQUENCE, alias: "ObliqueCroppingPlaneSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANE, alias: "Plane", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: PLANE_NORMAL, alias: "PlaneNormal", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: CROPPING_SPECIFICATION_NUMBER, alias: "CroppingSpecificationNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MULTI_PLANAR_RECONSTRUCTION_STYLE, alias: "MultiPlanarReconstructionStyle", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MPR_THICKNESS_TYPE, alias: "MPRThicknessType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MPR_SLAB_THICKNESS, alias: "MPRSlabThickness", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MPR_TOP_LEFT_HAND_CORNER, alias: "MPRTopLeftHandCorner", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MPR_VIEW_WIDTH_DIRECTION, alias: "MPRViewWidthDirection", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MPR_VIEW_WIDTH, alias: "MPRViewWidth", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_VOLUMETRIC_CURVE_POINTS, alias: "NumberOfVolumetricCurvePoints", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VOLUMETRIC_CURVE_POINTS, alias: "VolumetricCurvePoints", vr: VR::OD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MPR_VIEW_HEIGHT_DIRECTION, alias: "MPRViewHeightDirection", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: MPR_VIEW_HEIGHT, alias: "MPRViewHeight", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RENDER_PROJECTION, alias: "RenderProjection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIEWPOINT_POSITION, alias: "ViewpointPosition", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: VIEWPOINT_LOOK_AT_POINT, alias: "ViewpointLookAtPoint", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: VIEWPOINT_UP_DIRECTION, alias: "ViewpointUpDirection", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: RENDER_FIELD_OF_VIEW, alias: "RenderFieldOfView", vr: VR::FD, vm: (6, 6) },
    DataDictionaryEntryRef { tag: SAMPLING_STEP_SIZE, alias: "SamplingStepSize", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_NAME, alias: "HangingProtocolName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_DESCRIPTION, alias: "HangingProtocolDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_LEVEL, alias: "HangingProtocolLevel", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_CREATOR, alias: "HangingProtocolCreator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_CREATION_DATE_TIME, alias: "HangingProtocolCreationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_DEFINITION_SEQUENCE, alias: "HangingProtocolDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_USER_IDENTIFICATION_CODE_SEQUENCE, alias: "HangingProtocolUserIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HANGING_PROTOCOL_USER_GROUP_NAME, alias: "HangingProtocolUserGroupName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_HANGING_PROTOCOL_SEQUENCE, alias: "SourceHangingProtocolSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PRIORS_REFERENCED, alias: "NumberOfPriorsReferenced", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SETS_SEQUENCE, alias: "ImageSetsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SET_SELECTOR_SEQUENCE, alias: "ImageSetSelectorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SET_SELECTOR_USAGE_FLAG, alias: "ImageSetSelectorUsageFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_ATTRIBUTE, alias: "SelectorAttribute", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_VALUE_NUMBER, alias: "SelectorValueNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIME_BASED_IMAGE_SETS_SEQUENCE, alias: "TimeBasedImageSetsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SET_NUMBER, alias: "ImageSetNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SET_SELECTOR_CATEGORY, alias: "ImageSetSelectorCategory", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATIVE_TIME, alias: "RelativeTime", vr: VR::US, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RELATIVE_TIME_UNITS, alias: "RelativeTimeUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ABSTRACT_PRIOR_VALUE, alias: "AbstractPriorValue", vr: VR::SS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: ABSTRACT_PRIOR_CODE_SEQUENCE, alias: "AbstractPriorCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SET_LABEL, alias: "ImageSetLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_ATTRIBUTE_VR, alias: "SelectorAttributeVR", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_SEQUENCE_POINTER, alias: "SelectorSequencePointer", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_SEQUENCE_POINTER_PRIVATE_CREATOR, alias: "SelectorSequencePointerPrivateCreator", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_ATTRIBUTE_PRIVATE_CREATOR, alias: "SelectorAttributePrivateCreator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_AE_VALUE, alias: "SelectorAEValue", vr: VR::AE, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_AS_VALUE, alias: "SelectorASValue", vr: VR::AS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_AT_VALUE, alias: "SelectorATValue", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_DA_VALUE, alias: "SelectorDAValue", vr: VR::DA, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_CS_VALUE, alias: "SelectorCSValue", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_DT_VALUE, alias: "SelectorDTValue", vr: VR::DT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_IS_VALUE, alias: "SelectorISValue", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_OB_VALUE, alias: "SelectorOBValue", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_LO_VALUE, alias: "SelectorLOValue", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_OF_VALUE, alias: "SelectorOFValue", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_LT_VALUE, alias: "SelectorLTValue", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_OW_VALUE, alias: "SelectorOWValue", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_PN_VALUE, alias: "SelectorPNValue", vr: VR::PN, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_TM_VALUE, alias: "SelectorTMValue", vr: VR::TM, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_SH_VALUE, alias: "SelectorSHValue", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_UN_VALUE, alias: "SelectorUNValue", vr: VR::UN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_ST_VALUE, alias: "SelectorSTValue", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_UC_VALUE, alias: "SelectorUCValue", vr: VR::UC, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_UT_VALUE, alias: "SelectorUTValue", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_UR_VALUE, alias: "SelectorURValue", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_DS_VALUE, alias: "SelectorDSValue", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_OD_VALUE, alias: "SelectorODValue", vr: VR::OD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_FD_VALUE, alias: "SelectorFDValue", vr: VR::FD, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_OL_VALUE, alias: "SelectorOLValue", vr: VR::OL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_FL_VALUE, alias: "SelectorFLValue", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_UL_VALUE, alias: "SelectorULValue", vr: VR::UL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_US_VALUE, alias: "SelectorUSValue", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_SL_VALUE, alias: "SelectorSLValue", vr: VR::SL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_SS_VALUE, alias: "SelectorSSValue", vr: VR::SS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_UI_VALUE, alias: "SelectorUIValue", vr: VR::UI, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_CODE_SEQUENCE_VALUE, alias: "SelectorCodeSequenceValue", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_OV_VALUE, alias: "SelectorOVValue", vr: VR::OV, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_SV_VALUE, alias: "SelectorSVValue", vr: VR::SV, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SELECTOR_UV_VALUE, alias: "SelectorUVValue", vr: VR::UV, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SCREENS, alias: "NumberOfScreens", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_SCREEN_DEFINITION_SEQUENCE, alias: "NominalScreenDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_VERTICAL_PIXELS, alias: "NumberOfVerticalPixels", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_HORIZONTAL_PIXELS, alias: "NumberOfHorizontalPixels", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_ENVIRONMENT_SPATIAL_POSITION, alias: "DisplayEnvironmentSpatialPosition", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: SCREEN_MINIMUM_GRAYSCALE_BIT_DEPTH, alias: "ScreenMinimumGrayscaleBitDepth", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCREEN_MINIMUM_COLOR_BIT_DEPTH, alias: "ScreenMinimumColorBitDepth", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_MAXIMUM_REPAINT_TIME, alias: "ApplicationMaximumRepaintTime", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SETS_SEQUENCE, alias: "DisplaySetsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_NUMBER, alias: "DisplaySetNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_LABEL, alias: "DisplaySetLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_PRESENTATION_GROUP, alias: "DisplaySetPresentationGroup", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_PRESENTATION_GROUP_DESCRIPTION, alias: "DisplaySetPresentationGroupDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARTIAL_DATA_DISPLAY_HANDLING, alias: "PartialDataDisplayHandling", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYNCHRONIZED_SCROLLING_SEQUENCE, alias: "SynchronizedScrollingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_SCROLLING_GROUP, alias: "DisplaySetScrollingGroup", vr: VR::US, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: NAVIGATION_INDICATOR_SEQUENCE, alias: "NavigationIndicatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NAVIGATION_DISPLAY_SET, alias: "NavigationDisplaySet", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_DISPLAY_SETS, alias: "ReferenceDisplaySets", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: IMAGE_BOXES_SEQUENCE, alias: "ImageBoxesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_NUMBER, alias: "ImageBoxNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_LAYOUT_TYPE, alias: "ImageBoxLayoutType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_TILE_HORIZONTAL_DIMENSION, alias: "ImageBoxTileHorizontalDimension", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_TILE_VERTICAL_DIMENSION, alias: "ImageBoxTileVerticalDimension", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_SCROLL_DIRECTION, alias: "ImageBoxScrollDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_SMALL_SCROLL_TYPE, alias: "ImageBoxSmallScrollType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_SMALL_SCROLL_AMOUNT, alias: "ImageBoxSmallScrollAmount", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_LARGE_SCROLL_TYPE, alias: "ImageBoxLargeScrollType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_LARGE_SCROLL_AMOUNT, alias: "ImageBoxLargeScrollAmount", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_OVERLAP_PRIORITY, alias: "ImageBoxOverlapPriority", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CINE_RELATIVE_TO_REAL_TIME, alias: "CineRelativeToRealTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_OPERATIONS_SEQUENCE, alias: "FilterOperationsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_BY_CATEGORY, alias: "FilterByCategory", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_BY_ATTRIBUTE_PRESENCE, alias: "FilterByAttributePresence", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILTER_BY_OPERATOR, alias: "FilterByOperator", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURED_DISPLAY_BACKGROUND_CIE_LAB_VALUE, alias: "StructuredDisplayBackgroundCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: EMPTY_IMAGE_BOX_CIE_LAB_VALUE, alias: "EmptyImageBoxCIELabValue", vr: VR::US, vm: (3, 3) },
    DataDictionaryEntryRef { tag: STRUCTURED_DISPLAY_IMAGE_BOX_SEQUENCE, alias: "StructuredDisplayImageBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURED_DISPLAY_TEXT_BOX_SEQUENCE, alias: "StructuredDisplayTextBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FIRST_FRAME_SEQUENCE, alias: "ReferencedFirstFrameSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_SYNCHRONIZATION_SEQUENCE, alias: "ImageBoxSynchronizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SYNCHRONIZED_IMAGE_BOX_LIST, alias: "SynchronizedImageBoxList", vr: VR::US, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: TYPE_OF_SYNCHRONIZATION, alias: "TypeOfSynchronization", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLENDING_OPERATION_TYPE, alias: "BlendingOperationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFORMATTING_OPERATION_TYPE, alias: "ReformattingOperationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFORMATTING_THICKNESS, alias: "ReformattingThickness", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFORMATTING_INTERVAL, alias: "ReformattingInterval", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFORMATTING_OPERATION_INITIAL_VIEW_DIRECTION, alias: "ReformattingOperationInitialViewDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREE_D_RENDERING_TYPE, alias: "ThreeDRenderingType", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SORTING_OPERATIONS_SEQUENCE, alias: "SortingOperationsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SORT_BY_CATEGORY, alias: "SortByCategory", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SORTING_DIRECTION, alias: "SortingDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_PATIENT_ORIENTATION, alias: "DisplaySetPatientOrientation", vr: VR::CS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: VOI_TYPE, alias: "VOIType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PSEUDO_COLOR_TYPE, alias: "PseudoColorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PSEUDO_COLOR_PALETTE_INSTANCE_REFERENCE_SEQUENCE, alias: "PseudoColorPaletteInstanceReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOW_GRAYSCALE_INVERTED, alias: "ShowGrayscaleInverted", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOW_IMAGE_TRUE_SIZE_FLAG, alias: "ShowImageTrueSizeFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOW_GRAPHIC_ANNOTATION_FLAG, alias: "ShowGraphicAnnotationFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOW_PATIENT_DEMOGRAPHICS_FLAG, alias: "ShowPatientDemographicsFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOW_ACQUISITION_TECHNIQUES_FLAG, alias: "ShowAcquisitionTechniquesFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_HORIZONTAL_JUSTIFICATION, alias: "DisplaySetHorizontalJustification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISPLAY_SET_VERTICAL_JUSTIFICATION, alias: "DisplaySetVerticalJustification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTINUATION_START_METERSET, alias: "ContinuationStartMeterset", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTINUATION_END_METERSET, alias: "ContinuationEndMeterset", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_STATE, alias: "ProcedureStepState", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROGRESS_INFORMATION_SEQUENCE, alias: "ProgressInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_PROGRESS, alias: "ProcedureStepProgress", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_PROGRESS_DESCRIPTION, alias: "ProcedureStepProgressDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_PROGRESS_PARAMETERS_SEQUENCE, alias: "ProcedureStepProgressParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_COMMUNICATIONS_URI_SEQUENCE, alias: "ProcedureStepCommunicationsURISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTACT_URI, alias: "ContactURI", vr: VR::UR, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTACT_DISPLAY_NAME, alias: "ContactDisplayName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_DISCONTINUATION_REASON_CODE_SEQUENCE, alias: "ProcedureStepDiscontinuationReasonCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_TASK_SEQUENCE, alias: "BeamTaskSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_TASK_TYPE, alias: "BeamTaskType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_ORDER_INDEX_TRIAL, alias: "BeamOrderIndexTrial", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUTOSEQUENCE_FLAG, alias: "AutosequenceFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_VERTICAL_ADJUSTED_POSITION, alias: "TableTopVerticalAdjustedPosition", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LONGITUDINAL_ADJUSTED_POSITION, alias: "TableTopLongitudinalAdjustedPosition", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LATERAL_ADJUSTED_POSITION, alias: "TableTopLateralAdjustedPosition", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_ADJUSTED_ANGLE, alias: "PatientSupportAdjustedAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ECCENTRIC_ADJUSTED_ANGLE, alias: "TableTopEccentricAdjustedAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_PITCH_ADJUSTED_ANGLE, alias: "TableTopPitchAdjustedAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ROLL_ADJUSTED_ANGLE, alias: "TableTopRollAdjustedAngle", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERY_VERIFICATION_IMAGE_SEQUENCE, alias: "DeliveryVerificationImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VERIFICATION_IMAGE_TIMING, alias: "VerificationImageTiming", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_EXPOSURE_FLAG, alias: "DoubleExposureFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_EXPOSURE_ORDERING, alias: "DoubleExposureOrdering", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_EXPOSURE_METERSET_TRIAL, alias: "DoubleExposureMetersetTrial", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_EXPOSURE_FIELD_DELTA_TRIAL, alias: "DoubleExposureFieldDeltaTrial", vr: VR::DS, vm: (4, 4) },
    DataDictionaryEntryRef { tag: RELATED_REFERENCE_RT_IMAGE_SEQUENCE, alias: "RelatedReferenceRTImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_MACHINE_VERIFICATION_SEQUENCE, alias: "GeneralMachineVerificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONVENTIONAL_MACHINE_VERIFICATION_SEQUENCE, alias: "ConventionalMachineVerificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_MACHINE_VERIFICATION_SEQUENCE, alias: "IonMachineVerificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FAILED_ATTRIBUTES_SEQUENCE, alias: "FailedAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERRIDDEN_ATTRIBUTES_SEQUENCE, alias: "OverriddenAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONVENTIONAL_CONTROL_POINT_VERIFICATION_SEQUENCE, alias: "ConventionalControlPointVerificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_CONTROL_POINT_VERIFICATION_SEQUENCE, alias: "IonControlPointVerificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_OCCURRENCE_SEQUENCE, alias: "AttributeOccurrenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_OCCURRENCE_POINTER, alias: "AttributeOccurrencePointer", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_ITEM_SELECTOR, alias: "AttributeItemSelector", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_OCCURRENCE_PRIVATE_CREATOR, alias: "AttributeOccurrencePrivateCreator", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SELECTOR_SEQUENCE_POINTER_ITEMS, alias: "SelectorSequencePointerItems", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCEDURE_STEP_PRIORITY, alias: "ScheduledProcedureStepPriority", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WORKLIST_LABEL, alias: "WorklistLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_LABEL, alias: "ProcedureStepLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCHEDULED_PROCESSING_PARAMETERS_SEQUENCE, alias: "ScheduledProcessingParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PERFORMED_PROCESSING_PARAMETERS_SEQUENCE, alias: "PerformedProcessingParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNIFIED_PROCEDURE_STEP_PERFORMED_PROCEDURE_SEQUENCE, alias: "UnifiedProcedureStepPerformedProcedureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATED_PROCEDURE_STEP_SEQUENCE, alias: "RelatedProcedureStepSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_STEP_RELATIONSHIP_TYPE, alias: "ProcedureStepRelationshipType", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPLACED_PROCEDURE_STEP_SEQUENCE, alias: "ReplacedProcedureStepSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELETION_LOCK, alias: "DeletionLock", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECEIVING_AE, alias: "ReceivingAE", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTING_AE, alias: "RequestingAE", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_CANCELLATION, alias: "ReasonForCancellation", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCP_STATUS, alias: "SCPStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUBSCRIPTION_LIST_STATUS, alias: "SubscriptionListStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: UNIFIED_PROCEDURE_STEP_LIST_STATUS, alias: "UnifiedProcedureStepListStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_ORDER_INDEX, alias: "BeamOrderIndex", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_EXPOSURE_METERSET, alias: "DoubleExposureMeterset", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_EXPOSURE_FIELD_DELTA, alias: "DoubleExposureFieldDelta", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: BRACHY_TASK_SEQUENCE, alias: "BrachyTaskSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTINUATION_START_TOTAL_REFERENCE_AIR_KERMA, alias: "ContinuationStartTotalReferenceAirKerma", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTINUATION_END_TOTAL_REFERENCE_AIR_KERMA, alias: "ContinuationEndTotalReferenceAirKerma", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTINUATION_PULSE_NUMBER, alias: "ContinuationPulseNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DELIVERY_ORDER_SEQUENCE, alias: "ChannelDeliveryOrderSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CHANNEL_NUMBER, alias: "ReferencedChannelNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_CUMULATIVE_TIME_WEIGHT, alias: "StartCumulativeTimeWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: END_CUMULATIVE_TIME_WEIGHT, alias: "EndCumulativeTimeWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OMITTED_CHANNEL_SEQUENCE, alias: "OmittedChannelSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_CHANNEL_OMISSION, alias: "ReasonForChannelOmission", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_CHANNEL_OMISSION_DESCRIPTION, alias: "ReasonForChannelOmissionDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DELIVERY_ORDER_INDEX, alias: "ChannelDeliveryOrderIndex", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_DELIVERY_CONTINUATION_SEQUENCE, alias: "ChannelDeliveryContinuationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OMITTED_APPLICATION_SETUP_SEQUENCE, alias: "OmittedApplicationSetupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_ASSEMBLY_TEMPLATE_NAME, alias: "ImplantAssemblyTemplateName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_ASSEMBLY_TEMPLATE_ISSUER, alias: "ImplantAssemblyTemplateIssuer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_ASSEMBLY_TEMPLATE_VERSION, alias: "ImplantAssemblyTemplateVersion", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPLACED_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE, alias: "ReplacedImplantAssemblyTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_ASSEMBLY_TEMPLATE_TYPE, alias: "ImplantAssemblyTemplateType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORIGINAL_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE, alias: "OriginalImplantAssemblyTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DERIVATION_IMPLANT_ASSEMBLY_TEMPLATE_SEQUENCE, alias: "DerivationImplantAssemblyTemplateSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_ASSEMBLY_TEMPLATE_TARGET_ANATOMY_SEQUENCE, alias: "ImplantAssemblyTemplateTargetAnatomySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROCEDURE_TYPE_CODE_SEQUENCE, alias: "ProcedureTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURGICAL_TECHNIQUE, alias: "SurgicalTechnique", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_TYPES_SEQUENCE, alias: "ComponentTypesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_TYPE_CODE_SEQUENCE, alias: "ComponentTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXCLUSIVE_COMPONENT_TYPE, alias: "ExclusiveComponentType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MANDATORY_COMPONENT_TYPE, alias: "MandatoryComponentType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_SEQUENCE, alias: "ComponentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_ID, alias: "ComponentID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT_ASSEMBLY_SEQUENCE, alias: "ComponentAssemblySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT1_REFERENCED_ID, alias: "Component1ReferencedID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT1_REFERENCED_MATING_FEATURE_SET_ID, alias: "Component1ReferencedMatingFeatureSetID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT1_REFERENCED_MATING_FEATURE_ID, alias: "Component1ReferencedMatingFeatureID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT2_REFERENCED_ID, alias: "Component2ReferencedID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT2_REFERENCED_MATING_FEATURE_SET_ID, alias: "Component2ReferencedMatingFeatureSetID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPONENT2_REFERENCED_MATING_FEATURE_ID, alias: "Component2ReferencedMatingFeatureID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_NAME, alias: "ImplantTemplateGroupName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_DESCRIPTION, alias: "ImplantTemplateGroupDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_ISSUER, alias: "ImplantTemplateGroupIssuer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_VERSION, alias: "ImplantTemplateGroupVersion", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPLACED_IMPLANT_TEMPLATE_GROUP_SEQUENCE, alias: "ReplacedImplantTemplateGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_TARGET_ANATOMY_SEQUENCE, alias: "ImplantTemplateGroupTargetAnatomySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_MEMBERS_SEQUENCE, alias: "ImplantTemplateGroupMembersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_MEMBER_ID, alias: "ImplantTemplateGroupMemberID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT, alias: "ThreeDImplantTemplateGroupMemberMatchingPoint", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: THREE_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES, alias: "ThreeDImplantTemplateGroupMemberMatchingAxes", vr: VR::FD, vm: (9, 9) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING2_D_COORDINATES_SEQUENCE, alias: "ImplantTemplateGroupMemberMatching2DCoordinatesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_POINT, alias: "TwoDImplantTemplateGroupMemberMatchingPoint", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: TWO_D_IMPLANT_TEMPLATE_GROUP_MEMBER_MATCHING_AXES, alias: "TwoDImplantTemplateGroupMemberMatchingAxes", vr: VR::FD, vm: (4, 4) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_SEQUENCE, alias: "ImplantTemplateGroupVariationDimensionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_NAME, alias: "ImplantTemplateGroupVariationDimensionName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK_SEQUENCE, alias: "ImplantTemplateGroupVariationDimensionRankSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMPLANT_TEMPLATE_GROUP_MEMBER_ID, alias: "ReferencedImplantTemplateGroupMemberID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPLANT_TEMPLATE_GROUP_VARIATION_DIMENSION_RANK, alias: "ImplantTemplateGroupVariationDimensionRank", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_SCAN_ACQUISITION_TYPE_CODE_SEQUENCE, alias: "SurfaceScanAcquisitionTypeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_SCAN_MODE_CODE_SEQUENCE, alias: "SurfaceScanModeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REGISTRATION_METHOD_CODE_SEQUENCE, alias: "RegistrationMethodCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOT_DURATION_TIME, alias: "ShotDurationTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHOT_OFFSET_TIME, alias: "ShotOffsetTime", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SURFACE_POINT_PRESENTATION_VALUE_DATA, alias: "SurfacePointPresentationValueData", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SURFACE_POINT_COLOR_CIE_LAB_VALUE_DATA, alias: "SurfacePointColorCIELabValueData", vr: VR::US, vm: (3, VM_N) },
    DataDictionaryEntryRef { tag: UV_MAPPING_SEQUENCE, alias: "UVMappingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXTURE_LABEL, alias: "TextureLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: U_VALUE_DATA, alias: "UValueData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: V_VALUE_DATA, alias: "VValueData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TEXTURE_SEQUENCE, alias: "ReferencedTextureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SURFACE_DATA_SEQUENCE, alias: "ReferencedSurfaceDataSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSESSMENT_SUMMARY, alias: "AssessmentSummary", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSESSMENT_SUMMARY_DESCRIPTION, alias: "AssessmentSummaryDescription", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSESSED_SOP_INSTANCE_SEQUENCE, alias: "AssessedSOPInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_COMPARISON_SOP_INSTANCE_SEQUENCE, alias: "ReferencedComparisonSOPInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ASSESSMENT_OBSERVATIONS, alias: "NumberOfAssessmentObservations", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ASSESSMENT_OBSERVATIONS_SEQUENCE, alias: "AssessmentObservationsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_SIGNIFICANCE, alias: "ObservationSignificance", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_DESCRIPTION, alias: "ObservationDescription", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURED_CONSTRAINT_OBSERVATION_SEQUENCE, alias: "StructuredConstraintObservationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STORAGE_MEDIA_FILE_SET_ID, alias: "StorageMediaFileSetID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STORAGE_MEDIA_FILE_SET_UID, alias: "StorageMediaFileSetUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOPIC_TITLE, alias: "TopicTitle", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOPIC_SUBJECT, alias: "TopicSubject", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOPIC_AUTHOR, alias: "TopicAuthor", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOPIC_KEYWORDS, alias: "TopicKeywords", vr: VR::LO, vm: (1, 32) },
    DataDictionaryEntryRef { tag: SOP_INSTANCE_STATUS, alias: "SOPInstanceStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOP_AUTHORIZATION_DATE_TIME, alias: "SOPAuthorizationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOP_AUTHORIZATION_COMMENT, alias: "SOPAuthorizationComment", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER, alias: "AuthorizationEquipmentCertificationNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MACID_NUMBER, alias: "MACIDNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAC_CALCULATION_TRANSFER_SYNTAX_UID, alias: "MACCalculationTransferSyntaxUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAC_ALGORITHM, alias: "MACAlgorithm", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_ELEMENTS_SIGNED, alias: "DataElementsSigned", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DIGITAL_SIGNATURE_UID, alias: "DigitalSignatureUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIGITAL_SIGNATURE_DATE_TIME, alias: "DigitalSignatureDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CERTIFICATE_TYPE, alias: "CertificateType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CERTIFICATE_OF_SIGNER, alias: "CertificateOfSigner", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SIGNATURE, alias: "Signature", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CERTIFIED_TIMESTAMP_TYPE, alias: "CertifiedTimestampType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CERTIFIED_TIMESTAMP, alias: "CertifiedTimestamp", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIGITAL_SIGNATURE_PURPOSE, alias: "DigitalSignaturePurpose", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIGITAL_SIGNATURE_PURPOSE_CODE_SEQUENCE, alias: "DigitalSignaturePurposeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_DIGITAL_SIGNATURE_SEQUENCE, alias: "ReferencedDigitalSignatureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOP_INSTANCE_MAC_SEQUENCE, alias: "ReferencedSOPInstanceMACSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAC, alias: "MAC", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENCRYPTED_ATTRIBUTES_SEQUENCE, alias: "EncryptedAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENCRYPTED_CONTENT_TRANSFER_SYNTAX_UID, alias: "EncryptedContentTransferSyntaxUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENCRYPTED_CONTENT, alias: "EncryptedContent", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFIED_ATTRIBUTES_SEQUENCE, alias: "ModifiedAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NONCONFORMING_MODIFIED_ATTRIBUTES_SEQUENCE, alias: "NonconformingModifiedAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NONCONFORMING_DATA_ELEMENT_VALUE, alias: "NonconformingDataElementValue", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORIGINAL_ATTRIBUTES_SEQUENCE, alias: "OriginalAttributesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_MODIFICATION_DATE_TIME, alias: "AttributeModificationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODIFYING_SYSTEM, alias: "ModifyingSystem", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_OF_PREVIOUS_VALUES, alias: "SourceOfPreviousValues", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_THE_ATTRIBUTE_MODIFICATION, alias: "ReasonForTheAttributeModification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSTANCE_ORIGIN_STATUS, alias: "InstanceOriginStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_COPIES, alias: "NumberOfCopies", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_CONFIGURATION_SEQUENCE, alias: "PrinterConfigurationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINT_PRIORITY, alias: "PrintPriority", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDIUM_TYPE, alias: "MediumType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILM_DESTINATION, alias: "FilmDestination", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILM_SESSION_LABEL, alias: "FilmSessionLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEMORY_ALLOCATION, alias: "MemoryAllocation", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_MEMORY_ALLOCATION, alias: "MaximumMemoryAllocation", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLOR_IMAGE_PRINTING_FLAG, alias: "ColorImagePrintingFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COLLATION_FLAG, alias: "CollationFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANNOTATION_FLAG, alias: "AnnotationFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_OVERLAY_FLAG, alias: "ImageOverlayFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_LUT_FLAG, alias: "PresentationLUTFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_PRESENTATION_LUT_FLAG, alias: "ImageBoxPresentationLUTFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEMORY_BIT_DEPTH, alias: "MemoryBitDepth", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTING_BIT_DEPTH, alias: "PrintingBitDepth", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDIA_INSTALLED_SEQUENCE, alias: "MediaInstalledSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_MEDIA_AVAILABLE_SEQUENCE, alias: "OtherMediaAvailableSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SUPPORTED_IMAGE_DISPLAY_FORMATS_SEQUENCE, alias: "SupportedImageDisplayFormatsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FILM_BOX_SEQUENCE, alias: "ReferencedFilmBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_STORED_PRINT_SEQUENCE, alias: "ReferencedStoredPrintSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_DISPLAY_FORMAT, alias: "ImageDisplayFormat", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANNOTATION_DISPLAY_FORMAT_ID, alias: "AnnotationDisplayFormatID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILM_ORIENTATION, alias: "FilmOrientation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILM_SIZE_ID, alias: "FilmSizeID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_RESOLUTION_ID, alias: "PrinterResolutionID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEFAULT_PRINTER_RESOLUTION_ID, alias: "DefaultPrinterResolutionID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAGNIFICATION_TYPE, alias: "MagnificationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SMOOTHING_TYPE, alias: "SmoothingType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEFAULT_MAGNIFICATION_TYPE, alias: "DefaultMagnificationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_MAGNIFICATION_TYPES_AVAILABLE, alias: "OtherMagnificationTypesAvailable", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DEFAULT_SMOOTHING_TYPE, alias: "DefaultSmoothingType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OTHER_SMOOTHING_TYPES_AVAILABLE, alias: "OtherSmoothingTypesAvailable", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: BORDER_DENSITY, alias: "BorderDensity", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EMPTY_IMAGE_DENSITY, alias: "EmptyImageDensity", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MIN_DENSITY, alias: "MinDensity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAX_DENSITY, alias: "MaxDensity", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRIM, alias: "Trim", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIGURATION_INFORMATION, alias: "ConfigurationInformation", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONFIGURATION_INFORMATION_DESCRIPTION, alias: "ConfigurationInformationDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAXIMUM_COLLATED_FILMS, alias: "MaximumCollatedFilms", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ILLUMINATION, alias: "Illumination", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFLECTED_AMBIENT_LIGHT, alias: "ReflectedAmbientLight", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_PIXEL_SPACING, alias: "PrinterPixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: REFERENCED_FILM_SESSION_SEQUENCE, alias: "ReferencedFilmSessionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_BOX_SEQUENCE, alias: "ReferencedImageBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE, alias: "ReferencedBasicAnnotationBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_POSITION, alias: "ImageBoxPosition", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POLARITY, alias: "Polarity", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_IMAGE_SIZE, alias: "RequestedImageSize", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_DECIMATE_CROP_BEHAVIOR, alias: "RequestedDecimateCropBehavior", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_RESOLUTION_ID, alias: "RequestedResolutionID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_IMAGE_SIZE_FLAG, alias: "RequestedImageSizeFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DECIMATE_CROP_RESULT, alias: "DecimateCropResult", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BASIC_GRAYSCALE_IMAGE_SEQUENCE, alias: "BasicGrayscaleImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BASIC_COLOR_IMAGE_SEQUENCE, alias: "BasicColorImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_OVERLAY_BOX_SEQUENCE, alias: "ReferencedImageOverlayBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_VOILUT_BOX_SEQUENCE, alias: "ReferencedVOILUTBoxSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANNOTATION_POSITION, alias: "AnnotationPosition", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXT_STRING, alias: "TextString", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OVERLAY_PLANE_SEQUENCE, alias: "ReferencedOverlayPlaneSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_OVERLAY_PLANE_GROUPS, alias: "ReferencedOverlayPlaneGroups", vr: VR::US, vm: (1, 99) },
    DataDictionaryEntryRef { tag: OVERLAY_PIXEL_DATA_SEQUENCE, alias: "OverlayPixelDataSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_MAGNIFICATION_TYPE, alias: "OverlayMagnificationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_SMOOTHING_TYPE, alias: "OverlaySmoothingType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_OR_IMAGE_MAGNIFICATION, alias: "OverlayOrImageMagnification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MAGNIFY_TO_NUMBER_OF_COLUMNS, alias: "MagnifyToNumberOfColumns", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_FOREGROUND_DENSITY, alias: "OverlayForegroundDensity", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_BACKGROUND_DENSITY, alias: "OverlayBackgroundDensity", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_MODE, alias: "OverlayMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THRESHOLD_DENSITY, alias: "ThresholdDensity", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_IMAGE_BOX_SEQUENCE_RETIRED, alias: "ReferencedImageBoxSequenceRetired", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_LUT_SEQUENCE, alias: "PresentationLUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_LUT_SHAPE, alias: "PresentationLUTShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PRESENTATION_LUT_SEQUENCE, alias: "ReferencedPresentationLUTSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINT_JOB_ID, alias: "PrintJobID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXECUTION_STATUS, alias: "ExecutionStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXECUTION_STATUS_INFO, alias: "ExecutionStatusInfo", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CREATION_DATE, alias: "CreationDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CREATION_TIME, alias: "CreationTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORIGINATOR, alias: "Originator", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DESTINATION_AE, alias: "DestinationAE", vr: VR::AE, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OWNER_ID, alias: "OwnerID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FILMS, alias: "NumberOfFilms", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PRINT_JOB_SEQUENCE_PULL_STORED_PRINT, alias: "ReferencedPrintJobSequencePullStoredPrint", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_STATUS, alias: "PrinterStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_STATUS_INFO, alias: "PrinterStatusInfo", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_NAME, alias: "PrinterName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINT_QUEUE_ID, alias: "PrintQueueID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QUEUE_STATUS, alias: "QueueStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINT_JOB_DESCRIPTION_SEQUENCE, alias: "PrintJobDescriptionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PRINT_JOB_SEQUENCE, alias: "ReferencedPrintJobSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINT_MANAGEMENT_CAPABILITIES_SEQUENCE, alias: "PrintManagementCapabilitiesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRINTER_CHARACTERISTICS_SEQUENCE, alias: "PrinterCharacteristicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FILM_BOX_CONTENT_SEQUENCE, alias: "FilmBoxContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_BOX_CONTENT_SEQUENCE, alias: "ImageBoxContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANNOTATION_CONTENT_SEQUENCE, alias: "AnnotationContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_OVERLAY_BOX_CONTENT_SEQUENCE, alias: "ImageOverlayBoxContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESENTATION_LUT_CONTENT_SEQUENCE, alias: "PresentationLUTContentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PROPOSED_STUDY_SEQUENCE, alias: "ProposedStudySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORIGINAL_IMAGE_SEQUENCE, alias: "OriginalImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LABEL_USING_INFORMATION_EXTRACTED_FROM_INSTANCES, alias: "LabelUsingInformationExtractedFromInstances", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LABEL_TEXT, alias: "LabelText", vr: VR::UT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LABEL_STYLE_SELECTION, alias: "LabelStyleSelection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEDIA_DISPOSITION, alias: "MediaDisposition", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BARCODE_VALUE, alias: "BarcodeValue", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BARCODE_SYMBOLOGY, alias: "BarcodeSymbology", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALLOW_MEDIA_SPLITTING, alias: "AllowMediaSplitting", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INCLUDE_NON_DICOM_OBJECTS, alias: "IncludeNonDICOMObjects", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INCLUDE_DISPLAY_APPLICATION, alias: "IncludeDisplayApplication", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESERVE_COMPOSITE_INSTANCES_AFTER_MEDIA_CREATION, alias: "PreserveCompositeInstancesAfterMediaCreation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_NUMBER_OF_PIECES_OF_MEDIA_CREATED, alias: "TotalNumberOfPiecesOfMediaCreated", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUESTED_MEDIA_APPLICATION_PROFILE, alias: "RequestedMediaApplicationProfile", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_STORAGE_MEDIA_SEQUENCE, alias: "ReferencedStorageMediaSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FAILURE_ATTRIBUTES, alias: "FailureAttributes", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ALLOW_LOSSY_COMPRESSION, alias: "AllowLossyCompression", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REQUEST_PRIORITY, alias: "RequestPriority", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_IMAGE_LABEL, alias: "RTImageLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_IMAGE_NAME, alias: "RTImageName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_IMAGE_DESCRIPTION, alias: "RTImageDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPORTED_VALUES_ORIGIN, alias: "ReportedValuesOrigin", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_IMAGE_PLANE, alias: "RTImagePlane", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: X_RAY_IMAGE_RECEPTOR_TRANSLATION, alias: "XRayImageReceptorTranslation", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: X_RAY_IMAGE_RECEPTOR_ANGLE, alias: "XRayImageReceptorAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_IMAGE_ORIENTATION, alias: "RTImageOrientation", vr: VR::DS, vm: (6, 6) },
    DataDictionaryEntryRef { tag: IMAGE_PLANE_PIXEL_SPACING, alias: "ImagePlanePixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RT_IMAGE_POSITION, alias: "RTImagePosition", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RADIATION_MACHINE_NAME, alias: "RadiationMachineName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_MACHINE_SAD, alias: "RadiationMachineSAD", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_MACHINE_SSD, alias: "RadiationMachineSSD", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_IMAGE_SID, alias: "RTImageSID", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_REFERENCE_OBJECT_DISTANCE, alias: "SourceToReferenceObjectDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_NUMBER, alias: "FractionNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPOSURE_SEQUENCE, alias: "ExposureSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: METERSET_EXPOSURE, alias: "MetersetExposure", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIAPHRAGM_POSITION, alias: "DiaphragmPosition", vr: VR::DS, vm: (4, 4) },
    DataDictionaryEntryRef { tag: FLUENCE_MAP_SEQUENCE, alias: "FluenceMapSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUENCE_DATA_SOURCE, alias: "FluenceDataSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUENCE_DATA_SCALE, alias: "FluenceDataScale", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_FLUENCE_MODE_SEQUENCE, alias: "PrimaryFluenceModeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUENCE_MODE, alias: "FluenceMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLUENCE_MODE_ID, alias: "FluenceModeID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_TYPE, alias: "DVHType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_UNITS, alias: "DoseUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_TYPE, alias: "DoseType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPATIAL_TRANSFORM_OF_DOSE, alias: "SpatialTransformOfDose", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_COMMENT, alias: "DoseComment", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NORMALIZATION_POINT, alias: "NormalizationPoint", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: DOSE_SUMMATION_TYPE, alias: "DoseSummationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GRID_FRAME_OFFSET_VECTOR, alias: "GridFrameOffsetVector", vr: VR::DS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: DOSE_GRID_SCALING, alias: "DoseGridScaling", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_DOSE_ROI_SEQUENCE, alias: "RTDoseROISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_VALUE, alias: "DoseValue", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TISSUE_HETEROGENEITY_CORRECTION, alias: "TissueHeterogeneityCorrection", vr: VR::CS, vm: (1, 3) },
    DataDictionaryEntryRef { tag: DVH_NORMALIZATION_POINT, alias: "DVHNormalizationPoint", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: DVH_NORMALIZATION_DOSE_VALUE, alias: "DVHNormalizationDoseValue", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_SEQUENCE, alias: "DVHSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_DOSE_SCALING, alias: "DVHDoseScaling", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_VOLUME_UNITS, alias: "DVHVolumeUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_NUMBER_OF_BINS, alias: "DVHNumberOfBins", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_DATA, alias: "DVHData", vr: VR::DS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: DVH_REFERENCED_ROI_SEQUENCE, alias: "DVHReferencedROISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVHROI_CONTRIBUTION_TYPE, alias: "DVHROIContributionType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_MINIMUM_DOSE, alias: "DVHMinimumDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_MAXIMUM_DOSE, alias: "DVHMaximumDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DVH_MEAN_DOSE, alias: "DVHMeanDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURE_SET_LABEL, alias: "StructureSetLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURE_SET_NAME, alias: "StructureSetName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURE_SET_DESCRIPTION, alias: "StructureSetDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURE_SET_DATE, alias: "StructureSetDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURE_SET_TIME, alias: "StructureSetTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FRAME_OF_REFERENCE_SEQUENCE, alias: "ReferencedFrameOfReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_REFERENCED_STUDY_SEQUENCE, alias: "RTReferencedStudySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_REFERENCED_SERIES_SEQUENCE, alias: "RTReferencedSeriesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_IMAGE_SEQUENCE, alias: "ContourImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PREDECESSOR_STRUCTURE_SET_SEQUENCE, alias: "PredecessorStructureSetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: STRUCTURE_SET_ROI_SEQUENCE, alias: "StructureSetROISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_NUMBER, alias: "ROINumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FRAME_OF_REFERENCE_UID, alias: "ReferencedFrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_NAME, alias: "ROIName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_DESCRIPTION, alias: "ROIDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_DISPLAY_COLOR, alias: "ROIDisplayColor", vr: VR::IS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ROI_VOLUME, alias: "ROIVolume", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_DATE_TIME, alias: "ROIDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_OBSERVATION_DATE_TIME, alias: "ROIObservationDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_RELATED_ROI_SEQUENCE, alias: "RTRelatedROISequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTROI_RELATIONSHIP, alias: "RTROIRelationship", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_GENERATION_ALGORITHM, alias: "ROIGenerationAlgorithm", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_DERIVATION_ALGORITHM_IDENTIFICATION_SEQUENCE, alias: "ROIDerivationAlgorithmIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_GENERATION_DESCRIPTION, alias: "ROIGenerationDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_CONTOUR_SEQUENCE, alias: "ROIContourSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_SEQUENCE, alias: "ContourSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_GEOMETRIC_TYPE, alias: "ContourGeometricType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_SLAB_THICKNESS, alias: "ContourSlabThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_OFFSET_VECTOR, alias: "ContourOffsetVector", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: NUMBER_OF_CONTOUR_POINTS, alias: "NumberOfContourPoints", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_NUMBER, alias: "ContourNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTACHED_CONTOURS, alias: "AttachedContours", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SOURCE_PIXEL_PLANES_CHARACTERISTICS_SEQUENCE, alias: "SourcePixelPlanesCharacteristicsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_SERIES_SEQUENCE, alias: "SourceSeriesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_SERIES_INFORMATION_SEQUENCE, alias: "SourceSeriesInformationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_CREATOR_SEQUENCE, alias: "ROICreatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_INTERPRETER_SEQUENCE, alias: "ROIInterpreterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_OBSERVATION_CONTEXT_CODE_SEQUENCE, alias: "ROIObservationContextCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTOUR_DATA, alias: "ContourData", vr: VR::DS, vm: (3, VM_N) },
    DataDictionaryEntryRef { tag: RTROI_OBSERVATIONS_SEQUENCE, alias: "RTROIObservationsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OBSERVATION_NUMBER, alias: "ObservationNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_ROI_NUMBER, alias: "ReferencedROINumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_OBSERVATION_LABEL, alias: "ROIObservationLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTROI_IDENTIFICATION_CODE_SEQUENCE, alias: "RTROIIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_OBSERVATION_DESCRIPTION, alias: "ROIObservationDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATED_RTROI_OBSERVATIONS_SEQUENCE, alias: "RelatedRTROIObservationsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RTROI_INTERPRETED_TYPE, alias: "RTROIInterpretedType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_INTERPRETER, alias: "ROIInterpreter", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_PHYSICAL_PROPERTIES_SEQUENCE, alias: "ROIPhysicalPropertiesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_PHYSICAL_PROPERTY, alias: "ROIPhysicalProperty", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_PHYSICAL_PROPERTY_VALUE, alias: "ROIPhysicalPropertyValue", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_ELEMENTAL_COMPOSITION_SEQUENCE, alias: "ROIElementalCompositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_ELEMENTAL_COMPOSITION_ATOMIC_NUMBER, alias: "ROIElementalCompositionAtomicNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_ELEMENTAL_COMPOSITION_ATOMIC_MASS_FRACTION, alias: "ROIElementalCompositionAtomicMassFraction", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDITIONAL_RTROI_IDENTIFICATION_CODE_SEQUENCE, alias: "AdditionalRTROIIdentificationCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_RELATIONSHIP_SEQUENCE, alias: "FrameOfReferenceRelationshipSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RELATED_FRAME_OF_REFERENCE_UID, alias: "RelatedFrameOfReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_TRANSFORMATION_TYPE, alias: "FrameOfReferenceTransformationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_TRANSFORMATION_MATRIX, alias: "FrameOfReferenceTransformationMatrix", vr: VR::DS, vm: (16, 16) },
    DataDictionaryEntryRef { tag: FRAME_OF_REFERENCE_TRANSFORMATION_COMMENT, alias: "FrameOfReferenceTransformationComment", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_DOSE_REFERENCE_SEQUENCE, alias: "MeasuredDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_DOSE_DESCRIPTION, alias: "MeasuredDoseDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_DOSE_TYPE, alias: "MeasuredDoseType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_DOSE_VALUE, alias: "MeasuredDoseValue", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_SESSION_BEAM_SEQUENCE, alias: "TreatmentSessionBeamSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_SESSION_ION_BEAM_SEQUENCE, alias: "TreatmentSessionIonBeamSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURRENT_FRACTION_NUMBER, alias: "CurrentFractionNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_CONTROL_POINT_DATE, alias: "TreatmentControlPointDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_CONTROL_POINT_TIME, alias: "TreatmentControlPointTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_TERMINATION_STATUS, alias: "TreatmentTerminationStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_TERMINATION_CODE, alias: "TreatmentTerminationCode", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_VERIFICATION_STATUS, alias: "TreatmentVerificationStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TREATMENT_RECORD_SEQUENCE, alias: "ReferencedTreatmentRecordSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_PRIMARY_METERSET, alias: "SpecifiedPrimaryMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_SECONDARY_METERSET, alias: "SpecifiedSecondaryMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_PRIMARY_METERSET, alias: "DeliveredPrimaryMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_SECONDARY_METERSET, alias: "DeliveredSecondaryMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_TREATMENT_TIME, alias: "SpecifiedTreatmentTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_TREATMENT_TIME, alias: "DeliveredTreatmentTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTROL_POINT_DELIVERY_SEQUENCE, alias: "ControlPointDeliverySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_CONTROL_POINT_DELIVERY_SEQUENCE, alias: "IonControlPointDeliverySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_METERSET, alias: "SpecifiedMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_METERSET, alias: "DeliveredMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: METERSET_RATE_SET, alias: "MetersetRateSet", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: METERSET_RATE_DELIVERED, alias: "MetersetRateDelivered", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_METERSETS_DELIVERED, alias: "ScanSpotMetersetsDelivered", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DOSE_RATE_DELIVERED, alias: "DoseRateDelivered", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_SUMMARY_CALCULATED_DOSE_REFERENCE_SEQUENCE, alias: "TreatmentSummaryCalculatedDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIRST_TREATMENT_DATE, alias: "FirstTreatmentDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MOST_RECENT_TREATMENT_DATE, alias: "MostRecentTreatmentDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRACTIONS_DELIVERED, alias: "NumberOfFractionsDelivered", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERRIDE_SEQUENCE, alias: "OverrideSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARAMETER_SEQUENCE_POINTER, alias: "ParameterSequencePointer", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERRIDE_PARAMETER_POINTER, alias: "OverrideParameterPointer", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARAMETER_ITEM_INDEX, alias: "ParameterItemIndex", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MEASURED_DOSE_REFERENCE_NUMBER, alias: "MeasuredDoseReferenceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARAMETER_POINTER, alias: "ParameterPointer", vr: VR::AT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERRIDE_REASON, alias: "OverrideReason", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARAMETER_VALUE_NUMBER, alias: "ParameterValueNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CORRECTED_PARAMETER_SEQUENCE, alias: "CorrectedParameterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CORRECTION_VALUE, alias: "CorrectionValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCULATED_DOSE_REFERENCE_SEQUENCE, alias: "CalculatedDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCULATED_DOSE_REFERENCE_NUMBER, alias: "CalculatedDoseReferenceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCULATED_DOSE_REFERENCE_DESCRIPTION, alias: "CalculatedDoseReferenceDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALCULATED_DOSE_REFERENCE_DOSE_VALUE, alias: "CalculatedDoseReferenceDoseValue", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_METERSET, alias: "StartMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: END_METERSET, alias: "EndMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_MEASURED_DOSE_REFERENCE_SEQUENCE, alias: "ReferencedMeasuredDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_MEASURED_DOSE_REFERENCE_NUMBER, alias: "ReferencedMeasuredDoseReferenceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CALCULATED_DOSE_REFERENCE_SEQUENCE, alias: "ReferencedCalculatedDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CALCULATED_DOSE_REFERENCE_NUMBER, alias: "ReferencedCalculatedDoseReferenceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_LEAF_PAIRS_SEQUENCE, alias: "BeamLimitingDeviceLeafPairsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_WEDGE_SEQUENCE, alias: "RecordedWedgeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_COMPENSATOR_SEQUENCE, alias: "RecordedCompensatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_BLOCK_SEQUENCE, alias: "RecordedBlockSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_SUMMARY_MEASURED_DOSE_REFERENCE_SEQUENCE, alias: "TreatmentSummaryMeasuredDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_SNOUT_SEQUENCE, alias: "RecordedSnoutSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_RANGE_SHIFTER_SEQUENCE, alias: "RecordedRangeShifterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_LATERAL_SPREADING_DEVICE_SEQUENCE, alias: "RecordedLateralSpreadingDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_RANGE_MODULATOR_SEQUENCE, alias: "RecordedRangeModulatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_SOURCE_SEQUENCE, alias: "RecordedSourceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_SERIAL_NUMBER, alias: "SourceSerialNumber", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_SESSION_APPLICATION_SETUP_SEQUENCE, alias: "TreatmentSessionApplicationSetupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_SETUP_CHECK, alias: "ApplicationSetupCheck", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_BRACHY_ACCESSORY_DEVICE_SEQUENCE, alias: "RecordedBrachyAccessoryDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BRACHY_ACCESSORY_DEVICE_NUMBER, alias: "ReferencedBrachyAccessoryDeviceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_CHANNEL_SEQUENCE, alias: "RecordedChannelSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_CHANNEL_TOTAL_TIME, alias: "SpecifiedChannelTotalTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_CHANNEL_TOTAL_TIME, alias: "DeliveredChannelTotalTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_NUMBER_OF_PULSES, alias: "SpecifiedNumberOfPulses", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_NUMBER_OF_PULSES, alias: "DeliveredNumberOfPulses", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECIFIED_PULSE_REPETITION_INTERVAL, alias: "SpecifiedPulseRepetitionInterval", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_PULSE_REPETITION_INTERVAL, alias: "DeliveredPulseRepetitionInterval", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_SOURCE_APPLICATOR_SEQUENCE, alias: "RecordedSourceApplicatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOURCE_APPLICATOR_NUMBER, alias: "ReferencedSourceApplicatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RECORDED_CHANNEL_SHIELD_SEQUENCE, alias: "RecordedChannelShieldSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CHANNEL_SHIELD_NUMBER, alias: "ReferencedChannelShieldNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE, alias: "BrachyControlPointDeliveredSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAFE_POSITION_EXIT_DATE, alias: "SafePositionExitDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAFE_POSITION_EXIT_TIME, alias: "SafePositionExitTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAFE_POSITION_RETURN_DATE, alias: "SafePositionReturnDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAFE_POSITION_RETURN_TIME, alias: "SafePositionReturnTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSE_SPECIFIC_BRACHY_CONTROL_POINT_DELIVERED_SEQUENCE, alias: "PulseSpecificBrachyControlPointDeliveredSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSE_NUMBER, alias: "PulseNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_PULSE_CONTROL_POINT_DELIVERED_SEQUENCE, alias: "BrachyPulseControlPointDeliveredSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURRENT_TREATMENT_STATUS, alias: "CurrentTreatmentStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_STATUS_COMMENT, alias: "TreatmentStatusComment", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_GROUP_SUMMARY_SEQUENCE, alias: "FractionGroupSummarySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FRACTION_NUMBER, alias: "ReferencedFractionNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_GROUP_TYPE, alias: "FractionGroupType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_STOPPER_POSITION, alias: "BeamStopperPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_STATUS_SUMMARY_SEQUENCE, alias: "FractionStatusSummarySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_DATE, alias: "TreatmentDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_TIME, alias: "TreatmentTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_PLAN_LABEL, alias: "RTPlanLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_PLAN_NAME, alias: "RTPlanName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_PLAN_DESCRIPTION, alias: "RTPlanDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_PLAN_DATE, alias: "RTPlanDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_PLAN_TIME, alias: "RTPlanTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_PROTOCOLS, alias: "TreatmentProtocols", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: PLAN_INTENT, alias: "PlanIntent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_SITES, alias: "TreatmentSites", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: RT_PLAN_GEOMETRY, alias: "RTPlanGeometry", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESCRIPTION_DESCRIPTION, alias: "PrescriptionDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_SEQUENCE, alias: "DoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_NUMBER, alias: "DoseReferenceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_UID, alias: "DoseReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_STRUCTURE_TYPE, alias: "DoseReferenceStructureType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_BEAM_ENERGY_UNIT, alias: "NominalBeamEnergyUnit", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_DESCRIPTION, alias: "DoseReferenceDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_POINT_COORDINATES, alias: "DoseReferencePointCoordinates", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: NOMINAL_PRIOR_DOSE, alias: "NominalPriorDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_REFERENCE_TYPE, alias: "DoseReferenceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONSTRAINT_WEIGHT, alias: "ConstraintWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERY_WARNING_DOSE, alias: "DeliveryWarningDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERY_MAXIMUM_DOSE, alias: "DeliveryMaximumDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_MINIMUM_DOSE, alias: "TargetMinimumDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_PRESCRIPTION_DOSE, alias: "TargetPrescriptionDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_MAXIMUM_DOSE, alias: "TargetMaximumDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_UNDERDOSE_VOLUME_FRACTION, alias: "TargetUnderdoseVolumeFraction", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORGAN_AT_RISK_FULL_VOLUME_DOSE, alias: "OrganAtRiskFullVolumeDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORGAN_AT_RISK_LIMIT_DOSE, alias: "OrganAtRiskLimitDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORGAN_AT_RISK_MAXIMUM_DOSE, alias: "OrganAtRiskMaximumDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ORGAN_AT_RISK_OVERDOSE_VOLUME_FRACTION, alias: "OrganAtRiskOverdoseVolumeFraction", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOLERANCE_TABLE_SEQUENCE, alias: "ToleranceTableSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOLERANCE_TABLE_NUMBER, alias: "ToleranceTableNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOLERANCE_TABLE_LABEL, alias: "ToleranceTableLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_ANGLE_TOLERANCE, alias: "GantryAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_ANGLE_TOLERANCE, alias: "BeamLimitingDeviceAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_TOLERANCE_SEQUENCE, alias: "BeamLimitingDeviceToleranceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_POSITION_TOLERANCE, alias: "BeamLimitingDevicePositionTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SNOUT_POSITION_TOLERANCE, alias: "SnoutPositionTolerance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_ANGLE_TOLERANCE, alias: "PatientSupportAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ECCENTRIC_ANGLE_TOLERANCE, alias: "TableTopEccentricAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_PITCH_ANGLE_TOLERANCE, alias: "TableTopPitchAngleTolerance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ROLL_ANGLE_TOLERANCE, alias: "TableTopRollAngleTolerance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_VERTICAL_POSITION_TOLERANCE, alias: "TableTopVerticalPositionTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LONGITUDINAL_POSITION_TOLERANCE, alias: "TableTopLongitudinalPositionTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LATERAL_POSITION_TOLERANCE, alias: "TableTopLateralPositionTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_PLAN_RELATIONSHIP, alias: "RTPlanRelationship", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_GROUP_SEQUENCE, alias: "FractionGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_GROUP_NUMBER, alias: "FractionGroupNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_GROUP_DESCRIPTION, alias: "FractionGroupDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRACTIONS_PLANNED, alias: "NumberOfFractionsPlanned", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRACTION_PATTERN_DIGITS_PER_DAY, alias: "NumberOfFractionPatternDigitsPerDay", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPEAT_FRACTION_CYCLE_LENGTH, alias: "RepeatFractionCycleLength", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FRACTION_PATTERN, alias: "FractionPattern", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_BEAMS, alias: "NumberOfBeams", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_SPECIFICATION_POINT, alias: "BeamDoseSpecificationPoint", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: REFERENCED_DOSE_REFERENCE_UID, alias: "ReferencedDoseReferenceUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE, alias: "BeamDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_METERSET, alias: "BeamMeterset", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_POINT_DEPTH, alias: "BeamDosePointDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_POINT_EQUIVALENT_DEPTH, alias: "BeamDosePointEquivalentDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_POINT_SSD, alias: "BeamDosePointSSD", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_MEANING, alias: "BeamDoseMeaning", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_VERIFICATION_CONTROL_POINT_SEQUENCE, alias: "BeamDoseVerificationControlPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AVERAGE_BEAM_DOSE_POINT_DEPTH, alias: "AverageBeamDosePointDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AVERAGE_BEAM_DOSE_POINT_EQUIVALENT_DEPTH, alias: "AverageBeamDosePointEquivalentDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AVERAGE_BEAM_DOSE_POINT_SSD, alias: "AverageBeamDosePointSSD", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_TYPE, alias: "BeamDoseType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALTERNATE_BEAM_DOSE, alias: "AlternateBeamDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALTERNATE_BEAM_DOSE_TYPE, alias: "AlternateBeamDoseType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEPTH_VALUE_AVERAGING_FLAG, alias: "DepthValueAveragingFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DOSE_POINT_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE, alias: "BeamDosePointSourceToExternalContourDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_BRACHY_APPLICATION_SETUPS, alias: "NumberOfBrachyApplicationSetups", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_APPLICATION_SETUP_DOSE_SPECIFICATION_POINT, alias: "BrachyApplicationSetupDoseSpecificationPoint", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: BRACHY_APPLICATION_SETUP_DOSE, alias: "BrachyApplicationSetupDose", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_SEQUENCE, alias: "BeamSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_MACHINE_NAME, alias: "TreatmentMachineName", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_DOSIMETER_UNIT, alias: "PrimaryDosimeterUnit", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_AXIS_DISTANCE, alias: "SourceAxisDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_SEQUENCE, alias: "BeamLimitingDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_BEAM_LIMITING_DEVICE_TYPE, alias: "RTBeamLimitingDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_BEAM_LIMITING_DEVICE_DISTANCE, alias: "SourceToBeamLimitingDeviceDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_BEAM_LIMITING_DEVICE_DISTANCE, alias: "IsocenterToBeamLimitingDeviceDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_LEAF_JAW_PAIRS, alias: "NumberOfLeafJawPairs", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LEAF_POSITION_BOUNDARIES, alias: "LeafPositionBoundaries", vr: VR::DS, vm: (3, VM_N) },
    DataDictionaryEntryRef { tag: BEAM_NUMBER, alias: "BeamNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_NAME, alias: "BeamName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DESCRIPTION, alias: "BeamDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_TYPE, alias: "BeamType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_DELIVERY_DURATION_LIMIT, alias: "BeamDeliveryDurationLimit", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_TYPE, alias: "RadiationType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HIGH_DOSE_TECHNIQUE_TYPE, alias: "HighDoseTechniqueType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_IMAGE_NUMBER, alias: "ReferenceImageNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLANNED_VERIFICATION_IMAGE_SEQUENCE, alias: "PlannedVerificationImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGING_DEVICE_SPECIFIC_ACQUISITION_PARAMETERS, alias: "ImagingDeviceSpecificAcquisitionParameters", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TREATMENT_DELIVERY_TYPE, alias: "TreatmentDeliveryType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_WEDGES, alias: "NumberOfWedges", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_SEQUENCE, alias: "WedgeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_NUMBER, alias: "WedgeNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_TYPE, alias: "WedgeType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ID, alias: "WedgeID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ANGLE, alias: "WedgeAngle", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_FACTOR, alias: "WedgeFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_WEDGE_TRAY_WATER_EQUIVALENT_THICKNESS, alias: "TotalWedgeTrayWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_ORIENTATION, alias: "WedgeOrientation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_WEDGE_TRAY_DISTANCE, alias: "IsocenterToWedgeTrayDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_WEDGE_TRAY_DISTANCE, alias: "SourceToWedgeTrayDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_THIN_EDGE_POSITION, alias: "WedgeThinEdgePosition", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOLUS_ID, alias: "BolusID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOLUS_DESCRIPTION, alias: "BolusDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EFFECTIVE_WEDGE_ANGLE, alias: "EffectiveWedgeAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_COMPENSATORS, alias: "NumberOfCompensators", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MATERIAL_ID, alias: "MaterialID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_COMPENSATOR_TRAY_FACTOR, alias: "TotalCompensatorTrayFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_SEQUENCE, alias: "CompensatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_NUMBER, alias: "CompensatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_ID, alias: "CompensatorID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_COMPENSATOR_TRAY_DISTANCE, alias: "SourceToCompensatorTrayDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_ROWS, alias: "CompensatorRows", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_COLUMNS, alias: "CompensatorColumns", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_PIXEL_SPACING, alias: "CompensatorPixelSpacing", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: COMPENSATOR_POSITION, alias: "CompensatorPosition", vr: VR::DS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: COMPENSATOR_TRANSMISSION_DATA, alias: "CompensatorTransmissionData", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COMPENSATOR_THICKNESS_DATA, alias: "CompensatorThicknessData", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_BOLI, alias: "NumberOfBoli", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_TYPE, alias: "CompensatorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_TRAY_ID, alias: "CompensatorTrayID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_BLOCKS, alias: "NumberOfBlocks", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_BLOCK_TRAY_FACTOR, alias: "TotalBlockTrayFactor", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_BLOCK_TRAY_WATER_EQUIVALENT_THICKNESS, alias: "TotalBlockTrayWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_SEQUENCE, alias: "BlockSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_TRAY_ID, alias: "BlockTrayID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_BLOCK_TRAY_DISTANCE, alias: "SourceToBlockTrayDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_BLOCK_TRAY_DISTANCE, alias: "IsocenterToBlockTrayDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_TYPE, alias: "BlockType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACCESSORY_CODE, alias: "AccessoryCode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_DIVERGENCE, alias: "BlockDivergence", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_MOUNTING_POSITION, alias: "BlockMountingPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_NUMBER, alias: "BlockNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_NAME, alias: "BlockName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_THICKNESS, alias: "BlockThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_TRANSMISSION, alias: "BlockTransmission", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_NUMBER_OF_POINTS, alias: "BlockNumberOfPoints", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_DATA, alias: "BlockData", vr: VR::DS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: APPLICATOR_SEQUENCE, alias: "ApplicatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_ID, alias: "ApplicatorID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_TYPE, alias: "ApplicatorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_DESCRIPTION, alias: "ApplicatorDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CUMULATIVE_DOSE_REFERENCE_COEFFICIENT, alias: "CumulativeDoseReferenceCoefficient", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINAL_CUMULATIVE_METERSET_WEIGHT, alias: "FinalCumulativeMetersetWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_CONTROL_POINTS, alias: "NumberOfControlPoints", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTROL_POINT_SEQUENCE, alias: "ControlPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTROL_POINT_INDEX, alias: "ControlPointIndex", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_BEAM_ENERGY, alias: "NominalBeamEnergy", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_RATE_SET, alias: "DoseRateSet", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_POSITION_SEQUENCE, alias: "WedgePositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WEDGE_POSITION, alias: "WedgePosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_POSITION_SEQUENCE, alias: "BeamLimitingDevicePositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LEAF_JAW_POSITIONS, alias: "LeafJawPositions", vr: VR::DS, vm: (2, VM_N) },
    DataDictionaryEntryRef { tag: GANTRY_ANGLE, alias: "GantryAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_ROTATION_DIRECTION, alias: "GantryRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_ANGLE, alias: "BeamLimitingDeviceAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_LIMITING_DEVICE_ROTATION_DIRECTION, alias: "BeamLimitingDeviceRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_ANGLE, alias: "PatientSupportAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_ROTATION_DIRECTION, alias: "PatientSupportRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ECCENTRIC_AXIS_DISTANCE, alias: "TableTopEccentricAxisDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ECCENTRIC_ANGLE, alias: "TableTopEccentricAngle", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ECCENTRIC_ROTATION_DIRECTION, alias: "TableTopEccentricRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_VERTICAL_POSITION, alias: "TableTopVerticalPosition", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LONGITUDINAL_POSITION, alias: "TableTopLongitudinalPosition", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LATERAL_POSITION, alias: "TableTopLateralPosition", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_POSITION, alias: "IsocenterPosition", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: SURFACE_ENTRY_POINT, alias: "SurfaceEntryPoint", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: SOURCE_TO_SURFACE_DISTANCE, alias: "SourceToSurfaceDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE, alias: "SourceToExternalContourDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXTERNAL_CONTOUR_ENTRY_POINT, alias: "ExternalContourEntryPoint", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CUMULATIVE_METERSET_WEIGHT, alias: "CumulativeMetersetWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_PITCH_ANGLE, alias: "TableTopPitchAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_PITCH_ROTATION_DIRECTION, alias: "TableTopPitchRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ROLL_ANGLE, alias: "TableTopRollAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_ROLL_ROTATION_DIRECTION, alias: "TableTopRollRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HEAD_FIXATION_ANGLE, alias: "HeadFixationAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_PITCH_ANGLE, alias: "GantryPitchAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_PITCH_ROTATION_DIRECTION, alias: "GantryPitchRotationDirection", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_PITCH_ANGLE_TOLERANCE, alias: "GantryPitchAngleTolerance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_EYE, alias: "FixationEye", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHAIR_HEAD_FRAME_POSITION, alias: "ChairHeadFramePosition", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HEAD_FIXATION_ANGLE_TOLERANCE, alias: "HeadFixationAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHAIR_HEAD_FRAME_POSITION_TOLERANCE, alias: "ChairHeadFramePositionTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_LIGHT_AZIMUTHAL_ANGLE_TOLERANCE, alias: "FixationLightAzimuthalAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_LIGHT_POLAR_ANGLE_TOLERANCE, alias: "FixationLightPolarAngleTolerance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SETUP_SEQUENCE, alias: "PatientSetupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SETUP_NUMBER, alias: "PatientSetupNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SETUP_LABEL, alias: "PatientSetupLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_ADDITIONAL_POSITION, alias: "PatientAdditionalPosition", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_SEQUENCE, alias: "FixationDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_TYPE, alias: "FixationDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_LABEL, alias: "FixationDeviceLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_DESCRIPTION, alias: "FixationDeviceDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_POSITION, alias: "FixationDevicePosition", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_PITCH_ANGLE, alias: "FixationDevicePitchAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_DEVICE_ROLL_ANGLE, alias: "FixationDeviceRollAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHIELDING_DEVICE_SEQUENCE, alias: "ShieldingDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHIELDING_DEVICE_TYPE, alias: "ShieldingDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHIELDING_DEVICE_LABEL, alias: "ShieldingDeviceLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHIELDING_DEVICE_DESCRIPTION, alias: "ShieldingDeviceDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHIELDING_DEVICE_POSITION, alias: "ShieldingDevicePosition", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_TECHNIQUE, alias: "SetupTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_TECHNIQUE_DESCRIPTION, alias: "SetupTechniqueDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_DEVICE_SEQUENCE, alias: "SetupDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_DEVICE_TYPE, alias: "SetupDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_DEVICE_LABEL, alias: "SetupDeviceLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_DEVICE_DESCRIPTION, alias: "SetupDeviceDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_DEVICE_PARAMETER, alias: "SetupDeviceParameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_REFERENCE_DESCRIPTION, alias: "SetupReferenceDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_VERTICAL_SETUP_DISPLACEMENT, alias: "TableTopVerticalSetupDisplacement", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LONGITUDINAL_SETUP_DISPLACEMENT, alias: "TableTopLongitudinalSetupDisplacement", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TABLE_TOP_LATERAL_SETUP_DISPLACEMENT, alias: "TableTopLateralSetupDisplacement", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_TREATMENT_TECHNIQUE, alias: "BrachyTreatmentTechnique", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_TREATMENT_TYPE, alias: "BrachyTreatmentType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_MACHINE_SEQUENCE, alias: "TreatmentMachineSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_SEQUENCE, alias: "SourceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_NUMBER, alias: "SourceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TYPE, alias: "SourceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_MANUFACTURER, alias: "SourceManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTIVE_SOURCE_DIAMETER, alias: "ActiveSourceDiameter", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ACTIVE_SOURCE_LENGTH, alias: "ActiveSourceLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_MODEL_ID, alias: "SourceModelID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_DESCRIPTION, alias: "SourceDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_ENCAPSULATION_NOMINAL_THICKNESS, alias: "SourceEncapsulationNominalThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_ENCAPSULATION_NOMINAL_TRANSMISSION, alias: "SourceEncapsulationNominalTransmission", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_ISOTOPE_NAME, alias: "SourceIsotopeName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_ISOTOPE_HALF_LIFE, alias: "SourceIsotopeHalfLife", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_STRENGTH_UNITS, alias: "SourceStrengthUnits", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_AIR_KERMA_RATE, alias: "ReferenceAirKermaRate", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_STRENGTH, alias: "SourceStrength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_STRENGTH_REFERENCE_DATE, alias: "SourceStrengthReferenceDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_STRENGTH_REFERENCE_TIME, alias: "SourceStrengthReferenceTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_SETUP_SEQUENCE, alias: "ApplicationSetupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_SETUP_TYPE, alias: "ApplicationSetupType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_SETUP_NUMBER, alias: "ApplicationSetupNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_SETUP_NAME, alias: "ApplicationSetupName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATION_SETUP_MANUFACTURER, alias: "ApplicationSetupManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_NUMBER, alias: "TemplateNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_TYPE, alias: "TemplateType", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEMPLATE_NAME, alias: "TemplateName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_REFERENCE_AIR_KERMA, alias: "TotalReferenceAirKerma", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_SEQUENCE, alias: "BrachyAccessoryDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_NUMBER, alias: "BrachyAccessoryDeviceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_ID, alias: "BrachyAccessoryDeviceID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_TYPE, alias: "BrachyAccessoryDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_NAME, alias: "BrachyAccessoryDeviceName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_NOMINAL_THICKNESS, alias: "BrachyAccessoryDeviceNominalThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_ACCESSORY_DEVICE_NOMINAL_TRANSMISSION, alias: "BrachyAccessoryDeviceNominalTransmission", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_EFFECTIVE_LENGTH, alias: "ChannelEffectiveLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_INNER_LENGTH, alias: "ChannelInnerLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AFTERLOADER_CHANNEL_ID, alias: "AfterloaderChannelID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_TIP_LENGTH, alias: "SourceApplicatorTipLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SEQUENCE, alias: "ChannelSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_NUMBER, alias: "ChannelNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_LENGTH, alias: "ChannelLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_TOTAL_TIME, alias: "ChannelTotalTime", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_MOVEMENT_TYPE, alias: "SourceMovementType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PULSES, alias: "NumberOfPulses", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PULSE_REPETITION_INTERVAL, alias: "PulseRepetitionInterval", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_NUMBER, alias: "SourceApplicatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_ID, alias: "SourceApplicatorID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_TYPE, alias: "SourceApplicatorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_NAME, alias: "SourceApplicatorName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_LENGTH, alias: "SourceApplicatorLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_MANUFACTURER, alias: "SourceApplicatorManufacturer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_WALL_NOMINAL_THICKNESS, alias: "SourceApplicatorWallNominalThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_WALL_NOMINAL_TRANSMISSION, alias: "SourceApplicatorWallNominalTransmission", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_APPLICATOR_STEP_SIZE, alias: "SourceApplicatorStepSize", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_SHAPE_REFERENCED_ROI_NUMBER, alias: "ApplicatorShapeReferencedROINumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFER_TUBE_NUMBER, alias: "TransferTubeNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSFER_TUBE_LENGTH, alias: "TransferTubeLength", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SHIELD_SEQUENCE, alias: "ChannelShieldSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SHIELD_NUMBER, alias: "ChannelShieldNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SHIELD_ID, alias: "ChannelShieldID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SHIELD_NAME, alias: "ChannelShieldName", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SHIELD_NOMINAL_THICKNESS, alias: "ChannelShieldNominalThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_SHIELD_NOMINAL_TRANSMISSION, alias: "ChannelShieldNominalTransmission", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FINAL_CUMULATIVE_TIME_WEIGHT, alias: "FinalCumulativeTimeWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_CONTROL_POINT_SEQUENCE, alias: "BrachyControlPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTROL_POINT_RELATIVE_POSITION, alias: "ControlPointRelativePosition", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTROL_POINT3_D_POSITION, alias: "ControlPoint3DPosition", vr: VR::DS, vm: (3, 3) },
    DataDictionaryEntryRef { tag: CUMULATIVE_TIME_WEIGHT, alias: "CumulativeTimeWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_DIVERGENCE, alias: "CompensatorDivergence", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_MOUNTING_POSITION, alias: "CompensatorMountingPosition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_COMPENSATOR_DISTANCE, alias: "SourceToCompensatorDistance", vr: VR::DS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: TOTAL_COMPENSATOR_TRAY_WATER_EQUIVALENT_THICKNESS, alias: "TotalCompensatorTrayWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_COMPENSATOR_TRAY_DISTANCE, alias: "IsocenterToCompensatorTrayDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_COLUMN_OFFSET, alias: "CompensatorColumnOffset", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_COMPENSATOR_DISTANCES, alias: "IsocenterToCompensatorDistances", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COMPENSATOR_RELATIVE_STOPPING_POWER_RATIO, alias: "CompensatorRelativeStoppingPowerRatio", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_MILLING_TOOL_DIAMETER, alias: "CompensatorMillingToolDiameter", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_RANGE_COMPENSATOR_SEQUENCE, alias: "IonRangeCompensatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COMPENSATOR_DESCRIPTION, alias: "CompensatorDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_MASS_NUMBER, alias: "RadiationMassNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_ATOMIC_NUMBER, alias: "RadiationAtomicNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_CHARGE_STATE, alias: "RadiationChargeState", vr: VR::SS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_MODE, alias: "ScanMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MODULATED_SCAN_MODE_TYPE, alias: "ModulatedScanModeType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: VIRTUAL_SOURCE_AXIS_DISTANCES, alias: "VirtualSourceAxisDistances", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: SNOUT_SEQUENCE, alias: "SnoutSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SNOUT_POSITION, alias: "SnoutPosition", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SNOUT_ID, alias: "SnoutID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_RANGE_SHIFTERS, alias: "NumberOfRangeShifters", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_SEQUENCE, alias: "RangeShifterSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_NUMBER, alias: "RangeShifterNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_ID, alias: "RangeShifterID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_TYPE, alias: "RangeShifterType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_DESCRIPTION, alias: "RangeShifterDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_LATERAL_SPREADING_DEVICES, alias: "NumberOfLateralSpreadingDevices", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_SEQUENCE, alias: "LateralSpreadingDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_NUMBER, alias: "LateralSpreadingDeviceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_ID, alias: "LateralSpreadingDeviceID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_TYPE, alias: "LateralSpreadingDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_DESCRIPTION, alias: "LateralSpreadingDeviceDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_WATER_EQUIVALENT_THICKNESS, alias: "LateralSpreadingDeviceWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_RANGE_MODULATORS, alias: "NumberOfRangeModulators", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_SEQUENCE, alias: "RangeModulatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_NUMBER, alias: "RangeModulatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_ID, alias: "RangeModulatorID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_TYPE, alias: "RangeModulatorType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_DESCRIPTION, alias: "RangeModulatorDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_CURRENT_MODULATION_ID, alias: "BeamCurrentModulationID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_TYPE, alias: "PatientSupportType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_ID, alias: "PatientSupportID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_ACCESSORY_CODE, alias: "PatientSupportAccessoryCode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRAY_ACCESSORY_CODE, alias: "TrayAccessoryCode", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_LIGHT_AZIMUTHAL_ANGLE, alias: "FixationLightAzimuthalAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIXATION_LIGHT_POLAR_ANGLE, alias: "FixationLightPolarAngle", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: METERSET_RATE, alias: "MetersetRate", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_SETTINGS_SEQUENCE, alias: "RangeShifterSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_SETTING, alias: "RangeShifterSetting", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_RANGE_SHIFTER_DISTANCE, alias: "IsocenterToRangeShifterDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_SHIFTER_WATER_EQUIVALENT_THICKNESS, alias: "RangeShifterWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_SETTINGS_SEQUENCE, alias: "LateralSpreadingDeviceSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LATERAL_SPREADING_DEVICE_SETTING, alias: "LateralSpreadingDeviceSetting", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_LATERAL_SPREADING_DEVICE_DISTANCE, alias: "IsocenterToLateralSpreadingDeviceDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_SETTINGS_SEQUENCE, alias: "RangeModulatorSettingsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_GATING_START_VALUE, alias: "RangeModulatorGatingStartValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_GATING_STOP_VALUE, alias: "RangeModulatorGatingStopValue", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_GATING_START_WATER_EQUIVALENT_THICKNESS, alias: "RangeModulatorGatingStartWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RANGE_MODULATOR_GATING_STOP_WATER_EQUIVALENT_THICKNESS, alias: "RangeModulatorGatingStopWaterEquivalentThickness", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_RANGE_MODULATOR_DISTANCE, alias: "IsocenterToRangeModulatorDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_TUNE_ID, alias: "ScanSpotTuneID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_PRESCRIBED_INDICES, alias: "ScanSpotPrescribedIndices", vr: VR::IS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SCAN_SPOT_POSITIONS, alias: "NumberOfScanSpotPositions", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_REORDERED, alias: "ScanSpotReordered", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_POSITION_MAP, alias: "ScanSpotPositionMap", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_REORDERING_ALLOWED, alias: "ScanSpotReorderingAllowed", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_SPOT_METERSET_WEIGHTS, alias: "ScanSpotMetersetWeights", vr: VR::FL, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: SCANNING_SPOT_SIZE, alias: "ScanningSpotSize", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: NUMBER_OF_PAINTINGS, alias: "NumberOfPaintings", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_TOLERANCE_TABLE_SEQUENCE, alias: "IonToleranceTableSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_BEAM_SEQUENCE, alias: "IonBeamSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_BEAM_LIMITING_DEVICE_SEQUENCE, alias: "IonBeamLimitingDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_BLOCK_SEQUENCE, alias: "IonBlockSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_CONTROL_POINT_SEQUENCE, alias: "IonControlPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_WEDGE_SEQUENCE, alias: "IonWedgeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ION_WEDGE_POSITION_SEQUENCE, alias: "IonWedgePositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SETUP_IMAGE_SEQUENCE, alias: "ReferencedSetupImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SETUP_IMAGE_COMMENT, alias: "SetupImageComment", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MOTION_SYNCHRONIZATION_SEQUENCE, alias: "MotionSynchronizationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CONTROL_POINT_ORIENTATION, alias: "ControlPointOrientation", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: GENERAL_ACCESSORY_SEQUENCE, alias: "GeneralAccessorySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_ACCESSORY_ID, alias: "GeneralAccessoryID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_ACCESSORY_DESCRIPTION, alias: "GeneralAccessoryDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_ACCESSORY_TYPE, alias: "GeneralAccessoryType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GENERAL_ACCESSORY_NUMBER, alias: "GeneralAccessoryNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_GENERAL_ACCESSORY_DISTANCE, alias: "SourceToGeneralAccessoryDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ISOCENTER_TO_GENERAL_ACCESSORY_DISTANCE, alias: "IsocenterToGeneralAccessoryDistance", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_GEOMETRY_SEQUENCE, alias: "ApplicatorGeometrySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_APERTURE_SHAPE, alias: "ApplicatorApertureShape", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_OPENING, alias: "ApplicatorOpening", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_OPENING_X, alias: "ApplicatorOpeningX", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPLICATOR_OPENING_Y, alias: "ApplicatorOpeningY", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_APPLICATOR_MOUNTING_POSITION_DISTANCE, alias: "SourceToApplicatorMountingPositionDistance", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_BLOCK_SLAB_ITEMS, alias: "NumberOfBlockSlabItems", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_SLAB_SEQUENCE, alias: "BlockSlabSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_SLAB_THICKNESS, alias: "BlockSlabThickness", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BLOCK_SLAB_NUMBER, alias: "BlockSlabNumber", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_MOTION_CONTROL_SEQUENCE, alias: "DeviceMotionControlSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_MOTION_EXECUTION_MODE, alias: "DeviceMotionExecutionMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_MOTION_OBSERVATION_MODE, alias: "DeviceMotionObservationMode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DEVICE_MOTION_PARAMETER_CODE_SEQUENCE, alias: "DeviceMotionParameterCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTAL_DEPTH_FRACTION, alias: "DistalDepthFraction", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTAL_DEPTH, alias: "DistalDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NOMINAL_RANGE_MODULATION_FRACTIONS, alias: "NominalRangeModulationFractions", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: NOMINAL_RANGE_MODULATED_REGION_DEPTHS, alias: "NominalRangeModulatedRegionDepths", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DEPTH_DOSE_PARAMETERS_SEQUENCE, alias: "DepthDoseParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_DEPTH_DOSE_PARAMETERS_SEQUENCE, alias: "DeliveredDepthDoseParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_DISTAL_DEPTH_FRACTION, alias: "DeliveredDistalDepthFraction", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_DISTAL_DEPTH, alias: "DeliveredDistalDepth", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERED_NOMINAL_RANGE_MODULATION_FRACTIONS, alias: "DeliveredNominalRangeModulationFractions", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DELIVERED_NOMINAL_RANGE_MODULATED_REGION_DEPTHS, alias: "DeliveredNominalRangeModulatedRegionDepths", vr: VR::FL, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DELIVERED_REFERENCE_DOSE_DEFINITION, alias: "DeliveredReferenceDoseDefinition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_DOSE_DEFINITION, alias: "ReferenceDoseDefinition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_CONTROL_POINT_INDEX, alias: "RTControlPointIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_GENERATION_MODE_INDEX, alias: "RadiationGenerationModeIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_DEFINED_DEVICE_INDEX, alias: "ReferencedDefinedDeviceIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_IDENTIFICATION_INDEX, alias: "RadiationDoseIdentificationIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_RT_CONTROL_POINTS, alias: "NumberOfRTControlPoints", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RADIATION_GENERATION_MODE_INDEX, alias: "ReferencedRadiationGenerationModeIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_POSITION_INDEX, alias: "TreatmentPositionIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_DEVICE_INDEX, alias: "ReferencedDeviceIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_POSITION_GROUP_LABEL, alias: "TreatmentPositionGroupLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_POSITION_GROUP_UID, alias: "TreatmentPositionGroupUID", vr: VR::UI, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_POSITION_GROUP_SEQUENCE, alias: "TreatmentPositionGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TREATMENT_POSITION_INDEX, alias: "ReferencedTreatmentPositionIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RADIATION_DOSE_IDENTIFICATION_INDEX, alias: "ReferencedRadiationDoseIdentificationIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_HOLDER_WATER_EQUIVALENT_THICKNESS, alias: "RTAccessoryHolderWaterEquivalentThickness", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RT_ACCESSORY_HOLDER_DEVICE_INDEX, alias: "ReferencedRTAccessoryHolderDeviceIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_HOLDER_SLOT_EXISTENCE_FLAG, alias: "RTAccessoryHolderSlotExistenceFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_HOLDER_SLOT_SEQUENCE, alias: "RTAccessoryHolderSlotSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_HOLDER_SLOT_ID, alias: "RTAccessoryHolderSlotID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_HOLDER_SLOT_DISTANCE, alias: "RTAccessoryHolderSlotDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_SLOT_DISTANCE, alias: "RTAccessorySlotDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_HOLDER_DEFINITION_SEQUENCE, alias: "RTAccessoryHolderDefinitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_ACCESSORY_DEVICE_SLOT_ID, alias: "RTAccessoryDeviceSlotID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_RADIATION_SEQUENCE, alias: "RTRadiationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_SEQUENCE, alias: "RadiationDoseSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_IDENTIFICATION_SEQUENCE, alias: "RadiationDoseIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_IDENTIFICATION_LABEL, alias: "RadiationDoseIdentificationLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_DOSE_TYPE, alias: "ReferenceDoseType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRIMARY_DOSE_VALUE_INDICATOR, alias: "PrimaryDoseValueIndicator", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_VALUES_SEQUENCE, alias: "DoseValuesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_VALUE_PURPOSE, alias: "DoseValuePurpose", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: REFERENCE_DOSE_POINT_COORDINATES, alias: "ReferenceDosePointCoordinates", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_VALUES_PARAMETERS_SEQUENCE, alias: "RadiationDoseValuesParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: METERSET_TO_DOSE_MAPPING_SEQUENCE, alias: "MetersetToDoseMappingSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPECTED_IN_VIVO_MEASUREMENT_VALUES_SEQUENCE, alias: "ExpectedInVivoMeasurementValuesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXPECTED_IN_VIVO_MEASUREMENT_VALUE_INDEX, alias: "ExpectedInVivoMeasurementValueIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_IN_VIVO_MEASUREMENT_LABEL, alias: "RadiationDoseInVivoMeasurementLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_CENTRAL_AXIS_DISPLACEMENT, alias: "RadiationDoseCentralAxisDisplacement", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_VALUE, alias: "RadiationDoseValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_SOURCE_TO_SKIN_DISTANCE, alias: "RadiationDoseSourceToSkinDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_MEASUREMENT_POINT_COORDINATES, alias: "RadiationDoseMeasurementPointCoordinates", vr: VR::FD, vm: (3, 3) },
    DataDictionaryEntryRef { tag: RADIATION_DOSE_SOURCE_TO_EXTERNAL_CONTOUR_DISTANCE, alias: "RadiationDoseSourceToExternalContourDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_TOLERANCE_SET_SEQUENCE, alias: "RTToleranceSetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_TOLERANCE_SET_LABEL, alias: "RTToleranceSetLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATTRIBUTE_TOLERANCE_VALUES_SEQUENCE, alias: "AttributeToleranceValuesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOLERANCE_VALUE, alias: "ToleranceValue", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PATIENT_SUPPORT_POSITION_TOLERANCE_SEQUENCE, alias: "PatientSupportPositionToleranceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_TIME_LIMIT, alias: "TreatmentTimeLimit", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: C_ARM_PHOTON_ELECTRON_CONTROL_POINT_SEQUENCE, alias: "CArmPhotonElectronControlPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RT_RADIATION_SEQUENCE, alias: "ReferencedRTRadiationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RT_INSTANCE_SEQUENCE, alias: "ReferencedRTInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RT_PATIENT_SETUP_SEQUENCE, alias: "ReferencedRTPatientSetupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_TO_PATIENT_SURFACE_DISTANCE, alias: "SourceToPatientSurfaceDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_MACHINE_SPECIAL_MODE_CODE_SEQUENCE, alias: "TreatmentMachineSpecialModeCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTENDED_NUMBER_OF_FRACTIONS, alias: "IntendedNumberOfFractions", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_RADIATION_SET_INTENT, alias: "RTRadiationSetIntent", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_RADIATION_PHYSICAL_AND_GEOMETRIC_CONTENT_DETAIL_FLAG, alias: "RTRadiationPhysicalAndGeometricContentDetailFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_RECORD_FLAG, alias: "RTRecordFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_DEVICE_IDENTIFICATION_SEQUENCE, alias: "TreatmentDeviceIdentificationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RT_PHYSICIAN_INTENT_SEQUENCE, alias: "ReferencedRTPhysicianIntentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CUMULATIVE_METERSET, alias: "CumulativeMeterset", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERY_RATE, alias: "DeliveryRate", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELIVERY_RATE_UNIT_SEQUENCE, alias: "DeliveryRateUnitSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TREATMENT_POSITION_SEQUENCE, alias: "TreatmentPositionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_SOURCE_AXIS_DISTANCE, alias: "RadiationSourceAxisDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_RT_BEAM_LIMITING_DEVICES, alias: "NumberOfRTBeamLimitingDevices", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_BEAM_LIMITING_DEVICE_PROXIMAL_DISTANCE, alias: "RTBeamLimitingDeviceProximalDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RT_BEAM_LIMITING_DEVICE_DISTAL_DISTANCE, alias: "RTBeamLimitingDeviceDistalDistance", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PARAMETER_VALUE_NUMBER_CODE_SEQUENCE, alias: "ParameterValueNumberCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_GENERATION_MODE_SEQUENCE, alias: "RadiationGenerationModeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RADIATION_GENERATION_MODE_INDEX_SEQUENCE, alias: "RadiationGenerationModeIndexSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RT_PLAN_SEQUENCE, alias: "ReferencedRTPlanSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BEAM_SEQUENCE, alias: "ReferencedBeamSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BEAM_NUMBER, alias: "ReferencedBeamNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_REFERENCE_IMAGE_NUMBER, alias: "ReferencedReferenceImageNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: START_CUMULATIVE_METERSET_WEIGHT, alias: "StartCumulativeMetersetWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: END_CUMULATIVE_METERSET_WEIGHT, alias: "EndCumulativeMetersetWeight", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BRACHY_APPLICATION_SETUP_SEQUENCE, alias: "ReferencedBrachyApplicationSetupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BRACHY_APPLICATION_SETUP_NUMBER, alias: "ReferencedBrachyApplicationSetupNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_SOURCE_NUMBER, alias: "ReferencedSourceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FRACTION_GROUP_SEQUENCE, alias: "ReferencedFractionGroupSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_FRACTION_GROUP_NUMBER, alias: "ReferencedFractionGroupNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_VERIFICATION_IMAGE_SEQUENCE, alias: "ReferencedVerificationImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_REFERENCE_IMAGE_SEQUENCE, alias: "ReferencedReferenceImageSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_DOSE_REFERENCE_SEQUENCE, alias: "ReferencedDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_DOSE_REFERENCE_NUMBER, alias: "ReferencedDoseReferenceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BRACHY_REFERENCED_DOSE_REFERENCE_SEQUENCE, alias: "BrachyReferencedDoseReferenceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_STRUCTURE_SET_SEQUENCE, alias: "ReferencedStructureSetSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PATIENT_SETUP_NUMBER, alias: "ReferencedPatientSetupNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_DOSE_SEQUENCE, alias: "ReferencedDoseSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TOLERANCE_TABLE_NUMBER, alias: "ReferencedToleranceTableNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BOLUS_SEQUENCE, alias: "ReferencedBolusSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_WEDGE_NUMBER, alias: "ReferencedWedgeNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_COMPENSATOR_NUMBER, alias: "ReferencedCompensatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_BLOCK_NUMBER, alias: "ReferencedBlockNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CONTROL_POINT_INDEX, alias: "ReferencedControlPointIndex", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_CONTROL_POINT_SEQUENCE, alias: "ReferencedControlPointSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_START_CONTROL_POINT_INDEX, alias: "ReferencedStartControlPointIndex", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_STOP_CONTROL_POINT_INDEX, alias: "ReferencedStopControlPointIndex", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RANGE_SHIFTER_NUMBER, alias: "ReferencedRangeShifterNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_LATERAL_SPREADING_DEVICE_NUMBER, alias: "ReferencedLateralSpreadingDeviceNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_RANGE_MODULATOR_NUMBER, alias: "ReferencedRangeModulatorNumber", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OMITTED_BEAM_TASK_SEQUENCE, alias: "OmittedBeamTaskSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_OMISSION, alias: "ReasonForOmission", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REASON_FOR_OMISSION_DESCRIPTION, alias: "ReasonForOmissionDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRESCRIPTION_OVERVIEW_SEQUENCE, alias: "PrescriptionOverviewSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_PRESCRIPTION_DOSE, alias: "TotalPrescriptionDose", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLAN_OVERVIEW_SEQUENCE, alias: "PlanOverviewSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PLAN_OVERVIEW_INDEX, alias: "PlanOverviewIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PLAN_OVERVIEW_INDEX, alias: "ReferencedPlanOverviewIndex", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRACTIONS_INCLUDED, alias: "NumberOfFractionsIncluded", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOSE_CALIBRATION_CONDITIONS_SEQUENCE, alias: "DoseCalibrationConditionsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ABSORBED_DOSE_TO_METERSET_RATIO, alias: "AbsorbedDoseToMetersetRatio", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DELINEATED_RADIATION_FIELD_SIZE, alias: "DelineatedRadiationFieldSize", vr: VR::FD, vm: (2, 2) },
    DataDictionaryEntryRef { tag: DOSE_CALIBRATION_CONDITIONS_VERIFIED_FLAG, alias: "DoseCalibrationConditionsVerifiedFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CALIBRATION_REFERENCE_POINT_DEPTH, alias: "CalibrationReferencePointDepth", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GATING_BEAM_HOLD_TRANSITION_SEQUENCE, alias: "GatingBeamHoldTransitionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_HOLD_TRANSITION, alias: "BeamHoldTransition", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_HOLD_TRANSITION_DATE_TIME, alias: "BeamHoldTransitionDateTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_HOLD_ORIGINATING_DEVICE_SEQUENCE, alias: "BeamHoldOriginatingDeviceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BEAM_HOLD_TRANSITION_TRIGGER_SOURCE, alias: "BeamHoldTransitionTriggerSource", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: APPROVAL_STATUS, alias: "ApprovalStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REVIEW_DATE, alias: "ReviewDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REVIEW_TIME, alias: "ReviewTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REVIEWER_NAME, alias: "ReviewerName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ARBITRARY, alias: "Arbitrary", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TEXT_COMMENTS, alias: "TextComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESULTS_ID, alias: "ResultsID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESULTS_ID_ISSUER, alias: "ResultsIDIssuer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_INTERPRETATION_SEQUENCE, alias: "ReferencedInterpretationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REPORT_PRODUCTION_STATUS_TRIAL, alias: "ReportProductionStatusTrial", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_RECORDED_DATE, alias: "InterpretationRecordedDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_RECORDED_TIME, alias: "InterpretationRecordedTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_RECORDER, alias: "InterpretationRecorder", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCE_TO_RECORDED_SOUND, alias: "ReferenceToRecordedSound", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_TRANSCRIPTION_DATE, alias: "InterpretationTranscriptionDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_TRANSCRIPTION_TIME, alias: "InterpretationTranscriptionTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_TRANSCRIBER, alias: "InterpretationTranscriber", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_TEXT, alias: "InterpretationText", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_AUTHOR, alias: "InterpretationAuthor", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_APPROVER_SEQUENCE, alias: "InterpretationApproverSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_APPROVAL_DATE, alias: "InterpretationApprovalDate", vr: VR::DA, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_APPROVAL_TIME, alias: "InterpretationApprovalTime", vr: VR::TM, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHYSICIAN_APPROVING_INTERPRETATION, alias: "PhysicianApprovingInterpretation", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_DIAGNOSIS_DESCRIPTION, alias: "InterpretationDiagnosisDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_DIAGNOSIS_CODE_SEQUENCE, alias: "InterpretationDiagnosisCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESULTS_DISTRIBUTION_LIST_SEQUENCE, alias: "ResultsDistributionListSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTRIBUTION_NAME, alias: "DistributionName", vr: VR::PN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DISTRIBUTION_ADDRESS, alias: "DistributionAddress", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_ID, alias: "InterpretationID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_ID_ISSUER, alias: "InterpretationIDIssuer", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_TYPE_ID, alias: "InterpretationTypeID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERPRETATION_STATUS_ID, alias: "InterpretationStatusID", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMPRESSIONS, alias: "Impressions", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: RESULTS_COMMENTS, alias: "ResultsComments", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: LOW_ENERGY_DETECTORS, alias: "LowEnergyDetectors", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: HIGH_ENERGY_DETECTORS, alias: "HighEnergyDetectors", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_GEOMETRY_SEQUENCE, alias: "DetectorGeometrySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREAT_ROI_VOXEL_SEQUENCE, alias: "ThreatROIVoxelSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREAT_ROI_BASE, alias: "ThreatROIBase", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: THREAT_ROI_EXTENTS, alias: "ThreatROIExtents", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: THREAT_ROI_BITMAP, alias: "ThreatROIBitmap", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_ID, alias: "RouteSegmentID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: GANTRY_TYPE, alias: "GantryType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OOI_OWNER_TYPE, alias: "OOIOwnerType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_SEQUENCE, alias: "RouteSegmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: POTENTIAL_THREAT_OBJECT_ID, alias: "PotentialThreatObjectID", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREAT_SEQUENCE, alias: "ThreatSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREAT_CATEGORY, alias: "ThreatCategory", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREAT_CATEGORY_DESCRIPTION, alias: "ThreatCategoryDescription", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATD_ABILITY_ASSESSMENT, alias: "ATDAbilityAssessment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATD_ASSESSMENT_FLAG, alias: "ATDAssessmentFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATD_ASSESSMENT_PROBABILITY, alias: "ATDAssessmentProbability", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MASS, alias: "Mass", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DENSITY, alias: "Density", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: Z_EFFECTIVE, alias: "ZEffective", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BOARDING_PASS_ID, alias: "BoardingPassID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CENTER_OF_MASS, alias: "CenterOfMass", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: CENTER_OF_PTO, alias: "CenterOfPTO", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: BOUNDING_POLYGON, alias: "BoundingPolygon", vr: VR::FL, vm: (6, VM_N) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_START_LOCATION_ID, alias: "RouteSegmentStartLocationID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_END_LOCATION_ID, alias: "RouteSegmentEndLocationID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_LOCATION_ID_TYPE, alias: "RouteSegmentLocationIDType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ABORT_REASON, alias: "AbortReason", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: VOLUME_OF_PTO, alias: "VolumeOfPTO", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ABORT_FLAG, alias: "AbortFlag", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_START_TIME, alias: "RouteSegmentStartTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_SEGMENT_END_TIME, alias: "RouteSegmentEndTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TDR_TYPE, alias: "TDRType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INTERNATIONAL_ROUTE_SEGMENT, alias: "InternationalRouteSegment", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: THREAT_DETECTION_ALGORITHM_AND_VERSION, alias: "ThreatDetectionAlgorithmAndVersion", vr: VR::LO, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ASSIGNED_LOCATION, alias: "AssignedLocation", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALARM_DECISION_TIME, alias: "AlarmDecisionTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALARM_DECISION, alias: "AlarmDecision", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_TOTAL_OBJECTS, alias: "NumberOfTotalObjects", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_ALARM_OBJECTS, alias: "NumberOfAlarmObjects", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PTO_REPRESENTATION_SEQUENCE, alias: "PTORepresentationSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ATD_ASSESSMENT_SEQUENCE, alias: "ATDAssessmentSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TIP_TYPE, alias: "TIPType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DICOS_VERSION, alias: "DICOSVersion", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OOI_OWNER_CREATION_TIME, alias: "OOIOwnerCreationTime", vr: VR::DT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OOI_TYPE, alias: "OOIType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OOI_SIZE, alias: "OOISize", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: ACQUISITION_STATUS, alias: "AcquisitionStatus", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: BASIS_MATERIALS_CODE_SEQUENCE, alias: "BasisMaterialsCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PHANTOM_TYPE, alias: "PhantomType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OOI_OWNER_SEQUENCE, alias: "OOIOwnerSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SCAN_TYPE, alias: "ScanType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITINERARY_ID, alias: "ItineraryID", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITINERARY_ID_TYPE, alias: "ItineraryIDType", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITINERARY_ID_ASSIGNING_AUTHORITY, alias: "ItineraryIDAssigningAuthority", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_ID, alias: "RouteID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROUTE_ID_ASSIGNING_AUTHORITY, alias: "RouteIDAssigningAuthority", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INBOUND_ARRIVAL_TYPE, alias: "InboundArrivalType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARRIER_ID, alias: "CarrierID", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CARRIER_ID_ASSIGNING_AUTHORITY, alias: "CarrierIDAssigningAuthority", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SOURCE_ORIENTATION, alias: "SourceOrientation", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: SOURCE_POSITION, alias: "SourcePosition", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: BELT_HEIGHT, alias: "BeltHeight", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ALGORITHM_ROUTING_CODE_SEQUENCE, alias: "AlgorithmRoutingCodeSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TRANSPORT_CLASSIFICATION, alias: "TransportClassification", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OOI_TYPE_DESCRIPTOR, alias: "OOITypeDescriptor", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_PROCESSING_TIME, alias: "TotalProcessingTime", vr: VR::FL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DETECTOR_CALIBRATION_DATA, alias: "DetectorCalibrationData", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDITIONAL_SCREENING_PERFORMED, alias: "AdditionalScreeningPerformed", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDITIONAL_INSPECTION_SELECTION_CRITERIA, alias: "AdditionalInspectionSelectionCriteria", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ADDITIONAL_INSPECTION_METHOD_SEQUENCE, alias: "AdditionalInspectionMethodSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AIT_DEVICE_TYPE, alias: "AITDeviceType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: QR_MEASUREMENTS_SEQUENCE, alias: "QRMeasurementsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TARGET_MATERIAL_SEQUENCE, alias: "TargetMaterialSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SNR_THRESHOLD, alias: "SNRThreshold", vr: VR::FD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: IMAGE_SCALE_REPRESENTATION, alias: "ImageScaleRepresentation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_PTO_SEQUENCE, alias: "ReferencedPTOSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: REFERENCED_TDR_INSTANCE_SEQUENCE, alias: "ReferencedTDRInstanceSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PTO_LOCATION_DESCRIPTION, alias: "PTOLocationDescription", vr: VR::ST, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANOMALY_LOCATOR_INDICATOR_SEQUENCE, alias: "AnomalyLocatorIndicatorSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ANOMALY_LOCATOR_INDICATOR, alias: "AnomalyLocatorIndicator", vr: VR::FL, vm: (3, 3) },
    DataDictionaryEntryRef { tag: PTO_REGION_SEQUENCE, alias: "PTORegionSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: INSPECTION_SELECTION_CRITERIA, alias: "InspectionSelectionCriteria", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SECONDARY_INSPECTION_METHOD_SEQUENCE, alias: "SecondaryInspectionMethodSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PRCS_TO_RCS_ORIENTATION, alias: "PRCSToRCSOrientation", vr: VR::DS, vm: (6, 6) },
    DataDictionaryEntryRef { tag: MAC_PARAMETERS_SEQUENCE, alias: "MACParametersSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_DIMENSIONS, alias: "CurveDimensions", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_POINTS, alias: "NumberOfPoints", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TYPE_OF_DATA, alias: "TypeOfData", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_DESCRIPTION, alias: "CurveDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AXIS_UNITS, alias: "AxisUnits", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: AXIS_LABELS, alias: "AxisLabels", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: DATA_VALUE_REPRESENTATION, alias: "DataValueRepresentation", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: MINIMUM_COORDINATE_VALUE, alias: "MinimumCoordinateValue", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: MAXIMUM_COORDINATE_VALUE, alias: "MaximumCoordinateValue", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CURVE_RANGE, alias: "CurveRange", vr: VR::SH, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CURVE_DATA_DESCRIPTOR, alias: "CurveDataDescriptor", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COORDINATE_START_VALUE, alias: "CoordinateStartValue", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: COORDINATE_STEP_VALUE, alias: "CoordinateStepValue", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: CURVE_ACTIVATION_LAYER, alias: "CurveActivationLayer", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUDIO_TYPE, alias: "AudioType", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUDIO_SAMPLE_FORMAT, alias: "AudioSampleFormat", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_CHANNELS, alias: "NumberOfChannels", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_SAMPLES, alias: "NumberOfSamples", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SAMPLE_RATE, alias: "SampleRate", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: TOTAL_TIME, alias: "TotalTime", vr: VR::UL, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUDIO_SAMPLE_DATA, alias: "AudioSampleData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: AUDIO_COMMENTS, alias: "AudioComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_LABEL, alias: "CurveLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_REFERENCED_OVERLAY_SEQUENCE, alias: "CurveReferencedOverlaySequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_REFERENCED_OVERLAY_GROUP, alias: "CurveReferencedOverlayGroup", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CURVE_DATA, alias: "CurveData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SHARED_FUNCTIONAL_GROUPS_SEQUENCE, alias: "SharedFunctionalGroupsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, alias: "PerFrameFunctionalGroupsSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_SEQUENCE, alias: "WaveformSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_MINIMUM_VALUE, alias: "ChannelMinimumValue", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: CHANNEL_MAXIMUM_VALUE, alias: "ChannelMaximumValue", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_BITS_ALLOCATED, alias: "WaveformBitsAllocated", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_SAMPLE_INTERPRETATION, alias: "WaveformSampleInterpretation", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_PADDING_VALUE, alias: "WaveformPaddingValue", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: WAVEFORM_DATA, alias: "WaveformData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FIRST_ORDER_PHASE_CORRECTION_ANGLE, alias: "FirstOrderPhaseCorrectionAngle", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SPECTROSCOPY_DATA, alias: "SpectroscopyData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_ROWS, alias: "OverlayRows", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COLUMNS, alias: "OverlayColumns", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_PLANES, alias: "OverlayPlanes", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: NUMBER_OF_FRAMES_IN_OVERLAY, alias: "NumberOfFramesInOverlay", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DESCRIPTION, alias: "OverlayDescription", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_TYPE, alias: "OverlayType", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_SUBTYPE, alias: "OverlaySubtype", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_ORIGIN, alias: "OverlayOrigin", vr: VR::SS, vm: (2, 2) },
    DataDictionaryEntryRef { tag: IMAGE_FRAME_ORIGIN, alias: "ImageFrameOrigin", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_PLANE_ORIGIN, alias: "OverlayPlaneOrigin", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COMPRESSION_CODE, alias: "OverlayCompressionCode", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COMPRESSION_ORIGINATOR, alias: "OverlayCompressionOriginator", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COMPRESSION_LABEL, alias: "OverlayCompressionLabel", vr: VR::SH, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COMPRESSION_DESCRIPTION, alias: "OverlayCompressionDescription", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COMPRESSION_STEP_POINTERS, alias: "OverlayCompressionStepPointers", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OVERLAY_REPEAT_INTERVAL, alias: "OverlayRepeatInterval", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_BITS_GROUPED, alias: "OverlayBitsGrouped", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_BITS_ALLOCATED, alias: "OverlayBitsAllocated", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_BIT_POSITION, alias: "OverlayBitPosition", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_FORMAT, alias: "OverlayFormat", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_LOCATION, alias: "OverlayLocation", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_CODE_LABEL, alias: "OverlayCodeLabel", vr: VR::CS, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OVERLAY_NUMBER_OF_TABLES, alias: "OverlayNumberOfTables", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_CODE_TABLE_LOCATION, alias: "OverlayCodeTableLocation", vr: VR::AT, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OVERLAY_BITS_FOR_CODE_WORD, alias: "OverlayBitsForCodeWord", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_ACTIVATION_LAYER, alias: "OverlayActivationLayer", vr: VR::CS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DESCRIPTOR_GRAY, alias: "OverlayDescriptorGray", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DESCRIPTOR_RED, alias: "OverlayDescriptorRed", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DESCRIPTOR_GREEN, alias: "OverlayDescriptorGreen", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DESCRIPTOR_BLUE, alias: "OverlayDescriptorBlue", vr: VR::US, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAYS_GRAY, alias: "OverlaysGray", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OVERLAYS_RED, alias: "OverlaysRed", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OVERLAYS_GREEN, alias: "OverlaysGreen", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: OVERLAYS_BLUE, alias: "OverlaysBlue", vr: VR::US, vm: (1, VM_N) },
    DataDictionaryEntryRef { tag: ROI_AREA, alias: "ROIArea", vr: VR::IS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_MEAN, alias: "ROIMean", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ROI_STANDARD_DEVIATION, alias: "ROIStandardDeviation", vr: VR::DS, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_LABEL, alias: "OverlayLabel", vr: VR::LO, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_DATA, alias: "OverlayData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: OVERLAY_COMMENTS, alias: "OverlayComments", vr: VR::LT, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXTENDED_OFFSET_TABLE, alias: "ExtendedOffsetTable", vr: VR::OV, vm: (1, 1) },
    DataDictionaryEntryRef { tag: EXTENDED_OFFSET_TABLE_LENGTHS, alias: "ExtendedOffsetTableLengths", vr: VR::OV, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ENCAPSULATED_PIXEL_DATA_VALUE_TOTAL_LENGTH, alias: "EncapsulatedPixelDataValueTotalLength", vr: VR::UV, vm: (1, 1) },
    DataDictionaryEntryRef { tag: FLOAT_PIXEL_DATA, alias: "FloatPixelData", vr: VR::OF, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DOUBLE_FLOAT_PIXEL_DATA, alias: "DoubleFloatPixelData", vr: VR::OD, vm: (1, 1) },
    DataDictionaryEntryRef { tag: PIXEL_DATA, alias: "PixelData", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COEFFICIENTS_SDVN, alias: "CoefficientsSDVN", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COEFFICIENTS_SDHN, alias: "CoefficientsSDHN", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: COEFFICIENTS_SDDN, alias: "CoefficientsSDDN", vr: VR::OW, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DIGITAL_SIGNATURES_SEQUENCE, alias: "DigitalSignaturesSequence", vr: VR::SQ, vm: (1, 1) },
    DataDictionaryEntryRef { tag: DATA_SET_TRAILING_PADDING, alias: "DataSetTrailingPadding", vr: VR::OB, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITEM, alias: "Item", vr: VR::UN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: ITEM_DELIMITATION_ITEM, alias: "ItemDelimitationItem", vr: VR::UN, vm: (1, 1) },
    DataDictionaryEntryRef { tag: SEQUENCE_DELIMITATION_ITEM, alias: "SequenceDelimitationItem", vr: VR::UN, vm: (1, 1) },
];
