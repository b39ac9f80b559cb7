//! Data element tag declarations of the standard dictionary.
//!
//! Each constant maps an attribute keyword to its tag,
//! or to its tag range for repeating group attributes.
//! [`ENTRIES`] holds the dictionary records indexed by
//! [`StandardDataDictionary`](crate::StandardDataDictionary).

use dicom_core::dictionary::{
    DataDictionaryEntryRef, TagRange, TagRange::*, ValueMultiplicity as Vm, VirtualVr::*,
};
use dicom_core::Tag;
use dicom_core::VR::*;

type E = DataDictionaryEntryRef<'static>;

/// CommandGroupLength (0000,0000) UL 1
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// AffectedSOPClassUID (0000,0002) UI 1
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// CommandField (0000,0100) US 1
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// Status (0000,0900) US 1
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// FileMetaInformationGroupLength (0002,0000) UL 1
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// SpecificCharacterSet (0008,0005) CS 1-n
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// SOPClassUID (0008,0016) UI 1
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA 1
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// ContentDate (0008,0023) DA 1
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM 1
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// ContentTime (0008,0033) TM 1
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// AccessionNumber (0008,0050) SH 1
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060) CS 1
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// ConversionType (0008,0064) CS 1
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer (0008,0070) LO 1
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// ReferringPhysicianName (0008,0090) PN 1
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// CodeValue (0008,0100) SH 1
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// LongCodeValue (0008,0119) UC 1
pub const LONG_CODE_VALUE: Tag = Tag(0x0008, 0x0119);
/// URNCodeValue (0008,0120) UR 1
pub const URN_CODE_VALUE: Tag = Tag(0x0008, 0x0120);
/// TimezoneOffsetFromUTC (0008,0201) SH 1
pub const TIMEZONE_OFFSET_FROM_UTC: Tag = Tag(0x0008, 0x0201);
/// StationName (0008,1010) SH 1
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// StudyDescription (0008,1030) LO 1
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// SeriesDescription (0008,103E) LO 1
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// InstitutionalDepartmentName (0008,1040) LO 1
pub const INSTITUTIONAL_DEPARTMENT_NAME: Tag = Tag(0x0008, 0x1040);
/// PerformingPhysicianName (0008,1050) PN 1-n
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// NameOfPhysiciansReadingStudy (0008,1060) PN 1-n
pub const NAME_OF_PHYSICIANS_READING_STUDY: Tag = Tag(0x0008, 0x1060);
/// OperatorsName (0008,1070) PN 1-n
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// ManufacturerModelName (0008,1090) LO 1
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedPerformedProcedureStepSequence (0008,1111) SQ 1
pub const REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE: Tag = Tag(0x0008, 0x1111);
/// ReferencedSeriesSequence (0008,1115) SQ 1
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedImageSequence (0008,1140) SQ 1
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// ReferencedSOPClassUID (0008,1150) UI 1
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedFrameNumber (0008,1160) IS 1-n
pub const REFERENCED_FRAME_NUMBER: Tag = Tag(0x0008, 0x1160);
/// ReferencedSOPSequence (0008,1199) SQ 1
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// DerivationDescription (0008,2111) ST 1
pub const DERIVATION_DESCRIPTION: Tag = Tag(0x0008, 0x2111);
/// FrameType (0008,9007) CS 4
pub const FRAME_TYPE: Tag = Tag(0x0008, 0x9007);
/// PatientName (0010,0010) PN 1
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA 1
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientBirthTime (0010,0032) TM 1
pub const PATIENT_BIRTH_TIME: Tag = Tag(0x0010, 0x0032);
/// PatientSex (0010,0040) CS 1
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// OtherPatientNames (0010,1001) PN 1-n
pub const OTHER_PATIENT_NAMES: Tag = Tag(0x0010, 0x1001);
/// PatientAge (0010,1010) AS 1
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// PatientSize (0010,1020) DS 1
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// PatientWeight (0010,1030) DS 1
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// EthnicGroup (0010,2160) SH 1
pub const ETHNIC_GROUP: Tag = Tag(0x0010, 0x2160);
/// PregnancyStatus (0010,21C0) US 1
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// PatientComments (0010,4000) LT 1
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);
/// PatientIdentityRemoved (0012,0062) CS 1
pub const PATIENT_IDENTITY_REMOVED: Tag = Tag(0x0012, 0x0062);
/// DeidentificationMethod (0012,0063) LO 1-n
pub const DEIDENTIFICATION_METHOD: Tag = Tag(0x0012, 0x0063);
/// BodyPartExamined (0018,0015) CS 1
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// ScanOptions (0018,0022) CS 1-n
pub const SCAN_OPTIONS: Tag = Tag(0x0018, 0x0022);
/// SliceThickness (0018,0050) DS 1
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// SpacingBetweenSlices (0018,0088) DS 1
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// DeviceSerialNumber (0018,1000) LO 1
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO 1-n
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO 1
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// ExposureTime (0018,1150) IS 1
pub const EXPOSURE_TIME: Tag = Tag(0x0018, 0x1150);
/// XRayTubeCurrent (0018,1151) IS 1
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// ImagerPixelSpacing (0018,1164) DS 2
pub const IMAGER_PIXEL_SPACING: Tag = Tag(0x0018, 0x1164);
/// AcquisitionMatrix (0018,1310) US 4
pub const ACQUISITION_MATRIX: Tag = Tag(0x0018, 0x1310);
/// PatientPosition (0018,5100) CS 1
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);
/// ReferencePixelX0 (0018,6020) SL 1
pub const REFERENCE_PIXEL_X0: Tag = Tag(0x0018, 0x6020);
/// PhysicalDeltaX (0018,602C) FD 1
pub const PHYSICAL_DELTA_X: Tag = Tag(0x0018, 0x602C);
/// ContentQualification (0018,9004) CS 1
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// AcquisitionDuration (0018,9073) FD 1
pub const ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9073);
/// FrameAcquisitionDateTime (0018,9074) DT 1
pub const FRAME_ACQUISITION_DATE_TIME: Tag = Tag(0x0018, 0x9074);
/// DiffusionBValue (0018,9087) FD 1
pub const DIFFUSION_B_VALUE: Tag = Tag(0x0018, 0x9087);
/// DiffusionGradientOrientation (0018,9089) FD 3
pub const DIFFUSION_GRADIENT_ORIENTATION: Tag = Tag(0x0018, 0x9089);
/// FrameReferenceDateTime (0018,9151) DT 1
pub const FRAME_REFERENCE_DATE_TIME: Tag = Tag(0x0018, 0x9151);
/// FrameAcquisitionDuration (0018,9220) FD 1
pub const FRAME_ACQUISITION_DURATION: Tag = Tag(0x0018, 0x9220);
/// DataCollectionCenterPatient (0018,9313) FD 3
pub const DATA_COLLECTION_CENTER_PATIENT: Tag = Tag(0x0018, 0x9313);
/// ReconstructionPixelSpacing (0018,9322) FD 2
pub const RECONSTRUCTION_PIXEL_SPACING: Tag = Tag(0x0018, 0x9322);
/// StudyInstanceUID (0020,000D) UI 1
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS 1
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS 1
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Laterality (0020,0060) CS 1
pub const LATERALITY: Tag = Tag(0x0020, 0x0060);
/// TemporalPositionIdentifier (0020,0100) IS 1
pub const TEMPORAL_POSITION_IDENTIFIER: Tag = Tag(0x0020, 0x0100);
/// SynchronizationFrameOfReferenceUID (0020,0200) UI 1
pub const SYNCHRONIZATION_FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0200);
/// ImagesInAcquisition (0020,1002) IS 1
pub const IMAGES_IN_ACQUISITION: Tag = Tag(0x0020, 0x1002);
/// SliceLocation (0020,1041) DS 1
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// SourceImageIDs (0020,31xx) CS 1-n
pub const SOURCE_IMAGE_IDS: TagRange = Element100(Tag(0x0020, 0x3100));
/// ImageComments (0020,4000) LT 1
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// FrameContentSequence (0020,9111) SQ 1
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// PlanePositionSequence (0020,9113) SQ 1
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// PlaneOrientationSequence (0020,9116) SQ 1
pub const PLANE_ORIENTATION_SEQUENCE: Tag = Tag(0x0020, 0x9116);
/// TemporalPositionIndex (0020,9128) UL 1
pub const TEMPORAL_POSITION_INDEX: Tag = Tag(0x0020, 0x9128);
/// DimensionIndexValues (0020,9157) UL 1-n
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// SamplesPerPixel (0028,0002) US 1
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// NumberOfFrames (0028,0008) IS 1
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// FrameIncrementPointer (0028,0009) AT 1-n
pub const FRAME_INCREMENT_POINTER: Tag = Tag(0x0028, 0x0009);
/// Rows (0028,0010) US 1
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS 2
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US 1
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// SmallestImagePixelValue (0028,0106) US or SS 1
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// LargestImagePixelValue (0028,0107) US or SS 1
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// BurnedInAnnotation (0028,0301) CS 1
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
/// WindowCenter (0028,1050) DS 1-n
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// RedPaletteColorLookupTableData (0028,1201) OW 1
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// LossyImageCompression (0028,2110) CS 1
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// LossyImageCompressionRatio (0028,2112) DS 1-n
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// LUTDescriptor (0028,3002) US or SS 3
pub const LUT_DESCRIPTOR: Tag = Tag(0x0028, 0x3002);
/// LUTData (0028,3006) US or OW 1-n
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// PixelDataProviderURL (0028,7FE0) UR 1
pub const PIXEL_DATA_PROVIDER_URL: Tag = Tag(0x0028, 0x7FE0);
/// PixelMeasuresSequence (0028,9110) SQ 1
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// FrameVOILUTSequence (0028,9132) SQ 1
pub const FRAME_VOILUT_SEQUENCE: Tag = Tag(0x0028, 0x9132);
/// PixelValueTransformationSequence (0028,9145) SQ 1
pub const PIXEL_VALUE_TRANSFORMATION_SEQUENCE: Tag = Tag(0x0028, 0x9145);
/// RequestedProcedureDescription (0032,1060) LO 1
pub const REQUESTED_PROCEDURE_DESCRIPTION: Tag = Tag(0x0032, 0x1060);
/// PerformedProcedureStepStartDate (0040,0244) DA 1
pub const PERFORMED_PROCEDURE_STEP_START_DATE: Tag = Tag(0x0040, 0x0244);
/// PerformedProcedureStepStartTime (0040,0245) TM 1
pub const PERFORMED_PROCEDURE_STEP_START_TIME: Tag = Tag(0x0040, 0x0245);
/// PerformedProcedureStepID (0040,0253) SH 1
pub const PERFORMED_PROCEDURE_STEP_ID: Tag = Tag(0x0040, 0x0253);
/// RequestAttributesSequence (0040,0275) SQ 1
pub const REQUEST_ATTRIBUTES_SEQUENCE: Tag = Tag(0x0040, 0x0275);
/// RealWorldValueMappingSequence (0040,9096) SQ 1
pub const REAL_WORLD_VALUE_MAPPING_SEQUENCE: Tag = Tag(0x0040, 0x9096);
/// RealWorldValueLastValueMapped (0040,9211) US or SS 1
pub const REAL_WORLD_VALUE_LAST_VALUE_MAPPED: Tag = Tag(0x0040, 0x9211);
/// RealWorldValueLUTData (0040,9212) FD 1-n
pub const REAL_WORLD_VALUE_LUT_DATA: Tag = Tag(0x0040, 0x9212);
/// RelationshipType (0040,A010) CS 1
pub const RELATIONSHIP_TYPE: Tag = Tag(0x0040, 0xA010);
/// ObservationDateTime (0040,A032) DT 1
pub const OBSERVATION_DATE_TIME: Tag = Tag(0x0040, 0xA032);
/// ValueType (0040,A040) CS 1
pub const VALUE_TYPE: Tag = Tag(0x0040, 0xA040);
/// ConceptNameCodeSequence (0040,A043) SQ 1
pub const CONCEPT_NAME_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA043);
/// DateTime (0040,A120) DT 1
pub const DATE_TIME: Tag = Tag(0x0040, 0xA120);
/// Date (0040,A121) DA 1
pub const DATE: Tag = Tag(0x0040, 0xA121);
/// Time (0040,A122) TM 1
pub const TIME: Tag = Tag(0x0040, 0xA122);
/// UID (0040,A124) UI 1
pub const UID: Tag = Tag(0x0040, 0xA124);
/// TextValue (0040,A160) UT 1
pub const TEXT_VALUE: Tag = Tag(0x0040, 0xA160);
/// ConceptCodeSequence (0040,A168) SQ 1
pub const CONCEPT_CODE_SEQUENCE: Tag = Tag(0x0040, 0xA168);
/// NumericValue (0040,A30A) DS 1-n
pub const NUMERIC_VALUE: Tag = Tag(0x0040, 0xA30A);
/// ContentSequence (0040,A730) SQ 1
pub const CONTENT_SEQUENCE: Tag = Tag(0x0040, 0xA730);
/// DocumentTitle (0042,0010) ST 1
pub const DOCUMENT_TITLE: Tag = Tag(0x0042, 0x0010);
/// EncapsulatedDocument (0042,0011) OB 1
pub const ENCAPSULATED_DOCUMENT: Tag = Tag(0x0042, 0x0011);
/// ImagedVolumeWidth (0048,0001) FL 1
pub const IMAGED_VOLUME_WIDTH: Tag = Tag(0x0048, 0x0001);
/// TotalPixelMatrixColumns (0048,0006) UL 1
pub const TOTAL_PIXEL_MATRIX_COLUMNS: Tag = Tag(0x0048, 0x0006);
/// TotalPixelMatrixRows (0048,0007) UL 1
pub const TOTAL_PIXEL_MATRIX_ROWS: Tag = Tag(0x0048, 0x0007);
/// NumberOfSlices (0054,0081) US 1
pub const NUMBER_OF_SLICES: Tag = Tag(0x0054, 0x0081);
/// PointCoordinatesData (0066,0016) OF 1
pub const POINT_COORDINATES_DATA: Tag = Tag(0x0066, 0x0016);
/// LongPrimitivePointIndexList (0066,0040) OL 1
pub const LONG_PRIMITIVE_POINT_INDEX_LIST: Tag = Tag(0x0066, 0x0040);
/// GraphicAnnotationSequence (0070,0001) SQ 1
pub const GRAPHIC_ANNOTATION_SEQUENCE: Tag = Tag(0x0070, 0x0001);
/// LineThickness (0070,0253) FL 1
pub const LINE_THICKNESS: Tag = Tag(0x0070, 0x0253);
/// SelectorSVValue (0072,0082) SV 1-n
pub const SELECTOR_SV_VALUE: Tag = Tag(0x0072, 0x0082);
/// SelectorUVValue (0072,0083) UV 1-n
pub const SELECTOR_UV_VALUE: Tag = Tag(0x0072, 0x0083);
/// SharedFunctionalGroupsSequence (5200,9229) SQ 1
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ 1
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// OverlayRows (60xx,0010) US 1
pub const OVERLAY_ROWS: TagRange = Group100(Tag(0x6000, 0x0010));
/// OverlayColumns (60xx,0011) US 1
pub const OVERLAY_COLUMNS: TagRange = Group100(Tag(0x6000, 0x0011));
/// OverlayType (60xx,0040) CS 1
pub const OVERLAY_TYPE: TagRange = Group100(Tag(0x6000, 0x0040));
/// OverlayOrigin (60xx,0050) SS 2
pub const OVERLAY_ORIGIN: TagRange = Group100(Tag(0x6000, 0x0050));
/// OverlayBitsAllocated (60xx,0100) US 1
pub const OVERLAY_BITS_ALLOCATED: TagRange = Group100(Tag(0x6000, 0x0100));
/// OverlayBitPosition (60xx,0102) US 1
pub const OVERLAY_BIT_POSITION: TagRange = Group100(Tag(0x6000, 0x0102));
/// OverlayData (60xx,3000) OB or OW 1
pub const OVERLAY_DATA: TagRange = Group100(Tag(0x6000, 0x3000));
/// ExtendedOffsetTable (7FE0,0001) OV 1
pub const EXTENDED_OFFSET_TABLE: Tag = Tag(0x7FE0, 0x0001);
/// ExtendedOffsetTableLengths (7FE0,0002) OV 1
pub const EXTENDED_OFFSET_TABLE_LENGTHS: Tag = Tag(0x7FE0, 0x0002);
/// FloatPixelData (7FE0,0008) OF 1
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// DoubleFloatPixelData (7FE0,0009) OD 1
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// PixelData (7FE0,0010) OB or OW 1
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// All attribute records of the standard dictionary.
#[rustfmt::skip]
pub(crate) const ENTRIES: &[E] = &[
    E { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(STATUS), alias: "Status", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: Exact(AE), vm: Vm::ONE },
    E { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: Exact(CS), vm: Vm::multiples_of(2, 1) },
    E { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: Exact(DT), vm: Vm::ONE },
    E { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(MODALITY), alias: "Modality", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(PN), vm: Vm::ONE },
    E { tag: Single(CODE_VALUE), alias: "CodeValue", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(LONG_CODE_VALUE), alias: "LongCodeValue", vr: Exact(UC), vm: Vm::ONE },
    E { tag: Single(URN_CODE_VALUE), alias: "URNCodeValue", vr: Exact(UR), vm: Vm::ONE },
    E { tag: Single(TIMEZONE_OFFSET_FROM_UTC), alias: "TimezoneOffsetFromUTC", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(STATION_NAME), alias: "StationName", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(INSTITUTIONAL_DEPARTMENT_NAME), alias: "InstitutionalDepartmentName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(NAME_OF_PHYSICIANS_READING_STUDY), alias: "NameOfPhysiciansReadingStudy", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE), alias: "ReferencedPerformedProcedureStepSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(REFERENCED_FRAME_NUMBER), alias: "ReferencedFrameNumber", vr: Exact(IS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(REFERENCED_SOP_SEQUENCE), alias: "ReferencedSOPSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(DERIVATION_DESCRIPTION), alias: "DerivationDescription", vr: Exact(ST), vm: Vm::ONE },
    E { tag: Single(FRAME_TYPE), alias: "FrameType", vr: Exact(CS), vm: Vm::exactly(4) },
    E { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(PN), vm: Vm::ONE },
    E { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(PATIENT_BIRTH_TIME), alias: "PatientBirthTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(OTHER_PATIENT_NAMES), alias: "OtherPatientNames", vr: Exact(PN), vm: Vm::ONE_OR_MORE },
    E { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(AS), vm: Vm::ONE },
    E { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(ETHNIC_GROUP), alias: "EthnicGroup", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: Exact(LT), vm: Vm::ONE },
    E { tag: Single(PATIENT_IDENTITY_REMOVED), alias: "PatientIdentityRemoved", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(DEIDENTIFICATION_METHOD), alias: "DeidentificationMethod", vr: Exact(LO), vm: Vm::ONE_OR_MORE },
    E { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(SCAN_OPTIONS), alias: "ScanOptions", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(KVP), alias: "KVP", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: Exact(LO), vm: Vm::ONE_OR_MORE },
    E { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(EXPOSURE_TIME), alias: "ExposureTime", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(IMAGER_PIXEL_SPACING), alias: "ImagerPixelSpacing", vr: Exact(DS), vm: Vm::exactly(2) },
    E { tag: Single(ACQUISITION_MATRIX), alias: "AcquisitionMatrix", vr: Exact(US), vm: Vm::exactly(4) },
    E { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(REFERENCE_PIXEL_X0), alias: "ReferencePixelX0", vr: Exact(SL), vm: Vm::ONE },
    E { tag: Single(PHYSICAL_DELTA_X), alias: "PhysicalDeltaX", vr: Exact(FD), vm: Vm::ONE },
    E { tag: Single(CONTENT_QUALIFICATION), alias: "ContentQualification", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_DURATION), alias: "AcquisitionDuration", vr: Exact(FD), vm: Vm::ONE },
    E { tag: Single(FRAME_ACQUISITION_DATE_TIME), alias: "FrameAcquisitionDateTime", vr: Exact(DT), vm: Vm::ONE },
    E { tag: Single(DIFFUSION_B_VALUE), alias: "DiffusionBValue", vr: Exact(FD), vm: Vm::ONE },
    E { tag: Single(DIFFUSION_GRADIENT_ORIENTATION), alias: "DiffusionGradientOrientation", vr: Exact(FD), vm: Vm::exactly(3) },
    E { tag: Single(FRAME_REFERENCE_DATE_TIME), alias: "FrameReferenceDateTime", vr: Exact(DT), vm: Vm::ONE },
    E { tag: Single(FRAME_ACQUISITION_DURATION), alias: "FrameAcquisitionDuration", vr: Exact(FD), vm: Vm::ONE },
    E { tag: Single(DATA_COLLECTION_CENTER_PATIENT), alias: "DataCollectionCenterPatient", vr: Exact(FD), vm: Vm::exactly(3) },
    E { tag: Single(RECONSTRUCTION_PIXEL_SPACING), alias: "ReconstructionPixelSpacing", vr: Exact(FD), vm: Vm::exactly(2) },
    E { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: Exact(CS), vm: Vm::exactly(2) },
    E { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: Exact(DS), vm: Vm::exactly(3) },
    E { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: Exact(DS), vm: Vm::exactly(6) },
    E { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(LATERALITY), alias: "Laterality", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(TEMPORAL_POSITION_IDENTIFIER), alias: "TemporalPositionIdentifier", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(SYNCHRONIZATION_FRAME_OF_REFERENCE_UID), alias: "SynchronizationFrameOfReferenceUID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(IMAGES_IN_ACQUISITION), alias: "ImagesInAcquisition", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: Exact(DS), vm: Vm::ONE },
    E { tag: SOURCE_IMAGE_IDS, alias: "SourceImageIDs", vr: Exact(CS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: Exact(LT), vm: Vm::ONE },
    E { tag: Single(FRAME_CONTENT_SEQUENCE), alias: "FrameContentSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PLANE_POSITION_SEQUENCE), alias: "PlanePositionSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PLANE_ORIENTATION_SEQUENCE), alias: "PlaneOrientationSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(TEMPORAL_POSITION_INDEX), alias: "TemporalPositionIndex", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(DIMENSION_INDEX_VALUES), alias: "DimensionIndexValues", vr: Exact(UL), vm: Vm::ONE_OR_MORE },
    E { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(IS), vm: Vm::ONE },
    E { tag: Single(FRAME_INCREMENT_POINTER), alias: "FrameIncrementPointer", vr: Exact(AT), vm: Vm::ONE_OR_MORE },
    E { tag: Single(ROWS), alias: "Rows", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(COLUMNS), alias: "Columns", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: Exact(DS), vm: Vm::exactly(2) },
    E { tag: Single(PIXEL_ASPECT_RATIO), alias: "PixelAspectRatio", vr: Exact(IS), vm: Vm::exactly(2) },
    E { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs, vm: Vm::ONE },
    E { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs, vm: Vm::ONE },
    E { tag: Single(BURNED_IN_ANNOTATION), alias: "BurnedInAnnotation", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(DS), vm: Vm::ONE },
    E { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: Exact(OW), vm: Vm::ONE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(LUT_DESCRIPTOR), alias: "LUTDescriptor", vr: Xs, vm: Vm::exactly(3) },
    E { tag: Single(LUT_DATA), alias: "LUTData", vr: Lt, vm: Vm::ONE_OR_MORE },
    E { tag: Single(PIXEL_DATA_PROVIDER_URL), alias: "PixelDataProviderURL", vr: Exact(UR), vm: Vm::ONE },
    E { tag: Single(PIXEL_MEASURES_SEQUENCE), alias: "PixelMeasuresSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(FRAME_VOILUT_SEQUENCE), alias: "FrameVOILUTSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PIXEL_VALUE_TRANSFORMATION_SEQUENCE), alias: "PixelValueTransformationSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REQUESTED_PROCEDURE_DESCRIPTION), alias: "RequestedProcedureDescription", vr: Exact(LO), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_DATE), alias: "PerformedProcedureStepStartDate", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_START_TIME), alias: "PerformedProcedureStepStartTime", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(PERFORMED_PROCEDURE_STEP_ID), alias: "PerformedProcedureStepID", vr: Exact(SH), vm: Vm::ONE },
    E { tag: Single(REQUEST_ATTRIBUTES_SEQUENCE), alias: "RequestAttributesSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REAL_WORLD_VALUE_MAPPING_SEQUENCE), alias: "RealWorldValueMappingSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(REAL_WORLD_VALUE_LAST_VALUE_MAPPED), alias: "RealWorldValueLastValueMapped", vr: Xs, vm: Vm::ONE },
    E { tag: Single(REAL_WORLD_VALUE_LUT_DATA), alias: "RealWorldValueLUTData", vr: Exact(FD), vm: Vm::ONE_OR_MORE },
    E { tag: Single(RELATIONSHIP_TYPE), alias: "RelationshipType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(OBSERVATION_DATE_TIME), alias: "ObservationDateTime", vr: Exact(DT), vm: Vm::ONE },
    E { tag: Single(VALUE_TYPE), alias: "ValueType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: Single(CONCEPT_NAME_CODE_SEQUENCE), alias: "ConceptNameCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(DATE_TIME), alias: "DateTime", vr: Exact(DT), vm: Vm::ONE },
    E { tag: Single(DATE), alias: "Date", vr: Exact(DA), vm: Vm::ONE },
    E { tag: Single(TIME), alias: "Time", vr: Exact(TM), vm: Vm::ONE },
    E { tag: Single(UID), alias: "UID", vr: Exact(UI), vm: Vm::ONE },
    E { tag: Single(TEXT_VALUE), alias: "TextValue", vr: Exact(UT), vm: Vm::ONE },
    E { tag: Single(CONCEPT_CODE_SEQUENCE), alias: "ConceptCodeSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(NUMERIC_VALUE), alias: "NumericValue", vr: Exact(DS), vm: Vm::ONE_OR_MORE },
    E { tag: Single(CONTENT_SEQUENCE), alias: "ContentSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(DOCUMENT_TITLE), alias: "DocumentTitle", vr: Exact(ST), vm: Vm::ONE },
    E { tag: Single(ENCAPSULATED_DOCUMENT), alias: "EncapsulatedDocument", vr: Exact(OB), vm: Vm::ONE },
    E { tag: Single(IMAGED_VOLUME_WIDTH), alias: "ImagedVolumeWidth", vr: Exact(FL), vm: Vm::ONE },
    E { tag: Single(TOTAL_PIXEL_MATRIX_COLUMNS), alias: "TotalPixelMatrixColumns", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(TOTAL_PIXEL_MATRIX_ROWS), alias: "TotalPixelMatrixRows", vr: Exact(UL), vm: Vm::ONE },
    E { tag: Single(NUMBER_OF_SLICES), alias: "NumberOfSlices", vr: Exact(US), vm: Vm::ONE },
    E { tag: Single(POINT_COORDINATES_DATA), alias: "PointCoordinatesData", vr: Exact(OF), vm: Vm::ONE },
    E { tag: Single(LONG_PRIMITIVE_POINT_INDEX_LIST), alias: "LongPrimitivePointIndexList", vr: Exact(OL), vm: Vm::ONE },
    E { tag: Single(GRAPHIC_ANNOTATION_SEQUENCE), alias: "GraphicAnnotationSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(LINE_THICKNESS), alias: "LineThickness", vr: Exact(FL), vm: Vm::ONE },
    E { tag: Single(SELECTOR_SV_VALUE), alias: "SelectorSVValue", vr: Exact(SV), vm: Vm::ONE_OR_MORE },
    E { tag: Single(SELECTOR_UV_VALUE), alias: "SelectorUVValue", vr: Exact(UV), vm: Vm::ONE_OR_MORE },
    E { tag: Single(SHARED_FUNCTIONAL_GROUPS_SEQUENCE), alias: "SharedFunctionalGroupsSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: Single(PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE), alias: "PerFrameFunctionalGroupsSequence", vr: Exact(SQ), vm: Vm::ONE },
    E { tag: OVERLAY_ROWS, alias: "OverlayRows", vr: Exact(US), vm: Vm::ONE },
    E { tag: OVERLAY_COLUMNS, alias: "OverlayColumns", vr: Exact(US), vm: Vm::ONE },
    E { tag: OVERLAY_TYPE, alias: "OverlayType", vr: Exact(CS), vm: Vm::ONE },
    E { tag: OVERLAY_ORIGIN, alias: "OverlayOrigin", vr: Exact(SS), vm: Vm::exactly(2) },
    E { tag: OVERLAY_BITS_ALLOCATED, alias: "OverlayBitsAllocated", vr: Exact(US), vm: Vm::ONE },
    E { tag: OVERLAY_BIT_POSITION, alias: "OverlayBitPosition", vr: Exact(US), vm: Vm::ONE },
    E { tag: OVERLAY_DATA, alias: "OverlayData", vr: Ox, vm: Vm::ONE },
    E { tag: Single(EXTENDED_OFFSET_TABLE), alias: "ExtendedOffsetTable", vr: Exact(OV), vm: Vm::ONE },
    E { tag: Single(EXTENDED_OFFSET_TABLE_LENGTHS), alias: "ExtendedOffsetTableLengths", vr: Exact(OV), vm: Vm::ONE },
    E { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: Exact(OF), vm: Vm::ONE },
    E { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: Exact(OD), vm: Vm::ONE },
    E { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px, vm: Vm::ONE },
];
