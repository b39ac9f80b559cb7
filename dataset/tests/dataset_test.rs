use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dicom_core::value::{DateRange, DateTimeRange, PersonName};
use dicom_core::{dicom_value, PrimitiveValue, QualifiedTag, Tag, VR};
use dicom_dataset::{BulkData, DataElement, DataError, DataSet, DataSetOptions, Error, Value};
use dicom_dictionary_std::{tags, uids};
use dicom_encoding::text::SpecificCharacterSet;
use std::io;

fn image() -> Result<DataSet, Error> {
    let mut dataset = DataSet::new_empty();
    dataset.add(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 192")?;
    dataset.add(tags::PATIENT_NAME, "Gómez^María")?;
    dataset.add(tags::PATIENT_ID, "0001")?;
    dataset.add(tags::STUDY_DATE, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())?;
    dataset.add(tags::STUDY_TIME, NaiveTime::from_hms_opt(8, 30, 0).unwrap())?;
    dataset.add(tags::MODALITY, "MR")?;
    dataset.add(tags::IMAGE_TYPE, ["DERIVED", "SECONDARY"])?;
    dataset.add(tags::INSTANCE_NUMBER, 7_i32)?;
    dataset.add(tags::ROWS, 4_u16)?;
    dataset.add(tags::COLUMNS, 4_u16)?;
    dataset.add(tags::PIXEL_SPACING, dicom_value!(F64, [0.25, 0.25]))?;
    dataset.add(tags::WINDOW_CENTER, [40.0_f64, 400.5])?;
    Ok(dataset)
}

#[test]
fn build_and_read_image_attributes() {
    let dataset = image().unwrap();

    assert_eq!(dataset.len(), 12);
    assert_eq!(
        dataset.effective_charset(),
        SpecificCharacterSet::from_code("ISO_IR 192")
    );

    let name: PersonName = dataset.get_single_value(tags::PATIENT_NAME).unwrap();
    assert_eq!(name.last(), "Gómez");
    assert_eq!(name.first(), "María");

    let date: NaiveDate = dataset.get_single_value(tags::STUDY_DATE).unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    assert_eq!(dataset.get_string(tags::STUDY_DATE).unwrap(), "20240315");
    assert_eq!(dataset.get_string(tags::STUDY_TIME).unwrap(), "083000");

    assert_eq!(dataset.get_single_value::<i32>(tags::INSTANCE_NUMBER).unwrap(), 7);
    assert_eq!(dataset.get_string(tags::INSTANCE_NUMBER).unwrap(), "7");
    assert_eq!(dataset.get_single_value::<u16>(tags::ROWS).unwrap(), 4);
    assert_eq!(
        dataset.get_values::<f64>(tags::PIXEL_SPACING).unwrap(),
        vec![0.25, 0.25]
    );
    assert_eq!(
        dataset.get_string(tags::WINDOW_CENTER).unwrap(),
        "40\\400.5"
    );
    assert_eq!(
        dataset.get_values::<String>(tags::IMAGE_TYPE).unwrap(),
        vec!["DERIVED", "SECONDARY"]
    );

    // elements are visited in tag order
    let order: Vec<Tag> = dataset.iter().map(|e| e.tag()).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn optional_values() {
    let dataset = image().unwrap();

    assert_eq!(dataset.try_get_string(tags::INSTITUTION_NAME), None);
    assert_eq!(
        dataset.get_value_or_default(tags::SLICE_THICKNESS, 0, 1.5_f64),
        1.5
    );
    assert_eq!(dataset.get_value_or_default(tags::ROWS, 0, 0_u16), 4);
    assert_eq!(dataset.try_get_values::<f64>(tags::WINDOW_CENTER).map(|v| v.len()), Some(2));
    assert!(dataset.try_get_single_value::<f64>(tags::WINDOW_CENTER).is_none());
    assert!(dataset.get_value::<u16>(tags::PATIENT_NAME, 0).is_err());
}

#[test]
fn date_range_queries() {
    let mut dataset = DataSet::new_empty();
    dataset.add(tags::STUDY_DATE, "20240101-20240131").unwrap();

    let range: DateRange = dataset.get_single_value(tags::STUDY_DATE).unwrap();
    assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 1, 31));

    let range: DateTimeRange = dataset.get_single_value(tags::STUDY_DATE).unwrap();
    assert_eq!(
        range.end(),
        NaiveDate::from_ymd_opt(2024, 1, 31).and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
    );
}

#[test]
fn private_attributes_round_trip_through_copy() {
    let creator = "ACME 1.0";
    let mut source = image().unwrap();
    source
        .add_with_vr(QualifiedTag::private(0x0029, 0x0001, creator), VR::LO, "calibrated")
        .unwrap();
    source
        .add_with_vr(QualifiedTag::private(0x0029, 0x0002, creator), VR::US, 12_u16)
        .unwrap();

    let mut target = DataSet::new_empty();
    target
        .add_with_vr(QualifiedTag::private(0x0029, 0x0001, "OTHER"), VR::LO, "kept")
        .unwrap();
    source.copy_to(&mut target).unwrap();

    assert_eq!(
        target
            .get_string(QualifiedTag::private(0x0029, 0x0001, creator))
            .unwrap(),
        "calibrated"
    );
    assert_eq!(
        target
            .get_single_value::<u16>(QualifiedTag::private(0x0029, 0x0002, creator))
            .unwrap(),
        12
    );
    assert_eq!(
        target
            .get_string(QualifiedTag::private(0x0029, 0x0001, "OTHER"))
            .unwrap(),
        "kept"
    );
    assert_eq!(target.get_string(tags::PATIENT_NAME).unwrap(), "Gómez^María");
}

#[test]
fn suspended_validation_then_explicit_check() {
    let mut dataset = DataSet::new_empty();
    dataset.with_validation_suspended(|dataset| {
        dataset.add(tags::MODALITY, "not a code string").unwrap();
    });
    let err = dataset.validate().unwrap_err();
    assert!(err.is_validation());

    dataset.add_or_update(tags::MODALITY, "CT").unwrap();
    dataset.validate().unwrap();
}

#[test]
fn elements_built_independently() {
    let element: DataElement = DataElement::new(tags::PATIENT_ID, VR::LO, "ABC").unwrap();
    assert_eq!(element.count(), 1);

    let mut dataset = DataSet::new_empty();
    assert_eq!(dataset.put(element.clone()).unwrap(), None);
    let previous = dataset
        .put(DataElement::new(tags::PATIENT_ID, VR::LO, "DEF").unwrap())
        .unwrap();
    assert_eq!(previous, Some(element));
    assert_eq!(dataset.get_string(tags::PATIENT_ID).unwrap(), "DEF");

    let owned: Vec<DataElement> = dataset.into_iter().collect();
    assert_eq!(owned.len(), 1);
}

#[test]
fn pixel_data_and_bulk_data() {
    let options = DataSetOptions::new().transfer_syntax(uids::EXPLICIT_VR_BIG_ENDIAN);
    let mut dataset = DataSet::new_empty_with_options(options);
    dataset
        .add_pixel_sequence(tags::PIXEL_DATA, vec![vec![0xFF, 0xD8], vec![0xFF, 0xD9]])
        .unwrap();
    let pixel_data = dataset.element(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixel_data.fragments().map(|f| f.len()), Some(2));

    // fetched bytes are read in the byte order they were declared with
    let lut = BulkData::new("http://example.com/lut", |_| Ok(vec![0x01, 0x00, 0x02, 0x00]));
    dataset.add_bulk_data(tags::LUT_DATA, VR::US, lut).unwrap();
    assert!(!dataset.element(tags::LUT_DATA).unwrap().is_resolved());
    assert_eq!(
        dataset.get_values::<u16>(tags::LUT_DATA).unwrap(),
        vec![1, 2]
    );

    let missing = BulkData::new("http://example.com/missing", |uri| {
        Err(io::Error::new(io::ErrorKind::NotFound, uri.to_string()))
    });
    dataset.add_bulk_data(tags::IMAGE_COMMENTS, VR::LT, missing).unwrap();
    assert!(dataset.get_string(tags::IMAGE_COMMENTS).is_err());
    assert!(matches!(
        dataset.element(tags::IMAGE_COMMENTS).unwrap().value(),
        Value::BulkData(_)
    ));
}

/// A value for every value representation,
/// textual ones at their maximum length where one applies.
fn values_of_every_vr() -> Vec<(VR, PrimitiveValue)> {
    fn text(value: impl Into<String>) -> PrimitiveValue {
        PrimitiveValue::Str(value.into())
    }

    vec![
        (VR::AE, text("ABCDEFGHIJKLMNOP")),
        (VR::AS, text("030Y")),
        (VR::AT, PrimitiveValue::from([Tag(0x0010, 0x0010), Tag(0x7FE0, 0x0010)])),
        (VR::CS, text("ABCDEFGHIJKLMNO_")),
        (VR::DA, text("20240229")),
        (VR::DS, text("-1.2345678901234")),
        (VR::DT, text("20240229134501.123456+0100")),
        (VR::FD, PrimitiveValue::from([f64::MAX, -0.5])),
        (VR::FL, PrimitiveValue::from([1.5_f32, f32::MIN_POSITIVE])),
        (VR::IS, text("-2147483648")),
        (VR::LO, text("x".repeat(63))),
        (VR::LT, text("t".repeat(10240))),
        (VR::OB, PrimitiveValue::from([1_u8, 2, 3])),
        (VR::OD, PrimitiveValue::from([0.125_f64])),
        (VR::OF, PrimitiveValue::from([2.5_f32, -2.5])),
        (VR::OL, PrimitiveValue::from([u32::MAX])),
        (VR::OV, PrimitiveValue::from([u64::MAX])),
        (VR::OW, PrimitiveValue::from([0x0102_u16, 0xFFFF])),
        (VR::PN, text(format!("Doe^{}", "J".repeat(60)))),
        (VR::SH, text("ÁÉÍÓÚáéíóúÑñÇçÜü")),
        (VR::SL, PrimitiveValue::from([i32::MIN, i32::MAX])),
        (VR::SS, PrimitiveValue::from([i16::MIN, 1])),
        (VR::ST, text("s".repeat(1024))),
        (VR::SV, PrimitiveValue::from([i64::MIN])),
        (VR::TM, text("134501.123456")),
        (VR::UC, text("u".repeat(1000))),
        (VR::UI, text(format!("1.2.840.10008.{}", "1".repeat(50)))),
        (VR::UL, PrimitiveValue::from([0_u32, u32::MAX])),
        (VR::UN, PrimitiveValue::from([0xFF_u8])),
        (VR::UR, text("http://example.com/wado?study=1")),
        (VR::US, PrimitiveValue::from([0_u16, 65535])),
        (VR::UT, text("unlimited text")),
        (VR::UV, PrimitiveValue::from([u64::MAX])),
    ]
}

#[test]
fn every_value_representation_reads_back_what_was_added() {
    let mut dataset = DataSet::new_empty();
    dataset.add(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 192").unwrap();

    let cases = values_of_every_vr();
    // all but SQ
    assert_eq!(cases.len(), VR::ALL.len() - 1);

    let mut padded = 0;
    for (i, (vr, value)) in cases.into_iter().enumerate() {
        let tag = QualifiedTag::private(0x0009, i as u16 + 1, "VALUES");
        if let Err(e) = dataset.add_with_vr(tag.clone(), vr, value.clone()) {
            panic!("could not add {} value: {}", vr, e);
        }
        let element = dataset.element(tag).unwrap();
        assert_eq!(element.vr(), vr);

        if vr.is_string() {
            let expected = value.to_str();
            assert_eq!(element.to_str().unwrap(), expected, "{}", vr);
            assert_eq!(element.count(), 1, "{}", vr);
        } else {
            assert_eq!(element.to_primitive().unwrap(), value, "{}", vr);
        }

        let bytes = element.bytes().unwrap().len();
        let wire = element.to_wire_bytes().unwrap();
        assert_eq!(wire.len() % 2, 0, "{}", vr);
        if bytes % 2 == 1 {
            padded += 1;
            assert_eq!(wire.len(), bytes + 1, "{}", vr);
            assert_eq!(wire.last(), Some(&vr.padding()), "{}", vr);
        }
    }
    assert!(padded >= 5);

    let value = |n: u16| QualifiedTag::private(0x0009, n, "VALUES");
    assert_eq!(dataset.get_value::<f64>(value(6), 0).unwrap(), -1.2345678901234);
    assert_eq!(
        dataset.get_value::<NaiveDateTime>(value(7), 0).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|d| d.and_hms_micro_opt(13, 45, 1, 123_456))
            .unwrap()
    );
    assert_eq!(dataset.get_value::<i32>(value(10), 0).unwrap(), i32::MIN);
    assert_eq!(
        dataset.get_value::<NaiveTime>(value(25), 0).unwrap(),
        NaiveTime::from_hms_micro_opt(13, 45, 1, 123_456).unwrap()
    );
    assert_eq!(dataset.get_value::<Tag>(value(3), 1).unwrap(), Tag(0x7FE0, 0x0010));
    assert_eq!(dataset.get_value::<u16>(value(31), 1).unwrap(), 65535);
}

#[test]
fn text_longer_than_its_value_representation_admits() {
    let mut dataset = DataSet::new_empty();
    let too_long = [
        (VR::AE, "A".repeat(17)),
        (VR::CS, "C".repeat(17)),
        (VR::DS, "1.23456789012345678".to_string()),
        (VR::LO, "L".repeat(65)),
        (VR::PN, "P".repeat(65)),
        (VR::SH, "S".repeat(17)),
        (VR::ST, "s".repeat(1025)),
        (VR::LT, "t".repeat(10241)),
        (VR::UI, format!("1.2.{}", "3".repeat(61))),
    ];
    for (i, (vr, text)) in too_long.into_iter().enumerate() {
        let tag = QualifiedTag::private(0x0009, i as u16 + 1, "VALUES");
        let err = dataset.add_with_vr(tag, vr, text).unwrap_err();
        assert!(err.is_validation(), "{}: {}", vr, err);
    }
    assert!(dataset.is_empty());
}

#[test]
fn single_value_requested_from_several() {
    let dataset = image().unwrap();
    assert!(matches!(
        dataset.get_single_value::<String>(tags::IMAGE_TYPE),
        Err(Error::Data {
            source: DataError::NotSingleValued { count: 2, .. },
        })
    ));
    assert!(dataset.try_get_single_value::<String>(tags::IMAGE_TYPE).is_none());
}

#[test]
fn text_follows_the_character_set_declared_later() {
    let mut dataset = DataSet::new_empty();
    dataset.add(tags::PATIENT_NAME, "Buc^Jérôme").unwrap();
    dataset.add(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 192").unwrap();
    assert_eq!(dataset.get_string(tags::PATIENT_NAME).unwrap(), "Buc^Jérôme");

    let mut item = DataSet::new_empty();
    item.add(tags::PATIENT_NAME, "Gómez^María").unwrap();
    dataset
        .add_sequence(tags::REFERENCED_IMAGE_SEQUENCE, vec![item])
        .unwrap();
    let items = dataset.get_sequence(tags::REFERENCED_IMAGE_SEQUENCE).unwrap();
    assert_eq!(items[0].get_string(tags::PATIENT_NAME).unwrap(), "Gómez^María");
    assert_eq!(
        items[0]
            .element(tags::PATIENT_NAME)
            .unwrap()
            .to_wire_bytes()
            .unwrap(),
        "Gómez^María ".as_bytes()
    );

    dataset
        .add_or_update(tags::SPECIFIC_CHARACTER_SET, "ISO_IR 100")
        .unwrap();
    assert_eq!(
        dataset.element(tags::PATIENT_NAME).unwrap().bytes().unwrap(),
        b"Buc^J\xe9r\xf4me"
    );
}
