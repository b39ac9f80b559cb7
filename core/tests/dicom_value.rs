//! `dicom_value!` must work in crates
//! which do not depend on `smallvec` themselves.

// shadows the crate name, as in a dependent without `smallvec`
mod smallvec {}

use dicom_core::{dicom_value, PrimitiveValue};

#[test]
fn strings() {
    let value = dicom_value!(Strs, ["ORIGINAL", "PRIMARY", "AXIAL"]);
    assert_eq!(value.multiplicity(), 3);
    assert_eq!(value.to_str(), "ORIGINAL\\PRIMARY\\AXIAL");

    let value = dicom_value!(Str, "Doe^John");
    assert_eq!(value.to_string(), "Doe^John");
    assert_eq!(value.multiplicity(), 1);
}

#[test]
fn numbers() {
    let value = dicom_value!(U16, [512, 512]);
    assert_eq!(value, PrimitiveValue::from([512_u16, 512]));
    assert_eq!(value.to_str(), "512\\512");

    let value = dicom_value!(F64, [0.5, 0.5,]);
    assert_eq!(value.multiplicity(), 2);

    assert_eq!(dicom_value!(I32, -7).to_str(), "-7");
    assert_eq!(dicom_value!(), PrimitiveValue::Empty);
}
