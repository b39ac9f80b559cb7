//! Decoding and encoding of values mixing character sets
//! through ISO 2022 escape sequences.

use dicom_encoding::text::{CharacterSet, Delimiters, SpecificCharacterSet, TextCodec};

#[test]
fn kanji_between_latin_segments() {
    let charset = SpecificCharacterSet::from_terms(["ISO 2022 IR 6", "ISO 2022 IR 87"]);
    // ESC $ B switches to JIS X 0208, CR LF resets to the default set
    let bytes = b"A\x1B$B;3ED\x0D\x0ALatin";
    assert_eq!(charset.decode_text(bytes, Delimiters::Text), "A山田\r\nLatin");
}

#[test]
fn korean_person_name() {
    let charset = SpecificCharacterSet::from_code("\\ISO 2022 IR 149");
    let bytes = b"Hong^Gildong=\x1B$)C\xc8\xab^\x1B$)C\xb1\xe6\xb5\xbf";
    assert_eq!(
        charset.decode_text(bytes, Delimiters::PersonName),
        "Hong^Gildong=홍^길동"
    );
}

#[test]
fn greek_round_trip() {
    let charset = SpecificCharacterSet::from_code("\\ISO 2022 IR 126");
    let text = "Dionysios=Διονυσιος";
    let bytes = charset.encode_text(text, Delimiters::PersonName);
    assert!(bytes.starts_with(b"Dionysios=\x1B-F"));
    assert_eq!(charset.decode_text(&bytes, Delimiters::PersonName), text);
}

#[test]
fn single_character_set_ignores_escapes() {
    let charset = SpecificCharacterSet::from(CharacterSet::IsoIr192);
    let text = "Wang^XiaoDong=王^小东";
    assert_eq!(charset.encode(text).unwrap(), text.as_bytes());
    assert_eq!(charset.decode(text.as_bytes()).unwrap(), text);
}

#[test]
fn misspelled_terms_are_normalized() {
    let charset = SpecificCharacterSet::from_code("ISO-IR 100");
    assert_eq!(charset.charsets(), &[CharacterSet::IsoIr100]);
    assert_eq!(charset.decode_text(b"Jo\xE3o", Delimiters::Text), "João");
    assert_eq!(charset.terms(), vec!["ISO_IR 100".to_string()]);
}
