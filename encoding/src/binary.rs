//! This module provides the reading and writing of fixed-width binary values,
//! which may be in either Little Endian or Big Endian.
//!
//! Element values of numeric value representations
//! (US, SS, UL, SL, UV, SV, FL, FD, AT, OB, OW, ...)
//! are packed arrays of one of the types implementing [`BinaryValue`].

use byteordered::{ByteOrdered, Endianness};
use dicom_core::Tag;
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::io::{Read, Write};

/// An error type for reading and writing binary values.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum BinaryValueError {
    /// The buffer length is not a multiple of the value size.
    #[snafu(display(
        "buffer of {} bytes is not a multiple of the value size {}",
        len,
        unit
    ))]
    UnevenLength {
        len: usize,
        unit: usize,
        backtrace: Backtrace,
    },
    /// Failed to read a value from the buffer.
    #[snafu(display("could not read binary value"))]
    ReadValue {
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// Failed to write a value into the buffer.
    #[snafu(display("could not write binary value"))]
    WriteValue {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = BinaryValueError> = std::result::Result<T, E>;

/// A native type which is packed with a fixed size in element values.
pub trait BinaryValue: Copy + Sized {
    /// The number of bytes of one value.
    const SIZE: usize;

    /// Read one value from the source.
    fn read_from<R: Read>(source: &mut ByteOrdered<R, Endianness>) -> std::io::Result<Self>;

    /// Write this value to the target.
    fn write_to<W: Write>(self, target: &mut ByteOrdered<W, Endianness>) -> std::io::Result<()>;
}

macro_rules! impl_binary_value {
    ($typ: ty, $size: expr, $read: ident, $write: ident) => {
        impl BinaryValue for $typ {
            const SIZE: usize = $size;

            fn read_from<R: Read>(
                source: &mut ByteOrdered<R, Endianness>,
            ) -> std::io::Result<Self> {
                source.$read()
            }

            fn write_to<W: Write>(
                self,
                target: &mut ByteOrdered<W, Endianness>,
            ) -> std::io::Result<()> {
                target.$write(self)
            }
        }
    };
}

impl_binary_value!(u8, 1, read_u8, write_u8);
impl_binary_value!(u16, 2, read_u16, write_u16);
impl_binary_value!(i16, 2, read_i16, write_i16);
impl_binary_value!(u32, 4, read_u32, write_u32);
impl_binary_value!(i32, 4, read_i32, write_i32);
impl_binary_value!(u64, 8, read_u64, write_u64);
impl_binary_value!(i64, 8, read_i64, write_i64);
impl_binary_value!(f32, 4, read_f32, write_f32);
impl_binary_value!(f64, 8, read_f64, write_f64);

/// Attribute tags are packed as a pair of 16-bit unsigned integers.
impl BinaryValue for Tag {
    const SIZE: usize = 4;

    fn read_from<R: Read>(source: &mut ByteOrdered<R, Endianness>) -> std::io::Result<Self> {
        let group = source.read_u16()?;
        let element = source.read_u16()?;
        Ok(Tag(group, element))
    }

    fn write_to<W: Write>(self, target: &mut ByteOrdered<W, Endianness>) -> std::io::Result<()> {
        target.write_u16(self.group())?;
        target.write_u16(self.element())
    }
}

/// The number of values of type `T` packed in a buffer of `len` bytes.
pub fn value_count<T: BinaryValue>(len: usize) -> usize {
    len / T::SIZE
}

/// Read all values packed in the buffer.
///
/// # Example
///
/// ```
/// # use dicom_encoding::binary::read_values;
/// # use byteordered::Endianness;
/// let values: Vec<u16> = read_values(&[0x00, 0x02, 0x01, 0x00], Endianness::Little)?;
/// assert_eq!(values, vec![512, 1]);
/// # Ok::<_, dicom_encoding::binary::BinaryValueError>(())
/// ```
pub fn read_values<T: BinaryValue>(bytes: &[u8], endianness: Endianness) -> Result<Vec<T>> {
    ensure!(
        bytes.len() % T::SIZE == 0,
        UnevenLengthSnafu {
            len: bytes.len(),
            unit: T::SIZE
        }
    );
    let mut source = ByteOrdered::runtime(bytes, endianness);
    (0..value_count::<T>(bytes.len()))
        .map(|_| T::read_from(&mut source).context(ReadValueSnafu))
        .collect()
}

/// Read the value at the given index,
/// or `None` if the buffer holds no value there.
pub fn read_value_at<T: BinaryValue>(
    bytes: &[u8],
    index: usize,
    endianness: Endianness,
) -> Result<Option<T>> {
    let start = index * T::SIZE;
    match bytes.get(start..start + T::SIZE) {
        Some(chunk) => {
            let mut source = ByteOrdered::runtime(chunk, endianness);
            T::read_from(&mut source).context(ReadValueSnafu).map(Some)
        }
        None => Ok(None),
    }
}

/// Append the given values to the buffer.
pub fn write_values<T: BinaryValue>(
    values: &[T],
    endianness: Endianness,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.reserve(values.len() * T::SIZE);
    let mut target = ByteOrdered::runtime(out, endianness);
    for v in values {
        v.write_to(&mut target).context(WriteValueSnafu)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_both_orders() {
        let bytes = [0x01, 0x02, 0x03, 0x04];
        let le: Vec<u16> = read_values(&bytes, Endianness::Little).unwrap();
        assert_eq!(le, vec![0x0201, 0x0403]);
        let be: Vec<u16> = read_values(&bytes, Endianness::Big).unwrap();
        assert_eq!(be, vec![0x0102, 0x0304]);
        let be: Vec<u32> = read_values(&bytes, Endianness::Big).unwrap();
        assert_eq!(be, vec![0x0102_0304]);
    }

    #[test]
    fn uneven_buffer() {
        let res = read_values::<u32>(&[0, 1, 2], Endianness::Little);
        assert!(matches!(
            res,
            Err(BinaryValueError::UnevenLength { len: 3, unit: 4, .. })
        ));
    }

    #[test]
    fn value_at_index() {
        let mut bytes = Vec::new();
        write_values(&[1.5_f64, -2.0], Endianness::Little, &mut bytes).unwrap();
        assert_eq!(bytes.len(), 16);
        assert_eq!(
            read_value_at::<f64>(&bytes, 1, Endianness::Little).unwrap(),
            Some(-2.0)
        );
        assert_eq!(
            read_value_at::<f64>(&bytes, 2, Endianness::Little).unwrap(),
            None
        );
    }

    #[test]
    fn tags_are_pairs() {
        let mut bytes = Vec::new();
        write_values(&[Tag(0x0010, 0x0020)], Endianness::Little, &mut bytes).unwrap();
        assert_eq!(bytes, vec![0x10, 0x00, 0x20, 0x00]);
        let tags: Vec<Tag> = read_values(&bytes, Endianness::Little).unwrap();
        assert_eq!(tags, vec![Tag(0x0010, 0x0020)]);
    }
}
