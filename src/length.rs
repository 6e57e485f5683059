//! The length octets.
//!
//! This is a private module. The [`LengthOctets`] defined herein are not
//! publicly exposed; tokens hand out the encoded bytes as a slice.

use std::io;
use smallvec::SmallVec;


//------------ LengthOctets --------------------------------------------------

/// The encoded length octets of a value in definite form.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used
/// is determined by the most significant bit of the first octet. If it is
/// not set, the length octets are one octet long and the remaining bits of
/// this first octet provide the definite length. Thus, if the first octet
/// is less than 128, it provides the definite length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length in big-endian order.
///
/// We produce exactly one of four encodings, chosen solely by the
/// magnitude of the length: the short form for lengths up to 127, and the
/// long form with two, four, or eight subsequent octets for lengths that
/// fit 16, 32, and 64 bits respectively. The encoding is total over `u64`;
/// lengths beyond 64 bits are not supported.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LengthOctets(SmallVec<[u8; 9]>);

impl LengthOctets {
    /// Encodes a definite length.
    pub fn definite(len: u64) -> Self {
        let mut octets = SmallVec::new();
        if len <= 0x7F {
            octets.push(len as u8);
        }
        else if len <= u64::from(u16::MAX) {
            octets.push(0x80 | 2);
            octets.extend_from_slice(&(len as u16).to_be_bytes());
        }
        else if len <= u64::from(u32::MAX) {
            octets.push(0x80 | 4);
            octets.extend_from_slice(&(len as u32).to_be_bytes());
        }
        else {
            octets.push(0x80 | 8);
            octets.extend_from_slice(&len.to_be_bytes());
        }
        LengthOctets(octets)
    }

    /// Returns a slice of the encoded octets.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of encoded octets.
    ///
    /// This is one of 1, 3, 5, or 9.
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }

    /// Appends the encoded octets to the end of `target`.
    pub fn append_encoded(&self, target: &mut Vec<u8>) {
        target.extend_from_slice(&self.0)
    }

    /// Writes the encoded octets to the given writer.
    pub fn write_encoded<W: io::Write>(
        &self, target: &mut W
    ) -> Result<(), io::Error> {
        target.write_all(&self.0)
    }
}


//--- AsRef

impl AsRef<[u8]> for LengthOctets {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//============ Tests =========================================================
