//! The encoded token.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::io;
use bytes::Bytes;
use crate::error::Error;
use crate::ident::{Class, Ident, Pc};
use crate::kind::ValueKind;
use crate::length::LengthOctets;


//------------ Token ---------------------------------------------------------

/// A fully encoded BER TLV unit.
///
/// A token combines the identifier octet, the definite-form length octets,
/// and the content octets of a single value. It is produced by
/// [`Token::encode`] and immutable from then on. Serializing a token via
/// [`write_encoded`] emits the three parts as a flat concatenation with no
/// framing, separators, or terminator.
///
/// The content buffer is shared and cheap to clone; a token owns no other
/// resources.
///
/// [`Token::encode`]: #method.encode
/// [`write_encoded`]: #method.write_encoded
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The value kind the token carries.
    kind: ValueKind,

    /// The identifier octet.
    ident: Ident,

    /// The logical length of the content in octets.
    length: u64,

    /// The encoded length octets.
    length_octets: LengthOctets,

    /// The content octets. Exactly `length` of them.
    content: Bytes,

    /// Whether the token went through the full encode pipeline.
    encoded: bool,
}

impl Token {
    /// Encodes a value into a token.
    ///
    /// Builds the identifier octet from `class`, `pc`, and the tag number
    /// of `kind`, the length octets from the length of `source`, and the
    /// content octets from `source` itself. The three parts are built in
    /// that order; if the content encoding fails because `kind` is not
    /// supported, the whole operation fails and no token is produced.
    ///
    /// Encoding is a pure computation over its inputs. Calling it twice
    /// with the same arguments produces identical tokens.
    pub fn encode(
        kind: ValueKind,
        class: Class,
        pc: Pc,
        source: &[u8],
    ) -> Result<Self, Error> {
        let ident = Ident::new(class, pc, kind.number());
        let length = source.len() as u64;
        let length_octets = LengthOctets::definite(length);
        let content = encode_content(kind, source)?;
        Ok(Token {
            kind, ident, length, length_octets, content,
            encoded: true,
        })
    }

    /// Returns the value kind of the token.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the identifier octet.
    pub fn ident(&self) -> Ident {
        self.ident
    }

    /// Returns the logical length of the content in octets.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Returns the encoded length octets.
    pub fn length_octets(&self) -> &[u8] {
        self.length_octets.as_slice()
    }

    /// Returns the content octets.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns whether the token went through the full encode pipeline.
    ///
    /// Since [`encode`] is the only way to obtain a token, this is always
    /// `true`.
    ///
    /// [`encode`]: #method.encode
    pub fn is_encoded(&self) -> bool {
        self.encoded
    }

    /// Returns the total number of octets the token serializes into.
    pub fn encoded_len(&self) -> usize {
        1 + self.length_octets.encoded_len() + self.content.len()
    }

    /// Appends the serialized token to the end of `target`.
    pub fn append_encoded(&self, target: &mut Vec<u8>) {
        target.push(self.ident.octet());
        self.length_octets.append_encoded(target);
        target.extend_from_slice(&self.content);
    }

    /// Writes the serialized token to the given writer.
    pub fn write_encoded<W: io::Write>(
        &self, target: &mut W
    ) -> Result<(), io::Error> {
        self.ident.write_encoded(target)?;
        self.length_octets.write_encoded(target)?;
        target.write_all(&self.content)
    }

    /// Writes the serialized token into a new vec.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.encoded_len());
        self.append_encoded(&mut res);
        res
    }

    /// Writes the token as hex text to the given writer.
    ///
    /// Every serialized octet is rendered as a two-digit lowercase hex
    /// pair followed by a space.
    pub fn write_hex<W: io::Write>(
        &self, target: &mut W
    ) -> Result<(), io::Error> {
        write!(target, "{:02x} ", self.ident.octet())?;
        for &octet in self.length_octets.as_slice() {
            write!(target, "{:02x} ", octet)?;
        }
        for &octet in self.content.iter() {
            write!(target, "{:02x} ", octet)?;
        }
        Ok(())
    }
}


//------------ encode_content ------------------------------------------------

/// Encodes the source octets as content of the given kind.
///
/// This is where support for further value kinds gets added: one new match
/// arm per kind. Identifier and length construction are kind-agnostic and
/// stay untouched.
fn encode_content(
    kind: ValueKind, source: &[u8]
) -> Result<Bytes, Error> {
    match kind {
        // Verbatim copy, no transformation or validation.
        ValueKind::OctetString => Ok(Bytes::copy_from_slice(source)),
        _ => Err(Error::UnsupportedKind(kind)),
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn octet_string(source: &[u8]) -> Token {
        Token::encode(
            ValueKind::OctetString, Class::Universal, Pc::Primitive, source
        ).unwrap()
    }

    /// Reads back one token: identifier octet, length field, content.
    fn reparse(data: &[u8]) -> (Ident, u64, &[u8]) {
        let ident = Ident::from_u8(data[0]);
        let data = &data[1..];
        let first = data[0];
        if first & 0x80 == 0 {
            (ident, u64::from(first), &data[1..1 + first as usize])
        }
        else {
            let count = (first & 0x7F) as usize;
            let mut len = 0u64;
            for &octet in &data[1..1 + count] {
                len = len << 8 | u64::from(octet);
            }
            (ident, len, &data[1 + count..1 + count + len as usize])
        }
    }

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
    }

    #[test]
    fn identifier_octet() {
        let token = octet_string(b"xyz");
        // UNIVERSAL and PRIMITIVE leave the top three bits zero.
        assert_eq!(token.ident().octet(), 0x04);
        assert_eq!(token.ident().class(), Class::Universal);
        assert!(!token.ident().is_constructed());
        assert_eq!(token.ident().number(), 4);
    }

    #[test]
    fn content_fidelity() {
        let source = sample(300);
        let token = octet_string(&source);
        assert_eq!(token.content(), source.as_slice());
        assert_eq!(token.length(), 300);
        assert_eq!(token.kind(), ValueKind::OctetString);
        assert!(token.is_encoded());
    }

    #[test]
    fn length_class_boundaries() {
        assert_eq!(octet_string(&sample(127)).length_octets(), b"\x7F");
        assert_eq!(
            octet_string(&sample(128)).length_octets(),
            b"\x82\x00\x80"
        );
        assert_eq!(
            octet_string(&sample(65535)).length_octets(),
            b"\x82\xFF\xFF"
        );
        assert_eq!(
            octet_string(&sample(65536)).length_octets(),
            b"\x84\x00\x01\x00\x00"
        );
    }

    #[test]
    fn empty_input() {
        let token = octet_string(b"");
        assert_eq!(token.length_octets(), b"\x00");
        assert_eq!(token.content(), b"");
        assert_eq!(token.encoded_len(), 2);
        assert_eq!(token.to_vec(), b"\x04\x00");
    }

    #[test]
    fn round_trip() {
        for len in [
            0, 1, 2, 127, 128, 129, 255, 256, 4096,
            65534, 65535, 65536, 65537, 1 << 20,
        ] {
            let source = sample(len);
            let token = octet_string(&source);
            let encoded = token.to_vec();
            assert_eq!(encoded.len(), token.encoded_len());

            let (ident, length, content) = reparse(&encoded);
            assert_eq!(ident, token.ident());
            assert_eq!(length, len as u64);
            assert_eq!(content, source.as_slice());
        }
    }

    #[test]
    fn unsupported_kinds() {
        for kind in [
            ValueKind::Boolean, ValueKind::Integer, ValueKind::BitString,
            ValueKind::Null, ValueKind::Oid, ValueKind::ObjectDescriptor,
            ValueKind::External, ValueKind::Real, ValueKind::Enumerated,
            ValueKind::EmbeddedPdv,
        ] {
            assert_eq!(
                Token::encode(
                    kind, Class::Universal, Pc::Primitive, b"\x01"
                ),
                Err(Error::UnsupportedKind(kind))
            );
        }
    }

    #[test]
    fn idempotence() {
        let source = sample(1000);
        let left = octet_string(&source);
        let right = octet_string(&source);
        assert_eq!(left, right);
        assert_eq!(left.to_vec(), right.to_vec());
    }

    #[test]
    fn write_matches_append() {
        let token = octet_string(&sample(200));
        let mut written = Vec::new();
        token.write_encoded(&mut written).unwrap();
        assert_eq!(written, token.to_vec());
    }

    #[test]
    fn hex_rendering() {
        let token = octet_string(b"ab");
        let mut out = Vec::new();
        token.write_hex(&mut out).unwrap();
        assert_eq!(out, b"04 02 61 62 ");
    }
}
