//! The kinds of values a token can carry.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::fmt;


//------------ ValueKind -----------------------------------------------------

/// The ASN.1 universal value kind carried by a token.
///
/// This is a closed enumeration of the universal types the encoder knows
/// about. Each kind maps to its tag number from clause 8.4 of ITU
/// Recommendation X.690. Knowing about a kind does not mean being able to
/// encode its content: currently only [`OctetString`] has a content
/// encoding, all other kinds are rejected by [`Token::encode`].
///
/// [`OctetString`]: #variant.OctetString
/// [`Token::encode`]: ../token/struct.Token.html#method.encode
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// The BOOLEAN type, UNIVERSAL 1.
    Boolean,

    /// The INTEGER type, UNIVERSAL 2.
    Integer,

    /// The BIT STRING type, UNIVERSAL 3.
    BitString,

    /// The OCTET STRING type, UNIVERSAL 4.
    OctetString,

    /// The NULL type, UNIVERSAL 5.
    Null,

    /// The OBJECT IDENTIFIER type, UNIVERSAL 6.
    Oid,

    /// The ObjectDescriptor type, UNIVERSAL 7.
    ObjectDescriptor,

    /// The EXTERNAL and Instance-of types, UNIVERSAL 8.
    External,

    /// The REAL type, UNIVERSAL 9.
    Real,

    /// The ENUMERATED type, UNIVERSAL 10.
    Enumerated,

    /// The EMBEDDED PDV type, UNIVERSAL 11.
    EmbeddedPdv,
}

impl ValueKind {
    /// Returns the tag number assigned to the kind.
    pub fn number(self) -> u32 {
        match self {
            ValueKind::Boolean => 1,
            ValueKind::Integer => 2,
            ValueKind::BitString => 3,
            ValueKind::OctetString => 4,
            ValueKind::Null => 5,
            ValueKind::Oid => 6,
            ValueKind::ObjectDescriptor => 7,
            ValueKind::External => 8,
            ValueKind::Real => 9,
            ValueKind::Enumerated => 10,
            ValueKind::EmbeddedPdv => 11,
        }
    }
}


//--- Display

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValueKind::Boolean => write!(f, "BOOLEAN"),
            ValueKind::Integer => write!(f, "INTEGER"),
            ValueKind::BitString => write!(f, "BIT STRING"),
            ValueKind::OctetString => write!(f, "OCTET STRING"),
            ValueKind::Null => write!(f, "NULL"),
            ValueKind::Oid => write!(f, "OBJECT IDENTIFIER"),
            ValueKind::ObjectDescriptor => write!(f, "ObjectDescriptor"),
            ValueKind::External => write!(f, "EXTERNAL"),
            ValueKind::Real => write!(f, "REAL"),
            ValueKind::Enumerated => write!(f, "ENUMERATED"),
            ValueKind::EmbeddedPdv => write!(f, "EMBEDDED PDV"),
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    const ALL: &[ValueKind] = &[
        ValueKind::Boolean, ValueKind::Integer, ValueKind::BitString,
        ValueKind::OctetString, ValueKind::Null, ValueKind::Oid,
        ValueKind::ObjectDescriptor, ValueKind::External, ValueKind::Real,
        ValueKind::Enumerated, ValueKind::EmbeddedPdv,
    ];

    #[test]
    fn numbers_are_distinct_and_nonzero() {
        for (i, &kind) in ALL.iter().enumerate() {
            assert_eq!(kind.number(), i as u32 + 1);
        }
    }
}
