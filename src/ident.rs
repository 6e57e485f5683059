//! The identifier octet of a BER encoded value.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use std::{fmt, io};


//------------ Ident ---------------------------------------------------------

/// The identifier octet of an encoded value.
///
/// Each BER encoded value starts with the _identifier octets._ They encode
/// the class of the value's tag, whether the value uses primitive or
/// constructed encoding, and the tag number. This type represents the
/// single leading octet of that sequence: the two most significant bits
/// carry the class, bit 6 the primitive/constructed distinction, and the
/// five least significant bits the tag number.
///
/// # Limitations
///
/// Tag numbers of 31 and above do not fit the five low bits. For those the
/// octet carries the escape pattern `0b1_1111` which announces subsequent
/// tag-number octets. Encoding those subsequent octets is not implemented;
/// such an identifier consists of the escape pattern alone.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Ident(u8);

impl Ident {
    /// The mask for the primitive/constructed bit.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number bits.
    ///
    /// (5 bits – 0b0001_1111).
    const NUMBER_MASK: u8 = 0x1f;

    /// Creates the identifier octet from its three components.
    ///
    /// The class and construction bits occupy disjoint ranges of the octet,
    /// so the components are combined with a plain bitwise or. Tag numbers
    /// of 31 and above store the escape pattern in the number bits.
    pub const fn new(class: Class, pc: Pc, number: u32) -> Self {
        let number = if number >= Self::NUMBER_MASK as u32 {
            Self::NUMBER_MASK
        }
        else {
            number as u8
        };
        Ident(class.into_u8() | pc.into_u8() | number)
    }

    /// Creates an identifier from a raw octet.
    pub const fn from_u8(octet: u8) -> Self {
        Ident(octet)
    }

    /// Returns the raw octet.
    pub const fn octet(self) -> u8 {
        self.0
    }

    /// Returns the class of the identifier.
    pub const fn class(self) -> Class {
        Class::from_u8(self.0)
    }

    /// Returns whether the value is to be a constructed value.
    pub const fn is_constructed(self) -> bool {
        self.0 & Self::CONSTRUCTED_MASK != 0
    }

    /// Returns the tag number bits of the identifier.
    ///
    /// If the number is the escape pattern `0b1_1111`, the actual tag
    /// number lives in subsequent octets that we do not produce.
    pub const fn number(self) -> u8 {
        self.0 & Self::NUMBER_MASK
    }

    /// Writes the identifier octet to a target.
    pub fn write_encoded<W: io::Write>(
        self, target: &mut W
    ) -> Result<(), io::Error> {
        target.write_all(&[self.0])
    }
}


//--- Debug

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ident({:#04x})", self.0)
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
///
/// The class determines the scope in which a tag number is meaningful.
/// See clause 8.1.2.2 of ITU Recommendation X.690.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::Context,
            0xC0..=0xFF => Self::Private,
        }
    }

    const fn into_u8(self) -> u8 {
        match self {
            Self::Universal => 0x00,
            Self::Application => 0x40,
            Self::Context => 0x80,
            Self::Private => 0xC0,
        }
    }
}


//------------ Pc ------------------------------------------------------------

/// The choice between primitive and constructed encoding.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Pc {
    Primitive,
    Constructed,
}

impl Pc {
    const fn into_u8(self) -> u8 {
        match self {
            Self::Primitive => 0x00,
            Self::Constructed => 0x20,
        }
    }
}


//============ Tests =========================================================
