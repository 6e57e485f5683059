//! Encoding of binary data as BER TLV tokens.
//!
//! This crate implements the encoding side of the Basic Encoding Rules
//! defined in ITU Recommendation X.690: it builds the identifier octet and
//! the definite-form length octets of a value and combines them with the
//! content octets into a self-contained [`Token`] that can be written to
//! any byte sink.
//!
//! Currently only the OCTET STRING value kind can be encoded. The other
//! universal kinds are present in [`ValueKind`] so that a token can be
//! requested for them, but asking for one results in an error. Decoding is
//! not implemented.

pub use self::error::Error;
pub use self::ident::{Class, Ident, Pc};
pub use self::kind::ValueKind;
pub use self::token::Token;

pub mod error;
pub mod ident;
pub mod kind;
pub mod token;

mod length;
