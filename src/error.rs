//! Error handling.
//!
//! This is a private module. Its public items are re-exported by the
//! parent.

use crate::kind::ValueKind;


//------------ Error ---------------------------------------------------------

/// An error happened while encoding or decoding a token.
///
/// Both variants are fatal to the call that produced them: there are no
/// partial tokens and no retries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A token was requested for a value kind without a content encoding.
    #[error("unsupported token kind: {0}")]
    UnsupportedKind(ValueKind),

    /// An encoded sequence did not conform to the encoding rules.
    ///
    /// This variant is reserved for decode-side validation, e.g. truncated
    /// length fields or a declared length that disagrees with the actual
    /// content. The encoder never produces it.
    #[error("malformed sequence")]
    MalformedSequence,
}
