//! Parse errors recorded by the tokenizer.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parsing rules for HTML documents, whether they
//! are syntactically correct or not." Errors are logged and tokenization carries
//! on; none of them abort the token stream.

use thiserror::Error;

use super::state::TokenizerState;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseErrorKind {
    /// A character that is not allowed where it appeared. NUL shows up here too,
    /// and is replaced by U+FFFD in the output.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),

    /// Input ended inside a tag, comment, DOCTYPE, or similar construct.
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// A malformed or unknown character reference.
    #[error("invalid character reference: {0}")]
    InvalidCharacterReference(&'static str),

    /// "duplicate-attribute parse error"; the later attribute is dropped.
    #[error("duplicate attribute {0:?}")]
    DuplicateAttribute(String),

    /// "end-tag-with-attributes parse error"; the attributes are dropped.
    #[error("end tag with attributes")]
    AttributesOnEndTag,

    /// "end-tag-with-trailing-solidus parse error"
    #[error("self-closing end tag")]
    SelfClosingEndTag,
}

/// A parse error with the state and input position it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{kind} in state [{state}] at position {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The tokenizer state that detected the error.
    pub state: TokenizerState,
    /// Byte offset into the input, approximately where the error occurred.
    pub position: usize,
}
