//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Character reference decoding per § 13.2.5.72.
mod character_reference;
/// Tokenizer options.
pub mod config;
/// The tokenizer driver: token queue, iteration and state dispatch.
mod driver;
/// Parse error types.
pub mod error;
/// Helper methods for tokenizer state transitions.
mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Input cursor used by the state machine.
pub mod reader;
/// Tokenizer states.
pub mod state;
/// State handlers.
mod states;
/// Token types produced by the tokenizer.
pub mod token;

pub use config::TokenizerConfig;
pub use driver::{HTMLTokenizer, tokenize};
pub use error::{ParseError, ParseErrorKind};
pub use reader::CharacterReader;
pub use state::TokenizerState;
pub use token::{Attribute, Token};
