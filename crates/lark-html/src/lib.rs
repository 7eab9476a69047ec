//! WHATWG HTML tokenizer for the Lark toolkit.
//!
//! # Scope
//!
//! This crate implements the **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)):
//! - Data, RCDATA, RAWTEXT, script data and PLAINTEXT content states
//! - Tag, attribute, comment, DOCTYPE and CDATA handling
//! - Script data escape and double-escape states
//! - Named and numeric character references
//! - Parse error recovery: every input produces a token stream ending in EOF
//!
//! Tree construction is left to the consumer. Without one, the tokenizer switches
//! content states itself after `<title>`, `<script>`, `<style>` and friends (see
//! [`TokenizerConfig::switch_content_modes`]).
//!
//! ```
//! use lark_html::{tokenize, Token};
//!
//! let tokens = tokenize("<p class=intro>Hi</p>");
//! assert_eq!(tokens[0].attribute("class"), Some("intro"));
//! assert_eq!(tokens[1], Token::character("Hi"));
//! assert!(tokens[3].is_eof());
//! ```

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, HTMLTokenizer, ParseError, ParseErrorKind, Token, TokenizerConfig, TokenizerState,
    tokenize,
};
