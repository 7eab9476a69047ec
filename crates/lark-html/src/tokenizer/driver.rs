//! The tokenizer driver loop and its public API.

use std::collections::VecDeque;

use super::config::TokenizerConfig;
use super::error::ParseError;
use super::reader::CharacterReader;
use super::state::TokenizerState;
use super::token::{CommentBuilder, DoctypeBuilder, TagBuilder, Token};

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
///
/// Tokens are produced on demand: [`HTMLTokenizer::next_token`] runs the state
/// machine until at least one token is ready. The tokenizer is also an
/// [`Iterator`] that ends after the end-of-file token.
///
/// ```
/// use lark_html::{HTMLTokenizer, Token};
///
/// let tokens: Vec<Token> = HTMLTokenizer::new("<p>Hi</p>").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::start_tag("p"),
///         Token::character("Hi"),
///         Token::end_tag("p"),
///         Token::EndOfFile,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct HTMLTokenizer {
    pub(super) reader: CharacterReader,
    pub(super) config: TokenizerConfig,
    pub(super) state: TokenizerState,

    /// Pending tag, comment and DOCTYPE tokens. Only one is in use at a time.
    pub(super) tag: TagBuilder,
    pub(super) comment: CommentBuilder,
    pub(super) doctype: DoctypeBuilder,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    /// "The temporary buffer is used to temporarily store characters during certain
    /// tokenization operations, particularly for end tag detection in RCDATA/RAWTEXT states."
    pub(super) temporary_buffer: String,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    /// "The last start tag token emitted is used as part of the tree construction stage
    /// and in the RCDATA, RAWTEXT, and script data states."
    pub(super) last_start_tag_name: Option<String>,

    /// Character data not yet handed out, coalesced into one token.
    pub(super) pending_characters: String,
    pub(super) queue: VecDeque<Token>,

    /// Content state requested by the start tag just emitted. Applied once the
    /// current state handler returns, so it wins over the handler's own transition.
    pub(super) next_content_state: Option<TokenizerState>,

    pub(super) errors: Vec<ParseError>,
    pub(super) eof_emitted: bool,
    eof_returned: bool,
    token_stream: Vec<Token>,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input.
    ///
    /// "The tokenizer state machine consists of the states defined in the
    /// following subsections. The initial state is the data state."
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_config(input, TokenizerConfig::default())
    }

    /// Create a tokenizer with explicit options, for example to start inside
    /// the contents of a `<textarea>`.
    #[must_use]
    pub fn with_config(input: impl Into<String>, config: TokenizerConfig) -> Self {
        Self {
            reader: CharacterReader::new(input),
            state: config.initial_state,
            last_start_tag_name: config.last_start_tag.clone(),
            config,
            tag: TagBuilder::new(),
            comment: CommentBuilder::default(),
            doctype: DoctypeBuilder::default(),
            temporary_buffer: String::new(),
            pending_characters: String::new(),
            queue: VecDeque::new(),
            next_content_state: None,
            errors: Vec::new(),
            eof_emitted: false,
            eof_returned: false,
            token_stream: Vec::new(),
        }
    }

    /// The state the tokenizer is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Switch state from outside the tokenizer.
    ///
    /// [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
    /// switches the tokenizer into RCDATA, RAWTEXT, script data or PLAINTEXT
    /// after inserting certain elements.
    pub fn set_state(&mut self, state: TokenizerState) {
        self.state = state;
        self.next_content_state = None;
    }

    /// Parse errors seen so far, in input order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// The options this tokenizer was created with.
    #[must_use]
    pub const fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Return the next token, running the state machine as far as needed.
    ///
    /// Once the end-of-file token has been returned, every further call returns
    /// [`Token::EndOfFile`] again.
    pub fn next_token(&mut self) -> Token {
        while self.queue.is_empty() {
            if self.eof_emitted {
                return Token::EndOfFile;
            }
            self.step();
            if let Some(state) = self.next_content_state.take() {
                self.state = state;
            }
        }
        self.queue.pop_front().unwrap_or(Token::EndOfFile)
    }

    /// Run the tokenizer to completion.
    ///
    /// Processes the input and populates the token stream.
    pub fn run(&mut self) {
        while !self.eof_returned {
            let token = self.next_token();
            self.eof_returned = token.is_eof();
            self.token_stream.push(token);
        }
    }

    /// Consume the tokenizer and return the token stream, running it to the
    /// end first if needed.
    #[must_use]
    pub fn into_tokens(mut self) -> Vec<Token> {
        self.run();
        self.token_stream
    }

    /// Run the handler for the current state once.
    fn step(&mut self) {
        match self.state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::CharacterReferenceInData => {
                self.handle_character_reference_in_data_state();
            }
            TokenizerState::RCDATA => self.handle_rcdata_state(),
            TokenizerState::CharacterReferenceInRCDATA => {
                self.handle_character_reference_in_rcdata_state();
            }
            TokenizerState::RAWTEXT => self.handle_rawtext_state(),
            TokenizerState::ScriptData => self.handle_script_data_state(),
            TokenizerState::PLAINTEXT => self.handle_plaintext_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),
            TokenizerState::RCDATALessThanSign => self.handle_rcdata_less_than_sign_state(),
            TokenizerState::RCDATAEndTagOpen => self.handle_rcdata_end_tag_open_state(),
            TokenizerState::RCDATAEndTagName => self.handle_rcdata_end_tag_name_state(),
            TokenizerState::RAWTEXTLessThanSign => self.handle_rawtext_less_than_sign_state(),
            TokenizerState::RAWTEXTEndTagOpen => self.handle_rawtext_end_tag_open_state(),
            TokenizerState::RAWTEXTEndTagName => self.handle_rawtext_end_tag_name_state(),
            TokenizerState::ScriptDataLessThanSign => {
                self.handle_script_data_less_than_sign_state();
            }
            TokenizerState::ScriptDataEndTagOpen => self.handle_script_data_end_tag_open_state(),
            TokenizerState::ScriptDataEndTagName => self.handle_script_data_end_tag_name_state(),
            TokenizerState::ScriptDataEscapeStart => {
                self.handle_script_data_escape_start_state();
            }
            TokenizerState::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_dash_state();
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_data_escaped_state(),
            TokenizerState::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(),
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => {
                self.handle_script_data_escaped_end_tag_open_state();
            }
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_script_data_escaped_end_tag_name_state();
            }
            TokenizerState::ScriptDataDoubleEscapeStart => {
                self.handle_script_data_double_escape_start_state();
            }
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_data_double_escaped_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => {
                self.handle_script_data_double_escape_end_state();
            }
            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"');
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'');
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            TokenizerState::CommentStart => self.handle_comment_start_state(),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
            TokenizerState::CommentEnd => self.handle_comment_end_state(),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(),
            TokenizerState::DOCTYPE => self.handle_doctype_state(),
            TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(),
            TokenizerState::DOCTYPEName => self.handle_doctype_name_state(),
            TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(),
            TokenizerState::AfterDOCTYPEPublicKeyword => {
                self.handle_after_doctype_public_keyword_state();
            }
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_public_identifier_state();
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_public_identifier_quoted_state('"');
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_public_identifier_quoted_state('\'');
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            TokenizerState::AfterDOCTYPESystemKeyword => {
                self.handle_after_doctype_system_keyword_state();
            }
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_system_identifier_state();
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_system_identifier_quoted_state('"');
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_system_identifier_quoted_state('\'');
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            TokenizerState::BogusDOCTYPE => self.handle_bogus_doctype_state(),
            TokenizerState::CDATASection => self.handle_cdata_section_state(),
        }
    }
}

impl Iterator for HTMLTokenizer {
    type Item = Token;

    /// Yields every token up to and including the single end-of-file token.
    fn next(&mut self) -> Option<Token> {
        if self.eof_returned {
            return None;
        }
        let token = self.next_token();
        self.eof_returned = token.is_eof();
        Some(token)
    }
}

/// Tokenize a whole document in one call.
///
/// ```
/// use lark_html::{tokenize, Token};
///
/// let tokens = tokenize("<title>&amp;</title>");
/// assert_eq!(tokens[1], Token::character("&"));
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).into_tokens()
}
