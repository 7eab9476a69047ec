//! Helper methods shared by the tokenizer states.

use std::mem;

use lark_common::warning::warn_once;

use super::driver::HTMLTokenizer;
use super::error::{ParseError, ParseErrorKind};
use super::state::TokenizerState;
use super::token::{TagKind, Token};

/// U+FFFD REPLACEMENT CHARACTER, substituted for NUL and invalid references.
pub(super) const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// "ASCII whitespace is U+0009 TAB, U+000A LF, U+000C FF, U+000D CR, or U+0020 SPACE."
pub(super) const WHITESPACE: [char; 5] = ['\t', '\n', '\x0C', '\r', ' '];

// =============================================================================
// State transitions
// =============================================================================

impl HTMLTokenizer {
    /// Switch to `state` without consuming input.
    pub(super) fn transition(&mut self, state: TokenizerState) {
        self.state = state;
    }

    /// Consume the current character, then switch to `state`.
    pub(super) fn advance_transition(&mut self, state: TokenizerState) {
        self.reader.advance();
        self.state = state;
    }
}

// =============================================================================
// Emitting tokens
// =============================================================================

impl HTMLTokenizer {
    /// Emit a character. Adjacent characters are delivered as one token.
    pub(super) fn emit_char(&mut self, c: char) {
        self.pending_characters.push(c);
    }

    /// Emit a run of characters.
    pub(super) fn emit_str(&mut self, s: &str) {
        self.pending_characters.push_str(s);
    }

    /// Queue a token, after any character data still pending.
    pub(super) fn emit_token(&mut self, token: Token) {
        if !self.pending_characters.is_empty() {
            let data = mem::take(&mut self.pending_characters);
            self.queue.push_back(Token::Character { data });
        }
        if token.is_eof() {
            self.eof_emitted = true;
        }
        self.queue.push_back(token);
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof(&mut self) {
        self.emit_token(Token::EndOfFile);
    }

    /// Emit the current tag token.
    ///
    /// Start tags are remembered for the appropriate end tag check and may
    /// switch the content state (`<title>` to RCDATA, `<script>` to script
    /// data, ...). End tags lose any attributes they were written with.
    pub(super) fn emit_tag_pending(&mut self) {
        self.finish_attribute();
        match self.tag.kind {
            TagKind::Start => {
                self.last_start_tag_name = Some(self.tag.name.clone());
                if self.config.switch_content_modes {
                    self.next_content_state = TokenizerState::for_content_of(&self.tag.name);
                }
            }
            TagKind::End => {
                if self.tag.has_attributes() {
                    self.error(ParseErrorKind::AttributesOnEndTag);
                }
                if self.tag.self_closing {
                    self.error(ParseErrorKind::SelfClosingEndTag);
                }
            }
        }
        let token = self.tag.build();
        self.emit_token(token);
    }

    /// Emit the current comment token.
    pub(super) fn emit_comment_pending(&mut self) {
        let token = self.comment.build();
        self.emit_token(token);
    }

    /// Emit the current DOCTYPE token.
    pub(super) fn emit_doctype_pending(&mut self) {
        let token = self.doctype.build();
        self.emit_token(token);
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on. Emit the current
    /// DOCTYPE token." Then back to the data state.
    pub(super) fn emit_quirky_doctype(&mut self) {
        self.doctype.force_quirks = true;
        self.emit_doctype_pending();
        self.transition(TokenizerState::Data);
    }
}

// =============================================================================
// Pending tokens
// =============================================================================

impl HTMLTokenizer {
    /// "Create a new start tag token" / "Create a new end tag token"
    pub(super) fn create_tag_pending(&mut self, kind: TagKind) {
        self.tag.reset(kind);
    }

    /// "Create a comment token whose data is the empty string."
    pub(super) fn create_comment_pending(&mut self) {
        self.comment.reset();
    }

    /// A comment recovered from markup that only looked like one.
    pub(super) fn create_bogus_comment_pending(&mut self) {
        self.comment.reset();
        self.comment.bogus = true;
    }

    /// "Create a new DOCTYPE token."
    pub(super) fn create_doctype_pending(&mut self) {
        self.doctype.reset();
    }

    /// "Set the temporary buffer to the empty string."
    pub(super) fn create_temp_buffer(&mut self) {
        self.temporary_buffer.clear();
    }

    /// "Start a new attribute in the current tag token."
    pub(super) fn start_attribute(&mut self) {
        if let Some(name) = self.tag.start_attribute() {
            self.error(ParseErrorKind::DuplicateAttribute(name));
        }
    }

    /// Commit the attribute in progress, dropping it if its name is taken.
    pub(super) fn finish_attribute(&mut self) {
        if let Some(name) = self.tag.finish_attribute() {
            self.error(ParseErrorKind::DuplicateAttribute(name));
        }
    }

    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        self.last_start_tag_name
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(&self.tag.name))
    }
}

// =============================================================================
// Shared state logic
// =============================================================================

impl HTMLTokenizer {
    /// Text state loop for RAWTEXT and script data: bulk-read up to the next
    /// `<` or NUL.
    pub(super) fn read_data(&mut self, less_than_sign_state: TokenizerState) {
        match self.reader.current() {
            Some('<') => self.advance_transition(less_than_sign_state),
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.emit_char(REPLACEMENT_CHARACTER);
            }
            None => self.emit_eof(),
            Some(_) => {
                let data = self.reader.consume_raw_data();
                self.emit_str(&data);
            }
        }
    }

    /// Resolve a character reference in text, emitting `&` as-is when there
    /// is none, then continue in `return_state`.
    pub(super) fn read_char_ref(&mut self, return_state: TokenizerState) {
        match self.consume_character_reference(None, false) {
            Some(chars) => self.emit_str(&chars),
            None => self.emit_char('&'),
        }
        self.transition(return_state);
    }

    /// The `</` of a possible end tag has been read in a raw text state.
    pub(super) fn read_end_tag(&mut self, name_state: TokenizerState, fallback: TokenizerState) {
        if self.reader.matches_letter() {
            self.create_tag_pending(TagKind::End);
            self.create_temp_buffer();
            self.transition(name_state);
        } else {
            self.emit_str("</");
            self.transition(fallback);
        }
    }

    /// End tag name states of RCDATA, RAWTEXT, script data and escaped script
    /// data.
    ///
    /// The tag only ends the raw text if it is an appropriate end tag;
    /// otherwise `</` and the name are emitted as text and the tokenizer goes
    /// back to `fallback`.
    pub(super) fn handle_data_end_tag(&mut self, fallback: TokenizerState) {
        if self.reader.matches_letter() {
            let name = self.reader.consume_letter_sequence();
            self.tag.append_name(&name);
            self.temporary_buffer.push_str(&name);
            return;
        }

        let c = self.reader.consume();
        if self.is_appropriate_end_tag_token() {
            match c {
                Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                    self.transition(TokenizerState::BeforeAttributeName);
                    return;
                }
                Some('/') => {
                    self.transition(TokenizerState::SelfClosingStartTag);
                    return;
                }
                Some('>') => {
                    self.emit_tag_pending();
                    self.transition(TokenizerState::Data);
                    return;
                }
                _ => {}
            }
        }

        self.emit_str("</");
        let buffer = mem::take(&mut self.temporary_buffer);
        self.emit_str(&buffer);
        self.reader.unconsume();
        self.transition(fallback);
    }

    /// Script data double escape start and end states: collect a word and,
    /// at its end, go to `primary` if it was `script`, else to `fallback`.
    pub(super) fn handle_data_double_escape_tag(
        &mut self,
        primary: TokenizerState,
        fallback: TokenizerState,
    ) {
        if self.reader.matches_letter() {
            let name = self.reader.consume_letter_sequence();
            self.temporary_buffer.push_str(&name);
            self.emit_str(&name);
            return;
        }

        match self.reader.consume() {
            Some(c @ ('\t' | '\n' | '\x0C' | '\r' | ' ' | '/' | '>')) => {
                if self.temporary_buffer.eq_ignore_ascii_case("script") {
                    self.transition(primary);
                } else {
                    self.transition(fallback);
                }
                self.emit_char(c);
            }
            _ => {
                self.reader.unconsume();
                self.transition(fallback);
            }
        }
    }
}

// =============================================================================
// Parse errors
// =============================================================================

impl HTMLTokenizer {
    /// Record a parse error at the current position. Tokenization continues.
    pub(super) fn error(&mut self, kind: ParseErrorKind) {
        let error = ParseError {
            kind,
            state: self.state,
            position: self.reader.pos(),
        };
        if self.config.warnings {
            warn_once("HTML Tokenizer", &error.to_string());
        }
        if self
            .config
            .max_errors
            .is_none_or(|max| self.errors.len() < max)
        {
            self.errors.push(error);
        }
    }

    /// A character that is not allowed here; `None` means end of input.
    pub(super) fn unexpected_character_error(&mut self, c: Option<char>) {
        match c {
            Some(c) => self.error(ParseErrorKind::UnexpectedCharacter(c)),
            None => self.eof_error(),
        }
    }

    /// Input ended in the middle of a construct.
    pub(super) fn eof_error(&mut self) {
        self.error(ParseErrorKind::UnexpectedEof);
    }

    /// A malformed character reference.
    pub(super) fn character_reference_error(&mut self, message: &'static str) {
        self.error(ParseErrorKind::InvalidCharacterReference(message));
    }
}
