//! State handlers for the tokenizer state machine.
//!
//! Each handler looks at the current input, consumes what it needs, and
//! decides the next state. Text states read whole runs at once rather than a
//! character per call.

use super::driver::HTMLTokenizer;
use super::helpers::{REPLACEMENT_CHARACTER, WHITESPACE};
use super::state::TokenizerState;
use super::token::TagKind;

/// Characters that end an attribute name, sorted by code point.
const ATTRIBUTE_NAME_TERMINATORS: [char; 12] = [
    '\0', '\t', '\n', '\x0C', '\r', ' ', '"', '\'', '/', '<', '=', '>',
];

/// Characters that end an unquoted attribute value, sorted by code point.
const ATTRIBUTE_VALUE_UNQUOTED_TERMINATORS: [char; 13] = [
    '\0', '\t', '\n', '\x0C', '\r', ' ', '"', '&', '\'', '<', '=', '>', '`',
];

// =============================================================================
// Text states
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    pub(super) fn handle_data_state(&mut self) {
        match self.reader.current() {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => self.advance_transition(TokenizerState::CharacterReferenceInData),
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => self.advance_transition(TokenizerState::TagOpen),
            // "U+0000 NULL - This is an unexpected-null-character parse error."
            // Replaced like everywhere else, so no NUL reaches the output.
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.emit_char(REPLACEMENT_CHARACTER);
            }
            // "EOF - Emit an end-of-file token."
            None => self.emit_eof(),
            // "Anything else - Emit the current input character as a character token."
            Some(_) => {
                let data = self.reader.consume_data();
                self.emit_str(&data);
            }
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    /// with the data state as return state.
    pub(super) fn handle_character_reference_in_data_state(&mut self) {
        self.read_char_ref(TokenizerState::Data);
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    pub(super) fn handle_rcdata_state(&mut self) {
        match self.reader.current() {
            Some('&') => self.advance_transition(TokenizerState::CharacterReferenceInRCDATA),
            Some('<') => self.advance_transition(TokenizerState::RCDATALessThanSign),
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.emit_char(REPLACEMENT_CHARACTER);
            }
            None => self.emit_eof(),
            Some(_) => {
                // RCDATA stops at the same characters as the data state.
                let data = self.reader.consume_data();
                self.emit_str(&data);
            }
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    /// with the RCDATA state as return state.
    pub(super) fn handle_character_reference_in_rcdata_state(&mut self) {
        self.read_char_ref(TokenizerState::RCDATA);
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    pub(super) fn handle_rawtext_state(&mut self) {
        self.read_data(TokenizerState::RAWTEXTLessThanSign);
    }

    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    pub(super) fn handle_script_data_state(&mut self) {
        self.read_data(TokenizerState::ScriptDataLessThanSign);
    }

    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    ///
    /// There is no way out of PLAINTEXT; everything up to EOF is text.
    pub(super) fn handle_plaintext_state(&mut self) {
        match self.reader.current() {
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.emit_char(REPLACEMENT_CHARACTER);
            }
            None => self.emit_eof(),
            Some(_) => {
                let data = self.reader.consume_to('\0');
                self.emit_str(&data);
            }
        }
    }
}

// =============================================================================
// Tags
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    pub(super) fn handle_tag_open_state(&mut self) {
        match self.reader.current() {
            // "U+0021 EXCLAMATION MARK (!) - Switch to the markup declaration open state."
            Some('!') => self.advance_transition(TokenizerState::MarkupDeclarationOpen),
            // "U+002F SOLIDUS (/) - Switch to the end tag open state."
            Some('/') => self.advance_transition(TokenizerState::EndTagOpen),
            // "U+003F QUESTION MARK (?) - This is an
            // unexpected-question-mark-instead-of-tag-name parse error. Create a
            // comment token whose data is the empty string. Reconsume in the
            // bogus comment state."
            Some('?') => {
                self.unexpected_character_error(Some('?'));
                self.create_bogus_comment_pending();
                self.transition(TokenizerState::BogusComment);
            }
            // "ASCII alpha - Create a new start tag token, set its tag name to the
            // empty string. Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.create_tag_pending(TagKind::Start);
                self.transition(TokenizerState::TagName);
            }
            // "Anything else - This is an invalid-first-character-of-tag-name parse
            // error. Emit a U+003C LESS-THAN SIGN character token. Reconsume in
            // the data state." EOF is handled by the data state.
            c => {
                self.unexpected_character_error(c);
                self.emit_char('<');
                self.transition(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    pub(super) fn handle_end_tag_open_state(&mut self) {
        match self.reader.current() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.create_tag_pending(TagKind::End);
                self.transition(TokenizerState::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-end-tag-name parse
            // error. Switch to the data state."
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.advance_transition(TokenizerState::Data);
            }
            // "EOF - This is an eof-before-tag-name parse error. Emit a U+003C
            // LESS-THAN SIGN character token, a U+002F SOLIDUS character token
            // and an end-of-file token."
            None => {
                self.eof_error();
                self.emit_str("</");
                self.transition(TokenizerState::Data);
            }
            // "Anything else - This is an invalid-first-character-of-tag-name parse
            // error. Create a comment token whose data is the empty string.
            // Reconsume in the bogus comment state."
            Some(c) => {
                self.unexpected_character_error(Some(c));
                self.create_bogus_comment_pending();
                self.transition(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    pub(super) fn handle_tag_name_state(&mut self) {
        let name = self.reader.consume_tag_name();
        self.tag.append_name(&name);

        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.transition(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.tag.push_name(REPLACEMENT_CHARACTER);
            }
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file token."
            // The unfinished tag is dropped.
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(c) => self.tag.push_name(c),
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    pub(super) fn handle_before_attribute_name_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('/') => self.transition(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            // "U+003D EQUALS SIGN (=) - This is an
            // unexpected-equals-sign-before-attribute-name parse error. Start a new
            // attribute in the current tag token. Set that attribute's name to the
            // current input character, and its value to the empty string."
            Some('=') => {
                self.unexpected_character_error(Some('='));
                self.start_attribute();
                self.tag.push_attribute_name('=');
                self.transition(TokenizerState::AttributeName);
            }
            Some(_) => {
                self.start_attribute();
                self.reader.unconsume();
                self.transition(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    pub(super) fn handle_attribute_name_state(&mut self) {
        let name = self
            .reader
            .consume_to_any_sorted(&ATTRIBUTE_NAME_TERMINATORS);
        self.tag.append_attribute_name(&name);

        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::AfterAttributeName);
            }
            Some('/') => self.transition(TokenizerState::SelfClosingStartTag),
            Some('=') => self.transition(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.tag.push_attribute_name(REPLACEMENT_CHARACTER);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            // "U+0022 QUOTATION MARK ("), U+0027 APOSTROPHE ('), U+003C LESS-THAN
            // SIGN (<) - This is an unexpected-character-in-attribute-name parse
            // error. Treat it as per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<')) => {
                self.unexpected_character_error(Some(c));
                self.tag.push_attribute_name(c);
            }
            Some(c) => self.tag.push_attribute_name(c),
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    pub(super) fn handle_after_attribute_name_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('/') => self.transition(TokenizerState::SelfClosingStartTag),
            Some('=') => self.transition(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                self.start_attribute();
                self.reader.unconsume();
                self.transition(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    pub(super) fn handle_before_attribute_value_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('"') => self.transition(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.transition(TokenizerState::AttributeValueSingleQuoted),
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-attribute-value
            // parse error. Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                self.reader.unconsume();
                self.transition(TokenizerState::AttributeValueUnquoted);
            }
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// and [§ 13.2.5.37 (single-quoted)](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state),
    /// which differ only in the closing quote.
    pub(super) fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        let value = self.reader.consume_to_any(&[quote, '&', '\0']);
        self.tag.append_attribute_value(&value);

        match self.reader.consume() {
            Some('&') => match self.consume_character_reference(Some(quote), true) {
                Some(chars) => self.tag.append_attribute_value(&chars),
                None => self.tag.push_attribute_value('&'),
            },
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.tag.push_attribute_value(REPLACEMENT_CHARACTER);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(c) if c == quote => {
                self.transition(TokenizerState::AfterAttributeValueQuoted);
            }
            Some(c) => self.tag.push_attribute_value(c),
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    pub(super) fn handle_attribute_value_unquoted_state(&mut self) {
        let value = self
            .reader
            .consume_to_any_sorted(&ATTRIBUTE_VALUE_UNQUOTED_TERMINATORS);
        self.tag.append_attribute_value(&value);

        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BeforeAttributeName);
            }
            Some('&') => match self.consume_character_reference(Some('>'), true) {
                Some(chars) => self.tag.append_attribute_value(&chars),
                None => self.tag.push_attribute_value('&'),
            },
            Some('>') => {
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.tag.push_attribute_value(REPLACEMENT_CHARACTER);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            // "unexpected-character-in-unquoted-attribute-value parse error. Treat
            // it as per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.unexpected_character_error(Some(c));
                self.tag.push_attribute_value(c);
            }
            Some(c) => self.tag.push_attribute_value(c),
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    pub(super) fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.transition(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            // "missing-whitespace-between-attributes parse error. Reconsume in the
            // before attribute name state."
            Some(c) => {
                self.unexpected_character_error(Some(c));
                self.reader.unconsume();
                self.transition(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    pub(super) fn handle_self_closing_start_tag_state(&mut self) {
        match self.reader.consume() {
            Some('>') => {
                self.tag.self_closing = true;
                self.emit_tag_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            // "unexpected-solidus-in-tag parse error. Reconsume in the before
            // attribute name state."
            Some(c) => {
                self.unexpected_character_error(Some(c));
                self.reader.unconsume();
                self.transition(TokenizerState::BeforeAttributeName);
            }
        }
    }
}

// =============================================================================
// RCDATA and RAWTEXT end tags
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    pub(super) fn handle_rcdata_less_than_sign_state(&mut self) {
        if self.reader.matches('/') {
            self.create_temp_buffer();
            self.advance_transition(TokenizerState::RCDATAEndTagOpen);
            return;
        }

        // A start tag inside RCDATA with no end tag anywhere after it: rather than
        // swallow the rest of the document as text, close the element here and
        // read the `<` as markup.
        if let Some(name) = self.unclosed_rcdata_element() {
            self.create_tag_pending(TagKind::End);
            self.tag.append_name(&name);
            self.emit_tag_pending();
            self.transition(TokenizerState::TagOpen);
            return;
        }

        self.emit_char('<');
        self.transition(TokenizerState::RCDATA);
    }

    /// The RCDATA element's name, if a tag starts here and its end tag appears
    /// nowhere in the rest of the input.
    fn unclosed_rcdata_element(&mut self) -> Option<String> {
        if !self.reader.matches_letter() {
            return None;
        }
        let name = self.last_start_tag_name.clone()?;
        if self.reader.contains_ignore_case(&format!("</{name}")) {
            None
        } else {
            Some(name)
        }
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    pub(super) fn handle_rcdata_end_tag_open_state(&mut self) {
        self.read_end_tag(TokenizerState::RCDATAEndTagName, TokenizerState::RCDATA);
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    pub(super) fn handle_rcdata_end_tag_name_state(&mut self) {
        self.handle_data_end_tag(TokenizerState::RCDATA);
    }

    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    pub(super) fn handle_rawtext_less_than_sign_state(&mut self) {
        if self.reader.matches('/') {
            self.create_temp_buffer();
            self.advance_transition(TokenizerState::RAWTEXTEndTagOpen);
        } else {
            self.emit_char('<');
            self.transition(TokenizerState::RAWTEXT);
        }
    }

    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    pub(super) fn handle_rawtext_end_tag_open_state(&mut self) {
        self.read_end_tag(TokenizerState::RAWTEXTEndTagName, TokenizerState::RAWTEXT);
    }

    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    pub(super) fn handle_rawtext_end_tag_name_state(&mut self) {
        self.handle_data_end_tag(TokenizerState::RAWTEXT);
    }
}

// =============================================================================
// Script data
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    pub(super) fn handle_script_data_less_than_sign_state(&mut self) {
        match self.reader.consume() {
            Some('/') => {
                self.create_temp_buffer();
                self.transition(TokenizerState::ScriptDataEndTagOpen);
            }
            // "Switch to the script data escape start state. Emit a U+003C
            // LESS-THAN SIGN character token and a U+0021 EXCLAMATION MARK
            // character token."
            Some('!') => {
                self.emit_str("<!");
                self.transition(TokenizerState::ScriptDataEscapeStart);
            }
            _ => {
                self.emit_char('<');
                self.reader.unconsume();
                self.transition(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    pub(super) fn handle_script_data_end_tag_open_state(&mut self) {
        self.read_end_tag(
            TokenizerState::ScriptDataEndTagName,
            TokenizerState::ScriptData,
        );
    }

    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    pub(super) fn handle_script_data_end_tag_name_state(&mut self) {
        self.handle_data_end_tag(TokenizerState::ScriptData);
    }

    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    pub(super) fn handle_script_data_escape_start_state(&mut self) {
        if self.reader.matches('-') {
            self.emit_char('-');
            self.advance_transition(TokenizerState::ScriptDataEscapeStartDash);
        } else {
            self.transition(TokenizerState::ScriptData);
        }
    }

    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    pub(super) fn handle_script_data_escape_start_dash_state(&mut self) {
        if self.reader.matches('-') {
            self.emit_char('-');
            self.advance_transition(TokenizerState::ScriptDataEscapedDashDash);
        } else {
            self.transition(TokenizerState::ScriptData);
        }
    }

    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    pub(super) fn handle_script_data_escaped_state(&mut self) {
        match self.reader.current() {
            Some('-') => {
                self.emit_char('-');
                self.advance_transition(TokenizerState::ScriptDataEscapedDash);
            }
            Some('<') => self.advance_transition(TokenizerState::ScriptDataEscapedLessThanSign),
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.emit_char(REPLACEMENT_CHARACTER);
            }
            // "EOF - This is an eof-in-script-html-comment-like-text parse error.
            // Emit an end-of-file token."
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                let data = self.reader.consume_to_any(&['-', '<', '\0']);
                self.emit_str(&data);
            }
        }
    }

    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    pub(super) fn handle_script_data_escaped_dash_state(&mut self) {
        match self.reader.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(TokenizerState::ScriptDataEscapedDashDash);
            }
            Some('<') => self.transition(TokenizerState::ScriptDataEscapedLessThanSign),
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.emit_char(REPLACEMENT_CHARACTER);
                self.transition(TokenizerState::ScriptDataEscaped);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    pub(super) fn handle_script_data_escaped_dash_dash_state(&mut self) {
        match self.reader.consume() {
            Some('-') => self.emit_char('-'),
            Some('<') => self.transition(TokenizerState::ScriptDataEscapedLessThanSign),
            Some('>') => {
                self.emit_char('>');
                self.transition(TokenizerState::ScriptData);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.emit_char(REPLACEMENT_CHARACTER);
                self.transition(TokenizerState::ScriptDataEscaped);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    pub(super) fn handle_script_data_escaped_less_than_sign_state(&mut self) {
        if self.reader.matches_letter() {
            self.create_temp_buffer();
            self.emit_char('<');
            self.transition(TokenizerState::ScriptDataDoubleEscapeStart);
        } else if self.reader.matches('/') {
            self.create_temp_buffer();
            self.advance_transition(TokenizerState::ScriptDataEscapedEndTagOpen);
        } else {
            self.emit_char('<');
            self.transition(TokenizerState::ScriptDataEscaped);
        }
    }

    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    pub(super) fn handle_script_data_escaped_end_tag_open_state(&mut self) {
        self.read_end_tag(
            TokenizerState::ScriptDataEscapedEndTagName,
            TokenizerState::ScriptDataEscaped,
        );
    }

    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    pub(super) fn handle_script_data_escaped_end_tag_name_state(&mut self) {
        self.handle_data_end_tag(TokenizerState::ScriptDataEscaped);
    }

    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    pub(super) fn handle_script_data_double_escape_start_state(&mut self) {
        self.handle_data_double_escape_tag(
            TokenizerState::ScriptDataDoubleEscaped,
            TokenizerState::ScriptDataEscaped,
        );
    }

    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    pub(super) fn handle_script_data_double_escaped_state(&mut self) {
        match self.reader.current() {
            Some('-') => {
                self.emit_char('-');
                self.advance_transition(TokenizerState::ScriptDataDoubleEscapedDash);
            }
            Some('<') => {
                self.emit_char('<');
                self.advance_transition(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.emit_char(REPLACEMENT_CHARACTER);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                let data = self.reader.consume_to_any(&['-', '<', '\0']);
                self.emit_str(&data);
            }
        }
    }

    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    pub(super) fn handle_script_data_double_escaped_dash_state(&mut self) {
        match self.reader.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(TokenizerState::ScriptDataDoubleEscapedDashDash);
            }
            Some('<') => {
                self.emit_char('<');
                self.transition(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.emit_char(REPLACEMENT_CHARACTER);
                self.transition(TokenizerState::ScriptDataDoubleEscaped);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(TokenizerState::ScriptDataDoubleEscaped);
            }
        }
    }

    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    pub(super) fn handle_script_data_double_escaped_dash_dash_state(&mut self) {
        match self.reader.consume() {
            Some('-') => self.emit_char('-'),
            Some('<') => {
                self.emit_char('<');
                self.transition(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('>') => {
                self.emit_char('>');
                self.transition(TokenizerState::ScriptData);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.emit_char(REPLACEMENT_CHARACTER);
                self.transition(TokenizerState::ScriptDataDoubleEscaped);
            }
            None => {
                self.eof_error();
                self.transition(TokenizerState::Data);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(TokenizerState::ScriptDataDoubleEscaped);
            }
        }
    }

    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    pub(super) fn handle_script_data_double_escaped_less_than_sign_state(&mut self) {
        if self.reader.matches('/') {
            self.emit_char('/');
            self.create_temp_buffer();
            self.advance_transition(TokenizerState::ScriptDataDoubleEscapeEnd);
        } else {
            self.transition(TokenizerState::ScriptDataDoubleEscaped);
        }
    }

    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    pub(super) fn handle_script_data_double_escape_end_state(&mut self) {
        self.handle_data_double_escape_tag(
            TokenizerState::ScriptDataEscaped,
            TokenizerState::ScriptDataDoubleEscaped,
        );
    }
}

// =============================================================================
// Comments
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    ///
    /// Everything up to the next `>` (or EOF) becomes the comment's data.
    pub(super) fn handle_bogus_comment_state(&mut self) {
        let data = self.reader.consume_to('>');
        self.comment
            .data
            .push_str(&data.replace('\0', "\u{FFFD}"));
        self.emit_comment_pending();
        self.advance_transition(TokenizerState::Data);
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    pub(super) fn handle_markup_declaration_open_state(&mut self) {
        if self.reader.match_consume("--") {
            self.create_comment_pending();
            self.transition(TokenizerState::CommentStart);
        } else if self.reader.match_consume_ignore_case("DOCTYPE") {
            self.create_doctype_pending();
            self.transition(TokenizerState::DOCTYPE);
        } else if self.reader.match_consume("[CDATA[") {
            self.transition(TokenizerState::CDATASection);
        } else {
            // "incorrectly-opened-comment parse error. Create a comment token whose
            // data is the empty string. Switch to the bogus comment state (don't
            // consume anything in the current state)."
            let c = self.reader.current();
            self.unexpected_character_error(c);
            self.create_bogus_comment_pending();
            self.transition(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    pub(super) fn handle_comment_start_state(&mut self) {
        match self.reader.consume() {
            Some('-') => self.transition(TokenizerState::CommentStartDash),
            // "abrupt-closing-of-empty-comment parse error"
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            _ => {
                self.reader.unconsume();
                self.transition(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    pub(super) fn handle_comment_start_dash_state(&mut self) {
        match self.reader.consume() {
            Some('-') => self.transition(TokenizerState::CommentEnd),
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                self.comment.data.push('-');
                self.reader.unconsume();
                self.transition(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    pub(super) fn handle_comment_state(&mut self) {
        match self.reader.current() {
            Some('-') => self.advance_transition(TokenizerState::CommentEndDash),
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.reader.advance();
                self.comment.data.push(REPLACEMENT_CHARACTER);
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current
            // comment token. Emit an end-of-file token."
            None => {
                self.eof_error();
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                let data = self.reader.consume_to_any(&['-', '\0']);
                self.comment.data.push_str(&data);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    pub(super) fn handle_comment_end_dash_state(&mut self) {
        match self.reader.consume() {
            Some('-') => self.transition(TokenizerState::CommentEnd),
            None => {
                self.eof_error();
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                self.comment.data.push('-');
                self.reader.unconsume();
                self.transition(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    pub(super) fn handle_comment_end_state(&mut self) {
        match self.reader.consume() {
            Some('>') => {
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            Some('!') => self.transition(TokenizerState::CommentEndBang),
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data."
            Some('-') => self.comment.data.push('-'),
            None => {
                self.eof_error();
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                self.comment.data.push_str("--");
                self.reader.unconsume();
                self.transition(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    pub(super) fn handle_comment_end_bang_state(&mut self) {
        match self.reader.consume() {
            Some('-') => {
                self.comment.data.push_str("--!");
                self.transition(TokenizerState::CommentEndDash);
            }
            // "incorrectly-closed-comment parse error"
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.emit_comment_pending();
                self.transition(TokenizerState::Data);
            }
            Some(_) => {
                self.comment.data.push_str("--!");
                self.reader.unconsume();
                self.transition(TokenizerState::Comment);
            }
        }
    }
}

// =============================================================================
// DOCTYPE
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BeforeDOCTYPEName);
            }
            // "EOF - This is an eof-in-doctype parse error. Create a new DOCTYPE
            // token. Set its force-quirks flag to on. Emit the current token."
            None => {
                self.eof_error();
                self.emit_quirky_doctype();
            }
            Some('>') => {
                self.reader.unconsume();
                self.transition(TokenizerState::BeforeDOCTYPEName);
            }
            // "missing-whitespace-before-doctype-name parse error"
            Some(c) => {
                self.unexpected_character_error(Some(c));
                self.reader.unconsume();
                self.transition(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.doctype.name.push(REPLACEMENT_CHARACTER);
                self.transition(TokenizerState::DOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-doctype-name parse
            // error. Set the current DOCTYPE token's force-quirks flag to on. Switch
            // to the data state. Emit the current DOCTYPE token."
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_quirky_doctype();
            }
            None => {
                self.eof_error();
                self.emit_quirky_doctype();
            }
            Some(c) => {
                self.doctype.name.push(c.to_ascii_lowercase());
                self.transition(TokenizerState::DOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        if self.reader.matches_letter() {
            let name = self.reader.consume_letter_sequence();
            self.doctype.name.push_str(&name.to_ascii_lowercase());
            return;
        }

        match self.reader.consume() {
            Some('>') => {
                self.emit_doctype_pending();
                self.transition(TokenizerState::Data);
            }
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::AfterDOCTYPEName);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.doctype.name.push(REPLACEMENT_CHARACTER);
            }
            None => {
                self.eof_error();
                self.emit_quirky_doctype();
            }
            Some(c) => self.doctype.name.push(c),
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        if self.reader.is_empty() {
            self.eof_error();
            self.emit_quirky_doctype();
        } else if self.reader.matches_any(&WHITESPACE) {
            self.reader.advance();
        } else if self.reader.matches('>') {
            self.emit_doctype_pending();
            self.advance_transition(TokenizerState::Data);
        } else if self.reader.match_consume_ignore_case("PUBLIC") {
            self.transition(TokenizerState::AfterDOCTYPEPublicKeyword);
        } else if self.reader.match_consume_ignore_case("SYSTEM") {
            self.transition(TokenizerState::AfterDOCTYPESystemKeyword);
        } else {
            // "invalid-character-sequence-after-doctype-name parse error"
            let c = self.reader.current();
            self.unexpected_character_error(c);
            self.doctype.force_quirks = true;
            self.advance_transition(TokenizerState::BogusDOCTYPE);
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    pub(super) fn handle_after_doctype_public_keyword_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BeforeDOCTYPEPublicIdentifier);
            }
            // "missing-whitespace-after-doctype-public-keyword parse error"
            Some('"') => {
                self.unexpected_character_error(Some('"'));
                self.doctype.public_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.unexpected_character_error(Some('\''));
                self.doctype.public_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPEPublicIdentifierSingleQuoted);
            }
            c => self.missing_doctype_identifier(c),
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    pub(super) fn handle_before_doctype_public_identifier_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('"') => {
                self.doctype.public_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.doctype.public_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPEPublicIdentifierSingleQuoted);
            }
            c => self.missing_doctype_identifier(c),
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// and [§ 13.2.5.60 (single-quoted)](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    pub(super) fn handle_doctype_public_identifier_quoted_state(&mut self, quote: char) {
        match self.reader.consume() {
            Some(c) if c == quote => {
                self.transition(TokenizerState::AfterDOCTYPEPublicIdentifier);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.doctype.push_public_identifier(REPLACEMENT_CHARACTER);
            }
            // "abrupt-doctype-public-identifier parse error"
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_quirky_doctype();
            }
            None => {
                self.eof_error();
                self.emit_quirky_doctype();
            }
            Some(c) => self.doctype.push_public_identifier(c),
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.emit_doctype_pending();
                self.transition(TokenizerState::Data);
            }
            // "missing-whitespace-between-doctype-public-and-system-identifiers
            // parse error"
            Some('"') => {
                self.unexpected_character_error(Some('"'));
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.unexpected_character_error(Some('\''));
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            c => self.missing_doctype_identifier(c),
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('>') => {
                self.emit_doctype_pending();
                self.transition(TokenizerState::Data);
            }
            Some('"') => {
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            c => self.missing_doctype_identifier(c),
        }
    }

    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_system_keyword_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {
                self.transition(TokenizerState::BeforeDOCTYPESystemIdentifier);
            }
            // "missing-whitespace-after-doctype-system-keyword parse error"
            Some('"') => {
                self.unexpected_character_error(Some('"'));
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.unexpected_character_error(Some('\''));
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            c => self.missing_doctype_identifier(c),
        }
    }

    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_system_identifier_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('"') => {
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.doctype.system_identifier = Some(String::new());
                self.transition(TokenizerState::DOCTYPESystemIdentifierSingleQuoted);
            }
            c => self.missing_doctype_identifier(c),
        }
    }

    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    /// and [§ 13.2.5.66 (single-quoted)](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    pub(super) fn handle_doctype_system_identifier_quoted_state(&mut self, quote: char) {
        match self.reader.consume() {
            Some(c) if c == quote => {
                self.transition(TokenizerState::AfterDOCTYPESystemIdentifier);
            }
            Some('\0') => {
                self.unexpected_character_error(Some('\0'));
                self.doctype.push_system_identifier(REPLACEMENT_CHARACTER);
            }
            // "abrupt-doctype-system-identifier parse error"
            Some('>') => {
                self.unexpected_character_error(Some('>'));
                self.emit_quirky_doctype();
            }
            None => {
                self.eof_error();
                self.emit_quirky_doctype();
            }
            Some(c) => self.doctype.push_system_identifier(c),
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.reader.consume() {
            Some('\t' | '\n' | '\x0C' | '\r' | ' ') => {}
            Some('>') => {
                self.emit_doctype_pending();
                self.transition(TokenizerState::Data);
            }
            None => {
                self.eof_error();
                self.emit_quirky_doctype();
            }
            // "unexpected-character-after-doctype-system-identifier parse error.
            // Reconsume in the bogus DOCTYPE state. (This does not set the current
            // DOCTYPE token's force-quirks flag to on.)"
            Some(c) => {
                self.unexpected_character_error(Some(c));
                self.transition(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    ///
    /// Skips to the closing `>`; EOF here is not an error.
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        let _ = self.reader.consume_to('>');
        self.emit_doctype_pending();
        self.advance_transition(TokenizerState::Data);
    }

    /// Shared fallback of the DOCTYPE keyword and identifier states when the
    /// expected quoted identifier is missing: `>` or EOF ends the DOCTYPE, anything
    /// else turns the rest into a bogus DOCTYPE. Either way quirks mode is forced.
    fn missing_doctype_identifier(&mut self, c: Option<char>) {
        self.unexpected_character_error(c);
        match c {
            Some('>') | None => self.emit_quirky_doctype(),
            Some(_) => {
                self.doctype.force_quirks = true;
                self.transition(TokenizerState::BogusDOCTYPE);
            }
        }
    }
}

// =============================================================================
// CDATA
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    ///
    /// The section's contents are passed through as text.
    pub(super) fn handle_cdata_section_state(&mut self) {
        let data = self.reader.consume_to_sequence("]]>");
        self.emit_str(&data);
        if !self.reader.match_consume("]]>") {
            // "eof-in-cdata parse error"
            self.eof_error();
        }
        self.transition(TokenizerState::Data);
    }
}
