//! Character reference decoding for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The tokenizer resolves a reference in one step once it has consumed the `&`,
//! instead of walking the named/numeric sub-states one character at a time.

use super::driver::HTMLTokenizer;
use super::helpers::REPLACEMENT_CHARACTER;
use super::named_character_references::{longest_legacy_prefix, lookup_entity};

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// Code points 0x80 to 0x9F are read as Windows-1252, the way legacy content
/// was written. The five unassigned slots have no mapping.
const fn windows_1252(code_point: u32) -> Option<char> {
    match code_point {
        0x80 => Some('\u{20AC}'),
        0x82 => Some('\u{201A}'),
        0x83 => Some('\u{0192}'),
        0x84 => Some('\u{201E}'),
        0x85 => Some('\u{2026}'),
        0x86 => Some('\u{2020}'),
        0x87 => Some('\u{2021}'),
        0x88 => Some('\u{02C6}'),
        0x89 => Some('\u{2030}'),
        0x8A => Some('\u{0160}'),
        0x8B => Some('\u{2039}'),
        0x8C => Some('\u{0152}'),
        0x8E => Some('\u{017D}'),
        0x91 => Some('\u{2018}'),
        0x92 => Some('\u{2019}'),
        0x93 => Some('\u{201C}'),
        0x94 => Some('\u{201D}'),
        0x95 => Some('\u{2022}'),
        0x96 => Some('\u{2013}'),
        0x97 => Some('\u{2014}'),
        0x98 => Some('\u{02DC}'),
        0x99 => Some('\u{2122}'),
        0x9A => Some('\u{0161}'),
        0x9B => Some('\u{203A}'),
        0x9C => Some('\u{0153}'),
        0x9E => Some('\u{017E}'),
        0x9F => Some('\u{0178}'),
        _ => None,
    }
}

/// "A noncharacter is a code point that is in the range U+FDD0 to U+FDEF,
/// inclusive, or U+FFFE, U+FFFF, U+1FFFE, U+1FFFF, ... U+10FFFE, or U+10FFFF."
const fn is_noncharacter(code_point: u32) -> bool {
    matches!(code_point, 0xFDD0..=0xFDEF) || code_point & 0xFFFE == 0xFFFE
}

/// C0 controls and DEL, other than the whitespace controls tab, LF, FF and CR.
const fn is_disallowed_control(code_point: u32) -> bool {
    matches!(code_point, 0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F)
}

impl HTMLTokenizer {
    /// Try to read a character reference; the `&` has already been consumed.
    ///
    /// Returns the replacement text, or `None` if there is no reference here,
    /// in which case the input is left right after the `&` and the caller emits
    /// the `&` as-is.
    ///
    /// `additional_allowed` is the character that ends the surrounding
    /// attribute value (its quote, or `>` when unquoted). `in_attribute`
    /// applies the historical rule that `&copy=` and `&copyx` in attribute
    /// values are not references.
    pub(super) fn consume_character_reference(
        &mut self,
        additional_allowed: Option<char>,
        in_attribute: bool,
    ) -> Option<String> {
        match self.reader.current() {
            None | Some('\t' | '\n' | '\x0C' | '\r' | ' ' | '<' | '&') => return None,
            Some(c) if Some(c) == additional_allowed => return None,
            Some(_) => {}
        }

        self.reader.mark();
        if self.reader.match_consume("#") {
            self.consume_numeric_reference()
        } else {
            self.consume_named_reference(in_attribute)
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the named character references
    /// table."
    fn consume_named_reference(&mut self, in_attribute: bool) -> Option<String> {
        let name = self.reader.consume_letter_then_digit_sequence();
        let has_semicolon = self.reader.matches(';');

        if let Some(value) = lookup_entity(&name).filter(|_| has_semicolon) {
            self.reader.advance();
            self.reader.unmark();
            return Some(value.to_owned());
        }

        let Some((matched, value)) = longest_legacy_prefix(&name) else {
            if has_semicolon && !name.is_empty() {
                self.character_reference_error("unknown named character reference");
            }
            self.reader.rewind_to_mark();
            return None;
        };

        // "If the character reference was consumed as part of an attribute, and
        // the last character matched is not a U+003B SEMICOLON character (;),
        // and the next input character is either a U+003D EQUALS SIGN character
        // (=) or an ASCII alphanumeric, then, for historical reasons, flush code
        // points consumed as a character reference and switch to the return state."
        let following = name[matched.len()..]
            .chars()
            .next()
            .or_else(|| self.reader.current());
        if in_attribute && following.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric()) {
            self.reader.rewind_to_mark();
            return None;
        }

        self.character_reference_error("missing semicolon after character reference");
        // Only the matched prefix is part of the reference; the rest of the
        // name is read again as text.
        self.reader.rewind_to_mark();
        let _ = self.reader.match_consume(matched);
        Some(value.to_owned())
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    ///
    /// The `&#` has been consumed.
    fn consume_numeric_reference(&mut self) -> Option<String> {
        let is_hex = self.reader.match_consume_ignore_case("x");
        let digits = if is_hex {
            self.reader.consume_hex_sequence()
        } else {
            self.reader.consume_digit_sequence()
        };

        if digits.is_empty() {
            // "absence-of-digits-in-numeric-character-reference parse error"
            self.character_reference_error("numeric character reference without digits");
            self.reader.rewind_to_mark();
            return None;
        }
        self.reader.unmark();

        if !self.reader.match_consume(";") {
            self.character_reference_error("missing semicolon after character reference");
        }

        let radix = if is_hex { 16 } else { 10 };
        // Only overflow can fail here, and anything that large is out of range anyway.
        let code_point = u32::from_str_radix(&digits, radix).unwrap_or(u32::MAX);
        Some(self.resolve_code_point(code_point).to_string())
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    fn resolve_code_point(&mut self, code_point: u32) -> char {
        match code_point {
            0 => {
                self.character_reference_error("null character reference");
                REPLACEMENT_CHARACTER
            }
            0x80..=0x9F => {
                self.character_reference_error("control character reference");
                windows_1252(code_point).unwrap_or(REPLACEMENT_CHARACTER)
            }
            0xD800..=0xDFFF => {
                self.character_reference_error("surrogate character reference");
                REPLACEMENT_CHARACTER
            }
            0x11_0000.. => {
                self.character_reference_error("character reference outside unicode range");
                REPLACEMENT_CHARACTER
            }
            _ if is_noncharacter(code_point) => {
                self.character_reference_error("noncharacter character reference");
                REPLACEMENT_CHARACTER
            }
            _ if is_disallowed_control(code_point) => {
                self.character_reference_error("control character reference");
                REPLACEMENT_CHARACTER
            }
            _ => char::from_u32(code_point).unwrap_or(REPLACEMENT_CHARACTER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_1252_table() {
        assert_eq!(windows_1252(0x80), Some('€'));
        assert_eq!(windows_1252(0x99), Some('™'));
        assert_eq!(windows_1252(0x81), None);
        assert_eq!(windows_1252(0x9D), None);
        assert_eq!(windows_1252(0xA0), None);
    }

    #[test]
    fn test_code_point_classes() {
        assert!(is_noncharacter(0xFDD0));
        assert!(is_noncharacter(0xFFFF));
        assert!(is_noncharacter(0x10_FFFE));
        assert!(!is_noncharacter(0xFFFD));
        assert!(is_disallowed_control(0x01));
        assert!(is_disallowed_control(0x7F));
        assert!(!is_disallowed_control(0x09));
        assert!(!is_disallowed_control(0x0D));
    }
}
