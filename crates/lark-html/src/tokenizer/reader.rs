//! Forward cursor over the decoded input text.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! "The input stream consists of the characters pushed into it as the input
//! byte stream is decoded." Decoding has already happened by the time a
//! [`CharacterReader`] is built, so the reader only walks the text. It keeps a
//! single byte cursor into the buffer, a one-step unconsume and an optional
//! mark for multi-character lookahead that may have to be abandoned.
//!
//! End of input is reported as `None` from [`CharacterReader::current`] and
//! [`CharacterReader::consume`], so state handlers can match on it next to
//! ordinary characters.

use memchr::{memchr, memchr2, memchr3, memmem};

/// Characters that end a tag name, sorted by code point for binary search.
///
/// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
const TAG_NAME_TERMINATORS: [char; 8] = ['\0', '\t', '\n', '\x0C', '\r', ' ', '/', '>'];

/// Result of the last [`CharacterReader::contains_ignore_case`] scan.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Lookahead {
    needle: String,
    /// Byte offset the scan started from.
    from: usize,
    /// Byte offset of the match, if any.
    found: Option<usize>,
}

impl Lookahead {
    /// The cached answer for `needle` with the cursor at `pos`, if still valid.
    fn answer(&self, needle: &str, pos: usize) -> Option<bool> {
        if self.needle != needle || pos < self.from {
            return None;
        }
        match self.found {
            None => Some(false),
            Some(at) if pos <= at => Some(true),
            Some(_) => None,
        }
    }
}

/// A forward-only cursor over an in-memory document.
#[derive(Debug, Clone)]
pub struct CharacterReader {
    input: String,
    /// Byte offset of the next unconsumed character.
    pos: usize,
    mark: Option<usize>,
    /// Byte length of the last single-character step, undone by `unconsume`.
    last_step: usize,
    lookahead: Option<Lookahead>,
}

impl CharacterReader {
    /// Create a reader positioned at the start of `input`.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            mark: None,
            last_step: 0,
            lookahead: None,
        }
    }

    /// Byte offset of the cursor. Used to locate parse errors.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// True once every character has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    /// The next character without consuming it, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// "Consume the next input character"
    ///
    /// Consuming at end of input returns `None` and leaves the cursor in place.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.current();
        self.step_over(c);
        c
    }

    /// Skip the next character.
    pub fn advance(&mut self) {
        let c = self.current();
        self.step_over(c);
    }

    fn step_over(&mut self, c: Option<char>) {
        self.last_step = c.map_or(0, char::len_utf8);
        self.pos += self.last_step;
    }

    /// Step back over the character returned by the last `consume` or
    /// `advance`. Only one step can be undone; a second call is a no-op, as is
    /// unconsuming after reading end of input.
    pub fn unconsume(&mut self) {
        self.pos -= self.last_step;
        self.last_step = 0;
    }

    /// Remember the cursor so a speculative scan can be abandoned.
    pub fn mark(&mut self) {
        self.mark = Some(self.pos);
    }

    /// Forget the mark after a speculative scan succeeded.
    pub fn unmark(&mut self) {
        self.mark = None;
    }

    /// Return the cursor to the last mark.
    pub fn rewind_to_mark(&mut self) {
        if let Some(mark) = self.mark.take() {
            self.pos = mark;
            self.last_step = 0;
        }
    }

    /// True if the next character is `c`.
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        self.current() == Some(c)
    }

    /// True if the next character is an ASCII alpha.
    #[must_use]
    pub fn matches_letter(&self) -> bool {
        self.current().is_some_and(|c| c.is_ascii_alphabetic())
    }

    /// True if the next character is an ASCII digit.
    #[must_use]
    pub fn matches_digit(&self) -> bool {
        self.current().is_some_and(|c| c.is_ascii_digit())
    }

    /// True if the next character is any of `chars`.
    #[must_use]
    pub fn matches_any(&self, chars: &[char]) -> bool {
        self.current().is_some_and(|c| chars.contains(&c))
    }

    /// Like [`matches_any`](Self::matches_any), for a set sorted by code point.
    #[must_use]
    pub fn matches_any_sorted(&self, sorted: &[char]) -> bool {
        self.current()
            .is_some_and(|c| sorted.binary_search(&c).is_ok())
    }

    /// True if the input continues with `seq`, compared ASCII case-insensitively.
    #[must_use]
    pub fn matches_ignore_case(&self, seq: &str) -> bool {
        let rest = self.rest().as_bytes();
        rest.len() >= seq.len() && rest[..seq.len()].eq_ignore_ascii_case(seq.as_bytes())
    }

    /// Consume `seq` if the input continues with it exactly.
    pub fn match_consume(&mut self, seq: &str) -> bool {
        if self.rest().starts_with(seq) {
            self.pos += seq.len();
            self.last_step = 0;
            true
        } else {
            false
        }
    }

    /// Consume `seq` if the input continues with it, ASCII case-insensitively.
    ///
    /// `seq` must be ASCII, so a match always ends on a character boundary.
    pub fn match_consume_ignore_case(&mut self, seq: &str) -> bool {
        if self.matches_ignore_case(seq) {
            self.pos += seq.len();
            self.last_step = 0;
            true
        } else {
            false
        }
    }

    /// Non-consuming lookahead: does `needle` (ASCII) occur anywhere in the
    /// unread input, ignoring ASCII case?
    ///
    /// Used by RCDATA to find out whether an appropriate end tag can still
    /// turn up before committing to scan for one. The answer is remembered
    /// until the cursor moves past the match, so repeated questions about the
    /// same needle cost one scan of the input in total.
    pub fn contains_ignore_case(&mut self, needle: &str) -> bool {
        if let Some(answer) = self
            .lookahead
            .as_ref()
            .and_then(|lookahead| lookahead.answer(needle, self.pos))
        {
            return answer;
        }
        let found = self.find_ignore_case(needle.as_bytes());
        self.lookahead = Some(Lookahead {
            needle: needle.to_owned(),
            from: self.pos,
            found,
        });
        found.is_some()
    }

    /// Byte offset of the first ASCII case-insensitive match of `needle` in
    /// the unread input.
    fn find_ignore_case(&self, needle: &[u8]) -> Option<usize> {
        let Some(&first) = needle.first() else {
            return Some(self.pos);
        };
        let hay = self.rest().as_bytes();
        let (lower, upper) = (first.to_ascii_lowercase(), first.to_ascii_uppercase());
        let mut from = 0;
        while let Some(offset) = memchr2(lower, upper, &hay[from..]) {
            let start = from + offset;
            if hay.len() - start < needle.len() {
                return None;
            }
            if hay[start..start + needle.len()].eq_ignore_ascii_case(needle) {
                return Some(self.pos + start);
            }
            from = start + 1;
        }
        None
    }

    /// Take everything up to (not including) byte offset `end` of the input.
    fn consume_until(&mut self, end: usize) -> String {
        let run = self.input[self.pos..end].to_owned();
        self.pos = end;
        self.last_step = 0;
        run
    }

    /// Take the unread input up to the first `c`, or to the end.
    pub fn consume_to(&mut self, c: char) -> String {
        let offset = if c.is_ascii() {
            let byte = u8::try_from(c).unwrap_or_default();
            memchr(byte, self.rest().as_bytes())
        } else {
            self.rest().find(c)
        };
        let end = offset.map_or(self.input.len(), |offset| self.pos + offset);
        self.consume_until(end)
    }

    /// Take the unread input up to the first occurrence of `seq` (for example
    /// `]]>`), or to the end. The delimiter itself is left unread.
    pub fn consume_to_sequence(&mut self, seq: &str) -> String {
        let end = memmem::find(self.rest().as_bytes(), seq.as_bytes())
            .map_or(self.input.len(), |offset| self.pos + offset);
        self.consume_until(end)
    }

    /// Take the unread input up to the first character in `chars`.
    pub fn consume_to_any(&mut self, chars: &[char]) -> String {
        let end = self
            .rest()
            .find(|c| chars.contains(&c))
            .map_or(self.input.len(), |offset| self.pos + offset);
        self.consume_until(end)
    }

    /// Like [`consume_to_any`](Self::consume_to_any) for a terminator set
    /// sorted by code point; membership is a binary search.
    pub fn consume_to_any_sorted(&mut self, sorted: &[char]) -> String {
        let end = self
            .rest()
            .find(|c| sorted.binary_search(&c).is_ok())
            .map_or(self.input.len(), |offset| self.pos + offset);
        self.consume_until(end)
    }

    /// Take the rest of the input.
    pub fn consume_to_end(&mut self) -> String {
        self.consume_until(self.input.len())
    }

    /// Take a run of ASCII letters.
    pub fn consume_letter_sequence(&mut self) -> String {
        let len = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        self.consume_until(self.pos + len)
    }

    /// Take a run of ASCII letters followed by a run of ASCII digits, the
    /// shape of every named character reference.
    pub fn consume_letter_then_digit_sequence(&mut self) -> String {
        let bytes = self.rest().as_bytes();
        let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        let digits = bytes[letters..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.consume_until(self.pos + letters + digits)
    }

    /// Take a run of ASCII hex digits.
    pub fn consume_hex_sequence(&mut self) -> String {
        let len = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_hexdigit)
            .count();
        self.consume_until(self.pos + len)
    }

    /// Take a run of ASCII decimal digits.
    pub fn consume_digit_sequence(&mut self) -> String {
        let len = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        self.consume_until(self.pos + len)
    }

    /// Take the characters of a tag name, stopping at whitespace, `/`, `>`
    /// or NUL.
    pub fn consume_tag_name(&mut self) -> String {
        self.consume_to_any_sorted(&TAG_NAME_TERMINATORS)
    }

    /// Take a run of raw text (RAWTEXT, script data), stopping at `<` or NUL.
    pub fn consume_raw_data(&mut self) -> String {
        let end = memchr2(b'<', 0, self.rest().as_bytes())
            .map_or(self.input.len(), |offset| self.pos + offset);
        self.consume_until(end)
    }

    /// Take a run of ordinary text for the data state, stopping at `&`, `<`
    /// or NUL.
    pub fn consume_data(&mut self) -> String {
        let end = memchr3(b'&', b'<', 0, self.rest().as_bytes())
            .map_or(self.input.len(), |offset| self.pos + offset);
        self.consume_until(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_and_unconsume() {
        let mut r = CharacterReader::new("aé");
        assert_eq!(r.consume(), Some('a'));
        assert_eq!(r.consume(), Some('é'));
        r.unconsume();
        assert_eq!(r.current(), Some('é'));
        assert_eq!(r.consume(), Some('é'));
        assert_eq!(r.consume(), None);
        assert!(r.is_empty());
        // Unconsuming EOF stays at the end.
        r.unconsume();
        assert!(r.is_empty());
    }

    #[test]
    fn test_unconsume_only_steps_once() {
        let mut r = CharacterReader::new("abc");
        r.advance();
        r.advance();
        r.unconsume();
        r.unconsume();
        assert_eq!(r.current(), Some('b'));
    }

    #[test]
    fn test_mark_and_rewind() {
        let mut r = CharacterReader::new("&notin;");
        r.advance();
        r.mark();
        assert_eq!(r.consume_letter_sequence(), "notin");
        r.rewind_to_mark();
        assert_eq!(r.current(), Some('n'));
    }

    #[test]
    fn test_match_consume() {
        let mut r = CharacterReader::new("--><!DocType");
        assert!(!r.match_consume("-->x"));
        assert!(r.match_consume("-->"));
        assert!(r.match_consume("<!"));
        assert!(!r.match_consume("DOCTYPE"));
        assert!(r.match_consume_ignore_case("DOCTYPE"));
        assert!(r.is_empty());
    }

    #[test]
    fn test_consume_to_sequence() {
        let mut r = CharacterReader::new("a]]b]]>c");
        assert_eq!(r.consume_to_sequence("]]>"), "a]]b");
        assert!(r.match_consume("]]>"));
        assert_eq!(r.consume_to_sequence("]]>"), "c");
        assert!(r.is_empty());
    }

    #[test]
    fn test_consume_to_any() {
        let mut r = CharacterReader::new("value\" rest");
        assert_eq!(r.consume_to_any(&['"', '&', '\0']), "value");
        assert_eq!(r.current(), Some('"'));

        let mut r = CharacterReader::new("no terminator");
        assert_eq!(r.consume_to_any(&['<']), "no terminator");
        assert!(r.is_empty());
    }

    #[test]
    fn test_consume_tag_name_and_data() {
        let mut r = CharacterReader::new("DiV class>text&amp;<");
        assert_eq!(r.consume_tag_name(), "DiV");
        assert!(r.matches(' '));
        assert_eq!(r.consume_to('>'), " class");
        r.advance();
        assert_eq!(r.consume_data(), "text");
        assert!(r.matches('&'));
    }

    #[test]
    fn test_sequences() {
        let mut r = CharacterReader::new("frac12;x1F;99z");
        assert_eq!(r.consume_letter_then_digit_sequence(), "frac12");
        r.advance();
        r.advance();
        assert_eq!(r.consume_hex_sequence(), "1F");
        r.advance();
        assert_eq!(r.consume_digit_sequence(), "99");
        assert!(r.matches_letter());
        assert!(!r.matches_digit());
        assert_eq!(r.consume_to_end(), "z");
        assert!(r.is_empty());
        assert_eq!(r.consume_to_end(), "");
    }

    #[test]
    fn test_contains_ignore_case() {
        let mut r = CharacterReader::new("some text </TiTlE> after");
        assert!(r.contains_ignore_case("</title"));
        assert!(!r.contains_ignore_case("</textarea"));
        assert!(!CharacterReader::new("</tit").contains_ignore_case("</title"));
    }

    #[test]
    fn test_contains_ignore_case_reuses_last_scan() {
        let mut r = CharacterReader::new("<a<b</title>x</title");
        assert!(r.contains_ignore_case("</title"));
        let first_scan = r.lookahead.clone();
        assert_eq!(first_scan.as_ref().and_then(|l| l.found), Some(4));

        // Still before the match: answered without scanning again.
        r.advance();
        r.advance();
        assert!(r.contains_ignore_case("</title"));
        assert_eq!(r.lookahead, first_scan);

        // Past the match: scan again from the cursor.
        assert_eq!(r.consume_to('x'), "<b</title>");
        assert!(r.contains_ignore_case("</title"));
        assert_eq!(r.lookahead.as_ref().and_then(|l| l.found), Some(13));

        r.advance();
        r.advance();
        assert!(!r.contains_ignore_case("</title"));
        assert!(!r.contains_ignore_case("</title"));
        assert_eq!(r.lookahead.as_ref().map(|l| l.from), Some(14));
    }

    #[test]
    fn test_matches_any_sorted() {
        let r = CharacterReader::new("/");
        assert!(r.matches_any_sorted(&TAG_NAME_TERMINATORS));
        assert!(r.matches_any(&['/', '>']));
        assert!(!CharacterReader::new("").matches_any(&['/']));
    }
}
