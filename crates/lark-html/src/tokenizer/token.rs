use core::fmt;
use core::mem;

/// An attribute on a start tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value". Attributes written without a value have the empty string.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// Adjacent characters are delivered as one [`Token::Character`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "type"))]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag."
    Doctype {
        /// "a name". Empty when the declaration has none.
        name: String,
        /// "a public identifier". `None` when missing, which is distinct from empty.
        public_identifier: Option<String>,
        /// "a system identifier". `None` when missing, which is distinct from empty.
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes"
    StartTag {
        /// "a tag name", with its case as written
        name: String,
        /// "a list of attributes", in source order with later duplicates removed
        attributes: Vec<Attribute>,
        /// "a self-closing flag"
        self_closing: bool,
    },

    /// End tag token. Attributes on end tags are a parse error and are dropped.
    EndTag {
        /// "a tag name", with its case as written
        name: String,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
        /// Set for comments recovered from malformed markup such as `<?php ?>`.
        bogus: bool,
    },

    /// A run of character data.
    Character {
        /// The characters, with references decoded and NUL replaced.
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Create a start tag token with no attributes.
    #[must_use]
    pub fn start_tag(name: impl Into<String>) -> Self {
        Self::StartTag {
            name: name.into(),
            attributes: Vec::new(),
            self_closing: false,
        }
    }

    /// Create an end tag token.
    #[must_use]
    pub fn end_tag(name: impl Into<String>) -> Self {
        Self::EndTag { name: name.into() }
    }

    /// Create a (non-bogus) comment token.
    #[must_use]
    pub fn comment(data: impl Into<String>) -> Self {
        Self::Comment {
            data: data.into(),
            bogus: false,
        }
    }

    /// Create a character token holding `data`.
    #[must_use]
    pub fn character(data: impl Into<String>) -> Self {
        Self::Character { data: data.into() }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// Returns true if this is a character run.
    #[must_use]
    pub const fn is_character(&self) -> bool {
        matches!(self, Self::Character { .. })
    }

    /// The tag name of a start or end tag.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name),
            _ => None,
        }
    }

    /// The value of the named attribute on a start tag.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Self::StartTag { attributes, .. } => attributes
                .iter()
                .find(|attr| attr.name == name)
                .map(|attr| attr.value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                write!(f, "<!DOCTYPE")?;
                if !name.is_empty() {
                    write!(f, " {name}")?;
                }
                if let Some(pub_id) = public_identifier {
                    write!(f, " PUBLIC \"{pub_id}\"")?;
                }
                if let Some(sys_id) = system_identifier {
                    write!(f, " SYSTEM \"{sys_id}\"")?;
                }
                write!(f, ">")?;
                if *force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Comment { data, bogus } => {
                write!(f, "<!--{data}-->")?;
                if *bogus {
                    write!(f, " (bogus)")?;
                }
                Ok(())
            }
            // Debug formatting shows whitespace and control characters explicitly
            Self::Character { data } => write!(f, "Character({data:?})"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}

/// Whether a pending tag will become a start or an end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Start,
    End,
}

/// The tag token under construction.
///
/// Attributes are collected one at a time: characters go into the pending
/// attribute name and value, and the attribute is committed when the next one
/// starts or the tag is finished.
#[derive(Debug)]
pub(crate) struct TagBuilder {
    pub(crate) kind: TagKind,
    pub(crate) name: String,
    pub(crate) self_closing: bool,
    attributes: Vec<Attribute>,
    attribute_name: String,
    attribute_value: String,
    attribute_pending: bool,
}

impl TagBuilder {
    pub(crate) const fn new() -> Self {
        Self {
            kind: TagKind::Start,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            attribute_name: String::new(),
            attribute_value: String::new(),
            attribute_pending: false,
        }
    }

    /// "Create a new start tag token" / "Create a new end tag token"
    pub(crate) fn reset(&mut self, kind: TagKind) {
        self.kind = kind;
        self.name.clear();
        self.self_closing = false;
        self.attributes.clear();
        self.attribute_name.clear();
        self.attribute_value.clear();
        self.attribute_pending = false;
    }

    pub(crate) fn append_name(&mut self, s: &str) {
        self.name.push_str(s);
    }

    pub(crate) fn push_name(&mut self, c: char) {
        self.name.push(c);
    }

    /// "Start a new attribute in the current tag token."
    ///
    /// Commits the attribute in progress first; returns its name if it was a
    /// duplicate and had to be dropped.
    pub(crate) fn start_attribute(&mut self) -> Option<String> {
        let duplicate = self.finish_attribute();
        self.attribute_pending = true;
        duplicate
    }

    /// "if there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute
    /// must be removed from the token."
    pub(crate) fn finish_attribute(&mut self) -> Option<String> {
        if !self.attribute_pending {
            return None;
        }
        self.attribute_pending = false;
        let name = mem::take(&mut self.attribute_name);
        let value = mem::take(&mut self.attribute_value);
        if self.attributes.iter().any(|attr| attr.name == name) {
            return Some(name);
        }
        self.attributes.push(Attribute { name, value });
        None
    }

    pub(crate) fn push_attribute_name(&mut self, c: char) {
        self.attribute_name.push(c);
    }

    pub(crate) fn append_attribute_name(&mut self, s: &str) {
        self.attribute_name.push_str(s);
    }

    pub(crate) fn push_attribute_value(&mut self, c: char) {
        self.attribute_value.push(c);
    }

    pub(crate) fn append_attribute_value(&mut self, s: &str) {
        self.attribute_value.push_str(s);
    }

    pub(crate) fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Turn the finished builder into a token and reset it. The caller commits
    /// any pending attribute beforehand.
    pub(crate) fn build(&mut self) -> Token {
        let name = mem::take(&mut self.name);
        let token = match self.kind {
            TagKind::Start => Token::StartTag {
                name,
                attributes: mem::take(&mut self.attributes),
                self_closing: self.self_closing,
            },
            TagKind::End => Token::EndTag { name },
        };
        self.reset(self.kind);
        token
    }
}

/// The comment token under construction.
#[derive(Debug, Default)]
pub(crate) struct CommentBuilder {
    pub(crate) data: String,
    pub(crate) bogus: bool,
}

impl CommentBuilder {
    pub(crate) fn reset(&mut self) {
        self.data.clear();
        self.bogus = false;
    }

    pub(crate) fn build(&mut self) -> Token {
        let token = Token::Comment {
            data: mem::take(&mut self.data),
            bogus: self.bogus,
        };
        self.reset();
        token
    }
}

/// The DOCTYPE token under construction.
///
/// "When a DOCTYPE token is created, its name, public identifier, and system
/// identifier must be marked as missing (which is a distinct state from the
/// empty string), and the force-quirks flag must be set to off"
#[derive(Debug, Default)]
pub(crate) struct DoctypeBuilder {
    pub(crate) name: String,
    pub(crate) public_identifier: Option<String>,
    pub(crate) system_identifier: Option<String>,
    pub(crate) force_quirks: bool,
}

impl DoctypeBuilder {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Append to the public identifier, marking it present.
    pub(crate) fn push_public_identifier(&mut self, c: char) {
        self.public_identifier.get_or_insert_with(String::new).push(c);
    }

    /// Append to the system identifier, marking it present.
    pub(crate) fn push_system_identifier(&mut self, c: char) {
        self.system_identifier.get_or_insert_with(String::new).push(c);
    }

    pub(crate) fn build(&mut self) -> Token {
        let builder = mem::take(self);
        Token::Doctype {
            name: builder.name,
            public_identifier: builder.public_identifier,
            system_identifier: builder.system_identifier,
            force_quirks: builder.force_quirks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_attribute_keeps_first() {
        let mut tag = TagBuilder::new();
        tag.reset(TagKind::Start);
        tag.append_name("a");
        assert_eq!(tag.start_attribute(), None);
        tag.append_attribute_name("href");
        tag.append_attribute_value("first");
        assert_eq!(tag.start_attribute(), None);
        tag.append_attribute_name("href");
        tag.append_attribute_value("second");
        assert_eq!(tag.finish_attribute(), Some("href".to_string()));

        let token = tag.build();
        assert_eq!(token.attribute("href"), Some("first"));
        assert_eq!(token.tag_name(), Some("a"));
    }

    #[test]
    fn test_build_resets_builder() {
        let mut tag = TagBuilder::new();
        tag.reset(TagKind::End);
        tag.append_name("div");
        assert_eq!(tag.build(), Token::end_tag("div"));
        assert!(tag.name.is_empty());
        assert!(!tag.has_attributes());

        let mut doctype = DoctypeBuilder::default();
        doctype.name.push_str("html");
        doctype.push_public_identifier('x');
        let first = doctype.build();
        assert!(matches!(first, Token::Doctype { ref public_identifier, .. } if public_identifier.as_deref() == Some("x")));
        assert_eq!(
            doctype.build(),
            Token::Doctype {
                name: String::new(),
                public_identifier: None,
                system_identifier: None,
                force_quirks: false,
            }
        );
    }

    #[test]
    fn test_display() {
        let tag = Token::StartTag {
            name: "input".to_string(),
            attributes: vec![Attribute::new("disabled", "")],
            self_closing: true,
        };
        assert_eq!(tag.to_string(), "<input disabled=\"\" />");
        assert_eq!(Token::end_tag("p").to_string(), "</p>");
        assert_eq!(Token::character("a\n").to_string(), "Character(\"a\\n\")");
        assert_eq!(Token::EndOfFile.to_string(), "EOF");
    }
}
