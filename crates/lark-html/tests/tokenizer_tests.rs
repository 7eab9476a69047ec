//! Integration tests for the HTML tokenizer.

use std::time::{Duration, Instant};

use lark_common::warning::has_warned;
use lark_html::{
    Attribute, HTMLTokenizer, ParseError, ParseErrorKind, Token, TokenizerConfig, TokenizerState,
};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Helper returning the tokens together with the parse errors
fn tokenize_with_errors(input: &str) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokenizer = HTMLTokenizer::new(input);
    tokenizer.run();
    let errors = tokenizer.errors().to_vec();
    (tokenizer.into_tokens(), errors)
}

/// Tokenize `input`, failing if it takes longer than `limit`. The inputs used
/// with this are large enough that a quadratic pass blows far past the limit.
fn tokenize_within(input: &str, limit: Duration) -> Vec<Token> {
    let start = Instant::now();
    let tokens = tokenize(input);
    let elapsed = start.elapsed();
    assert!(
        elapsed < limit,
        "tokenizing {} bytes took {elapsed:?}",
        input.len()
    );
    tokens
}

fn doctype(
    name: &str,
    public_identifier: Option<&str>,
    system_identifier: Option<&str>,
    force_quirks: bool,
) -> Token {
    Token::Doctype {
        name: name.to_string(),
        public_identifier: public_identifier.map(str::to_string),
        system_identifier: system_identifier.map(str::to_string),
        force_quirks,
    }
}

// =============================================================================
// Basics
// =============================================================================

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens, vec![Token::character("Hello"), Token::EndOfFile]);
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![Token::EndOfFile]);
}

#[test]
fn test_paragraph() {
    let tokens = tokenize("<p>Hi</p>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("p"),
            Token::character("Hi"),
            Token::end_tag("p"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_text_around_tags_is_coalesced() {
    let tokens = tokenize("a&amp;b<br>c");
    assert_eq!(
        tokens,
        vec![
            Token::character("a&b"),
            Token::start_tag("br"),
            Token::character("c"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_multibyte_text() {
    let tokens = tokenize("héllo <b>wörld</b> ✓");
    assert_eq!(tokens[0], Token::character("héllo "));
    assert_eq!(tokens[2], Token::character("wörld"));
    assert_eq!(tokens[4], Token::character(" ✓"));
}

#[test]
fn test_null_in_text_is_replaced() {
    let (tokens, errors) = tokenize_with_errors("a\0b");
    assert_eq!(tokens, vec![Token::character("a\u{FFFD}b"), Token::EndOfFile]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedCharacter('\0'));
    assert_eq!(errors[0].state, TokenizerState::Data);
    assert_eq!(errors[0].position, 1);
}

#[test]
fn test_null_in_raw_text_is_replaced() {
    let (tokens, errors) = tokenize_with_errors("<script>a\0</script><title>\0</title>");
    assert_eq!(tokens[1], Token::character("a\u{FFFD}"));
    assert_eq!(tokens[4], Token::character("\u{FFFD}"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_parse_error_display() {
    let (_, errors) = tokenize_with_errors("a\0");
    assert_eq!(
        errors[0].to_string(),
        "unexpected character '\\0' in state [Data] at position 1"
    );
}

// =============================================================================
// Tags
// =============================================================================

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_tag_name_case_is_preserved() {
    let tokens = tokenize("<DiV></dIv>");
    assert_eq!(tokens[0].tag_name(), Some("DiV"));
    assert_eq!(tokens[1].tag_name(), Some("dIv"));
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_solidus_not_followed_by_gt() {
    let (tokens, errors) = tokenize_with_errors("<br / x>");
    match &tokens[0] {
        Token::StartTag {
            attributes,
            self_closing,
            ..
        } => {
            assert!(!self_closing);
            assert_eq!(attributes, &vec![Attribute::new("x", "")]);
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_attributes() {
    let tokens = tokenize(r#"<a href="x" id='y' class=z disabled>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(
                attributes,
                &vec![
                    Attribute::new("href", "x"),
                    Attribute::new("id", "y"),
                    Attribute::new("class", "z"),
                    Attribute::new("disabled", ""),
                ]
            );
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_whitespace_around_equals() {
    let tokens = tokenize("<input type = \"text\"\n\tvalue\t=x>");
    assert_eq!(tokens[0].attribute("type"), Some("text"));
    assert_eq!(tokens[0].attribute("value"), Some("x"));
}

#[test]
fn test_duplicate_attribute_first_wins() {
    let (tokens, errors) = tokenize_with_errors("<p id=a id=b>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![Attribute::new("id", "a")]);
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::DuplicateAttribute("id".to_string())
    );
}

#[test]
fn test_missing_whitespace_between_attributes() {
    let (tokens, errors) = tokenize_with_errors("<a b='x'c>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(
                attributes,
                &vec![Attribute::new("b", "x"), Attribute::new("c", "")]
            );
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedCharacter('c'));
}

#[test]
fn test_stray_characters_kept_in_attributes() {
    let (tokens, errors) = tokenize_with_errors(r#"<a "b =c x=y"z <i=`>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(
                attributes,
                &vec![
                    Attribute::new("\"b", "c"),
                    Attribute::new("x", "y\"z"),
                    Attribute::new("<i", "`"),
                ]
            );
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(errors.len(), 4);
}

#[test]
fn test_equals_sign_before_attribute_name() {
    let tokens = tokenize("<a =b>");
    assert_eq!(tokens[0].attribute("=b"), Some(""));
}

#[test]
fn test_missing_attribute_value() {
    let (tokens, errors) = tokenize_with_errors("<a b=>");
    assert_eq!(tokens[0].attribute("b"), Some(""));
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedCharacter('>'));
}

#[test]
fn test_null_in_tag_and_attribute() {
    let tokens = tokenize("<a\0 b\0=\"\0\">");
    assert_eq!(tokens[0].tag_name(), Some("a\u{FFFD}"));
    assert_eq!(tokens[0].attribute("b\u{FFFD}"), Some("\u{FFFD}"));
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::EndTag { name } => {
            assert_eq!(name, "div");
        }
        _ => panic!("Expected EndTag token"),
    }
}

#[test]
fn test_end_tag_attributes_are_dropped() {
    let (tokens, errors) = tokenize_with_errors(r#"</p class="x">"#);
    assert_eq!(tokens[0], Token::end_tag("p"));
    assert_eq!(errors, vec![ParseError {
        kind: ParseErrorKind::AttributesOnEndTag,
        state: TokenizerState::AfterAttributeValueQuoted,
        position: 14,
    }]);
}

#[test]
fn test_self_closing_end_tag() {
    let (tokens, errors) = tokenize_with_errors("</br/>");
    assert_eq!(tokens[0], Token::end_tag("br"));
    assert_eq!(errors[0].kind, ParseErrorKind::SelfClosingEndTag);
}

#[test]
fn test_empty_end_tag_is_ignored() {
    let (tokens, errors) = tokenize_with_errors("a</>b");
    assert_eq!(tokens, vec![Token::character("ab"), Token::EndOfFile]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_less_than_not_starting_a_tag() {
    let (tokens, errors) = tokenize_with_errors("1 < 2 <3");
    assert_eq!(tokens, vec![Token::character("1 < 2 <3"), Token::EndOfFile]);
    assert_eq!(errors.len(), 2);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens, vec![Token::comment(" hello "), Token::EndOfFile]);
}

#[test]
fn test_empty_comments() {
    assert_eq!(tokenize("<!---->")[0], Token::comment(""));

    let (tokens, errors) = tokenize_with_errors("<!-->x");
    assert_eq!(tokens[0], Token::comment(""));
    assert_eq!(tokens[1], Token::character("x"));
    assert_eq!(errors.len(), 1);

    let (tokens, errors) = tokenize_with_errors("<!--->");
    assert_eq!(tokens[0], Token::comment(""));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_comment_with_dashes() {
    assert_eq!(tokenize("<!-- a -- b -->")[0], Token::comment(" a -- b "));
    assert_eq!(tokenize("<!--a--->")[0], Token::comment("a-"));
    assert_eq!(tokenize("<!---a-->")[0], Token::comment("-a"));
}

#[test]
fn test_comment_closed_with_bang() {
    let (tokens, errors) = tokenize_with_errors("<!--x--!>y");
    assert_eq!(tokens[0], Token::comment("x"));
    assert_eq!(tokens[1], Token::character("y"));
    assert_eq!(errors.len(), 1);

    assert_eq!(tokenize("<!--x--!y-->")[0], Token::comment("x--!y"));
}

#[test]
fn test_unterminated_comment() {
    let (tokens, errors) = tokenize_with_errors("<!-- abc");
    assert_eq!(tokens, vec![Token::comment(" abc"), Token::EndOfFile]);
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_bogus_comments() {
    let tokens = tokenize(r#"<?xml version="1.0"?><!x></ y>"#);
    assert_eq!(
        tokens,
        vec![
            Token::Comment {
                data: r#"?xml version="1.0"?"#.to_string(),
                bogus: true,
            },
            Token::Comment {
                data: "x".to_string(),
                bogus: true,
            },
            Token::Comment {
                data: " y".to_string(),
                bogus: true,
            },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_cdata_section() {
    let tokens = tokenize("<![CDATA[a<b>&amp;]]>c");
    assert_eq!(tokens, vec![Token::character("a<b>&amp;c"), Token::EndOfFile]);

    let (tokens, errors) = tokenize_with_errors("<![CDATA[x");
    assert_eq!(tokens, vec![Token::character("x"), Token::EndOfFile]);
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedEof);
}

// =============================================================================
// DOCTYPE
// =============================================================================

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(name, "html");
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_name_is_lowercased() {
    assert_eq!(
        tokenize("<!doctype HTML>")[0],
        doctype("html", None, None, false)
    );
}

#[test]
fn test_doctype_without_name() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE >");
    assert_eq!(tokens[0], doctype("", None, None, true));
    assert!(!errors.is_empty());

    assert_eq!(tokenize("<!DOCTYPE>")[0], doctype("", None, None, true));
}

#[test]
fn test_doctype_public_and_system() {
    let tokens = tokenize(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" 'http://www.w3.org/TR/html4/strict.dtd'>"#,
    );
    assert_eq!(
        tokens[0],
        doctype(
            "html",
            Some("-//W3C//DTD HTML 4.01//EN"),
            Some("http://www.w3.org/TR/html4/strict.dtd"),
            false,
        )
    );
}

#[test]
fn test_doctype_system_only() {
    let tokens = tokenize(r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#);
    assert_eq!(
        tokens[0],
        doctype("html", None, Some("about:legacy-compat"), false)
    );
}

#[test]
fn test_doctype_empty_identifier_is_not_missing() {
    let tokens = tokenize(r#"<!DOCTYPE html PUBLIC "">"#);
    assert_eq!(tokens[0], doctype("html", Some(""), None, false));
}

#[test]
fn test_doctype_missing_identifier() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html SYSTEM>");
    assert_eq!(tokens[0], doctype("html", None, None, true));
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_doctype_garbage_after_name() {
    let tokens = tokenize("<!DOCTYPE html bogus stuff>x");
    assert_eq!(tokens[0], doctype("html", None, None, true));
    assert_eq!(tokens[1], Token::character("x"));
}

#[test]
fn test_doctype_garbage_after_system_identifier() {
    let tokens = tokenize(r#"<!DOCTYPE html SYSTEM "x" y>"#);
    assert_eq!(tokens[0], doctype("html", None, Some("x"), false));
}

#[test]
fn test_doctype_abrupt_identifier() {
    let tokens = tokenize(r#"<!DOCTYPE html PUBLIC "abc>def"#);
    assert_eq!(tokens[0], doctype("html", Some("abc"), None, true));
    assert_eq!(tokens[1], Token::character("def"));
}

#[test]
fn test_unterminated_doctype() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html");
    assert_eq!(
        tokens,
        vec![doctype("html", None, None, true), Token::EndOfFile]
    );
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedEof);

    assert_eq!(tokenize("<!DOCTYPE")[0], doctype("", None, None, true));
}

// =============================================================================
// Content states
// =============================================================================

#[test]
fn test_script_body_with_partial_end_tags() {
    let tokens = tokenize(r#"<script>var x = "</scr" + "ipt>";</script>"#);
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("script"),
            Token::character(r#"var x = "</scr" + "ipt>";"#),
            Token::end_tag("script"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_script_end_tag_is_case_insensitive() {
    let tokens = tokenize("<script>a</SCRIPT>b");
    assert_eq!(tokens[1], Token::character("a"));
    assert_eq!(tokens[2], Token::end_tag("SCRIPT"));
    assert_eq!(tokens[3], Token::character("b"));
}

#[test]
fn test_script_ignores_other_end_tags() {
    let tokens = tokenize("<script>if (a</b) {}</script >");
    assert_eq!(tokens[1], Token::character("if (a</b) {}"));
    assert_eq!(tokens[2], Token::end_tag("script"));
}

#[test]
fn test_script_double_escape() {
    let tokens = tokenize("<script><!--<script>x</script>y--></script>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("script"),
            Token::character("<!--<script>x</script>y-->"),
            Token::end_tag("script"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_script_escaped_end_tag() {
    // Escaped (but not double escaped) text still ends at </script>.
    let tokens = tokenize("<script><!-- x </script>y");
    assert_eq!(tokens[1], Token::character("<!-- x "));
    assert_eq!(tokens[2], Token::end_tag("script"));
    assert_eq!(tokens[3], Token::character("y"));
}

#[test]
fn test_script_unterminated_escape() {
    let (tokens, errors) = tokenize_with_errors("<script><!--a");
    assert_eq!(tokens[1], Token::character("<!--a"));
    assert!(tokens[2].is_eof());
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_title_decodes_character_references() {
    let tokens = tokenize("<title>&amp;</title>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("title"),
            Token::character("&"),
            Token::end_tag("title"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_rcdata_treats_tags_as_text() {
    let tokens = tokenize("<textarea><b>x</b></textarea>");
    assert_eq!(tokens[1], Token::character("<b>x</b>"));
    assert_eq!(tokens[2], Token::end_tag("textarea"));
}

#[test]
fn test_rcdata_without_end_tag_closes_early() {
    let tokens = tokenize("<title>a<b>c");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("title"),
            Token::character("a"),
            Token::end_tag("title"),
            Token::start_tag("b"),
            Token::character("c"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_rawtext_ignores_markup_and_references() {
    let tokens = tokenize("<style>a &amp; <b></style>");
    assert_eq!(tokens[1], Token::character("a &amp; <b>"));
    assert_eq!(tokens[2], Token::end_tag("style"));
}

#[test]
fn test_plaintext_runs_to_end() {
    let tokens = tokenize("<plaintext></plaintext><b>");
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("plaintext"),
            Token::character("</plaintext><b>"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_content_modes_can_be_disabled() {
    let config = TokenizerConfig {
        switch_content_modes: false,
        ..TokenizerConfig::default()
    };
    let tokens: Vec<Token> = HTMLTokenizer::with_config("<title><b></title>", config).collect();
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("title"),
            Token::start_tag("b"),
            Token::end_tag("title"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_initial_state_with_last_start_tag() {
    let config = TokenizerConfig {
        initial_state: TokenizerState::RCDATA,
        last_start_tag: Some("textarea".to_string()),
        ..TokenizerConfig::default()
    };
    let tokens: Vec<Token> =
        HTMLTokenizer::with_config("x&lt;</textarea>y", config).collect();
    assert_eq!(
        tokens,
        vec![
            Token::character("x<"),
            Token::end_tag("textarea"),
            Token::character("y"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_set_state_from_outside() {
    let mut tokenizer = HTMLTokenizer::new("<b>x</b>");
    tokenizer.set_state(TokenizerState::RAWTEXT);
    assert_eq!(tokenizer.state(), TokenizerState::RAWTEXT);
    assert_eq!(tokenizer.next_token(), Token::character("<b>x</b>"));
    assert_eq!(tokenizer.next_token(), Token::EndOfFile);
}

// =============================================================================
// Driver
// =============================================================================

#[test]
fn test_next_token_after_eof() {
    let mut tokenizer = HTMLTokenizer::new("x");
    assert_eq!(tokenizer.next_token(), Token::character("x"));
    assert_eq!(tokenizer.next_token(), Token::EndOfFile);
    assert_eq!(tokenizer.next_token(), Token::EndOfFile);
    assert_eq!(tokenizer.next_token(), Token::EndOfFile);
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut tokenizer = HTMLTokenizer::new("<p>");
    assert_eq!(tokenizer.next(), Some(Token::start_tag("p")));
    assert_eq!(tokenizer.next(), Some(Token::EndOfFile));
    assert_eq!(tokenizer.next(), None);
    assert!(tokenizer.into_tokens().is_empty());
}

#[test]
fn test_tokenize_is_deterministic() {
    let input = "<!DOCTYPE html><title>T &amp; c</title><p a=b>x\0<!--c--><script>1<2</script>";
    assert_eq!(lark_html::tokenize(input), lark_html::tokenize(input));
    assert_eq!(tokenize(input), lark_html::tokenize(input));
}

#[test]
fn test_malformed_input_always_ends_with_one_eof() {
    let inputs = [
        "<",
        "</",
        "<a",
        "<a b",
        "<a b=",
        "<a b='",
        "<a b=x",
        "<a b/",
        "<!",
        "<!-",
        "<!--",
        "<!---",
        "<!--x--",
        "<!--x--!",
        "<!DOCTYPE",
        "<!DOCTYPE html PUBLIC",
        "<!DOCTYPE html PUBLIC \"x",
        "<!DOCTYPE html PUBLIC \"x\" \"y",
        "<!DOCTYPE html x",
        "<?",
        "&",
        "&#",
        "&#x",
        "&am",
        "<![CDATA[x",
        "<title>",
        "<textarea>x</text",
        "<script><!--<script>",
        "<script><!--<script></scr",
        "<style></",
        "\0",
    ];
    for input in inputs {
        let tokens = tokenize(input);
        assert!(tokens.last().is_some_and(Token::is_eof), "{input:?}");
        assert_eq!(
            tokens.iter().filter(|token| token.is_eof()).count(),
            1,
            "{input:?}"
        );
    }
}

#[test]
fn test_incomplete_tag_is_discarded() {
    let (tokens, errors) = tokenize_with_errors("x<div class=\"a");
    assert_eq!(tokens, vec![Token::character("x"), Token::EndOfFile]);
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_max_errors() {
    let input = "\0\0\0";

    let config = TokenizerConfig {
        max_errors: Some(1),
        ..TokenizerConfig::default()
    };
    let mut tokenizer = HTMLTokenizer::with_config(input, config);
    tokenizer.run();
    assert_eq!(tokenizer.errors().len(), 1);

    let config = TokenizerConfig {
        max_errors: Some(0),
        ..TokenizerConfig::default()
    };
    let mut tokenizer = HTMLTokenizer::with_config(input, config);
    tokenizer.run();
    assert!(tokenizer.errors().is_empty());

    let (_, errors) = tokenize_with_errors(input);
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_warnings_echo_parse_errors() {
    let config = TokenizerConfig {
        warnings: true,
        ..TokenizerConfig::default()
    };
    let mut tokenizer = HTMLTokenizer::with_config("<p id=1 id=2>", config);
    tokenizer.run();
    let message = tokenizer.errors()[0].to_string();
    assert!(has_warned("HTML Tokenizer", &message));
}

#[test]
fn test_state_names_parse() {
    assert_eq!("rcdata".parse::<TokenizerState>(), Ok(TokenizerState::RCDATA));
    assert_eq!(
        "ScriptData".parse::<TokenizerState>(),
        Ok(TokenizerState::ScriptData)
    );
    assert!("NotAState".parse::<TokenizerState>().is_err());
    assert_eq!(TokenizerState::PLAINTEXT.to_string(), "PLAINTEXT");
}

#[test]
fn test_content_states_for_tags() {
    assert_eq!(
        TokenizerState::for_content_of("TITLE"),
        Some(TokenizerState::RCDATA)
    );
    assert_eq!(
        TokenizerState::for_content_of("noscript"),
        Some(TokenizerState::RAWTEXT)
    );
    assert_eq!(TokenizerState::for_content_of("div"), None);
}

#[test]
fn test_tokenizer_stops_in_data_state_after_text_runs() {
    let mut tokenizer = HTMLTokenizer::new("<style>x</style>y");
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(tokens.iter().filter(|token| token.is_character()).count(), 2);
    assert_eq!(tokenizer.state(), TokenizerState::Data);
    assert!(tokenizer.config().switch_content_modes);
}

// =============================================================================
// Input size
// =============================================================================

#[test]
fn test_markup_inside_title_is_linear() {
    let body = "<a".repeat(100_000);
    let tokens = tokenize_within(&format!("<title>{body}</title>"), Duration::from_secs(2));
    assert_eq!(
        tokens,
        vec![
            Token::start_tag("title"),
            Token::character(&body),
            Token::end_tag("title"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_long_reference_name_is_linear() {
    let letters = "a".repeat(200_000);

    let tokens = tokenize_within(&format!("&{letters}"), Duration::from_secs(1));
    assert_eq!(tokens[0], Token::character(format!("&{letters}")));

    let tokens = tokenize_within(
        &format!("<a title=\"&{letters}\">"),
        Duration::from_secs(1),
    );
    assert_eq!(tokens[0].attribute("title"), Some(format!("&{letters}").as_str()));
}
