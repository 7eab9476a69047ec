//! Tokenizer options.

use super::state::TokenizerState;

/// Options controlling a [`super::HTMLTokenizer`].
///
/// ```
/// use lark_html::{HTMLTokenizer, TokenizerConfig, TokenizerState};
///
/// let config = TokenizerConfig {
///     initial_state: TokenizerState::RCDATA,
///     last_start_tag: Some("title".to_string()),
///     ..TokenizerConfig::default()
/// };
/// let tokens: Vec<_> = HTMLTokenizer::with_config("a<b></title>", config).collect();
/// assert_eq!(tokens.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// State to start in. Fragment parsing of `<textarea>` contents, for example,
    /// starts in [`TokenizerState::RCDATA`].
    pub initial_state: TokenizerState,

    /// Name of the element whose raw text is being tokenized, used to recognize
    /// the appropriate end tag when starting in a raw text state.
    pub last_start_tag: Option<String>,

    /// Switch into RCDATA/RAWTEXT/script data/PLAINTEXT after start tags such as
    /// `<title>` and `<script>`. Turn off when a tree builder drives the state
    /// through [`super::HTMLTokenizer::set_state`].
    pub switch_content_modes: bool,

    /// Stop recording parse errors after this many. `Some(0)` records none.
    pub max_errors: Option<usize>,

    /// Echo parse errors to stderr through `lark_common::warning::warn_once`.
    pub warnings: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            initial_state: TokenizerState::Data,
            last_start_tag: None,
            switch_content_modes: true,
            max_errors: None,
            warnings: false,
        }
    }
}
