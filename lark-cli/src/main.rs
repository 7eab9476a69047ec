//! Lark CLI
//!
//! Dumps the token stream of an HTML document, for testing and debugging the
//! tokenizer.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use lark_common::warning::clear_warnings;
use lark_html::{HTMLTokenizer, ParseError, Token, TokenizerConfig, TokenizerState};
use owo_colors::OwoColorize;

/// Lark: print the tokens of an HTML document
#[derive(Parser, Debug)]
#[command(name = "lark")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    lark ./index.html

    # Tokenize inline HTML and list parse errors
    lark --html '<p class=a class=b>x' --errors

    # Tokenize the contents of a <textarea>
    lark --html 'a<b></textarea>' --initial-state RCDATA --last-start-tag textarea

    # Machine-readable output
    lark --format json ./index.html
"#)]
struct Cli {
    /// Path to HTML file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Tokenize HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print the parse errors
    #[arg(short, long)]
    errors: bool,

    /// Echo parse errors to stderr as they happen
    #[arg(short = 'W', long)]
    warnings: bool,

    /// Stop recording parse errors after this many
    #[arg(long, value_name = "N")]
    max_errors: Option<usize>,

    /// State to start in (Data, RCDATA, RAWTEXT, ScriptData, PLAINTEXT, ...)
    #[arg(long, value_name = "STATE", default_value = "Data")]
    initial_state: TokenizerState,

    /// Tag name treated as the last start tag, for end tags in RCDATA and friends
    #[arg(long, value_name = "TAG")]
    last_start_tag: Option<String>,

    /// Don't switch content states after <title>, <script>, <style>, ...
    #[arg(long)]
    no_content_modes: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One token per line
    Text,
    /// A JSON array of tokens, or an object with tokens and errors
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let html = load_input(&cli)?;

    clear_warnings();
    let config = TokenizerConfig {
        initial_state: cli.initial_state,
        last_start_tag: cli.last_start_tag.clone(),
        switch_content_modes: !cli.no_content_modes,
        max_errors: cli.max_errors,
        warnings: cli.warnings,
    };
    let mut tokenizer = HTMLTokenizer::with_config(html, config);
    tokenizer.run();
    let errors = tokenizer.errors().to_vec();
    let tokens = tokenizer.into_tokens();

    match cli.format {
        Format::Text => {
            print_tokens(&tokens);
            if cli.errors {
                print_errors(&errors);
            }
        }
        Format::Json => print_json(&tokens, cli.errors.then_some(errors.as_slice()))?,
    }

    Ok(())
}

/// Load the document from CLI arguments
fn load_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        bail!("nothing to tokenize: pass a file path or --html")
    }
}

fn print_tokens(tokens: &[Token]) {
    println!("=== Tokens ===");
    for token in tokens {
        let line = token.to_string();
        match token {
            Token::StartTag { .. } | Token::EndTag { .. } => println!("{}", line.cyan()),
            Token::Doctype { .. } => println!("{}", line.magenta()),
            Token::Comment { .. } => println!("{}", line.green()),
            Token::Character { .. } => println!("{line}"),
            Token::EndOfFile => println!("{}", line.dimmed()),
        }
    }
}

fn print_errors(errors: &[ParseError]) {
    println!("\n=== Parse Errors ===");
    if errors.is_empty() {
        println!("{}", "none".dimmed());
    }
    for error in errors {
        println!("{}", error.red());
    }
}

fn print_json(tokens: &[Token], errors: Option<&[ParseError]>) -> Result<()> {
    let document = match errors {
        Some(errors) => serde_json::json!({ "tokens": tokens, "errors": errors }),
        None => serde_json::json!(tokens),
    };
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
