//! Token dump files: the boundary with the external tokenizer.
//!
//! A dump is a JSON array of `[category, text]` pairs in source order,
//! written by whatever lexer the caller runs. Categories may use pygments
//! spelling (`Token.Name.Function`); they are canonicalized on load.

use crate::core::{Error, Result, Token};
use std::io::Write;
use std::path::Path;

/// Load one file's token stream. Any read or decode failure is reported as a
/// token-stream error so the pipeline can skip the file and continue.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::token_stream(path, e.to_string()))?;
    let pairs: Vec<(String, String)> = serde_json::from_str(&text)
        .map_err(|e| Error::token_stream(path, e.to_string()))?;
    Ok(pairs
        .into_iter()
        .map(|(category, text)| Token::new(category, text))
        .collect())
}

/// Print a token stream in the raw dump format: one `label: category -> text`
/// line per token, with the text debug-escaped so newlines stay on one line.
pub fn dump_tokens(out: &mut impl Write, label: &str, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        writeln!(
            out,
            "{label}: {} -> \"{}\"",
            token.category,
            token.text.escape_debug()
        )?;
    }
    Ok(())
}
