//! Lexical token model shared by every metric module.
//!
//! Tokens arrive from an external tokenizer as (category, text) pairs, where
//! the category is a hierarchical, dot-separated classification of the lexeme
//! (`operator`, `name.function`, `literal.string`, ...). Pygments-style
//! categories (`Token.Name.Function`) are accepted and canonicalized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchical token category, canonicalized to lowercase dotted form.
/// Serde round-trips through the raw string so deserialized categories are
/// canonicalized the same way constructed ones are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TokenCategory(String);

impl TokenCategory {
    /// Canonicalize an incoming category string: strip a leading `Token.`
    /// root (pygments spells categories `Token.Name.Function`) and lowercase
    /// the remaining segments.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref().trim();
        let stripped = raw
            .strip_prefix("Token.")
            .or_else(|| raw.strip_prefix("token."))
            .unwrap_or(raw);
        TokenCategory(stripped.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segment-wise containment: `name.function.magic` is within
    /// `name.function`, but `name.functions` is not.
    pub fn is_within(&self, prefix: &str) -> bool {
        match self.0.strip_prefix(prefix) {
            Some("") => true,
            Some(rest) => rest.starts_with('.'),
            None => false,
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenCategory {
    fn from(raw: &str) -> Self {
        TokenCategory::new(raw)
    }
}

impl From<String> for TokenCategory {
    fn from(raw: String) -> Self {
        TokenCategory::new(raw)
    }
}

impl From<TokenCategory> for String {
    fn from(category: TokenCategory) -> Self {
        category.0
    }
}

/// One lexeme: category plus literal text. The ordered sequence of tokens for
/// a file is the sole input to metric extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
}

impl Token {
    pub fn new(category: impl AsRef<str>, text: impl Into<String>) -> Self {
        Self {
            category: TokenCategory::new(category),
            text: text.into(),
        }
    }
}
