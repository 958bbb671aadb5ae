//! Wildcard query for pattern matching.

use std::sync::Arc;

use regex::Regex;

use crate::error::{PresearchError, Result};

/// A query matching documents containing terms that match a wildcard pattern.
///
/// Supports the following wildcards:
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
/// - `\*` and `\?` match literal `*` and `?` characters
#[derive(Debug, Clone)]
pub struct WildcardQuery {
    /// The field to search in.
    field: String,
    /// The wildcard pattern.
    pattern: String,
    /// The compiled regex for matching.
    regex: Arc<Regex>,
}

impl WildcardQuery {
    /// Create a new wildcard query, validating the pattern.
    pub fn new<F, P>(field: F, pattern: P) -> Result<Self>
    where
        F: Into<String>,
        P: Into<String>,
    {
        let field = field.into();
        let pattern = pattern.into();
        let regex = Self::compile_pattern(&pattern)?;

        Ok(WildcardQuery {
            field,
            pattern,
            regex: Arc::new(regex),
        })
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the wildcard pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check whether a term matches this query's pattern.
    pub fn matches(&self, term: &str) -> bool {
        self.regex.is_match(term)
    }

    /// Get the literal prefix of the pattern: everything before the first
    /// unescaped `*` or `?`, with escapes resolved.
    ///
    /// An empty prefix means the pattern starts with a wildcard and no
    /// leading literal can be relied upon.
    pub fn prefix(&self) -> String {
        let mut prefix = String::new();
        let mut chars = self.pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '*' | '?' => break,
                '\\' => match chars.next() {
                    Some(escaped) => prefix.push(escaped),
                    None => break,
                },
                _ => prefix.push(c),
            }
        }
        prefix
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        format!("{}:{}", self.field, self.pattern)
    }

    /// Compile a wildcard pattern into an anchored regex.
    fn compile_pattern(pattern: &str) -> Result<Regex> {
        let mut regex_pattern = String::new();
        regex_pattern.push('^');

        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '\\' => {
                    if i + 1 < chars.len() {
                        match chars[i + 1] {
                            '*' => regex_pattern.push_str("\\*"),
                            '?' => regex_pattern.push_str("\\?"),
                            c => regex_pattern.push_str(&regex::escape(&c.to_string())),
                        }
                        i += 1;
                    } else {
                        regex_pattern.push_str("\\\\");
                    }
                }
                '*' => regex_pattern.push_str(".*"),
                '?' => regex_pattern.push('.'),
                c => regex_pattern.push_str(&regex::escape(&c.to_string())),
            }
            i += 1;
        }

        regex_pattern.push('$');
        Regex::new(&regex_pattern)
            .map_err(|e| PresearchError::query(format!("invalid wildcard pattern '{pattern}': {e}")))
    }
}
