//! Validation of parsed connection definitions.

use miette::SourceSpan;

use crate::{ConnectionConfig, Provider, Result, SourceContext};

/// Validation context that carries source information for spans.
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self { source }
    }

    /// Find the span of a connection's table header in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Find the span of a key inside a connection's table.
    pub fn find_key_span(&self, name: &str, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), name, key)
    }

    /// Validate a single connection definition.
    pub fn validate_connection(&self, conn: &ConnectionConfig) -> Result<()> {
        if let Some(reason) = validate_connection_name(&conn.name) {
            return Err(self
                .source
                .invalid_name_error(&conn.name, reason, self.find_span(&conn.name)));
        }

        match (&conn.connection_string, &conn.env) {
            (None, None) => {
                return Err(self.source.validation_error(
                    format!(
                        "connection '{}' needs either connection_string or env",
                        conn.name
                    ),
                    self.find_span(&conn.name),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(self.source.validation_error(
                    format!(
                        "connection '{}' sets both connection_string and env",
                        conn.name
                    ),
                    self.find_key_span(&conn.name, "env"),
                ));
            }
            _ => {}
        }

        if conn.schema.is_some() && conn.provider != Provider::Postgres {
            return Err(self.source.validation_error(
                "schema is only supported by the postgres provider",
                self.find_key_span(&conn.name, "schema"),
            ));
        }

        Ok(())
    }
}

/// Validate that a connection name can be used as a directory and namespace name.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_connection_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if name == "." || name == ".." {
        return Some("name cannot be '.' or '..'");
    }

    if name.contains(['/', '\\']) {
        return Some("name cannot contain path separators");
    }

    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Some("name cannot contain whitespace");
    }

    None
}

/// Find the span of a connection name in the TOML source.
/// Searches for patterns like `.name]`, `."name"]`, or `.name.`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("connections.{}]", name),
        format!("connections.\"{}\"]", name),
        format!("connections.{}.", name),
        format!("connections.{} ", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // skip the `connections.` prefix
            let start = pos + "connections.".len();
            let len = pattern.len() - "connections.".len() - 1;
            return Some(SourceSpan::from((start, len)));
        }
    }

    // Fallback: just find the name anywhere (less precise)
    if !name.is_empty() {
        if let Some(pos) = src.find(name) {
            return Some(SourceSpan::from((pos, name.len())));
        }
    }

    None
}

/// Find the span of `key` in the table of connection `name`.
///
/// The search covers the connection's own line (an inline table) and the
/// lines below it up to the next `[` header.
pub(crate) fn find_key_span(src: &str, name: &str, key: &str) -> Option<SourceSpan> {
    let section = find_name_span(src, name)?;
    let mut offset = section.offset() + section.len();
    let mut lines = src[offset..].split_inclusive('\n');

    if let Some(first) = lines.next() {
        if let Some(pos) = find_assignment(first, key) {
            return Some(SourceSpan::from((offset + pos, key.len())));
        }
        offset += first.len();
    }

    for line in lines {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            break;
        }
        let indent = line.len() - trimmed.len();
        if find_assignment(trimmed, key) == Some(0) {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }
        offset += line.len();
    }

    None
}

/// Position of `key` in `text` where it is a whole word followed by `=`.
fn find_assignment(text: &str, key: &str) -> Option<usize> {
    text.match_indices(key).map(|(pos, _)| pos).find(|&pos| {
        let before = text[..pos].chars().next_back();
        let standalone = !before.is_some_and(|c| c.is_alphanumeric() || c == '_');
        standalone && text[pos + key.len()..].trim_start().starts_with('=')
    })
}
