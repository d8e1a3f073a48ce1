//! Front matter splitting
//!
//! A document may open with a metadata block fenced by `---` (or `= yaml =`) lines:
//!
//! ```text
//! ---
//! title: Hello
//! ---
//! Body starts here.
//! ```
//!
//! [`split`] separates that block from the markup body without interpreting either. The block
//! is closed by the first later line equal to the opening fence or to `...`; trailing
//! whitespace after the closing fence, blank lines included, belongs to the block. Input that
//! does not open with a fence, or never closes it, has no header at all.

use crate::error::DocumentError;
use serde::de::DeserializeOwned;
use serde_yaml::Value;

const BOM: char = '\u{feff}';
const FENCES: [&str; 2] = ["---", "= yaml ="];
const ALT_CLOSER: &str = "...";

/// Result of splitting raw text into header and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'s> {
    /// Header text between the fences, whitespace-trimmed. `Some("")` for an empty block.
    pub header: Option<String>,
    /// Everything after the header block.
    pub body: &'s str,
    /// 1-based line of the input on which `body` starts.
    pub body_begin: usize,
}

impl Split<'_> {
    /// Check that the header, if any, is well-formed YAML.
    pub fn validate(&self) -> Result<(), DocumentError> {
        match self.header.as_deref() {
            Some(header) if !header.is_empty() => serde_yaml::from_str::<Value>(header)
                .map(|_| ())
                .map_err(|e| DocumentError::Split(e.to_string())),
            _ => Ok(()),
        }
    }
}

/// Split `text` into its optional header block and body.
pub fn split(text: &str) -> Split<'_> {
    match locate(text) {
        Some((header, body_start)) => Split {
            header: Some(header.trim().to_string()),
            body: &text[body_start..],
            body_begin: 1 + text[..body_start].matches('\n').count(),
        },
        None => Split {
            header: None,
            body: text,
            body_begin: 1,
        },
    }
}

/// Deserialize header text into `T`. A missing, empty or null header yields `T::default()`.
pub(crate) fn attributes<T>(header: Option<&str>) -> Result<T, DocumentError>
where
    T: DeserializeOwned + Default,
{
    let Some(header) = header.filter(|h| !h.trim().is_empty()) else {
        return Ok(T::default());
    };
    let value: Value =
        serde_yaml::from_str(header).map_err(|e| DocumentError::Split(e.to_string()))?;
    if value.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(value).map_err(|e| DocumentError::Attributes(e.to_string()))
}

/// Find the header block. Returns the raw text between the fences and the byte offset at
/// which the body begins.
fn locate(text: &str) -> Option<(&str, usize)> {
    let start = if text.starts_with(BOM) {
        BOM.len_utf8()
    } else {
        0
    };

    let first_end = line_end(text, start);
    let first = &text[start..first_end];
    let opener = first.strip_suffix('\r').unwrap_or(first);
    if !FENCES.contains(&opener) || first_end == text.len() {
        return None;
    }
    let content_start = start + opener.len();

    let mut line_start = first_end + 1;
    while line_start <= text.len() {
        let end = line_end(text, line_start);
        let line = &text[line_start..end];
        for closer in [opener, ALT_CLOSER] {
            if !line.starts_with(closer) {
                continue;
            }
            if let Some(body_start) = closing_end(text, line_start + closer.len()) {
                return Some((&text[content_start..line_start], body_start));
            }
        }
        if end == text.len() {
            break;
        }
        line_start = end + 1;
    }
    None
}

fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

/// Where the body begins when a closing fence ends at `after`, or `None` if the fence is
/// followed by something other than whitespace on its own line.
fn closing_end(text: &str, after: usize) -> Option<usize> {
    let rest = &text[after..];
    let blank = rest
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(rest.len());
    if blank == rest.len() {
        return Some(text.len());
    }
    rest[..blank].rfind('\n').map(|i| after + i + 1)
}
