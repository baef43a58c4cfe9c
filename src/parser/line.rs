//! Line classification for `pdfinfo` output.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Prefix that marks a key as page-scoped.
const PAGE_KEY_PREFIX: &str = "Page ";

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?):[\t ]*(.*)$").unwrap())
}

fn page_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Page[\t ]*?([0-9]+)[\t ](.*)$").unwrap())
}

/// Role of a single line of `pdfinfo` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A top-level `key: value` line
    Property {
        /// Everything before the first colon
        key: &'a str,
        /// Everything after the colon and its leading blanks
        value: &'a str,
    },

    /// A `Page <n> <attribute>: value` line
    PageAttribute {
        /// Page number as printed
        page: &'a str,
        /// Attribute name, e.g. `size` or `rot`
        attribute: &'a str,
        /// Raw value
        value: &'a str,
    },

    /// Anything else (blank lines, banners, continuation lines)
    Unrecognized,
}

/// Classify one line (without its trailing newline).
///
/// Returns [`Error::InvalidPageKey`] when the key carries the `Page ` prefix
/// but not a page number followed by an attribute name.
pub fn classify_line(line: &str) -> Result<LineKind<'_>> {
    let Some(caps) = line_regex().captures(line) else {
        return Ok(LineKind::Unrecognized);
    };

    // Both groups always participate when the pattern matches.
    let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
        return Ok(LineKind::Unrecognized);
    };
    let (key, value) = (key.as_str(), value.as_str());

    if !key.starts_with(PAGE_KEY_PREFIX) {
        return Ok(LineKind::Property { key, value });
    }

    let page_caps = page_key_regex()
        .captures(key)
        .ok_or_else(|| Error::InvalidPageKey(key.to_string()))?;

    match (page_caps.get(1), page_caps.get(2)) {
        (Some(page), Some(attribute)) => Ok(LineKind::PageAttribute {
            page: page.as_str(),
            attribute: attribute.as_str(),
            value,
        }),
        _ => Err(Error::InvalidPageKey(key.to_string())),
    }
}
