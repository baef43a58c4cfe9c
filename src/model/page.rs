//! Page-level types.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Attribute key holding the page size, e.g. `595.32 x 841.92 pts (A4)`.
pub const SIZE_KEY: &str = "size";

/// Attribute key holding the page rotation in degrees.
pub const ROTATION_KEY: &str = "rot";

fn page_size_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*) x (.*) (pts) ?(.*)$").unwrap())
}

/// Raw attributes of a single page as printed by `pdfinfo`.
///
/// ```text
/// Page    1 size:  595.32 x 841.92 pts (A4)
/// Page    1 rot:   0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoPage {
    attributes: BTreeMap<String, String>,
}

impl InfoPage {
    /// Create an empty page record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get a raw attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// All attributes of the page, ordered by key.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Number of attributes recorded for the page.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if no attribute has been recorded.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Raw `size` attribute, or an empty string.
    pub fn size_raw(&self) -> &str {
        self.get(SIZE_KEY).unwrap_or_default()
    }

    /// Raw `rot` attribute, or an empty string.
    pub fn rotation_raw(&self) -> &str {
        self.get(ROTATION_KEY).unwrap_or_default()
    }

    /// Parse the `size` attribute into a [`PageSize`].
    ///
    /// # Panics
    ///
    /// Panics if the attribute is missing or malformed. Callers that cannot
    /// guarantee well-formed geometry should use [`InfoPage::try_size`].
    pub fn size(&self) -> PageSize {
        match self.try_size() {
            Ok(size) => size,
            Err(e) => panic!("{}", e),
        }
    }

    /// Parse the `size` attribute into a [`PageSize`], reporting failures.
    pub fn try_size(&self) -> Result<PageSize> {
        PageSize::parse(self.size_raw())
    }
}

/// Page geometry derived from the raw `size` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSize {
    /// Page width in `unit`
    pub width: f64,

    /// Page height in `unit`
    pub height: f64,

    /// Unit of width and height (always `pts` for pdfinfo)
    pub unit: String,

    /// Trailing annotation such as `(A4)`, empty if absent
    pub note: String,
}

impl PageSize {
    /// Parse a raw value like `595.32 x 841.92 pts (A4)`.
    pub fn parse(raw: &str) -> Result<Self> {
        let caps = page_size_regex()
            .captures(raw)
            .ok_or_else(|| Error::InvalidPageSize(raw.to_string()))?;

        let width = parse_dimension(&caps[1])?;
        let height = parse_dimension(&caps[2])?;
        let note = caps.get(4).map(|m| m.as_str()).unwrap_or_default();

        Ok(Self {
            width,
            height,
            unit: caps[3].to_string(),
            note: note.to_string(),
        })
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

fn parse_dimension(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_size(size: &str) -> InfoPage {
        let mut page = InfoPage::new();
        page.set(SIZE_KEY, size);
        page
    }

    #[test]
    fn test_size_with_note() {
        let size = page_with_size("595.32 x 841.92 pts (A4)").size();
        assert_eq!(size.width, 595.32);
        assert_eq!(size.height, 841.92);
        assert_eq!(size.unit, "pts");
        assert_eq!(size.note, "(A4)");
        assert!(!size.is_landscape());
    }

    #[test]
    fn test_size_without_note() {
        let size = page_with_size("612 x 792 pts").size();
        assert_eq!(size.width, 612.0);
        assert_eq!(size.height, 792.0);
        assert_eq!(size.note, "");
    }

    #[test]
    fn test_size_note_with_spaces() {
        let size = page_with_size("612 x 792 pts (letter) rotated").size();
        assert_eq!(size.note, "(letter) rotated");
    }

    #[test]
    fn test_size_landscape() {
        let size = page_with_size("841.92 x 595.32 pts (A4)").size();
        assert!(size.is_landscape());
    }

    #[test]
    fn test_raw_accessors_default_to_empty() {
        let page = InfoPage::new();
        assert_eq!(page.size_raw(), "");
        assert_eq!(page.rotation_raw(), "");
        assert!(page.is_empty());
    }

    #[test]
    fn test_try_size_missing() {
        let result = InfoPage::new().try_size();
        assert!(matches!(result, Err(Error::InvalidPageSize(raw)) if raw.is_empty()));
    }

    #[test]
    fn test_try_size_not_numeric() {
        let result = page_with_size("wide x 841.92 pts").try_size();
        assert!(matches!(result, Err(Error::InvalidNumber(token)) if token == "wide"));
    }

    #[test]
    fn test_try_size_wrong_unit() {
        let result = page_with_size("210 x 297 mm").try_size();
        assert!(matches!(result, Err(Error::InvalidPageSize(_))));
    }

    #[test]
    #[should_panic(expected = "parsing page size \"\" failed")]
    fn test_size_panics_when_missing() {
        InfoPage::new().size();
    }

    #[test]
    #[should_panic(expected = "to float failed")]
    fn test_size_panics_when_not_numeric() {
        page_with_size("595.32 x tall pts (A4)").size();
    }

    #[test]
    fn test_last_write_wins() {
        let mut page = InfoPage::new();
        page.set("rot", "0");
        page.set("rot", "90");
        assert_eq!(page.rotation_raw(), "90");
        assert_eq!(page.len(), 1);
    }
}
