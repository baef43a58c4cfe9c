//! Document-level types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::InfoPage;

/// Parsed output of `pdfinfo`.
///
/// Top-level lines end up in `properties`, for example:
///
/// ```text
/// Producer:        PDFKit.NET 23.1.101.39834 DMV9
/// CreationDate:    Wed Apr 19 12:58:37 2023 CEST
/// Pages:           2
/// File size:       230296 bytes
/// PDF version:     1.7
/// ```
///
/// Page-scoped lines (`Page    1 size: ...`) end up in `pages`, keyed by
/// the page number exactly as it was printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfInfo {
    /// Key/value pairs that are not further interpreted
    #[serde(rename = "Properties")]
    pub properties: BTreeMap<String, String>,

    /// Page records keyed by page number
    #[serde(rename = "Pages")]
    pub pages: BTreeMap<String, InfoPage>,
}

impl PdfInfo {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a top-level property.
    pub fn record_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Insert or overwrite an attribute of a page, creating the page if needed.
    pub fn record_page_attribute(
        &mut self,
        page: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.pages.entry(page.into()).or_default().set(attribute, value);
    }

    /// Get a top-level property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// The `Producer` property, or an empty string.
    pub fn producer(&self) -> &str {
        self.property("Producer").unwrap_or_default()
    }

    /// Get a page by number.
    pub fn page(&self, number: u32) -> Option<&InfoPage> {
        self.pages.get(&number.to_string())
    }

    /// Number of page records.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.pages.is_empty()
    }
}
