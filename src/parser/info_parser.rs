//! Parser for the text output of `pdfinfo`.

use std::io::BufRead;

use super::line::{classify_line, LineKind};
use crate::error::{Error, Result};
use crate::model::PdfInfo;

/// Single-pass parser turning `pdfinfo` output into a [`PdfInfo`].
///
/// Lines that do not look like `key: value` are skipped. A page-scoped key
/// that does not match `Page <number> <attribute>` aborts the parse.
pub struct PdfInfoParser<R> {
    reader: R,
    info: PdfInfo,
    lines_read: usize,
    lines_skipped: usize,
}

impl<R: BufRead> PdfInfoParser<R> {
    /// Create a parser over the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            info: PdfInfo::new(),
            lines_read: 0,
            lines_skipped: 0,
        }
    }

    /// Consume all input and return the parsed document.
    pub fn parse(mut self) -> Result<PdfInfo> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.strip_suffix('\n').unwrap_or(buf.as_str());
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Err(e) = self.parse_line(line) {
                log::warn!("pdfinfo line {}: {}", self.lines_read + 1, e);
                return Err(e);
            }
        }

        log::debug!(
            "Parsed {} lines ({} skipped): {} properties, {} pages",
            self.lines_read,
            self.lines_skipped,
            self.info.properties.len(),
            self.info.pages.len()
        );

        Ok(self.info)
    }
}

impl PdfInfoParser<std::io::Empty> {
    /// Create a parser that is fed line by line through
    /// [`PdfInfoParser::parse_line`].
    pub fn incremental() -> Self {
        Self::new(std::io::empty())
    }
}

impl<R> PdfInfoParser<R> {
    /// Feed a single line (without trailing newline).
    ///
    /// On error the document built so far must be discarded.
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        let kind = classify_line(line)?;
        apply(&mut self.info, kind);
        self.lines_read += 1;
        if kind == LineKind::Unrecognized {
            self.lines_skipped += 1;
            log::trace!("Skipping unrecognized line {}", self.lines_read);
        }
        Ok(())
    }

    /// Return the document built from the lines fed so far.
    pub fn finish(self) -> PdfInfo {
        self.info
    }
}

fn apply(info: &mut PdfInfo, kind: LineKind<'_>) {
    match kind {
        LineKind::Property { key, value } => info.record_property(key, value),
        LineKind::PageAttribute {
            page,
            attribute,
            value,
        } => info.record_page_attribute(page, attribute, value),
        LineKind::Unrecognized => {}
    }
}

/// Parse `pdfinfo` output held in memory.
pub fn parse_str(text: &str) -> Result<PdfInfo> {
    PdfInfoParser::new(text.as_bytes()).parse()
}

/// Parse raw bytes, e.g. the captured stdout of a `pdfinfo` process.
pub fn parse_bytes(data: &[u8]) -> Result<PdfInfo> {
    let text = std::str::from_utf8(data)
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    parse_str(text)
}
