//! Parsing of `pdfinfo` text output.

mod info_parser;
mod line;

pub use info_parser::{parse_bytes, parse_str, PdfInfoParser};
pub use line::{classify_line, LineKind};
