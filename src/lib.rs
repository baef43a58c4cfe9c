//! # popkit
//!
//! Structured access to the poppler command line tools.
//!
//! The core of this library parses the text printed by `pdfinfo` into a
//! [`PdfInfo`]: top-level `key: value` lines become properties, and
//! `Page N attribute: value` lines become per-page records. It also builds
//! and runs `pdftoppm` invocations to rasterize pages.
//!
//! ## Quick Start
//!
//! ```
//! use popkit::parse_str;
//!
//! fn main() -> popkit::Result<()> {
//!     let info = parse_str(
//!         "Pages:           1\n\
//!          Page    1 size:  595.32 x 841.92 pts (A4)\n\
//!          Page    1 rot:   0\n",
//!     )?;
//!
//!     assert_eq!(info.property("Pages"), Some("1"));
//!     let size = info.page(1).unwrap().size();
//!     assert_eq!(size.note, "(A4)");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Lenient line grammar**: banners, blank lines and warnings are skipped
//! - **Strict page keys**: malformed `Page ...` keys abort the parse
//! - **Typed geometry**: page sizes parsed on demand
//! - **JSON output**: `{"Properties": {...}, "Pages": {...}}`
//! - **Tool runners**: `pdfinfo` and `pdftoppm` wrappers

pub mod command;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use command::{ImageFormat, Pdfinfo, Pdftoppm};
pub use error::{Error, Result};
pub use model::{InfoPage, PageSize, PdfInfo};
pub use parser::{classify_line, parse_bytes, parse_str, LineKind, PdfInfoParser};
pub use render::{from_json, JsonFormat};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse `pdfinfo` output from a reader.
///
/// # Example
///
/// ```no_run
/// use popkit::parse_reader;
///
/// let info = parse_reader(std::io::stdin()).unwrap();
/// println!("Producer: {}", info.producer());
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<PdfInfo> {
    PdfInfoParser::new(BufReader::new(reader)).parse()
}

/// Parse `pdfinfo` output saved to a file.
///
/// # Example
///
/// ```no_run
/// use popkit::parse_file;
///
/// let info = parse_file("pdfinfo.txt").unwrap();
/// println!("Pages: {}", info.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PdfInfo> {
    let file = File::open(path)?;
    parse_reader(file)
}

/// Run `pdfinfo` on a PDF and parse its output.
///
/// # Example
///
/// ```no_run
/// use popkit::inspect;
///
/// let info = inspect("document.pdf").unwrap();
/// for (number, page) in &info.pages {
///     println!("page {}: {}", number, page.size_raw());
/// }
/// ```
pub fn inspect<P: AsRef<Path>>(pdf_path: P) -> Result<PdfInfo> {
    Pdfinfo::new(pdf_path).run()
}

/// Convert parsed output to JSON.
pub fn to_json(info: &PdfInfo, format: JsonFormat) -> Result<String> {
    render::to_json(info, format)
}
