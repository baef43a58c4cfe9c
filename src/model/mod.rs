//! Data model for parsed `pdfinfo` output.
//!
//! Values are kept as the raw strings printed by the tool. Typed views such
//! as [`PageSize`] are derived on demand.

mod info;
mod page;

pub use info::PdfInfo;
pub use page::{InfoPage, PageSize, ROTATION_KEY, SIZE_KEY};
