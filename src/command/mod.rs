//! Invocation of the poppler command line tools.
//!
//! [`Pdfinfo`] runs `pdfinfo` and parses its output into a
//! [`PdfInfo`](crate::model::PdfInfo). [`Pdftoppm`] builds and runs a
//! `pdftoppm` rasterization; it writes image files and reads nothing back.
//!
//! # Example
//!
//! ```no_run
//! use popkit::command::{ImageFormat, Pdftoppm};
//!
//! fn main() -> popkit::Result<()> {
//!     Pdftoppm::new("document.pdf", "out/page")
//!         .last_page(1)
//!         .resolution(150)
//!         .format(ImageFormat::Png)
//!         .run()
//! }
//! ```

mod pdfinfo;
mod pdftoppm;

pub use pdfinfo::Pdfinfo;
pub use pdftoppm::{ImageFormat, Pdftoppm};

use crate::error::{Error, Result};
use std::process::{Command, Output};

/// Run `program` with `args` and wait for it, capturing stdout and stderr.
///
/// A non-zero exit status is reported as [`Error::CommandFailed`].
fn run_tool(program: &str, args: &[String]) -> Result<Output> {
    log::debug!("Running {} {}", program, args.join(" "));

    let output = Command::new(program).args(args).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        return Err(Error::CommandFailed {
            program: program.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr,
        });
    }

    Ok(output)
}
