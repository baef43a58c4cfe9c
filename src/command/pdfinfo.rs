//! `pdfinfo` invocation.

use std::path::Path;

use super::run_tool;
use crate::error::Result;
use crate::model::PdfInfo;
use crate::parser::parse_bytes;

/// Default executable name.
const PROGRAM: &str = "pdfinfo";

/// Last page requested when no explicit bound is set. `pdfinfo` clamps it to
/// the real page count.
const LAST_PAGE_UNBOUNDED: u32 = i32::MAX as u32;

/// A `pdfinfo` invocation.
///
/// `pdfinfo` only prints per-page `Page N size:` lines when a page range is
/// requested, so a range is always passed.
#[derive(Debug, Clone)]
pub struct Pdfinfo {
    program: String,
    pdf_path: String,
    first_page: u32,
    last_page: Option<u32>,
}

impl Pdfinfo {
    /// Create a command inspecting `pdf_path`.
    pub fn new<P: AsRef<Path>>(pdf_path: P) -> Self {
        Self {
            program: PROGRAM.to_string(),
            pdf_path: pdf_path.as_ref().to_string_lossy().into_owned(),
            first_page: 1,
            last_page: None,
        }
    }

    /// Use a different executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// First page to report (1-indexed).
    pub fn first_page(mut self, page: u32) -> Self {
        self.first_page = page;
        self
    }

    /// Last page to report (1-indexed).
    pub fn last_page(mut self, page: u32) -> Self {
        self.last_page = Some(page);
        self
    }

    /// Executable that will be run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list passed to the executable.
    pub fn args(&self) -> Vec<String> {
        vec![
            "-f".to_string(),
            self.first_page.to_string(),
            "-l".to_string(),
            self.last_page.unwrap_or(LAST_PAGE_UNBOUNDED).to_string(),
            self.pdf_path.clone(),
        ]
    }

    /// Run `pdfinfo` and parse its output.
    pub fn run(&self) -> Result<PdfInfo> {
        let output = run_tool(&self.program, &self.args())?;
        parse_bytes(&output.stdout)
    }
}
