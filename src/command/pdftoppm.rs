//! `pdftoppm` rasterization command builder.

use std::path::Path;

use super::run_tool;
use crate::error::Result;

/// Default executable name.
const PROGRAM: &str = "pdftoppm";

/// Raster format of the generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Portable pixmap, the tool's default
    #[default]
    Ppm,
    /// PNG images
    Png,
    /// JPEG images
    Jpeg,
    /// TIFF images
    Tiff,
}

impl ImageFormat {
    /// Command line flag selecting this format, if any.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            ImageFormat::Ppm => None,
            ImageFormat::Png => Some("-png"),
            ImageFormat::Jpeg => Some("-jpeg"),
            ImageFormat::Tiff => Some("-tiff"),
        }
    }

    /// File extension of the generated images.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Tiff => "tif",
        }
    }
}

/// A `pdftoppm` invocation.
///
/// Options are appended in the order they are set; the PDF path and the
/// image prefix always come last.
#[derive(Debug, Clone)]
pub struct Pdftoppm {
    program: String,
    options: Vec<String>,
    pdf_path: String,
    image_prefix: String,
}

impl Pdftoppm {
    /// Create a command rendering `pdf_path` to images named `<image_prefix>-<page>.<ext>`.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(pdf_path: P, image_prefix: Q) -> Self {
        Self {
            program: PROGRAM.to_string(),
            options: Vec::new(),
            pdf_path: pdf_path.as_ref().to_string_lossy().into_owned(),
            image_prefix: image_prefix.as_ref().to_string_lossy().into_owned(),
        }
    }

    /// Use a different executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// First page to render (1-indexed).
    pub fn first_page(self, page: u32) -> Self {
        self.push_option("-f", page)
    }

    /// Last page to render (1-indexed).
    pub fn last_page(self, page: u32) -> Self {
        self.push_option("-l", page)
    }

    /// Output resolution in DPI.
    pub fn resolution(self, dpi: u32) -> Self {
        self.push_option("-r", dpi)
    }

    /// Scale each page so its longer side is `pixels` long.
    pub fn scale_to(self, pixels: u32) -> Self {
        self.push_option("-scale-to", pixels)
    }

    /// Select the output image format.
    pub fn format(mut self, format: ImageFormat) -> Self {
        if let Some(flag) = format.flag() {
            self.options.push(flag.to_string());
        }
        self
    }

    fn push_option(mut self, flag: &str, value: u32) -> Self {
        self.options.push(flag.to_string());
        self.options.push(value.to_string());
        self
    }

    /// Executable that will be run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list passed to the executable.
    pub fn args(&self) -> Vec<String> {
        let mut args = self.options.clone();
        args.push(self.pdf_path.clone());
        args.push(self.image_prefix.clone());
        args
    }

    /// Run the command and wait for it to finish.
    ///
    /// On success the images have been written next to the configured prefix.
    pub fn run(&self) -> Result<()> {
        run_tool(&self.program, &self.args())?;
        log::debug!("Rendered {} to {}-*", self.pdf_path, self.image_prefix);
        Ok(())
    }
}
