//! popkit CLI - inspect and rasterize PDFs through poppler

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use popkit::{parse_reader, ImageFormat, JsonFormat, PdfInfo, Pdfinfo, Pdftoppm};

#[derive(Parser)]
#[command(name = "popkit")]
#[command(version)]
#[command(about = "Inspect and rasterize PDFs with poppler's pdfinfo and pdftoppm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run pdfinfo on a PDF and show its metadata
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// First page to report
        #[arg(short, long)]
        first: Option<u32>,

        /// Last page to report
        #[arg(short, long)]
        last: Option<u32>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// pdfinfo executable
        #[arg(long, env = "POPKIT_PDFINFO", default_value = "pdfinfo")]
        pdfinfo: String,
    },

    /// Parse saved pdfinfo output and print it as JSON
    Parse {
        /// File containing pdfinfo output (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render PDF pages to images with pdftoppm
    Render {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output path prefix for the generated images
        #[arg(value_name = "PREFIX")]
        prefix: PathBuf,

        /// First page to render
        #[arg(short, long)]
        first: Option<u32>,

        /// Last page to render
        #[arg(short, long)]
        last: Option<u32>,

        /// Resolution in DPI
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Scale pages so the longer side has this many pixels
        #[arg(long, value_name = "PIXELS")]
        scale_to: Option<u32>,

        /// Image format
        #[arg(long, value_enum, default_value = "ppm")]
        format: FormatArg,

        /// pdftoppm executable
        #[arg(long, env = "POPKIT_PDFTOPPM", default_value = "pdftoppm")]
        pdftoppm: String,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Portable pixmap (pdftoppm default)
    Ppm,
    /// PNG images
    Png,
    /// JPEG images
    Jpeg,
    /// TIFF images
    Tiff,
}

impl From<FormatArg> for ImageFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Ppm => ImageFormat::Ppm,
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Jpeg => ImageFormat::Jpeg,
            FormatArg::Tiff => ImageFormat::Tiff,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info {
            input,
            first,
            last,
            json,
            compact,
            pdfinfo,
        } => cmd_info(&input, first, last, json_format(json, compact), &pdfinfo),
        Commands::Parse {
            input,
            output,
            compact,
        } => cmd_parse(input.as_deref(), output.as_deref(), compact),
        Commands::Render {
            input,
            prefix,
            first,
            last,
            resolution,
            scale_to,
            format,
            pdftoppm,
        } => {
            let mut cmd = Pdftoppm::new(&input, &prefix).with_program(pdftoppm);
            if let Some(page) = first {
                cmd = cmd.first_page(page);
            }
            if let Some(page) = last {
                cmd = cmd.last_page(page);
            }
            if let Some(dpi) = resolution {
                cmd = cmd.resolution(dpi);
            }
            if let Some(pixels) = scale_to {
                cmd = cmd.scale_to(pixels);
            }
            cmd_render(&cmd.format(format.into()), &prefix)
        }
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(json: bool, compact: bool) -> Option<JsonFormat> {
    match (json, compact) {
        (false, _) => None,
        (true, false) => Some(JsonFormat::Pretty),
        (true, true) => Some(JsonFormat::Compact),
    }
}

fn cmd_info(
    input: &Path,
    first: Option<u32>,
    last: Option<u32>,
    json: Option<JsonFormat>,
    program: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Pdfinfo::new(input).with_program(program);
    if let Some(page) = first {
        cmd = cmd.first_page(page);
    }
    if let Some(page) = last {
        cmd = cmd.last_page(page);
    }
    let info = cmd.run()?;

    if let Some(format) = json {
        println!("{}", popkit::to_json(&info, format)?);
        return Ok(());
    }

    print_summary(input, &info);
    Ok(())
}

fn print_summary(input: &Path, info: &PdfInfo) {
    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    for (key, value) in &info.properties {
        println!("{}: {}", key.as_str().bold(), value);
    }

    if info.pages.is_empty() {
        return;
    }

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (number, page) in &info.pages {
        // Sizes come straight from pdfinfo; show the raw text if they don't parse.
        let size = match page.try_size() {
            Ok(size) if size.is_landscape() => format!(
                "{} x {} {} (landscape)",
                size.width, size.height, size.unit
            ),
            Ok(size) => format!("{} x {} {}", size.width, size.height, size.unit),
            Err(_) => page.size_raw().to_string(),
        };
        let rotation = format!("rot {}", page.rotation_raw());
        println!(
            "{} {}: {} {}",
            "Page".bold(),
            number,
            size,
            rotation.as_str().dimmed()
        );
    }
}

fn cmd_parse(
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = match input {
        Some(path) if path != Path::new("-") => parse_reader(File::open(path)?)?,
        _ => parse_reader(io::stdin().lock())?,
    };

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = popkit::to_json(&info, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_render(cmd: &Pdftoppm, prefix: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = prefix.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    log::info!("{} {}", cmd.program(), cmd.args().join(" "));
    cmd.run()?;

    println!("{} {}-*", "Rendered to".green(), prefix.display());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "popkit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("pdfinfo parsing and pdftoppm rasterization");
    println!();
    println!("License: MIT");
}
