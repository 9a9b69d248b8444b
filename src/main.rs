//! modelcard - render model cards to JSON, PDF, Markdown and HTML

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use modelcard_export::sections::SECTIONS;
use modelcard_export::{
    ColorMode, DirectoryDelivery, ExportOptions, Format, ModelCardRecord, PageSize, export, export_all,
};

#[derive(Parser)]
#[command(name = "modelcard")]
#[command(version, about = "Render model cards to JSON, PDF, Markdown and HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    modelcard card.json                  Write all four formats to the current directory
    modelcard card.json -f pdf -o dist   Write only the PDF into dist/
    modelcard -i card.json               Show which sections carry content")]
struct Cli {
    /// Model card record (JSON)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output format: json, pdf, md, html or all
    #[arg(short, long, default_value = "all")]
    format: String,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// File name to use instead of <model-id>-modelcard.<ext>
    #[arg(long)]
    filename: Option<String>,

    /// HTML color mode: light, dark or auto
    #[arg(long)]
    color_mode: Option<ColorMode>,

    /// PDF page size: a4 or letter
    #[arg(long)]
    page_size: Option<PageSize>,

    /// Compress PDF content streams
    #[arg(long)]
    compress: bool,

    /// TOML file with export options; flags override its values
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Show which sections carry content without exporting
    #[arg(short, long)]
    info: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let result = if cli.info {
        show_info(&cli.input)
    } else {
        run(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_record(path: &Path) -> Result<ModelCardRecord, String> {
    let json = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    ModelCardRecord::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

fn load_options(cli: &Cli) -> Result<ExportOptions, String> {
    let mut options = match &cli.options {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
            toml::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => ExportOptions::default(),
    };

    if let Some(filename) = &cli.filename {
        options.filename = Some(filename.clone());
    }
    if let Some(mode) = cli.color_mode {
        options.html.color_mode = mode;
    }
    if let Some(size) = cli.page_size {
        options.pdf.page_size = size;
    }
    if cli.compress {
        options.pdf.compress = true;
    }
    Ok(options)
}

fn run(cli: &Cli) -> Result<(), String> {
    let record = load_record(&cli.input)?;
    let options = load_options(cli)?;
    let mut delivery = DirectoryDelivery::new(&cli.output);

    let files = if cli.format.eq_ignore_ascii_case("all") {
        export_all(&record, &options, &mut delivery).map_err(|e| e.to_string())?
    } else {
        let format: Format = cli.format.parse().map_err(|e: modelcard_export::Error| e.to_string())?;
        let file = export(format.renderer().as_ref(), &record, &options, &mut delivery)
            .map_err(|e| e.to_string())?;
        vec![file]
    };

    for file in &files {
        info!(
            "Wrote {} ({} bytes)",
            delivery.dir().join(&file.filename).display(),
            file.document.len()
        );
    }
    Ok(())
}

fn show_info(path: &Path) -> Result<(), String> {
    let record = load_record(path)?;

    println!("File: {}", path.display());
    println!("Model: {}", record.model_id().unwrap_or("(missing)"));
    if let Some(license) = record.metadata.as_ref().and_then(|m| m.license.as_deref()) {
        println!("License: {license}");
    }
    println!("Sections:");
    for section in SECTIONS {
        let mark = if section.has_content(&record) { "x" } else { " " };
        println!("  [{mark}] {}", section.pdf);
    }
    Ok(())
}
