//! pdfoutline CLI - PDF heading outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::batch::{find_pdf_files, process_directory_with, BatchEntry, BatchOptions};
use pdfoutline::{render, DetectorConfig, JsonFormat, OutlineExtractor};

/// Input directory used inside the container image.
const CONTAINER_INPUT: &str = "/app/input";
const CONTAINER_OUTPUT: &str = "/app/output";

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Extract title and H1-H3 heading outlines from PDF files", long_about = None)]
struct Cli {
    /// Directory containing the PDF files
    #[arg(value_name = "INPUT_DIR", env = "PDFOUTLINE_INPUT")]
    input: Option<PathBuf>,

    /// Directory receiving one JSON file per PDF
    #[arg(value_name = "OUTPUT_DIR", env = "PDFOUTLINE_OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract outlines for every PDF in a directory
    Batch {
        /// Directory containing the PDF files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Process files one at a time
        #[arg(long)]
        sequential: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Minimum font size difference between heading levels
        #[arg(long, value_name = "POINTS")]
        min_font_diff: Option<f32>,
    },

    /// Extract the outline of a single PDF
    File {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Minimum font size difference between heading levels
        #[arg(long, value_name = "POINTS")]
        min_font_diff: Option<f32>,
    },

    /// Dump the styled text spans of a PDF
    Spans {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show the classifier verdict for every span
        #[arg(long, conflicts_with = "json")]
        explain: bool,

        /// Print the spans as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            input,
            output,
            sequential,
            compact,
            min_font_diff,
        }) => cmd_batch(&input, &output, sequential, compact, min_font_diff),
        Some(Commands::File {
            input,
            output,
            compact,
            min_font_diff,
        }) => cmd_file(&input, output.as_deref(), compact, min_font_diff),
        Some(Commands::Spans {
            input,
            explain,
            json,
        }) => cmd_spans(&input, explain, json),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let (input, output) = default_dirs(cli.input, cli.output);
            log::debug!("Input {}, output {}", input.display(), output.display());
            cmd_batch(&input, &output, false, false, None)
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Container paths when `/app/input` exists, local `input`/`output` otherwise.
fn default_dirs(input: Option<PathBuf>, output: Option<PathBuf>) -> (PathBuf, PathBuf) {
    let in_container = Path::new(CONTAINER_INPUT).is_dir();
    let input = input.unwrap_or_else(|| {
        if in_container {
            PathBuf::from(CONTAINER_INPUT)
        } else {
            PathBuf::from("input")
        }
    });
    let output = output.unwrap_or_else(|| {
        if in_container {
            PathBuf::from(CONTAINER_OUTPUT)
        } else {
            PathBuf::from("output")
        }
    });
    (input, output)
}

fn build_extractor(min_font_diff: Option<f32>) -> Result<OutlineExtractor, Box<dyn std::error::Error>> {
    let mut config = DetectorConfig::new();
    if let Some(diff) = min_font_diff {
        if !diff.is_finite() || diff <= 0.0 {
            return Err(format!("Invalid --min-font-diff {}: must be a positive number", diff).into());
        }
        config = config.with_min_font_size_diff(diff);
    }
    Ok(OutlineExtractor::new().with_detector_config(config))
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    sequential: bool,
    compact: bool,
    min_font_diff: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = build_extractor(min_font_diff)?;
    let options = BatchOptions::new()
        .with_parallel(!sequential)
        .with_json_format(json_format(compact));

    let total = find_pdf_files(input).len();
    if total == 0 {
        println!(
            "{} {}",
            "No PDF files found in".yellow(),
            input.display()
        );
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = process_directory_with(&extractor, input, output, &options, |entry| {
        pb.set_message(file_name(&entry.source));
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    for entry in &report.entries {
        print_entry(entry);
    }

    println!();
    println!(
        "{} {} succeeded, {} failed, output in {}",
        "Done!".green().bold(),
        report.succeeded(),
        report.failed(),
        output.display()
    );

    Ok(())
}

fn print_entry(entry: &BatchEntry) {
    let name = file_name(&entry.source);

    if let Some(ref err) = entry.write_error {
        println!("  {} {}: {}", "✗".red(), name, err.red());
    } else if let Some(ref err) = entry.outline.error {
        println!("  {} {}: {}", "✗".red(), name, err.red());
    } else {
        let title = if entry.outline.title.is_empty() {
            "(no title)".dimmed().to_string()
        } else {
            entry.outline.title.clone()
        };
        println!(
            "  {} {}: {} {}",
            "✓".green(),
            name,
            title.bold(),
            format!("({} headings)", entry.outline.heading_count()).dimmed()
        );
    }
}

fn cmd_file(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    min_font_diff: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = build_extractor(min_font_diff)?;
    let outline = extractor.extract(input);
    let json = render::to_json(&outline, json_format(compact))?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    if let Some(ref err) = outline.error {
        eprintln!("{}: {}", "Warning".yellow().bold(), err);
    }

    Ok(())
}

fn cmd_spans(input: &Path, explain: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = OutlineExtractor::new();
    let spans = extractor.extract_spans(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
        return Ok(());
    }

    if !explain {
        for span in &spans {
            println!(
                "p{:<3} y={:>7.2} x={:>7.2} size={:>6.2} {}{} {}",
                span.page_number,
                span.y,
                span.x,
                span.font_size,
                if span.is_bold { "B" } else { "-" },
                if span.is_italic { "I" } else { "-" },
                span.text
            );
        }
        println!("\n{} {} spans", "Total:".bold(), spans.len());
        return Ok(());
    }

    let detector = extractor.detector();
    let hierarchy = detector.font_hierarchy(&spans);

    println!("{}", "Font Hierarchy".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (level, size) in hierarchy.iter() {
        println!("{}: {}", level.to_string().bold(), size);
    }
    println!();

    for (span, verdict) in detector.explain(&spans) {
        let label = match verdict.level() {
            Some(level) => level.to_string().green().bold(),
            None if verdict.candidate.is_some() => "--".yellow(),
            None => "  ".normal(),
        };
        let signals = verdict
            .signals
            .map(|s| format!("[{}/{}]", s.count(), verdict.required))
            .unwrap_or_default();
        println!(
            "{} p{:<3} y={:>7.2} size={:>6.2} {:>7} {}",
            label,
            span.page_number,
            span.y,
            span.font_size,
            signals.dimmed(),
            span.text
        );
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let info = pdfoutline::document_info(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), info.pdf_version);
    println!("{}: {}", "Pages".bold(), info.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if info.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = info.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = info.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = info.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref keywords) = info.keywords {
        println!("{}: {}", "Keywords".bold(), keywords);
    }
    if let Some(ref creator) = info.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(ref producer) = info.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = info.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = info.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF heading outline extraction tool");
    println!();
    println!("License: MIT");
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dirs_win() {
        let (input, output) = default_dirs(Some("in".into()), Some("out".into()));
        assert_eq!(input, PathBuf::from("in"));
        assert_eq!(output, PathBuf::from("out"));
    }

    #[test]
    fn test_build_extractor_rejects_bad_diff() {
        assert!(build_extractor(Some(0.0)).is_err());
        assert!(build_extractor(Some(-1.0)).is_err());
        assert!(build_extractor(Some(f32::NAN)).is_err());

        let extractor = build_extractor(Some(2.0)).unwrap();
        assert_eq!(extractor.detector().config().min_font_size_diff, 2.0);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["pdfoutline", "file", "a.pdf", "--compact"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::File { compact: true, .. })));

        let cli = Cli::try_parse_from(["pdfoutline", "in", "out"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("in")));
    }
}
