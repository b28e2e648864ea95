//! Command-line renderer for JSON tree documents.
//!
//! Reads one or more documents in the JSON tree format (see
//! `marktree::tree::json`), renders them under the selected dialect and
//! writes the concatenated output to stdout or a file.

use std::fs;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use marktree::error::LoadError;
use marktree::serial::{render_all, Dialect};
use marktree::tree::json;
use marktree::Node;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// marktree -- render JSON markup trees as HTML or XML.
#[derive(Parser, Debug)]
#[command(name = "marktree", version, about, long_about = None)]
struct Cli {
    /// JSON tree documents to render (use `-` for stdin).
    #[arg(required = true)]
    files: Vec<String>,

    // -- Output dialect ----------------------------------------------------
    /// Output dialect.
    #[arg(long, value_enum, default_value_t = DialectArg::Compact)]
    dialect: DialectArg,

    /// Indentation unit for pretty output (default: two spaces).
    #[arg(long, value_name = "STR")]
    indent: Option<String>,

    /// Indent pretty output with tabs.
    #[arg(long, conflicts_with = "indent")]
    tabs: bool,

    /// End pretty output lines with CRLF.
    #[arg(long)]
    crlf: bool,

    // -- Content -------------------------------------------------------------
    /// Replace all text content with the given placeholder before rendering.
    #[arg(long, value_name = "PLACEHOLDER")]
    redact: Option<String>,

    // -- Output options ----------------------------------------------------
    /// Save output to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<String>,

    // -- Debug options -----------------------------------------------------
    /// Log progress to stderr (overrides `RUST_LOG`).
    #[arg(long)]
    verbose: bool,

    /// Print timing information for loading and rendering.
    #[arg(long)]
    timing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    /// HTML without added whitespace.
    Compact,
    /// Indented HTML.
    Pretty,
    /// XML; void elements get closing tags.
    Xml,
}

impl Cli {
    /// Builds the dialect from the output options.
    fn dialect(&self) -> Dialect {
        let pretty_options = self.indent.is_some() || self.tabs || self.crlf;
        if pretty_options && self.dialect != DialectArg::Pretty {
            warn!("--indent, --tabs and --crlf only apply to --dialect pretty");
        }
        match self.dialect {
            DialectArg::Compact => Dialect::CompactHtml,
            DialectArg::Xml => Dialect::Xml,
            DialectArg::Pretty => {
                let indent = if self.tabs {
                    "\t".to_string()
                } else {
                    self.indent.clone().unwrap_or_else(|| "  ".to_string())
                };
                let newline = if self.crlf { "\r\n" } else { "\n" };
                Dialect::pretty_with(indent, newline)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SUCCESS: u8 = 0;
const EXIT_LOAD_ERROR: u8 = 1;
const EXIT_WRITE_ERROR: u8 = 2;

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dialect = cli.dialect();
    info!(%dialect, files = cli.files.len(), "starting");

    let mut output = String::new();
    let mut worst_exit = EXIT_SUCCESS;

    for file in &cli.files {
        match process_file(&cli, file, &dialect) {
            Ok(rendered) => output.push_str(&rendered),
            Err(e) => {
                eprintln!("{file}: {e}");
                worst_exit = worst_exit.max(EXIT_LOAD_ERROR);
            }
        }
    }

    if let Err(e) = write_output(cli.output.as_deref(), &output) {
        let target = cli.output.as_deref().unwrap_or("stdout");
        eprintln!("{target}: failed to write: {e}");
        return ExitCode::from(EXIT_WRITE_ERROR);
    }

    ExitCode::from(worst_exit)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("marktree=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads and renders a single input file.
fn process_file(cli: &Cli, filename: &str, dialect: &Dialect) -> Result<String, LoadError> {
    // -- Load --------------------------------------------------------------
    let start_load = Instant::now();
    let mut nodes = read_input(filename)?;
    if cli.timing {
        let elapsed = start_load.elapsed();
        eprintln!("Loading {filename} took {elapsed:?}");
    }

    let node_count: usize = nodes.iter().map(Node::node_count).sum();
    debug!(file = filename, roots = nodes.len(), nodes = node_count, "loaded tree");

    // -- Transform ---------------------------------------------------------
    if let Some(ref placeholder) = cli.redact {
        nodes = nodes.iter().map(|n| n.redact(placeholder)).collect();
        debug!(file = filename, "redacted text content");
    }

    // -- Render ------------------------------------------------------------
    let start_render = Instant::now();
    let rendered = render_all(&nodes, dialect);
    if cli.timing {
        let elapsed = start_render.elapsed();
        eprintln!("Rendering {filename} took {elapsed:?}");
    }

    Ok(rendered)
}

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// Reads a tree document from a file or stdin (when filename is `-`).
fn read_input(filename: &str) -> Result<Vec<Node>, LoadError> {
    if filename == "-" {
        json::from_reader(io::stdin().lock())
    } else {
        let file = fs::File::open(filename)?;
        json::from_reader(BufReader::new(file))
    }
}

/// Writes the rendered output to a file, or to stdout when `path` is `None`.
fn write_output(path: Option<&str>, output: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, output),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()
        }
    }
}
