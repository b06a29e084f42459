//! md2xhtml - Markdown to XHTML converter

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;

use md2xhtml::{document, Diagnostic, IoSink, Md2XhtmlError, Options, Parser};

#[derive(clap::Parser)]
#[command(name = "md2xhtml")]
#[command(version, about = "Markdown to XHTML converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    md2xhtml notes.md -o notes.xhtml     Convert one file
    md2xhtml a.md b.md > book.xhtml      Concatenate inputs into one document
    cat notes.md | md2xhtml --fragment   Body content only, from stdin")]
struct Cli {
    /// Input files, read in order as one document (stdin when omitted, `-` for stdin)
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write body content only, without the XHTML envelope
    #[arg(long)]
    fragment: bool,

    /// Document language
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Rewrite link targets ending in FROM to end in TO (repeatable)
    #[arg(long, value_name = "FROM=TO", value_parser = parse_suffix)]
    suffix: Vec<(String, String)>,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,

    /// Trace line classification and flushes to stderr
    #[cfg(feature = "tracing")]
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options::new().with_source(self.source_name());
        if let Some(lang) = &self.lang {
            options = options.with_lang(lang);
        }
        if let Some(title) = &self.title {
            options = options.with_title(title);
        }
        for (from, to) in &self.suffix {
            options = options.with_suffix(from, to);
        }
        options
    }

    fn source_name(&self) -> String {
        if self.inputs.is_empty() {
            return "stdin".to_string();
        }
        self.inputs
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn parse_suffix(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((from, to)) if !from.is_empty() => Ok((from.to_string(), to.to_string())),
        _ => Err(format!("expected FROM=TO, got '{s}'")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    #[cfg(feature = "tracing")]
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    match run(&cli) {
        Ok(diagnostics) => {
            if !cli.quiet {
                for diagnostic in &diagnostics {
                    eprintln!("warning: {diagnostic}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<Diagnostic>, Md2XhtmlError> {
    let options = cli.options();
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| with_path(e, path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut sink = IoSink::new(writer);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    if !cli.fragment {
        document::write_header(&mut sink, &options.document)?;
    }
    {
        let mut parser = Parser::new(&options, &mut sink).with_diagnostics(&mut diagnostics);
        let stdin = [PathBuf::from("-")];
        let inputs = if cli.inputs.is_empty() {
            &stdin[..]
        } else {
            &cli.inputs[..]
        };
        for input in inputs {
            for line in open(input)?.lines() {
                parser.feed(&line.map_err(|e| with_path(e, input))?)?;
            }
        }
        parser.finish()?;
    }
    if !cli.fragment {
        document::write_footer(&mut sink)?;
    }
    sink.into_inner().flush()?;

    Ok(diagnostics)
}

fn open(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).map_err(|e| with_path(e, path))?;
    Ok(Box::new(BufReader::new(file)))
}

fn with_path(e: io::Error, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("{}: {e}", path.display()))
}
