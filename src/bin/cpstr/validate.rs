//! CLI handler for the `validate` command.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use cpstr::access;
use cpstr::text::utf8::{self, Utf8Error, Utf8ErrorKind};

/// Check files for well-formed UTF-8 and count their code points.
#[derive(Debug, Parser)]
pub struct ValidateUtf8Args {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// Exit codes for the validate command.
pub mod exit_codes {
    /// Every input is valid UTF-8.
    pub const SUCCESS: i32 = 0;
    /// At least one input is malformed.
    pub const INVALID: i32 = 1;
    /// An input could not be read.
    pub const IO_ERROR: i32 = 2;
}

/// ANSI escapes used in diagnostics; all empty when color is off.
struct Palette {
    error: &'static str,
    location: &'static str,
    gutter: &'static str,
    caret: &'static str,
    hint: &'static str,
    reset: &'static str,
}

impl Palette {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: "\x1b[1;31m",
                location: "\x1b[1;34m",
                gutter: "\x1b[0;34m",
                caret: "\x1b[1;32m",
                hint: "\x1b[0;33m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                error: "",
                location: "",
                gutter: "",
                caret: "",
                hint: "",
                reset: "",
            }
        }
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct FileReport<'a> {
    file: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    message: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl From<&Utf8Error> for ErrorReport {
    fn from(err: &Utf8Error) -> Self {
        Self {
            message: err.kind.to_string(),
            offset: err.offset,
            line: err.line,
            column: err.column,
        }
    }
}

/// Run the validate command.
pub fn run(args: ValidateUtf8Args, json: bool) -> Result<i32> {
    let use_color = if args.no_color {
        false
    } else if args.color {
        true
    } else {
        atty::is(atty::Stream::Stderr)
    };
    let palette = Palette::new(use_color);

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;
        return Ok(check_input(&input, "<stdin>", &args, json, &palette));
    }

    let mut any_invalid = false;
    let mut any_io_error = false;
    for path in &args.files {
        let name = path.to_string_lossy();
        match fs::read(path) {
            Ok(input) => {
                log::debug!("validating {} ({} bytes)", name, input.len());
                if check_input(&input, &name, &args, json, &palette) == exit_codes::INVALID {
                    any_invalid = true;
                }
            }
            Err(e) => {
                any_io_error = true;
                log::warn!("cannot read {}: {}", name, e);
                if !args.quiet {
                    eprintln!("{}error{}: {}: {}", palette.error, palette.reset, name, e);
                }
            }
        }
    }

    Ok(if any_io_error {
        exit_codes::IO_ERROR
    } else if any_invalid {
        exit_codes::INVALID
    } else {
        exit_codes::SUCCESS
    })
}

fn check_input(
    input: &[u8],
    name: &str,
    args: &ValidateUtf8Args,
    json: bool,
    palette: &Palette,
) -> i32 {
    let result = utf8::validate_utf8(input);

    if json && !args.quiet {
        let report = match &result {
            Ok(()) => FileReport {
                file: name,
                valid: true,
                code_points: access::length(input).ok(),
                error: None,
            },
            Err(err) => FileReport {
                file: name,
                valid: false,
                code_points: None,
                error: Some(err.into()),
            },
        };
        match serde_json::to_string(&report) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("cannot serialize report for {}: {}", name, e),
        }
    } else if let Err(err) = &result {
        if !args.quiet {
            print_diagnostic(err, input, name, palette);
        }
    }

    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(_) => exit_codes::INVALID,
    }
}

/// Print the error with the offending line and a caret under the bad byte.
fn print_diagnostic(err: &Utf8Error, input: &[u8], name: &str, palette: &Palette) {
    let byte = input
        .get(err.offset)
        .map(|&b| format!(" (byte {})", utf8::format_byte(b)))
        .unwrap_or_default();
    eprintln!("{}error{}: {}{}", palette.error, palette.reset, err.kind, byte);
    eprintln!(
        "  {}--> {}:{}:{}{}",
        palette.location, name, err.line, err.column, palette.reset
    );

    let snippet = line_snippet(input, err);
    let width = err.line.to_string().len().max(3);
    let blank = " ".repeat(width + 2);
    eprintln!("{}{}|{}", blank, palette.gutter, palette.reset);
    eprintln!(
        " {}{:>width$}{} {}|{} {}",
        palette.gutter,
        err.line,
        palette.reset,
        palette.gutter,
        palette.reset,
        snippet.text,
        width = width
    );
    let hint = hint(err.kind)
        .map(|h| format!(" {}{}{}", palette.hint, h, palette.reset))
        .unwrap_or_default();
    eprintln!(
        "{}{}|{} {}{}^{}{}",
        blank,
        palette.gutter,
        palette.reset,
        " ".repeat(snippet.caret),
        palette.caret,
        palette.reset,
        hint
    );
    eprintln!();
}

fn hint(kind: Utf8ErrorKind) -> Option<&'static str> {
    match kind {
        Utf8ErrorKind::InvalidLeadByte => Some("bytes 0x80-0xBF only continue a sequence"),
        Utf8ErrorKind::InvalidContinuationByte => Some("expected a byte in 0x80-0xBF"),
        Utf8ErrorKind::OverlongEncoding => Some("use the shortest encoding"),
        Utf8ErrorKind::SurrogateCodepoint => Some("U+D800-U+DFFF are reserved for UTF-16"),
        Utf8ErrorKind::OutOfRangeCodepoint => Some("maximum is U+10FFFF"),
        Utf8ErrorKind::TruncatedSequence => None,
    }
}

/// Display text of the error's line and the caret column within it.
struct Snippet {
    text: String,
    caret: usize,
}

/// Longest line shown before the snippet is cut around the error.
const MAX_SNIPPET_WIDTH: usize = 80;

fn line_snippet(input: &[u8], err: &Utf8Error) -> Snippet {
    let line_start = err.offset + 1 - err.column;
    let line_end = input[line_start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(input.len(), |i| line_start + i);
    let line = &input[line_start..line_end];
    let col = err.column - 1;

    // Bytes before the error are known to be valid, so the caret column is
    // their code-point count.
    let window_start = col.saturating_sub(MAX_SNIPPET_WIDTH / 2);
    let window_end = (window_start + MAX_SNIPPET_WIDTH).min(line.len());
    let prefix = if window_start > 0 { "..." } else { "" };
    let suffix = if window_end < line.len() { "..." } else { "" };
    let before = String::from_utf8_lossy(&line[window_start..col]);
    let text = format!(
        "{}{}{}",
        prefix,
        String::from_utf8_lossy(&line[window_start..window_end]),
        suffix
    );

    Snippet {
        text,
        caret: prefix.len() + before.chars().count(),
    }
}
