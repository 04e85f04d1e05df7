//! Subcommands that run a single string operation.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use serde::{Serialize, Serializer};
use std::io::{self, Read, Write};

use cpstr::{access, search, transform, StrError};

/// Exit codes for operation subcommands.
pub mod exit_codes {
    /// The operation succeeded.
    pub const SUCCESS: i32 = 0;
    /// The operation reported an error.
    pub const FAILED: i32 = 1;
}

/// Capacity used by the pad commands when none is given.
const DEFAULT_CAPACITY: usize = 1 << 20;

/// Text arguments equal to this are read from stdin instead.
const STDIN_MARKER: &str = "-";

#[derive(Debug, Subcommand)]
pub enum OpCommand {
    /// Count the code points in TEXT
    Length { text: String },

    /// Print the code point at INDEX as UTF-8
    CharAt { text: String, index: usize },

    /// Print the value of the code point at INDEX
    CharCodeAt { text: String, index: usize },

    /// Like char-code-at, but prints nothing instead of failing
    CodePointAt { text: String, index: usize },

    /// Encode a code point (decimal, 0x1F30D or U+1F30D)
    FromCodePoint {
        #[arg(value_parser = parse_code_point)]
        code_point: u32,
    },

    /// Find SUBSTR at or after code-point index START
    Find {
        text: String,
        substr: String,
        #[arg(short, long, default_value = "0")]
        start: usize,
    },

    /// Code-point index of the first occurrence of SUBSTR
    IndexOf { text: String, substr: String },

    /// Code-point index of the last occurrence of SUBSTR
    LastIndexOf { text: String, substr: String },

    /// Whether SUBSTR occurs in TEXT
    Includes { text: String, substr: String },

    /// Whether TEXT starts with PREFIX
    StartsWith { text: String, prefix: String },

    /// Whether TEXT ends with SUFFIX
    EndsWith { text: String, suffix: String },

    /// Lower-case ASCII and Latin-1 letters
    Lower { text: String },

    /// Upper-case ASCII and Latin-1 letters
    Upper { text: String },

    /// Strip leading and trailing whitespace
    Trim {
        text: String,
        /// Only strip leading whitespace
        #[arg(long, conflicts_with = "end")]
        start: bool,
        /// Only strip trailing whitespace
        #[arg(long)]
        end: bool,
    },

    /// Repeat TEXT COUNT times
    Repeat { text: String, count: usize },

    /// Code points [START, END); empty when START > END
    Slice { text: String, start: usize, end: usize },

    /// Code points between START and END, in either order
    Substring { text: String, start: usize, end: usize },

    /// Pad the start of TEXT to TARGET_LEN code points
    PadStart {
        text: String,
        target_len: usize,
        #[arg(short, long, default_value = " ")]
        pad: String,
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },

    /// Pad the end of TEXT to TARGET_LEN code points
    PadEnd {
        text: String,
        target_len: usize,
        #[arg(short, long, default_value = " ")]
        pad: String,
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },

    /// Replace every occurrence of SEARCH with REPLACEMENT
    Replace {
        text: String,
        search: String,
        replacement: String,
    },

    /// Join FIRST and SECOND
    Concat { first: String, second: String },

    /// Everything before the first DELIMITER
    CopyUntil { text: String, delimiter: String },
}

impl OpCommand {
    /// Subcommand name, used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Length { .. } => "length",
            Self::CharAt { .. } => "char-at",
            Self::CharCodeAt { .. } => "char-code-at",
            Self::CodePointAt { .. } => "code-point-at",
            Self::FromCodePoint { .. } => "from-code-point",
            Self::Find { .. } => "find",
            Self::IndexOf { .. } => "index-of",
            Self::LastIndexOf { .. } => "last-index-of",
            Self::Includes { .. } => "includes",
            Self::StartsWith { .. } => "starts-with",
            Self::EndsWith { .. } => "ends-with",
            Self::Lower { .. } => "lower",
            Self::Upper { .. } => "upper",
            Self::Trim { .. } => "trim",
            Self::Repeat { .. } => "repeat",
            Self::Slice { .. } => "slice",
            Self::Substring { .. } => "substring",
            Self::PadStart { .. } => "pad-start",
            Self::PadEnd { .. } => "pad-end",
            Self::Replace { .. } => "replace",
            Self::Concat { .. } => "concat",
            Self::CopyUntil { .. } => "copy-until",
        }
    }
}

/// Result of a single operation.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Count(usize),
    Position(Option<usize>),
    CodePoint(Option<u32>),
    Flag(bool),
    Text(#[serde(serialize_with = "lossy_text")] Vec<u8>),
}

#[allow(clippy::ptr_arg)]
fn lossy_text<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Parse a code point written as decimal, `0x` hex or `U+` hex.
pub fn parse_code_point(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("U+").or_else(|| s.strip_prefix("u+")) {
        u32::from_str_radix(hex, 16)
    } else if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse::<u32>()
    };
    parsed.map_err(|_| format!("Invalid code point: '{}'. Use 127757, 0x1F30D or U+1F30D", s))
}

/// Bytes of a text argument; `-` reads all of stdin.
fn read_text(arg: String) -> Result<Vec<u8>> {
    if arg != STDIN_MARKER {
        return Ok(arg.into_bytes());
    }
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("failed to read from stdin")?;
    log::debug!("read {} bytes from stdin", input.len());
    Ok(input)
}

/// Run `op`. I/O failures are the outer error, operation failures the inner one.
pub fn run(op: OpCommand) -> Result<Result<Outcome, StrError>> {
    let mut out = Vec::new();
    let outcome = match op {
        OpCommand::Length { text } => access::length(&read_text(text)?).map(Outcome::Count),
        OpCommand::CharAt { text, index } => {
            access::char_at(&read_text(text)?, index).map(Outcome::Text)
        }
        OpCommand::CharCodeAt { text, index } => access::char_code_at(&read_text(text)?, index)
            .map(|cp| Outcome::CodePoint(Some(cp))),
        OpCommand::CodePointAt { text, index } => Ok(Outcome::CodePoint(access::code_point_at(
            &read_text(text)?,
            index,
        ))),
        OpCommand::FromCodePoint { code_point } => {
            access::from_code_point(code_point).map(Outcome::Text)
        }
        OpCommand::Find {
            text,
            substr,
            start,
        } => search::find(&read_text(text)?, substr.as_bytes(), start).map(Outcome::Position),
        OpCommand::IndexOf { text, substr } => {
            search::index_of(&read_text(text)?, substr.as_bytes()).map(Outcome::Position)
        }
        OpCommand::LastIndexOf { text, substr } => {
            search::last_index_of(&read_text(text)?, substr.as_bytes()).map(Outcome::Position)
        }
        OpCommand::Includes { text, substr } => {
            search::includes(&read_text(text)?, substr.as_bytes()).map(Outcome::Flag)
        }
        OpCommand::StartsWith { text, prefix } => Ok(Outcome::Flag(search::starts_with(
            &read_text(text)?,
            prefix.as_bytes(),
        ))),
        OpCommand::EndsWith { text, suffix } => Ok(Outcome::Flag(search::ends_with(
            &read_text(text)?,
            suffix.as_bytes(),
        ))),
        OpCommand::Lower { text } => {
            transform::to_lower_case(&read_text(text)?, &mut out).map(|()| Outcome::Text(out))
        }
        OpCommand::Upper { text } => {
            transform::to_upper_case(&read_text(text)?, &mut out).map(|()| Outcome::Text(out))
        }
        OpCommand::Trim { text, start, end } => {
            let mut buf = read_text(text)?;
            let trimmed = match (start, end) {
                (true, _) => transform::trim_start_in_place(&mut buf),
                (_, true) => transform::trim_end_in_place(&mut buf),
                _ => transform::trim_in_place(&mut buf),
            };
            trimmed.map(|()| Outcome::Text(buf))
        }
        OpCommand::Repeat { text, count } => {
            transform::repeat(&read_text(text)?, count, &mut out).map(|()| Outcome::Text(out))
        }
        OpCommand::Slice { text, start, end } => {
            transform::slice(&read_text(text)?, start, end, &mut out).map(|()| Outcome::Text(out))
        }
        OpCommand::Substring { text, start, end } => {
            transform::substring(&read_text(text)?, start, end, &mut out)
                .map(|()| Outcome::Text(out))
        }
        OpCommand::PadStart {
            text,
            target_len,
            pad,
            capacity,
        } => transform::pad_start(
            &read_text(text)?,
            target_len,
            pad.as_bytes(),
            &mut out,
            capacity,
        )
        .map(|()| Outcome::Text(out)),
        OpCommand::PadEnd {
            text,
            target_len,
            pad,
            capacity,
        } => transform::pad_end(
            &read_text(text)?,
            target_len,
            pad.as_bytes(),
            &mut out,
            capacity,
        )
        .map(|()| Outcome::Text(out)),
        OpCommand::Replace {
            text,
            search,
            replacement,
        } => transform::replace(
            &read_text(text)?,
            search.as_bytes(),
            replacement.as_bytes(),
            &mut out,
        )
        .map(|()| Outcome::Text(out)),
        OpCommand::Concat { first, second } => {
            if first == STDIN_MARKER && second == STDIN_MARKER {
                bail!("only one argument can be read from stdin");
            }
            transform::concat(&read_text(first)?, &read_text(second)?, &mut out)
                .map(|()| Outcome::Text(out))
        }
        OpCommand::CopyUntil { text, delimiter } => {
            transform::copy_until(&read_text(text)?, delimiter.as_bytes(), &mut out)
                .map(|()| Outcome::Text(out))
        }
    };
    Ok(outcome)
}

/// Print an outcome and return the exit code.
pub fn print(name: &str, outcome: &Result<Outcome, StrError>, json: bool) -> Result<i32> {
    if json {
        let report = match outcome {
            Ok(result) => serde_json::json!({ "operation": name, "result": result }),
            Err(err) => serde_json::json!({ "operation": name, "error": err }),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        match outcome {
            Ok(result) => write_plain(result).context("failed to write to stdout")?,
            Err(err) => eprintln!("error: {}: {}", name, err),
        }
    }

    Ok(match outcome {
        Ok(_) => exit_codes::SUCCESS,
        Err(err) => {
            log::debug!("{} failed: {:?}", name, err);
            exit_codes::FAILED
        }
    })
}

fn write_plain(outcome: &Outcome) -> io::Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    match outcome {
        Outcome::Count(n) => writeln!(stdout, "{}", n),
        Outcome::Position(Some(pos)) => writeln!(stdout, "{}", pos),
        Outcome::Position(None) => writeln!(stdout, "-1"),
        Outcome::CodePoint(Some(cp)) => writeln!(stdout, "{}", cp),
        Outcome::CodePoint(None) => Ok(()),
        Outcome::Flag(flag) => writeln!(stdout, "{}", flag),
        Outcome::Text(bytes) => {
            stdout.write_all(bytes)?;
            stdout.write_all(b"\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ok(op: OpCommand) -> Outcome {
        run(op).unwrap().unwrap()
    }

    #[test]
    fn test_parse_code_point() {
        assert_eq!(parse_code_point("127757").unwrap(), 127757);
        assert_eq!(parse_code_point("0x1F30D").unwrap(), 0x1F30D);
        assert_eq!(parse_code_point("U+1F30D").unwrap(), 0x1F30D);
        assert_eq!(parse_code_point("u+e9").unwrap(), 0xE9);
        assert!(parse_code_point("U+").is_err());
        assert!(parse_code_point("abc").is_err());
    }

    #[test]
    fn runs_operations() {
        assert_eq!(
            run_ok(OpCommand::Length {
                text: "Héllö, 世界!".into()
            }),
            Outcome::Count(10)
        );
        assert_eq!(
            run_ok(OpCommand::LastIndexOf {
                text: "Hello, Hello, World!".into(),
                substr: "Hello".into()
            }),
            Outcome::Position(Some(7))
        );
        assert_eq!(
            run_ok(OpCommand::Trim {
                text: "  x  ".into(),
                start: true,
                end: false
            }),
            Outcome::Text(b"x  ".to_vec())
        );
        assert_eq!(
            run_ok(OpCommand::FromCodePoint {
                code_point: 0x1F30D
            }),
            Outcome::Text("🌍".as_bytes().to_vec())
        );
    }

    #[test]
    fn operation_errors_are_inner() {
        let outcome = run(OpCommand::CharAt {
            text: "abc".into(),
            index: 3,
        })
        .unwrap();
        assert_eq!(outcome, Err(StrError::InvalidIndex { index: 3, limit: 3 }));
    }

    #[test]
    fn concat_reads_stdin_at_most_once() {
        let err = run(OpCommand::Concat {
            first: STDIN_MARKER.into(),
            second: STDIN_MARKER.into(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("stdin"));
        assert_eq!(
            run_ok(OpCommand::Concat {
                first: "世".into(),
                second: "界".into()
            }),
            Outcome::Text("世界".as_bytes().to_vec())
        );
    }

    #[test]
    fn json_shapes() {
        let value = serde_json::to_value(Outcome::Position(None)).unwrap();
        assert_eq!(value, serde_json::Value::Null);
        let value = serde_json::to_value(Outcome::Text("世界".as_bytes().to_vec())).unwrap();
        assert_eq!(value, serde_json::json!("世界"));
        let value = serde_json::to_value(StrError::InvalidUtf8 { offset: 4 }).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "invalid_utf8", "offset": 4 }));
    }
}
