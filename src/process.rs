//! Line-by-line driver from an input stream to the two output sinks.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::{LineError, reformat};

/// Per-stream tally of what happened to each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub accepted: usize,
    pub unrecognised: usize,
    pub invalid: usize,
}

/// Reads `input` to the end, writing each canonical date to `out` and each
/// rejection diagnostic to `diag`. Every line produces exactly one record.
///
/// # Errors
/// Returns an error only if reading the input or writing a sink fails.
/// Rejected lines are never errors.
pub fn process_lines<R, O, D>(mut input: R, out: &mut O, diag: &mut D) -> io::Result<Summary>
where
    R: BufRead,
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        summary.lines += 1;

        match reformat(&line) {
            Ok(date) => {
                trace!(line = %line, %date, "accepted");
                writeln!(out, "{date}")?;
                summary.accepted += 1;
            }
            Err(err) => {
                debug!(line = %line, reason = %err.reason(), "{err}");
                writeln!(diag, "{}", err.diagnostic(&line))?;
                match err {
                    LineError::FormatNotRecognised(_) => summary.unrecognised += 1,
                    LineError::DateNotValid(_) => summary.invalid += 1,
                }
            }
        }
    }

    out.flush()?;
    diag.flush()?;
    Ok(summary)
}

/// Strips the line terminator (`\n` or `\r\n`) and decodes, replacing
/// invalid UTF-8 so a bad line is rejected instead of ending the stream.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
