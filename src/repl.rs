//! Interactive prompt loop.
//!
//! Reads one name per line, prints its pun, and stops on EOF or on
//! `exit` / `quit`. Blank lines are skipped; lines longer than
//! [`MAX_LINE_BYTES`] are reported and discarded.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::output::{self, OutputFormat};
use crate::pun::Spookifier;

/// Maximum size of a single input line.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

const PROMPT: &str = "Enter a name (or 'exit') > ";
const EXIT_WORDS: &[&str] = &["exit", "quit"];

/// Outcome of a single bounded line read.
#[derive(Debug, PartialEq, Eq)]
enum LineRead {
    Eof,
    Line,
    Oversized,
}

/// Run the prompt loop until `reader` is exhausted or the user exits.
///
/// The prompt is written to `out` before every read, followed by the result
/// line once input arrives.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if input is not UTF-8.
pub fn run_repl(
    spookifier: &mut Spookifier,
    reader: &mut impl BufRead,
    out: &mut impl Write,
    format: OutputFormat,
) -> Result<()> {
    info!(list = spookifier.word_list().name(), "prompt loop starting");

    let mut line_buf = String::new();

    loop {
        out.write_all(PROMPT.as_bytes())
            .context("failed to write prompt")?;
        out.flush().context("failed to flush prompt")?;

        line_buf.clear();
        match read_line_limited(reader, &mut line_buf, MAX_LINE_BYTES)
            .context("failed to read input")?
        {
            LineRead::Eof => {
                // Finish the prompt line so the shell starts on a fresh one.
                writeln!(out).context("failed to write output")?;
                info!("input closed, stopping");
                break;
            }
            LineRead::Oversized => {
                warn!(limit = MAX_LINE_BYTES, "input line too long, skipped");
                writeln!(out, "Input too long (limit {MAX_LINE_BYTES} bytes)")
                    .context("failed to write output")?;
                continue;
            }
            LineRead::Line => {}
        }

        let name = line_buf.trim();
        if name.is_empty() {
            continue;
        }
        if EXIT_WORDS.iter().any(|w| name.eq_ignore_ascii_case(w)) {
            info!("exit requested");
            break;
        }

        debug!(name, "received name");
        let outcome = spookifier.pun(name);
        let rendered = output::render(&outcome, format)?;
        writeln!(out, "{rendered}").context("failed to write output")?;
    }

    Ok(())
}

/// Read a line from `reader` into `buf`, stopping at newline or `max_bytes`.
///
/// An oversized line is consumed up to and including its newline and
/// reported as [`LineRead::Oversized`]; `buf` is left empty in that case.
fn read_line_limited(
    reader: &mut impl BufRead,
    buf: &mut String,
    max_bytes: usize,
) -> Result<LineRead> {
    let mut bytes: Vec<u8> = Vec::new();
    let mut oversized = false;

    loop {
        let available = reader.fill_buf().context("fill_buf failed")?;
        if available.is_empty() {
            break;
        }
        let (consumed, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };

        if !oversized {
            if bytes.len() + consumed > max_bytes {
                oversized = true;
                bytes.clear();
            } else {
                bytes.extend_from_slice(&available[..consumed]);
            }
        }
        reader.consume(consumed);

        if found_newline {
            break;
        }
    }

    if oversized {
        return Ok(LineRead::Oversized);
    }
    if bytes.is_empty() {
        return Ok(LineRead::Eof);
    }

    // Decode once the whole line is in, so multi-byte chars split across
    // buffer refills stay intact.
    let line = String::from_utf8(bytes).context("input is not valid UTF-8")?;
    buf.push_str(&line);
    Ok(LineRead::Line)
}
