//! Interactive front end: reads one segment from stdin and prints how it
//! meets the line `-3x + 5y - 2 = 0`.
//!
//! ```text
//! echo "0 0 4 4" | cargo run
//! RUST_LOG=segline=debug cargo run
//! ```

use std::io::{self, BufRead, Write};

use segline::error::InputError;
use segline::input::CoordinateReader;
use segline::SegmentLineAnalyzer;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn,segline=info";

fn main() -> io::Result<()> {
    // Logs go to stderr so stdout carries only the result text.
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let mut reader = CoordinateReader::new(io::stdin().lock());
    let mut out = io::stdout().lock();
    run(&SegmentLineAnalyzer::new(), &mut reader, &mut out)
}

/// Builds the log filter from `RUST_LOG` directives, falling back to
/// [`DEFAULT_LOG_FILTER`].
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Runs one prompt/answer dialogue. Only I/O failures are returned; bad
/// input is reported on `out`.
fn run<R: BufRead, W: Write>(
    analyzer: &SegmentLineAnalyzer,
    reader: &mut CoordinateReader<R>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Line equation: {}", analyzer.line())?;
    writeln!(out, "Please enter coordinates of the line segment:")?;

    match read_segment(reader, out) {
        Ok([x1, y1, x2, y2]) => {
            writeln!(out, "\n--- Analysis Result ---")?;
            writeln!(out, "{}", analyzer.analyze_position(x1, y1, x2, y2))?;
        }
        Err(InputError::Io(err)) => return Err(err),
        Err(err) => {
            tracing::warn!(?err, "rejected segment input");
            writeln!(out, "{}", error_line(&err))?;
        }
    }
    out.flush()
}

/// Prompts for and reads `x1, y1, x2, y2` in order.
fn read_segment<R: BufRead, W: Write>(
    reader: &mut CoordinateReader<R>,
    out: &mut W,
) -> Result<[f64; 4], InputError> {
    let mut coords = [0.0; 4];
    for (slot, name) in coords.iter_mut().zip(["x1", "y1", "x2", "y2"]) {
        write!(out, "Enter {name}: ")?;
        out.flush()?;
        *slot = reader.next_coordinate()?;
    }
    Ok(coords)
}

fn error_line(err: &InputError) -> String {
    format!("Error: {err}")
}
