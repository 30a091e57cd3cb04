use std::io::Write;

use crate::error::AppResult;
use crate::http::FetchRun;

/// Separator printed between per-URL rows and the total.
const SEPARATOR: &str = "----------";

/// Renders the report: one row per URL in recorded order, a separator, then
/// the total wall-clock time.
#[must_use]
pub fn report_lines(run: &FetchRun) -> Vec<String> {
    let mut lines = Vec::with_capacity(run.timings.len().saturating_add(2));
    for timing in run.timings.iter() {
        lines.push(format!(
            "'{}': {:5.2} sec.",
            timing.url,
            timing.elapsed.as_secs_f64()
        ));
    }
    lines.push(SEPARATOR.to_owned());
    lines.push(format!("total time: {:.6}", run.total.as_secs_f64()));
    lines
}

/// Writes the report to standard output.
///
/// # Errors
///
/// Returns an error when standard output cannot be written.
pub fn print_report(run: &FetchRun) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, run)
}

pub(crate) fn write_report<W>(out: &mut W, run: &FetchRun) -> AppResult<()>
where
    W: Write,
{
    for line in report_lines(run) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
