use std::io::{BufRead, Write};

use anyhow::Context;

use crate::{
    format::format_number,
    loader,
    source::{self, NamedSource, SourceOutcome},
    stats::Summary,
};

const RULE: &str = "----------------------------------------";
const BANNER: &str = "========================================";

/// Terminal report: every named source, then one line of numbers typed by the
/// operator.
pub fn run<R, W>(sources: &[NamedSource], mut input: R, mut out: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{BANNER}")?;
    writeln!(out, "MEAN AND STANDARD DEVIATION")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;

    for (i, source) in sources.iter().enumerate() {
        writeln!(out, "TEST {} - {}:", i + 1, source.name)?;
        match source::process(source) {
            SourceOutcome::Computed(summary) => write_summary(&mut out, &summary)?,
            SourceOutcome::Created { reason } => {
                let path = source.path.display();
                writeln!(out, "Error: {reason}")?;
                writeln!(out, "Creating sample file {path}...")?;
                writeln!(out, "File {path} created. Please run the program again.")?;
            }
            SourceOutcome::Failed { reason } => writeln!(out, "Error: {reason}")?,
        }
    }

    writeln!(out, "TEST {} - manual input:", sources.len() + 1)?;
    write!(out, "Enter numbers separated by spaces (e.g. 1 2 3 4 5): ")?;
    out.flush().context("Error flushing prompt")?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => {
            if !line.ends_with('\n') {
                writeln!(out)?;
            }
            report_manual(&mut out, line.trim())?;
        }
        Err(err) => {
            tracing::warn!("Error reading manual input: {}", err);
            writeln!(out)?;
        }
    }

    writeln!(out, "Done!")?;
    out.flush().context("Error flushing report")
}

fn report_manual<W: Write>(out: &mut W, line: &str) -> anyhow::Result<()> {
    if line.is_empty() {
        return Ok(());
    }

    let list = loader::parse_numbers(line);
    if list.is_empty() {
        writeln!(out, "No valid numbers were entered.")?;
        return Ok(());
    }

    write_summary(out, &Summary::of(&list))
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary) -> anyhow::Result<()> {
    writeln!(out, "Results:")?;
    writeln!(out, "Count: {}", summary.count)?;
    writeln!(out, "Mean: {}", format_number(summary.mean))?;
    writeln!(out, "Standard deviation: {}", format_number(summary.std_dev))?;
    writeln!(out, "{RULE}")?;
    Ok(())
}
