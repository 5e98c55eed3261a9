use std::io::Write;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::core::stats::AssemblyStats;

/// Render statistics in the requested format
///
/// # Errors
///
/// Returns an error if writing fails or JSON serialization fails.
pub fn write<W: Write>(
    out: &mut W,
    input: &Path,
    stats: &AssemblyStats,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, input, stats)?,
        OutputFormat::Json => write_json(out, stats)?,
        OutputFormat::Tsv => write_tsv(out, stats)?,
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, input: &Path, stats: &AssemblyStats) -> std::io::Result<()> {
    writeln!(out, "Assembly Statistics")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "\nInput: {}", input.display())?;
    for (key, value) in stats.entries() {
        writeln!(out, "  {key}: {value}")?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, stats: &AssemblyStats) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(stats)?)?;
    Ok(())
}

fn write_tsv<W: Write>(out: &mut W, stats: &AssemblyStats) -> std::io::Result<()> {
    let entries = stats.entries();
    let keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
    let values: Vec<String> = entries.iter().map(|(_, value)| value.to_string()).collect();
    writeln!(out, "{}", keys.join("\t"))?;
    writeln!(out, "{}", values.join("\t"))?;
    Ok(())
}
