//! Row-oriented renderings of a signal for external plotting tools.

mod csv;
mod json;
mod summary;
mod text;

use std::io::{self, Write};

use crate::signal::Signal;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::summary::SignalSummary;
pub use self::text::TextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

pub trait Formatter: Send {
    fn format_row(&self, index: usize, t: f64, x: f64) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Write the optional header and one line per sample.
pub fn write_signal<W: Write>(
    formatter: &dyn Formatter,
    signal: &Signal,
    out: &mut W,
) -> io::Result<()> {
    if let Some(header) = formatter.header() {
        writeln!(out, "{}", header)?;
    }
    for (i, (t, x)) in signal.iter().enumerate() {
        writeln!(out, "{}", formatter.format_row(i, t, x))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_samples() -> Signal {
        Signal::new(vec![0.0, 0.5], vec![1.0, -1.0]).unwrap()
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        write_signal(&CsvFormatter, &two_samples(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "t,x\n0,1\n0.5,-1\n");
    }

    #[test]
    fn test_write_json_lines() {
        let mut out = Vec::new();
        write_signal(&JsonFormatter, &two_samples(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["t"], 0.5);
        assert_eq!(rows[1]["x"], -1.0);
    }

    #[test]
    fn test_create_formatter_text_has_no_header() {
        let formatter = create_formatter(OutputFormat::Text, false);
        assert!(formatter.header().is_none());
        let formatter = create_formatter(OutputFormat::Csv, false);
        assert_eq!(formatter.header(), Some("t,x"));
    }
}
