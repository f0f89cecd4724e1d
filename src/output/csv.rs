use super::Formatter;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_row(&self, _index: usize, t: f64, x: f64) -> String {
        format!("{},{}", t, x)
    }

    fn header(&self) -> Option<&'static str> {
        Some("t,x")
    }
}
