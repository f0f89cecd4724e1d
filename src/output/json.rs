use super::Formatter;

/// One JSON object per line (`{"t":..,"x":..}`).
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_row(&self, _index: usize, t: f64, x: f64) -> String {
        serde_json::json!({ "t": t, "x": x }).to_string()
    }
}
