use super::Formatter;

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format_row(&self, index: usize, t: f64, x: f64) -> String {
        if self.verbose {
            format!("[{:>7}] t: {:>12.6} s  x: {:>12.6}", index, t, x)
        } else {
            format!("{:>12.6} {:>12.6}", t, x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_row() {
        let row = TextFormatter::new(false).format_row(3, 0.25, -1.5);
        assert_eq!(row, "    0.250000    -1.500000");
    }

    #[test]
    fn test_text_row_verbose_includes_index() {
        let row = TextFormatter::new(true).format_row(3, 0.25, -1.5);
        assert!(row.starts_with("[      3]"));
        assert!(row.contains("0.250000 s"));
    }
}
