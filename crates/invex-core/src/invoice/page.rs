//! Normalized first-page text.

/// Rendered page text split into lines.
///
/// Trailing whitespace is stripped from every line and, optionally, blank
/// lines are dropped. `text()` rejoins the lines with each one terminated by
/// `\n`, so label patterns that read up to a line break also match on the
/// last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    lines: Vec<String>,
    text: String,
}

impl PageText {
    pub fn new(rendered: &str, skip_blank_lines: bool) -> Self {
        let lines: Vec<String> = rendered
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !skip_blank_lines || !line.trim().is_empty())
            .collect();

        let mut text = String::with_capacity(rendered.len() + 1);
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }

        Self { lines, text }
    }

    /// Line at `index`, if the page has that many lines.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped() {
        let page = PageText::new("\n\nACME Inc.  \n\n  Bill to:\n", true);
        assert_eq!(page.lines(), &["ACME Inc.".to_string(), "  Bill to:".to_string()]);
        assert_eq!(page.text(), "ACME Inc.\n  Bill to:\n");
    }

    #[test]
    fn test_blank_lines_kept() {
        let page = PageText::new("a\n\nb", false);
        assert_eq!(page.line_count(), 3);
        assert_eq!(page.line(1), Some(""));
        assert_eq!(page.text(), "a\n\nb\n");
    }

    #[test]
    fn test_crlf_and_empty() {
        let page = PageText::new("a\r\nb\r\n", true);
        assert_eq!(page.lines(), &["a".to_string(), "b".to_string()]);

        assert!(PageText::new("  \n\n", false).is_empty());
        assert_eq!(PageText::new("", true).line(0), None);
    }
}
