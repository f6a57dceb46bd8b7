/// A single version line that was rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// 1-based line number in the document
    pub line_number: usize,
    pub old_line: String,
    pub new_line: String,
}

/// Tracks what a rewrite pass saw and changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Number of `module` lines encountered
    pub blocks_seen: usize,
    /// Number of blocks whose `source` line contained the substring
    pub blocks_matched: usize,
    /// Version lines whose text actually changed
    pub replacements: Vec<Replacement>,
    /// Version lines in matched blocks without a quoted value (1-based)
    pub skipped_lines: Vec<usize>,
    /// `module` lines seen while the previous block was still open (1-based)
    pub reopened_lines: Vec<usize>,
}

impl RewriteReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_block(&mut self) {
        self.blocks_seen += 1;
    }

    pub fn record_match(&mut self) {
        self.blocks_matched += 1;
    }

    pub fn add_replacement(&mut self, line_number: usize, old_line: &str, new_line: &str) {
        self.replacements.push(Replacement {
            line_number,
            old_line: old_line.to_string(),
            new_line: new_line.to_string(),
        });
    }

    pub fn add_skipped(&mut self, line_number: usize) {
        self.skipped_lines.push(line_number);
    }

    pub fn add_reopened(&mut self, line_number: usize) {
        self.reopened_lines.push(line_number);
    }

    /// Check if the pass changed nothing
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn total_replacements(&self) -> usize {
        self.replacements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_empty() {
        let report = RewriteReport::new();
        assert!(report.is_empty());
        assert_eq!(report.total_replacements(), 0);
    }

    #[test]
    fn records_replacements_and_counts() {
        let mut report = RewriteReport::new();
        report.record_block();
        report.record_match();
        report.add_replacement(3, "  version = \"1\"\n", "  version = \"2\"\n");
        report.add_skipped(4);
        report.add_reopened(6);

        assert!(!report.is_empty());
        assert_eq!(report.blocks_seen, 1);
        assert_eq!(report.blocks_matched, 1);
        assert_eq!(report.total_replacements(), 1);
        assert_eq!(report.replacements[0].line_number, 3);
        assert_eq!(report.skipped_lines, vec![4]);
        assert_eq!(report.reopened_lines, vec![6]);
    }
}
