use super::report::RewriteReport;
use crate::error::Result;
use regex::{NoExpand, Regex};

/// Result of a rewrite pass: the new lines plus what changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub lines: Vec<String>,
    pub report: RewriteReport,
}

/// Rewrites `version = "..."` inside module blocks whose `source` line
/// contains a literal substring.
///
/// Blocks are detected with a flat heuristic: a block opens on any line whose
/// trimmed text starts with `module` and closes on the next line that is
/// exactly `}` once trimmed. Braces are not counted, so nested blocks close
/// the module early and a block with no standalone `}` stays open until EOF.
#[derive(Debug, Clone)]
pub struct LineRewriter {
    source_substring: String,
    new_version: String,
    version_line: Regex,
    version_value: Regex,
}

impl LineRewriter {
    pub fn new(
        source_substring: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            source_substring: source_substring.into(),
            new_version: new_version.into(),
            version_line: Regex::new(r"^\s*version\s*=")?,
            version_value: Regex::new(r#"version\s*=\s*".*""#)?,
        })
    }

    /// Runs the scan over `lines`. The output always has the same length and
    /// order as the input.
    pub fn rewrite<S: AsRef<str>>(&self, lines: &[S]) -> Rewrite {
        let replacement = format!(r#"version = "{}""#, self.new_version);
        let mut report = RewriteReport::new();
        let mut output = Vec::with_capacity(lines.len());

        let mut inside_block = false;
        let mut block_matched = false;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.starts_with("module") {
                if inside_block {
                    report.add_reopened(line_number);
                }
                inside_block = true;
                block_matched = false;
                report.record_block();
            }

            if inside_block
                && !block_matched
                && trimmed.starts_with("source")
                && trimmed.contains(self.source_substring.as_str())
            {
                block_matched = true;
                report.record_match();
            }

            let mut current = line.to_string();
            if inside_block && block_matched && self.version_line.is_match(line) {
                let replaced = self
                    .version_value
                    .replace_all(line, NoExpand(&replacement));
                if replaced == line {
                    if !self.version_value.is_match(line) {
                        report.add_skipped(line_number);
                    }
                } else {
                    report.add_replacement(line_number, line, &replaced);
                    current = replaced.into_owned();
                }
            }

            if inside_block && trimmed == "}" {
                inside_block = false;
            }

            output.push(current);
        }

        Rewrite {
            lines: output,
            report,
        }
    }
}

/// Convenience wrapper returning only the rewritten lines.
#[allow(dead_code)]
pub fn rewrite<S: AsRef<str>>(
    lines: &[S],
    source_substring: &str,
    new_version: &str,
) -> Result<Vec<String>> {
    let rewriter = LineRewriter::new(source_substring, new_version)?;
    Ok(rewriter.rewrite(lines).lines)
}
