use crate::error::{Result, TfmvError};
use std::fs;
use std::path::{Path, PathBuf};

/// A text file held as lines that keep their original terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
}

impl Document {
    /// Reads the whole file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|source| TfmvError::Read {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            lines: split_lines(&content),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns a document for the same path with different content.
    pub fn with_lines(&self, lines: Vec<String>) -> Self {
        Self {
            path: self.path.clone(),
            lines,
        }
    }

    pub fn render(&self) -> String {
        self.lines.concat()
    }

    /// Overwrites the file this document was loaded from. Returns the byte count written.
    pub fn save(&self) -> Result<usize> {
        let content = self.render();
        fs::write(&self.path, &content).map_err(|source| TfmvError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(content.len())
    }
}

/// Splits after every `\n`, so `\r\n` stays attached and a missing final
/// newline is preserved.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn split_keeps_terminators() {
        let lines = split_lines("a\r\nb\nc");
        assert_eq!(lines, vec!["a\r\n", "b\n", "c"]);
    }

    #[test]
    fn split_empty_content_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn load_and_save_round_trip_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("main.tf");
        let original = "module \"a\" {\r\n  source = \"x\"\r\n}";
        fs::write(&path, original).unwrap();

        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.lines().len(), 3);
        assert_eq!(doc.render(), original);

        let written = doc.save().unwrap();
        assert_eq!(written, original.len());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.tf");

        let err = Document::load(&path).unwrap_err();
        assert!(matches!(err, TfmvError::Read { .. }));
        assert!(err.to_string().contains("missing.tf"));
    }

    #[test]
    fn with_lines_keeps_path() {
        let doc = Document {
            path: PathBuf::from("main.tf"),
            lines: vec!["a\n".to_string()],
        };
        let replaced = doc.with_lines(vec!["b\n".to_string()]);
        assert_eq!(replaced.path(), Path::new("main.tf"));
        assert_eq!(replaced.render(), "b\n");
    }
}
