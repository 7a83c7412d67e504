//! Attachment selection.

use serde::{Deserialize, Serialize};

/// One selected file: display name and size in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// Ordered set of files currently held by the file input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    files: Vec<FileEntry>,
}

impl FileSelection {
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Sum of all file sizes, saturating on overflow.
    pub fn total_bytes(&self) -> u64 {
        self.files
            .iter()
            .fold(0u64, |acc, f| acc.saturating_add(f.size_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_bytes() {
        let selection =
            FileSelection::new(vec![FileEntry::new("a.pdf", 10), FileEntry::new("b.pdf", 5)]);
        assert_eq!(selection.total_bytes(), 15);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_deserialize_size_key() {
        let entry: FileEntry = serde_json::from_str(r#"{"name":"scan.png","size":2048}"#).unwrap();
        assert_eq!(entry, FileEntry::new("scan.png", 2048));
    }
}
