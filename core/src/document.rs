#![deny(missing_docs)]

//! # Structural Documents
//!
//! Line-oriented representation of a registry file. Every patcher scans and
//! mutates a [`StructuralDocument`]; lines the patcher does not touch survive
//! byte-for-byte.
//!
//! Splitting on `\n` and rejoining with `\n` round-trips the content exactly.
//! A trailing newline becomes a trailing empty line, which rejoins to the
//! same trailing newline.

/// A target file's content as an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralDocument {
    lines: Vec<String>,
}

impl StructuralDocument {
    /// Parses file content into lines.
    pub fn parse(content: &str) -> Self {
        StructuralDocument {
            lines: content.split('\n').map(String::from).collect(),
        }
    }

    /// Serializes the document back to file content.
    pub fn serialize(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrows the lines for scanning.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Inserts a single line at `index`, shifting subsequent lines down.
    pub fn insert(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    /// Inserts a block of lines at `index`, preserving block order.
    pub fn insert_all(&mut self, index: usize, block: &[String]) {
        for (offset, line) in block.iter().enumerate() {
            self.lines.insert(index + offset, line.clone());
        }
    }

    /// Replaces the line at `index`.
    pub fn set(&mut self, index: usize, line: impl Into<String>) {
        self.lines[index] = line.into();
    }

    /// Replaces `count` lines starting at `start` with `replacement`.
    ///
    /// The replacement may be longer or shorter than the removed span.
    pub fn replace_span(&mut self, start: usize, count: usize, replacement: &[String]) {
        self.lines
            .splice(start..start + count, replacement.iter().cloned());
    }

    /// Appends a line at the end of the document.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_exact() {
        let content = "a\n  b\n\nc\n";
        let doc = StructuralDocument::parse(content);
        assert_eq!(doc.serialize(), content);
    }

    #[test]
    fn test_round_trip_no_trailing_newline() {
        let content = "a\nb";
        let doc = StructuralDocument::parse(content);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.serialize(), content);
    }

    #[test]
    fn test_insert_shifts_lines() {
        let mut doc = StructuralDocument::parse("a\nc");
        doc.insert(1, "b");
        assert_eq!(doc.serialize(), "a\nb\nc");
    }

    #[test]
    fn test_insert_all_preserves_block_order() {
        let mut doc = StructuralDocument::parse("start\nend");
        doc.insert_all(1, &["one".to_string(), "two".to_string()]);
        assert_eq!(doc.serialize(), "start\none\ntwo\nend");
    }

    #[test]
    fn test_replace_span_with_longer_block() {
        let mut doc = StructuralDocument::parse("a\nx\ny\nb");
        doc.replace_span(
            1,
            2,
            &["1".to_string(), "2".to_string(), "3".to_string()],
        );
        assert_eq!(doc.serialize(), "a\n1\n2\n3\nb");
    }

    #[test]
    fn test_replace_empty_span_inserts() {
        let mut doc = StructuralDocument::parse("a\nb");
        doc.replace_span(1, 0, &["mid".to_string()]);
        assert_eq!(doc.serialize(), "a\nmid\nb");
    }
}
