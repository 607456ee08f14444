//! Extraction of configuration text embedded in a source document.
//!
//! Configuration lives between magic comment delimiters: a line that is,
//! after trimming, one or more `%` characters followed by three or more `+`
//! characters and nothing else. Delimiters toggle an in-block flag — the
//! first opens a block, the next closes it, and an unterminated block
//! extends to the end of the document. Inside a block each line loses its
//! leading comment marker and the whitespace around it; everything else in
//! the document is ignored. No syntactic validation happens here.
//!
//! # Examples
//!
//! ```
//! use texseq::config::extract::extract_from_str;
//!
//! let doc = "\\documentclass{article}\n\
//!            % +++\n\
//!            % latex = \"xelatex\"\n\
//!            % +++\n\
//!            \\begin{document}\n";
//! assert_eq!(extract_from_str(doc), "latex = \"xelatex\"\n");
//! ```

use std::path::Path;

use anyhow::{Context as _, Result};

/// The comment marker of the supported document format.
pub const COMMENT_MARKER: char = '%';

/// Read `path` and extract the raw configuration text from its magic
/// comment blocks.
///
/// # Errors
///
/// Returns an error if the document cannot be read.
pub fn extract(path: &Path) -> Result<String> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    Ok(extract_from_str(&document))
}

/// Extract the raw configuration text from document content.
///
/// Lines inside consecutive blocks are concatenated, each with a trailing
/// newline, ready for the scanner.
#[must_use]
pub fn extract_from_str(document: &str) -> String {
    let mut raw = String::new();
    let mut inside = false;
    for line in document.lines() {
        if is_block_delimiter(line) {
            inside = !inside;
            continue;
        }
        if inside {
            raw.push_str(strip_comment_prefix(line));
            raw.push('\n');
        }
    }
    raw
}

/// Whether `line` is a block delimiter: `%`+, optional whitespace, three or
/// more `+`, optional whitespace, nothing else.
fn is_block_delimiter(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(COMMENT_MARKER) else {
        return false;
    };
    let body = rest.trim_start_matches(COMMENT_MARKER).trim();
    body.len() >= 3 && body.chars().all(|c| c == '+')
}

/// Strip the leading comment marker and the whitespace around it from a
/// block content line. Lines that carry no marker are only left-trimmed.
fn strip_comment_prefix(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(COMMENT_MARKER)
        .trim_start()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_single_block() {
        let doc = "preamble\n% +++\n% a = 1\n% b = 2\n% +++\nbody\n";
        assert_eq!(extract_from_str(doc), "a = 1\nb = 2\n");
    }

    #[test]
    fn lines_outside_blocks_are_ignored() {
        let doc = "a = 1\n% +++\n% b = 2\n% +++\nc = 3\n";
        assert_eq!(extract_from_str(doc), "b = 2\n");
    }

    #[test]
    fn no_block_yields_empty_text() {
        assert_eq!(extract_from_str("\\documentclass{article}\n"), "");
    }

    #[test]
    fn unterminated_block_extends_to_end_of_file() {
        let doc = "% +++\n% a = 1\n% b = 2\n";
        assert_eq!(extract_from_str(doc), "a = 1\nb = 2\n");
    }

    #[test]
    fn multiple_blocks_are_concatenated() {
        let doc = "% +++\n% a = 1\n% +++\ntext\n% +++\n% b = 2\n% +++\n";
        assert_eq!(extract_from_str(doc), "a = 1\nb = 2\n");
    }

    // -----------------------------------------------------------------------
    // Delimiter recognition
    // -----------------------------------------------------------------------

    #[test]
    fn delimiter_variants() {
        assert!(is_block_delimiter("% +++"));
        assert!(is_block_delimiter("%+++"));
        assert!(is_block_delimiter("%% ++++"));
        assert!(is_block_delimiter("  %  +++++  "));
    }

    #[test]
    fn too_few_plus_signs_is_not_a_delimiter() {
        assert!(!is_block_delimiter("% ++"));
    }

    #[test]
    fn trailing_content_disqualifies_a_delimiter() {
        assert!(!is_block_delimiter("% +++ config"));
        assert!(!is_block_delimiter("% +++-"));
    }

    #[test]
    fn missing_marker_is_not_a_delimiter() {
        assert!(!is_block_delimiter("+++"));
    }

    #[test]
    fn marker_and_whitespace_are_stripped_from_content() {
        let doc = "% +++\n%   a = 1\n   % b = 2\n% +++\n";
        assert_eq!(extract_from_str(doc), "a = 1\nb = 2\n");
    }

    #[test]
    fn content_line_without_marker_keeps_its_text() {
        let doc = "% +++\na = 1\n% +++\n";
        assert_eq!(extract_from_str(doc), "a = 1\n");
    }

    #[test]
    fn extract_reads_the_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.tex");
        std::fs::write(&path, "% +++\n% latex = \"xelatex\"\n% +++\n").unwrap();
        assert_eq!(extract(&path).unwrap(), "latex = \"xelatex\"\n");
    }

    #[test]
    fn extract_fails_for_a_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract(&dir.path().join("absent.tex")).is_err());
    }
}
