use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Policy for corpus lines that contain no tokens after whitespace splitting.
///
/// `Skip` drops such lines entirely; `Count` keeps them as empty documents,
/// so they raise the document total without touching any frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    #[default]
    Skip,
    Count,
}

/// Collect the corpus files for a path: the path itself if it points to a
/// file, otherwise every `.txt` file below it (sorted for reproducible runs).
/// Any entry the walk cannot read is an error, not a silently smaller corpus.
pub fn collect_files(path: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().map(|ext| ext == "txt").unwrap_or(false)
        {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Split one corpus line into its set of distinct tokens.
///
/// Tokens are separated by whitespace; repeats within the line collapse to
/// one. Returns `None` when the line has no tokens and the policy is `Skip`.
/// # Example
/// ```
/// use word_assoc::{BlankLines, line_to_document};
/// let doc = line_to_document("b a b", BlankLines::Skip).unwrap();
/// assert_eq!(doc.len(), 2);
/// assert!(line_to_document("   ", BlankLines::Skip).is_none());
/// assert!(line_to_document("   ", BlankLines::Count).unwrap().is_empty());
/// ```
pub fn line_to_document(line: &str, blank_lines: BlankLines) -> Option<BTreeSet<String>> {
    let words: BTreeSet<String> = line.split_whitespace().map(String::from).collect();
    if words.is_empty() && blank_lines == BlankLines::Skip {
        None
    } else {
        Some(words)
    }
}

/// Lazily turn a line source into per-document word sets, one document per
/// line. The iterator reads each line exactly once and never looks back;
/// a read error is yielded in place and should abort the run.
pub fn documents<R: BufRead>(
    reader: R,
    blank_lines: BlankLines,
) -> impl Iterator<Item = io::Result<BTreeSet<String>>> {
    reader.lines().filter_map(move |line| match line {
        Ok(line) => line_to_document(&line, blank_lines).map(Ok),
        Err(e) => Some(Err(e)),
    })
}
