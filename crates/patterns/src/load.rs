//! Load: pattern definition files and directories.
//!
//! A definition file is plain UTF-8 text, one `NAME<whitespace>FRAGMENT`
//! per line. Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PatternLoadError;
use crate::library::{Pattern, PatternLibrary};

/// Load every regular file in `dir`, in file-name order.
///
/// A later file overrides definitions from an earlier one. Subdirectories
/// are not descended into.
pub fn load_dir(dir: &Path) -> Result<PatternLibrary, PatternLoadError> {
    if !dir.exists() {
        return Err(PatternLoadError::MissingDirectory(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(PatternLoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| PatternLoadError::io(dir, e))? {
        let entry = entry.map_err(|e| PatternLoadError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            tracing::trace!(path = %path.display(), "skipping subdirectory");
            continue;
        }
        files.push(path);
    }
    files.sort();

    let mut library = PatternLibrary::new();
    for file in &files {
        library.extend(load_file(file)?);
    }

    tracing::debug!(
        dir = %dir.display(),
        files = files.len(),
        patterns = library.len(),
        "loaded pattern directory"
    );
    Ok(library)
}

/// Load a single definition file.
pub fn load_file(path: &Path) -> Result<PatternLibrary, PatternLoadError> {
    let source = fs::read_to_string(path).map_err(|e| PatternLoadError::io(path, e))?;
    Ok(parse_definitions(&source, path)?.into_iter().collect())
}

/// Parse definition text. `origin` is only used for error reporting.
pub fn parse_definitions(source: &str, origin: &Path) -> Result<Vec<Pattern>, PatternLoadError> {
    let mut patterns = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = || PatternLoadError::MalformedLine {
            path: origin.to_path_buf(),
            line: idx + 1,
            content: line.to_string(),
        };

        let sep = line.find(char::is_whitespace).ok_or_else(malformed)?;
        let name = &line[..sep];
        let fragment = line[sep..].trim_start();
        if fragment.is_empty() {
            return Err(malformed());
        }

        patterns.push(Pattern::new(name, fragment));
    }

    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Vec<Pattern>, PatternLoadError> {
        parse_definitions(source, Path::new("inline"))
    }

    #[test]
    fn test_parse_simple_definitions() {
        let patterns = parse("WORD \\b\\w+\\b\nINT (?:[+-]?(?:[0-9]+))\n").unwrap();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0], Pattern::new("WORD", r"\b\w+\b"));
        assert_eq!(patterns[1], Pattern::new("INT", "(?:[+-]?(?:[0-9]+))"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let patterns = parse("# header\n\n   \n  # indented comment\nA a\n").unwrap();
        assert_eq!(patterns, vec![Pattern::new("A", "a")]);
    }

    #[test]
    fn test_parse_keeps_internal_whitespace() {
        let patterns = parse("ID\t  %{WORD}  -  %{INT}\n").unwrap();
        assert_eq!(patterns[0].name, "ID");
        assert_eq!(patterns[0].fragment, "%{WORD}  -  %{INT}");
    }

    #[test]
    fn test_parse_name_without_fragment_fails() {
        let err = parse("A a\nLONELY\nB b\n").unwrap_err();
        match err {
            PatternLoadError::MalformedLine { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "LONELY");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_trailing_whitespace_only_fails() {
        // trimmed to a bare name
        assert!(parse("LONELY   \n").is_err());
    }

    // ── Files and directories ───────────────────────────────────

    #[test]
    fn test_load_file_duplicate_names_last_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dups");
        fs::write(&path, "A first\nA second\n").unwrap();

        let library = load_file(&path).unwrap();
        assert_eq!(library.get("A"), Some("second"));
    }

    #[test]
    fn test_load_file_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, PatternLoadError::Io { .. }));
    }

    #[test]
    fn test_load_dir_file_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-later"), "X later\n").unwrap();
        fs::write(dir.path().join("a-early"), "X early\nY y\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let library = load_dir(dir.path()).unwrap();
        assert_eq!(library.get("X"), Some("later"));
        assert_eq!(library.get("Y"), Some("y"));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_load_dir_malformed_file_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good"), "A a\n").unwrap();
        fs::write(dir.path().join("bad"), "BROKEN\n").unwrap();

        assert!(matches!(
            load_dir(dir.path()),
            Err(PatternLoadError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_load_dir_rejects_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, "A a\n").unwrap();
        assert!(matches!(load_dir(&file), Err(PatternLoadError::NotADirectory(_))));
    }
}
