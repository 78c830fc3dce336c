//! Section parser for the restricted INI dialect used by help files.
//!
//! The dialect has sections only, no key=value pairs and no nesting. Each
//! line is trimmed of surrounding whitespace and then classified: blank
//! lines and `#` comments are dropped, `[name]` starts a section, anything
//! else is a content line belonging to the current section. Content before
//! the first section header is silently discarded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::corpus::{ParsedCorpus, SectionMap};
use crate::core::errors::{HelpgenError, Result};

/// Parse every file in `paths` into a corpus keyed by base filename.
///
/// Files are processed in the order given so that base-name collisions
/// resolve deterministically (last one wins). A file that cannot be opened
/// is fatal; nothing is silently skipped.
pub fn parse_help_files(paths: &[PathBuf]) -> Result<ParsedCorpus> {
    let mut corpus = ParsedCorpus::new();

    for path in paths {
        let sections = parse_file(path)?;
        let basename = basename_of(path)?;

        debug!("Parsed: {} ({} sections found)", path.display(), sections.len());

        if corpus.insert_file(basename.clone(), sections) {
            warn!(
                "Help file base name '{basename}' appears more than once; \
                 keeping the last occurrence ({})",
                path.display()
            );
        }
    }

    Ok(corpus)
}

/// Parse a single help file into its ordered section map.
fn parse_file(path: &Path) -> Result<SectionMap> {
    let file = File::open(path).map_err(|e| {
        HelpgenError::io(format!("Cannot open help file {}", path.display()), e)
    })?;

    parse_sections(BufReader::new(file), path)
}

/// Parse section content from any line source.
fn parse_sections<R: BufRead>(reader: R, path: &Path) -> Result<SectionMap> {
    let mut raw: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut current: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| {
            HelpgenError::io(
                format!("Read error in {} at line {}", path.display(), index + 1),
                e,
            )
        })?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            if raw.contains_key(name) {
                // Deliberate restart: a repeated header discards what was
                // accumulated for that section so far.
                warn!(
                    "Repeated section header [{name}] in {} at line {}; \
                     restarting section content",
                    path.display(),
                    index + 1
                );
            }
            raw.insert(name.to_string(), Vec::new());
            current = Some(name.to_string());
        } else if let Some(section) = &current {
            if let Some(lines) = raw.get_mut(section) {
                lines.push(line.to_string());
            }
        }
        // Content before the first header falls through and is dropped.
    }

    Ok(raw
        .into_iter()
        .map(|(name, lines)| (name, lines.join("\n")))
        .collect())
}

fn basename_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            HelpgenError::validation(format!("Path has no file name: {}", path.display()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn parse_str(input: &str) -> SectionMap {
        parse_sections(Cursor::new(input), Path::new("test.txt")).unwrap()
    }

    #[test]
    fn parses_sections_and_joins_lines() {
        let sections = parse_str(
            "[general]\n\
             Hello world\n\
             [details]\n\
             Line one\n\
             Line two\n",
        );

        assert_eq!(sections.len(), 2);
        assert_eq!(sections["general"], "Hello world");
        assert_eq!(sections["details"], "Line one\nLine two");
    }

    #[test]
    fn comments_and_blank_lines_are_dropped() {
        let sections = parse_str(
            "# leading comment\n\
             \n\
             [general]\n\
             # inside a section\n\
             kept line\n\
             \n\
             also kept\n",
        );

        assert_eq!(sections["general"], "kept line\nalso kept");
    }

    #[test]
    fn content_before_first_header_is_discarded() {
        let sections = parse_str(
            "stray line\n\
             another stray\n\
             [general]\n\
             real content\n",
        );

        assert_eq!(sections.len(), 1);
        assert_eq!(sections["general"], "real content");
    }

    #[test]
    fn comment_only_file_has_zero_sections() {
        let sections = parse_str("# just a comment\n\n# another\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn repeated_header_restarts_accumulation() {
        let sections = parse_str(
            "[general]\n\
             first version\n\
             [other]\n\
             middle\n\
             [general]\n\
             second version\n",
        );

        // The restart discards previously accumulated lines; the section
        // keeps its original position in the map.
        assert_eq!(sections["general"], "second version");
        assert_eq!(sections["other"], "middle");
        let names: Vec<&String> = sections.keys().collect();
        assert_eq!(names, vec!["general", "other"]);
    }

    #[test]
    fn content_lines_are_trimmed() {
        let sections = parse_str("[general]\n   indented line   \n");
        assert_eq!(sections["general"], "indented line");
    }

    #[test]
    fn bracket_only_line_is_content_not_header() {
        let sections = parse_str("[general]\n[\n]\n");
        assert_eq!(sections["general"], "[\n]");
    }

    #[test]
    fn empty_section_name_is_allowed() {
        let sections = parse_str("[]\ncontent\n");
        assert_eq!(sections[""], "content");
    }

    #[test]
    fn corpus_keyed_by_basename_last_wins() {
        let dir = tempdir().unwrap();
        let sub_a = dir.path().join("a");
        let sub_b = dir.path().join("b");
        fs::create_dir_all(&sub_a).unwrap();
        fs::create_dir_all(&sub_b).unwrap();

        let first = sub_a.join("help-dup.txt");
        let second = sub_b.join("help-dup.txt");
        fs::write(&first, "[general]\nfrom a\n").unwrap();
        fs::write(&second, "[general]\nfrom b\n").unwrap();

        let corpus = parse_help_files(&[first, second]).unwrap();
        assert_eq!(corpus.file_count(), 1);
        assert_eq!(corpus.get("help-dup.txt").unwrap()["general"], "from b");
    }

    #[test]
    fn unopenable_file_is_fatal() {
        let missing = PathBuf::from("/nonexistent/help-missing.txt");
        let err = parse_help_files(&[missing]).unwrap_err();
        assert!(matches!(err, HelpgenError::Io { .. }));
    }
}
