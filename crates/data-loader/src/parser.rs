//! Parser for the tab-separated dataset files.
//!
//! - trainingset.tsv: userId \t movieId \t interaction
//! - mappingLinkedData.tsv: movieId \t dbpediaUri
//!
//! Neither file has a header row.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::path::Path;

/// Read a file into its lines, mapping a missing file to `FileNotFound`
fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// File name used in error messages
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse the interactions file
///
/// Format: userId \t movieId \t interaction
pub fn parse_interactions(path: &Path) -> Result<Vec<Interaction>> {
    let file = file_label(path);
    let lines = read_lines(path)?;
    let mut interactions = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let mut parts = line_trimmed.split('\t');

        let user_id = parts.next().ok_or_else(|| DataLoadError::ParseError {
            file: file.clone(),
            line: line_no,
            reason: "Missing userId".to_string(),
        })?;

        let movie_id = parts.next().ok_or_else(|| DataLoadError::ParseError {
            file: file.clone(),
            line: line_no,
            reason: "Missing movieId".to_string(),
        })?;

        let value = parts.next().ok_or_else(|| DataLoadError::ParseError {
            file: file.clone(),
            line: line_no,
            reason: "Missing interaction".to_string(),
        })?;

        let interaction = Interaction {
            user_id: user_id.trim().parse().map_err(|e| DataLoadError::ParseError {
                file: file.clone(),
                line: line_no,
                reason: format!("Invalid userId: {}", e),
            })?,
            movie_id: movie_id.trim().parse().map_err(|e| DataLoadError::ParseError {
                file: file.clone(),
                line: line_no,
                reason: format!("Invalid movieId: {}", e),
            })?,
            value: value.trim().parse().map_err(|e| DataLoadError::ParseError {
                file: file.clone(),
                line: line_no,
                reason: format!("Invalid interaction: {}", e),
            })?,
        };

        interactions.push(interaction);
    }

    Ok(interactions)
}

/// Parse the linked-data mapping file
///
/// Format: movieId \t dbpediaUri
pub fn parse_mappings(path: &Path) -> Result<Vec<MovieLink>> {
    let file = file_label(path);
    let lines = read_lines(path)?;
    let mut movies = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let mut parts = line_trimmed.split('\t');

        let movie_id = parts.next().ok_or_else(|| DataLoadError::ParseError {
            file: file.clone(),
            line: line_no,
            reason: "Missing movieId".to_string(),
        })?;

        let uri = parts
            .next()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| DataLoadError::ParseError {
                file: file.clone(),
                line: line_no,
                reason: "Missing dbpedia uri".to_string(),
            })?;

        movies.push(MovieLink {
            id: movie_id.trim().parse().map_err(|e| DataLoadError::ParseError {
                file: file.clone(),
                line: line_no,
                reason: format!("Invalid movieId: {}", e),
            })?,
            uri: uri.to_string(),
        });
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_interactions() {
        let file = write_temp("10\t1\t1\n10\t2\t1\n\n11\t2\t1\n");
        let interactions = parse_interactions(file.path()).unwrap();

        assert_eq!(interactions.len(), 3);
        assert_eq!(interactions[0].user_id, 10);
        assert_eq!(interactions[1].movie_id, 2);
        assert_eq!(interactions[2].value, 1);
    }

    #[test]
    fn test_parse_interactions_reports_line() {
        let file = write_temp("10\t1\t1\n10\tabc\t1\n");
        let err = parse_interactions(file.path()).unwrap_err();

        match err {
            DataLoadError::ParseError { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("movieId"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_interactions_missing_field() {
        let file = write_temp("10\t1\n");
        assert!(matches!(
            parse_interactions(file.path()),
            Err(DataLoadError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_interactions_accepts_any_integer_value() {
        let file = write_temp("10\t1\t1\n10\t2\t2\n10\t3\t0\n");
        let interactions = parse_interactions(file.path()).unwrap();

        assert_eq!(interactions.len(), 3);
        assert_eq!(interactions[1].value, 2);
        assert_eq!(interactions[2].value, 0);
    }

    #[test]
    fn test_parse_interactions_rejects_non_integer_value() {
        let file = write_temp("10\t1\tyes\n");
        assert!(matches!(
            parse_interactions(file.path()),
            Err(DataLoadError::ParseError { line: 1, ref reason, .. }) if reason.contains("interaction")
        ));
    }

    #[test]
    fn test_parse_mappings() {
        let file = write_temp(
            "1\thttp://dbpedia.org/resource/Heat_(1995_film)\n2\thttp://dbpedia.org/resource/Alien_(film)\n",
        );
        let movies = parse_mappings(file.path()).unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[1].uri, "http://dbpedia.org/resource/Alien_(film)");
    }

    #[test]
    fn test_missing_file() {
        let result = parse_mappings(Path::new("/definitely/not/here.tsv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
