//! Score lists: final scores as comma-separated integers.
//!
//! Order and values are kept exactly as produced by a batch run.

use std::fs;
use std::path::Path;

use crate::error::ScoreListError;

/// Join scores with commas.
#[must_use]
pub fn format_scores(scores: &[u32]) -> String {
    scores
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a comma-separated list. Whitespace around entries is ignored and
/// blank input gives an empty list.
pub fn parse_scores(text: &str) -> Result<Vec<u32>, ScoreListError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.trim();
            entry.parse().map_err(|_| ScoreListError::Parse {
                index,
                value: entry.to_string(),
            })
        })
        .collect()
}

pub fn write_scores(path: impl AsRef<Path>, scores: &[u32]) -> Result<(), ScoreListError> {
    fs::write(path, format_scores(scores))?;
    Ok(())
}

pub fn read_scores(path: impl AsRef<Path>) -> Result<Vec<u32>, ScoreListError> {
    parse_scores(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_scores(&[12, 0, 7]), "12,0,7");
        assert_eq!(format_scores(&[]), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_scores("12,0,7").unwrap(), vec![12, 0, 7]);
        assert_eq!(parse_scores(" 3, 4 ,5\n").unwrap(), vec![3, 4, 5]);
        assert_eq!(parse_scores("  \n").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_scores("1,x,3").unwrap_err();
        match err {
            ScoreListError::Parse { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_scores("1,,3").is_err());
    }

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir()
            .join(format!("rust_climb_scores_{}.txt", std::process::id()));
        let scores = vec![40, 12, 0, 33];

        write_scores(&path, &scores).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "40,12,0,33");
        assert_eq!(read_scores(&path).unwrap(), scores);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_scores("/definitely/not/here/scores.txt").unwrap_err();
        assert!(matches!(err, ScoreListError::Io(_)));
    }
}
