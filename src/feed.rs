//! Feature input: one JSON array of `[tag, value]` pairs per line.

use std::io::BufRead;

use namepick_core::NamepickError;

/// The names of one feature, in source order.
pub type Feature = Vec<(String, String)>;

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Feature>, NamepickError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| NamepickError::Input(format!("line {line_no}: {e}")))
}

/// Read every feature from `reader`, stopping at the first bad line.
pub fn read_features<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<Feature, NamepickError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => parse_line(idx + 1, &line).transpose(),
            Err(e) => Some(Err(NamepickError::Io(e))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_keeps_order() {
        let feature = parse_line(1, r#"[["uk", "U"], ["en", "E"], ["uk", "U2"]]"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            feature,
            vec![
                ("uk".to_string(), "U".to_string()),
                ("en".to_string(), "E".to_string()),
                ("uk".to_string(), "U2".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_line_blank_is_skipped() {
        assert!(parse_line(3, "   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_line_empty_feature() {
        assert_eq!(parse_line(1, "[]").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_parse_line_error_names_line() {
        let err = parse_line(7, r#"{"en": "E"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("input error: line 7:"), "got: {msg}");
    }

    #[test]
    fn test_read_features_skips_blank_lines() {
        let input = "[[\"en\", \"E\"]]\n\n[[\"fr\", \"F\"], [\"de\", \"D\"]]\n";
        let features: Vec<Feature> = read_features(input.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1][1].1, "D");
    }

    #[test]
    fn test_read_features_reports_bad_line_number() {
        let input = "[[\"en\", \"E\"]]\nnot json\n";
        let results: Vec<_> = read_features(input.as_bytes()).collect();
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }
}
