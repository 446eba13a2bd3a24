//! Splits free-form assessment text into labelled rows.

/// One `label: detail` line of an assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub detail: String,
}

/// Parses assessment text into rows, one per line that contains `": "`.
///
/// Each line is split once on the first delimiter; both halves are trimmed.
/// Blank lines and lines without the delimiter are dropped. Order follows the text.
pub fn parse_rows(text: &str) -> Vec<ReportRow> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let (label, detail) = line.split_once(": ")?;
            Some(ReportRow {
                label: label.trim().to_string(),
                detail: detail.trim().to_string(),
            })
        })
        .collect()
}

/// An assessment ready for display: the raw text plus its parsed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub raw: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn parse(text: impl Into<String>) -> Self {
        let raw = text.into();
        let rows = parse_rows(&raw);
        Self { raw, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, detail: &str) -> ReportRow {
        ReportRow {
            label: label.to_string(),
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_two_lines_two_rows() {
        assert_eq!(
            parse_rows("Diagnosis: Anxiety\nSymptoms: Insomnia"),
            vec![row("Diagnosis", "Anxiety"), row("Symptoms", "Insomnia")]
        );
    }

    #[test]
    fn test_line_without_delimiter_dropped() {
        assert_eq!(
            parse_rows("Assessment follows\nDiagnosis: Anxiety\nno colon here"),
            vec![row("Diagnosis", "Anxiety")]
        );
    }

    #[test]
    fn test_empty_and_blank_lines_dropped() {
        assert_eq!(
            parse_rows("\n\nDiagnosis: Anxiety\n   \n\nSymptoms: Insomnia\n"),
            vec![row("Diagnosis", "Anxiety"), row("Symptoms", "Insomnia")]
        );
    }

    #[test]
    fn test_colon_without_space_is_not_a_delimiter() {
        assert!(parse_rows("Time:10am").is_empty());
    }

    #[test]
    fn test_split_once_keeps_later_delimiters_in_detail() {
        assert_eq!(
            parse_rows("Plan: CBT: weekly: 12 sessions"),
            vec![row("Plan", "CBT: weekly: 12 sessions")]
        );
    }

    #[test]
    fn test_parts_are_trimmed() {
        assert_eq!(
            parse_rows("   Diagnosis :   Anxiety   "),
            vec![row("Diagnosis", "Anxiety")]
        );
    }

    #[test]
    fn test_trailing_delimiter_gives_empty_detail() {
        assert_eq!(parse_rows("Diagnosis: "), vec![row("Diagnosis", "")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            parse_rows("Diagnosis: Anxiety\r\nSymptoms: Insomnia\r\n"),
            vec![row("Diagnosis", "Anxiety"), row("Symptoms", "Insomnia")]
        );
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Intro\nDiagnosis: Anxiety\n\nSymptoms: Insomnia: nightly";
        assert_eq!(parse_rows(text), parse_rows(text));
    }

    #[test]
    fn test_report_keeps_raw_text() {
        let report = Report::parse("No assessment generated.");
        assert_eq!(report.raw, "No assessment generated.");
        assert!(report.rows.is_empty());
    }
}
